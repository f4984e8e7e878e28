// SPDX-License-Identifier: MIT
#[cfg(feature = "nimbus")]
pub mod nimbus;

use core::iter::FusedIterator;
use core::slice;

use crate::region::RegionType;

//--------------------------------------------------------------------------------------------------
// Public definitions
//--------------------------------------------------------------------------------------------------
/// One region of a chip's slice of the address map.
#[derive(Copy, Clone, Debug, Eq, PartialEq)]
pub struct MapEntry {
    region: RegionType,
    index: u32,
    offset: u64,
    size: u64,
}

/// The address map of one hardware generation.
///
/// The entry table must end with exactly one [`MapEntry::TERMINATOR`]. Construction is a `const
/// fn` that rejects malformed tables, so a bad table in a `static` fails the build.
#[derive(Debug)]
pub struct PhysMapInfo {
    name: &'static str,
    chip_select_shift: u32,
    table: &'static [MapEntry],
}

/// Iterator over the entries of a table, up to (excluding) the terminator.
#[derive(Clone, Debug)]
pub struct Entries<'a> {
    inner: slice::Iter<'a, MapEntry>,
}

//--------------------------------------------------------------------------------------------------
// Public code
//--------------------------------------------------------------------------------------------------
impl MapEntry {
    /// The entry closing every table.
    pub const TERMINATOR: MapEntry = MapEntry::new(RegionType::NullMap, 0, 0, 0);

    pub const fn new(region: RegionType, index: u32, offset: u64, size: u64) -> Self {
        Self {
            region,
            index,
            offset,
            size,
        }
    }

    pub const fn region(&self) -> RegionType {
        self.region
    }

    pub const fn index(&self) -> u32 {
        self.index
    }

    /// Offset inside a chip's slice, before the chip select bits are applied.
    pub const fn offset(&self) -> u64 {
        self.offset
    }

    pub const fn size(&self) -> u64 {
        self.size
    }

    /// Exclusive end offset of the region.
    pub const fn end(&self) -> u64 {
        self.offset + self.size
    }

    pub const fn is_terminator(&self) -> bool {
        self.region.is_terminator()
    }

    /// Whether this entry answers a lookup for `(region, index)`.
    pub fn matches(&self, region: RegionType, index: u32) -> bool {
        !self.is_terminator() && self.region == region && self.index == index
    }
}

impl PhysMapInfo {
    /// Creates a table description.
    ///
    /// # Panics
    ///
    /// - `chip_select_shift` is 64 or more.
    /// - The table does not end with exactly one terminator.
    /// - A non-terminator entry has a zero size.
    /// - Two non-reserved entries share the same `(region, index)`.
    pub const fn new(name: &'static str, chip_select_shift: u32, table: &'static [MapEntry]) -> Self {
        assert!(chip_select_shift < u64::BITS, "chip select shift out of range");
        validate(table);

        Self {
            name,
            chip_select_shift,
            table,
        }
    }

    pub const fn name(&self) -> &'static str {
        self.name
    }

    /// Bit position of the chip id in a physical address.
    pub const fn chip_select_shift(&self) -> u32 {
        self.chip_select_shift
    }

    /// The base of `chip_id`'s slice of the address space.
    ///
    /// Bits of `chip_id` shifted past bit 63 are lost; the caller keeps chip ids inside the range
    /// the shift allows.
    pub const fn chip_offset(&self, chip_id: u32) -> u64 {
        (chip_id as u64) << self.chip_select_shift
    }

    pub fn entries(&self) -> Entries<'_> {
        Entries {
            inner: self.table.iter(),
        }
    }

    /// First entry matching `(region, index)`.
    pub fn find(&self, region: RegionType, index: u32) -> Option<&MapEntry> {
        self.entries().find(|e| e.matches(region, index))
    }
}

impl<'a> Iterator for Entries<'a> {
    type Item = &'a MapEntry;

    fn next(&mut self) -> Option<Self::Item> {
        self.inner.next().filter(|entry| !entry.is_terminator())
    }
}

// the terminator is always the last slot, so nothing follows it
impl FusedIterator for Entries<'_> {}

//--------------------------------------------------------------------------------------------------
// Private code
//--------------------------------------------------------------------------------------------------
const fn validate(table: &[MapEntry]) {
    assert!(!table.is_empty(), "address map table is empty");
    assert!(
        table[table.len() - 1].is_terminator(),
        "address map table does not end with a terminator"
    );

    let last = table.len() - 1;
    let mut i = 0;
    while i < last {
        let entry = &table[i];
        assert!(!entry.is_terminator(), "terminator before the end of the address map table");
        assert!(entry.size > 0, "zero-sized entry in address map table");

        if !entry.region.is_reserved() {
            let mut j = i + 1;
            while j < last {
                let other = &table[j];
                assert!(
                    other.region as u8 != entry.region as u8 || other.index != entry.index,
                    "duplicate (region, index) in address map table"
                );
                j += 1;
            }
        }

        i += 1;
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    static SMALL: [MapEntry; 4] = [
        MapEntry::new(RegionType::SystemMem, 0, 0x0, 0x1000),
        MapEntry::new(RegionType::Resv, 0, 0x1000, 0x1000),
        MapEntry::new(RegionType::Xscom, 0, 0x2000, 0x1000),
        MapEntry::TERMINATOR,
    ];

    #[test]
    fn entries_stop_at_terminator() {
        let info = PhysMapInfo::new("small", 8, &SMALL);
        let regions: Vec<_> = info.entries().map(|e| e.region()).collect();
        assert_eq!(
            regions,
            [RegionType::SystemMem, RegionType::Resv, RegionType::Xscom]
        );
    }

    #[test]
    fn find_never_matches_terminator() {
        let info = PhysMapInfo::new("small", 8, &SMALL);
        assert!(info.find(RegionType::NullMap, 0).is_none());
        assert_eq!(info.find(RegionType::Xscom, 0).map(|e| e.offset()), Some(0x2000));
        assert!(info.find(RegionType::Xscom, 1).is_none());
    }

    #[test]
    fn chip_offset_places_chip_id_at_shift() {
        let info = PhysMapInfo::new("small", 8, &SMALL);
        assert_eq!(info.chip_offset(0), 0);
        assert_eq!(info.chip_offset(3), 0x300);
    }

    #[test]
    fn reserved_entries_may_repeat() {
        static TABLE: [MapEntry; 3] = [
            MapEntry::new(RegionType::Resv, 0, 0x0, 0x10),
            MapEntry::new(RegionType::Resv, 0, 0x10, 0x10),
            MapEntry::TERMINATOR,
        ];
        let info = PhysMapInfo::new("resv", 8, &TABLE);
        assert_eq!(info.entries().count(), 2);
    }

    #[test]
    #[should_panic(expected = "does not end with a terminator")]
    fn rejects_missing_terminator() {
        static TABLE: [MapEntry; 1] = [MapEntry::new(RegionType::SystemMem, 0, 0x0, 0x10)];
        PhysMapInfo::new("bad", 8, &TABLE);
    }

    #[test]
    #[should_panic(expected = "terminator before the end")]
    fn rejects_early_terminator() {
        static TABLE: [MapEntry; 3] = [
            MapEntry::TERMINATOR,
            MapEntry::new(RegionType::SystemMem, 0, 0x0, 0x10),
            MapEntry::TERMINATOR,
        ];
        PhysMapInfo::new("bad", 8, &TABLE);
    }

    #[test]
    #[should_panic(expected = "duplicate (region, index)")]
    fn rejects_duplicate_keys() {
        static TABLE: [MapEntry; 3] = [
            MapEntry::new(RegionType::Xscom, 0, 0x0, 0x10),
            MapEntry::new(RegionType::Xscom, 0, 0x10, 0x10),
            MapEntry::TERMINATOR,
        ];
        PhysMapInfo::new("bad", 8, &TABLE);
    }

    #[test]
    #[should_panic(expected = "zero-sized entry")]
    fn rejects_zero_size() {
        static TABLE: [MapEntry; 2] = [
            MapEntry::new(RegionType::Xscom, 0, 0x0, 0),
            MapEntry::TERMINATOR,
        ];
        PhysMapInfo::new("bad", 8, &TABLE);
    }

    #[test]
    #[should_panic(expected = "chip select shift out of range")]
    fn rejects_wide_shift() {
        PhysMapInfo::new("bad", 64, &SMALL);
    }
}
