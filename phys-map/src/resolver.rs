// SPDX-License-Identifier: MIT
use core::ptr;

use log::{debug, error, trace, warn};

use crate::error::PhysMapError;
use crate::proc_gen::ProcGen;
use crate::region::RegionType;
use crate::table::PhysMapInfo;

//--------------------------------------------------------------------------------------------------
// Public definitions
//--------------------------------------------------------------------------------------------------
/// Resolves regions against the address map of one hardware generation.
///
/// Starts unselected; [`PhysMap::select`] picks the table once during bring-up and the handle is
/// then copied to whoever needs to look regions up.
#[derive(Copy, Clone, Debug, Default)]
pub struct PhysMap {
    info: Option<&'static PhysMapInfo>,
}

/// A region as seen by one chip.
#[derive(Copy, Clone, Debug, Eq, PartialEq)]
pub struct MappedRegion {
    pub addr: u64,
    pub size: u64,
}

//--------------------------------------------------------------------------------------------------
// Public code
//--------------------------------------------------------------------------------------------------
impl PhysMap {
    /// An unselected resolver. Every lookup on it fails.
    pub const fn new() -> Self {
        Self { info: None }
    }

    pub const fn with_info(info: &'static PhysMapInfo) -> Self {
        Self { info: Some(info) }
    }

    /// Selects the address map for `gen`.
    ///
    /// Unsupported generations leave the resolver unselected. Once a map is selected, later calls
    /// keep it.
    pub fn select(&mut self, gen: ProcGen) {
        let Some(info) = assign(gen) else {
            return;
        };

        match self.info {
            None => self.info = Some(info),
            Some(current) => keep_current(current, info, gen),
        }
    }

    pub const fn info(&self) -> Option<&'static PhysMapInfo> {
        self.info
    }

    pub const fn is_selected(&self) -> bool {
        self.info.is_some()
    }

    /// Looks up instance `index` of `region` on chip `chip_id`.
    ///
    /// The chip offset is added without overflow checks: a chip id that does not fit above the
    /// table's chip select shift yields a garbage address.
    pub fn try_resolve(
        &self,
        chip_id: u32,
        region: RegionType,
        index: u32,
    ) -> Result<MappedRegion, PhysMapError> {
        let info = self.info.ok_or(PhysMapError::Unselected { region, index })?;
        let entry = info.find(region, index).ok_or(PhysMapError::NoEntry {
            table: info.name(),
            region,
            index,
        })?;

        let addr = entry.offset().wrapping_add(info.chip_offset(chip_id));

        trace!(
            "Assigning BAR [{:x}] type:{:02} index:{:x} {:#018x} for {:#018x}",
            chip_id,
            region.id(),
            index,
            addr,
            entry.size()
        );

        Ok(MappedRegion {
            addr,
            size: entry.size(),
        })
    }

    /// Like [`PhysMap::try_resolve`], for callers that cannot go on without the region.
    ///
    /// # Panics
    ///
    /// If no map is selected or the map has no such region. Both are firmware bugs.
    pub fn resolve(&self, chip_id: u32, region: RegionType, index: u32) -> MappedRegion {
        match self.try_resolve(chip_id, region, index) {
            Ok(mapped) => mapped,
            Err(err) => fatal(err),
        }
    }
}

impl MappedRegion {
    /// Exclusive end address.
    pub const fn end(&self) -> u64 {
        self.addr.wrapping_add(self.size)
    }
}

//--------------------------------------------------------------------------------------------------
// Private code
//--------------------------------------------------------------------------------------------------
/// The map `gen` should use, announcing the choice.
pub(crate) fn assign(gen: ProcGen) -> Option<&'static PhysMapInfo> {
    let info = gen.phys_map();
    debug!(
        "Assigning physical memory map table for {}",
        info.map_or("unused", PhysMapInfo::name)
    );

    info
}

/// A second selection never replaces the first.
pub(crate) fn keep_current(
    current: &'static PhysMapInfo,
    requested: &'static PhysMapInfo,
    gen: ProcGen,
) {
    if !ptr::eq(current, requested) {
        warn!(
            "Physical memory map table {} already assigned, ignoring {} table {}",
            current.name(),
            gen,
            requested.name()
        );
    }
}

pub(crate) fn fatal(err: PhysMapError) -> ! {
    error!("ERROR: Failed to lookup BAR type:{} index:{}", err.region().id(), err.index());
    panic!("{}", err)
}
