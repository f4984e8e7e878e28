// SPDX-License-Identifier: MIT
//! The POWER9 scale-out ("nimbus") address map.
//!
//! Each chip owns a 4TB slice selected by the chip id at bit 42. MMIO lives at
//! `0x0006_0000_0000_0000` within the slice and is fully tiled by the entries below, reserved
//! holes included.

use crate::region::RegionType::*;
use crate::table::{MapEntry, PhysMapInfo};

//--------------------------------------------------------------------------------------------------
// Public definitions
//--------------------------------------------------------------------------------------------------
pub static PHYS_MAP_NIMBUS: PhysMapInfo = PhysMapInfo::new("nimbus", 42, &PHYS_MAP_TABLE_NIMBUS);

//--------------------------------------------------------------------------------------------------
// Private definitions
//--------------------------------------------------------------------------------------------------
#[rustfmt::skip]
const PHYS_MAP_TABLE_NIMBUS: [MapEntry; 76] = [
    // system memory up to 4TB, minus the GPU windows carved from its top
    MapEntry::new(SystemMem,    0, 0x0000_0000_0000_0000, 0x0000_0340_0000_0000),
    MapEntry::new(GpuMem4TDown, 5, 0x0000_0340_0000_0000, 0x0000_0020_0000_0000),
    MapEntry::new(GpuMem4TDown, 4, 0x0000_0360_0000_0000, 0x0000_0020_0000_0000),
    MapEntry::new(GpuMem4TDown, 3, 0x0000_0380_0000_0000, 0x0000_0020_0000_0000),
    MapEntry::new(GpuMem4TDown, 2, 0x0000_03a0_0000_0000, 0x0000_0020_0000_0000),
    MapEntry::new(GpuMem4TDown, 1, 0x0000_03c0_0000_0000, 0x0000_0020_0000_0000),
    MapEntry::new(GpuMem4TDown, 0, 0x0000_03e0_0000_0000, 0x0000_0020_0000_0000),
    // GPU windows growing up from 4TB, four GPUs at most
    MapEntry::new(GpuMem4TUp,   0, 0x0000_0400_0000_0000, 0x0000_0020_0000_0000),
    MapEntry::new(GpuMem4TUp,   1, 0x0000_0420_0000_0000, 0x0000_0020_0000_0000),
    MapEntry::new(GpuMem4TUp,   2, 0x0000_0440_0000_0000, 0x0000_0020_0000_0000),
    MapEntry::new(GpuMem4TUp,   3, 0x0000_0460_0000_0000, 0x0000_0020_0000_0000),

    // MMIO, 0TB in
    MapEntry::new(Phb4Mmio64,   0, 0x0006_0000_0000_0000, 0x0000_0040_0000_0000),
    MapEntry::new(Phb4Mmio64,   1, 0x0006_0040_0000_0000, 0x0000_0040_0000_0000),
    MapEntry::new(Phb4Mmio64,   2, 0x0006_0080_0000_0000, 0x0000_0040_0000_0000),
    MapEntry::new(Phb4Mmio32,   0, 0x0006_00c0_0000_0000, 0x0000_0000_8000_0000),
    MapEntry::new(Phb4Mmio32,   1, 0x0006_00c0_8000_0000, 0x0000_0000_8000_0000),
    MapEntry::new(Phb4Mmio32,   2, 0x0006_00c1_0000_0000, 0x0000_0000_8000_0000),
    MapEntry::new(Phb4Mmio32,   3, 0x0006_00c1_8000_0000, 0x0000_0000_8000_0000),
    MapEntry::new(Phb4Mmio32,   4, 0x0006_00c2_0000_0000, 0x0000_0000_8000_0000),
    MapEntry::new(Phb4Mmio32,   5, 0x0006_00c2_8000_0000, 0x0000_0000_8000_0000),
    MapEntry::new(Phb4XiveEsb,  0, 0x0006_00c3_0000_0000, 0x0000_0000_2000_0000),
    MapEntry::new(Phb4XiveEsb,  1, 0x0006_00c3_2000_0000, 0x0000_0000_2000_0000),
    MapEntry::new(Phb4XiveEsb,  2, 0x0006_00c3_4000_0000, 0x0000_0000_2000_0000),
    MapEntry::new(Phb4XiveEsb,  3, 0x0006_00c3_6000_0000, 0x0000_0000_2000_0000),
    MapEntry::new(Phb4XiveEsb,  4, 0x0006_00c3_8000_0000, 0x0000_0000_2000_0000),
    MapEntry::new(Phb4XiveEsb,  5, 0x0006_00c3_a000_0000, 0x0000_0000_2000_0000),
    MapEntry::new(Phb4RegSpc,   0, 0x0006_00c3_c000_0000, 0x0000_0000_0010_0000),
    MapEntry::new(Phb4RegSpc,   1, 0x0006_00c3_c010_0000, 0x0000_0000_0010_0000),
    MapEntry::new(Phb4RegSpc,   2, 0x0006_00c3_c020_0000, 0x0000_0000_0010_0000),
    MapEntry::new(Phb4RegSpc,   3, 0x0006_00c3_c030_0000, 0x0000_0000_0010_0000),
    MapEntry::new(Phb4RegSpc,   4, 0x0006_00c3_c040_0000, 0x0000_0000_0010_0000),
    MapEntry::new(Phb4RegSpc,   5, 0x0006_00c3_c050_0000, 0x0000_0000_0010_0000),
    MapEntry::new(Resv,         0, 0x0006_00c3_c060_0000, 0x0000_000c_3fa0_0000),
    MapEntry::new(NpuOcapiMmio, 0, 0x0006_00d0_0000_0000, 0x0000_0008_0000_0000),
    MapEntry::new(NpuOcapiMmio, 1, 0x0006_00d8_0000_0000, 0x0000_0008_0000_0000),
    MapEntry::new(NpuOcapiMmio, 2, 0x0006_00e0_0000_0000, 0x0000_0008_0000_0000),
    MapEntry::new(NpuOcapiMmio, 3, 0x0006_00e8_0000_0000, 0x0000_0008_0000_0000),
    MapEntry::new(NpuOcapiMmio, 4, 0x0006_00f0_0000_0000, 0x0000_0008_0000_0000),
    MapEntry::new(NpuOcapiMmio, 5, 0x0006_00f8_0000_0000, 0x0000_0008_0000_0000),

    // MMIO, 1TB in
    MapEntry::new(XiveVc,       0, 0x0006_0100_0000_0000, 0x0000_0080_0000_0000),
    MapEntry::new(XivePc,       0, 0x0006_0180_0000_0000, 0x0000_0010_0000_0000),
    MapEntry::new(VasUserWin,   0, 0x0006_0190_0000_0000, 0x0000_0001_0000_0000),
    MapEntry::new(VasHypWin,    0, 0x0006_0191_0000_0000, 0x0000_0000_0200_0000),
    MapEntry::new(Resv,         1, 0x0006_0191_0200_0000, 0x0000_0000_1e00_0000),
    MapEntry::new(OcabXiveEsb,  0, 0x0006_0191_2000_0000, 0x0000_0000_2000_0000),
    MapEntry::new(Resv,         3, 0x0006_0191_4000_0000, 0x0000_006e_c000_0000),

    // MMIO, 2TB in
    MapEntry::new(Phb4Mmio64,   3, 0x0006_0200_0000_0000, 0x0000_0040_0000_0000),
    MapEntry::new(Phb4Mmio64,   4, 0x0006_0240_0000_0000, 0x0000_0040_0000_0000),
    MapEntry::new(Phb4Mmio64,   5, 0x0006_0280_0000_0000, 0x0000_0040_0000_0000),
    MapEntry::new(Resv,         4, 0x0006_02c0_0000_0000, 0x0000_0040_0000_0000),

    // MMIO, 3TB in
    MapEntry::new(LpcBus,       0, 0x0006_0300_0000_0000, 0x0000_0001_0000_0000),
    MapEntry::new(FspMmio,      0, 0x0006_0301_0000_0000, 0x0000_0001_0000_0000),
    MapEntry::new(NpuRegs,      0, 0x0006_0302_0000_0000, 0x0000_0000_0100_0000),
    MapEntry::new(NpuUsr,       0, 0x0006_0302_0100_0000, 0x0000_0000_0020_0000),
    MapEntry::new(NpuPhy,       0, 0x0006_0302_0120_0000, 0x0000_0000_0020_0000),
    MapEntry::new(NpuPhy,       1, 0x0006_0302_0140_0000, 0x0000_0000_0020_0000),
    MapEntry::new(NpuNtl,       0, 0x0006_0302_0160_0000, 0x0000_0000_0002_0000),
    MapEntry::new(NpuNtl,       1, 0x0006_0302_0162_0000, 0x0000_0000_0002_0000),
    MapEntry::new(NpuNtl,       2, 0x0006_0302_0164_0000, 0x0000_0000_0002_0000),
    MapEntry::new(NpuNtl,       3, 0x0006_0302_0166_0000, 0x0000_0000_0002_0000),
    MapEntry::new(NpuNtl,       4, 0x0006_0302_0168_0000, 0x0000_0000_0002_0000),
    MapEntry::new(NpuNtl,       5, 0x0006_0302_016a_0000, 0x0000_0000_0002_0000),
    MapEntry::new(NpuGenid,     0, 0x0006_0302_016c_0000, 0x0000_0000_0002_0000),
    MapEntry::new(NpuGenid,     1, 0x0006_0302_016e_0000, 0x0000_0000_0002_0000),
    MapEntry::new(NpuGenid,     2, 0x0006_0302_0170_0000, 0x0000_0000_0002_0000),
    MapEntry::new(Resv,         5, 0x0006_0302_0172_0000, 0x0000_0000_018e_0000),
    MapEntry::new(PsihbReg,     0, 0x0006_0302_0300_0000, 0x0000_0000_0010_0000),
    MapEntry::new(XiveIc,       0, 0x0006_0302_0310_0000, 0x0000_0000_0008_0000),
    MapEntry::new(XiveTm,       0, 0x0006_0302_0318_0000, 0x0000_0000_0004_0000),
    MapEntry::new(PsihbEsb,     0, 0x0006_0302_031c_0000, 0x0000_0000_0001_0000),
    MapEntry::new(NxRng,        0, 0x0006_0302_031d_0000, 0x0000_0000_0001_0000),
    MapEntry::new(Resv,         6, 0x0006_0302_031e_0000, 0x0000_0000_1ce2_0000),
    MapEntry::new(CentaurScom,  0, 0x0006_0302_2000_0000, 0x0000_0000_2000_0000),
    MapEntry::new(Resv,         7, 0x0006_0302_4000_0000, 0x0000_00f9_c000_0000),
    MapEntry::new(Xscom,        0, 0x0006_03fc_0000_0000, 0x0000_0004_0000_0000),

    MapEntry::TERMINATOR,
];

#[cfg(test)]
mod tests {
    use pretty_assertions::assert_eq;

    use super::*;
    use crate::region::RegionType;

    const MMIO_BASE: u64 = 0x0006_0000_0000_0000;

    #[test]
    fn entries_are_sorted_and_disjoint() {
        let mut prev_end = 0;
        for entry in PHYS_MAP_NIMBUS.entries() {
            assert!(
                entry.offset() >= prev_end,
                "{} {} at {:#x} overlaps the previous entry ending at {:#x}",
                entry.region(),
                entry.index(),
                entry.offset(),
                prev_end
            );
            prev_end = entry.end();
        }
    }

    #[test]
    fn mmio_is_contiguous() {
        let mut next = MMIO_BASE;
        for entry in PHYS_MAP_NIMBUS.entries().filter(|e| e.offset() >= MMIO_BASE) {
            assert_eq!(entry.offset(), next, "hole before {} {}", entry.region(), entry.index());
            next = entry.end();
        }
        // four 1TB blocks
        assert_eq!(next, MMIO_BASE + (4 << 40));
    }

    #[test]
    fn mmio_stays_clear_of_chip_select_bits() {
        let chip_bits = !0u64 << PHYS_MAP_NIMBUS.chip_select_shift() & !(!0u64 << 48);
        for entry in PHYS_MAP_NIMBUS.entries().filter(|e| e.offset() >= MMIO_BASE) {
            assert_eq!(entry.offset() & chip_bits, 0, "{} {}", entry.region(), entry.index());
            assert_eq!((entry.end() - 1) & chip_bits, 0, "{} {}", entry.region(), entry.index());
        }
    }

    #[test]
    fn phb_instances() {
        let count = |region: RegionType| {
            PHYS_MAP_NIMBUS.entries().filter(|e| e.region() == region).count()
        };
        assert_eq!(count(RegionType::Phb4Mmio64), 6);
        assert_eq!(count(RegionType::Phb4Mmio32), 6);
        assert_eq!(count(RegionType::Phb4XiveEsb), 6);
        assert_eq!(count(RegionType::Phb4RegSpc), 6);
        assert_eq!(count(RegionType::GpuMem4TDown), 6);
        assert_eq!(count(RegionType::GpuMem4TUp), 4);
    }

    #[test]
    fn table_shape() {
        assert_eq!(PHYS_MAP_NIMBUS.name(), "nimbus");
        assert_eq!(PHYS_MAP_NIMBUS.chip_select_shift(), 42);
        assert_eq!(PHYS_MAP_NIMBUS.entries().count(), 75);
    }
}
