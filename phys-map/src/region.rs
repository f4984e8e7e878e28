// SPDX-License-Identifier: MIT
use core::fmt;

//--------------------------------------------------------------------------------------------------
// Public definitions
//--------------------------------------------------------------------------------------------------
/// A class of physical resource found in every chip's slice of the address map.
///
/// The numeric ids are stable: new generations may add variants, but never renumber or
/// repurpose an existing one.
#[derive(Copy, Clone, Debug, Eq, PartialEq, Hash, Ord, PartialOrd)]
#[repr(u8)]
pub enum RegionType {
    /// Marks the end of a table. Never a valid lookup key.
    NullMap = 0,
    SystemMem,
    /// GPU memory growing down from 4TB.
    GpuMem4TDown,
    /// GPU memory growing up from 4TB.
    GpuMem4TUp,
    Phb4Mmio64,
    Phb4Mmio32,
    Phb4XiveEsb,
    Phb4RegSpc,
    NpuOcapiMmio,
    XiveVc,
    XivePc,
    VasUserWin,
    VasHypWin,
    OcabXiveEsb,
    LpcBus,
    FspMmio,
    NpuRegs,
    NpuUsr,
    NpuPhy,
    NpuNtl,
    NpuGenid,
    PsihbReg,
    XiveIc,
    XiveTm,
    PsihbEsb,
    NxRng,
    CentaurScom,
    Xscom,
    /// Documents a hole in the map. Reserved entries may share an index and are never looked up.
    Resv,
}

//--------------------------------------------------------------------------------------------------
// Public code
//--------------------------------------------------------------------------------------------------
impl RegionType {
    /// The stable numeric id, as printed in diagnostics.
    pub const fn id(self) -> u8 {
        self as u8
    }

    pub const fn name(self) -> &'static str {
        match self {
            RegionType::NullMap => "NULL_MAP",
            RegionType::SystemMem => "SYSTEM_MEM",
            RegionType::GpuMem4TDown => "GPU_MEM_4T_DOWN",
            RegionType::GpuMem4TUp => "GPU_MEM_4T_UP",
            RegionType::Phb4Mmio64 => "PHB4_64BIT_MMIO",
            RegionType::Phb4Mmio32 => "PHB4_32BIT_MMIO",
            RegionType::Phb4XiveEsb => "PHB4_XIVE_ESB",
            RegionType::Phb4RegSpc => "PHB4_REG_SPC",
            RegionType::NpuOcapiMmio => "NPU_OCAPI_MMIO",
            RegionType::XiveVc => "XIVE_VC",
            RegionType::XivePc => "XIVE_PC",
            RegionType::VasUserWin => "VAS_USER_WIN",
            RegionType::VasHypWin => "VAS_HYP_WIN",
            RegionType::OcabXiveEsb => "OCAB_XIVE_ESB",
            RegionType::LpcBus => "LPC_BUS",
            RegionType::FspMmio => "FSP_MMIO",
            RegionType::NpuRegs => "NPU_REGS",
            RegionType::NpuUsr => "NPU_USR",
            RegionType::NpuPhy => "NPU_PHY",
            RegionType::NpuNtl => "NPU_NTL",
            RegionType::NpuGenid => "NPU_GENID",
            RegionType::PsihbReg => "PSIHB_REG",
            RegionType::XiveIc => "XIVE_IC",
            RegionType::XiveTm => "XIVE_TM",
            RegionType::PsihbEsb => "PSIHB_ESB",
            RegionType::NxRng => "NX_RNG",
            RegionType::CentaurScom => "CENTAUR_SCOM",
            RegionType::Xscom => "XSCOM",
            RegionType::Resv => "RESV",
        }
    }

    pub const fn is_terminator(self) -> bool {
        matches!(self, RegionType::NullMap)
    }

    pub const fn is_reserved(self) -> bool {
        matches!(self, RegionType::Resv)
    }
}

impl fmt::Display for RegionType {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}({:02})", self.name(), self.id())
    }
}
