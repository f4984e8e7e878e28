// SPDX-License-Identifier: MIT
use core::fmt;

use crate::table::PhysMapInfo;

/// The processor generation the firmware is running on, as classified by the CPU detection code.
#[derive(Copy, Clone, Debug, Eq, PartialEq, Hash)]
pub enum ProcGen {
    Unknown,
    P7,
    P8,
    P9,
}

impl ProcGen {
    /// The address map of this generation, if it uses one.
    pub fn phys_map(self) -> Option<&'static PhysMapInfo> {
        match self {
            #[cfg(feature = "nimbus")]
            ProcGen::P9 => Some(&crate::table::nimbus::PHYS_MAP_NIMBUS),
            _ => None,
        }
    }
}

impl fmt::Display for ProcGen {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let name = match self {
            ProcGen::Unknown => "unknown",
            ProcGen::P7 => "POWER7",
            ProcGen::P8 => "POWER8",
            ProcGen::P9 => "POWER9",
        };
        f.write_str(name)
    }
}
