// SPDX-License-Identifier: MIT
use thiserror::Error;

use crate::region::RegionType;

/// A lookup that cannot be answered.
///
/// Every variant means the firmware asked for a region its hardware generation does not have,
/// or asked before selecting a map. Callers report it and stop; there is no fallback address.
#[derive(Copy, Clone, Debug, Eq, PartialEq, Error)]
pub enum PhysMapError {
    #[error("Failed to lookup BAR type:{} index:{index}: no address map selected", .region.id())]
    Unselected { region: RegionType, index: u32 },

    #[error(
        "Failed to lookup BAR type:{} index:{index}: {} not in the {table} map",
        .region.id(),
        .region.name()
    )]
    NoEntry {
        table: &'static str,
        region: RegionType,
        index: u32,
    },
}

impl PhysMapError {
    pub fn region(&self) -> RegionType {
        match *self {
            PhysMapError::Unselected { region, .. } | PhysMapError::NoEntry { region, .. } => region,
        }
    }

    pub fn index(&self) -> u32 {
        match *self {
            PhysMapError::Unselected { index, .. } | PhysMapError::NoEntry { index, .. } => index,
        }
    }
}
