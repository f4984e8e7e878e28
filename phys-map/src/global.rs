// SPDX-License-Identifier: MIT
//! The process-wide resolver, for bring-up code that cannot be handed a [`PhysMap`].

use crate::error::PhysMapError;
use crate::proc_gen::ProcGen;
use crate::region::RegionType;
use crate::resolver::{self, MappedRegion, PhysMap};
use crate::sync::OnceCell;
use crate::table::PhysMapInfo;

static PHYS_MAP: OnceCell<&'static PhysMapInfo> = OnceCell::new();

/// Selects the address map for the running processor generation.
///
/// Call once, early, before any [`get`]. Unsupported generations leave the map unselected so
/// that every later lookup fails; the first successful selection is never replaced.
pub fn init(gen: ProcGen) {
    let Some(info) = resolver::assign(gen) else {
        return;
    };

    if let Err(current) = PHYS_MAP.set(info) {
        resolver::keep_current(current, info, gen);
    }
}

/// The resolver built from the selected map. Unselected before [`init`].
pub fn selected() -> PhysMap {
    PHYS_MAP.get().map_or(PhysMap::new(), PhysMap::with_info)
}

/// Address and size of instance `index` of `region` on chip `chip_id`.
///
/// # Panics
///
/// If no map is selected or the map has no such region.
pub fn get(chip_id: u32, region: RegionType, index: u32) -> MappedRegion {
    selected().resolve(chip_id, region, index)
}

pub fn try_get(chip_id: u32, region: RegionType, index: u32) -> Result<MappedRegion, PhysMapError> {
    selected().try_resolve(chip_id, region, index)
}

/// [`get`], for callers that only need the address.
pub fn get_addr(chip_id: u32, region: RegionType, index: u32) -> u64 {
    get(chip_id, region, index).addr
}

/// [`get`], for callers that only need the size.
pub fn get_size(chip_id: u32, region: RegionType, index: u32) -> u64 {
    get(chip_id, region, index).size
}
