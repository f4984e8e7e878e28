// SPDX-License-Identifier: MIT
//! The physical address map.
//!
//! Every processor chip in the system exposes the same set of physical regions (system memory,
//! PHB MMIO windows, interrupt controller pages, XSCOM, ...) at a fixed offset inside its own
//! slice of the global physical address space. The slice is selected by placing the chip id at
//! [`PhysMapInfo::chip_select_shift`]. This crate holds the per-generation tables describing
//! those regions and resolves a `(region type, index)` pair to the address and size of the
//! region on a given chip.
//!
//! Bring-up code either threads a [`PhysMap`] through explicitly, or calls [`init`] once early
//! in boot and [`get`] afterwards. A lookup that cannot be satisfied is a firmware bug, never a
//! runtime condition: [`get`] and [`PhysMap::resolve`] do not return in that case.
#![cfg_attr(not(test), no_std)]

mod error;
mod global;
mod proc_gen;
mod region;
mod resolver;
mod sync;
mod table;

pub use error::PhysMapError;
pub use global::{get, get_addr, get_size, init, selected, try_get};
pub use proc_gen::ProcGen;
pub use region::RegionType;
pub use resolver::{MappedRegion, PhysMap};
pub use table::{Entries, MapEntry, PhysMapInfo};

#[cfg(feature = "nimbus")]
pub use table::nimbus::PHYS_MAP_NIMBUS;
