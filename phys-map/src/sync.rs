// SPDX-License-Identifier: MIT
mod once_cell;

pub use self::once_cell::*;
