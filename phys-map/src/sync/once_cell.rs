// SPDX-License-Identifier: MIT
use core::cell::Cell;

use critical_section::Mutex;

//--------------------------------------------------------------------------------------------------
// Public definitions
//--------------------------------------------------------------------------------------------------
/// A cell written at most once, read any number of times.
///
/// Both accesses run inside a critical section, so a reader never races the single writer.
pub struct OnceCell<T> {
    data: Mutex<Cell<Option<T>>>,
}

//--------------------------------------------------------------------------------------------------
// Public code
//--------------------------------------------------------------------------------------------------
impl<T: Copy> OnceCell<T> {
    pub const fn new() -> Self {
        Self {
            data: Mutex::new(Cell::new(None)),
        }
    }

    /// Stores `value` if the cell is empty. Otherwise leaves the cell alone and returns the value
    /// it already holds.
    pub fn set(&self, value: T) -> Result<(), T> {
        critical_section::with(|cs| {
            let data = self.data.borrow(cs);
            match data.get() {
                Some(current) => Err(current),
                None => {
                    data.set(Some(value));
                    Ok(())
                }
            }
        })
    }

    pub fn get(&self) -> Option<T> {
        critical_section::with(|cs| self.data.borrow(cs).get())
    }
}
