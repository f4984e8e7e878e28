// SPDX-License-Identifier: MIT
#![cfg(feature = "nimbus")]
//! The log records emitted around selection and lookups.

use std::panic;
use std::sync::{Mutex, Once};

use log::{Level, LevelFilter, Log, Metadata, Record};
use phys_map::{PhysMap, ProcGen, RegionType};

struct CaptureLogger {
    records: Mutex<Vec<(Level, String)>>,
}

impl Log for CaptureLogger {
    fn enabled(&self, _metadata: &Metadata) -> bool {
        true
    }

    fn log(&self, record: &Record) {
        self.records
            .lock()
            .unwrap()
            .push((record.level(), record.args().to_string()));
    }

    fn flush(&self) {}
}

static LOGGER: CaptureLogger = CaptureLogger {
    records: Mutex::new(Vec::new()),
};

fn install() {
    static INSTALL: Once = Once::new();
    INSTALL.call_once(|| {
        log::set_logger(&LOGGER).unwrap();
        log::set_max_level(LevelFilter::Trace);
    });
}

fn logged(level: Level, needle: &str) -> bool {
    LOGGER
        .records
        .lock()
        .unwrap()
        .iter()
        .any(|(l, msg)| *l == level && msg.contains(needle))
}

#[test]
fn selection_is_announced() {
    install();
    let mut map = PhysMap::new();
    map.select(ProcGen::P9);
    map.select(ProcGen::P7);
    assert!(logged(Level::Debug, "Assigning physical memory map table for nimbus"));
    assert!(logged(Level::Debug, "Assigning physical memory map table for unused"));
}

#[test]
fn lookup_is_traced() {
    install();
    let mut map = PhysMap::new();
    map.select(ProcGen::P9);
    map.resolve(1, RegionType::LpcBus, 0);
    assert!(logged(
        Level::Trace,
        "Assigning BAR [1] type:14 index:0 0x0006070000000000 for 0x0000000100000000"
    ));
}

#[test]
fn failed_lookup_is_reported_before_panicking() {
    install();
    let map = PhysMap::new();
    let result = panic::catch_unwind(|| map.resolve(0, RegionType::NxRng, 7));
    assert!(result.is_err());
    assert!(logged(Level::Error, "Failed to lookup BAR type:25 index:7"));
}
