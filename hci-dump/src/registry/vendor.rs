//! Vendor specific commands (OGF 0x3F).

use super::*;

pub(super) const CAPACITY: u16 = 0;

pub(super) static UNITS: &[Unit] = &[
    Unit::new(0xFC00, "Vendor Specific Command",
        &[],
        &[]),
];
