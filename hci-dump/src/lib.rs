#![no_std]

extern crate alloc;
#[cfg(feature = "std")]
extern crate std;

use fixedstr::str64;
use thiserror_no_std::Error;

#[cfg(not(feature = "defmt"))]
use log::{debug, trace, warn};
#[cfg(feature = "defmt")]
use defmt::{debug, trace, warn};

#[cfg(all(feature = "log", feature = "defmt"))]
compile_error!("log and defmt can't have both!");

#[cfg(all(feature = "sync", feature = "async"))]
compile_error!("sync and async are conflict!, choose one");

pub mod buffer;
pub mod config;
pub mod decoder;
pub mod event;
pub mod field;
pub mod format;
pub mod hci;
pub mod registry;
pub mod special;
pub mod types;
pub mod walker;

#[cfg(feature = "std")]
pub mod pipeline;

#[cfg(feature = "sync")]
pub use embedded_io::{ErrorType, Read};
#[cfg(feature = "async")]
pub use embedded_io_async::{ErrorType, Read};

pub use config::{ConfigSource, DumpConfig, StackConfig};
pub use decoder::{decode_command, decode_event, Decoder};
pub use format::{LineSink, LogSink};
pub use hci::{CapturedPacket, PacketType, StatusCode};
pub use types::{DecodedField, DecodedInstance, Stream};

#[cfg(feature = "std")]
pub use pipeline::HciDump;

pub type MsgStr = str64;
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct MsgType(pub MsgStr);

#[cfg(feature = "defmt")]
impl defmt::Format for MsgType {
    fn format(&self, fmt: defmt::Formatter) {
        defmt::write!(fmt, "{}", self.0.as_str());
    }
}

impl core::fmt::Display for MsgType {
    fn fmt(&self, f: &mut core::fmt::Formatter<'_>) -> core::fmt::Result {
        f.write_str(self.0.as_str())
    }
}

/// Failure while turning one packet into decoded fields.
///
/// None of these abort a dump session; the decoder records the error on the
/// instance and keeps whatever it already produced.
#[derive(Error, Clone, Copy, Debug, PartialEq)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
pub enum DecodeError {
    #[error("Malformed schema entry {field}: {kind:?} can't be {width} bytes wide")]
    MalformedSchemaEntry {
        field: &'static str,
        kind: types::DisplayKind,
        width: usize,
    },
    #[error("Field text overflow")]
    FieldTextOverflow,
    #[error("Packet too short")]
    PacketTooShort,
}

#[derive(Error, Clone, Copy, Debug, PartialEq)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
pub enum DumpError {
    #[error("IOError")]
    Io,
    #[error("Unknown packet type 0x{0:02x}")]
    UnknownPacketType(u8),
    #[error("Dump queue closed")]
    QueueClosed,
    #[error("HCI dump is disabled")]
    Disabled,
    #[error("Config error: {0}")]
    Config(MsgType),
    #[error("Decode error: {0}")]
    Decode(#[from] DecodeError),
}

impl From<core::fmt::Error> for DecodeError {
    fn from(_: core::fmt::Error) -> Self {
        DecodeError::FieldTextOverflow
    }
}
