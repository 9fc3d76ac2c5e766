use alloc::string::String;
use alloc::vec::Vec;

use crate::special::SpecialId;
use crate::DecodeError;

pub const CMD_PKT_HEADER_SIZE: usize = 3;
pub const EVT_PKT_HEADER_SIZE: usize = 2;
pub const ACL_PKT_HEADER_SIZE: usize = 4;
pub const SCO_PKT_HEADER_SIZE: usize = 3;
pub const PKT_PAYLOAD_MAX_SIZE: usize = 255;

// Three text bytes per parameter byte plus room for markers.
pub const SCRATCH_CAPACITY: usize = PKT_PAYLOAD_MAX_SIZE * 3 + 32;
pub type Scratch = heapless::String<SCRATCH_CAPACITY>;

/// How many bytes a parameter occupies on the wire.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
pub enum Width {
    Fixed(u8),
    /// Width is the decoded value of an earlier field, counted back from the
    /// field being decoded (`-1` is the field just before it).
    ReferencesField(i8),
    RemainderOfPacket,
}

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
pub enum DisplayKind {
    Hex,
    Dec,
    ConnectionHandle,
    HexBytes,
    Chars,
    Clk625us,
    Clk1250us,
    Clk10ms,
    Clk1280ms,
    StatusCode,
    BdAddr,
    /// Little-endian command opcode embedded in an event.
    Opcode,
    Special(SpecialId),
}

impl DisplayKind {
    pub fn is_integer(&self) -> bool {
        matches!(self, DisplayKind::Hex | DisplayKind::Dec)
    }

    pub fn is_duration(&self) -> bool {
        matches!(
            self,
            DisplayKind::Clk625us | DisplayKind::Clk1250us | DisplayKind::Clk10ms | DisplayKind::Clk1280ms
        )
    }

    pub fn is_security(&self) -> bool {
        matches!(self, DisplayKind::Special(id) if id.is_security())
    }

    /// Widths a schema entry of this kind may declare, `None` when any width works.
    pub fn allowed_widths(&self) -> Option<core::ops::RangeInclusive<usize>> {
        match self {
            DisplayKind::Hex | DisplayKind::Dec => Some(1..=4),
            DisplayKind::Clk625us | DisplayKind::Clk1250us | DisplayKind::Clk10ms | DisplayKind::Clk1280ms => {
                Some(1..=2)
            }
            DisplayKind::ConnectionHandle | DisplayKind::Opcode => Some(2..=2),
            DisplayKind::StatusCode => Some(1..=1),
            DisplayKind::BdAddr => Some(6..=6),
            DisplayKind::HexBytes | DisplayKind::Chars | DisplayKind::Special(_) => None,
        }
    }
}

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
pub struct Param {
    pub name: &'static str,
    pub width: Width,
    /// Non-zero on a count field: the next `repeats` params form a unit
    /// decoded once per counted item.
    pub repeats: u8,
    pub kind: DisplayKind,
}

impl Param {
    pub const fn new(name: &'static str, width: Width, kind: DisplayKind) -> Self {
        Self {
            name,
            width,
            repeats: 0,
            kind,
        }
    }

    pub const fn repeating(self, repeats: u8) -> Self {
        Self { repeats, ..self }
    }

    pub fn is_repeat_count(&self) -> bool {
        self.repeats > 0
    }
}

/// A named command, event or LE sub-event.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
pub struct Unit {
    pub name: &'static str,
    pub opcode: u16,
    pub params: &'static [Param],
    pub returns: &'static [Param],
}

impl Unit {
    pub const fn new(
        opcode: u16,
        name: &'static str,
        params: &'static [Param],
        returns: &'static [Param],
    ) -> Self {
        Self {
            name,
            opcode,
            params,
            returns,
        }
    }

    /// Slot of this unit within its table (OCF for commands, the code itself for events).
    pub fn index(&self) -> u16 {
        self.opcode & 0x03ff
    }
}

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
pub enum Stream {
    Command,
    Event,
}

#[derive(Clone, Debug, PartialEq, Eq)]
pub struct DecodedField {
    pub name: &'static str,
    pub value: String,
    pub indent: u8,
    /// 1-based position inside a repeated group.
    pub seq: Option<usize>,
    /// Integer value, kept for back-references, repeat counts and post-processing.
    pub raw: Option<u32>,
}

impl DecodedField {
    pub fn new(name: &'static str, value: String, indent: u8) -> Self {
        Self {
            name,
            value,
            indent,
            seq: None,
            raw: None,
        }
    }
}

#[derive(Clone, Debug, PartialEq)]
pub struct DecodedInstance {
    pub stream: Stream,
    pub name: &'static str,
    pub opcode: u16,
    pub parameter_length: u8,
    pub fields: Vec<DecodedField>,
    /// Bytes inside the declared parameter length that no schema entry consumed.
    pub leftover: Vec<u8>,
    pub error: Option<DecodeError>,
}

impl DecodedInstance {
    pub fn new(stream: Stream, unit: &Unit, opcode: u16, parameter_length: u8) -> Self {
        Self {
            stream,
            name: unit.name,
            opcode,
            parameter_length,
            fields: Vec::new(),
            leftover: Vec::new(),
            error: None,
        }
    }

    pub fn field(&self, name: &str) -> Option<&DecodedField> {
        self.fields.iter().find(|f| f.name == name)
    }

    pub fn is_summary_only(&self) -> bool {
        self.fields.is_empty() && self.leftover.is_empty()
    }
}
