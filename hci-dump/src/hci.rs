use alloc::vec::Vec;
use binrw::{io::Cursor, BinRead};
use chrono::{DateTime, Utc};
use core::fmt::Write as _;
use maybe_async::maybe_async;
use modular_bitfield::{bitfield, prelude::*};
use num_enum::{IntoPrimitive, TryFromPrimitive};
use thiserror_no_std::Error;

use crate::types::{
    ACL_PKT_HEADER_SIZE, CMD_PKT_HEADER_SIZE, EVT_PKT_HEADER_SIZE, SCO_PKT_HEADER_SIZE,
};
use crate::{trace, DecodeError, DumpError};

pub const TIMESTAMP_LEN: usize = 15;
pub const CAPTURE_HEADER_SIZE: usize = 1 + TIMESTAMP_LEN;

pub const FW_LOG_EVENT_CODE: u8 = 0xff;
pub const FW_LOG_MARKER: u8 = 0x50;

// Vol 1. Part F. 1.3
#[derive(Error, TryFromPrimitive, IntoPrimitive, PartialEq, Eq, Clone, Copy, Debug)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
#[repr(u8)]
pub enum StatusCode {
    #[error("Success")]
    Success = 0x00,
    #[error("Unknown HCI Command")]
    UnknownHciCommand = 0x01,
    #[error("Unknown Connection Identifier")]
    UnknownConnectionIdentifier = 0x02,
    #[error("Hardware Failure")]
    HardwareFailure = 0x03,
    #[error("Page Timeout")]
    PageTimeout = 0x04,
    #[error("Authentication Failure")]
    AuthenticationFailure = 0x05,
    #[error("PIN or Key Missing")]
    PinOrKeyMissing = 0x06,
    #[error("Memory Capacity Exceeded")]
    MemoryCapacityExceeded = 0x07,
    #[error("Connection Timeout")]
    ConnectionTimeout = 0x08,
    #[error("Connection Limit Exceeded")]
    ConnectionLimitExceeded = 0x09,
    #[error("Synchronous Connection Limit To A Device Exceeded")]
    SynchronousConnectionLimitToADeviceExceeded = 0x0a,
    #[error("ACL Connection Already Exists")]
    AclConnectionAlreadyExists = 0x0b,
    #[error("Command Disallowed")]
    CommandDisallowed = 0x0c,
    #[error("Connection Rejected due to Limited Resources")]
    ConnectionRejectedDueToLimitedResources = 0x0d,
    #[error("Connection Rejected Due To Security Reasons")]
    ConnectionRejectedDueToSecurityReasons = 0x0e,
    #[error("Connection Rejected due to Unacceptable BD_ADDR")]
    ConnectionRejectedDueToUnacceptableBdAddr = 0x0f,
    #[error("Connection Accept Timeout Exceeded")]
    ConnectionAcceptTimeoutExceeded = 0x10,
    #[error("Unsupported Feature or Parameter Value")]
    UnsupportedFeatureOrParameterValue = 0x11,
    #[error("Invalid HCI Command Parameters")]
    InvalidHciCommandParameters = 0x12,
    #[error("Remote User Terminated Connection")]
    RemoteUserTerminatedConnection = 0x13,
    #[error("Remote Device Terminated Connection due to Low Resources")]
    RemoteDeviceTerminatedConnectionDueToLowResources = 0x14,
    #[error("Remote Device Terminated Connection due to Power Off")]
    RemoteDeviceTerminatedConnectionDueToPowerOff = 0x15,
    #[error("Connection Terminated By Local Host")]
    ConnectionTerminatedByLocalHost = 0x16,
    #[error("Repeated Attempts")]
    RepeatedAttempts = 0x17,
    #[error("Pairing Not Allowed")]
    PairingNotAllowed = 0x18,
    #[error("Unknown LMP PDU")]
    UnknownLmpPdu = 0x19,
    #[error("Unsupported Remote Feature / Unsupported LMP Feature")]
    UnsupportedRemoteFeature = 0x1a,
    #[error("SCO Offset Rejected")]
    ScoOffsetRejected = 0x1b,
    #[error("SCO Interval Rejected")]
    ScoIntervalRejected = 0x1c,
    #[error("SCO Air Mode Rejected")]
    ScoAirModeRejected = 0x1d,
    #[error("Invalid LMP Parameters / Invalid LL Parameters")]
    InvalidLmpParameters = 0x1e,
    #[error("Unspecified Error")]
    UnspecifiedError = 0x1f,
    #[error("Unsupported LMP Parameter Value / Unsupported LL Parameter Value")]
    UnsupportedLmpParameterValue = 0x20,
    #[error("Role Change Not Allowed")]
    RoleChangeNotAllowed = 0x21,
    #[error("LMP Response Timeout / LL Response Timeout")]
    LmpResponseTimeout = 0x22,
    #[error("LMP Error Transaction Collision")]
    LmpErrorTransactionCollision = 0x23,
    #[error("LMP PDU Not Allowed")]
    LmpPduNotAllowed = 0x24,
    #[error("Encryption Mode Not Acceptable")]
    EncryptionModeNotAcceptable = 0x25,
    #[error("Link Key cannot be Changed")]
    LinkKeyCannotBeChanged = 0x26,
    #[error("Requested QoS Not Supported")]
    RequestedQosNotSupported = 0x27,
    #[error("Instant Passed")]
    InstantPassed = 0x28,
    #[error("Pairing With Unit Key Not Supported")]
    PairingWithUnitKeyNotSupported = 0x29,
    #[error("Different Transaction Collision")]
    DifferentTransactionCollision = 0x2a,
    #[error("Reserved")]
    Reserved2B = 0x2b,
    #[error("QoS Unacceptable Parameter")]
    QosUnacceptableParameter = 0x2c,
    #[error("QoS Rejected")]
    QosRejected = 0x2d,
    #[error("Channel Classification Not Supported")]
    ChannelClassificationNotSupported = 0x2e,
    #[error("Insufficient Security")]
    InsufficientSecurity = 0x2f,
    #[error("Parameter Out Of Mandatory Range")]
    ParameterOutOfMandatoryRange = 0x30,
    #[error("Reserved")]
    Reserved31 = 0x31,
    #[error("Role Switch Pending")]
    RoleSwitchPending = 0x32,
    #[error("Reserved")]
    Reserved33 = 0x33,
    #[error("Reserved Slot Violation")]
    ReservedSlotViolation = 0x34,
    #[error("Role Switch Failed")]
    RoleSwitchFailed = 0x35,
    #[error("Extended Inquiry Response Too Large")]
    ExtendedInquiryResponseTooLarge = 0x36,
    #[error("Secure Simple Pairing Not Supported By Host")]
    SecureSimplePairingNotSupportedByHost = 0x37,
    #[error("Host Busy - Pairing")]
    HostBusyPairing = 0x38,
    #[error("Connection Rejected due to No Suitable Channel Found")]
    ConnectionRejectedDueToNoSuitableChannelFound = 0x39,
    #[error("Controller Busy")]
    ControllerBusy = 0x3a,
    #[error("Unacceptable Connection Parameters")]
    UnacceptableConnectionParameters = 0x3b,
    #[error("Directed Advertising Timeout")]
    DirectedAdvertisingTimeout = 0x3c,
    #[error("Connection Terminated due to MIC Failure")]
    ConnectionTerminatedDueToMicFailure = 0x3d,
    #[error("Connection Failed to be Established")]
    ConnectionFailedToBeEstablished = 0x3e,
    #[error("MAC Connection Failed")]
    MacConnectionFailed = 0x3f,
    #[error("Coarse Clock Adjustment Rejected but Will Try to Adjust Using Clock Dragging")]
    CoarseClockAdjustmentRejected = 0x40,
}

impl StatusCode {
    pub const COUNT: usize = 0x41;

    /// Renders `(0xNN) text`, falling back to an explicit unknown marker.
    pub fn describe<W: core::fmt::Write>(code: u8, out: &mut W) -> core::fmt::Result {
        match StatusCode::try_from(code) {
            Ok(status) => write!(out, "(0x{:02x}) {}", code, status),
            Err(_) => write!(out, "(0x{:02x}) (unknown status 0x{:02x})", code, code),
        }
    }
}

#[bitfield]
#[derive(BinRead, PartialEq, Clone, Copy, Debug)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
#[br(map = Self::from_bytes)]
pub struct Opcode {
    pub ocf: B10,
    pub ogf: B6,
}

impl Opcode {
    pub fn from_u16(opcode: u16) -> Self {
        Self::from_bytes(opcode.to_le_bytes())
    }

    pub fn value(&self) -> u16 {
        u16::from_le_bytes(self.into_bytes())
    }

    pub fn group(&self) -> Option<CommandGroup> {
        CommandGroup::try_from(self.ogf()).ok()
    }
}

#[derive(TryFromPrimitive, IntoPrimitive, PartialEq, Eq, Clone, Copy, Debug)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
#[repr(u8)]
pub enum CommandGroup {
    LinkControl = 0x01,
    LinkPolicy = 0x02,
    ControllerBaseband = 0x03,
    Informational = 0x04,
    StatusParameters = 0x05,
    Testing = 0x06,
    LeController = 0x08,
    VendorSpecific = 0x3f,
}

#[derive(BinRead, PartialEq, Clone, Copy, Debug)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
#[br(little)]
pub struct CommandHeader {
    pub opcode: Opcode,
    pub parameter_length: u8,
}

#[derive(BinRead, PartialEq, Clone, Copy, Debug)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
#[br(little)]
pub struct EventHeader {
    pub event_code: u8,
    pub parameter_length: u8,
}

impl CommandHeader {
    pub fn parse(packet: &[u8]) -> Result<Self, DecodeError> {
        <Self as BinRead>::read(&mut Cursor::new(packet)).map_err(|_| DecodeError::PacketTooShort)
    }
}

impl EventHeader {
    pub fn parse(packet: &[u8]) -> Result<Self, DecodeError> {
        <Self as BinRead>::read(&mut Cursor::new(packet)).map_err(|_| DecodeError::PacketTooShort)
    }
}

#[derive(TryFromPrimitive, IntoPrimitive, PartialEq, Eq, Clone, Copy, Debug)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
#[repr(u8)]
pub enum PacketType {
    Command = 0x01,
    Acl = 0x02,
    Sco = 0x03,
    Event = 0x04,
}

impl PacketType {
    pub fn header_size(&self) -> usize {
        match self {
            PacketType::Command => CMD_PKT_HEADER_SIZE,
            PacketType::Acl => ACL_PKT_HEADER_SIZE,
            PacketType::Sco => SCO_PKT_HEADER_SIZE,
            PacketType::Event => EVT_PKT_HEADER_SIZE,
        }
    }

    /// Payload length announced by a complete HCI header of this type.
    pub fn payload_len(&self, header: &[u8]) -> usize {
        match self {
            PacketType::Command | PacketType::Sco => header[2] as usize,
            PacketType::Event => header[1] as usize,
            PacketType::Acl => u16::from_le_bytes([header[2], header[3]]) as usize,
        }
    }
}

#[derive(BinRead, PartialEq, Clone, Copy, Debug)]
#[br(little)]
struct CaptureHeader {
    packet_type: u8,
    timestamp: [u8; TIMESTAMP_LEN],
}

/// One record as queued by the capture side: `[type][HH:MM:SS.ffffff][packet]`.
#[derive(PartialEq, Eq, Clone, Debug)]
pub struct CapturedPacket {
    pub packet_type: PacketType,
    pub timestamp: [u8; TIMESTAMP_LEN],
    pub data: Vec<u8>,
}

impl CapturedPacket {
    pub fn new(packet_type: PacketType, timestamp: [u8; TIMESTAMP_LEN], data: &[u8]) -> Self {
        Self {
            packet_type,
            timestamp,
            data: data.into(),
        }
    }

    pub fn parse(record: &[u8]) -> Result<Self, DumpError> {
        let header = <CaptureHeader as BinRead>::read(&mut Cursor::new(record))
            .map_err(|_| DumpError::Decode(DecodeError::PacketTooShort))?;
        let packet_type = PacketType::try_from(header.packet_type)
            .map_err(|_| DumpError::UnknownPacketType(header.packet_type))?;
        Ok(Self {
            packet_type,
            timestamp: header.timestamp,
            data: record[CAPTURE_HEADER_SIZE..].into(),
        })
    }

    pub fn timestamp_str(&self) -> &str {
        core::str::from_utf8(&self.timestamp).unwrap_or("")
    }

    pub fn encode(&self) -> Vec<u8> {
        let mut record = Vec::with_capacity(CAPTURE_HEADER_SIZE + self.data.len());
        record.push(self.packet_type.into());
        record.extend_from_slice(&self.timestamp);
        record.extend_from_slice(&self.data);
        record
    }

    #[cfg(any(feature = "sync", feature = "async"))]
    #[maybe_async]
    pub async fn read<T: crate::Read>(connector: &mut T) -> Result<Option<Self>, DumpError> {
        let mut buffer = [0u8; 1];
        let l = connector.read(&mut buffer).await.map_err(|_| DumpError::Io)?;
        if l == 0 {
            return Ok(None);
        }

        let typ = buffer[0];
        let packet_type = PacketType::try_from(typ).map_err(|_| DumpError::UnknownPacketType(typ))?;

        let mut timestamp = [0u8; TIMESTAMP_LEN];
        connector.read_exact(&mut timestamp).await.map_err(|_| DumpError::Io)?;

        let header_size = packet_type.header_size();
        let mut data = Vec::new();
        data.resize(header_size, 0u8);
        connector.read_exact(&mut data[..header_size]).await.map_err(|_| DumpError::Io)?;
        let len = packet_type.payload_len(&data);
        data.resize(header_size + len, 0u8);
        connector.read_exact(&mut data[header_size..]).await.map_err(|_| DumpError::Io)?;

        trace!("captured record type {} len {}", typ, data.len());
        Ok(Some(Self {
            packet_type,
            timestamp,
            data,
        }))
    }
}

/// Whether the capture side should queue this packet at all.
pub fn should_capture(packet_type: PacketType, data: &[u8], filter_fw_log: bool) -> bool {
    match packet_type {
        PacketType::Command => true,
        PacketType::Event => {
            let fw_log = data.len() > 2
                && data[0] == FW_LOG_EVENT_CODE
                && data[1] > 0
                && data[2] == FW_LOG_MARKER;
            !(filter_fw_log && fw_log)
        }
        PacketType::Acl | PacketType::Sco => false,
    }
}

/// Time of day of `time` as `HH:MM:SS.ffffff`, the capture record stamp.
pub fn timestamp_of(time: &DateTime<Utc>) -> [u8; TIMESTAMP_LEN] {
    let mut text: heapless::String<{ TIMESTAMP_LEN + 1 }> = heapless::String::new();
    let _ = write!(text, "{}", time.format("%H:%M:%S%.6f"));
    let mut out = [b'0'; TIMESTAMP_LEN];
    let len = core::cmp::min(text.len(), TIMESTAMP_LEN);
    out[..len].copy_from_slice(&text.as_bytes()[..len]);
    out
}

/// Stamp for `secs` and `micros` since the Unix epoch.
pub fn format_timestamp(secs: u64, micros: u32) -> [u8; TIMESTAMP_LEN] {
    let time = i64::try_from(secs)
        .ok()
        .and_then(|secs| DateTime::from_timestamp(secs, (micros % 1_000_000) * 1_000))
        .unwrap_or_default();
    timestamp_of(&time)
}
