use core::fmt::Write;
use modular_bitfield::{bitfield, prelude::*};
use num_enum::{IntoPrimitive, TryFromPrimitive};

use crate::buffer::le_value;
use crate::DecodeError;

pub const SECURITY_HIDDEN: &str = "(Security Data is Hidden)";
pub const GIAC: u32 = 0x009e_8b33;

// Continuation lines of multi-line values carry their own indent.
pub const DETAIL_INDENT: &str = "                ";

const RESERVED: &str = "Reserved";
const RFU: &str = "Reserved for future use";

/// Renderer selector for parameters that need more than a plain number.
///
/// Ids below 100 follow the HCI configuration parameter numbering, 1xx are
/// BR/EDR extras, 2xx LE parameters and 3xx redacted security material.
#[derive(TryFromPrimitive, IntoPrimitive, PartialEq, Eq, Clone, Copy, Debug)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
#[repr(u16)]
pub enum SpecialId {
    ScanEnable = 1,
    InquiryScanType = 4,
    InquiryMode = 5,
    PageScanType = 11,
    VoiceSetting = 12,
    PinType = 13,
    AuthenticationEnable = 16,
    HoldModeActivity = 17,
    LinkPolicySettings = 18,
    SynchronousFlowControlEnable = 22,
    ErroneousDataReporting = 25,
    LocationDomainAware = 29,
    LocationDomainOptions = 31,
    LocationOptions = 32,
    FlowControlMode = 33,
    LeSupportedHost = 34,
    SecureConnectionsHostSupport = 39,

    PageScanRepetitionMode = 100,
    LapIac = 101,
    AclPacketType = 102,
    ScoPacketType = 103,
    SimplePairingMode = 104,
    SimplePairingDebugMode = 105,
    FecRequired = 106,
    Rssi = 107,
    DeleteAllFlag = 108,

    AdvertisingReportEventType = 200,
    AdvertisingReportAddressType = 201,
    AdvertisingType = 202,
    AdvertisingEnable = 203,
    LeScanType = 204,
    LeScanEnable = 205,
    FilterDuplicates = 206,
    AddressType = 207,
    OwnAddressType = 208,
    PeerIdentityAddressType = 209,
    PeerAddressType = 210,

    SecurityKey = 301,
    SecurityPasskey = 302,
}

impl SpecialId {
    pub fn is_security(&self) -> bool {
        matches!(self, SpecialId::SecurityKey | SpecialId::SecurityPasskey)
    }
}

#[bitfield]
#[derive(Clone, Copy, Debug)]
pub struct VoiceSettingBits {
    pub air_coding_format: B2,
    pub linear_pcm_bit_pos: B3,
    pub input_sample_size: B1,
    pub input_data_format: B2,
    pub input_coding: B2,
    #[skip]
    __: B6,
}

#[bitfield]
#[derive(Clone, Copy, Debug)]
pub struct AclPacketTypeBits {
    #[skip]
    __: B1,
    pub no_2dh1: bool,
    pub no_3dh1: bool,
    pub dm1: bool,
    pub dh1: bool,
    #[skip]
    __: B3,
    pub no_2dh3: bool,
    pub no_3dh3: bool,
    pub dm3: bool,
    pub dh3: bool,
    pub no_2dh5: bool,
    pub no_3dh5: bool,
    pub dm5: bool,
    pub dh5: bool,
}

#[bitfield]
#[derive(Clone, Copy, Debug)]
pub struct ScoPacketTypeBits {
    pub hv1: bool,
    pub hv2: bool,
    pub hv3: bool,
    pub ev3: bool,
    pub ev4: bool,
    pub ev5: bool,
    pub no_2ev3: bool,
    pub no_3ev3: bool,
    pub no_2ev5: bool,
    pub no_3ev5: bool,
    #[skip]
    __: B6,
}

#[bitfield]
#[derive(Clone, Copy, Debug)]
pub struct LinkPolicyBits {
    pub role_switch: bool,
    pub hold_mode: bool,
    pub sniff_mode: bool,
    pub park_state: bool,
    #[skip]
    __: B12,
}

#[bitfield]
#[derive(Clone, Copy, Debug)]
pub struct HoldModeActivityBits {
    pub suspend_page_scan: bool,
    pub suspend_inquiry_scan: bool,
    pub suspend_periodic_inquiries: bool,
    #[skip]
    __: B5,
}

/// Renders `bytes` for `id` into `out`.
///
/// Returns `Ok(false)` when the value has no dedicated rendering; the caller
/// then falls back to a raw hex dump. Multi-byte values are taken in HCI wire
/// order (little-endian).
pub fn render<W: Write>(id: SpecialId, bytes: &[u8], out: &mut W) -> Result<bool, DecodeError> {
    if id.is_security() {
        out.write_str(SECURITY_HIDDEN)?;
        return Ok(true);
    }
    if bytes.is_empty() || bytes.len() > 4 {
        return Ok(false);
    }
    let value = le_value(bytes);
    let byte = value as u8;

    use SpecialId::*;
    match id {
        ScanEnable => choose(out, byte, &[
            "No Scans enabled.",
            "Inquiry Scan enabled. Page Scan always disabled.",
            "Inquiry Scan disabled. Page Scan enabled.",
            "Inquiry Scan enabled. Page Scan enabled.",
        ], None),
        InquiryScanType | PageScanType => choose(out, byte, &[
            "Mandatory: Standard Scan(default)",
            "Optional: Interlaced Scan",
        ], Some(RESERVED)),
        InquiryMode => choose(out, byte, &[
            "Standard Inquiry Result event format",
            "Inquiry Result format with RSSI",
            "Inquiry Result with RSSI format or Extended Inquiry Result format",
        ], Some(RESERVED)),
        VoiceSetting => voice_setting(out, value as u16),
        PinType => choose(out, byte, &["Variable PIN", "Fixed PIN"], None),
        AuthenticationEnable => choose(out, byte, &[
            "Authentication not required",
            "Authentication required for all connections",
        ], Some(RESERVED)),
        HoldModeActivity => hold_mode_activity(out, byte),
        LinkPolicySettings => link_policy(out, value as u16),
        SynchronousFlowControlEnable => choose(out, byte, &[
            "Synchronous Flow Control is disabled",
            "Synchronous Flow Control is enabled",
        ], Some(RESERVED)),
        ErroneousDataReporting => choose(out, byte, &[
            "Erroneous data reporting disabled",
            "Erroneous data reporting enabled",
        ], Some(RESERVED)),
        LocationDomainAware => choose(out, byte, &[
            "Regulatory domain unknown",
            "Regulatory domain known",
        ], Some(RFU)),
        LocationDomainOptions => {
            let text = match byte {
                b' ' => "'space' indicates that the code applies to the entire country",
                b'O' => "'O' indicates for use outdoors only",
                b'I' => "'I' indicates for use indoors only",
                b'X' => "'X' indicates a non-country entity",
                _ => RFU,
            };
            write!(out, "(0x{:02x}) {}", byte, text)?;
            Ok(true)
        }
        LocationOptions => choose(out, byte, &["Not mains-powered", "Mains powered"], Some(RFU)),
        FlowControlMode => choose(out, byte, &[
            "Packet based data flow control mode",
            "Data block based data flow control mode",
        ], Some(RFU)),
        LeSupportedHost => choose(out, byte, &[
            "LE Supported(Host) disabled(default)",
            "LE Supported(Host) enabled",
        ], Some(RESERVED)),
        SecureConnectionsHostSupport => choose(out, byte, &[
            "Secure_Connections_Host_Support is 'disabled'. Host does not support secure connection(default)",
            "Secure_Connection_Host_Support is 'enabled'. Host supports secure connections",
        ], Some(RESERVED)),
        PageScanRepetitionMode => choose(out, byte, &["R0", "R1", "R2"], Some(RESERVED)),
        LapIac => {
            if value == GIAC {
                write!(out, "(0x{:08x}) General/Unlimited Inquiry Access Code(GIAC)", value)?;
            } else {
                write!(out, "0x{:08x}", value)?;
            }
            Ok(true)
        }
        AclPacketType => acl_packet_types(out, value as u16),
        ScoPacketType => sco_packet_types(out, value as u16),
        SimplePairingMode => choose(out, byte, &[
            "Simple Pairing mode disabled(default)",
            "Simple Pairing mode enabled",
        ], Some(RFU)),
        SimplePairingDebugMode => choose(out, byte, &[
            "Simple Pairing debug mode disabled(default)",
            "Simple Pairing debug mode enabled",
        ], Some(RFU)),
        FecRequired => choose(out, byte, &["FEC is not required", "FEC is required"], Some(RESERVED)),
        Rssi => rssi(out, byte as i8),
        DeleteAllFlag => choose(out, byte, &[
            "Delete only the Link Key for specified BD_ADDR",
            "Delete all stored Link Keys.",
        ], Some(RFU)),
        AdvertisingReportEventType => choose(out, byte, &[
            "Connectable undirected advertising(ADV_IND)",
            "Connectable directed advertising(ADV_DIRECT_IND)",
            "Scannable undirected advertising(ADV_SCAN_IND)",
            "Non connectable undirected advertising(ADV_NONCONN_IND)",
            "Scan Response(SCAN_RSP)",
        ], Some(RFU)),
        AdvertisingReportAddressType => choose(out, byte, &[
            "Public Device Address",
            "Random Device Address",
            "Public Identity Address(Corresponds to Resolved Private Address)",
            "Random(static) Identity Address(Corresponds to Resolved Private Address)",
        ], Some(RFU)),
        AdvertisingType => choose(out, byte, &[
            "Connectable undirected advertising(ADV_IND)(default)",
            "Connectable high duty cycle directed advertising(ADV_DIRECT_IND, high duty cycle)",
            "Scannable undirected advertising(ADV_SCAN_IND)",
            "Non connectable undirected advertising(ADV_NONCONN_IND)",
            "Connectable low duty cycle directed advertising(ADV_DIRECT_IND, low duty cycle)",
        ], Some(RFU)),
        AdvertisingEnable => choose(out, byte, &[
            "Advertising is disabled(default)",
            "Advertising is enabled",
        ], Some(RFU)),
        LeScanType => choose(out, byte, &[
            "Passive Scanning. No SCAN_REQ packets shall be sent.(default)",
            "Active scanning. SCAN_REQ packets may be sent.",
        ], Some(RFU)),
        LeScanEnable => choose(out, byte, &["Scanning disabled", "Scanning enabled"], Some(RFU)),
        FilterDuplicates => choose(out, byte, &[
            "Duplicate filtering disabled",
            "Duplicate filtering enabled",
        ], Some(RFU)),
        AddressType => choose(out, byte, &["Public Device Address", "Random Device Address"], Some(RFU)),
        OwnAddressType => choose(out, byte, &[
            "Public Device Address(default)",
            "Random Device Address",
            "Controller generates Resolvable Private Address based on the local IRK from resolving list. If resolving list contains no matching entry, use public address",
            "Controller generates Resolvable Private Address based on the local IRK from resolving list. If resolving list contains no matching entry, use random address from LE_Set_Random_Address",
        ], Some(RFU)),
        PeerIdentityAddressType => choose(out, byte, &[
            "Public Identity Address",
            "Random(static) Identity Address",
        ], Some(RFU)),
        PeerAddressType => choose(out, byte, &[
            "Public Device Address(default) or Public Identity Address",
            "Random Device Address or Random(static) Identity Address",
        ], Some(RFU)),
        SecurityKey | SecurityPasskey => Ok(false),
    }
}

fn choose<W: Write>(
    out: &mut W,
    value: u8,
    texts: &[&str],
    otherwise: Option<&str>,
) -> Result<bool, DecodeError> {
    match texts.get(value as usize).copied().or(otherwise) {
        Some(text) => {
            write!(out, "(0x{:02x}) {}", value, text)?;
            Ok(true)
        }
        None => Ok(false),
    }
}

fn detail<W: Write>(out: &mut W, line: &str) -> Result<(), DecodeError> {
    write!(out, "\n{}{}", DETAIL_INDENT, line)?;
    Ok(())
}

fn usable<W: Write>(out: &mut W, name: &str, used: bool) -> Result<(), DecodeError> {
    write!(out, "\n{}{:>5} may {}be used", DETAIL_INDENT, name, if used { "" } else { "not " })?;
    Ok(())
}

fn rssi<W: Write>(out: &mut W, value: i8) -> Result<bool, DecodeError> {
    let raw = value as u8;
    match value {
        127 => write!(out, "(0x{:02x}) RSSI is not available", raw)?,
        22..=125 => write!(out, "(0x{:02x}) {}", raw, RFU)?,
        _ => write!(out, "(0x{:02x}) {} dBm", raw, value)?,
    }
    Ok(true)
}

fn voice_setting<W: Write>(out: &mut W, value: u16) -> Result<bool, DecodeError> {
    let setting = VoiceSettingBits::from_bytes(value.to_le_bytes());
    write!(out, "(0x{:04x})", value)?;
    detail(out, match setting.input_coding() {
        0 => "Input Coding: Linear",
        1 => "Input Coding: u-law Input Coding",
        2 => "Input Coding: A-law Input Coding",
        _ => RFU,
    })?;
    detail(out, match setting.input_data_format() {
        0 => "Input Data Format: 1's complement",
        1 => "Input Data Format: 2's complement",
        2 => "Input Data Format: Sign-Magnitude",
        _ => "Input Data Format: Unsigned",
    })?;
    detail(out, match setting.input_sample_size() {
        0 => "Input Sample Size: 8-bit(only for linear PCM)",
        _ => "Input Sample Size: 16-bit(only for linear PCM)",
    })?;
    write!(
        out,
        "\n{}Linear_PCM_Bit_Pos: {} bit positions that MSB of sample is away from starting at MSB(only for Linear PCM)",
        DETAIL_INDENT,
        setting.linear_pcm_bit_pos()
    )?;
    detail(out, match setting.air_coding_format() {
        0 => "Air Coding Format: CVSD",
        1 => "Air Coding Format: u-law",
        2 => "Air Coding Format: A-law",
        _ => "Air Coding Format: Transparent Data",
    })?;
    Ok(true)
}

fn hold_mode_activity<W: Write>(out: &mut W, value: u8) -> Result<bool, DecodeError> {
    let activity = HoldModeActivityBits::from_bytes([value]);
    write!(out, "(0x{:02x}) ", value)?;
    if value == 0 {
        out.write_str("Maintain current Power State")?;
        return Ok(true);
    }
    let suspended = [
        (activity.suspend_page_scan(), "Suspend Page Scan"),
        (activity.suspend_inquiry_scan(), "Suspend Inquiry Scan"),
        (activity.suspend_periodic_inquiries(), "Suspend Periodic Inquiries"),
    ];
    let mut any = false;
    for (_, text) in suspended.iter().filter(|(set, _)| *set) {
        if any {
            out.write_str(" | ")?;
        }
        out.write_str(text)?;
        any = true;
    }
    if !any {
        out.write_str(RFU)?;
    }
    Ok(true)
}

fn link_policy<W: Write>(out: &mut W, value: u16) -> Result<bool, DecodeError> {
    let policy = LinkPolicyBits::from_bytes(value.to_le_bytes());
    write!(out, "(0x{:04x}) ", value)?;
    if value == 0 {
        out.write_str("Disable All LM Modes Default")?;
    } else if value & 0x000f == 0 {
        out.write_str(RFU)?;
    } else {
        let state = |on: bool| if on { "Enable" } else { "Disable" };
        write!(
            out,
            "Role switch: {} | Hold Mode: {} | Sniff Mode: {} | Park State: {}",
            state(policy.role_switch()),
            state(policy.hold_mode()),
            state(policy.sniff_mode()),
            state(policy.park_state())
        )?;
    }
    Ok(true)
}

fn acl_packet_types<W: Write>(out: &mut W, value: u16) -> Result<bool, DecodeError> {
    let types = AclPacketTypeBits::from_bytes(value.to_le_bytes());
    write!(out, "0x{:04x}", value)?;
    usable(out, "2-DH1", !types.no_2dh1())?;
    usable(out, "3-DH1", !types.no_3dh1())?;
    usable(out, "DM1", types.dm1())?;
    usable(out, "DH1", types.dh1())?;
    usable(out, "2-DH3", !types.no_2dh3())?;
    usable(out, "3-DH3", !types.no_3dh3())?;
    usable(out, "DM3", types.dm3())?;
    usable(out, "DH3", types.dh3())?;
    usable(out, "2-DH5", !types.no_2dh5())?;
    usable(out, "3-DH5", !types.no_3dh5())?;
    usable(out, "DM5", types.dm5())?;
    usable(out, "DH5", types.dh5())?;
    Ok(true)
}

fn sco_packet_types<W: Write>(out: &mut W, value: u16) -> Result<bool, DecodeError> {
    let types = ScoPacketTypeBits::from_bytes(value.to_le_bytes());
    write!(out, "0x{:04x}", value)?;
    usable(out, "HV1", types.hv1())?;
    usable(out, "HV2", types.hv2())?;
    usable(out, "HV3", types.hv3())?;
    usable(out, "EV3", types.ev3())?;
    usable(out, "EV4", types.ev4())?;
    usable(out, "EV5", types.ev5())?;
    usable(out, "2-EV3", !types.no_2ev3())?;
    usable(out, "3-EV3", !types.no_3ev3())?;
    usable(out, "2-EV5", !types.no_2ev5())?;
    usable(out, "3-EV5", !types.no_3ev5())?;
    Ok(true)
}

#[cfg(test)]
mod tests {
    use super::*;

    fn text(id: SpecialId, bytes: &[u8]) -> Option<heapless::String<512>> {
        let mut out = heapless::String::new();
        match render(id, bytes, &mut out) {
            Ok(true) => Some(out),
            _ => None,
        }
    }

    #[test]
    fn security_material_is_redacted() {
        assert_eq!(text(SpecialId::SecurityKey, &[0xaa; 16]).unwrap(), SECURITY_HIDDEN);
        assert_eq!(text(SpecialId::SecurityPasskey, &[1, 2, 3, 4]).unwrap(), SECURITY_HIDDEN);
    }

    #[test]
    fn rssi_special_values() {
        assert_eq!(text(SpecialId::Rssi, &[0x7f]).unwrap(), "(0x7f) RSSI is not available");
        assert_eq!(text(SpecialId::Rssi, &[0x30]).unwrap(), "(0x30) Reserved for future use");
        assert_eq!(text(SpecialId::Rssi, &[0xc4]).unwrap(), "(0xc4) -60 dBm");
    }

    #[test]
    fn scan_enable_out_of_range_falls_back() {
        assert_eq!(text(SpecialId::ScanEnable, &[0x03]).unwrap(), "(0x03) Inquiry Scan enabled. Page Scan enabled.");
        assert!(text(SpecialId::ScanEnable, &[0x04]).is_none());
        assert!(text(SpecialId::PinType, &[0x02]).is_none());
    }

    #[test]
    fn lap_recognises_giac() {
        assert_eq!(
            text(SpecialId::LapIac, &[0x33, 0x8b, 0x9e]).unwrap(),
            "(0x009e8b33) General/Unlimited Inquiry Access Code(GIAC)"
        );
        assert_eq!(text(SpecialId::LapIac, &[0x00, 0x8b, 0x9e]).unwrap(), "0x009e8b00");
    }

    #[test]
    fn voice_setting_fields() {
        // 0x0060: linear input, 2's complement, 16-bit samples, CVSD
        let out = text(SpecialId::VoiceSetting, &[0x60, 0x00]).unwrap();
        let mut lines = out.split('\n');
        assert_eq!(lines.next(), Some("(0x0060)"));
        assert_eq!(lines.next().map(str::trim), Some("Input Coding: Linear"));
        assert_eq!(lines.next().map(str::trim), Some("Input Data Format: 2's complement"));
        assert_eq!(lines.next().map(str::trim), Some("Input Sample Size: 16-bit(only for linear PCM)"));
        assert!(lines.next().unwrap().contains("Linear_PCM_Bit_Pos: 0 bit"));
        assert_eq!(lines.next().map(str::trim), Some("Air Coding Format: CVSD"));
        assert_eq!(lines.next(), None);
    }

    #[test]
    fn acl_packet_types_lists_every_type() {
        let out = text(SpecialId::AclPacketType, &[0x18, 0xcc]).unwrap();
        assert!(out.starts_with("0xcc18\n"));
        assert_eq!(out.lines().count(), 13);
        assert!(out.contains("  DM1 may be used"));
        assert!(out.contains("2-DH1 may be used"));
        assert!(out.contains("  DM3 may be used"));
        assert!(out.contains("  DH1 may be used"));
        assert!(out.contains("  DH5 may be used"));
    }

    #[test]
    fn link_policy_and_hold_mode() {
        assert_eq!(
            text(SpecialId::LinkPolicySettings, &[0x05, 0x00]).unwrap(),
            "(0x0005) Role switch: Enable | Hold Mode: Disable | Sniff Mode: Enable | Park State: Disable"
        );
        assert_eq!(text(SpecialId::HoldModeActivity, &[0x00]).unwrap(), "(0x00) Maintain current Power State");
        assert_eq!(
            text(SpecialId::HoldModeActivity, &[0x05]).unwrap(),
            "(0x05) Suspend Page Scan | Suspend Periodic Inquiries"
        );
    }

    #[test]
    fn location_domain_options_compare_characters() {
        assert_eq!(
            text(SpecialId::LocationDomainOptions, b"O").unwrap(),
            "(0x4f) 'O' indicates for use outdoors only"
        );
        assert_eq!(
            text(SpecialId::LocationDomainOptions, &[0x00]).unwrap(),
            "(0x00) Reserved for future use"
        );
    }
}
