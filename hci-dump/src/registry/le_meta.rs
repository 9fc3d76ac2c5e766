//! LE Meta Event sub-events, keyed by sub-event code.

use super::*;
use crate::special::SpecialId;

pub(super) const CAPACITY: u16 = 11;

pub(super) static UNITS: &[Unit] = &[
    Unit::new(0x01, "LE Connection Complete",
        &[
            status("Status"),
            handle("Connection_Handle"),
            hex("Role", 1),
            special("Peer_Address_Type", 1, SpecialId::PeerAddressType),
            bd_addr("Peer_Address"),
            clk1250us("Conn_Interval", 2),
            hex("Conn_Latency", 2),
            clk10ms("Supervision_Timeout", 2),
            hex("Master_Clock_Accuracy", 1),
        ],
        &[]),
    Unit::new(0x02, "LE Advertising Report",
        &[
            dec("Num_Reports", 1).repeating(6),
            special("Event_Type", 1, SpecialId::AdvertisingReportEventType),
            special("Address_Type", 1, SpecialId::AdvertisingReportAddressType),
            bd_addr("Address"),
            dec("Length_Data", 1),
            bytes_ref("Data", -1),
            special("RSSI", 1, SpecialId::Rssi),
        ],
        &[]),
    Unit::new(0x03, "LE Connection Update Complete",
        &[
            status("Status"),
            handle("Connection_Handle"),
            clk1250us("Conn_Interval", 2),
            hex("Conn_Latency", 2),
            clk10ms("Supervision_Timeout", 2),
        ],
        &[]),
    Unit::new(0x04, "LE Read Remote Used Features Complete",
        &[
            status("Status"),
            handle("Connection_Handle"),
            bytes("LE_Features", 8),
        ],
        &[]),
    Unit::new(0x05, "LE Long Term Key Request",
        &[
            handle("Connection_Handle"),
            bytes("Random_Number", 8),
            hex("Encrypted_Diversifier", 2),
        ],
        &[]),
    Unit::new(0x06, "LE Remote Connection Parameter Request",
        &[
            handle("Connection_Handle"),
            clk1250us("Interval_Min", 2),
            clk1250us("Interval_Max", 2),
            hex("Latency", 2),
            clk10ms("Timeout", 2),
        ],
        &[]),
    Unit::new(0x07, "LE Data Length Changes",
        &[
            handle("Connection_Handle"),
            hex("MaxTxOctets", 2),
            hex("MaxTxTime", 2),
            hex("MaxRxOctets", 2),
            hex("MaxRxTime", 2),
        ],
        &[]),
    Unit::new(0x08, "LE Read Local P-256 Public Key Complete",
        &[
            status("Status"),
            bytes("Local_P-256_Public_Key", 64),
        ],
        &[]),
    Unit::new(0x09, "LE Generate DHKey Complete",
        &[
            status("Status"),
            bytes("DHKey", 32),
        ],
        &[]),
    Unit::new(0x0A, "LE Enhanced Connection Complete",
        &[
            status("Status"),
            handle("Connection_Handle"),
            hex("Role", 1),
            special("Peer_Address_Type", 1, SpecialId::PeerAddressType),
            bd_addr("Peer_Address"),
            bd_addr("Local_Resolvable_Private_Address"),
            bd_addr("Peer_Resolvable_Private_Address"),
            clk1250us("Conn_Interval", 2),
            hex("Conn_Latency", 2),
            clk10ms("Supervision_Timeout", 2),
            hex("Master_Clock_Accuracy", 1),
        ],
        &[]),
    Unit::new(0x0B, "LE Direct Advertising Report",
        &[
            dec("Num_Reports", 1).repeating(6),
            special("Event_Type", 1, SpecialId::AdvertisingReportEventType),
            special("Address_Type", 1, SpecialId::AdvertisingReportAddressType),
            bd_addr("Address"),
            hex("Direct_Address_Type", 1),
            bd_addr("Direct_Address"),
            special("RSSI", 1, SpecialId::Rssi),
        ],
        &[]),
];
