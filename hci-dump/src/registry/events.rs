//! HCI events, keyed by event code.

use super::*;
use crate::special::SpecialId;

pub(super) const CAPACITY: u16 = 87;

pub(super) static UNITS: &[Unit] = &[
    Unit::new(0x01, "Inquiry Complete",
        &[
            hex("status", 1),
        ],
        &[]),
    Unit::new(0x02, "Inquiry Result",
        &[
            dec("Num_Responses", 1).repeating(6),
            bd_addr("BD_ADDR"),
            special("Page_Scan_Repetition_Mode", 1, SpecialId::PageScanRepetitionMode),
            hex("Reserved1", 1),
            hex("Reserved2", 1),
            hex("Class_of_Device", 3),
            hex("Clock_Offset", 2),
        ],
        &[]),
    Unit::new(0x03, "Connection Complete",
        &[
            status("Status"),
            handle("Connection_Handle"),
            bd_addr("BD_ADDR"),
            hex("Link_Type", 1),
            hex("Encryption_Enabled", 1),
        ],
        &[]),
    Unit::new(0x04, "Connection Request",
        &[
            bd_addr("BD_ADDR"),
            hex("Class_of_Device", 3),
            hex("Link_Type", 1),
        ],
        &[]),
    Unit::new(0x05, "Disconnection Complete",
        &[
            status("Status"),
            handle("Connection_Handle"),
            status("Reason"),
        ],
        &[]),
    Unit::new(0x06, "Authentication Complete",
        &[
            status("Status"),
            handle("Connection_Handle"),
        ],
        &[]),
    Unit::new(0x07, "Remote Name Request Complete",
        &[
            status("Status"),
            bd_addr("BD_ADDR"),
            chars("Remote_Name", 248),
        ],
        &[]),
    Unit::new(0x08, "Encryption Change",
        &[
            status("Status"),
            handle("Connection_Handle"),
            hex("Encryption_Enabled", 1),
        ],
        &[]),
    Unit::new(0x09, "Change Connection Link Key Complete",
        &[
            status("Status"),
            handle("Connection_Handle"),
        ],
        &[]),
    Unit::new(0x0A, "Master Link Key Complete",
        &[
            status("Status"),
            handle("Connection_Handle"),
            hex("Key_Flag", 1),
        ],
        &[]),
    Unit::new(0x0B, "Read Remote Supported Features Complete",
        &[
            status("Status"),
            handle("Connection_Handle"),
            bytes("Key_Flag", 8),
        ],
        &[]),
    Unit::new(0x0C, "Read Remote Version Information Complete",
        &[
            status("Status"),
            handle("Connection_Handle"),
            hex("Version", 1),
            hex("Manufacturer_Name", 2),
            hex("Subversion", 2),
        ],
        &[]),
    Unit::new(0x0D, "QoS Setup Complete",
        &[
            status("Status"),
            handle("Connection_Handle"),
            hex("Flags", 1),
            hex("Service_Type", 1),
            hex("Token_Rate", 4),
            hex("Peak_Bandwidth", 4),
            hex("Latency", 4),
            hex("Delay_Variation", 4),
        ],
        &[]),
    Unit::new(0x0E, "Command Complete",
        &[
            dec("Num_HCI_Command_Packets", 1),
            opcode("Command_Opcode"),
        ],
        &[]),
    Unit::new(0x0F, "Command Status",
        &[
            status("Status"),
            dec("Num_HCI_Command_Packets", 1),
            opcode("Command_Opcode"),
        ],
        &[]),
    Unit::new(0x10, "Hardware Error",
        &[
            hex("Hardware_Code", 1),
        ],
        &[]),
    Unit::new(0x11, "Flush Occurred",
        &[
            hex("Handle", 2),
        ],
        &[]),
    Unit::new(0x12, "Role Change",
        &[
            status("Status"),
            bd_addr("BD_ADDR"),
            hex("New_Role", 1),
        ],
        &[]),
    Unit::new(0x13, "Number Of Completed Packets",
        &[
            dec("Number_of_Handles", 1).repeating(2),
            handle("Connection_Handle"),
            dec("HC_Num_Of_Completed_Packet", 2),
        ],
        &[]),
    Unit::new(0x14, "Mode Change",
        &[
            status("Status"),
            handle("Connection_Handle"),
            hex("Current_Mode", 1),
            clk625us("Interval", 2),
        ],
        &[]),
    Unit::new(0x15, "Return Link Keys",
        &[
            dec("Num_Keys", 1).repeating(2),
            bd_addr("BD_ADDR"),
            special("Link_Key", 16, SpecialId::SecurityKey),
        ],
        &[]),
    Unit::new(0x16, "PIN Code Request",
        &[
            bd_addr("BD_ADDR"),
        ],
        &[]),
    Unit::new(0x17, "Link Key Request",
        &[
            bd_addr("BD_ADDR"),
        ],
        &[]),
    Unit::new(0x18, "Link Key Notification",
        &[
            bd_addr("BD_ADDR"),
            special("Link_Key", 16, SpecialId::SecurityKey),
            hex("Key_Type", 1),
        ],
        &[]),
    Unit::new(0x19, "Loopback Command",
        &[],
        &[]),
    Unit::new(0x1A, "Data Buffer Overflow",
        &[
            hex("Link_Type", 1),
        ],
        &[]),
    Unit::new(0x1B, "Max Slots Change",
        &[
            handle("Connection_Handle"),
            dec("LMP_Max_Slots", 1),
        ],
        &[]),
    Unit::new(0x1C, "Read Clock Offset Complete",
        &[
            status("Status"),
            handle("Connection_Handle"),
            hex("Clock_Offset", 2),
        ],
        &[]),
    Unit::new(0x1D, "Connection Packet Type Changed",
        &[
            status("Status"),
            handle("Connection_Handle"),
            special("Packet_Type", 2, SpecialId::AclPacketType),
        ],
        &[]),
    Unit::new(0x1E, "QoS Violation",
        &[
            hex("Handle", 2),
        ],
        &[]),
    Unit::new(0x20, "Page Scan Repetition Mode Change",
        &[
            bd_addr("BD_ADDR"),
            special("Page_Scan_Repetition_Mode", 1, SpecialId::PageScanRepetitionMode),
        ],
        &[]),
    Unit::new(0x21, "Flow Specification Complete",
        &[
            status("Status"),
            handle("Connection_Handle"),
            hex("Flags", 1),
            hex("Flow_direction", 1),
            hex("Service_Type", 1),
            hex("Token_Rate", 4),
            dec("Token_Bucket_Size", 4),
            hex("Peak_Bandwidth", 4),
            hex("Access_Lantency", 4),
        ],
        &[]),
    Unit::new(0x22, "Inquiry Result with RSSI",
        &[
            dec("Num_responses", 1).repeating(6),
            bd_addr("BD_ADDR"),
            special("Page_Scan_Repetition_Mode", 1, SpecialId::PageScanRepetitionMode),
            hex("Reserved", 1),
            hex("Class_Of_Device", 3),
            hex("Clock_Offset", 2),
            special("RSSI", 1, SpecialId::Rssi),
        ],
        &[]),
    Unit::new(0x23, "Read Remote Extended Features Complete",
        &[
            status("Status"),
            handle("Connection_Handle"),
            dec("Page_Number", 1),
            dec("Maximum_Page_Number", 1),
            bytes("Extended_LMP_Features", 8),
        ],
        &[]),
    Unit::new(0x2C, "Synchronous Connection Complete",
        &[
            status("Status"),
            handle("Connection_Handle"),
            bd_addr("BD_ADDR"),
            hex("Link_Type", 1),
            dec("Transmission_Interval", 1),
            dec("Retransmission_Window", 1),
            dec("Rx_Packet_Length", 2),
            dec("Tx_Packet_Length", 2),
            hex("Air_Mode", 1),
        ],
        &[]),
    Unit::new(0x2D, "Synchronous Connection Changed",
        &[
            status("Status"),
            handle("Connection_Handle"),
            dec("Transmission_Interval", 1),
            dec("Retransmission_Window", 1),
            dec("Rx_Packet_Length", 2),
            dec("Tx_Packet_Length", 2),
        ],
        &[]),
    Unit::new(0x2E, "Sniff Subrating",
        &[
            status("Status"),
            handle("Connection_Handle"),
            clk625us("Maximum_Transmit_Latency", 2),
            clk625us("Maximum_Receive_Latency", 2),
            clk625us("Minimum_Remote_Timeout", 2),
            clk625us("Minimum_Local_Timeout", 2),
        ],
        &[]),
    Unit::new(0x2F, "Extended Inquiry Result",
        &[
            dec("Num_Responses", 1),
            bd_addr("BD_ADDR"),
            special("Page_Scan_Repetition_Mode", 1, SpecialId::PageScanRepetitionMode),
            hex("Reserved", 1),
            hex("Class_Of_Device", 3),
            hex("Clock_Offset", 2),
            special("RSSI", 1, SpecialId::Rssi),
            bytes("Extended_Inquiry_Response", 240),
        ],
        &[]),
    Unit::new(0x30, "Encryption Key Refresh Complete",
        &[
            status("Status"),
            handle("Connection_Handle"),
        ],
        &[]),
    Unit::new(0x31, "IO Capability Request",
        &[
            bd_addr("BD_ADDR"),
        ],
        &[]),
    Unit::new(0x32, "IO Capability Response",
        &[
            bd_addr("BD_ADDR"),
            hex("IO_Capability", 1),
            hex("OOB_Data_Present", 1),
            hex("Authenticatioin_requirements", 1),
        ],
        &[]),
    Unit::new(0x33, "User Confirmation Request",
        &[
            bd_addr("BD_ADDR"),
            hex("Numeric_Value", 4),
        ],
        &[]),
    Unit::new(0x34, "User Passkey Request",
        &[
            bd_addr("BD_ADDR"),
        ],
        &[]),
    Unit::new(0x35, "Remote OOB Data Request",
        &[
            bd_addr("BD_ADDR"),
        ],
        &[]),
    Unit::new(0x36, "Simple Pairing Complete",
        &[
            status("Status"),
            bd_addr("BD_ADDR"),
        ],
        &[]),
    Unit::new(0x38, "Link Supervision Timeout Changed",
        &[
            handle("Connection_Handle"),
            hex("Link_Supervision_Timeout", 2),
        ],
        &[]),
    Unit::new(0x39, "Enhanced Flush Complete",
        &[
            hex("Handle", 2),
        ],
        &[]),
    Unit::new(0x3B, "User Passkey Notification",
        &[
            bd_addr("BD_ADDR"),
            special("Passkey", 4, SpecialId::SecurityPasskey),
        ],
        &[]),
    Unit::new(0x3C, "Keypress Notification",
        &[
            bd_addr("BD_ADDR"),
            hex("Notification_Type", 1),
        ],
        &[]),
    Unit::new(0x3D, "Remote Host Supported Features Notification",
        &[
            bd_addr("BD_ADDR"),
            bytes("Host_Supported_Features", 8),
        ],
        &[]),
    Unit::new(0x3E, "LE Meta Event",
        &[],
        &[]),
    Unit::new(0x40, "Physical Link Complete",
        &[
            status("Status"),
            hex("Physical_Link_Handle", 1),
        ],
        &[]),
    Unit::new(0x41, "Channel Selected",
        &[
            hex("Physical_Link_Handle", 1),
        ],
        &[]),
    Unit::new(0x42, "Disconnection Physical Link Complete",
        &[
            status("Status"),
            hex("Physical_Link_Handle", 1),
            status("Reason"),
        ],
        &[]),
    Unit::new(0x43, "Physical Link Loss Early Warning",
        &[
            hex("Physical_Link_Handle", 1),
            hex("Link_Loss_Reason", 1),
        ],
        &[]),
    Unit::new(0x44, "Physical Link Recovery",
        &[
            hex("Physical_Link_Handle", 1),
        ],
        &[]),
    Unit::new(0x45, "Logical Link Complete",
        &[
            status("Status"),
            hex("Logical_Link_Handle", 2),
            hex("Physical_Link_Handle", 1),
            hex("Tx_Flow_Spec_ID", 1),
        ],
        &[]),
    Unit::new(0x46, "Disconnection Logical Link Complete",
        &[
            status("Status"),
            hex("Logical_Link_Handle", 2),
            status("Reason"),
        ],
        &[]),
    Unit::new(0x47, "Flow Spec Modify Complete",
        &[
            status("Status"),
            hex("Handle", 2),
        ],
        &[]),
    Unit::new(0x48, "Number Of Completed Data Blocks",
        &[
            dec("Total_Num_Data_Blocks", 2),
            dec("Number_Of_Handles", 1).repeating(3),
            hex("Handle", 2),
            dec("Num_Of_Completed_Pakcets", 2),
            dec("Num_Of_Completed_Blocks", 2),
        ],
        &[]),
    Unit::new(0x49, "AMP Start Test",
        &[
            status("Status"),
            hex("Test Scenario", 1),
        ],
        &[]),
    Unit::new(0x4A, "AMP Test End",
        &[
            status("Status"),
            hex("Test Scenario", 1),
        ],
        &[]),
    Unit::new(0x4B, "AMP Receiver Report",
        &[
            hex("Controller_Type", 1),
            hex("Reason", 1),
            hex("Event_type", 4),
            dec("Number_Of_Frames", 2),
            dec("Number_Of_Error_Frames", 2),
            dec("Number_Of_Bits", 4),
            dec("Number_Of_Error_Bits", 4),
        ],
        &[]),
    Unit::new(0x4C, "Short_Range_Mode_Change_Complete",
        &[
            status("Status"),
            hex("Physical_Link_Handle", 1),
            hex("Short_Range_Mode_State", 1),
        ],
        &[]),
    Unit::new(0x4D, "AMP_Status_Change",
        &[
            status("Status"),
            hex("AMP_Status", 1),
        ],
        &[]),
    Unit::new(0x4E, "Triggered Clock Capture",
        &[
            handle("Connection_Handle"),
            hex("Which_Clock", 1),
            hex("Clock", 4),
            hex("Slot_Offset", 2),
        ],
        &[]),
    Unit::new(0x4F, "Synchronization Train Complete",
        &[
            status("Status"),
        ],
        &[]),
    Unit::new(0x50, "Synchronization Train Received",
        &[
            status("Status"),
            bd_addr("BD_ADDR"),
            hex("Clock_Offset", 4),
            bytes("AFH_Channel_Map", 10),
            hex("LT_ADDR", 1),
            hex("Next_Broadcast_Instant", 4),
            hex("Connectionless_Slave_Broadcast_Interval", 2),
            hex("Service_Data", 1),
        ],
        &[]),
    Unit::new(0x51, "Connectionless Slave Broadcast Receive",
        &[
            bd_addr("BD_ADDR"),
            hex("LT_ADDR", 1),
            hex("CLK", 4),
            hex("Offset", 4),
            hex("Receive_Status", 1),
            hex("Fragment", 1),
            dec("Data_Length", 1),
            bytes_ref("Data", -1),
        ],
        &[]),
    Unit::new(0x52, "Connectionless Slave Broadcast Timeout",
        &[
            bd_addr("BD_ADDR"),
            hex("LT_ADDR", 1),
        ],
        &[]),
    Unit::new(0x53, "Truncated Page Complete",
        &[
            status("Status"),
            bd_addr("BD_ADDR"),
        ],
        &[]),
    Unit::new(0x54, "Slave Page Response Timeout",
        &[],
        &[]),
    Unit::new(0x55, "Connectionless Slave Broadcast Channel Map Change",
        &[
            bytes("Channel_Map", 10),
        ],
        &[]),
    Unit::new(0x56, "Inquiry Response Notification",
        &[
            special("LAP", 3, SpecialId::LapIac),
            special("RSSI", 1, SpecialId::Rssi),
        ],
        &[]),
    Unit::new(0x57, "Authenticated Payload Timeout Expired",
        &[
            handle("Connection_Handle"),
        ],
        &[]),
];
