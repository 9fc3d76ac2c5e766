//! Link Control commands (OGF 0x01).

use super::*;
use crate::special::SpecialId;

pub(super) const CAPACITY: u16 = 69;

pub(super) static UNITS: &[Unit] = &[
    Unit::new(0x0401, "HCI_Inquiry",
        &[
            special("LAP", 3, SpecialId::LapIac),
            clk1280ms("Inquiry_Length", 1),
            dec("Num_Responses", 1),
        ],
        &[]),
    Unit::new(0x0402, "HCI_Inquiry_Cancel",
        &[],
        &[
            status("Status"),
        ]),
    Unit::new(0x0403, "HCI_Periodic_Inquiry_Mode",
        &[
            clk1280ms("Max_Period_Length", 2),
            clk1280ms("Min_Period_Length", 2),
            special("LAP", 3, SpecialId::LapIac),
            clk1280ms("Inquiry_Length", 1),
            dec("Num_Responses", 1),
        ],
        &[
            status("Status"),
        ]),
    Unit::new(0x0404, "HCI_Exit_Periodic_Inquiry_Mode",
        &[],
        &[
            status("Status"),
        ]),
    Unit::new(0x0405, "HCI_Create_Connection",
        &[
            bd_addr("BD_ADDR"),
            special("Packet_Type", 2, SpecialId::AclPacketType),
            special("Page_Scan_Repetition_Mode", 1, SpecialId::PageScanRepetitionMode),
            hex("Reserved", 1),
            hex("Clock_Offset", 2),
            hex("Allow_Role_Switch", 1),
        ],
        &[]),
    Unit::new(0x0406, "HCI_Disconnect",
        &[
            handle("Connection_Handle"),
            status("Reason"),
        ],
        &[]),
    Unit::new(0x0408, "HCI_Create_Connection_Cancel",
        &[
            bd_addr("BD_ADDR"),
        ],
        &[
            status("Status"),
            bd_addr("BD_ADDR"),
        ]),
    Unit::new(0x0409, "HCI_Accept_Connection_Request",
        &[
            bd_addr("BD_ADDR"),
            hex("Role", 1),
        ],
        &[]),
    Unit::new(0x040A, "HCI_Reject_Connection_Request",
        &[
            bd_addr("BD_ADDR"),
            status("Reason"),
        ],
        &[]),
    Unit::new(0x040B, "HCI_Link_Key_Request_Reply",
        &[
            bd_addr("BD_ADDR"),
            special("Link_Key", 16, SpecialId::SecurityKey),
        ],
        &[
            status("Status"),
            bd_addr("BD_ADDR"),
        ]),
    Unit::new(0x040C, "HCI_Link_Key_Request_Negative_Reply",
        &[
            bd_addr("BD_ADDR"),
        ],
        &[
            status("Status"),
            bd_addr("BD_ADDR"),
        ]),
    Unit::new(0x040D, "HCI_PIN_Code_Request_Reply",
        &[
            bd_addr("BD_ADDR"),
            dec("PIN_Code_Length", 1),
            special("PIN_Code", 16, SpecialId::SecurityKey),
        ],
        &[
            status("Status"),
            bd_addr("BD_ADDR"),
        ]),
    Unit::new(0x040E, "HCI_PIN_Code_Request_Negative_Reply",
        &[
            bd_addr("BD_ADDR"),
        ],
        &[
            status("Status"),
            bd_addr("BD_ADDR"),
        ]),
    Unit::new(0x040F, "HCI_Change_Connection_Packet_Type",
        &[
            handle("Connection_Handle"),
            special("Packet_Type", 2, SpecialId::AclPacketType),
        ],
        &[]),
    Unit::new(0x0411, "HCI_Authentication_Requested",
        &[
            handle("Connection_Handle"),
        ],
        &[]),
    Unit::new(0x0413, "HCI_Set_Connection_Encryption",
        &[
            handle("Connection_Handle"),
            hex("Encryption_Enable", 1),
        ],
        &[]),
    Unit::new(0x0415, "HCI_Change_Connection_Link_Key",
        &[
            handle("Connection_Handle"),
        ],
        &[]),
    Unit::new(0x0417, "HCI_Master_Link_Key",
        &[
            hex("Key_Flag", 1),
        ],
        &[]),
    Unit::new(0x0419, "HCI_Remote_Name_Request",
        &[
            bd_addr("BD_ADDR"),
            special("Page_Scan_Repetition_Mode", 1, SpecialId::PageScanRepetitionMode),
            hex("Reserved", 1),
            hex("Clock_Offset", 2),
        ],
        &[]),
    Unit::new(0x041A, "HCI_Remote_Name_Request_Cancel",
        &[
            bd_addr("BD_ADDR"),
        ],
        &[
            status("Status"),
            bd_addr("BD_ADDR"),
        ]),
    Unit::new(0x041B, "HCI_Read_Remote_Supported_Features",
        &[
            handle("Connection_Handle"),
        ],
        &[]),
    Unit::new(0x041C, "HCI_Read_Remote_Extended_Features",
        &[
            handle("Connection_Handle"),
            dec("Page Number", 1),
        ],
        &[]),
    Unit::new(0x041D, "HCI_Read_Remote_Version_Information",
        &[
            handle("Connection_Handle"),
        ],
        &[]),
    Unit::new(0x041F, "HCI_Read_Clock_Offset",
        &[
            handle("Connection_Handle"),
        ],
        &[]),
    Unit::new(0x0420, "HCI_Read_LMP_Handle",
        &[
            handle("Connection_Handle"),
        ],
        &[]),
    Unit::new(0x0428, "HCI_Setup_Synchronous_Connection",
        &[
            handle("Connection_Handle"),
            hex("Transmit_Bandwidth", 4),
            hex("Receive_Bandwidth", 4),
            hex("Max_Latency", 2),
            special("Voice_Setting", 2, SpecialId::VoiceSetting),
            hex("Retransmission_Effort", 1),
            special("Packet_Type", 2, SpecialId::ScoPacketType),
        ],
        &[]),
    Unit::new(0x0429, "HCI_Accept_Synchronous_Connection_Request",
        &[
            bd_addr("BD_ADDR"),
            hex("Transmit_Bandwidth", 4),
            hex("Receive_Bandwidth", 4),
            hex("Max_Latency", 2),
            special("Voice_Setting", 2, SpecialId::VoiceSetting),
            hex("Retransmission_Effort", 1),
            special("Packet_Type", 2, SpecialId::ScoPacketType),
        ],
        &[]),
    Unit::new(0x042A, "HCI_Reject_Synchronous_Connection_Request",
        &[
            bd_addr("BD_ADDR"),
            status("Reason"),
        ],
        &[]),
    Unit::new(0x042B, "HCI_IO_Capability_Request_Reply",
        &[
            bd_addr("BD_ADDR"),
            hex("IO_Capability", 1),
            hex("OOB_Data_Present", 1),
            hex("Authentication_Requirements", 1),
        ],
        &[
            status("Status"),
            bd_addr("BD_ADDR"),
        ]),
    Unit::new(0x042C, "HCI_User_Confirmation_Request_Reply",
        &[
            bd_addr("BD_ADDR"),
        ],
        &[
            status("Status"),
            bd_addr("BD_ADDR"),
        ]),
    Unit::new(0x042D, "HCI_User_Confirmation_Request_Negative_Reply",
        &[
            bd_addr("BD_ADDR"),
        ],
        &[
            status("Status"),
            bd_addr("BD_ADDR"),
        ]),
    Unit::new(0x042E, "HCI_User_Passkey_Request_Reply",
        &[
            bd_addr("BD_ADDR"),
            hex("Numeric_Value", 4),
        ],
        &[
            status("Status"),
            bd_addr("BD_ADDR"),
        ]),
    Unit::new(0x042F, "HCI_User_Passkey_Request_Negative_Reply",
        &[
            bd_addr("BD_ADDR"),
        ],
        &[
            status("Status"),
            bd_addr("BD_ADDR"),
        ]),
    Unit::new(0x0430, "HCI_Remote_OOB_Data_Request_Reply",
        &[
            bd_addr("BD_ADDR"),
            bytes("C", 16),
            bytes("R", 16),
        ],
        &[
            status("Status"),
            bd_addr("BD_ADDR"),
        ]),
    Unit::new(0x0433, "HCI_Remote_OOB_Data_Request_Negative_Reply",
        &[
            bd_addr("BD_ADDR"),
        ],
        &[
            status("Status"),
            bd_addr("BD_ADDR"),
        ]),
    Unit::new(0x0434, "HCI_IO_Capability_Request_Negative_Reply",
        &[
            bd_addr("BD_ADDR"),
            status("Reason"),
        ],
        &[
            status("Status"),
            bd_addr("BD_ADDR"),
        ]),
    Unit::new(0x0435, "HCI_Create_Physical_Link",
        &[
            hex("Physical_Link_Handle", 1),
            dec("Dedicated_AMP_Key_Length", 1),
            hex("Dedicated_AMP_Key_Type", 1),
            bytes_ref("Dedicated_AMP_Key", -2),
        ],
        &[]),
    Unit::new(0x0436, "HCI_Accept_Physical_Link",
        &[
            hex("Physical_Link_Handle", 1),
            dec("Dedicated_AMP_Key_Length", 1),
            hex("Dedicated_AMP_Key_Type", 1),
            bytes_ref("Dedicated_AMP_Key", -2),
        ],
        &[]),
    Unit::new(0x0437, "HCI_Disconnect_Physical_Link",
        &[
            hex("Physical_Link_Handle", 1),
            status("Reason"),
        ],
        &[]),
    Unit::new(0x0438, "HCI_Create_Logical_Link",
        &[
            hex("Physical_Link_Handle", 1),
            bytes("Tx_Flow_Spec", 16),
            bytes("Rx_Flow_Spec", 16),
        ],
        &[]),
    Unit::new(0x0439, "HCI_Accept_Logical_Link",
        &[
            hex("Physical_Link_Handle", 1),
            bytes("Tx_Flow_Spec", 16),
            bytes("Rx_Flow_Spec", 16),
        ],
        &[]),
    Unit::new(0x043A, "HCI_Disconnect_Logical_Link",
        &[
            hex("Logical_Link_Handle", 2),
        ],
        &[]),
    Unit::new(0x043B, "HCI_Logical_Link_Cancel",
        &[
            hex("Physical_Link_Handle", 1),
            hex("Tx_Flow_Spec_ID", 1),
        ],
        &[
            status("Status"),
            hex("Physical_Link_Handle", 1),
            hex("Tx_Flow_Spec_ID", 1),
        ]),
    Unit::new(0x043C, "HCI_Flow_Spec_Modify",
        &[
            hex("Handle", 2),
            bytes("Tx_Flow_Spec", 16),
            bytes("Rx_Flow_Spec", 16),
        ],
        &[]),
    Unit::new(0x043D, "HCI_Enhanced_Setup_Synchronous_Connection",
        &[
            handle("Connection_Handle"),
            hex("Transmit_Bandwidth", 4),
            hex("Receive_Bandwidth", 4),
            bytes("Transmit_Coding_Format", 5),
            bytes("Receive_Coding_Format", 5),
            hex("Transmit_Codec_Frame_Size", 2),
            hex("Receive_Codec_Frame_Size", 2),
            hex("Input_Bandwidth", 4),
            hex("Output_Bandwidth", 4),
            bytes("Input_Coding_Format", 5),
            bytes("Output_Coding_Format", 5),
            dec("Input_Coded_Data_Size", 2),
            dec("Output_Coded_Data_Size", 2),
            hex("Input_PCM_Data_Format", 1),
            hex("Output_PCM_Data_Format", 1),
            hex("Input_PCM_Sample_Payload_MSB_Position", 1),
            hex("Output_PCM_Sample_Payload_MSB_Position", 1),
            hex("InputData_Path", 1),
            hex("Output_Data_Path", 1),
            dec("Input_Transport_Unit_Size", 1),
            dec("Output_Transport_Unit_Size", 1),
            hex("Max_Latency", 2),
            special("Packet_Type", 2, SpecialId::ScoPacketType),
            hex("Retransmission_Effort", 1),
        ],
        &[]),
    Unit::new(0x043E, "HCI_Enhanced_Accept_Synchronous_Connection_Request",
        &[
            bd_addr("BD_ADDR"),
            hex("Transmit_Bandwidth", 4),
            hex("Receive_Bandwidth", 4),
            bytes("Transmit_Coding_Format", 5),
            bytes("Receive_Coding_Format", 5),
            dec("Transmit_Codec_Frame_Size", 2),
            dec("Receive_Codec_Frame_Size", 2),
            hex("Input_Bandwidth", 4),
            hex("Output_Bandwidth", 4),
            bytes("Input_Coding_Format", 5),
            bytes("Output_Coding_Format", 5),
            dec("Input_Coded_Data_Size", 2),
            dec("Output_Coded_Data_Size", 2),
            hex("Input_PCM_Data_Format", 1),
            hex("Output_PCM_Data_Format", 1),
            hex("Input_PCM_Sample_Payload_MSB_Position", 1),
            hex("Output_PCM_Sample_Payload_MSB_Position", 1),
            hex("InputData_Path", 1),
            hex("Output_Data_Path", 1),
            dec("Input_Transport_Unit_Size", 1),
            dec("Output_Transport_Unit_Size", 1),
            hex("Max_Latency", 2),
            special("Packet_Type", 2, SpecialId::ScoPacketType),
            hex("Retransmission_Effort", 1),
        ],
        &[]),
    Unit::new(0x043F, "HCI_Truncated_Page",
        &[
            bd_addr("BD_ADDR"),
            special("Page_Scan_Repetition_Mode", 1, SpecialId::PageScanRepetitionMode),
            bytes("Clock_Offset", 2),
        ],
        &[]),
    Unit::new(0x0440, "HCI_Truncated_Page_Cancel",
        &[
            bd_addr("BD_ADDR"),
        ],
        &[
            status("Status"),
            bd_addr("BD_ADDR"),
        ]),
    Unit::new(0x0441, "HCI_Set_Connectionless_Slave_Broadcast",
        &[
            hex("Enable", 1),
            hex("LT_ADDR", 1),
            hex("LPO_Allowed", 1),
            special("Packet_Type", 2, SpecialId::AclPacketType),
            hex("Interval_Min", 2),
            hex("Interval_Max", 2),
            hex("CSB_supervisionTO", 2),
        ],
        &[
            status("Status"),
            hex("LT_ADDR", 1),
            hex("Interval", 2),
        ]),
    Unit::new(0x0442, "HCI_Set_Connectionless_Slave_Broadcast_Receive",
        &[
            hex("Enable", 1),
            bd_addr("BD_ADDR"),
            hex("LT_ADDR", 1),
            hex("Interval", 2),
            hex("Clock_Offset", 4),
            hex("Next_Connectionless_Slave_Broadcast_Clock", 4),
            hex("CSB_supervisionTO", 2),
            hex("Remote_Timing_Accuracy", 1),
            hex("Skip", 1),
            special("Packet_Type", 2, SpecialId::AclPacketType),
            bytes("AFH_Channel_Map", 10),
        ],
        &[
            status("Status"),
            bd_addr("BD_ADDR"),
            hex("LT_ADDR", 1),
        ]),
    Unit::new(0x0443, "HCI_Start_Synchronization_Train",
        &[],
        &[]),
    Unit::new(0x0444, "HCI_ Receive_Synchronization_Train",
        &[
            bd_addr("BD_ADDR"),
            hex("synchronization_scanTO", 2),
            hex("Sync_Scan_Window", 2),
            hex("Sync_Scan_Interval", 2),
        ],
        &[]),
    Unit::new(0x0445, "HCI_Remote_OOB_Extended_Data_Request_Reply",
        &[
            bd_addr("BD_ADDR"),
            bytes("C_192", 16),
            bytes("R_192", 16),
            bytes("C_256", 16),
            bytes("R_256", 16),
        ],
        &[
            status("Status"),
            bd_addr("BD_ADDR"),
        ]),
];
