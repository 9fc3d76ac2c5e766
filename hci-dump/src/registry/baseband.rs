//! Controller & Baseband commands (OGF 0x03).

use super::*;
use crate::special::SpecialId;

pub(super) const CAPACITY: u16 = 129;

pub(super) static UNITS: &[Unit] = &[
    Unit::new(0x0C01, "HCI_Set_Event_Mask",
        &[
            bytes("Event_Mask", 8),
        ],
        &[
            status("Status"),
        ]),
    Unit::new(0x0C03, "HCI_Reset",
        &[],
        &[
            status("Status"),
        ]),
    Unit::new(0x0C05, "HCI_Set_Event_Filter",
        &[
            hex("Filter_Type", 1),
        ],
        &[
            status("Status"),
        ]),
    Unit::new(0x0C08, "HCI_Flush",
        &[
            handle("Connection_Handle"),
        ],
        &[
            status("Status"),
            handle("Connection_Handle"),
        ]),
    Unit::new(0x0C09, "HCI_Read_PIN_Type",
        &[],
        &[
            status("Status"),
            special("PIN_Type", 1, SpecialId::PinType),
        ]),
    Unit::new(0x0C0A, "HCI_Write_PIN_Type",
        &[
            special("PIN_Type", 1, SpecialId::PinType),
        ],
        &[
            status("Status"),
        ]),
    Unit::new(0x0C0B, "HCI_Create_New_Unit_Key",
        &[],
        &[
            status("Status"),
        ]),
    Unit::new(0x0C0D, "HCI_Read_Stored_Link_Key",
        &[
            bd_addr("BD_ADDR"),
            hex("Read_All_Flag", 1),
        ],
        &[
            status("Status"),
            dec("Max_Num_Keys", 2),
            hex("Max_Keys_Read", 2),
        ]),
    Unit::new(0x0C11, "HCI_Write_Stored_Link_Key",
        &[
            dec("Num_Keys_To_Write", 1).repeating(2),
            bd_addr("BD_ADDR"),
            special("Link_Key", 16, SpecialId::SecurityKey),
        ],
        &[
            status("Status"),
            dec("Num_Keys_Written", 1),
        ]),
    Unit::new(0x0C12, "HCI_Delete_Stored_Link_Key",
        &[
            bd_addr("BD_ADDR"),
            special("Delete_All_Flag", 1, SpecialId::DeleteAllFlag),
        ],
        &[
            status("Status"),
            dec("Num_Keys_Deleted", 2),
        ]),
    Unit::new(0x0C13, "HCI_Write_Local_Name",
        &[
            chars("Local_Name", 248),
        ],
        &[
            status("Status"),
        ]),
    Unit::new(0x0C14, "HCI_Read_Local_Name",
        &[],
        &[
            status("Status"),
            chars("Local_Name", 248),
        ]),
    Unit::new(0x0C15, "HCI_Read_Connection_Accept_Timeout",
        &[],
        &[
            status("Status"),
            clk625us("Conn_Accept_Timeout", 2),
        ]),
    Unit::new(0x0C16, "HCI_Write_Connection_Accept_Timeout",
        &[
            clk625us("Conn_Accept_Timeout", 2),
        ],
        &[
            status("Status"),
        ]),
    Unit::new(0x0C17, "HCI_Read_Page_Timeout",
        &[],
        &[
            status("Status"),
            clk625us("Page_Timeout", 2),
        ]),
    Unit::new(0x0C18, "HCI_Write_Page_Timeout",
        &[
            clk625us("Page_Timeout", 2),
        ],
        &[
            status("Status"),
        ]),
    Unit::new(0x0C19, "HCI_Read_Scan_Enable",
        &[],
        &[
            status("Status"),
            special("Scan_Enable", 1, SpecialId::ScanEnable),
        ]),
    Unit::new(0x0C1A, "HCI_Write_Scan_Enable",
        &[
            special("Scan_Enable", 1, SpecialId::ScanEnable),
        ],
        &[
            status("Status"),
        ]),
    Unit::new(0x0C1B, "HCI_Read_Page_Scan_Activity",
        &[],
        &[
            status("Status"),
            clk625us("Page_Scan_Interval", 2),
            clk625us("Page_Scan_Window", 2),
        ]),
    Unit::new(0x0C1C, "HCI_Write_Page_Scan_Activity",
        &[
            clk625us("Page_Scan_Interval", 2),
            clk625us("Page_Scan_Window", 2),
        ],
        &[
            status("Status"),
        ]),
    Unit::new(0x0C1D, "HCI_Read_Inquiry_Scan_Activity",
        &[],
        &[
            status("Status"),
            clk625us("Inquiry_Scan_Interval", 2),
            clk625us("Inquiry_Scan_Window", 2),
        ]),
    Unit::new(0x0C1E, "HCI_Write_Inquiry_Scan_Activity",
        &[
            clk625us("Inquiry_Scan_Interval", 2),
            clk625us("Inquiry_Scan_Window", 2),
        ],
        &[
            status("Status"),
        ]),
    Unit::new(0x0C1F, "HCI_Read_Authentication_Enable",
        &[],
        &[
            status("Status"),
            special("Authentication_Enable", 1, SpecialId::AuthenticationEnable),
        ]),
    Unit::new(0x0C20, "HCI_Write_Authentication_Enable",
        &[
            special("Authentication_Enable", 1, SpecialId::AuthenticationEnable),
        ],
        &[
            status("Status"),
        ]),
    Unit::new(0x0C23, "HCI_Read_Class_of_Device",
        &[],
        &[
            status("Status"),
            hex("Class_of_Device", 3),
        ]),
    Unit::new(0x0C24, "HCI_Write_Class_of_Device",
        &[
            hex("Class_of_Device", 3),
        ],
        &[
            status("Status"),
        ]),
    Unit::new(0x0C25, "HCI_Read_Voice_Setting",
        &[],
        &[
            status("Status"),
            special("Voice_Setting", 2, SpecialId::VoiceSetting),
        ]),
    Unit::new(0x0C26, "HCI_Write_Voice_Setting",
        &[
            special("Voice_Setting", 2, SpecialId::VoiceSetting),
        ],
        &[
            status("Status"),
        ]),
    Unit::new(0x0C27, "HCI_Read_Automatic_Flush_Timeout",
        &[
            handle("Connection_Handle"),
        ],
        &[
            status("Status"),
            handle("Connection_Handle"),
            clk625us("Flush_Timeout", 2),
        ]),
    Unit::new(0x0C28, "HCI_Write_Automatic_Flush_Timeout",
        &[
            handle("Connection_Handle"),
            clk625us("Flush_Timeout", 2),
        ],
        &[
            status("Status"),
            handle("Connection_Handle"),
        ]),
    Unit::new(0x0C29, "HCI_Read_Num_Broadcast_Retransmissions",
        &[],
        &[
            status("Status"),
            dec("Num_Broadcast_Retransmissions", 1),
        ]),
    Unit::new(0x0C2A, "HCI_Write_Num_Broadcast_Retransmissions",
        &[
            dec("Num_Broadcast_Retransmissions", 1),
        ],
        &[
            status("Status"),
        ]),
    Unit::new(0x0C2B, "HCI_Read_Hold_Mode_Activity",
        &[],
        &[
            status("Status"),
            special("Hold_Mode_Activity", 1, SpecialId::HoldModeActivity),
        ]),
    Unit::new(0x0C2C, "HCI_Write_Hold_Mode_Activity",
        &[
            special("Hold_Mode_Activity", 1, SpecialId::HoldModeActivity),
        ],
        &[
            status("Status"),
        ]),
    Unit::new(0x0C2D, "HCI_Read_Transmit_Power_Level",
        &[
            handle("Connection_Handle"),
            hex("Type", 1),
        ],
        &[
            status("Status"),
            handle("Connection_Handle"),
            hex("Transmit_Power_Level", 1),
        ]),
    Unit::new(0x0C2E, "HCI_Read_Synchronous_Flow_Control_Enable",
        &[],
        &[
            status("Status"),
            special("Synchronous_Flow_Control_Enable", 1, SpecialId::SynchronousFlowControlEnable),
        ]),
    Unit::new(0x0C2F, "HCI_Write_Synchronous_Flow_Control_Enable",
        &[
            special("Synchronous_Flow_Control_Enable", 1, SpecialId::SynchronousFlowControlEnable),
        ],
        &[
            status("Status"),
        ]),
    Unit::new(0x0C31, "HCI_Set_Controller_To_Host_Flow_Control",
        &[
            hex("Flow_Control_Enable", 1),
        ],
        &[
            status("Status"),
        ]),
    Unit::new(0x0C33, "HCI_Host_Buffer_Size",
        &[
            dec("Host_ACL_Data_Packet_Length", 2),
            dec("Host_Synchronous_Data_Packet_Length", 1),
            dec("Host_Total_Num_ACL_Data_Packets", 2),
            dec("Host_Total_Num_Synchronous_Data_Packets", 2),
        ],
        &[
            status("Status"),
        ]),
    Unit::new(0x0C35, "HCI_Host_Number_Of_Completed_Packets",
        &[
            dec("Number_Of_Handles", 1).repeating(2),
            handle("Connection_Handle"),
            dec("Host_Num_Of_Complete_Packets", 2),
        ],
        &[]),
    Unit::new(0x0C36, "HCI_Read_Link_Supervision_Timeout",
        &[
            handle("Connection_Handle"),
        ],
        &[
            status("Status"),
            handle("Connection_Handle"),
            clk625us("Link_Supervision_Timeout", 2),
        ]),
    Unit::new(0x0C37, "HCI_Write_Link_Supervision_Timeout",
        &[
            handle("Connection_Handle"),
            clk625us("Link_Supervision_Timeout", 2),
        ],
        &[
            status("Status"),
            handle("Connection_Handle"),
        ]),
    Unit::new(0x0C38, "HCI_Read_Number_Of_Supported_IAC",
        &[],
        &[
            status("Status"),
            dec("Num_Support_IAC", 1),
        ]),
    Unit::new(0x0C39, "HCI_Read_Current_IAC_LAP",
        &[],
        &[
            status("Status"),
            dec("Num_Current_IAC", 1).repeating(1),
            special("IAC_LAP", 3, SpecialId::LapIac),
        ]),
    Unit::new(0x0C3A, "HCI_Write_Current_IAC_LAP",
        &[
            dec("Num_Current_IAC", 1).repeating(1),
            special("IAC_LAP", 3, SpecialId::LapIac),
        ],
        &[
            status("Status"),
        ]),
    Unit::new(0x0C3F, "Set_AFH_Host_Channel_Classification",
        &[
            bytes("AFH_Host_Channel_Classification", 10),
        ],
        &[
            status("Status"),
        ]),
    Unit::new(0x0C42, "HCI_Read_Inquiry_Scan_Type",
        &[],
        &[
            status("Status"),
            special("Inquiry_Scan_Type", 1, SpecialId::InquiryScanType),
        ]),
    Unit::new(0x0C43, "HCI_Write_Inquiry_Scan_Type",
        &[
            special("Inquiry_Scan_Type", 1, SpecialId::InquiryScanType),
        ],
        &[
            status("Status"),
        ]),
    Unit::new(0x0C44, "HCI_Read_Inquiry_Mode",
        &[],
        &[
            status("Status"),
            special("Inquiry_Mode", 1, SpecialId::InquiryMode),
        ]),
    Unit::new(0x0C45, "HCI_Write_Inquiry_Mode",
        &[
            special("Inquiry_Mode", 1, SpecialId::InquiryMode),
        ],
        &[
            status("Status"),
        ]),
    Unit::new(0x0C46, "HCI_Read_Page_Scan_Type",
        &[],
        &[
            status("Status"),
            special("Page_Scan_Type", 1, SpecialId::PageScanType),
        ]),
    Unit::new(0x0C47, "HCI_Write_Page_Scan_Type",
        &[
            special("Page_Scan_Type", 1, SpecialId::PageScanType),
        ],
        &[
            status("Status"),
        ]),
    Unit::new(0x0C48, "Read_AFH_Channel_Assessment_Mode",
        &[],
        &[
            status("Status"),
            hex("AFH_Channel_Assessment_Mode", 1),
        ]),
    Unit::new(0x0C49, "Write_AFH_Channel_Assessment_Mode",
        &[
            hex("AFH_Channel_Assessment_Mode", 1),
        ],
        &[
            status("Status"),
        ]),
    Unit::new(0x0C51, "HCI_Read_Extended_Inquiry_Response",
        &[],
        &[
            status("Status"),
            special("FEC_Required", 1, SpecialId::FecRequired),
            bytes("Extended_Inquiry_Response", 240),
        ]),
    Unit::new(0x0C52, "HCI_Write_Extended_Inquiry_Response",
        &[
            special("FEC_Required", 1, SpecialId::FecRequired),
            bytes("Extended_Inquiry_Response", 240),
        ],
        &[
            status("Status"),
        ]),
    Unit::new(0x0C53, "HCI_Refresh_Encryption_Key",
        &[
            handle("Connection_Handle"),
        ],
        &[]),
    Unit::new(0x0C55, "HCI_Read_Simple_Pairing_Mode",
        &[],
        &[
            status("Status"),
            special("Simple_Pairing_Mode", 1, SpecialId::SimplePairingMode),
        ]),
    Unit::new(0x0C56, "HCI_Write_Simple_Pairing_Mode",
        &[
            special("Simple_Pairing_Mode", 1, SpecialId::SimplePairingMode),
        ],
        &[
            status("Status"),
        ]),
    Unit::new(0x0C57, "HCI_Read_Local_OOB_Data",
        &[],
        &[
            status("Status"),
            bytes("C", 16),
            bytes("R", 16),
        ]),
    Unit::new(0x0C58, "HCI_Read_Inquiry_Response_Transmit_Power_Level",
        &[],
        &[
            status("Status"),
            hex("TX_Power", 1),
        ]),
    Unit::new(0x0C59, "HCI_Write_Inquiry_Transmit_Power_Level",
        &[
            hex("TX_Power", 1),
        ],
        &[
            status("Status"),
        ]),
    Unit::new(0x0C5A, "HCI_Read_Default_Erroneous_Data_Reporting",
        &[],
        &[
            status("Status"),
            special("Erroneous_Data_Reporting", 1, SpecialId::ErroneousDataReporting),
        ]),
    Unit::new(0x0C5B, "HCI_Write_Default_Erroneous_Data_Reporting",
        &[
            special("Erroneous_Data_Reporting", 1, SpecialId::ErroneousDataReporting),
        ],
        &[
            status("Status"),
        ]),
    Unit::new(0x0C5F, "HCI_Enhanced_Flush",
        &[
            handle("Connection_Handle"),
            hex("Packet_Type", 1),
        ],
        &[]),
    Unit::new(0x0C60, "HCI_Send_Keypress_Notification",
        &[
            bd_addr("BD_ADDR"),
            hex("Notification_Type", 1),
        ],
        &[
            status("Status"),
            bd_addr("BD_ADDR"),
        ]),
    Unit::new(0x0C61, "HCI_Read_Logical_Link_Accept_Timeout",
        &[],
        &[
            status("Status"),
            clk625us("Logical_Link_Accept_Timeout", 2),
        ]),
    Unit::new(0x0C62, "HCI_Write_Logical_Link_Accept_Timeout",
        &[
            clk625us("Logical_Link_Accept_Timeout", 2),
        ],
        &[
            status("Status"),
        ]),
    Unit::new(0x0C63, "HCI_Set_Event_Mask_Page_2",
        &[
            bytes("Event_Mask_Page_2", 8),
        ],
        &[
            status("Status"),
        ]),
    Unit::new(0x0C64, "HCI_Read_Location_Data",
        &[],
        &[
            status("Status"),
            special("Location_Domain_Aware", 1, SpecialId::LocationDomainAware),
            hex("Location_Domain", 2),
            special("Location_Domain_Options", 1, SpecialId::LocationDomainOptions),
            special("Location_Options", 1, SpecialId::LocationOptions),
        ]),
    Unit::new(0x0C65, "HCI_Write_Location_Data",
        &[
            special("Location_Domain_Aware", 1, SpecialId::LocationDomainAware),
            hex("Location_Domain", 2),
            special("Location_Domain_Options", 1, SpecialId::LocationDomainOptions),
            special("Location_Options", 1, SpecialId::LocationOptions),
        ],
        &[
            status("Status"),
        ]),
    Unit::new(0x0C66, "HCI_Read_Flow_Control_Mode",
        &[],
        &[
            status("Status"),
            special("Flow_Control_Mode", 1, SpecialId::FlowControlMode),
        ]),
    Unit::new(0x0C67, "HCI_Write_Flow_Control_Mode",
        &[
            special("Flow_Control_Mode", 1, SpecialId::FlowControlMode),
        ],
        &[
            status("Status"),
        ]),
    Unit::new(0x0C68, "HCI_Read_Enhance_Transmit_Power_Level",
        &[
            handle("Connection_Handle"),
            hex("Type", 1),
        ],
        &[
            status("Status"),
            handle("Connection_Handle"),
            hex("Transmit_Power_Level_GFSK", 1),
            hex("Transmit_Power_Level_DQPSK", 1),
            hex("Transmit_Power_Level_8DPSK", 1),
        ]),
    Unit::new(0x0C69, "HCI_Read_Best_Effort_Flush_Timeout",
        &[
            hex("Logical_Link_Handle", 2),
        ],
        &[
            status("Status"),
            hex("Best_Effort_Flush_Timeout", 4),
        ]),
    Unit::new(0x0C6A, "HCI_Write_Best_Effort_Flush_Timeout",
        &[
            hex("Logical_Link_Handle", 2),
            hex("Best_Effort_Flush_Timeout", 4),
        ],
        &[
            status("Status"),
        ]),
    Unit::new(0x0C6B, "HCI_Short_Range_Mode",
        &[
            hex("Physical_Link_Handle", 1),
            hex("Short_Range_Mode", 1),
        ],
        &[]),
    Unit::new(0x0C6C, "HCI_Read_LE_Host_Support",
        &[],
        &[
            status("Status"),
            special("LE_Supported_Host", 1, SpecialId::LeSupportedHost),
            hex("Simultaneous_LE_Host", 1),
        ]),
    Unit::new(0x0C6D, "HCI_Write_LE_Host_Support",
        &[
            special("LE_Supported_Host", 1, SpecialId::LeSupportedHost),
            hex("Simultaneous_LE_Host", 1),
        ],
        &[
            status("Status"),
        ]),
    Unit::new(0x0C6E, "HCI_Set_MWS_Channel_Parameters",
        &[
            hex("MWS_Channel_Enable", 1),
            hex("MWS_RX_Center_Frequency", 2),
            hex("MWS_TX_Center_Frequency", 2),
            hex("MWS_RX_Channel_Bandwidth", 2),
            hex("MWS_TX_Channel_Bandwidth", 2),
            hex("MWS_Channel_Type", 1),
        ],
        &[
            status("Status"),
        ]),
    Unit::new(0x0C6F, "HCI_Set_External_Frame_Configuration",
        &[
            hex("Ext_Frame_Duration", 1),
            hex("Ext_Frame_Sync_Assert_Offset", 2),
            hex("Ext_Frame_Sync_Assert_Jitter", 2),
            dec("Ext_Num_Periods", 1).repeating(1),
            hex("Period_Duration", 2),
            hex("Period_Type", 1),
        ],
        &[
            status("Status"),
        ]),
    Unit::new(0x0C70, "HCI_Set_MWS_Signaling",
        &[
            hex("MWS_RX_Assert_Offset", 2),
            hex("MWS_RX_Assert_Jitter", 2),
            hex("MWS_RX_Deassert_Offset", 2),
            hex("MWS_RX_Deassert_Jitter", 2),
            hex("MWS_TX_Assert_Offset", 2),
            hex("MWS_TX_Assert_Jitter", 2),
            hex("MWS_TX_Deassert_Offset", 2),
            hex("MWS_TX_Deassert_Jitter", 2),
            hex("MWS_Pattern_Assert_Offset", 2),
            hex("MWS_Pattern_Assert_Jitter", 2),
            hex("MWS_Inactivity_Duration_Assert_Offset", 2),
            hex("MWS_Inactivity_Duration_Assert_Jitter", 2),
            hex("MWS_Scan_Frequency_Assert_Offset", 2),
            hex("MWS_Scan_Frequency_Assert_Jitter", 2),
            hex("MWS_Priority_Assert_Offset_Requeset", 2),
        ],
        &[
            status("Status"),
            hex("Bluetooth_RX_Priority_Assert_Offset", 2),
            hex("Bluetooth_RX_Priority_Assert_Jitter", 2),
            hex("Bluetooth_RX_Priority_Deassert_Offset", 2),
            hex("Bluetooth_RX_Priority_Deassert_Jitter", 2),
            hex("802_RX_Priority_Assert_Offset", 2),
            hex("802_RX_Priority_Assert_Jitter", 2),
            hex("802_RX_Priority_Deassert_Offset", 2),
            hex("802_RX_Priority_Deassert_Jitter", 2),
            hex("Bluetooth_TX_Priority_Assert_Offset", 2),
            hex("Bluetooth_TX_Priority_Assert_Jitter", 2),
            hex("Bluetooth_TX_Priority_Deassert_Offset", 2),
            hex("Bluetooth_TX_Priority_Deassert_Jitter", 2),
            hex("802_TX_Priority_Assert_Offset", 2),
            hex("802_TX_Priority_Assert_Jitter", 2),
            hex("802_TX_Priority_Deassert_Offset", 2),
            hex("802_TX_Priority_Deassert_Jitter", 2),
        ]),
    Unit::new(0x0C71, "HCI_Set_MWS_Transport_Layer",
        &[
            hex("Transport_Layer", 1),
            hex("To_MWS_Baud_Rate", 4),
            hex("From_MWS_Baud_Rate", 4),
        ],
        &[
            status("Status"),
        ]),
    Unit::new(0x0C72, "HCI_Set_MWS_Scan_Frequency_Table",
        &[
            dec("Num_Scan_Frequencies", 1).repeating(2),
            hex("Scan_Frequency_Low", 2),
            hex("Scan_Frequency_High", 2),
        ],
        &[
            status("Status"),
        ]),
    Unit::new(0x0C73, "HCI_Set_MWS_PATTERN_Configuration",
        &[
            hex("MWS_PATTERN_Index", 1),
            dec("MWS_PATTERN_NumIntervals", 1).repeating(2),
            hex("MWS_PATTERN_IntervalDuration", 2),
            hex("MWS_PATTERN_IntervalType", 1),
        ],
        &[
            status("Status"),
        ]),
    Unit::new(0x0C74, "HCI_Set_Reserved_LT_ADDR",
        &[
            hex("LT_ADDR", 1),
        ],
        &[
            status("Status"),
            hex("LT_ADDR", 1),
        ]),
    Unit::new(0x0C75, "HCI_Delete_Reserved_LT_ADDR",
        &[
            hex("LT_ADDR", 1),
        ],
        &[
            status("Status"),
            hex("LT_ADDR", 1),
        ]),
    Unit::new(0x0C76, "HCI_Set_Connectionless_Slave_Broadcast_Data",
        &[
            hex("LT_ADDR", 1),
            hex("Fragment", 1),
            dec("Data_Length", 1),
            bytes_ref("Data", -1),
        ],
        &[
            status("Status"),
            hex("LT_ADDR", 1),
        ]),
    Unit::new(0x0C77, "HCI_Read_Synchronization_Train_Parameters",
        &[],
        &[
            status("Status"),
            hex("Sync_Train_Interval", 2),
            hex("synchronization_trainTO", 4),
            hex("Service_Data", 1),
        ]),
    Unit::new(0x0C78, "HCI_Write_Synchronization_Train_Parameters",
        &[
            hex("Interval_Min", 2),
            hex("Interval_Max", 2),
            hex("synchronization_trainTO", 4),
            hex("Service_Data", 1),
        ],
        &[
            status("Status"),
            hex("Sync_Train_Interval", 2),
        ]),
    Unit::new(0x0C79, "HCI_Read_Secure_Connections_Host_Support",
        &[],
        &[
            status("Status"),
            special("Secure_Connections_Host_Support", 1, SpecialId::SecureConnectionsHostSupport),
        ]),
    Unit::new(0x0C7A, "HCI_Write_Secure_Connections_Host_Support",
        &[
            special("Secure_Connections_Host_Support", 1, SpecialId::SecureConnectionsHostSupport),
        ],
        &[
            status("Status"),
        ]),
    Unit::new(0x0C7B, "HCI_Read_Authenticated_Payload_Timeout",
        &[
            handle("Connection_Handle"),
        ],
        &[
            status("Status"),
            handle("Connection_Handle"),
            clk10ms("Authenticated_Payload_Timeout", 2),
        ]),
    Unit::new(0x0C7C, "HCI_Write_Authenticated_Payload_Timeout",
        &[
            handle("Connection_Handle"),
            clk10ms("Authenticated_Payload_Timeout", 2),
        ],
        &[
            status("Status"),
            handle("Connection_Handle"),
        ]),
    Unit::new(0x0C7D, "HCI_Read_Local_OOB_Extended_Data",
        &[],
        &[
            status("Status"),
            bytes("C_192", 16),
            bytes("R_192", 16),
            bytes("C_256", 16),
            bytes("R_256", 16),
        ]),
    Unit::new(0x0C7E, "HCI_Read_Extended_Page_Timeout",
        &[],
        &[
            status("Status"),
            clk625us("Extended_Page_Timeout", 2),
        ]),
    Unit::new(0x0C7F, "HCI_Write_Extended_Page_Timeout",
        &[
            clk625us("Extended_Page_Timeout", 2),
        ],
        &[
            status("Status"),
        ]),
    Unit::new(0x0C80, "HCI_Read_Extended_Inquiry_Length",
        &[],
        &[
            status("Status"),
            clk625us("Extended_Inquiry_Length", 2),
        ]),
    Unit::new(0x0C81, "HCI_Write_Extended_Inquiry_Length",
        &[
            clk625us("Extended_Inquiry_Length", 2),
        ],
        &[
            status("Status"),
        ]),
];
