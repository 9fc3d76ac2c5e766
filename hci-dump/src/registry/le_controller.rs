//! LE Controller commands (OGF 0x08).

use super::*;
use crate::special::SpecialId;

pub(super) const CAPACITY: u16 = 47;

pub(super) static UNITS: &[Unit] = &[
    Unit::new(0x2001, "HCI_LE_Set_Event_Mask",
        &[
            bytes("LE_Event_Mask", 8),
        ],
        &[
            status("Status"),
        ]),
    Unit::new(0x2002, "HCI_LE_Read_Buffer_Size",
        &[],
        &[
            status("Status"),
            dec("HC_LE_ACL_Data_Packet_Length", 2),
            dec("HC_Total_Num_LE_ACL_Data_Packets", 1),
        ]),
    Unit::new(0x2003, "HCI_LE_Read_Local_Supported_Features",
        &[],
        &[
            status("Status"),
            bytes("LE_Features", 8),
        ]),
    Unit::new(0x2005, "HCI_LE_Set_Random_Address",
        &[
            bd_addr("Random_Address"),
        ],
        &[
            status("Status"),
        ]),
    Unit::new(0x2006, "HCI_LE_Set_Advertising_Parameters",
        &[
            clk625us("Advertising_Interval_Min", 2),
            clk625us("Advertising_Interval_Max", 2),
            special("Advertising_Type", 1, SpecialId::AdvertisingType),
            special("Own_Address_Type", 1, SpecialId::OwnAddressType),
            special("Peer_Address_Type", 1, SpecialId::PeerAddressType),
            bytes("Peer_Address", 6),
            hex("Advertising_Channel_Map", 1),
            hex("Advertising_Filter_Policy", 1),
        ],
        &[
            status("Status"),
        ]),
    Unit::new(0x2007, "HCI_LE_Read_Advertising_Channel_Tx_Power",
        &[],
        &[
            status("Status"),
            hex("Transmit_Power_Level", 1),
        ]),
    Unit::new(0x2008, "HCI_LE_Set_Advertising_Data",
        &[
            dec("Advertising_Data_Length", 1),
            bytes("Advertising_Data", 31),
        ],
        &[
            status("Status"),
        ]),
    Unit::new(0x2009, "HCI_LE_Set_Scan_Response_Data",
        &[
            dec("Scan_Response_Data_Length", 1),
            bytes("Scan_Response_Data", 31),
        ],
        &[
            status("Status"),
        ]),
    Unit::new(0x200A, "HCI_LE_Set_Advertise_Enable",
        &[
            special("Advertising_Enable", 1, SpecialId::AdvertisingEnable),
        ],
        &[
            status("Status"),
        ]),
    Unit::new(0x200B, "HCI_LE_Set_Scan_Parameters",
        &[
            special("LE_Scan_Type", 1, SpecialId::LeScanType),
            clk625us("LE_Scan_Interval", 2),
            clk625us("LE_Scan_Window", 2),
            special("Own_Address_Type", 1, SpecialId::OwnAddressType),
            hex("Scanning_Filter_Policy", 1),
        ],
        &[
            status("Status"),
        ]),
    Unit::new(0x200C, "HCI_LE_Set_Scan_Enable",
        &[
            special("LE_Scan_Enable", 1, SpecialId::LeScanEnable),
            special("Filter_Duplicates", 1, SpecialId::FilterDuplicates),
        ],
        &[
            status("Status"),
        ]),
    Unit::new(0x200D, "HCI_LE_Create_Connection",
        &[
            clk625us("LE_Scan_Interval", 2),
            clk625us("LE_Scan_Window", 2),
            hex("Initiator_Filter_Policy", 1),
            special("Peer_Address_Type", 1, SpecialId::PeerAddressType),
            bd_addr("Peer_address"),
            special("Own_Address_Type", 1, SpecialId::OwnAddressType),
            clk1250us("Conn_Interval_Min", 2),
            clk1250us("Conn_Interval_Max", 2),
            hex("Conn_Latency", 2),
            clk10ms("Supervision_Timeout", 2),
            clk625us("Minimum_CE_Length", 2),
            clk625us("Maximum_CE_Length", 2),
        ],
        &[]),
    Unit::new(0x200E, "HCI_LE_Create_Connection_Cancel",
        &[],
        &[
            status("Status"),
        ]),
    Unit::new(0x200F, "HCI_LE_Read_White_List_Size",
        &[],
        &[
            status("Status"),
            dec("White_List_Size", 1),
        ]),
    Unit::new(0x2010, "HCI_LE_Clear_White_List",
        &[],
        &[
            status("Status"),
        ]),
    Unit::new(0x2011, "HCI_LE_Add_Device_To_White_List",
        &[
            special("Address_Type", 1, SpecialId::AddressType),
            bd_addr("Address"),
        ],
        &[
            status("Status"),
        ]),
    Unit::new(0x2012, "HCI_LE_Remove_Device_From_White_List",
        &[
            special("Address_Type", 1, SpecialId::AddressType),
            bd_addr("Address"),
        ],
        &[
            status("Status"),
        ]),
    Unit::new(0x2013, "HCI_LE_Connection_Update",
        &[
            handle("Connection_Handle"),
            clk1250us("Conn_Interval_Min", 2),
            clk1250us("Conn_Interval_Max", 2),
            hex("Conn_Latency", 2),
            clk10ms("Supervision_Timeout", 2),
            clk625us("Minimum_CE_Length", 2),
            clk625us("Maximum_CE_Length", 2),
        ],
        &[]),
    Unit::new(0x2014, "HCI_LE_Set_Host_Channel_Classification",
        &[
            bytes("Channel_Map", 5),
        ],
        &[
            status("Status"),
        ]),
    Unit::new(0x2015, "HCI_LE_Read_Channel_Map",
        &[
            handle("Connection_Handle"),
        ],
        &[
            status("Status"),
            handle("Connection_Handle"),
            bytes("Channel_Map", 5),
        ]),
    Unit::new(0x2016, "HCI_LE_Read_Remote_Used_Features",
        &[
            handle("Connection_Handle"),
        ],
        &[]),
    Unit::new(0x2017, "HCI_LE_Encrypt",
        &[
            special("Key", 16, SpecialId::SecurityKey),
            special("Plaintext_Data", 16, SpecialId::SecurityKey),
        ],
        &[
            status("Status"),
            bytes("Encrypted_Data", 16),
        ]),
    Unit::new(0x2018, "HCI_LE_Rand",
        &[],
        &[
            status("Status"),
            bytes("Random_Number", 8),
        ]),
    Unit::new(0x2019, "HCI_LE_Start_Encryption",
        &[
            handle("Connection_Handle"),
            bytes("Random_Number", 8),
            hex("Encrypted_Diversifier", 2),
            special("Long_Term_Key", 16, SpecialId::SecurityKey),
        ],
        &[]),
    Unit::new(0x201A, "HCI_LE_Long_Term_Key_Request_Reply",
        &[
            handle("Connection_Handle"),
            special("Long_Term_Key", 16, SpecialId::SecurityKey),
        ],
        &[
            status("Status"),
            handle("Connection_Handle"),
        ]),
    Unit::new(0x201B, "HCI_LE_Long_Term_Key_Request_Negative_Reply",
        &[
            handle("Connection_Handle"),
        ],
        &[
            status("Status"),
            handle("Connection_Handle"),
        ]),
    Unit::new(0x201C, "HCI_LE_Read_Supported_States",
        &[],
        &[
            status("Status"),
            bytes("LE_States", 8),
        ]),
    Unit::new(0x201D, "HCI_LE_Receiver_Test",
        &[
            hex("RX_Channel", 1),
        ],
        &[
            status("Status"),
        ]),
    Unit::new(0x201E, "HCI_LE_Transmitter_Test",
        &[
            hex("TX_Channel", 1),
            dec("Length_Of_Test_Data", 1),
            hex("Packet_Payload", 1),
        ],
        &[
            status("Status"),
        ]),
    Unit::new(0x201F, "HCI_LE_Test_End",
        &[],
        &[
            status("Status"),
            dec("Number_Of_Packets", 2),
        ]),
    Unit::new(0x2020, "LE_Remote_Connection_Parameter_Request_Reply",
        &[
            handle("Connection_Handle"),
            clk1250us("Interval_Min", 2),
            clk1250us("Interval_Max", 2),
            hex("Latency", 2),
            clk10ms("Timeout", 2),
            clk625us("Minimum_CE_Length", 2),
            clk625us("Maximum_CE_Length", 2),
        ],
        &[
            status("Status"),
            handle("Connection_Handle"),
        ]),
    Unit::new(0x2021, "LE_Remote_Connection_Parameter_Request_Negative_Reply",
        &[
            handle("Connection_Handle"),
            status("Reason"),
        ],
        &[
            status("Status"),
            handle("Connection_Handle"),
        ]),
    Unit::new(0x2022, "HCI_LE_Set_Data_Length",
        &[
            handle("Connection_Handle"),
            hex("TxOctets", 2),
            hex("TxTime", 2),
        ],
        &[
            status("Status"),
            handle("Connection_Handle"),
        ]),
    Unit::new(0x2023, "HCI_LE_Read_Suggested_Default_Data_Length",
        &[],
        &[
            status("Status"),
            hex("SuggestedMaxTxOctets", 2),
            hex("SuggestedMaxTxTime", 2),
        ]),
    Unit::new(0x2024, "HCI_LE_Write_Suggested_Default_Data_Length",
        &[
            hex("SuggestedMaxTxOctets", 2),
            hex("SuggestedMaxTxTime", 2),
        ],
        &[
            status("Status"),
        ]),
    Unit::new(0x2025, "HCI_LE_Read_Local_P-256_Public_Key",
        &[],
        &[]),
    Unit::new(0x2026, "HCI_LE_Generate_DHKey",
        &[
            bytes("Remote_P-256_Public_Key", 64),
        ],
        &[]),
    Unit::new(0x2027, "HCI_LE_Add_Device_To_Resolving_List",
        &[
            special("Peer_Identity_Address_Type", 1, SpecialId::PeerIdentityAddressType),
            bd_addr("Peer_Identity_Address"),
            bytes("Peer_IRK", 16),
            bytes("Local_IRK", 16),
        ],
        &[
            status("Status"),
        ]),
    Unit::new(0x2028, "HCI_LE_Remove_Device_From_Resolving_List",
        &[
            special("Peer_Identity_Address_Type", 1, SpecialId::PeerIdentityAddressType),
            bd_addr("Peer_Identity_Address"),
        ],
        &[
            status("Status"),
        ]),
    Unit::new(0x2029, "HCI_LE_Clear_Resolving_List",
        &[],
        &[
            status("Status"),
        ]),
    Unit::new(0x202A, "HCI_LE_Read_Resolving_List_Size",
        &[],
        &[
            status("Status"),
            dec("Resolving_List_Size", 1),
        ]),
    Unit::new(0x202B, "HCI_LE_Read_Peer_Resolvable_Address",
        &[
            special("Peer_Identity_Address_Type", 1, SpecialId::PeerIdentityAddressType),
            bd_addr("Peer_Identity_Address"),
        ],
        &[
            status("Status"),
            bd_addr("Peer_Resolvable_Address"),
        ]),
    Unit::new(0x202C, "HCI_LE_Read_Local_Resolvable_Address",
        &[
            special("Peer_Identity_Address_Type", 1, SpecialId::PeerIdentityAddressType),
            bytes("Peer_Identity_Address", 6),
        ],
        &[
            status("Status"),
            bd_addr("Local_Resolvable_Address"),
        ]),
    Unit::new(0x202D, "HCI_LE_Set_Address_Resolution_Enable",
        &[
            hex("Address_Resolution_Enable", 1),
        ],
        &[
            status("Status"),
        ]),
    Unit::new(0x202E, "HCI_LE_Set_Resolvable_Private_Address_Timeout",
        &[
            hex("RPA_Timeout", 2),
        ],
        &[
            status("Status"),
        ]),
    Unit::new(0x202F, "HCI_LE_Read_Maximum_Data_Length",
        &[],
        &[
            status("Status"),
            hex("supportedMaxTxOctets", 2),
            hex("supportedMaxTxTime", 2),
            hex("supportedMaxRxOctets", 2),
            hex("supportedMaxRxTime", 2),
        ]),
];
