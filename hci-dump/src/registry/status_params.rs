//! Status Parameters commands (OGF 0x05).

use super::*;
use crate::special::SpecialId;

pub(super) const CAPACITY: u16 = 13;

pub(super) static UNITS: &[Unit] = &[
    Unit::new(0x1401, "HCI_Read_Failed_Contact_Counter",
        &[
            hex("Handle", 2),
        ],
        &[
            status("Status"),
            hex("Handle", 2),
            dec("Failed_Contact_Counter", 2),
        ]),
    Unit::new(0x1402, "HCI_Reset_Failed_Contact_Counter",
        &[
            hex("Handle", 2),
        ],
        &[
            status("Status"),
            hex("Handle", 2),
        ]),
    Unit::new(0x1403, "HCI_Read_Link_Quality",
        &[
            hex("Handle", 2),
        ],
        &[
            status("Status"),
            hex("Handle", 2),
            hex("Link_Quality", 1),
        ]),
    Unit::new(0x1405, "HCI_Read_RSSI",
        &[
            hex("Handle", 2),
        ],
        &[
            status("Status"),
            hex("Handle", 2),
            special("RSSI", 1, SpecialId::Rssi),
        ]),
    Unit::new(0x1406, "HCI_Read_AFH_Channel_Map",
        &[
            handle("Connection_Handle"),
        ],
        &[
            status("Status"),
            handle("Connection_Handle"),
            hex("AFH_Mode", 1),
            bytes("AFH_Channel_Map", 10),
        ]),
    Unit::new(0x1407, "HCI_Read_Clock",
        &[
            handle("Connection_Handle"),
            hex("Which_Clock", 1),
        ],
        &[
            status("Status"),
            handle("Connection_Handle"),
            hex("Clock", 4),
            hex("Accuracy", 2),
        ]),
    Unit::new(0x1408, "HCI_Read_Encryption_Key_Size",
        &[
            handle("Connection_Handle"),
        ],
        &[
            status("Status"),
            handle("Connection_Handle"),
            dec("Key_Size", 1),
        ]),
    Unit::new(0x1409, "HCI_Read_Local_AMP_Info",
        &[],
        &[
            status("Status"),
            hex("AMP_Status", 1),
            hex("Total_Bandwidth", 4),
            hex("Max_Guaranteed_Bandwidth", 4),
            hex("Min_Latency", 4),
            dec("Max_PDU_Size", 2),
            hex("Controller_Type", 1),
            hex("PAL_Capablities", 2),
            dec("Max_AMP_ASSOC_Length", 2),
            hex("Max_Flush_Timeout", 4),
            hex("Best_Effort_Flush_Timeout", 4),
        ]),
    Unit::new(0x140A, "HCI_Read_Local_AMP_ASSOC",
        &[
            hex("Physical_Link_Handle", 1),
            hex("Length_So_Far", 2),
            dec("AMP_ASSOC_Length", 2),
        ],
        &[
            status("Status"),
            hex("Physical_Link_Handle", 1),
            dec("AMP_ASSOC_Remaining_Length", 2),
            bytes_rest("AMP_ASSOC_fragment"),
        ]),
    Unit::new(0x140B, "HCI_Write_Remote_AMP_ASSOC",
        &[
            hex("Physical_Link_Handle", 1),
            hex("Length_So_Far", 2),
            dec("AMP_ASSOC_Remaining_Length", 2),
            bytes_ref("AMP_ASSOC_fragment", -1),
        ],
        &[
            status("Status"),
            hex("Physical_Link_Handle", 1),
        ]),
    Unit::new(0x140C, "HCI_Get_MWS_Transport_Layer_Configuration",
        &[],
        &[
            status("Status"),
            dec("Num_Transports", 1).repeating(2),
            hex("Transport_Layer", 1),
            dec("Num_Baud_Rates", 1).repeating(2),
            hex("To_MWS_Baud_Rate", 1),
            hex("From_MWS_Baud_Rate", 1),
        ]),
    Unit::new(0x140D, "HCI_Set_Triggered_Clock_Capture",
        &[
            handle("Connection_Handle"),
            hex("Enable", 1),
            hex("Which_Clock", 1),
            hex("LPO_Allowed", 1),
            dec("Num_Clock_Captures_To_Filter", 1),
        ],
        &[
            status("Status"),
        ]),
];
