//! Link Policy commands (OGF 0x02).

use super::*;
use crate::special::SpecialId;

pub(super) const CAPACITY: u16 = 17;

pub(super) static UNITS: &[Unit] = &[
    Unit::new(0x0801, "HCI_Hold_Mode",
        &[
            handle("Connection_Handle"),
            hex("Hold_Mode_Max_Interval", 2),
            hex("Hold_Mode_Min_Interval", 2),
        ],
        &[]),
    Unit::new(0x0803, "HCI_Sniff_Mode",
        &[
            handle("Connection_Handle"),
            clk625us("Sniff_Max_Interval", 2),
            clk625us("Sniff_Min_Interval", 2),
            clk1250us("Sniff_Attempt", 2),
            clk1250us("Sniff_Timeout", 2),
        ],
        &[]),
    Unit::new(0x0804, "HCI_Exit_Sniff_Mode",
        &[
            handle("Connection_Handle"),
        ],
        &[]),
    Unit::new(0x0805, "HCI_Park_State",
        &[],
        &[]),
    Unit::new(0x0806, "HCI_Exit_Park_State",
        &[],
        &[]),
    Unit::new(0x0807, "HCI_QoS_Setup",
        &[
            handle("Connection_Handle"),
            hex("Flags", 1),
            hex("Service_Type", 1),
            hex("Token_Rate", 4),
            hex("Peak_Bandwidth", 4),
            hex("Latency", 4),
            hex("Delay_Variation", 4),
        ],
        &[]),
    Unit::new(0x0809, "HCI_Role_Discovery",
        &[
            handle("Connection_Handle"),
        ],
        &[
            status("Status"),
            handle("Connection_Handle"),
            hex("Current_Role", 1),
        ]),
    Unit::new(0x080B, "HCI_Switch_Role",
        &[
            bd_addr("BD_ADDR"),
            hex("Role", 1),
        ],
        &[]),
    Unit::new(0x080C, "HCI_Read_Link_Policy_Settings",
        &[
            handle("Connection_Handle"),
        ],
        &[
            status("Status"),
            handle("Connection_Handle"),
            special("Link_Policy_Settings", 2, SpecialId::LinkPolicySettings),
        ]),
    Unit::new(0x080D, "HCI_Write_Link_Policy_Settings",
        &[
            handle("Connection_Handle"),
            special("Link_Policy_Settings", 2, SpecialId::LinkPolicySettings),
        ],
        &[
            status("Status"),
            handle("Connection_Handle"),
        ]),
    Unit::new(0x080E, "HCI_Read_Default_Link_Policy_Settings",
        &[],
        &[
            status("Status"),
            special("Default_Link_Policy_Settings", 2, SpecialId::LinkPolicySettings),
        ]),
    Unit::new(0x080F, "HCI_Write_Default_Link_Policy_Settings",
        &[
            special("Default_Link_Policy_Settings", 2, SpecialId::LinkPolicySettings),
        ],
        &[
            status("Status"),
        ]),
    Unit::new(0x0810, "HCI_Flow_Specification",
        &[
            handle("Connection_Handle"),
            hex("Flags", 1),
            hex("Flow_direction", 1),
            hex("Service_Type", 1),
            hex("Token Rate", 4),
            dec("Token Bucket Size", 4),
            hex("Peak_Bandwidth", 4),
            hex("Access Latency", 4),
        ],
        &[]),
    Unit::new(0x0811, "HCI_Sniff_Subrating",
        &[
            handle("Connection_Handle"),
            hex("Maximum_Latency", 2),
            hex("Minimum_Remote_Timeout", 2),
            hex("Minimum_Local_Timeout", 2),
        ],
        &[
            status("Status"),
            handle("Connection_Handle"),
        ]),
];
