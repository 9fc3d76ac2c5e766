//! Testing commands (OGF 0x06).

use super::*;
use crate::special::SpecialId;

pub(super) const CAPACITY: u16 = 10;

pub(super) static UNITS: &[Unit] = &[
    Unit::new(0x1801, "HCI_Read_Loopback_Mode",
        &[],
        &[
            status("Status"),
            hex("Loopback_Mode", 1),
        ]),
    Unit::new(0x1802, "HCI_Write_Loopback_Mode",
        &[
            hex("Loopback_Mode", 1),
        ],
        &[
            status("Status"),
        ]),
    Unit::new(0x1803, "HCI_Enable_Device_Under_Test_Mode",
        &[],
        &[
            status("Status"),
        ]),
    Unit::new(0x1804, "HCI_Write_Simple_Pairing_Debug_Mode",
        &[
            special("Simple_Pairing_Debug_Mode", 1, SpecialId::SimplePairingDebugMode),
        ],
        &[
            status("Status"),
        ]),
    Unit::new(0x1807, "HCI_Enable_AMP_Receiver_Reports",
        &[
            hex("Enable", 1),
            hex("Interval", 1),
        ],
        &[
            status("Status"),
        ]),
    Unit::new(0x1808, "HCI_AMP_Test_End",
        &[],
        &[
            status("Status"),
        ]),
    Unit::new(0x1809, "HCI_AMP_Test",
        &[
            hex("Test_Parameters", 1),
        ],
        &[
            status("Status"),
        ]),
    Unit::new(0x180A, "HCI_Write_Secure_Connections_Test_Mode",
        &[
            handle("Connection_Handle"),
            hex("DM1_ACL-U_Mode", 1),
            hex("eSCO_Loopback_Mode", 1),
        ],
        &[
            status("Status"),
            handle("Connection_Handle"),
        ]),
];
