//! Informational Parameters commands (OGF 0x04).

use super::*;

pub(super) const CAPACITY: u16 = 11;

pub(super) static UNITS: &[Unit] = &[
    Unit::new(0x1001, "HCI_Read_Local_Version_Information",
        &[],
        &[
            status("Status"),
            hex("HCI_Version", 1),
            hex("HCI_Revision", 2),
            hex("LMP/PAL_Version", 1),
            hex("Manufacturer_Name", 2),
            hex("LMP/PAL_Subversion", 2),
        ]),
    Unit::new(0x1002, "HCI_Read_Local_Supported_Commands",
        &[],
        &[
            status("Status"),
            bytes("Supported_Commands", 64),
        ]),
    Unit::new(0x1003, "HCI_Read_Local_Supported_Features",
        &[],
        &[
            status("Status"),
            bytes("LMP_Features", 8),
        ]),
    Unit::new(0x1004, "HCI_Read_Local_Extended_Features",
        &[
            dec("Page_Number", 1),
        ],
        &[
            status("Status"),
            dec("Page_Number", 1),
            dec("Maximum_Page_Number", 1),
            bytes("Extended_LMP_Features", 8),
        ]),
    Unit::new(0x1005, "HCI_Read_Buffer_Size",
        &[],
        &[
            status("Status"),
            dec("HC_ACL_Data_Packet_Length", 2),
            dec("HC_Synchronous_Data_Length", 1),
            dec("HC_Total_Num_ACL_Data_Packets", 2),
            dec("HC_Total_Num_Synchronous_Data_Packets", 2),
        ]),
    Unit::new(0x1009, "HCI_Read_BD_ADDR",
        &[],
        &[
            status("Status"),
            bd_addr("BD_ADDR"),
        ]),
    Unit::new(0x100A, "HCI_Read_Data_Block_Size",
        &[],
        &[
            status("Status"),
            dec("Max_ACL_Data_Packet_Length", 2),
            dec("Data_Block_Length", 2),
            dec("Total_Num_Data_Blocks", 2),
        ]),
    Unit::new(0x100B, "HCI_Read_Local_Supported_Codecs",
        &[],
        &[
            status("Status"),
            dec("Number_of_Supported_Codecs", 1).repeating(1),
            hex("Supported_Codecs", 1),
            dec("Number_of_Supported_Vendor_Specific_Codecs", 1).repeating(1),
            hex("Vendor_Specific_Codecs", 4),
        ]),
];
