use hci_dump::format::lines;
use hci_dump::special::SECURITY_HIDDEN;
use hci_dump::{decode_command, decode_event, DecodeError, Decoder, PacketType};

fn init() {
    let _ = env_logger::builder().is_test(true).try_init();
}

fn command_lines(packet: &[u8]) -> Vec<String> {
    let instance = decode_command(packet).unwrap().unwrap();
    lines(&instance, None)
}

fn event_lines(packet: &[u8]) -> Vec<String> {
    let instance = decode_event(packet).unwrap().unwrap();
    lines(&instance, None)
}

#[test]
fn reset_is_summary_only() {
    init();
    let instance = decode_command(&[0x03, 0x0c, 0x00]).unwrap().unwrap();
    assert!(instance.is_summary_only());
    assert_eq!(
        lines(&instance, None),
        ["HCI Command: HCI_Reset(0x0c03), Parameter Length: 0"]
    );
}

#[test]
fn command_complete_nests_return_parameters() {
    init();
    assert_eq!(
        event_lines(&[0x0e, 0x04, 0x01, 0x03, 0x0c, 0x00]),
        [
            "HCI Event: Command Complete(0x0e), Parameter Length: 4",
            "    Num_HCI_Command_Packets: 1",
            "    Command_Opcode: HCI_Reset(0x0c03)",
            "    Return Parameter:",
            "        Status: (0x00) Success",
        ]
    );
}

#[test]
fn command_complete_for_unknown_opcode_keeps_hex() {
    init();
    let out = event_lines(&[0x0e, 0x04, 0x01, 0xff, 0x0f, 0x00]);
    assert_eq!(out[2], "    Command_Opcode: 0x0fff");
    assert_eq!(out[3], "    Raw Data: 00");
}

#[test]
fn command_status_names_opcode() {
    init();
    let out = event_lines(&[0x0f, 0x04, 0x00, 0x01, 0x05, 0x04]);
    assert_eq!(
        out,
        [
            "HCI Event: Command Status(0x0f), Parameter Length: 4",
            "    Status: (0x00) Success",
            "    Num_HCI_Command_Packets: 1",
            "    Command_Opcode: HCI_Create_Connection(0x0405)",
        ]
    );
}

#[test]
fn disconnection_complete_fields() {
    init();
    let out = event_lines(&[0x05, 0x04, 0x00, 0x12, 0x34, 0x13]);
    assert_eq!(out[1], "    Status: (0x00) Success");
    assert_eq!(out[2], "    Connection_Handle: (0x0234) 564");
    assert_eq!(out[3], "    Reason: (0x13) Remote User Terminated Connection");
}

#[test]
fn stored_link_keys_are_hidden() {
    init();
    let mut packet = vec![0x11, 0x0c, 45, 2];
    packet.extend_from_slice(&[0x01, 0x02, 0x03, 0x04, 0x05, 0x06]);
    packet.extend_from_slice(&[0x5a; 16]);
    packet.extend_from_slice(&[0x11, 0x22, 0x33, 0x44, 0x55, 0x66]);
    packet.extend_from_slice(&[0xa5; 16]);

    let instance = decode_command(&packet).unwrap().unwrap();
    assert_eq!(instance.fields.len(), 5);
    assert_eq!(instance.fields[0].value, "2");
    assert_eq!(instance.fields[1].value, "0x06-05-04-03-02-01");
    assert_eq!(instance.fields[2].value, SECURITY_HIDDEN);
    assert_eq!(instance.fields[3].value, "0x66-55-44-33-22-11");
    assert_eq!(instance.fields[4].value, SECURITY_HIDDEN);
    let seqs: Vec<_> = instance.fields.iter().map(|f| f.seq).collect();
    assert_eq!(seqs, [None, Some(1), Some(1), Some(2), Some(2)]);
    assert!(instance.leftover.is_empty());

    let out = lines(&instance, None);
    assert_eq!(out[2], "    [1] BD_ADDR: 0x06-05-04-03-02-01");
    assert_eq!(out[5], format!("    [2] Link_Key: {}", SECURITY_HIDDEN));
}

#[test]
fn short_link_key_stays_hidden() {
    init();
    let mut packet = vec![0x0b, 0x04, 22];
    packet.extend_from_slice(&[0x01, 0x02, 0x03, 0x04, 0x05, 0x06]);
    packet.extend_from_slice(&[0xde, 0xad, 0xbe, 0xef]);

    let instance = decode_command(&packet).unwrap().unwrap();
    assert_eq!(instance.error, None);
    let key = &instance.fields[1];
    assert_eq!(key.name, "Link_Key");
    assert_eq!(key.value, format!("{} (truncated)", SECURITY_HIDDEN));
    assert_eq!(key.raw, None);
    assert!(instance.leftover.is_empty());
    assert!(lines(&instance, None).iter().all(|l| !l.contains("de ad")));
}

#[test]
fn unconsumed_bytes_become_raw_data() {
    init();
    let out = command_lines(&[0x03, 0x0c, 0x02, 0xaa, 0xbb]);
    assert_eq!(out[1], "    Raw Data: aa bb");

    // Declared length longer than what was captured.
    let instance = decode_command(&[0x03, 0x0c, 0x05, 0xaa]).unwrap().unwrap();
    assert_eq!(instance.leftover, [0xaa]);
}

#[test]
fn missing_parameters_are_truncated() {
    init();
    let out = command_lines(&[0x1a, 0x0c, 0x00]);
    assert_eq!(out[1], "    Scan_Enable: (truncated)");

    let out = command_lines(&[0x1a, 0x0c, 0x01, 0x03]);
    assert_eq!(out[1], "    Scan_Enable: (0x03) Inquiry Scan enabled. Page Scan enabled.");
}

#[test]
fn le_advertising_report() {
    init();
    let packet = [
        0x3e, 0x0f, 0x02, 0x01, 0x00, 0x01, 0x01, 0x02, 0x03, 0x04, 0x05, 0x06, 0x03, 0x02,
        0x01, 0x06, 0xc4,
    ];
    let out = event_lines(&packet);
    assert_eq!(
        out,
        [
            "HCI Event: LE Meta Event(0x3e), Parameter Length: 15",
            "    Subevent_Code: LE Advertising Report(0x02)",
            "    Num_Reports: 1",
            "    [1] Event_Type: (0x00) Connectable undirected advertising(ADV_IND)",
            "    [1] Address_Type: (0x01) Random Device Address",
            "    [1] Address: 0x06-05-04-03-02-01",
            "    [1] Length_Data: 3",
            "    [1] Data: 02 01 06",
            "    [1] RSSI: (0xc4) -60 dBm",
        ]
    );
}

#[test]
fn missing_advertising_report_is_listed() {
    init();
    let packet = [
        0x3e, 0x0f, 0x02, 0x02, 0x00, 0x01, 0x01, 0x02, 0x03, 0x04, 0x05, 0x06, 0x03, 0x02,
        0x01, 0x06, 0xc4,
    ];
    let instance = decode_event(&packet).unwrap().unwrap();
    assert_eq!(instance.error, None);
    let second: Vec<_> = instance.fields.iter().filter(|f| f.seq == Some(2)).collect();
    assert_eq!(second.len(), 6);
    assert_eq!(second[0].name, "Event_Type");
    assert!(second.iter().all(|f| f.value == "(truncated)"));

    let out = lines(&instance, None);
    assert_eq!(out[9], "    [2] Event_Type: (truncated)");
    assert_eq!(out.last().unwrap(), "    [2] RSSI: (truncated)");
}

#[test]
fn unknown_le_subevent() {
    init();
    let out = event_lines(&[0x3e, 0x03, 0x7f, 0xaa, 0xbb]);
    assert_eq!(
        out,
        [
            "HCI Event: LE Meta Event(0x3e), Parameter Length: 3",
            "    Subevent_Code: (unknown subevent 0x7f)",
            "    Raw Data: aa bb",
        ]
    );
}

#[test]
fn amp_assoc_fragment_is_shown_as_bytes() {
    init();
    let mut packet = vec![0x0b, 0x14, 21, 0x01, 0x00, 0x00, 0x00, 0x10];
    packet.extend_from_slice(&[0xee; 16]);
    let instance = decode_command(&packet).unwrap().unwrap();
    assert_eq!(instance.error, None);
    assert_eq!(instance.fields.len(), 4);
    assert_eq!(instance.fields[2].value, "16");
    assert_eq!(instance.fields[3].value, vec!["ee"; 16].join(" "));
    assert!(instance.leftover.is_empty());
}

#[test]
fn short_fragment_is_truncated_not_malformed() {
    init();
    let packet = [0x0b, 0x14, 7, 0x01, 0x00, 0x00, 0x00, 0x10, 0xee, 0xff];
    let instance = decode_command(&packet).unwrap().unwrap();
    assert_eq!(instance.error, None);
    assert_eq!(instance.fields[3].value, "ee ff (truncated)");
}

#[test]
fn set_event_filter_connection_setup() {
    init();
    let out = command_lines(&[0x05, 0x0c, 0x09, 0x02, 0x02, 0x01, 0x02, 0x03, 0x04, 0x05, 0x06, 0x01]);
    assert_eq!(
        out,
        [
            "HCI Command: HCI_Set_Event_Filter(0x0c05), Parameter Length: 9",
            "    Filter_Type: (0x02) Connection Setup.",
            "    Connection_Setup_Filter_Condition_Type: (0x02) Allow Connections from a device with a specific BD_ADDR",
            "    BD_ADDR: 0x06-05-04-03-02-01",
            "    Auto_Accept_Flag: (0x01) Do NOT Auto accept the connection (Auto accept is off).",
        ]
    );
}

#[test]
fn unknown_codes_produce_nothing() {
    init();
    assert_eq!(decode_command(&[0xff, 0x0f, 0x00]).unwrap(), None);
    assert_eq!(decode_command(&[0x00, 0x3c, 0x00]).unwrap(), None);
    assert_eq!(decode_event(&[0x00, 0x00]).unwrap(), None);
    assert_eq!(decode_event(&[0xff, 0x02, 0x50, 0x00]).unwrap(), None);
    assert_eq!(decode_command(&[0x03]), Err(DecodeError::PacketTooShort));
}

#[test]
fn vendor_commands_share_one_entry() {
    init();
    let out = command_lines(&[0x12, 0xfc, 0x01, 0x7e]);
    assert_eq!(out[0], "HCI Command: Vendor Specific Command(0xfc12), Parameter Length: 1");
    assert_eq!(out[1], "    Raw Data: 7e");
}

#[test]
fn decoder_writes_to_sink() {
    init();
    let mut decoder = Decoder::new(Vec::<String>::new());
    assert!(decoder.process(PacketType::Command, Some("00:00:01.000000"), &[0x03, 0x0c, 0x00]).unwrap());
    assert!(!decoder.process(PacketType::Acl, None, &[0x01, 0x20, 0x00, 0x00]).unwrap());
    assert!(!decoder.process(PacketType::Command, None, &[0xff, 0x0f, 0x00]).unwrap());
    assert!(decoder.process(PacketType::Event, None, &[0x0e, 0x04, 0x01, 0x03, 0x0c, 0x00]).unwrap());
    assert_eq!(decoder.decoded(), 2);

    let sink = decoder.into_sink();
    assert_eq!(sink[0], "00:00:01.000000 HCI Command: HCI_Reset(0x0c03), Parameter Length: 0");
    assert_eq!(sink.len(), 6);
}
