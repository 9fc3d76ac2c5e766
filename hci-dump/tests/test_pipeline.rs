#[cfg(feature = "std")]
mod test {

use std::sync::{Arc, Mutex};

use hci_dump::{
    CapturedPacket, DumpConfig, DumpError, HciDump, LineSink, PacketType, StackConfig, Stream,
};

#[derive(Clone, Default)]
struct SharedSink(Arc<Mutex<Vec<(Stream, String)>>>);

impl LineSink for SharedSink {
    fn line(&mut self, stream: Stream, line: &str) {
        self.0.lock().unwrap().push((stream, line.into()));
    }
}

fn init() {
    let _ = env_logger::builder().is_test(true).try_init();
}

fn enabled(queue_depth: usize) -> DumpConfig {
    DumpConfig {
        enabled: true,
        queue_depth,
        filter_fw_log: true,
    }
}

#[test]
fn disabled_dump_does_not_start() {
    init();
    let result = HciDump::start_up(&DumpConfig::default(), SharedSink::default());
    assert!(matches!(result, Err(DumpError::Disabled)));
}

#[test]
fn records_are_decoded_in_order() {
    init();
    let sink = SharedSink::default();
    let dump = HciDump::start_up(&enabled(1), sink.clone()).unwrap();

    let stamps = ["00:00:00.000001", "00:00:00.000002", "00:00:00.000003"];
    let packets: [&[u8]; 3] = [
        &[0x03, 0x0c, 0x00],
        &[0x0e, 0x04, 0x01, 0x03, 0x0c, 0x00],
        &[0x1a, 0x0c, 0x01, 0x02],
    ];
    for (ts, packet) in stamps.iter().zip(packets) {
        let packet_type = if packet[0] == 0x0e {
            PacketType::Event
        } else {
            PacketType::Command
        };
        let mut timestamp = [0u8; 15];
        timestamp.copy_from_slice(ts.as_bytes());
        dump.enqueue(CapturedPacket::new(packet_type, timestamp, packet)).unwrap();
    }
    assert_eq!(dump.shut_down().unwrap(), 3);

    let lines = sink.0.lock().unwrap();
    let headers: Vec<_> = lines
        .iter()
        .filter(|(_, l)| l.starts_with("00:"))
        .map(|(s, l)| (*s, l.as_str()))
        .collect();
    assert_eq!(
        headers,
        [
            (Stream::Command, "00:00:00.000001 HCI Command: HCI_Reset(0x0c03), Parameter Length: 0"),
            (Stream::Event, "00:00:00.000002 HCI Event: Command Complete(0x0e), Parameter Length: 4"),
            (Stream::Command, "00:00:00.000003 HCI Command: HCI_Write_Scan_Enable(0x0c1a), Parameter Length: 1"),
        ]
    );
    assert_eq!(
        lines.last().unwrap().1,
        "    Scan_Enable: (0x02) Inquiry Scan disabled. Page Scan enabled."
    );
}

#[test]
fn display_filters_before_queueing() {
    init();
    let sink = SharedSink::default();
    let mut stack = StackConfig::new();
    stack.set("MtkBtHciDump", "MtkBtHciDump_enable", "true");
    stack.set("MtkBtHciDump", "MtkBtHciDump_queue_depth", "8");
    let config = DumpConfig::from_source(&stack).unwrap();
    let dump = HciDump::start_up(&config, sink.clone()).unwrap();

    assert!(dump.display(PacketType::Command, &[0x03, 0x0c, 0x00]).unwrap());
    assert!(!dump.display(PacketType::Acl, &[0x01, 0x20, 0x00, 0x00]).unwrap());
    assert!(!dump.display(PacketType::Event, &[0xff, 0x02, 0x50, 0x00]).unwrap());
    // Queued, but nothing in the tables for it.
    assert!(dump.display(PacketType::Command, &[0xff, 0x0f, 0x00]).unwrap());
    assert_eq!(dump.shut_down().unwrap(), 1);

    let lines = sink.0.lock().unwrap();
    assert_eq!(lines.len(), 1);
    assert!(lines[0].1.ends_with(" HCI Command: HCI_Reset(0x0c03), Parameter Length: 0"));
    assert_eq!(lines[0].1.len(), 15 + 1 + "HCI Command: HCI_Reset(0x0c03), Parameter Length: 0".len());
}

}
