#[cfg(feature = "sync")]
mod test {

use std::cell::RefCell;

use embedded_io::{Error, ErrorType};
use chrono::{NaiveDate, TimeZone, Utc};
use hci_dump::hci::{format_timestamp, should_capture, timestamp_of, CAPTURE_HEADER_SIZE};
use hci_dump::{CapturedPacket, Decoder, DumpError, PacketType, Read};

struct TestConnector {
    to_read: RefCell<[u8; 128]>,
    read_idx: RefCell<usize>,
    read_max: RefCell<usize>,
}

impl TestConnector {
    fn provide_data_to_read(&self, data: &[u8]) {
        let len = data.len();
        let from = *(self.read_max.borrow());
        let to = from + len;
        (self.to_read.borrow_mut())[from..to].copy_from_slice(data);
        *(self.read_max.borrow_mut()) += len;
    }
}

impl Default for TestConnector {
    fn default() -> Self {
        Self {
            to_read: RefCell::new([0u8; 128]),
            read_idx: RefCell::new(0),
            read_max: RefCell::new(0),
        }
    }
}

#[derive(Debug)]
pub enum TestConnectorError {
    Unknown,
}

impl Error for TestConnectorError {
    fn kind(&self) -> embedded_io::ErrorKind {
        embedded_io::ErrorKind::Other
    }
}

impl ErrorType for TestConnector {
    type Error = TestConnectorError;
}

impl Read for TestConnector {
    fn read(&mut self, buf: &mut [u8]) -> Result<usize, Self::Error> {
        let l = buf.len();
        let start = *self.read_idx.borrow();
        let read_max = *self.read_max.borrow();
        let end = core::cmp::min(start + l, read_max);
        let l = end - start;

        buf[..l].copy_from_slice(&self.to_read.borrow()[start..end]);
        *(self.read_idx.borrow_mut()) += l;
        Ok(l)
    }
}

const TS: &[u8; 15] = b"10:20:30.000040";

fn record(tag: u8, packet: &[u8]) -> Vec<u8> {
    let mut r = vec![tag];
    r.extend_from_slice(TS);
    r.extend_from_slice(packet);
    r
}

#[test]
fn reads_framed_records_until_eof() {
    let mut connector = TestConnector::default();
    connector.provide_data_to_read(&record(0x01, &[0x03, 0x0c, 0x00]));
    connector.provide_data_to_read(&record(0x04, &[0x0e, 0x04, 0x01, 0x03, 0x0c, 0x00]));
    connector.provide_data_to_read(&record(0x02, &[0x01, 0x20, 0x02, 0x00, 0xaa, 0xbb]));

    let first = CapturedPacket::read(&mut connector).unwrap().unwrap();
    assert_eq!(first.packet_type, PacketType::Command);
    assert_eq!(first.timestamp_str(), "10:20:30.000040");
    assert_eq!(first.data, [0x03, 0x0c, 0x00]);

    let second = CapturedPacket::read(&mut connector).unwrap().unwrap();
    assert_eq!(second.packet_type, PacketType::Event);
    assert_eq!(second.data.len(), 6);

    let third = CapturedPacket::read(&mut connector).unwrap().unwrap();
    assert_eq!(third.packet_type, PacketType::Acl);
    assert_eq!(third.data, [0x01, 0x20, 0x02, 0x00, 0xaa, 0xbb]);

    assert_eq!(CapturedPacket::read(&mut connector).unwrap(), None);

    let mut decoder = Decoder::new(Vec::<String>::new());
    for packet in [&first, &second, &third] {
        decoder.decode_captured(packet).unwrap();
    }
    assert_eq!(decoder.decoded(), 2);
    assert_eq!(
        decoder.sink()[0],
        "10:20:30.000040 HCI Command: HCI_Reset(0x0c03), Parameter Length: 0"
    );
}

#[test]
fn unknown_tag_is_rejected() {
    let mut connector = TestConnector::default();
    connector.provide_data_to_read(&record(0x09, &[0x00]));
    assert!(matches!(
        CapturedPacket::read(&mut connector),
        Err(DumpError::UnknownPacketType(0x09))
    ));
}

#[test]
fn parse_splits_prefix() {
    let bytes = record(0x04, &[0x05, 0x04, 0x00, 0x01, 0x00, 0x13]);
    let packet = CapturedPacket::parse(&bytes).unwrap();
    assert_eq!(packet.packet_type, PacketType::Event);
    assert_eq!(packet.data, &bytes[CAPTURE_HEADER_SIZE..]);
    assert_eq!(packet.encode(), bytes);

    assert!(matches!(
        CapturedPacket::parse(&bytes[..4]),
        Err(DumpError::Decode(_))
    ));
}

#[test]
fn firmware_log_events_are_filtered() {
    let fw_log = [0xff, 0x03, 0x50, 0x01, 0x02];
    assert!(!should_capture(PacketType::Event, &fw_log, true));
    assert!(should_capture(PacketType::Event, &fw_log, false));
    assert!(should_capture(PacketType::Event, &[0xff, 0x02, 0x51, 0x00], true));
    assert!(should_capture(PacketType::Command, &[0x03, 0x0c, 0x00], true));
    assert!(!should_capture(PacketType::Acl, &[0x01, 0x20, 0x00, 0x00], true));
    assert!(!should_capture(PacketType::Sco, &[0x01, 0x00, 0x00], true));
}

#[test]
fn timestamps_wrap_at_midnight() {
    assert_eq!(&format_timestamp(25 * 3600 + 61, 7), b"01:01:01.000007");
    assert_eq!(&format_timestamp(0, 999_999), b"00:00:00.999999");
    assert_eq!(&format_timestamp(u64::MAX, 1), b"00:00:00.000000");
}

#[test]
fn stamps_keep_the_time_of_day() {
    let time = NaiveDate::from_ymd_opt(2024, 2, 29)
        .and_then(|d| d.and_hms_micro_opt(23, 59, 58, 123_456))
        .unwrap();
    assert_eq!(&timestamp_of(&Utc.from_utc_datetime(&time)), b"23:59:58.123456");
}

}
