use alloc::format;
use alloc::string::String;
use alloc::vec::Vec;
use core::fmt::Write as _;

use crate::field::hex_bytes;
use crate::types::{DecodedField, DecodedInstance, Stream};

pub const CMD_TARGET: &str = "hci_dump_cmd";
pub const EVT_TARGET: &str = "hci_dump_evt";

const INDENT: &str = "    ";

/// Destination for rendered dump lines.
pub trait LineSink {
    fn line(&mut self, stream: Stream, line: &str);
}

/// Sends every line to the logger, one target per direction.
#[derive(Default, Clone, Copy, Debug)]
pub struct LogSink;

impl LineSink for LogSink {
    #[cfg(not(feature = "defmt"))]
    fn line(&mut self, stream: Stream, line: &str) {
        match stream {
            Stream::Command => log::debug!(target: CMD_TARGET, "{}", line),
            Stream::Event => log::debug!(target: EVT_TARGET, "{}", line),
        }
    }

    #[cfg(feature = "defmt")]
    fn line(&mut self, stream: Stream, line: &str) {
        defmt::debug!("{} {}", stream, line);
    }
}

impl LineSink for Vec<String> {
    fn line(&mut self, _stream: Stream, line: &str) {
        self.push(line.into());
    }
}

fn header(instance: &DecodedInstance, timestamp: Option<&str>) -> String {
    let mut line = String::new();
    if let Some(ts) = timestamp {
        line.push_str(ts);
        line.push(' ');
    }
    match instance.stream {
        Stream::Command => {
            let _ = write!(
                line,
                "HCI Command: {}(0x{:04x}), Parameter Length: {}",
                instance.name, instance.opcode, instance.parameter_length
            );
        }
        Stream::Event => {
            let _ = write!(
                line,
                "HCI Event: {}(0x{:02x}), Parameter Length: {}",
                instance.name, instance.opcode, instance.parameter_length
            );
        }
    }
    line
}

fn field_lines(field: &DecodedField, out: &mut Vec<String>) {
    let mut prefix = INDENT.repeat(field.indent.into());
    if let Some(seq) = field.seq {
        let _ = write!(prefix, "[{}] ", seq);
    }
    let mut values = field.value.split('\n');
    match values.next() {
        Some(first) if !first.is_empty() => out.push(format!("{}{}: {}", prefix, field.name, first)),
        _ => out.push(format!("{}{}:", prefix, field.name)),
    }
    out.extend(values.map(String::from));
}

/// Renders the header line, one line per field and the trailing raw bytes.
pub fn lines(instance: &DecodedInstance, timestamp: Option<&str>) -> Vec<String> {
    let mut out = Vec::with_capacity(instance.fields.len() + 2);
    out.push(header(instance, timestamp));
    for field in &instance.fields {
        field_lines(field, &mut out);
    }
    if !instance.leftover.is_empty() {
        let mut raw = format!("{}Raw Data: ", INDENT);
        let _ = hex_bytes(&instance.leftover, &mut raw);
        out.push(raw);
    }
    out
}

pub fn emit<S: LineSink + ?Sized>(instance: &DecodedInstance, timestamp: Option<&str>, sink: &mut S) {
    for line in lines(instance, timestamp) {
        sink.line(instance.stream, &line);
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::registry;

    fn reset() -> DecodedInstance {
        let unit = registry::resolve_command(0x0c03).unwrap();
        DecodedInstance::new(Stream::Command, unit, 0x0c03, 0)
    }

    #[test]
    fn summary_only_is_one_line() {
        let out = lines(&reset(), Some("12:00:00.000001"));
        assert_eq!(out, ["12:00:00.000001 HCI Command: HCI_Reset(0x0c03), Parameter Length: 0"]);
        assert_eq!(lines(&reset(), None)[0], "HCI Command: HCI_Reset(0x0c03), Parameter Length: 0");
    }

    #[test]
    fn fields_are_indented_and_numbered() {
        let mut instance = reset();
        instance.fields.push(DecodedField::new("Return Parameter", String::new(), 1));
        let mut numbered = DecodedField::new("BD_ADDR", "0x06-05-04-03-02-01".into(), 2);
        numbered.seq = Some(1);
        instance.fields.push(numbered);
        instance.fields.push(DecodedField::new("Flags", "0x0001\n  first\n  second".into(), 1));
        instance.leftover = alloc::vec![0xaa, 0xbb];

        let out = lines(&instance, None);
        assert_eq!(out[1], "    Return Parameter:");
        assert_eq!(out[2], "        [1] BD_ADDR: 0x06-05-04-03-02-01");
        assert_eq!(out[3], "    Flags: 0x0001");
        assert_eq!(out[4], "  first");
        assert_eq!(out[6], "    Raw Data: aa bb");
    }

    #[test]
    fn emit_feeds_sink() {
        let mut sink: Vec<String> = Vec::new();
        emit(&reset(), None, &mut sink);
        assert_eq!(sink.len(), 1);
    }
}
