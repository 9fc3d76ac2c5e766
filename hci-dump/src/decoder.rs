use crate::buffer::ByteCursor;
use crate::event;
use crate::format::{emit, LineSink};
use crate::hci::{CapturedPacket, CommandHeader, EventHeader, PacketType};
use crate::registry::{self, EVT_COMMAND_COMPLETE, EVT_COMMAND_STATUS, EVT_LE_META, SET_EVENT_FILTER};
use crate::types::{DecodedInstance, Stream, CMD_PKT_HEADER_SIZE, EVT_PKT_HEADER_SIZE};
use crate::walker::walk;
use crate::{trace, warn, DecodeError};

/// Decodes one HCI command packet (`opcode`, `length`, parameters).
///
/// Returns `Ok(None)` when the opcode has no schema entry. A malformed schema
/// entry does not fail the call: it is recorded on the instance, fields
/// decoded so far are kept and the rest of the parameters become raw data.
pub fn decode_command(packet: &[u8]) -> Result<Option<DecodedInstance>, DecodeError> {
    let header = CommandHeader::parse(packet)?;
    let opcode = header.opcode.value();
    let Some(unit) = registry::resolve_command(opcode) else {
        trace!("no schema for command 0x{:04x}", opcode);
        return Ok(None);
    };

    let mut instance = DecodedInstance::new(Stream::Command, unit, opcode, header.parameter_length);
    let mut cursor = ByteCursor::with_budget(&packet[CMD_PKT_HEADER_SIZE..], header.parameter_length.into());
    let walked = walk(unit.params, &mut cursor, 1, &mut instance.fields)
        .and_then(|_| match opcode {
            SET_EVENT_FILTER => event::set_event_filter(&mut instance, &mut cursor),
            _ => Ok(()),
        });
    finish(&mut instance, walked, &mut cursor);
    Ok(Some(instance))
}

/// Decodes one HCI event packet (`code`, `length`, parameters).
pub fn decode_event(packet: &[u8]) -> Result<Option<DecodedInstance>, DecodeError> {
    let header = EventHeader::parse(packet)?;
    let code = header.event_code;
    let Some(unit) = registry::resolve_event(code) else {
        trace!("no schema for event 0x{:02x}", code);
        return Ok(None);
    };

    let mut instance = DecodedInstance::new(Stream::Event, unit, code.into(), header.parameter_length);
    let mut cursor = ByteCursor::with_budget(&packet[EVT_PKT_HEADER_SIZE..], header.parameter_length.into());
    let walked = walk(unit.params, &mut cursor, 1, &mut instance.fields)
        .and_then(|_| match code {
            EVT_COMMAND_COMPLETE => event::command_complete(&mut instance, &mut cursor),
            EVT_COMMAND_STATUS => {
                event::command_status(&mut instance);
                Ok(())
            }
            EVT_LE_META => event::le_meta(&mut instance, &mut cursor),
            _ => Ok(()),
        });
    finish(&mut instance, walked, &mut cursor);
    Ok(Some(instance))
}

fn finish(instance: &mut DecodedInstance, walked: Result<(), DecodeError>, cursor: &mut ByteCursor) {
    if let Err(e) = walked {
        warn!("{}: {}", instance.name, e);
        instance.error = Some(e);
    }
    instance.leftover = cursor.rest().into();
}

/// Decodes packets and hands the rendered lines to a sink.
pub struct Decoder<S: LineSink> {
    sink: S,
    decoded: usize,
}

impl<S: LineSink> Decoder<S> {
    pub fn new(sink: S) -> Self {
        Self { sink, decoded: 0 }
    }

    /// Returns whether anything was emitted. Data packets and unknown
    /// opcodes or event codes are skipped silently.
    pub fn process(
        &mut self,
        packet_type: PacketType,
        timestamp: Option<&str>,
        data: &[u8],
    ) -> Result<bool, DecodeError> {
        let instance = match packet_type {
            PacketType::Command => decode_command(data)?,
            PacketType::Event => decode_event(data)?,
            PacketType::Acl | PacketType::Sco => None,
        };
        let Some(instance) = instance else {
            return Ok(false);
        };
        emit(&instance, timestamp, &mut self.sink);
        self.decoded += 1;
        Ok(true)
    }

    pub fn decode_captured(&mut self, packet: &CapturedPacket) -> Result<bool, DecodeError> {
        self.process(packet.packet_type, Some(packet.timestamp_str()), &packet.data)
    }

    pub fn sink(&self) -> &S {
        &self.sink
    }

    pub fn into_sink(self) -> S {
        self.sink
    }

    pub fn decoded(&self) -> usize {
        self.decoded
    }
}
