//! Post-processing for the units whose layout depends on decoded content.

use alloc::format;
use alloc::string::String;

use crate::buffer::ByteCursor;
use crate::field::{decode_field, Span};
use crate::registry::{self, bd_addr, hex};
use crate::types::{DecodedField, DecodedInstance, Param, Unit, Width};
use crate::walker::walk;
use crate::{debug, DecodeError};

const FILTER_TYPE: usize = 0;
const COMPLETE_OPCODE: usize = 1;
const STATUS_OPCODE: usize = 2;

static CLASS_OF_DEVICE: Param = hex("Class_of_Device", 3);
static CLASS_OF_DEVICE_MASK: Param = hex("Class_of_Device_Mask", 3);
static FILTER_BD_ADDR: Param = bd_addr("BD_ADDR");

/// Replaces the opcode text at `index` with the command's name, when known.
fn name_opcode(instance: &mut DecodedInstance, index: usize) -> Option<&'static Unit> {
    let field = instance.fields.get_mut(index)?;
    let opcode = field.raw? as u16;
    let unit = registry::resolve_command(opcode)?;
    field.value = format!("{}(0x{:04x})", unit.name, opcode);
    Some(unit)
}

/// Command Complete: names the completed command and walks its return parameters.
pub fn command_complete(instance: &mut DecodedInstance, cursor: &mut ByteCursor) -> Result<(), DecodeError> {
    let Some(unit) = name_opcode(instance, COMPLETE_OPCODE) else {
        return Ok(());
    };
    if unit.returns.is_empty() {
        return Ok(());
    }
    instance
        .fields
        .push(DecodedField::new("Return Parameter", String::new(), 1));
    walk(unit.returns, cursor, 2, &mut instance.fields)
}

pub fn command_status(instance: &mut DecodedInstance) {
    name_opcode(instance, STATUS_OPCODE);
}

/// LE Meta: resolves the sub-event and decodes its parameters in place.
pub fn le_meta(instance: &mut DecodedInstance, cursor: &mut ByteCursor) -> Result<(), DecodeError> {
    let Some(code) = cursor.read_u8() else {
        return Ok(());
    };
    let Some(unit) = registry::resolve_le_subevent(code) else {
        debug!("unknown LE subevent 0x{:02x}", code);
        instance.fields.push(DecodedField::new(
            "Subevent_Code",
            format!("(unknown subevent 0x{:02x})", code),
            1,
        ));
        return Ok(());
    };
    let mut field = DecodedField::new("Subevent_Code", format!("{}(0x{:02x})", unit.name, code), 1);
    field.raw = Some(code.into());
    instance.fields.push(field);
    walk(unit.params, cursor, 1, &mut instance.fields)
}

/// Set_Event_Filter: the condition fields that follow Filter_Type depend on its value.
pub fn set_event_filter(instance: &mut DecodedInstance, cursor: &mut ByteCursor) -> Result<(), DecodeError> {
    let Some(filter_type) = instance.fields.get(FILTER_TYPE).and_then(|f| f.raw) else {
        return Ok(());
    };
    let filter_type = filter_type as u8;
    let text: String = match filter_type {
        0x00 => "(0x00) Clear All Filters.".into(),
        0x01 => "(0x01) Inquiry Result".into(),
        0x02 => "(0x02) Connection Setup.".into(),
        other => format!("(0x{:02x}) Reserved for future use.", other),
    };
    instance.fields[FILTER_TYPE].value = text;

    match filter_type {
        0x01 => inquiry_result_filter(instance, cursor),
        0x02 => connection_setup_filter(instance, cursor),
        _ => Ok(()),
    }
}

fn inquiry_result_filter(instance: &mut DecodedInstance, cursor: &mut ByteCursor) -> Result<(), DecodeError> {
    let Some(condition) = cursor.read_u8() else {
        return Ok(());
    };
    let text: String = match condition {
        0x00 => "(0x00) Return responses from all devices during the Inquiry process".into(),
        0x01 => "(0x01) A device with a specific Class of Device responded to the Inquiry process".into(),
        0x02 => "(0x02) A device with a specific BD_ADDR responded to the Inquiry process".into(),
        other => format!("(0x{:02x}) Reserved for future use", other),
    };
    push(instance, "Inquiry_Result_Filter_Condition_Type", text, condition);

    match condition {
        0x01 => {
            push_decoded(instance, &CLASS_OF_DEVICE, cursor)?;
            push_decoded(instance, &CLASS_OF_DEVICE_MASK, cursor)
        }
        0x02 => push_decoded(instance, &FILTER_BD_ADDR, cursor),
        _ => Ok(()),
    }
}

fn connection_setup_filter(instance: &mut DecodedInstance, cursor: &mut ByteCursor) -> Result<(), DecodeError> {
    let Some(condition) = cursor.read_u8() else {
        return Ok(());
    };
    let text: String = match condition {
        0x00 => "(0x00) Allow Connections from all devices".into(),
        0x01 => "(0x01) Allow Connections from a device with a specific Class of Device".into(),
        0x02 => "(0x02) Allow Connections from a device with a specific BD_ADDR".into(),
        other => format!("(0x{:02x}) Reserved for future use", other),
    };
    push(instance, "Connection_Setup_Filter_Condition_Type", text, condition);

    match condition {
        0x00 => {}
        0x01 => {
            push_decoded(instance, &CLASS_OF_DEVICE, cursor)?;
            push_decoded(instance, &CLASS_OF_DEVICE_MASK, cursor)?;
        }
        0x02 => push_decoded(instance, &FILTER_BD_ADDR, cursor)?,
        _ => return Ok(()),
    }
    auto_accept_flag(instance, cursor);
    Ok(())
}

fn auto_accept_flag(instance: &mut DecodedInstance, cursor: &mut ByteCursor) {
    let Some(flag) = cursor.read_u8() else {
        return;
    };
    let text: String = match flag {
        0x01 => "(0x01) Do NOT Auto accept the connection (Auto accept is off).".into(),
        0x02 => "(0x02) Do Auto accept the connection with role switch disabled (Auto accept is on).".into(),
        0x03 => "(0x03) Do Auto accept the connection with role switch enabled (Auto accept is on).".into(),
        other => format!("(0x{:02x}) Reserved for future use.", other),
    };
    push(instance, "Auto_Accept_Flag", text, flag);
}

fn push(instance: &mut DecodedInstance, name: &'static str, value: String, raw: u8) {
    let mut field = DecodedField::new(name, value, 1);
    field.raw = Some(raw.into());
    instance.fields.push(field);
}

fn push_decoded(
    instance: &mut DecodedInstance,
    param: &'static Param,
    cursor: &mut ByteCursor,
) -> Result<(), DecodeError> {
    if cursor.is_empty() {
        return Ok(());
    }
    let span = match param.width {
        Width::Fixed(width) => Span::Exactly(width.into()),
        _ => Span::Remainder,
    };
    let decoded = decode_field(param, span, cursor)?;
    let mut field = DecodedField::new(param.name, decoded.text, 1);
    field.raw = decoded.value;
    instance.fields.push(field);
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::types::Stream;

    fn instance(opcode: u16) -> DecodedInstance {
        let unit = registry::resolve_command(opcode).unwrap();
        DecodedInstance::new(Stream::Command, unit, opcode, 0)
    }

    fn filter(data: &[u8]) -> DecodedInstance {
        let mut instance = instance(registry::SET_EVENT_FILTER);
        let mut cursor = ByteCursor::new(data);
        let params = registry::resolve_command(registry::SET_EVENT_FILTER).unwrap().params;
        walk(params, &mut cursor, 1, &mut instance.fields).unwrap();
        set_event_filter(&mut instance, &mut cursor).unwrap();
        instance
    }

    #[test]
    fn clear_all_filters() {
        let instance = filter(&[0x00]);
        assert_eq!(instance.fields.len(), 1);
        assert_eq!(instance.fields[0].value, "(0x00) Clear All Filters.");
    }

    #[test]
    fn inquiry_result_by_address() {
        let instance = filter(&[0x01, 0x02, 0x01, 0x02, 0x03, 0x04, 0x05, 0x06]);
        assert_eq!(instance.fields[0].value, "(0x01) Inquiry Result");
        assert_eq!(instance.fields[1].name, "Inquiry_Result_Filter_Condition_Type");
        assert_eq!(instance.fields[2].value, "0x06-05-04-03-02-01");
        assert!(instance.fields.iter().all(|f| f.indent == 1));
    }

    #[test]
    fn connection_setup_by_class() {
        let instance = filter(&[0x02, 0x01, 0x0c, 0x02, 0x5a, 0xff, 0xff, 0xff, 0x03]);
        let names: alloc::vec::Vec<_> = instance.fields.iter().map(|f| f.name).collect();
        assert_eq!(
            names,
            [
                "Filter_Type",
                "Connection_Setup_Filter_Condition_Type",
                "Class_of_Device",
                "Class_of_Device_Mask",
                "Auto_Accept_Flag"
            ]
        );
        assert_eq!(instance.fields[2].value, "0x000c025a");
        assert_eq!(
            instance.fields[4].value,
            "(0x03) Do Auto accept the connection with role switch enabled (Auto accept is on)."
        );
    }

    #[test]
    fn reserved_filter_type() {
        let instance = filter(&[0x07, 0x00]);
        assert_eq!(instance.fields.len(), 1);
        assert_eq!(instance.fields[0].value, "(0x07) Reserved for future use.");
    }
}
