use alloc::string::String;
use core::fmt::Write;

use crate::buffer::{be_value, le_value, ByteCursor};
use crate::hci::StatusCode;
use crate::special;
use crate::types::{DisplayKind, Param, Scratch};
use crate::DecodeError;

pub const TRUNCATED: &str = "(truncated)";

/// Resolved byte span of one parameter occurrence.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum Span {
    Exactly(usize),
    Remainder,
}

#[derive(Clone, Debug, PartialEq, Eq)]
pub struct Decoded {
    pub text: String,
    pub consumed: usize,
    pub value: Option<u32>,
}

/// Decodes one occurrence of `param` from `cursor`.
///
/// A span longer than what is left is clamped and shown as hex bytes with a
/// `(truncated)` marker; a remainder span consumes everything left without
/// the marker. Security material stays hidden either way. The cursor is only
/// advanced once the width has been accepted.
pub fn decode_field(param: &Param, span: Span, cursor: &mut ByteCursor) -> Result<Decoded, DecodeError> {
    let remaining = cursor.remaining();
    let fallback = if param.kind.is_security() {
        param.kind
    } else {
        DisplayKind::HexBytes
    };
    let (width, kind, truncated) = match span {
        Span::Remainder => (remaining, fallback, false),
        Span::Exactly(width) if width > remaining => (remaining, fallback, true),
        Span::Exactly(width) => (width, param.kind, false),
    };

    if let Some(allowed) = kind.allowed_widths() {
        if !allowed.contains(&width) {
            return Err(DecodeError::MalformedSchemaEntry {
                field: param.name,
                kind,
                width,
            });
        }
    }

    let bytes = cursor.take(width).ok_or(DecodeError::PacketTooShort)?;
    let mut text = Scratch::new();
    let value = render(kind, bytes, &mut text)?;
    if truncated {
        if !text.is_empty() {
            text.push(' ').map_err(|_| DecodeError::FieldTextOverflow)?;
        }
        text.push_str(TRUNCATED).map_err(|_| DecodeError::FieldTextOverflow)?;
    }

    Ok(Decoded {
        text: text.as_str().into(),
        consumed: width,
        value,
    })
}

fn render(kind: DisplayKind, bytes: &[u8], out: &mut Scratch) -> Result<Option<u32>, DecodeError> {
    let value = be_value(bytes);
    match kind {
        DisplayKind::Hex => {
            match bytes.len() {
                1 => write!(out, "0x{:02x}", value)?,
                2 => write!(out, "0x{:04x}", value)?,
                _ => write!(out, "0x{:08x}", value)?,
            }
            Ok(Some(value))
        }
        DisplayKind::Dec => {
            write!(out, "{}", value)?;
            Ok(Some(value))
        }
        DisplayKind::ConnectionHandle => {
            let handle = value & 0x0fff;
            write!(out, "(0x{:04x}) {}", handle, handle)?;
            Ok(Some(handle))
        }
        DisplayKind::HexBytes => {
            hex_bytes(bytes, out)?;
            Ok(None)
        }
        DisplayKind::Chars => {
            for b in bytes.iter().take_while(|b| **b != 0) {
                out.push(char::from(*b)).map_err(|_| DecodeError::FieldTextOverflow)?;
            }
            Ok(None)
        }
        DisplayKind::Clk625us => duration(out, value, 0.625, "msec."),
        DisplayKind::Clk1250us => duration(out, value, 1.25, "msec."),
        DisplayKind::Clk10ms => duration(out, value, 10.0, "msec."),
        DisplayKind::Clk1280ms => duration(out, value, 1.28, "sec."),
        DisplayKind::StatusCode => {
            StatusCode::describe(bytes[0], out)?;
            Ok(Some(value))
        }
        DisplayKind::BdAddr => {
            bd_addr(bytes, out)?;
            Ok(None)
        }
        DisplayKind::Opcode => {
            let opcode = u16::from_le_bytes([bytes[0], bytes[1]]);
            write!(out, "0x{:04x}", opcode)?;
            Ok(Some(opcode.into()))
        }
        DisplayKind::Special(id) => {
            if !special::render(id, bytes, out)? {
                out.clear();
                hex_bytes(bytes, out)?;
            }
            Ok((!id.is_security() && bytes.len() <= 4).then(|| le_value(bytes)))
        }
    }
}

fn duration(out: &mut Scratch, value: u32, scale: f64, unit: &str) -> Result<Option<u32>, DecodeError> {
    write!(out, "(0x{:04x}) {:.6} {}", value, f64::from(value) * scale, unit)?;
    Ok(Some(value))
}

pub fn hex_bytes<W: Write>(bytes: &[u8], out: &mut W) -> Result<(), DecodeError> {
    for (i, b) in bytes.iter().enumerate() {
        if i > 0 {
            out.write_char(' ')?;
        }
        write!(out, "{:02x}", b)?;
    }
    Ok(())
}

/// Address bytes arrive least significant first and are shown the other way round.
pub fn bd_addr<W: Write>(bytes: &[u8], out: &mut W) -> Result<(), DecodeError> {
    for (i, b) in bytes.iter().rev().enumerate() {
        if i == 0 {
            write!(out, "0x{:02x}", b)?;
        } else {
            write!(out, "-{:02x}", b)?;
        }
    }
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::registry::{bd_addr as addr_param, bytes_rest, clk1280ms, clk625us, dec, handle, hex, special, status};
    use crate::special::{SpecialId, SECURITY_HIDDEN};

    fn decode(param: Param, span: Span, data: &[u8]) -> (Result<Decoded, DecodeError>, usize) {
        let mut cursor = ByteCursor::new(data);
        let decoded = decode_field(&param, span, &mut cursor);
        (decoded, cursor.position())
    }

    #[test]
    fn integers_are_big_endian() {
        let (d, _) = decode(hex("X", 3), Span::Exactly(3), &[0x01, 0x02, 0x03]);
        assert_eq!(d.unwrap().text, "0x00010203");
        let (d, _) = decode(dec("X", 2), Span::Exactly(2), &[0x01, 0x00]);
        assert_eq!(d.unwrap().value, Some(256));
    }

    #[test]
    fn every_integer_width_keeps_its_value() {
        let value: u32 = 0x8a7b_6c5d;
        for width in 1..=4u8 {
            let expected = value >> (8 * (4 - u32::from(width)));
            let data = &value.to_be_bytes()[4 - usize::from(width)..];
            let (d, _) = decode(dec("X", width), Span::Exactly(width.into()), data);
            assert_eq!(d.unwrap().text, alloc::format!("{}", expected));
            let (d, _) = decode(hex("X", width), Span::Exactly(width.into()), data);
            assert_eq!(d.unwrap().value, Some(expected));
        }
    }

    #[test]
    fn handle_is_masked() {
        let (d, used) = decode(handle("Connection_Handle"), Span::Exactly(2), &[0x12, 0x34]);
        assert_eq!(d.unwrap().text, "(0x0234) 564");
        assert_eq!(used, 2);
    }

    #[test]
    fn durations_are_scaled() {
        let (d, _) = decode(clk625us("Interval", 2), Span::Exactly(2), &[0x00, 0x10]);
        assert_eq!(d.unwrap().text, "(0x0010) 10.000000 msec.");
        let (d, _) = decode(clk1280ms("Inquiry_Length", 1), Span::Exactly(1), &[0x08]);
        assert_eq!(d.unwrap().text, "(0x0008) 10.240000 sec.");
    }

    #[test]
    fn status_and_address() {
        let (d, _) = decode(status("Status"), Span::Exactly(1), &[0x04]);
        assert_eq!(d.unwrap().text, "(0x04) Page Timeout");
        let (d, _) = decode(status("Status"), Span::Exactly(1), &[0x99]);
        assert_eq!(d.unwrap().text, "(0x99) (unknown status 0x99)");
        let (d, _) = decode(addr_param("BD_ADDR"), Span::Exactly(6), &[1, 2, 3, 4, 5, 6]);
        assert_eq!(d.unwrap().text, "0x06-05-04-03-02-01");
    }

    #[test]
    fn short_input_is_truncated() {
        let (d, used) = decode(hex("X", 4), Span::Exactly(4), &[0xaa, 0xbb]);
        let d = d.unwrap();
        assert_eq!(d.text, "aa bb (truncated)");
        assert_eq!(d.consumed, 2);
        assert_eq!(d.value, None);
        assert_eq!(used, 2);

        let (d, _) = decode(bytes_rest("Rest"), Span::Remainder, &[0xaa, 0xbb]);
        assert_eq!(d.unwrap().text, "aa bb");
    }

    #[test]
    fn short_security_field_stays_hidden() {
        let key = special("Link_Key", 16, SpecialId::SecurityKey);
        let (d, used) = decode(key, Span::Exactly(16), &[0xde, 0xad, 0xbe, 0xef]);
        let d = d.unwrap();
        assert_eq!(d.text, alloc::format!("{} (truncated)", SECURITY_HIDDEN));
        assert_eq!(d.value, None);
        assert_eq!(used, 4);
    }

    #[test]
    fn oversized_integer_is_malformed() {
        let (d, used) = decode(hex("AMP_ASSOC_fragment", 1), Span::Exactly(5), &[0; 8]);
        assert!(matches!(d, Err(DecodeError::MalformedSchemaEntry { width: 5, .. })));
        assert_eq!(used, 0);
    }
}
