use alloc::vec::Vec;

use crate::buffer::ByteCursor;
use crate::field::{decode_field, Span, TRUNCATED};
use crate::types::{DecodedField, Param, Width};
use crate::{trace, DecodeError};

/// Walks `params` over `cursor`, appending one field per decoded occurrence.
///
/// Back-references are resolved against everything already in `fields`, so
/// return parameters walked after an event's own fields see the same list.
/// A count field is followed by its unit of `repeats` params, decoded once
/// per counted item and tagged `[1]..[n]`; a count inside a unit is decoded
/// as a plain field. Once the cursor runs dry the next counted item is
/// listed with every member marked truncated, and the group ends there.
pub fn walk(
    params: &'static [Param],
    cursor: &mut ByteCursor,
    indent: u8,
    fields: &mut Vec<DecodedField>,
) -> Result<(), DecodeError> {
    let mut i = 0;
    while i < params.len() {
        let param = &params[i];
        decode_one(param, None, cursor, indent, fields)?;
        i += 1;

        if !param.is_repeat_count() {
            continue;
        }
        let unit_len = usize::from(param.repeats);
        let unit = params.get(i..i + unit_len).unwrap_or(&[]);
        let count = fields.last().and_then(|f| f.raw).unwrap_or(0) as usize;
        trace!("{} repeats {} x {} params", param.name, count, unit_len);
        for seq in 1..=count {
            if cursor.is_empty() {
                fields.extend(unit.iter().map(|member| DecodedField {
                    name: member.name,
                    value: TRUNCATED.into(),
                    indent,
                    seq: Some(seq),
                    raw: None,
                }));
                break;
            }
            for member in unit {
                decode_one(member, Some(seq), cursor, indent, fields)?;
            }
        }
        i += unit_len;
    }
    Ok(())
}

fn decode_one(
    param: &'static Param,
    seq: Option<usize>,
    cursor: &mut ByteCursor,
    indent: u8,
    fields: &mut Vec<DecodedField>,
) -> Result<(), DecodeError> {
    let span = match param.width {
        Width::Fixed(width) => Span::Exactly(width.into()),
        Width::ReferencesField(offset) => {
            let referenced = fields
                .len()
                .checked_add_signed(offset.into())
                .and_then(|i| fields.get(i))
                .and_then(|f| f.raw)
                .unwrap_or(0);
            Span::Exactly(referenced as usize)
        }
        Width::RemainderOfPacket => Span::Remainder,
    };
    let decoded = decode_field(param, span, cursor)?;
    fields.push(DecodedField {
        name: param.name,
        value: decoded.text,
        indent,
        seq,
        raw: decoded.value,
    });
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::registry::{bytes_ref, dec, hex, hex_ref};

    static PAIRS: [Param; 3] = [dec("Num", 1).repeating(2), hex("A", 1), hex("B", 2)];
    static SIZED: [Param; 2] = [dec("Length", 1), bytes_ref("Data", -1)];
    static BAD_REF: [Param; 2] = [dec("Length", 1), hex_ref("Fragment", -1)];

    #[test]
    fn repeat_group_expands_in_order() {
        let data = [2u8, 0x01, 0x00, 0x02, 0x02, 0x00, 0x03, 0xff];
        let mut cursor = ByteCursor::new(&data);
        let mut fields = Vec::new();
        walk(&PAIRS, &mut cursor, 1, &mut fields).unwrap();
        assert_eq!(fields.len(), 5);
        assert_eq!(cursor.position(), 7);
        let seqs: Vec<_> = fields.iter().map(|f| f.seq).collect();
        assert_eq!(seqs, [None, Some(1), Some(1), Some(2), Some(2)]);
        assert_eq!(fields[3].value, "0x02");
        assert_eq!(fields[4].value, "0x0003");
    }

    #[test]
    fn missing_item_is_marked_truncated() {
        let data = [3u8, 0x01, 0x00, 0x02];
        let mut cursor = ByteCursor::new(&data);
        let mut fields = Vec::new();
        walk(&PAIRS, &mut cursor, 1, &mut fields).unwrap();
        let seqs: Vec<_> = fields.iter().map(|f| f.seq).collect();
        assert_eq!(seqs, [None, Some(1), Some(1), Some(2), Some(2)]);
        assert_eq!(fields[2].value, "0x0002");
        assert_eq!(fields[3].name, "A");
        assert_eq!(fields[3].value, TRUNCATED);
        assert_eq!(fields[4].value, TRUNCATED);
        assert_eq!(fields[4].raw, None);
    }

    #[test]
    fn width_follows_earlier_field() {
        let data = [3u8, 0xde, 0xad, 0xbe, 0xef];
        let mut cursor = ByteCursor::new(&data);
        let mut fields = Vec::new();
        walk(&SIZED, &mut cursor, 1, &mut fields).unwrap();
        assert_eq!(fields[1].value, "de ad be");
        assert_eq!(cursor.remaining(), 1);
    }

    #[test]
    fn referenced_integer_width_must_fit() {
        let data = [9u8, 0, 0, 0, 0, 0, 0, 0, 0, 0];
        let mut cursor = ByteCursor::new(&data);
        let mut fields = Vec::new();
        let err = walk(&BAD_REF, &mut cursor, 1, &mut fields).unwrap_err();
        assert!(matches!(err, DecodeError::MalformedSchemaEntry { field: "Fragment", width: 9, .. }));
        assert_eq!(fields.len(), 1);
        assert_eq!(cursor.remaining(), 9);
    }
}
