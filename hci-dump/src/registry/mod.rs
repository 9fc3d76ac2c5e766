//! Compiled-in schema for every decodable command, event and LE sub-event.
//!
//! Each table is sorted by slot index and looked up with a binary search, so
//! gaps in the numbering simply resolve to `None`.

use alloc::vec::Vec;

use crate::hci::{CommandGroup, Opcode};
use crate::special::SpecialId;
use crate::types::{DisplayKind, Param, Unit, Width};

mod baseband;
mod events;
mod informational;
mod le_controller;
mod le_meta;
mod link_control;
mod link_policy;
mod status_params;
mod testing;
mod vendor;

pub const SET_EVENT_FILTER: u16 = 0x0c05;
pub const EVT_COMMAND_COMPLETE: u8 = 0x0e;
pub const EVT_COMMAND_STATUS: u8 = 0x0f;
pub const EVT_LE_META: u8 = 0x3e;

pub const fn hex(name: &'static str, width: u8) -> Param {
    Param::new(name, Width::Fixed(width), DisplayKind::Hex)
}

pub const fn dec(name: &'static str, width: u8) -> Param {
    Param::new(name, Width::Fixed(width), DisplayKind::Dec)
}

pub const fn handle(name: &'static str) -> Param {
    Param::new(name, Width::Fixed(2), DisplayKind::ConnectionHandle)
}

pub const fn bytes(name: &'static str, width: u8) -> Param {
    Param::new(name, Width::Fixed(width), DisplayKind::HexBytes)
}

pub const fn chars(name: &'static str, width: u8) -> Param {
    Param::new(name, Width::Fixed(width), DisplayKind::Chars)
}

pub const fn clk625us(name: &'static str, width: u8) -> Param {
    Param::new(name, Width::Fixed(width), DisplayKind::Clk625us)
}

pub const fn clk1250us(name: &'static str, width: u8) -> Param {
    Param::new(name, Width::Fixed(width), DisplayKind::Clk1250us)
}

pub const fn clk10ms(name: &'static str, width: u8) -> Param {
    Param::new(name, Width::Fixed(width), DisplayKind::Clk10ms)
}

pub const fn clk1280ms(name: &'static str, width: u8) -> Param {
    Param::new(name, Width::Fixed(width), DisplayKind::Clk1280ms)
}

pub const fn status(name: &'static str) -> Param {
    Param::new(name, Width::Fixed(1), DisplayKind::StatusCode)
}

pub const fn bd_addr(name: &'static str) -> Param {
    Param::new(name, Width::Fixed(6), DisplayKind::BdAddr)
}

pub const fn opcode(name: &'static str) -> Param {
    Param::new(name, Width::Fixed(2), DisplayKind::Opcode)
}

pub const fn special(name: &'static str, width: u8, id: SpecialId) -> Param {
    Param::new(name, Width::Fixed(width), DisplayKind::Special(id))
}

pub const fn bytes_ref(name: &'static str, offset: i8) -> Param {
    Param::new(name, Width::ReferencesField(offset), DisplayKind::HexBytes)
}

pub const fn hex_ref(name: &'static str, offset: i8) -> Param {
    Param::new(name, Width::ReferencesField(offset), DisplayKind::Hex)
}

pub const fn bytes_rest(name: &'static str) -> Param {
    Param::new(name, Width::RemainderOfPacket, DisplayKind::HexBytes)
}

/// One fixed-capacity table; slots above `capacity` never resolve.
#[derive(Clone, Copy, Debug)]
pub struct UnitTable {
    pub capacity: u16,
    pub units: &'static [Unit],
}

impl UnitTable {
    pub fn get(&self, index: u16) -> Option<&'static Unit> {
        if index > self.capacity {
            return None;
        }
        let units = self.units;
        units
            .binary_search_by_key(&index, |u| u.index())
            .ok()
            .map(|i| &units[i])
    }
}

pub fn group_table(group: CommandGroup) -> UnitTable {
    let (capacity, units) = match group {
        CommandGroup::LinkControl => (link_control::CAPACITY, link_control::UNITS),
        CommandGroup::LinkPolicy => (link_policy::CAPACITY, link_policy::UNITS),
        CommandGroup::ControllerBaseband => (baseband::CAPACITY, baseband::UNITS),
        CommandGroup::Informational => (informational::CAPACITY, informational::UNITS),
        CommandGroup::StatusParameters => (status_params::CAPACITY, status_params::UNITS),
        CommandGroup::Testing => (testing::CAPACITY, testing::UNITS),
        CommandGroup::LeController => (le_controller::CAPACITY, le_controller::UNITS),
        CommandGroup::VendorSpecific => (vendor::CAPACITY, vendor::UNITS),
    };
    UnitTable { capacity, units }
}

pub fn command_groups() -> impl Iterator<Item = (CommandGroup, UnitTable)> {
    [
        CommandGroup::LinkControl,
        CommandGroup::LinkPolicy,
        CommandGroup::ControllerBaseband,
        CommandGroup::Informational,
        CommandGroup::StatusParameters,
        CommandGroup::Testing,
        CommandGroup::LeController,
        CommandGroup::VendorSpecific,
    ]
    .into_iter()
    .map(|group| (group, group_table(group)))
}

pub fn events() -> UnitTable {
    UnitTable {
        capacity: events::CAPACITY,
        units: events::UNITS,
    }
}

pub fn le_meta_events() -> UnitTable {
    UnitTable {
        capacity: le_meta::CAPACITY,
        units: le_meta::UNITS,
    }
}

pub fn resolve_command(opcode: u16) -> Option<&'static Unit> {
    let opcode = Opcode::from_u16(opcode);
    match opcode.group()? {
        // Every vendor command shares one placeholder entry.
        CommandGroup::VendorSpecific => vendor::UNITS.first(),
        group => group_table(group).get(opcode.ocf()),
    }
}

pub fn resolve_event(event_code: u8) -> Option<&'static Unit> {
    events().get(event_code.into())
}

pub fn resolve_le_subevent(subevent_code: u8) -> Option<&'static Unit> {
    le_meta_events().get(subevent_code.into())
}

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
pub enum Violation {
    IntegerTooWide(u8),
    DurationTooWide(u8),
    WrongFixedWidth { kind: DisplayKind, width: u8 },
    RepeatCountNotDecimal,
    RepeatUnitOverrun,
    DanglingReference(i8),
    VariableWidthNumeric,
    SlotOutOfCapacity,
    WrongGroup,
    Unsorted,
}

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
pub struct SchemaViolation {
    pub unit: &'static str,
    pub opcode: u16,
    pub field: Option<&'static str>,
    pub violation: Violation,
}

/// Checks the static invariants of every table.
pub fn validate() -> Vec<SchemaViolation> {
    let mut found = Vec::new();
    for (group, table) in command_groups() {
        check_table(&table, Some(group), &mut found);
    }
    check_table(&events(), None, &mut found);
    check_table(&le_meta_events(), None, &mut found);
    found
}

fn check_table(table: &UnitTable, group: Option<CommandGroup>, found: &mut Vec<SchemaViolation>) {
    let mut previous: Option<u16> = None;
    for unit in table.units {
        let mut report = |field: Option<&'static str>, violation: Violation| {
            found.push(SchemaViolation {
                unit: unit.name,
                opcode: unit.opcode,
                field,
                violation,
            })
        };
        if previous.is_some_and(|p| p >= unit.index()) {
            report(None, Violation::Unsorted);
        }
        previous = Some(unit.index());
        if unit.index() > table.capacity {
            report(None, Violation::SlotOutOfCapacity);
        }
        if let Some(group) = group {
            if Opcode::from_u16(unit.opcode).group() != Some(group) {
                report(None, Violation::WrongGroup);
            }
        }
        check_params(unit.params, &mut report);
        check_params(unit.returns, &mut report);
    }
}

fn check_params(params: &[Param], report: &mut impl FnMut(Option<&'static str>, Violation)) {
    for (i, param) in params.iter().enumerate() {
        let field = Some(param.name);
        match param.width {
            Width::Fixed(width) => {
                if param.kind.is_integer() && !(1..=4).contains(&width) {
                    report(field, Violation::IntegerTooWide(width));
                } else if param.kind.is_duration() && !(1..=2).contains(&width) {
                    report(field, Violation::DurationTooWide(width));
                } else if let Some(allowed) = param.kind.allowed_widths() {
                    if !allowed.contains(&usize::from(width)) {
                        report(field, Violation::WrongFixedWidth { kind: param.kind, width });
                    }
                }
            }
            Width::ReferencesField(offset) => {
                if offset >= 0 || (i as isize) + (offset as isize) < 0 {
                    report(field, Violation::DanglingReference(offset));
                }
            }
            Width::RemainderOfPacket => {}
        }
        // Kinds with fixed widths cannot take their size from the packet.
        if !matches!(param.width, Width::Fixed(_)) && param.kind.allowed_widths().is_some() {
            report(field, Violation::VariableWidthNumeric);
        }
        if param.is_repeat_count() {
            if param.kind != DisplayKind::Dec {
                report(field, Violation::RepeatCountNotDecimal);
            }
            if i + usize::from(param.repeats) >= params.len() {
                report(field, Violation::RepeatUnitOverrun);
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    static SIZED_HEX: [Param; 2] = [dec("Length", 1), hex_ref("Fragment", -1)];
    static SIZED_BYTES: [Param; 2] = [dec("Length", 1), bytes_ref("Fragment", -1)];
    static TRAILING_STATUS: [Param; 1] = [Param::new("Status", Width::RemainderOfPacket, DisplayKind::StatusCode)];

    fn violations(params: &[Param]) -> Vec<(Option<&'static str>, Violation)> {
        let mut found = Vec::new();
        check_params(params, &mut |field, violation| found.push((field, violation)));
        found
    }

    #[test]
    fn sized_integers_are_rejected() {
        assert_eq!(
            violations(&SIZED_HEX),
            [(Some("Fragment"), Violation::VariableWidthNumeric)]
        );
        assert_eq!(
            violations(&TRAILING_STATUS),
            [(Some("Status"), Violation::VariableWidthNumeric)]
        );
        assert!(violations(&SIZED_BYTES).is_empty());
    }

    #[test]
    fn amp_assoc_fragment_is_sized_bytes() {
        let unit = resolve_command(0x140b).unwrap();
        let fragment = unit.params.last().unwrap();
        assert_eq!(fragment.name, "AMP_ASSOC_fragment");
        assert_eq!(fragment.kind, DisplayKind::HexBytes);
        assert_eq!(fragment.width, Width::ReferencesField(-1));
    }
}
