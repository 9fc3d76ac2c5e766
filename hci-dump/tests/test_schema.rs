use hci_dump::hci::CommandGroup;
use hci_dump::registry::{
    command_groups, events, le_meta_events, resolve_command, resolve_event, resolve_le_subevent, validate,
};

#[test]
fn tables_are_well_formed() {
    let violations = validate();
    assert!(violations.is_empty(), "{:#?}", violations);
}

#[test]
fn every_command_resolves_to_itself() {
    for (group, table) in command_groups() {
        for unit in table.units {
            let found = resolve_command(unit.opcode).unwrap();
            assert_eq!(found.opcode, unit.opcode, "{:?} {}", group, unit.name);
            assert_eq!(found.name, unit.name);
        }
    }
}

#[test]
fn gaps_do_not_resolve() {
    for (group, table) in command_groups() {
        if group == CommandGroup::VendorSpecific {
            continue;
        }
        let ogf = u16::from(u8::from(group)) << 10;
        for ocf in 0..=table.capacity + 1 {
            let listed = table.units.iter().any(|u| u.index() == ocf);
            assert_eq!(resolve_command(ogf | ocf).is_some(), listed, "0x{:04x}", ogf | ocf);
        }
    }
    // Unassigned groups.
    assert!(resolve_command(0x1c01).is_none());
    assert!(resolve_command(0x0000).is_none());
}

#[test]
fn every_vendor_opcode_is_the_placeholder() {
    for ocf in [0x000, 0x001, 0x123, 0x3ff] {
        let unit = resolve_command(0xfc00 | ocf).unwrap();
        assert_eq!(unit.name, "Vendor Specific Command");
    }
}

#[test]
fn events_resolve_by_code() {
    let table = events();
    for code in 0..=u8::MAX {
        let listed = table.units.iter().find(|u| u.opcode == u16::from(code));
        assert_eq!(resolve_event(code).map(|u| u.name), listed.map(|u| u.name), "0x{:02x}", code);
    }
    assert_eq!(resolve_event(0x0e).unwrap().name, "Command Complete");
}

#[test]
fn le_subevents_are_bounded() {
    let table = le_meta_events();
    assert_eq!(table.units.len(), 11);
    for code in 0..=u8::MAX {
        let found = resolve_le_subevent(code);
        assert_eq!(found.is_some(), (0x01..=0x0b).contains(&code), "0x{:02x}", code);
    }
}
