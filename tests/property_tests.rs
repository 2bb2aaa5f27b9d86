//! Property-based tests for the provider field mapping using proptest
//!
//! These tests verify that for all raw provider entries:
//! - `machineSymbol` deterministically selects the machine kind
//! - `in_use` is the logical negation of `machineColor`
//! - id extraction strips the unit-name prefix and is idempotent

use laundry_notify::{MachineKind, MachineRecord, RawMachineState};
use proptest::prelude::*;

const UNIT_NAME_PREFIX: &str = "Machine ";

fn raw(symbol: bool, color: bool, text: String, unit_name: String) -> RawMachineState {
    RawMachineState {
        machine_symbol: symbol,
        machine_color: color,
        text1: text,
        unit_name,
    }
}

proptest! {
    #[test]
    fn prop_symbol_flag_selects_kind(
        symbol in any::<bool>(),
        color in any::<bool>(),
        text in ".*",
        id in "[0-9]{1,3}",
    ) {
        let record = MachineRecord::from(raw(symbol, color, text, format!("Machine {id}")));

        let expected = if symbol { MachineKind::Dryer } else { MachineKind::Washer };
        prop_assert_eq!(record.kind, expected);
    }
}

proptest! {
    #[test]
    fn prop_in_use_is_negation_of_color(
        symbol in any::<bool>(),
        color in any::<bool>(),
        text in ".*",
        id in "[0-9]{1,3}",
    ) {
        let record = MachineRecord::from(raw(symbol, color, text, format!("Machine {id}")));

        prop_assert_eq!(record.in_use, !color);
    }
}

proptest! {
    #[test]
    fn prop_id_extraction_is_idempotent(id in "[0-9]{1,3}") {
        let record = MachineRecord::from(raw(
            false,
            false,
            String::new(),
            format!("Machine {id}"),
        ));
        prop_assert_eq!(&record.id, &id);

        // stripping a second time must not change anything
        let stripped_again = record
            .id
            .strip_prefix(UNIT_NAME_PREFIX)
            .unwrap_or(&record.id)
            .to_string();
        prop_assert_eq!(stripped_again, record.id);
    }
}

proptest! {
    #[test]
    fn prop_unprefixed_unit_names_pass_through(name in "[A-Za-z0-9 ]{1,20}") {
        prop_assume!(!name.starts_with(UNIT_NAME_PREFIX));

        let record = MachineRecord::from(raw(false, false, String::new(), name.clone()));

        prop_assert_eq!(record.id, name);
    }
}
