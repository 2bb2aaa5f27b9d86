pub mod client;
pub mod config;
pub mod error;
pub mod monitor;
pub mod notify;
pub mod table;
pub mod util;
pub mod watch;

use std::fmt;

use serde::Deserialize;

/// Response body of the laundry room status endpoint.
#[derive(Debug, Clone, Deserialize)]
pub struct MachineStatesBody {
    #[serde(rename = "MachineStates")]
    pub machine_states: Vec<RawMachineState>,
}

/// One machine entry exactly as the provider reports it.
///
/// The field semantics are a fixed provider contract: `machineSymbol`
/// distinguishes dryers from washers and `machineColor` is set while a
/// machine is idle. Any provider schema change lands here, not in the
/// rest of the system.
#[derive(Debug, Clone, Deserialize)]
pub struct RawMachineState {
    #[serde(rename = "machineSymbol")]
    pub machine_symbol: bool,
    #[serde(rename = "machineColor")]
    pub machine_color: bool,
    pub text1: String,
    #[serde(rename = "unitName")]
    pub unit_name: String,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum MachineKind {
    Dryer,
    Washer,
}

impl fmt::Display for MachineKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            MachineKind::Dryer => write!(f, "Dryer"),
            MachineKind::Washer => write!(f, "Washer"),
        }
    }
}

/// Normalized view of a machine, rebuilt from scratch on every poll.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct MachineRecord {
    /// Unit name with the leading `"Machine "` prefix stripped.
    pub id: String,
    pub kind: MachineKind,
    pub in_use: bool,
    /// Free-form status string from the provider.
    pub status_text: String,
    /// Raw display name, e.g. `"Machine 3"`.
    pub unit_name: String,
}

const UNIT_NAME_PREFIX: &str = "Machine ";

impl From<RawMachineState> for MachineRecord {
    fn from(raw: RawMachineState) -> Self {
        let id = raw
            .unit_name
            .strip_prefix(UNIT_NAME_PREFIX)
            .unwrap_or(&raw.unit_name)
            .to_string();

        MachineRecord {
            id,
            kind: if raw.machine_symbol {
                MachineKind::Dryer
            } else {
                MachineKind::Washer
            },
            in_use: !raw.machine_color,
            status_text: raw.text1,
            unit_name: raw.unit_name,
        }
    }
}

#[cfg(test)]
mod tests {
    use pretty_assertions::assert_eq;

    use super::*;

    fn raw(symbol: bool, color: bool, unit_name: &str) -> RawMachineState {
        RawMachineState {
            machine_symbol: symbol,
            machine_color: color,
            text1: "Ready".to_string(),
            unit_name: unit_name.to_string(),
        }
    }

    #[test]
    fn symbol_flag_selects_kind() {
        assert_eq!(
            MachineRecord::from(raw(true, false, "Machine 1")).kind,
            MachineKind::Dryer
        );
        assert_eq!(
            MachineRecord::from(raw(false, false, "Machine 1")).kind,
            MachineKind::Washer
        );
    }

    #[test]
    fn color_flag_negates_to_in_use() {
        assert!(MachineRecord::from(raw(false, false, "Machine 1")).in_use);
        assert!(!MachineRecord::from(raw(false, true, "Machine 1")).in_use);
    }

    #[test]
    fn id_strips_unit_name_prefix() {
        let record = MachineRecord::from(raw(false, false, "Machine 12"));
        assert_eq!(record.id, "12");
        assert_eq!(record.unit_name, "Machine 12");
    }

    #[test]
    fn id_without_prefix_is_kept_verbatim() {
        let record = MachineRecord::from(raw(false, false, "Dryer A"));
        assert_eq!(record.id, "Dryer A");
    }

    #[test]
    fn prefix_stripping_is_idempotent() {
        let once = MachineRecord::from(raw(false, false, "Machine 7")).id;
        let twice = once
            .strip_prefix(UNIT_NAME_PREFIX)
            .unwrap_or(&once)
            .to_string();
        assert_eq!(once, twice);
    }
}
