//! Helper functions for integration tests

use laundry_notify::config::{MieleConfig, PushoverConfig};
use serde_json::{Value, json};

pub fn machine_state(symbol: bool, color: bool, text: &str, unit_name: &str) -> Value {
    json!({
        "machineSymbol": symbol,
        "machineColor": color,
        "text1": text,
        "unitName": unit_name,
    })
}

pub fn machine_states_body(states: Vec<Value>) -> Value {
    json!({ "MachineStates": states })
}

pub fn test_miele_config(base_uri: &str) -> MieleConfig {
    MieleConfig {
        url: format!("{base_uri}/status"),
        auth: "Bearer test-token".to_string(),
    }
}

pub fn test_pushover_config() -> PushoverConfig {
    PushoverConfig {
        user: "user-key".to_string(),
        key: "app-token".to_string(),
    }
}
