//! File-backed world state
//!
//! The state file is a JSON object mapping each ledger key to its value,
//! base64 encoded. A missing file is an empty world state.

use std::collections::BTreeMap;
use std::path::Path;

use base64::engine::general_purpose::STANDARD;
use base64::Engine as _;

pub type WorldState = BTreeMap<String, Vec<u8>>;

pub fn load(path: &Path) -> Result<WorldState, Box<dyn std::error::Error>> {
    if !path.exists() {
        tracing::debug!(path = %path.display(), "no state file, starting empty");
        return Ok(WorldState::new());
    }

    let text = std::fs::read_to_string(path)?;
    let encoded: BTreeMap<String, String> = serde_json::from_str(&text)
        .map_err(|e| format!("Invalid state file {}: {}", path.display(), e))?;

    let mut state = WorldState::new();
    for (key, value) in encoded {
        let bytes = STANDARD
            .decode(value.as_bytes())
            .map_err(|e| format!("Invalid value for key {} in {}: {}", key, path.display(), e))?;
        state.insert(key, bytes);
    }

    tracing::debug!(path = %path.display(), keys = state.len(), "state loaded");
    Ok(state)
}

pub fn save(path: &Path, state: &WorldState) -> Result<(), Box<dyn std::error::Error>> {
    if let Some(parent) = path.parent().filter(|p| !p.as_os_str().is_empty()) {
        std::fs::create_dir_all(parent)?;
    }

    let encoded: BTreeMap<&str, String> = state
        .iter()
        .map(|(key, value)| (key.as_str(), STANDARD.encode(value)))
        .collect();
    std::fs::write(path, serde_json::to_string_pretty(&encoded)?)?;

    tracing::debug!(path = %path.display(), keys = state.len(), "state saved");
    Ok(())
}
