//! Plain-text rendering of a lookup state
//!
//! Produces the same wording a result panel shows, with placeholders for
//! missing attributes.

use std::fmt;

use crate::state::LookupState;
use crate::zone::ZoneResult;

pub const IDLE_PROMPT: &str = "Enter an address to get started.";
pub const LOADING_NOTICE: &str = "Fetching lava zone information…";
pub const NO_ZONE_FOUND: &str =
    "No lava zone information was returned for that location. Try another address.";

const MISSING_ADDRESS: &str = "Not provided.";
const MISSING_ZONE: &str = "Unknown";
const MISSING_DESCRIPTION: &str = "No description available.";
const MISSING_VOLCANO: &str = "Not specified.";

impl fmt::Display for LookupState {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            LookupState::Idle => f.write_str(IDLE_PROMPT),
            LookupState::Loading => f.write_str(LOADING_NOTICE),
            LookupState::Error { message } => f.write_str(message),
            LookupState::Success { result } => write_result(f, result),
        }
    }
}

fn write_result(f: &mut fmt::Formatter<'_>, result: &ZoneResult) -> fmt::Result {
    writeln!(
        f,
        "Matched address: {}",
        result.matched_address.as_deref().unwrap_or(MISSING_ADDRESS)
    )?;

    if !result.has_zone() {
        return f.write_str(NO_ZONE_FOUND);
    }

    writeln!(f, "Zone: {}", result.zone_id.as_deref().unwrap_or(MISSING_ZONE))?;
    writeln!(
        f,
        "Description: {}",
        result.description.as_deref().unwrap_or(MISSING_DESCRIPTION)
    )?;
    write!(f, "Volcano: {}", result.volcano.as_deref().unwrap_or(MISSING_VOLCANO))
}
