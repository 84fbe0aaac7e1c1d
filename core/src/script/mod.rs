//! Designer-authored sequencing language
//!
//! This module turns short text scripts into attack choreography:
//! - **action**: the action vocabulary and its static metadata table
//! - **parser**: token parsing and field-default resolution
//!
//! Scripts are deliberately forgiving. Authoring mistakes degrade to
//! defaults or no-ops, never to errors, so a half-written script still
//! runs in-game while it is being iterated on.

mod action;
mod parser;

pub use action::{ActionKind, LoneNumeric};
pub use parser::{DEFAULT_STEP_DELAY_SECS, parse_script, parse_sequence};
