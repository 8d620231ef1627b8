//! Flow Module - Multi-step navigation decisions.
//!
//! # Components
//!
//! - `find_next_button` / `find_submit_button` / `find_any_button` - Button selection
//! - `ClickHistory` - Keeps one flow run from clicking the same button twice
//! - `submission_succeeded` - Detects a completed submission from page state
//! - `FlowOutcome` - Terminal result of a flow run
//!
//! The step loop itself lives in the application layer; these services
//! make its individual decisions.

mod buttons;
mod completion;
mod outcome;

pub use buttons::{
    find_any_button, find_next_button, find_submit_button, ButtonPattern, ClickHistory,
    ClickRecord, BUTTON_PATTERNS,
};
pub use completion::submission_succeeded;
pub use outcome::FlowOutcome;
