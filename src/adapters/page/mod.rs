//! Page Driver Adapters.
//!
//! Implementations of the PageDriver port. The production adapter lives
//! in the browser extension host; this crate ships the scripted fixture
//! driver used by the engine's own tests.

mod fixture_driver;

pub use fixture_driver::{ClickOp, FillOp, FixturePageDriver};
