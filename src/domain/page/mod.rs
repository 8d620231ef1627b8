//! Page Module - Form, control, and job posting model.
//!
//! # Components
//!
//! - `FormField` / `ControlKind` - Fillable fields as the driver reports them
//! - `PageSnapshot` / `PageControl` - One scan of a page and its click candidates
//! - `plan_field_fill` - Decides where each field's value comes from
//! - `select_fill_value` and friends - Option matching for choice controls
//! - `JobContext` / `Platform` - Job posting extraction and platform detection

mod field;
mod fill;
mod job;
mod snapshot;

pub use field::{
    checkbox_fill_state, radio_fill_value, select_fill_value, ControlKind, FieldOption, FormField,
};
pub use fill::{
    derived_full_name, plan_field_fill, should_skip_prefilled, FillSource, FilledField,
    FormFillReport, SkippedField,
};
pub use job::{
    company_name_from, job_description_from, job_title_from, JobContext, JobSignals, Platform,
};
pub use snapshot::{ClickMethod, FormSnapshot, PageControl, PageSnapshot};
