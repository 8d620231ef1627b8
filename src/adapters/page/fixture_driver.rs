//! Fixture Page Driver - scripted in-memory PageDriver for testing.
//!
//! Serves a scripted sequence of page snapshots: every successful click
//! advances to the next queued page, which is how tests model multi-step
//! application flows without a browser. Fill operations mutate the
//! current snapshot in place, so a re-scan observes the written values
//! the way a real page would.
//!
//! # Example
//!
//! ```ignore
//! let driver = FixturePageDriver::new(step_one_page)
//!     .with_next_page(step_two_page)
//!     .with_next_page(confirmation_page);
//!
//! // A click on any control advances: step one -> step two -> confirmation.
//! ```

use async_trait::async_trait;
use std::collections::{HashSet, VecDeque};
use std::sync::{Arc, Mutex};

use crate::domain::foundation::{ControlId, FieldId};
use crate::domain::page::{ClickMethod, JobSignals, PageSnapshot};
use crate::ports::{PageDriver, PageError};

/// A recorded fill operation.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum FillOp {
    Text { field: FieldId, value: String },
    Select { field: FieldId, value: String },
    Radio { field: FieldId, value: String },
    Checkbox { field: FieldId, checked: bool },
}

/// A recorded click attempt that succeeded.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ClickOp {
    pub control: ControlId,
    pub method: ClickMethod,
}

/// Mutable page state shared across driver handles.
#[derive(Debug)]
struct PageState {
    current: PageSnapshot,
    upcoming: VecDeque<PageSnapshot>,
}

/// Scripted page driver for testing.
///
/// Clones share state, so a test can keep a handle for assertions while
/// the engine drives another.
#[derive(Debug, Clone)]
pub struct FixturePageDriver {
    state: Arc<Mutex<PageState>>,
    signals: JobSignals,
    /// Click methods that always fail, for exercising the fallback walk.
    failing_methods: HashSet<ClickMethod>,
    fills: Arc<Mutex<Vec<FillOp>>>,
    clicks: Arc<Mutex<Vec<ClickOp>>>,
}

impl FixturePageDriver {
    /// Creates a driver serving the given page.
    pub fn new(page: PageSnapshot) -> Self {
        let signals = JobSignals {
            url: page.url.clone(),
            host: page.host.clone(),
            ..JobSignals::default()
        };
        Self {
            state: Arc::new(Mutex::new(PageState {
                current: page,
                upcoming: VecDeque::new(),
            })),
            signals,
            failing_methods: HashSet::new(),
            fills: Arc::new(Mutex::new(Vec::new())),
            clicks: Arc::new(Mutex::new(Vec::new())),
        }
    }

    /// Queues the page served after the next successful click.
    pub fn with_next_page(self, page: PageSnapshot) -> Self {
        self.state.lock().unwrap().upcoming.push_back(page);
        self
    }

    /// Sets the job signals reported by the page.
    pub fn with_signals(mut self, signals: JobSignals) -> Self {
        self.signals = signals;
        self
    }

    /// Makes one click method always fail.
    pub fn with_failing_method(mut self, method: ClickMethod) -> Self {
        self.failing_methods.insert(method);
        self
    }

    /// Makes every click method fail, for step-failure tests.
    pub fn with_all_clicks_failing(mut self) -> Self {
        for method in ClickMethod::all() {
            self.failing_methods.insert(*method);
        }
        self
    }

    /// Returns all recorded fill operations.
    pub fn fills(&self) -> Vec<FillOp> {
        self.fills.lock().unwrap().clone()
    }

    /// Returns all recorded successful clicks.
    pub fn clicks(&self) -> Vec<ClickOp> {
        self.clicks.lock().unwrap().clone()
    }

    /// Returns the number of successful clicks.
    pub fn click_count(&self) -> usize {
        self.clicks.lock().unwrap().len()
    }

    /// Returns the page currently served.
    pub fn current_page(&self) -> PageSnapshot {
        self.state.lock().unwrap().current.clone()
    }

    /// Applies a mutation to the named field in the current page.
    fn update_field(
        &self,
        field: FieldId,
        apply: impl FnOnce(&mut crate::domain::page::FormField),
    ) -> Result<(), PageError> {
        let mut state = self.state.lock().unwrap();
        for form in &mut state.current.forms {
            if let Some(target) = form.fields.iter_mut().find(|f| f.id == field) {
                apply(target);
                return Ok(());
            }
        }
        Err(PageError::FieldNotFound(field))
    }
}

#[async_trait]
impl PageDriver for FixturePageDriver {
    async fn snapshot(&self) -> Result<PageSnapshot, PageError> {
        Ok(self.state.lock().unwrap().current.clone())
    }

    async fn job_signals(&self) -> Result<JobSignals, PageError> {
        Ok(self.signals.clone())
    }

    async fn fill_text(&self, field: FieldId, value: &str) -> Result<(), PageError> {
        self.update_field(field, |f| f.value = value.to_string())?;
        self.fills.lock().unwrap().push(FillOp::Text {
            field,
            value: value.to_string(),
        });
        Ok(())
    }

    async fn select_option(&self, field: FieldId, value: &str) -> Result<(), PageError> {
        // Direct assignment, matching the select fallback that writes the
        // value even when no option matches.
        self.update_field(field, |f| f.value = value.to_string())?;
        self.fills.lock().unwrap().push(FillOp::Select {
            field,
            value: value.to_string(),
        });
        Ok(())
    }

    async fn choose_radio(&self, field: FieldId, value: &str) -> Result<(), PageError> {
        self.update_field(field, |f| f.value = value.to_string())?;
        self.fills.lock().unwrap().push(FillOp::Radio {
            field,
            value: value.to_string(),
        });
        Ok(())
    }

    async fn set_checkbox(&self, field: FieldId, checked: bool) -> Result<(), PageError> {
        self.update_field(field, |f| {
            f.value = if checked { "true".to_string() } else { String::new() }
        })?;
        self.fills
            .lock()
            .unwrap()
            .push(FillOp::Checkbox { field, checked });
        Ok(())
    }

    async fn click(&self, control: ControlId, method: ClickMethod) -> Result<(), PageError> {
        let mut state = self.state.lock().unwrap();

        if !state.current.controls.iter().any(|c| c.id == control) {
            return Err(PageError::ControlNotFound(control));
        }

        if self.failing_methods.contains(&method) {
            return Err(PageError::click_rejected(method, "scripted rejection"));
        }

        self.clicks.lock().unwrap().push(ClickOp { control, method });

        if let Some(next) = state.upcoming.pop_front() {
            state.current = next;
        }

        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::domain::page::{ControlKind, FormField, FormSnapshot, PageControl};

    fn text_field(label: &str) -> FormField {
        FormField {
            id: FieldId::new(),
            kind: ControlKind::Text,
            name: label.replace(' ', "_"),
            label: label.to_string(),
            placeholder: String::new(),
            required: false,
            value: String::new(),
            options: Vec::new(),
        }
    }

    fn one_field_page(field: FormField, control_text: &str) -> (PageSnapshot, ControlId) {
        let control = PageControl {
            id: ControlId::new(),
            text: control_text.to_string(),
            clickable: true,
            is_submit_input: false,
        };
        let control_id = control.id;
        let page = PageSnapshot {
            url: "https://jobs.example.test/apply".to_string(),
            host: "jobs.example.test".to_string(),
            body_text: String::new(),
            forms: vec![FormSnapshot {
                id: "form-0".to_string(),
                fields: vec![field],
            }],
            controls: vec![control],
        };
        (page, control_id)
    }

    #[tokio::test]
    async fn snapshot_returns_the_scripted_page() {
        let (page, _) = one_field_page(text_field("first name"), "Next");
        let driver = FixturePageDriver::new(page.clone());

        let seen = driver.snapshot().await.unwrap();
        assert_eq!(seen, page);
    }

    #[tokio::test]
    async fn fill_text_updates_the_field_in_place() {
        let field = text_field("first name");
        let field_id = field.id;
        let (page, _) = one_field_page(field, "Next");
        let driver = FixturePageDriver::new(page);

        driver.fill_text(field_id, "Jane").await.unwrap();

        let seen = driver.snapshot().await.unwrap();
        assert_eq!(seen.forms[0].fields[0].value, "Jane");
        assert_eq!(
            driver.fills(),
            vec![FillOp::Text {
                field: field_id,
                value: "Jane".to_string()
            }]
        );
    }

    #[tokio::test]
    async fn filling_an_unknown_field_errors() {
        let (page, _) = one_field_page(text_field("first name"), "Next");
        let driver = FixturePageDriver::new(page);

        let missing = FieldId::new();
        let err = driver.fill_text(missing, "x").await.unwrap_err();
        assert!(matches!(err, PageError::FieldNotFound(id) if id == missing));
    }

    #[tokio::test]
    async fn click_advances_to_the_next_page() {
        let (first, next_control) = one_field_page(text_field("first name"), "Next");
        let (second, _) = one_field_page(text_field("last name"), "Submit");

        let driver = FixturePageDriver::new(first).with_next_page(second.clone());

        driver
            .click(next_control, ClickMethod::Native)
            .await
            .unwrap();

        let seen = driver.snapshot().await.unwrap();
        assert_eq!(seen, second);
        assert_eq!(driver.click_count(), 1);
    }

    #[tokio::test]
    async fn failing_method_rejects_while_others_work() {
        let (page, control) = one_field_page(text_field("first name"), "Next");
        let driver = FixturePageDriver::new(page).with_failing_method(ClickMethod::Native);

        let err = driver.click(control, ClickMethod::Native).await.unwrap_err();
        assert!(matches!(
            err,
            PageError::ClickRejected {
                method: ClickMethod::Native,
                ..
            }
        ));

        driver
            .click(control, ClickMethod::SyntheticMouse)
            .await
            .unwrap();
        assert_eq!(driver.click_count(), 1);
    }

    #[tokio::test]
    async fn all_clicks_failing_rejects_every_method() {
        let (page, control) = one_field_page(text_field("first name"), "Next");
        let driver = FixturePageDriver::new(page).with_all_clicks_failing();

        for method in ClickMethod::all() {
            assert!(driver.click(control, *method).await.is_err());
        }
        assert_eq!(driver.click_count(), 0);
    }

    #[tokio::test]
    async fn clicking_an_unknown_control_errors() {
        let (page, _) = one_field_page(text_field("first name"), "Next");
        let driver = FixturePageDriver::new(page);

        let missing = ControlId::new();
        let err = driver
            .click(missing, ClickMethod::Native)
            .await
            .unwrap_err();
        assert!(matches!(err, PageError::ControlNotFound(id) if id == missing));
    }

    #[tokio::test]
    async fn checkbox_value_reflects_checked_state() {
        let mut field = text_field("terms");
        field.kind = ControlKind::Checkbox;
        let field_id = field.id;
        let (page, _) = one_field_page(field, "Next");
        let driver = FixturePageDriver::new(page);

        driver.set_checkbox(field_id, true).await.unwrap();
        assert_eq!(driver.current_page().forms[0].fields[0].value, "true");

        driver.set_checkbox(field_id, false).await.unwrap();
        assert_eq!(driver.current_page().forms[0].fields[0].value, "");
    }

    #[tokio::test]
    async fn signals_default_to_the_page_location() {
        let (page, _) = one_field_page(text_field("first name"), "Next");
        let driver = FixturePageDriver::new(page);

        let signals = driver.job_signals().await.unwrap();
        assert_eq!(signals.url, "https://jobs.example.test/apply");
        assert_eq!(signals.host, "jobs.example.test");
        assert!(signals.title_candidates.is_empty());
    }
}
