//! FillPageHandler - Command handler for one fill pass over the page.
//!
//! Scans the page through the driver and fills every detected field in
//! document order: profile facts directly, open-ended questions through
//! the answer pipeline. Per-field failures degrade to a skip entry in
//! the report; only a failed page scan aborts the pass.

use std::sync::Arc;
use std::time::Duration;

use crate::application::handlers::fill::answer_question::{
    AnswerOutcome, AnswerQuestionCommand, AnswerQuestionHandler, AnsweredQuestion,
};
use crate::application::session::ApplySession;
use crate::domain::classify::{Classification, QuestionCategory};
use crate::domain::gate::FormGateState;
use crate::domain::page::{
    checkbox_fill_state, derived_full_name, plan_field_fill, radio_fill_value, select_fill_value,
    should_skip_prefilled, ControlKind, FillSource, FilledField, FormField, FormFillReport,
    SkippedField,
};
use crate::ports::{PageDriver, PageError};

/// Tuning for a fill pass.
#[derive(Debug, Clone)]
pub struct FillTuning {
    /// Overwrite fields that already hold a value.
    pub overwrite_existing: bool,
    /// Pause between consecutive provider calls in one pass.
    pub answer_pacing: Duration,
}

impl Default for FillTuning {
    fn default() -> Self {
        Self {
            overwrite_existing: false,
            answer_pacing: Duration::from_millis(500),
        }
    }
}

/// Result of one fill pass.
#[derive(Debug, Clone, Default)]
pub struct FillPageResult {
    /// Per-form fill reports, in document order.
    pub reports: Vec<FormFillReport>,
    /// Every answer the pipeline produced, including withheld ones.
    pub answered: Vec<AnsweredQuestion>,
    /// Classification of every question the pass decided on.
    pub classifications: Vec<Classification>,
    /// Labels of required fields left without a value.
    pub required_unanswered: Vec<String>,
    /// Labels of legal questions awaiting applicant approval.
    pub legal_unapproved: Vec<String>,
    /// Labels of answers withheld below the confidence threshold.
    pub low_confidence: Vec<String>,
}

impl FillPageResult {
    /// Form state for the submission gate.
    pub fn gate_state(&self) -> FormGateState {
        FormGateState {
            required_unanswered: self.required_unanswered.clone(),
            legal_unapproved: self.legal_unapproved.clone(),
            low_confidence_answers: self.low_confidence.clone(),
        }
    }

    /// Total fields filled across all forms.
    pub fn filled_count(&self) -> usize {
        self.reports.iter().map(|r| r.filled.len()).sum()
    }

    /// Total fields skipped across all forms.
    pub fn skipped_count(&self) -> usize {
        self.reports.iter().map(|r| r.skipped.len()).sum()
    }
}

/// Error type for a fill pass.
#[derive(Debug)]
pub enum FillPageError {
    /// The page could not be scanned.
    Page(PageError),
}

impl std::fmt::Display for FillPageError {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            FillPageError::Page(err) => write!(f, "Page scan failed: {}", err),
        }
    }
}

impl std::error::Error for FillPageError {}

impl From<PageError> for FillPageError {
    fn from(err: PageError) -> Self {
        FillPageError::Page(err)
    }
}

/// Handler for filling every field on the current page.
pub struct FillPageHandler {
    driver: Arc<dyn PageDriver>,
    answerer: Arc<AnswerQuestionHandler>,
    tuning: FillTuning,
}

impl FillPageHandler {
    pub fn new(driver: Arc<dyn PageDriver>, answerer: Arc<AnswerQuestionHandler>) -> Self {
        Self {
            driver,
            answerer,
            tuning: FillTuning::default(),
        }
    }

    pub fn with_tuning(mut self, tuning: FillTuning) -> Self {
        self.tuning = tuning;
        self
    }

    pub async fn handle(&self, session: &ApplySession) -> Result<FillPageResult, FillPageError> {
        // 1. Scan the current page
        let snapshot = self.driver.snapshot().await?;

        let mut result = FillPageResult::default();
        let mut provider_calls: usize = 0;

        // 2. Fill each form's fields in document order
        for form in &snapshot.forms {
            let mut report = FormFillReport::new(&form.id);
            for field in &form.fields {
                self.fill_field(session, field, &mut report, &mut result, &mut provider_calls)
                    .await;
            }
            result.reports.push(report);
        }

        tracing::info!(
            run_id = %session.run_id,
            forms = result.reports.len(),
            filled = result.filled_count(),
            skipped = result.skipped_count(),
            "Fill pass complete"
        );

        Ok(result)
    }

    async fn fill_field(
        &self,
        session: &ApplySession,
        field: &FormField,
        report: &mut FormFillReport,
        result: &mut FillPageResult,
        provider_calls: &mut usize,
    ) {
        let display = display_name(field).to_string();

        if should_skip_prefilled(field, self.tuning.overwrite_existing) {
            record_skip(field, &display, "Already filled", report, result);
            return;
        }

        match plan_field_fill(field, &session.profile) {
            FillSource::Profile(key) => match session.profile.fill_value(key) {
                Some(value) => {
                    result
                        .classifications
                        .push(Classification::for_category(QuestionCategory::Factual));
                    self.write_and_record(session, field, &display, &value, report, result)
                        .await;
                }
                None => record_skip(field, &display, "Could not determine value", report, result),
            },
            FillSource::DerivedFullName => match derived_full_name(&session.profile) {
                Some(value) => {
                    result
                        .classifications
                        .push(Classification::for_category(QuestionCategory::Factual));
                    self.write_and_record(session, field, &display, &value, report, result)
                        .await;
                }
                None => record_skip(field, &display, "Could not determine value", report, result),
            },
            FillSource::Ai => {
                // Pace batched provider calls
                if *provider_calls > 0 && !self.tuning.answer_pacing.is_zero() {
                    tokio::time::sleep(self.tuning.answer_pacing).await;
                }
                *provider_calls += 1;
                self.answer_and_record(session, field, &display, report, result)
                    .await;
            }
            FillSource::Unknown => {
                record_skip(field, &display, "Could not determine value", report, result)
            }
        }
    }

    /// Routes one question through the answer pipeline and applies the
    /// outcome to the field.
    async fn answer_and_record(
        &self,
        session: &ApplySession,
        field: &FormField,
        display: &str,
        report: &mut FormFillReport,
        result: &mut FillPageResult,
    ) {
        let command = AnswerQuestionCommand {
            question: display.to_string(),
            field_label: field.label.clone(),
            field_kind: field.kind.answer_field_kind(),
        };

        match self.answerer.handle(session, command).await {
            AnswerOutcome::Answered(answered) => {
                result.classifications.push(answered.classification.clone());
                if answered.needs_review {
                    // Withheld from auto-fill; the applicant decides
                    result.low_confidence.push(display.to_string());
                    record_skip(field, display, "Answer held for review", report, result);
                    result.answered.push(answered);
                } else {
                    self.write_and_record(session, field, display, &answered.answer, report, result)
                        .await;
                    result.answered.push(answered);
                }
            }
            AnswerOutcome::RequiresApplicant { classification, .. } => {
                if classification.category == QuestionCategory::LegalAttestation {
                    result.legal_unapproved.push(display.to_string());
                }
                result.classifications.push(classification);
                record_skip(field, display, "Requires applicant answer", report, result);
            }
            AnswerOutcome::Unanswered { classification, .. } => {
                result.classifications.push(classification);
                record_skip(field, display, "Could not determine value", report, result);
            }
        }
    }

    async fn write_and_record(
        &self,
        session: &ApplySession,
        field: &FormField,
        // Not named `display`: tracing's value-set macros import
        // `tracing::field::display` into the expansion scope, which would
        // shadow a local of that name (tokio-rs/tracing#2332).
        display_label: &str,
        value: &str,
        report: &mut FormFillReport,
        result: &mut FillPageResult,
    ) {
        match self.write_field(field, value).await {
            Ok(Some(written)) => report.filled.push(FilledField {
                name: display_label.to_string(),
                kind: field.kind,
                value: written,
            }),
            Ok(None) => record_skip(field, display_label, "No matching option", report, result),
            Err(err) => {
                tracing::warn!(
                    run_id = %session.run_id,
                    field = %display_label,
                    error = %err,
                    "Field write failed"
                );
                record_skip(field, display_label, "Could not determine value", report, result);
            }
        }
    }

    /// Dispatches the driver write appropriate for the field's kind and
    /// returns the value actually written.
    async fn write_field(
        &self,
        field: &FormField,
        value: &str,
    ) -> Result<Option<String>, PageError> {
        match field.kind {
            ControlKind::Select => {
                let resolved = select_fill_value(&field.options, value);
                self.driver.select_option(field.id, &resolved).await?;
                Ok(Some(resolved))
            }
            ControlKind::Radio => match radio_fill_value(&field.options, value) {
                Some(option) => {
                    self.driver.choose_radio(field.id, &option).await?;
                    Ok(Some(option))
                }
                None => Ok(None),
            },
            ControlKind::Checkbox => match checkbox_fill_state(value) {
                Some(checked) => {
                    self.driver.set_checkbox(field.id, checked).await?;
                    Ok(Some(checked.to_string()))
                }
                None => Ok(None),
            },
            _ => {
                self.driver.fill_text(field.id, value).await?;
                Ok(Some(value.to_string()))
            }
        }
    }
}

fn display_name(field: &FormField) -> &str {
    if field.label.is_empty() {
        &field.name
    } else {
        &field.label
    }
}

fn record_skip(
    field: &FormField,
    display: &str,
    reason: &str,
    report: &mut FormFillReport,
    result: &mut FillPageResult,
) {
    report.skipped.push(SkippedField {
        name: display.to_string(),
        kind: field.kind,
        reason: reason.to_string(),
    });
    if field.required && field.value.is_empty() {
        result.required_unanswered.push(display.to_string());
    }
}
