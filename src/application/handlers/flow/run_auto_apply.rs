//! RunAutoApplyHandler - Command handler for the multi-step apply flow.
//!
//! Drives the page through fill, navigate, and submit until the
//! application is done or the step budget runs out. Driver errors fold
//! into a failed outcome rather than propagating; a run always ends in
//! a reportable [`FlowOutcome`].

use std::sync::Arc;
use std::time::Duration;

use crate::application::handlers::fill::FillPageHandler;
use crate::application::session::ApplySession;
use crate::domain::flow::{
    find_any_button, find_next_button, find_submit_button, submission_succeeded, ClickHistory,
    FlowOutcome,
};
use crate::domain::page::{ClickMethod, PageControl};
use crate::ports::PageDriver;

/// Tuning for the step loop.
#[derive(Debug, Clone)]
pub struct FlowTuning {
    /// Upper bound on fill-and-navigate iterations.
    pub max_steps: u32,
    /// Pause after filling, before looking for navigation.
    pub settle_delay: Duration,
    /// Pause after a click, while the page transitions.
    pub transition_delay: Duration,
}

impl Default for FlowTuning {
    fn default() -> Self {
        Self {
            max_steps: 10,
            settle_delay: Duration::from_millis(1000),
            transition_delay: Duration::from_millis(2000),
        }
    }
}

/// Handler for running a full auto-apply flow.
pub struct RunAutoApplyHandler {
    driver: Arc<dyn PageDriver>,
    filler: Arc<FillPageHandler>,
    tuning: FlowTuning,
}

impl RunAutoApplyHandler {
    pub fn new(driver: Arc<dyn PageDriver>, filler: Arc<FillPageHandler>) -> Self {
        Self {
            driver,
            filler,
            tuning: FlowTuning::default(),
        }
    }

    pub fn with_tuning(mut self, tuning: FlowTuning) -> Self {
        self.tuning = tuning;
        self
    }

    pub async fn handle(&self, session: &ApplySession) -> FlowOutcome {
        tracing::info!(
            run_id = %session.run_id,
            company = %session.job.company,
            max_steps = self.tuning.max_steps,
            "Auto-apply flow started"
        );

        let outcome = self.drive(session).await;

        tracing::info!(
            run_id = %session.run_id,
            success = outcome.success,
            message = %outcome.message,
            "Auto-apply flow finished"
        );

        outcome
    }

    async fn drive(&self, session: &ApplySession) -> FlowOutcome {
        let mut history = ClickHistory::new();

        for step in 1..=self.tuning.max_steps {
            // 1. Scan the page; a form-free page means the flow is done
            let page = match self.driver.snapshot().await {
                Ok(page) => page,
                Err(err) => return FlowOutcome::failed(err.to_string()),
            };
            if page.has_no_forms() {
                return FlowOutcome::succeeded("Application flow completed");
            }

            // 2. Fill everything fillable on this step
            match self.filler.handle(session).await {
                Ok(fill) => {
                    tracing::debug!(
                        run_id = %session.run_id,
                        step,
                        filled = fill.filled_count(),
                        skipped = fill.skipped_count(),
                        "Step filled"
                    );
                }
                Err(err) => return FlowOutcome::failed(err.to_string()),
            }

            // 3. Let the page react to the writes
            if !self.tuning.settle_delay.is_zero() {
                tokio::time::sleep(self.tuning.settle_delay).await;
            }

            // 4. A submit button ends the flow, one way or the other
            if let Some(submit) = find_submit_button(&page.controls) {
                if !self.click_control(submit).await {
                    return FlowOutcome::failed("Error submitting application");
                }
                if !self.tuning.transition_delay.is_zero() {
                    tokio::time::sleep(self.tuning.transition_delay).await;
                }
                return match self.driver.snapshot().await {
                    Ok(after) if submission_succeeded(&after) => {
                        FlowOutcome::succeeded("Application submitted successfully!")
                    }
                    _ => FlowOutcome::failed("Error submitting application"),
                };
            }

            // 5. Otherwise advance: preferred next button, then any button
            if let Some(next) = find_next_button(&page.controls, &history) {
                if !self.click_control(next).await {
                    return FlowOutcome::failed("Failed to click next button").at_step(step);
                }
                history.record(next.text.clone());
            } else if let Some(button) = find_any_button(&page.controls) {
                if !self.click_control(button).await {
                    return FlowOutcome::failed("Failed to click button").at_step(step);
                }
            } else {
                return FlowOutcome::succeeded("Application appears to be complete").at_step(step);
            }

            // 6. Give the next step time to render
            if !self.tuning.transition_delay.is_zero() {
                tokio::time::sleep(self.tuning.transition_delay).await;
            }
        }

        FlowOutcome::failed("Max steps reached without completing application")
            .at_step(self.tuning.max_steps)
    }

    /// Tries every click method in order until one lands.
    async fn click_control(&self, control: &PageControl) -> bool {
        for method in ClickMethod::all() {
            match self.driver.click(control.id, *method).await {
                Ok(()) => return true,
                Err(err) => {
                    tracing::debug!(
                        text = %control.text,
                        method = ?method,
                        error = %err,
                        "Click attempt failed"
                    );
                }
            }
        }
        false
    }
}
