//! Integration tests for the multi-step auto-apply flow.
//!
//! These tests verify the end-to-end flow:
//! 1. Session starts from the profile store and the page's job signals
//! 2. RunAutoApplyHandler fills each page, then navigates or submits
//! 3. The confirmation page is recognized and the run reports success
//! 4. Provider outages and unresponsive pages degrade to clean outcomes
//!
//! Uses the scripted fixture driver: every successful click advances to
//! the next queued page, which is how the tests model page transitions.

use std::sync::Arc;
use std::time::Duration;

use formpilot::adapters::ai::{
    FailoverAnswerProvider, MockAnswerProvider, MockError, TemplateAnswerProvider,
};
use formpilot::adapters::memory::InMemoryAnswerStore;
use formpilot::adapters::page::FixturePageDriver;
use formpilot::adapters::profile::InMemoryProfileStore;
use formpilot::application::handlers::{
    AnswerQuestionHandler, FillPageHandler, FillTuning, FlowTuning, RunAutoApplyHandler,
};
use formpilot::application::session::ApplySession;
use formpilot::domain::foundation::{ControlId, FieldId};
use formpilot::domain::page::{
    ControlKind, FormField, FormSnapshot, JobSignals, PageControl, PageSnapshot,
};
use formpilot::domain::profile::{ApplicantProfile, ResumeFacts};
use formpilot::ports::AnswerProvider;

// =============================================================================
// Test Infrastructure
// =============================================================================

/// Routes handler logs into the test output when RUST_LOG is set.
fn init_tracing() {
    let _ = tracing_subscriber::fmt()
        .with_env_filter(tracing_subscriber::EnvFilter::from_default_env())
        .with_test_writer()
        .try_init();
}

fn applicant() -> ApplicantProfile {
    ApplicantProfile {
        first_name: "Ada".to_string(),
        last_name: "Lovelace".to_string(),
        email: "ada@example.com".to_string(),
        phone: "555-0100".to_string(),
        ..Default::default()
    }
}

fn resume() -> ResumeFacts {
    ResumeFacts {
        skills: vec!["Rust".to_string()],
        total_experience: "6 years".to_string(),
        companies: vec!["Globex".to_string()],
        ..Default::default()
    }
}

fn field(kind: ControlKind, label: &str, name: &str) -> FormField {
    FormField {
        id: FieldId::new(),
        kind,
        name: name.to_string(),
        label: label.to_string(),
        placeholder: String::new(),
        required: false,
        value: String::new(),
        options: Vec::new(),
    }
}

fn button(text: &str) -> PageControl {
    PageControl {
        id: ControlId::new(),
        text: text.to_string(),
        clickable: true,
        is_submit_input: false,
    }
}

fn page(fields: Vec<FormField>, controls: Vec<PageControl>) -> PageSnapshot {
    PageSnapshot {
        url: "https://jobs.lever.co/globex/apply".to_string(),
        host: "jobs.lever.co".to_string(),
        body_text: "Apply for this role".to_string(),
        forms: vec![FormSnapshot {
            id: "application".to_string(),
            fields,
        }],
        controls,
    }
}

fn confirmation_page() -> PageSnapshot {
    PageSnapshot {
        url: "https://jobs.lever.co/globex/apply".to_string(),
        host: "jobs.lever.co".to_string(),
        body_text: "Thank you! Your application has been submitted successfully.".to_string(),
        forms: Vec::new(),
        controls: Vec::new(),
    }
}

fn signals() -> JobSignals {
    JobSignals {
        url: "https://jobs.lever.co/globex/apply".to_string(),
        host: "jobs.lever.co".to_string(),
        title_candidates: vec!["Senior Rust Engineer".to_string()],
        company_candidates: vec!["Globex".to_string()],
        description_candidates: Vec::new(),
    }
}

fn instant_flow(max_steps: u32) -> FlowTuning {
    FlowTuning {
        max_steps,
        settle_delay: Duration::ZERO,
        transition_delay: Duration::ZERO,
    }
}

fn build_handler(
    driver: &FixturePageDriver,
    provider: Arc<dyn AnswerProvider>,
    max_steps: u32,
) -> RunAutoApplyHandler {
    let answerer = AnswerQuestionHandler::new(provider, Arc::new(InMemoryAnswerStore::new()));
    let filler =
        FillPageHandler::new(Arc::new(driver.clone()), Arc::new(answerer)).with_tuning(
            FillTuning {
                overwrite_existing: false,
                answer_pacing: Duration::ZERO,
            },
        );
    RunAutoApplyHandler::new(Arc::new(driver.clone()), Arc::new(filler))
        .with_tuning(instant_flow(max_steps))
}

async fn start_session(driver: &FixturePageDriver) -> ApplySession {
    let profile_store = InMemoryProfileStore::new()
        .with_profile(applicant())
        .with_resume(resume());
    ApplySession::start(&profile_store, driver).await.unwrap()
}

// =============================================================================
// Tests
// =============================================================================

#[tokio::test]
async fn multi_step_application_ends_in_submission() {
    init_tracing();
    let contact_step = page(
        vec![
            field(ControlKind::Text, "First Name", "first_name"),
            field(ControlKind::Text, "Last Name", "last_name"),
            field(ControlKind::Email, "Email", "email"),
        ],
        vec![button("Next")],
    );
    let questions_step = page(
        vec![field(
            ControlKind::TextArea,
            "Why do you want to work at Globex?",
            "motivation",
        )],
        vec![button("Submit Application")],
    );

    let driver = FixturePageDriver::new(contact_step)
        .with_next_page(questions_step)
        .with_next_page(confirmation_page())
        .with_signals(signals());
    let session = start_session(&driver).await;

    let provider = MockAnswerProvider::new()
        .with_response("I admire the engineering culture at Globex and want to build reliable systems.");
    let handler = build_handler(&driver, Arc::new(provider), 5);

    let outcome = handler.handle(&session).await;

    assert!(outcome.success, "flow failed: {}", outcome.message);
    assert_eq!(outcome.message, "Application submitted successfully!");
    assert_eq!(driver.click_count(), 2);
    // Three contact fields on step one, the motivation answer on step two
    assert_eq!(driver.fills().len(), 4);
}

#[tokio::test]
async fn provider_outage_still_carries_the_flow_to_submission() {
    init_tracing();
    let questions_step = page(
        vec![field(
            ControlKind::TextArea,
            "Why do you want to work at Globex?",
            "motivation",
        )],
        vec![button("Submit")],
    );

    let driver = FixturePageDriver::new(questions_step)
        .with_next_page(confirmation_page())
        .with_signals(signals());
    let session = start_session(&driver).await;

    // Primary is down; the template fallback answers instead
    let primary = MockAnswerProvider::new().with_error(MockError::Unavailable {
        message: "connection refused".to_string(),
    });
    let provider = FailoverAnswerProvider::new(primary).with_fallback(
        TemplateAnswerProvider::new(session.profile.clone(), session.job.clone()),
    );
    let handler = build_handler(&driver, Arc::new(provider), 5);

    let outcome = handler.handle(&session).await;

    assert!(outcome.success, "flow failed: {}", outcome.message);
    assert_eq!(outcome.message, "Application submitted successfully!");

    // The motivation field carries the canned answer, not an empty value
    let fills = driver.fills();
    assert_eq!(fills.len(), 1);
    match &fills[0] {
        formpilot::adapters::page::FillOp::Text { value, .. } => {
            assert!(value.contains("Globex"), "unexpected answer: {value}");
        }
        other => panic!("expected a text fill, got {other:?}"),
    }
}

#[tokio::test]
async fn unresponsive_page_fails_at_the_step_limit() {
    init_tracing();
    // The only button matches no navigation pattern and the page never
    // advances, so the flow re-tries until the budget runs out.
    let stuck = page(
        vec![field(ControlKind::Text, "First Name", "first_name")],
        vec![button("Chat with us")],
    );
    let driver = FixturePageDriver::new(stuck).with_signals(signals());
    let session = start_session(&driver).await;

    let handler = build_handler(&driver, Arc::new(MockAnswerProvider::new()), 3);

    let outcome = handler.handle(&session).await;

    assert!(!outcome.success);
    assert_eq!(
        outcome.message,
        "Max steps reached without completing application"
    );
    assert_eq!(outcome.steps, Some(3));
    assert_eq!(driver.click_count(), 3);
    // The field is filled once and left alone on later passes
    assert_eq!(driver.fills().len(), 1);
}

#[tokio::test]
async fn dead_buttons_fail_the_run_cleanly() {
    init_tracing();
    let stuck = page(
        vec![field(ControlKind::Text, "First Name", "first_name")],
        vec![button("Next")],
    );
    let driver = FixturePageDriver::new(stuck)
        .with_all_clicks_failing()
        .with_signals(signals());
    let session = start_session(&driver).await;

    let handler = build_handler(&driver, Arc::new(MockAnswerProvider::new()), 5);

    let outcome = handler.handle(&session).await;

    assert!(!outcome.success);
    assert_eq!(outcome.message, "Failed to click next button");
    assert_eq!(outcome.steps, Some(1));
}
