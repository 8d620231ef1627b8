//! AnswerQuestionHandler - Command handler for answering one form question.
//!
//! Runs the classify, recall, generate, validate pipeline for a single
//! question. Provider and memory failures degrade to an unanswered or
//! reported-back outcome rather than an error; the handler itself never
//! fails. The answer memory is read-only here; writes happen through
//! feedback recording.

use std::sync::Arc;

use serde::{Deserialize, Serialize};

use crate::application::session::ApplySession;
use crate::domain::answers::{validate_answer_format, AnswerFieldKind, ConfidenceValidator};
use crate::domain::classify::{Classification, FieldAction, QuestionClassifier};
use crate::domain::foundation::Confidence;
use crate::domain::gate::requires_manual_review;
use crate::domain::memory::{
    find_similar_answer, question_fingerprint, RecalledAnswer, StoredAnswer, RECALL_CONFIDENCE,
};
use crate::domain::prompts::{
    adaptation_prompt_data, answer_prompt_data, format_prompt, PromptKind,
};
use crate::ports::{AnswerProvider, AnswerRequest, AnswerStore, RequestMetadata};

/// Confidence threshold below which qualitative answers are flagged for
/// review.
pub const DEFAULT_CONFIDENCE_THRESHOLD: f64 = 0.7;

/// Command to answer one form question.
#[derive(Debug, Clone)]
pub struct AnswerQuestionCommand {
    /// The question text, usually the field's derived label.
    pub question: String,
    /// Label of the field the answer targets, for classification and logs.
    pub field_label: String,
    /// Shape the answer must fit.
    pub field_kind: AnswerFieldKind,
}

/// Where an answer came from.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum AnswerSource {
    /// Reused verbatim from the answer memory.
    Memory,
    /// Recalled from memory and adapted by the provider.
    MemoryAdapted,
    /// Freshly generated by the provider.
    Generated,
}

/// An answer together with its vetting results.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct AnsweredQuestion {
    pub question: String,
    pub answer: String,
    pub classification: Classification,
    pub confidence: Confidence,
    pub source: AnswerSource,
    /// True when the answer must be shown to the applicant before use.
    pub needs_review: bool,
}

/// Result of handling one question.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub enum AnswerOutcome {
    /// The pipeline produced an answer.
    Answered(AnsweredQuestion),
    /// Only a stored applicant answer may be used and none exists.
    RequiresApplicant {
        question: String,
        classification: Classification,
    },
    /// Generation failed or produced nothing usable.
    Unanswered {
        question: String,
        classification: Classification,
        reason: String,
    },
}

/// Handler for answering a single form question.
///
/// Eligibility questions only ever reuse stored answers; legal
/// attestations are reported back untouched. Qualitative questions
/// prefer memory (verbatim, then adapted) before fresh generation, and
/// every generated answer is format-checked and reviewed against the
/// resume before it is handed out.
pub struct AnswerQuestionHandler {
    provider: Arc<dyn AnswerProvider>,
    answer_store: Arc<dyn AnswerStore>,
    confidence_threshold: f64,
}

impl AnswerQuestionHandler {
    pub fn new(provider: Arc<dyn AnswerProvider>, answer_store: Arc<dyn AnswerStore>) -> Self {
        Self {
            provider,
            answer_store,
            confidence_threshold: DEFAULT_CONFIDENCE_THRESHOLD,
        }
    }

    /// Sets the confidence threshold for the review flag.
    pub fn with_confidence_threshold(mut self, threshold: f64) -> Self {
        self.confidence_threshold = threshold;
        self
    }

    pub async fn handle(
        &self,
        session: &ApplySession,
        command: AnswerQuestionCommand,
    ) -> AnswerOutcome {
        // 1. Classify the question
        let classification = QuestionClassifier::classify(&command.question, &command.field_label);

        // 2. Attestations are never answered here; a factual question in
        //    the answer pipeline means the profile lacks the value
        if matches!(
            classification.action,
            FieldAction::ManualReviewRequired | FieldAction::AutoFill
        ) {
            return AnswerOutcome::RequiresApplicant {
                question: command.question,
                classification,
            };
        }

        // 3. Reuse an exact memory hit verbatim
        let fingerprint = question_fingerprint(&command.question);
        if let Some(entry) = self.exact_recall(&fingerprint).await {
            return self.answered(
                command.question,
                classification,
                entry.answer,
                Confidence::new(RECALL_CONFIDENCE),
                AnswerSource::Memory,
            );
        }

        // 4. Stored-only categories reuse a similar answer or report back
        if classification.action == FieldAction::UseStoredOnly {
            if let Some(recalled) = self.similar_recall(&command.question).await {
                return self.answered(
                    command.question,
                    classification,
                    recalled.answer,
                    recalled.confidence,
                    AnswerSource::Memory,
                );
            }
            return AnswerOutcome::RequiresApplicant {
                question: command.question,
                classification,
            };
        }

        let metadata =
            RequestMetadata::new(session.run_id, &command.question, &command.field_label);

        // 5. Adapt a similar stored answer when one exists
        if let Some(recalled) = self.similar_recall(&command.question).await {
            return self
                .adapt_recalled(session, command, classification, recalled, metadata)
                .await;
        }

        // 6. Generate a fresh answer
        let kind = PromptKind::for_category(classification.category)
            .unwrap_or(PromptKind::HybridAutoApply);
        let data = answer_prompt_data(&command.question, &session.resume, &session.job);
        let prompt = format_prompt(kind.template(), &data);

        let response = match self.provider.generate(AnswerRequest::new(prompt, metadata)).await {
            Ok(response) if !response.is_empty() => response,
            Ok(_) => {
                return AnswerOutcome::Unanswered {
                    question: command.question,
                    classification,
                    reason: "Provider returned an empty answer".to_string(),
                };
            }
            Err(err) => {
                tracing::warn!(
                    run_id = %session.run_id,
                    error = %err,
                    "Answer generation failed"
                );
                return AnswerOutcome::Unanswered {
                    question: command.question,
                    classification,
                    reason: err.to_string(),
                };
            }
        };

        // 7. Vet the format before anything else
        let format = validate_answer_format(&response.answer, command.field_kind);
        if !format.valid {
            tracing::debug!(
                run_id = %session.run_id,
                reason = %format.reason,
                "Generated answer failed the format check"
            );
            return AnswerOutcome::Unanswered {
                question: command.question,
                classification,
                reason: format.reason,
            };
        }

        // 8. Review the answer against the resume
        let review = ConfidenceValidator::validate(&response.answer, &session.resume);
        if !review.is_clean() {
            tracing::debug!(
                run_id = %session.run_id,
                issues = ?review.issues,
                "Answer review found issues"
            );
        }

        self.answered(
            command.question,
            classification,
            response.answer,
            review.confidence,
            AnswerSource::Generated,
        )
    }

    /// Adapts a recalled answer to the new question, reusing it verbatim
    /// when the provider cannot help.
    async fn adapt_recalled(
        &self,
        session: &ApplySession,
        command: AnswerQuestionCommand,
        classification: Classification,
        recalled: RecalledAnswer,
        metadata: RequestMetadata,
    ) -> AnswerOutcome {
        // Entries do not retain the original question text, so the
        // adaptation prompt renders without it.
        let data = adaptation_prompt_data("", &recalled.answer, &command.question);
        let prompt = format_prompt(PromptKind::MemoryAdaptation.template(), &data);

        match self.provider.generate(AnswerRequest::new(prompt, metadata)).await {
            Ok(response) if !response.is_empty() => self.answered(
                command.question,
                classification,
                response.answer,
                recalled.confidence,
                AnswerSource::MemoryAdapted,
            ),
            Ok(_) => {
                tracing::warn!(
                    run_id = %session.run_id,
                    "Adaptation returned an empty answer, reusing the stored answer verbatim"
                );
                self.answered(
                    command.question,
                    classification,
                    recalled.answer,
                    recalled.confidence,
                    AnswerSource::Memory,
                )
            }
            Err(err) => {
                tracing::warn!(
                    run_id = %session.run_id,
                    error = %err,
                    "Adaptation failed, reusing the stored answer verbatim"
                );
                self.answered(
                    command.question,
                    classification,
                    recalled.answer,
                    recalled.confidence,
                    AnswerSource::Memory,
                )
            }
        }
    }

    fn answered(
        &self,
        question: String,
        classification: Classification,
        answer: String,
        confidence: Confidence,
        source: AnswerSource,
    ) -> AnswerOutcome {
        let needs_review =
            requires_manual_review(&classification, confidence, self.confidence_threshold);
        AnswerOutcome::Answered(AnsweredQuestion {
            question,
            answer,
            classification,
            confidence,
            source,
            needs_review,
        })
    }

    /// Exact fingerprint lookup; non-reusable feedback and store errors
    /// both count as a miss.
    async fn exact_recall(&self, fingerprint: &str) -> Option<StoredAnswer> {
        match self.answer_store.get(fingerprint).await {
            Ok(entry) => entry.filter(|e| e.feedback.is_reusable()),
            Err(err) => {
                tracing::warn!(error = %err, "Answer memory read failed, treating as a miss");
                None
            }
        }
    }

    /// Similarity scan over all entries; store errors count as a miss.
    async fn similar_recall(&self, question: &str) -> Option<RecalledAnswer> {
        match self.answer_store.entries().await {
            Ok(entries) => find_similar_answer(question, &entries),
            Err(err) => {
                tracing::warn!(error = %err, "Answer memory scan failed, treating as a miss");
                None
            }
        }
    }
}
