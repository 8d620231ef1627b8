//! FormPilot - Job Application Autofill Engine
//!
//! This crate implements the decision core of a job application
//! auto-filler: field extraction over a page driver, question
//! classification, answer generation with resume-grounded validation,
//! an answer memory, and the multi-step flow orchestrator.

pub mod adapters;
pub mod application;
pub mod config;
pub mod domain;
pub mod ports;
