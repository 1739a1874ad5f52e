//! Career readiness questionnaire.
//!
//! [`assessment::AssessmentSession`] walks a respondent through the question bank section by
//! section; [`assessment::ScoringEngine`] turns the finished answer list into an
//! [`assessment::AssessmentResult`].

pub mod assessment;
pub mod config;
pub mod error;
pub mod telemetry;
