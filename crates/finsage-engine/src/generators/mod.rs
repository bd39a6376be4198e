//! Response generators, one per intent
//!
//! Every generator has the same shape: query text plus market context plus
//! user profile in, a complete [`finsage_core::AdvisorResponse`] out.
//! Generators are pure with respect to engine state; the orchestrator owns
//! history and dispatch.

mod analysis;
mod explanation;
mod general;
mod prediction;
mod question;
mod recommendation;

pub use analysis::AnalysisGenerator;
pub use explanation::ExplanationGenerator;
pub use general::GeneralGenerator;
pub use prediction::PredictionGenerator;
pub use question::QuestionGenerator;
pub use recommendation::RecommendationGenerator;

/// Rendered in place of a ticker when the query names no known symbol
pub(crate) const MARKET_WIDE: &str = "the market";
