//! Rule-based contextual response engine for FinSage
//!
//! This crate turns free-text financial queries into structured, typed
//! responses. It is the product's generative-AI simulation: intent is
//! resolved by an ordered keyword rule table, content comes from
//! per-intent generators composing bounded randomized sub-analyses, and
//! every response is recorded in an append-only conversation history.
//!
//! # Architecture
//!
//! - [`router::IntentRouter`] classifies queries in a fixed priority order
//! - [`knowledge::KnowledgeBase`] holds the static reference tables
//! - [`providers::SimulatedAnalysisProvider`] draws the "ML" numbers, behind
//!   the `finsage_core::AnalysisProvider` seam
//! - one generator per intent composes the final [`finsage_core::AdvisorResponse`]
//! - [`engine::ResponseEngine`] orchestrates: classify, dispatch, record
//!
//! # Example
//!
//! ```rust,no_run
//! use finsage_engine::{EngineConfig, ResponseEngine};
//!
//! #[tokio::main]
//! async fn main() -> finsage_engine::Result<()> {
//!     let engine = ResponseEngine::builder()
//!         .config(EngineConfig::default())
//!         .build()?;
//!
//!     let response = engine.respond("Can you analyze AAPL for me?").await?;
//!     println!("{}", response.content);
//!     Ok(())
//! }
//! ```

pub mod config;
pub mod context;
pub mod engine;
pub mod error;
pub mod generators;
pub mod history;
pub mod knowledge;
pub mod providers;
pub mod router;

#[cfg(test)]
pub(crate) mod test_support;

// Re-export main types for convenience
pub use config::EngineConfig;
pub use engine::{EngineBuilder, RequestOverrides, ResponseEngine};
pub use error::{EngineError, Result};
pub use history::ConversationHistory;
pub use knowledge::{KnowledgeBase, ReferenceEntry};
pub use providers::SimulatedAnalysisProvider;
pub use router::{Intent, IntentRouter};

// Re-export the core model so most callers need only this crate
pub use finsage_core::{
    AdvisorResponse, AnalysisProvider, MarketContext, ResponseData, ResponseKind, UserProfile,
};
