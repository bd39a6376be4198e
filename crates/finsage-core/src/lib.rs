//! Core data model for the FinSage advisor engine
//!
//! This crate defines the value objects exchanged between callers and the
//! response engine ([`MarketContext`], [`UserProfile`], and
//! [`AdvisorResponse`] with its typed payload union), plus the
//! [`AnalysisProvider`] trait that supplies the simulated (or, eventually,
//! real) numeric analysis behind every response.

pub mod market;
pub mod profile;
pub mod provider;
pub mod response;

pub use market::{
    EconomicIndicators, MarketContext, MarketPhase, MarketSentiment, SectorTrend, VolatilityLevel,
};
pub use profile::{ExperienceLevel, PortfolioSize, RiskTolerance, TimeHorizon, UserProfile};
pub use provider::AnalysisProvider;
pub use response::{
    AdvisorResponse, Answer, BandPosition, Complexity, Explanation, FundamentalSnapshot,
    MarketInsights, PredictionOutlook, Rating, RecommendationSet, ResponseData, ResponseKind,
    Scenario, SentimentSnapshot, TechnicalSnapshot, TrendDirection, VolumeLevel,
};
