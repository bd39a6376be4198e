//! Market context model
//!
//! A [`MarketContext`] is a snapshot of simulated macro and sector conditions.
//! It is immutable for the duration of a single generation call; the engine
//! owns one and callers may override it per request.

use serde::{Deserialize, Serialize};
use std::collections::HashMap;
use std::fmt;

/// Broad market regime
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum MarketPhase {
    Bull,
    Bear,
    Sideways,
    Volatile,
}

impl fmt::Display for MarketPhase {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let s = match self {
            Self::Bull => "bull",
            Self::Bear => "bear",
            Self::Sideways => "sideways",
            Self::Volatile => "volatile",
        };
        f.write_str(s)
    }
}

/// Aggregate market mood
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum MarketSentiment {
    Positive,
    Negative,
    Neutral,
    Mixed,
}

impl fmt::Display for MarketSentiment {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let s = match self {
            Self::Positive => "positive",
            Self::Negative => "negative",
            Self::Neutral => "neutral",
            Self::Mixed => "mixed",
        };
        f.write_str(s)
    }
}

/// Realized volatility regime
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum VolatilityLevel {
    Low,
    Medium,
    High,
    Extreme,
}

impl fmt::Display for VolatilityLevel {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let s = match self {
            Self::Low => "low",
            Self::Medium => "medium",
            Self::High => "high",
            Self::Extreme => "extreme",
        };
        f.write_str(s)
    }
}

/// Direction of a sector over the recent window
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum SectorTrend {
    Up,
    Down,
    Stable,
}

impl fmt::Display for SectorTrend {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let s = match self {
            Self::Up => "up",
            Self::Down => "down",
            Self::Stable => "stable",
        };
        f.write_str(s)
    }
}

/// Headline economic figures, in percent
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct EconomicIndicators {
    pub inflation: f64,
    pub interest_rates: f64,
    pub gdp: f64,
    pub unemployment: f64,
}

/// Snapshot of simulated market conditions consumed by response generators
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct MarketContext {
    pub current_market: MarketPhase,
    pub sentiment: MarketSentiment,
    pub volatility: VolatilityLevel,
    /// Sector name -> trend. Keys are non-empty sector names.
    pub sector_trends: HashMap<String, SectorTrend>,
    /// Recent headline events, in display order.
    pub key_events: Vec<String>,
    pub economic_indicators: EconomicIndicators,
}

impl MarketContext {
    /// Investment style the current phase/volatility combination favors.
    ///
    /// Used when composing analysis prose ("this environment typically
    /// favors ... strategies").
    pub fn strategy_style(&self) -> &'static str {
        match (self.current_market, self.volatility) {
            (MarketPhase::Bull, VolatilityLevel::Low) => "growth-focused",
            (MarketPhase::Bull, VolatilityLevel::High) => "momentum and value",
            (MarketPhase::Bear, _) => "defensive and value",
            (MarketPhase::Sideways, _) => "income and dividend",
            _ => "balanced",
        }
    }

    /// What the current phase typically implies for positioning.
    pub fn implications(&self) -> &'static str {
        match self.current_market {
            MarketPhase::Bull => "favorable conditions for growth investments",
            MarketPhase::Bear => "caution and defensive positioning recommended",
            MarketPhase::Sideways => "opportunities in income-generating assets",
            MarketPhase::Volatile => "mixed signals requiring careful analysis",
        }
    }
}
