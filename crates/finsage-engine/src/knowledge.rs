//! Static reference knowledge consulted by the generators
//!
//! The knowledge base is populated once at construction and never mutated
//! during request handling. Lookups are total: a missing topic yields
//! `None` from [`KnowledgeBase::get`], and the typed accessors fall back to
//! generic material rather than erroring.

use finsage_core::profile::RiskTolerance;
use std::collections::HashMap;

/// Reference payload stored under a topic key
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum ReferenceEntry {
    /// Recurring market behavior and indicator heuristics
    MarketAnalysis {
        patterns: &'static [&'static str],
        indicators: &'static [&'static str],
    },
    /// Strategy lists keyed by risk tolerance
    Strategies {
        conservative: &'static [&'static str],
        moderate: &'static [&'static str],
        aggressive: &'static [&'static str],
    },
    /// Risk-management doctrine
    RiskManagement {
        principles: &'static [&'static str],
        techniques: &'static [&'static str],
    },
}

const MARKET_PATTERNS: &[&str] = &[
    "Bull markets typically last 3-5 years",
    "Bear markets average 18 months",
    "Sector rotation occurs every 6-12 months",
    "Volatility increases during uncertainty",
];

const MARKET_INDICATORS: &[&str] = &[
    "RSI above 70 indicates overbought",
    "MACD crossover signals trend change",
    "Volume confirms price movements",
    "Support and resistance levels are key",
];

const CONSERVATIVE_STRATEGIES: &[&str] = &[
    "Focus on dividend-paying stocks",
    "Maintain 60% bonds, 40% stocks",
    "Dollar-cost averaging approach",
    "Avoid high-risk investments",
];

const MODERATE_STRATEGIES: &[&str] = &[
    "Balanced portfolio approach",
    "Mix of growth and value stocks",
    "Regular rebalancing",
    "Diversification across sectors",
];

const AGGRESSIVE_STRATEGIES: &[&str] = &[
    "Growth-focused investments",
    "Higher allocation to stocks",
    "Sector rotation strategies",
    "Options and derivatives for hedging",
];

const RISK_PRINCIPLES: &[&str] = &[
    "Never risk more than you can afford to lose",
    "Diversification reduces portfolio risk",
    "Stop-loss orders limit downside",
    "Position sizing is crucial",
];

const RISK_TECHNIQUES: &[&str] = &[
    "Portfolio rebalancing",
    "Asset allocation strategies",
    "Risk-adjusted returns analysis",
    "Correlation analysis",
];

/// Used when a strategy lookup finds no entry for the topic
const GENERIC_STRATEGIES: &[&str] = &[
    "Diversified index fund approach",
    "Periodic portfolio review",
    "Gradual position building",
];

/// Read-only reference tables for the response generators
#[derive(Debug, Clone)]
pub struct KnowledgeBase {
    entries: HashMap<&'static str, ReferenceEntry>,
}

impl Default for KnowledgeBase {
    fn default() -> Self {
        Self::new()
    }
}

impl KnowledgeBase {
    /// Build the knowledge base with its fixed entries
    pub fn new() -> Self {
        let mut entries = HashMap::new();

        entries.insert(
            "market_analysis",
            ReferenceEntry::MarketAnalysis {
                patterns: MARKET_PATTERNS,
                indicators: MARKET_INDICATORS,
            },
        );

        entries.insert(
            "investment_strategies",
            ReferenceEntry::Strategies {
                conservative: CONSERVATIVE_STRATEGIES,
                moderate: MODERATE_STRATEGIES,
                aggressive: AGGRESSIVE_STRATEGIES,
            },
        );

        entries.insert(
            "risk_management",
            ReferenceEntry::RiskManagement {
                principles: RISK_PRINCIPLES,
                techniques: RISK_TECHNIQUES,
            },
        );

        Self { entries }
    }

    /// Look up a topic. Unknown topics return `None`; they never panic.
    pub fn get(&self, topic: &str) -> Option<&ReferenceEntry> {
        self.entries.get(topic)
    }

    /// Strategy list for a risk tolerance, with a generic fallback if the
    /// strategies entry were ever absent.
    pub fn strategies_for(&self, risk: RiskTolerance) -> &'static [&'static str] {
        match self.get("investment_strategies") {
            Some(ReferenceEntry::Strategies {
                conservative,
                moderate,
                aggressive,
            }) => match risk {
                RiskTolerance::Conservative => conservative,
                RiskTolerance::Moderate => moderate,
                RiskTolerance::Aggressive => aggressive,
            },
            _ => GENERIC_STRATEGIES,
        }
    }
}
