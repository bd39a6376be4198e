//! Intent routing for user queries
//!
//! Queries are classified by an ordered list of keyword rules evaluated in a
//! fixed priority: the first rule with any matching keyword wins, and a
//! query matching nothing falls back to [`Intent::Analysis`]. The fallback
//! is deliberate product behavior, not an omission: [`Intent::General`]
//! exists (and has a generator) but is never produced by the router, so the
//! general path is a defensive default only.

use finsage_core::response::ResponseKind;

/// Intent categories a query can resolve to
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Intent {
    /// Full technical/fundamental/sentiment work-up
    Analysis,
    /// Forward-looking price outlook
    Prediction,
    /// Strategy recommendations for the user's profile
    Recommendation,
    /// Educational explanation of a concept
    Explanation,
    /// Direct market question
    Question,
    /// Catch-all; unreachable from classification (see module docs)
    General,
}

impl Intent {
    /// The response kind a generator for this intent reports.
    ///
    /// `General` maps to `Analysis`: the fallback generator tags its output
    /// as analysis rather than introducing a sixth wire value.
    pub fn response_kind(self) -> ResponseKind {
        match self {
            Self::Analysis | Self::General => ResponseKind::Analysis,
            Self::Prediction => ResponseKind::Prediction,
            Self::Recommendation => ResponseKind::Recommendation,
            Self::Explanation => ResponseKind::Explanation,
            Self::Question => ResponseKind::Question,
        }
    }
}

/// A single classification rule: if any keyword matches, the intent applies
#[derive(Debug, Clone)]
pub struct IntentRule {
    pub intent: Intent,
    pub keywords: &'static [&'static str],
}

/// The production rule table, in priority order
pub const DEFAULT_RULES: &[IntentRule] = &[
    IntentRule {
        intent: Intent::Analysis,
        keywords: &["analyze", "analysis"],
    },
    IntentRule {
        intent: Intent::Prediction,
        keywords: &["predict", "forecast"],
    },
    IntentRule {
        intent: Intent::Recommendation,
        keywords: &["recommend", "suggest"],
    },
    IntentRule {
        intent: Intent::Explanation,
        keywords: &["explain", "why", "how"],
    },
    IntentRule {
        intent: Intent::Question,
        keywords: &["?", "what", "when"],
    },
];

/// Ticker symbols the engine knows how to talk about
const KNOWN_SYMBOLS: &[&str] = &[
    "AAPL", "GOOGL", "MSFT", "TSLA", "AMZN", "NVDA", "META", "NFLX", "SPY", "QQQ",
];

/// Topics the explanation generator has material for
const KNOWN_TOPICS: &[&str] = &[
    "stocks",
    "bonds",
    "etfs",
    "options",
    "crypto",
    "portfolio",
    "diversification",
    "risk management",
];

/// Keyword router mapping raw query text to an [`Intent`]
#[derive(Debug, Clone)]
pub struct IntentRouter {
    rules: Vec<IntentRule>,
    fallback: Intent,
}

impl Default for IntentRouter {
    fn default() -> Self {
        Self::new()
    }
}

impl IntentRouter {
    /// Router with the production rule table and the `Analysis` fallback
    pub fn new() -> Self {
        Self {
            rules: DEFAULT_RULES.to_vec(),
            fallback: Intent::Analysis,
        }
    }

    /// Router with a custom rule table, for tests and experiments
    pub fn with_rules(rules: Vec<IntentRule>, fallback: Intent) -> Self {
        Self { rules, fallback }
    }

    /// Classify a query. Deterministic, total, no side effects.
    pub fn classify(&self, query: &str) -> Intent {
        let query_lower = query.to_lowercase();

        for rule in &self.rules {
            if Self::matches_any(&query_lower, rule.keywords) {
                tracing::debug!(intent = ?rule.intent, "query matched rule");
                return rule.intent;
            }
        }

        tracing::debug!(intent = ?self.fallback, "query matched no rule, using fallback");
        self.fallback
    }

    /// Check if query contains any of the keywords
    fn matches_any(query: &str, keywords: &[&str]) -> bool {
        keywords.iter().any(|kw| query.contains(kw))
    }
}

/// Extract the first known ticker symbol mentioned in a query.
///
/// Matching is containment against the whitelist after uppercasing, so
/// "analyze aapl" resolves the same as "analyze AAPL". `None` means the
/// query is about the market at large.
pub fn extract_symbol(query: &str) -> Option<&'static str> {
    let upper = query.to_uppercase();
    KNOWN_SYMBOLS.iter().find(|s| upper.contains(**s)).copied()
}

/// Extract the first known explanation topic mentioned in a query.
pub fn extract_topic(query: &str) -> Option<&'static str> {
    let lower = query.to_lowercase();
    KNOWN_TOPICS.iter().find(|t| lower.contains(**t)).copied()
}
