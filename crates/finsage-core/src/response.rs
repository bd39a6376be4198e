//! Advisor response types
//!
//! Every generation call produces an [`AdvisorResponse`]: prose content for
//! display plus a typed [`ResponseData`] payload for programmatic consumers.
//! The payload is a tagged union with one concrete shape per response kind,
//! so downstream code pattern-matches instead of duck-typing.

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use std::fmt;

/// Coarse category assigned to a response
///
/// Always set, even when intent resolution fell back to the default. The
/// defensive general generator also reports `Analysis` here; there is no
/// separate wire value for it.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum ResponseKind {
    Analysis,
    Prediction,
    Recommendation,
    Explanation,
    Question,
}

impl fmt::Display for ResponseKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let s = match self {
            Self::Analysis => "analysis",
            Self::Prediction => "prediction",
            Self::Recommendation => "recommendation",
            Self::Explanation => "explanation",
            Self::Question => "question",
        };
        f.write_str(s)
    }
}

/// Where price sits relative to the Bollinger Bands
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum BandPosition {
    Upper,
    Middle,
    Lower,
}

impl fmt::Display for BandPosition {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let s = match self {
            Self::Upper => "upper",
            Self::Middle => "middle",
            Self::Lower => "lower",
        };
        f.write_str(s)
    }
}

/// Short-term price trend read from the indicators
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum TrendDirection {
    Bullish,
    Bearish,
}

impl fmt::Display for TrendDirection {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Bullish => f.write_str("bullish"),
            Self::Bearish => f.write_str("bearish"),
        }
    }
}

/// Traded volume relative to the recent average
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum VolumeLevel {
    High,
    Normal,
}

impl fmt::Display for VolumeLevel {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::High => f.write_str("high"),
            Self::Normal => f.write_str("normal"),
        }
    }
}

/// Analyst-style composite rating
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum Rating {
    StrongBuy,
    Buy,
    Hold,
    Sell,
    StrongSell,
}

impl fmt::Display for Rating {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let s = match self {
            Self::StrongBuy => "Strong Buy",
            Self::Buy => "Buy",
            Self::Hold => "Hold",
            Self::Sell => "Sell",
            Self::StrongSell => "Strong Sell",
        };
        f.write_str(s)
    }
}

/// Technical indicator snapshot
///
/// Provider contract: `rsi` in `[30, 70)`, `macd` in `[-1, 1)`, `support`
/// in `[100, 150)`, `resistance` in `[150, 200)`.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct TechnicalSnapshot {
    pub rsi: f64,
    pub macd: f64,
    pub bollinger: BandPosition,
    pub support: f64,
    pub resistance: f64,
    pub trend: TrendDirection,
    pub volume: VolumeLevel,
}

/// Fundamental metrics snapshot
///
/// Provider contract: `pe` in `[15, 35)`, `peg` in `[0.8, 1.6)`,
/// `debt_to_equity` in `[0, 0.8)`, `roe` in `[8, 20)`, `revenue_growth` in
/// `[-5, 15)`, `earnings_growth` in `[-10, 15)`, `dividend_yield` in
/// `[0, 4)`. Growth figures are percentages.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct FundamentalSnapshot {
    pub pe: f64,
    pub peg: f64,
    pub debt_to_equity: f64,
    pub roe: f64,
    pub revenue_growth: f64,
    pub earnings_growth: f64,
    pub dividend_yield: f64,
    pub rating: Rating,
}

/// Sentiment scores, each in a sub-range of `[0, 1)`
///
/// Provider contract: `overall` in `[0.3, 0.7)`, `news` in `[0.2, 0.8)`,
/// `social` in `[0.1, 0.9)`, `analyst` in `[0.4, 0.8)`.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct SentimentSnapshot {
    pub overall: f64,
    pub news: f64,
    pub social: f64,
    pub analyst: f64,
}

/// A named outcome branch of a prediction
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Scenario {
    pub name: String,
    /// Probability in percent. The three scenarios of an outlook sum to 100.
    pub probability: u8,
    #[serde(rename = "return")]
    pub expected_return: f64,
}

/// Thirty-day price outlook
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct PredictionOutlook {
    pub price_target: f64,
    pub expected_return: f64,
    pub confidence: f64,
    pub timeframe: String,
    pub volatility: f64,
    pub scenarios: Vec<Scenario>,
}

/// Strategy recommendations tailored to a profile
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct RecommendationSet {
    pub primary: String,
    pub secondary: Vec<String>,
    pub risk_management: Vec<String>,
    pub next_steps: Vec<String>,
    pub confidence: f64,
}

/// Depth tier an explanation is pitched at
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum Complexity {
    Simple,
    Intermediate,
    Advanced,
}

impl fmt::Display for Complexity {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let s = match self {
            Self::Simple => "simple",
            Self::Intermediate => "intermediate",
            Self::Advanced => "advanced",
        };
        f.write_str(s)
    }
}

impl Complexity {
    /// Tier an explanation should target for the given experience level.
    pub fn for_experience(experience: crate::profile::ExperienceLevel) -> Self {
        use crate::profile::ExperienceLevel;
        match experience {
            ExperienceLevel::Beginner => Self::Simple,
            ExperienceLevel::Expert => Self::Advanced,
            ExperienceLevel::Intermediate | ExperienceLevel::Advanced => Self::Intermediate,
        }
    }
}

/// Educational explanation of a topic
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Explanation {
    pub topic: String,
    pub definition: String,
    pub key_points: Vec<String>,
    pub examples: Vec<String>,
    pub related_topics: Vec<String>,
    pub complexity: Complexity,
}

/// Direct answer to a market question
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Answer {
    pub answer: String,
    pub confidence: f64,
    pub follow_ups: Vec<String>,
    pub sources: Vec<String>,
}

/// General market commentary, used by the defensive fallback generator
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct MarketInsights {
    pub summary: String,
    pub key_points: Vec<String>,
    pub suggestions: Vec<String>,
}

/// Typed payload of an [`AdvisorResponse`], tagged by response kind
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(tag = "kind", rename_all = "snake_case")]
pub enum ResponseData {
    Analysis {
        technical: TechnicalSnapshot,
        fundamental: FundamentalSnapshot,
        sentiment: SentimentSnapshot,
        signals: Vec<String>,
    },
    Prediction(PredictionOutlook),
    Recommendation(RecommendationSet),
    Explanation(Explanation),
    Answer(Answer),
    Insights(MarketInsights),
}

/// A complete generated reply
///
/// Immutable once created. `confidence` is clamped into `[0, 1]` at
/// construction; `reasoning` is non-empty for analysis and prediction
/// responses by generator contract.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct AdvisorResponse {
    pub content: String,
    pub confidence: f64,
    pub reasoning: Vec<String>,
    pub suggestions: Vec<String>,
    pub data: ResponseData,
    #[serde(rename = "type")]
    pub kind: ResponseKind,
    pub timestamp: DateTime<Utc>,
}

impl AdvisorResponse {
    pub fn new(
        kind: ResponseKind,
        content: impl Into<String>,
        confidence: f64,
        data: ResponseData,
    ) -> Self {
        Self {
            content: content.into(),
            confidence: confidence.clamp(0.0, 1.0),
            reasoning: Vec::new(),
            suggestions: Vec::new(),
            data,
            kind,
            timestamp: Utc::now(),
        }
    }

    pub fn with_reasoning(mut self, reasoning: Vec<String>) -> Self {
        self.reasoning = reasoning;
        self
    }

    pub fn with_suggestions(mut self, suggestions: Vec<String>) -> Self {
        self.suggestions = suggestions;
        self
    }

    /// One-line summary for logs and list views.
    pub fn summary(&self) -> String {
        format!(
            "{} response ({:.0}% confidence, {})",
            self.kind,
            self.confidence * 100.0,
            self.timestamp.format("%Y-%m-%d %H:%M UTC")
        )
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::profile::ExperienceLevel;

    fn sample_insights() -> ResponseData {
        ResponseData::Insights(MarketInsights {
            summary: "Quiet tape".to_string(),
            key_points: vec!["Mixed economic signals".to_string()],
            suggestions: vec!["Monitor key economic indicators".to_string()],
        })
    }

    #[test]
    fn test_confidence_clamped() {
        let response = AdvisorResponse::new(ResponseKind::Analysis, "x", 1.7, sample_insights());
        assert!((response.confidence - 1.0).abs() < f64::EPSILON);

        let response = AdvisorResponse::new(ResponseKind::Analysis, "x", -0.2, sample_insights());
        assert!(response.confidence.abs() < f64::EPSILON);
    }

    #[test]
    fn test_complexity_for_experience() {
        assert_eq!(
            Complexity::for_experience(ExperienceLevel::Beginner),
            Complexity::Simple
        );
        assert_eq!(
            Complexity::for_experience(ExperienceLevel::Expert),
            Complexity::Advanced
        );
        assert_eq!(
            Complexity::for_experience(ExperienceLevel::Intermediate),
            Complexity::Intermediate
        );
        assert_eq!(
            Complexity::for_experience(ExperienceLevel::Advanced),
            Complexity::Intermediate
        );
    }

    #[test]
    fn test_kind_serializes_as_type() {
        let response =
            AdvisorResponse::new(ResponseKind::Prediction, "x", 0.8, sample_insights());
        let json = serde_json::to_value(&response).expect("serialize");
        assert_eq!(json["type"], "prediction");
        assert!(json.get("kind").is_none());
    }

    #[test]
    fn test_payload_round_trip_is_exact() {
        let data = ResponseData::Prediction(PredictionOutlook {
            price_target: 104.3311,
            expected_return: 0.1437,
            confidence: 0.83,
            timeframe: "30 days".to_string(),
            volatility: 0.25,
            scenarios: vec![
                Scenario {
                    name: "Bull Case".to_string(),
                    probability: 30,
                    expected_return: 0.40,
                },
                Scenario {
                    name: "Base Case".to_string(),
                    probability: 50,
                    expected_return: 0.15,
                },
                Scenario {
                    name: "Bear Case".to_string(),
                    probability: 20,
                    expected_return: -0.10,
                },
            ],
        });

        let json = serde_json::to_string(&data).expect("serialize");
        let back: ResponseData = serde_json::from_str(&json).expect("deserialize");
        assert_eq!(back, data);
    }

    #[test]
    fn test_scenario_return_field_name() {
        let scenario = Scenario {
            name: "Bull Case".to_string(),
            probability: 30,
            expected_return: 0.4,
        };
        let json = serde_json::to_value(&scenario).expect("serialize");
        assert!(json.get("return").is_some());
        assert!(json.get("expected_return").is_none());
    }
}
