//! Investor profile model
//!
//! A [`UserProfile`] shapes the tone and content of generated advice. The
//! caller owns it and may replace it between calls; the engine never mutates
//! it.

use serde::{Deserialize, Serialize};
use std::fmt;

/// How much drawdown the investor is willing to tolerate
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum RiskTolerance {
    Conservative,
    Moderate,
    Aggressive,
}

impl fmt::Display for RiskTolerance {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let s = match self {
            Self::Conservative => "conservative",
            Self::Moderate => "moderate",
            Self::Aggressive => "aggressive",
        };
        f.write_str(s)
    }
}

/// Self-reported investing experience
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum ExperienceLevel {
    Beginner,
    Intermediate,
    Advanced,
    Expert,
}

impl fmt::Display for ExperienceLevel {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let s = match self {
            Self::Beginner => "beginner",
            Self::Intermediate => "intermediate",
            Self::Advanced => "advanced",
            Self::Expert => "expert",
        };
        f.write_str(s)
    }
}

/// Rough portfolio size bucket
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum PortfolioSize {
    Small,
    Medium,
    Large,
    Institutional,
}

impl fmt::Display for PortfolioSize {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let s = match self {
            Self::Small => "small",
            Self::Medium => "medium",
            Self::Large => "large",
            Self::Institutional => "institutional",
        };
        f.write_str(s)
    }
}

/// Intended holding period
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum TimeHorizon {
    Short,
    Medium,
    Long,
}

impl fmt::Display for TimeHorizon {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let s = match self {
            Self::Short => "short",
            Self::Medium => "medium",
            Self::Long => "long",
        };
        f.write_str(s)
    }
}

/// Investor attributes consumed by the response generators
///
/// `investment_goals` and `interests` carry set semantics: order is
/// irrelevant and duplicates are meaningless, but they are stored as `Vec`
/// so prose rendering is stable.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct UserProfile {
    pub risk_tolerance: RiskTolerance,
    pub investment_goals: Vec<String>,
    pub experience: ExperienceLevel,
    pub portfolio_size: PortfolioSize,
    pub time_horizon: TimeHorizon,
    pub interests: Vec<String>,
}

impl Default for UserProfile {
    /// The stock demo profile: a moderate, long-horizon intermediate
    /// investor saving for retirement.
    fn default() -> Self {
        Self {
            risk_tolerance: RiskTolerance::Moderate,
            investment_goals: vec!["retirement".to_string(), "wealth_building".to_string()],
            experience: ExperienceLevel::Intermediate,
            portfolio_size: PortfolioSize::Medium,
            time_horizon: TimeHorizon::Long,
            interests: vec![
                "technology".to_string(),
                "sustainability".to_string(),
                "growth_stocks".to_string(),
            ],
        }
    }
}

impl UserProfile {
    /// Goals joined for prose ("retirement and wealth_building").
    pub fn goals_phrase(&self) -> String {
        match self.investment_goals.as_slice() {
            [] => "general investing".to_string(),
            [only] => only.clone(),
            goals => {
                let (last, rest) = goals.split_last().expect("non-empty");
                format!("{} and {}", rest.join(", "), last)
            }
        }
    }
}
