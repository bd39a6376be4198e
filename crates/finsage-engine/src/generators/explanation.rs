//! Explanation generator
//!
//! Educational replies pitched at the user's experience level. Topic and
//! complexity lookups are total: unknown topics fall back to a generic
//! definition and generic related topics.

use finsage_core::market::MarketContext;
use finsage_core::profile::UserProfile;
use finsage_core::response::{
    AdvisorResponse, Complexity, Explanation, ResponseData, ResponseKind,
};

use crate::router;

/// Fixed confidence for educational replies
const EDUCATIONAL_CONFIDENCE: f64 = 0.9;

/// Topic used when the query mentions nothing the engine has material for
const FALLBACK_TOPIC: &str = "investment concepts";

/// Generator for the `Explanation` intent
#[derive(Debug, Default)]
pub struct ExplanationGenerator;

impl ExplanationGenerator {
    pub fn new() -> Self {
        Self
    }

    pub fn generate(
        &self,
        input: &str,
        _market: &MarketContext,
        profile: &UserProfile,
    ) -> AdvisorResponse {
        let topic = router::extract_topic(input).unwrap_or(FALLBACK_TOPIC);
        let complexity = Complexity::for_experience(profile.experience);
        tracing::debug!(topic, ?complexity, "generating explanation response");

        let explanation = build_explanation(topic, complexity);
        let reasoning = explanation.key_points.clone();
        let suggestions = explanation.related_topics.clone();
        let content = render_content(&explanation, profile);

        AdvisorResponse::new(
            ResponseKind::Explanation,
            content,
            EDUCATIONAL_CONFIDENCE,
            ResponseData::Explanation(explanation),
        )
        .with_reasoning(reasoning)
        .with_suggestions(suggestions)
    }
}

fn build_explanation(topic: &str, complexity: Complexity) -> Explanation {
    Explanation {
        topic: topic.to_string(),
        definition: definition(topic, complexity),
        key_points: key_points(topic),
        examples: examples(topic),
        related_topics: related_topics(topic),
        complexity,
    }
}

fn definition(topic: &str, complexity: Complexity) -> String {
    let known = match (topic, complexity) {
        ("stocks", Complexity::Simple) => Some(
            "Stocks represent ownership shares in a company. When you buy a stock, you become \
             a partial owner of that business.",
        ),
        ("stocks", Complexity::Intermediate) => Some(
            "Stocks are equity securities that represent fractional ownership in a \
             corporation, entitling holders to a portion of the company's assets and profits.",
        ),
        ("stocks", Complexity::Advanced) => Some(
            "Stocks are financial instruments representing ownership claims on a corporation's \
             assets and earnings, traded on secondary markets with price discovery mechanisms.",
        ),
        ("bonds", Complexity::Simple) => Some(
            "Bonds are loans you make to a company or government. In return they pay you \
             interest and give your money back at maturity.",
        ),
        ("bonds", Complexity::Intermediate) => Some(
            "Bonds are fixed-income securities representing debt obligations, paying periodic \
             coupons and returning principal at maturity.",
        ),
        ("bonds", Complexity::Advanced) => Some(
            "Bonds are tradable debt instruments whose pricing reflects duration, convexity, \
             and credit spread dynamics across the yield curve.",
        ),
        ("etfs", Complexity::Simple) => Some(
            "ETFs are funds that hold a basket of investments and trade on an exchange like a \
             single stock.",
        ),
        ("etfs", Complexity::Intermediate) => Some(
            "ETFs are pooled investment vehicles tracking an index or strategy, combining \
             diversification with intraday liquidity and low expense ratios.",
        ),
        ("etfs", Complexity::Advanced) => Some(
            "ETFs are open-ended funds whose in-kind creation and redemption mechanics keep \
             market price anchored to net asset value through arbitrage.",
        ),
        ("diversification", Complexity::Simple) => Some(
            "Diversification means spreading your money across different investments so a \
             single loss can't sink your portfolio.",
        ),
        ("diversification", Complexity::Intermediate) => Some(
            "Diversification allocates capital across imperfectly correlated assets to reduce \
             portfolio variance without proportionally reducing expected return.",
        ),
        ("diversification", Complexity::Advanced) => Some(
            "Diversification exploits the correlation structure of asset returns to improve \
             risk-adjusted performance, moving portfolios toward the efficient frontier.",
        ),
        _ => None,
    };

    known.map_or_else(
        || {
            format!(
                "{topic} is a financial concept central to how portfolios are constructed, \
                 evaluated, and managed over time."
            )
        },
        ToString::to_string,
    )
}

/// Always exactly four key points.
fn key_points(topic: &str) -> Vec<String> {
    vec![
        format!("Understanding {topic} is fundamental to investment success"),
        format!("Risk and return are typically correlated with {topic}"),
        format!("Diversification helps manage {topic}-related risks"),
        format!("Regular monitoring is essential for {topic} investments"),
    ]
}

/// Always exactly three examples.
fn examples(topic: &str) -> Vec<String> {
    vec![
        format!("Example 1: How {topic} works in practice"),
        format!("Example 2: Common {topic} strategies"),
        format!("Example 3: {topic} risk management techniques"),
    ]
}

fn related_topics(topic: &str) -> Vec<String> {
    let related: &[&str] = match topic {
        "stocks" => &["bonds", "etfs", "portfolio diversification", "risk management"],
        "bonds" => &["stocks", "interest rates", "credit risk", "yield curve"],
        "etfs" => &["index funds", "diversification", "expense ratios", "liquidity"],
        _ => &["portfolio management", "risk assessment", "market analysis"],
    };
    related.iter().map(|t| (*t).to_string()).collect()
}

fn numbered(items: &[String]) -> String {
    items
        .iter()
        .enumerate()
        .map(|(i, item)| format!("{}. {item}", i + 1))
        .collect::<Vec<_>>()
        .join("\n")
}

fn render_content(explanation: &Explanation, profile: &UserProfile) -> String {
    format!(
        "Let me explain {topic} in a way that's appropriate for your {experience} level:\n\n\
         **Definition:**\n\
         {definition}\n\n\
         **Key Points:**\n\
         {key_points}\n\n\
         **Examples:**\n\
         {examples}\n\n\
         **Related Topics to Explore:**\n\
         {related}\n\n\
         *This explanation is tailored for {complexity} understanding. Feel free to ask for \
         more details on any specific aspect.*",
        topic = explanation.topic,
        experience = profile.experience,
        definition = explanation.definition,
        key_points = numbered(&explanation.key_points),
        examples = numbered(&explanation.examples),
        related = numbered(&explanation.related_topics),
        complexity = explanation.complexity,
    )
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::context::market_presets;
    use finsage_core::profile::ExperienceLevel;

    fn generate(query: &str, experience: ExperienceLevel) -> AdvisorResponse {
        let generator = ExplanationGenerator::new();
        let market = &market_presets()[0];
        let profile = UserProfile {
            experience,
            ..UserProfile::default()
        };
        generator.generate(query, market, &profile)
    }

    fn explanation(response: &AdvisorResponse) -> &Explanation {
        match &response.data {
            ResponseData::Explanation(explanation) => explanation,
            other => panic!("expected explanation payload, got {other:?}"),
        }
    }

    #[test]
    fn test_topic_extraction_and_shape() {
        let response = generate("Explain diversification", ExperienceLevel::Intermediate);
        let explanation = explanation(&response);

        assert_eq!(response.kind, ResponseKind::Explanation);
        assert_eq!(explanation.topic, "diversification");
        assert_eq!(explanation.key_points.len(), 4);
        assert_eq!(explanation.examples.len(), 3);
        assert!((response.confidence - 0.9).abs() < f64::EPSILON);
    }

    #[test]
    fn test_unknown_topic_falls_back() {
        let response = generate("explain the metaverse", ExperienceLevel::Beginner);
        let explanation = explanation(&response);

        assert_eq!(explanation.topic, "investment concepts");
        assert!(explanation.definition.contains("investment concepts"));
        assert_eq!(explanation.related_topics.len(), 3);
    }

    #[test]
    fn test_complexity_tracks_experience() {
        let beginner = generate("explain stocks", ExperienceLevel::Beginner);
        assert_eq!(explanation(&beginner).complexity, Complexity::Simple);
        assert!(explanation(&beginner).definition.contains("partial owner"));

        let expert = generate("explain stocks", ExperienceLevel::Expert);
        assert_eq!(explanation(&expert).complexity, Complexity::Advanced);
        assert!(explanation(&expert).definition.contains("price discovery"));

        let advanced = generate("explain stocks", ExperienceLevel::Advanced);
        assert_eq!(explanation(&advanced).complexity, Complexity::Intermediate);
    }

    #[test]
    fn test_reasoning_mirrors_key_points() {
        let response = generate("explain bonds", ExperienceLevel::Intermediate);
        assert_eq!(response.reasoning, explanation(&response).key_points);
        assert_eq!(response.suggestions, explanation(&response).related_topics);
    }

    #[test]
    fn test_topic_specific_related_topics() {
        let response = generate("explain etfs", ExperienceLevel::Intermediate);
        let explanation = explanation(&response);
        assert!(explanation
            .related_topics
            .iter()
            .any(|t| t == "expense ratios"));
    }
}
