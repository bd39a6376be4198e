//! Recommendation generator
//!
//! Turns the knowledge base's strategy list for the user's risk tolerance
//! into a primary recommendation, secondary options, and a risk-management
//! checklist.

use std::sync::Arc;

use finsage_core::market::MarketContext;
use finsage_core::profile::{RiskTolerance, UserProfile};
use finsage_core::provider::AnalysisProvider;
use finsage_core::response::{
    AdvisorResponse, RecommendationSet, ResponseData, ResponseKind,
};

use crate::knowledge::KnowledgeBase;

/// Generator for the `Recommendation` intent
pub struct RecommendationGenerator {
    knowledge: Arc<KnowledgeBase>,
    provider: Arc<dyn AnalysisProvider>,
}

impl RecommendationGenerator {
    pub fn new(knowledge: Arc<KnowledgeBase>, provider: Arc<dyn AnalysisProvider>) -> Self {
        Self {
            knowledge,
            provider,
        }
    }

    pub fn generate(
        &self,
        _input: &str,
        market: &MarketContext,
        profile: &UserProfile,
    ) -> AdvisorResponse {
        tracing::debug!(risk = %profile.risk_tolerance, "generating recommendation response");

        let strategies = self.knowledge.strategies_for(profile.risk_tolerance);
        let recommendations = build_recommendations(
            strategies,
            market,
            profile,
            self.provider.advice_confidence(),
        );
        let reasoning = build_reasoning(market, profile);
        let suggestions = recommendations.next_steps.clone();
        let content = render_content(&recommendations, profile);
        let confidence = recommendations.confidence;

        AdvisorResponse::new(
            ResponseKind::Recommendation,
            content,
            confidence,
            ResponseData::Recommendation(recommendations),
        )
        .with_reasoning(reasoning)
        .with_suggestions(suggestions)
    }
}

fn build_recommendations(
    strategies: &[&str],
    market: &MarketContext,
    profile: &UserProfile,
    confidence: f64,
) -> RecommendationSet {
    let primary = strategies.first().map_or_else(
        || "a diversified, periodically rebalanced portfolio".to_string(),
        |s| (*s).to_string(),
    );

    RecommendationSet {
        primary: format!(
            "Given your {} risk tolerance and the current {} market, I recommend focusing on \
             {}. This approach aligns with your {} goals while managing risk appropriately.",
            profile.risk_tolerance,
            market.current_market,
            primary,
            profile.goals_phrase()
        ),
        secondary: strategies
            .iter()
            .skip(1)
            .take(2)
            .map(|s| (*s).to_string())
            .collect(),
        risk_management: risk_management_items(profile.risk_tolerance),
        next_steps: next_steps(),
        confidence,
    }
}

/// Three universal items plus at most one conditioned on risk tolerance.
fn risk_management_items(risk: RiskTolerance) -> Vec<String> {
    let mut items = vec![
        "Set stop-loss orders at 10-15% below entry price".to_string(),
        "Diversify across at least 10-15 different positions".to_string(),
        "Regularly rebalance your portfolio quarterly".to_string(),
    ];

    match risk {
        RiskTolerance::Aggressive => {
            items.push("Consider using options for hedging".to_string());
        }
        RiskTolerance::Conservative => {
            items.push("Maintain higher cash allocation (20-30%)".to_string());
        }
        RiskTolerance::Moderate => {}
    }

    items
}

fn next_steps() -> Vec<String> {
    vec![
        "Review your current portfolio allocation".to_string(),
        "Identify specific stocks or funds to implement the strategy".to_string(),
        "Set up monitoring and rebalancing schedule".to_string(),
        "Consider consulting with a financial advisor for personalized guidance".to_string(),
    ]
}

fn build_reasoning(market: &MarketContext, profile: &UserProfile) -> Vec<String> {
    vec![
        format!(
            "Strategy aligns with your {} risk profile",
            profile.risk_tolerance
        ),
        format!(
            "Current {} market conditions favor this approach",
            market.current_market
        ),
        format!(
            "Time horizon of {} supports this strategy",
            profile.time_horizon
        ),
        format!(
            "Portfolio size of {} allows for proper diversification",
            profile.portfolio_size
        ),
    ]
}

fn numbered(items: &[String]) -> String {
    items
        .iter()
        .enumerate()
        .map(|(i, item)| format!("{}. {item}", i + 1))
        .collect::<Vec<_>>()
        .join("\n")
}

fn render_content(recommendations: &RecommendationSet, profile: &UserProfile) -> String {
    format!(
        "Based on your {risk} risk profile and {goals} goals, here are my recommendations:\n\n\
         **Primary Recommendation:**\n\
         {primary}\n\n\
         **Secondary Options:**\n\
         {secondary}\n\n\
         **Risk Management:**\n\
         {risk_management}\n\n\
         **Next Steps:**\n\
         {next_steps}\n\n\
         **Confidence Level:** {confidence:.0}%\n\n\
         *These recommendations are tailored to your specific profile and current market \
         conditions. Please consider your individual circumstances before making investment \
         decisions.*",
        risk = profile.risk_tolerance,
        goals = profile.goals_phrase(),
        primary = recommendations.primary,
        secondary = numbered(&recommendations.secondary),
        risk_management = numbered(&recommendations.risk_management),
        next_steps = numbered(&recommendations.next_steps),
        confidence = recommendations.confidence * 100.0,
    )
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::context::market_presets;
    use crate::test_support::FixedProvider;

    fn generate(risk: RiskTolerance) -> AdvisorResponse {
        let generator = RecommendationGenerator::new(
            Arc::new(KnowledgeBase::new()),
            Arc::new(FixedProvider::default()),
        );
        let market = &market_presets()[0];
        let profile = UserProfile {
            risk_tolerance: risk,
            ..UserProfile::default()
        };
        generator.generate("recommend something", market, &profile)
    }

    fn recommendation_set(response: &AdvisorResponse) -> &RecommendationSet {
        match &response.data {
            ResponseData::Recommendation(set) => set,
            other => panic!("expected recommendation payload, got {other:?}"),
        }
    }

    #[test]
    fn test_primary_uses_first_strategy_for_risk() {
        let response = generate(RiskTolerance::Conservative);
        let set = recommendation_set(&response);

        assert!(set.primary.contains("conservative"));
        assert!(set.primary.contains("Focus on dividend-paying stocks"));
        assert!(set.primary.contains("retirement and wealth_building"));
    }

    #[test]
    fn test_secondary_takes_two_strategies() {
        let response = generate(RiskTolerance::Moderate);
        let set = recommendation_set(&response);

        assert_eq!(set.secondary.len(), 2);
        assert_eq!(set.secondary[0], "Mix of growth and value stocks");
        assert_eq!(set.secondary[1], "Regular rebalancing");
    }

    #[test]
    fn test_risk_management_conditional_item() {
        let aggressive = generate(RiskTolerance::Aggressive);
        let items = &recommendation_set(&aggressive).risk_management;
        assert_eq!(items.len(), 4);
        assert!(items[3].contains("options for hedging"));

        let conservative = generate(RiskTolerance::Conservative);
        let items = &recommendation_set(&conservative).risk_management;
        assert_eq!(items.len(), 4);
        assert!(items[3].contains("cash allocation"));

        let moderate = generate(RiskTolerance::Moderate);
        assert_eq!(recommendation_set(&moderate).risk_management.len(), 3);
    }

    #[test]
    fn test_reasoning_and_suggestions_shape() {
        let response = generate(RiskTolerance::Moderate);
        assert_eq!(response.kind, ResponseKind::Recommendation);
        assert_eq!(response.reasoning.len(), 4);
        assert_eq!(response.suggestions.len(), 4);
        assert!((0.0..=1.0).contains(&response.confidence));
    }

    #[test]
    fn test_content_renders_sections() {
        let response = generate(RiskTolerance::Aggressive);
        for section in [
            "**Primary Recommendation:**",
            "**Secondary Options:**",
            "**Risk Management:**",
            "**Next Steps:**",
            "**Confidence Level:**",
        ] {
            assert!(response.content.contains(section), "missing {section}");
        }
    }
}
