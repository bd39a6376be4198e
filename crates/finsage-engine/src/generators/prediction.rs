//! Prediction generator
//!
//! Wraps the provider's thirty-day outlook into prose with a fixed section
//! order: direction sentence, key figures, reasoning, the three risk
//! scenarios, disclaimer.

use std::sync::Arc;

use finsage_core::market::MarketContext;
use finsage_core::profile::UserProfile;
use finsage_core::provider::AnalysisProvider;
use finsage_core::response::{AdvisorResponse, PredictionOutlook, ResponseData, ResponseKind};

use super::MARKET_WIDE;
use crate::router;

/// Generator for the `Prediction` intent
pub struct PredictionGenerator {
    provider: Arc<dyn AnalysisProvider>,
}

impl PredictionGenerator {
    pub fn new(provider: Arc<dyn AnalysisProvider>) -> Self {
        Self { provider }
    }

    pub fn generate(
        &self,
        input: &str,
        market: &MarketContext,
        profile: &UserProfile,
    ) -> AdvisorResponse {
        let symbol = router::extract_symbol(input).unwrap_or(MARKET_WIDE);
        tracing::debug!(symbol, "generating prediction response");

        let outlook = self.provider.outlook(symbol, market);
        let confidence = outlook.confidence;
        let reasoning = build_reasoning(symbol, market, &outlook);
        let suggestions = build_suggestions(&outlook, profile);
        let content = render_content(symbol, &outlook, &reasoning);

        AdvisorResponse::new(
            ResponseKind::Prediction,
            content,
            confidence,
            ResponseData::Prediction(outlook),
        )
        .with_reasoning(reasoning)
        .with_suggestions(suggestions)
    }
}

/// Reasoning is derived from the market regime; it is never empty.
fn build_reasoning(
    symbol: &str,
    market: &MarketContext,
    outlook: &PredictionOutlook,
) -> Vec<String> {
    vec![
        format!(
            "Current {} market conditions anchor the base return outlook for {symbol}",
            market.current_market
        ),
        format!(
            "Market sentiment is {} with {} volatility",
            market.sentiment, market.volatility
        ),
        format!(
            "The scenario spread reflects an expected volatility of {:.0}%",
            outlook.volatility * 100.0
        ),
        format!(
            "Economic backdrop: inflation {:.1}%, rates {:.2}%, GDP growth {:.1}%",
            market.economic_indicators.inflation,
            market.economic_indicators.interest_rates,
            market.economic_indicators.gdp
        ),
    ]
}

fn build_suggestions(outlook: &PredictionOutlook, profile: &UserProfile) -> Vec<String> {
    let mut suggestions = Vec::new();

    if outlook.expected_return > 0.0 {
        suggestions.push("Consider staged entries to capture the projected upside".to_string());
    } else {
        suggestions.push("Wait for confirmation before adding exposure".to_string());
    }

    suggestions.push(format!(
        "Size positions to tolerate {:.0}% swings",
        outlook.volatility * 100.0
    ));
    suggestions.push("Set stop-loss orders to manage downside risk".to_string());
    suggestions.push(format!(
        "Revisit the forecast as new data arrives over your {} time horizon",
        profile.time_horizon
    ));

    suggestions
}

fn render_content(symbol: &str, outlook: &PredictionOutlook, reasoning: &[String]) -> String {
    let direction = if outlook.expected_return > 0.0 {
        "upward"
    } else {
        "downward"
    };
    let magnitude = outlook.expected_return.abs() * 100.0;

    let reasoning_lines = reasoning
        .iter()
        .enumerate()
        .map(|(i, line)| format!("{}. {line}", i + 1))
        .collect::<Vec<_>>()
        .join("\n");

    let scenario_lines = outlook
        .scenarios
        .iter()
        .enumerate()
        .map(|(i, scenario)| {
            format!(
                "{}. {}: {}% probability, {}{:.1}% return",
                i + 1,
                scenario.name,
                scenario.probability,
                if scenario.expected_return > 0.0 { "+" } else { "" },
                scenario.expected_return * 100.0
            )
        })
        .collect::<Vec<_>>()
        .join("\n");

    format!(
        "My models predict {symbol} will move {direction} by approximately {magnitude:.1}% \
         over the next {timeframe}.\n\n\
         **Key Predictions:**\n\
         • Price Target: ${price_target:.2}\n\
         • Expected Return: {expected_return:.1}%\n\
         • Confidence Level: {confidence:.0}%\n\
         • Volatility: {volatility:.1}%\n\n\
         **Reasoning:**\n\
         {reasoning_lines}\n\n\
         **Risk Scenarios:**\n\
         {scenario_lines}\n\n\
         *Note: All predictions are based on historical data and current market conditions. \
         Past performance does not guarantee future results.*",
        timeframe = outlook.timeframe,
        price_target = outlook.price_target,
        expected_return = outlook.expected_return * 100.0,
        confidence = outlook.confidence * 100.0,
        volatility = outlook.volatility * 100.0,
    )
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::context::market_presets;
    use crate::test_support::FixedProvider;

    fn generate(query: &str, market_index: usize) -> AdvisorResponse {
        let generator = PredictionGenerator::new(Arc::new(FixedProvider::default()));
        let market = &market_presets()[market_index];
        generator.generate(query, market, &UserProfile::default())
    }

    #[test]
    fn test_kind_and_nonempty_reasoning() {
        let response = generate("predict TSLA", 0);
        assert_eq!(response.kind, ResponseKind::Prediction);
        assert!(!response.reasoning.is_empty());
        assert!(!response.suggestions.is_empty());
    }

    #[test]
    fn test_scenarios_sum_to_100() {
        let response = generate("forecast AAPL", 1);
        match &response.data {
            ResponseData::Prediction(outlook) => {
                let total: u32 = outlook
                    .scenarios
                    .iter()
                    .map(|s| u32::from(s.probability))
                    .sum();
                assert_eq!(total, 100);
            }
            other => panic!("expected prediction payload, got {other:?}"),
        }
    }

    #[test]
    fn test_bull_market_base_return() {
        // FixedProvider applies no perturbation: bull base is exactly 0.15
        let response = generate("predict SPY", 0);
        match &response.data {
            ResponseData::Prediction(outlook) => {
                assert!((outlook.expected_return - 0.15).abs() < f64::EPSILON);
            }
            other => panic!("expected prediction payload, got {other:?}"),
        }
    }

    #[test]
    fn test_bear_market_reads_downward() {
        let response = generate("forecast QQQ", 1);
        assert!(response.content.contains("downward"));
        assert!(response.content.contains("Bear Case"));
    }

    #[test]
    fn test_content_section_order() {
        let response = generate("predict NVDA for me", 0);
        let content = &response.content;

        let target = content.find("Price Target").expect("price target");
        let ret = content.find("Expected Return").expect("expected return");
        let conf = content.find("Confidence Level").expect("confidence");
        let vol = content.find("Volatility:").expect("volatility");
        let scenarios = content.find("Risk Scenarios").expect("scenarios");

        assert!(target < ret && ret < conf && conf < vol && vol < scenarios);
        assert!(content.contains("Past performance does not guarantee future results"));
    }
}
