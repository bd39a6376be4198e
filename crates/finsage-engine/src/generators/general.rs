//! General (fallback) generator
//!
//! Unreachable through the router, which falls back to the analysis intent
//! instead. Kept as the defensive default for dispatch: if intent
//! resolution ever grows a path that yields [`crate::router::Intent::General`],
//! callers still get a coherent market-insights reply rather than a panic.

use finsage_core::market::MarketContext;
use finsage_core::profile::UserProfile;
use finsage_core::response::{
    AdvisorResponse, MarketInsights, ResponseData, ResponseKind,
};

/// Fixed confidence for generic market commentary
const GENERAL_CONFIDENCE: f64 = 0.75;

/// Defensive fallback generator
#[derive(Debug, Default)]
pub struct GeneralGenerator;

impl GeneralGenerator {
    pub fn new() -> Self {
        Self
    }

    pub fn generate(
        &self,
        input: &str,
        market: &MarketContext,
        profile: &UserProfile,
    ) -> AdvisorResponse {
        tracing::debug!("generating general fallback response");

        let insights = build_insights(market, profile);
        let reasoning = insights.key_points.clone();
        let suggestions = insights.suggestions.clone();
        let content = render_content(input, &insights, market);

        // Reports `Analysis`: the fallback has no wire type of its own.
        AdvisorResponse::new(
            ResponseKind::Analysis,
            content,
            GENERAL_CONFIDENCE,
            ResponseData::Insights(insights),
        )
        .with_reasoning(reasoning)
        .with_suggestions(suggestions)
    }
}

fn build_insights(market: &MarketContext, profile: &UserProfile) -> MarketInsights {
    let highlighted = market
        .key_events
        .iter()
        .take(2)
        .cloned()
        .collect::<Vec<_>>()
        .join(" and ");

    let mut suggestions = vec![
        "Monitor key economic indicators".to_string(),
        "Consider sector rotation opportunities".to_string(),
        "Maintain appropriate risk management".to_string(),
        "Stay informed about market developments".to_string(),
    ];
    suggestions.push(format!(
        "Consider {} investment strategies",
        profile.risk_tolerance
    ));
    suggestions.push(format!("Focus on your {} goals", profile.goals_phrase()));
    suggestions.push(format!(
        "Maintain your {} time horizon perspective",
        profile.time_horizon
    ));

    MarketInsights {
        summary: format!(
            "Current market analysis shows a {} market with {} volatility. Key events include \
             {highlighted}.",
            market.current_market, market.volatility
        ),
        key_points: market.key_events.clone(),
        suggestions,
    }
}

fn numbered(items: &[String]) -> String {
    items
        .iter()
        .enumerate()
        .map(|(i, item)| format!("{}. {item}", i + 1))
        .collect::<Vec<_>>()
        .join("\n")
}

fn render_content(input: &str, insights: &MarketInsights, market: &MarketContext) -> String {
    format!(
        "I understand you're asking about \"{input}\". Let me provide some insights based on \
         current market conditions:\n\n\
         {summary}\n\n\
         **Key Market Insights:**\n\
         {key_points}\n\n\
         **Personalized Suggestions:**\n\
         {suggestions}\n\n\
         **Current Market Context:**\n\
         We're experiencing a {phase} market with {volatility} volatility. The overall \
         sentiment is {sentiment}, which typically indicates {implications}.\n\n\
         *Feel free to ask more specific questions about any of these topics, and I'll \
         provide detailed analysis tailored to your needs.*",
        summary = insights.summary,
        key_points = numbered(&insights.key_points),
        suggestions = numbered(&insights.suggestions),
        phase = market.current_market,
        volatility = market.volatility,
        sentiment = market.sentiment,
        implications = market.implications(),
    )
}
