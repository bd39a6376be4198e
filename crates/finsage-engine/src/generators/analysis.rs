//! Analysis generator
//!
//! Composes three independent sub-analyses (technical, fundamental,
//! sentiment) into a full work-up of a symbol, or of the market at large
//! when the query names no known ticker.

use std::sync::Arc;

use finsage_core::market::MarketContext;
use finsage_core::profile::{RiskTolerance, UserProfile};
use finsage_core::provider::AnalysisProvider;
use finsage_core::response::{
    AdvisorResponse, BandPosition, FundamentalSnapshot, ResponseData, ResponseKind,
    SentimentSnapshot, TechnicalSnapshot, TrendDirection, VolumeLevel,
};

use super::MARKET_WIDE;
use crate::router;

/// Generator for the `Analysis` intent
pub struct AnalysisGenerator {
    provider: Arc<dyn AnalysisProvider>,
}

impl AnalysisGenerator {
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
        tracing::debug!(symbol, "generating analysis response");

        let technical = self.provider.technical(symbol);
        let fundamental = self.provider.fundamental(symbol);
        let sentiment = self.provider.sentiment(symbol);

        let signals = technical_signals(&technical);
        let confidence = composite_confidence(&technical, &fundamental, &sentiment);
        let reasoning = build_reasoning(&technical, &fundamental, &sentiment);
        let suggestions = build_suggestions(symbol, &technical, profile);
        let content = render_content(symbol, &technical, &fundamental, &sentiment, market);

        AdvisorResponse::new(
            ResponseKind::Analysis,
            content,
            confidence,
            ResponseData::Analysis {
                technical,
                fundamental,
                sentiment,
                signals,
            },
        )
        .with_reasoning(reasoning)
        .with_suggestions(suggestions)
    }
}

/// Mean of three sub-confidences, each 0.8 when its driving metric sits in
/// its normal band and 0.6 otherwise.
fn composite_confidence(
    technical: &TechnicalSnapshot,
    fundamental: &FundamentalSnapshot,
    sentiment: &SentimentSnapshot,
) -> f64 {
    let technical_confidence = if technical.rsi > 30.0 && technical.rsi < 70.0 {
        0.8
    } else {
        0.6
    };
    let fundamental_confidence = if fundamental.earnings_growth > 0.0 {
        0.8
    } else {
        0.6
    };
    let sentiment_confidence = if sentiment.overall > 0.4 && sentiment.overall < 0.8 {
        0.8
    } else {
        0.6
    };

    (technical_confidence + fundamental_confidence + sentiment_confidence) / 3.0
}

/// Exactly four reasoning lines reflecting the sub-analysis values.
fn build_reasoning(
    technical: &TechnicalSnapshot,
    fundamental: &FundamentalSnapshot,
    sentiment: &SentimentSnapshot,
) -> Vec<String> {
    vec![
        format!("Technical indicators show {} momentum", technical.trend),
        format!(
            "Fundamental metrics indicate {} earnings growth",
            if fundamental.earnings_growth > 0.0 {
                "positive"
            } else {
                "negative"
            }
        ),
        format!(
            "Market sentiment is {} at {:.0}%",
            if sentiment.overall > 0.5 {
                "positive"
            } else {
                "negative"
            },
            sentiment.overall * 100.0
        ),
        format!(
            "Current volatility levels suggest {} market activity",
            match technical.volume {
                VolumeLevel::High => "increased",
                VolumeLevel::Normal => "normal",
            }
        ),
    ]
}

/// At least four suggestions: trend tilt, one risk-tolerance tilt, then the
/// two universal risk suggestions, in that order.
fn build_suggestions(
    symbol: &str,
    technical: &TechnicalSnapshot,
    profile: &UserProfile,
) -> Vec<String> {
    let mut suggestions = Vec::new();

    match technical.trend {
        TrendDirection::Bullish => {
            suggestions.push(format!("Consider {symbol} for growth potential"));
        }
        TrendDirection::Bearish => {
            suggestions.push(format!("Monitor {symbol} for better entry points"));
        }
    }

    match profile.risk_tolerance {
        RiskTolerance::Conservative => {
            suggestions.push("Focus on dividend-paying stocks".to_string());
        }
        RiskTolerance::Aggressive => {
            suggestions.push("Consider options strategies for leverage".to_string());
        }
        RiskTolerance::Moderate => {
            suggestions.push("Maintain a balanced mix of growth and value positions".to_string());
        }
    }

    suggestions.push("Set stop-loss orders to manage risk".to_string());
    suggestions.push("Diversify across different sectors".to_string());

    suggestions
}

/// Actionable signal strings derived from the indicators.
///
/// The RSI branches are unreachable with the simulated provider (its draws
/// stay inside 30-70) but real providers are not so constrained.
fn technical_signals(technical: &TechnicalSnapshot) -> Vec<String> {
    let mut signals = Vec::new();

    if technical.rsi < 30.0 {
        signals.push("Oversold signal - potential buying opportunity".to_string());
    }
    if technical.rsi > 70.0 {
        signals.push("Overbought signal - consider taking profits".to_string());
    }
    if technical.macd > 0.0 {
        signals.push("MACD bullish crossover".to_string());
    }
    if technical.volume == VolumeLevel::High {
        signals.push("High volume confirms price movement".to_string());
    }

    signals
}

fn band_implication(position: BandPosition) -> &'static str {
    match position {
        BandPosition::Upper => "potential resistance",
        BandPosition::Lower => "potential support",
        BandPosition::Middle => "neutral positioning",
    }
}

fn technical_summary(technical: &TechnicalSnapshot) -> String {
    format!(
        "The technical analysis reveals {} momentum with {} volume. \
         The stock is trading near the {} Bollinger Band, suggesting {}.",
        technical.trend,
        technical.volume,
        technical.bollinger,
        band_implication(technical.bollinger)
    )
}

fn fundamental_summary(fundamental: &FundamentalSnapshot) -> String {
    format!(
        "Fundamental analysis shows a company with {} financial health, \
         {} revenue, and {} profitability metrics.",
        if fundamental.roe >= 14.0 { "strong" } else { "moderate" },
        if fundamental.revenue_growth > 0.0 { "growing" } else { "stable" },
        if fundamental.earnings_growth > 0.0 { "improving" } else { "consistent" },
    )
}

fn sentiment_summary(sentiment: &SentimentSnapshot) -> String {
    format!(
        "Sentiment analysis indicates {} market sentiment with {} analyst \
         coverage and {} social media buzz.",
        if sentiment.overall > 0.5 { "positive" } else { "mixed" },
        if sentiment.analyst > 0.6 { "strong" } else { "moderate" },
        if sentiment.social > 0.5 { "increasing" } else { "stable" },
    )
}

fn render_content(
    symbol: &str,
    technical: &TechnicalSnapshot,
    fundamental: &FundamentalSnapshot,
    sentiment: &SentimentSnapshot,
    market: &MarketContext,
) -> String {
    let rsi_condition = if technical.rsi > 70.0 {
        "overbought"
    } else if technical.rsi < 30.0 {
        "oversold"
    } else {
        "neutral"
    };
    let macd_direction = if technical.macd > 0.0 { "bullish" } else { "bearish" };
    let valuation = if fundamental.pe < 15.0 {
        "undervalued"
    } else if fundamental.pe > 25.0 {
        "overvalued"
    } else {
        "fairly valued"
    };
    let performance = if fundamental.earnings_growth > 10.0 {
        "strong"
    } else {
        "moderate"
    };

    format!(
        "Based on my comprehensive analysis of {symbol}, here's what I'm seeing:\n\n\
         **Technical Analysis:**\n\
         {tech} The RSI is at {rsi:.1}, indicating {rsi_condition} conditions. \
         The MACD shows {macd_direction} momentum, and the stock is trading near the \
         {band} Bollinger Band.\n\n\
         **Fundamental Analysis:**\n\
         {fund} The P/E ratio of {pe:.1} suggests {valuation} conditions. \
         Revenue growth of {revenue:.1}% and earnings growth of {earnings:.1}% indicate \
         {performance} business performance.\n\n\
         **Market Sentiment:**\n\
         {sent} Overall sentiment is {overall:.0}% positive, with news sentiment at \
         {news:.0}% and analyst sentiment at {analyst:.0}%.\n\n\
         **Market Context:**\n\
         We're currently in a {phase} market with {volatility} volatility. \
         This environment typically favors {style} strategies.",
        tech = technical_summary(technical),
        rsi = technical.rsi,
        band = technical.bollinger,
        fund = fundamental_summary(fundamental),
        pe = fundamental.pe,
        revenue = fundamental.revenue_growth,
        earnings = fundamental.earnings_growth,
        sent = sentiment_summary(sentiment),
        overall = sentiment.overall * 100.0,
        news = sentiment.news * 100.0,
        analyst = sentiment.analyst * 100.0,
        phase = market.current_market,
        volatility = market.volatility,
        style = market.strategy_style(),
    )
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::context::market_presets;
    use crate::test_support::FixedProvider;

    fn make_generator(provider: FixedProvider) -> AnalysisGenerator {
        AnalysisGenerator::new(Arc::new(provider))
    }

    #[test]
    fn test_reasoning_has_exactly_four_entries() {
        let generator = make_generator(FixedProvider::default());
        let market = &market_presets()[0];
        let response = generator.generate("analyze AAPL", market, &UserProfile::default());

        assert_eq!(response.kind, ResponseKind::Analysis);
        assert_eq!(response.reasoning.len(), 4);
    }

    #[test]
    fn test_suggestion_order_and_floor() {
        let generator = make_generator(FixedProvider::bullish());
        let market = &market_presets()[0];

        let profile = UserProfile {
            risk_tolerance: RiskTolerance::Conservative,
            ..UserProfile::default()
        };
        let response = generator.generate("analyze NVDA", market, &profile);

        assert!(response.suggestions.len() >= 4);
        assert_eq!(response.suggestions[0], "Consider NVDA for growth potential");
        assert_eq!(response.suggestions[1], "Focus on dividend-paying stocks");
        assert_eq!(
            response.suggestions[response.suggestions.len() - 2],
            "Set stop-loss orders to manage risk"
        );
        assert_eq!(
            response.suggestions[response.suggestions.len() - 1],
            "Diversify across different sectors"
        );
    }

    #[test]
    fn test_moderate_profile_gets_balanced_tilt() {
        let generator = make_generator(FixedProvider::bearish());
        let market = &market_presets()[2];
        let response = generator.generate("analysis please", market, &UserProfile::default());

        assert_eq!(response.suggestions.len(), 4);
        assert!(response.suggestions[0].starts_with("Monitor"));
        assert!(response.suggestions[1].contains("balanced mix"));
    }

    #[test]
    fn test_unknown_symbol_falls_back_to_market() {
        let generator = make_generator(FixedProvider::default());
        let market = &market_presets()[0];
        let response = generator.generate("analyze something", market, &UserProfile::default());

        assert!(response.content.contains("the market"));
    }

    #[test]
    fn test_confidence_formula() {
        // All three metrics inside their normal bands: (0.8 * 3) / 3
        let generator = make_generator(FixedProvider::default());
        let market = &market_presets()[0];
        let response = generator.generate("analyze AAPL", market, &UserProfile::default());
        assert!((response.confidence - 0.8).abs() < 1e-9);

        // Negative earnings growth drags one component to 0.6
        let generator2 = make_generator(FixedProvider::bearish());
        let response = generator2.generate("analyze AAPL", market, &UserProfile::default());
        assert!((response.confidence - (0.8 + 0.6 + 0.8) / 3.0).abs() < 1e-9);
    }

    #[test]
    fn test_confidence_always_in_unit_interval() {
        let generator = make_generator(FixedProvider::out_of_band());
        let market = &market_presets()[1];
        let response = generator.generate("analyze SPY", market, &UserProfile::default());
        assert!((0.0..=1.0).contains(&response.confidence));
    }

    #[test]
    fn test_out_of_band_rsi_produces_signal() {
        let generator = make_generator(FixedProvider::out_of_band());
        let market = &market_presets()[0];
        let response = generator.generate("analyze SPY", market, &UserProfile::default());

        match &response.data {
            ResponseData::Analysis { signals, .. } => {
                assert!(signals.iter().any(|s| s.contains("Overbought")));
            }
            other => panic!("expected analysis payload, got {other:?}"),
        }
    }

    #[test]
    fn test_content_sections_render() {
        let generator = make_generator(FixedProvider::default());
        let market = &market_presets()[0];
        let response = generator.generate("analyze AAPL", market, &UserProfile::default());

        for section in [
            "**Technical Analysis:**",
            "**Fundamental Analysis:**",
            "**Market Sentiment:**",
            "**Market Context:**",
        ] {
            assert!(response.content.contains(section), "missing {section}");
        }
        assert!(response.content.contains("AAPL"));
    }
}
