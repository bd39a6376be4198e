//! Terminal rendering for advisor responses

use finsage_core::market::MarketContext;
use finsage_core::response::AdvisorResponse;

/// Render a response for the terminal: content, confidence, follow-ups.
pub fn render_response(response: &AdvisorResponse) -> String {
    let mut output = String::new();

    output.push_str(&response.content);
    output.push_str(&format!(
        "\n\n[{} | confidence {:.0}%]\n",
        response.kind,
        response.confidence * 100.0
    ));

    if !response.suggestions.is_empty() {
        output.push_str("\nYou could ask next:\n");
        for suggestion in &response.suggestions {
            output.push_str(&format!("  - {suggestion}\n"));
        }
    }

    output
}

/// Render the market context the engine is running against.
pub fn render_context(market: &MarketContext) -> String {
    let mut output = format!(
        "Market: {} | Sentiment: {} | Volatility: {}\n",
        market.current_market, market.sentiment, market.volatility
    );

    output.push_str("Sectors:\n");
    let mut sectors: Vec<_> = market.sector_trends.iter().collect();
    sectors.sort_by_key(|(name, _)| (*name).clone());
    for (name, trend) in sectors {
        output.push_str(&format!("  {name}: {trend}\n"));
    }

    output.push_str("Key events:\n");
    for event in &market.key_events {
        output.push_str(&format!("  - {event}\n"));
    }

    let indicators = &market.economic_indicators;
    output.push_str(&format!(
        "Indicators: inflation {:.1}% | rates {:.2}% | GDP {:.1}% | unemployment {:.1}%\n",
        indicators.inflation, indicators.interest_rates, indicators.gdp, indicators.unemployment
    ));

    output
}

/// One line per past response, oldest first.
pub fn render_history(entries: &[AdvisorResponse]) -> String {
    if entries.is_empty() {
        return "No conversation history yet.\n".to_string();
    }

    let mut output = String::new();
    for (i, entry) in entries.iter().enumerate() {
        output.push_str(&format!("{}. {}\n", i + 1, entry.summary()));
    }
    output
}
