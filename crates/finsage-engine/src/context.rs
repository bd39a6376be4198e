//! Market context presets
//!
//! The engine runs against a snapshot of market conditions. When the caller
//! does not inject one, a preset is sampled uniformly at construction from
//! three regimes covering a rallying, a contracting, and a drifting tape.

use finsage_core::market::{
    EconomicIndicators, MarketContext, MarketPhase, MarketSentiment, SectorTrend, VolatilityLevel,
};
use rand::Rng;
use std::collections::HashMap;

fn sector_map(entries: &[(&str, SectorTrend)]) -> HashMap<String, SectorTrend> {
    entries
        .iter()
        .map(|(name, trend)| ((*name).to_string(), *trend))
        .collect()
}

fn bull_context() -> MarketContext {
    MarketContext {
        current_market: MarketPhase::Bull,
        sentiment: MarketSentiment::Positive,
        volatility: VolatilityLevel::Medium,
        sector_trends: sector_map(&[
            ("Technology", SectorTrend::Up),
            ("Healthcare", SectorTrend::Stable),
            ("Financials", SectorTrend::Up),
            ("Energy", SectorTrend::Down),
            ("Consumer", SectorTrend::Stable),
        ]),
        key_events: vec![
            "Fed signals potential rate cuts".to_string(),
            "AI sector showing strong momentum".to_string(),
            "Earnings season exceeding expectations".to_string(),
            "Geopolitical tensions easing".to_string(),
        ],
        economic_indicators: EconomicIndicators {
            inflation: 3.2,
            interest_rates: 5.25,
            gdp: 2.8,
            unemployment: 3.7,
        },
    }
}

fn bear_context() -> MarketContext {
    MarketContext {
        current_market: MarketPhase::Bear,
        sentiment: MarketSentiment::Negative,
        volatility: VolatilityLevel::High,
        sector_trends: sector_map(&[
            ("Technology", SectorTrend::Down),
            ("Healthcare", SectorTrend::Down),
            ("Financials", SectorTrend::Down),
            ("Energy", SectorTrend::Up),
            ("Consumer", SectorTrend::Down),
        ]),
        key_events: vec![
            "Recession concerns mounting".to_string(),
            "Corporate earnings declining".to_string(),
            "Inflation remains elevated".to_string(),
            "Global supply chain disruptions".to_string(),
        ],
        economic_indicators: EconomicIndicators {
            inflation: 6.8,
            interest_rates: 7.5,
            gdp: -1.2,
            unemployment: 5.2,
        },
    }
}

fn sideways_context() -> MarketContext {
    MarketContext {
        current_market: MarketPhase::Sideways,
        sentiment: MarketSentiment::Neutral,
        volatility: VolatilityLevel::Low,
        sector_trends: sector_map(&[
            ("Technology", SectorTrend::Stable),
            ("Healthcare", SectorTrend::Stable),
            ("Financials", SectorTrend::Stable),
            ("Energy", SectorTrend::Stable),
            ("Consumer", SectorTrend::Stable),
        ]),
        key_events: vec![
            "Market consolidation phase".to_string(),
            "Mixed economic signals".to_string(),
            "Sector rotation occurring".to_string(),
            "Uncertainty about future direction".to_string(),
        ],
        economic_indicators: EconomicIndicators {
            inflation: 4.1,
            interest_rates: 5.5,
            gdp: 1.5,
            unemployment: 4.1,
        },
    }
}

/// All shipped market context presets
pub fn market_presets() -> Vec<MarketContext> {
    vec![bull_context(), bear_context(), sideways_context()]
}

/// Draw one preset uniformly
pub fn sample_market_context() -> MarketContext {
    let presets = market_presets();
    let index = rand::thread_rng().gen_range(0..presets.len());
    presets
        .into_iter()
        .nth(index)
        .unwrap_or_else(bull_context)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_three_presets() {
        let presets = market_presets();
        assert_eq!(presets.len(), 3);

        let phases: Vec<_> = presets.iter().map(|p| p.current_market).collect();
        assert!(phases.contains(&MarketPhase::Bull));
        assert!(phases.contains(&MarketPhase::Bear));
        assert!(phases.contains(&MarketPhase::Sideways));
    }

    #[test]
    fn test_presets_are_fully_populated() {
        for preset in market_presets() {
            assert_eq!(preset.sector_trends.len(), 5);
            assert_eq!(preset.key_events.len(), 4);
            assert!(preset.sector_trends.keys().all(|k| !k.is_empty()));
        }
    }

    #[test]
    fn test_sampled_context_is_a_preset() {
        let presets = market_presets();
        for _ in 0..20 {
            let sampled = sample_market_context();
            assert!(presets.contains(&sampled));
        }
    }

    #[test]
    fn test_bear_preset_values() {
        let bear = bear_context();
        assert_eq!(bear.volatility, VolatilityLevel::High);
        assert!((bear.economic_indicators.gdp - -1.2).abs() < f64::EPSILON);
        assert_eq!(
            bear.sector_trends.get("Energy"),
            Some(&SectorTrend::Up)
        );
    }
}
