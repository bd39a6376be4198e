//! Simulated analysis provider
//!
//! Draws every figure uniformly from the ranges documented on the snapshot
//! types in `finsage-core`. This is the stand-in for real inference: it
//! produces plausible, bounded numbers with no relationship to actual
//! markets, which is exactly what the demo product needs.

use finsage_core::market::{MarketContext, MarketPhase, VolatilityLevel};
use finsage_core::provider::AnalysisProvider;
use finsage_core::response::{
    BandPosition, FundamentalSnapshot, PredictionOutlook, Rating, Scenario, SentimentSnapshot,
    TechnicalSnapshot, TrendDirection, VolumeLevel,
};
use rand::Rng;

/// Expected 30-day return baseline for a market phase
pub(crate) fn base_return(phase: MarketPhase) -> f64 {
    match phase {
        MarketPhase::Bull => 0.15,
        MarketPhase::Bear => -0.10,
        MarketPhase::Sideways | MarketPhase::Volatile => 0.05,
    }
}

/// Outlook volatility for a volatility regime
pub(crate) fn outlook_volatility(level: VolatilityLevel) -> f64 {
    match level {
        VolatilityLevel::High => 0.30,
        VolatilityLevel::Low => 0.15,
        VolatilityLevel::Medium | VolatilityLevel::Extreme => 0.25,
    }
}

/// Provider backed by bounded uniform draws
#[derive(Debug, Clone, Copy, Default)]
pub struct SimulatedAnalysisProvider;

impl SimulatedAnalysisProvider {
    pub fn new() -> Self {
        Self
    }
}

impl AnalysisProvider for SimulatedAnalysisProvider {
    fn technical(&self, _symbol: &str) -> TechnicalSnapshot {
        let mut rng = rand::thread_rng();

        // Price sits near the upper band half the time, split the rest
        let bollinger = if rng.gen_bool(0.5) {
            BandPosition::Upper
        } else if rng.gen_bool(0.5) {
            BandPosition::Lower
        } else {
            BandPosition::Middle
        };

        TechnicalSnapshot {
            rsi: rng.gen_range(30.0..70.0),
            macd: rng.gen_range(-1.0..1.0),
            bollinger,
            support: rng.gen_range(100.0..150.0),
            resistance: rng.gen_range(150.0..200.0),
            trend: if rng.gen_bool(0.5) {
                TrendDirection::Bullish
            } else {
                TrendDirection::Bearish
            },
            volume: if rng.gen_bool(0.5) {
                VolumeLevel::High
            } else {
                VolumeLevel::Normal
            },
        }
    }

    fn fundamental(&self, _symbol: &str) -> FundamentalSnapshot {
        let mut rng = rand::thread_rng();

        let rating = match rng.gen_range(0..5) {
            0 => Rating::StrongBuy,
            1 => Rating::Buy,
            2 => Rating::Hold,
            3 => Rating::Sell,
            _ => Rating::StrongSell,
        };

        FundamentalSnapshot {
            pe: rng.gen_range(15.0..35.0),
            peg: rng.gen_range(0.8..1.6),
            debt_to_equity: rng.gen_range(0.0..0.8),
            roe: rng.gen_range(8.0..20.0),
            revenue_growth: rng.gen_range(-5.0..15.0),
            earnings_growth: rng.gen_range(-10.0..15.0),
            dividend_yield: rng.gen_range(0.0..4.0),
            rating,
        }
    }

    fn sentiment(&self, _symbol: &str) -> SentimentSnapshot {
        let mut rng = rand::thread_rng();

        SentimentSnapshot {
            overall: rng.gen_range(0.3..0.7),
            news: rng.gen_range(0.2..0.8),
            social: rng.gen_range(0.1..0.9),
            analyst: rng.gen_range(0.4..0.8),
        }
    }

    fn outlook(&self, _symbol: &str, market: &MarketContext) -> PredictionOutlook {
        let mut rng = rand::thread_rng();

        let base = base_return(market.current_market);
        let volatility = outlook_volatility(market.volatility);

        PredictionOutlook {
            price_target: rng.gen_range(75.0..125.0),
            expected_return: base + rng.gen_range(-0.05..0.05),
            confidence: rng.gen_range(0.7..0.9),
            timeframe: "30 days".to_string(),
            volatility,
            scenarios: vec![
                Scenario {
                    name: "Bull Case".to_string(),
                    probability: 30,
                    expected_return: base + volatility,
                },
                Scenario {
                    name: "Base Case".to_string(),
                    probability: 50,
                    expected_return: base,
                },
                Scenario {
                    name: "Bear Case".to_string(),
                    probability: 20,
                    expected_return: base - volatility,
                },
            ],
        }
    }

    fn advice_confidence(&self) -> f64 {
        rand::thread_rng().gen_range(0.8..0.95)
    }
}
