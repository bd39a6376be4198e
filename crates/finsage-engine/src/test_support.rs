//! Deterministic provider stubs shared by unit tests

use finsage_core::market::MarketContext;
use finsage_core::provider::AnalysisProvider;
use finsage_core::response::{
    BandPosition, FundamentalSnapshot, PredictionOutlook, Rating, Scenario, SentimentSnapshot,
    TechnicalSnapshot, TrendDirection, VolumeLevel,
};

use crate::providers::{base_return, outlook_volatility};

/// Provider returning fixed snapshots, so generator tests can assert exact
/// confidence values and content branches.
pub(crate) struct FixedProvider {
    pub technical: TechnicalSnapshot,
    pub fundamental: FundamentalSnapshot,
    pub sentiment: SentimentSnapshot,
    pub advice: f64,
}

impl Default for FixedProvider {
    /// Everything in its normal band: composite analysis confidence is
    /// exactly 0.8.
    fn default() -> Self {
        Self {
            technical: TechnicalSnapshot {
                rsi: 55.0,
                macd: 0.4,
                bollinger: BandPosition::Middle,
                support: 120.0,
                resistance: 170.0,
                trend: TrendDirection::Bullish,
                volume: VolumeLevel::Normal,
            },
            fundamental: FundamentalSnapshot {
                pe: 22.0,
                peg: 1.1,
                debt_to_equity: 0.4,
                roe: 15.0,
                revenue_growth: 8.0,
                earnings_growth: 12.0,
                dividend_yield: 1.5,
                rating: Rating::Buy,
            },
            sentiment: SentimentSnapshot {
                overall: 0.55,
                news: 0.5,
                social: 0.45,
                analyst: 0.65,
            },
            advice: 0.85,
        }
    }
}

impl FixedProvider {
    /// Bullish trend with heavy volume
    pub fn bullish() -> Self {
        let mut provider = Self::default();
        provider.technical.trend = TrendDirection::Bullish;
        provider.technical.volume = VolumeLevel::High;
        provider
    }

    /// Bearish trend with contracting earnings
    pub fn bearish() -> Self {
        let mut provider = Self::default();
        provider.technical.trend = TrendDirection::Bearish;
        provider.fundamental.earnings_growth = -5.0;
        provider
    }

    /// Every driving metric outside its normal band
    pub fn out_of_band() -> Self {
        let mut provider = Self::default();
        provider.technical.rsi = 75.0;
        provider.fundamental.earnings_growth = -5.0;
        provider.sentiment.overall = 0.9;
        provider
    }
}

impl AnalysisProvider for FixedProvider {
    fn technical(&self, _symbol: &str) -> TechnicalSnapshot {
        self.technical.clone()
    }

    fn fundamental(&self, _symbol: &str) -> FundamentalSnapshot {
        self.fundamental.clone()
    }

    fn sentiment(&self, _symbol: &str) -> SentimentSnapshot {
        self.sentiment.clone()
    }

    /// Outlook with zero perturbation: the expected return is exactly the
    /// phase base.
    fn outlook(&self, _symbol: &str, market: &MarketContext) -> PredictionOutlook {
        let base = base_return(market.current_market);
        let volatility = outlook_volatility(market.volatility);

        PredictionOutlook {
            price_target: 100.0,
            expected_return: base,
            confidence: 0.8,
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
        self.advice
    }
}
