//! Analysis provider seam
//!
//! The engine's numeric outputs come from an [`AnalysisProvider`]. The
//! shipped implementation draws bounded random values (a stand-in for real
//! inference); a genuine model can satisfy the same interface later without
//! touching the generators. The documented ranges on each method ARE the
//! contract: generators assume them when scoring confidence and composing
//! prose, and tests exercise implementations against them.

use crate::market::MarketContext;
use crate::response::{
    FundamentalSnapshot, PredictionOutlook, SentimentSnapshot, TechnicalSnapshot,
};

/// Source of sub-analysis figures for the response generators
///
/// Implementations must be cheap and infallible: every value is bounded, so
/// there is no error channel. All methods are synchronous; providers that
/// wrap real inference should pre-fetch upstream of the engine.
pub trait AnalysisProvider: Send + Sync {
    /// Technical snapshot for a symbol. See [`TechnicalSnapshot`] for the
    /// numeric ranges implementations must respect.
    fn technical(&self, symbol: &str) -> TechnicalSnapshot;

    /// Fundamental snapshot for a symbol, ranges per [`FundamentalSnapshot`].
    fn fundamental(&self, symbol: &str) -> FundamentalSnapshot;

    /// Sentiment scores for a symbol, ranges per [`SentimentSnapshot`].
    fn sentiment(&self, symbol: &str) -> SentimentSnapshot;

    /// Thirty-day outlook for a symbol under the given market conditions.
    ///
    /// The expected return centers on the phase base (bull +0.15, bear
    /// -0.10, otherwise +0.05) perturbed by at most ±0.05; volatility maps
    /// from the regime (high 0.30, low 0.15, otherwise 0.25); confidence is
    /// in `[0.7, 0.9)`; the three scenarios are Bull Case 30%, Base Case
    /// 50%, Bear Case 20% with returns at base ± volatility.
    fn outlook(&self, symbol: &str, market: &MarketContext) -> PredictionOutlook;

    /// Confidence score for advice-style responses (recommendations and
    /// question answers), in `[0.8, 0.95)`.
    fn advice_confidence(&self) -> f64;
}
