//! Response engine orchestrator
//!
//! The public entry point: classify the query, dispatch to the matching
//! generator, record the response, return it. Engines are explicit
//! instances built by the caller. Provider, market context, profile, and
//! configuration are all injected, and each engine owns the history of its
//! own conversation session.
//!
//! Calls complete after a simulated processing delay drawn uniformly from
//! the configured window. The delay is a plain `tokio::time::sleep` taken
//! while holding no locks, so dropping the `respond` future cancels the
//! pending wait.

use std::sync::{Arc, RwLock};

use rand::Rng;

use finsage_core::market::MarketContext;
use finsage_core::profile::UserProfile;
use finsage_core::provider::AnalysisProvider;
use finsage_core::response::AdvisorResponse;

use crate::config::EngineConfig;
use crate::context::sample_market_context;
use crate::error::{EngineError, Result};
use crate::generators::{
    AnalysisGenerator, ExplanationGenerator, GeneralGenerator, PredictionGenerator,
    QuestionGenerator, RecommendationGenerator,
};
use crate::history::ConversationHistory;
use crate::knowledge::KnowledgeBase;
use crate::providers::SimulatedAnalysisProvider;
use crate::router::{Intent, IntentRouter};

/// Per-call replacements for the engine's market context and user profile
#[derive(Debug, Clone, Default)]
pub struct RequestOverrides {
    pub user_profile: Option<UserProfile>,
    pub market_context: Option<MarketContext>,
}

/// Rule-based contextual response engine
///
/// Safe to share across tasks: the only interior mutability is the
/// append-only conversation history behind an `RwLock`.
pub struct ResponseEngine {
    config: EngineConfig,
    market: MarketContext,
    profile: UserProfile,
    router: IntentRouter,
    analysis: AnalysisGenerator,
    prediction: PredictionGenerator,
    recommendation: RecommendationGenerator,
    explanation: ExplanationGenerator,
    question: QuestionGenerator,
    general: GeneralGenerator,
    history: RwLock<ConversationHistory>,
}

impl ResponseEngine {
    /// Create a new engine builder
    pub fn builder() -> EngineBuilder {
        EngineBuilder::default()
    }

    /// Generate a response using the engine's own context and profile.
    pub async fn respond(&self, input: &str) -> Result<AdvisorResponse> {
        self.respond_with(input, RequestOverrides::default()).await
    }

    /// Generate a response, optionally replacing the market context and
    /// user profile for this call only.
    ///
    /// Always succeeds for any text within the configured size bound: every
    /// lookup falls back and every branch is total. Repeated identical
    /// input yields the same response kind but different numeric content.
    pub async fn respond_with(
        &self,
        input: &str,
        overrides: RequestOverrides,
    ) -> Result<AdvisorResponse> {
        if input.len() > self.config.max_input_bytes {
            return Err(EngineError::InvalidInput(format!(
                "input exceeds {} bytes",
                self.config.max_input_bytes
            )));
        }

        self.simulate_latency().await;

        let intent = self.router.classify(input);
        let market = overrides.market_context.as_ref().unwrap_or(&self.market);
        let profile = overrides.user_profile.as_ref().unwrap_or(&self.profile);

        let response = match intent {
            Intent::Analysis => self.analysis.generate(input, market, profile),
            Intent::Prediction => self.prediction.generate(input, market, profile),
            Intent::Recommendation => self.recommendation.generate(input, market, profile),
            Intent::Explanation => self.explanation.generate(input, market, profile),
            Intent::Question => self.question.generate(input, market, profile),
            Intent::General => self.general.generate(input, market, profile),
        };

        tracing::debug!(
            kind = %response.kind,
            confidence = response.confidence,
            "response generated"
        );

        self.history
            .write()
            .map_err(|e| EngineError::HistoryError(format!("history lock poisoned: {e}")))?
            .push(response.clone());

        Ok(response)
    }

    /// Sleep a uniform draw from the configured latency window. Holds no
    /// locks; a zero window returns immediately.
    async fn simulate_latency(&self) {
        let min = self.config.latency_min;
        let max = self.config.latency_max;
        if max.is_zero() {
            return;
        }

        let delay = if min == max {
            min
        } else {
            rand::thread_rng().gen_range(min..=max)
        };
        tokio::time::sleep(delay).await;
    }

    /// Session id of this engine's conversation history
    pub fn session_id(&self) -> String {
        self.history
            .read()
            .map(|h| h.session_id().to_string())
            .unwrap_or_default()
    }

    /// Number of responses recorded so far
    pub fn history_len(&self) -> usize {
        self.history.read().map(|h| h.len()).unwrap_or(0)
    }

    /// Clone of the full history, oldest first
    pub fn history_snapshot(&self) -> Vec<AdvisorResponse> {
        self.history
            .read()
            .map(|h| h.entries().to_vec())
            .unwrap_or_default()
    }

    /// The most recent responses, bounded by the configured replay count
    pub fn recent_history(&self) -> Vec<AdvisorResponse> {
        self.history
            .read()
            .map(|h| h.recent(self.config.history_replay).to_vec())
            .unwrap_or_default()
    }

    /// The market context this engine was built with
    pub fn market_context(&self) -> &MarketContext {
        &self.market
    }

    /// The user profile this engine was built with
    pub fn user_profile(&self) -> &UserProfile {
        &self.profile
    }

    /// The engine configuration
    pub fn config(&self) -> &EngineConfig {
        &self.config
    }
}

/// Builder for [`ResponseEngine`]
///
/// Everything is optional: the default engine samples a market context
/// preset, uses the stock demo profile, and backs analysis with the
/// simulated provider.
#[derive(Default)]
pub struct EngineBuilder {
    provider: Option<Arc<dyn AnalysisProvider>>,
    market_context: Option<MarketContext>,
    user_profile: Option<UserProfile>,
    config: Option<EngineConfig>,
    history: Option<ConversationHistory>,
}

impl EngineBuilder {
    /// Set the analysis provider
    pub fn provider(mut self, provider: Arc<dyn AnalysisProvider>) -> Self {
        self.provider = Some(provider);
        self
    }

    /// Set the market context (skips preset sampling)
    pub fn market_context(mut self, market: MarketContext) -> Self {
        self.market_context = Some(market);
        self
    }

    /// Set the user profile
    pub fn user_profile(mut self, profile: UserProfile) -> Self {
        self.user_profile = Some(profile);
        self
    }

    /// Set the engine configuration
    pub fn config(mut self, config: EngineConfig) -> Self {
        self.config = Some(config);
        self
    }

    /// Resume a prior conversation session instead of opening a fresh one
    pub fn history(mut self, history: ConversationHistory) -> Self {
        self.history = Some(history);
        self
    }

    /// Build the engine
    pub fn build(self) -> Result<ResponseEngine> {
        let config = match self.config {
            Some(config) => {
                config.validate()?;
                config
            }
            None => EngineConfig::default(),
        };

        let provider: Arc<dyn AnalysisProvider> = self
            .provider
            .unwrap_or_else(|| Arc::new(SimulatedAnalysisProvider::new()));
        let market = self.market_context.unwrap_or_else(sample_market_context);
        let profile = self.user_profile.unwrap_or_default();
        let knowledge = Arc::new(KnowledgeBase::new());

        Ok(ResponseEngine {
            analysis: AnalysisGenerator::new(Arc::clone(&provider)),
            prediction: PredictionGenerator::new(Arc::clone(&provider)),
            recommendation: RecommendationGenerator::new(
                Arc::clone(&knowledge),
                Arc::clone(&provider),
            ),
            explanation: ExplanationGenerator::new(),
            question: QuestionGenerator::new(Arc::clone(&provider)),
            general: GeneralGenerator::new(),
            router: IntentRouter::new(),
            history: RwLock::new(self.history.unwrap_or_default()),
            config,
            market,
            profile,
        })
    }
}
