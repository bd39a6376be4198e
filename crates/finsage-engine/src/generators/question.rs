//! Question generator
//!
//! Direct answers restate the current market context at the user's level.
//! The reasoning and follow-up lists are fixed; the answer text varies only
//! with the injected context and profile.

use std::sync::Arc;

use finsage_core::market::MarketContext;
use finsage_core::profile::UserProfile;
use finsage_core::provider::AnalysisProvider;
use finsage_core::response::{Answer, AdvisorResponse, ResponseData, ResponseKind};

/// Generator for the `Question` intent
pub struct QuestionGenerator {
    provider: Arc<dyn AnalysisProvider>,
}

impl QuestionGenerator {
    pub fn new(provider: Arc<dyn AnalysisProvider>) -> Self {
        Self { provider }
    }

    pub fn generate(
        &self,
        _input: &str,
        market: &MarketContext,
        profile: &UserProfile,
    ) -> AdvisorResponse {
        tracing::debug!("generating question response");

        let answer = Answer {
            answer: answer_text(market, profile),
            confidence: self.provider.advice_confidence(),
            follow_ups: follow_up_questions(),
            sources: sources(),
        };
        let reasoning = answer_reasoning();
        let suggestions = answer.follow_ups.clone();
        let content = render_content(&answer, &reasoning);
        let confidence = answer.confidence;

        AdvisorResponse::new(
            ResponseKind::Question,
            content,
            confidence,
            ResponseData::Answer(answer),
        )
        .with_reasoning(reasoning)
        .with_suggestions(suggestions)
    }
}

fn answer_text(market: &MarketContext, profile: &UserProfile) -> String {
    format!(
        "Based on current market conditions and your {} level, here's my read: the {} market \
         environment carries {} sentiment, which typically means {}.",
        profile.experience,
        market.current_market,
        market.sentiment,
        market.implications()
    )
}

/// Always exactly four reasoning lines.
fn answer_reasoning() -> Vec<String> {
    vec![
        "Analysis based on current market data".to_string(),
        "Consideration of historical patterns".to_string(),
        "Evaluation of risk factors".to_string(),
        "Assessment of market sentiment".to_string(),
    ]
}

/// Always exactly four follow-ups.
fn follow_up_questions() -> Vec<String> {
    vec![
        "Would you like me to elaborate on any specific aspect?".to_string(),
        "Are you interested in related investment strategies?".to_string(),
        "Would you like to see how this applies to your portfolio?".to_string(),
        "Do you have questions about the risks involved?".to_string(),
    ]
}

fn sources() -> Vec<String> {
    vec![
        "Market data from financial exchanges".to_string(),
        "Technical analysis indicators".to_string(),
        "Fundamental analysis metrics".to_string(),
        "Sentiment analysis algorithms".to_string(),
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

fn render_content(answer: &Answer, reasoning: &[String]) -> String {
    format!(
        "Great question! Here's what I can tell you:\n\n\
         {answer_text}\n\n\
         **My Reasoning:**\n\
         {reasoning}\n\n\
         **Follow-up Questions You Might Have:**\n\
         {follow_ups}\n\n\
         **Confidence Level:** {confidence:.0}%\n\n\
         *This answer is based on current market data and analysis. Market conditions can \
         change rapidly, so consider this information as part of your broader research.*",
        answer_text = answer.answer,
        reasoning = numbered(reasoning),
        follow_ups = numbered(&answer.follow_ups),
        confidence = answer.confidence * 100.0,
    )
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::context::market_presets;
    use crate::test_support::FixedProvider;

    fn generate(market_index: usize) -> AdvisorResponse {
        let generator = QuestionGenerator::new(Arc::new(FixedProvider::default()));
        let market = &market_presets()[market_index];
        generator.generate("What will TSLA do next month?", market, &UserProfile::default())
    }

    #[test]
    fn test_kind_and_fixed_lists() {
        let response = generate(0);

        assert_eq!(response.kind, ResponseKind::Question);
        assert_eq!(response.reasoning.len(), 4);
        assert_eq!(response.suggestions.len(), 4);

        match &response.data {
            ResponseData::Answer(answer) => {
                assert_eq!(answer.follow_ups.len(), 4);
                assert_eq!(answer.sources.len(), 4);
            }
            other => panic!("expected answer payload, got {other:?}"),
        }
    }

    #[test]
    fn test_answer_restates_market_context() {
        let bull = generate(0);
        assert!(bull.content.contains("bull market"));

        let bear = generate(1);
        assert!(bear.content.contains("bear market"));
        assert!(bear.content.contains("defensive positioning"));
    }

    #[test]
    fn test_confidence_comes_from_provider() {
        let response = generate(2);
        assert!((response.confidence - 0.85).abs() < f64::EPSILON);
    }
}
