// src/debate/prompt.rs
// Running-prompt templates. The prompt handed to provider i derives only from
// the topic and provider i-1's outcome, never from earlier turns.

use super::types::StageOutcome;

/// Prompt for the first provider in the roster.
pub fn opening_prompt(topic: &str) -> String {
    format!("Topic for debate: {topic}")
}

/// Prompt for a provider following a successful stage: restate the topic,
/// quote the previous response labeled by provider name, and ask for a
/// rebuttal.
pub fn rebuttal_prompt(topic: &str, previous_model: &str, previous_response: &str) -> String {
    format!(
        "Topic for debate: {topic}\n\
         Previous response from {previous_model}: {previous_response}\n\
         Please continue the debate by responding to the points made by the previous model."
    )
}

/// Prompt for a provider following a failed stage. The failed provider's
/// non-answer is deliberately not fed forward; the next provider gets no
/// specific rebuttal target.
pub fn continuation_prompt(topic: &str) -> String {
    format!(
        "Topic for debate: {topic}\n\
         Please continue the debate."
    )
}

/// Derive the next running prompt from the most recent stage outcome.
pub fn next_prompt(topic: &str, previous_model: &str, outcome: &StageOutcome) -> String {
    match outcome {
        StageOutcome::Success(text) => rebuttal_prompt(topic, previous_model, text),
        StageOutcome::Failure(_) => continuation_prompt(topic),
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::llm::provider::ProviderError;

    #[test]
    fn test_opening_prompt_contains_topic() {
        let prompt = opening_prompt("Is AI beneficial?");
        assert_eq!(prompt, "Topic for debate: Is AI beneficial?");
    }

    #[test]
    fn test_rebuttal_prompt_quotes_previous_turn() {
        let prompt = rebuttal_prompt("Is AI beneficial?", "Grok (xAI)", "Yes, because tools.");
        assert!(prompt.contains("Topic for debate: Is AI beneficial?"));
        assert!(prompt.contains("Previous response from Grok (xAI): Yes, because tools."));
        assert!(prompt.contains("responding to the points"));
    }

    #[test]
    fn test_next_prompt_after_failure_drops_previous_turn() {
        let outcome = StageOutcome::Failure(ProviderError::new("Grok (xAI)", "timeout"));
        let prompt = next_prompt("Is AI beneficial?", "Grok (xAI)", &outcome);
        assert!(prompt.contains("Topic for debate: Is AI beneficial?"));
        assert!(prompt.contains("Please continue the debate."));
        assert!(!prompt.contains("Grok"));
        assert!(!prompt.contains("timeout"));
    }
}
