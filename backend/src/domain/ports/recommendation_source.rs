//! Port for the outbound text-generation gateway.

use async_trait::async_trait;

use super::define_port_error;

define_port_error! {
    /// Errors raised by generation gateway adapters. Every variant is
    /// recovered locally by the caller's fallback path and never surfaced
    /// to the end user.
    pub enum RecommendationSourceError {
        /// The request did not complete within the configured timeout.
        Timeout { message: String } =>
            "generation request timed out: {message}",
        /// The transport failed below the HTTP layer.
        Transport { message: String } =>
            "generation transport failed: {message}",
        /// The endpoint answered with a non-success status.
        Status { message: String } =>
            "generation endpoint rejected the request: {message}",
        /// The response body could not be decoded into generated text.
        Decode { message: String } =>
            "generation response could not be decoded: {message}",
    }
}

/// Inputs for a single generation call.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct RecommendationPrompt {
    /// Destination the user asked about; never blank.
    pub destination: String,
    /// Optional budget-range string, e.g. "$1000-$2000".
    pub budget_range: Option<String>,
    /// Optional free-text preferences.
    pub preferences: Option<String>,
}

impl RecommendationPrompt {
    /// Render the travel-advisor prompt sent to the generation endpoint.
    ///
    /// The section list is fixed; budget range and preferences appear only
    /// when supplied.
    pub fn render(&self) -> String {
        let mut prompt = String::from(
            "You are an expert travel advisor. Provide personalized travel \
             recommendations based on the following:\n\n",
        );
        prompt.push_str(&format!("Destination: {}\n", self.destination));
        if let Some(budget_range) = self.budget_range.as_deref().filter(|s| !s.is_empty()) {
            prompt.push_str(&format!("Budget Range: {budget_range}\n"));
        }
        if let Some(preferences) = self.preferences.as_deref().filter(|s| !s.is_empty()) {
            prompt.push_str(&format!("Preferences: {preferences}\n"));
        }
        prompt.push_str(
            "\nPlease provide a comprehensive travel recommendation including:\n\
             1. Best time to visit\n\
             2. Must-see attractions\n\
             3. Local cuisine recommendations\n\
             4. Accommodation suggestions\n\
             5. Transportation tips\n\
             6. Estimated daily budget breakdown\n\
             7. Cultural tips and local customs\n\
             8. Safety considerations\n\n\
             Format the response in a friendly, informative manner with clear sections.",
        );
        prompt
    }
}

/// Port wrapping the third-party generation endpoint.
#[cfg_attr(test, mockall::automock)]
#[async_trait]
pub trait RecommendationSource: Send + Sync {
    /// Generate recommendation text for the prompt.
    async fn generate(
        &self,
        prompt: &RecommendationPrompt,
    ) -> Result<String, RecommendationSourceError>;
}

#[cfg(test)]
mod tests {
    //! Regression coverage for this module.
    use super::*;

    #[test]
    fn rendered_prompt_carries_all_supplied_inputs() {
        let prompt = RecommendationPrompt {
            destination: "Lisbon".to_owned(),
            budget_range: Some("$1000-$2000".to_owned()),
            preferences: Some("food and museums".to_owned()),
        };

        let text = prompt.render();

        assert!(text.contains("Destination: Lisbon\n"));
        assert!(text.contains("Budget Range: $1000-$2000\n"));
        assert!(text.contains("Preferences: food and museums\n"));
        assert!(text.contains("1. Best time to visit"));
        assert!(text.contains("8. Safety considerations"));
    }

    #[test]
    fn rendered_prompt_omits_absent_optional_lines() {
        let prompt = RecommendationPrompt {
            destination: "Lisbon".to_owned(),
            budget_range: None,
            preferences: Some(String::new()),
        };

        let text = prompt.render();

        assert!(!text.contains("Budget Range:"));
        assert!(!text.contains("Preferences:"));
    }
}
