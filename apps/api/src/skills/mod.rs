//! Skill extraction: one model call per resume, reply split into skill tokens.
//!
//! `AppState` holds an `Arc<dyn SkillExtractor>`; the production backend is
//! `LlmSkillExtractor`, tests swap in deterministic fakes.

pub mod prompts;

use async_trait::async_trait;
use tracing::debug;

use crate::errors::AppError;
use crate::llm_client::LlmClient;
use crate::skills::prompts::build_skill_prompt;

#[async_trait]
pub trait SkillExtractor: Send + Sync {
    /// Returns the technical skills found in `text`, in the order the backend
    /// reported them. Failures surface as `AppError::AiProcessing`.
    async fn extract_skills(&self, text: &str) -> Result<Vec<String>, AppError>;
}

pub struct LlmSkillExtractor {
    llm: LlmClient,
}

impl LlmSkillExtractor {
    pub fn new(llm: LlmClient) -> Self {
        Self { llm }
    }
}

#[async_trait]
impl SkillExtractor for LlmSkillExtractor {
    async fn extract_skills(&self, text: &str) -> Result<Vec<String>, AppError> {
        let prompt = build_skill_prompt(text);
        let reply = self
            .llm
            .complete(&prompt)
            .await
            .map_err(|e| AppError::AiProcessing(e.to_string()))?;

        let skills = parse_skill_list(&reply);
        debug!("Model returned {} skill token(s)", skills.len());
        Ok(skills)
    }
}

/// Splits a comma-separated reply into trimmed, non-empty tokens.
/// Order and duplicates are preserved.
pub fn parse_skill_list(reply: &str) -> Vec<String> {
    reply
        .split(',')
        .map(str::trim)
        .filter(|s| !s.is_empty())
        .map(String::from)
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;
    use mockito::Matcher;
    use serde_json::json;

    #[test]
    fn test_parse_trims_and_keeps_order() {
        assert_eq!(
            parse_skill_list(" Rust,Python ,  SQL"),
            vec!["Rust", "Python", "SQL"]
        );
    }

    #[test]
    fn test_parse_drops_empty_and_whitespace_pieces() {
        let skills = parse_skill_list("Go,, ,\n,Docker,");
        assert_eq!(skills, vec!["Go", "Docker"]);
        assert!(skills.iter().all(|s| !s.trim().is_empty()));
    }

    #[test]
    fn test_parse_keeps_duplicates() {
        assert_eq!(parse_skill_list("Java, Java"), vec!["Java", "Java"]);
    }

    #[test]
    fn test_parse_empty_reply() {
        assert!(parse_skill_list("").is_empty());
        assert!(parse_skill_list("  ,  ").is_empty());
    }

    #[test]
    fn test_parse_single_skill_without_commas() {
        assert_eq!(parse_skill_list("Kubernetes\n"), vec!["Kubernetes"]);
    }

    #[test]
    fn test_prompt_embeds_text_verbatim() {
        let prompt = build_skill_prompt("Built {things} in Rust");
        assert_eq!(
            prompt,
            "Extract only technical skills from this resume. Return comma-separated values:\nBuilt {things} in Rust"
        );
    }

    fn extractor_for(server: &mockito::ServerGuard) -> LlmSkillExtractor {
        LlmSkillExtractor::new(LlmClient::new(
            "test-key".to_string(),
            format!("{}/v1", server.url()),
            "gpt-3.5-turbo".to_string(),
        ))
    }

    #[tokio::test]
    async fn test_sends_one_user_message_and_splits_first_choice() {
        let mut server = mockito::Server::new_async().await;
        let mock = server
            .mock("POST", "/v1/chat/completions")
            .match_header("authorization", "Bearer test-key")
            .match_body(Matcher::PartialJson(json!({
                "model": "gpt-3.5-turbo",
                "messages": [{ "role": "user", "content": build_skill_prompt("Rust developer") }]
            })))
            .with_status(200)
            .with_header("content-type", "application/json")
            .with_body(
                r#"{"choices": [
                    {"message": {"role": "assistant", "content": " Rust, Tokio ,,SQL"}},
                    {"message": {"role": "assistant", "content": "Cobol"}}
                ]}"#,
            )
            .expect(1)
            .create_async()
            .await;

        let skills = extractor_for(&server)
            .extract_skills("Rust developer")
            .await
            .unwrap();

        assert_eq!(skills, vec!["Rust", "Tokio", "SQL"]);
        mock.assert_async().await;
    }

    #[tokio::test]
    async fn test_api_error_message_is_surfaced() {
        let mut server = mockito::Server::new_async().await;
        let mock = server
            .mock("POST", "/v1/chat/completions")
            .with_status(401)
            .with_header("content-type", "application/json")
            .with_body(r#"{"error": {"message": "Incorrect API key provided", "type": "invalid_request_error"}}"#)
            .expect(1)
            .create_async()
            .await;

        let err = extractor_for(&server)
            .extract_skills("Rust")
            .await
            .unwrap_err();

        assert!(matches!(err, AppError::AiProcessing(_)));
        assert_eq!(
            err.to_string(),
            "AI processing error: API error (status 401): Incorrect API key provided"
        );
        mock.assert_async().await;
    }

    #[tokio::test]
    async fn test_server_error_is_not_retried() {
        let mut server = mockito::Server::new_async().await;
        let mock = server
            .mock("POST", "/v1/chat/completions")
            .with_status(503)
            .with_body("overloaded")
            .expect(1)
            .create_async()
            .await;

        let err = extractor_for(&server)
            .extract_skills("Rust")
            .await
            .unwrap_err();

        assert_eq!(
            err.to_string(),
            "AI processing error: API error (status 503): overloaded"
        );
        mock.assert_async().await;
    }

    #[tokio::test]
    async fn test_empty_choices_is_ai_processing_error() {
        let mut server = mockito::Server::new_async().await;
        let _mock = server
            .mock("POST", "/v1/chat/completions")
            .with_status(200)
            .with_header("content-type", "application/json")
            .with_body(r#"{"choices": []}"#)
            .create_async()
            .await;

        let err = extractor_for(&server)
            .extract_skills("Rust")
            .await
            .unwrap_err();

        assert_eq!(err.to_string(), "AI processing error: LLM returned empty content");
    }

    #[tokio::test]
    async fn test_malformed_body_is_ai_processing_error() {
        let mut server = mockito::Server::new_async().await;
        let _mock = server
            .mock("POST", "/v1/chat/completions")
            .with_status(200)
            .with_header("content-type", "application/json")
            .with_body("not json")
            .create_async()
            .await;

        let err = extractor_for(&server)
            .extract_skills("Rust")
            .await
            .unwrap_err();

        assert!(matches!(err, AppError::AiProcessing(_)));
    }
}
