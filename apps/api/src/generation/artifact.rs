//! Shared plumbing for the three artifact generators.

use std::fmt;

use thiserror::Error;
use tracing::{error, info};

use crate::llm_client::TextGenerator;

/// One of the three generated outputs.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Artifact {
    Resume,
    CoverLetter,
    InterviewQuestions,
}

impl fmt::Display for Artifact {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let name = match self {
            Artifact::Resume => "optimized resume",
            Artifact::CoverLetter => "cover letter",
            Artifact::InterviewQuestions => "interview questions",
        };
        f.write_str(name)
    }
}

/// Opaque failure of one artifact. Provider detail is logged, not carried.
#[derive(Debug, Error, PartialEq, Eq)]
#[error("Failed to generate {artifact}")]
pub struct GenerationFailure {
    pub artifact: Artifact,
}

/// Sends `prompt` to `model` and returns the raw reply, collapsing any
/// provider error into a `GenerationFailure` for `artifact`.
pub(crate) async fn complete_artifact(
    llm: &dyn TextGenerator,
    artifact: Artifact,
    prompt: &str,
    model: &str,
) -> Result<String, GenerationFailure> {
    info!(
        "Generating {} with {} ({} prompt chars)",
        artifact,
        model,
        prompt.len()
    );

    let text = llm.complete(prompt, model).await.map_err(|e| {
        error!("Error generating {artifact}: {e}");
        GenerationFailure { artifact }
    })?;

    info!("Generated {} ({} chars)", artifact, text.len());
    Ok(text)
}


#[cfg(test)]
mod tests {
    use super::test_support::FakeGenerator;
    use super::*;

    #[test]
    fn test_generation_failure_message_names_artifact() {
        let failure = GenerationFailure {
            artifact: Artifact::CoverLetter,
        };
        assert_eq!(failure.to_string(), "Failed to generate cover letter");
    }

    #[tokio::test]
    async fn test_complete_artifact_discards_provider_detail() {
        let llm = FakeGenerator::failing();
        let err = complete_artifact(&llm, Artifact::Resume, "prompt", "model")
            .await
            .unwrap_err();
        assert_eq!(
            err,
            GenerationFailure {
                artifact: Artifact::Resume
            }
        );
        assert!(!err.to_string().contains("upstream exploded"));
    }

    #[tokio::test]
    async fn test_complete_artifact_passes_prompt_and_model() {
        let llm = FakeGenerator::replying("ok");
        let text = complete_artifact(&llm, Artifact::CoverLetter, "the prompt", "the-model")
            .await
            .unwrap();
        assert_eq!(text, "ok");
        let calls = llm.calls.lock().unwrap();
        assert_eq!(calls.as_slice(), &[("the prompt".to_string(), "the-model".to_string())]);
    }
}
