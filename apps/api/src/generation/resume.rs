//! Optimized resume generator. The model reply is the artifact; no post-parse.

use crate::generation::artifact::{complete_artifact, Artifact, GenerationFailure};
use crate::generation::prompts::build_resume_prompt;
use crate::llm_client::{TextGenerator, REASONING_MODEL};
use crate::models::company::CompanyProfile;

pub async fn generate_optimized_resume(
    llm: &dyn TextGenerator,
    resume: &str,
    job_description: &str,
    company: &CompanyProfile,
) -> Result<String, GenerationFailure> {
    let prompt = build_resume_prompt(resume, job_description, company);
    complete_artifact(llm, Artifact::Resume, &prompt, REASONING_MODEL).await
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::generation::artifact::test_support::FakeGenerator;

    #[tokio::test]
    async fn test_returns_reply_unmodified() {
        let reply = "```\nJANE DOE\nProfessional Summary\n```\n";
        let llm = FakeGenerator::replying(reply);
        let resume = generate_optimized_resume(&llm, "R", "JD", &CompanyProfile::default())
            .await
            .unwrap();
        assert_eq!(resume, reply);
    }

    #[tokio::test]
    async fn test_uses_reasoning_model() {
        let llm = FakeGenerator::replying("resume");
        generate_optimized_resume(&llm, "R", "JD", &CompanyProfile::default())
            .await
            .unwrap();
        assert_eq!(llm.models_called(), vec![REASONING_MODEL.to_string()]);
    }

    #[tokio::test]
    async fn test_provider_error_becomes_resume_failure() {
        let llm = FakeGenerator::failing();
        let err = generate_optimized_resume(&llm, "R", "JD", &CompanyProfile::default())
            .await
            .unwrap_err();
        assert_eq!(err.artifact, Artifact::Resume);
    }
}
