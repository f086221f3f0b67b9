//! Cover letter generator. Same shape as the resume generator, different prompt and model.

use crate::generation::artifact::{complete_artifact, Artifact, GenerationFailure};
use crate::generation::prompts::build_cover_letter_prompt;
use crate::llm_client::{TextGenerator, GENERAL_MODEL};
use crate::models::company::CompanyProfile;

pub async fn generate_cover_letter(
    llm: &dyn TextGenerator,
    resume: &str,
    job_description: &str,
    company: &CompanyProfile,
    job_title: &str,
) -> Result<String, GenerationFailure> {
    let prompt = build_cover_letter_prompt(resume, job_description, company, job_title);
    complete_artifact(llm, Artifact::CoverLetter, &prompt, GENERAL_MODEL).await
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::generation::artifact::test_support::FakeGenerator;

    #[tokio::test]
    async fn test_returns_letter_from_general_model() {
        let llm = FakeGenerator::replying("Dear Hiring Manager,");
        let letter = generate_cover_letter(&llm, "R", "JD", &CompanyProfile::default(), "Engineer")
            .await
            .unwrap();
        assert_eq!(letter, "Dear Hiring Manager,");
        assert_eq!(llm.models_called(), vec![GENERAL_MODEL.to_string()]);
    }

    #[tokio::test]
    async fn test_prompt_carries_job_title() {
        let llm = FakeGenerator::replying("letter");
        generate_cover_letter(&llm, "R", "JD", &CompanyProfile::default(), "Data Wrangler")
            .await
            .unwrap();
        let calls = llm.calls.lock().unwrap();
        assert!(calls[0].0.contains("Data Wrangler position"));
    }

    #[tokio::test]
    async fn test_provider_error_becomes_cover_letter_failure() {
        let llm = FakeGenerator::failing();
        let err = generate_cover_letter(&llm, "R", "JD", &CompanyProfile::default(), "Engineer")
            .await
            .unwrap_err();
        assert_eq!(err.artifact, Artifact::CoverLetter);
    }
}
