//! Content orchestration - fans out the three artifact generators and joins them.
//!
//! Flow: [resume | cover letter | interview questions] (concurrent) →
//!       join → flatten company values → GeneratedContent.
//!
//! The join is fail-fast: the first generator error is returned and the
//! still-running siblings are dropped, which cancels their in-flight calls.
//! A `GeneratedContent` only exists when all three succeeded.

use tracing::info;

use crate::generation::artifact::GenerationFailure;
use crate::generation::cover_letter::generate_cover_letter;
use crate::generation::interview_questions::generate_interview_questions;
use crate::generation::resume::generate_optimized_resume;
use crate::llm_client::TextGenerator;
use crate::models::company::CompanyProfile;
use crate::models::generation::{GeneratedContent, UserInput};

pub async fn generate_content(
    llm: &dyn TextGenerator,
    input: &UserInput,
    company: &CompanyProfile,
) -> Result<GeneratedContent, GenerationFailure> {
    info!(
        "Generating content for '{}' at '{}'",
        input.job_title, input.company_name
    );

    let (resume, cover_letter, interview_questions) = tokio::try_join!(
        generate_optimized_resume(llm, &input.resume, &input.job_description, company),
        generate_cover_letter(
            llm,
            &input.resume,
            &input.job_description,
            company,
            &input.job_title
        ),
        generate_interview_questions(llm, &input.resume, &input.job_description, company),
    )?;

    info!(
        "All artifacts generated for '{}' (interview questions degraded: {})",
        input.company_name,
        interview_questions.is_degraded()
    );

    Ok(GeneratedContent {
        resume,
        cover_letter,
        interview_questions,
        company_mission_statement: company.mission_statement.clone(),
        company_values: company.values.flatten(),
        company_culture: company.culture.clone(),
    })
}

#[cfg(test)]
mod tests {
    use std::time::Duration;

    use super::*;
    use crate::generation::artifact::test_support::{api_error, FakeGenerator};
    use crate::generation::artifact::Artifact;
    use crate::llm_client::{LlmError, GENERAL_MODEL, REASONING_MODEL};
    use crate::models::company::CompanyValues;
    use crate::models::generation::{InterviewQuestion, ParseResult};

    fn input() -> UserInput {
        UserInput {
            resume: "Jane Doe, Rust engineer".to_string(),
            job_description: "Own our payments platform".to_string(),
            company_name: "Acme".to_string(),
            job_title: "Staff Engineer".to_string(),
        }
    }

    fn company() -> CompanyProfile {
        CompanyProfile {
            mission_statement: "Make payments boring".to_string(),
            values: CompanyValues::new(vec![
                ("ownership".to_string(), "Own it".to_string()),
                ("candor".to_string(), "Say it".to_string()),
            ]),
            culture: "Async and remote".to_string(),
        }
    }

    /// Answers by artifact, recognised from the prompt text.
    fn route(prompt: &str) -> Result<String, LlmError> {
        if prompt.starts_with("Create an optimized resume") {
            Ok("OPTIMIZED RESUME".to_string())
        } else if prompt.starts_with("Write a compelling cover letter") {
            Ok("Dear Acme,".to_string())
        } else {
            Ok("```json\n[{\"question\":\"Q1\",\"suggestedAnswer\":\"A1\"}]\n```".to_string())
        }
    }

    #[tokio::test]
    async fn test_assembles_all_artifacts_and_company_fields() {
        let llm = FakeGenerator::new(|prompt, _| route(prompt));
        let content = generate_content(&llm, &input(), &company()).await.unwrap();

        assert_eq!(content.resume, "OPTIMIZED RESUME");
        assert_eq!(content.cover_letter, "Dear Acme,");
        assert_eq!(
            content.interview_questions,
            ParseResult::Parsed(vec![InterviewQuestion {
                question: "Q1".to_string(),
                suggested_answer: "A1".to_string(),
            }])
        );
        assert_eq!(content.company_mission_statement, "Make payments boring");
        assert_eq!(content.company_values, "ownership: Own it, candor: Say it");
        assert_eq!(content.company_culture, "Async and remote");
    }

    #[tokio::test]
    async fn test_issues_one_call_per_artifact_with_fixed_models() {
        let llm = FakeGenerator::new(|prompt, _| route(prompt));
        generate_content(&llm, &input(), &company()).await.unwrap();

        let mut models = llm.models_called();
        models.sort();
        let mut expected = vec![
            GENERAL_MODEL.to_string(),
            GENERAL_MODEL.to_string(),
            REASONING_MODEL.to_string(),
        ];
        expected.sort();
        assert_eq!(models, expected);
    }

    #[tokio::test]
    async fn test_cover_letter_failure_fails_whole_request() {
        let llm = FakeGenerator::new(|prompt, _| {
            if prompt.starts_with("Write a compelling cover letter") {
                Err(api_error())
            } else {
                route(prompt)
            }
        });

        let err = generate_content(&llm, &input(), &company()).await.unwrap_err();
        assert_eq!(err.artifact, Artifact::CoverLetter);
    }

    #[tokio::test]
    async fn test_degraded_questions_do_not_fail_request() {
        let llm = FakeGenerator::new(|prompt, _| {
            if prompt.starts_with("Generate 5 interview questions") {
                Ok("Sorry, I cannot comply.".to_string())
            } else {
                route(prompt)
            }
        });

        let content = generate_content(&llm, &input(), &company()).await.unwrap();
        assert_eq!(
            content.interview_questions,
            ParseResult::Degraded("Sorry, I cannot comply.".to_string())
        );
    }

    /// Resume generation never finishes; the cover-letter failure must still
    /// surface immediately instead of waiting on it.
    struct StalledResume;

    #[async_trait::async_trait]
    impl TextGenerator for StalledResume {
        async fn complete(&self, prompt: &str, _model: &str) -> Result<String, LlmError> {
            if prompt.starts_with("Create an optimized resume") {
                tokio::time::sleep(Duration::from_secs(3600)).await;
                Ok("too late".to_string())
            } else if prompt.starts_with("Write a compelling cover letter") {
                Err(api_error())
            } else {
                route(prompt)
            }
        }
    }

    #[tokio::test(start_paused = true)]
    async fn test_first_failure_returns_without_waiting_for_siblings() {
        let started = tokio::time::Instant::now();
        let err = generate_content(&StalledResume, &input(), &company())
            .await
            .unwrap_err();
        assert_eq!(err.artifact, Artifact::CoverLetter);
        assert!(started.elapsed() < Duration::from_secs(1));
    }
}
