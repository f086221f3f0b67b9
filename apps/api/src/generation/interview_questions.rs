//! Interview questions generator.
//!
//! The model is asked for a JSON array of `{question, suggestedAnswer}` but
//! frequently wraps it in code fences or answers in prose. Parsing never fails
//! the request: unparseable output is returned as `ParseResult::Degraded`.

use tracing::{info, warn};

use crate::generation::artifact::{complete_artifact, Artifact, GenerationFailure};
use crate::generation::prompts::build_interview_prompt;
use crate::llm_client::{strip_json_fences, TextGenerator, GENERAL_MODEL};
use crate::models::company::CompanyProfile;
use crate::models::generation::{InterviewQuestion, ParseResult};

const LOG_PREVIEW_CHARS: usize = 300;

pub async fn generate_interview_questions(
    llm: &dyn TextGenerator,
    resume: &str,
    job_description: &str,
    company: &CompanyProfile,
) -> Result<ParseResult<Vec<InterviewQuestion>>, GenerationFailure> {
    let prompt = build_interview_prompt(resume, job_description, company);
    let raw = complete_artifact(llm, Artifact::InterviewQuestions, &prompt, GENERAL_MODEL).await?;
    Ok(parse_interview_questions(&raw))
}

/// Strips code fences, trims, and parses the reply as a question list.
///
/// An empty reply is an empty list. Anything else that does not parse,
/// whitespace-only replies included, is returned verbatim (fences included)
/// as the degraded value.
pub fn parse_interview_questions(raw: &str) -> ParseResult<Vec<InterviewQuestion>> {
    if raw.is_empty() {
        return ParseResult::Parsed(Vec::new());
    }

    let sanitized = strip_json_fences(raw);
    match serde_json::from_str::<Vec<InterviewQuestion>>(&sanitized) {
        Ok(questions) => {
            info!("Parsed {} interview questions", questions.len());
            ParseResult::Parsed(questions)
        }
        Err(e) => {
            warn!(
                "Could not parse interview questions as JSON ({e}); returning raw text: {:?}",
                raw.chars().take(LOG_PREVIEW_CHARS).collect::<String>()
            );
            ParseResult::Degraded(raw.to_string())
        }
    }
}
