use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use sqlx::types::Json;
use sqlx::FromRow;
use uuid::Uuid;

/// What the user submits for one generation request.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct UserInput {
    pub resume: String,
    pub job_description: String,
    pub company_name: String,
    pub job_title: String,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct InterviewQuestion {
    pub question: String,
    pub suggested_answer: String,
}

/// Outcome of coercing loosely-structured model output into `T`.
///
/// `Degraded` carries the raw text the model returned when it could not be
/// parsed. Consumers decide how to present it.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(tag = "status", content = "value", rename_all = "snake_case")]
pub enum ParseResult<T> {
    Parsed(T),
    Degraded(String),
}

impl<T> ParseResult<T> {
    pub fn is_degraded(&self) -> bool {
        matches!(self, ParseResult::Degraded(_))
    }
}

/// The terminal artifact of the generation pipeline.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct GeneratedContent {
    pub resume: String,
    pub cover_letter: String,
    pub interview_questions: ParseResult<Vec<InterviewQuestion>>,
    pub company_mission_statement: String,
    /// Flattened `"key: value"` pairs joined by `", "`.
    pub company_values: String,
    pub company_culture: String,
}

/// A persisted generation, owned by a user.
#[derive(Debug, Clone, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct SavedGeneration {
    pub id: Uuid,
    pub timestamp: DateTime<Utc>,
    pub input: UserInput,
    pub output: GeneratedContent,
    pub user_id: String,
}

#[derive(Debug, FromRow)]
pub struct GenerationRow {
    pub id: Uuid,
    pub user_id: String,
    pub input: Json<UserInput>,
    pub output: Json<GeneratedContent>,
    pub created_at: DateTime<Utc>,
}

impl From<GenerationRow> for SavedGeneration {
    fn from(row: GenerationRow) -> Self {
        SavedGeneration {
            id: row.id,
            timestamp: row.created_at,
            input: row.input.0,
            output: row.output.0,
            user_id: row.user_id,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    #[test]
    fn test_user_input_uses_camel_case_fields() {
        let input: UserInput = serde_json::from_value(json!({
            "resume": "R",
            "jobDescription": "JD",
            "companyName": "Acme",
            "jobTitle": "Engineer"
        }))
        .unwrap();
        assert_eq!(input.job_description, "JD");
        assert_eq!(input.company_name, "Acme");
    }

    #[test]
    fn test_parse_result_parsed_is_tagged() {
        let result: ParseResult<Vec<InterviewQuestion>> = ParseResult::Parsed(vec![InterviewQuestion {
            question: "Q1".to_string(),
            suggested_answer: "A1".to_string(),
        }]);
        assert_eq!(
            serde_json::to_value(&result).unwrap(),
            json!({"status": "parsed", "value": [{"question": "Q1", "suggestedAnswer": "A1"}]})
        );
        assert!(!result.is_degraded());
    }

    #[test]
    fn test_parse_result_degraded_carries_raw_text() {
        let result: ParseResult<Vec<InterviewQuestion>> =
            ParseResult::Degraded("Sorry, I cannot comply.".to_string());
        assert_eq!(
            serde_json::to_value(&result).unwrap(),
            json!({"status": "degraded", "value": "Sorry, I cannot comply."})
        );
        assert!(result.is_degraded());
    }

    #[test]
    fn test_generation_row_converts_to_saved_generation() {
        let id = Uuid::new_v4();
        let now = Utc::now();
        let input = UserInput {
            resume: "R".to_string(),
            job_description: "JD".to_string(),
            company_name: "Acme".to_string(),
            job_title: "Engineer".to_string(),
        };
        let output = GeneratedContent {
            resume: "optimized".to_string(),
            cover_letter: "letter".to_string(),
            interview_questions: ParseResult::Parsed(vec![]),
            company_mission_statement: "M".to_string(),
            company_values: "a: b".to_string(),
            company_culture: "C".to_string(),
        };
        let saved: SavedGeneration = GenerationRow {
            id,
            user_id: "user-1".to_string(),
            input: Json(input.clone()),
            output: Json(output.clone()),
            created_at: now,
        }
        .into();

        assert_eq!(saved.id, id);
        assert_eq!(saved.timestamp, now);
        assert_eq!(saved.input, input);
        assert_eq!(saved.output, output);
        assert_eq!(saved.user_id, "user-1");
    }
}
