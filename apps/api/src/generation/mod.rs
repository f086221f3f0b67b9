// Content generation pipeline.
// Implements: prompt builders, the three artifact generators, fan-out/join
// orchestration, and persistence of completed generations.
// All provider calls go through llm_client::TextGenerator.

pub mod artifact;
pub mod cover_letter;
pub mod handlers;
pub mod interview_questions;
pub mod orchestrator;
pub mod prompts;
pub mod resume;
pub mod store;
