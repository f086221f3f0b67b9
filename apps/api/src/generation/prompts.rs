// All LLM prompt templates for the Generation module.
// Builders are pure: same arguments, same prompt text. Prompts are built once
// per request and never cached.

use crate::llm_client::prompts::render_template;
use crate::models::company::CompanyProfile;

/// Optimized resume prompt template.
/// Replace: {resume}, {job_description}, {company_values}, {company_culture}
pub const RESUME_PROMPT_TEMPLATE: &str = r#"Create an optimized resume using the following information and sticking to the instructions provided:

Original Resume:
{resume}

Job Description:
{job_description}

Company Values:
{company_values}

Company Culture:
{company_culture}

Instructions:
1. Optimize this resume specifically for the provided job description, ensuring alignment with the company's stated values and culture.
   - Highlight the most relevant achievements, skills, and experiences that directly match the job description.
   - Use industry-specific keywords and terminology from the job description to improve ATS compatibility.
   - Reference the company's values and culture using language that demonstrates alignment (e.g., teamwork, innovation, adaptability).
2. Structure the resume for ATS readability:
   - Use clean, standard formatting (bullet points, clear headers, no graphics or columns).
   - Use clear section headings: "Professional Summary", "Skills", "Experience", "Education" and "Certifications" (if applicable).
   - Use keywords and phrases from the job description in each section without overstuffing.
3. Enhance readability and relevance:
   - Open with a compelling "Professional Summary" emphasizing the most impactful and relevant qualifications.
   - Focus on quantifiable results in the "Experience" section (e.g., "Increased revenue by 25% by developing new marketing strategies").
   - Tailor the "Skills" section to the role, grouping technical and soft skills.
4. Keep the language concise and impactful:
   - Replace generic phrases like "responsible for" with action verbs like "achieved", "led" or "implemented".
   - Make each bullet point specific and measurable where possible.
5. Keep the result ATS compatible as plain text.

Reply back with only the resume content. No preface or additional information needed."#;

/// Cover letter prompt template.
/// Replace: {job_title}, {company_mission}, {company_values}, {company_culture},
///          {job_description}, {resume}
pub const COVER_LETTER_PROMPT_TEMPLATE: &str = r#"Write a compelling cover letter for the {job_title} position.

Company Mission: {company_mission}
Company Values: {company_values}
Company Culture: {company_culture}

Job Description:
{job_description}

Candidate's Background:
{resume}

Create a personalized cover letter that:
1. Shows enthusiasm for the company's mission
2. Aligns with company values
3. Highlights relevant experience
4. Demonstrates cultural fit
5. Skips any details that are empty instead of using placeholder content
6. Uses natural language, tone and sentence structure
7. Includes specific details from both the resume and job description to show genuine interest and fit"#;

/// Interview questions prompt template.
/// Replace: {resume}, {job_description}, {company_values}, {company_culture}
pub const INTERVIEW_PROMPT_TEMPLATE: &str = r#"Generate 5 interview questions and suggested answers based on the provided information.

Resume:
{resume}

Job Description:
{job_description}

Company Values:
{company_values}

Company Culture:
{company_culture}

The questions must cover the following categories:
1. Technical/role-specific questions
2. Cultural fit questions
3. Behavioral questions
4. Company value alignment questions

Format the output as a JSON array of exactly 5 objects with "question" and "suggestedAnswer" fields:
[
  {"question": "...", "suggestedAnswer": "..."}
]"#;

pub fn build_resume_prompt(
    resume: &str,
    job_description: &str,
    company: &CompanyProfile,
) -> String {
    let values = company.values.flatten();
    render_template(
        RESUME_PROMPT_TEMPLATE,
        &[
            ("resume", resume),
            ("job_description", job_description),
            ("company_values", &values),
            ("company_culture", &company.culture),
        ],
    )
}

pub fn build_cover_letter_prompt(
    resume: &str,
    job_description: &str,
    company: &CompanyProfile,
    job_title: &str,
) -> String {
    let values = company.values.flatten();
    render_template(
        COVER_LETTER_PROMPT_TEMPLATE,
        &[
            ("job_title", job_title),
            ("company_mission", &company.mission_statement),
            ("company_values", &values),
            ("company_culture", &company.culture),
            ("job_description", job_description),
            ("resume", resume),
        ],
    )
}

pub fn build_interview_prompt(
    resume: &str,
    job_description: &str,
    company: &CompanyProfile,
) -> String {
    let values = company.values.flatten();
    render_template(
        INTERVIEW_PROMPT_TEMPLATE,
        &[
            ("resume", resume),
            ("job_description", job_description),
            ("company_values", &values),
            ("company_culture", &company.culture),
        ],
    )
}
