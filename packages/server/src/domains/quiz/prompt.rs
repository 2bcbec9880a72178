//! Prompt construction for quiz question generation.

use super::models::Company;

/// Build the generation prompt for a company.
///
/// `website_content` is embedded verbatim; it is already bounded by the
/// extractor's character limit.
pub fn build_question_prompt(company: &Company, website_content: &str) -> String {
    let count = company.number_of_questions;

    format!(
        r#"Based on the following company information and website content, you must generate {count} multiple-choice questions with difficulty level: {difficulty}.

Company: {name}
Description: {description}
Website: {website}
Website Content: {website_content}

Please generate questions that test knowledge about:
1. Company background and mission
2. Products/services offered
3. Industry knowledge
4. Technical concepts related to their field

Format each question as JSON with this structure:
{{
  "question": "Question text here",
  "options": ["Option A", "Option B", "Option C", "Option D"],
  "correctAnswer": 0,
  "explanation": "Why this answer is correct"
}}

Return only a valid JSON array of {count} questions. Make sure the JSON is properly formatted and parseable."#,
        difficulty = company.difficulty_level,
        name = company.company_name,
        description = company.company_description,
        website = company.company_website,
    )
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::domains::quiz::DifficultyLevel;

    #[test]
    fn test_prompt_embeds_company_and_content() {
        let company = Company {
            id: "c1".into(),
            company_name: "Acme".into(),
            company_description: "Rockets and anvils".into(),
            company_website: "https://acme.test".into(),
            number_of_questions: 20,
            difficulty_level: DifficultyLevel::Hard,
        };

        let prompt = build_question_prompt(&company, "We build rockets.");

        assert!(prompt.starts_with(
            "Based on the following company information and website content, you must generate 20 multiple-choice questions with difficulty level: hard."
        ));
        assert!(prompt.contains("Company: Acme\n"));
        assert!(prompt.contains("Description: Rockets and anvils\n"));
        assert!(prompt.contains("Website: https://acme.test\n"));
        assert!(prompt.contains("Website Content: We build rockets.\n"));
        assert!(prompt.contains("\"correctAnswer\": 0,"));
        assert!(prompt.ends_with(
            "Return only a valid JSON array of 20 questions. Make sure the JSON is properly formatted and parseable."
        ));
    }
}
