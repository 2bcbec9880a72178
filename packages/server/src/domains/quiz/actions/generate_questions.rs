use tracing::{info, warn};

use crate::domains::quiz::{
    build_question_prompt, parse_questions, Company, GeneratedQuestion, QuizError,
};
use crate::kernel::{ExtractionRequest, ServerDeps};

/// Send a ready-made prompt to the model and parse its answer.
pub async fn generate_questions(
    prompt: &str,
    deps: &ServerDeps,
) -> Result<Vec<GeneratedQuestion>, QuizError> {
    let raw = deps.ai.complete(prompt).await.map_err(|e| {
        warn!(model = deps.ai.model(), error = %e, "Question generation failed");
        QuizError::AI(format!("{:#}", e))
    })?;

    parse_questions(&raw).map_err(|e| {
        warn!(error = %e, raw_len = raw.len(), "Could not parse model response");
        QuizError::from(e)
    })
}

/// Extract the company's website and generate its quiz questions.
pub async fn generate_for_company(
    company: &Company,
    deps: &ServerDeps,
) -> Result<Vec<GeneratedQuestion>, QuizError> {
    company.validate()?;

    info!(
        company_id = %company.id,
        website = %company.company_website,
        count = company.number_of_questions,
        difficulty = %company.difficulty_level,
        "Generating questions for company"
    );

    let extracted = deps
        .extractor
        .extract(ExtractionRequest::new(company.company_website.clone()))
        .await?;

    let prompt = build_question_prompt(company, &extracted.content);
    let questions = generate_questions(&prompt, deps).await?;

    info!(
        company_id = %company.id,
        generated = questions.len(),
        "Generated questions"
    );

    Ok(questions)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::domains::quiz::{DifficultyLevel, QuestionParseError};
    use crate::kernel::test_dependencies::{MockAI, TestDependencies};
    use crate::kernel::ExtractionError;
    use content_extraction::MockFetcher;

    const PAGE: &str = "<html><head><title>Acme</title></head><body>\
        <main><p>Acme builds reusable rockets for small satellite operators across the world.</p></main>\
        </body></html>";

    const QUESTIONS: &str = r#"```json
[{"question": "What does Acme build?", "options": ["Rockets", "Boats", "Cars", "Bikes"], "correctAnswer": 0, "explanation": "From the site."}]
```"#;

    fn company(website: &str) -> Company {
        Company {
            id: "acme".into(),
            company_name: "Acme".into(),
            company_description: "Rockets".into(),
            company_website: website.into(),
            number_of_questions: 10,
            difficulty_level: DifficultyLevel::Easy,
        }
    }

    #[tokio::test]
    async fn test_generate_for_company_full_flow() {
        let test_deps = TestDependencies::new()
            .with_fetcher(MockFetcher::new().with_html("https://acme.test/", PAGE))
            .with_ai(MockAI::new().with_response(QUESTIONS));
        let deps = test_deps.server_deps();

        let questions = generate_for_company(&company("https://acme.test/"), &deps)
            .await
            .unwrap();

        assert_eq!(questions.len(), 1);
        assert_eq!(questions[0].options[0], "Rockets");

        let prompts = test_deps.ai.prompts();
        assert_eq!(prompts.len(), 1);
        assert!(prompts[0].contains("Website Content: Acme Acme builds reusable rockets"));
        assert!(prompts[0].contains("generate 10 multiple-choice questions with difficulty level: easy"));
    }

    #[tokio::test]
    async fn test_invalid_company_skips_extraction() {
        let test_deps = TestDependencies::new();
        let deps = test_deps.server_deps();

        let result = generate_for_company(&company("  "), &deps).await;

        assert!(matches!(result, Err(QuizError::InvalidCompany(_))));
        assert_eq!(test_deps.fetcher.fetch_call_count(), 0);
        assert_eq!(test_deps.ai.call_count(), 0);
    }

    #[tokio::test]
    async fn test_extraction_failure_skips_model() {
        let test_deps = TestDependencies::new()
            .with_fetcher(MockFetcher::new().with_html("https://acme.test/", "<p>Hi</p>"));
        let deps = test_deps.server_deps();

        let result = generate_for_company(&company("https://acme.test/"), &deps).await;

        assert!(matches!(
            result,
            Err(QuizError::Extraction(ExtractionError::InsufficientContent { .. }))
        ));
        assert_eq!(test_deps.ai.call_count(), 0);
    }

    #[tokio::test]
    async fn test_model_error_maps_to_ai() {
        let test_deps = TestDependencies::new().with_ai(MockAI::new().with_error("quota exceeded"));
        let deps = test_deps.server_deps();

        let result = generate_questions("prompt", &deps).await;

        match result {
            Err(QuizError::AI(message)) => assert!(message.contains("quota exceeded")),
            other => panic!("expected AI error, got {:?}", other),
        }
    }

    #[tokio::test]
    async fn test_unparseable_model_output() {
        let test_deps =
            TestDependencies::new().with_ai(MockAI::new().with_response("No questions today."));
        let deps = test_deps.server_deps();

        let result = generate_questions("prompt", &deps).await;

        assert!(matches!(
            result,
            Err(QuizError::Parse(QuestionParseError::NotJson))
        ));
    }
}
