//! Turning raw model output into validated questions.
//!
//! Models often wrap JSON in markdown fences or chat around it, so parsing
//! is tolerant: strip fences first, then fall back to the widest `[...]`
//! span in the raw text. Malformed items are dropped rather than failing
//! the whole batch.

use lazy_static::lazy_static;
use regex::Regex;
use serde_json::Value;
use tracing::debug;

use super::error::QuestionParseError;
use super::models::GeneratedQuestion;

const OPTION_COUNT: usize = 4;

lazy_static! {
    // ```json fences and bare ``` fences, with an adjacent newline
    static ref CODE_FENCE: Regex = Regex::new(r"```json\n?|\n?```").unwrap();

    // Greedy: first '[' through last ']'
    static ref JSON_ARRAY: Regex = Regex::new(r"\[[\s\S]*\]").unwrap();
}

/// Parse a model response into the questions that pass validation.
pub fn parse_questions(raw: &str) -> Result<Vec<GeneratedQuestion>, QuestionParseError> {
    let value = parse_json(raw)?;

    let items = match value {
        Value::Array(items) => items,
        _ => return Err(QuestionParseError::NotAnArray),
    };

    let total = items.len();
    let questions: Vec<GeneratedQuestion> = items
        .iter()
        .enumerate()
        .filter_map(|(index, item)| {
            let question = validate_question(item);
            if question.is_none() {
                debug!(index, "Dropping malformed question");
            }
            question
        })
        .collect();

    if questions.is_empty() {
        return Err(QuestionParseError::NoValidQuestions);
    }

    debug!(kept = questions.len(), total, "Parsed questions");
    Ok(questions)
}

fn parse_json(raw: &str) -> Result<Value, QuestionParseError> {
    let cleaned = CODE_FENCE.replace_all(raw, "");
    if let Ok(value) = serde_json::from_str(cleaned.trim()) {
        return Ok(value);
    }

    debug!(raw_len = raw.len(), "Response is not bare JSON, looking for an array");

    let span = JSON_ARRAY
        .find(raw)
        .ok_or(QuestionParseError::NotJson)?;

    serde_json::from_str(span.as_str()).map_err(|_| QuestionParseError::Unparseable)
}

fn validate_question(item: &Value) -> Option<GeneratedQuestion> {
    let question = item.get("question")?.as_str()?;
    let explanation = item.get("explanation")?.as_str()?;

    let options = item.get("options")?.as_array()?;
    if options.len() != OPTION_COUNT {
        return None;
    }
    let options = options
        .iter()
        .map(|option| option.as_str().map(str::to_string))
        .collect::<Option<Vec<_>>>()?;

    let correct_answer = answer_index(item.get("correctAnswer")?)?;

    Some(GeneratedQuestion {
        question: question.to_string(),
        options,
        correct_answer,
        explanation: explanation.to_string(),
    })
}

/// Accepts integers and integral floats (`2.0`) in `0..4`.
fn answer_index(value: &Value) -> Option<usize> {
    let index = match value.as_u64() {
        Some(index) => index,
        None => {
            let float = value.as_f64()?;
            if float.fract() != 0.0 || float < 0.0 {
                return None;
            }
            float as u64
        }
    };

    (index < OPTION_COUNT as u64).then_some(index as usize)
}
