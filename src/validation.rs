//! Checks and normalization for raw question records, applied before
//! anything reaches the session engine.
//!
//! The pipeline is sanitize-then-filter: `sanitize_questions` drops null
//! entries, normalizes every survivor, and then drops whatever still fails
//! `validate_question`. Invalid records never surface to the user; the
//! session simply never offers them.

use crate::model::Question;
use serde_json::{Value, json};

/// Returns `true` if `question` is a well-formed question record:
/// non-empty prompt, non-empty options that are each non-empty after
/// trimming, and an integer answer index within the options.
///
/// Each violation is logged separately so a bad data file is diagnosable.
pub fn validate_question(question: &Value) -> bool {
    let Some(record) = question.as_object() else {
        log::warn!("question is not a valid object: {question}");
        return false;
    };

    let prompt_ok = record
        .get("question")
        .and_then(Value::as_str)
        .is_some_and(|s| !s.trim().is_empty());
    if !prompt_ok {
        log::warn!("question text is required and must be a non-empty string");
        return false;
    }

    let Some(options) = record.get("options").and_then(Value::as_array) else {
        log::warn!("options must be a non-empty array");
        return false;
    };
    if options.is_empty() {
        log::warn!("options must be a non-empty array");
        return false;
    }
    for (i, opt) in options.iter().enumerate() {
        if !opt.as_str().is_some_and(|s| !s.trim().is_empty()) {
            log::warn!("option {i} must be a non-empty string");
            return false;
        }
    }

    let index_ok = record
        .get("correctAnswerIndex")
        .and_then(Value::as_i64)
        .is_some_and(|i| i >= 0 && (i as usize) < options.len());
    if !index_ok {
        log::warn!("correct answer index must be a valid integer within options range");
        return false;
    }

    true
}

/// Normalizes a raw record: trims the prompt and every option, replaces
/// non-string options with empty strings, floors a numeric answer index to
/// an integer and defaults it to 0 otherwise. Never fails; only a JSON
/// `null` maps to `None`.
///
/// The result may still be invalid (e.g. an out-of-range index survives
/// flooring); that is what the validation filter is for.
pub fn sanitize_question(question: &Value) -> Option<Value> {
    if question.is_null() {
        return None;
    }

    let prompt = question
        .get("question")
        .and_then(Value::as_str)
        .map(str::trim)
        .unwrap_or("");

    let options: Vec<Value> = question
        .get("options")
        .and_then(Value::as_array)
        .map(|opts| {
            opts.iter()
                .map(|opt| json!(opt.as_str().map(str::trim).unwrap_or("")))
                .collect()
        })
        .unwrap_or_default();

    let index = question
        .get("correctAnswerIndex")
        .and_then(Value::as_f64)
        .map(|n| n.floor() as i64)
        .unwrap_or(0);

    Some(json!({
        "question": prompt,
        "options": options,
        "correctAnswerIndex": index,
    }))
}

/// Returns `true` only if every record in `questions` validates.
pub fn validate_questions(questions: &[Value]) -> bool {
    questions.iter().enumerate().all(|(i, q)| {
        let ok = validate_question(q);
        if !ok {
            log::warn!("invalid question at index {i}");
        }
        ok
    })
}

/// The full pipeline: drop nulls, sanitize each record, drop whatever
/// still fails validation, and type the survivors.
pub fn sanitize_questions(questions: &[Value]) -> Vec<Question> {
    questions
        .iter()
        .filter(|q| !q.is_null())
        .filter_map(sanitize_question)
        .filter(validate_question)
        .filter_map(|q| serde_json::from_value(q).ok())
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    #[test]
    fn accepts_well_formed_question() {
        let q = json!({
            "question": "What is $2+2$?",
            "options": ["3", "4", "5"],
            "correctAnswerIndex": 1,
        });
        assert!(validate_question(&q));
    }

    #[test]
    fn rejects_empty_prompt() {
        let q = json!({ "question": "", "options": ["a"], "correctAnswerIndex": 0 });
        assert!(!validate_question(&q));
    }

    #[test]
    fn rejects_whitespace_only_prompt_and_option() {
        let q = json!({ "question": "   ", "options": ["a"], "correctAnswerIndex": 0 });
        assert!(!validate_question(&q));
        let q = json!({ "question": "ok", "options": ["a", "  "], "correctAnswerIndex": 0 });
        assert!(!validate_question(&q));
    }

    #[test]
    fn rejects_missing_or_empty_options() {
        let q = json!({ "question": "ok", "correctAnswerIndex": 0 });
        assert!(!validate_question(&q));
        let q = json!({ "question": "ok", "options": [], "correctAnswerIndex": 0 });
        assert!(!validate_question(&q));
    }

    #[test]
    fn rejects_out_of_range_or_fractional_index() {
        let q = json!({ "question": "ok", "options": ["a", "b"], "correctAnswerIndex": 2 });
        assert!(!validate_question(&q));
        let q = json!({ "question": "ok", "options": ["a", "b"], "correctAnswerIndex": -1 });
        assert!(!validate_question(&q));
        let q = json!({ "question": "ok", "options": ["a", "b"], "correctAnswerIndex": 0.9 });
        assert!(!validate_question(&q));
    }

    #[test]
    fn rejects_non_object() {
        assert!(!validate_question(&json!(null)));
        assert!(!validate_question(&json!("question")));
    }

    #[test]
    fn sanitize_trims_and_floors() {
        let raw = json!({
            "question": " A ",
            "options": [" X ", "Y"],
            "correctAnswerIndex": 0.9,
        });
        let clean = sanitize_question(&raw).unwrap();
        assert_eq!(clean["question"], "A");
        assert_eq!(clean["options"], json!(["X", "Y"]));
        assert_eq!(clean["correctAnswerIndex"], 0);
    }

    #[test]
    fn sanitize_defaults_missing_fields() {
        let clean = sanitize_question(&json!({})).unwrap();
        assert_eq!(clean["question"], "");
        assert_eq!(clean["options"], json!([]));
        assert_eq!(clean["correctAnswerIndex"], 0);
    }

    #[test]
    fn sanitize_replaces_non_string_options() {
        let raw = json!({
            "question": "q",
            "options": ["a", 7, null],
            "correctAnswerIndex": "first",
        });
        let clean = sanitize_question(&raw).unwrap();
        assert_eq!(clean["options"], json!(["a", "", ""]));
        assert_eq!(clean["correctAnswerIndex"], 0);
    }

    #[test]
    fn sanitize_null_is_absent() {
        assert!(sanitize_question(&json!(null)).is_none());
    }

    #[test]
    fn pipeline_keeps_fixable_and_drops_broken() {
        let raw = vec![
            json!(null),
            json!({ "question": " A ", "options": [" X ", "Y"], "correctAnswerIndex": 0.9 }),
            json!({ "question": "", "options": ["a"], "correctAnswerIndex": 0 }),
            json!({ "question": "oob", "options": ["a"], "correctAnswerIndex": 3 }),
        ];
        let clean = sanitize_questions(&raw);
        assert_eq!(clean.len(), 1);
        assert_eq!(clean[0].question, "A");
        assert_eq!(clean[0].options, vec!["X", "Y"]);
        assert_eq!(clean[0].correct_answer_index, 0);
    }

    #[test]
    fn validate_questions_is_all_or_nothing() {
        let good = json!({ "question": "q", "options": ["a"], "correctAnswerIndex": 0 });
        assert!(validate_questions(&[good.clone()]));
        assert!(!validate_questions(&[good, json!(null)]));
    }
}
