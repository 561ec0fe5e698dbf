//! Parse LLM output into claims

use crate::error::ExtractorError;
use claimcheck_domain::Claim;
use serde_json::Value;

/// Parse an LLM reply into its `claims` list
///
/// The reply must be a JSON object. A missing `claims` field means no
/// claims; a `null` or other non-array value is a format error.
pub fn parse_claims(response: &str) -> Result<Vec<Claim>, ExtractorError> {
    // LLMs sometimes wrap JSON in markdown code blocks
    let json_str = extract_json(response)?;

    let json: Value = serde_json::from_str(&json_str)?;

    let obj = json
        .as_object()
        .ok_or_else(|| ExtractorError::InvalidFormat(format!("Expected JSON object, found {}", kind(&json))))?;

    match obj.get("claims") {
        None => Ok(Vec::new()),
        Some(Value::Array(items)) => Ok(items.iter().cloned().map(Claim::new).collect()),
        Some(other) => Err(ExtractorError::InvalidFormat(format!(
            "'claims' must be an array, found {}",
            kind(other)
        ))),
    }
}

/// Extract JSON from response, handling markdown code blocks
fn extract_json(response: &str) -> Result<String, ExtractorError> {
    let trimmed = response.trim();

    if trimmed.starts_with("```") {
        let lines: Vec<&str> = trimmed.lines().collect();
        if lines.len() < 2 {
            return Err(ExtractorError::InvalidFormat("Empty code block".to_string()));
        }

        // Skip the opening fence, and the closing one when present
        let end = if lines[lines.len() - 1].trim() == "```" {
            lines.len() - 1
        } else {
            lines.len()
        };
        Ok(lines[1..end].join("\n"))
    } else {
        Ok(trimmed.to_string())
    }
}

fn kind(value: &Value) -> &'static str {
    match value {
        Value::Null => "null",
        Value::Bool(_) => "boolean",
        Value::Number(_) => "number",
        Value::String(_) => "string",
        Value::Array(_) => "array",
        Value::Object(_) => "object",
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    #[test]
    fn test_parse_claims_array() {
        let response = r#"{
            "claims": [
                {"claim": "the earth is flat", "assessment": "disputed"},
                {"claim": "water is wet", "assessment": "supported"}
            ]
        }"#;

        let claims = parse_claims(response).unwrap();
        assert_eq!(claims.len(), 2);
        assert_eq!(claims[0].get("claim"), Some(&json!("the earth is flat")));
        assert_eq!(claims[1].get("assessment"), Some(&json!("supported")));
    }

    #[test]
    fn test_claims_are_opaque() {
        // Any JSON value is accepted as a claim
        let claims = parse_claims(r#"{"claims": ["plain", 42, {"k": [1, 2]}]}"#).unwrap();
        assert_eq!(claims.len(), 3);
        assert_eq!(claims[1].as_value(), &json!(42));
    }

    #[test]
    fn test_missing_claims_is_empty() {
        assert!(parse_claims(r#"{"summary": "nothing here"}"#).unwrap().is_empty());
        assert!(parse_claims(r#"{"claims": []}"#).unwrap().is_empty());
    }

    #[test]
    fn test_null_claims_rejected() {
        let result = parse_claims(r#"{"claims": null}"#);
        match result {
            Err(ExtractorError::InvalidFormat(msg)) => assert!(msg.contains("null")),
            other => panic!("Expected InvalidFormat, got {:?}", other),
        }
    }

    #[test]
    fn test_parse_json_with_markdown_wrapper() {
        let response = "```json\n{\"claims\": [{\"claim\": \"x\"}]}\n```";
        let claims = parse_claims(response).unwrap();
        assert_eq!(claims.len(), 1);
    }

    #[test]
    fn test_parse_invalid_json() {
        let result = parse_claims("This is not JSON");
        assert!(matches!(result, Err(ExtractorError::JsonParse(_))));
    }

    #[test]
    fn test_parse_truncated_json() {
        // A reply cut off by the response ceiling
        let result = parse_claims(r#"{"claims": [{"claim": "the moon"#);
        assert!(matches!(result, Err(ExtractorError::JsonParse(_))));
    }

    #[test]
    fn test_parse_json_not_object() {
        let result = parse_claims(r#"[{"claim": "x"}]"#);
        assert!(matches!(result, Err(ExtractorError::InvalidFormat(_))));
    }

    #[test]
    fn test_claims_not_array() {
        let result = parse_claims(r#"{"claims": "none"}"#);
        match result {
            Err(ExtractorError::InvalidFormat(msg)) => assert!(msg.contains("string")),
            other => panic!("Expected InvalidFormat, got {:?}", other),
        }
    }

    #[test]
    fn test_extract_json_from_plain_json() {
        let json = r#"{"key": "value"}"#;
        assert_eq!(extract_json(json).unwrap(), json);
    }

    #[test]
    fn test_extract_json_from_markdown_without_language() {
        let response = "```\n{\"key\": \"value\"}\n```";
        assert_eq!(extract_json(response).unwrap(), r#"{"key": "value"}"#);
    }

    #[test]
    fn test_extract_json_unclosed_fence() {
        let response = "```json\n{\"claims\": []}";
        assert_eq!(extract_json(response).unwrap(), r#"{"claims": []}"#);
    }

    #[test]
    fn test_extract_json_empty_fence() {
        assert!(extract_json("```").is_err());
    }
}
