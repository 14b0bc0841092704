//! LLM `generateContent` wire types and the produced chat reply.

use serde::{Deserialize, Serialize};

// ---------------------------------------------------------------------------
// Request
// ---------------------------------------------------------------------------

/// Request body for the `generateContent` endpoint.
#[derive(Debug, Clone, Serialize)]
pub struct GenerateContentRequest {
    pub contents: Vec<Content>,
}

impl GenerateContentRequest {
    /// Single-turn request carrying one text part.
    pub fn from_prompt(prompt: impl Into<String>) -> Self {
        Self {
            contents: vec![Content {
                parts: vec![Part {
                    text: prompt.into(),
                }],
            }],
        }
    }
}

/// One content block (request or response side).
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Content {
    #[serde(default)]
    pub parts: Vec<Part>,
}

/// One text part of a content block.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Part {
    pub text: String,
}

// ---------------------------------------------------------------------------
// Response
// ---------------------------------------------------------------------------

/// Response body of the `generateContent` endpoint. Only the fields this
/// crate reads are modeled; everything else is ignored.
#[derive(Debug, Clone, Deserialize)]
pub struct GenerateContentResponse {
    #[serde(default)]
    pub candidates: Vec<Candidate>,
}

/// One generation candidate.
#[derive(Debug, Clone, Deserialize)]
pub struct Candidate {
    #[serde(default)]
    pub content: Option<Content>,
}

impl GenerateContentResponse {
    /// Text of the first candidate's first part, when the model produced
    /// one.
    pub fn reply_text(self) -> Option<String> {
        self.candidates
            .into_iter()
            .next()?
            .content?
            .parts
            .into_iter()
            .next()
            .map(|part| part.text)
    }
}

/// Response shape of the chat operation.
#[derive(Debug, Clone, Serialize)]
pub struct ChatReply {
    pub success: bool,
    pub message: String,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn reply_text_reads_the_first_candidate_part() {
        let response: GenerateContentResponse = serde_json::from_str(
            r#"{
                "candidates": [
                    { "content": { "parts": [ { "text": "Diversify." } ], "role": "model" } }
                ]
            }"#,
        )
        .expect("response should deserialize");
        assert_eq!(response.reply_text().as_deref(), Some("Diversify."));
    }

    #[test]
    fn reply_text_is_none_when_the_model_produced_nothing() {
        let empty: GenerateContentResponse =
            serde_json::from_str("{}").expect("empty response should deserialize");
        assert!(empty.reply_text().is_none());

        let no_parts: GenerateContentResponse =
            serde_json::from_str(r#"{ "candidates": [ { "content": { "parts": [] } } ] }"#)
                .expect("response should deserialize");
        assert!(no_parts.reply_text().is_none());
    }

    #[test]
    fn request_wraps_the_prompt_in_one_text_part() {
        let request = GenerateContentRequest::from_prompt("What is a SIP?");
        let json = serde_json::to_value(&request).expect("request serializes");
        assert_eq!(json["contents"][0]["parts"][0]["text"], "What is a SIP?");
    }
}
