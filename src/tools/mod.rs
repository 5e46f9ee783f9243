//! Tool catalogue and dispatch.
//!
//! Each tool takes a JSON argument object and produces a single text payload.
//! `call_tool` never fails: decoding, validation and search errors are turned
//! into an `Error: ...` text response so one bad call cannot take down the
//! process serving it.

use crate::util::{SlideMatchError, SlideMatchResult};
use serde::de::DeserializeOwned;
use serde::Serialize;
use serde_json::Value;
use std::fmt::Display;
use tracing::{info_span, warn};

mod preprocess;
mod slide;

pub use preprocess::Operation;
pub use slide::render_decision;

/// Name of the sliding-puzzle matching tool.
pub const SLIDE_CAPTCHA_MATCH: &str = "slide_captcha_match";
/// Name of the image preprocessing tool.
pub const IMAGE_PREPROCESSING: &str = "image_preprocessing";

/// Catalogue entry describing one tool.
#[derive(Clone, Debug, PartialEq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct ToolSpec {
    pub name: &'static str,
    pub description: &'static str,
    /// JSON Schema of the argument object.
    pub input_schema: Value,
}

/// One text block of a tool response.
#[derive(Clone, Debug, PartialEq, Eq, Serialize)]
pub struct TextContent {
    #[serde(rename = "type")]
    pub kind: &'static str,
    pub text: String,
}

/// Result of a tool call.
#[derive(Clone, Debug, PartialEq, Eq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct ToolResponse {
    pub content: Vec<TextContent>,
    #[serde(skip_serializing_if = "std::ops::Not::not")]
    pub is_error: bool,
}

impl ToolResponse {
    /// Successful response with a single text block.
    pub fn text(text: impl Into<String>) -> Self {
        Self {
            content: vec![TextContent {
                kind: "text",
                text: text.into(),
            }],
            is_error: false,
        }
    }

    /// Failed response rendered as `Error: <message>`.
    pub fn error(message: impl Display) -> Self {
        Self {
            is_error: true,
            ..Self::text(format!("Error: {message}"))
        }
    }

    /// Concatenated text of every content block.
    pub fn joined_text(&self) -> String {
        self.content
            .iter()
            .map(|block| block.text.as_str())
            .collect::<Vec<_>>()
            .join("\n")
    }
}

/// Lists every tool this crate can serve.
pub fn list_tools() -> Vec<ToolSpec> {
    vec![slide::spec(), preprocess::spec()]
}

/// Runs the tool called `name` with `arguments`.
///
/// A `null` argument value is treated as an empty object.
pub fn call_tool(name: &str, arguments: &Value) -> ToolResponse {
    let _span = info_span!("call_tool", tool = name).entered();
    match dispatch(name, arguments) {
        Ok(text) => ToolResponse::text(text),
        Err(message) => {
            warn!(%message, "tool call failed");
            ToolResponse::error(message)
        }
    }
}

fn dispatch(name: &str, arguments: &Value) -> Result<String, String> {
    match name {
        SLIDE_CAPTCHA_MATCH => slide::call(arguments)
            .map_err(|err| format!("Slide captcha matching failed: {err}")),
        IMAGE_PREPROCESSING => preprocess::call(arguments)
            .map_err(|err| format!("Image preprocessing failed: {err}")),
        _ => Err(SlideMatchError::UnknownTool {
            name: name.to_owned(),
        }
        .to_string()),
    }
}

fn parse_args<T: DeserializeOwned>(arguments: &Value) -> SlideMatchResult<T> {
    let value = match arguments {
        Value::Null => Value::Object(Default::default()),
        other => other.clone(),
    };
    serde_json::from_value(value).map_err(|err| SlideMatchError::InvalidArguments {
        reason: err.to_string(),
    })
}

#[cfg(test)]
mod tests {
    use super::{call_tool, list_tools, ToolResponse};
    use serde_json::json;

    #[test]
    fn catalogue_lists_both_tools() {
        let names: Vec<_> = list_tools().into_iter().map(|tool| tool.name).collect();
        assert_eq!(names, vec!["slide_captcha_match", "image_preprocessing"]);
    }

    #[test]
    fn unknown_tool_is_reported_as_text() {
        let response = call_tool("ocr_recognize", &json!({}));
        assert!(response.is_error);
        assert_eq!(response.joined_text(), "Error: unknown tool: ocr_recognize");
    }

    #[test]
    fn response_serializes_like_a_tool_result() {
        let value = serde_json::to_value(ToolResponse::text("ok")).unwrap();
        assert_eq!(value, json!({ "content": [{ "type": "text", "text": "ok" }] }));

        let value = serde_json::to_value(ToolResponse::error("boom")).unwrap();
        assert_eq!(
            value,
            json!({ "content": [{ "type": "text", "text": "Error: boom" }], "isError": true })
        );
    }
}
