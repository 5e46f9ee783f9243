//! `slide_captcha_match`: locate a puzzle piece inside its background.

use crate::decision::{decide, Decision, DEFAULT_THRESHOLD};
use crate::pixel::io::decode_rgba;
use crate::pixel::OwnedImage;
use crate::search::{MatchConfig, Matcher, SearchMode, DEFAULT_STEP};
use crate::tools::{parse_args, ToolSpec, SLIDE_CAPTCHA_MATCH};
use crate::util::encoding::decode_lenient;
use crate::util::{SlideMatchError, SlideMatchResult};
use serde::Deserialize;
use serde_json::{json, Value};

#[derive(Debug, Deserialize)]
struct SlideArgs {
    background_image: String,
    piece_image: String,
    #[serde(default = "default_threshold")]
    threshold: f32,
    #[serde(default = "default_step")]
    step: usize,
    #[serde(default)]
    refine: bool,
}

fn default_threshold() -> f32 {
    DEFAULT_THRESHOLD
}

fn default_step() -> usize {
    DEFAULT_STEP
}

pub(super) fn spec() -> ToolSpec {
    ToolSpec {
        name: SLIDE_CAPTCHA_MATCH,
        description: "Find sliding position for captcha solving using template matching",
        input_schema: json!({
            "type": "object",
            "properties": {
                "background_image": {
                    "type": "string",
                    "description": "Base64 encoded background image with gap"
                },
                "piece_image": {
                    "type": "string",
                    "description": "Base64 encoded puzzle piece image"
                },
                "threshold": {
                    "type": "number",
                    "description": "Matching threshold (0-1)",
                    "default": 0.8
                },
                "step": {
                    "type": "integer",
                    "description": "Sampling stride between candidate positions",
                    "default": DEFAULT_STEP,
                    "minimum": 1
                },
                "refine": {
                    "type": "boolean",
                    "description": "Rescan at single-pixel stride around the best coarse position",
                    "default": false
                }
            },
            "required": ["background_image", "piece_image"]
        }),
    }
}

pub(super) fn call(arguments: &Value) -> SlideMatchResult<String> {
    let args: SlideArgs = parse_args(arguments)?;
    if !(0.0..=1.0).contains(&args.threshold) {
        return Err(SlideMatchError::InvalidInput(
            "threshold must be within [0, 1]",
        ));
    }

    let background = decode_image("background image", &args.background_image)?;
    let piece = decode_image("piece image", &args.piece_image)?;

    let cfg = MatchConfig {
        step: args.step,
        mode: if args.refine {
            SearchMode::CoarseToFine
        } else {
            SearchMode::Exhaustive
        },
        ..MatchConfig::default()
    };
    let best = Matcher::new(piece)
        .with_config(cfg)
        .match_image(background.view())?;

    Ok(render_decision(&decide(best, args.threshold)))
}

fn decode_image(label: &str, encoded: &str) -> SlideMatchResult<OwnedImage> {
    decode_rgba(&decode_lenient(encoded)).map_err(|err| match err {
        SlideMatchError::Decode { reason } => SlideMatchError::Decode {
            reason: format!("{label}: {reason}"),
        },
        other => other,
    })
}

/// Renders a decision as the tool's text payload.
pub fn render_decision(decision: &Decision) -> String {
    let best = decision.result;
    let percent = f64::from(best.confidence) * 100.0;
    match decision.slide_distance() {
        Some(distance) => format!(
            "Slide captcha match found!\nPosition: ({}, {})\nConfidence: {percent:.2}%\nSlide distance: {distance}px",
            best.x, best.y
        ),
        None => format!(
            "No reliable match found. Best match at ({}, {}) with confidence {percent:.2}%",
            best.x, best.y
        ),
    }
}
