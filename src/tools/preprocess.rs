//! `image_preprocessing`: filter chains delegated to the `image` crate.

use crate::pixel::io::encode_png;
use crate::tools::{parse_args, ToolSpec, IMAGE_PREPROCESSING};
use crate::util::encoding::{decode_lenient, encode};
use crate::util::{SlideMatchError, SlideMatchResult};
use image::DynamicImage;
use serde::Deserialize;
use serde_json::{json, Value};
use tracing::debug;

const CONTRAST_BOOST: f32 = 25.0;
const BRIGHTNESS_BOOST: i32 = 20;
const BLUR_SIGMA: f32 = 1.0;
const SHARPEN_SIGMA: f32 = 1.0;
const SHARPEN_THRESHOLD: i32 = 1;
const DEFAULT_LEVEL: u8 = 128;

/// A single preprocessing step.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum Operation {
    Grayscale,
    Contrast,
    Brightness,
    Blur,
    Sharpen,
    Threshold,
}

impl Operation {
    pub const ALL: [Operation; 6] = [
        Operation::Grayscale,
        Operation::Contrast,
        Operation::Brightness,
        Operation::Blur,
        Operation::Sharpen,
        Operation::Threshold,
    ];

    pub fn name(self) -> &'static str {
        match self {
            Operation::Grayscale => "grayscale",
            Operation::Contrast => "contrast",
            Operation::Brightness => "brightness",
            Operation::Blur => "blur",
            Operation::Sharpen => "sharpen",
            Operation::Threshold => "threshold",
        }
    }

    /// Applies the step; `level` is only used by `Threshold`.
    pub fn apply(self, img: DynamicImage, level: u8) -> DynamicImage {
        match self {
            Operation::Grayscale => img.grayscale(),
            Operation::Contrast => img.adjust_contrast(CONTRAST_BOOST),
            Operation::Brightness => img.brighten(BRIGHTNESS_BOOST),
            Operation::Blur => img.blur(BLUR_SIGMA),
            Operation::Sharpen => img.unsharpen(SHARPEN_SIGMA, SHARPEN_THRESHOLD),
            Operation::Threshold => {
                let mut luma = img.to_luma8();
                for px in luma.pixels_mut() {
                    px.0[0] = if px.0[0] >= level { u8::MAX } else { 0 };
                }
                DynamicImage::ImageLuma8(luma)
            }
        }
    }
}

#[derive(Debug, Deserialize)]
struct PreprocessArgs {
    image: String,
    #[serde(default = "default_operations")]
    operations: Vec<Operation>,
    #[serde(default = "default_level")]
    threshold: u8,
}

fn default_operations() -> Vec<Operation> {
    vec![Operation::Grayscale, Operation::Contrast]
}

fn default_level() -> u8 {
    DEFAULT_LEVEL
}

pub(super) fn spec() -> ToolSpec {
    let names: Vec<&str> = Operation::ALL.iter().map(|op| op.name()).collect();
    ToolSpec {
        name: IMAGE_PREPROCESSING,
        description: "Preprocess image to improve OCR accuracy",
        input_schema: json!({
            "type": "object",
            "properties": {
                "image": {
                    "type": "string",
                    "description": "Base64 encoded image data"
                },
                "operations": {
                    "type": "array",
                    "items": { "type": "string", "enum": names },
                    "description": "Image preprocessing operations to apply",
                    "default": ["grayscale", "contrast"]
                },
                "threshold": {
                    "type": "integer",
                    "description": "Threshold value for binarization (0-255)",
                    "default": DEFAULT_LEVEL,
                    "minimum": 0,
                    "maximum": 255
                }
            },
            "required": ["image"]
        }),
    }
}

pub(super) fn call(arguments: &Value) -> SlideMatchResult<String> {
    let args: PreprocessArgs = parse_args(arguments)?;
    let bytes = decode_lenient(&args.image);
    let mut img = image::load_from_memory(&bytes).map_err(|err| SlideMatchError::Decode {
        reason: err.to_string(),
    })?;

    for op in &args.operations {
        debug!(operation = op.name(), "applying");
        img = op.apply(img, args.threshold);
    }

    let png = encode_png(&img)?;
    let applied: Vec<&str> = args.operations.iter().map(|op| op.name()).collect();
    Ok(format!(
        "Image preprocessing completed.\nOperations applied: {}\nProcessed image (base64): data:image/png;base64,{}",
        applied.join(", "),
        encode(&png)
    ))
}
