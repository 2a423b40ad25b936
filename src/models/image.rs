use crate::error::{Result, ZImageError};
use chrono::Utc;
use serde::Deserialize;
use std::fs;
use std::path::{Path, PathBuf};

pub const DEFAULT_WIDTH: u32 = 1024;
pub const DEFAULT_HEIGHT: u32 = 1024;
pub const DEFAULT_STEPS: u32 = 4;

const MIN_DIMENSION: u32 = 256;
const MAX_DIMENSION: u32 = 2048;
const MIN_STEPS: u32 = 1;
const MAX_STEPS: u32 = 20;

#[derive(Debug, Clone, Deserialize)]
pub struct GenerationRequest {
    pub prompt: String,
    pub width: Option<u32>,
    pub height: Option<u32>,
    pub steps: Option<u32>,
}

impl GenerationRequest {
    pub fn new(prompt: impl Into<String>) -> Self {
        Self {
            prompt: prompt.into(),
            width: None,
            height: None,
            steps: None,
        }
    }

    pub fn with_size(mut self, width: u32, height: u32) -> Self {
        self.width = Some(width);
        self.height = Some(height);
        self
    }

    pub fn with_steps(mut self, steps: u32) -> Self {
        self.steps = Some(steps);
        self
    }

    /// Parameter correction applied by callers before submission. Dimensions
    /// are kept within 256..=2048 and floored to a multiple of 8; steps are
    /// kept within 1..=20. The dispatcher itself never enforces bounds.
    pub fn clamped(mut self) -> Self {
        self.width = self.width.map(clamp_dimension);
        self.height = self.height.map(clamp_dimension);
        self.steps = self.steps.map(|s| s.clamp(MIN_STEPS, MAX_STEPS));
        self
    }
}

fn clamp_dimension(value: u32) -> u32 {
    value.clamp(MIN_DIMENSION, MAX_DIMENSION) / 8 * 8
}

/// Raw JPEG bytes returned by a generation node, together with the base URL
/// of the node that produced them.
#[derive(Debug, Clone)]
pub struct GeneratedImage {
    pub data: Vec<u8>,
    pub endpoint: String,
}

impl GeneratedImage {
    pub fn len(&self) -> usize {
        self.data.len()
    }

    pub fn is_empty(&self) -> bool {
        self.data.is_empty()
    }

    /// Base64 data URL for embedding the image without touching disk.
    pub fn as_data_url(&self) -> String {
        format!("data:image/jpeg;base64,{}", base64::encode(&self.data))
    }

    pub fn save(&self, path: impl AsRef<Path>) -> Result<()> {
        fs::write(path.as_ref(), &self.data)
            .map_err(|e| ZImageError::IoError(format!("failed to save image: {}", e)))
    }

    /// Writes the image as `generated-image-<millis>.jpg` under `dir` and
    /// returns the full path.
    pub fn save_timestamped(&self, dir: impl AsRef<Path>) -> Result<PathBuf> {
        let filename = format!("generated-image-{}.jpg", Utc::now().timestamp_millis());
        let path = dir.as_ref().join(filename);
        self.save(&path)?;
        Ok(path)
    }
}

/// Fixed dimension presets offered by the reference frontend.
#[derive(Debug, Clone, Copy)]
pub struct SizePreset {
    pub name: &'static str,
    pub width: u32,
    pub height: u32,
}

pub const PRESET_SIZES: &[SizePreset] = &[
    SizePreset { name: "2k-square", width: 2048, height: 2048 },
    SizePreset { name: "2k-wide", width: 2048, height: 1152 },
    SizePreset { name: "2k-portrait", width: 1152, height: 2048 },
    SizePreset { name: "2k-landscape", width: 2048, height: 1536 },
    SizePreset { name: "hd-square", width: 1024, height: 1024 },
    SizePreset { name: "hd-wide", width: 1280, height: 720 },
    SizePreset { name: "hd-portrait", width: 720, height: 1280 },
];

pub fn find_preset(name: &str) -> Option<&'static SizePreset> {
    PRESET_SIZES
        .iter()
        .find(|preset| preset.name.eq_ignore_ascii_case(name.trim()))
}
