use serde::Deserialize;

use crate::novelai::enums::{
    image_resolution::ImageResolution, negative_prompt_preset::NegativePromptPreset,
    noise_schedule::NoiseSchedule, sampler::Sampler,
};

#[derive(Debug, Clone, PartialEq, Deserialize)]
#[serde(default)]
pub struct GenerateImageParameters {
    pub width: u32,
    pub height: u32,
    pub sampler: Sampler,
    pub steps: u32,
    pub scale: f32,
    pub smea: bool,
    pub smea_dyn: bool,
    pub seed: u32,
    pub add_quality_prompt: bool,
    pub negative_prompt_preset: NegativePromptPreset,
    pub noise_schedule: NoiseSchedule,
}

impl Default for GenerateImageParameters {
    fn default() -> Self {
        Self {
            width: 1024,
            height: 1024,
            sampler: Sampler::KEuler,
            steps: 28,
            scale: 5.0,
            smea: false,
            smea_dyn: false,
            seed: 0,
            add_quality_prompt: false,
            negative_prompt_preset: NegativePromptPreset::None,
            noise_schedule: NoiseSchedule::Native,
        }
    }
}

impl GenerateImageParameters {
    /// Takes width and height from the resolution table. An unspecified
    /// `(0, 0)` entry leaves the current size untouched.
    pub fn with_resolution(self, resolution: ImageResolution) -> Self {
        let (width, height) = resolution.pixels();
        if width == 0 || height == 0 {
            return self;
        }

        Self {
            width,
            height,
            ..self
        }
    }
}
