use serde::Serialize;

use super::generate_image_parameters::GenerateImageParameters;

// Field order is the wire order. Every parameter is sent as a string.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct InputSpec {
    pub input: String,
    pub model: String,
    pub action: String,
    pub parameters: InputSpecParams,
}

#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct InputSpecParams {
    pub width: String,
    pub height: String,
    pub scale: String,
    pub sampler: String,
    pub steps: String,
    pub sm: String,
    pub sm_dyn: String,
    pub noise_schedule: String,
    pub seed: String,
    pub negative_prompt: String,
}

impl InputSpecParams {
    pub fn new(params: &GenerateImageParameters, negative_prompt: String) -> Self {
        Self {
            width: params.width.to_string(),
            height: params.height.to_string(),
            scale: params.scale.to_string(),
            sampler: params.sampler.value().to_string(),
            steps: params.steps.to_string(),
            sm: params.smea.to_string(),
            sm_dyn: params.smea_dyn.to_string(),
            noise_schedule: params.noise_schedule.value().to_string(),
            seed: params.seed.to_string(),
            negative_prompt,
        }
    }
}

impl InputSpec {
    pub fn to_json(&self) -> Result<String, serde_json::Error> {
        serde_json::to_string(self)
    }
}
