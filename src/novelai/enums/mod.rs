pub mod image_model;
pub mod image_resolution;
pub mod negative_prompt_preset;
pub mod noise_schedule;
pub mod preset_family;
pub mod sampler;
