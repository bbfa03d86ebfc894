//! Request composition for the NovelAI image generation API.
//!
//! Turns a model, a prompt, a negative prompt and a parameter bundle into the
//! JSON body the service expects, then hands it to a caller supplied
//! [`reqwest::Client`].

#[macro_use]
extern crate lazy_static;

pub mod app;
pub mod novelai;

pub use app::envy::Envy;
pub use novelai::{
    config::{API_URL, GENERATE_IMAGE_PATH, RANDOM_SEED_VALUE},
    enums::{
        image_model::ImageModel,
        image_resolution::{pixels_for_name, ImageResolution},
        negative_prompt_preset::NegativePromptPreset, noise_schedule::NoiseSchedule,
        preset_family::PresetFamily, sampler::Sampler,
    },
    errors::NovelAiApiError,
    models::{
        generate_image_parameters::GenerateImageParameters,
        input_spec::{InputSpec, InputSpecParams},
    },
    service::{provide_input_spec, NovelAiApi},
    util::{
        negative_prompt::resolve_negative_prompt,
        quality_prompt::compose_quality_prompt,
        seed::{random_seed, resolve_seed},
    },
};
