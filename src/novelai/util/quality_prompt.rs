use crate::novelai::enums::image_model::{ImageModel, QualityPhrase};

/// Adds the model's quality tags to `prompt`. Plain concatenation, escaping is
/// left to the JSON encoder.
pub fn compose_quality_prompt(model: ImageModel, prompt: &str) -> String {
    match model.quality_phrase() {
        Some(QualityPhrase::Prefix(phrase)) => format!("{}{}", phrase, prompt),
        Some(QualityPhrase::Suffix(phrase)) => format!("{}{}", prompt, phrase),
        None => prompt.to_string(),
    }
}
