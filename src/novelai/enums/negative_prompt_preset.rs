use serde::{Deserialize, Serialize};

// Meaning depends on the model's preset family; undefined pairs resolve to "".
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum NegativePromptPreset {
    LowQualityBadAnatomy,
    LowQuality,
    BadAnatomy,
    Heavy,
    Light,
    #[default]
    None,
}

impl NegativePromptPreset {
    pub const ALL: [NegativePromptPreset; 6] = [
        Self::LowQualityBadAnatomy,
        Self::LowQuality,
        Self::BadAnatomy,
        Self::Heavy,
        Self::Light,
        Self::None,
    ];
}
