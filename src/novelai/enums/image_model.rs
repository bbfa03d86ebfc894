use serde::{Deserialize, Serialize};

use super::preset_family::PresetFamily;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum ImageModel {
    AnimeCurated,
    AnimeFull,
    AnimeV2,
    AnimeV3,
    Furry,
    FurryV3,
    InpaintingAnimeCurated,
    InpaintingAnimeFull,
    InpaintingAnimeV3,
    InpaintingFurry,
    InpaintingFurryV3,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum QualityPhrase {
    Prefix(&'static str),
    Suffix(&'static str),
}

impl ImageModel {
    pub const ALL: [ImageModel; 11] = [
        Self::AnimeCurated,
        Self::AnimeFull,
        Self::AnimeV2,
        Self::AnimeV3,
        Self::Furry,
        Self::FurryV3,
        Self::InpaintingAnimeCurated,
        Self::InpaintingAnimeFull,
        Self::InpaintingAnimeV3,
        Self::InpaintingFurry,
        Self::InpaintingFurryV3,
    ];

    pub fn value(&self) -> &'static str {
        match *self {
            Self::AnimeCurated => "safe-diffusion",
            Self::AnimeFull => "nai-diffusion",
            Self::AnimeV2 => "nai-diffusion-2",
            Self::AnimeV3 => "nai-diffusion-3",
            Self::Furry => "nai-diffusion-furry",
            Self::FurryV3 => "nai-diffusion-furry-3",
            Self::InpaintingAnimeCurated => "safe-diffusion-inpainting",
            Self::InpaintingAnimeFull => "nai-diffusion-inpainting",
            Self::InpaintingAnimeV3 => "nai-diffusion-3-inpainting",
            Self::InpaintingFurry => "furry-diffusion-inpainting",
            Self::InpaintingFurryV3 => "nai-diffusion-furry-3-inpainting",
        }
    }

    /// Inpainting models share the negative prompt table of their base model.
    pub fn preset_family(&self) -> PresetFamily {
        match *self {
            Self::AnimeCurated
            | Self::AnimeFull
            | Self::InpaintingAnimeCurated
            | Self::InpaintingAnimeFull => PresetFamily::LegacyAnime,
            Self::AnimeV2 => PresetFamily::AnimeV2,
            Self::AnimeV3 | Self::InpaintingAnimeV3 => PresetFamily::AnimeV3,
            Self::Furry | Self::InpaintingFurry => PresetFamily::LegacyFurry,
            Self::FurryV3 | Self::InpaintingFurryV3 => PresetFamily::FurryV3,
        }
    }

    pub fn quality_phrase(&self) -> Option<QualityPhrase> {
        match *self {
            Self::AnimeCurated
            | Self::AnimeFull
            | Self::Furry
            | Self::InpaintingAnimeCurated
            | Self::InpaintingAnimeFull
            | Self::InpaintingFurry => Some(QualityPhrase::Prefix("masterpiece, best quality, ")),
            Self::AnimeV2 => Some(QualityPhrase::Prefix(
                "very aesthetic, best quality, absurdres, ",
            )),
            Self::AnimeV3 | Self::FurryV3 | Self::InpaintingAnimeV3 | Self::InpaintingFurryV3 => {
                Some(QualityPhrase::Suffix(
                    ", best quality, amazing quality, very aesthetic, absurdres",
                ))
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use std::collections::HashSet;

    use super::*;

    #[test]
    fn every_model_has_a_distinct_wire_name() {
        let names: HashSet<&str> = ImageModel::ALL.iter().map(|m| m.value()).collect();

        assert_eq!(names.len(), ImageModel::ALL.len());
        assert!(names.iter().all(|name| !name.is_empty()));
    }

    #[test]
    fn inpainting_models_share_base_family() {
        assert_eq!(
            ImageModel::InpaintingAnimeV3.preset_family(),
            ImageModel::AnimeV3.preset_family()
        );
        assert_eq!(
            ImageModel::InpaintingFurry.preset_family(),
            ImageModel::Furry.preset_family()
        );
        assert_eq!(
            ImageModel::InpaintingAnimeCurated.preset_family(),
            PresetFamily::LegacyAnime
        );
    }

    #[test]
    fn deserializes_from_snake_case() {
        let model: ImageModel = serde_json::from_str("\"inpainting_furry_v3\"").unwrap();
        assert_eq!(model, ImageModel::InpaintingFurryV3);
        assert_eq!(model.value(), "nai-diffusion-furry-3-inpainting");
    }
}
