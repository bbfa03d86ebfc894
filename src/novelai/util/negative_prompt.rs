use std::collections::HashMap;

use crate::novelai::enums::{
    image_model::ImageModel, negative_prompt_preset::NegativePromptPreset,
    preset_family::PresetFamily,
};

static NSFW_PREFIX: &str = "nsfw, ";

lazy_static! {
    static ref NEGATIVE_PROMPT_PRESETS: HashMap<(PresetFamily, NegativePromptPreset), &'static str> =
        HashMap::from([
            (
                (PresetFamily::LegacyAnime, NegativePromptPreset::LowQualityBadAnatomy),
                "nsfw, lowres, bad anatomy, bad hands, text, error, missing fingers, extra digit, fewer digits, cropped, worst quality, low quality, normal quality, jpeg artifacts, signature, watermark, username, blurry",
            ),
            (
                (PresetFamily::LegacyAnime, NegativePromptPreset::LowQuality),
                "nsfw, lowres, text, cropped, worst quality, low quality, normal quality, jpeg artifacts, signature, watermark, twitter username, blurry",
            ),
            ((PresetFamily::LegacyAnime, NegativePromptPreset::None), "lowres"),
            (
                (PresetFamily::AnimeV2, NegativePromptPreset::Heavy),
                "nsfw, lowres, bad, text, error, missing, extra, fewer, cropped, jpeg artifacts, worst quality, bad quality, watermark, displeasing, unfinished, chromatic aberration, scan, scan artifacts",
            ),
            (
                (PresetFamily::AnimeV2, NegativePromptPreset::Light),
                "nsfw, lowres, jpeg artifacts, worst quality, watermark, blurry, very displeasing",
            ),
            ((PresetFamily::AnimeV2, NegativePromptPreset::None), "lowres"),
            (
                (PresetFamily::AnimeV3, NegativePromptPreset::Heavy),
                "nsfw, lowres, {bad}, error, fewer, extra, missing, worst quality, jpeg artifacts, bad quality, watermark, unfinished, displeasing, chromatic aberration, signature, extra digits, artistic error, username, scan, [abstract]",
            ),
            (
                (PresetFamily::AnimeV3, NegativePromptPreset::Light),
                "nsfw, lowres, jpeg artifacts, worst quality, watermark, blurry, very displeasing",
            ),
            ((PresetFamily::AnimeV3, NegativePromptPreset::None), "lowres"),
            (
                (PresetFamily::LegacyFurry, NegativePromptPreset::LowQuality),
                "nsfw, worst quality, low quality, what has science done, what, nightmare fuel, eldritch horror, where is your god now, why",
            ),
            (
                (PresetFamily::LegacyFurry, NegativePromptPreset::BadAnatomy),
                "{worst quality}, low quality, distracting watermark, [nightmare fuel], {{unfinished}}, deformed, outline, pattern, simple background",
            ),
            ((PresetFamily::LegacyFurry, NegativePromptPreset::None), "low res"),
            (
                (PresetFamily::FurryV3, NegativePromptPreset::Heavy),
                "nsfw, {{worst quality}}, [displeasing], {unusual pupils}, guide lines, {{unfinished}}, {bad}, url, artist name, {{tall image}}, mosaic, {sketch page}, comic panel, impact (font), [dated], {logo}, ych, {what}, {where is your god now}, {distorted text}, repeated text, {floating head}, {1994}, {widescreen}, absolutely everyone, sequence, {compression artifacts}, hard translated, {cropped}, {commissioner name}, unknown text, high contrast",
            ),
            (
                (PresetFamily::FurryV3, NegativePromptPreset::Light),
                "{worst quality}, guide lines, unfinished, bad, url, tall image, widescreen, compression artifacts, unknown text",
            ),
            ((PresetFamily::FurryV3, NegativePromptPreset::None), "lowres"),
        ]);
}

/// Preset text for a family, or `""` when the family does not define it.
pub fn preset_text(family: PresetFamily, preset: NegativePromptPreset) -> &'static str {
    NEGATIVE_PROMPT_PRESETS
        .get(&(family, preset))
        .copied()
        .unwrap_or("")
}

/// Builds the negative prompt sent to the service.
///
/// `prompt` must be the caller's prompt before any quality tags were added.
/// When it already asks for nsfw content the preset's leading `"nsfw, "` is
/// dropped. The preset always comes first, joined to `negative_prompt` with
/// `", "` even when the preset is empty.
pub fn resolve_negative_prompt(
    model: ImageModel,
    prompt: &str,
    preset: NegativePromptPreset,
    negative_prompt: &str,
) -> String {
    let mut preset_prompt = preset_text(model.preset_family(), preset);

    if prompt.contains("nsfw") {
        if let Some(stripped) = preset_prompt.strip_prefix(NSFW_PREFIX) {
            preset_prompt = stripped;
        }
    }

    if negative_prompt.is_empty() {
        preset_prompt.to_string()
    } else {
        format!("{}, {}", preset_prompt, negative_prompt)
    }
}
