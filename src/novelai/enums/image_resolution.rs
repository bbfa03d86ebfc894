use std::collections::HashMap;

use serde::{Deserialize, Serialize};

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum ImageResolution {
    SmallPortrait,
    SmallLandscape,
    SmallSquare,

    NormalPortrait,
    NormalLandscape,
    NormalSquare,

    LargePortrait,
    LargeLandscape,
    LargeSquare,

    SmallPortraitV2,
    SmallLandscapeV2,
    SmallSquareV2,

    NormalPortraitV2,
    NormalLandscapeV2,
    NormalSquareV2,

    LargePortraitV2,
    LargeLandscapeV2,
    LargeSquareV2,

    SmallPortraitV3,
    SmallLandscapeV3,
    SmallSquareV3,

    NormalPortraitV3,
    NormalLandscapeV3,
    NormalSquareV3,

    LargePortraitV3,
    LargeLandscapeV3,
    LargeSquareV3,

    WallpaperPortrait,
    WallpaperLandscape,
}

lazy_static! {
    static ref RESOLUTION_PIXELS: HashMap<ImageResolution, (u32, u32)> = HashMap::from([
        (ImageResolution::SmallPortrait, (384, 640)),
        (ImageResolution::SmallLandscape, (640, 384)),
        (ImageResolution::SmallSquare, (512, 512)),
        (ImageResolution::NormalPortrait, (512, 768)),
        (ImageResolution::NormalLandscape, (768, 512)),
        (ImageResolution::NormalSquare, (640, 640)),
        (ImageResolution::LargePortrait, (512, 1024)),
        (ImageResolution::LargeLandscape, (1024, 512)),
        (ImageResolution::LargeSquare, (1024, 1024)),
        (ImageResolution::SmallPortraitV2, (512, 768)),
        (ImageResolution::SmallLandscapeV2, (768, 512)),
        (ImageResolution::SmallSquareV2, (640, 640)),
        (ImageResolution::NormalPortraitV2, (832, 1216)),
        (ImageResolution::NormalLandscapeV2, (1216, 832)),
        (ImageResolution::NormalSquareV2, (1024, 1024)),
        (ImageResolution::LargePortraitV2, (1024, 1536)),
        (ImageResolution::LargeLandscapeV2, (1536, 1024)),
        (ImageResolution::LargeSquareV2, (1472, 1472)),
        (ImageResolution::SmallPortraitV3, (512, 768)),
        (ImageResolution::SmallLandscapeV3, (768, 512)),
        (ImageResolution::SmallSquareV3, (640, 640)),
        (ImageResolution::NormalPortraitV3, (832, 1216)),
        (ImageResolution::NormalLandscapeV3, (1216, 832)),
        (ImageResolution::NormalSquareV3, (1024, 1024)),
        (ImageResolution::LargePortraitV3, (1024, 1536)),
        (ImageResolution::LargeLandscapeV3, (1536, 1024)),
        (ImageResolution::LargeSquareV3, (1472, 1472)),
        (ImageResolution::WallpaperPortrait, (1088, 1920)),
        (ImageResolution::WallpaperLandscape, (1920, 1088)),
    ]);
}

impl ImageResolution {
    pub const ALL: [ImageResolution; 29] = [
        Self::SmallPortrait,
        Self::SmallLandscape,
        Self::SmallSquare,
        Self::NormalPortrait,
        Self::NormalLandscape,
        Self::NormalSquare,
        Self::LargePortrait,
        Self::LargeLandscape,
        Self::LargeSquare,
        Self::SmallPortraitV2,
        Self::SmallLandscapeV2,
        Self::SmallSquareV2,
        Self::NormalPortraitV2,
        Self::NormalLandscapeV2,
        Self::NormalSquareV2,
        Self::LargePortraitV2,
        Self::LargeLandscapeV2,
        Self::LargeSquareV2,
        Self::SmallPortraitV3,
        Self::SmallLandscapeV3,
        Self::SmallSquareV3,
        Self::NormalPortraitV3,
        Self::NormalLandscapeV3,
        Self::NormalSquareV3,
        Self::LargePortraitV3,
        Self::LargeLandscapeV3,
        Self::LargeSquareV3,
        Self::WallpaperPortrait,
        Self::WallpaperLandscape,
    ];

    pub fn value(&self) -> &'static str {
        match *self {
            Self::SmallPortrait => "small_portrait",
            Self::SmallLandscape => "small_landscape",
            Self::SmallSquare => "small_square",
            Self::NormalPortrait => "normal_portrait",
            Self::NormalLandscape => "normal_landscape",
            Self::NormalSquare => "normal_square",
            Self::LargePortrait => "large_portrait",
            Self::LargeLandscape => "large_landscape",
            Self::LargeSquare => "large_square",
            Self::SmallPortraitV2 => "small_portrait_v2",
            Self::SmallLandscapeV2 => "small_landscape_v2",
            Self::SmallSquareV2 => "small_square_v2",
            Self::NormalPortraitV2 => "normal_portrait_v2",
            Self::NormalLandscapeV2 => "normal_landscape_v2",
            Self::NormalSquareV2 => "normal_square_v2",
            Self::LargePortraitV2 => "large_portrait_v2",
            Self::LargeLandscapeV2 => "large_landscape_v2",
            Self::LargeSquareV2 => "large_square_v2",
            Self::SmallPortraitV3 => "small_portrait_v3",
            Self::SmallLandscapeV3 => "small_landscape_v3",
            Self::SmallSquareV3 => "small_square_v3",
            Self::NormalPortraitV3 => "normal_portrait_v3",
            Self::NormalLandscapeV3 => "normal_landscape_v3",
            Self::NormalSquareV3 => "normal_square_v3",
            Self::LargePortraitV3 => "large_portrait_v3",
            Self::LargeLandscapeV3 => "large_landscape_v3",
            Self::LargeSquareV3 => "large_square_v3",
            Self::WallpaperPortrait => "wallpaper_portrait",
            Self::WallpaperLandscape => "wallpaper_landscape",
        }
    }

    pub fn from_name(name: &str) -> Option<Self> {
        Self::ALL.iter().copied().find(|resolution| resolution.value() == name)
    }

    /// Pixel `(width, height)`. `(0, 0)` means unspecified and callers are
    /// expected to substitute their own default.
    pub fn pixels(&self) -> (u32, u32) {
        RESOLUTION_PIXELS.get(self).copied().unwrap_or((0, 0))
    }
}

pub fn pixels_for_name(name: &str) -> (u32, u32) {
    match ImageResolution::from_name(name) {
        Some(resolution) => resolution.pixels(),
        None => {
            tracing::debug!("unrecognized resolution {}, using (0, 0)", name);
            (0, 0)
        }
    }
}
