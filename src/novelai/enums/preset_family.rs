#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum PresetFamily {
    LegacyAnime,
    AnimeV2,
    AnimeV3,
    LegacyFurry,
    FurryV3,
}

impl PresetFamily {
    pub const ALL: [PresetFamily; 5] = [
        Self::LegacyAnime,
        Self::AnimeV2,
        Self::AnimeV3,
        Self::LegacyFurry,
        Self::FurryV3,
    ];
}
