use serde::{Deserialize, Serialize};

#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum Sampler {
    KLms,
    #[default]
    KEuler,
    KEulerAncestral,
    KHeun,
    Plms,
    Ddim,
    DdimV3,
    NaiSmea,
    NaiSmeaDyn,
    #[serde(rename = "k_dpmpp_2m")]
    KDpmpp2m,
    #[serde(rename = "k_dpmpp_2s_ancestral")]
    KDpmpp2sAncestral,
    KDpmppSde,
    #[serde(rename = "k_dpm_2")]
    KDpm2,
    #[serde(rename = "k_dpm_2_ancestral")]
    KDpm2Ancestral,
    KDpmAdaptive,
    KDpmFast,
}

impl Sampler {
    pub const ALL: [Sampler; 16] = [
        Self::KLms,
        Self::KEuler,
        Self::KEulerAncestral,
        Self::KHeun,
        Self::Plms,
        Self::Ddim,
        Self::DdimV3,
        Self::NaiSmea,
        Self::NaiSmeaDyn,
        Self::KDpmpp2m,
        Self::KDpmpp2sAncestral,
        Self::KDpmppSde,
        Self::KDpm2,
        Self::KDpm2Ancestral,
        Self::KDpmAdaptive,
        Self::KDpmFast,
    ];

    pub fn value(&self) -> &'static str {
        match *self {
            Self::KLms => "k_lms",
            Self::KEuler => "k_euler",
            Self::KEulerAncestral => "k_euler_ancestral",
            Self::KHeun => "k_heun",
            Self::Plms => "plms",
            Self::Ddim => "ddim",
            Self::DdimV3 => "ddim_v3",
            Self::NaiSmea => "nai_smea",
            Self::NaiSmeaDyn => "nai_smea_dyn",
            Self::KDpmpp2m => "k_dpmpp_2m",
            Self::KDpmpp2sAncestral => "k_dpmpp_2s_ancestral",
            Self::KDpmppSde => "k_dpmpp_sde",
            Self::KDpm2 => "k_dpm_2",
            Self::KDpm2Ancestral => "k_dpm_2_ancestral",
            Self::KDpmAdaptive => "k_dpm_adaptive",
            Self::KDpmFast => "k_dpm_fast",
        }
    }
}
