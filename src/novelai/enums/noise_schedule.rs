use serde::{Deserialize, Serialize};

#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum NoiseSchedule {
    #[default]
    Native,
    Karras,
    Exponential,
    PolyExponential,
}

impl NoiseSchedule {
    pub const ALL: [NoiseSchedule; 4] = [
        Self::Native,
        Self::Karras,
        Self::Exponential,
        Self::PolyExponential,
    ];

    pub fn value(&self) -> &'static str {
        match *self {
            Self::Native => "native",
            Self::Karras => "karras",
            Self::Exponential => "exponential",
            Self::PolyExponential => "polyexponential",
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn serde_names_are_wire_names() {
        for noise in NoiseSchedule::ALL {
            assert_eq!(serde_json::to_value(noise).unwrap(), noise.value());
        }
    }
}
