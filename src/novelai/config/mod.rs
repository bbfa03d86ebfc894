pub static API_URL: &str = "https://api.novelai.net";
pub static GENERATE_IMAGE_PATH: &str = "/ai/generate-image";

/// Seed value callers pass to ask for a random seed. It is never a valid
/// `u32` seed, see [`crate::novelai::util::seed::resolve_seed`].
pub const RANDOM_SEED_VALUE: i64 = -1;

pub static GENERATE_ACTION: &str = "generate";
