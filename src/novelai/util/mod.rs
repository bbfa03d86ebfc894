pub mod negative_prompt;
pub mod quality_prompt;
pub mod seed;
