use novelai_api::{
    resolve_seed, Envy, GenerateImageParameters, ImageModel, ImageResolution,
    NegativePromptPreset, NovelAiApi, RANDOM_SEED_VALUE,
};
use tracing_subscriber::EnvFilter;

#[tokio::main]
async fn main() {
    // tracing
    tracing_subscriber::fmt()
        .with_env_filter(EnvFilter::from_default_env())
        .init();

    // environment
    let envy = match Envy::load() {
        Ok(config) => config,
        Err(e) => panic!("{:#?}", e),
    };

    let api = NovelAiApi::from_envy(reqwest::Client::new(), &envy);

    let parameters = GenerateImageParameters {
        seed: resolve_seed(RANDOM_SEED_VALUE),
        add_quality_prompt: true,
        negative_prompt_preset: NegativePromptPreset::Heavy,
        ..Default::default()
    }
    .with_resolution(ImageResolution::NormalPortraitV3);

    match api
        .generate_image(ImageModel::AnimeV3, "1girl, cherry blossoms", "", &parameters)
        .await
    {
        Ok(res) => println!("{} (seed {})", res.status(), parameters.seed),
        Err(e) => eprintln!("{}", e),
    }
}
