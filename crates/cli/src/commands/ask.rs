//! `quarry ask` — Run a single question through the pipeline.

use quarry_config::AppConfig;

pub async fn run(message: &str) -> Result<(), Box<dyn std::error::Error>> {
    let config =
        AppConfig::from_env().map_err(|e| format!("Failed to load configuration: {e}"))?;
    let pipeline = super::build_pipeline(&config)?;

    let answer = pipeline
        .answer(message)
        .await
        .map_err(|e| format!("Retrieval failed: {e}"))?;

    match answer {
        Some(text) => println!("{text}"),
        None => println!("No answer available."),
    }

    Ok(())
}
