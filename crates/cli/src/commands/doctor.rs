//! `quarry doctor` — Diagnose configuration and external dependencies.

use quarry_config::AppConfig;
use quarry_core::provider::Provider;
use quarry_providers::OpenAiCompatProvider;

pub async fn run() -> Result<(), Box<dyn std::error::Error>> {
    println!("Quarry doctor\n");

    let config = match AppConfig::from_env() {
        Ok(config) => {
            println!("  [ok]   configuration loaded");
            println!("         chat model:      {}", config.openai.chat_model);
            println!("         embedding model: {}", config.openai.embedding_model);
            println!("         search index:    {}", config.search.index_name);
            config
        }
        Err(e) => {
            println!("  [fail] configuration: {e}");
            return Err("Configuration is incomplete. See above.".into());
        }
    };

    match quarry_pipeline::TiktokenCounter::for_model(&config.openai.chat_model) {
        Ok(_) => println!("  [ok]   tokenizer resolved for {}", config.openai.chat_model),
        Err(e) => println!("  [fail] tokenizer: {e}"),
    }

    let provider = OpenAiCompatProvider::from_config(&config.openai);
    match provider.health_check().await {
        Ok(true) => println!("  [ok]   model endpoint reachable"),
        Ok(false) => println!("  [warn] model endpoint responded with an error status"),
        Err(e) => println!("  [fail] model endpoint: {e}"),
    }

    Ok(())
}
