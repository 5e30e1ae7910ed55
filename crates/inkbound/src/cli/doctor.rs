//! Provider health probe.

use inkbound_core::Settings;
use inkbound_models::GeminiTextProvider;
use inkbound_narrative::{GenerationClient, RetryPolicy};

/// Run a single-attempt trivial generation against the configured model
/// and report the result. Exits nonzero when the probe fails.
pub async fn run_doctor() -> Result<(), Box<dyn std::error::Error>> {
    let settings = Settings::from_env()?;
    println!("Model: {}", settings.model_name());

    let provider = GeminiTextProvider::new(settings.model_name())?;
    let client = GenerationClient::new(provider, settings.generation().clone())
        .with_retry(RetryPolicy::default().with_max_attempts(1));

    match client.generate_text("Say 'OK' if you can read this.").await {
        Ok(_) => {
            println!("Provider is healthy.");
            Ok(())
        }
        Err(e) => {
            eprintln!("Provider check failed: {e}");
            Err(e.into())
        }
    }
}
