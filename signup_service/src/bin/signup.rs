use anyhow::Context;
use presentation::controllers::signup::SignupRequest;
use presentation::protocols::{Controller, HttpRequest};
use signup_service::adapters::InMemoryAccountRepository;
use signup_service::factories::make_signup_controller;
use signup_service::settings::Settings;
use std::io::Read;
use std::sync::Arc;

/// Reads one signup request as JSON from stdin and prints the response.
#[tokio::main]
async fn main() -> anyhow::Result<()> {
    shared_kernel::tracing::config_telemetry("signup")?;
    let settings = Settings::load()?;

    let mut input = String::new();
    std::io::stdin()
        .read_to_string(&mut input)
        .context("Failed to read the signup request from stdin")?;
    let body: SignupRequest =
        serde_json::from_str(&input).context("Failed to parse the signup request")?;

    let controller =
        make_signup_controller(&settings, Arc::new(InMemoryAccountRepository::default()));
    let response = controller.handle(HttpRequest { body }).await;

    let output = serde_json::to_string_pretty(&response).context("Failed to serialize response")?;
    println!("{output}");

    Ok(())
}
