use prs::app::run;
use prs::github::GitHubClient;
use std::process::ExitCode;
use tracing_subscriber::EnvFilter;

#[tokio::main]
async fn main() -> ExitCode {
    // Load .env file if it exists
    dotenv::dotenv().ok();

    // Diagnostics go to stderr; stdout carries only the listing
    tracing_subscriber::fmt()
        .with_env_filter(
            EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("warn")),
        )
        .with_writer(std::io::stderr)
        .init();

    let code = run(
        std::env::args_os(),
        |key| std::env::var(key).ok(),
        GitHubClient::from_config,
        &mut std::io::stdout(),
        &mut std::io::stderr(),
    )
    .await;

    ExitCode::from(code)
}
