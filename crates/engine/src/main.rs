//! Doublecheck Engine - Main entry point.
//!
//! Runs the example command once and prints its result.

use anyhow::Context;
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt};

use doublecheck_engine::infrastructure::config::AppConfig;
use doublecheck_engine::App;

fn main() -> anyhow::Result<()> {
    load_dotenv_from_repo_root();

    // Initialize logging
    tracing_subscriber::registry()
        .with(
            tracing_subscriber::EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| "doublecheck_engine=debug".into()),
        )
        .with(tracing_subscriber::fmt::layer())
        .init();

    let config = AppConfig::from_env();
    let cli_arg = std::env::args().nth(1);
    let arg = config
        .resolve_arg(cli_arg.as_deref())
        .context("invalid argument configuration")?;

    tracing::info!(arg = %arg, "Starting Doublecheck Engine");

    let app = App::new(&config);
    let result = app
        .use_cases
        .example
        .execute(&arg)
        .with_context(|| format!("example command failed for argument {arg}"))?;

    println!("{result}");
    Ok(())
}

fn load_dotenv_from_repo_root() {
    let repo_root = std::path::Path::new(env!("CARGO_MANIFEST_DIR"))
        .join("..")
        .join("..");

    // Prefer local overrides.
    for filename in [".env.local", ".env"] {
        let path = repo_root.join(filename);
        if path.exists() {
            let _ = dotenvy::from_path(path);
        }
    }
}
