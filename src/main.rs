use mimalloc::MiMalloc;
use tracing::info;
use tracing_subscriber::{EnvFilter, layer::SubscriberExt, util::SubscriberInitExt};

#[global_allocator]
static GLOBAL: MiMalloc = MiMalloc;

#[tokio::main]
async fn main() -> Result<(), Box<dyn std::error::Error>> {
    dotenvy::dotenv().ok();

    let cfg = schemafix::config::Config::from_env()?;

    let env_filter =
        EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(cfg.loglevel.clone()));
    tracing_subscriber::registry()
        .with(env_filter)
        .with(
            tracing_subscriber::fmt::layer()
                .with_level(true)
                .with_target(false),
        )
        .init();

    info!(url = %cfg.url, loglevel = %cfg.loglevel, "starting guest-mode schema fix");

    let migrator = schemafix::Migrator::new(&cfg)?;

    let statements = schemafix::statements::STATEMENTS;
    println!("Running {} SQL statements...", statements.len());
    let report = migrator.run(statements).await;

    println!("\nSchema fix finished!");
    println!("✅ succeeded: {}", report.success_count);
    println!("❌ failed: {}", report.error_count);
    println!("{}", serde_json::to_string_pretty(&report)?);

    // Partial failure is recorded in the report, not in the exit code.
    Ok(())
}
