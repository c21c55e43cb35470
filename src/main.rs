use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt};

use event_admin::{i18n, mock, AppError, Config, EventFilter, EventService};

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    // Initialize tracing
    tracing_subscriber::registry()
        .with(
            tracing_subscriber::EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| "event_admin=debug".into()),
        )
        .with(tracing_subscriber::fmt::layer())
        .init();

    // Load configuration
    dotenvy::dotenv().ok();
    let config = Config::from_env()?;

    tracing::info!("Starting {}", i18n::t("app.name"));

    let service = EventService::new(&config)?;

    // Optional free-text search term from the command line.
    let filter = EventFilter {
        search: std::env::args().nth(1),
        ..EventFilter::default()
    };

    let events = match service.list_events(&filter).await {
        Ok(events) => events,
        Err(AppError::Network(reason)) => {
            tracing::warn!("{} ({})", i18n::t("cli.using_fallback"), reason);
            mock::fallback_events(&config.assets)
        }
        Err(err) => {
            tracing::error!(
                "{}",
                i18n::t_with("cli.fetch_failed", &[("err", &err.to_string())])
            );
            return Err(err.into());
        }
    };

    if events.is_empty() {
        println!("{}", i18n::t("cli.no_events"));
        return Ok(());
    }

    for event in &events {
        let date = event
            .start_date
            .map(|d| d.format("%Y-%m-%d").to_string())
            .unwrap_or_else(|| "????-??-??".to_string());
        println!(
            "{:>4}  {:<9}  {}  {:<5}  {:<40}  {}",
            event.id,
            event.status.as_str(),
            date,
            event.time,
            event.title,
            event.location
        );
    }

    Ok(())
}
