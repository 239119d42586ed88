use anyhow::Context;
use petconnect::version::full_version_info;
use petconnect::{AppBuilder, ContentView, EventKind, LoadState};
use tracing_subscriber::EnvFilter;

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    // Initialize tracing for logging (RUST_LOG overrides the default level)
    tracing_subscriber::fmt()
        .with_env_filter(
            EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info")),
        )
        .init();

    tracing::info!("Starting {}", full_version_info());

    let mut app = AppBuilder::new()
        .with_production_deps()
        .context("Failed to load configuration")?
        .build()
        .context("Failed to build dependencies")?
        .into_app();

    // Mirror orchestrator events into the log, the way a UI shell would consume them
    let mut events = app.event_bus().subscribe();
    let listener = tokio::spawn(async move {
        while let Ok(event) = events.recv().await {
            match event.kind {
                EventKind::UserNotice(msg) => tracing::warn!("[{}] {}", event.source, msg),
                other => tracing::debug!("[{}] {:?}", event.source, other),
            }
        }
    });

    let state = app.load().await.clone();

    match app.content() {
        ContentView::Home(pets) => {
            println!("{} pets near you:", pets.len());
            for pet in pets {
                let distance = pet
                    .location
                    .distance
                    .map(|d| format!("{} mi", d))
                    .unwrap_or_else(|| "?".to_string());
                println!(
                    "  #{:<3} {:<10} {:<18} {:<7} {:>6}  {}",
                    pet.id,
                    pet.name,
                    pet.breed,
                    pet.pet_type,
                    distance,
                    pet.location
                );
            }
        }
        ContentView::Error(msg) => println!("Error: {}", msg),
        other => println!("{:?}", other),
    }

    if let Some(user) = app.user() {
        println!(
            "Signed in as {} ({}), {} listings, {} purchases",
            user.full_name,
            user.share_id,
            user.listings.len(),
            user.purchase_history.len()
        );
        println!("  avatar: {}", user.avatar_url());
    }

    drop(app);
    listener.abort();

    if let LoadState::Failed(msg) = state {
        anyhow::bail!(msg);
    }
    Ok(())
}
