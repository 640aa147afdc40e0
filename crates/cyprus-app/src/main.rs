//! # Cyprus
//!
//! A walk through the book player core, standing in for the view layer.
//!
//! ## Core Components
//!
//! - **[model]**: [`Book`](cyprus_app::model::Book) and its typed id, plus the fixed catalog.
//! - **[book_actor]**: The catalog actor that serves the books with a simulated latency.
//! - **[clients]**: [`BookClient`](cyprus_app::clients::BookClient), the typed repository.
//! - **[routes]**: The route table and the deferred loaders behind it.
//! - **[playback]**: The shared playing/paused flag.
//! - **[lifecycle]**: Configuration and the [`CyprusSystem`] orchestrator.
//!
//! ## Walkthrough
//!
//! 1. Open the library (`/`): render a placeholder, then the books once they arrive.
//! 2. Open a book (`/player/1`), then one that does not exist (`/player/999`).
//! 3. Subscribe two views to the playback state and toggle it twice.
//!
//! Run with `RUST_LOG=info` (or `debug`) to see the output. `CYPRUS_LATENCY_MS=0`
//! skips the simulated delay.

use cyprus_app::lifecycle::{CyprusConfig, CyprusSystem};
use cyprus_app::routes::Page;
use cyprus_framework::tracing::setup_tracing;
use tracing::{error, info, info_span, warn, Instrument};

#[tokio::main]
async fn main() -> Result<(), String> {
    // Setup tracing once for the entire application
    setup_tracing();

    let config = CyprusConfig::from_env().map_err(|e| e.to_string())?;
    info!(?config, "Starting Cyprus");

    let system = CyprusSystem::with_config(&config);
    let router = system.router();

    // --- Library page ---
    async {
        let page = router.navigate("/").map_err(|e| e.to_string())?;
        let Page::Library(mut data) = page else {
            return Err("Expected the library page".to_string());
        };

        if !data.books.is_settled() {
            info!("Loading books...");
        }
        match data.books.await {
            Ok(books) => {
                for book in &books {
                    info!(id = %book.id, title = %book.title, author = %book.author, "Book");
                }
            }
            Err(e) => error!(error = %e, "Could not load books"),
        }
        Ok::<(), String>(())
    }
    .instrument(info_span!("library"))
    .await?;

    // --- Player pages ---
    for path in ["/player/1", "/player/999"] {
        async {
            let page = router.navigate(path).map_err(|e| e.to_string())?;
            let Page::Player(data) = page else {
                return Err("Expected the player page".to_string());
            };

            info!(book_id = %data.book_id, "Loading book...");
            match data.book.await {
                Ok(book) => info!(title = %book.title, author = %book.author, "Now showing"),
                Err(e) => warn!(error = %e, "Book unavailable"),
            }
            Ok::<(), String>(())
        }
        .instrument(info_span!("player", path))
        .await?;
    }

    // --- Playback ---
    let span = info_span!("playback");
    let entered = span.enter();

    let player_view = system
        .playback
        .subscribe(|playing| info!(view = "player", playing, "Render"));
    let header_view = system
        .playback
        .subscribe(|playing| info!(view = "header", playing, "Render"));

    system.playback.toggle();
    system.playback.toggle();

    player_view.unsubscribe();
    header_view.unsubscribe();
    drop(entered);

    // Shutdown system gracefully
    drop(router);
    system.shutdown().await?;

    info!("Application completed successfully");
    Ok(())
}
