//! PlayOff server binary.
//!
//! Loads configuration, wires the vote ledger to its consumers and serves
//! the REST API until Ctrl-C.

use std::error::Error;
use std::sync::Arc;

use tracing_subscriber::layer::SubscriberExt;
use tracing_subscriber::util::SubscriberInitExt;

use playoff::adapters::cover_art::{
    CatalogCoverArtProvider, ChainedCoverArtProvider, ItunesCoverArtProvider,
};
use playoff::adapters::events::NotificationBus;
use playoff::adapters::http::{api_router, ChatHandlers, SongHandlers};
use playoff::application::consumers::{PlaybackSelector, UiStateProjector};
use playoff::application::handlers::chat::{
    ChatRoom, ListChatMessagesHandler, PostChatMessageHandler,
};
use playoff::application::handlers::voting::{
    AddSongHandler, CastVoteHandler, EnrichCoversHandler, GetPlayerHandler, GetSongsHandler,
    RemoveSongHandler, SuperVoteHandler, VotingService,
};
use playoff::config::{AppConfig, LogFormat, ServerConfig};
use playoff::domain::chat::ChatLog;
use playoff::domain::voting::{demo_roster, SongStore, VoteLedger};
use playoff::ports::{CoverArtProvider, VoteEventSubscriber};

#[tokio::main]
async fn main() -> Result<(), Box<dyn Error>> {
    let config = AppConfig::load()?;
    init_tracing(&config.server);
    config.validate()?;

    tracing::info!(
        environment = ?config.server.environment,
        max_songs = config.voting.max_songs,
        "Starting PlayOff"
    );

    // Roster
    let store = if config.voting.seed_demo_roster {
        SongStore::restore(config.voting.max_songs, demo_roster()?)
    } else {
        SongStore::new(config.voting.max_songs)
    };
    let ledger = VoteLedger::new(store);

    // Notification fan-out: playback first, then the UI projection
    let bus = Arc::new(NotificationBus::new());
    let playback = Arc::new(PlaybackSelector::new());
    let projector = Arc::new(UiStateProjector::new());
    bus.subscribe(playback.clone());
    bus.subscribe(projector.clone());

    let service = Arc::new(VotingService::new(ledger, bus.clone()));
    if let Some(report) = service.announce_leader().await {
        tracing::info!(delivered = report.delivered, "Announced initial leader");
    }

    // Cover art
    let mut providers = ChainedCoverArtProvider::new().then(Arc::new(CatalogCoverArtProvider));
    if config.cover_art.itunes_enabled {
        providers = providers.then(Arc::new(ItunesCoverArtProvider::new(
            config.cover_art.itunes(),
        )?));
    }
    let provider: Arc<dyn CoverArtProvider> = Arc::new(providers);
    let enrich_handler = Arc::new(EnrichCoversHandler::new(service.clone(), provider));

    let mut add_handler = AddSongHandler::new(service.clone());
    if config.cover_art.enrich_on_add {
        add_handler = add_handler.with_enrichment(enrich_handler.clone());
    }
    let add_handler = Arc::new(add_handler);

    // HTTP handlers
    let song_handlers = SongHandlers::new(
        Arc::new(GetSongsHandler::new(
            service.clone(),
            playback.clone(),
            projector.clone(),
        )),
        Arc::new(GetPlayerHandler::new(service.clone(), playback.clone())),
        Arc::new(CastVoteHandler::new(service.clone(), playback.clone())),
        Arc::new(SuperVoteHandler::new(service.clone(), playback.clone())),
        add_handler.clone(),
        Arc::new(RemoveSongHandler::new(service.clone())),
        enrich_handler,
    );

    let room = Arc::new(ChatRoom::new(
        ChatLog::with_welcome(config.chat.retention),
        config.chat.page_size,
    ));
    let chat_handlers = ChatHandlers::new(
        Arc::new(PostChatMessageHandler::new(room.clone(), add_handler)),
        Arc::new(ListChatMessagesHandler::new(room)),
    );

    let app = api_router(song_handlers, chat_handlers, &config.server);

    let addr = config.server.socket_addr()?;
    let listener = tokio::net::TcpListener::bind(addr).await?;
    tracing::info!(%addr, "Listening");

    axum::serve(listener, app)
        .with_graceful_shutdown(shutdown_signal())
        .await?;

    tracing::info!("Server stopped");
    Ok(())
}

/// `RUST_LOG` wins over the configured filter.
fn init_tracing(server: &ServerConfig) {
    let filter = tracing_subscriber::EnvFilter::try_from_default_env()
        .unwrap_or_else(|_| tracing_subscriber::EnvFilter::new(&server.log_level));

    let registry = tracing_subscriber::registry().with(filter);
    match server.log_format {
        LogFormat::Json => registry.with(tracing_subscriber::fmt::layer().json()).init(),
        LogFormat::Pretty => registry.with(tracing_subscriber::fmt::layer()).init(),
    }
}

async fn shutdown_signal() {
    if let Err(e) = tokio::signal::ctrl_c().await {
        tracing::error!(error = %e, "Failed to listen for shutdown signal");
        std::future::pending::<()>().await;
    }
    tracing::info!("Shutdown signal received");
}
