//! Monsterdex Player - desktop composition root binary.

use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt};

use monsterdex_player::config::{PlayerConfig, DEFAULT_LOG_FILTER};

const PLAYER_CSS: &str = include_str!("../assets/css/monsterdex.css");

fn main() {
    tracing_subscriber::registry()
        .with(
            tracing_subscriber::EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| DEFAULT_LOG_FILTER.into()),
        )
        .with(tracing_subscriber::fmt::layer())
        .init();

    let config = PlayerConfig::from_env();
    tracing::info!(shell = ?config.shell, seed = config.seed_starter_monsters, "Starting Monsterdex Player");

    let head = format!("<style>{}</style>", PLAYER_CSS);
    let cfg = dioxus_desktop::Config::new().with_custom_head(head);

    dioxus::LaunchBuilder::new()
        .with_cfg(cfg)
        .with_context(config.shell)
        .with_context(config)
        .launch(monsterdex_player::ui::app);
}
