//! hackle TUI — ratatui application shell.
//!
//! Owns the tokio runtime: the draw/input loop is synchronous, and network
//! fetches run as spawned tasks that report back over a channel (see
//! [`app`] for the bridge).

pub mod app;
pub mod commands;
pub mod event;
pub mod theme;
pub mod widgets;

use std::sync::Arc;

use hackle_api::AlgoliaClient;
use hackle_core::config::Config;

pub use app::App;

/// Start the TUI against the live Hacker News Algolia API.
///
/// `query_override` replaces the configured startup query when given.
pub fn run(query_override: Option<String>) -> anyhow::Result<()> {
    let config = Config::load().unwrap_or_else(|_| Config::defaults());
    let theme = theme::Theme::load_default();

    let runtime = tokio::runtime::Builder::new_multi_thread()
        .enable_all()
        .build()?;

    let client = Arc::new(AlgoliaClient::new(config.api.base_url.clone()));

    let mut app = App::new(client, runtime.handle().clone(), config, theme);
    app.bootstrap(query_override);
    app.run()
}
