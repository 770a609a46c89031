use anyhow::{Context, Result};
use plainwiki_config::Config;
use plainwiki_engine::{PageStore, Templates, io};
use plainwiki_server::AppState;
use tokio::net::TcpListener;

#[tokio::main]
async fn main() -> Result<()> {
    env_logger::Builder::from_env(env_logger::Env::default().default_filter_or("info")).init();

    let config = Config::load_or_default().context("Failed to load configuration")?;

    let store = PageStore::new(&config.content_path);
    io::validate_content_dir(store.content_root())?;
    log::info!("Content directory: {}", store.content_root().display());

    let templates = match &config.templates_path {
        Some(dir) => Templates::load_dir(dir)?,
        None => Templates::builtin()?,
    };
    match templates.source() {
        Some(dir) => log::info!("Templates loaded from {}", dir.display()),
        None => log::info!("Using built-in templates"),
    }

    let state = AppState::new(store, templates);

    let addr = config.socket_addr();
    let listener = TcpListener::bind(addr)
        .await
        .with_context(|| format!("Failed to bind {addr}"))?;
    log::info!("Listening on http://{addr}");

    plainwiki_server::serve(listener, state).await?;

    log::info!("Shutting down");
    Ok(())
}
