use std::path::PathBuf;
use std::sync::Arc;

use clap::Parser;
use notify::{EventKind, RecommendedWatcher, RecursiveMode, Watcher};
use tokio::sync::RwLock;
use tower_http::services::{ServeDir, ServeFile};
use tracing::{error, info, warn};

use sprofile_stub::{stub_router, Fixtures, StubState};

#[derive(Parser)]
#[command(name = "sprofile-stub")]
struct Args {
    /// Path to a fixtures YAML file. Uses built-in demo data when omitted.
    #[arg(long, env = "SPROFILE_FIXTURES")]
    fixtures: Option<PathBuf>,

    /// Port to listen on.
    #[arg(long, default_value = "4536", env = "SPROFILE_PORT")]
    port: u16,

    /// Address to bind to.
    #[arg(long, default_value = "127.0.0.1", env = "SPROFILE_BIND")]
    bind: String,

    /// Path to the built sprofile-web dist directory.
    #[arg(long, env = "SPROFILE_WEB_DIR")]
    web_dir: Option<PathBuf>,
}

fn configure_logging() {
    use tracing_subscriber::prelude::*;

    let env_filter = tracing_subscriber::EnvFilter::try_from_default_env()
        .unwrap_or_else(|_| tracing_subscriber::EnvFilter::new("info"));

    let fmt_layer = tracing_subscriber::fmt::layer()
        .with_line_number(true)
        .with_target(false)
        .with_file(true);

    tracing_subscriber::registry()
        .with(env_filter)
        .with(fmt_layer)
        .init();
}

#[tokio::main]
async fn main() {
    configure_logging();
    let args = Args::parse();

    let fixtures = match &args.fixtures {
        Some(path) => Fixtures::load(path).unwrap_or_else(|e| {
            error!("failed to load fixtures: {e}");
            std::process::exit(1);
        }),
        None => {
            info!("no fixture file given, using demo data");
            Fixtures::demo()
        }
    };

    info!(
        "fixtures loaded (signed_in: {}, profile: {}, top artists: {})",
        fixtures.signed_in,
        fixtures.profile.is_some(),
        fixtures
            .top_artists
            .as_ref()
            .map(|t| t.items.len())
            .unwrap_or(0)
    );

    let state = Arc::new(StubState::from_fixtures(fixtures));

    // Hot-reload fixture edits. The session flag is left alone so a reload
    // doesn't sign the browser out.
    let _watcher = args
        .fixtures
        .clone()
        .map(|path| watch_fixtures(path, state.fixtures.clone()));

    let router = stub_router(state);

    let app = if let Some(ref web_dir) = args.web_dir {
        info!("serving web UI from {}", web_dir.display());
        let spa_fallback =
            ServeDir::new(web_dir).fallback(ServeFile::new(web_dir.join("index.html")));
        router.fallback_service(spa_fallback)
    } else {
        router
    };

    let addr = format!("{}:{}", args.bind, args.port);

    info!("binding to {addr}");
    let listener = tokio::net::TcpListener::bind(&addr)
        .await
        .unwrap_or_else(|e| {
            error!("failed to bind to {addr}: {e}");
            std::process::exit(1);
        });

    info!("sprofile-stub listening on http://{addr}");
    if let Err(e) = axum::serve(listener, app).await {
        error!("server error: {e}");
        std::process::exit(1);
    }
}

/// Watch the fixture file and swap in the new contents on change.
/// The returned watcher must be kept alive.
fn watch_fixtures(path: PathBuf, fixtures: Arc<RwLock<Fixtures>>) -> RecommendedWatcher {
    let (tx, mut rx) = tokio::sync::mpsc::channel::<()>(1);

    let mut watcher = RecommendedWatcher::new(
        move |res: Result<notify::Event, notify::Error>| {
            if let Ok(event) = res {
                if matches!(event.kind, EventKind::Modify(_) | EventKind::Create(_)) {
                    let _ = tx.blocking_send(());
                }
            }
        },
        notify::Config::default(),
    )
    .unwrap_or_else(|e| {
        error!("failed to create file watcher: {e}");
        std::process::exit(1);
    });

    watcher
        .watch(&path, RecursiveMode::NonRecursive)
        .unwrap_or_else(|e| {
            error!("failed to watch fixtures file: {e}");
            std::process::exit(1);
        });

    info!("watching fixtures file: {}", path.display());

    tokio::spawn(async move {
        while rx.recv().await.is_some() {
            // Drain notifications that piled up while reloading.
            while rx.try_recv().is_ok() {}

            match Fixtures::load(&path) {
                Ok(new_fixtures) => {
                    info!("fixtures reloaded");
                    *fixtures.write().await = new_fixtures;
                }
                Err(e) => {
                    warn!("failed to reload fixtures: {e}");
                }
            }
        }
    });

    watcher
}
