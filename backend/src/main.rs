use std::sync::Arc;
use backend::{
    build_rocket,
    config::ServerConfig,
    fixtures::seeded_store,
    rate_limiter::RateLimiter,
    routes::AppState,
};
use rocket::{routes, fs::NamedFile};
use shuttle_runtime::CustomError;
use tokio::time::{interval, Duration};
use tracing::{info, debug};
use include_dir::{include_dir, Dir};
use uuid::Uuid;

static STATIC_DIR: Dir<'_> = include_dir!("$CARGO_MANIFEST_DIR/static");

async fn run_cleanup_task(limiters: Vec<Arc<RateLimiter>>) {
    let mut interval = interval(Duration::from_secs(60));
    info!("🧹 Rate limit cleanup started");

    loop {
        interval.tick().await;
        let removed: usize = limiters.iter().map(|l| l.prune()).sum();
        if removed > 0 {
            debug!("Pruned {} expired rate limit entries", removed);
        }
    }
}

#[rocket::get("/<path..>")]
async fn spa_handler(path: std::path::PathBuf, temp_dir: &rocket::State<std::path::PathBuf>) -> Option<NamedFile> {
    let file_path = temp_dir.join(&path);
    if file_path.exists() && file_path.is_file() {
        NamedFile::open(&file_path).await.ok()
    } else {
        NamedFile::open(temp_dir.join("index.html")).await.ok()
    }
}

#[shuttle_runtime::main]
async fn rocket(
    #[shuttle_runtime::Secrets] secret_store: shuttle_runtime::SecretStore,
) -> shuttle_rocket::ShuttleRocket {
    info!("🚀 Starting playlist discovery server");

    let config = ServerConfig::from_lookup(|key| secret_store.get(key));
    info!("⚙️ {:?}", config);

    let store = seeded_store().map_err(CustomError::new)?;
    info!("📋 Loaded {} fixture playlists", store.len().map_err(CustomError::new)?);

    let app_state = AppState::new(store, config);

    let temp_dir = std::env::temp_dir().join(format!("playlist_static_{}", Uuid::new_v4()));
    std::fs::create_dir_all(&temp_dir).map_err(CustomError::new)?;
    STATIC_DIR.extract(&temp_dir).map_err(CustomError::new)?;

    tokio::spawn(run_cleanup_task(app_state.limiters()));

    let rocket = build_rocket(app_state)
        .manage(temp_dir)
        .mount("/", routes![spa_handler]);

    Ok(rocket.into())
}
