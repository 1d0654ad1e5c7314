use axum::{
    extract::DefaultBodyLimit,
    routing::{get, post, put},
    Router,
};
use jobtrail_backend::{
    config::{get_config, init_config},
    database::pool::create_pool,
    middleware, routes, AppState,
};
use std::net::SocketAddr;
use tokio::net::TcpListener;
use tower_http::trace::TraceLayer;
use tracing::info;

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    tracing_subscriber::fmt()
        .with_env_filter(
            tracing_subscriber::EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| "jobtrail_backend=info,tower_http=info".into()),
        )
        .init();
    init_config()?;
    let config = get_config();

    let pool = create_pool().await?;
    sqlx::migrate!("./migrations").run(&pool).await?;

    let app_state = AppState::new(pool);

    let public_api = Router::new()
        .route("/health", get(routes::health::health))
        .route("/api/auth/register", post(routes::auth::register))
        .route("/api/auth/login", post(routes::auth::login));

    let protected_api = Router::new()
        .route("/api/auth/profile", get(routes::auth::profile))
        .route("/api/auth/resume", put(routes::auth::update_resume))
        .route(
            "/api/jobs",
            get(routes::jobs::list_jobs).post(routes::jobs::create_job),
        )
        .route("/api/jobs/board", get(routes::jobs::board))
        .route("/api/jobs/stats", get(routes::jobs::stats))
        .route(
            "/api/jobs/:id",
            get(routes::jobs::get_job)
                .put(routes::jobs::update_job)
                .delete(routes::jobs::delete_job),
        )
        .route("/api/ai/analyze", post(routes::ai::analyze))
        .route("/api/ai/reanalyze", post(routes::ai::reanalyze))
        .route("/api/ai/match/:job_id", get(routes::ai::get_match))
        .route("/api/pdf/extract", post(routes::pdf::extract))
        .route_layer(axum::middleware::from_fn(
            middleware::auth::require_bearer_auth,
        ));

    let app = public_api
        .merge(protected_api)
        .with_state(app_state)
        .layer(middleware::cors::permissive_cors())
        .layer(TraceLayer::new_for_http())
        .layer(DefaultBodyLimit::max(6 * 1024 * 1024));

    let addr: SocketAddr = config.server_address.parse()?;
    info!("Server listening on {}", addr);
    let listener = TcpListener::bind(addr).await?;
    axum::serve(listener, app).await?;

    Ok(())
}
