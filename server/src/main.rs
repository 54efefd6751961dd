mod config;
mod db;
mod llm;
mod routes;
mod services;
mod state;

#[tokio::main]
async fn main() {
    dotenvy::dotenv().ok();
    tracing_subscriber::fmt::init();

    let site = config::SiteConfig::from_env().expect("invalid site configuration");
    let database_url = std::env::var("DATABASE_URL").expect("DATABASE_URL required");

    let pool = db::init_pool(&database_url)
        .await
        .expect("database init failed");
    let state = state::AppState::new(pool);

    let app = routes::app(state, &site).expect("router assembly failed");
    let listener = tokio::net::TcpListener::bind(format!("0.0.0.0:{}", site.port))
        .await
        .expect("failed to bind");

    tracing::info!(port = site.port, base_path = %site.base_path, "smartdine listening");
    axum::serve(listener, app).await.expect("server failed");
}
