//! Router assembly.
//!
//! SYSTEM CONTEXT
//! ==============
//! Binds the booking/assistant API and the Leptos SSR shell under a single
//! Axum router. The shell and its `/pkg` assets are mounted at the
//! configured deployment base path; when that path is not `/`, the bare
//! root redirects into it.

pub mod assistant;
pub mod bookings;

use std::path::PathBuf;

use axum::Router;
use axum::http::StatusCode;
use axum::response::Redirect;
use axum::routing::{get, post};
use leptos::prelude::*;
use leptos_axum::{LeptosRoutes, generate_route_list};
use tower_http::compression::CompressionLayer;
use tower_http::cors::{Any, CorsLayer};
use tower_http::services::ServeDir;
use tower_http::trace::TraceLayer;

use crate::config::SiteConfig;
use crate::state::AppState;

/// API routes used by the shell and by the external conversation service.
fn api_routes(state: AppState) -> Router {
    let cors = CorsLayer::new()
        .allow_origin(Any)
        .allow_methods(Any)
        .allow_headers(Any);

    Router::new()
        .route(
            "/api/bookings",
            get(bookings::list_bookings_rest).post(bookings::create_booking_rest),
        )
        .route(
            "/api/bookings/{name}",
            get(bookings::get_booking_rest)
                .patch(bookings::update_booking_rest)
                .delete(bookings::cancel_booking_rest),
        )
        .route("/api/assistant/tools", get(assistant::list_tools))
        .route("/api/assistant/tools/{name}", post(assistant::call_tool))
        .route("/healthz", get(healthz))
        .layer(cors)
        .layer(TraceLayer::new_for_http())
        .with_state(state)
}

/// Full application router: API + Leptos SSR shell + static assets.
///
/// # Errors
///
/// Returns an error if the Leptos configuration cannot be loaded.
pub fn app(state: AppState, site: &SiteConfig) -> Result<Router, String> {
    let conf = get_configuration(None).map_err(|e| format!("leptos configuration: {e}"))?;
    let mut leptos_options = conf.leptos_options;

    // Asset URLs generated into the SSR shell must carry the deployment
    // prefix, or the hydration bundle 404s behind a path-prefixed deploy.
    if !site.at_root() {
        leptos_options.site_pkg_dir =
            format!("{}/pkg", site.base_path.trim_start_matches('/')).into();
    }

    let routes = generate_route_list(client::app::App);
    let leptos_router = Router::new()
        .leptos_routes(&leptos_options, routes, {
            let opts = leptos_options.clone();
            move || client::app::shell(opts.clone())
        })
        .with_state(leptos_options.clone());

    let site_root_path = PathBuf::from(leptos_options.site_root.as_ref());
    let pkg_service = ServeDir::new(site_root_path.join("pkg"));

    let shell_router = if site.at_root() {
        leptos_router.nest_service("/pkg", pkg_service)
    } else {
        let base = site.base_path.clone();
        let redirect_to = base.clone();
        Router::new()
            .nest(&base, leptos_router)
            .nest_service(&format!("{base}/pkg"), pkg_service)
            .route(
                "/",
                get(move || {
                    let to = redirect_to.clone();
                    async move { Redirect::temporary(&to) }
                }),
            )
    };

    Ok(api_routes(state)
        .merge(shell_router)
        .layer(CompressionLayer::new()))
}

async fn healthz() -> StatusCode {
    StatusCode::OK
}
