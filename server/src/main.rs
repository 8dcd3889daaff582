#![recursion_limit = "256"]

use app::{component, shell, types::AppState, types::NavConfig};
use axum::{Router, http::StatusCode, response::Json, routing::get};
use dotenvy::dotenv;
use leptos::logging;
use leptos::prelude::*;
use leptos_axum::{LeptosRoutes as _, generate_route_list};
use leptos_config::get_configuration;
use serde_json::json;
use std::sync::Arc;

use tower_http::compression::CompressionLayer;
use tower_http::services::ServeDir;
use tower_http::trace::TraceLayer;

/// Environment variable naming an optional JSON navigation file.
const NAV_CONFIG_ENV: &str = "NAV_CONFIG";

async fn health_handler() -> Result<Json<serde_json::Value>, StatusCode> {
    Ok(Json(json!({
        "status": "healthy",
        "timestamp": chrono::Utc::now().to_rfc3339(),
        "service": "docs-header",
        "version": env!("CARGO_PKG_VERSION")
    })))
}

/// Loads the navigation named by `path`, falling back to the built-in entries.
///
/// A broken navigation file never stops the site from starting.
fn load_navigation(path: Option<&str>) -> NavConfig {
    let Some(path) = path else {
        tracing::info!("{NAV_CONFIG_ENV} not set; using the default navigation");
        return NavConfig::default();
    };
    match NavConfig::load(path) {
        Ok(config) => {
            tracing::info!(path, "Loaded navigation config");
            config
        }
        Err(err) => {
            tracing::error!(path, error = %err, "Invalid navigation config; using the default navigation");
            NavConfig::default()
        }
    }
}

#[tokio::main]
async fn main() {
    let tracing_level = if cfg!(debug_assertions) {
        tracing::Level::DEBUG
    } else {
        tracing::Level::INFO
    };

    tracing_subscriber::fmt()
        .with_file(true)
        .with_line_number(true)
        .with_max_level(tracing_level)
        .init();

    if dotenv().is_err() {
        logging::warn!("There is no corresponding .env file");
    }

    let Ok(conf) = get_configuration(Some("Cargo.toml")) else {
        logging::error!("Failed to get configuration");
        return;
    };

    let leptos_options = conf.leptos_options;
    let addr = leptos_options.site_addr;
    let site_root = leptos_options.site_root.to_string();
    let routes = generate_route_list(component);

    let nav_path = std::env::var(NAV_CONFIG_ENV).ok();
    let app_state = AppState {
        nav: Arc::new(load_navigation(nav_path.as_deref())),
        leptos_options: Arc::new(leptos_options.clone()),
    };

    let app = Router::new()
        .leptos_routes_with_context(
            &app_state,
            routes,
            {
                let app_state = app_state.clone();
                move || provide_context(app_state.clone())
            },
            {
                let leptos_options = leptos_options.clone();
                move || shell(leptos_options.clone())
            },
        )
        .route("/health", get(health_handler))
        .nest_service("/static", ServeDir::new(site_root))
        .layer(tower::ServiceBuilder::new().layer(TraceLayer::new_for_http()))
        .layer(CompressionLayer::new())
        .fallback(leptos_axum::file_and_error_handler::<AppState, _>(shell))
        .with_state(app_state);

    let listener = match tokio::net::TcpListener::bind(&addr).await {
        Ok(list) => list,
        Err(err) => {
            logging::error!("Failed to bind tcp listener to {}: {}", &addr, err);
            return;
        }
    };
    logging::log!("Listening on http://{}", &addr);

    match axum::serve(listener, app.into_make_service()).await {
        Ok(()) => logging::log!("Server shutdown gracefully"),
        Err(err) => logging::error!("Failed to serve app: {err:?}"),
    }
}
