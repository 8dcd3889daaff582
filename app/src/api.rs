//! Server functions backing the page templates.

use leptos::{
    logging,
    prelude::{ServerFnError, server},
};

use crate::types::NavConfig;

/// Returns the navigation lists the server was configured with.
///
/// Pages render the header from this result on both the server and the hydrated
/// client, so both sides agree on the entries.
#[server(endpoint = "/navigation")]
pub async fn navigation() -> Result<NavConfig, ServerFnError> {
    use crate::types::AppState;
    use leptos::prelude::use_context;

    let Some(AppState { nav, .. }) = use_context::<AppState>() else {
        tracing::warn!("navigation requested without app state; using the default entries");
        return Ok(NavConfig::default());
    };
    Ok(nav.as_ref().clone())
}

/// Unwraps a `navigation()` result, logging a failed fetch before falling back
/// to the built-in entries.
pub fn navigation_or_default(result: Result<NavConfig, ServerFnError>) -> NavConfig {
    result.unwrap_or_else(|err| {
        logging::warn!("failed to fetch navigation, using the default entries: {err}");
        NavConfig::default()
    })
}
