use std::sync::Arc;

use axum::Router;
use leptos::prelude::*;
use leptos_axum::{LeptosRoutes, generate_route_list};

use rr_client::{ReportClient, ReportStore};

use crate::app::{App, shell};

/// Build the axum router hosting both pages and their server functions.
/// The report client and one-shot store are handed to server functions
/// through leptos context.
pub fn router(
    leptos_options: LeptosOptions,
    client: Arc<ReportClient>,
    store: Arc<ReportStore>,
) -> Router {
    let routes = generate_route_list(App);

    let context = move || {
        provide_context(client.clone());
        provide_context(store.clone());
    };

    Router::new()
        .leptos_routes_with_context(&leptos_options, routes, context, {
            let opts = leptos_options.clone();
            move || shell(opts.clone())
        })
        .fallback(leptos_axum::file_and_error_handler(shell))
        .with_state(leptos_options)
}
