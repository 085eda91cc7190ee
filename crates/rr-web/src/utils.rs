#[cfg(feature = "ssr")]
use leptos::prelude::use_context;

/// Read a query parameter from the current SSR request.
pub fn get_query_param(name: &str) -> Option<String> {
    #[cfg(feature = "ssr")]
    {
        use_context::<axum::http::request::Parts>().and_then(|parts| {
            parts.uri.query().and_then(|q| {
                q.split('&').find_map(|pair| {
                    let (k, v) = pair.split_once('=')?;
                    if k == name {
                        Some(v.replace('+', " "))
                    } else {
                        None
                    }
                })
            })
        })
    }
    #[cfg(not(feature = "ssr"))]
    {
        let _ = name;
        None
    }
}
