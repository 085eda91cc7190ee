use leptos::prelude::*;

/// Two-state indicator: interface running/stopped, block succeeded/failed.
#[component]
pub fn StatusBadge(up: bool, children: Children) -> impl IntoView {
    let colors = if up {
        "bg-green-500/20 text-green-400 border-green-500/30 print:text-green-700"
    } else {
        "bg-red-500/20 text-red-400 border-red-500/30 print:text-red-700"
    };

    view! {
        <span class=format!("px-2 py-0.5 text-xs font-medium border {}", colors)>
            {children()}
        </span>
    }
}
