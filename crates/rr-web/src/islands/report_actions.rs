use leptos::prelude::*;

use crate::components::icons::{IconArrowLeft, IconPrinter};

/// Trailing action area of the report page (island — hydrated on client):
/// hand the page to the browser's print facility, or go back to the form
/// and discard the report.
#[island]
pub fn ReportActions() -> impl IntoView {
    view! {
        <div class="flex items-center gap-3 px-6 py-4 print:hidden">
            <button
                on:click=move |_| {
                    let _ = window().print();
                }
                class="px-4 py-2 bg-blue-600 hover:bg-blue-700 text-white font-medium text-sm transition-colors flex items-center gap-2"
            >
                <IconPrinter class="w-4 h-4"/>
                "Enregistrer le rapport"
            </button>
            <a
                href="/"
                class="px-4 py-2 bg-gray-600 hover:bg-gray-700 text-white font-medium text-sm transition-colors flex items-center gap-2"
            >
                <IconArrowLeft class="w-4 h-4"/>
                "Retour au formulaire"
            </a>
        </div>
    }
}
