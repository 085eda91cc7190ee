use leptos::prelude::*;
use leptos_meta::Title;

use crate::components::icons::IconRouter;
use crate::islands::report_form::ReportForm;

/// Report request form (the `/` page).
#[component]
pub fn FormPage() -> impl IntoView {
    view! {
        <Title text="Nouveau rapport — RouterReport"/>
        <div class="min-h-screen flex items-center justify-center bg-gray-900 px-4 py-8">
            <div class="w-full max-w-lg">
                <div class="text-center mb-8">
                    <div class="flex items-center justify-center gap-3">
                        <IconRouter class="w-8 h-8 text-blue-400"/>
                        <h1 class="text-3xl font-bold text-white">"RouterReport"</h1>
                    </div>
                    <p class="mt-2 text-gray-400">"Configurez le rapport d'état du routeur"</p>
                </div>
                <div class="bg-gray-800 border border-gray-700 p-6">
                    <ReportForm/>
                </div>
            </div>
        </div>
    }
}
