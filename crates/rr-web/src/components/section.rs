use leptos::prelude::*;

/// A titled report section. Sections carry print-friendly overrides so the
/// saved/printed page keeps its structure on white paper.
#[component]
pub fn Section(
    #[prop(optional)] title: Option<&'static str>,
    #[prop(default = "")] class: &'static str,
    children: Children,
) -> impl IntoView {
    view! {
        <section class=format!(
            "border-b border-gray-700 bg-gray-900 print:bg-white print:border-gray-300 print:break-inside-avoid {}",
            class
        )>
            {title.map(|t| view! {
                <div class="px-6 py-3 border-b border-gray-700/50 print:border-gray-300">
                    <h2 class="text-sm font-semibold text-gray-400 uppercase tracking-wider print:text-gray-700">
                        {t}
                    </h2>
                </div>
            })}
            <div class="px-6 py-4">
                {children()}
            </div>
        </section>
    }
}
