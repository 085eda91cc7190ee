use leptos::prelude::*;

use crate::components::icons::{IconEye, IconEyeOff, IconLoader};
use crate::server_fns::report::GenerateReport;

const INPUT_CLASS: &str = "w-full px-3 py-2 bg-gray-900 border border-gray-700 text-white placeholder-gray-500 text-sm focus:outline-none focus:ring-2 focus:ring-blue-500";

/// Interactive report request form (island — hydrated on client).
///
/// The server action is the single suspension point: while it is pending
/// the submit button is disabled, so at most one request is in flight per
/// form instance. A new submission resets the action value, clearing any
/// prior error banner.
#[island]
pub fn ReportForm() -> impl IntoView {
    let generate_action = ServerAction::<GenerateReport>::new();

    let (show_password, set_show_password) = signal(false);

    // Hidden while a new submission is pending: error state is cleared
    // optimistically at call start.
    let error_msg = move || {
        if generate_action.pending().get() {
            return None;
        }
        generate_action.value().get().and_then(|r| {
            r.err().map(|e| {
                let s = e.to_string();
                // Strip the "error running server function: " prefix
                s.strip_prefix("error running server function: ")
                    .unwrap_or(&s)
                    .to_string()
            })
        })
    };

    let is_pending = generate_action.pending();

    view! {
        <ActionForm action=generate_action attr:class="space-y-5">
            // Error banner
            {move || error_msg().map(|msg| view! {
                <div class="bg-red-500/20 border border-red-500/50 text-red-300 px-4 py-3 text-sm">
                    {msg}
                </div>
            })}

            // Connection parameters
            <div>
                <label for="host" class="block text-sm font-medium text-gray-300 mb-1">
                    "Adresse IP du routeur"
                </label>
                <input
                    id="host"
                    name="host"
                    type="text"
                    required
                    value="192.168.88.1"
                    class=INPUT_CLASS
                />
            </div>
            <div>
                <label for="login" class="block text-sm font-medium text-gray-300 mb-1">
                    "Identifiant"
                </label>
                <input
                    id="login"
                    name="login"
                    type="text"
                    autocomplete="username"
                    class=INPUT_CLASS
                    placeholder="admin"
                />
            </div>
            <div>
                <label for="password" class="block text-sm font-medium text-gray-300 mb-1">
                    "Mot de passe"
                </label>
                <div class="relative">
                    <input
                        id="password"
                        name="password"
                        type=move || if show_password.get() { "text" } else { "password" }
                        autocomplete="current-password"
                        class="w-full px-3 py-2 pr-10 bg-gray-900 border border-gray-700 text-white placeholder-gray-500 text-sm focus:outline-none focus:ring-2 focus:ring-blue-500"
                    />
                    <button
                        type="button"
                        class="absolute inset-y-0 right-0 flex items-center pr-3 text-gray-400 hover:text-white"
                        on:click=move |_| set_show_password.update(|v| *v = !*v)
                    >
                        {move || if show_password.get() {
                            view! { <IconEyeOff class="w-4 h-4"/> }.into_any()
                        } else {
                            view! { <IconEye class="w-4 h-4"/> }.into_any()
                        }}
                    </button>
                </div>
            </div>

            // Report content toggles
            <fieldset class="border border-gray-700 p-4 space-y-2">
                <legend class="px-2 text-sm font-semibold text-gray-400 uppercase tracking-wider">
                    "Contenu du rapport"
                </legend>
                <OptionToggle name="opt_name" label="Nom du routeur"/>
                <OptionToggle name="opt_interfaces" label="Interfaces réseau"/>
                <OptionToggle name="opt_load" label="Charge CPU / RAM"/>
                <OptionToggle name="opt_encryption" label="Paramètres de chiffrement"/>
                <OptionToggle name="opt_blocked_resources" label="Ressources bloquées"/>
            </fieldset>

            // Domains to block
            <div>
                <label for="domains" class="block text-sm font-medium text-gray-300 mb-1">
                    "Domaines à bloquer (un par ligne)"
                </label>
                <textarea
                    id="domains"
                    name="domains"
                    rows="4"
                    class=INPUT_CLASS
                    placeholder="example.com"
                ></textarea>
            </div>

            // Submit
            <button
                type="submit"
                disabled=move || is_pending.get()
                class="w-full px-4 py-2 bg-blue-600 hover:bg-blue-700 text-white font-medium transition-colors disabled:opacity-50 disabled:cursor-not-allowed flex items-center justify-center gap-2"
            >
                {move || is_pending.get().then(|| view! { <IconLoader class="w-4 h-4"/> })}
                {move || if is_pending.get() {
                    "Génération du rapport..."
                } else {
                    "Générer le rapport"
                }}
            </button>
        </ActionForm>
    }
}

#[component]
fn OptionToggle(name: &'static str, label: &'static str) -> impl IntoView {
    view! {
        <div class="flex items-center gap-2">
            <input
                id=name
                name=name
                type="checkbox"
                value="on"
                class="w-4 h-4 bg-gray-900 border-gray-600 text-blue-500 focus:ring-blue-500"
            />
            <label for=name class="text-sm text-gray-300">{label}</label>
        </div>
    }
}
