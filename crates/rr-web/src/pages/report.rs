use leptos::prelude::*;
use leptos_meta::Title;

use rr_common::types::{
    BlockStatus, BlockedResource, BlockingOutcome, Report, ReportPayload, ReportResponse,
    ReportSection, RouterInterface, WirelessSecurity,
};

use crate::components::icons::*;
use crate::components::page_header::PageHeader;
use crate::components::section::Section;
use crate::components::status_badge::StatusBadge;
use crate::islands::report_actions::ReportActions;
use crate::server_fns::report::take_report;
use crate::utils::get_query_param;

fn report_icon() -> AnyView {
    view! { <IconFileText class="w-6 h-6"/> }.into_any()
}

fn error_icon() -> AnyView {
    view! { <IconAlertCircle class="w-6 h-6 text-red-400"/> }.into_any()
}

/// Report renderer (the `/report` page).
///
/// Reached only through the one-shot token minted at submit time. A
/// direct load, reload or expired token finds nothing in the store and
/// redirects to the form — a default report is never fabricated.
#[component]
pub fn ReportPage() -> impl IntoView {
    let token = get_query_param("r");
    let data = Resource::new(
        || (),
        move |_| {
            let token = token.clone();
            async move {
                match token {
                    Some(token) => take_report(token).await,
                    None => Ok(None),
                }
            }
        },
    );

    view! {
        <Title text="Rapport — RouterReport"/>
        <Suspense fallback=|| view! { <div class="p-8 text-gray-400">"Chargement..."</div> }>
            {move || Suspend::new(async move {
                match data.await {
                    Ok(Some(ReportResponse::Success(payload))) => {
                        view! { <ReportContent payload/> }.into_any()
                    }
                    Ok(Some(ReportResponse::Failure { message })) => {
                        view! { <ReportError message/> }.into_any()
                    }
                    Ok(None) => {
                        #[cfg(feature = "ssr")]
                        leptos_axum::redirect("/");
                        view! { <p class="p-8">"Redirection..."</p> }.into_any()
                    }
                    Err(e) => view! {
                        <div class="p-8 text-red-400">{e.to_string()}</div>
                    }.into_any(),
                }
            })}
        </Suspense>
    }
}

/// Failure view: the carried message and a way back, nothing else.
#[component]
fn ReportError(message: String) -> impl IntoView {
    view! {
        <main class="max-w-3xl mx-auto">
            <PageHeader title="Erreur" icon=error_icon/>
            <Section>
                <p class="text-red-300">{message}</p>
            </Section>
            <div class="px-6 py-4">
                <a
                    href="/"
                    class="px-4 py-2 bg-gray-600 hover:bg-gray-700 text-white font-medium text-sm transition-colors inline-flex items-center gap-2"
                >
                    <IconArrowLeft class="w-4 h-4"/>
                    "Retour au formulaire"
                </a>
            </div>
        </main>
    }
}

/// Pure projection from payload to page: sections render in their fixed
/// order, gated on what the response actually contains.
#[component]
fn ReportContent(payload: ReportPayload) -> impl IntoView {
    let ReportPayload {
        report,
        blocked_results,
    } = payload;

    let sections = report
        .sections()
        .into_iter()
        .map(|section| section_view(section, &report))
        .collect_view();

    let blocking = (!blocked_results.is_empty()).then_some(blocked_results);

    view! {
        <main class="max-w-4xl mx-auto print:max-w-none">
            <PageHeader title="Rapport d'état du routeur" icon=report_icon/>
            {sections}
            {blocking.map(|results| view! { <BlockingResultsSection results/> })}
            <ReportActions/>
        </main>
    }
}

fn section_view(section: ReportSection, report: &Report) -> AnyView {
    match section {
        ReportSection::Identity => {
            let name = report.name.clone().unwrap_or_default();
            let model = report.model.clone().unwrap_or_else(|| "N/A".into());
            view! { <IdentitySection name model/> }.into_any()
        }
        ReportSection::Interfaces => {
            let interfaces = report.interfaces.clone().unwrap_or_default();
            view! { <InterfacesSection interfaces/> }.into_any()
        }
        ReportSection::SystemLoad => {
            let cpu_load = report.cpu_load.unwrap_or_default();
            let memory_usage = report.memory_usage;
            view! { <SystemLoadSection cpu_load memory_usage/> }.into_any()
        }
        ReportSection::Encryption => {
            let profiles = report.encryption.clone().unwrap_or_default();
            view! { <EncryptionSection profiles/> }.into_any()
        }
        ReportSection::BlockedResources => {
            let resources = report.blocked_resources.clone().unwrap_or_default();
            view! { <BlockedResourcesSection resources/> }.into_any()
        }
    }
}

#[component]
fn IdentitySection(name: String, model: String) -> impl IntoView {
    view! {
        <Section title="Informations sur le routeur">
            <div class="space-y-1 text-sm">
                <p>
                    <span class="text-gray-500">"Nom : "</span>
                    <span class="text-white font-medium">{name}</span>
                </p>
                <p>
                    <span class="text-gray-500">"Modèle : "</span>
                    <span class="text-white font-medium">{model}</span>
                </p>
            </div>
        </Section>
    }
}

#[component]
fn InterfacesSection(interfaces: Vec<RouterInterface>) -> impl IntoView {
    view! {
        <Section title="Interfaces réseau">
            <div class="grid grid-cols-1 md:grid-cols-2 gap-4 print:grid-cols-2">
                {interfaces.into_iter().map(|iface| view! {
                    <InterfaceCard iface/>
                }).collect_view()}
            </div>
        </Section>
    }
}

#[component]
fn InterfaceCard(iface: RouterInterface) -> impl IntoView {
    view! {
        <div class="bg-gray-800 border border-gray-700 p-4 print:bg-white print:border-gray-300">
            <div class="flex items-center justify-between mb-3">
                <span class="text-white font-mono font-medium print:text-gray-900">
                    {iface.name}
                </span>
                <StatusBadge up=iface.running>
                    {if iface.running { "Actif" } else { "Inactif" }}
                </StatusBadge>
            </div>
            <div class="space-y-1 text-xs">
                <div class="flex justify-between">
                    <span class="text-gray-500">"Type"</span>
                    <span class="text-gray-300 print:text-gray-700">{iface.kind}</span>
                </div>
                <div class="flex justify-between">
                    <span class="text-gray-500">"MAC"</span>
                    <span class="font-mono text-gray-300 print:text-gray-700">{iface.mac_address}</span>
                </div>
                <div class="flex justify-between">
                    <span class="text-gray-500">"Reçu"</span>
                    <span class="text-gray-300 print:text-gray-700">
                        {format!("{} octets ({} paquets)", iface.rx_byte, iface.rx_packet)}
                    </span>
                </div>
                <div class="flex justify-between">
                    <span class="text-gray-500">"Émis"</span>
                    <span class="text-gray-300 print:text-gray-700">
                        {format!("{} octets ({} paquets)", iface.tx_byte, iface.tx_packet)}
                    </span>
                </div>
            </div>
        </div>
    }
}

#[component]
fn SystemLoadSection(cpu_load: u64, memory_usage: Option<u64>) -> impl IntoView {
    view! {
        <Section title="Charge du système">
            <div class="space-y-1 text-sm">
                <p>
                    <span class="text-gray-500">"Charge CPU : "</span>
                    <span class="text-white font-medium">{format!("{cpu_load}%")}</span>
                </p>
                <p>
                    <span class="text-gray-500">"Mémoire libre : "</span>
                    <span class="text-white font-medium">
                        {memory_usage
                            .map(|kb| format!("{kb} Ko"))
                            .unwrap_or_else(|| "N/A".into())}
                    </span>
                </p>
            </div>
        </Section>
    }
}

#[component]
fn EncryptionSection(profiles: Vec<WirelessSecurity>) -> impl IntoView {
    view! {
        <Section title="Paramètres de chiffrement">
            <div class="space-y-3">
                {profiles.into_iter().map(|profile| view! {
                    <div class="bg-gray-800 border border-gray-700 p-4 print:bg-white print:border-gray-300">
                        <h3 class="text-white font-medium mb-2 print:text-gray-900">{profile.name}</h3>
                        <div class="space-y-1 text-xs">
                            <div class="flex justify-between">
                                <span class="text-gray-500">"Authentification"</span>
                                <span class="text-gray-300 print:text-gray-700">{profile.authentication}</span>
                            </div>
                            <div class="flex justify-between">
                                <span class="text-gray-500">"Chiffrement"</span>
                                <span class="text-gray-300 print:text-gray-700">{profile.encryption}</span>
                            </div>
                        </div>
                    </div>
                }).collect_view()}
            </div>
        </Section>
    }
}

#[component]
fn BlockedResourcesSection(resources: Vec<BlockedResource>) -> impl IntoView {
    view! {
        <Section title="Ressources bloquées">
            {if resources.is_empty() {
                view! { <p class="text-gray-500 text-sm">"Aucune règle de blocage"</p> }.into_any()
            } else {
                view! {
                    <div class="overflow-x-auto">
                        <table class="w-full text-sm">
                            <thead>
                                <tr class="text-left text-xs text-gray-500 uppercase tracking-wider">
                                    <th class="pb-2 pr-4">"Adresse IP"</th>
                                    <th class="pb-2">"Commentaire"</th>
                                </tr>
                            </thead>
                            <tbody>
                                {resources.into_iter().map(|resource| view! {
                                    <tr class="border-t border-gray-700/50 print:border-gray-300">
                                        <td class="py-2 pr-4 font-mono text-xs text-gray-300 print:text-gray-700">
                                            {resource.dst_address}
                                        </td>
                                        <td class="py-2 text-xs text-gray-400 print:text-gray-700">
                                            {resource.comment}
                                        </td>
                                    </tr>
                                }).collect_view()}
                            </tbody>
                        </table>
                    </div>
                }.into_any()
            }}
        </Section>
    }
}

/// Per-domain blocking outcomes. Unlike the report sections this one is
/// gated on non-emptiness, checked by the caller.
#[component]
fn BlockingResultsSection(results: Vec<BlockingOutcome>) -> impl IntoView {
    view! {
        <Section title="Résultats du blocage">
            <ul class="space-y-2 text-sm">
                {results.into_iter().map(|result| {
                    let succeeded = result.status == BlockStatus::Success;
                    let display = match &result.ip {
                        Some(ip) => format!("{} ({})", result.domain, ip),
                        None => result.domain.clone(),
                    };
                    let failure = (!succeeded).then(|| {
                        result.message.clone().unwrap_or_else(|| "Erreur".into())
                    });
                    view! {
                        <li class="flex items-center gap-3">
                            <StatusBadge up=succeeded>
                                {if succeeded { "Bloqué" } else { "Erreur" }}
                            </StatusBadge>
                            <span class="font-mono text-gray-300 print:text-gray-700">{display}</span>
                            {failure.map(|msg| view! {
                                <span class="text-red-400 text-xs print:text-red-700">{msg}</span>
                            })}
                        </li>
                    }
                }).collect_view()}
            </ul>
        </Section>
    }
}
