//! Dashboard page component
//!
//! Greets the user, shows catalog totals and the first tracks.

use leptos::prelude::*;
use leptos::task::spawn_local;
use leptos_router::components::A;

use super::PageLayout;
use crate::core::Trilha;
use crate::core::catalog::{CatalogStats, DASHBOARD_FEATURED, EmptyState, featured};
use crate::core::format::format_minutes;
use crate::ui::api;
use crate::ui::auth::use_auth_context;
use crate::ui::common::{CardSkeletonGrid, EmptyMessage};
use crate::ui::icon::{Icon, icons};
use crate::ui::trilha_card::TrilhaCard;

#[component]
fn StatCard(title: &'static str, icon: &'static str, #[prop(into)] value: Signal<String>) -> impl IntoView {
    view! {
        <div class="card p-6">
            <div class="flex items-center justify-between pb-2">
                <h3 class="text-sm font-medium">{title}</h3>
                <Icon name=icon class="h-4 w-4 opacity-60" />
            </div>
            <div class="text-2xl font-bold">{move || value.get()}</div>
        </div>
    }
}

/// Dashboard page component
#[component]
pub fn DashboardPage() -> impl IntoView {
    let auth = use_auth_context();

    let trilhas = RwSignal::new(Vec::<Trilha>::new());
    let loading = RwSignal::new(true);

    // Load once on mount
    Effect::new(move |_| {
        spawn_local(async move {
            match api::list_trilhas().await {
                Ok(list) => trilhas.set(list),
                Err(e) => {
                    leptos::logging::error!("Erro ao carregar trilhas: {}", e);
                    auth.handle_api_error(&e);
                }
            }
            loading.set(false);
        });
    });

    let stats = Memo::new(move |_| trilhas.with(|t| CatalogStats::from_trilhas(t)));
    let destaques = Memo::new(move |_| trilhas.with(|t| featured(t, DASHBOARD_FEATURED)));

    let nome = move || auth.user().map(|u| u.nome).unwrap_or_default();

    view! {
        <PageLayout>
            <div class="mb-8">
                <h1 class="text-3xl font-bold">{move || format!("Bem-vindo, {}!", nome())}</h1>
                <p class="text-muted mt-2">"Continue sua jornada de formação no agronegócio"</p>
            </div>

            <div class="grid grid-cols-1 md:grid-cols-3 gap-6 mb-8">
                <StatCard
                    title="Trilhas Disponíveis"
                    icon=icons::BOOK_OPEN
                    value=Signal::derive(move || stats.get().trilhas.to_string())
                />
                <StatCard
                    title="Aulas Totais"
                    icon=icons::PLAY
                    value=Signal::derive(move || stats.get().aulas.to_string())
                />
                <StatCard
                    title="Tempo Total"
                    icon=icons::CLOCK
                    value=Signal::derive(move || format_minutes(stats.get().minutos))
                />
            </div>

            <div class="flex items-center justify-between mb-6">
                <h2 class="text-2xl font-bold">"Trilhas de Formação"</h2>
                <A href="/trilhas" attr:class="btn-base btn-outline">
                    "Ver todas as trilhas"
                </A>
            </div>

            {move || {
                if loading.get() {
                    view! { <CardSkeletonGrid count=3 /> }.into_any()
                } else if destaques.with(|d| d.is_empty()) {
                    let empty = EmptyState::NoTrilhas;
                    view! {
                        <EmptyMessage
                            icon=icons::BOOK_OPEN
                            title=empty.title()
                            description=empty.description()
                        />
                    }.into_any()
                } else {
                    view! {
                        <div class="grid grid-cols-1 md:grid-cols-2 lg:grid-cols-3 gap-6">
                            <For
                                each=move || destaques.get()
                                key=|trilha| trilha.id
                                children=move |trilha| view! { <TrilhaCard trilha=trilha /> }
                            />
                        </div>
                    }.into_any()
                }
            }}
        </PageLayout>
    }
}
