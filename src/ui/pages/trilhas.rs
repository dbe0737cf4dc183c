//! Catalog page: every track, filtered by a search box

use leptos::prelude::*;
use leptos::task::spawn_local;
use leptos_router::components::A;

use super::PageLayout;
use crate::core::Trilha;
use crate::core::catalog::{EmptyState, filter_trilhas};
use crate::ui::api;
use crate::ui::auth::use_auth_context;
use crate::ui::common::{CardSkeletonGrid, EmptyMessage};
use crate::ui::icon::{Icon, icons};
use crate::ui::trilha_card::TrilhaCard;

#[component]
pub fn TrilhasPage() -> impl IntoView {
    let auth = use_auth_context();

    let trilhas = RwSignal::new(Vec::<Trilha>::new());
    let loading = RwSignal::new(true);
    let search = RwSignal::new(String::new());

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

    let filtered = Memo::new(move |_| {
        let term = search.get();
        trilhas.with(|t| filter_trilhas(t, &term))
    });

    view! {
        <PageLayout>
            <div class="mb-8">
                <div class="flex flex-col sm:flex-row sm:items-center sm:justify-between gap-4 mb-4">
                    <h1 class="text-3xl font-bold">"Trilhas de Formação"</h1>
                    <A href="/trilhas/criar" attr:class="btn-base btn-primary">
                        <Icon name=icons::PLUS class="icon-btn" />
                        "Criar Trilha"
                    </A>
                </div>
                <p class="text-muted mb-6">
                    "Desenvolva suas competências no agronegócio com nossos cursos especializados"
                </p>

                <div class="relative max-w-md">
                    <span class="input-icon-left">
                        <Icon name=icons::SEARCH class="h-4 w-4" />
                    </span>
                    <input
                        type="text"
                        placeholder="Buscar trilhas..."
                        class="input-base pl-10"
                        prop:value=move || search.get()
                        on:input=move |ev| search.set(event_target_value(&ev))
                    />
                </div>
            </div>

            {move || {
                if loading.get() {
                    view! { <CardSkeletonGrid count=6 /> }.into_any()
                } else if filtered.with(|f| f.is_empty()) {
                    let empty = EmptyState::for_search(&search.get());
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
                                each=move || filtered.get()
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
