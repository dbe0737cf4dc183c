//! Track details page: header, module accordion and a summary sidebar

use leptos::prelude::*;
use leptos::task::spawn_local;
use leptos_router::components::A;
use leptos_router::hooks::{use_navigate, use_params_map};

use super::{NotFoundCard, PageLayout, id_param, route_still_at};
use crate::core::format::format_seconds_hm;
use crate::core::{Aula, Modulo, Trilha};
use crate::ui::api;
use crate::ui::auth::use_auth_context;
use crate::ui::common::{
    AccordionItem, AccordionState, Badge, BadgeVariant, Button, ButtonSize, EmptyMessage, Skeleton,
};
use crate::ui::icon::{Icon, icons};
use crate::ui::trilha_card::TrilhaCover;

#[component]
fn AulaRow(aula: Aula) -> impl IntoView {
    let href = format!("/aulas/{}", aula.id);
    let icon = if aula.has_video() { icons::PLAY } else { icons::VIDEO_OFF };

    view! {
        <div class="flex items-center justify-between p-3 bg-muted rounded-lg">
            <div class="flex items-center gap-3">
                <Icon name=icon class="h-4 w-4" />
                <div>
                    <h4 class="font-medium">{aula.titulo.clone()}</h4>
                    {aula.descricao.clone().filter(|d| !d.is_empty()).map(|d| view! {
                        <p class="text-sm text-muted">{d}</p>
                    })}
                </div>
            </div>
            <div class="flex items-center gap-2">
                {aula.duracao.filter(|d| *d > 0).map(|d| view! {
                    <span class="text-sm text-muted">{format_seconds_hm(d)}</span>
                })}
                <A href=href attr:class="btn-base btn-outline btn-sm">"Assistir"</A>
            </div>
        </div>
    }
}

#[component]
fn ModuloSection(modulo: Modulo, accordion: AccordionState) -> impl IntoView {
    let aulas = modulo.aulas_ordenadas();

    view! {
        <AccordionItem
            state=accordion
            id=modulo.id
            title=format!("Módulo {}: {}", modulo.ordem, modulo.titulo)
            subtitle=modulo.descricao.clone().filter(|d| !d.is_empty())
            badge=format!("{} aulas", modulo.aulas.len())
        >
            {if aulas.is_empty() {
                view! {
                    <p class="text-muted text-center py-4">"Nenhuma aula disponível neste módulo"</p>
                }.into_any()
            } else {
                let aulas = aulas.clone();
                view! {
                    <div class="space-y-2">
                        {aulas.into_iter().map(|aula| view! { <AulaRow aula=aula /> }).collect_view()}
                    </div>
                }.into_any()
            }}
        </AccordionItem>
    }
}

#[component]
fn InfoRow(label: &'static str, children: Children) -> impl IntoView {
    view! {
        <div class="flex justify-between">
            <span class="text-muted">{label}</span>
            <span class="font-medium">{children()}</span>
        </div>
    }
}

#[component]
fn TrilhaView(trilha: Trilha) -> impl IntoView {
    let accordion = AccordionState::new();
    let modulos = trilha.modulos_ordenados();
    let total_modulos = trilha.total_modulos();
    let duracao = format_seconds_hm(trilha.duracao_total.saturating_mul(60));
    let primeira_aula = trilha.primeira_aula().map(|a| a.id);

    let comecar = move |_| {
        if let Some(id) = primeira_aula {
            let navigate = use_navigate();
            navigate(&format!("/aulas/{}", id), Default::default());
        }
    };

    view! {
        <div class="mb-6">
            <A href="/trilhas" attr:class="inline-flex items-center link-primary">
                <Icon name=icons::CHEVRON_LEFT class="h-4 w-4 mr-2" />
                "Voltar às trilhas"
            </A>
        </div>

        <div class="grid grid-cols-1 lg:grid-cols-3 gap-8">
            <div class="lg:col-span-2">
                <div class="mb-8">
                    {trilha.capa_url.clone().filter(|u| !u.is_empty()).map(|url| view! {
                        <div class="rounded-lg mb-6 overflow-hidden">
                            <TrilhaCover capa_url=Some(url) titulo=trilha.titulo.clone() height="h-64" />
                        </div>
                    })}
                    <h1 class="text-3xl font-bold mb-4">{trilha.titulo.clone()}</h1>
                    <p class="text-muted text-lg mb-6">{trilha.descricao.clone()}</p>
                    <div class="flex flex-wrap gap-4 text-sm text-muted">
                        <span class="flex items-center">
                            <Icon name=icons::BOOK_OPEN class="h-4 w-4 mr-1" />
                            {format!("{} módulos", total_modulos)}
                        </span>
                        <span class="flex items-center">
                            <Icon name=icons::PLAY class="h-4 w-4 mr-1" />
                            {format!("{} aulas", trilha.total_aulas)}
                        </span>
                        <span class="flex items-center">
                            <Icon name=icons::CLOCK class="h-4 w-4 mr-1" />
                            {duracao.clone()}
                        </span>
                    </div>
                </div>

                <h2 class="text-2xl font-bold mb-6">"Conteúdo da Trilha"</h2>
                {if modulos.is_empty() {
                    view! {
                        <EmptyMessage
                            icon=icons::BOOK_OPEN
                            title="Conteúdo em desenvolvimento"
                            description="Os módulos desta trilha estarão disponíveis em breve."
                        />
                    }.into_any()
                } else {
                    view! {
                        <div class="space-y-4">
                            {modulos
                                .into_iter()
                                .map(|modulo| view! { <ModuloSection modulo=modulo accordion=accordion /> })
                                .collect_view()}
                        </div>
                    }.into_any()
                }}
            </div>

            <div class="lg:col-span-1">
                <div class="card sticky top-8 p-6 space-y-4">
                    <h3 class="text-lg font-semibold">"Informações da Trilha"</h3>
                    <InfoRow label="Módulos:">{total_modulos}</InfoRow>
                    <InfoRow label="Aulas:">{trilha.total_aulas}</InfoRow>
                    <InfoRow label="Duração:">{duracao}</InfoRow>
                    <InfoRow label="Nível:">
                        <Badge variant=BadgeVariant::Outline>"Intermediário"</Badge>
                    </InfoRow>
                    <div class="pt-4 border-t">
                        <Button
                            size=ButtonSize::Large
                            class="w-full"
                            disabled=primeira_aula.is_none()
                            on_click=Callback::new(comecar)
                        >
                            "Começar Trilha"
                        </Button>
                    </div>
                </div>
            </div>
        </div>
    }
}

#[component]
fn DetalhesSkeleton() -> impl IntoView {
    view! {
        <div class="space-y-4">
            <Skeleton width="33%" height="2rem" />
            <Skeleton height="16rem" />
            <Skeleton width="50%" height="1.5rem" />
            <Skeleton height="1rem" />
            <Skeleton width="75%" height="1rem" />
        </div>
    }
}

#[component]
pub fn TrilhaDetalhesPage() -> impl IntoView {
    let auth = use_auth_context();
    let params = use_params_map();
    let trilha_id = Memo::new(move |_| id_param(&params.read()));
    let current: Signal<Option<i64>> = trilha_id.into();

    let trilha = RwSignal::new(None::<Trilha>);
    let loading = RwSignal::new(true);

    // Reload whenever the route id changes
    Effect::new(move |_| {
        let id = trilha_id.get();
        loading.set(true);
        trilha.set(None);

        let Some(id) = id else {
            loading.set(false);
            return;
        };

        spawn_local(async move {
            let result = api::get_trilha(id).await;
            if !route_still_at(current, id) {
                return;
            }
            match result {
                Ok(t) => trilha.set(Some(t)),
                Err(e) => {
                    leptos::logging::error!("Erro ao carregar trilha {}: {}", id, e);
                    auth.handle_api_error(&e);
                }
            }
            loading.set(false);
        });
    });

    view! {
        <PageLayout>
            {move || {
                if loading.get() {
                    view! { <DetalhesSkeleton /> }.into_any()
                } else if let Some(t) = trilha.get() {
                    view! { <TrilhaView trilha=t /> }.into_any()
                } else {
                    view! {
                        <NotFoundCard
                            title="Trilha não encontrada"
                            description="A trilha que você está procurando não existe ou foi removida."
                        />
                    }.into_any()
                }
            }}
        </PageLayout>
    }
}
