//! Lesson page: video player, lesson info and a module sidebar

use leptos::prelude::*;
use leptos::task::spawn_local;
use leptos_router::components::A;
use leptos_router::hooks::use_params_map;

use super::{NotFoundCard, PageLayout, id_param, route_still_at};
use crate::core::format::format_clock;
use crate::core::player::{Completion, CompletionTrigger, PlayerState};
use crate::core::Aula;
use crate::ui::api;
use crate::ui::auth::{AuthContext, use_auth_context};
use crate::ui::common::{Badge, BadgeVariant, Button, Skeleton};
use crate::ui::icon::{Icon, icons};
use crate::ui::player::{VideoPlayer, report_completion};

#[component]
fn VideoIndisponivel() -> impl IntoView {
    view! {
        <div class="aspect-video bg-black rounded-lg flex items-center justify-center">
            <div class="text-center text-white">
                <Icon name=icons::VIDEO_OFF class="h-12 w-12 mx-auto mb-4 opacity-50" />
                <p class="text-lg">"Vídeo não disponível"</p>
            </div>
        </div>
    }
}

#[component]
fn ConclusaoButton(
    player: RwSignal<PlayerState>,
    auth: AuthContext,
    aula_id: i64,
    #[prop(into)] current: Signal<Option<i64>>,
) -> impl IntoView {
    let completion = Memo::new(move |_| player.with(|p| p.completion.clone()));

    let marcar = move |_| {
        let mut requested = false;
        player.update(|p| requested = p.request_completion());
        if requested {
            report_completion(auth, player, aula_id, current);
        }
    };

    view! {
        {move || match completion.get() {
            Completion::Completed => view! {
                <Badge variant=BadgeVariant::Success icon=icons::CHECK_CIRCLE class="w-full justify-center py-2">
                    "Concluída"
                </Badge>
            }.into_any(),
            state => {
                let pending = state == Completion::Pending;
                let failure = match state {
                    Completion::Failed(message) => Some(message),
                    _ => None,
                };
                view! {
                    <Button
                        class="w-full"
                        icon=icons::CHECK
                        loading=pending
                        on_click=Callback::new(marcar)
                    >
                        "Marcar como concluída"
                    </Button>
                    {failure.map(|message| view! {
                        <p class="mt-2 text-sm text-red-500">{message}</p>
                    })}
                }.into_any()
            }
        }}
    }
}

#[component]
fn ProximaAula(aula: Aula) -> impl IntoView {
    let icon = if aula.has_video() { icons::PLAY } else { icons::VIDEO_OFF };

    view! {
        <A href=format!("/aulas/{}", aula.id) attr:class="block p-3 rounded-lg hover:bg-muted transition-colors">
            <div class="flex items-center gap-3">
                <Icon name=icon class="h-4 w-4" />
                <div class="flex-1 min-w-0">
                    <p class="text-sm font-medium truncate">{aula.titulo.clone()}</p>
                    {aula.duracao.filter(|d| *d > 0).map(|d| view! {
                        <p class="text-xs text-muted">{format_clock(d as f64)}</p>
                    })}
                </div>
            </div>
        </A>
    }
}

#[component]
fn AulaView(
    aula: Aula,
    player: RwSignal<PlayerState>,
    current: Signal<Option<i64>>,
) -> impl IntoView {
    let auth = use_auth_context();
    let aula_id = aula.id;
    let trilha = aula.trilha().cloned();
    let modulo_titulo = aula.modulo.as_ref().map(|m| m.titulo.clone());
    let (posicao, total) = aula.posicao_no_modulo();
    let progresso = aula.progresso_no_modulo();
    let proximas = aula.proximas(3);

    let on_complete = Callback::new(move |trigger: CompletionTrigger| {
        leptos::logging::log!("Aula {} atingiu o ponto de conclusão ({:?})", aula_id, trigger);
        report_completion(auth, player, aula_id, current);
    });

    let detalhes = [
        modulo_titulo.clone(),
        Some(format!("Aula {}", aula.ordem)),
    ]
    .into_iter()
    .flatten()
    .collect::<Vec<_>>()
    .join(" • ");

    view! {
        {trilha.clone().map(|t| view! {
            <div class="mb-6">
                <A href=format!("/trilhas/{}", t.id) attr:class="inline-flex items-center link-primary">
                    <Icon name=icons::CHEVRON_LEFT class="h-4 w-4 mr-2" />
                    {format!("Voltar à trilha: {}", t.titulo)}
                </A>
            </div>
        })}

        <div class="grid grid-cols-1 lg:grid-cols-4 gap-8">
            <div class="lg:col-span-3 space-y-6">
                {match aula.video_source() {
                    Some(src) => view! {
                        <VideoPlayer
                            src=src
                            poster=aula.thumbnail_url.clone().filter(|u| !u.is_empty())
                            state=player
                            on_complete=on_complete
                        />
                    }.into_any(),
                    None => view! { <VideoIndisponivel /> }.into_any(),
                }}

                <div class="card p-6">
                    <div class="flex items-start justify-between gap-4">
                        <div>
                            <h1 class="text-2xl font-bold mb-2">{aula.titulo.clone()}</h1>
                            <p class="text-sm text-muted">{detalhes}</p>
                        </div>
                        {aula.duracao.filter(|d| *d > 0).map(|d| view! {
                            <span class="flex items-center text-sm text-muted whitespace-nowrap">
                                <Icon name=icons::CLOCK class="h-4 w-4 mr-1" />
                                {format_clock(d as f64)}
                            </span>
                        })}
                    </div>
                    {aula.descricao.clone().filter(|d| !d.is_empty()).map(|d| view! {
                        <p class="text-muted mt-4 whitespace-pre-line">{d}</p>
                    })}
                </div>
            </div>

            <div class="lg:col-span-1 space-y-6">
                <div class="card p-6 space-y-4">
                    <div>
                        {trilha.as_ref().map(|t| view! {
                            <h3 class="font-semibold">{t.titulo.clone()}</h3>
                        })}
                        {modulo_titulo.map(|titulo| view! {
                            <p class="text-sm text-muted">{titulo}</p>
                        })}
                    </div>

                    <div>
                        <div class="flex justify-between text-sm mb-2">
                            <span class="text-muted">"Progresso"</span>
                            <span class="font-medium">{format!("{} de {}", posicao, total)}</span>
                        </div>
                        <div class="progress-track">
                            <div class="progress-bar" style=format!("width: {:.0}%", progresso)></div>
                        </div>
                    </div>

                    <ConclusaoButton player=player auth=auth aula_id=aula_id current=current />

                    {trilha.as_ref().map(|t| view! {
                        <A href=format!("/trilhas/{}", t.id) attr:class="btn-base btn-outline btn-md w-full">
                            "Ver todas as aulas"
                        </A>
                    })}
                </div>

                {(!proximas.is_empty()).then(|| view! {
                    <div class="card p-6">
                        <h3 class="font-semibold mb-4">"Próximas aulas"</h3>
                        <div class="space-y-1">
                            {proximas
                                .into_iter()
                                .map(|aula| view! { <ProximaAula aula=aula /> })
                                .collect_view()}
                        </div>
                    </div>
                })}
            </div>
        </div>
    }
}

#[component]
fn AulaSkeleton() -> impl IntoView {
    view! {
        <div class="grid grid-cols-1 lg:grid-cols-4 gap-8">
            <div class="lg:col-span-3 space-y-4">
                <Skeleton class="aspect-video" height="auto" />
                <Skeleton width="50%" height="2rem" />
                <Skeleton height="1rem" />
            </div>
            <div class="lg:col-span-1">
                <Skeleton height="16rem" />
            </div>
        </div>
    }
}

#[component]
pub fn AulaPlayerPage() -> impl IntoView {
    let auth = use_auth_context();
    let params = use_params_map();
    let aula_id = Memo::new(move |_| id_param(&params.read()));
    let current: Signal<Option<i64>> = aula_id.into();

    let aula = RwSignal::new(None::<Aula>);
    let loading = RwSignal::new(true);
    let player = RwSignal::new(PlayerState::new());

    Effect::new(move |_| {
        let id = aula_id.get();
        player.update(|p| p.reset());
        loading.set(true);
        aula.set(None);

        let Some(id) = id else {
            loading.set(false);
            return;
        };

        spawn_local(async move {
            let result = api::get_aula(id).await;
            // The user left the page or moved to another lesson meanwhile
            if !route_still_at(current, id) {
                return;
            }
            match result {
                Ok(a) => aula.set(Some(a)),
                Err(e) => {
                    leptos::logging::error!("Erro ao carregar aula {}: {}", id, e);
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
                    view! { <AulaSkeleton /> }.into_any()
                } else if let Some(a) = aula.get() {
                    view! { <AulaView aula=a player=player current=current /> }.into_any()
                } else {
                    view! {
                        <NotFoundCard
                            title="Aula não encontrada"
                            description="A aula que você está procurando não existe ou foi removida."
                        />
                    }.into_any()
                }
            }}
        </PageLayout>
    }
}
