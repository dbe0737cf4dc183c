//! "Criar Nova Trilha" page
//!
//! Edits a `TrilhaDraft` in place and submits it in three stages: the track,
//! then each module, then each module's lessons. The first failure stops the
//! submit and is shown above the form.

use leptos::prelude::*;
use leptos::task::spawn_local;
use leptos_router::components::A;
use leptos_router::hooks::use_navigate;

use super::PageLayout;
use crate::core::ApiError;
use crate::core::wizard::{DraftField, TrilhaDraft};
use crate::ui::api;
use crate::ui::auth::use_auth_context;
use crate::ui::common::{
    Button, ButtonSize, ButtonVariant, ErrorMessage, FormField, SuccessMessage, TextAreaField,
};
use crate::ui::icon::{Icon, icons};

const SUCCESS_MESSAGE: &str = "Trilha criada com sucesso!";
const ERROR_FALLBACK: &str = "Erro ao criar trilha";
#[allow(dead_code)]
const REDIRECT_DELAY_MS: u32 = 2_000;

/// Create the track, its modules and their lessons; returns the new track id
async fn submit_draft(draft: &TrilhaDraft) -> Result<i64, ApiError> {
    let trilha = api::create_trilha(&draft.trilha_request()).await?;
    leptos::logging::log!("Trilha {} criada", trilha.id);

    for (mi, modulo) in draft.modulos.iter().enumerate() {
        let Some(request) = draft.modulo_request(mi, trilha.id) else {
            continue;
        };
        let created = api::create_modulo(&request).await?;

        for ai in 0..modulo.aulas.len() {
            if let Some(aula) = draft.aula_request(mi, ai, created.id) {
                api::create_aula(&aula).await?;
            }
        }
    }

    Ok(trilha.id)
}

#[component]
fn AulaEditor(draft: RwSignal<TrilhaDraft>, modulo: usize, aula: usize) -> impl IntoView {
    let field = move |f: DraftField| {
        Signal::derive(move || {
            draft.with(|d| {
                d.modulos
                    .get(modulo)
                    .and_then(|m| m.aulas.get(aula))
                    .map(|a| match f {
                        DraftField::Titulo => a.titulo.clone(),
                        DraftField::Descricao => a.descricao.clone(),
                    })
                    .unwrap_or_default()
            })
        })
    };
    let set = move |f: DraftField| {
        Callback::new(move |value: String| {
            draft.update(|d| d.set_aula_field(modulo, aula, f, value))
        })
    };

    view! {
        <div class="border rounded-lg p-4 bg-muted">
            <div class="flex items-center justify-between mb-3">
                <h5 class="font-medium text-sm flex items-center">
                    <Icon name=icons::PLAY class="h-4 w-4 mr-2" />
                    {format!("Aula {}", aula + 1)}
                </h5>
                <Show when=move || draft.with(|d| d.can_remove_aula(modulo))>
                    <Button
                        variant=ButtonVariant::Ghost
                        size=ButtonSize::Small
                        icon=icons::TRASH
                        title="Remover aula"
                        on_click=Callback::new(move |_| {
                            draft.update(|d| {
                                d.remove_aula(modulo, aula);
                            })
                        })
                    >
                        ""
                    </Button>
                </Show>
            </div>
            <div class="space-y-3">
                <FormField
                    label="Título da Aula"
                    required=true
                    placeholder="Ex: Introdução aos Contratos Agrários"
                    value=field(DraftField::Titulo)
                    on_input=set(DraftField::Titulo)
                />
                <TextAreaField
                    label="Descrição da Aula"
                    placeholder="Descrição da aula..."
                    rows=2
                    value=field(DraftField::Descricao)
                    on_input=set(DraftField::Descricao)
                />
            </div>
        </div>
    }
}

#[component]
fn ModuloEditor(draft: RwSignal<TrilhaDraft>, modulo: usize) -> impl IntoView {
    let field = move |f: DraftField| {
        Signal::derive(move || {
            draft.with(|d| {
                d.modulos
                    .get(modulo)
                    .map(|m| match f {
                        DraftField::Titulo => m.titulo.clone(),
                        DraftField::Descricao => m.descricao.clone(),
                    })
                    .unwrap_or_default()
            })
        })
    };
    let set = move |f: DraftField| {
        Callback::new(move |value: String| draft.update(|d| d.set_modulo_field(modulo, f, value)))
    };
    let aula_count = Memo::new(move |_| {
        draft.with(|d| d.modulos.get(modulo).map(|m| m.aulas.len()).unwrap_or(0))
    });

    view! {
        <div class="card p-6 space-y-4">
            <div class="flex items-center justify-between">
                <h3 class="text-lg font-semibold flex items-center">
                    <Icon name=icons::BOOK_OPEN class="h-5 w-5 mr-2" />
                    {format!("Módulo {}", modulo + 1)}
                </h3>
                <Show when=move || draft.with(|d| d.can_remove_modulo())>
                    <Button
                        variant=ButtonVariant::Outline
                        size=ButtonSize::Small
                        icon=icons::TRASH
                        title="Remover módulo"
                        on_click=Callback::new(move |_| {
                            draft.update(|d| {
                                d.remove_modulo(modulo);
                            })
                        })
                    >
                        ""
                    </Button>
                </Show>
            </div>

            <FormField
                label="Título do Módulo"
                required=true
                placeholder="Ex: Fundamentos do Direito Agrário"
                value=field(DraftField::Titulo)
                on_input=set(DraftField::Titulo)
            />
            <TextAreaField
                label="Descrição do Módulo"
                placeholder="Descrição do módulo..."
                rows=2
                value=field(DraftField::Descricao)
                on_input=set(DraftField::Descricao)
            />

            <div class="space-y-4">
                <div class="flex items-center justify-between">
                    <h4 class="font-medium">"Aulas"</h4>
                    <Button
                        variant=ButtonVariant::Outline
                        size=ButtonSize::Small
                        icon=icons::PLUS
                        on_click=Callback::new(move |_| draft.update(|d| d.add_aula(modulo)))
                    >
                        "Adicionar Aula"
                    </Button>
                </div>
                {move || {
                    (0..aula_count.get())
                        .map(|aula| view! { <AulaEditor draft=draft modulo=modulo aula=aula /> })
                        .collect_view()
                }}
            </div>
        </div>
    }
}

#[component]
pub fn CriarTrilhaPage() -> impl IntoView {
    let auth = use_auth_context();
    #[cfg(not(feature = "ssr"))]
    let navigate = use_navigate();

    let draft = RwSignal::new(TrilhaDraft::new());
    let submitting = RwSignal::new(false);
    let error = RwSignal::new(None::<String>);
    let success = RwSignal::new(None::<String>);

    let modulo_count = Memo::new(move |_| draft.with(|d| d.modulos.len()));

    let trilha_field = move |f: DraftField| {
        Signal::derive(move || {
            draft.with(|d| match f {
                DraftField::Titulo => d.titulo.clone(),
                DraftField::Descricao => d.descricao.clone(),
            })
        })
    };
    let set_trilha = move |f: DraftField| {
        Callback::new(move |value: String| draft.update(|d| d.set_trilha_field(f, value)))
    };

    let on_submit = move |ev: leptos::ev::SubmitEvent| {
        ev.prevent_default();
        if submitting.get_untracked() {
            return;
        }
        error.set(None);
        success.set(None);

        let snapshot = draft.get_untracked();
        if let Err(e) = snapshot.validate() {
            error.set(Some(e.to_string()));
            return;
        }

        submitting.set(true);
        #[cfg(not(feature = "ssr"))]
        let navigate = navigate.clone();
        spawn_local(async move {
            match submit_draft(&snapshot).await {
                Ok(_) => {
                    success.set(Some(SUCCESS_MESSAGE.to_string()));

                    #[cfg(not(feature = "ssr"))]
                    {
                        gloo_timers::future::TimeoutFuture::new(REDIRECT_DELAY_MS).await;
                        navigate("/trilhas", Default::default());
                    }
                }
                Err(e) => {
                    leptos::logging::error!("Erro ao criar trilha: {}", e);
                    auth.handle_api_error(&e);
                    error.set(Some(e.user_message(ERROR_FALLBACK)));
                }
            }
            submitting.set(false);
        });
    };

    let cancel = move |_| {
        let navigate = use_navigate();
        navigate("/trilhas", Default::default());
    };

    view! {
        <PageLayout narrow=true>
            <div class="mb-8">
                <A href="/trilhas" attr:class="inline-flex items-center link-primary mb-4">
                    <Icon name=icons::CHEVRON_LEFT class="h-4 w-4 mr-2" />
                    "Voltar às trilhas"
                </A>
                <h1 class="text-3xl font-bold">"Criar Nova Trilha"</h1>
                <p class="text-muted mt-2">"Crie uma trilha de formação completa com módulos e aulas"</p>
            </div>

            <div class="space-y-3 mb-6">
                <ErrorMessage error=error />
                <SuccessMessage message=success />
            </div>

            <form on:submit=on_submit class="space-y-8">
                <div class="card p-6 space-y-4">
                    <h3 class="text-lg font-semibold flex items-center">
                        <Icon name=icons::BOOK_OPEN class="h-5 w-5 mr-2" />
                        "Informações da Trilha"
                    </h3>
                    <FormField
                        label="Título da Trilha"
                        required=true
                        placeholder="Ex: Direito do Agronegócio Avançado"
                        value=trilha_field(DraftField::Titulo)
                        on_input=set_trilha(DraftField::Titulo)
                    />
                    <TextAreaField
                        label="Descrição"
                        placeholder="Descrição detalhada da trilha..."
                        rows=3
                        value=trilha_field(DraftField::Descricao)
                        on_input=set_trilha(DraftField::Descricao)
                    />
                </div>

                {move || {
                    (0..modulo_count.get())
                        .map(|modulo| view! { <ModuloEditor draft=draft modulo=modulo /> })
                        .collect_view()
                }}

                <div class="flex justify-center">
                    <Button
                        variant=ButtonVariant::Outline
                        icon=icons::PLUS
                        on_click=Callback::new(move |_| draft.update(|d| d.add_modulo()))
                    >
                        "Adicionar Módulo"
                    </Button>
                </div>

                <div class="flex justify-end gap-4">
                    <Button variant=ButtonVariant::Outline on_click=Callback::new(cancel)>
                        "Cancelar"
                    </Button>
                    <Button loading=submitting>
                        {move || if submitting.get() { "Criando..." } else { "Criar Trilha" }}
                    </Button>
                </div>
            </form>
        </PageLayout>
    }
}
