//! Register form component
//!
//! Collects name, email, optional phone and password. The phone is sent
//! as digits only.

use leptos::prelude::*;
use leptos::task::spawn_local;
use leptos_router::components::A;

use super::context::use_auth_context;
use crate::core::validation::{
    MIN_PASSWORD_LEN, normalize_telefone, validate_email, validate_new_password, validate_nome,
    validate_telefone,
};
use crate::ui::icon::{Icon, icons};

/// A single input with a leading icon and an inline error
#[component]
fn IconInput(
    icon: &'static str,
    #[prop(into)] input_type: Signal<&'static str>,
    name: &'static str,
    placeholder: String,
    autocomplete: &'static str,
    value: RwSignal<String>,
    error: RwSignal<Option<String>>,
    #[prop(into)] on_blur: Callback<()>,
    #[prop(optional)] children: Option<Children>,
) -> impl IntoView {
    view! {
        <div>
            <div class="relative">
                <span class="input-icon-left">
                    <Icon name=icon class="h-4 w-4" />
                </span>
                <input
                    type=move || input_type.get()
                    id=name
                    name=name
                    autocomplete=autocomplete
                    placeholder=placeholder
                    class="input-base pl-10 pr-10"
                    class:input-error=move || error.get().is_some()
                    prop:value=move || value.get()
                    on:input=move |ev| {
                        value.set(event_target_value(&ev));
                        error.set(None);
                    }
                    on:blur=move |_| on_blur.run(())
                />
                {children.map(|c| c())}
            </div>
            {move || {
                error.get().map(|error| {
                    view! { <p class="mt-1 text-sm text-red-500">{error}</p> }
                })
            }}
        </div>
    }
}

/// Register form component
#[component]
pub fn RegisterForm(
    /// Callback when registration is successful
    #[prop(optional, into)]
    on_success: Option<Callback<()>>,
) -> impl IntoView {
    let auth = use_auth_context();

    // Form state
    let nome = RwSignal::new(String::new());
    let email = RwSignal::new(String::new());
    let telefone = RwSignal::new(String::new());
    let password = RwSignal::new(String::new());
    let show_password = RwSignal::new(false);

    // Form validation
    let nome_error = RwSignal::new(None::<String>);
    let email_error = RwSignal::new(None::<String>);
    let telefone_error = RwSignal::new(None::<String>);
    let password_error = RwSignal::new(None::<String>);

    let check = move |value: RwSignal<String>,
                      error: RwSignal<Option<String>>,
                      validate: fn(&str) -> Result<(), String>| {
        let result = validate(&value.get());
        error.set(result.clone().err());
        result.is_ok()
    };

    let check_nome = move || check(nome, nome_error, validate_nome);
    let check_email = move || check(email, email_error, validate_email);
    let check_telefone = move || check(telefone, telefone_error, validate_telefone);
    let check_password = move || check(password, password_error, validate_new_password);

    let on_submit = move |ev: leptos::ev::SubmitEvent| {
        ev.prevent_default();
        auth.clear_error();

        // Run every check so all errors show at once
        let valid = [
            check_nome(),
            check_email(),
            check_telefone(),
            check_password(),
        ]
        .iter()
        .all(|ok| *ok);
        if !valid {
            return;
        }

        let nome_val = nome.get().trim().to_string();
        let email_val = email.get().trim().to_string();
        let telefone_val = normalize_telefone(&telefone.get());
        let password_val = password.get();

        spawn_local(async move {
            if auth
                .register(nome_val, email_val, password_val, telefone_val)
                .await
                .is_ok()
            {
                if let Some(callback) = on_success {
                    callback.run(());
                }
            }
        });
    };

    view! {
        <form on:submit=on_submit class="space-y-4">
            {move || {
                auth.error.get().map(|error| {
                    view! {
                        <div class="alert alert-error">
                            <p class="text-sm">{error}</p>
                        </div>
                    }
                })
            }}

            <IconInput
                icon=icons::USER
                input_type="text"
                name="nome"
                placeholder="Seu nome completo".to_string()
                autocomplete="name"
                value=nome
                error=nome_error
                on_blur=move |_| { check_nome(); }
            />

            <IconInput
                icon=icons::MAIL
                input_type="email"
                name="email"
                placeholder="seu@email.com".to_string()
                autocomplete="email"
                value=email
                error=email_error
                on_blur=move |_| { check_email(); }
            />

            <IconInput
                icon=icons::PHONE
                input_type="tel"
                name="telefone"
                placeholder="(11) 99999-9999".to_string()
                autocomplete="tel"
                value=telefone
                error=telefone_error
                on_blur=move |_| { check_telefone(); }
            />

            <IconInput
                icon=icons::LOCK
                input_type=Signal::derive(move || if show_password.get() { "text" } else { "password" })
                name="password"
                placeholder=format!("Crie uma senha (min. {} caracteres)", MIN_PASSWORD_LEN)
                autocomplete="new-password"
                value=password
                error=password_error
                on_blur=move |_| { check_password(); }
            >
                <button
                    type="button"
                    class="input-icon-right"
                    on:click=move |_| show_password.update(|v| *v = !*v)
                >
                    {move || {
                        if show_password.get() {
                            view! { <Icon name=icons::EYE_CLOSED class="h-4 w-4" /> }.into_any()
                        } else {
                            view! { <Icon name=icons::EYE class="h-4 w-4" /> }.into_any()
                        }
                    }}
                </button>
            </IconInput>

            <button
                type="submit"
                class="btn-base btn-primary btn-md w-full"
                disabled=move || auth.loading.get()
            >
                {move || if auth.loading.get() { "Criando conta..." } else { "Criar conta" }}
            </button>

            <div class="text-center text-sm text-muted">
                "Já tem uma conta? "
                <A href="/login" attr:class="link-primary font-medium">
                    "Fazer login"
                </A>
            </div>
        </form>
    }
}
