//! Login form component

use leptos::prelude::*;
use leptos::task::spawn_local;
use leptos_router::components::A;

use super::context::use_auth_context;
use crate::core::validation::{validate_email, validate_login_password};
use crate::ui::icon::{Icon, icons};

/// Login form component
#[component]
pub fn LoginForm(
    /// Callback when login is successful
    #[prop(optional, into)]
    on_success: Option<Callback<()>>,
) -> impl IntoView {
    let auth = use_auth_context();

    // Form state
    let email = RwSignal::new(String::new());
    let password = RwSignal::new(String::new());
    let show_password = RwSignal::new(false);

    // Form validation
    let email_error = RwSignal::new(None::<String>);
    let password_error = RwSignal::new(None::<String>);

    let check_email = move || {
        let result = validate_email(&email.get());
        email_error.set(result.clone().err());
        result.is_ok()
    };

    let check_password = move || {
        let result = validate_login_password(&password.get());
        password_error.set(result.clone().err());
        result.is_ok()
    };

    let on_submit = move |ev: leptos::ev::SubmitEvent| {
        ev.prevent_default();
        auth.clear_error();

        let email_valid = check_email();
        let password_valid = check_password();
        if !email_valid || !password_valid {
            return;
        }

        let email_val = email.get().trim().to_string();
        let password_val = password.get();

        spawn_local(async move {
            // Errors are already set in the auth context
            if auth.login(email_val, password_val).await.is_ok() {
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

            <div>
                <div class="relative">
                    <span class="input-icon-left">
                        <Icon name=icons::MAIL class="h-4 w-4" />
                    </span>
                    <input
                        type="email"
                        id="email"
                        name="email"
                        autocomplete="email"
                        placeholder="seu@email.com"
                        class="input-base pl-10"
                        class:input-error=move || email_error.get().is_some()
                        prop:value=move || email.get()
                        on:input=move |ev| {
                            email.set(event_target_value(&ev));
                            email_error.set(None);
                        }
                        on:blur=move |_| { check_email(); }
                    />
                </div>
                {move || {
                    email_error.get().map(|error| {
                        view! { <p class="mt-1 text-sm text-red-500">{error}</p> }
                    })
                }}
            </div>

            <div>
                <div class="relative">
                    <span class="input-icon-left">
                        <Icon name=icons::LOCK class="h-4 w-4" />
                    </span>
                    <input
                        type=move || if show_password.get() { "text" } else { "password" }
                        id="password"
                        name="password"
                        autocomplete="current-password"
                        placeholder="Sua senha"
                        class="input-base pl-10 pr-10"
                        class:input-error=move || password_error.get().is_some()
                        prop:value=move || password.get()
                        on:input=move |ev| {
                            password.set(event_target_value(&ev));
                            password_error.set(None);
                        }
                        on:blur=move |_| { check_password(); }
                    />
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
                </div>
                {move || {
                    password_error.get().map(|error| {
                        view! { <p class="mt-1 text-sm text-red-500">{error}</p> }
                    })
                }}
            </div>

            <button
                type="submit"
                class="btn-base btn-primary btn-md w-full"
                disabled=move || auth.loading.get()
            >
                {move || {
                    if auth.loading.get() {
                        view! {
                            <span class="flex items-center justify-center">
                                <Icon name=icons::LOADER class="animate-spin -ml-1 mr-2 h-4 w-4" />
                                "Entrando..."
                            </span>
                        }.into_any()
                    } else {
                        view! { <span class="block">"Entrar"</span> }.into_any()
                    }
                }}
            </button>

            <div class="text-center text-sm text-muted">
                "Não tem uma conta? "
                <A href="/register" attr:class="link-primary font-medium">
                    "Criar conta"
                </A>
            </div>
        </form>
    }
}
