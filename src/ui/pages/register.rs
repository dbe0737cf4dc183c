//! Register page component

use leptos::prelude::*;
use leptos_router::hooks::use_navigate;

use super::AuthCard;
use crate::ui::auth::{AuthState, RegisterForm, use_auth_context};

/// Register page component
#[component]
pub fn RegisterPage() -> impl IntoView {
    let auth = use_auth_context();

    // Redirect if already authenticated
    Effect::new(move |_| {
        if matches!(auth.state.get(), AuthState::Authenticated(_)) {
            let navigate = use_navigate();
            navigate("/dashboard", Default::default());
        }
    });

    let on_success = move |_| {
        let navigate = use_navigate();
        navigate("/dashboard", Default::default());
    };

    view! {
        <AuthCard title="Criar sua conta" subtitle="Junte-se aos guardiões do agronegócio">
            <RegisterForm on_success=Callback::new(on_success) />
        </AuthCard>
    }
}
