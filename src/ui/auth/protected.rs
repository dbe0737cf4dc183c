//! Route guard for pages that need a signed-in user

use leptos::prelude::*;
use leptos_router::hooks::use_navigate;

use super::context::{AuthState, use_auth_context};
use crate::ui::common::LoadingSpinner;

/// Renders `children` only for an authenticated user.
///
/// Shows a spinner while the session is being restored and sends
/// everyone else to `/login`.
#[component]
pub fn ProtectedRoute(children: ChildrenFn) -> impl IntoView {
    let auth = use_auth_context();

    // Redirect if not authenticated
    Effect::new(move |_| {
        if matches!(auth.state.get(), AuthState::Unauthenticated) {
            let navigate = use_navigate();
            navigate("/login", Default::default());
        }
    });

    let gate = Memo::new(move |_| match auth.state.get() {
        AuthState::Loading => 0u8,
        AuthState::Unauthenticated => 1,
        AuthState::Authenticated(_) => 2,
    });

    move || match gate.get() {
        0 => view! {
            <div class="min-h-screen flex items-center justify-center">
                <LoadingSpinner message="Carregando..." />
            </div>
        }
        .into_any(),
        2 => children().into_any(),
        _ => ().into_any(),
    }
}
