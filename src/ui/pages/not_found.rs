//! Not found page component
//!
//! A 404 error page displayed when a route is not found.

use leptos::prelude::*;
use leptos_router::components::A;

use crate::ui::icon::{Icon, icons};

/// Not found (404) page component
#[component]
pub fn NotFoundPage() -> impl IntoView {
    view! {
        <div class="min-h-screen bg-page flex flex-col items-center justify-center p-4">
            <div class="text-center">
                <div class="w-24 h-24 mx-auto mb-6 bg-muted rounded-full flex items-center justify-center">
                    <Icon name=icons::ALERT_CIRCLE class="w-12 h-12" />
                </div>

                <h1 class="text-6xl font-bold mb-4">"404"</h1>
                <h2 class="text-2xl font-semibold mb-2">"Página não encontrada"</h2>
                <p class="text-muted mb-8 max-w-md mx-auto">
                    "A página que você procura não existe ou foi movida."
                </p>

                <div class="flex flex-col sm:flex-row items-center justify-center gap-4">
                    <A href="/dashboard" attr:class="btn-base btn-primary btn-lg">
                        "Ir para o Dashboard"
                    </A>
                    <A href="/trilhas" attr:class="btn-base btn-outline btn-lg">
                        "Ver trilhas"
                    </A>
                </div>
            </div>
        </div>
    }
}
