//! Application pages module
//!
//! This module contains all the page components for the application:
//! - Login and register pages
//! - Dashboard
//! - Track catalog, details and creation wizard
//! - Lesson player
//!
//! plus the layout shells they share.

mod aula_player;
mod criar_trilha;
mod dashboard;
mod login;
mod not_found;
mod register;
mod trilha_detalhes;
mod trilhas;

pub use aula_player::AulaPlayerPage;
pub use criar_trilha::CriarTrilhaPage;
pub use dashboard::DashboardPage;
pub use login::LoginPage;
pub use not_found::NotFoundPage;
pub use register::RegisterPage;
pub use trilha_detalhes::TrilhaDetalhesPage;
pub use trilhas::TrilhasPage;

use leptos::prelude::*;
use leptos_router::components::A;
use leptos_router::params::ParamsMap;

use crate::ui::icon::{Icon, icons};
use crate::ui::navbar::Navbar;

/// Centered card on the brand gradient, used by login and register
#[component]
fn AuthCard(
    title: &'static str,
    subtitle: &'static str,
    children: Children,
) -> impl IntoView {
    view! {
        <div class="min-h-screen auth-background flex items-center justify-center p-4">
            <div class="w-full max-w-md">
                <div class="text-center mb-8">
                    <img src="/pujante-logo.png" alt="Pujante" class="h-16 w-auto mx-auto mb-4" />
                </div>
                <div class="card p-8">
                    <div class="text-center mb-6">
                        <h1 class="text-2xl font-bold">{title}</h1>
                        <p class="text-muted mt-2">{subtitle}</p>
                    </div>
                    {children()}
                </div>
            </div>
        </div>
    }
}

/// Navbar plus the page container of the signed-in area
#[component]
fn PageLayout(
    /// Narrow container for form pages
    #[prop(default = false)]
    narrow: bool,
    children: Children,
) -> impl IntoView {
    let width = if narrow { "max-w-4xl" } else { "max-w-7xl" };

    view! {
        <div class="min-h-screen bg-page">
            <Navbar />
            <main class=format!("{} mx-auto px-4 sm:px-6 lg:px-8 py-8", width)>
                {children()}
            </main>
        </div>
    }
}

#[component]
fn NotFoundCard(title: &'static str, description: &'static str) -> impl IntoView {
    view! {
        <div class="card p-8 text-center">
            <Icon name=icons::ALERT_CIRCLE class="h-12 w-12 mx-auto mb-4" />
            <h2 class="text-2xl font-bold mb-2">{title}</h2>
            <p class="text-muted mb-6">{description}</p>
            <A href="/trilhas" attr:class="btn-base btn-primary btn-md">
                "Voltar às trilhas"
            </A>
        </div>
    }
}

/// Numeric `:id` route parameter
pub(crate) fn id_param(params: &ParamsMap) -> Option<i64> {
    params.get("id").and_then(|id| id.trim().parse().ok())
}

/// Whether a loader started for `id` may still write its result.
///
/// `false` once the route moved to another id, and also once the page that
/// owns `current` was torn down.
pub(crate) fn route_still_at(current: Signal<Option<i64>>, id: i64) -> bool {
    current.try_get_untracked() == Some(Some(id))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_id_param() {
        let mut params = ParamsMap::new();
        assert_eq!(id_param(&params), None);

        params.insert("id", "42".to_string());
        assert_eq!(id_param(&params), Some(42));

        params.insert("id", "abc".to_string());
        assert_eq!(id_param(&params), None);
    }

    #[test]
    fn test_route_still_at_follows_the_route() {
        let owner = Owner::new();
        owner.set();
        let route = RwSignal::new(Some(3_i64));
        let current = Signal::from(Memo::new(move |_| route.get()));

        assert!(route_still_at(current, 3));
        assert!(!route_still_at(current, 4));

        route.set(Some(4));
        assert!(!route_still_at(current, 3));
        assert!(route_still_at(current, 4));

        route.set(None);
        assert!(!route_still_at(current, 4));
    }

    #[test]
    fn test_route_still_at_after_page_disposed() {
        let owner = Owner::new();
        let current = owner.with(|| {
            let route = RwSignal::new(Some(7_i64));
            Signal::from(Memo::new(move |_| route.get()))
        });
        assert!(route_still_at(current, 7));

        // Leaving the route drops the page's owner with its memos
        drop(owner);
        assert!(!route_still_at(current, 7));
    }
}
