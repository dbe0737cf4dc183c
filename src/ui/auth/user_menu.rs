//! User menu component
//!
//! Dropdown in the navbar showing the signed-in user with a "Sair" action.

use leptos::prelude::*;
use leptos_router::hooks::use_navigate;

use super::context::{AuthState, use_auth_context};
use crate::core::User;
use crate::ui::icon::{Icon, icons};

/// User menu component for the navbar
#[component]
pub fn UserMenu() -> impl IntoView {
    let auth = use_auth_context();
    let menu_open = RwSignal::new(false);

    let handle_logout = move |_| {
        menu_open.set(false);
        auth.logout();
        let navigate = use_navigate();
        navigate("/login", Default::default());
    };

    view! {
        <div class="relative">
            {move || {
                match auth.state.get() {
                    AuthState::Loading => {
                        view! {
                            <div class="w-8 h-8 rounded-full bg-muted animate-pulse"></div>
                        }.into_any()
                    }
                    AuthState::Unauthenticated => view! { <span></span> }.into_any(),
                    AuthState::Authenticated(user) => {
                        view! {
                            <div class="relative">
                                <button
                                    class="btn-base btn-ghost btn-sm flex items-center gap-2"
                                    on:click=move |_| menu_open.update(|v| *v = !*v)
                                >
                                    <UserAvatar user=user.clone() size=28 />
                                    <span class="hidden md:block text-sm font-medium max-w-[160px] truncate">
                                        {user.nome.clone()}
                                    </span>
                                    <div class="flex items-center justify-center h-4 w-4 transition-transform duration-200" class=("rotate-180", move || menu_open.get())>
                                        <Icon name=icons::CHEVRON_DOWN class="h-4 w-4" />
                                    </div>
                                </button>

                                {move || {
                                    if menu_open.get() {
                                        let user = user.clone();
                                        Some(view! {
                                            <div class="dropdown-menu absolute right-0 mt-2 w-56 z-50">
                                                <div class="px-4 py-3 border-b">
                                                    <p class="text-sm font-medium truncate">{user.nome}</p>
                                                    <p class="text-xs text-muted truncate">{user.email}</p>
                                                </div>
                                                <div class="py-1">
                                                    <button
                                                        class="w-full px-4 py-2 text-sm text-left text-red-500 hover:bg-red-50 transition-colors flex items-center gap-2"
                                                        on:click=handle_logout
                                                    >
                                                        <Icon name=icons::LOGOUT class="h-4 w-4" />
                                                        "Sair"
                                                    </button>
                                                </div>
                                            </div>
                                        })
                                    } else {
                                        None
                                    }
                                }}
                            </div>
                        }.into_any()
                    }
                }
            }}
        </div>
    }
}

/// First letters of the first and last names, uppercased
pub fn initials(nome: &str) -> String {
    let mut words = nome.split_whitespace();
    let first = words.next().and_then(|w| w.chars().next());
    let last = words.last().and_then(|w| w.chars().next());

    match (first, last) {
        (Some(f), Some(l)) => format!("{}{}", f, l).to_uppercase(),
        (Some(f), None) => f.to_uppercase().to_string(),
        _ => "?".to_string(),
    }
}

/// User avatar component
#[component]
pub fn UserAvatar(
    /// User data
    user: User,
    /// Avatar size in pixels
    #[prop(default = 32)]
    size: u32,
) -> impl IntoView {
    let size_style = format!(
        "width: {}px; height: {}px; min-width: {}px; min-height: {}px;",
        size, size, size, size
    );
    let font_size = if size >= 40 { "text-lg" } else { "text-xs" };

    view! {
        <div
            class=format!("avatar rounded-full flex items-center justify-center font-medium {}", font_size)
            style=size_style
        >
            {initials(&user.nome)}
        </div>
    }
}
