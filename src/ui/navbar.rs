//! Top navigation bar of the signed-in area

use leptos::prelude::*;
use leptos_router::components::A;

use crate::ui::auth::UserMenu;
use crate::ui::icon::{Icon, icons};

#[component]
pub fn Navbar() -> impl IntoView {
    view! {
        <nav class="navbar">
            <div class="max-w-7xl mx-auto px-4 sm:px-6 lg:px-8">
                <div class="flex justify-between items-center h-16">
                    <A href="/dashboard" attr:class="flex items-center gap-2">
                        <img src="/pujante-logo.png" alt="Pujante" class="h-8 w-auto" />
                    </A>

                    <div class="hidden md:flex items-baseline gap-4 ml-10">
                        <A href="/dashboard" attr:class="nav-link">
                            <Icon name=icons::HOME class="h-4 w-4" />
                            <span>"Dashboard"</span>
                        </A>
                        <A href="/trilhas" attr:class="nav-link">
                            <Icon name=icons::BOOK_OPEN class="h-4 w-4" />
                            <span>"Trilhas"</span>
                        </A>
                    </div>

                    <UserMenu />
                </div>
            </div>
        </nav>
    }
}
