use leptos::prelude::*;
use leptos_meta::{MetaTags, Stylesheet, Title, provide_meta_context};
use leptos_router::{
    components::{Redirect, Route, Router, Routes},
    path,
};

use crate::ui::auth::{ProtectedRoute, provide_auth_context};
use crate::ui::pages::{
    AulaPlayerPage, CriarTrilhaPage, DashboardPage, LoginPage, NotFoundPage, RegisterPage,
    TrilhaDetalhesPage, TrilhasPage,
};

pub fn shell(options: LeptosOptions) -> impl IntoView {
    view! {
        <!DOCTYPE html>
        <html lang="pt-BR">
            <head>
                <meta charset="utf-8"/>
                <meta name="viewport" content="width=device-width, initial-scale=1"/>
                <link rel="icon" type="image/png" href="/pujante-logo.png"/>
                <AutoReload options=options.clone() />
                <HydrationScripts options/>
                <MetaTags/>
            </head>
            <body>
                <App/>
            </body>
        </html>
    }
}

#[component]
pub fn App() -> impl IntoView {
    // Provides context that manages stylesheets, titles, meta tags, etc.
    provide_meta_context();

    // Session state shared by the navbar, the forms and the route gate
    provide_auth_context();

    view! {
        // id=leptos means cargo-leptos will hot-reload this stylesheet
        <Stylesheet id="leptos" href="/pkg/pujante.css"/>

        <Title text="Pujante"/>

        <Router>
            <Routes fallback=|| view! { <NotFoundPage/> }>
                <Route path=path!("/login") view=LoginPage/>
                <Route path=path!("/register") view=RegisterPage/>
                <Route path=path!("/") view=|| view! { <Redirect path="/dashboard"/> }/>

                // Signed-in area
                <Route
                    path=path!("/dashboard")
                    view=|| view! { <ProtectedRoute><DashboardPage/></ProtectedRoute> }
                />
                <Route
                    path=path!("/trilhas")
                    view=|| view! { <ProtectedRoute><TrilhasPage/></ProtectedRoute> }
                />
                <Route
                    path=path!("/trilhas/criar")
                    view=|| view! { <ProtectedRoute><CriarTrilhaPage/></ProtectedRoute> }
                />
                <Route
                    path=path!("/trilhas/:id")
                    view=|| view! { <ProtectedRoute><TrilhaDetalhesPage/></ProtectedRoute> }
                />
                <Route
                    path=path!("/aulas/:id")
                    view=|| view! { <ProtectedRoute><AulaPlayerPage/></ProtectedRoute> }
                />
            </Routes>
        </Router>
    }
}
