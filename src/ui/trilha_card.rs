//! Track card shown on the dashboard and in the catalog

use leptos::prelude::*;
use leptos_router::components::A;

use crate::core::Trilha;
use crate::core::format::format_minutes;
use crate::ui::icon::{Icon, icons};

/// Cover image, or a placeholder when the track has none
#[component]
pub fn TrilhaCover(
    #[prop(into)] capa_url: Option<String>,
    #[prop(into)] titulo: String,
    #[prop(default = "h-48")] height: &'static str,
) -> impl IntoView {
    match capa_url.filter(|url| !url.is_empty()) {
        Some(url) => view! {
            <div class=format!("{} bg-muted", height)>
                <img src=url alt=titulo class="w-full h-full object-cover" />
            </div>
        }
        .into_any(),
        None => view! {
            <div class=format!("{} cover-placeholder flex items-center justify-center", height)>
                <Icon name=icons::BOOK_OPEN class="h-16 w-16 opacity-60" />
            </div>
        }
        .into_any(),
    }
}

#[component]
pub fn TrilhaCard(trilha: Trilha) -> impl IntoView {
    let href = format!("/trilhas/{}", trilha.id);

    view! {
        <div class="card course-card overflow-hidden flex flex-col">
            <TrilhaCover capa_url=trilha.capa_url.clone() titulo=trilha.titulo.clone() />
            <div class="p-4 flex-1 flex flex-col">
                <h3 class="text-lg font-semibold line-clamp-2">{trilha.titulo.clone()}</h3>
                <p class="text-sm text-muted line-clamp-3 mt-1 flex-1">{trilha.descricao.clone()}</p>
                <div class="flex items-center justify-between text-sm text-muted my-4">
                    <span class="flex items-center">
                        <Icon name=icons::PLAY class="h-4 w-4 mr-1" />
                        {format!("{} aulas", trilha.total_aulas)}
                    </span>
                    <span class="flex items-center">
                        <Icon name=icons::CLOCK class="h-4 w-4 mr-1" />
                        {format_minutes(trilha.duracao_total)}
                    </span>
                </div>
                <A href=href attr:class="btn-base btn-primary w-full">
                    "Acessar trilha"
                </A>
            </div>
        </div>
    }
}
