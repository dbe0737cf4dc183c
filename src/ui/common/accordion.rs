//! Expandable sections keyed by id

use crate::ui::icon::{Icon, icons};
use leptos::prelude::*;

/// Ids of the open sections of an accordion
#[derive(Clone, Copy)]
pub struct AccordionState {
    open: RwSignal<Vec<i64>>,
}

impl AccordionState {
    pub fn new() -> Self {
        Self {
            open: RwSignal::new(Vec::new()),
        }
    }

    pub fn is_open(&self, id: i64) -> bool {
        self.open.with(|open| open.contains(&id))
    }

    pub fn toggle(&self, id: i64) {
        self.open.update(|open| {
            if open.contains(&id) {
                open.retain(|&i| i != id);
            } else {
                open.push(id);
            }
        });
    }
}

impl Default for AccordionState {
    fn default() -> Self {
        Self::new()
    }
}

/// One collapsible section; the header is always visible
#[component]
pub fn AccordionItem(
    state: AccordionState,
    id: i64,
    #[prop(into)]
    title: String,
    #[prop(default = None)]
    subtitle: Option<String>,
    /// Short label on the right of the header
    #[prop(optional, into)]
    badge: Option<String>,
    /// Body shown while open
    children: ChildrenFn,
) -> impl IntoView {
    view! {
        <div class="accordion-item">
            <button
                type="button"
                class="accordion-trigger"
                aria-expanded=move || state.is_open(id).to_string()
                on:click=move |_| state.toggle(id)
            >
                <div class="flex-1 text-left">
                    <h3 class="font-semibold">{title}</h3>
                    {subtitle.map(|s| view! { <p class="text-sm text-muted mt-1">{s}</p> })}
                </div>
                {badge.map(|b| view! { <span class="badge badge-outline mr-3">{b}</span> })}
                <div
                    class="flex items-center justify-center h-4 w-4 transition-transform duration-200"
                    class=("rotate-180", move || state.is_open(id))
                >
                    <Icon name=icons::CHEVRON_DOWN class="h-4 w-4" />
                </div>
            </button>
            <Show when=move || state.is_open(id)>
                <div class="accordion-content">{children()}</div>
            </Show>
        </div>
    }
}
