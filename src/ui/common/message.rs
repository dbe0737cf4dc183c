//! Reusable message components for errors, success notices and empty states.

use crate::ui::{Icon, icons};
use leptos::prelude::*;

/// Error message component
/// Displays an error message with an alert icon
#[component]
pub fn ErrorMessage(
    /// Error signal - shows message when Some, hidden when None
    #[prop(into)]
    error: Signal<Option<String>>,
) -> impl IntoView {
    view! {
        <Show when=move || error.get().is_some()>
            <div class="alert alert-error">
                <Icon name=icons::ALERT_CIRCLE class="icon-text"/>
                <span>{move || error.get().unwrap_or_default()}</span>
            </div>
        </Show>
    }
}

/// Success message component
#[component]
pub fn SuccessMessage(
    #[prop(into)]
    message: Signal<Option<String>>,
) -> impl IntoView {
    view! {
        <Show when=move || message.get().is_some()>
            <div class="alert alert-success">
                <Icon name=icons::CHECK_CIRCLE class="icon-text"/>
                <span>{move || message.get().unwrap_or_default()}</span>
            </div>
        </Show>
    }
}

/// Centered icon, title and description, with an optional action below
#[component]
pub fn EmptyMessage(
    icon: &'static str,
    #[prop(into)]
    title: String,
    #[prop(into)]
    description: String,
    #[prop(optional)]
    children: Option<Children>,
) -> impl IntoView {
    view! {
        <div class="card text-center py-12 px-6">
            <div class="w-16 h-16 mx-auto mb-4 bg-muted rounded-full flex items-center justify-center">
                <Icon name=icon class="w-8 h-8" />
            </div>
            <h3 class="text-lg font-semibold mb-2">{title}</h3>
            <p class="text-muted mb-6">{description}</p>
            {children.map(|c| c())}
        </div>
    }
}
