use crate::ui::icon::{Icon, icons};
use leptos::prelude::*;

/// Button variant types
#[derive(Clone, Copy, PartialEq)]
pub enum ButtonVariant {
    Primary,
    Outline,
    Ghost,
}

/// Button size options
#[derive(Clone, Copy, PartialEq)]
pub enum ButtonSize {
    Small,
    Medium,
    Large,
}

impl ButtonVariant {
    fn class(&self) -> &'static str {
        match self {
            ButtonVariant::Primary => "btn-primary",
            ButtonVariant::Outline => "btn-outline",
            ButtonVariant::Ghost => "btn-ghost",
        }
    }
}

impl ButtonSize {
    fn class(&self) -> &'static str {
        match self {
            ButtonSize::Small => "btn-sm",
            ButtonSize::Medium => "",
            ButtonSize::Large => "btn-lg",
        }
    }
}

/// Type-safe button component with variants and sizes
#[component]
pub fn Button(
    /// Button variant style
    #[prop(default = ButtonVariant::Primary)]
    variant: ButtonVariant,
    /// Button size
    #[prop(default = ButtonSize::Medium)]
    size: ButtonSize,
    /// Click handler; a button without one submits its form
    #[prop(optional, into)]
    on_click: Option<Callback<()>>,
    /// Whether button is disabled
    #[prop(default = false.into(), into)]
    disabled: Signal<bool>,
    /// Whether button is in loading state
    #[prop(default = false.into(), into)]
    loading: Signal<bool>,
    /// Optional title/tooltip
    #[prop(optional, into)]
    title: Option<String>,
    /// Button content (text or elements)
    children: Children,
    /// Optional icon name to show before text
    #[prop(optional)]
    icon: Option<&'static str>,
    /// Additional CSS classes
    #[prop(default = String::new(), into)]
    class: String,
) -> impl IntoView {
    let base_classes = format!("btn-base {} {}", variant.class(), size.class());
    let full_classes = if class.is_empty() {
        base_classes
    } else {
        format!("{} {}", base_classes, class)
    };

    let button_type = if on_click.is_some() { "button" } else { "submit" };

    view! {
        <button
            type=button_type
            class=full_classes
            on:click=move |_| {
                if let Some(on_click) = on_click {
                    if !loading.get_untracked() {
                        on_click.run(())
                    }
                }
            }
            disabled=move || disabled.get() || loading.get()
            title=title
        >
            {move || if loading.get() {
                view! {
                    <span class="btn-spinner">
                        <Icon name=icons::LOADER class="icon-spin"/>
                    </span>
                }.into_any()
            } else if let Some(icon_name) = icon {
                view! {
                    <Icon name=icon_name class="icon-btn"/>
                }.into_any()
            } else {
                ().into_any()
            }}
            {children()}
        </button>
    }
}

/// Icon-only button component
#[component]
pub fn IconButton(
    /// Icon name to display
    #[prop(into)]
    icon: Signal<&'static str>,
    /// Click handler
    #[prop(into)]
    on_click: Callback<()>,
    /// Whether button is disabled
    #[prop(default = false.into(), into)]
    disabled: Signal<bool>,
    /// Title/tooltip, also used as the accessible label
    #[prop(into)]
    title: Signal<String>,
    /// Additional CSS classes
    #[prop(default = String::new(), into)]
    class: String,
) -> impl IntoView {
    let full_classes = if class.is_empty() {
        "btn-icon".to_string()
    } else {
        format!("btn-icon {}", class)
    };

    view! {
        <button
            type="button"
            class=full_classes
            on:click=move |_| on_click.run(())
            disabled=move || disabled.get()
            title=move || title.get()
            aria-label=move || title.get()
        >
            {move || view! { <Icon name=icon.get() class="icon-standalone"/> }}
        </button>
    }
}
