use crate::ui::icon::Icon;
use leptos::prelude::*;

/// Badge variant types
#[derive(Clone, Copy, PartialEq)]
pub enum BadgeVariant {
    /// Green, used for completed lessons
    Success,
    Outline,
}

impl BadgeVariant {
    fn class(&self) -> &'static str {
        match self {
            BadgeVariant::Success => "badge-success",
            BadgeVariant::Outline => "badge-outline",
        }
    }
}

/// Badge component for labels and counts
#[component]
pub fn Badge(
    /// Badge content (text or number)
    children: Children,
    /// Visual variant
    #[prop(default = BadgeVariant::Outline)]
    variant: BadgeVariant,
    /// Optional icon to show before text
    #[prop(optional)]
    icon: Option<&'static str>,
    /// Additional CSS classes
    #[prop(default = String::new(), into)]
    class: String,
) -> impl IntoView {
    let full_classes = if class.is_empty() {
        format!("badge {}", variant.class())
    } else {
        format!("badge {} {}", variant.class(), class)
    };

    view! {
        <span class=full_classes>
            {icon.map(|icon_name| view! { <Icon name=icon_name class="badge-icon" /> })}
            <span class="badge-content">{children()}</span>
        </span>
    }
}
