use leptos::prelude::*;

/// Spinner size options
#[derive(Clone, Copy, PartialEq)]
pub enum SpinnerSize {
    Small,
    Medium,
    Large,
}

impl SpinnerSize {
    fn class(&self) -> &'static str {
        match self {
            SpinnerSize::Small => "spinner-sm",
            SpinnerSize::Medium => "spinner-md",
            SpinnerSize::Large => "spinner-lg",
        }
    }
}

/// Loading spinner component
#[component]
pub fn Spinner(
    /// Spinner size
    #[prop(default = SpinnerSize::Medium)]
    size: SpinnerSize,
    /// Optional label text
    #[prop(default = String::new(), into)]
    label: String,
    /// Whether to center the spinner
    #[prop(default = false)]
    centered: bool,
) -> impl IntoView {
    let container_class = if centered {
        "spinner-container spinner-centered"
    } else {
        "spinner-container"
    };

    view! {
        <div class=container_class>
            <div class=format!("spinner {}", size.class()) role="status" aria-live="polite">
                <div class="spinner-circle-inner"></div>
                <span class="sr-only">"Carregando..."</span>
            </div>
            {(!label.is_empty()).then(|| view! {
                <div class="spinner-label">{label.clone()}</div>
            })}
        </div>
    }
}

/// Centered medium spinner with an optional message
#[component]
pub fn LoadingSpinner(
    #[prop(default = String::new(), into)]
    message: String,
) -> impl IntoView {
    view! { <Spinner size=SpinnerSize::Large label=message centered=true /> }
}

/// Skeleton loader for content placeholders
#[component]
pub fn Skeleton(
    #[prop(default = "100%".to_string(), into)]
    width: String,
    #[prop(default = "1rem".to_string(), into)]
    height: String,
    /// Additional CSS classes
    #[prop(default = String::new(), into)]
    class: String,
) -> impl IntoView {
    let full_classes = if class.is_empty() {
        "skeleton skeleton-rect".to_string()
    } else {
        format!("skeleton skeleton-rect {}", class)
    };

    view! {
        <div class=full_classes style=format!("width: {}; height: {}", width, height) aria-busy="true">
            <div class="skeleton-shimmer"></div>
        </div>
    }
}

/// Placeholder with the shape of a track card
#[component]
pub fn CardSkeleton() -> impl IntoView {
    view! {
        <div class="card overflow-hidden">
            <Skeleton height="10rem" class="rounded-none" />
            <div class="p-4 space-y-3">
                <Skeleton width="75%" height="1.25rem" />
                <Skeleton height="0.875rem" />
                <Skeleton width="60%" height="0.875rem" />
            </div>
        </div>
    }
}

/// Grid of `count` card skeletons
#[component]
pub fn CardSkeletonGrid(#[prop(default = 6)] count: usize) -> impl IntoView {
    view! {
        <div class="grid grid-cols-1 md:grid-cols-2 lg:grid-cols-3 gap-6">
            {(0..count).map(|_| view! { <CardSkeleton /> }).collect_view()}
        </div>
    }
}
