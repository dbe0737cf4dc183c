use leptos::prelude::*;

#[component]
pub fn Icon(
    /// Icon name (file name without `.svg`)
    name: &'static str,
    /// CSS classes
    #[prop(default = "w-5 h-5")]
    class: &'static str,
) -> impl IntoView {
    let icon_path = format!("/icons/{}.svg", name);

    view! {
        <img
            src=icon_path
            class=class
            alt=name
            draggable=false
        />
    }
}

/// Icons shipped under `public/icons`
#[allow(dead_code)]
pub mod icons {
    pub const SEARCH: &str = "search";
    pub const CHEVRON_RIGHT: &str = "chevron-right";
    pub const CHEVRON_DOWN: &str = "chevron-down";
    pub const CHEVRON_LEFT: &str = "chevron-left";
    pub const PLUS: &str = "plus";
    pub const TRASH: &str = "trash";
    pub const CHECK: &str = "check";
    pub const CHECK_CIRCLE: &str = "check-circle";
    pub const X: &str = "x";
    pub const ALERT_CIRCLE: &str = "alert-circle";
    pub const LOADER: &str = "loader";
    pub const EYE: &str = "eye";
    pub const EYE_CLOSED: &str = "eye-closed";
    pub const MAIL: &str = "mail";
    pub const LOCK: &str = "lock";
    pub const PHONE: &str = "phone";
    pub const USER: &str = "user";
    pub const LOGOUT: &str = "logout";
    pub const HOME: &str = "home";
    pub const BOOK_OPEN: &str = "book-open";
    pub const CLOCK: &str = "clock";
    pub const PLAY: &str = "play";
    pub const PAUSE: &str = "pause";
    pub const VOLUME: &str = "volume";
    pub const VOLUME_MUTED: &str = "volume-muted";
    pub const MAXIMIZE: &str = "maximize";
    pub const MINIMIZE: &str = "minimize";
    pub const VIDEO_OFF: &str = "video-off";
    pub const TRENDING_UP: &str = "trending-up";
}
