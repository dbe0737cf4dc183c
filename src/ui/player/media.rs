//! Reads from and commands to the `<video>` element

use leptos::html::{Div, Video};
use leptos::prelude::*;

use crate::core::player::PlayerCommand;

#[cfg(not(feature = "ssr"))]
pub fn duration(video: NodeRef<Video>) -> f64 {
    video.get_untracked().map(|v| v.duration()).unwrap_or(0.0)
}

#[cfg(not(feature = "ssr"))]
pub fn current_time(video: NodeRef<Video>) -> f64 {
    video.get_untracked().map(|v| v.current_time()).unwrap_or(0.0)
}

/// `(volume, muted)` of the element
#[cfg(not(feature = "ssr"))]
pub fn volume(video: NodeRef<Video>) -> (f64, bool) {
    video
        .get_untracked()
        .map(|v| (v.volume(), v.muted()))
        .unwrap_or((1.0, false))
}

/// Whether the player container is the fullscreen element
#[cfg(not(feature = "ssr"))]
pub fn is_fullscreen(container: NodeRef<Div>) -> bool {
    let Some(document) = web_sys::window().and_then(|w| w.document()) else {
        return false;
    };
    let (Some(active), Some(container)) = (document.fullscreen_element(), container.get_untracked())
    else {
        return false;
    };
    let container: &web_sys::Element = &container;
    active == *container
}

/// Run a command against the element
#[cfg(not(feature = "ssr"))]
pub fn run(video: NodeRef<Video>, container: NodeRef<Div>, command: PlayerCommand) {
    let Some(element) = video.get_untracked() else {
        return;
    };

    match command {
        PlayerCommand::Play => match element.play() {
            Ok(promise) => leptos::task::spawn_local(async move {
                if let Err(e) = wasm_bindgen_futures::JsFuture::from(promise).await {
                    leptos::logging::warn!("Playback refused: {:?}", e);
                }
            }),
            Err(e) => leptos::logging::warn!("Playback failed: {:?}", e),
        },
        PlayerCommand::Pause => {
            if let Err(e) = element.pause() {
                leptos::logging::warn!("Pause failed: {:?}", e);
            }
        }
        PlayerCommand::Seek(seconds) => element.set_current_time(seconds),
        PlayerCommand::SetVolume { volume, muted } => {
            element.set_volume(volume);
            element.set_muted(muted);
        }
        PlayerCommand::EnterFullscreen => {
            if let Some(container) = container.get_untracked() {
                if let Err(e) = container.request_fullscreen() {
                    leptos::logging::warn!("Fullscreen refused: {:?}", e);
                }
            }
        }
        PlayerCommand::ExitFullscreen => {
            if let Some(document) = web_sys::window().and_then(|w| w.document()) {
                document.exit_fullscreen();
            }
        }
    }
}

/// SSR stubs - there is no media element on the server
#[cfg(feature = "ssr")]
pub fn duration(_video: NodeRef<Video>) -> f64 {
    0.0
}

#[cfg(feature = "ssr")]
pub fn current_time(_video: NodeRef<Video>) -> f64 {
    0.0
}

#[cfg(feature = "ssr")]
pub fn volume(_video: NodeRef<Video>) -> (f64, bool) {
    (1.0, false)
}

#[cfg(feature = "ssr")]
pub fn run(_video: NodeRef<Video>, _container: NodeRef<Div>, _command: PlayerCommand) {}
