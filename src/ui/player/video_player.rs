//! `<video>` element wired to a `PlayerState`

use leptos::html::{Div, Video};
use leptos::prelude::*;

use super::controls::PlayerControls;
use super::media;
use crate::core::player::{CompletionTrigger, MediaEvent, PlayerCommand, PlayerState};

#[component]
pub fn VideoPlayer(
    /// Absolute video URL
    #[prop(into)]
    src: String,
    /// Poster image shown before playback
    #[prop(default = None)]
    poster: Option<String>,
    /// Player state, owned by the page
    state: RwSignal<PlayerState>,
    /// Called once per lesson when playback reaches the completion point
    #[prop(into)]
    on_complete: Callback<CompletionTrigger>,
) -> impl IntoView {
    let video_ref = NodeRef::<Video>::new();
    let container_ref = NodeRef::<Div>::new();

    let dispatch = move |event: MediaEvent| {
        let mut trigger = None;
        state.update(|s| trigger = s.apply(event));
        if let Some(trigger) = trigger {
            on_complete.run(trigger);
        }
    };

    let command = Callback::new(move |command: PlayerCommand| {
        media::run(video_ref, container_ref, command);
    });

    // fullscreenchange is dispatched on the document and bubbles to window
    #[cfg(not(feature = "ssr"))]
    {
        let handle = window_event_listener_untyped("fullscreenchange", move |_| {
            dispatch(MediaEvent::FullscreenChange(media::is_fullscreen(container_ref)));
        });
        on_cleanup(move || handle.remove());
    }

    let on_keydown = move |ev: leptos::ev::KeyboardEvent| {
        if let Some(cmd) = state.with_untracked(|s| s.handle_key(&ev.key())) {
            ev.prevent_default();
            command.run(cmd);
        }
    };

    view! {
        <div
            node_ref=container_ref
            class="video-player group"
            tabindex="0"
            on:keydown=on_keydown
        >
            <video
                node_ref=video_ref
                class="w-full h-full bg-black"
                poster=poster
                preload="metadata"
                playsinline=true
                on:click=move |_| command.run(state.with_untracked(|s| s.toggle_play()))
                on:loadedmetadata=move |_| {
                    dispatch(MediaEvent::LoadedMetadata { duration: media::duration(video_ref) })
                }
                on:timeupdate=move |_| {
                    dispatch(MediaEvent::TimeUpdate { current_time: media::current_time(video_ref) })
                }
                on:play=move |_| dispatch(MediaEvent::Play)
                on:pause=move |_| dispatch(MediaEvent::Pause)
                on:ended=move |_| dispatch(MediaEvent::Ended)
                on:volumechange=move |_| {
                    let (volume, muted) = media::volume(video_ref);
                    dispatch(MediaEvent::VolumeChange { volume, muted })
                }
            >
                <source src=src type="video/mp4" />
                "Seu navegador não suporta o elemento de vídeo."
            </video>

            <PlayerControls state=state on_command=command />
        </div>
    }
}
