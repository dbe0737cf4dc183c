//! Control bar of the video player

use leptos::prelude::*;

use crate::core::format::format_clock;
use crate::core::player::{PlayerCommand, PlayerState};
use crate::ui::common::IconButton;
use crate::ui::icon::icons;

/// Seek bar resolution; the range input runs `0..=SEEK_RESOLUTION`
const SEEK_RESOLUTION: f64 = 1000.0;

#[component]
pub fn PlayerControls(
    #[prop(into)] state: Signal<PlayerState>,
    #[prop(into)] on_command: Callback<PlayerCommand>,
) -> impl IntoView {
    let playing = Memo::new(move |_| state.with(|s| s.is_playing()));
    let silent = Memo::new(move |_| state.with(|s| s.is_silent()));
    let fullscreen = Memo::new(move |_| state.with(|s| s.fullscreen));
    let progress = Memo::new(move |_| state.with(|s| s.progress_percent()));
    let has_duration = Memo::new(move |_| state.with(|s| s.duration > 0.0));

    let time_label = move || {
        state.with(|s| format!("{} / {}", format_clock(s.current_time), format_clock(s.duration)))
    };

    let on_seek = move |ev: leptos::ev::Event| {
        let Ok(value) = event_target_value(&ev).parse::<f64>() else {
            return;
        };
        if let Some(command) = state.with_untracked(|s| s.seek_to_fraction(value / SEEK_RESOLUTION)) {
            on_command.run(command);
        }
    };

    let on_volume = move |ev: leptos::ev::Event| {
        if let Ok(value) = event_target_value(&ev).parse::<f64>() {
            on_command.run(state.with_untracked(|s| s.set_volume(value)));
        }
    };

    view! {
        <div class="player-controls">
            <input
                type="range"
                class="player-seek"
                min="0"
                max=SEEK_RESOLUTION.to_string()
                step="1"
                aria-label="Posição do vídeo"
                disabled=move || !has_duration.get()
                prop:value=move || (progress.get() / 100.0 * SEEK_RESOLUTION).round().to_string()
                style=move || format!("--progress: {:.2}%", progress.get())
                on:input=on_seek
            />

            <div class="flex items-center gap-2">
                <IconButton
                    icon=Signal::derive(move || if playing.get() { icons::PAUSE } else { icons::PLAY })
                    title=Signal::derive(move || if playing.get() { "Pausar".to_string() } else { "Reproduzir".to_string() })
                    on_click=move |_| on_command.run(state.with_untracked(|s| s.toggle_play()))
                />

                <span class="player-time">{time_label}</span>

                <div class="flex-1"></div>

                <IconButton
                    icon=Signal::derive(move || if silent.get() { icons::VOLUME_MUTED } else { icons::VOLUME })
                    title=Signal::derive(move || if silent.get() { "Ativar som".to_string() } else { "Silenciar".to_string() })
                    on_click=move |_| on_command.run(state.with_untracked(|s| s.toggle_mute()))
                />
                <input
                    type="range"
                    class="player-volume"
                    min="0"
                    max="1"
                    step="0.05"
                    aria-label="Volume"
                    prop:value=move || state.with(|s| if s.muted { 0.0 } else { s.volume }).to_string()
                    on:input=on_volume
                />

                <IconButton
                    icon=Signal::derive(move || if fullscreen.get() { icons::MINIMIZE } else { icons::MAXIMIZE })
                    title=Signal::derive(move || if fullscreen.get() { "Sair da tela cheia".to_string() } else { "Tela cheia".to_string() })
                    on_click=move |_| on_command.run(state.with_untracked(|s| s.toggle_fullscreen()))
                />
            </div>
        </div>
    }
}
