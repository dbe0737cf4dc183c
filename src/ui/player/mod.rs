//! Video player UI
//!
//! `VideoPlayer` binds a `<video>` element to a `PlayerState` signal: media
//! events are folded into the state, and user intents become
//! `PlayerCommand`s run against the element. The state is owned by the
//! caller so the rest of the page can read progress and completion.

mod controls;
mod media;
mod video_player;

use leptos::prelude::*;
use leptos::task::spawn_local;

use crate::core::player::PlayerState;
use crate::ui::api;
use crate::ui::auth::AuthContext;
use crate::ui::pages::route_still_at;

pub use controls::PlayerControls;
pub use video_player::VideoPlayer;

const COMPLETION_FALLBACK: &str = "Não foi possível marcar a aula como concluída";

/// Send the "lesson complete" report and record the outcome.
///
/// The outcome is dropped when `current` no longer points at `aula_id`
/// (the user moved to another lesson or left the page meanwhile).
pub fn report_completion(
    auth: AuthContext,
    player: RwSignal<PlayerState>,
    aula_id: i64,
    current: Signal<Option<i64>>,
) {
    spawn_local(async move {
        let result = api::concluir_aula(aula_id).await;

        if !route_still_at(current, aula_id) {
            return;
        }

        match result {
            Ok(()) => {
                leptos::logging::log!("Aula {} concluída", aula_id);
                player.update(|p| p.completion_succeeded());
            }
            Err(e) => {
                leptos::logging::error!("Erro ao concluir aula {}: {}", aula_id, e);
                auth.handle_api_error(&e);
                player.update(|p| p.completion_failed(e.user_message(COMPLETION_FALLBACK)));
            }
        }
    });
}
