//! Video player state machine
//!
//! `PlayerState` mirrors the `<video>` element. Media events are folded in
//! with [`PlayerState::apply`]; user intents (buttons, seek bar, keyboard)
//! never mutate the mirror directly, they produce a [`PlayerCommand`] that the
//! UI runs against the element, and the element's follow-up event updates the
//! mirror. The displayed time therefore always matches the media position.

/// Progress (percent) at which a lesson is reported complete without waiting
/// for the `ended` event
pub const COMPLETION_THRESHOLD: f64 = 95.0;

/// Volume restored when unmuting a player whose volume was dragged to zero
pub const DEFAULT_VOLUME: f64 = 0.5;

/// Arrow-key seek step, in seconds
pub const SEEK_STEP_SECONDS: f64 = 5.0;

/// Arrow-key volume step
pub const VOLUME_STEP: f64 = 0.1;

/// Playback status of the media element
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum Playback {
    /// Nothing played yet
    #[default]
    Idle,
    Playing,
    Paused,
    Ended,
}

/// State of the "lesson complete" report to the API
#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub enum Completion {
    #[default]
    NotStarted,
    /// Request in flight
    Pending,
    Completed,
    Failed(String),
}

/// Events coming from the media element
#[derive(Debug, Clone, Copy, PartialEq)]
pub enum MediaEvent {
    LoadedMetadata { duration: f64 },
    TimeUpdate { current_time: f64 },
    Play,
    Pause,
    Ended,
    VolumeChange { volume: f64, muted: bool },
    FullscreenChange(bool),
}

/// Actions the UI must run against the media element
#[derive(Debug, Clone, Copy, PartialEq)]
pub enum PlayerCommand {
    Play,
    Pause,
    Seek(f64),
    SetVolume { volume: f64, muted: bool },
    EnterFullscreen,
    ExitFullscreen,
}

/// Why a completion report was triggered automatically
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum CompletionTrigger {
    Ended,
    Threshold,
}

#[derive(Debug, Clone, PartialEq)]
pub struct PlayerState {
    pub playback: Playback,
    /// Seconds
    pub current_time: f64,
    /// Seconds, `0.0` while unknown
    pub duration: f64,
    pub volume: f64,
    pub muted: bool,
    pub fullscreen: bool,
    pub completion: Completion,
    /// Set once a completion report has been started for this lesson
    completion_triggered: bool,
}

impl Default for PlayerState {
    fn default() -> Self {
        Self {
            playback: Playback::Idle,
            current_time: 0.0,
            duration: 0.0,
            volume: 1.0,
            muted: false,
            fullscreen: false,
            completion: Completion::NotStarted,
            completion_triggered: false,
        }
    }
}

fn finite_non_negative(value: f64) -> f64 {
    if value.is_finite() && value > 0.0 {
        value
    } else {
        0.0
    }
}

fn clamp_volume(volume: f64) -> f64 {
    if volume.is_finite() {
        volume.clamp(0.0, 1.0)
    } else {
        0.0
    }
}

impl PlayerState {
    pub fn new() -> Self {
        Self::default()
    }

    /// Fold a media event into the mirror.
    ///
    /// Returns `Some` the first time the lesson should be reported complete.
    pub fn apply(&mut self, event: MediaEvent) -> Option<CompletionTrigger> {
        match event {
            MediaEvent::LoadedMetadata { duration } => {
                self.duration = finite_non_negative(duration);
                self.current_time = self.clamp_time(self.current_time);
                None
            }
            MediaEvent::TimeUpdate { current_time } => {
                self.current_time = self.clamp_time(finite_non_negative(current_time));
                if self.playback == Playback::Ended && self.current_time < self.duration {
                    self.playback = Playback::Paused;
                }
                if self.progress_percent() >= COMPLETION_THRESHOLD {
                    self.trigger_completion(CompletionTrigger::Threshold)
                } else {
                    None
                }
            }
            MediaEvent::Play => {
                self.playback = Playback::Playing;
                None
            }
            MediaEvent::Pause => {
                if self.playback != Playback::Ended {
                    self.playback = Playback::Paused;
                }
                None
            }
            MediaEvent::Ended => {
                self.playback = Playback::Ended;
                if self.duration > 0.0 {
                    self.current_time = self.duration;
                }
                self.trigger_completion(CompletionTrigger::Ended)
            }
            MediaEvent::VolumeChange { volume, muted } => {
                self.volume = clamp_volume(volume);
                self.muted = muted;
                None
            }
            MediaEvent::FullscreenChange(active) => {
                self.fullscreen = active;
                None
            }
        }
    }

    fn clamp_time(&self, time: f64) -> f64 {
        if self.duration > 0.0 {
            time.clamp(0.0, self.duration)
        } else {
            time
        }
    }

    fn trigger_completion(&mut self, trigger: CompletionTrigger) -> Option<CompletionTrigger> {
        if self.completion_triggered || self.completion == Completion::Completed {
            return None;
        }
        self.completion_triggered = true;
        self.completion = Completion::Pending;
        Some(trigger)
    }

    pub fn is_playing(&self) -> bool {
        self.playback == Playback::Playing
    }

    pub fn is_completed(&self) -> bool {
        self.completion == Completion::Completed
    }

    /// Whether the volume control should show the muted icon
    pub fn is_silent(&self) -> bool {
        self.muted || self.volume == 0.0
    }

    /// Played share of the media in percent, `0.0` while the duration is unknown
    pub fn progress_percent(&self) -> f64 {
        if self.duration <= 0.0 {
            return 0.0;
        }
        (self.current_time / self.duration * 100.0).clamp(0.0, 100.0)
    }

    pub fn toggle_play(&self) -> PlayerCommand {
        if self.is_playing() {
            PlayerCommand::Pause
        } else {
            PlayerCommand::Play
        }
    }

    /// Seek to a fraction (`0.0..=1.0`) of the media; `None` while the duration is unknown
    pub fn seek_to_fraction(&self, fraction: f64) -> Option<PlayerCommand> {
        if self.duration <= 0.0 || !fraction.is_finite() {
            return None;
        }
        Some(PlayerCommand::Seek(
            (fraction.clamp(0.0, 1.0) * self.duration).clamp(0.0, self.duration),
        ))
    }

    /// Seek relative to the current position
    pub fn seek_by(&self, delta: f64) -> Option<PlayerCommand> {
        if self.duration <= 0.0 || !delta.is_finite() {
            return None;
        }
        Some(PlayerCommand::Seek(
            (self.current_time + delta).clamp(0.0, self.duration),
        ))
    }

    /// Dragging the slider to zero mutes; anything above zero unmutes
    pub fn set_volume(&self, volume: f64) -> PlayerCommand {
        let volume = clamp_volume(volume);
        PlayerCommand::SetVolume {
            volume,
            muted: volume == 0.0,
        }
    }

    pub fn change_volume_by(&self, delta: f64) -> PlayerCommand {
        let base = if self.muted { 0.0 } else { self.volume };
        self.set_volume(base + delta)
    }

    pub fn toggle_mute(&self) -> PlayerCommand {
        if self.is_silent() {
            let volume = if self.volume > 0.0 {
                self.volume
            } else {
                DEFAULT_VOLUME
            };
            PlayerCommand::SetVolume {
                volume,
                muted: false,
            }
        } else {
            PlayerCommand::SetVolume {
                volume: self.volume,
                muted: true,
            }
        }
    }

    pub fn toggle_fullscreen(&self) -> PlayerCommand {
        if self.fullscreen {
            PlayerCommand::ExitFullscreen
        } else {
            PlayerCommand::EnterFullscreen
        }
    }

    /// Keyboard shortcuts of the player container (`KeyboardEvent.key` values)
    pub fn handle_key(&self, key: &str) -> Option<PlayerCommand> {
        match key {
            " " | "k" | "K" => Some(self.toggle_play()),
            "ArrowLeft" => self.seek_by(-SEEK_STEP_SECONDS),
            "ArrowRight" => self.seek_by(SEEK_STEP_SECONDS),
            "ArrowUp" => Some(self.change_volume_by(VOLUME_STEP)),
            "ArrowDown" => Some(self.change_volume_by(-VOLUME_STEP)),
            "m" | "M" => Some(self.toggle_mute()),
            "f" | "F" => Some(self.toggle_fullscreen()),
            _ => None,
        }
    }

    /// Manual "mark as complete". Returns `false` while a report is in flight
    /// or the lesson is already complete.
    pub fn request_completion(&mut self) -> bool {
        if matches!(self.completion, Completion::Pending | Completion::Completed) {
            return false;
        }
        self.completion_triggered = true;
        self.completion = Completion::Pending;
        true
    }

    pub fn completion_succeeded(&mut self) {
        self.completion = Completion::Completed;
    }

    pub fn completion_failed(&mut self, message: impl Into<String>) {
        self.completion = Completion::Failed(message.into());
    }

    /// A different lesson was loaded. Volume and mute carry over.
    pub fn reset(&mut self) {
        *self = Self {
            volume: self.volume,
            muted: self.muted,
            ..Self::default()
        };
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn loaded(duration: f64) -> PlayerState {
        let mut state = PlayerState::new();
        state.apply(MediaEvent::LoadedMetadata { duration });
        state
    }

    #[test]
    fn test_initial_state() {
        let state = PlayerState::new();
        assert_eq!(state.playback, Playback::Idle);
        assert_eq!(state.progress_percent(), 0.0);
        assert_eq!(state.volume, 1.0);
        assert!(!state.muted);
        assert_eq!(state.completion, Completion::NotStarted);
    }

    #[test]
    fn test_play_pause_cycle() {
        let mut state = loaded(100.0);
        assert_eq!(state.toggle_play(), PlayerCommand::Play);

        state.apply(MediaEvent::Play);
        assert!(state.is_playing());
        assert_eq!(state.toggle_play(), PlayerCommand::Pause);

        state.apply(MediaEvent::Pause);
        assert_eq!(state.playback, Playback::Paused);
        assert_eq!(state.toggle_play(), PlayerCommand::Play);
    }

    #[test]
    fn test_commands_do_not_mutate_mirror() {
        let state = loaded(100.0);
        let before = state.clone();
        let _ = state.toggle_play();
        let _ = state.seek_to_fraction(0.5);
        let _ = state.toggle_mute();
        let _ = state.toggle_fullscreen();
        assert_eq!(state, before);
    }

    #[test]
    fn test_progress_percent() {
        let mut state = loaded(200.0);
        state.apply(MediaEvent::TimeUpdate { current_time: 50.0 });
        assert_eq!(state.progress_percent(), 25.0);
    }

    #[test]
    fn test_progress_unknown_duration() {
        let mut state = PlayerState::new();
        state.apply(MediaEvent::TimeUpdate { current_time: 30.0 });
        assert_eq!(state.progress_percent(), 0.0);
        assert_eq!(state.current_time, 30.0);

        state.apply(MediaEvent::LoadedMetadata {
            duration: f64::INFINITY,
        });
        assert_eq!(state.duration, 0.0);
        assert_eq!(state.progress_percent(), 0.0);
    }

    #[test]
    fn test_time_update_clamped_to_duration() {
        let mut state = loaded(60.0);
        state.apply(MediaEvent::TimeUpdate { current_time: 75.0 });
        assert_eq!(state.current_time, 60.0);

        state.apply(MediaEvent::TimeUpdate {
            current_time: f64::NAN,
        });
        assert_eq!(state.current_time, 0.0);
    }

    #[test]
    fn test_seek_to_fraction() {
        let state = loaded(120.0);
        assert_eq!(state.seek_to_fraction(0.25), Some(PlayerCommand::Seek(30.0)));
        assert_eq!(state.seek_to_fraction(1.5), Some(PlayerCommand::Seek(120.0)));
        assert_eq!(state.seek_to_fraction(-1.0), Some(PlayerCommand::Seek(0.0)));
        assert_eq!(PlayerState::new().seek_to_fraction(0.5), None);
    }

    #[test]
    fn test_seek_by_clamps() {
        let mut state = loaded(20.0);
        state.apply(MediaEvent::TimeUpdate { current_time: 3.0 });
        assert_eq!(state.seek_by(-5.0), Some(PlayerCommand::Seek(0.0)));

        state.apply(MediaEvent::TimeUpdate { current_time: 18.0 });
        assert_eq!(state.seek_by(5.0), Some(PlayerCommand::Seek(20.0)));
    }

    #[test]
    fn test_set_volume_clamps_and_mutes_at_zero() {
        let state = loaded(10.0);
        assert_eq!(
            state.set_volume(1.7),
            PlayerCommand::SetVolume {
                volume: 1.0,
                muted: false
            }
        );
        assert_eq!(
            state.set_volume(0.0),
            PlayerCommand::SetVolume {
                volume: 0.0,
                muted: true
            }
        );
        assert_eq!(
            state.set_volume(-0.3),
            PlayerCommand::SetVolume {
                volume: 0.0,
                muted: true
            }
        );
    }

    #[test]
    fn test_toggle_mute_round_trip() {
        let mut state = loaded(10.0);
        state.apply(MediaEvent::VolumeChange {
            volume: 0.8,
            muted: false,
        });

        let cmd = state.toggle_mute();
        assert_eq!(
            cmd,
            PlayerCommand::SetVolume {
                volume: 0.8,
                muted: true
            }
        );

        state.apply(MediaEvent::VolumeChange {
            volume: 0.8,
            muted: true,
        });
        assert!(state.is_silent());
        assert_eq!(
            state.toggle_mute(),
            PlayerCommand::SetVolume {
                volume: 0.8,
                muted: false
            }
        );
    }

    #[test]
    fn test_unmute_at_zero_volume_restores_default() {
        let mut state = loaded(10.0);
        state.apply(MediaEvent::VolumeChange {
            volume: 0.0,
            muted: true,
        });
        assert_eq!(
            state.toggle_mute(),
            PlayerCommand::SetVolume {
                volume: DEFAULT_VOLUME,
                muted: false
            }
        );
    }

    #[test]
    fn test_fullscreen_toggle_follows_event() {
        let mut state = loaded(10.0);
        assert_eq!(state.toggle_fullscreen(), PlayerCommand::EnterFullscreen);
        state.apply(MediaEvent::FullscreenChange(true));
        assert!(state.fullscreen);
        assert_eq!(state.toggle_fullscreen(), PlayerCommand::ExitFullscreen);
        state.apply(MediaEvent::FullscreenChange(false));
        assert!(!state.fullscreen);
    }

    #[test]
    fn test_completion_triggers_once_on_threshold() {
        let mut state = loaded(100.0);
        assert_eq!(state.apply(MediaEvent::TimeUpdate { current_time: 94.0 }), None);
        assert_eq!(
            state.apply(MediaEvent::TimeUpdate { current_time: 95.0 }),
            Some(CompletionTrigger::Threshold)
        );
        assert_eq!(state.completion, Completion::Pending);
        assert_eq!(state.apply(MediaEvent::TimeUpdate { current_time: 99.0 }), None);
        assert_eq!(state.apply(MediaEvent::Ended), None);
    }

    #[test]
    fn test_completion_triggers_on_ended() {
        let mut state = loaded(100.0);
        state.apply(MediaEvent::Play);
        state.apply(MediaEvent::Pause);
        assert_eq!(state.apply(MediaEvent::Ended), Some(CompletionTrigger::Ended));
        assert_eq!(state.playback, Playback::Ended);
        assert_eq!(state.current_time, 100.0);
        assert_eq!(state.progress_percent(), 100.0);
    }

    #[test]
    fn test_pause_after_ended_keeps_ended() {
        let mut state = loaded(10.0);
        state.apply(MediaEvent::Ended);
        state.apply(MediaEvent::Pause);
        assert_eq!(state.playback, Playback::Ended);

        state.apply(MediaEvent::TimeUpdate { current_time: 2.0 });
        assert_eq!(state.playback, Playback::Paused);
    }

    #[test]
    fn test_manual_completion_flow() {
        let mut state = loaded(100.0);
        assert!(state.request_completion());
        assert!(!state.request_completion());

        state.completion_failed("Erro");
        assert_eq!(state.completion, Completion::Failed("Erro".to_string()));
        assert!(state.request_completion());

        state.completion_succeeded();
        assert!(state.is_completed());
        assert!(!state.request_completion());
        assert_eq!(state.apply(MediaEvent::Ended), None);
    }

    #[test]
    fn test_failed_auto_completion_does_not_retrigger() {
        let mut state = loaded(100.0);
        assert!(state.apply(MediaEvent::Ended).is_some());
        state.completion_failed("offline");
        assert_eq!(state.apply(MediaEvent::TimeUpdate { current_time: 100.0 }), None);
    }

    #[test]
    fn test_handle_key() {
        let mut state = loaded(60.0);
        state.apply(MediaEvent::TimeUpdate { current_time: 30.0 });

        assert_eq!(state.handle_key(" "), Some(PlayerCommand::Play));
        assert_eq!(state.handle_key("ArrowLeft"), Some(PlayerCommand::Seek(25.0)));
        assert_eq!(state.handle_key("ArrowRight"), Some(PlayerCommand::Seek(35.0)));
        assert_eq!(state.handle_key("f"), Some(PlayerCommand::EnterFullscreen));
        assert_eq!(
            state.handle_key("m"),
            Some(PlayerCommand::SetVolume {
                volume: 1.0,
                muted: true
            })
        );
        assert_eq!(state.handle_key("x"), None);
    }

    #[test]
    fn test_volume_keys_step_from_muted() {
        let mut state = loaded(60.0);
        state.apply(MediaEvent::VolumeChange {
            volume: 0.6,
            muted: true,
        });
        match state.handle_key("ArrowUp") {
            Some(PlayerCommand::SetVolume { volume, muted }) => {
                assert!((volume - VOLUME_STEP).abs() < 1e-9);
                assert!(!muted);
            }
            other => panic!("unexpected command: {:?}", other),
        }
    }

    #[test]
    fn test_reset_keeps_volume_preferences() {
        let mut state = loaded(100.0);
        state.apply(MediaEvent::Play);
        state.apply(MediaEvent::VolumeChange {
            volume: 0.3,
            muted: true,
        });
        state.apply(MediaEvent::Ended);

        state.reset();
        assert_eq!(state.playback, Playback::Idle);
        assert_eq!(state.duration, 0.0);
        assert_eq!(state.completion, Completion::NotStarted);
        assert_eq!(state.volume, 0.3);
        assert!(state.muted);
        assert!(state.apply(MediaEvent::Ended).is_some());
    }
}
