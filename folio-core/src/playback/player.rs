use crate::foundation::error::{FolioError, FolioResult};

#[derive(Clone, Debug, PartialEq, Eq, serde::Serialize, serde::Deserialize)]
/// How the page steps through the frame sequence.
pub struct PlaybackSettings {
    /// Time each frame stays on screen, in milliseconds.
    #[serde(default = "default_frame_ms")]
    pub frame_ms: u64,
    /// Play button label.
    #[serde(default = "default_button_label")]
    pub button_label: String,
    /// Resume from the current frame instead of rewinding when play is pressed again.
    #[serde(default = "default_from_current")]
    pub from_current: bool,
}

fn default_frame_ms() -> u64 {
    800
}

fn default_button_label() -> String {
    "▶ View Career Roadmap".to_owned()
}

fn default_from_current() -> bool {
    true
}

impl Default for PlaybackSettings {
    fn default() -> Self {
        Self {
            frame_ms: default_frame_ms(),
            button_label: default_button_label(),
            from_current: default_from_current(),
        }
    }
}

impl PlaybackSettings {
    /// Validate interval and label.
    pub fn validate(&self) -> FolioResult<()> {
        if self.frame_ms == 0 {
            return Err(FolioError::validation("playback frame_ms must be > 0"));
        }
        if self.button_label.trim().is_empty() {
            return Err(FolioError::validation(
                "playback button_label must be non-empty",
            ));
        }
        Ok(())
    }
}

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
/// Player state.
pub enum PlayerState {
    /// Not started, or stopped before the end.
    Idle,
    /// Advancing one frame per tick.
    Playing,
    /// Last frame reached and held.
    Finished,
}

/// Cursor over a frame sequence, advanced by an external render loop.
///
/// `tick()` is called once per interval and yields the 0-based index of the frame to draw.
/// A player over zero frames never leaves [`PlayerState::Idle`].
#[derive(Clone, Debug)]
pub struct FramePlayer {
    frame_count: usize,
    from_current: bool,
    next: usize,
    current: Option<usize>,
    state: PlayerState,
}

impl FramePlayer {
    /// Idle player over `frame_count` frames.
    pub fn new(frame_count: usize, settings: &PlaybackSettings) -> Self {
        Self {
            frame_count,
            from_current: settings.from_current,
            next: 0,
            current: None,
            state: PlayerState::Idle,
        }
    }

    /// Start or resume playback. A finished player always restarts from the first frame.
    pub fn play(&mut self) {
        if self.frame_count == 0 {
            return;
        }
        if self.state == PlayerState::Finished || !self.from_current {
            self.next = 0;
        }
        self.state = PlayerState::Playing;
    }

    /// Stop advancing; the current frame stays visible.
    pub fn pause(&mut self) {
        if self.state == PlayerState::Playing {
            self.state = PlayerState::Idle;
        }
    }

    /// Advance by one step and return the frame to draw, or `None` when not playing.
    pub fn tick(&mut self) -> Option<usize> {
        if self.state != PlayerState::Playing {
            return None;
        }
        let idx = self.next;
        self.current = Some(idx);
        self.next += 1;
        if self.next >= self.frame_count {
            self.state = PlayerState::Finished;
        }
        Some(idx)
    }

    /// Frame currently on screen.
    pub fn current(&self) -> Option<usize> {
        self.current
    }

    /// Current state.
    pub fn state(&self) -> PlayerState {
        self.state
    }

    /// Number of frames in the sequence.
    pub fn frame_count(&self) -> usize {
        self.frame_count
    }

    /// `(frame index, start offset in ms)` for a full run from the first frame.
    pub fn schedule(frame_count: usize, settings: &PlaybackSettings) -> Vec<(usize, u64)> {
        (0..frame_count)
            .map(|i| (i, (i as u64).saturating_mul(settings.frame_ms)))
            .collect()
    }
}

#[cfg(test)]
#[path = "../../tests/unit/playback/player.rs"]
mod tests;
