use crate::config::TypingConfig;

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum Phase {
    /// No strings to show.
    Idle,
    Typing,
    Pausing,
    Deleting,
    Advancing,
}

#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub struct TypingState {
    pub index: usize,
    pub visible: usize,
    pub deleting: bool,
}

/// Types, holds, deletes and advances through `strings` forever.
#[derive(Clone, Debug, PartialEq)]
pub struct TypingAnimator {
    strings: &'static [&'static str],
    config: TypingConfig,
    state: TypingState,
}

impl TypingAnimator {
    pub fn new(strings: &'static [&'static str], config: TypingConfig) -> Self {
        Self {
            strings,
            config,
            state: TypingState::default(),
        }
    }

    pub fn state(&self) -> TypingState {
        self.state
    }

    fn current(&self) -> Option<&'static str> {
        if self.strings.is_empty() {
            return None;
        }
        Some(self.strings[self.state.index % self.strings.len()])
    }

    pub fn phase(&self) -> Phase {
        let Some(current) = self.current() else {
            return Phase::Idle;
        };
        let len = current.chars().count();
        match (self.state.deleting, self.state.visible) {
            (false, visible) if visible < len => Phase::Typing,
            (false, _) => Phase::Pausing,
            (true, 0) => Phase::Advancing,
            (true, _) => Phase::Deleting,
        }
    }

    /// Wait before the next `tick`, or `None` when idle.
    pub fn delay_ms(&self) -> Option<u32> {
        match self.phase() {
            Phase::Idle => None,
            Phase::Typing => Some(self.config.speed_ms),
            Phase::Pausing => Some(self.config.pause_ms),
            Phase::Deleting => Some((self.config.speed_ms as f64 / 1.8) as u32),
            Phase::Advancing => Some(0),
        }
    }

    fn step(&mut self) {
        match self.phase() {
            Phase::Idle => {}
            Phase::Typing => self.state.visible += 1,
            Phase::Pausing => self.state.deleting = true,
            Phase::Deleting => self.state.visible -= 1,
            Phase::Advancing => {
                self.state.deleting = false;
                self.state.index = (self.state.index + 1) % self.strings.len();
            }
        }
    }

    /// Applies the pending transition. Advancing never waits on a timer.
    pub fn tick(&mut self) {
        self.step();
        if self.phase() == Phase::Advancing {
            self.step();
        }
    }

    pub fn text(&self) -> String {
        self.current()
            .map(|current| current.chars().take(self.state.visible).collect())
            .unwrap_or_default()
    }
}
