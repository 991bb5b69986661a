use std::collections::VecDeque;

use super::appearance::{SizePreset, Theme};
use super::view_state::ViewPane;

/// User requests coming from the presentation layer
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Command {
    /// Tab click: open a pane, or close it if already open
    RequestPane(ViewPane),
    /// Home button
    GoHome,
    SetTheme(Theme),
    SetSize(SizePreset),
    /// Absolute transparency in percent (clamped to 30..=100)
    SetTransparency(i32),
    AdjustTransparency(i32),
    /// Move focus inside the settings pane
    FocusNextSetting,
    FocusPreviousSetting,
    /// Step the focused setting up or down
    AdjustSetting(i32),
    Quit,
}

/// FIFO of pending commands, drained by the controller between ticks
#[derive(Debug, Default)]
pub struct CommandQueue {
    pending: VecDeque<Command>,
}

impl CommandQueue {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn push(&mut self, command: Command) {
        self.pending.push_back(command);
    }

    pub fn pop(&mut self) -> Option<Command> {
        self.pending.pop_front()
    }

    pub fn len(&self) -> usize {
        self.pending.len()
    }

    pub fn is_empty(&self) -> bool {
        self.pending.is_empty()
    }
}
