use crate::core::appearance::Appearance;
use crate::core::overlay::PresentationAdapter;
use crate::core::system_description::SystemDescription;
use crate::core::telemetry::MetricSample;
use crate::core::view_state::{SettingsPanel, ViewPane};

/// Everything the terminal panel draws, as last pushed by the controller
#[derive(Debug, Clone, Default)]
pub struct TuiPresenter {
    pub sample: Option<MetricSample>,
    pub pane: ViewPane,
    pub settings: Option<SettingsPanel>,
    pub clock: String,
    pub appearance: Appearance,
    pub info_lines: Vec<String>,
    /// Set whenever something visible changed since the last draw
    pub dirty: bool,
}

impl TuiPresenter {
    pub fn new() -> Self {
        Self {
            dirty: true,
            ..Self::default()
        }
    }

    /// Clear the redraw flag, returning whether a redraw was pending
    pub fn take_dirty(&mut self) -> bool {
        std::mem::replace(&mut self.dirty, false)
    }
}

impl PresentationAdapter for TuiPresenter {
    fn show_sample(&mut self, sample: &MetricSample) {
        self.sample = Some(sample.clone());
        self.dirty = true;
    }

    fn show_pane(&mut self, pane: ViewPane, settings: Option<&SettingsPanel>) {
        self.pane = pane;
        self.settings = settings.cloned();
        self.dirty = true;
    }

    fn show_clock(&mut self, time: &str) {
        if self.clock != time {
            self.clock = time.to_string();
            self.dirty = true;
        }
    }

    fn show_appearance(&mut self, appearance: &Appearance) {
        self.appearance = *appearance;
        self.dirty = true;
    }

    fn show_system_description(&mut self, description: &SystemDescription) {
        self.info_lines = description.lines();
        self.dirty = true;
    }
}
