//! Which panel the overlay is showing.
//!
//! Pure state machine: no rendering, no timers. The controller feeds it
//! user requests and forwards the resulting pane to the presenter.

use serde::{Deserialize, Serialize};

#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum ViewPane {
    /// Live metric bars
    #[default]
    Live,
    /// Static system description
    Info,
    About,
    Settings,
}

impl ViewPane {
    pub const ALL: [ViewPane; 4] = [
        ViewPane::Live,
        ViewPane::Info,
        ViewPane::About,
        ViewPane::Settings,
    ];

    pub fn title(&self) -> &'static str {
        match self {
            ViewPane::Live => "Live",
            ViewPane::Info => "Info",
            ViewPane::About => "About",
            ViewPane::Settings => "Settings",
        }
    }
}

/// Field focused inside the settings pane
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub enum SettingsField {
    #[default]
    Transparency,
    Size,
    Theme,
}

impl SettingsField {
    pub fn next(self) -> Self {
        match self {
            SettingsField::Transparency => SettingsField::Size,
            SettingsField::Size => SettingsField::Theme,
            SettingsField::Theme => SettingsField::Transparency,
        }
    }

    pub fn previous(self) -> Self {
        match self {
            SettingsField::Transparency => SettingsField::Theme,
            SettingsField::Size => SettingsField::Transparency,
            SettingsField::Theme => SettingsField::Size,
        }
    }
}

/// Settings pane contents, created the first time the pane is opened
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct SettingsPanel {
    pub focus: SettingsField,
}

#[derive(Debug, Clone, Default)]
pub struct ViewState {
    active: ViewPane,
    settings: Option<SettingsPanel>,
}

impl ViewState {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn active(&self) -> ViewPane {
        self.active
    }

    pub fn is_active(&self, pane: ViewPane) -> bool {
        self.active == pane
    }

    /// The home button is offered whenever the live pane is hidden
    pub fn home_visible(&self) -> bool {
        self.active != ViewPane::Live
    }

    /// Activate `pane`, or return to Live if it is already the active
    /// non-Live pane.
    pub fn request_pane(&mut self, pane: ViewPane) -> ViewPane {
        if pane == ViewPane::Live || pane == self.active {
            return self.go_home();
        }

        if pane == ViewPane::Settings && self.settings.is_none() {
            self.settings = Some(SettingsPanel::default());
        }

        self.active = pane;
        self.active
    }

    pub fn go_home(&mut self) -> ViewPane {
        self.active = ViewPane::Live;
        self.active
    }

    /// Settings pane, if it was ever opened
    pub fn settings(&self) -> Option<&SettingsPanel> {
        self.settings.as_ref()
    }

    pub fn settings_mut(&mut self) -> Option<&mut SettingsPanel> {
        self.settings.as_mut()
    }
}
