//! Glue between ticks, user commands and the presentation layer.

use std::time::Instant;

use chrono::{DateTime, Local};
use log::debug;

use super::appearance::Appearance;
use super::command::{Command, CommandQueue};
use super::scheduler::DueTicks;
use super::system_description::SystemDescription;
use super::telemetry::{MetricSample, TelemetrySampler};
use super::view_state::{SettingsField, SettingsPanel, ViewPane, ViewState};

/// Transparency change for one settings step, in percent
pub const TRANSPARENCY_STEP: i32 = 5;

/// Renderer driven by the controller.
///
/// Implementations only display what they are handed; they never sample
/// the OS or change view state themselves.
pub trait PresentationAdapter {
    fn show_sample(&mut self, sample: &MetricSample);

    fn show_pane(&mut self, pane: ViewPane, settings: Option<&SettingsPanel>);

    fn show_clock(&mut self, time: &str);

    fn show_appearance(&mut self, appearance: &Appearance);

    fn show_system_description(&mut self, description: &SystemDescription);
}

/// Time-of-day text for the clock tick
pub fn format_clock(time: &DateTime<Local>) -> String {
    time.format("%H:%M:%S").to_string()
}

pub struct OverlayController<P: PresentationAdapter> {
    sampler: TelemetrySampler,
    view: ViewState,
    appearance: Appearance,
    commands: CommandQueue,
    presenter: P,
    last_sample: Option<MetricSample>,
    should_quit: bool,
}

impl<P: PresentationAdapter> OverlayController<P> {
    pub fn new(sampler: TelemetrySampler, appearance: Appearance, presenter: P) -> Self {
        Self {
            sampler,
            view: ViewState::new(),
            appearance,
            commands: CommandQueue::new(),
            presenter,
            last_sample: None,
            should_quit: false,
        }
    }

    /// Push the static content and initial state to the presenter
    pub fn start(&mut self, description: &SystemDescription) {
        self.presenter.show_system_description(description);
        self.presenter.show_appearance(&self.appearance);
        self.presenter
            .show_pane(self.view.active(), self.view.settings());
    }

    pub fn view(&self) -> &ViewState {
        &self.view
    }

    pub fn appearance(&self) -> &Appearance {
        &self.appearance
    }

    pub fn presenter(&self) -> &P {
        &self.presenter
    }

    pub fn presenter_mut(&mut self) -> &mut P {
        &mut self.presenter
    }

    pub fn last_sample(&self) -> Option<&MetricSample> {
        self.last_sample.as_ref()
    }

    pub fn should_quit(&self) -> bool {
        self.should_quit
    }

    pub fn queue(&mut self, command: Command) {
        self.commands.push(command);
    }

    /// Apply every queued command in arrival order
    pub fn process_commands(&mut self) {
        while let Some(command) = self.commands.pop() {
            self.apply(command);
        }
    }

    /// Run whatever ticks the scheduler reported as due
    pub fn on_ticks(&mut self, due: DueTicks, now: Instant) {
        if due.clock {
            self.on_clock_tick(&Local::now());
        }
        if due.sample {
            self.on_sample_tick(now);
        }
    }

    pub fn on_clock_tick(&mut self, time: &DateTime<Local>) {
        self.presenter.show_clock(&format_clock(time));
    }

    /// Sample telemetry and hand the result to the presenter
    pub fn on_sample_tick(&mut self, now: Instant) -> &MetricSample {
        let sample = self.sampler.sample_at(now);
        self.presenter.show_sample(&sample);
        self.last_sample.insert(sample)
    }

    fn apply(&mut self, command: Command) {
        debug!("Applying {:?}", command);

        match command {
            Command::RequestPane(pane) => {
                self.view.request_pane(pane);
                self.push_pane();
            }
            Command::GoHome => {
                self.view.go_home();
                self.push_pane();
            }
            Command::SetTheme(theme) => {
                self.appearance.theme = theme;
                self.push_appearance();
            }
            Command::SetSize(size) => {
                self.appearance.size = size;
                self.push_appearance();
            }
            Command::SetTransparency(percent) => {
                self.appearance.set_transparency(percent);
                self.push_appearance();
            }
            Command::AdjustTransparency(delta) => {
                self.appearance.adjust_transparency(delta);
                self.push_appearance();
            }
            Command::FocusNextSetting | Command::FocusPreviousSetting => {
                if !self.view.is_active(ViewPane::Settings) {
                    return;
                }
                if let Some(panel) = self.view.settings_mut() {
                    panel.focus = match command {
                        Command::FocusNextSetting => panel.focus.next(),
                        _ => panel.focus.previous(),
                    };
                }
                self.push_pane();
            }
            Command::AdjustSetting(step) => self.adjust_focused_setting(step),
            Command::Quit => self.should_quit = true,
        }
    }

    fn adjust_focused_setting(&mut self, step: i32) {
        if step == 0 || !self.view.is_active(ViewPane::Settings) {
            return;
        }
        let Some(focus) = self.view.settings().map(|panel| panel.focus) else {
            return;
        };

        match focus {
            SettingsField::Transparency => {
                self.appearance
                    .adjust_transparency(step * TRANSPARENCY_STEP);
            }
            SettingsField::Size => {
                self.appearance.size = if step > 0 {
                    self.appearance.size.next()
                } else {
                    self.appearance.size.previous()
                };
            }
            SettingsField::Theme => self.appearance.theme = self.appearance.theme.toggled(),
        }
        self.push_appearance();
    }

    fn push_pane(&mut self) {
        self.presenter
            .show_pane(self.view.active(), self.view.settings());
    }

    fn push_appearance(&mut self) {
        self.presenter.show_appearance(&self.appearance);
    }
}
