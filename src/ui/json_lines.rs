//! Headless presenter printing one JSON object per sample.

use std::io::Write;

use log::debug;

use crate::core::appearance::Appearance;
use crate::core::overlay::PresentationAdapter;
use crate::core::system_description::SystemDescription;
use crate::core::telemetry::MetricSample;
use crate::core::view_state::{SettingsPanel, ViewPane};
use crate::error::MonitorError;

/// Writes every [`MetricSample`] as a single JSON line
///
/// Pane, clock and appearance updates have no headless rendition and are
/// dropped. The first write failure is kept for the caller to collect.
pub struct JsonLinesPresenter<W: Write> {
    writer: W,
    written: u64,
    error: Option<MonitorError>,
}

impl<W: Write> JsonLinesPresenter<W> {
    pub fn new(writer: W) -> Self {
        Self {
            writer,
            written: 0,
            error: None,
        }
    }

    /// Samples written so far
    pub fn written(&self) -> u64 {
        self.written
    }

    pub fn take_error(&mut self) -> Option<MonitorError> {
        self.error.take()
    }

    pub fn into_inner(self) -> W {
        self.writer
    }

    fn write_sample(&mut self, sample: &MetricSample) -> Result<(), MonitorError> {
        serde_json::to_writer(&mut self.writer, sample)?;
        self.writer.write_all(b"\n")?;
        self.writer.flush()?;
        Ok(())
    }
}

impl<W: Write> PresentationAdapter for JsonLinesPresenter<W> {
    fn show_sample(&mut self, sample: &MetricSample) {
        match self.write_sample(sample) {
            Ok(()) => self.written += 1,
            Err(e) => {
                if self.error.is_none() {
                    self.error = Some(e);
                }
            }
        }
    }

    fn show_pane(&mut self, pane: ViewPane, _settings: Option<&SettingsPanel>) {
        debug!("Pane {:?} ignored in stream mode", pane);
    }

    fn show_clock(&mut self, _time: &str) {}

    fn show_appearance(&mut self, _appearance: &Appearance) {}

    fn show_system_description(&mut self, _description: &SystemDescription) {}
}
