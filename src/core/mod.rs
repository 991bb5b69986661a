// Core business logic module

pub mod appearance;
pub mod command;
pub mod config;
pub mod gpu;
pub mod overlay;
pub mod scheduler;
pub mod system_description;
pub mod telemetry;
pub mod view_state;

// Re-export commonly used items
pub use appearance::{Appearance, SizePreset, Theme};
pub use command::{Command, CommandQueue};
pub use config::OverlayConfig;
pub use gpu::{BackendKind, GpuBackend, GpuCapabilities, GpuDevice, GpuMonitor};
pub use overlay::{OverlayController, PresentationAdapter};
pub use scheduler::{DueTicks, TickScheduler};
pub use system_description::SystemDescription;
pub use telemetry::{MetricSample, TelemetrySampler, TelemetrySource};
pub use view_state::{ViewPane, ViewState};
