// Platform-specific code module

pub mod gpu;
pub mod host;
pub mod system_description;

// Re-exports
pub use gpu::detect_capabilities;
pub use host::HostTelemetry;
pub use system_description::collect_system_description;
