//! Static host description shown on the Info pane.
//!
//! Assembled once at startup; nothing here is refreshed by the tick loop.

use humansize::{format_size, BINARY};
use serde::{Deserialize, Serialize};

/// Interfaces listed on the Info pane
pub const MAX_LISTED_INTERFACES: usize = 6;

pub const ABOUT_TEXT: &str = "Overlay Monitor: live system metrics in a compact always-on-top panel.";

#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct InterfaceInfo {
    pub name: String,
    pub addresses: Vec<String>,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct GpuInfoLine {
    pub name: String,
    pub memory_total_bytes: Option<u64>,
}

#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct SystemDescription {
    pub os_name: String,
    pub os_version: String,
    pub kernel_version: Option<String>,
    pub host_name: String,
    pub architecture: String,
    pub physical_cores: Option<usize>,
    pub logical_cores: usize,
    pub total_memory_bytes: u64,
    pub interfaces: Vec<InterfaceInfo>,
    pub gpus: Vec<GpuInfoLine>,
}

impl SystemDescription {
    /// Text lines for the Info pane
    pub fn lines(&self) -> Vec<String> {
        let mut lines = Vec::new();

        let kernel = self
            .kernel_version
            .as_deref()
            .map(|k| format!(" ({})", k))
            .unwrap_or_default();
        lines.push(format!("System: {} {}{}", self.os_name, self.os_version, kernel));
        lines.push(format!("Machine: {} - {}", self.architecture, self.host_name));

        let physical = self
            .physical_cores
            .map(|c| c.to_string())
            .unwrap_or_else(|| "?".to_string());
        lines.push(format!(
            "CPU cores: physical {}, logical {}",
            physical, self.logical_cores
        ));
        lines.push(format!(
            "Total RAM: {}",
            format_size(self.total_memory_bytes, BINARY)
        ));

        lines.push("Network Interfaces:".to_string());
        if self.interfaces.is_empty() {
            lines.push("  No network info".to_string());
        }
        for iface in self.interfaces.iter().take(MAX_LISTED_INTERFACES) {
            let addresses: Vec<&str> = iface
                .addresses
                .iter()
                .map(String::as_str)
                .filter(|a| !a.is_empty())
                .collect();
            lines.push(format!("  {}: {}", iface.name, addresses.join(", ")));
        }

        lines.push("GPUs:".to_string());
        if self.gpus.is_empty() {
            lines.push("  No dedicated GPUs detected".to_string());
        }
        for gpu in &self.gpus {
            match gpu.memory_total_bytes {
                Some(bytes) => lines.push(format!("  {} - {}", gpu.name, format_size(bytes, BINARY))),
                None => lines.push(format!("  {}", gpu.name)),
            }
        }

        lines
    }
}
