//! Cross-vendor GPU backend reading the Linux DRM sysfs tree.
//!
//! amdgpu, i915/xe and nouveau all expose `device/gpu_busy_percent` under
//! `/sys/class/drm/cardN`. Hosts without that tree (other OSes, headless
//! containers) simply fail to open the backend.

use std::fs;
use std::path::{Path, PathBuf};

use crate::core::gpu::{BackendKind, GpuBackend, GpuDevice};
use crate::error::{MonitorError, Result};

const BUSY_FILE: &str = "device/gpu_busy_percent";

/// GPU backend over `/sys/class/drm`
pub struct DrmBackend {
    root: PathBuf,
    cards: Vec<PathBuf>,
}

impl DrmBackend {
    pub fn open<P: Into<PathBuf>>(root: P) -> Result<Self> {
        let root = root.into();
        if !root.is_dir() {
            return Err(MonitorError::gpu_not_available(format!(
                "DRM sysfs not found at {}",
                root.display()
            )));
        }

        Ok(Self {
            root,
            cards: Vec::new(),
        })
    }

    /// Card directories exposing a busy counter, ordered by card number
    fn scan(&self) -> Result<Vec<PathBuf>> {
        let mut cards: Vec<(u32, PathBuf)> = fs::read_dir(&self.root)?
            .flatten()
            .filter_map(|entry| {
                let name = entry.file_name();
                // Connector entries like card0-DP-1 fail to parse and are skipped
                let number = card_number(&name.to_string_lossy())?;
                let path = entry.path();
                path.join(BUSY_FILE).is_file().then_some((number, path))
            })
            .collect();

        cards.sort_by_key(|(number, _)| *number);
        Ok(cards.into_iter().map(|(_, path)| path).collect())
    }
}

impl GpuBackend for DrmBackend {
    fn kind(&self) -> BackendKind {
        BackendKind::Fallback
    }

    fn enumerate(&mut self) -> Result<Vec<GpuDevice>> {
        self.cards = self.scan()?;

        Ok(self
            .cards
            .iter()
            .enumerate()
            .map(|(index, card)| GpuDevice {
                index: index as u32,
                name: device_name(card),
                memory_total_bytes: read_trimmed(&card.join("device/mem_info_vram_total"))
                    .and_then(|v| v.parse().ok()),
            })
            .collect())
    }

    fn queryable_count(&mut self) -> Result<usize> {
        self.cards = self.scan()?;
        Ok(self.cards.len())
    }

    fn device_utilization(&mut self, index: usize) -> Result<f32> {
        let card = self
            .cards
            .get(index)
            .ok_or_else(|| MonitorError::metric_collection(format!("GPU {} not present", index)))?;

        let raw = fs::read_to_string(card.join(BUSY_FILE))?;
        raw.trim().parse::<f32>().map_err(|e| {
            MonitorError::metric_collection(format!(
                "Invalid busy value '{}' for {}: {}",
                raw.trim(),
                card.display(),
                e
            ))
        })
    }
}

fn card_number(name: &str) -> Option<u32> {
    name.strip_prefix("card")?.parse().ok()
}

fn read_trimmed(path: &Path) -> Option<String> {
    let value = fs::read_to_string(path).ok()?;
    let value = value.trim();
    (!value.is_empty()).then(|| value.to_string())
}

fn vendor_name(vendor_id: &str) -> &'static str {
    match vendor_id.to_ascii_lowercase().as_str() {
        "0x10de" => "NVIDIA",
        "0x1002" => "AMD",
        "0x8086" => "Intel",
        _ => "GPU",
    }
}

/// Marketing name when the driver exposes one, otherwise vendor + card
fn device_name(card: &Path) -> String {
    if let Some(product) = read_trimmed(&card.join("device/product_name")) {
        return product;
    }

    let vendor = read_trimmed(&card.join("device/vendor"))
        .map(|id| vendor_name(&id))
        .unwrap_or("GPU");
    let card_name = card
        .file_name()
        .map(|n| n.to_string_lossy().to_string())
        .unwrap_or_default();

    format!("{} {}", vendor, card_name)
}
