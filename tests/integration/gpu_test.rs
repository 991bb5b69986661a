use std::fs;
use std::path::Path;

use overlay_monitor::core::config::OverlayConfig;
use overlay_monitor::core::gpu::{BackendKind, GpuCapabilities, GpuMonitor};
use overlay_monitor::platform::detect_capabilities;
use tempfile::TempDir;

use super::support::FakeGpu;

#[test]
fn test_native_devices_win() {
    let mut monitor = GpuMonitor::new(GpuCapabilities {
        native: Some(FakeGpu::native(Some(vec!["RTX 4070"]), 40.0)),
        fallback: Some(FakeGpu::fallback(Some(vec!["Radeon", "Arc"]), 10.0)),
    });

    assert_eq!(monitor.backend_kind(), Some(BackendKind::Native));
    let rows = monitor.sample_utilization();
    assert_eq!(rows.len(), 1);
    assert_eq!(rows[0].label(), "GPU0 (RTX 4070)");
    assert_eq!(rows[0].utilization_percent, 40.0);
}

#[test]
fn test_fallback_used_when_native_reports_nothing() {
    let mut monitor = GpuMonitor::new(GpuCapabilities {
        native: Some(FakeGpu::native(Some(Vec::new()), 0.0)),
        fallback: Some(FakeGpu::fallback(Some(vec!["Radeon", "Arc"]), 12.0)),
    });

    assert_eq!(monitor.backend_kind(), Some(BackendKind::Fallback));
    let rows = monitor.sample_utilization();
    assert_eq!(rows.len(), 2);
    assert_eq!(rows[0].name, "Radeon");
    assert_eq!(rows[1].name, "Arc");
    assert!(rows.iter().all(|r| !r.placeholder));
}

#[test]
fn test_fallback_used_when_native_fails() {
    let monitor = GpuMonitor::new(GpuCapabilities {
        native: Some(FakeGpu::native(None, 0.0)),
        fallback: Some(FakeGpu::fallback(Some(vec!["Radeon"]), 12.0)),
    });

    assert_eq!(monitor.backend_kind(), Some(BackendKind::Fallback));
    assert_eq!(monitor.slot_count(), 1);
}

#[test]
fn test_placeholder_when_nothing_found() {
    let mut monitor = GpuMonitor::new(GpuCapabilities {
        native: Some(FakeGpu::native(Some(Vec::new()), 50.0)),
        fallback: Some(FakeGpu::fallback(None, 50.0)),
    });

    assert!(monitor.is_placeholder());
    assert_eq!(monitor.backend_kind(), None);

    for _ in 0..3 {
        let rows = monitor.sample_utilization();
        assert_eq!(rows.len(), 1);
        assert!(rows[0].placeholder);
        assert_eq!(rows[0].label(), "GPU");
        assert_eq!(rows[0].utilization_percent, 0.0);
    }
}

#[test]
fn test_one_failing_device_only_zeroes_its_row() {
    let backend = FakeGpu {
        kind: BackendKind::Native,
        names: Some(vec!["A", "B", "C"]),
        load: 55.0,
        queryable: Some(2),
        failing: vec![0],
    };
    let mut monitor = GpuMonitor::new(GpuCapabilities {
        native: Some(Box::new(backend)),
        fallback: None,
    });

    let rows = monitor.sample_utilization();
    let loads: Vec<f32> = rows.iter().map(|r| r.utilization_percent).collect();
    assert_eq!(loads, vec![0.0, 55.0, 0.0]);
    assert_eq!(
        rows.iter().map(|r| r.name.as_str()).collect::<Vec<_>>(),
        vec!["A", "B", "C"]
    );
}

fn add_card(root: &Path, card: &str, product: &str, busy: &str) {
    let device = root.join(card).join("device");
    fs::create_dir_all(&device).unwrap();
    fs::write(device.join("vendor"), "0x1002\n").unwrap();
    fs::write(device.join("product_name"), format!("{}\n", product)).unwrap();
    fs::write(device.join("gpu_busy_percent"), busy).unwrap();
}

#[test]
fn test_drm_tree_feeds_fallback_rows() {
    let temp = TempDir::new().unwrap();
    add_card(temp.path(), "card0", "Radeon RX 6600", "25\n");
    add_card(temp.path(), "card1", "Radeon 780M", "3\n");

    let config = OverlayConfig {
        enable_native_gpu: false,
        drm_root: temp.path().to_path_buf(),
        ..OverlayConfig::default()
    };

    let capabilities = detect_capabilities(&config);
    assert!(!capabilities.has_native());
    assert!(capabilities.has_fallback());

    let mut monitor = GpuMonitor::new(capabilities);
    let rows = monitor.sample_utilization();
    assert_eq!(rows.len(), 2);
    assert_eq!(rows[0].label(), "GPU0 (Radeon RX 6600)");
    assert_eq!(rows[0].utilization_percent, 25.0);
    assert_eq!(rows[1].utilization_percent, 3.0);

    // A card disappearing mid-run reads 0 instead of dropping the row
    fs::remove_dir_all(temp.path().join("card1")).unwrap();
    let rows = monitor.sample_utilization();
    assert_eq!(rows.len(), 2);
    assert_eq!(rows[1].utilization_percent, 0.0);
}

#[test]
fn test_disabled_backends_give_placeholder() {
    let config = OverlayConfig {
        enable_native_gpu: false,
        enable_fallback_gpu: false,
        ..OverlayConfig::default()
    };

    let monitor = GpuMonitor::new(detect_capabilities(&config));
    assert!(monitor.is_placeholder());
    assert_eq!(monitor.slot_count(), 1);
}
