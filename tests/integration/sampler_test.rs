use std::time::{Duration, Instant};

use overlay_monitor::core::gpu::GpuCapabilities;
use overlay_monitor::core::telemetry::{BatteryReading, BatteryStatus, InterfaceCounters};
use overlay_monitor::ui::{format_battery, format_percent};

use super::support::{sampler_with, FakeReadings, FakeSource};

fn source() -> FakeSource {
    FakeSource::new(FakeReadings {
        cpu: Some(57.8),
        ram: Some(102.0),
        disk: Some(-4.0),
        battery: None,
        ..FakeReadings::default()
    })
}

#[test]
fn test_sampler_exposes_gpu_and_network_state() {
    let source = source();
    source.readings.borrow_mut().interfaces = vec![InterfaceCounters::new("eth0", 1, 1)];

    let mut sampler = sampler_with(source, GpuCapabilities::none());
    assert!(sampler.gpus().is_placeholder());
    assert_eq!(sampler.network().ceiling_kbps(), 102_400.0);
    assert!(sampler.network().state().is_none());

    sampler.sample();
    let state = sampler.network().state().unwrap();
    assert_eq!(state.interface, "eth0");
    assert_eq!(state.last_sent, 1);
}

#[test]
fn test_percentages_are_clamped_and_truncated_for_display() {
    let mut sampler = sampler_with(source(), GpuCapabilities::none());
    let sample = sampler.sample();

    assert_eq!(format_percent(sample.cpu_percent), "57%");
    assert_eq!(sample.ram_percent, 100.0);
    assert_eq!(format_percent(sample.ram_percent), "100%");
    assert_eq!(sample.disk_percent, 0.0);
}

#[test]
fn test_non_finite_readings_become_zero() {
    let source = source();
    source.readings.borrow_mut().cpu = Some(f32::NAN);
    source.readings.borrow_mut().ram = Some(f32::INFINITY);

    let mut sampler = sampler_with(source, GpuCapabilities::none());
    let sample = sampler.sample();

    assert_eq!(sample.cpu_percent, 0.0);
    assert_eq!(sample.ram_percent, 0.0);
}

#[test]
fn test_failed_reads_do_not_abort_the_tick() {
    let source = FakeSource::new(FakeReadings {
        battery_fails: true,
        ..FakeReadings::default()
    });

    let mut sampler = sampler_with(source, GpuCapabilities::none());
    let sample = sampler.sample();

    assert_eq!(sample.cpu_percent, 0.0);
    assert_eq!(sample.ram_percent, 0.0);
    assert_eq!(sample.disk_percent, 0.0);
    assert_eq!(sample.battery, BatteryReading::Unavailable);
    assert_eq!(sample.gpus.len(), 1);
    assert_eq!(sample.network_interface, None);
}

#[test]
fn test_absent_battery_never_reads_as_empty() {
    let mut sampler = sampler_with(source(), GpuCapabilities::none());
    let sample = sampler.sample();

    assert_eq!(sample.battery, BatteryReading::Absent);
    assert_eq!(sample.battery_percent(), None);
    assert_eq!(format_battery(&sample.battery), "No battery");
}

#[test]
fn test_battery_present() {
    let source = source();
    source.readings.borrow_mut().battery = Some(BatteryStatus {
        percent: 64.9,
        plugged: false,
    });

    let mut sampler = sampler_with(source, GpuCapabilities::none());
    let sample = sampler.sample();

    assert_eq!(sample.battery_percent(), Some(64));
    assert_eq!(sample.battery_plugged(), Some(false));
    assert_eq!(format_battery(&sample.battery), "🔋 64% (On Battery)");
}

#[test]
fn test_network_percent_over_elapsed_time() {
    let source = source();
    source.readings.borrow_mut().interfaces = vec![InterfaceCounters::new("eth0", 1_000, 2_000)];

    let mut sampler = sampler_with(source.clone(), GpuCapabilities::none());
    let start = Instant::now();
    let first = sampler.sample_at(start);
    assert_eq!(first.network_interface.as_deref(), Some("eth0"));
    assert_eq!(first.network_percent, 0.0);
    assert_eq!(first.network_bytes_per_sec, None);

    // 100 MiB over 2 s = 51200 KB/s, half the 102400 KB/s ceiling
    let moved: u64 = 100 * 1024 * 1024;
    source.readings.borrow_mut().interfaces = vec![InterfaceCounters::new(
        "eth0",
        1_000 + moved / 4,
        2_000 + moved * 3 / 4,
    )];
    let second = sampler.sample_at(start + Duration::from_secs(2));

    assert_eq!(second.network_bytes_per_sec, Some(moved as f64 / 2.0));
    assert_eq!(second.network_percent, 50.0);
}

#[test]
fn test_network_saturates_at_one_hundred() {
    let source = source();
    source.readings.borrow_mut().interfaces = vec![InterfaceCounters::new("eth0", 0, 1)];

    let mut sampler = sampler_with(source.clone(), GpuCapabilities::none());
    let start = Instant::now();
    sampler.sample_at(start);

    source.readings.borrow_mut().interfaces =
        vec![InterfaceCounters::new("eth0", 0, 1 + 500 * 1024 * 1024)];
    let sample = sampler.sample_at(start + Duration::from_secs(1));

    assert_eq!(sample.network_percent, 100.0);
}

#[test]
fn test_interface_switch_reads_zero() {
    let source = source();
    source.readings.borrow_mut().interfaces = vec![
        InterfaceCounters::new("eth0", 5_000, 5_000),
        InterfaceCounters::new("wlan0", 100, 100),
    ];

    let mut sampler = sampler_with(source.clone(), GpuCapabilities::none());
    let start = Instant::now();
    sampler.sample_at(start);

    source.readings.borrow_mut().interfaces = vec![
        InterfaceCounters::new("eth0", 5_000, 5_000),
        InterfaceCounters::new("wlan0", 900_000, 900_000),
    ];
    let switched = sampler.sample_at(start + Duration::from_secs(1));

    assert_eq!(switched.network_interface.as_deref(), Some("wlan0"));
    assert_eq!(switched.network_percent, 0.0);
    assert_eq!(switched.network_bytes_per_sec, None);

    // The new interface is tracked from now on
    source.readings.borrow_mut().interfaces = vec![
        InterfaceCounters::new("eth0", 5_000, 5_000),
        InterfaceCounters::new("wlan0", 900_000 + 1024 * 1024, 900_000),
    ];
    let tracked = sampler.sample_at(start + Duration::from_secs(2));
    assert_eq!(tracked.network_bytes_per_sec, Some(1024.0 * 1024.0));
    assert_eq!(tracked.network_percent, 1.0);
}

#[test]
fn test_zero_elapsed_is_treated_as_one_second() {
    let source = source();
    source.readings.borrow_mut().interfaces = vec![InterfaceCounters::new("eth0", 0, 10)];

    let mut sampler = sampler_with(source.clone(), GpuCapabilities::none());
    let now = Instant::now();
    sampler.sample_at(now);

    source.readings.borrow_mut().interfaces =
        vec![InterfaceCounters::new("eth0", 1024 * 1024, 10)];
    let sample = sampler.sample_at(now);

    assert_eq!(sample.network_bytes_per_sec, Some(1024.0 * 1024.0));
    assert_eq!(sample.network_percent, 1.0);
}

#[test]
fn test_idle_interfaces_are_not_selected() {
    let source = source();
    source.readings.borrow_mut().interfaces = vec![InterfaceCounters::new("lo", 0, 0)];

    let mut sampler = sampler_with(source, GpuCapabilities::none());
    let sample = sampler.sample();

    assert_eq!(sample.network_interface, None);
    assert_eq!(sample.network_percent, 0.0);
}
