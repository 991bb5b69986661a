use std::cell::RefCell;
use std::rc::Rc;

use overlay_monitor::core::appearance::Appearance;
use overlay_monitor::core::gpu::{BackendKind, GpuBackend, GpuCapabilities, GpuDevice, GpuMonitor};
use overlay_monitor::core::overlay::PresentationAdapter;
use overlay_monitor::core::system_description::SystemDescription;
use overlay_monitor::core::telemetry::{
    BatteryStatus, InterfaceCounters, MetricSample, NetworkMeter, TelemetrySampler,
    TelemetrySource,
};
use overlay_monitor::core::view_state::{SettingsPanel, ViewPane};
use overlay_monitor::{MonitorError, Result};

/// Values the fake source hands out; tests mutate them between ticks
#[derive(Debug, Clone, Default)]
pub struct FakeReadings {
    pub cpu: Option<f32>,
    pub ram: Option<f32>,
    pub disk: Option<f32>,
    pub battery: Option<BatteryStatus>,
    pub battery_fails: bool,
    pub interfaces: Vec<InterfaceCounters>,
}

#[derive(Clone, Default)]
pub struct FakeSource {
    pub readings: Rc<RefCell<FakeReadings>>,
}

impl FakeSource {
    pub fn new(readings: FakeReadings) -> Self {
        Self {
            readings: Rc::new(RefCell::new(readings)),
        }
    }
}

fn read(value: Option<f32>, what: &str) -> Result<f32> {
    value.ok_or_else(|| MonitorError::metric_collection(format!("{} unavailable", what)))
}

impl TelemetrySource for FakeSource {
    fn cpu_percent(&mut self) -> Result<f32> {
        read(self.readings.borrow().cpu, "cpu")
    }

    fn ram_percent(&mut self) -> Result<f32> {
        read(self.readings.borrow().ram, "ram")
    }

    fn disk_percent(&mut self) -> Result<f32> {
        read(self.readings.borrow().disk, "disk")
    }

    fn battery(&mut self) -> Result<Option<BatteryStatus>> {
        let readings = self.readings.borrow();
        if readings.battery_fails {
            return Err(MonitorError::metric_collection("battery unavailable"));
        }
        Ok(readings.battery)
    }

    fn interface_counters(&mut self) -> Result<Vec<InterfaceCounters>> {
        Ok(self.readings.borrow().interfaces.clone())
    }
}

/// GPU backend with a fixed device list; `None` makes enumeration fail
pub struct FakeGpu {
    pub kind: BackendKind,
    pub names: Option<Vec<&'static str>>,
    pub load: f32,
    /// Overrides the device count reported after enumeration
    pub queryable: Option<usize>,
    /// Slots whose utilization query fails
    pub failing: Vec<usize>,
}

impl FakeGpu {
    pub fn native(names: Option<Vec<&'static str>>, load: f32) -> Box<dyn GpuBackend> {
        Box::new(Self {
            kind: BackendKind::Native,
            names,
            load,
            queryable: None,
            failing: Vec::new(),
        })
    }

    pub fn fallback(names: Option<Vec<&'static str>>, load: f32) -> Box<dyn GpuBackend> {
        Box::new(Self {
            kind: BackendKind::Fallback,
            names,
            load,
            queryable: None,
            failing: Vec::new(),
        })
    }
}

impl GpuBackend for FakeGpu {
    fn kind(&self) -> BackendKind {
        self.kind
    }

    fn enumerate(&mut self) -> Result<Vec<GpuDevice>> {
        let names = self
            .names
            .as_ref()
            .ok_or_else(|| MonitorError::gpu_not_available("driver missing"))?;

        Ok(names
            .iter()
            .enumerate()
            .map(|(index, name)| GpuDevice {
                index: index as u32,
                name: name.to_string(),
                memory_total_bytes: None,
            })
            .collect())
    }

    fn queryable_count(&mut self) -> Result<usize> {
        Ok(self
            .queryable
            .unwrap_or_else(|| self.names.as_ref().map(Vec::len).unwrap_or(0)))
    }

    fn device_utilization(&mut self, index: usize) -> Result<f32> {
        if self.failing.contains(&index) {
            return Err(MonitorError::metric_collection(format!("GPU {} lost", index)));
        }
        Ok(self.load)
    }
}

pub fn sampler_with(source: FakeSource, capabilities: GpuCapabilities) -> TelemetrySampler {
    TelemetrySampler::new(
        Box::new(source),
        GpuMonitor::new(capabilities),
        NetworkMeter::default(),
    )
}

/// Presenter keeping a log of everything it was asked to show
#[derive(Debug, Default)]
pub struct RecordingPresenter {
    pub samples: Vec<MetricSample>,
    pub panes: Vec<ViewPane>,
    pub clocks: Vec<String>,
    pub appearances: Vec<Appearance>,
    pub descriptions: usize,
}

impl PresentationAdapter for RecordingPresenter {
    fn show_sample(&mut self, sample: &MetricSample) {
        self.samples.push(sample.clone());
    }

    fn show_pane(&mut self, pane: ViewPane, _settings: Option<&SettingsPanel>) {
        self.panes.push(pane);
    }

    fn show_clock(&mut self, time: &str) {
        self.clocks.push(time.to_string());
    }

    fn show_appearance(&mut self, appearance: &Appearance) {
        self.appearances.push(*appearance);
    }

    fn show_system_description(&mut self, _description: &SystemDescription) {
        self.descriptions += 1;
    }
}

pub fn empty_description() -> SystemDescription {
    SystemDescription {
        os_name: "TestOS".to_string(),
        os_version: "1.0".to_string(),
        kernel_version: None,
        host_name: "bench".to_string(),
        architecture: "x86_64".to_string(),
        physical_cores: Some(4),
        logical_cores: 8,
        total_memory_bytes: 16 * 1024 * 1024 * 1024,
        interfaces: Vec::new(),
        gpus: Vec::new(),
    }
}
