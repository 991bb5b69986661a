use sysinfo::{MacAddr, MemoryRefreshKind, Networks, RefreshKind, System};

use crate::core::gpu::GpuDevice;
use crate::core::system_description::{GpuInfoLine, InterfaceInfo, SystemDescription};

/// Collect the static host description
///
/// GPU lines come from the devices the GPU monitor enumerated, so the Info
/// pane and the live rows always agree.
pub fn collect_system_description(gpus: &[GpuDevice]) -> SystemDescription {
    let refresh = RefreshKind::nothing().with_memory(MemoryRefreshKind::nothing().with_ram());
    let mut sys = System::new_with_specifics(refresh);
    sys.refresh_cpu_list(sysinfo::CpuRefreshKind::nothing());

    let networks = Networks::new_with_refreshed_list();
    let mut interfaces: Vec<InterfaceInfo> = networks
        .iter()
        .map(|(name, data)| {
            let mut addresses: Vec<String> = data
                .ip_networks()
                .iter()
                .map(|ip| ip.addr.to_string())
                .collect();
            addresses.extend(mac_text(data.mac_address()));

            InterfaceInfo {
                name: name.to_string(),
                addresses,
            }
        })
        .collect();
    interfaces.sort_by(|a, b| a.name.cmp(&b.name));

    SystemDescription {
        os_name: System::name().unwrap_or_else(|| "Unknown".to_string()),
        os_version: System::os_version().unwrap_or_else(|| "Unknown".to_string()),
        kernel_version: System::kernel_version(),
        host_name: System::host_name().unwrap_or_else(|| "Unknown".to_string()),
        architecture: std::env::consts::ARCH.to_string(),
        physical_cores: System::physical_core_count(),
        logical_cores: sys.cpus().len(),
        total_memory_bytes: sys.total_memory(),
        interfaces,
        gpus: gpus
            .iter()
            .map(|gpu| GpuInfoLine {
                name: gpu.name.clone(),
                memory_total_bytes: gpu.memory_total_bytes,
            })
            .collect(),
    }
}

/// Hardware address text, `None` for the all-zero address of virtual links
fn mac_text(mac: MacAddr) -> Option<String> {
    (!mac.is_unspecified()).then(|| mac.to_string())
}
