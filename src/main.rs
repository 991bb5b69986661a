use std::path::PathBuf;

use anyhow::{Context, Result};
use clap::{Arg, ArgAction, ArgMatches, Command};

use overlay_monitor::core::appearance::{SizePreset, Theme, MAX_TRANSPARENCY, MIN_TRANSPARENCY};
use overlay_monitor::core::config::OverlayConfig;
use overlay_monitor::{commands, init_logging};

fn build_cli() -> Command {
    Command::new("overlay-monitor")
        .version(env!("CARGO_PKG_VERSION"))
        .about("Compact system stats panel: CPU, RAM, disk, battery, GPU and network")
        .arg(
            Arg::new("interval")
                .long("interval")
                .value_name("MS")
                .help("Sample interval in milliseconds")
                .value_parser(clap::value_parser!(u64))
                .default_value("1000")
                .global(true),
        )
        .arg(
            Arg::new("clock-interval")
                .long("clock-interval")
                .value_name("MS")
                .help("Clock refresh interval in milliseconds")
                .value_parser(clap::value_parser!(u64))
                .default_value("500")
                .global(true),
        )
        .arg(
            Arg::new("net-ceiling-kbps")
                .long("net-ceiling-kbps")
                .value_name("KBPS")
                .help("Throughput shown as a full network bar, in KB/s")
                .value_parser(clap::value_parser!(f64))
                .default_value("102400")
                .global(true),
        )
        .arg(
            Arg::new("disk")
                .long("disk")
                .value_name("MOUNT")
                .help("Mount point whose usage feeds the disk bar")
                .value_parser(clap::value_parser!(PathBuf))
                .global(true),
        )
        .arg(
            Arg::new("theme")
                .long("theme")
                .value_name("THEME")
                .help("Color theme")
                .value_parser(["dark", "light"])
                .default_value("dark")
                .global(true),
        )
        .arg(
            Arg::new("size")
                .long("size")
                .value_name("SIZE")
                .help("Panel size preset")
                .value_parser(["small", "medium", "large"])
                .default_value("small")
                .global(true),
        )
        .arg(
            Arg::new("transparency")
                .long("transparency")
                .value_name("PERCENT")
                .help("Panel opacity in percent (30-100)")
                .value_parser(clap::value_parser!(u8).range(
                    MIN_TRANSPARENCY as i64..=MAX_TRANSPARENCY as i64,
                ))
                .default_value("92")
                .global(true),
        )
        .arg(
            Arg::new("no-native-gpu")
                .long("no-native-gpu")
                .help("Skip the NVML GPU backend")
                .action(ArgAction::SetTrue)
                .global(true),
        )
        .arg(
            Arg::new("no-fallback-gpu")
                .long("no-fallback-gpu")
                .help("Skip the DRM sysfs GPU backend")
                .action(ArgAction::SetTrue)
                .global(true),
        )
        .arg(
            Arg::new("drm-root")
                .long("drm-root")
                .value_name("PATH")
                .help("Root of the DRM sysfs tree")
                .value_parser(clap::value_parser!(PathBuf))
                .global(true),
        )
        .arg(
            Arg::new("log-level")
                .long("log-level")
                .value_name("LEVEL")
                .help("Log verbosity written to stderr")
                .value_parser(["off", "error", "warn", "info", "debug", "trace"])
                .default_value("warn")
                .global(true),
        )
        .subcommand(Command::new("run").about("Show the live panel in the terminal (default)"))
        .subcommand(
            Command::new("stream")
                .about("Print one JSON sample per line")
                .arg(
                    Arg::new("count")
                        .short('n')
                        .long("count")
                        .value_name("N")
                        .help("Stop after N samples")
                        .value_parser(clap::value_parser!(u64).range(1..)),
                ),
        )
        .subcommand(Command::new("info").about("Print the system description and exit"))
}

fn config_from_matches(matches: &ArgMatches) -> Result<OverlayConfig> {
    let mut config = OverlayConfig::default();

    if let Some(ms) = matches.get_one::<u64>("interval") {
        config.sample_interval_ms = *ms;
    }
    if let Some(ms) = matches.get_one::<u64>("clock-interval") {
        config.clock_interval_ms = *ms;
    }
    if let Some(kbps) = matches.get_one::<f64>("net-ceiling-kbps") {
        config.network_ceiling_kbps = *kbps;
    }
    if let Some(mount) = matches.get_one::<PathBuf>("disk") {
        config.disk_mount = mount.clone();
    }
    if let Some(theme) = matches.get_one::<String>("theme") {
        config.theme = theme.parse::<Theme>()?;
    }
    if let Some(size) = matches.get_one::<String>("size") {
        config.size = size.parse::<SizePreset>()?;
    }
    if let Some(transparency) = matches.get_one::<u8>("transparency") {
        config.transparency = *transparency;
    }
    if let Some(root) = matches.get_one::<PathBuf>("drm-root") {
        config.drm_root = root.clone();
    }
    config.enable_native_gpu = !matches.get_flag("no-native-gpu");
    config.enable_fallback_gpu = !matches.get_flag("no-fallback-gpu");

    config.validate().context("Invalid configuration")?;
    Ok(config)
}

fn main() -> Result<()> {
    let matches = build_cli().get_matches();

    let level = matches
        .get_one::<String>("log-level")
        .map(|s| s.parse::<log::LevelFilter>())
        .transpose()
        .context("Invalid log level")?
        .unwrap_or(log::LevelFilter::Warn);
    init_logging(level);

    // Global args are propagated down, so the subcommand matches see them too
    let (name, sub_matches) = match matches.subcommand() {
        Some((name, sub)) => (name, sub),
        None => ("run", &matches),
    };
    let config = config_from_matches(sub_matches)?;

    match name {
        "stream" => {
            let count = sub_matches.get_one::<u64>("count").copied();
            commands::stream(&config, count)
        }
        "info" => commands::info(&config),
        _ => commands::overlay(&config),
    }
}
