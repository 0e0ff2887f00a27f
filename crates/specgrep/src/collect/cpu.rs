//! CPU category: ABI, core topology, clock and governor.

use super::{query, query_extract, query_raw, SpecCollector};
use crate::adb::DeviceChannel;
use regex::Regex;
use specgrep_common::{extract, SpecRecord};
use std::sync::LazyLock;

pub const CATEGORY: &str = "CpuSpecs";

pub const FIELDS: &[&str] = &[
    "CpuAbi",
    "SupportedAbis",
    "CpuCores",
    "CpuHardware",
    "MaxFrequency",
    "ScalingGovernor",
];

pub const DESCRIPTIONS: &[(&str, &str)] = &[
    ("CpuAbi", "The primary application binary interface of the CPU"),
    ("SupportedAbis", "All application binary interfaces the CPU supports"),
    ("CpuCores", "The number of CPU cores present on the SoC"),
    ("CpuHardware", "The hardware platform name reported by the kernel"),
    (
        "MaxFrequency",
        "The maximum clock frequency of cpu0, in kilohertz (kHz)",
    ),
    (
        "ScalingGovernor",
        "The frequency scaling governor currently driving cpu0",
    ),
];

static PRESENT_RANGE_PATTERN: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"0-(?P<max_core_index>\d+)").unwrap());
static HARDWARE_PATTERN: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"Hardware\s*:\s+(?P<cpu_hardware>.*)").unwrap());

/// Core count from `/sys/devices/system/cpu/present`: a single core reads
/// `0`, multiple cores read `0-N`.
fn core_count(raw: &str) -> Option<String> {
    let trimmed = raw.trim();
    if trimmed == "0" {
        return Some("1".to_string());
    }
    extract::capture(&PRESENT_RANGE_PATTERN, trimmed, "max_core_index")
        .and_then(|idx| idx.parse::<u32>().ok())
        .map(|idx| (idx + 1).to_string())
}

#[derive(Debug, Default)]
pub struct CpuCollector;

impl SpecCollector for CpuCollector {
    fn category(&self) -> &'static str {
        CATEGORY
    }

    fn fields(&self) -> &'static [&'static str] {
        FIELDS
    }

    fn descriptions(&self) -> &'static [(&'static str, &'static str)] {
        DESCRIPTIONS
    }

    fn collect(&self, device: &dyn DeviceChannel) -> SpecRecord {
        let mut record = SpecRecord::new(CATEGORY);
        record.insert("CpuAbi", query_raw(device, "getprop ro.product.cpu.abi"));
        record.insert(
            "SupportedAbis",
            query_raw(device, "getprop ro.product.cpu.abilist"),
        );
        record.insert(
            "CpuCores",
            core_count(&query(device, "cat /sys/devices/system/cpu/present")),
        );
        record.insert(
            "CpuHardware",
            query_extract(
                device,
                "cat /proc/cpuinfo | grep Hardware",
                &HARDWARE_PATTERN,
                "cpu_hardware",
            ),
        );
        record.insert(
            "MaxFrequency",
            query_raw(
                device,
                "cat /sys/devices/system/cpu/cpu0/cpufreq/cpuinfo_max_freq",
            ),
        );
        record.insert(
            "ScalingGovernor",
            query_raw(
                device,
                "cat /sys/devices/system/cpu/cpu0/cpufreq/scaling_governor",
            ),
        );
        record
    }
}
