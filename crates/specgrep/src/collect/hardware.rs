//! Hardware category: product identity, memory, battery.

use super::{query_extract, query_raw, SpecCollector};
use crate::adb::DeviceChannel;
use regex::Regex;
use specgrep_common::SpecRecord;
use std::sync::LazyLock;

pub const CATEGORY: &str = "HardwareSpecs";

pub const FIELDS: &[&str] = &[
    "Manufacturer",
    "Model",
    "DeviceName",
    "SerialNumber",
    "TotalRam",
    "BatteryCapacity",
];

pub const DESCRIPTIONS: &[(&str, &str)] = &[
    ("Manufacturer", "The company that manufactured the device"),
    ("Model", "The marketing model name of the device"),
    ("DeviceName", "The internal device codename"),
    ("SerialNumber", "The unique serial number assigned to the device"),
    ("TotalRam", "The total physical memory reported by the kernel"),
    (
        "BatteryCapacity",
        "The current battery charge level, as a percentage from 0 to 100",
    ),
];

static MEM_TOTAL_PATTERN: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"MemTotal:\s+(?P<total_ram>\d+\s*kB)").unwrap());
static BATTERY_LEVEL_PATTERN: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"level:\s*(?P<battery_level>\d+)").unwrap());

#[derive(Debug, Default)]
pub struct HardwareCollector;

impl SpecCollector for HardwareCollector {
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
        record.insert(
            "Manufacturer",
            query_raw(device, "getprop ro.product.manufacturer"),
        );
        record.insert("Model", query_raw(device, "getprop ro.product.model"));
        record.insert("DeviceName", query_raw(device, "getprop ro.product.device"));
        record.insert("SerialNumber", query_raw(device, "getprop ro.serialno"));
        record.insert(
            "TotalRam",
            query_extract(
                device,
                "cat /proc/meminfo | grep MemTotal",
                &MEM_TOTAL_PATTERN,
                "total_ram",
            ),
        );
        record.insert(
            "BatteryCapacity",
            query_extract(
                device,
                "dumpsys battery | grep level",
                &BATTERY_LEVEL_PATTERN,
                "battery_level",
            ),
        );
        record
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::collect::testutil::FakeDevice;

    #[test]
    fn test_collects_hardware_fields() {
        let device = FakeDevice(&[
            ("ro.product.manufacturer", "Acme\n"),
            ("ro.product.model", "Widget 9\n"),
            ("ro.product.device", "widget\n"),
            ("ro.serialno", "ABC123\n"),
            ("MemTotal", "MemTotal:        7812345 kB\n"),
            ("dumpsys battery", "  level: 87\n"),
        ]);
        let record = HardwareCollector.collect(&device);

        assert_eq!(record.len(), 6);
        assert_eq!(record.get("Manufacturer"), Some(&Some("Acme".to_string())));
        assert_eq!(record.get("TotalRam"), Some(&Some("7812345 kB".to_string())));
        assert_eq!(record.get("BatteryCapacity"), Some(&Some("87".to_string())));
    }

    #[test]
    fn test_meminfo_miss_is_absent_without_aborting() {
        let device = FakeDevice(&[("ro.product.model", "Widget 9\n")]);
        let record = HardwareCollector.collect(&device);

        assert_eq!(record.len(), 6);
        assert_eq!(record.get("TotalRam"), Some(&None));
        assert_eq!(record.get("Model"), Some(&Some("Widget 9".to_string())));
    }
}
