//! Display category: density, screen size, brightness, refresh rate,
//! screen-off timeout, rotation.

use super::{query_extract, query_raw, SpecCollector, ValueDescriptions};
use crate::adb::DeviceChannel;
use regex::Regex;
use specgrep_common::SpecRecord;
use std::sync::LazyLock;

pub const CATEGORY: &str = "DisplaySpecs";

pub const FIELDS: &[&str] = &[
    "DisplayDensity",
    "DisplayScreenSize",
    "ScreenBrightness",
    "RefreshRate",
    "ScreenOffTimeout",
    "ScreenRotation",
];

pub const DESCRIPTIONS: &[(&str, &str)] = &[
    ("DisplayDensity", "The density of the display, measured in DPI"),
    (
        "DisplayScreenSize",
        "The size of the screen, typically measured diagonally in inches",
    ),
    (
        "ScreenBrightness",
        "The current screen brightness level, measured on a scale from 1 to 255",
    ),
    (
        "RefreshRate",
        "The maximum rate at which the screen can refresh its content, measured in Hertz (Hz)",
    ),
    (
        "ScreenOffTimeout",
        "The duration before the screen turns off automatically, measured in milliseconds",
    ),
    (
        "ScreenRotation",
        "The current orientation of the screen, represented as degrees (0, 90, 180, 270)",
    ),
];

const ROTATION_DESCRIPTIONS: &[(&str, &str)] = &[
    ("0", "The screen is in its default portrait orientation."),
    ("90", "The screen is rotated 90 degrees clockwise, in landscape mode."),
    ("180", "The screen is upside down, in reverse portrait mode."),
    (
        "270",
        "The screen is rotated 90 degrees counterclockwise, in reverse landscape mode.",
    ),
];

const VALUE_DESCRIPTIONS: ValueDescriptions = &[("ScreenRotation", ROTATION_DESCRIPTIONS)];

static DENSITY_PATTERN: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r":\s+(?P<display_density>.*)").unwrap());
static SIZE_PATTERN: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r":\s+(?P<screen_size>.*)").unwrap());
// Some builds report "Rate=60.0", others "Rate= 60.0".
static REFRESH_RATE_PATTERN: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"mDefaultPeakRefreshRate= ?(?P<refresh_rate>[\d.]+)").unwrap());

#[derive(Debug, Default)]
pub struct DisplayCollector;

impl SpecCollector for DisplayCollector {
    fn category(&self) -> &'static str {
        CATEGORY
    }

    fn fields(&self) -> &'static [&'static str] {
        FIELDS
    }

    fn descriptions(&self) -> &'static [(&'static str, &'static str)] {
        DESCRIPTIONS
    }

    fn value_descriptions(&self) -> ValueDescriptions {
        VALUE_DESCRIPTIONS
    }

    fn collect(&self, device: &dyn DeviceChannel) -> SpecRecord {
        let mut record = SpecRecord::new(CATEGORY);
        record.insert(
            "DisplayDensity",
            query_extract(device, "wm density", &DENSITY_PATTERN, "display_density"),
        );
        record.insert(
            "DisplayScreenSize",
            query_extract(device, "wm size", &SIZE_PATTERN, "screen_size"),
        );
        record.insert(
            "ScreenBrightness",
            query_raw(device, "settings get system screen_brightness"),
        );
        record.insert(
            "RefreshRate",
            query_extract(
                device,
                "dumpsys display | grep -E \"mDefaultPeakRefreshRate\" | head -n 1",
                &REFRESH_RATE_PATTERN,
                "refresh_rate",
            ),
        );
        record.insert(
            "ScreenOffTimeout",
            query_raw(device, "settings get system screen_off_timeout"),
        );
        record.insert(
            "ScreenRotation",
            query_raw(device, "settings get system user_rotation"),
        );
        record
    }
}
