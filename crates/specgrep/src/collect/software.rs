//! Software category: build and OS version properties.
//!
//! Every field is a bare `getprop` value, trimmed raw.

use super::{query_raw, SpecCollector};
use crate::adb::DeviceChannel;
use specgrep_common::SpecRecord;

pub const CATEGORY: &str = "SoftwareSpecs";

pub const FIELDS: &[&str] = &[
    "AndroidVersion",
    "SdkVersion",
    "BuildId",
    "SecurityPatch",
    "BuildFingerprint",
    "BuildType",
];

pub const DESCRIPTIONS: &[(&str, &str)] = &[
    ("AndroidVersion", "The Android OS release running on the device"),
    ("SdkVersion", "The Android SDK API level of the build"),
    ("BuildId", "The build identifier of the installed system image"),
    (
        "SecurityPatch",
        "The date of the most recent security patch applied to the build",
    ),
    (
        "BuildFingerprint",
        "The full fingerprint uniquely identifying the system build",
    ),
    ("BuildType", "The build variant (user, userdebug or eng)"),
];

const QUERIES: &[(&str, &str)] = &[
    ("AndroidVersion", "getprop ro.build.version.release"),
    ("SdkVersion", "getprop ro.build.version.sdk"),
    ("BuildId", "getprop ro.build.id"),
    ("SecurityPatch", "getprop ro.build.version.security_patch"),
    ("BuildFingerprint", "getprop ro.build.fingerprint"),
    ("BuildType", "getprop ro.build.type"),
];

#[derive(Debug, Default)]
pub struct SoftwareCollector;

impl SpecCollector for SoftwareCollector {
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
        for (field, command) in QUERIES {
            record.insert(*field, query_raw(device, command));
        }
        record
    }
}
