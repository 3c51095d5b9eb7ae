//! Device-specific constants
//!
//! Centralized definitions for property keys, command names, and release channels.

/// `getprop` binary name
pub const GETPROP_COMMAND: &str = "getprop";

/// `cat` binary name (used to read files on the target)
pub const CAT_COMMAND: &str = "cat";

/// `adb` binary name
pub const ADB_COMMAND: &str = "adb";

/// adb arguments
pub mod adb {
    /// Select a device by serial
    pub const SERIAL: &str = "-s";
    /// Run a command on the device shell
    pub const SHELL: &str = "shell";
}

/// System property keys
pub mod props {
    pub const CM_VERSION: &str = "ro.cm.version";
    pub const CM_RELEASE_TYPE: &str = "ro.cm.releasetype";
    pub const CM_DEVICE: &str = "ro.cm.device";
    pub const BUILD_DATE: &str = "ro.build.date";
    pub const MANUFACTURER: &str = "ro.product.manufacturer";
    pub const HARDWARE: &str = "ro.hardware";
    pub const BOARD: &str = "ro.product.board";
}

/// Release channel tokens
pub mod channels {
    /// Nightly builds
    pub const NIGHTLY: &str = "NIGHTLY";
    /// Stable snapshot builds
    pub const SNAPSHOT: &str = "SNAPSHOT";
    /// Self-built or third-party builds
    pub const UNOFFICIAL: &str = "UNOFFICIAL";

    /// Tags of official snapshot releases
    pub const SNAPSHOT_TAGS: &[&str] = &["YOG4P", "YNG4N", "XNG3C"];
}

/// Path of the build manifest on official builds
pub const BUILD_MANIFEST_PATH: &str = "/etc/build-manifest.xml";

/// Substring identifying organization projects in the manifest
pub const ORG_MARKER: &str = "CyanogenMod/";

/// Repositories shared by many devices.
pub const COMMON_REPOS: &[&str] = &[
    "android_hardware_akm",
    "android_hardware_broadcom_libbt",
    "android_hardware_broadcom_wlan",
    "android_hardware_cm",
    "android_hardware_cyanogen",
    "android_hardware_invensense",
    "android_hardware_libhardware",
    "android_hardware_libhardware_legacy",
    "android_hardware_ril",
    "android_hardware_sony_thermanager",
    "android_hardware_sony_timekeep",
];

/// Repositories shared by Qualcomm boards only.
pub const COMMON_REPOS_QCOM: &[&str] = &["android_device_qcom_common", "android_device_qcom_sepolicy"];
