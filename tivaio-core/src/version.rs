//! Module version information

use tivaio_hal::diag::{ModuleId, VENDOR_ID};

/// Software major version
pub const SW_MAJOR_VERSION: u8 = 1;
/// Software minor version
pub const SW_MINOR_VERSION: u8 = 0;
/// Software patch version
pub const SW_PATCH_VERSION: u8 = 0;

/// Version record returned by the `version_info` services
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
pub struct VersionInfo {
    pub vendor_id: u16,
    pub module_id: u16,
    pub sw_major_version: u8,
    pub sw_minor_version: u8,
    pub sw_patch_version: u8,
}

impl VersionInfo {
    /// Create the version record of a module
    pub const fn new(module: ModuleId) -> Self {
        Self {
            vendor_id: VENDOR_ID,
            module_id: module.id(),
            sw_major_version: SW_MAJOR_VERSION,
            sw_minor_version: SW_MINOR_VERSION,
            sw_patch_version: SW_PATCH_VERSION,
        }
    }
}
