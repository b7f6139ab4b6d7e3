//! Plugin metadata

use crate::plugin::traits::Plugin;

/// Plugin metadata information
#[derive(Debug, Clone, PartialEq)]
pub struct PluginInfo {
    pub name: String,
    pub version: String,
    pub description: String,
    pub author: String,
    /// Date-shaped API version the plugin was built against (`YYYYMMDD`)
    pub api_version: u32,
    /// Activated without being named on the command line
    pub auto_active: bool,
}

/// A plugin found during discovery, not yet instantiated
#[derive(Debug, Clone)]
pub struct DiscoveredPlugin {
    pub info: PluginInfo,
    pub factory: fn() -> Box<dyn Plugin>,
}

/// Major component of a date-shaped API version: the year
pub fn api_major(api_version: u32) -> u32 {
    api_version / 10_000
}

/// Same API year as the running system
pub fn same_api_major(plugin_api_version: u32, system_api_version: u32) -> bool {
    api_major(plugin_api_version) == api_major(system_api_version)
}
