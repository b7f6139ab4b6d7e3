//! Plugin trait
//!
//! Plugins are activated once per dispatched unit, after the rule engine has
//! seen it. They receive a [`PluginContext`] with the unit identity, its
//! suppression set and its content.

use crate::plugin::context::PluginContext;
use crate::plugin::error::PluginResult;
use crate::plugin::types::PluginInfo;

#[async_trait::async_trait]
pub trait Plugin: Send + Sync {
    /// Get plugin metadata
    fn plugin_info(&self) -> PluginInfo;

    /// Check if this plugin is compatible with the given system API version
    ///
    /// The default implementation returns false to force plugins to make
    /// an explicit decision. Builtins compare the API year using
    /// [`crate::plugin::types::same_api_major`].
    fn is_compatible(&self, _system_api_version: u32) -> bool {
        false
    }

    /// Called once before the first unit is dispatched
    async fn initialize(&mut self) -> PluginResult<()>;

    /// Handle one dispatched unit
    async fn activate(&mut self, context: PluginContext) -> PluginResult<()>;

    /// Called once after the run, whether it succeeded or not
    async fn cleanup(&mut self) -> PluginResult<()>;
}
