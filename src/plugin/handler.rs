//! Plugin handler
//!
//! Discovers builtin plugins, keeps them in a [`SharedPluginRegistry`] and
//! drives their lifecycle: initialise the active set once, activate them for
//! every dispatched unit, clean them up at the end of the run.

use crate::core::version::get_api_version;
use crate::plugin::builtin::api::get_all_builtin_plugins;
use crate::plugin::context::PluginContext;
use crate::plugin::error::{PluginError, PluginResult};
use crate::plugin::registry::SharedPluginRegistry;
use crate::plugin::traits::Plugin;
use crate::plugin::types::PluginInfo;

#[derive(Debug, Clone)]
pub struct PluginHandler {
    registry: SharedPluginRegistry,
    api_version: u32,
}

impl PluginHandler {
    pub fn new() -> Self {
        Self::with_api_version(get_api_version())
    }

    pub fn with_api_version(api_version: u32) -> Self {
        Self {
            registry: SharedPluginRegistry::new(),
            api_version,
        }
    }

    pub fn api_version(&self) -> u32 {
        self.api_version
    }

    pub fn registry(&self) -> &SharedPluginRegistry {
        &self.registry
    }

    /// Register every compatible builtin plugin not named in `excludes`
    ///
    /// Builtins flagged `auto_active` are activated straight away. Returns
    /// the number of plugins registered.
    pub async fn discover_builtins(&self, excludes: &[String]) -> PluginResult<usize> {
        let mut registered = 0;
        for discovered in get_all_builtin_plugins() {
            if excludes.iter().any(|name| name == &discovered.info.name) {
                log::debug!("Builtin plugin '{}' excluded", discovered.info.name);
                continue;
            }
            match self.register_plugin((discovered.factory)()).await {
                Ok(()) => registered += 1,
                Err(e @ PluginError::VersionIncompatible { .. }) => {
                    log::warn!("Skipping builtin plugin '{}': {}", discovered.info.name, e);
                    continue;
                }
                Err(e) => return Err(e),
            }
            if discovered.info.auto_active {
                self.registry.activate_plugin(&discovered.info.name).await?;
            }
        }
        log::debug!("Discovered {} builtin plugin(s)", registered);
        Ok(registered)
    }

    /// Register a plugin after checking it accepts this API version
    pub async fn register_plugin(&self, plugin: Box<dyn Plugin>) -> PluginResult<()> {
        let info = plugin.plugin_info();
        if !plugin.is_compatible(self.api_version) {
            return Err(PluginError::VersionIncompatible {
                message: format!(
                    "Plugin '{}' targets API version {}, system provides {}",
                    info.name, info.api_version, self.api_version
                ),
            });
        }
        self.registry
            .inner()
            .write()
            .await
            .register_plugin(plugin)?;
        log::trace!("Registered plugin '{}' v{}", info.name, info.version);
        Ok(())
    }

    /// Mark the named plugins active
    pub async fn activate(&self, names: &[String]) -> PluginResult<()> {
        for name in names {
            self.registry.activate_plugin(name).await?;
            log::debug!("Plugin '{}' activated", name);
        }
        Ok(())
    }

    pub async fn active_plugin_names(&self) -> Vec<String> {
        self.registry.get_active_plugins().await
    }

    /// Initialise every active plugin
    pub async fn initialize_active(&self) -> PluginResult<()> {
        let mut registry = self.registry.inner().write().await;
        for name in registry.get_active_plugins() {
            if let Some(plugin) = registry.get_plugin_mut(&name) {
                plugin.initialize().await.map_err(|e| PluginError::LoadError {
                    plugin_name: name.clone(),
                    cause: e.to_string(),
                })?;
            }
        }
        Ok(())
    }

    /// Hand one unit to every active plugin, in name order
    ///
    /// Each plugin gets its own copy of the context and so its own reader.
    /// The first failure stops the activation.
    pub async fn activate_plugins(&self, context: PluginContext) -> PluginResult<()> {
        let mut registry = self.registry.inner().write().await;
        for name in registry.get_active_plugins() {
            if let Some(plugin) = registry.get_plugin_mut(&name) {
                log::trace!("Activating plugin '{}' for '{}'", name, context.unit_id());
                plugin.activate(context.clone()).await?;
            }
        }
        Ok(())
    }

    /// Clean up every active plugin
    ///
    /// All plugins are cleaned even when one fails; the first error is returned.
    pub async fn cleanup(&self) -> PluginResult<()> {
        let mut registry = self.registry.inner().write().await;
        let mut first_error = None;
        for name in registry.get_active_plugins() {
            if let Some(plugin) = registry.get_plugin_mut(&name) {
                if let Err(e) = plugin.cleanup().await {
                    log::warn!("Cleanup of plugin '{}' failed: {}", name, e);
                    first_error.get_or_insert(e);
                }
            }
        }
        match first_error {
            Some(e) => Err(e),
            None => Ok(()),
        }
    }

    /// Metadata of every registered plugin, sorted by name
    pub async fn list_plugins(&self) -> Vec<PluginInfo> {
        let registry = self.registry.inner().read().await;
        registry
            .get_plugin_names()
            .iter()
            .filter_map(|name| registry.get_plugin(name).map(|p| p.plugin_info()))
            .collect()
    }
}

impl Default for PluginHandler {
    fn default() -> Self {
        Self::new()
    }
}
