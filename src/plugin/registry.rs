//! Plugin Registry
//!
//! Holds instantiated plugins by name and tracks which of them are active.

use crate::plugin::error::{PluginError, PluginResult};
use crate::plugin::traits::Plugin;
use std::collections::{BTreeSet, HashMap};
use std::sync::Arc;
use tokio::sync::RwLock;

pub struct PluginRegistry {
    plugins: HashMap<String, Box<dyn Plugin>>,

    /// Active plugin names; ordered so activation order is stable
    active_plugins: BTreeSet<String>,
}

impl std::fmt::Debug for PluginRegistry {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("PluginRegistry")
            .field("plugins", &self.get_plugin_names())
            .field("active_plugins", &self.active_plugins)
            .finish()
    }
}

impl PluginRegistry {
    pub fn new() -> Self {
        Self {
            plugins: HashMap::new(),
            active_plugins: BTreeSet::new(),
        }
    }

    /// Register a plugin in the registry
    pub fn register_plugin(&mut self, plugin: Box<dyn Plugin>) -> PluginResult<()> {
        let plugin_name = plugin.plugin_info().name;

        if self.plugins.contains_key(&plugin_name) {
            return Err(PluginError::Generic {
                message: format!("Plugin '{}' is already registered", plugin_name),
            });
        }

        self.plugins.insert(plugin_name, plugin);
        Ok(())
    }

    pub fn get_plugin(&self, name: &str) -> Option<&dyn Plugin> {
        self.plugins.get(name).map(|p| p.as_ref())
    }

    pub fn get_plugin_mut(&mut self, name: &str) -> Option<&mut Box<dyn Plugin>> {
        self.plugins.get_mut(name)
    }

    pub fn has_plugin(&self, name: &str) -> bool {
        self.plugins.contains_key(name)
    }

    /// All registered plugin names, sorted
    pub fn get_plugin_names(&self) -> Vec<String> {
        let mut names: Vec<String> = self.plugins.keys().cloned().collect();
        names.sort();
        names
    }

    /// Active plugin names, sorted
    pub fn get_active_plugins(&self) -> Vec<String> {
        self.active_plugins.iter().cloned().collect()
    }

    pub fn activate_plugin(&mut self, name: &str) -> PluginResult<()> {
        if !self.has_plugin(name) {
            return Err(PluginError::PluginNotFound {
                plugin_name: name.to_string(),
            });
        }
        self.active_plugins.insert(name.to_string());
        Ok(())
    }

    pub fn deactivate_plugin(&mut self, name: &str) -> PluginResult<()> {
        if !self.has_plugin(name) {
            return Err(PluginError::PluginNotFound {
                plugin_name: name.to_string(),
            });
        }
        self.active_plugins.remove(name);
        Ok(())
    }

    pub fn is_plugin_active(&self, name: &str) -> bool {
        self.active_plugins.contains(name)
    }

    pub fn plugin_count(&self) -> usize {
        self.plugins.len()
    }
}

impl Default for PluginRegistry {
    fn default() -> Self {
        Self::new()
    }
}

/// Thread-safe shared plugin registry
#[derive(Debug, Clone)]
pub struct SharedPluginRegistry {
    inner: Arc<RwLock<PluginRegistry>>,
}

impl SharedPluginRegistry {
    pub fn new() -> Self {
        Self {
            inner: Arc::new(RwLock::new(PluginRegistry::new())),
        }
    }

    /// Get access to the inner registry for read/write operations
    pub fn inner(&self) -> &Arc<RwLock<PluginRegistry>> {
        &self.inner
    }

    pub async fn has_plugin(&self, name: &str) -> bool {
        self.inner.read().await.has_plugin(name)
    }

    pub async fn get_plugin_names(&self) -> Vec<String> {
        self.inner.read().await.get_plugin_names()
    }

    pub async fn plugin_count(&self) -> usize {
        self.inner.read().await.plugin_count()
    }

    pub async fn get_active_plugins(&self) -> Vec<String> {
        self.inner.read().await.get_active_plugins()
    }

    pub async fn activate_plugin(&self, name: &str) -> PluginResult<()> {
        self.inner.write().await.activate_plugin(name)
    }

    pub async fn is_plugin_active(&self, name: &str) -> bool {
        self.inner.read().await.is_plugin_active(name)
    }
}

impl Default for SharedPluginRegistry {
    fn default() -> Self {
        Self::new()
    }
}
