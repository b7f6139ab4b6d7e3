//! Dump plugin: prints every dispatched unit with line numbers

use crate::builtin;
use crate::core::version::get_api_version;
use crate::plugin::context::PluginContext;
use crate::plugin::error::{PluginError, PluginResult};
use crate::plugin::traits::Plugin;
use crate::plugin::types::{same_api_major, DiscoveredPlugin, PluginInfo};
use std::io::Write;

builtin!(|| DiscoveredPlugin {
    info: DumpPlugin::static_plugin_info(),
    factory: || Box::new(DumpPlugin::new()),
});

pub struct DumpPlugin {
    initialized: bool,
    units_dumped: usize,
    out: Box<dyn Write + Send + Sync>,
}

impl DumpPlugin {
    pub fn new() -> Self {
        Self::with_writer(Box::new(std::io::stdout()))
    }

    pub fn with_writer(out: Box<dyn Write + Send + Sync>) -> Self {
        Self {
            initialized: false,
            units_dumped: 0,
            out,
        }
    }

    /// Get static plugin info without creating instance
    pub fn static_plugin_info() -> PluginInfo {
        PluginInfo {
            name: "dump".to_string(),
            version: "1.0.0".to_string(),
            description: "Print each linted unit with line numbers".to_string(),
            author: "sqllint".to_string(),
            api_version: get_api_version(),
            auto_active: false,
        }
    }

    pub fn units_dumped(&self) -> usize {
        self.units_dumped
    }

    fn io_error(operation: &str, error: std::io::Error) -> PluginError {
        PluginError::ExecutionError {
            plugin_name: "dump".to_string(),
            operation: operation.to_string(),
            cause: error.to_string(),
        }
    }
}

impl Default for DumpPlugin {
    fn default() -> Self {
        Self::new()
    }
}

impl std::fmt::Debug for DumpPlugin {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("DumpPlugin")
            .field("initialized", &self.initialized)
            .field("units_dumped", &self.units_dumped)
            .finish()
    }
}

/// Header line plus one numbered line per content line
fn format_unit(context: &PluginContext) -> String {
    let lines = context.reader().read_lines();
    let width = lines.len().to_string().len().max(3);
    let mut text = format!(
        "--- {} ({} lines, {} suppression directives) ---\n",
        context.unit_id(),
        lines.len(),
        context.suppressions().len()
    );
    for (index, line) in lines.iter().enumerate() {
        text.push_str(&format!("{:>width$}  {}\n", index + 1, line, width = width));
    }
    text
}

#[async_trait::async_trait]
impl Plugin for DumpPlugin {
    fn plugin_info(&self) -> PluginInfo {
        Self::static_plugin_info()
    }

    fn is_compatible(&self, system_api_version: u32) -> bool {
        same_api_major(get_api_version(), system_api_version)
    }

    async fn initialize(&mut self) -> PluginResult<()> {
        self.initialized = true;
        Ok(())
    }

    async fn activate(&mut self, context: PluginContext) -> PluginResult<()> {
        if !self.initialized {
            return Err(PluginError::ExecutionError {
                plugin_name: "dump".to_string(),
                operation: "activate".to_string(),
                cause: "Plugin not initialized".to_string(),
            });
        }
        self.out
            .write_all(format_unit(&context).as_bytes())
            .map_err(|e| Self::io_error("activate", e))?;
        self.units_dumped += 1;
        Ok(())
    }

    async fn cleanup(&mut self) -> PluginResult<()> {
        self.out.flush().map_err(|e| Self::io_error("cleanup", e))?;
        log::debug!("dump: {} unit(s) written", self.units_dumped);
        self.initialized = false;
        Ok(())
    }
}
