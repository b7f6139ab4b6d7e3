//! Test plugins shared by the plugin and ingest tests

use crate::core::version::get_api_version;
use crate::plugin::context::PluginContext;
use crate::plugin::error::{PluginError, PluginResult};
use crate::plugin::traits::Plugin;
use crate::plugin::types::{same_api_major, PluginInfo};
use std::sync::{Arc, Mutex};

/// What a [`RecordingPlugin`] observed
#[derive(Debug, Default)]
pub struct Recording {
    pub initialized: bool,
    pub cleaned_up: bool,
    /// `(unit_id, full content)` per activation
    pub units: Vec<(String, String)>,
}

/// Plugin that records every activation; optionally fails on one unit
#[derive(Debug, Clone)]
pub struct RecordingPlugin {
    name: String,
    api_version: u32,
    fail_on: Option<String>,
    pub recording: Arc<Mutex<Recording>>,
}

impl RecordingPlugin {
    pub fn new(name: &str) -> Self {
        Self {
            name: name.to_string(),
            api_version: get_api_version(),
            fail_on: None,
            recording: Arc::new(Mutex::new(Recording::default())),
        }
    }

    pub fn with_api_version(mut self, api_version: u32) -> Self {
        self.api_version = api_version;
        self
    }

    pub fn failing_on(mut self, unit_id: &str) -> Self {
        self.fail_on = Some(unit_id.to_string());
        self
    }

    pub fn unit_ids(&self) -> Vec<String> {
        self.recording
            .lock()
            .unwrap()
            .units
            .iter()
            .map(|(id, _)| id.clone())
            .collect()
    }
}

#[async_trait::async_trait]
impl Plugin for RecordingPlugin {
    fn plugin_info(&self) -> PluginInfo {
        PluginInfo {
            name: self.name.clone(),
            version: "0.1.0".to_string(),
            description: "Records activations".to_string(),
            author: "Test".to_string(),
            api_version: self.api_version,
            auto_active: false,
        }
    }

    fn is_compatible(&self, system_api_version: u32) -> bool {
        same_api_major(self.api_version, system_api_version)
    }

    async fn initialize(&mut self) -> PluginResult<()> {
        self.recording.lock().unwrap().initialized = true;
        Ok(())
    }

    async fn activate(&mut self, context: PluginContext) -> PluginResult<()> {
        if self.fail_on.as_deref() == Some(context.unit_id()) {
            return Err(PluginError::ExecutionError {
                plugin_name: self.name.clone(),
                operation: "activate".to_string(),
                cause: "rejected unit".to_string(),
            });
        }
        let text = context.reader().read_text();
        self.recording
            .lock()
            .unwrap()
            .units
            .push((context.unit_id().to_string(), text));
        Ok(())
    }

    async fn cleanup(&mut self) -> PluginResult<()> {
        self.recording.lock().unwrap().cleaned_up = true;
        Ok(())
    }
}
