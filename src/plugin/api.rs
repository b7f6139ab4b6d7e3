//! Public API for the plugin subsystem

pub use crate::plugin::builtin::api::{get_all_builtin_plugins, BuiltinPluginEntry};
pub use crate::plugin::builtin::dump::DumpPlugin;
pub use crate::plugin::context::PluginContext;
pub use crate::plugin::error::{PluginError, PluginResult};
pub use crate::plugin::handler::PluginHandler;
pub use crate::plugin::registry::{PluginRegistry, SharedPluginRegistry};
pub use crate::plugin::traits::Plugin;
pub use crate::plugin::types::{api_major, same_api_major, DiscoveredPlugin, PluginInfo};
