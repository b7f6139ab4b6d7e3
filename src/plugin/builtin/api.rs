//! Registration of builtin plugins
//!
//! Plugins use the `builtin!` macro to register themselves for discovery.

use crate::plugin::types::DiscoveredPlugin;

/// Entry for a builtin plugin in the dynamic registry
pub struct BuiltinPluginEntry {
    pub factory: fn() -> DiscoveredPlugin,
}

inventory::collect!(BuiltinPluginEntry);

#[macro_export]
macro_rules! builtin {
    ($factory_expr:expr) => {
        inventory::submit!($crate::plugin::builtin::api::BuiltinPluginEntry {
            factory: $factory_expr
        });
    };
}

/// Every registered builtin, sorted by name
pub fn get_all_builtin_plugins() -> Vec<DiscoveredPlugin> {
    let mut plugins = Vec::new();
    for entry in inventory::iter::<BuiltinPluginEntry> {
        plugins.push((entry.factory)());
    }
    plugins.sort_by(|a, b| a.info.name.cmp(&b.info.name));
    plugins
}
