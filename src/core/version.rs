//! Build metadata generated by `build.rs`

include!(concat!(env!("OUT_DIR"), "/version.rs"));

/// Plugin API version from `[package.metadata] plugin_api_version`
pub fn get_api_version() -> u32 {
    PLUGIN_API_VERSION.parse().unwrap_or(20250727)
}

/// Build time string from the build script (UTC)
pub fn build_time() -> &'static str {
    BUILD_TIME
}

/// Short git hash captured by the build script
pub fn git_hash() -> &'static str {
    GIT_HASH
}

/// One-line version banner used by `--version`
pub fn version_banner() -> String {
    format!(
        "sqllint {} (plugin API {}, built {}, {})",
        env!("CARGO_PKG_VERSION"),
        get_api_version(),
        build_time(),
        git_hash()
    )
}
