//! Configuration management for apkpipe
//!
//! Settings are read from environment variables with defaults that match the
//! layout of the vulkanglTFPBR Android project.
//!
//! # Environment Variables
//!
//! - `APKPIPE_SDK_TARGET`: SDK target handed to the scaffolding generator - default: "android-23"
//! - `APKPIPE_LAYER_ABI`: architecture directory for validation layers - default: "armeabi-v7a"
//! - `APKPIPE_LOG_LEVEL`: Logging level - default: "info"
//! - `APKPIPE_LOG_JSON`: Emit JSON log lines (true|false) - default: "false"
//! - `APKPIPE_SCAFFOLD_TOOL`: executable used instead of `android`
//! - `APKPIPE_NDK_BUILD`: executable used instead of `ndk-build`
//! - `APKPIPE_PACKAGER`: executable used instead of `ant`
//! - `APKPIPE_ADB`: executable used instead of `adb`
//!
//! # Example
//!
//! ```no_run
//! use apkpipe::ApkpipeConfig;
//!
//! let config = ApkpipeConfig::default();
//! config.validate().expect("Invalid configuration");
//! println!("{}", config);
//! ```

use crate::tools::ToolKind;
use std::env;
use std::fmt;
use std::path::{Path, PathBuf};
use thiserror::Error;

/// Name of the application; the package file is always `<APK_NAME>.apk`.
pub const APK_NAME: &str = "vulkanglTFPBR";

const DEFAULT_SDK_TARGET: &str = "android-23";
const DEFAULT_LAYER_ABI: &str = "armeabi-v7a";
const DEFAULT_LOG_LEVEL: &str = "info";

/// Configuration errors
#[derive(Debug, Error)]
pub enum ConfigError {
    /// Configuration validation failed
    #[error("Configuration validation failed: {0}")]
    ValidationFailed(String),

    /// The project directory given on the command line is unusable
    #[error("Project directory {path} is not usable: {reason}")]
    InvalidProjectDir { path: String, reason: String },
}

/// Runtime configuration for apkpipe
#[derive(Debug, Clone)]
pub struct ApkpipeConfig {
    /// SDK target identifier passed to the scaffolding generator
    pub sdk_target: String,

    /// Architecture directory used for validation-layer staging
    pub layer_abi: String,

    /// Logging level (trace, debug, info, warn, error)
    pub log_level: String,

    /// Emit JSON log lines instead of plain text
    pub log_json: bool,

    pub scaffold_tool: Option<String>,
    pub ndk_build: Option<String>,
    pub packager: Option<String>,
    pub adb: Option<String>,
}

impl Default for ApkpipeConfig {
    /// Loads from `APKPIPE_*` environment variables, falling back to defaults
    fn default() -> Self {
        let sdk_target =
            env::var("APKPIPE_SDK_TARGET").unwrap_or_else(|_| DEFAULT_SDK_TARGET.to_string());

        let layer_abi =
            env::var("APKPIPE_LAYER_ABI").unwrap_or_else(|_| DEFAULT_LAYER_ABI.to_string());

        let log_level = env::var("APKPIPE_LOG_LEVEL")
            .unwrap_or_else(|_| DEFAULT_LOG_LEVEL.to_string())
            .to_lowercase();

        let log_json = env::var("APKPIPE_LOG_JSON")
            .ok()
            .and_then(|v| v.parse::<bool>().ok())
            .unwrap_or(false);

        Self {
            sdk_target,
            layer_abi,
            log_level,
            log_json,
            scaffold_tool: env::var("APKPIPE_SCAFFOLD_TOOL").ok(),
            ndk_build: env::var("APKPIPE_NDK_BUILD").ok(),
            packager: env::var("APKPIPE_PACKAGER").ok(),
            adb: env::var("APKPIPE_ADB").ok(),
        }
    }
}

impl ApkpipeConfig {
    /// Configuration with built-in defaults only, ignoring the environment.
    pub fn builtin() -> Self {
        Self {
            sdk_target: DEFAULT_SDK_TARGET.to_string(),
            layer_abi: DEFAULT_LAYER_ABI.to_string(),
            log_level: DEFAULT_LOG_LEVEL.to_string(),
            log_json: false,
            scaffold_tool: None,
            ndk_build: None,
            packager: None,
            adb: None,
        }
    }

    /// Validates the configuration
    ///
    /// # Errors
    ///
    /// Returns `ConfigError::ValidationFailed` when the SDK target or ABI is
    /// empty, the ABI is not a single path component, the log level is unknown,
    /// or a tool override is blank.
    pub fn validate(&self) -> Result<(), ConfigError> {
        if self.sdk_target.trim().is_empty() {
            return Err(ConfigError::ValidationFailed(
                "SDK target must not be empty".to_string(),
            ));
        }

        if self.layer_abi.trim().is_empty() {
            return Err(ConfigError::ValidationFailed(
                "Layer ABI must not be empty".to_string(),
            ));
        }
        if self.layer_abi.contains(['/', '\\']) || self.layer_abi == ".." {
            return Err(ConfigError::ValidationFailed(format!(
                "Layer ABI must be a single directory name, got '{}'",
                self.layer_abi
            )));
        }

        match self.log_level.as_str() {
            "trace" | "debug" | "info" | "warn" | "error" => {}
            _ => {
                return Err(ConfigError::ValidationFailed(format!(
                    "Invalid log level: {}. Valid options: trace, debug, info, warn, error",
                    self.log_level
                )))
            }
        }

        for kind in ToolKind::ALL {
            if let Some(value) = self.tool_override(kind) {
                if value.trim().is_empty() {
                    return Err(ConfigError::ValidationFailed(format!(
                        "Executable override for {} must not be empty",
                        kind
                    )));
                }
            }
        }

        Ok(())
    }

    /// Executable override configured for a tool, if any
    pub fn tool_override(&self, kind: ToolKind) -> Option<&str> {
        match kind {
            ToolKind::Scaffolder => self.scaffold_tool.as_deref(),
            ToolKind::NativeBuild => self.ndk_build.as_deref(),
            ToolKind::Packager => self.packager.as_deref(),
            ToolKind::DeviceBridge => self.adb.as_deref(),
        }
    }

    /// File name of the produced package
    pub fn package_file_name(&self) -> String {
        format!("{}.apk", APK_NAME)
    }
}

/// Resolves the Android project directory: the given path, or the current
/// directory, canonicalized. It must be an existing directory.
pub fn resolve_project_dir(path: Option<&Path>) -> Result<PathBuf, ConfigError> {
    let invalid = |path: &Path, reason: String| ConfigError::InvalidProjectDir {
        path: path.display().to_string(),
        reason,
    };

    let path = match path {
        Some(p) => p.to_path_buf(),
        None => env::current_dir().map_err(|e| invalid(Path::new("."), e.to_string()))?,
    };

    if !path.is_dir() {
        return Err(invalid(&path, "not a directory".to_string()));
    }

    path.canonicalize().map_err(|e| invalid(&path, e.to_string()))
}

impl fmt::Display for ApkpipeConfig {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        writeln!(f, "Apkpipe Configuration:")?;
        writeln!(f, "  Application: {}", APK_NAME)?;
        writeln!(f, "  SDK Target: {}", self.sdk_target)?;
        writeln!(f, "  Layer ABI: {}", self.layer_abi)?;
        writeln!(f, "  Log Level: {}", self.log_level)?;
        for kind in ToolKind::ALL {
            if let Some(value) = self.tool_override(kind) {
                writeln!(f, "  {} override: {}", kind, value)?;
            }
        }
        Ok(())
    }
}
