//! apkpipe - build-and-deploy orchestrator for the vulkanglTFPBR Android package
//!
//! apkpipe does not compile or package anything itself. It drives the Android
//! toolchain (`android`, `ndk-build`, `ant`, `adb`) through a fixed sequence of
//! stages, stages files between them, and reports one overall result.
//!
//! # Pipeline
//!
//! ```text
//! PRECHECK → SCAFFOLD → BUILD → [VALIDATION_STAGE] → ASSETS → PACKAGE → [DEPLOY] → RELOCATE → DONE
//! ```
//!
//! Any stage except DEPLOY can end the run in FAILED. A failed installation is
//! reported as a warning and the package is still moved to the output directory.
//!
//! # Example Usage
//!
//! ```no_run
//! use apkpipe::{ApkpipeConfig, PipelineController, ProcessRunner, RunConfig};
//! use std::path::Path;
//! use std::sync::Arc;
//!
//! # async fn example() {
//! let controller = PipelineController::new(
//!     Path::new("/src/vulkanglTFPBR/android"),
//!     ApkpipeConfig::default(),
//!     Arc::new(ProcessRunner),
//! );
//!
//! let result = controller.run(RunConfig::new().with_validation(true)).await;
//! std::process::exit(result.exit_code());
//! # }
//! ```
//!
//! # Project Structure
//!
//! - [`pipeline`]: states, stages and the controller
//! - [`tools`]: typed external tool requests and their runners
//! - [`fs`]: file staging helpers
//! - [`progress`]: progress events and handlers
//! - [`config`]: environment configuration

pub mod cli;
pub mod config;
pub mod fs;
pub mod pipeline;
pub mod progress;
pub mod tools;
pub mod util;

pub use config::{ApkpipeConfig, ConfigError, APK_NAME};
pub use pipeline::{
    PackageArtifact, PipelineController, PipelineError, PipelineReport, PipelineState, RunConfig,
    StageResult,
};
pub use progress::{LoggingHandler, NoOpHandler, ProgressEvent, ProgressHandler};
pub use tools::{MockToolRunner, ProcessRunner, ToolInvocation, ToolKind, ToolRunner};
pub use util::{init_logging, LoggingConfig};

/// Library version
pub const VERSION: &str = env!("CARGO_PKG_VERSION");

/// Library name
pub const NAME: &str = env!("CARGO_PKG_NAME");
