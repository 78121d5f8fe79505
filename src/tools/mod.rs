//! Typed requests for the external Android toolchain and the runners that execute them

mod invocation;
mod mock;
mod runner;

pub use invocation::{HostPlatform, ToolInvocation, ToolKind};
pub use mock::MockToolRunner;
pub use runner::{ProcessRunner, ToolError, ToolExit, ToolRunner};
