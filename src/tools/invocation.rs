use serde::Serialize;
use std::fmt;
use std::path::{Path, PathBuf};

/// External tools driven by the pipeline
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize)]
#[serde(rename_all = "snake_case")]
pub enum ToolKind {
    /// Generates `build.xml` (`android update project`)
    Scaffolder,
    /// Cross-compiles the native sources (`ndk-build`)
    NativeBuild,
    /// Assembles the package (`ant debug`)
    Packager,
    /// Installs onto a connected device (`adb install`)
    DeviceBridge,
}

impl ToolKind {
    pub const ALL: [ToolKind; 4] = [
        ToolKind::Scaffolder,
        ToolKind::NativeBuild,
        ToolKind::Packager,
        ToolKind::DeviceBridge,
    ];

    /// Default executable name of this tool on the given host
    pub fn executable(self, platform: HostPlatform) -> &'static str {
        EXECUTABLES
            .iter()
            .find(|(kind, _, _)| *kind == self)
            .map(|(_, unix, windows)| match platform {
                HostPlatform::Unix => *unix,
                HostPlatform::Windows => *windows,
            })
            .unwrap_or_default()
    }
}

impl fmt::Display for ToolKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let name = match self {
            ToolKind::Scaffolder => "scaffolding generator",
            ToolKind::NativeBuild => "native build tool",
            ToolKind::Packager => "packaging tool",
            ToolKind::DeviceBridge => "device bridge",
        };
        f.write_str(name)
    }
}

/// Host operating system family, as far as executable naming is concerned
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum HostPlatform {
    Unix,
    Windows,
}

impl HostPlatform {
    pub fn current() -> Self {
        if cfg!(windows) {
            HostPlatform::Windows
        } else {
            HostPlatform::Unix
        }
    }
}

// The SDK ships batch wrappers on Windows; they are not found by a direct spawn
// unless named with their extension.
const EXECUTABLES: &[(ToolKind, &str, &str)] = &[
    (ToolKind::Scaffolder, "android", "android.bat"),
    (ToolKind::NativeBuild, "ndk-build", "ndk-build.cmd"),
    (ToolKind::Packager, "ant", "ant.bat"),
    (ToolKind::DeviceBridge, "adb", "adb.exe"),
];

/// One external tool call: which tool, which program, ordered arguments, working directory
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ToolInvocation {
    pub tool: ToolKind,
    pub program: String,
    pub args: Vec<String>,
    pub working_dir: PathBuf,
}

impl ToolInvocation {
    pub fn new(tool: ToolKind, program: impl Into<String>, working_dir: &Path) -> Self {
        Self {
            tool,
            program: program.into(),
            args: Vec::new(),
            working_dir: working_dir.to_path_buf(),
        }
    }

    pub fn arg(mut self, arg: impl Into<String>) -> Self {
        self.args.push(arg.into());
        self
    }

    pub fn args<I, S>(mut self, args: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        self.args.extend(args.into_iter().map(Into::into));
        self
    }

    #[cfg(test)]
    pub fn has_arg(&self, arg: &str) -> bool {
        self.args.iter().any(|a| a == arg)
    }

    /// Human-readable command line, for logs only
    pub fn command_line(&self) -> String {
        std::iter::once(self.program.as_str())
            .chain(self.args.iter().map(String::as_str))
            .collect::<Vec<_>>()
            .join(" ")
    }
}
