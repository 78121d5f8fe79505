//! Project trees and a fake Android toolchain for black-box tests

#![allow(dead_code)]

use std::fs;
use std::path::{Path, PathBuf};
use std::process::{Command, Output};
use tempfile::TempDir;

const FAKE_ANDROID: &str = r#"#!/bin/sh
echo "$@" > android.args
exit "${FAKE_ANDROID_EXIT:-0}"
"#;

const FAKE_NDK_BUILD: &str = r#"#!/bin/sh
echo "$@" > ndk-build.args
exit "${FAKE_NDK_EXIT:-0}"
"#;

const FAKE_ANT: &str = r#"#!/bin/sh
echo "$@" > ant.args
if [ "${FAKE_ANT_EXIT:-0}" != "0" ]; then
    exit "$FAKE_ANT_EXIT"
fi
for arg in "$@"; do
    case "$arg" in
        -Dout.final.file=*) printf 'PK' > "${arg#-Dout.final.file=}" ;;
    esac
done
exit 0
"#;

const FAKE_ADB: &str = r#"#!/bin/sh
echo "$@" > adb.args
exit "${FAKE_ADB_EXIT:-0}"
"#;

/// `<tmp>/android` project, its sibling inputs, and a `<tmp>/toolchain` of shell scripts
pub struct Workspace {
    _dir: TempDir,
    pub root: PathBuf,
    pub project: PathBuf,
    pub toolchain: PathBuf,
}

impl Workspace {
    pub fn new() -> Self {
        let dir = TempDir::new().expect("Failed to create temp dir");
        let root = dir.path().to_path_buf();
        let project = root.join("android");
        let toolchain = root.join("toolchain");
        fs::create_dir_all(&project).unwrap();
        fs::create_dir_all(&toolchain).unwrap();

        let workspace = Self {
            _dir: dir,
            root,
            project,
            toolchain,
        };
        workspace.install_tool("android", FAKE_ANDROID);
        workspace.install_tool("ndk-build", FAKE_NDK_BUILD);
        workspace.install_tool("ant", FAKE_ANT);
        workspace.install_tool("adb", FAKE_ADB);
        workspace
    }

    /// Dependencies, descriptor and a small asset tree
    pub fn ready() -> Self {
        let workspace = Self::new();
        workspace.write(&workspace.root.join("external/glm/glm/glm.hpp"), "");
        workspace.write(&workspace.root.join("external/gli/gli/gli.hpp"), "");
        workspace.write(&workspace.project.join("build.xml"), "<project/>");
        workspace.write(&workspace.root.join("data/shaders/pbr.vert.spv"), "vert");
        workspace.write(&workspace.root.join("data/models/box.gltf"), "{}");
        workspace
    }

    pub fn write(&self, path: &Path, content: &str) {
        fs::create_dir_all(path.parent().unwrap()).unwrap();
        fs::write(path, content).unwrap();
    }

    pub fn install_tool(&self, name: &str, script: &str) -> PathBuf {
        use std::os::unix::fs::PermissionsExt;

        let path = self.toolchain.join(name);
        fs::write(&path, script).unwrap();
        let mut perms = fs::metadata(&path).unwrap().permissions();
        perms.set_mode(0o755);
        fs::set_permissions(&path, perms).unwrap();
        path
    }

    pub fn output_dir(&self) -> PathBuf {
        self.root.join("bin")
    }

    /// Arguments a fake tool was last called with, if it ran
    pub fn tool_args(&self, tool: &str) -> Option<String> {
        fs::read_to_string(self.project.join(format!("{}.args", tool)))
            .ok()
            .map(|s| s.trim_end().to_string())
    }

    /// `apkpipe` with the fake toolchain first on PATH, run against the project
    pub fn command(&self) -> Command {
        let path = std::env::var("PATH").unwrap_or_default();
        let mut command = Command::new(env!("CARGO_BIN_EXE_apkpipe"));
        command
            .env("PATH", format!("{}:{}", self.toolchain.display(), path))
            .env_remove("RUST_LOG")
            .env_remove("APKPIPE_LOG_LEVEL")
            .env_remove("APKPIPE_LOG_JSON")
            .env_remove("APKPIPE_SDK_TARGET")
            .env_remove("APKPIPE_LAYER_ABI")
            .env_remove("APKPIPE_SCAFFOLD_TOOL")
            .env_remove("APKPIPE_NDK_BUILD")
            .env_remove("APKPIPE_PACKAGER")
            .env_remove("APKPIPE_ADB")
            .arg("--project-dir")
            .arg(&self.project);
        command
    }

    pub fn run(&self, args: &[&str]) -> Output {
        self.command()
            .args(args)
            .output()
            .expect("Failed to execute apkpipe")
    }
}

pub fn files_in(dir: &Path) -> Vec<String> {
    let mut files: Vec<String> = fs::read_dir(dir)
        .map(|entries| {
            entries
                .filter_map(Result::ok)
                .map(|e| e.file_name().to_string_lossy().into_owned())
                .collect()
        })
        .unwrap_or_default();
    files.sort();
    files
}
