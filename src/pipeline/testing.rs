//! Temporary project trees for stage and controller tests

use super::config::RunConfig;
use super::context::PipelineContext;
use crate::config::ApkpipeConfig;
use crate::tools::{HostPlatform, MockToolRunner, ToolKind};
use std::fs;
use std::path::{Path, PathBuf};
use std::sync::Arc;
use tempfile::TempDir;

/// `<tmp>/android` project with its sibling directories
pub struct ProjectFixture {
    _dir: TempDir,
    pub root: PathBuf,
    pub project: PathBuf,
}

impl ProjectFixture {
    pub fn new() -> Self {
        let dir = TempDir::new().unwrap();
        let root = dir.path().to_path_buf();
        let project = root.join("android");
        fs::create_dir_all(&project).unwrap();
        Self {
            _dir: dir,
            root,
            project,
        }
    }

    /// Everything a plain run needs: dependencies, descriptor, assets
    pub fn ready() -> Self {
        Self::new()
            .with_dependencies()
            .with_descriptor()
            .with_asset("shaders/pbr.vert.spv", "vert")
            .with_asset("models/DamagedHelmet.gltf", "{}")
    }

    pub fn with_dependencies(self) -> Self {
        for dep in ["external/glm/glm", "external/gli/gli"] {
            let dir = self.root.join(dep);
            fs::create_dir_all(&dir).unwrap();
            fs::write(dir.join("core.hpp"), "#pragma once\n").unwrap();
        }
        self
    }

    pub fn with_empty_dependencies(self) -> Self {
        fs::create_dir_all(self.root.join("external/glm")).unwrap();
        fs::create_dir_all(self.root.join("external/gli")).unwrap();
        self
    }

    pub fn with_descriptor(self) -> Self {
        fs::write(self.project.join("build.xml"), "<project/>").unwrap();
        self
    }

    pub fn with_asset(self, relative: &str, content: &str) -> Self {
        let path = self.root.join("data").join(relative);
        fs::create_dir_all(path.parent().unwrap()).unwrap();
        fs::write(path, content).unwrap();
        self
    }

    pub fn with_layers(self, count: usize) -> Self {
        let dir = self.root.join("layers/armeabi-v7a");
        fs::create_dir_all(&dir).unwrap();
        for i in 0..count {
            fs::write(dir.join(format!("libVkLayer_{}.so", i)), "elf").unwrap();
        }
        self
    }

    pub fn output_dir(&self) -> PathBuf {
        self.root.join("bin")
    }

    pub fn context(&self, run: RunConfig, runner: Arc<MockToolRunner>) -> PipelineContext {
        PipelineContext::new(
            &self.project,
            ApkpipeConfig::builtin(),
            run,
            HostPlatform::Unix,
            runner,
        )
    }
}

/// Files below `dir`, relative and sorted
pub fn list_files(dir: &Path) -> Vec<String> {
    let mut files: Vec<String> = walkdir::WalkDir::new(dir)
        .into_iter()
        .filter_map(Result::ok)
        .filter(|e| e.file_type().is_file())
        .map(|e| {
            e.path()
                .strip_prefix(dir)
                .unwrap()
                .to_string_lossy()
                .replace('\\', "/")
        })
        .collect();
    files.sort();
    files
}

/// Mock runner whose packager writes the package into its working directory
pub fn packaging_runner() -> MockToolRunner {
    MockToolRunner::new().with_side_effect(ToolKind::Packager, |invocation| {
        let name = invocation
            .args
            .iter()
            .find_map(|a| a.strip_prefix("-Dout.final.file="))
            .unwrap();
        fs::write(invocation.working_dir.join(name), "PK\u{3}\u{4}").unwrap();
    })
}
