//! Where every input and output of a run lives, relative to the Android project directory

use crate::config::ApkpipeConfig;
use std::path::{Path, PathBuf};

const DEPENDENCY_DIRS: [&str; 2] = ["external/glm", "external/gli"];
const DESCRIPTOR_FILE: &str = "build.xml";
const LAYER_SOURCE_DIR: &str = "layers";
const LAYER_DEST_DIR: &str = "libs";
const ASSET_SOURCE_DIR: &str = "data";
const ASSET_DEST_DIR: &str = "assets";
const OUTPUT_DIR: &str = "bin";

/// Extension of the validation-layer libraries picked up from the layer source
pub const LAYER_EXTENSION: &str = "so";

/// Resolved paths for one project.
///
/// The project directory sits inside the repository root; dependencies,
/// assets, layers and the output directory are its siblings.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ProjectLayout {
    pub project_dir: PathBuf,
    pub dependency_dirs: Vec<PathBuf>,
    pub descriptor: PathBuf,
    pub layer_source: PathBuf,
    pub layer_dest: PathBuf,
    pub asset_source: PathBuf,
    pub asset_dest: PathBuf,
    pub package_file: PathBuf,
    pub output_dir: PathBuf,
}

impl ProjectLayout {
    pub fn new(project_dir: &Path, config: &ApkpipeConfig) -> Self {
        let root = project_dir
            .parent()
            .filter(|p| !p.as_os_str().is_empty())
            .map(Path::to_path_buf)
            .unwrap_or_else(|| project_dir.join(".."));

        Self {
            project_dir: project_dir.to_path_buf(),
            dependency_dirs: DEPENDENCY_DIRS.iter().map(|d| root.join(d)).collect(),
            descriptor: project_dir.join(DESCRIPTOR_FILE),
            layer_source: root.join(LAYER_SOURCE_DIR).join(&config.layer_abi),
            layer_dest: project_dir.join(LAYER_DEST_DIR).join(&config.layer_abi),
            asset_source: root.join(ASSET_SOURCE_DIR),
            asset_dest: project_dir.join(ASSET_DEST_DIR),
            package_file: project_dir.join(config.package_file_name()),
            output_dir: root.join(OUTPUT_DIR),
        }
    }

    /// Final location of the package after relocation
    pub fn artifact_destination(&self) -> PathBuf {
        match self.package_file.file_name() {
            Some(name) => self.output_dir.join(name),
            None => self.output_dir.clone(),
        }
    }
}
