use serde::Serialize;

/// Per-invocation switches, fixed for the whole run
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize)]
pub struct RunConfig {
    /// Install the package on a connected device after packaging
    pub deploy: bool,
    /// Compile with validation enabled and stage the validation layers
    pub validation: bool,
}

impl RunConfig {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn with_deploy(mut self, deploy: bool) -> Self {
        self.deploy = deploy;
        self
    }

    pub fn with_validation(mut self, validation: bool) -> Self {
        self.validation = validation;
        self
    }
}
