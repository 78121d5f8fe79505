use super::invocation::{ToolInvocation, ToolKind};
use super::runner::{ToolError, ToolExit, ToolRunner};
use async_trait::async_trait;
use std::collections::{HashMap, HashSet};
use std::io;
use std::sync::Mutex;

type SideEffect = Box<dyn Fn(&ToolInvocation) + Send + Sync>;

/// Records invocations and answers with scripted exit codes (0 unless told otherwise).
///
/// A side effect registered for a tool runs only when that tool "succeeds",
/// which is how tests simulate the packager writing the `.apk`.
pub struct MockToolRunner {
    exit_codes: HashMap<ToolKind, i32>,
    unspawnable: HashSet<ToolKind>,
    side_effects: HashMap<ToolKind, SideEffect>,
    invocations: Mutex<Vec<ToolInvocation>>,
}

impl MockToolRunner {
    pub fn new() -> Self {
        Self {
            exit_codes: HashMap::new(),
            unspawnable: HashSet::new(),
            side_effects: HashMap::new(),
            invocations: Mutex::new(Vec::new()),
        }
    }

    pub fn with_exit_code(mut self, tool: ToolKind, code: i32) -> Self {
        self.exit_codes.insert(tool, code);
        self
    }

    pub fn with_spawn_failure(mut self, tool: ToolKind) -> Self {
        self.unspawnable.insert(tool);
        self
    }

    pub fn with_side_effect<F>(mut self, tool: ToolKind, effect: F) -> Self
    where
        F: Fn(&ToolInvocation) + Send + Sync + 'static,
    {
        self.side_effects.insert(tool, Box::new(effect));
        self
    }

    pub fn invocations(&self) -> Vec<ToolInvocation> {
        self.invocations.lock().unwrap().clone()
    }

    pub fn invocations_of(&self, tool: ToolKind) -> Vec<ToolInvocation> {
        self.invocations()
            .into_iter()
            .filter(|i| i.tool == tool)
            .collect()
    }

    pub fn call_count(&self) -> usize {
        self.invocations.lock().unwrap().len()
    }
}

impl Default for MockToolRunner {
    fn default() -> Self {
        Self::new()
    }
}

#[async_trait]
impl ToolRunner for MockToolRunner {
    async fn run(&self, invocation: &ToolInvocation) -> Result<ToolExit, ToolError> {
        self.invocations.lock().unwrap().push(invocation.clone());

        if self.unspawnable.contains(&invocation.tool) {
            return Err(ToolError::Spawn {
                program: invocation.program.clone(),
                source: io::Error::new(io::ErrorKind::NotFound, "mock: program not found"),
            });
        }

        let code = self.exit_codes.get(&invocation.tool).copied().unwrap_or(0);
        if code == 0 {
            if let Some(effect) = self.side_effects.get(&invocation.tool) {
                effect(invocation);
            }
        }

        Ok(ToolExit::from_code(code))
    }
}
