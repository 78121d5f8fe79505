// One module per pipeline state. Conditional states (VALIDATION_STAGE, DEPLOY)
// are only entered when the run asks for them; see `PipelineState::next`.

#[path = "01_precheck.rs"]
pub mod precheck;
#[path = "02_scaffold.rs"]
pub mod scaffold;
#[path = "03_native_build.rs"]
pub mod native_build;
#[path = "04_validation_layers.rs"]
pub mod validation_layers;
#[path = "05_assets.rs"]
pub mod assets;
#[path = "06_package.rs"]
pub mod package;
#[path = "07_deploy.rs"]
pub mod deploy;
#[path = "08_relocate.rs"]
pub mod relocate;

use super::stage_trait::PipelineStage;
use super::state::PipelineState;

pub use assets::AssetStage;
pub use deploy::DeployStage;
pub use native_build::NativeBuildStage;
pub use package::PackageStage;
pub use precheck::PrecheckStage;
pub use relocate::RelocateStage;
pub use scaffold::ScaffoldStage;
pub use validation_layers::ValidationLayerStage;

/// Stage that runs in `state`; `None` for the terminal states
pub fn stage_for(state: PipelineState) -> Option<Box<dyn PipelineStage>> {
    let stage: Box<dyn PipelineStage> = match state {
        PipelineState::Precheck => Box::new(PrecheckStage),
        PipelineState::Scaffold => Box::new(ScaffoldStage),
        PipelineState::Build => Box::new(NativeBuildStage),
        PipelineState::ValidationStage => Box::new(ValidationLayerStage),
        PipelineState::Assets => Box::new(AssetStage),
        PipelineState::Package => Box::new(PackageStage),
        PipelineState::Deploy => Box::new(DeployStage),
        PipelineState::Relocate => Box::new(RelocateStage),
        PipelineState::Done | PipelineState::Failed => return None,
    };
    Some(stage)
}
