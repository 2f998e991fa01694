use crate::edge::ImportEdge;
use crate::layers::LayerSpec;
use crate::policy::EffectiveConfig;
use crate::spec::ModuleSpec;
use modguard_types::{Finding, ImportRecord};

mod bounded;
mod layers;
mod modules;
mod utils;


/// Everything the checks need besides the edge, prepared once per run.
pub struct CheckContext<'a> {
    pub cfg: &'a EffectiveConfig,
    /// Top-level module scope.
    pub modules: Vec<&'a ModuleSpec>,
    pub layers: &'a [LayerSpec],
}

pub fn run_all(ctx: &CheckContext<'_>, edge: &ImportEdge, record: &ImportRecord, out: &mut Vec<Finding>) {
    modules::run(ctx, edge, record, out);
    layers::run(ctx, edge, record, out);
    bounded::run(ctx, edge, record, out);
}
