//! Single-entry cache for compiled configuration.
//!
//! The key is the *identity* of the raw configuration (`Arc` pointer), not its
//! content: the host checks many edges against one configuration object, and
//! only a new object triggers a recompile. The cache is owned by the caller and
//! lives for one lint run.

use crate::layers::{LayerOption, LayerSpec, compile_layers};
use crate::spec::{ModuleOption, ModuleSpec, SpecError, compile_modules};
use std::sync::Arc;

#[derive(Debug)]
pub struct SpecMemo<R, S> {
    cached: Option<(Arc<[R]>, Arc<[S]>)>,
}

impl<R, S> Clone for SpecMemo<R, S> {
    fn clone(&self) -> Self {
        Self {
            cached: self.cached.clone(),
        }
    }
}

impl<R, S> Default for SpecMemo<R, S> {
    fn default() -> Self {
        Self { cached: None }
    }
}

impl<R, S> SpecMemo<R, S> {
    pub fn new() -> Self {
        Self::default()
    }

    /// Return the compiled form of `raw`, compiling only when `raw` is not the
    /// object seen last. Failures are returned and not cached.
    pub fn resolve_with<E>(
        &mut self,
        raw: &Arc<[R]>,
        compile: impl FnOnce(&[R]) -> Result<Vec<S>, E>,
    ) -> Result<Arc<[S]>, E> {
        if let Some((key, compiled)) = &self.cached
            && Arc::ptr_eq(key, raw)
        {
            return Ok(Arc::clone(compiled));
        }

        let compiled: Arc<[S]> = compile(raw)?.into();
        // Holding `raw` keeps its address from being reused while cached.
        self.cached = Some((Arc::clone(raw), Arc::clone(&compiled)));
        Ok(compiled)
    }

    pub fn clear(&mut self) {
        self.cached = None;
    }
}

impl SpecMemo<ModuleOption, ModuleSpec> {
    pub fn resolve(&mut self, raw: &Arc<[ModuleOption]>) -> Result<Arc<[ModuleSpec]>, SpecError> {
        self.resolve_with(raw, compile_modules)
    }
}

impl SpecMemo<LayerOption, LayerSpec> {
    pub fn resolve(&mut self, raw: &Arc<[LayerOption]>) -> Result<Arc<[LayerSpec]>, SpecError> {
        self.resolve_with(raw, compile_layers)
    }
}
