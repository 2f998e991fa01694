//! Module declarations: the raw user-facing options and the compiled tree.

use crate::pattern::{self, Matcher, PatternError};
use modguard_types::RepoPath;
use schemars::JsonSchema;
use serde::{Deserialize, Serialize};
use thiserror::Error;

/// One `[[modules]]` entry as written in configuration.
#[derive(Clone, Debug, Default, PartialEq, Serialize, Deserialize, JsonSchema)]
pub struct ModuleOption {
    /// Repo-relative directory owning the module (`src/billing`).
    pub path: String,

    /// Patterns for the files other modules may import. Absent means none.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub interface: Option<InterfaceOption>,

    /// Modules this module may import from.
    #[serde(default, skip_serializing_if = "Vec::is_empty")]
    pub dependencies: Vec<DependencyOption>,

    /// Patterns for imports outside every module. Absent allows all of them.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub externals: Option<Vec<String>>,

    #[serde(default, skip_serializing_if = "Vec::is_empty")]
    pub exceptions: Vec<ExceptionOption>,

    /// Deprecated alias of `exceptions`.
    #[serde(default, skip_serializing_if = "Vec::is_empty")]
    pub techdebt: Vec<ExceptionOption>,

    /// Appended to every violation blamed on this module.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub message: Option<String>,

    #[serde(default, skip_serializing_if = "Vec::is_empty")]
    pub submodules: Vec<ModuleOption>,
}

#[derive(Clone, Debug, PartialEq, Serialize, Deserialize, JsonSchema)]
#[serde(untagged)]
pub enum InterfaceOption {
    One(String),
    Many(Vec<String>),
}

#[derive(Clone, Debug, PartialEq, Serialize, Deserialize, JsonSchema)]
#[serde(untagged)]
pub enum DependencyOption {
    /// Any file of the target module.
    Path(String),
    /// Only target files matching one of `on` (any file when `on` is empty).
    Restricted {
        path: String,
        #[serde(default)]
        on: Vec<String>,
    },
}

#[derive(Clone, Debug, PartialEq, Serialize, Deserialize, JsonSchema)]
pub struct ExceptionOption {
    pub from: String,
    pub to: String,
}

/// Compiled module node. Built once per configuration by [`compile_modules`].
#[derive(Clone, Debug)]
pub struct ModuleSpec {
    pub path: String,
    pub interfaces: Vec<Matcher>,
    pub dependencies: Vec<DependencySpec>,
    pub externals: Externals,
    pub exceptions: Vec<ExceptionSpec>,
    pub message: Option<String>,
    pub submodules: Vec<ModuleSpec>,
}

#[derive(Clone, Debug)]
pub struct DependencySpec {
    pub path: String,
    pub on: Vec<Matcher>,
}

impl DependencySpec {
    /// Whether this dependency covers `target` inside the module at `module_path`.
    pub fn covers(&self, module_path: &str, target: &str) -> bool {
        self.path == module_path && (self.on.is_empty() || pattern::any_match(&self.on, target))
    }
}

#[derive(Clone, Debug)]
pub enum Externals {
    AllowAll,
    Only(Vec<Matcher>),
}

impl Externals {
    pub fn allows(&self, target: &str) -> bool {
        match self {
            Externals::AllowAll => true,
            Externals::Only(matchers) => pattern::any_match(matchers, target),
        }
    }
}

#[derive(Clone, Debug)]
pub struct ExceptionSpec {
    pub from: Matcher,
    pub to: Matcher,
}

impl ExceptionSpec {
    pub fn covers(&self, from: &str, to: &str) -> bool {
        self.from.is_match(from) && self.to.is_match(to)
    }
}

/// A pattern in the configuration failed to compile.
#[derive(Debug, Error, Clone, PartialEq, Eq)]
#[error("{owner}: invalid {field} pattern")]
pub struct SpecError {
    /// What declared the pattern, e.g. `module 'src/a'` or `layer #2`.
    pub owner: String,
    pub field: &'static str,
    #[source]
    pub source: PatternError,
}

/// Compile raw module options, recursing into submodules.
pub fn compile_modules(raw: &[ModuleOption]) -> Result<Vec<ModuleSpec>, SpecError> {
    raw.iter().map(compile_module).collect()
}

fn compile_module(opt: &ModuleOption) -> Result<ModuleSpec, SpecError> {
    let path = RepoPath::new(&opt.path).as_str().to_string();
    let fail = |field: &'static str| {
        let owner = format!("module '{}'", opt.path);
        move |source: PatternError| SpecError {
            owner,
            field,
            source,
        }
    };

    let interfaces = match &opt.interface {
        None => Vec::new(),
        Some(InterfaceOption::One(p)) => vec![pattern::compile(p).map_err(fail("interface"))?],
        Some(InterfaceOption::Many(ps)) => pattern::compile_all(ps).map_err(fail("interface"))?,
    };

    let dependencies = opt
        .dependencies
        .iter()
        .map(|dep| match dep {
            DependencyOption::Path(p) => Ok(DependencySpec {
                path: RepoPath::new(p).as_str().to_string(),
                on: Vec::new(),
            }),
            DependencyOption::Restricted { path, on } => Ok(DependencySpec {
                path: RepoPath::new(path).as_str().to_string(),
                on: pattern::compile_all(on).map_err(fail("dependency 'on'"))?,
            }),
        })
        .collect::<Result<Vec<_>, SpecError>>()?;

    let externals = match &opt.externals {
        None => Externals::AllowAll,
        Some(ps) => Externals::Only(pattern::compile_all(ps).map_err(fail("externals"))?),
    };

    let exceptions = opt
        .exceptions
        .iter()
        .chain(&opt.techdebt)
        .map(|e| {
            Ok(ExceptionSpec {
                from: pattern::compile(&e.from).map_err(fail("exception 'from'"))?,
                to: pattern::compile(&e.to).map_err(fail("exception 'to'"))?,
            })
        })
        .collect::<Result<Vec<_>, SpecError>>()?;

    Ok(ModuleSpec {
        path,
        interfaces,
        dependencies,
        externals,
        exceptions,
        message: opt.message.clone(),
        submodules: compile_modules(&opt.submodules)?,
    })
}

/// Total number of declared modules, submodules included.
pub fn count_modules(raw: &[ModuleOption]) -> usize {
    raw.iter().map(|m| 1 + count_modules(&m.submodules)).sum()
}
