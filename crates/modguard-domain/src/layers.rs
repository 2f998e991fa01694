//! Layer rules: which paths the files of a layer may import.

use crate::edge::ImportEdge;
use crate::format::{MessageParams, fill_template};
use crate::pattern::{self, Matcher, PatternError};
use crate::spec::SpecError;
use schemars::JsonSchema;
use serde::{Deserialize, Serialize};

pub const DEFAULT_LAYER_MESSAGE: &str =
    "A file from layer `{from}` cannot import a file from layer `{to}`";

/// One `[[layers]]` entry as written in configuration.
#[derive(Clone, Debug, Default, PartialEq, Serialize, Deserialize, JsonSchema)]
pub struct LayerOption {
    /// Files the rule applies to. Absent (or `.*`) means every file.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub from: Option<String>,

    /// Paths the layer may import.
    pub to: Vec<String>,

    /// Paths rejected even when they match `to`.
    #[serde(default, skip_serializing_if = "Vec::is_empty")]
    pub except: Vec<String>,

    /// Allow imports below the file's own directory and within the layer. Defaults to true.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub allow_children: Option<bool>,

    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub message: Option<String>,
}

#[derive(Clone, Debug)]
pub struct LayerSpec {
    pub from: Option<Matcher>,
    pub to: Vec<Matcher>,
    pub except: Vec<Matcher>,
    pub allow_children: bool,
    pub message: String,
}

pub fn compile_layers(raw: &[LayerOption]) -> Result<Vec<LayerSpec>, SpecError> {
    raw.iter()
        .enumerate()
        .map(|(i, opt)| compile_layer(i + 1, opt))
        .collect()
}

fn compile_layer(index: usize, opt: &LayerOption) -> Result<LayerSpec, SpecError> {
    let fail = |field: &'static str| {
        move |source: PatternError| SpecError {
            owner: format!("layer #{index}"),
            field,
            source,
        }
    };

    let from = match opt.from.as_deref() {
        None | Some(".*") => None,
        Some(p) => Some(pattern::compile(p).map_err(fail("from"))?),
    };

    Ok(LayerSpec {
        from,
        to: pattern::compile_all(&opt.to).map_err(fail("to"))?,
        except: pattern::compile_all(&opt.except).map_err(fail("except"))?,
        allow_children: opt.allow_children.unwrap_or(true),
        message: opt
            .message
            .clone()
            .unwrap_or_else(|| DEFAULT_LAYER_MESSAGE.to_string()),
    })
}

impl LayerSpec {
    pub fn applies_to(&self, edge: &ImportEdge) -> bool {
        self.from
            .as_ref()
            .is_none_or(|m| m.is_match(edge.from().absolute_file_path.as_str()))
    }

    pub fn allows(&self, edge: &ImportEdge) -> bool {
        let target = edge.to().absolute_imported_path.as_str();

        let own_layer = self.from.as_ref().is_some_and(|m| m.is_match(target));
        if self.allow_children && (is_child(edge) || own_layer) {
            return true;
        }

        pattern::any_match(&self.to, target) && !pattern::any_match(&self.except, target)
    }

    /// The rendered message when the rule applies and rejects the edge.
    pub fn check(&self, edge: &ImportEdge) -> Option<String> {
        if !self.applies_to(edge) || self.allows(edge) {
            return None;
        }
        Some(fill_template(
            &self.message,
            &MessageParams {
                from: Some(edge.from().file_path.as_str()),
                to: Some(edge.import_path()),
                ..MessageParams::default()
            },
        ))
    }
}

/// The destination lies below the importing file's directory, or the importing
/// file lies below the destination's directory. Bare single-segment imports
/// have no directory and are never children.
fn is_child(edge: &ImportEdge) -> bool {
    let from = edge.from();
    let to = edge.to();
    if to.absolute_imported_dir.is_none() && !edge.import_path().starts_with('.') {
        return false;
    }
    to.absolute_imported_path.is_within(&from.absolute_file_dir)
        || to
            .absolute_imported_dir
            .as_ref()
            .is_some_and(|dir| from.absolute_file_path.is_within(dir))
}

/// Messages of every rule rejecting `edge`, without repeats.
pub fn layer_messages(specs: &[LayerSpec], edge: &ImportEdge) -> Vec<String> {
    let mut out: Vec<String> = Vec::new();
    for message in specs.iter().filter_map(|s| s.check(edge)) {
        if !out.contains(&message) {
            out.push(message);
        }
    }
    out
}
