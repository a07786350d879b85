//! Consumer loaders.
//!
//! Each loader parses the file and its relative imports, locates one
//! top-level declaration and evaluates it with an empty root context.

use std::path::Path;

use cfgx_eval::{Evaluator, Value, DEFAULT_MAX_DEPTH};
use cfgx_syntax::Project;
use serde::de::DeserializeOwned;
use serde_json::Map;

use crate::errors::{shape_error, Error};

/// Settings shared by every loader.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct ExtractOptions {
    /// Bound on nested evaluation steps.
    pub max_depth: usize,
}

impl Default for ExtractOptions {
    fn default() -> Self {
        Self {
            max_depth: DEFAULT_MAX_DEPTH,
        }
    }
}

/// Evaluate declaration `symbol` of `file`, a file of `project`.
#[tracing::instrument(level = "debug", skip(project, file, options), fields(file = %file.display()))]
pub fn evaluate_symbol<'p>(
    project: &'p Project,
    file: &Path,
    symbol: &str,
    options: &ExtractOptions,
) -> Result<Value<'p>, Error> {
    let node = project.find_declaration(file, symbol)?;
    let resolver = project.resolver();
    let evaluator = Evaluator::builder(&resolver)
        .max_depth(options.max_depth)
        .build();
    let value = evaluator.evaluate_entry(node)?;
    tracing::debug!(kind = value.type_name(), "evaluated declaration");
    Ok(value)
}

/// JSON form of declaration `symbol` of `file`.
pub fn extract_value(
    project: &Project,
    file: &Path,
    symbol: &str,
    options: &ExtractOptions,
) -> Result<serde_json::Value, Error> {
    evaluate_symbol(project, file, symbol, options).map(|value| value.to_json())
}

/// Load `path` and deserialize declaration `symbol` into `T`.
pub fn extract_as<T: DeserializeOwned>(
    path: impl AsRef<Path>,
    symbol: &str,
    options: &ExtractOptions,
) -> Result<T, Error> {
    let path = path.as_ref();
    let project = load_project(path)?;
    let json = extract_value(&project, path, symbol, options)?;
    Ok(serde_json::from_value(json)?)
}

/// Load a model list: the declaration must be a list of records.
pub fn load_models(
    path: impl AsRef<Path>,
    symbol: &str,
    options: &ExtractOptions,
) -> Result<Vec<Map<String, serde_json::Value>>, Error> {
    let path = path.as_ref();
    let project = load_project(path)?;
    let value = evaluate_symbol(&project, path, symbol, options)?;
    let Value::List(items) = &value else {
        return Err(shape_error("list of records", &value));
    };
    items
        .iter()
        .map(|item| match (item, item.to_json()) {
            (Value::Record(_), serde_json::Value::Object(model)) => Ok(model),
            _ => Err(shape_error("record", item)),
        })
        .collect()
}

/// Load database connection settings: the declaration must be one record.
pub fn load_database_config(
    path: impl AsRef<Path>,
    symbol: &str,
    options: &ExtractOptions,
) -> Result<Map<String, serde_json::Value>, Error> {
    let path = path.as_ref();
    let project = load_project(path)?;
    let value = evaluate_symbol(&project, path, symbol, options)?;
    match (&value, value.to_json()) {
        (Value::Record(_), serde_json::Value::Object(config)) => Ok(config),
        _ => Err(shape_error("record", &value)),
    }
}

fn load_project(path: &Path) -> Result<Project, Error> {
    let project = Project::load(path)?;
    tracing::debug!(
        files = project.units().len(),
        warnings = project.warnings().len(),
        "project loaded"
    );
    Ok(project)
}
