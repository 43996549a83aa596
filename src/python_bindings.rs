//! Python bindings for defang/refang.

use pyo3::prelude::*;

use crate::error::FangError;
use crate::fang::{self, Direction, FangConfig};

/// Register rewrite functions on the extension module.
pub fn register_fang_bindings(m: &Bound<'_, PyModule>) -> PyResult<()> {
    m.add_function(wrap_pyfunction!(defang_py, m)?)?;
    m.add_function(wrap_pyfunction!(refang_py, m)?)?;
    m.add_function(wrap_pyfunction!(transform_py, m)?)?;
    m.add_function(wrap_pyfunction!(init_logging_py, m)?)?;
    Ok(())
}

/// Defang indicators in `text`.
#[pyfunction]
#[pyo3(name = "defang")]
fn defang_py(text: &str) -> String {
    fang::defang(text)
}

/// Refang indicators in `text`.
#[pyfunction]
#[pyo3(name = "refang")]
fn refang_py(text: &str) -> String {
    fang::refang(text)
}

/// Rewrite `text` in `direction` ("defang" or "refang") under the default
/// budget and return the report as a JSON string.
#[pyfunction]
#[pyo3(name = "transform", signature = (text, direction = "defang"))]
fn transform_py(text: &str, direction: &str) -> PyResult<String> {
    if text.is_empty() {
        return Err(FangError::InvalidInput("No input text provided.".to_string()).into());
    }
    let direction: Direction = direction.parse()?;
    let report = fang::transform_with(text, direction, &FangConfig::default())?;
    let json = serde_json::to_string(&report).map_err(FangError::from)?;
    Ok(json)
}

/// Initialize tracing output on stderr.
#[pyfunction]
#[pyo3(name = "init_logging", signature = (json = false))]
fn init_logging_py(json: bool) -> PyResult<()> {
    if json {
        crate::logging::init_tracing_json();
    } else {
        crate::logging::init_tracing();
    }
    Ok(())
}
