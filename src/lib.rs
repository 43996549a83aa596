//! Defang and refang network indicators (URLs, domains, email addresses,
//! IPv4 addresses) embedded in free text.

pub mod error;
pub mod fang;
pub mod logging;

#[cfg(feature = "python-ext")]
mod python_bindings;

pub use error::{FangError, Result};
pub use fang::{
    defang, refang, transform, transform_with, Category, Direction, Edit, FangConfig,
    FangReport, Span,
};

#[cfg(feature = "python-ext")]
use pyo3::prelude::*;

/// A Python module implemented in Rust.
#[cfg(feature = "python-ext")]
#[pymodule]
fn iocfang(m: &Bound<'_, PyModule>) -> PyResult<()> {
    python_bindings::register_fang_bindings(m)?;
    Ok(())
}
