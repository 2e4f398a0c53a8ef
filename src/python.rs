//! Python bindings (`import pt_text_clean`).

use std::path::Path;
use std::sync::OnceLock;

use pyo3::exceptions::{PyIOError, PyRuntimeError};
use pyo3::prelude::*;

use crate::adapter::{process_file as process_file_internal, ProcessOptions};
use crate::config::ResourceConfig;
use crate::error::AdapterError;
use crate::linguistics::Linguistics;
use crate::pipeline::Normalizer;

/// Global normalizer (loaded once, reused)
static NORMALIZER: OnceLock<Normalizer> = OnceLock::new();

fn normalizer() -> PyResult<&'static Normalizer> {
    NORMALIZER
        .get()
        .ok_or_else(|| PyRuntimeError::new_err("call init_resources(dict_dir) first"))
}

/// Load dictionaries and lexicon from a directory. Returns False if they
/// were already loaded.
#[pyfunction]
fn init_resources(dict_dir: String) -> PyResult<bool> {
    if NORMALIZER.get().is_some() {
        return Ok(false);
    }
    let linguistics = Linguistics::load(&ResourceConfig::with_dict_dir(dict_dir))
        .map_err(|e| PyIOError::new_err(e.to_string()))?;
    Ok(NORMALIZER.set(Normalizer::new(linguistics)).is_ok())
}

/// Normalize text; returns (label, text) pairs in stage order.
#[pyfunction]
fn normalize_text(text: String) -> PyResult<Vec<(String, String)>> {
    Ok(normalizer()?.normalize(&text).into_pairs())
}

/// Normalize a file into `output_dir`; returns the written path.
#[pyfunction]
fn process_file(input_path: String, output_dir: String) -> PyResult<String> {
    let written = process_file_internal(
        Path::new(&input_path),
        Path::new(&output_dir),
        normalizer()?,
        ProcessOptions::default(),
    )
    .map_err(|e| match e {
        AdapterError::NotFound(_) => pyo3::exceptions::PyFileNotFoundError::new_err(e.to_string()),
        other => PyIOError::new_err(other.to_string()),
    })?;
    Ok(written.output_path.display().to_string())
}

#[pymodule]
fn pt_text_clean(m: &Bound<'_, PyModule>) -> PyResult<()> {
    m.add_function(wrap_pyfunction!(init_resources, m)?)?;
    m.add_function(wrap_pyfunction!(normalize_text, m)?)?;
    m.add_function(wrap_pyfunction!(process_file, m)?)?;
    Ok(())
}
