//! Read a document from disk, normalize it and write the result.

use std::fs;
use std::path::{Path, PathBuf};

use tracing::{debug, info, warn};
use whatlang::Lang;

use crate::error::AdapterError;
use crate::pipeline::Normalizer;
use crate::trace::{DocumentKind, Trace};

/// Suffix appended to the input's base name for the normalized text.
pub const OUTPUT_SUFFIX: &str = "_processado.txt";
/// Suffix for the optional per-stage JSON trace.
pub const TRACE_SUFFIX: &str = "_etapas.json";

#[derive(Debug, Clone, Copy, Default)]
pub struct ProcessOptions {
    pub kind: DocumentKind,
    /// Also write the full per-stage trace as JSON.
    pub write_trace: bool,
}

/// Paths written for one input file.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ProcessedFile {
    pub output_path: PathBuf,
    pub trace_path: Option<PathBuf>,
}

/// Everything before the first `.` of the file name.
pub fn output_base_name(input: &Path) -> String {
    let file_name = input
        .file_name()
        .map(|name| name.to_string_lossy().into_owned())
        .unwrap_or_default();
    match file_name.split_once('.') {
        Some((base, _)) => base.to_string(),
        None => file_name,
    }
}

/// Normalize `input_path` and write the final stage (plus a newline) to
/// `<output_dir>/<base>_processado.txt`, creating `output_dir` if needed.
pub fn process_file(
    input_path: &Path,
    output_dir: &Path,
    normalizer: &Normalizer,
    options: ProcessOptions,
) -> Result<ProcessedFile, AdapterError> {
    if !input_path.is_file() {
        return Err(AdapterError::NotFound(input_path.to_path_buf()));
    }
    let content = fs::read_to_string(input_path).map_err(|source| AdapterError::Read {
        path: input_path.to_path_buf(),
        source,
    })?;
    warn_if_not_portuguese(input_path, &content);

    let trace = normalizer.normalize_as(&content, options.kind);

    // Ensure output directory exists
    if !output_dir.exists() {
        fs::create_dir_all(output_dir).map_err(|source| AdapterError::CreateDir {
            path: output_dir.to_path_buf(),
            source,
        })?;
        info!(dir = %output_dir.display(), "created output directory");
    }

    let base = output_base_name(input_path);
    let output_path = output_dir.join(format!("{base}{OUTPUT_SUFFIX}"));
    write(&output_path, format!("{}\n", trace.final_text()))?;

    let trace_path = if options.write_trace {
        let path = output_dir.join(format!("{base}{TRACE_SUFFIX}"));
        write(&path, trace_json(&trace)?)?;
        Some(path)
    } else {
        None
    };

    info!(output = %output_path.display(), "normalized text saved");
    Ok(ProcessedFile {
        output_path,
        trace_path,
    })
}

/// Per-input results of [`process_files`], in input order.
#[derive(Debug, Default)]
pub struct BatchReport {
    pub results: Vec<(PathBuf, Result<ProcessedFile, AdapterError>)>,
}

impl BatchReport {
    pub fn is_success(&self) -> bool {
        self.results.iter().all(|(_, result)| result.is_ok())
    }

    pub fn failures(&self) -> impl Iterator<Item = (&Path, &AdapterError)> {
        self.results
            .iter()
            .filter_map(|(path, result)| result.as_ref().err().map(|err| (path.as_path(), err)))
    }
}

/// Process each input in turn. A failing input is recorded and the rest
/// still run.
pub fn process_files<P: AsRef<Path>>(
    inputs: &[P],
    output_dir: &Path,
    normalizer: &Normalizer,
    options: ProcessOptions,
) -> BatchReport {
    let results = inputs
        .iter()
        .map(|input| {
            let input = input.as_ref();
            let result = process_file(input, output_dir, normalizer, options);
            if let Err(err) = &result {
                debug!(input = %input.display(), "{err}");
            }
            (input.to_path_buf(), result)
        })
        .collect();
    BatchReport { results }
}

/// Pretty-printed `label -> text` object in stage order.
pub fn trace_json(trace: &Trace) -> Result<String, AdapterError> {
    Ok(serde_json::to_string_pretty(trace)?)
}

fn write(path: &Path, contents: String) -> Result<(), AdapterError> {
    fs::write(path, contents).map_err(|source| AdapterError::Write {
        path: path.to_path_buf(),
        source,
    })
}

/// Reliably detected language of `content`, unless it is Portuguese.
fn foreign_language(content: &str) -> Option<Lang> {
    whatlang::detect(content)
        .filter(|info| info.is_reliable() && info.lang() != Lang::Por)
        .map(|info| info.lang())
}

fn warn_if_not_portuguese(path: &Path, content: &str) {
    if let Some(lang) = foreign_language(content) {
        warn!(
            path = %path.display(),
            detected = lang.eng_name(),
            "input does not look like Portuguese; stage tables and models are Portuguese-only"
        );
    }
}
