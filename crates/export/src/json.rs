//! JSON results document.

use std::io::Write;
use std::path::Path;

use chrono::{SecondsFormat, Utc};
use serde::Serialize;
use serde_json::to_writer_pretty;
use studio_config::OperatingParameters;
use studio_session::ResultsBundle;

use crate::{ExportError, writer_for_path};

/// Provenance recorded alongside the results.
#[derive(Debug, Clone, Copy)]
pub struct Metadata<'a> {
    pub generator: &'a str,
    pub version: &'a str,
    pub params: &'a OperatingParameters,
}

#[derive(Serialize)]
struct Document<'a> {
    generator: &'a str,
    version: &'a str,
    generated_at: String,
    parameters: &'a OperatingParameters,
    results: &'a ResultsBundle,
}

/// Write `bundle` as a pretty-printed JSON document to `path` (`-` for stdout).
pub fn write_results(
    path: &Path,
    bundle: &ResultsBundle,
    meta: &Metadata<'_>,
) -> Result<(), ExportError> {
    let document = Document {
        generator: meta.generator,
        version: meta.version,
        generated_at: Utc::now().to_rfc3339_opts(SecondsFormat::Secs, true),
        parameters: meta.params,
        results: bundle,
    };
    let mut writer = writer_for_path(path)?;
    to_writer_pretty(&mut writer, &document)?;
    writeln!(writer)?;
    writer.flush()?;
    Ok(())
}
