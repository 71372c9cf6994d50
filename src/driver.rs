//! Build orchestration around the export pass: prepare the output directory,
//! flatten the project, hand the model to the native compiler.
//!
//! The compiler itself is out of scope here; it lives behind
//! [`NativeCompiler`] and may block for as long as it likes. Its boolean
//! result is the one failure the end user sees. A `false` return is terminal
//! for that invocation and the caller must not try to run the target.

use std::fmt;
use std::fs;
use std::io;
use std::path::Path;

use crate::catalog::ActionCatalog;
use crate::export::export;
use crate::log::LogSink;
use crate::model::FlatGameModel;
use crate::resources::Project;

/// Boundary to the external native compiler.
pub trait NativeCompiler {
    fn compile(
        &self,
        output_dir: &Path,
        target: &Path,
        model: &FlatGameModel,
        log: &dyn LogSink,
        debug: bool,
    ) -> bool;
}

/// Failures that abort a build before the export pass even starts. Nothing
/// inside the export itself can end up here.
#[derive(Debug)]
pub enum BuildError {
    OutputDir(io::Error),
}

impl fmt::Display for BuildError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::OutputDir(err) => write!(f, "cannot create output directory: {}", err),
        }
    }
}

/// Run one build: export `project` and compile the result to `target`.
///
/// `Ok(false)` means the native compiler reported failure; the caller must
/// surface that and take no further action with the target.
pub fn build(
    project: &Project,
    catalog: &ActionCatalog,
    compiler: &dyn NativeCompiler,
    output_dir: &Path,
    target: &Path,
    debug: bool,
    log: &dyn LogSink,
) -> Result<bool, BuildError> {
    fs::create_dir_all(output_dir).map_err(BuildError::OutputDir)?;

    log.message(Some("writing game data"));
    log.percent(0);
    let model = export(project, catalog, log);

    Ok(compiler.compile(output_dir, target, &model, log, debug))
}
