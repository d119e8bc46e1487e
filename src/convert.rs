use std::{
    fs,
    path::{Path, PathBuf},
};

use log::{debug, info};

use crate::error::ConvertError;
use crate::readers::{read_appendix, read_completions, read_system};
use crate::shaper::{group_turns, shape, to_jsonl};
use crate::utils::trim_leading_newlines;

pub const OUTPUT_FILE_NAME: &str = "fine-tuning.jsonl";

/// Input files of one conversion.
#[derive(Debug, Clone)]
pub struct Sources {
    pub system: PathBuf,
    pub completions: PathBuf,
    pub appendix: Option<PathBuf>,
}

/// Read all sources and build the JSON-Lines payload.
///
/// Nothing is written here, so any error leaves the output untouched.
pub fn convert(sources: &Sources) -> Result<String, ConvertError> {
    let system_prompt = read_system(&sources.system)?
        .map(|block| trim_leading_newlines(&block.content).to_string())
        .unwrap_or_default();

    let appendix = match &sources.appendix {
        Some(path) => match read_appendix(path) {
            Ok(Some(block)) => trim_leading_newlines(&block.content).to_string(),
            Ok(None) => {
                debug!(target: "convert", "{}: appendix has no blocks", path.display());
                return Err(ConvertError::AppendixReadFailure);
            }
            Err(err) => {
                debug!(target: "convert", "appendix: {err}");
                return Err(ConvertError::AppendixReadFailure);
            }
        },
        None => String::new(),
    };
    debug!(target: "convert", "appendix: {} byte(s)", appendix.len());

    let completions = read_completions(&sources.completions, &appendix)?;

    if system_prompt.is_empty() {
        return Err(ConvertError::MissingData);
    }

    let turns = group_turns(&completions);
    let records = shape(&system_prompt, &turns);
    info!(target: "convert", "{} record(s) from {} block(s)", records.len(), completions.len());
    to_jsonl(&records).map_err(ConvertError::Encode)
}

/// Write `payload` to `<out_dir>/fine-tuning.jsonl`, replacing any existing file.
pub fn write_dataset(out_dir: &Path, payload: &str) -> Result<PathBuf, ConvertError> {
    let path = out_dir.join(OUTPUT_FILE_NAME);
    fs::write(&path, payload).map_err(|err| ConvertError::file_access(&path, &err))?;
    Ok(path)
}
