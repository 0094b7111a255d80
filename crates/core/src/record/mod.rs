//! Export and re-import of keyframe sequences.

mod csv;
mod json;

use std::path::Path;

use crate::{keyframe::Keyframe, Result};

pub use self::csv::{load_csv, parse_csv, read_csv, save_csv, to_csv_string, write_csv, CSV_COLUMNS};
pub use self::json::{
    load_json, parse_json, save_json, write_json, ChoreographyDocument, GenerationMetadata,
};

/// Loads keyframes from a previous export, choosing the format by extension.
/// Anything other than `.json` is read as CSV.
pub fn load_keyframes(path: impl AsRef<Path>) -> Result<Vec<Keyframe>> {
    let path = path.as_ref();
    let is_json = path
        .extension()
        .and_then(|ext| ext.to_str())
        .is_some_and(|ext| ext.eq_ignore_ascii_case("json"));
    if is_json {
        Ok(load_json(path)?.keyframes)
    } else {
        load_csv(path)
    }
}
