//! Loader for RON content overrides.
//!
//! The registry defaults are compiled in; a host that wants to rebalance the
//! catalog ships `assets/data/boss_moves.ron` and `assets/data/boss_lore.ron`
//! and calls [`load_boss_content`] at startup.

use ron::Options;
use std::fs;
use std::path::Path;

use super::data::{DataFile, LoreTextDef, PhaseMoveSetDef};
use super::registry::BossContent;
use super::validation::validate_content;

pub const MOVES_FILE: &str = "boss_moves.ron";
pub const LORE_FILE: &str = "boss_lore.ron";

/// Error type for content loading failures.
#[derive(Debug)]
pub struct ContentLoadError {
    pub file: String,
    pub message: String,
}

impl std::fmt::Display for ContentLoadError {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "Failed to load {}: {}", self.file, self.message)
    }
}

impl std::error::Error for ContentLoadError {}

/// Create RON options with extensions enabled for more flexible parsing.
fn ron_options() -> Options {
    Options::default().with_default_extension(ron::extensions::Extensions::IMPLICIT_SOME)
}

/// Parse a RON string containing a DataFile<T> wrapper.
pub(crate) fn parse_data_file<T>(contents: &str, file: &str) -> Result<Vec<T>, ContentLoadError>
where
    T: for<'de> serde::Deserialize<'de>,
{
    let data: DataFile<T> = ron_options()
        .from_str(contents)
        .map_err(|e| ContentLoadError {
            file: file.to_string(),
            message: format!("Parse error: {}", e),
        })?;
    Ok(data.items)
}

fn load_data_file<T>(path: &Path) -> Result<Vec<T>, ContentLoadError>
where
    T: for<'de> serde::Deserialize<'de>,
{
    let file_name = path.display().to_string();
    let contents = fs::read_to_string(path).map_err(|e| ContentLoadError {
        file: file_name.clone(),
        message: format!("IO error: {}", e),
    })?;
    parse_data_file(&contents, &file_name)
}

/// Load boss content from `<base_path>/{boss_moves,boss_lore}.ron` and
/// cross-check it. Returns every error found rather than the first one.
pub fn load_boss_content(base_path: &Path) -> Result<BossContent, Vec<ContentLoadError>> {
    let mut errors = Vec::new();

    let move_sets: Vec<PhaseMoveSetDef> = match load_data_file(&base_path.join(MOVES_FILE)) {
        Ok(items) => items,
        Err(e) => {
            errors.push(e);
            Vec::new()
        }
    };
    let lore: Vec<LoreTextDef> = match load_data_file(&base_path.join(LORE_FILE)) {
        Ok(items) => items,
        Err(e) => {
            errors.push(e);
            Vec::new()
        }
    };

    if errors.is_empty() {
        for error in validate_content(&move_sets, &lore) {
            errors.push(ContentLoadError {
                file: base_path.display().to_string(),
                message: error.to_string(),
            });
        }
    }

    if errors.is_empty() {
        Ok(BossContent::from_defs(move_sets, lore))
    } else {
        Err(errors)
    }
}
