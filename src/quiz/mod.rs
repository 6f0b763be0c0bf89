pub mod animals;
pub mod round;

use std::collections::HashSet;
use std::path::Path;

pub use round::generate_round;

/// How many choices a single round shows.
pub const OPTION_COUNT: usize = 3;

#[derive(Debug, thiserror::Error, PartialEq, Eq)]
pub enum QuizError {
    #[error("catalog is empty")]
    InvalidCatalog,
    #[error("catalog has {found} entries but a round needs {required}")]
    InsufficientEntries { found: usize, required: usize },
    #[error("entry name `{0}` appears more than once in the catalog")]
    DuplicateName(String),
    #[error("image `{0}` is not a plain file name")]
    InvalidImage(String),
}

#[derive(Debug, Clone, Default, PartialEq, Eq, serde::Serialize, serde::Deserialize)]
pub struct Entry {
    pub name: String,
    pub image: String,
}
impl Entry {
    pub fn new(name: impl Into<String>, image: impl Into<String>) -> Self {
        Self {
            name: name.into(),
            image: image.into(),
        }
    }
}

/// The fixed, validated list of entries rounds are drawn from.
///
/// Built once at startup and shared read-only between requests.
#[derive(Debug, Clone)]
pub struct Catalog {
    entries: Vec<Entry>,
}

impl Catalog {
    pub fn new(entries: Vec<Entry>) -> Result<Self, QuizError> {
        check_size(&entries)?;

        let mut seen = HashSet::new();
        for entry in &entries {
            if !is_plain_file_name(&entry.image) {
                return Err(QuizError::InvalidImage(entry.image.clone()));
            }
            if !seen.insert(entry.name.as_str()) {
                return Err(QuizError::DuplicateName(entry.name.clone()));
            }
        }

        Ok(Self { entries })
    }

    pub fn entries(&self) -> &[Entry] {
        &self.entries
    }

    pub fn find_by_image(&self, image: &str) -> Option<&Entry> {
        self.entries.iter().find(|e| e.image == image)
    }
}

pub(crate) fn check_size(entries: &[Entry]) -> Result<(), QuizError> {
    if entries.is_empty() {
        return Err(QuizError::InvalidCatalog);
    }
    if entries.len() < OPTION_COUNT {
        return Err(QuizError::InsufficientEntries {
            found: entries.len(),
            required: OPTION_COUNT,
        });
    }
    Ok(())
}

/// True for a single path component: no separators, no `.`/`..`, and
/// nothing a URL would treat as a query or fragment.
pub fn is_plain_file_name(file: &str) -> bool {
    !file.is_empty()
        && file != "."
        && file != ".."
        && !file.contains(['/', '\\', '?', '#'])
        && Path::new(file).file_name().map(|n| n == file).unwrap_or(false)
}

/// One quiz instance: the entry whose picture is shown and the names offered for it.
#[derive(Debug, Clone, PartialEq, Eq, serde::Serialize)]
pub struct Round {
    pub correct: Entry,
    pub options: Vec<String>,
}
impl Round {
    pub fn is_correct(&self, name: &str) -> bool {
        self.correct.name == name
    }
}
