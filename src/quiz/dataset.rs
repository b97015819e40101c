//! Country dataset: records and the provider the queue builder reads from
//!
//! The catalog is loaded from a JSON file and handed to the game at
//! construction time. The core never mutates a record.

use rustc_hash::FxHashSet;
use serde::{Deserialize, Serialize};
use std::fs;
use std::path::Path;

use super::errors::QuizError;
use super::session::Language;

/// One country: flag code plus its name in both languages
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct CountryRecord {
    /// Identifier used to fetch the flag asset (e.g. "ar")
    pub code: String,
    pub name_es: String,
    pub name_en: String,
}

impl CountryRecord {
    #[allow(dead_code)]
    pub fn new(code: &str, name_es: &str, name_en: &str) -> Self {
        CountryRecord {
            code: code.to_string(),
            name_es: name_es.to_string(),
            name_en: name_en.to_string(),
        }
    }

    /// Name shown to the player in the given language
    pub fn name_in(&self, language: Language) -> &str {
        match language {
            Language::Spanish => &self.name_es,
            Language::English => &self.name_en,
        }
    }
}

/// Read-only source of country records
pub trait DatasetProvider {
    /// All records, in dataset order
    fn get_all(&self) -> &[CountryRecord];

    fn len(&self) -> usize {
        self.get_all().len()
    }

    fn is_empty(&self) -> bool {
        self.len() == 0
    }
}

/// In-memory country list
#[derive(Clone, Debug, Default)]
pub struct CountryCatalog {
    records: Vec<CountryRecord>,
}

impl CountryCatalog {
    /// Build a catalog, rejecting duplicate codes
    pub fn from_records(records: Vec<CountryRecord>) -> Result<Self, QuizError> {
        let mut seen = FxHashSet::default();
        for record in &records {
            if !seen.insert(record.code.as_str()) {
                return Err(QuizError::DuplicateCode(record.code.clone()));
            }
        }
        Ok(CountryCatalog { records })
    }

    /// Load catalog from a JSON array of `{code, nameEs, nameEn}`
    pub fn load(path: impl AsRef<Path>) -> Result<Self, QuizError> {
        let path = path.as_ref();
        let content = fs::read_to_string(path).map_err(|source| QuizError::Io {
            path: path.to_path_buf(),
            source,
        })?;
        let records: Vec<CountryRecord> =
            serde_json::from_str(&content).map_err(|source| QuizError::Parse {
                path: path.to_path_buf(),
                source,
            })?;

        tracing::debug!(count = records.len(), path = %path.display(), "dataset loaded");
        Self::from_records(records)
    }
}

impl DatasetProvider for CountryCatalog {
    fn get_all(&self) -> &[CountryRecord] {
        &self.records
    }
}
