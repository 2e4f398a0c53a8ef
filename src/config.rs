//! Locations of the linguistic resources loaded at startup.

use std::fs;
use std::path::{Path, PathBuf};

use serde::{Deserialize, Serialize};

use crate::error::ResourceError;

/// Where the spelling dictionary, frequency list and lemma lexicon live.
///
/// ```json
/// {
///   "dict_dir": "dictionaries",
///   "hunspell": "pt_BR",
///   "word_list": "pt_words.txt",
///   "lemma_list": "pt_lemmas.txt"
/// }
/// ```
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct ResourceConfig {
    /// Directory holding every resource file below.
    pub dict_dir: PathBuf,
    /// Base name of the Hunspell pair (`<name>.aff` + `<name>.dic`).
    pub hunspell: String,
    /// Optional `word [count]` frequency list used to rank corrections.
    pub word_list: String,
    /// `lemma<TAB>form` lexicon.
    pub lemma_list: String,
}

impl Default for ResourceConfig {
    fn default() -> Self {
        Self {
            dict_dir: PathBuf::from("dictionaries"),
            hunspell: "pt_BR".to_string(),
            word_list: "pt_words.txt".to_string(),
            lemma_list: "pt_lemmas.txt".to_string(),
        }
    }
}

impl ResourceConfig {
    /// Default file names rooted at `dict_dir`.
    pub fn with_dict_dir(dict_dir: impl Into<PathBuf>) -> Self {
        Self {
            dict_dir: dict_dir.into(),
            ..Self::default()
        }
    }

    /// Read a JSON config; missing keys fall back to the defaults.
    pub fn from_json_file(path: &Path) -> Result<Self, ResourceError> {
        let raw = fs::read_to_string(path).map_err(|source| ResourceError::Read {
            path: path.to_path_buf(),
            source,
        })?;
        serde_json::from_str(&raw).map_err(|source| ResourceError::Config {
            path: path.to_path_buf(),
            source,
        })
    }

    /// Effective config for a run: the JSON file if one is given (defaults
    /// otherwise), with `dict_dir` replacing its directory.
    pub fn resolve(config_file: Option<&Path>, dict_dir: Option<&Path>) -> Result<Self, ResourceError> {
        let mut config = match config_file {
            Some(path) => Self::from_json_file(path)?,
            None => Self::default(),
        };
        if let Some(dir) = dict_dir {
            config.dict_dir = dir.to_path_buf();
        }
        Ok(config)
    }

    pub fn aff_path(&self) -> PathBuf {
        self.dict_dir.join(format!("{}.aff", self.hunspell))
    }

    pub fn dic_path(&self) -> PathBuf {
        self.dict_dir.join(format!("{}.dic", self.hunspell))
    }

    pub fn word_list_path(&self) -> PathBuf {
        self.dict_dir.join(&self.word_list)
    }

    pub fn lemma_list_path(&self) -> PathBuf {
        self.dict_dir.join(&self.lemma_list)
    }
}
