//! Staged normalization of Portuguese text.
//!
//! A document goes through thirteen ordered rewrites (markup, links, emoji,
//! stopwords, punctuation, special characters, whitespace, chat-speak,
//! numerals, case, spelling, stemming, lemmatization). Every stage's output
//! is kept in a [`Trace`] under a fixed label so callers can inspect the
//! whole progression, not just the final text.
//!
//! ```no_run
//! use pt_text_clean::{Linguistics, Normalizer, ResourceConfig};
//!
//! let linguistics = Linguistics::load(&ResourceConfig::default())?;
//! let normalizer = Normalizer::new(linguistics);
//! let trace = normalizer.normalize("<b>Olá, vc viu isso?</b>");
//! for entry in trace.entries() {
//!     println!("{}: {}", entry.label(), entry.text);
//! }
//! # Ok::<(), pt_text_clean::ResourceError>(())
//! ```
//!
//! The stemming stage is recorded but does not feed lemmatization, which
//! starts again from the spell-corrected text.

pub mod adapter;
pub mod cleanup;
pub mod config;
pub mod dictionary;
pub mod error;
pub mod lemmatizer;
pub mod lexicon;
pub mod linguistics;
pub mod pipeline;
pub mod stemmer;
pub mod stopwords;
pub mod trace;

#[cfg(feature = "python")]
mod python;

pub use crate::adapter::{process_file, process_files, BatchReport, ProcessOptions, ProcessedFile};
pub use crate::config::ResourceConfig;
pub use crate::dictionary::{SpellChecker, Speller};
pub use crate::error::{AdapterError, ResourceError};
pub use crate::lemmatizer::{Lemmatizer, LexiconLemmatizer};
pub use crate::linguistics::Linguistics;
pub use crate::pipeline::Normalizer;
pub use crate::stemmer::{SnowballStemmer, Stemmer};
pub use crate::stopwords::StopwordSet;
pub use crate::trace::{DocumentKind, Stage, Trace, TraceEntry};
