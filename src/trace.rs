//! Stage labels and the ordered per-stage trace returned by the pipeline.

use serde::ser::{Serialize, SerializeMap, Serializer};

/// One pipeline stage, in execution order.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Stage {
    StripMarkup,
    StripLinks,
    StripEmoji,
    RemoveStopwords,
    StripPunctuation,
    StripSpecialChars,
    CollapseWhitespace,
    ExpandChatSpeak,
    SpellOutNumerals,
    Lowercase,
    SpellCorrect,
    Stem,
    Lemmatize,
}

impl Stage {
    pub const ALL: [Stage; 13] = [
        Stage::StripMarkup,
        Stage::StripLinks,
        Stage::StripEmoji,
        Stage::RemoveStopwords,
        Stage::StripPunctuation,
        Stage::StripSpecialChars,
        Stage::CollapseWhitespace,
        Stage::ExpandChatSpeak,
        Stage::SpellOutNumerals,
        Stage::Lowercase,
        Stage::SpellCorrect,
        Stage::Stem,
        Stage::Lemmatize,
    ];

    /// Label under which the stage output is published. Downstream
    /// consumers key on these exact strings.
    pub fn label(self) -> &'static str {
        match self {
            Stage::StripMarkup => "1. Remover tags HTML",
            Stage::StripLinks => "2. Remover URLs",
            Stage::StripEmoji => "3. Remover emojis",
            Stage::RemoveStopwords => "4. Remover stopwords",
            Stage::StripPunctuation => "5. Remover sinais de pontuação",
            Stage::StripSpecialChars => "6. Remover caracteres especiais",
            Stage::CollapseWhitespace => "7. Remover espaços em branco excedentes",
            Stage::ExpandChatSpeak => "8. Substituir palavras usadas em chat",
            Stage::SpellOutNumerals => "9. Converter números em palavras",
            Stage::Lowercase => "10. Converter para letras minúsculas",
            Stage::SpellCorrect => "11. Aplicar correção ortográfica",
            Stage::Stem => "12. Aplicar stemização",
            Stage::Lemmatize => "13. Aplicar lematização",
        }
    }

    pub fn from_label(label: &str) -> Option<Stage> {
        Stage::ALL.into_iter().find(|stage| stage.label() == label)
    }
}

/// Optional hint about the document being processed. Recorded on the trace;
/// every kind runs the same stages.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub enum DocumentKind {
    #[default]
    Standard,
    Social,
}

/// Snapshot of the full text after one stage.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct TraceEntry {
    pub stage: Stage,
    pub text: String,
}

impl TraceEntry {
    pub fn label(&self) -> &'static str {
        self.stage.label()
    }
}

/// Ordered record of every stage output for one document.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Trace {
    kind: DocumentKind,
    entries: Vec<TraceEntry>,
}

impl Trace {
    pub(crate) fn new(kind: DocumentKind) -> Self {
        Self {
            kind,
            entries: Vec::with_capacity(Stage::ALL.len()),
        }
    }

    pub(crate) fn record(&mut self, stage: Stage, text: String) {
        debug_assert_eq!(Stage::ALL.get(self.entries.len()), Some(&stage));
        self.entries.push(TraceEntry { stage, text });
    }

    pub fn kind(&self) -> DocumentKind {
        self.kind
    }

    pub fn len(&self) -> usize {
        self.entries.len()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    pub fn entries(&self) -> &[TraceEntry] {
        &self.entries
    }

    pub fn get(&self, stage: Stage) -> Option<&str> {
        self.entries
            .iter()
            .find(|entry| entry.stage == stage)
            .map(|entry| entry.text.as_str())
    }

    pub fn get_label(&self, label: &str) -> Option<&str> {
        Stage::from_label(label).and_then(|stage| self.get(stage))
    }

    /// Output of the last stage (lemmatization); the text that gets persisted.
    pub fn final_text(&self) -> &str {
        self.get(Stage::Lemmatize).unwrap_or_default()
    }

    pub fn labels(&self) -> impl Iterator<Item = &'static str> + '_ {
        self.entries.iter().map(TraceEntry::label)
    }

    /// `(label, text)` pairs in stage order.
    pub fn into_pairs(self) -> Vec<(String, String)> {
        self.entries
            .into_iter()
            .map(|entry| (entry.stage.label().to_string(), entry.text))
            .collect()
    }
}

// Serialized as a JSON object whose keys keep stage order.
impl Serialize for Trace {
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        let mut map = serializer.serialize_map(Some(self.entries.len()))?;
        for entry in &self.entries {
            map.serialize_entry(entry.label(), &entry.text)?;
        }
        map.end()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn labels_are_numbered_in_order() {
        for (i, stage) in Stage::ALL.iter().enumerate() {
            let prefix = format!("{}. ", i + 1);
            assert!(stage.label().starts_with(&prefix), "{}", stage.label());
            assert_eq!(Stage::from_label(stage.label()), Some(*stage));
        }
    }

    #[test]
    fn serializes_as_ordered_object() {
        let mut trace = Trace::new(DocumentKind::Standard);
        trace.record(Stage::StripMarkup, "a".into());
        trace.record(Stage::StripLinks, "b".into());
        let json = serde_json::to_string(&trace).unwrap();
        assert_eq!(json, r#"{"1. Remover tags HTML":"a","2. Remover URLs":"b"}"#);
    }

    #[test]
    fn lookup_by_label() {
        let mut trace = Trace::new(DocumentKind::Social);
        trace.record(Stage::StripMarkup, "sem tags".into());
        assert_eq!(trace.get_label("1. Remover tags HTML"), Some("sem tags"));
        assert_eq!(trace.get_label("2. Remover URLs"), None);
        assert_eq!(trace.get_label("Remover tags HTML"), None);
    }
}
