use crate::normalize::clean_text;
use crate::DocPos;
use serde::{Deserialize, Serialize};
use std::collections::HashMap;

/// A raw review record as handed over by the ingestion boundary. Absent
/// fields are explicit options here and resolve to defaults during the
/// build, never as dynamic lookups inside the engine.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct RawRecord {
    pub id: String,
    pub title: Option<String>,
    pub body: Option<String>,
    pub rating: Option<f32>,
    pub author: Option<String>,
}

/// A record that survived cleaning and filtering, pinned to its position
/// in the corpus. Original metadata rides along for the result join.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct CleanedDocument {
    pub external_id: String,
    pub text: String,
    pub title: Option<String>,
    pub rating: Option<f32>,
    pub author: Option<String>,
}

/// The immutable document set: cleaned documents in position order plus the
/// external-id lookup. Built once per run, read-only afterwards.
#[derive(Debug, Default)]
pub struct Corpus {
    pub documents: Vec<CleanedDocument>,
    pub index: HashMap<String, DocPos>,
}

impl Corpus {
    pub fn len(&self) -> usize {
        self.documents.len()
    }

    pub fn is_empty(&self) -> bool {
        self.documents.is_empty()
    }

    /// Resolve an external id to its internal position. Ids that were never
    /// ingested, or whose record was filtered out, resolve to `None`.
    pub fn position_of(&self, external_id: &str) -> Option<DocPos> {
        self.index.get(external_id).copied()
    }
}

/// Clean and filter raw records into a corpus. Title and body are joined
/// with a single space before cleaning; records whose cleaned text is
/// shorter than `min_text_len` are dropped and can never be queried or
/// recommended. Positions are dense in surviving order. When two records
/// share an external id the later one's index entry wins.
pub fn build(records: Vec<RawRecord>, min_text_len: usize) -> Corpus {
    let mut documents = Vec::new();
    let mut index = HashMap::new();
    for record in records {
        let title = record.title.as_deref().unwrap_or("");
        let body = record.body.as_deref().unwrap_or("");
        let combined = format!("{title} {body}");
        let text = clean_text(combined.trim());
        if text.len() < min_text_len {
            continue;
        }
        let position: DocPos = documents.len();
        index.insert(record.id.clone(), position);
        documents.push(CleanedDocument {
            external_id: record.id,
            text,
            title: record.title,
            rating: record.rating,
            author: record.author,
        });
    }
    Corpus { documents, index }
}
