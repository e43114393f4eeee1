use crate::corpus::{self, Corpus, RawRecord};
use crate::retrieve;
use crate::vectorize::{self, DocumentVector, Vocabulary};
use crate::FitConfig;
use serde::Serialize;

pub const DEFAULT_TOP_K: usize = 5;
pub const DEFAULT_MIN_SCORE: f32 = 0.10;

/// A ranked recommendation with the source record's metadata joined in.
#[derive(Debug, Clone, Serialize)]
pub struct Recommendation {
    pub id: String,
    pub score: f32,
    pub title: Option<String>,
    pub rating: Option<f32>,
    pub author: Option<String>,
}

/// The immutable corpus bundle: documents, id index, vocabulary, vectors.
/// Built in one blocking batch pass; every query afterwards is a pure read,
/// so a shared reference is safe across concurrent callers.
pub struct Recommender {
    corpus: Corpus,
    vocabulary: Vocabulary,
    vectors: Vec<DocumentVector>,
}

impl Recommender {
    /// Clean, filter, and vectorize `records` into a queryable corpus.
    pub fn fit(records: Vec<RawRecord>, config: &FitConfig) -> Self {
        let num_records = records.len();
        let corpus = corpus::build(records, config.min_text_len);
        let texts: Vec<&str> = corpus.documents.iter().map(|d| d.text.as_str()).collect();
        let (vectors, vocabulary) = vectorize::fit(&texts, config);
        tracing::info!(
            num_records,
            num_docs = corpus.len(),
            vocab_size = vocabulary.len(),
            "corpus fitted"
        );
        Self {
            corpus,
            vocabulary,
            vectors,
        }
    }

    pub fn num_docs(&self) -> usize {
        self.corpus.len()
    }

    pub fn vocab_size(&self) -> usize {
        self.vocabulary.len()
    }

    /// The `k` reviews most similar to the record with `external_id`,
    /// scoring at least `min_score`. Unknown ids, and ids whose record was
    /// filtered out at build time, yield an empty list rather than an error.
    pub fn recommend(&self, external_id: &str, k: usize, min_score: f32) -> Vec<Recommendation> {
        let Some(source) = self.corpus.position_of(external_id) else {
            return Vec::new();
        };
        retrieve::top_k(source, &self.vectors, k, min_score)
            .into_iter()
            .map(|hit| {
                let doc = &self.corpus.documents[hit.position];
                Recommendation {
                    id: doc.external_id.clone(),
                    score: hit.score,
                    title: doc.title.clone(),
                    rating: doc.rating,
                    author: doc.author.clone(),
                }
            })
            .collect()
    }
}
