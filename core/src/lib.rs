pub mod corpus;
pub mod normalize;
pub mod recommender;
pub mod retrieve;
pub mod vectorize;

pub type TermId = u32;
/// Dense internal document position, assigned in ingestion order after filtering.
/// Never exposed outside the engine; the facade maps positions back to external ids.
pub type DocPos = usize;

pub use corpus::{Corpus, RawRecord};
pub use recommender::{Recommendation, Recommender};
pub use retrieve::SimilarityResult;
pub use vectorize::{DocumentVector, Vocabulary};

/// Tunables for corpus construction and vocabulary fitting.
#[derive(Debug, Clone)]
pub struct FitConfig {
    /// Records whose cleaned text is shorter than this are dropped entirely.
    pub min_text_len: usize,
    /// A term must appear in at least this many distinct documents to be kept.
    pub min_doc_freq: u32,
    /// Hard cap on vocabulary size; highest aggregate TF-IDF mass wins.
    pub max_vocab: usize,
}

impl Default for FitConfig {
    fn default() -> Self {
        Self {
            min_text_len: 50,
            min_doc_freq: 2,
            max_vocab: 50_000,
        }
    }
}
