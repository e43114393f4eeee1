use crate::{FitConfig, TermId};
use std::cmp::Ordering;
use std::collections::HashMap;

/// Term to column mapping with per-column smoothed IDF weights. Terms are
/// unigrams or space-joined bigrams of the cleaned text; only terms seen in
/// at least `min_doc_freq` distinct documents survive, and the vocabulary is
/// capped at `max_vocab` by aggregate TF-IDF mass.
#[derive(Debug, Default)]
pub struct Vocabulary {
    pub terms: HashMap<String, TermId>,
    pub idf: Vec<f32>,
}

impl Vocabulary {
    pub fn len(&self) -> usize {
        self.terms.len()
    }

    pub fn is_empty(&self) -> bool {
        self.terms.is_empty()
    }
}

/// Sparse TF-IDF weights for one document, entries sorted by term id and
/// scaled to unit L2 norm. A document with no surviving vocabulary terms is
/// the exact zero vector (empty entry list).
#[derive(Debug, Clone, Default)]
pub struct DocumentVector {
    pub weights: Vec<(TermId, f32)>,
}

impl DocumentVector {
    /// Dot product by linear merge over the sorted entries. Vectors are
    /// pre-normalized, so this is the cosine similarity.
    pub fn dot(&self, other: &DocumentVector) -> f32 {
        let mut score = 0.0;
        let (mut i, mut j) = (0, 0);
        while i < self.weights.len() && j < other.weights.len() {
            let (term_a, weight_a) = self.weights[i];
            let (term_b, weight_b) = other.weights[j];
            match term_a.cmp(&term_b) {
                Ordering::Less => i += 1,
                Ordering::Greater => j += 1,
                Ordering::Equal => {
                    score += weight_a * weight_b;
                    i += 1;
                    j += 1;
                }
            }
        }
        score
    }
}

struct TermStats {
    df: u32,
    total_tf: u64,
    first_seen: usize,
}

/// Smoothed inverse document frequency: ln((1 + n) / (1 + df)) + 1.
fn idf_weight(num_docs: usize, df: u32) -> f32 {
    ((1.0 + num_docs as f32) / (1.0 + df as f32)).ln() + 1.0
}

fn bump_term(
    term: String,
    counts: &mut HashMap<String, u32>,
    stats: &mut HashMap<String, TermStats>,
) {
    let next_seen = stats.len();
    let count = counts.entry(term.clone()).or_insert(0);
    let stat = stats.entry(term).or_insert(TermStats {
        df: 0,
        total_tf: 0,
        first_seen: next_seen,
    });
    if *count == 0 {
        stat.df += 1;
    }
    *count += 1;
    stat.total_tf += 1;
}

fn vectorize_doc(counts: HashMap<String, u32>, vocabulary: &Vocabulary) -> DocumentVector {
    let mut weights: Vec<(TermId, f32)> = counts
        .into_iter()
        .filter_map(|(term, count)| {
            vocabulary
                .terms
                .get(&term)
                .map(|&tid| (tid, count as f32 * vocabulary.idf[tid as usize]))
        })
        .collect();
    weights.sort_unstable_by_key(|&(tid, _)| tid);
    let norm = weights.iter().map(|&(_, w)| w * w).sum::<f32>().sqrt();
    if norm > 0.0 {
        for (_, weight) in weights.iter_mut() {
            *weight /= norm;
        }
    }
    DocumentVector { weights }
}

/// Learn the vocabulary and emit one normalized sparse vector per document.
/// One batch pass over the whole corpus; no incremental re-fit.
pub fn fit(texts: &[&str], config: &FitConfig) -> (Vec<DocumentVector>, Vocabulary) {
    let num_docs = texts.len();

    // First pass: per-document term counts plus corpus-wide stats. Terms
    // are recorded in order of first appearance so the cap tie-break and
    // column assignment are reproducible across runs.
    let mut stats: HashMap<String, TermStats> = HashMap::new();
    let mut doc_counts: Vec<HashMap<String, u32>> = Vec::with_capacity(num_docs);
    for text in texts {
        let tokens: Vec<&str> = text.split_whitespace().collect();
        let mut counts: HashMap<String, u32> = HashMap::new();
        for i in 0..tokens.len() {
            bump_term(tokens[i].to_string(), &mut counts, &mut stats);
            if i + 1 < tokens.len() {
                bump_term(
                    format!("{} {}", tokens[i], tokens[i + 1]),
                    &mut counts,
                    &mut stats,
                );
            }
        }
        doc_counts.push(counts);
    }

    let mut kept: Vec<(String, TermStats)> = stats
        .into_iter()
        .filter(|(_, stat)| stat.df >= config.min_doc_freq)
        .collect();

    if kept.len() > config.max_vocab {
        // Rank by total corpus mass (count * idf), ties by first appearance.
        kept.sort_by(|a, b| {
            let mass_a = a.1.total_tf as f64 * f64::from(idf_weight(num_docs, a.1.df));
            let mass_b = b.1.total_tf as f64 * f64::from(idf_weight(num_docs, b.1.df));
            mass_b
                .partial_cmp(&mass_a)
                .unwrap_or(Ordering::Equal)
                .then(a.1.first_seen.cmp(&b.1.first_seen))
        });
        kept.truncate(config.max_vocab);
    }

    // Column order follows first appearance in the corpus.
    kept.sort_by_key(|(_, stat)| stat.first_seen);

    let mut terms = HashMap::with_capacity(kept.len());
    let mut idf = Vec::with_capacity(kept.len());
    for (tid, (term, stat)) in kept.into_iter().enumerate() {
        terms.insert(term, tid as TermId);
        idf.push(idf_weight(num_docs, stat.df));
    }
    let vocabulary = Vocabulary { terms, idf };

    let vectors = doc_counts
        .into_iter()
        .map(|counts| vectorize_doc(counts, &vocabulary))
        .collect();
    tracing::debug!(num_docs, vocab_size = vocabulary.len(), "vocabulary fitted");
    (vectors, vocabulary)
}
