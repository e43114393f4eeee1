use crate::vectorize::DocumentVector;
use crate::DocPos;
use serde::Serialize;
use std::cmp::Ordering;

/// Extra candidates selected beyond `k` before the min-score filter runs.
/// If the filter exhausts the buffer, fewer than `k` results come back even
/// when more matches may exist past the margin; the retriever does not
/// retry with a larger buffer.
pub const SELECTION_MARGIN: usize = 20;

/// A ranked neighbor: internal position and cosine score, the score rounded
/// to three decimals for presentation.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct SimilarityResult {
    pub position: DocPos,
    pub score: f32,
}

fn round3(score: f32) -> f32 {
    (score * 1000.0).round() / 1000.0
}

fn by_score_desc(scores: &[f32]) -> impl Fn(&DocPos, &DocPos) -> Ordering + '_ {
    move |&a, &b| scores[b].partial_cmp(&scores[a]).unwrap_or(Ordering::Equal)
}

/// Rank the `k` nearest neighbors of `source` among `vectors`, excluding
/// scores below `min_score`. The source document is pinned to a -1 sentinel
/// so it can never appear in its own results. Out-of-range positions yield
/// an empty list, never an error.
///
/// Selection is a partition step over a buffer of `k + SELECTION_MARGIN`
/// candidates (expected O(n)) followed by a sort of only the buffer, rather
/// than a full O(n log n) sort of the corpus.
pub fn top_k(
    source: DocPos,
    vectors: &[DocumentVector],
    k: usize,
    min_score: f32,
) -> Vec<SimilarityResult> {
    if source >= vectors.len() || k == 0 {
        return Vec::new();
    }
    let source_vector = &vectors[source];
    let mut scores: Vec<f32> = vectors.iter().map(|v| source_vector.dot(v)).collect();
    scores[source] = -1.0;

    let buffer = (k + SELECTION_MARGIN).min(scores.len());
    let mut candidates: Vec<DocPos> = (0..scores.len()).collect();
    if buffer < candidates.len() {
        candidates.select_nth_unstable_by(buffer - 1, by_score_desc(&scores));
        candidates.truncate(buffer);
    }
    candidates.sort_unstable_by(by_score_desc(&scores));

    let mut results = Vec::with_capacity(k.min(buffer));
    for position in candidates {
        if results.len() >= k {
            break;
        }
        let score = scores[position];
        if score < min_score {
            continue;
        }
        results.push(SimilarityResult {
            position,
            score: round3(score),
        });
    }
    results
}
