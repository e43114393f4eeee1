use revrec_core::{FitConfig, RawRecord, Recommender};

fn record(id: &str, title: &str, body: &str) -> RawRecord {
    RawRecord {
        id: id.into(),
        title: if title.is_empty() { None } else { Some(title.into()) },
        body: if body.is_empty() { None } else { Some(body.into()) },
        rating: None,
        author: None,
    }
}

// Comfortably longer than the 50-character minimum once cleaned.
const LONG_A: &str = "the battery lasts for days and the screen is bright and sharp in sunlight";
const LONG_B: &str = "delivery took three weeks and the package arrived with a dented corner box";

fn fit(records: Vec<RawRecord>) -> Recommender {
    Recommender::fit(records, &FitConfig::default())
}

#[test]
fn identical_documents_score_one_and_exclude_self() {
    // Scenario: three records with the same text; querying any one returns
    // the other two at cosine 1.000.
    let recommender = fit(vec![
        record("1", "", LONG_A),
        record("2", "", LONG_A),
        record("3", "", LONG_A),
    ]);
    for id in ["1", "2", "3"] {
        let hits = recommender.recommend(id, 5, 0.10);
        assert_eq!(hits.len(), 2);
        let mut ids: Vec<&str> = hits.iter().map(|h| h.id.as_str()).collect();
        ids.sort();
        assert!(!ids.contains(&id));
        for hit in &hits {
            assert_eq!(hit.score, 1.0);
        }
    }
}

#[test]
fn unknown_id_returns_empty() {
    let recommender = fit(vec![record("1", "", LONG_A), record("2", "", LONG_A)]);
    assert!(recommender.recommend("nope", 5, 0.10).is_empty());
}

#[test]
fn too_short_record_is_invisible() {
    let recommender = fit(vec![
        record("short", "", "tiny text"),
        record("1", "", LONG_A),
        record("2", "", LONG_A),
    ]);
    assert_eq!(recommender.num_docs(), 2);
    assert!(recommender.recommend("short", 5, 0.10).is_empty());
    // Nor can it ever be recommended.
    let hits = recommender.recommend("1", 5, 0.0);
    assert!(hits.iter().all(|h| h.id != "short"));
}

#[test]
fn min_score_can_shrink_results_below_k() {
    // Scenario: top_k of 5 but only two neighbors clear min_score.
    let recommender = fit(vec![
        record("q", "", LONG_A),
        record("near1", "", LONG_A),
        record("near2", "", LONG_A),
        record("far1", "", LONG_B),
        record("far2", "", LONG_B),
    ]);
    let hits = recommender.recommend("q", 5, 0.10);
    assert_eq!(hits.len(), 2);
    let mut ids: Vec<&str> = hits.iter().map(|h| h.id.as_str()).collect();
    ids.sort();
    assert_eq!(ids, ["near1", "near2"]);
}

#[test]
fn scores_are_descending_and_within_bounds() {
    let recommender = fit(vec![
        record("q", "", LONG_A),
        record("a", "", LONG_A),
        record("b", "the battery lasts for days", "and the screen is large but dim indoors"),
        record("c", "", LONG_B),
    ]);
    let hits = recommender.recommend("q", 3, 0.0);
    assert!(hits.len() <= 3);
    for window in hits.windows(2) {
        assert!(window[0].score >= window[1].score);
    }
    for hit in &hits {
        assert!(hit.score >= 0.0 && hit.score <= 1.0);
    }
}

#[test]
fn duplicate_external_id_resolves_to_the_later_record() {
    // Scenario: two records share an id; the later one's text drives the
    // query because the index entry is last-write-wins.
    let recommender = fit(vec![
        record("dup", "", LONG_A),
        record("a_twin", "", LONG_A),
        record("dup", "", LONG_B),
        record("b_twin", "", LONG_B),
    ]);
    let hits = recommender.recommend("dup", 1, 0.10);
    assert_eq!(hits.len(), 1);
    assert_eq!(hits[0].id, "b_twin");
    assert_eq!(hits[0].score, 1.0);
}

#[test]
fn metadata_rides_along_with_results() {
    let mut with_meta = record("1", "Battery review", LONG_A);
    with_meta.rating = Some(4.5);
    with_meta.author = Some("sam".into());
    let recommender = fit(vec![record("q", "", LONG_A), with_meta]);
    let hits = recommender.recommend("q", 5, 0.10);
    assert_eq!(hits.len(), 1);
    assert_eq!(hits[0].title.as_deref(), Some("Battery review"));
    assert_eq!(hits[0].rating, Some(4.5));
    assert_eq!(hits[0].author.as_deref(), Some("sam"));
}

#[test]
fn empty_corpus_answers_empty() {
    let recommender = fit(Vec::new());
    assert_eq!(recommender.num_docs(), 0);
    assert_eq!(recommender.vocab_size(), 0);
    assert!(recommender.recommend("1", 5, 0.10).is_empty());
}
