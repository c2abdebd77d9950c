//! The two weighting schemes. Both are pure functions of the document, the
//! corpus aggregates and the df table.
//!
//! TF-IDF uses the sublinear tf' = 1 + log10(tf) with idf = log10(N / df)
//! and is the basis of the per-document normalized vectors behind the
//! optimal-query feature. BM25 is the canonical Okapi form with raw
//! in-document tf:
//!
//! score = Σ over distinct query terms t of
//!         ln((N - df + 0.5) / (df + 0.5))
//!       * ((k1 + 1) * tf) / (K + tf)
//!       * ((k2 + 1) * qtf) / (k2 + qtf)
//! with K = k1 * ((1 - b) + b * dl / avgdl), computed once per document.

use std::collections::{BTreeMap, HashMap};

use crate::rank::ScoreMap;
use crate::{Corpus, Document, RankError, Term, TermStats};

pub const K1: f64 = 1.2;
pub const K2: f64 = 100.0;
pub const B: f64 = 0.75;

/// Sublinear term-frequency scaling: 0 for an absent term, 1 + log10(tf)
/// otherwise.
pub fn tf_sublinear(count: u32) -> f64 {
    if count == 0 {
        0.0
    } else {
        1.0 + f64::from(count).log10()
    }
}

/// log10(N / df). Callers pass terms drawn from the corpus vocabulary, so
/// df >= 1.
pub fn idf(num_docs: usize, df: u32) -> f64 {
    (num_docs as f64 / f64::from(df)).log10()
}

/// Unnormalized tf-idf weight of `term` in `doc`.
pub fn tfidf(doc: &Document, term: &str, stats: &TermStats) -> f64 {
    tf_sublinear(doc.term_count(term)) * idf(stats.num_docs(), stats.df(term))
}

/// L2-normalized tf-idf vector over the document's own term set. The norm
/// is accumulated in one pass before any component is divided, so every
/// component sees the same fixed denominator.
pub fn normalized_tfidf(doc: &Document, stats: &TermStats) -> HashMap<Term, f64> {
    let terms = doc.terms();
    let mut weights: HashMap<Term, f64> = HashMap::with_capacity(terms.len());
    for term in terms {
        weights.insert(term.to_string(), tfidf(doc, term, stats));
    }
    let norm = weights.values().map(|w| w * w).sum::<f64>().sqrt();
    if norm > 0.0 {
        for weight in weights.values_mut() {
            *weight /= norm;
        }
    }
    weights
}

/// Corpus-wide term weights: the mean of the documents' normalized tf-idf
/// vectors. The top of this map seeds the optimal-query feature.
pub fn score_tfidf(corpus: &Corpus, stats: &TermStats) -> Result<ScoreMap, RankError> {
    if corpus.is_empty() {
        return Err(RankError::DivisionDegenerate(format!(
            "corpus {} has no documents",
            corpus.name()
        )));
    }
    let mut scores = ScoreMap::new();
    for doc in corpus.documents() {
        for (term, weight) in normalized_tfidf(doc, stats) {
            *scores.entry(term).or_insert(0.0) += weight;
        }
    }
    let num_docs = corpus.len() as f64;
    for weight in scores.values_mut() {
        *weight /= num_docs;
    }
    Ok(scores)
}

/// Okapi BM25 score of `doc` for `query`. Only the multiset of query terms
/// matters: order is irrelevant, repeats raise the query-side saturation.
pub fn bm25(
    doc: &Document,
    corpus: &Corpus,
    stats: &TermStats,
    query: &[Term],
) -> Result<f64, RankError> {
    let avgdl = corpus.avg_doc_length()?;
    let num_docs = corpus.len() as f64;
    let dl = f64::from(doc.num_terms());
    let k = K1 * ((1.0 - B) + B * (dl / avgdl));

    let mut query_counts: BTreeMap<&str, u32> = BTreeMap::new();
    for term in query {
        *query_counts.entry(term.as_str()).or_insert(0) += 1;
    }

    let mut score = 0.0;
    for (term, qtf) in query_counts {
        let df = f64::from(stats.df(term));
        let tf = f64::from(doc.term_count(term));
        // The +0.5 smoothing keeps df = 0 away from a zero denominator.
        let idf = ((num_docs - df + 0.5) / (df + 0.5)).ln();
        let doc_saturation = ((K1 + 1.0) * tf) / (k + tf);
        let query_saturation = ((K2 + 1.0) * f64::from(qtf)) / (K2 + f64::from(qtf));
        score += idf * doc_saturation * query_saturation;
    }
    Ok(score)
}

/// BM25 over every document in the corpus, keyed by document id.
pub fn score_bm25(
    corpus: &Corpus,
    stats: &TermStats,
    query: &[Term],
) -> Result<ScoreMap, RankError> {
    let mut scores = ScoreMap::with_capacity(corpus.len());
    for doc in corpus.documents() {
        let score = bm25(doc, corpus, stats, query)?;
        scores.insert(doc.doc_id().to_string(), score);
    }
    Ok(scores)
}
