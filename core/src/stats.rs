use std::collections::HashMap;

use crate::{Corpus, Term};

/// Document-frequency table, built once from a corpus snapshot and immutable
/// afterwards. Mutating the corpus invalidates it; rebuild in that case.
#[derive(Debug)]
pub struct TermStats {
    df: HashMap<Term, u32>,
    num_docs: usize,
}

impl TermStats {
    /// Walk each document's unique term set once, so a term is counted at
    /// most once per document regardless of its in-document frequency.
    pub fn build(corpus: &Corpus) -> Self {
        let mut df: HashMap<Term, u32> = HashMap::new();
        for doc in corpus.documents() {
            for term in doc.terms() {
                *df.entry(term.to_string()).or_insert(0) += 1;
            }
        }
        Self {
            df,
            num_docs: corpus.len(),
        }
    }

    /// Number of documents containing `term`; 0 for unseen terms.
    pub fn df(&self, term: &str) -> u32 {
        self.df.get(term).copied().unwrap_or(0)
    }

    /// Number of documents in the corpus the table was built from.
    pub fn num_docs(&self) -> usize {
        self.num_docs
    }

    /// Corpus vocabulary, sorted for reproducible iteration.
    pub fn vocabulary(&self) -> Vec<&str> {
        let mut terms: Vec<&str> = self.df.keys().map(String::as_str).collect();
        terms.sort_unstable();
        terms
    }
}
