use std::collections::HashMap;

use crate::Term;

/// Bag-of-words view of one document: a term to occurrence-count map plus
/// the length bookkeeping scoring reads. Assembled term-by-term during
/// ingestion and never mutated once it joins a corpus.
#[derive(Debug, Clone)]
pub struct Document {
    doc_id: String,
    term_frequency: HashMap<Term, u32>,
    num_terms: u32,
    num_words: u32,
}

impl Document {
    pub fn new(doc_id: impl Into<String>) -> Self {
        Self {
            doc_id: doc_id.into(),
            term_frequency: HashMap::new(),
            num_terms: 0,
            num_words: 0,
        }
    }

    pub fn doc_id(&self) -> &str {
        &self.doc_id
    }

    /// Record one occurrence of `term`.
    pub fn add_term(&mut self, term: Term) {
        *self.term_frequency.entry(term).or_insert(0) += 1;
        self.num_terms += 1;
    }

    /// Occurrence count of `term`; 0 when it never appeared.
    pub fn term_count(&self, term: &str) -> u32 {
        self.term_frequency.get(term).copied().unwrap_or(0)
    }

    pub fn contains_term(&self, term: &str) -> bool {
        self.term_frequency.contains_key(term)
    }

    /// Unique terms, sorted so iteration is reproducible wherever it feeds
    /// computed output.
    pub fn terms(&self) -> Vec<&str> {
        let mut terms: Vec<&str> = self.term_frequency.keys().map(String::as_str).collect();
        terms.sort_unstable();
        terms
    }

    /// Total term occurrences, duplicates included.
    pub fn num_terms(&self) -> u32 {
        self.num_terms
    }

    /// Whitespace token count before stop-word removal. Diagnostics only,
    /// never used in scoring.
    pub fn num_words(&self) -> u32 {
        self.num_words
    }

    pub fn set_num_words(&mut self, num_words: u32) {
        self.num_words = num_words;
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn counts_repeated_terms() {
        let mut doc = Document::new("42");
        doc.add_term("cat".to_string());
        doc.add_term("cat".to_string());
        doc.add_term("dog".to_string());

        assert_eq!(doc.term_count("cat"), 2);
        assert_eq!(doc.term_count("dog"), 1);
        assert_eq!(doc.num_terms(), 3);
    }

    #[test]
    fn unknown_terms_count_zero() {
        let doc = Document::new("42");
        assert_eq!(doc.term_count("absent"), 0);
        assert!(!doc.contains_term("absent"));
    }

    #[test]
    fn num_terms_matches_frequency_sum() {
        let mut doc = Document::new("42");
        for term in ["a", "b", "a", "c", "a", "b"] {
            doc.add_term(term.to_string());
        }
        let sum: u32 = doc.terms().iter().map(|t| doc.term_count(t)).sum();
        assert_eq!(doc.num_terms(), sum);
    }

    #[test]
    fn term_list_is_sorted() {
        let mut doc = Document::new("42");
        for term in ["zebra", "ant", "mole"] {
            doc.add_term(term.to_string());
        }
        assert_eq!(doc.terms(), vec!["ant", "mole", "zebra"]);
    }
}
