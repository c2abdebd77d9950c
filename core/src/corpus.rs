use std::collections::HashMap;

use crate::{Document, RankError};

/// Insertion-ordered collection of documents plus the corpus-scoped
/// aggregates scoring reads. Each corpus owns its own length accumulator;
/// nothing here is shared between corpus instances.
#[derive(Debug)]
pub struct Corpus {
    name: String,
    documents: Vec<Document>,
    by_id: HashMap<String, usize>,
    total_term_count: u64,
}

impl Corpus {
    pub fn new(name: impl Into<String>) -> Self {
        Self {
            name: name.into(),
            documents: Vec::new(),
            by_id: HashMap::new(),
            total_term_count: 0,
        }
    }

    pub fn name(&self) -> &str {
        &self.name
    }

    /// Append a document, folding its length into the corpus total.
    pub fn add_document(&mut self, doc: Document) -> Result<(), RankError> {
        if self.by_id.contains_key(doc.doc_id()) {
            return Err(RankError::DuplicateId(doc.doc_id().to_string()));
        }
        self.by_id.insert(doc.doc_id().to_string(), self.documents.len());
        self.total_term_count += u64::from(doc.num_terms());
        self.documents.push(doc);
        Ok(())
    }

    pub fn find_by_id(&self, doc_id: &str) -> Result<&Document, RankError> {
        self.by_id
            .get(doc_id)
            .map(|&index| &self.documents[index])
            .ok_or_else(|| RankError::NotFound(doc_id.to_string()))
    }

    /// Documents in insertion order, the corpus's canonical order.
    pub fn documents(&self) -> &[Document] {
        &self.documents
    }

    pub fn len(&self) -> usize {
        self.documents.len()
    }

    pub fn is_empty(&self) -> bool {
        self.documents.is_empty()
    }

    /// Sum of `num_terms` over every document in this corpus.
    pub fn total_term_count(&self) -> u64 {
        self.total_term_count
    }

    /// Mean document length in term occurrences. Fails rather than handing
    /// a zero or NaN denominator to BM25's length normalization.
    pub fn avg_doc_length(&self) -> Result<f64, RankError> {
        if self.documents.is_empty() {
            return Err(RankError::DivisionDegenerate(format!(
                "corpus {} has no documents",
                self.name
            )));
        }
        if self.total_term_count == 0 {
            return Err(RankError::DivisionDegenerate(format!(
                "corpus {} has no term occurrences",
                self.name
            )));
        }
        Ok(self.total_term_count as f64 / self.documents.len() as f64)
    }
}
