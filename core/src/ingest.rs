//! Raw XML documents to a frozen corpus. A document that cannot be parsed
//! is skipped and logged; a duplicate id aborts the whole build.

use std::collections::HashSet;

use crate::tokenizer::{self, Stemmer};
use crate::{extract, Corpus, Document, RankError, Term};

/// Build a corpus from raw document strings.
pub fn build_corpus(
    name: &str,
    raw_docs: &[String],
    stop_words: &HashSet<String>,
    stemmer: &dyn Stemmer,
) -> Result<Corpus, RankError> {
    let mut corpus = Corpus::new(name);
    let mut skipped = 0usize;
    for raw in raw_docs {
        match build_document(raw, stop_words, stemmer) {
            Ok(doc) => corpus.add_document(doc)?,
            Err(err) => {
                skipped += 1;
                tracing::warn!(%err, "skipping malformed document");
            }
        }
    }
    tracing::info!(
        corpus = corpus.name(),
        num_docs = corpus.len(),
        skipped,
        total_terms = corpus.total_term_count(),
        "corpus built"
    );
    Ok(corpus)
}

/// Build one bag-of-words document from a raw XML string: extract the id
/// and text, tokenize, drop stop words, stem. Terms that stem to nothing
/// are discarded and deducted from the word count.
pub fn build_document(
    raw: &str,
    stop_words: &HashSet<String>,
    stemmer: &dyn Stemmer,
) -> Result<Document, RankError> {
    let doc_id = extract::extract_id(raw)?;
    let text = extract::extract_text(raw)?;

    let tokens = tokenizer::tokenize(&text);
    let mut num_words = tokens.len() as u32;

    let mut doc = Document::new(doc_id);
    for token in tokenizer::remove_stop_words(stop_words, tokens) {
        let term = stemmer.stem(&token);
        if term.is_empty() {
            num_words -= 1;
            continue;
        }
        doc.add_term(term);
    }
    doc.set_num_words(num_words);
    Ok(doc)
}

/// Run a free-text query through the same pipeline the corpus was built
/// with, so query terms and document terms live in the same space.
pub fn prepare_query(
    query: &str,
    stop_words: &HashSet<String>,
    stemmer: &dyn Stemmer,
) -> Vec<Term> {
    tokenizer::remove_stop_words(stop_words, tokenizer::tokenize(query))
        .into_iter()
        .map(|token| stemmer.stem(&token))
        .filter(|term| !term.is_empty())
        .collect()
}
