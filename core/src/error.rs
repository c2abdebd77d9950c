use thiserror::Error;

/// Failures the ranking engine surfaces to callers. Absent terms are not
/// errors; they score zero.
#[derive(Debug, Error)]
pub enum RankError {
    /// A raw document is missing the markers ingestion needs.
    #[error("malformed document: {0}")]
    MalformedInput(String),

    /// Two documents share an id; corpus construction cannot continue.
    #[error("duplicate document id {0}")]
    DuplicateId(String),

    /// Lookup of a document id that is not in the corpus.
    #[error("no document with id {0}")]
    NotFound(String),

    /// Scoring would divide by zero (empty corpus, or zero total length).
    #[error("degenerate corpus: {0}")]
    DivisionDegenerate(String),
}
