//! Ranking engine: bag-of-words documents, corpus-wide term statistics,
//! TF-IDF and BM25 weighting, and score-based relevance classification.

pub mod corpus;
pub mod document;
pub mod extract;
pub mod ingest;
pub mod rank;
pub mod stats;
pub mod tokenizer;
pub mod weighting;

mod error;

pub use corpus::Corpus;
pub use document::Document;
pub use error::RankError;
pub use rank::{RankedResult, ScoreMap, ScoredItem, SplitRule};
pub use stats::TermStats;

/// A normalized (lower-cased, stemmed, alphabetic-only) token.
pub type Term = String;
