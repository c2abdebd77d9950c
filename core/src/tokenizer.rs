use lazy_static::lazy_static;
use regex::Regex;
use unicode_normalization::UnicodeNormalization;

use std::collections::HashSet;
use std::fs;
use std::path::Path;

use anyhow::{Context, Result};

pub use rust_stemmers::Algorithm;

lazy_static! {
    static ref NON_ALPHA: Regex = Regex::new("[^a-z ]").expect("valid regex");
}

/// The single capability the pipeline needs from a stemming library.
/// Callers resolve an algorithm once at startup and inject it; the engine
/// never picks one itself.
pub trait Stemmer {
    fn stem(&self, token: &str) -> String;
}

/// Snowball-backed [`Stemmer`].
pub struct SnowballStemmer {
    inner: rust_stemmers::Stemmer,
}

impl SnowballStemmer {
    pub fn new(algorithm: Algorithm) -> Self {
        Self {
            inner: rust_stemmers::Stemmer::create(algorithm),
        }
    }

    pub fn english() -> Self {
        Self::new(Algorithm::English)
    }
}

impl Stemmer for SnowballStemmer {
    fn stem(&self, token: &str) -> String {
        self.inner.stem(token).into_owned()
    }
}

/// Tokenize already-extracted plain text using NFKC normalization,
/// lower-casing, and an alphabetic-only filter. Literal "quot" escaping
/// artifacts are split off adjacent words so they never glue to them.
/// Empty tokens from consecutive delimiters are dropped.
pub fn tokenize(text: &str) -> Vec<String> {
    let lowered = text.nfkc().collect::<String>().to_lowercase();
    let stripped = NON_ALPHA.replace_all(&lowered, "");
    let respaced = stripped.replace("quot", " quot ");
    respaced.split_whitespace().map(str::to_string).collect()
}

/// Drop every token exactly equal to a stop word. Repeated occurrences are
/// all removed.
pub fn remove_stop_words(stop_words: &HashSet<String>, tokens: Vec<String>) -> Vec<String> {
    tokens
        .into_iter()
        .filter(|token| !stop_words.contains(token))
        .collect()
}

/// Load a flat comma-separated stop-word file.
pub fn load_stop_words<P: AsRef<Path>>(path: P) -> Result<HashSet<String>> {
    let raw = fs::read_to_string(path.as_ref())
        .with_context(|| format!("reading stop words from {}", path.as_ref().display()))?;
    Ok(raw
        .split(',')
        .map(|word| word.trim().to_string())
        .filter(|word| !word.is_empty())
        .collect())
}
