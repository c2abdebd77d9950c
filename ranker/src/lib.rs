use std::collections::HashSet;
use std::fmt::Write as _;
use std::fs;
use std::path::{Path, PathBuf};

use anyhow::{bail, Context, Result};
use core::tokenizer::{load_stop_words, Algorithm, SnowballStemmer};
use core::{ingest, rank, weighting, Corpus, RankedResult, SplitRule, Term, TermStats};
use walkdir::WalkDir;

/// A built corpus plus everything needed to answer queries against it. The
/// corpus and its statistics are frozen once the session is open.
pub struct Session {
    corpus: Corpus,
    stats: TermStats,
    stop_words: HashSet<String>,
    stemmer: SnowballStemmer,
    split: SplitRule,
}

impl Session {
    /// Read the document directory and stop-word file, then build the corpus
    /// and its document-frequency table once.
    pub fn open(
        docs_dir: &Path,
        stop_words_path: &Path,
        stemmer: SnowballStemmer,
        split: SplitRule,
    ) -> Result<Self> {
        let stop_words = load_stop_words(stop_words_path)?;
        let raw_docs = read_raw_documents(docs_dir)?;
        if raw_docs.is_empty() {
            bail!("no XML documents found under {}", docs_dir.display());
        }

        let name = docs_dir
            .file_name()
            .and_then(|name| name.to_str())
            .unwrap_or("corpus")
            .to_string();
        let corpus = ingest::build_corpus(&name, &raw_docs, &stop_words, &stemmer)?;
        let stats = TermStats::build(&corpus);

        Ok(Self {
            corpus,
            stats,
            stop_words,
            stemmer,
            split,
        })
    }

    pub fn corpus(&self) -> &Corpus {
        &self.corpus
    }

    /// Rank the corpus against a free-text query.
    pub fn query(&self, text: &str) -> Result<RankedResult> {
        let terms = ingest::prepare_query(text, &self.stop_words, &self.stemmer);
        self.query_terms(&terms)
    }

    /// Rank the corpus against an already-prepared term sequence.
    pub fn query_terms(&self, terms: &[Term]) -> Result<RankedResult> {
        let scores = weighting::score_bm25(&self.corpus, &self.stats, terms)?;
        Ok(rank::rank_and_split(&scores, self.split))
    }

    /// Top corpus terms by mean normalized tf-idf weight.
    pub fn optimal_query(&self, num_terms: usize) -> Result<Vec<Term>> {
        let scores = weighting::score_tfidf(&self.corpus, &self.stats)?;
        Ok(rank::sort_descending(&scores)
            .into_iter()
            .take(num_terms)
            .map(|scored| scored.item)
            .collect())
    }

    /// One-line diagnostics for a single document.
    pub fn document_info(&self, doc_id: &str) -> Result<String> {
        let doc = self.corpus.find_by_id(doc_id)?;
        Ok(format!(
            "document {} contains {} terms and {} words",
            doc.doc_id(),
            doc.num_terms(),
            doc.num_words()
        ))
    }

    /// Corpus summary for the prompt loop.
    pub fn corpus_info(&self) -> String {
        let avg = self
            .corpus
            .avg_doc_length()
            .map(|avg| format!("{avg:.1}"))
            .unwrap_or_else(|_| "n/a".to_string());
        format!(
            "corpus {}: {} documents, {} term occurrences, avg length {}",
            self.corpus.name(),
            self.corpus.len(),
            self.corpus.total_term_count(),
            avg
        )
    }
}

/// Resolve the stemmer algorithm named on the command line. Resolved once
/// at startup; the engine only ever sees the injected capability.
pub fn resolve_stemmer(name: &str) -> Result<SnowballStemmer> {
    match name {
        "english" => Ok(SnowballStemmer::new(Algorithm::English)),
        "porter" => Ok(SnowballStemmer::new(Algorithm::Porter)),
        other => bail!("unknown stemmer algorithm {other:?} (expected english or porter)"),
    }
}

/// Collect raw XML document strings under `dir` in path order, skipping
/// hidden files and resource-fork artifacts.
pub fn read_raw_documents(dir: &Path) -> Result<Vec<String>> {
    let mut paths: Vec<PathBuf> = Vec::new();
    for entry in WalkDir::new(dir).into_iter().filter_map(|entry| entry.ok()) {
        let path = entry.path();
        if !path.is_file() {
            continue;
        }
        let file_name = entry.file_name().to_string_lossy();
        if file_name.starts_with('.') || file_name.starts_with("._") {
            continue;
        }
        if path.extension().and_then(|ext| ext.to_str()) != Some("xml") {
            continue;
        }
        paths.push(path.to_path_buf());
    }
    paths.sort();

    let mut raw_docs = Vec::with_capacity(paths.len());
    for path in &paths {
        let raw = fs::read_to_string(path)
            .with_context(|| format!("reading {}", path.display()))?;
        raw_docs.push(raw);
    }
    Ok(raw_docs)
}

/// Render the two-bucket table. Rank numbers continue from the positive
/// bucket into the negative one.
pub fn format_result(result: &RankedResult) -> String {
    let mut out = String::new();
    let mut rank = 1usize;
    out.push_str("D+\nrank\tdoc\tweight\n");
    for scored in &result.positive {
        let _ = writeln!(out, "{rank}\t{}\t{:.4}", scored.item, scored.weight);
        rank += 1;
    }
    out.push_str("\nD-\nrank\tdoc\tweight\n");
    for scored in &result.negative {
        let _ = writeln!(out, "{rank}\t{}\t{:.4}", scored.item, scored.weight);
        rank += 1;
    }
    out
}
