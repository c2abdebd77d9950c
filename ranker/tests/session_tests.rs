use std::fs;
use std::path::Path;

use core::SplitRule;
use ranker::{read_raw_documents, resolve_stemmer, Session};
use tempfile::tempdir;

fn write_doc(dir: &Path, name: &str, itemid: &str, body: &str) {
    let raw = format!(
        "<newsitem itemid=\"{itemid}\" date=\"1996-08-20\">\n\
         <title>sample</title>\n\
         <text>\n<p>{body}</p>\n</text>\n\
         </newsitem>\n"
    );
    fs::write(dir.join(name), raw).unwrap();
}

fn build_fixture(dir: &Path) -> std::path::PathBuf {
    let docs = dir.join("docs");
    fs::create_dir_all(&docs).unwrap();
    write_doc(&docs, "a.xml", "1001", "cats cats cats chase mice");
    write_doc(&docs, "b.xml", "1002", "dogs chase cars");
    write_doc(&docs, "c.xml", "1003", "fish swim in rivers");
    write_doc(&docs, "d.xml", "1004", "rats hide in barns");
    let stop_words = dir.join("stopwords.txt");
    fs::write(&stop_words, "the,in,from,a").unwrap();
    docs
}

fn open_session(dir: &Path, split: SplitRule) -> Session {
    let docs = build_fixture(dir);
    Session::open(
        &docs,
        &dir.join("stopwords.txt"),
        resolve_stemmer("english").unwrap(),
        split,
    )
    .unwrap()
}

#[test]
fn session_ranks_and_partitions() {
    let dir = tempdir().unwrap();
    let session = open_session(dir.path(), SplitRule::TopFraction(0.25));
    assert_eq!(session.corpus().len(), 4);

    let result = session.query("cats").unwrap();
    assert_eq!(result.positive.len(), 1);
    assert_eq!(result.positive[0].item, "1001");
    assert!(result.positive[0].weight > 0.0);
    assert_eq!(result.negative.len(), 3);
}

#[test]
fn stopword_only_queries_still_partition() {
    let dir = tempdir().unwrap();
    let session = open_session(dir.path(), SplitRule::Threshold(2.2));

    let result = session.query("the in from").unwrap();
    // Nothing survives the pipeline, so every document scores zero and
    // lands in the negative bucket.
    assert!(result.positive.is_empty());
    assert_eq!(result.negative.len(), 4);
}

#[test]
fn malformed_documents_are_skipped() {
    let dir = tempdir().unwrap();
    let docs = build_fixture(dir.path());
    fs::write(
        docs.join("broken.xml"),
        "<newsitem><text>no itemid anywhere</text></newsitem>",
    )
    .unwrap();

    let session = Session::open(
        &docs,
        &dir.path().join("stopwords.txt"),
        resolve_stemmer("english").unwrap(),
        SplitRule::default(),
    )
    .unwrap();
    assert_eq!(session.corpus().len(), 4);
}

#[test]
fn duplicate_ids_fail_the_session() {
    let dir = tempdir().unwrap();
    let docs = build_fixture(dir.path());
    write_doc(&docs, "e.xml", "1001", "an impostor");

    let result = Session::open(
        &docs,
        &dir.path().join("stopwords.txt"),
        resolve_stemmer("english").unwrap(),
        SplitRule::default(),
    );
    assert!(result.is_err());
}

#[test]
fn optimal_query_has_the_requested_length() {
    let dir = tempdir().unwrap();
    let session = open_session(dir.path(), SplitRule::default());

    let terms = session.optimal_query(3).unwrap();
    assert_eq!(terms.len(), 3);
    assert!(terms.iter().all(|term| !term.is_empty()));

    // Running the derived query ranks without error.
    let result = session.query_terms(&terms).unwrap();
    assert_eq!(result.positive.len() + result.negative.len(), 4);
}

#[test]
fn document_info_resolves_ids() {
    let dir = tempdir().unwrap();
    let session = open_session(dir.path(), SplitRule::default());

    let info = session.document_info("1001").unwrap();
    assert!(info.contains("1001"));
    assert!(session.document_info("9999").is_err());
}

#[test]
fn reader_skips_non_xml_and_hidden_files() {
    let dir = tempdir().unwrap();
    let docs = build_fixture(dir.path());
    fs::write(docs.join("notes.txt"), "not a document").unwrap();
    fs::write(docs.join("._a.xml"), "resource fork junk").unwrap();

    let raw_docs = read_raw_documents(&docs).unwrap();
    assert_eq!(raw_docs.len(), 4);
}

#[test]
fn unknown_stemmer_names_are_rejected() {
    assert!(resolve_stemmer("english").is_ok());
    assert!(resolve_stemmer("porter").is_ok());
    assert!(resolve_stemmer("klingon").is_err());
}
