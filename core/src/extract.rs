//! Regex extraction of the two fields the engine reads from a raw XML
//! document: the `<text>` region and the numeric `itemid`.

use lazy_static::lazy_static;
use regex::Regex;

use crate::RankError;

lazy_static! {
    static ref TEXT_RE: Regex = Regex::new(r"(?s)<text>(.*)</text>").expect("valid regex");
    static ref PARA_RE: Regex = Regex::new("</?p>").expect("valid regex");
    static ref ID_RE: Regex = Regex::new(r#"itemid="([0-9]+)""#).expect("valid regex");
}

/// Content between the document's `<text>` markers with inner paragraph
/// markers stripped.
pub fn extract_text(raw: &str) -> Result<String, RankError> {
    let section = TEXT_RE
        .captures(raw)
        .and_then(|caps| caps.get(1))
        .ok_or_else(|| RankError::MalformedInput("no <text> section".to_string()))?;
    Ok(PARA_RE.replace_all(section.as_str(), "").into_owned())
}

/// The numeric `itemid` attribute value.
pub fn extract_id(raw: &str) -> Result<String, RankError> {
    ID_RE
        .captures(raw)
        .and_then(|caps| caps.get(1))
        .map(|m| m.as_str().to_string())
        .ok_or_else(|| RankError::MalformedInput("no itemid attribute".to_string()))
}

#[cfg(test)]
mod tests {
    use super::*;

    const RAW: &str = r#"<newsitem itemid="2286" date="1996-08-20">
<title>Recovery excitement</title>
<text>
<p>Andy Murray came back strong.</p>
<p>The crowd cheered.</p>
</text>
</newsitem>"#;

    #[test]
    fn extracts_id() {
        assert_eq!(extract_id(RAW).unwrap(), "2286");
    }

    #[test]
    fn extracts_text_and_strips_paragraph_tags() {
        let text = extract_text(RAW).unwrap();
        assert!(text.contains("Andy Murray came back strong."));
        assert!(text.contains("The crowd cheered."));
        assert!(!text.contains("<p>"));
        assert!(!text.contains("</p>"));
    }

    #[test]
    fn missing_id_is_malformed() {
        let err = extract_id("<newsitem><text>x</text></newsitem>").unwrap_err();
        assert!(matches!(err, RankError::MalformedInput(_)));
    }

    #[test]
    fn missing_text_is_malformed() {
        let err = extract_text(r#"<newsitem itemid="1"></newsitem>"#).unwrap_err();
        assert!(matches!(err, RankError::MalformedInput(_)));
    }
}
