//! JSONL corpus loading and the document record accessors.

use std::borrow::Cow;
use std::io::{BufRead, BufReader};
use std::path::Path;

use serde_json::{Map, Value};
use tracing::info;

use crate::json::to_ascii_pretty;

use relis_core::{Error, Result};

pub const ANSWER_FIELD: &str = "Answer";
pub const LANGUAGE_FIELD: &str = "Language";
pub const PUBLISHED_FIELD: &str = "Published";

/// One corpus record. Only `Answer`, `Language` and `Published` are
/// interpreted; every other field is carried through untouched.
#[derive(Debug, Clone, PartialEq)]
pub struct Document {
    fields: Map<String, Value>,
}

impl Document {
    pub fn new(fields: Map<String, Value>) -> Self {
        Self { fields }
    }

    /// Answer text. Missing or non-string values read as empty.
    pub fn answer(&self) -> &str {
        self.fields
            .get(ANSWER_FIELD)
            .and_then(|v| v.as_str())
            .unwrap_or("")
    }

    /// Answer length in characters.
    pub fn answer_len(&self) -> usize {
        self.answer().chars().count()
    }

    /// Language value if the field is present. Non-string values are
    /// returned as their compact JSON text, so `null` stays countable.
    pub fn language(&self) -> Option<Cow<'_, str>> {
        self.fields.get(LANGUAGE_FIELD).map(|v| match v {
            Value::String(s) => Cow::Borrowed(s.as_str()),
            other => Cow::Owned(other.to_string()),
        })
    }

    /// Raw `Published` string, if present and a string.
    pub fn published(&self) -> Option<&str> {
        self.fields.get(PUBLISHED_FIELD).and_then(|v| v.as_str())
    }

    pub fn fields(&self) -> &Map<String, Value> {
        &self.fields
    }

    /// Pretty-printed JSON, keys in their original order, non-ASCII
    /// characters escaped.
    pub fn to_pretty_json(&self) -> String {
        to_ascii_pretty(&self.fields).unwrap_or_else(|_| "{}".to_string())
    }
}

/// The full record set for one run, in file line order.
#[derive(Debug, Clone, Default)]
pub struct Corpus {
    documents: Vec<Document>,
}

impl Corpus {
    pub fn from_documents(documents: Vec<Document>) -> Self {
        Self { documents }
    }

    /// Read a JSONL file. Any line that is not a JSON object aborts the load.
    pub fn load(path: &Path) -> Result<Self> {
        let file = std::fs::File::open(path)?;
        let corpus = Self::from_reader(BufReader::new(file))?;
        info!("Loaded {} documents from {}", corpus.len(), path.display());
        Ok(corpus)
    }

    /// Parse JSONL from any reader. Blank lines are skipped; line numbers
    /// in errors are 1-based and count blank lines.
    pub fn from_reader<R: BufRead>(reader: R) -> Result<Self> {
        let mut documents = Vec::new();

        for (idx, line) in reader.lines().enumerate() {
            let line = line?;
            let trimmed = line.trim();
            if trimmed.is_empty() {
                continue;
            }

            let value: Value = serde_json::from_str(trimmed).map_err(|e| Error::Corpus {
                line: idx + 1,
                message: e.to_string(),
            })?;

            match value {
                Value::Object(fields) => documents.push(Document::new(fields)),
                other => {
                    return Err(Error::Corpus {
                        line: idx + 1,
                        message: format!("expected a JSON object, found {}", json_kind(&other)),
                    })
                }
            }
        }

        Ok(Self { documents })
    }

    pub fn len(&self) -> usize {
        self.documents.len()
    }

    pub fn is_empty(&self) -> bool {
        self.documents.is_empty()
    }

    pub fn documents(&self) -> &[Document] {
        &self.documents
    }

    pub fn iter(&self) -> std::slice::Iter<'_, Document> {
        self.documents.iter()
    }
}

fn json_kind(value: &Value) -> &'static str {
    match value {
        Value::Null => "null",
        Value::Bool(_) => "a boolean",
        Value::Number(_) => "a number",
        Value::String(_) => "a string",
        Value::Array(_) => "an array",
        Value::Object(_) => "an object",
    }
}

/// Build a document from a `json!` object literal.
#[cfg(test)]
pub(crate) fn doc(value: Value) -> Document {
    match value {
        Value::Object(fields) => Document::new(fields),
        _ => panic!("test document must be a JSON object"),
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;
    use std::io::Cursor;

    #[test]
    fn test_from_reader_keeps_order() {
        let input = "{\"Answer\": \"a\"}\n\n{\"Answer\": \"bb\"}\n   \n{\"Answer\": \"ccc\"}\n";
        let corpus = Corpus::from_reader(Cursor::new(input)).unwrap();
        let lengths: Vec<usize> = corpus.iter().map(|d| d.answer_len()).collect();
        assert_eq!(lengths, vec![1, 2, 3]);
    }

    #[test]
    fn test_invalid_json_names_line() {
        let input = "{\"Answer\": \"ok\"}\n{not json}\n";
        match Corpus::from_reader(Cursor::new(input)) {
            Err(Error::Corpus { line, .. }) => assert_eq!(line, 2),
            other => panic!("expected corpus error, got {:?}", other),
        }
    }

    #[test]
    fn test_non_object_line_rejected() {
        let input = "{\"Answer\": \"ok\"}\n\n[1, 2]\n";
        match Corpus::from_reader(Cursor::new(input)) {
            Err(Error::Corpus { line, message }) => {
                assert_eq!(line, 3);
                assert!(message.contains("array"));
            }
            other => panic!("expected corpus error, got {:?}", other),
        }
    }

    #[test]
    fn test_load_missing_file() {
        let dir = tempfile::tempdir().unwrap();
        let result = Corpus::load(&dir.path().join("absent.jsonl"));
        assert!(matches!(result, Err(Error::Io(_))));
    }

    #[test]
    fn test_load_file() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("q&a.jsonl");
        std::fs::write(&path, "{\"Answer\": \"x\"}\n{\"Answer\": \"y\"}\n").unwrap();
        assert_eq!(Corpus::load(&path).unwrap().len(), 2);
    }

    #[test]
    fn test_answer_length_counts_chars() {
        let d = doc(json!({"Answer": "día"}));
        assert_eq!(d.answer_len(), 3);
    }

    #[test]
    fn test_missing_and_non_string_answer() {
        assert_eq!(doc(json!({})).answer_len(), 0);
        assert_eq!(doc(json!({"Answer": 42})).answer_len(), 0);
    }

    #[test]
    fn test_language_accessor() {
        assert_eq!(doc(json!({"Language": "en"})).language().as_deref(), Some("en"));
        assert_eq!(doc(json!({"Language": null})).language().as_deref(), Some("null"));
        assert_eq!(doc(json!({"Answer": "x"})).language(), None);
    }

    #[test]
    fn test_pretty_json_escapes_non_ascii() {
        let d = doc(json!({"Language": "es", "Answer": "día"}));
        assert_eq!(
            d.to_pretty_json(),
            "{\n  \"Language\": \"es\",\n  \"Answer\": \"d\\u00eda\"\n}"
        );
    }

    #[test]
    fn test_pretty_json_preserves_key_order() {
        let d = doc(json!({"Question": "q", "Answer": "a", "Id": 7}));
        let pretty = d.to_pretty_json();
        let q = pretty.find("Question").unwrap();
        let a = pretty.find("Answer").unwrap();
        let i = pretty.find("Id").unwrap();
        assert!(q < a && a < i);
        assert!(pretty.contains("\n  \"Answer\": \"a\""));
    }
}
