//! Purpose: End-to-end tests for the fetch -> filter -> persist pipeline over loopback HTTP.
//! Exports: None (integration test module).
//! Role: Validate output files, failure isolation, and rerun stability against a canned source.
//! Invariants: Uses a loopback-only fixture server and temp output directories.
//! Invariants: The fixture answers a fixed number of requests, then stops accepting.

use five_letter_words::{DictionaryExtractor, ExtractorConfig, error_chain};
use serde_json::Value;
use std::collections::HashSet;
use std::fs;
use std::io::{BufRead, BufReader, Write};
use std::net::{TcpListener, TcpStream};
use std::path::{Path, PathBuf};
use std::thread;

type TestResult<T> = Result<T, Box<dyn std::error::Error>>;

struct FixtureServer {
    base_url: String,
}

impl FixtureServer {
    fn start(status: &'static str, body: impl Into<String>, requests: usize) -> TestResult<Self> {
        let listener = TcpListener::bind("127.0.0.1:0")?;
        let base_url = format!("http://{}", listener.local_addr()?);
        let body = body.into();
        thread::spawn(move || {
            for stream in listener.incoming().take(requests).flatten() {
                let _ = respond(stream, status, &body);
            }
        });
        Ok(Self { base_url })
    }

    fn url(&self) -> String {
        format!("{}/words_dictionary.json", self.base_url)
    }
}

fn respond(mut stream: TcpStream, status: &str, body: &str) -> std::io::Result<()> {
    let mut reader = BufReader::new(stream.try_clone()?);
    let mut line = String::new();
    loop {
        line.clear();
        if reader.read_line(&mut line)? == 0 || line == "\r\n" {
            break;
        }
    }
    write!(
        stream,
        "HTTP/1.1 {status}\r\nContent-Type: application/json\r\nContent-Length: {}\r\nConnection: close\r\n\r\n{body}",
        body.len()
    )?;
    stream.flush()
}

fn closed_port_url() -> TestResult<String> {
    let listener = TcpListener::bind("127.0.0.1:0")?;
    let addr = listener.local_addr()?;
    drop(listener);
    Ok(format!("http://{addr}/words_dictionary.json"))
}

struct Outputs {
    _dir: tempfile::TempDir,
    list: PathBuf,
    set: PathBuf,
}

impl Outputs {
    fn new() -> TestResult<Self> {
        let dir = tempfile::tempdir()?;
        let list = dir.path().join("five-letter-words.json");
        let set = dir.path().join("five-letter-words-dict.json");
        Ok(Self {
            _dir: dir,
            list,
            set,
        })
    }

    fn extractor(&self, url: &str) -> DictionaryExtractor {
        DictionaryExtractor::new(
            ExtractorConfig::default()
                .with_source_url(url)
                .with_output_paths(&self.list, &self.set),
        )
    }
}

fn read_json(path: &Path) -> TestResult<Value> {
    Ok(serde_json::from_str(&fs::read_to_string(path)?)?)
}

#[test]
fn concrete_source_produces_both_files() -> TestResult<()> {
    let server = FixtureServer::start("200 OK", r#"{"apple":1,"at":1,"toast":1,"zebra":1}"#, 1)?;
    let outputs = Outputs::new()?;

    let summary = outputs.extractor(&server.url()).run()?;
    assert_eq!(summary.source_words, 4);
    assert_eq!(summary.selected_words, 3);

    assert_eq!(
        fs::read_to_string(&outputs.list)?,
        "[\n    \"apple\",\n    \"toast\",\n    \"zebra\"\n]"
    );
    assert_eq!(
        fs::read_to_string(&outputs.set)?,
        "{\n    \"apple\": 1,\n    \"toast\": 1,\n    \"zebra\": 1\n}"
    );
    Ok(())
}

#[test]
fn outputs_agree_on_length_keys_and_values() -> TestResult<()> {
    let body = r#"{"a":1,"abaca":1,"aback":1,"abacus":1,"abaft":1,"Zulus":1,"zyme":1,"émigré":1,"étude":1}"#;
    let server = FixtureServer::start("200 OK", body, 1)?;
    let outputs = Outputs::new()?;
    outputs.extractor(&server.url()).run()?;

    let list = read_json(&outputs.list)?;
    let set = read_json(&outputs.set)?;
    let words: Vec<&str> = list
        .as_array()
        .ok_or("list is not an array")?
        .iter()
        .map(|word| word.as_str().ok_or("word is not a string"))
        .collect::<Result<_, _>>()?;
    let object = set.as_object().ok_or("set is not an object")?;

    assert_eq!(words, ["abaca", "aback", "abaft", "Zulus", "étude"]);
    assert!(words.iter().all(|word| word.chars().count() == 5));

    let list_keys: HashSet<&str> = words.iter().copied().collect();
    let set_keys: HashSet<&str> = object.keys().map(String::as_str).collect();
    assert_eq!(list_keys.len(), words.len());
    assert_eq!(list_keys, set_keys);
    assert!(object.values().all(|value| value == &Value::from(1)));

    assert!(fs::read_to_string(&outputs.list)?.contains("\\u00e9tude"));
    Ok(())
}

#[test]
fn empty_source_writes_empty_documents() -> TestResult<()> {
    let server = FixtureServer::start("200 OK", "{}", 1)?;
    let outputs = Outputs::new()?;

    let summary = outputs.extractor(&server.url()).run()?;
    assert_eq!(summary.selected_words, 0);
    assert_eq!(fs::read_to_string(&outputs.list)?, "[]");
    assert_eq!(fs::read_to_string(&outputs.set)?, "{}");
    Ok(())
}

#[test]
fn connection_refused_creates_no_files() -> TestResult<()> {
    let outputs = Outputs::new()?;
    let url = closed_port_url()?;

    let err = outputs
        .extractor(&url)
        .run()
        .expect_err("fetch should fail");
    assert_eq!(err.message(), Some("request failed"));
    assert!(error_chain(&err).starts_with("data acquisition failed: request failed"));
    assert!(!outputs.list.exists());
    assert!(!outputs.set.exists());
    Ok(())
}

#[test]
fn failed_fetch_leaves_existing_files_untouched() -> TestResult<()> {
    let server = FixtureServer::start("404 Not Found", "404: Not Found", 1)?;
    let outputs = Outputs::new()?;
    fs::write(&outputs.list, "[\"older\"]")?;
    fs::write(&outputs.set, "{\"older\": 1}")?;

    let err = outputs
        .extractor(&server.url())
        .run()
        .expect_err("status should fail");
    assert_eq!(err.message(), Some("remote returned status 404"));
    assert_eq!(fs::read_to_string(&outputs.list)?, "[\"older\"]");
    assert_eq!(fs::read_to_string(&outputs.set)?, "{\"older\": 1}");
    Ok(())
}

#[test]
fn malformed_body_creates_no_files() -> TestResult<()> {
    let server = FixtureServer::start("200 OK", "<html>not json</html>", 1)?;
    let outputs = Outputs::new()?;

    let err = outputs
        .extractor(&server.url())
        .run()
        .expect_err("decode should fail");
    assert!(
        err.message()
            .ok_or("missing message")?
            .contains("parse category: syntax")
    );
    assert!(!outputs.list.exists());
    assert!(!outputs.set.exists());
    Ok(())
}

#[test]
fn array_root_is_a_decode_failure() -> TestResult<()> {
    let server = FixtureServer::start("200 OK", r#"["apple","toast"]"#, 1)?;
    let outputs = Outputs::new()?;

    assert!(outputs.extractor(&server.url()).run().is_err());
    assert!(!outputs.list.exists());
    Ok(())
}

#[test]
fn reruns_are_byte_identical() -> TestResult<()> {
    let body = r#"{"zebra":1,"apple":1,"kayak":1,"ox":1,"naïve":1}"#;
    let server = FixtureServer::start("200 OK", body, 2)?;
    let outputs = Outputs::new()?;
    let extractor = outputs.extractor(&server.url());

    extractor.run()?;
    let first = (fs::read(&outputs.list)?, fs::read(&outputs.set)?);
    extractor.run()?;
    let second = (fs::read(&outputs.list)?, fs::read(&outputs.set)?);

    assert_eq!(first, second);
    Ok(())
}
