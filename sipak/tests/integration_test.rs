use std::fs::File;
use std::io::Write;
use std::path::Path;

use pretty_assertions::assert_eq;
use sipak::archive::SiqOperations;
use sipak::converter::convert_siq;
use sipak::error::Error;
use tempfile::tempdir;
use zip::write::SimpleFileOptions;

const CONTENT_XML: &str = r#"<?xml version="1.0" encoding="utf-8"?>
<package id="night-quiz" name="Night Quiz" version="4" difficulty="5" restriction="" date="02.11.2024">
  <info>
    <authors>
      <author>Ada</author>
    </authors>
  </info>
  <rounds>
    <round name="Round 1">
      <themes>
        <theme name="History">
          <questions>
            <question price="100">
              <scenario>
                <atom>Who built it?</atom>
              </scenario>
              <right>
                <answer>Nobody</answer>
              </right>
            </question>
            <question price="200">
              <scenario>
                <atom>Listen closely</atom>
                <atom type="voice">@Audio/bark.mp3</atom>
              </scenario>
              <right>
                <answer>A dog</answer>
              </right>
            </question>
          </questions>
        </theme>
      </themes>
    </round>
  </rounds>
</package>
"#;

fn build_package(path: &Path, entries: &[(&str, &[u8])]) {
    let file = File::create(path).unwrap();
    let mut zip = zip::ZipWriter::new(file);
    let options = SimpleFileOptions::default();
    for (name, bytes) in entries {
        zip.start_file(*name, options).unwrap();
        zip.write_all(bytes).unwrap();
    }
    zip.finish().unwrap();
}

#[test]
fn test_convert_pipeline() {
    let dir = tempdir().unwrap();
    build_package(
        &dir.path().join("pack.siq"),
        &[
            ("content.xml", CONTENT_XML.as_bytes()),
            ("[Content_Types].xml", b"<Types/>"),
            ("Texts/authors.xml", b"<Authors/>"),
            ("Audio/bark.mp3", b"not really audio"),
            ("Images/my%20dog.png", b"not really a png"),
        ],
    );

    // No extension on purpose; .siq is appended during resolution
    let outcome = convert_siq(dir.path().join("pack")).unwrap();

    // Renamed after the package id, not the input filename
    let output_dir = dir.path().join("night-quiz");
    assert_eq!(outcome.output_dir, output_dir);
    assert!(outcome.warnings.is_empty());

    // Housekeeping artifacts are gone, media stayed in place
    assert!(!output_dir.join("content.xml").exists());
    assert!(!output_dir.join("[Content_Types].xml").exists());
    assert!(!output_dir.join("Texts").exists());
    assert_eq!(
        std::fs::read(output_dir.join("Audio/bark.mp3")).unwrap(),
        b"not really audio"
    );
    // Percent-encoded entry name was recovered during extraction
    assert_eq!(
        std::fs::read(output_dir.join("Images/my dog.png")).unwrap(),
        b"not really a png"
    );

    let json = std::fs::read_to_string(output_dir.join("scenario.json")).unwrap();
    let value: serde_json::Value = serde_json::from_str(&json).unwrap();
    assert_eq!(value["id"], "night-quiz");
    assert_eq!(value["name"], "Night Quiz");
    assert_eq!(value["metadata"]["createdBy"], serde_json::json!(["Ada"]));

    let questions = &value["rounds"][0]["themes"][0]["questions"];
    assert_eq!(questions[0]["points"], 100);
    assert_eq!(questions[0]["mode"], "default");
    assert_eq!(questions[0]["type"], "plain");
    assert_eq!(questions[0]["task"]["text"], "Who built it?");
    assert_eq!(questions[1]["type"], "media");
    assert_eq!(
        questions[1]["task"]["sounds"],
        serde_json::json!(["Audio/bark.mp3"])
    );
}

#[test]
fn test_extraction_mirrors_entries() {
    let dir = tempdir().unwrap();
    let entries: &[(&str, &[u8])] = &[
        ("content.xml", b"<package/>"),
        ("Images/dog.png", b"\x89PNG"),
        ("Images/deep/cat.png", b"\x89PNG too"),
    ];
    build_package(&dir.path().join("pack.siq"), entries);

    let out = dir.path().join("out");
    SiqOperations::extract(dir.path().join("pack.siq"), out.clone()).unwrap();

    for (name, bytes) in entries {
        assert_eq!(std::fs::read(out.join(name)).unwrap(), *bytes, "{name}");
    }

    let listed = SiqOperations::list(dir.path().join("pack.siq")).unwrap();
    let expected: Vec<String> = entries.iter().map(|(name, _)| (*name).to_string()).collect();
    assert_eq!(listed, expected);
}

#[test]
fn test_precondition_errors() {
    let dir = tempdir().unwrap();
    std::fs::write(dir.path().join("pack.zip"), b"").unwrap();

    // Wrong extension is rejected even though the file exists
    let err = convert_siq(dir.path().join("pack.zip")).unwrap_err();
    assert!(matches!(err, Error::UnsupportedExtension { .. }));

    let err = convert_siq(dir.path().join("missing.siq")).unwrap_err();
    assert!(matches!(err, Error::PackageNotFound { .. }));
}

#[test]
fn test_mapping_error_aborts_run() {
    let dir = tempdir().unwrap();
    let bad_content = r#"<package id="p" name="n"><rounds><round name="r"><themes><theme name="t"><questions>
        <question price="lots"><scenario><atom>Q</atom></scenario></question>
    </questions></theme></themes></round></rounds></package>"#;
    build_package(
        &dir.path().join("bad.siq"),
        &[("content.xml", bad_content.as_bytes())],
    );

    let err = convert_siq(dir.path().join("bad.siq")).unwrap_err();
    assert!(matches!(err, Error::InvalidNumber { .. }));

    // Partial output stays on disk, but no scenario.json was produced
    let extract_dir = dir.path().join("bad");
    assert!(extract_dir.is_dir());
    assert!(!extract_dir.join("scenario.json").exists());
}
