use std::fs;
use std::process::Command;

use seed_docs::{generate_all, Config, SeedError};

fn contains(bytes: &[u8], needle: &str) -> bool {
    bytes
        .windows(needle.len())
        .any(|w| w == needle.as_bytes())
}

#[test]
fn writes_both_documents() {
    let dir = tempfile::tempdir().unwrap();
    let config = Config::default().with_output_dir(dir.path());

    let files = generate_all(&config).unwrap();

    let names: Vec<_> = files
        .iter()
        .map(|f| f.path.file_name().unwrap().to_string_lossy().into_owned())
        .collect();
    assert_eq!(names, ["ipv4.pdf", "ejemplo.pdf"]);
    for file in &files {
        let bytes = fs::read(&file.path).unwrap();
        assert_eq!(bytes.len(), file.bytes);
        assert!(bytes.starts_with(b"%PDF-1.7\n"));
        assert!(bytes.ends_with(b"%%EOF\n"));
        assert!(contains(&bytes, "/Count 1"));
    }

    let ipv4 = fs::read(dir.path().join("ipv4.pdf")).unwrap();
    assert!(contains(&ipv4, "(  Class B: 128.0.0.0 to 191.255.255.255) Tj"));
    let ejemplo = fs::read(dir.path().join("ejemplo.pdf")).unwrap();
    assert!(contains(&ejemplo, "(  4. Cloud systems provide scalability) Tj"));
}

#[test]
fn creates_missing_directories() {
    let dir = tempfile::tempdir().unwrap();
    let nested = dir.path().join("uploads").join("11");
    assert!(!nested.exists());

    generate_all(&Config::default().with_output_dir(&nested)).unwrap();

    assert!(nested.join("ipv4.pdf").is_file());
    assert!(nested.join("ejemplo.pdf").is_file());
}

#[test]
fn rerun_overwrites_with_identical_bytes() {
    let dir = tempfile::tempdir().unwrap();
    let config = Config::default().with_output_dir(dir.path());
    let path = dir.path().join("ipv4.pdf");

    fs::write(&path, b"stale content that is not a PDF").unwrap();
    generate_all(&config).unwrap();
    let first = fs::read(&path).unwrap();
    assert!(first.starts_with(b"%PDF"));

    generate_all(&config).unwrap();
    let second = fs::read(&path).unwrap();
    assert_eq!(first, second);
}

#[test]
fn compressed_output_is_smaller() {
    let plain_dir = tempfile::tempdir().unwrap();
    let packed_dir = tempfile::tempdir().unwrap();
    let plain = generate_all(&Config::default().with_output_dir(plain_dir.path())).unwrap();
    let packed = generate_all(
        &Config::default()
            .with_output_dir(packed_dir.path())
            .with_compression(true),
    )
    .unwrap();

    for (p, c) in plain.iter().zip(&packed) {
        assert!(c.bytes < p.bytes, "{} did not shrink", c.path.display());
    }
}

#[test]
fn output_dir_that_is_a_file_fails() {
    let dir = tempfile::tempdir().unwrap();
    let blocker = dir.path().join("not-a-dir");
    fs::write(&blocker, b"").unwrap();

    let err = generate_all(&Config::default().with_output_dir(&blocker)).unwrap_err();
    assert!(matches!(err, SeedError::CreateDir { .. }), "{err}");
}

#[test]
fn binary_writes_to_default_upload_dir() {
    let dir = tempfile::tempdir().unwrap();
    let output = Command::new(env!("CARGO_BIN_EXE_seed-docs"))
        .current_dir(dir.path())
        .env_remove("SEED_OUTPUT_DIR")
        .output()
        .unwrap();
    assert!(output.status.success());

    let stdout = String::from_utf8(output.stdout).unwrap();
    assert!(stdout.contains("\u{2713} Created: uploads/11/ipv4.pdf"));
    assert!(stdout.contains("\u{2713} Created: uploads/11/ejemplo.pdf"));
    assert!(dir.path().join("uploads/11/ipv4.pdf").is_file());
    assert!(dir.path().join("uploads/11/ejemplo.pdf").is_file());
}

#[test]
fn binary_honours_output_dir_flag() {
    let dir = tempfile::tempdir().unwrap();
    let target = dir.path().join("custom");
    let status = Command::new(env!("CARGO_BIN_EXE_seed-docs"))
        .arg("--output-dir")
        .arg(&target)
        .arg("--compress")
        .status()
        .unwrap();
    assert!(status.success());

    let bytes = fs::read(target.join("ejemplo.pdf")).unwrap();
    assert!(contains(&bytes, "/Filter /FlateDecode"));
}
