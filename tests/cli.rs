use std::path::Path;
use std::process::{Command, Output};

fn kmeans2d(dir: &Path, args: &[&str]) -> Output {
    Command::new(env!("CARGO_BIN_EXE_kmeans2d"))
        .args(args)
        .current_dir(dir)
        .env_remove("RUST_LOG")
        .output()
        .unwrap()
}

fn assert_failed(out: &Output, dir: &Path, expected: &str) {
    let stderr = String::from_utf8_lossy(&out.stderr);
    assert_eq!(out.status.code(), Some(1), "stderr: {}", stderr);
    assert_eq!(stderr.lines().count(), 1, "stderr: {}", stderr);
    assert!(stderr.starts_with("Error: "), "stderr: {}", stderr);
    assert!(stderr.contains(expected), "stderr: {}", stderr);
    assert!(out.stdout.is_empty());
    assert!(!dir.join("output.txt").exists());
}

fn write_input(dir: &Path) {
    std::fs::write(dir.join("input.txt"), "0 0\n0 1\n\nnot a point\n10 10\n10 11\n").unwrap();
}

#[test]
fn clusters_input_into_output_file() {
    let dir = tempfile::tempdir().unwrap();
    write_input(dir.path());

    let out = kmeans2d(dir.path(), &["2", "input.txt", "--seed", "42"]);
    assert_eq!(out.status.code(), Some(0));
    assert_eq!(
        String::from_utf8_lossy(&out.stdout).trim_end(),
        "Clustering complete. Output written to output.txt"
    );
    assert!(out.stderr.is_empty());

    let written = std::fs::read_to_string(dir.path().join("output.txt")).unwrap();
    let mut rows: Vec<(String, String, usize)> = written.lines()
        .map(|l| {
            let f: Vec<_> = l.split('\t').collect();
            assert_eq!(f.len(), 3, "line {:?}", l);
            (f[0].to_string(), f[1].to_string(), f[2].parse().unwrap())
        })
        .collect();
    rows.sort();
    assert_eq!(rows.len(), 4);
    assert_eq!((rows[0].0.as_str(), rows[0].1.as_str()), ("0", "0"));
    assert_eq!(rows[0].2, rows[1].2);
    assert_eq!(rows[2].2, rows[3].2);
    assert_ne!(rows[0].2, rows[2].2);
    assert!(rows.iter().all(|r| r.2 == 1 || r.2 == 2));
}

#[test]
fn custom_output_path() {
    let dir = tempfile::tempdir().unwrap();
    write_input(dir.path());

    let out = kmeans2d(dir.path(), &["1", "input.txt", "-o", "clusters.txt"]);
    assert_eq!(out.status.code(), Some(0));
    assert!(String::from_utf8_lossy(&out.stdout).contains("clusters.txt"));
    let written = std::fs::read_to_string(dir.path().join("clusters.txt")).unwrap();
    assert_eq!(written.lines().count(), 4);
    assert!(written.lines().all(|l| l.ends_with("\t1")));
    assert!(!dir.path().join("output.txt").exists());
}

#[test]
fn k_is_validated_before_reading_input() {
    let dir = tempfile::tempdir().unwrap();
    // the input file does not exist, yet the diagnostic is about k
    let out = kmeans2d(dir.path(), &["0", "missing.txt"]);
    assert_failed(&out, dir.path(), "invalid parameter k");

    let out = kmeans2d(dir.path(), &["-3", "missing.txt"]);
    assert_failed(&out, dir.path(), "invalid parameter k");
}

#[test]
fn more_clusters_than_points() {
    let dir = tempfile::tempdir().unwrap();
    write_input(dir.path());
    let out = kmeans2d(dir.path(), &["5", "input.txt"]);
    assert_failed(&out, dir.path(), "less than k");
}

#[test]
fn missing_input_file() {
    let dir = tempfile::tempdir().unwrap();
    let out = kmeans2d(dir.path(), &["2", "missing.txt"]);
    assert_failed(&out, dir.path(), "unable to open input file");
}

#[test]
fn unwritable_output_file() {
    let dir = tempfile::tempdir().unwrap();
    write_input(dir.path());
    let out = kmeans2d(dir.path(), &["2", "input.txt", "-o", "no-such-dir/output.txt"]);
    assert_failed(&out, dir.path(), "unable to write output file");
}
