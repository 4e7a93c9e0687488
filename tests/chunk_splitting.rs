use std::fs;
use std::path::{Path, PathBuf};

use review_csv_tools::commands::split::{split_file, SplitOptions};
use review_csv_tools::ingestion::csv::read_table_from_path;
use review_csv_tools::ConvertError;

/// Writes `<base>/scripts/reviews.csv` with `rows` data rows and creates `<base>/reviews/nutrix`.
fn layout(rows: usize) -> (tempfile::TempDir, SplitOptions) {
    let base = tempfile::tempdir().unwrap();
    let scripts = base.path().join("scripts");
    fs::create_dir_all(&scripts).unwrap();
    fs::create_dir_all(base.path().join("reviews").join("nutrix")).unwrap();

    let mut body = String::from("title,body,rating\n");
    for i in 1..=rows {
        body.push_str(&format!("T{i},\"body {i}, with comma\",{}\n", i % 5 + 1));
    }
    fs::write(scripts.join("nutrix_final.csv"), body).unwrap();

    let options = SplitOptions {
        base_dir: scripts,
        ..Default::default()
    };
    (base, options)
}

fn split(options: &SplitOptions) -> (Vec<PathBuf>, Vec<(PathBuf, usize)>) {
    let mut created = Vec::new();
    let report = split_file(options, |path, rows| created.push((path.to_path_buf(), rows))).unwrap();
    (report.files, created)
}

fn names(files: &[PathBuf]) -> Vec<String> {
    files
        .iter()
        .map(|p| p.file_name().unwrap().to_string_lossy().into_owned())
        .collect()
}

fn output_dir(base: &Path) -> PathBuf {
    base.join("scripts").join("../reviews/nutrix")
}

#[test]
fn splits_into_ceil_chunks_with_range_names() {
    let (base, options) = layout(2000);
    let (files, created) = split(&options);

    assert_eq!(
        names(&files),
        vec!["1-850-reviews.csv", "851-1700-reviews.csv", "1701-2000-reviews.csv"]
    );
    assert_eq!(created.iter().map(|(_, n)| *n).collect::<Vec<_>>(), vec![850, 850, 300]);
    for file in &files {
        assert!(file.starts_with(output_dir(base.path())));
    }
}

#[test]
fn every_chunk_repeats_header_and_concatenation_restores_rows() {
    let (base, options) = layout(1000);
    let (files, _) = split(&options);

    let original = read_table_from_path(base.path().join("scripts").join("nutrix_final.csv")).unwrap();
    let mut rows = Vec::new();
    for file in &files {
        let chunk = read_table_from_path(file).unwrap();
        assert_eq!(chunk.headers, original.headers);
        assert!(chunk.row_count() <= 850);
        rows.extend(chunk.rows);
    }
    assert_eq!(rows, original.rows);
}

#[test]
fn exact_multiple_has_no_trailing_file() {
    let (_base, options) = layout(1700);
    let (files, _) = split(&options);
    assert_eq!(names(&files), vec!["1-850-reviews.csv", "851-1700-reviews.csv"]);
}

#[test]
fn header_only_input_creates_no_files() {
    let (base, options) = layout(0);
    let (files, created) = split(&options);

    assert!(files.is_empty());
    assert!(created.is_empty());
    assert_eq!(fs::read_dir(output_dir(base.path())).unwrap().count(), 0);
}

#[test]
fn custom_chunk_size_is_honored() {
    let (_base, mut options) = layout(5);
    options.chunk_size = 2;
    let (files, _) = split(&options);
    assert_eq!(names(&files), vec!["1-2-reviews.csv", "3-4-reviews.csv", "5-5-reviews.csv"]);
}

#[test]
fn missing_output_directory_is_a_write_error() {
    let (_base, mut options) = layout(3);
    options.output_dir = PathBuf::from("nowhere/at/all");

    let err = split_file(&options, |_, _| {}).unwrap_err();
    assert!(matches!(err, ConvertError::Write { .. }));
    assert!(err.is_io());
}

#[test]
fn missing_input_is_not_found() {
    let (_base, mut options) = layout(3);
    options.input = PathBuf::from("absent.csv");

    let err = split_file(&options, |_, _| {}).unwrap_err();
    assert!(matches!(err, ConvertError::NotFound { .. }));
}

#[test]
fn zero_chunk_size_is_rejected() {
    let (_base, mut options) = layout(3);
    options.chunk_size = 0;

    let err = split_file(&options, |_, _| {}).unwrap_err();
    assert!(matches!(err, ConvertError::InvalidChunkSize));
}
