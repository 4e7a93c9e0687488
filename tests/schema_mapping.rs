use std::path::Path;

use chrono::NaiveDate;
use review_csv_tools::commands::convert::{convert_reviews, ConvertOptions};
use review_csv_tools::processing::JudgemeReview;
use review_csv_tools::schema::JUDGEME_HEADERS;
use review_csv_tools::ConvertError;

fn options_into(dir: &Path, input: &str) -> ConvertOptions {
    ConvertOptions {
        input: input.into(),
        output_dir: dir.to_path_buf(),
        started_at: NaiveDate::from_ymd_opt(2025, 6, 1)
            .unwrap()
            .and_hms_opt(14, 30, 5),
        ..Default::default()
    }
}

fn read_reviews(path: &Path) -> (Vec<String>, Vec<JudgemeReview>) {
    let mut rdr = csv::Reader::from_path(path).unwrap();
    let headers = rdr.headers().unwrap().iter().map(str::to_owned).collect();
    let reviews = rdr.deserialize().collect::<Result<Vec<JudgemeReview>, _>>().unwrap();
    (headers, reviews)
}

#[test]
fn converts_fixture_into_timestamped_judgeme_file() {
    let dir = tempfile::tempdir().unwrap();
    let report = convert_reviews(&options_into(dir.path(), "tests/fixtures/woocommerce_reviews.csv")).unwrap();

    assert_eq!(report.rows, 3);
    assert_eq!(report.output, dir.path().join("judgeme_reviews_20250601_143005.csv"));

    let (headers, reviews) = read_reviews(&report.output);
    assert_eq!(headers, JUDGEME_HEADERS);
    assert_eq!(reviews.len(), 3);

    assert_eq!(reviews[0].reviewer_name, "Ada Lovelace");
    assert_eq!(reviews[0].reviewer_email, "ada@example.com");
    assert_eq!(reviews[0].review_date, "2024-01-02 10:15:00");
    assert_eq!(reviews[0].product_id, "101");
    assert_eq!(reviews[0].product_handle, "argan-shampoo");
    assert_eq!(reviews[0].body, "Smells great, works great.");
    assert_eq!(reviews[1].body, "Good.\nWould buy again.");
    assert_eq!(reviews[2].reviewer_email, "");
}

#[test]
fn every_row_carries_constants_and_empty_unmapped_fields() {
    let dir = tempfile::tempdir().unwrap();
    let report = convert_reviews(&options_into(dir.path(), "tests/fixtures/woocommerce_reviews.csv")).unwrap();
    let (_, reviews) = read_reviews(&report.output);

    let scores = ["5", "4", "3"];
    for (review, score) in reviews.iter().zip(scores) {
        assert_eq!(review.rating, score);
        assert_eq!(review.source, "WooCommerce");
        assert_eq!(review.curated, "ok");
        for empty in [
            &review.title,
            &review.reply,
            &review.reply_date,
            &review.picture_urls,
            &review.ip_address,
            &review.location,
        ] {
            assert_eq!(empty, "");
        }
    }
}

#[test]
fn header_only_input_writes_header_only_output() {
    let dir = tempfile::tempdir().unwrap();
    let input = dir.path().join("woocommerce_reviews.csv");
    std::fs::write(&input, "body,author,email,date,product_id,product_handle,review_score\n").unwrap();

    let report = convert_reviews(&options_into(dir.path(), input.to_str().unwrap())).unwrap();
    assert_eq!(report.rows, 0);

    let (headers, reviews) = read_reviews(&report.output);
    assert_eq!(headers, JUDGEME_HEADERS);
    assert!(reviews.is_empty());
}

#[test]
fn empty_input_file_writes_header_only_output() {
    let dir = tempfile::tempdir().unwrap();
    let input = dir.path().join("woocommerce_reviews.csv");
    std::fs::write(&input, "").unwrap();

    let report = convert_reviews(&options_into(dir.path(), input.to_str().unwrap())).unwrap();
    assert_eq!(report.rows, 0);
    assert_eq!(report.output, dir.path().join("judgeme_reviews_20250601_143005.csv"));

    let text = std::fs::read_to_string(&report.output).unwrap();
    assert_eq!(text, format!("{}\r\n", JUDGEME_HEADERS.join(",")));
}

#[test]
fn missing_input_fails_without_creating_output() {
    let dir = tempfile::tempdir().unwrap();
    let err = convert_reviews(&options_into(dir.path(), "tests/fixtures/does_not_exist.csv")).unwrap_err();

    assert!(matches!(err, ConvertError::NotFound { .. }));
    assert_eq!(std::fs::read_dir(dir.path()).unwrap().count(), 0);
}
