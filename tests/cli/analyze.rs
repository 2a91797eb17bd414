use anyhow::Result;
use pretty_assertions::assert_eq;
use serde_json::Value;

use crate::{CliTest, PRODUCTS_CSV, output_text};

#[test]
fn test_analyze_all_data() -> Result<()> {
    let test = CliTest::with_file("data.csv", PRODUCTS_CSV)?;

    let output = test
        .analyze_command()
        .args(["data.csv", "--text-column", "deskripsi"])
        .output()?;
    let (stdout, stderr) = output_text(&output);

    assert_eq!(output.status.code(), Some(0), "stderr: {}", stderr);
    assert!(stdout.contains("Analyzing 'deskripsi' in data.csv (3 rows)"));
    assert!(stdout.contains("==> All data (3 records)"));
    assert!(stdout.contains("Unique words: 7 | Total words: 9 | Average word length: 5.7"));
    assert!(stdout.contains("  1. laptop  2\n"));
    assert!(stdout.contains("  2. gaming  2\n"));
    assert!(stdout.contains("  3. murah   1\n"));
    assert!(stdout.contains("  Word cloud: 7 words\n"));
    assert!(!stdout.contains("Categories in"));
    assert!(stdout.contains("Analyzed 1 slice"));

    Ok(())
}

#[test]
fn test_analyze_by_category() -> Result<()> {
    let test = CliTest::with_file("data.csv", PRODUCTS_CSV)?;

    let output = test
        .analyze_command()
        .args([
            "data.csv",
            "--text-column",
            "deskripsi",
            "--category-column",
            "kategori",
        ])
        .output()?;
    let (stdout, stderr) = output_text(&output);

    assert_eq!(output.status.code(), Some(0), "stderr: {}", stderr);
    assert!(stdout.contains("Categories in 'kategori':"));
    assert!(stdout.contains("  ASN         2 records (66.7%)"));
    assert!(stdout.contains("  selain ASN  1 record (33.3%)"));

    // All data first, then categories in first-seen order.
    let all = stdout.find("==> All data").unwrap();
    let asn = stdout.find("==> ASN (2 records)").unwrap();
    let other = stdout.find("==> selain ASN (1 record)").unwrap();
    assert!(all < asn && asn < other);

    let asn_section = &stdout[asn..other];
    assert!(asn_section.contains("  1. gaming  2\n"));
    assert!(asn_section.contains("Unique words: 5 | Total words: 6"));
    assert!(stdout.contains("Analyzed 3 slices"));

    Ok(())
}

#[test]
fn test_analyze_defaults_to_first_text_column() -> Result<()> {
    let test = CliTest::with_file("data.csv", PRODUCTS_CSV)?;

    let output = test.analyze_command().args(["data.csv", "-v"]).output()?;
    let (stdout, stderr) = output_text(&output);

    assert_eq!(output.status.code(), Some(0), "stderr: {}", stderr);
    assert!(stdout.contains("Analyzing 'nama'"));
    assert!(stderr.contains("Note: No text column given, using 'nama'"));
    assert!(stderr.contains("Note: No .csvcloudrc.json found"));
    assert!(stderr.contains("Note: Filtering "));
    assert!(stderr.contains(" stopword(s)"));

    Ok(())
}

#[test]
fn test_analyze_reports_empty_category() -> Result<()> {
    let test = CliTest::with_file(
        "data.csv",
        "ulasan,kategori\nbarang bagus,baik\ndan yang di,kosong\n",
    )?;

    let output = test
        .analyze_command()
        .args(["data.csv", "--category-column", "kategori"])
        .output()?;
    let (stdout, stderr) = output_text(&output);

    assert_eq!(output.status.code(), Some(1));
    assert!(stdout.contains("==> kosong (1 record)"));
    assert!(stdout.contains("no words left after cleaning"));
    assert!(stdout.contains("1 of 3 slices produced no words"));
    assert!(stderr.contains("warning: 'kosong': no words left after cleaning"));

    Ok(())
}

#[test]
fn test_analyze_json_output() -> Result<()> {
    let test = CliTest::with_file("data.csv", PRODUCTS_CSV)?;

    let output = test
        .analyze_command()
        .args([
            "data.csv",
            "--text-column",
            "deskripsi",
            "--category-column",
            "kategori",
            "--format",
            "json",
        ])
        .output()?;
    assert_eq!(output.status.code(), Some(0));

    let json: Value = serde_json::from_slice(&output.stdout)?;
    assert_eq!(json["textColumn"], "deskripsi");
    assert_eq!(json["rowCount"], 3);

    let bundles = json["bundles"].as_array().unwrap();
    let labels: Vec<&str> = bundles
        .iter()
        .map(|b| b["label"].as_str().unwrap())
        .collect();
    assert_eq!(labels, vec!["All data", "ASN", "selain ASN"]);

    assert_eq!(bundles[0]["status"], "analyzed");
    assert_eq!(bundles[0]["stats"]["uniqueWords"], 7);
    assert_eq!(bundles[0]["stats"]["totalWords"], 9);
    assert_eq!(bundles[0]["entries"].as_array().unwrap().len(), 7);
    assert_eq!(bundles[0]["entries"][0]["word"], "laptop");

    assert_eq!(json["categories"][1]["value"], "selain ASN");
    assert_eq!(json["categories"][1]["count"], 1);

    Ok(())
}

#[test]
fn test_analyze_export_dir() -> Result<()> {
    let test = CliTest::with_file("data.csv", PRODUCTS_CSV)?;

    let output = test
        .analyze_command()
        .args([
            "data.csv",
            "--text-column",
            "deskripsi",
            "--category-column",
            "kategori",
            "--export-dir",
            "out",
        ])
        .output()?;
    let (stdout, _) = output_text(&output);

    assert_eq!(output.status.code(), Some(0));
    assert!(stdout.contains("Exported 3 files to out"));
    assert!(test.root().join("out/word_frequency_deskripsi_ASN.csv").exists());
    assert!(
        test.root()
            .join("out/word_frequency_deskripsi_selain_ASN.csv")
            .exists()
    );

    let content = test.read_file("out/word_frequency_deskripsi.csv")?;
    insta::assert_snapshot!(content, @r"
    word,frequency
    laptop,2
    gaming,2
    murah,1
    cepat,1
    kantor,1
    ringan,1
    mouse,1
    ");

    Ok(())
}

#[test]
fn test_analyze_uses_config_file() -> Result<()> {
    let test = CliTest::with_file("data.csv", PRODUCTS_CSV)?;
    test.write_file(
        ".csvcloudrc.json",
        r#"{
  "textColumn": "deskripsi",
  "categoryColumn": "kategori",
  "extraStopwords": ["gaming"]
}"#,
    )?;

    let output = test.analyze_command().arg("data.csv").output()?;
    let (stdout, stderr) = output_text(&output);

    assert_eq!(output.status.code(), Some(0), "stderr: {}", stderr);
    assert!(stdout.contains("Analyzing 'deskripsi'"));
    assert!(stdout.contains("==> ASN"));
    assert!(!stdout.contains("gaming"));

    // "none" on the command line turns the config's category column off.
    let output = test
        .analyze_command()
        .args(["data.csv", "--category-column", "none"])
        .output()?;
    let (stdout, _) = output_text(&output);
    assert!(!stdout.contains("==> ASN"));

    Ok(())
}

#[test]
fn test_analyze_unknown_column() -> Result<()> {
    let test = CliTest::with_file("data.csv", PRODUCTS_CSV)?;

    let output = test
        .analyze_command()
        .args(["data.csv", "--text-column", "ulasan"])
        .output()?;
    let (_, stderr) = output_text(&output);

    assert_eq!(output.status.code(), Some(2));
    assert!(stderr.contains(
        "Error: column 'ulasan' not found (available: nama, deskripsi, harga, kategori)"
    ));

    Ok(())
}

#[test]
fn test_analyze_rejects_numeric_text_column() -> Result<()> {
    let test = CliTest::with_file("data.csv", PRODUCTS_CSV)?;

    let output = test
        .analyze_command()
        .args(["data.csv", "--text-column", "harga"])
        .output()?;
    let (_, stderr) = output_text(&output);

    assert_eq!(output.status.code(), Some(2));
    assert!(stderr.contains("column 'harga' has no text values"));

    Ok(())
}

#[test]
fn test_analyze_rejects_max_words_out_of_range() -> Result<()> {
    let test = CliTest::with_file("data.csv", PRODUCTS_CSV)?;

    let output = test
        .analyze_command()
        .args(["data.csv", "--max-words", "500"])
        .output()?;
    let (_, stderr) = output_text(&output);

    assert_eq!(output.status.code(), Some(2));
    assert!(stderr.contains("max_words must be between 20 and 200, got 500"));

    Ok(())
}

#[test]
fn test_analyze_without_text_columns() -> Result<()> {
    let test = CliTest::with_file("numbers.csv", "a,b\n1,2\n3,\n")?;

    let output = test.analyze_command().arg("numbers.csv").output()?;
    let (_, stderr) = output_text(&output);

    assert_eq!(output.status.code(), Some(2));
    assert!(stderr.contains("no text columns found"));

    Ok(())
}

#[test]
fn test_analyze_missing_file() -> Result<()> {
    let test = CliTest::new()?;

    let output = test.analyze_command().arg("missing.csv").output()?;
    let (_, stderr) = output_text(&output);

    assert_eq!(output.status.code(), Some(2));
    assert!(stderr.contains("failed to open 'missing.csv'"));

    Ok(())
}

#[test]
fn test_analyze_header_only_file() -> Result<()> {
    let test = CliTest::with_file("empty.csv", "deskripsi,kategori\n")?;

    let output = test
        .analyze_command()
        .args(["empty.csv", "--category-column", "kategori"])
        .output()?;
    let (stdout, stderr) = output_text(&output);

    assert_eq!(output.status.code(), Some(1), "stderr: {}", stderr);
    assert!(stdout.contains("Analyzing 'deskripsi' in empty.csv (0 rows)"));
    assert!(stdout.contains("==> All data (0 records)"));
    assert!(stdout.contains("no matching records"));
    assert!(stderr.contains("warning: 'All data': no matching records"));

    Ok(())
}
