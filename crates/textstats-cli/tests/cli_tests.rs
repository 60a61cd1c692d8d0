use std::path::{Path, PathBuf};
use std::process::{Command, Output};

fn fixture(name: &str) -> PathBuf {
    Path::new(env!("CARGO_MANIFEST_DIR"))
        .join("../../fixtures")
        .join(name)
}

fn textstats(args: &[&str]) -> Output {
    Command::new(env!("CARGO_BIN_EXE_textstats"))
        .args(args)
        .output()
        .expect("Failed to execute textstats")
}

fn stdout_json_lines(output: &Output) -> Vec<serde_json::Value> {
    String::from_utf8_lossy(&output.stdout)
        .lines()
        .map(|line| serde_json::from_str(line).expect("Invalid JSON line"))
        .collect()
}

#[test]
fn analyze_text_output_lists_every_statistic() {
    let path = fixture("hello.txt");
    let output = textstats(&["analyze", path.to_str().unwrap()]);

    assert!(output.status.success());
    let stdout = String::from_utf8_lossy(&output.stdout);
    assert!(stdout.starts_with(&format!("--- {} ---", path.display())));
    for key in [
        "word_count:",
        "char_count:",
        "char_count_no_spaces:",
        "sentence_count:",
        "average_word_length:",
        "most_common_words:",
    ] {
        assert!(stdout.contains(key), "missing {key} in:\n{stdout}");
    }
    assert!(stdout.contains("hello (1)"));
}

#[test]
fn analyze_selected_statistics_in_report_order() {
    let path = fixture("hello.txt");
    let output = textstats(&[
        "analyze",
        "--output-format",
        "json",
        "--stat",
        "sentence_count",
        "-s",
        "word_count",
        path.to_str().unwrap(),
    ]);

    assert!(output.status.success());
    let lines = stdout_json_lines(&output);
    assert_eq!(lines.len(), 1);

    let report = lines[0]["report"].as_object().unwrap();
    let keys: Vec<&str> = report.keys().map(String::as_str).collect();
    assert_eq!(keys, ["word_count", "sentence_count"]);
    assert_eq!(report["word_count"], 5);
    assert_eq!(report["sentence_count"], 2);
}

#[test]
fn analyze_multiple_files_emits_one_line_each() {
    let hello = fixture("hello.txt");
    let empty = fixture("empty.txt");
    let output = textstats(&[
        "analyze",
        "--output-format",
        "json",
        hello.to_str().unwrap(),
        empty.to_str().unwrap(),
    ]);

    assert!(output.status.success());
    let lines = stdout_json_lines(&output);
    assert_eq!(lines.len(), 2);
    assert_eq!(lines[0]["source"], hello.to_str().unwrap());
    assert_eq!(lines[1]["report"]["word_count"], 0);
    assert_eq!(lines[1]["report"]["most_common_words"], serde_json::json!([]));
}

#[test]
fn top_respects_limit() {
    let path = fixture("whitespace.txt");
    let output = textstats(&[
        "top",
        "-n",
        "2",
        "--output-format",
        "json",
        path.to_str().unwrap(),
    ]);

    assert!(output.status.success());
    let lines = stdout_json_lines(&output);
    assert_eq!(lines[0]["limit"], 2);
    assert_eq!(
        lines[0]["words"],
        serde_json::json!([
            {"word": "the", "count": 4},
            {"word": "and", "count": 2}
        ])
    );
}

#[test]
fn top_text_output_ranks_words() {
    let path = fixture("whitespace.txt");
    let output = textstats(&["top", "--limit", "3", path.to_str().unwrap()]);

    assert!(output.status.success());
    let stdout = String::from_utf8_lossy(&output.stdout);
    let ranked: Vec<&str> = stdout.lines().skip(1).take(3).collect();
    assert!(ranked[0].trim_start().starts_with("1. the"));
    assert!(ranked[1].trim_start().starts_with("2. and"));
    assert!(ranked[2].trim_start().starts_with("3. cat"));
}

#[test]
fn sample_prints_results_header() {
    let output = textstats(&["sample"]);

    assert!(output.status.success());
    let stdout = String::from_utf8_lossy(&output.stdout);
    assert!(stdout.starts_with("=== Text Analysis Results ===\n"));
    assert!(stdout.contains("word_count: 26\n"));
    assert!(stdout.contains("sentence_count: 4\n"));
    assert!(stdout.contains("most_common_words: the (2), it (2), quick (1), brown (1), fox (1)\n"));
}

#[test]
fn invalid_output_format_exits_with_input_error() {
    let output = textstats(&["sample", "--output-format", "yaml"]);

    assert_eq!(output.status.code(), Some(2));
    let stderr = String::from_utf8_lossy(&output.stderr);
    assert!(stderr.contains("Invalid output_format 'yaml'"));
}

#[test]
fn unknown_statistic_renders_json_envelope() {
    let path = fixture("hello.txt");
    let output = textstats(&[
        "analyze",
        "--output-format",
        "json",
        "--stat",
        "lines",
        path.to_str().unwrap(),
    ]);

    assert_eq!(output.status.code(), Some(2));
    let envelope: serde_json::Value =
        serde_json::from_slice(&output.stderr).expect("stderr should be a JSON envelope");
    assert_eq!(envelope["exit_code"], 2);
    assert!(envelope["error"]
        .as_str()
        .unwrap()
        .contains("Unknown statistic: 'lines'"));
}

#[test]
fn missing_file_exits_with_runtime_error() {
    let output = textstats(&["analyze", "/nonexistent/textstats/input.txt"]);

    assert_eq!(output.status.code(), Some(3));
    let stderr = String::from_utf8_lossy(&output.stderr);
    assert!(stderr.starts_with("Error: Failed to read file"));
}
