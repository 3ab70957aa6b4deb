//! End-to-end audit tests over tempdir fixtures.

use std::path::PathBuf;

use referrer_audit::{run_audit, CheckKind, Config};
use tempfile::TempDir;

struct Fixture {
    _dir: TempDir,
    config: Config,
}

/// Writes a definitions file and a favicon directory, returning a Config
/// pointing at both.
fn fixture(definitions: &str, favicons: &[&str]) -> Fixture {
    let dir = TempDir::new().expect("Failed to create temp directory");

    let definitions_path = dir.path().join("SearchEngines.json");
    std::fs::write(&definitions_path, definitions).expect("Failed to write definitions");

    let favicon_dir = dir.path().join("searchEngines");
    std::fs::create_dir(&favicon_dir).expect("Failed to create favicon directory");
    for name in favicons {
        std::fs::write(favicon_dir.join(name), b"\x89PNG").expect("Failed to write favicon");
    }

    let config = Config {
        definitions: definitions_path,
        favicons: favicon_dir,
        ..Default::default()
    };
    Fixture { _dir: dir, config }
}

const DEFINITIONS: &str = r#"[
    {"url": "www.google.com", "name": "Google", "params": ["q", "query"]},
    {"url": "www.google.fr", "name": "Google", "params": ["q"]},
    {"url": "www.bing.com", "name": "Bing", "params": ["q"]},
    {"url": "search.naver.com/search.naver", "name": "Naver", "params": ["query"]}
]"#;

#[test]
fn test_audit_fully_covered_passes() {
    let fixture = fixture(
        DEFINITIONS,
        &[
            "www.google.com.png",
            "www.google.fr.png",
            "www.bing.com.png",
            "search.naver.com.png",
            "xx.png",
        ],
    );

    let report = run_audit(&fixture.config).expect("Audit should run");
    assert!(report.passed(), "Unexpected failures: {:?}", report.failures);
    assert_eq!(report.definitions_total, 4);
    assert_eq!(report.engines_checked, 3); // Google deduplicated by name
    assert_eq!(report.favicons_total, 5);
}

#[test]
fn test_audit_reports_expected_failures() {
    let definitions = r#"[
        {"url": "www.google.com", "name": "Google", "params": ["q"]},
        {"url": "www.bing.com", "name": "Bing", "params": []}
    ]"#;
    let fixture = fixture(
        definitions,
        &["www.google.com.png", "oldengine.com.png", ".DS_Store"],
    );

    let report = run_audit(&fixture.config).expect("Audit should run");
    assert!(!report.passed());
    assert_eq!(report.failures.len(), 3);

    let subjects: Vec<(&CheckKind, &str)> = report
        .failures
        .iter()
        .map(|f| (&f.kind, f.subject.as_str()))
        .collect();
    assert!(subjects.contains(&(&CheckKind::MissingKeywordParams, "www.bing.com")));
    assert!(subjects.contains(&(&CheckKind::MissingFavicon, "www.bing.com")));
    assert!(subjects.contains(&(&CheckKind::ObsoleteFavicon, "oldengine.com")));
}

#[test]
fn test_audit_secondary_pattern_favicon_not_obsolete() {
    // www.google.fr is a secondary Google pattern: its favicon must not be
    // flagged, even though the pattern itself is never checked.
    let fixture = fixture(
        DEFINITIONS,
        &[
            "www.google.com.png",
            "www.google.fr.png",
            "www.bing.com.png",
            "search.naver.com.png",
        ],
    );

    let report = run_audit(&fixture.config).expect("Audit should run");
    assert!(report.passed(), "Unexpected failures: {:?}", report.failures);
}

#[test]
fn test_audit_missing_definitions_file_errors() {
    let dir = TempDir::new().expect("Failed to create temp directory");
    let favicon_dir = dir.path().join("searchEngines");
    std::fs::create_dir(&favicon_dir).expect("Failed to create favicon directory");

    let config = Config {
        definitions: dir.path().join("missing.json"),
        favicons: favicon_dir,
        ..Default::default()
    };

    let err = run_audit(&config).unwrap_err();
    let message = format!("{err:#}");
    assert!(
        message.contains("Failed to load search engine definitions"),
        "Unexpected error: {message}"
    );
}

#[test]
fn test_audit_missing_favicon_directory_errors() {
    let dir = TempDir::new().expect("Failed to create temp directory");
    let definitions_path = dir.path().join("SearchEngines.json");
    std::fs::write(&definitions_path, "[]").expect("Failed to write definitions");

    let config = Config {
        definitions: definitions_path,
        favicons: PathBuf::from(dir.path().join("no_such_dir")),
        ..Default::default()
    };

    let err = run_audit(&config).unwrap_err();
    let message = format!("{err:#}");
    assert!(
        message.contains("Failed to scan favicon directory"),
        "Unexpected error: {message}"
    );
}

#[test]
fn test_audit_empty_inputs_pass() {
    let fixture = fixture("[]", &[]);

    let report = run_audit(&fixture.config).expect("Audit should run");
    assert!(report.passed());
    assert_eq!(report.definitions_total, 0);
    assert_eq!(report.favicons_total, 0);
}
