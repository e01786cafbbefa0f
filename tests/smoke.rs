//! Smoke tests: full build passes over real files in a temp directory.
//!
//! These exercise the whole pipeline (load → shape → render → write) and pin
//! the display invariants: reverse-chronological order, verbatim aggregate
//! tables, empty score strings, and no output on bad input.

use std::fs;
use std::path::Path;

use goalboard::config::Config;
use goalboard::loader;
use goalboard::site;
use goalboard::view::Variant;

const TRACKER_JSON: &str = r#"[
  {
    "date": "2024-01-10",
    "played": [["TOR", 1], ["EDM", 1]],
    "games": [
      {
        "id": 2023020601,
        "names": ["Toronto Maple Leafs", "Boston Bruins"],
        "scores": [3, 2],
        "goals": [
          {"period": "1", "time": "04:31", "player": "W. Nylander", "goalsToDate": 25}
        ]
      }
    ]
  },
  {
    "date": "2024-01-12",
    "played": [["TOR", 2], ["EDM", 2]],
    "games": [
      {
        "id": 2023020694,
        "names": ["Edmonton Oilers", "Calgary Flames"],
        "goals": [
          {"period": "OT", "time": "02:10", "player": "L. Draisaitl", "goalsToDate": 30}
        ]
      }
    ]
  }
]"#;

const POOL_JSON: &str = r#"{
  "games": [
    {
      "date": "2024-05-01",
      "games": [
        {
          "id": 2023030411,
          "names": ["Florida Panthers", "Edmonton Oilers"],
          "scores": [4, 3],
          "goals": [
            {"period": "3", "time": "19:59", "scorers": [["S. Reinhart", true], ["M. Tkachuk", false]]}
          ]
        }
      ]
    },
    {
      "date": "2024-05-02",
      "games": []
    }
  ],
  "team_wins": [{"team": "FLA", "wins": 7}, {"team": "EDM", "wins": 6}],
  "player_points": [{"player": "C. McDavid", "points": 31}],
  "people": [{"person": "Alice", "wins": 3, "points": 20, "total": 23}]
}"#;

fn test_config(dir: &Path, variants: Vec<Variant>) -> Config {
    Config {
        goals_path: dir.join("goals.json").display().to_string(),
        bets_path: dir.join("goals.json").display().to_string(),
        pool_path: dir.join("pool.json").display().to_string(),
        out_dir: dir.join("site").display().to_string(),
        variants,
        revalidate_secs: 60,
    }
}

fn write_inputs(dir: &Path) {
    fs::write(dir.join("goals.json"), TRACKER_JSON).unwrap();
    fs::write(dir.join("pool.json"), POOL_JSON).unwrap();
}

// ---------------------------------------------------------------------------
// Full build writes every page plus a manifest
// ---------------------------------------------------------------------------
#[test]
fn build_writes_all_pages_and_manifest() {
    let dir = tempfile::tempdir().unwrap();
    write_inputs(dir.path());
    let cfg = test_config(
        dir.path(),
        vec![Variant::GoalTracker, Variant::BetTracker, Variant::PlayoffPool],
    );

    let manifest = site::build(&cfg).unwrap();
    assert_eq!(manifest.pages.len(), 3);

    let out = dir.path().join("site");
    for file in ["goals.html", "bets.html", "pool.html", "manifest.json"] {
        assert!(out.join(file).exists(), "missing {}", file);
    }

    // Manifest records the actual input hash.
    let goals_hash = loader::file_sha256(&dir.path().join("goals.json")).unwrap();
    assert_eq!(manifest.pages[0].input_sha256, goals_hash);
    assert_eq!(manifest.pages[0].dates, 2);
    assert_eq!(manifest.pages[0].games, 2);
}

// ---------------------------------------------------------------------------
// Rendered date order is the reverse of input order
// ---------------------------------------------------------------------------
#[test]
fn rendered_dates_are_reverse_chronological() {
    let dir = tempfile::tempdir().unwrap();
    write_inputs(dir.path());
    let cfg = test_config(dir.path(), vec![Variant::GoalTracker]);
    site::build(&cfg).unwrap();

    let html = fs::read_to_string(dir.path().join("site/goals.html")).unwrap();
    let newest = html.find("2024-01-12").expect("newest date missing");
    let oldest = html.find("2024-01-10").expect("oldest date missing");
    assert!(newest < oldest, "newest date must render first");
}

// ---------------------------------------------------------------------------
// Score handling: absent scores render as an empty string
// ---------------------------------------------------------------------------
#[test]
fn unscored_game_renders_empty_score() {
    let dir = tempfile::tempdir().unwrap();
    write_inputs(dir.path());
    let cfg = test_config(dir.path(), vec![Variant::BetTracker]);
    site::build(&cfg).unwrap();

    let html = fs::read_to_string(dir.path().join("site/bets.html")).unwrap();
    assert!(html.contains("<span class=\"score\">3 - 2</span>"));
    assert!(html.contains("<span class=\"score\"></span>"));
    // Single-player goals carry the goals-to-date count.
    assert!(html.contains("L. Draisaitl (30)"));
}

// ---------------------------------------------------------------------------
// Pool page: emphasis flags and verbatim standings
// ---------------------------------------------------------------------------
#[test]
fn pool_page_shows_tables_and_emphasized_scorers() {
    let dir = tempfile::tempdir().unwrap();
    write_inputs(dir.path());
    let cfg = test_config(dir.path(), vec![Variant::PlayoffPool]);
    site::build(&cfg).unwrap();

    let html = fs::read_to_string(dir.path().join("site/pool.html")).unwrap();
    assert!(html.contains("<strong>S. Reinhart</strong>, M. Tkachuk"));
    assert!(html.contains("<td>FLA</td><td>7</td>"));
    assert!(html.contains("<td>Alice</td><td>3</td><td>20</td><td>23</td>"));
    // Nested games got reversed: the empty 05-02 date renders first.
    let newer = html.find("2024-05-02").unwrap();
    let older = html.find("2024-05-01").unwrap();
    assert!(newer < older);
}

// ---------------------------------------------------------------------------
// Malformed input aborts with no partial output
// ---------------------------------------------------------------------------
#[test]
fn malformed_json_fails_without_writing_pages() {
    let dir = tempfile::tempdir().unwrap();
    fs::write(dir.path().join("goals.json"), "{not json").unwrap();
    fs::write(dir.path().join("pool.json"), POOL_JSON).unwrap();
    let cfg = test_config(
        dir.path(),
        vec![Variant::PlayoffPool, Variant::GoalTracker],
    );

    assert!(site::build(&cfg).is_err());
    // The pool page parsed fine but nothing may be written on a failed pass.
    assert!(!dir.path().join("site").exists());
}

// ---------------------------------------------------------------------------
// Fingerprint: stable on identical inputs, changes when data changes
// ---------------------------------------------------------------------------
#[test]
fn fingerprint_tracks_input_changes() {
    let dir = tempfile::tempdir().unwrap();
    write_inputs(dir.path());
    let cfg = test_config(dir.path(), vec![Variant::GoalTracker, Variant::PlayoffPool]);

    let fp1 = site::input_fingerprint(&cfg).unwrap();
    let fp2 = site::input_fingerprint(&cfg).unwrap();
    assert_eq!(fp1, fp2);

    fs::write(dir.path().join("goals.json"), "[]").unwrap();
    let fp3 = site::input_fingerprint(&cfg).unwrap();
    assert_ne!(fp1, fp3);
}

// ---------------------------------------------------------------------------
// Rebuild is idempotent: same input, same page bytes
// ---------------------------------------------------------------------------
#[test]
fn rebuild_is_idempotent() {
    let dir = tempfile::tempdir().unwrap();
    write_inputs(dir.path());
    let cfg = test_config(dir.path(), vec![Variant::GoalTracker]);

    site::build(&cfg).unwrap();
    let first = fs::read_to_string(dir.path().join("site/goals.html")).unwrap();
    site::build(&cfg).unwrap();
    let second = fs::read_to_string(dir.path().join("site/goals.html")).unwrap();
    assert_eq!(first, second);
}
