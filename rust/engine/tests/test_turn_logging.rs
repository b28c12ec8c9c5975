use std::fs;
use std::path::PathBuf;

use farkell_engine::logger::{format_turn_id, RollRecord, TurnLogger, TurnRecord};
use farkell_engine::scoring::Score;

fn tmp_path(name: &str) -> PathBuf {
    let mut p = PathBuf::from("target");
    p.push(format!("{}_{}.jsonl", name, std::process::id()));
    p
}

fn record(ts: Option<&str>) -> TurnRecord {
    TurnRecord {
        turn_id: None,
        player: "Harry".to_string(),
        rolls: vec![RollRecord {
            dice: vec![1, 1, 1, 2, 3, 4],
            breakdown: vec![Score::new(300, vec![1, 1, 1])],
            name: "THREE OF A KIND".to_string(),
            banked: vec![true],
            points: 300,
            auto_banked: true,
            hot_dice: false,
        }],
        score: 300,
        busted: false,
        ts: ts.map(str::to_string),
    }
}

#[test]
fn writes_jsonl_with_lf_only() {
    let path = tmp_path("turnlog");
    let mut logger = TurnLogger::create(&path, "20250102").expect("create logger");
    logger.write(&record(None)).expect("write");
    logger.write(&record(None)).expect("write");
    let bytes = fs::read(&path).expect("read file");
    assert!(bytes.ends_with(b"\n"));
    assert!(!bytes.contains(&b'\r'));
    assert_eq!(bytes.iter().filter(|&&b| b == b'\n').count(), 2);
    let _ = fs::remove_file(&path);
}

#[test]
fn sequential_ids_increment() {
    let mut logger = TurnLogger::without_file("20251231");
    assert_eq!(logger.next_id(), "20251231-000001");
    assert_eq!(logger.next_id(), "20251231-000002");
    assert_eq!(format_turn_id("x", 42), "x-000042");
}

#[test]
fn ids_and_ts_are_filled_and_preserved() {
    let path = tmp_path("turnlog_ts");
    let mut logger = TurnLogger::create(&path, "g").expect("create logger");
    logger.write(&record(None)).expect("write");
    logger
        .write(&record(Some("2025-01-02T03:04:05Z")))
        .expect("write");

    let content = fs::read_to_string(&path).expect("read file");
    let lines: Vec<TurnRecord> = content
        .lines()
        .map(|l| serde_json::from_str(l).expect("json line"))
        .collect();
    assert_eq!(lines[0].turn_id.as_deref(), Some("g-000001"));
    assert!(lines[0].ts.is_some());
    assert_eq!(lines[1].turn_id.as_deref(), Some("g-000002"));
    assert_eq!(lines[1].ts.as_deref(), Some("2025-01-02T03:04:05Z"));
    assert_eq!(lines[1].rolls[0].breakdown[0].value, 300);
    let _ = fs::remove_file(&path);
}
