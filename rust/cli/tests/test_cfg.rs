mod helpers;

use helpers::{BOTS_TOML, ConfigDir, run_cli};

#[test]
fn test_cfg_shows_file_values_and_sources() {
    let dir = ConfigDir::new();
    let cfg = dir.write("bots.toml", BOTS_TOML);
    let res = run_cli(&["cfg", "--config", cfg.to_str().unwrap()], "");
    assert_eq!(res.code, 0, "stderr: {}", res.stderr);

    let json: serde_json::Value = serde_json::from_str(&res.stdout).expect("json output");
    assert_eq!(json["file"], cfg.to_str().unwrap());
    assert_eq!(json["dice_input"]["value"], "rng");
    assert_eq!(json["max_score"]["value"], 2000);
    assert_eq!(json["entry_score"]["source"], "file");
    assert_eq!(json["players"]["value"][1]["strategy"], "RANDOM");
    assert_eq!(json["seed"]["source"], "default");
}

#[test]
fn test_saved_config_plays_the_same_game() {
    let dir = ConfigDir::new();
    let cfg = dir.write("bots.toml", &format!("seed = 17\n{}", BOTS_TOML));
    let saved = dir.path("copy/saved.toml");

    let res = run_cli(
        &[
            "cfg",
            "--config",
            cfg.to_str().unwrap(),
            "--save",
            saved.to_str().unwrap(),
        ],
        "",
    );
    assert_eq!(res.code, 0, "stderr: {}", res.stderr);
    assert!(res.stdout.starts_with("Saved configuration to"));

    let original = run_cli(&["play", "--config", cfg.to_str().unwrap()], "");
    let copy = run_cli(&["play", "--config", saved.to_str().unwrap()], "");
    assert_eq!(original.code, 0);
    assert_eq!(original.stdout, copy.stdout);
}

#[test]
fn test_cfg_rejects_invalid_players() {
    let dir = ConfigDir::new();
    let cfg = dir.write(
        "dup.toml",
        "[[players]]\nname = \"Ann\"\nmode = \"human\"\n\n[[players]]\nname = \"Ann\"\nmode = \"human\"\n",
    );
    let res = run_cli(&["cfg", "--config", cfg.to_str().unwrap()], "");
    assert_eq!(res.code, 2);
    assert!(res.stderr.contains("Duplicate player name: Ann"));
}

#[test]
fn test_missing_config_file_is_an_error() {
    let dir = ConfigDir::new();
    let missing = dir.path("nope.toml");
    let res = run_cli(&["cfg", "--config", missing.to_str().unwrap()], "");
    assert_eq!(res.code, 2);
    assert!(res.stderr.starts_with("Error: "));
}
