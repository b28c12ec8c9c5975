mod helpers;

use helpers::run_cli;

#[test]
fn test_sim_counts_wins_for_each_seat() {
    let res = run_cli(
        &[
            "sim",
            "--games",
            "4",
            "--seed",
            "21",
            "--players",
            "LAZY-BANK,RANDOM,RANDOM",
            "--max-score",
            "1500",
            "--entry-score",
            "0",
        ],
        "",
    );
    assert_eq!(res.code, 0, "stderr: {}", res.stderr);
    let out = &res.stdout;
    assert!(out.contains("sim: games=4 players=3 max_score=1500 entry_score=0 seed=21"));
    assert!(out.contains("LAZY-BANK 1"));
    assert!(out.contains("RANDOM 2"));
    assert!(out.contains("RANDOM 3"));

    let wins: u32 = out
        .lines()
        .skip_while(|l| *l != "Wins:")
        .skip(1)
        .take(3)
        .map(|l| l.split_whitespace().last().unwrap().parse::<u32>().unwrap())
        .sum();
    let shared: u32 = out
        .lines()
        .find_map(|l| l.strip_prefix("Shared wins: "))
        .unwrap()
        .parse()
        .unwrap();
    // Every finished game has at least one winner; shared games have more.
    assert!(wins >= 4);
    assert!(shared > 0 || wins == 4);
}

#[test]
fn test_sim_same_seed_same_report() {
    let args = ["sim", "--games", "3", "--seed", "8", "--max-score", "2000"];
    let a = run_cli(&args, "");
    let b = run_cli(&args, "");
    assert_eq!(a.code, 0);
    assert_eq!(a.stdout, b.stdout);
}

#[test]
fn test_sim_rejects_bad_player_list() {
    let res = run_cli(&["sim", "--games", "1", "--players", "LAZY-BANK,GREEDY"], "");
    assert_eq!(res.code, 2);
    assert!(res.stderr.contains("Unknown strategy 'GREEDY'"));
}

#[test]
fn test_sim_requires_games() {
    let res = run_cli(&["sim"], "");
    assert_eq!(res.code, 2);
    assert!(res.stderr.contains("--games"));
}
