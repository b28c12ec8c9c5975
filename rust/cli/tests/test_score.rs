mod helpers;

use helpers::run_cli;

#[test]
fn test_score_three_of_a_kind_and_a_five() {
    let res = run_cli(&["score", "1", "1", "1", "5", "2", "3"], "");
    assert_eq!(res.code, 0);
    assert!(res.stdout.contains("Dice: [1 1 1 2 3 5]"));
    assert!(res.stdout.contains("1) 300 [1 1 1] THREE OF A KIND"));
    assert!(res.stdout.contains("2) 50 [5] A FIVE"));
    assert!(res.stdout.contains("Total: 350"));
    assert!(res.stdout.contains("Hand: THREE OF A KIND AND A FIVE"));
}

#[test]
fn test_score_six_dice_combo() {
    let res = run_cli(&["score", "4,4,2,2,6,6"], "");
    assert_eq!(res.code, 0);
    assert!(res.stdout.contains("Total: 1500"));
    assert!(res.stdout.contains("Hand: THREE PAIRS"));
}

#[test]
fn test_score_bust() {
    let res = run_cli(&["score", "2", "3", "4", "6", "6", "3"], "");
    assert_eq!(res.code, 0);
    assert!(res.stdout.contains("(no scoring dice)"));
    assert!(res.stdout.contains("Hand: NO SCORE"));
}

#[test]
fn test_score_rejects_bad_dice() {
    let res = run_cli(&["score", "1", "7"], "");
    assert_eq!(res.code, 2);
    assert!(res.stdout.is_empty());
    assert!(res.stderr.contains("position 2 = 7"));

    let res = run_cli(&["score", "1", "2", "3", "4", "5", "6", "1"], "");
    assert_eq!(res.code, 2);
}
