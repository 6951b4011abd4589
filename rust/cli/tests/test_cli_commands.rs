use holdem_cli::run;

fn run_cli(args: &[&str]) -> (i32, String, String) {
    let mut out: Vec<u8> = Vec::new();
    let mut err: Vec<u8> = Vec::new();
    let code = run(args.iter().copied(), &mut out, &mut err);
    (
        code,
        String::from_utf8_lossy(&out).into_owned(),
        String::from_utf8_lossy(&err).into_owned(),
    )
}

#[test]
fn score_prints_cards_score_and_label() {
    let (code, out, err) = run_cli(&["holdem", "score", "AS", "KS", "QS", "JS", "TS"]);
    assert_eq!(code, 0, "stderr: {}", err);
    assert!(out.contains("Cards: [Ace of Spades, King of Spades, Queen of Spades, Jack of Spades, 10 of Spades]"));
    assert!(out.contains("Score: 134.00000000"));
    assert!(out.contains("Hand: Royal Flush!!!"));
}

#[test]
fn score_accepts_ten_written_out_and_lowercase() {
    let (code, out, _) = run_cli(&["holdem", "score", "10h", "td"]);
    assert_eq!(code, 0);
    assert!(out.contains("Two of a Kind!"));
}

#[test]
fn score_rejects_too_many_cards() {
    let (code, out, err) = run_cli(&[
        "holdem", "score", "2C", "3C", "4C", "5C", "6C", "7C", "8C", "9C",
    ]);
    assert_eq!(code, 2);
    assert!(out.is_empty());
    assert!(err.contains("between 2 and 7 cards"));
}

#[test]
fn score_rejects_unknown_cards() {
    let (code, _, err) = run_cli(&["holdem", "score", "AS", "QX"]);
    assert_eq!(code, 2);
    assert!(err.contains("QX"));
}

#[test]
fn missing_subcommand_is_a_usage_error() {
    let (code, out, err) = run_cli(&["holdem"]);
    assert_eq!(code, 2);
    assert!(out.is_empty());
    assert!(err.contains("Usage: holdem <command> [options]"));
}

#[test]
fn top_level_help_lists_subcommands() {
    let (code, out, _) = run_cli(&["holdem", "--help"]);
    assert_eq!(code, 0);
    for c in ["play", "sim", "score", "cfg"] {
        assert!(out.contains(c), "help should mention {}", c);
    }
}
