use holdem_cli::CliError;
use holdem_cli::commands::handle_play_command;
use std::io::Cursor;

fn play(
    opponents: Option<usize>,
    seed: u64,
    name: Option<&str>,
    input: &str,
) -> (Result<(), CliError>, String) {
    let mut out: Vec<u8> = Vec::new();
    let mut err: Vec<u8> = Vec::new();
    let mut stdin = Cursor::new(input.as_bytes().to_vec());
    let res = handle_play_command(
        opponents,
        Some(seed),
        None,
        name.map(str::to_string),
        &mut out,
        &mut err,
        &mut stdin,
    );
    (res, String::from_utf8_lossy(&out).into_owned())
}

fn has_final_result(out: &str) -> bool {
    out.contains("Congrats! You made $")
        || out.contains("You broke even!")
        || out.contains("Unfortunately, you lost $")
}

#[test]
fn closed_input_plays_one_round_then_stops() {
    let (res, out) = play(Some(4), 3, Some("Tess"), "");
    assert!(res.is_ok(), "{:?}", res);
    assert!(out.contains("Hi Tess! It's time to get your game on, good luck!"));
    assert!(out.contains("Starting round 1!"));
    assert!(out.contains("Dealing cards..."));
    assert!(out.contains("Your starting hand is ["));
    assert!(out.contains("Do you want to continue playing? (Y/N) "));
    assert!(!out.contains("Starting round 2!"));
    assert!(!out.contains("Please enter your name"));
    assert!(has_final_result(&out));
}

#[test]
fn name_is_read_from_input_when_not_given() {
    let (res, out) = play(Some(2), 9, None, "Mina\n");
    assert!(res.is_ok());
    assert!(out.contains("Please enter your name: "));
    assert!(out.contains("Hi Mina!"));
}

#[test]
fn blank_name_falls_back_to_a_default() {
    let (res, out) = play(Some(2), 9, None, "\n");
    assert!(res.is_ok());
    assert!(out.contains("Hi Player!"));
}

#[test]
fn opponents_enter_the_round_with_their_stacks() {
    let (_, out) = play(Some(3), 5, Some("Tess"), "");
    assert!(out.contains("Tess has entered the round with a bankroll of $100"));
    assert!(out.contains("Lil' "));
    assert!(out.contains("Big "));
    assert!(out.contains("has entered the round with a bankroll of $80"));
    assert!(out.contains("has entered the round with a bankroll of $120"));
}

#[test]
fn same_seed_deals_the_same_game() {
    let (_, a) = play(Some(4), 77, Some("Tess"), "");
    let (_, b) = play(Some(4), 77, Some("Tess"), "");
    assert_eq!(a, b);
}

#[test]
fn too_many_opponents_is_a_config_error() {
    let (res, out) = play(Some(12), 1, Some("Tess"), "");
    assert!(matches!(res, Err(CliError::Config(_))));
    assert!(out.is_empty());
}

#[test]
fn typed_raise_reaches_the_table() {
    let mut raised = 0;
    for seed in 1..=20 {
        let (res, out) = play(Some(3), seed, Some("Tess"), "10\nC\nY\n");
        assert!(res.is_ok(), "seed {}: {:?}", seed, res);
        assert!(out.contains("Starting round 1!"));
        assert!(
            has_final_result(&out) || out.contains("Oh No! You went bankrupt!"),
            "seed {}",
            seed
        );

        if let Some(at) = out.find("Tess has decided to raise the bet by $10!") {
            let asked = out
                .find("Would you like to raise? If so, type how much. If not, type 0: ")
                .expect("raise prompt");
            assert!(asked < at);
            raised += 1;
        }
    }
    assert!(raised > 0);
}
