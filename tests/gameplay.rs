// Integration tests (native) for the `clock-reader` crate.
// These play whole rounds through the public API without touching the browser.

use clock_reader::answer::{self, Verdict};
use clock_reader::clock::{self, ClockTime, Lcg};
use clock_reader::game::state::{GameState, KeyOutcome, Phase};
use clock_reader::input::{InputBuffer, Key};
use clock_reader::GameConfig;

fn new_game(seed: u64) -> GameState {
    GameState::new(&GameConfig::default(), Box::new(Lcg::new(seed)))
}

// Feed DOM-style key names through the same filter the page listeners use.
fn press(game: &mut GameState, key: &str) {
    if let Some(k) = Key::from_key_down(key, key) {
        game.on_key_down(k);
    }
}

fn release_enter(game: &mut GameState) -> KeyOutcome {
    match Key::from_key_up("Enter", "Enter") {
        Some(k) => game.on_key_up(k),
        None => KeyOutcome::Ignored,
    }
}

fn typed_answer(t: ClockTime) -> String {
    format!("{:02}{:02}", t.display_hours(), t.minutes())
}

#[test]
fn plays_ten_rounds_in_a_row() {
    let mut game = new_game(7);
    for round in 1..=10 {
        let shown = game.time();
        for ch in typed_answer(shown).chars() {
            press(&mut game, &ch.to_string());
        }
        assert_eq!(release_enter(&mut game), KeyOutcome::RoundSolved(shown));
        assert_eq!(game.rounds_solved(), round);
        assert_eq!(game.input().readout(), "__:__");
    }
}

#[test]
fn letters_and_modifiers_never_reach_the_buffer() {
    let mut game = new_game(1);
    for key in ["a", "Shift", " ", ":", "Enter", "ArrowLeft", "1"] {
        press(&mut game, key);
    }
    assert_eq!(game.input().readout(), "1_:__");
}

#[test]
fn wrong_answer_turns_red_until_corrected() {
    let mut game = new_game(99);
    let shown = game.time();
    let right = typed_answer(shown);
    let wrong_minute = (shown.minutes() + 1) % 60;
    let wrong = format!("{:02}{:02}", shown.display_hours(), wrong_minute);
    for ch in wrong.chars() {
        press(&mut game, &ch.to_string());
    }
    assert_eq!(game.verdict(), Verdict::Incorrect);
    assert_eq!(release_enter(&mut game), KeyOutcome::Rejected);
    assert_eq!(game.phase(), Phase::ReadyToSubmit);

    for _ in 0..4 {
        press(&mut game, "Backspace");
    }
    assert_eq!(game.phase(), Phase::AwaitingInput);
    for ch in right.chars() {
        press(&mut game, &ch.to_string());
    }
    assert_eq!(game.verdict(), Verdict::Correct);
    assert_eq!(release_enter(&mut game), KeyOutcome::RoundSolved(shown));
}

#[test]
fn hands_settle_on_the_shown_time() {
    let mut game = new_game(3);
    let mut ts = 0.0;
    for _ in 0..600 {
        game.tick(ts);
        ts += 1000.0 / 60.0;
    }
    let want = clock::angles_for(game.time());
    let got = game.animation().current();
    assert!((got.hour - want.hour).abs() < 1e-6);
    assert!((got.minute - want.minute).abs() < 1e-6);
}

#[test]
fn documented_examples() {
    let mut buf = InputBuffer::new();
    for d in [0, 3, 1, 5] {
        buf.push_digit(d);
    }
    assert!(answer::matches(&buf, ClockTime::new(3, 15).unwrap()));

    let mut buf = InputBuffer::new();
    for d in [1, 2, 0, 0] {
        buf.push_digit(d);
    }
    assert!(answer::matches(&buf, ClockTime::new(0, 0).unwrap()));

    buf.backspace();
    buf.backspace();
    assert!(!answer::matches(&buf, ClockTime::new(0, 0).unwrap()));
}
