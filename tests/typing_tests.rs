// Host-side tests for the typing effect state machine.
// The main crate is wasm-only, so we include the pure-Rust modules directly.

#![allow(dead_code)]
mod constants {
    include!("../src/core/constants.rs");
}
mod typing {
    include!("../src/core/typing.rs");
}

use std::time::Duration;
use typing::*;

fn ms(v: u64) -> Duration {
    Duration::from_millis(v)
}

#[test]
fn default_config_matches_hero_timing() {
    let c = TypingConfig::default();
    assert_eq!(c.typing_speed, ms(150));
    assert_eq!(c.deleting_speed, ms(75));
    assert_eq!(c.pause, ms(1000));
    assert!(!c.looping);
    assert!(TypingConfig::looping().looping);
}

#[test]
fn single_string_types_once_and_stays() {
    let mut s = TypingSession::single("Hi", TypingConfig::default());
    assert_eq!(s.revealed(), "");
    assert_eq!(s.mode(), Mode::Typing);
    assert_eq!(s.initial_delay(), ms(150));

    assert_eq!(s.tick(), Some(ms(150)));
    assert_eq!(s.revealed(), "H");
    assert_eq!(s.tick(), Some(ms(150)));
    assert_eq!(s.revealed(), "Hi");

    for _ in 0..50 {
        assert_eq!(s.tick(), None);
        assert_eq!(s.revealed(), "Hi");
        assert_eq!(s.mode(), Mode::Typing);
    }
    assert!(s.is_finished());
}

#[test]
fn looping_sequence_cycles_through_candidates() {
    let mut s = TypingSession::new(["a", "bb"], TypingConfig::looping());
    let mut trace = Vec::new();
    for _ in 0..16 {
        let delay = s.tick();
        trace.push((s.revealed().to_string(), s.mode(), s.index(), delay));
    }
    let expected: Vec<(String, Mode, usize, Option<Duration>)> = vec![
        ("a".into(), Mode::Typing, 0, Some(ms(150))),
        ("a".into(), Mode::Deleting, 0, Some(ms(1000))),
        ("".into(), Mode::Deleting, 0, Some(ms(75))),
        ("".into(), Mode::Typing, 1, Some(ms(150))),
        ("b".into(), Mode::Typing, 1, Some(ms(150))),
        ("bb".into(), Mode::Typing, 1, Some(ms(150))),
        ("bb".into(), Mode::Deleting, 1, Some(ms(1000))),
        ("b".into(), Mode::Deleting, 1, Some(ms(75))),
        ("".into(), Mode::Deleting, 1, Some(ms(75))),
        ("".into(), Mode::Typing, 0, Some(ms(150))),
        ("a".into(), Mode::Typing, 0, Some(ms(150))),
        ("a".into(), Mode::Deleting, 0, Some(ms(1000))),
        ("".into(), Mode::Deleting, 0, Some(ms(75))),
        ("".into(), Mode::Typing, 1, Some(ms(150))),
        ("b".into(), Mode::Typing, 1, Some(ms(150))),
        ("bb".into(), Mode::Typing, 1, Some(ms(150))),
    ];
    assert_eq!(trace, expected);
}

#[test]
fn revealed_never_exceeds_current_candidate() {
    let mut s = TypingSession::new(["alpha", "be", "gamma ray"], TypingConfig::looping());
    for _ in 0..500 {
        s.tick();
        assert!(s.current_text().starts_with(s.revealed()));
        assert!(s.index() < 3);
    }
}

#[test]
fn reveals_whole_characters_not_bytes() {
    let mut s = TypingSession::single("héllo ✨", TypingConfig::default());
    s.tick();
    s.tick();
    assert_eq!(s.revealed(), "hé");
    for _ in 0..5 {
        s.tick();
    }
    assert_eq!(s.revealed(), "héllo ✨");
    assert_eq!(s.tick(), None);
}

#[test]
fn non_looping_sequence_stays_on_first_candidate() {
    let mut s = TypingSession::new(["one", "two"], TypingConfig::default());
    for _ in 0..20 {
        s.tick();
    }
    assert_eq!(s.revealed(), "one");
    assert_eq!(s.index(), 0);
    assert!(s.is_finished());
}

#[test]
fn empty_candidate_list_is_one_empty_string() {
    let mut s = TypingSession::new(Vec::<String>::new(), TypingConfig::default());
    assert_eq!(s.revealed(), "");
    assert_eq!(s.tick(), None);
}

#[test]
fn reconfiguring_keeps_progress() {
    let mut s = TypingSession::single("hello", TypingConfig::default());
    s.tick();
    s.tick();
    s.set_config(TypingConfig {
        typing_speed: ms(10),
        ..TypingConfig::default()
    });
    assert_eq!(s.revealed(), "he");
    assert_eq!(s.tick(), Some(ms(10)));
    assert_eq!(s.revealed(), "hel");
}

#[test]
fn enabling_loop_on_a_finished_session_resumes_it() {
    let mut s = TypingSession::single("ok", TypingConfig::default());
    while s.tick().is_some() {}
    assert!(s.is_finished());
    s.set_config(TypingConfig::looping());
    assert!(!s.is_finished());
    assert_eq!(s.tick(), Some(ms(1000)));
    assert_eq!(s.mode(), Mode::Deleting);
}

#[test]
fn replacing_texts_clamps_index_and_prefix() {
    let mut s = TypingSession::new(["x", "longer text"], TypingConfig::looping());
    // Advance onto the second candidate and type part of it.
    while s.index() != 1 {
        s.tick();
    }
    for _ in 0..6 {
        s.tick();
    }
    assert_eq!(s.revealed(), "longer");

    s.set_texts(["hi"]);
    assert_eq!(s.index(), 0);
    assert_eq!(s.revealed(), "hi");
}

#[test]
fn reconfiguring_mid_pause_keeps_the_pause() {
    let mut s = TypingSession::single("a", TypingConfig::looping());
    assert_eq!(s.tick(), Some(ms(150)));
    assert_eq!(s.tick(), Some(ms(1000)));
    assert!(s.is_holding());

    s.set_config(TypingConfig {
        pause: ms(400),
        ..TypingConfig::looping()
    });
    assert_eq!(s.initial_delay(), ms(400));
    assert_eq!(s.revealed(), "a");

    // The pause ends with the first deletion.
    assert_eq!(s.tick(), Some(ms(75)));
    assert_eq!(s.revealed(), "");
    assert!(!s.is_holding());
    assert_eq!(s.initial_delay(), ms(75));
}

#[test]
fn replacing_texts_mid_pause_keeps_the_pause() {
    let mut s = TypingSession::new(["abc", "de"], TypingConfig::looping());
    while !s.is_holding() {
        s.tick();
    }
    assert_eq!(s.revealed(), "abc");

    s.set_texts(["xyz", "de"]);
    assert_eq!(s.initial_delay(), ms(1000));
    assert_eq!(s.revealed(), "xyz");
    assert_eq!(s.tick(), Some(ms(75)));
    assert_eq!(s.revealed(), "xy");
}
