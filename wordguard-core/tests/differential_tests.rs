// wordguard-core/tests/differential_tests.rs
//! Cross-checks the automaton against `daachorse` on random dictionaries and
//! haystacks, and the DFA against the automaton.

use std::collections::BTreeSet;

use daachorse::DoubleArrayAhoCorasick;
use rand::rngs::StdRng;
use rand::{Rng, SeedableRng};
use wordguard_core::{Automaton, Dfa, Matcher};

const ALPHABET: [char; 5] = ['a', 'b', 'c', 'é', '中'];

fn random_word(rng: &mut StdRng, max_len: usize) -> String {
    let len = rng.random_range(1..=max_len);
    (0..len).map(|_| ALPHABET[rng.random_range(0..ALPHABET.len())]).collect()
}

fn random_dictionary(rng: &mut StdRng) -> BTreeSet<String> {
    let count = rng.random_range(1..=12);
    (0..count).map(|_| random_word(rng, 5)).collect()
}

fn spans(m: &dyn Matcher, text: &str) -> Vec<(usize, usize, String)> {
    let mut out: Vec<_> = m
        .find_blocks(text, None)
        .into_iter()
        .map(|b| (b.start, b.end, b.matched))
        .collect();
    out.sort();
    out
}

#[test]
fn automaton_agrees_with_daachorse() {
    let mut rng = StdRng::seed_from_u64(0x5eed);
    for round in 0..200 {
        let dict = random_dictionary(&mut rng);
        let text = random_word(&mut rng, 40);

        let mut a = Automaton::new();
        for w in &dict {
            a.add(w);
        }
        a.build();

        let patterns: Vec<&str> = dict.iter().map(String::as_str).collect();
        let pma: DoubleArrayAhoCorasick<usize> = DoubleArrayAhoCorasick::new(&patterns).unwrap();
        let mut expected: Vec<(usize, usize, String)> = pma
            .find_overlapping_iter(&text)
            .map(|m| (m.start(), m.end(), patterns[m.value()].to_string()))
            .collect();
        expected.sort();

        assert_eq!(spans(&a, &text), expected, "round {round}: dict {dict:?}, text {text:?}");
    }
}

#[test]
fn delete_matches_fresh_build() {
    let mut rng = StdRng::seed_from_u64(42);
    for round in 0..200 {
        let dict = random_dictionary(&mut rng);
        let removed: Vec<&String> = dict.iter().filter(|_| rng.random_bool(0.4)).collect();
        let text = random_word(&mut rng, 40);

        let mut mutated = Automaton::new();
        for w in &dict {
            mutated.add(w);
        }
        for w in &removed {
            mutated.delete(w);
        }
        mutated.build();

        let mut fresh = Automaton::new();
        for w in dict.iter().filter(|w| !removed.contains(w)) {
            fresh.add(w);
        }
        fresh.build();

        assert_eq!(spans(&mutated, &text), spans(&fresh, &text), "round {round}");
        assert_eq!(mutated.node_count(), fresh.node_count(), "round {round}: dead nodes left behind");
    }
}

#[test]
fn dfa_agrees_with_automaton() {
    let mut rng = StdRng::seed_from_u64(7);
    for round in 0..200 {
        let dict = random_dictionary(&mut rng);
        let text = random_word(&mut rng, 40);

        let mut a = Automaton::new();
        let mut d = Dfa::new();
        for w in &dict {
            a.add(w);
            d.add(w);
        }
        a.build();
        d.build();

        assert_eq!(spans(&a, &text), spans(&d, &text), "round {round}");
    }
}
