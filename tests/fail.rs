use rosu_ruleset::{OsuRuleset, PlayerSetup, Target};

use self::common::*;

mod common;

/// Circles every 500ms starting at 1000ms.
fn circles(n: usize) -> Vec<Box<dyn Target>> {
    (0..n)
        .map(|i| TestCircle::new(1000.0 + 500.0 * i as f64).boxed())
        .collect()
}

fn lethal(mods: u32, n: usize) -> OsuRuleset {
    builder(MAX_DRAIN)
        .player(PlayerSetup::new("player").mods(mods))
        .build(circles(n))
        .unwrap()
}

const MAX_DRAIN: f64 = 200.0;

#[test]
fn fails_once() {
    let mut ruleset = lethal(NM, 4);
    let recorder = Recorder::attach(&mut ruleset);
    let player = ruleset.players().next().unwrap();

    run(&mut ruleset, &[&[]], 0, 1200);

    assert!(ruleset.is_failed(player));
    assert_eq!(*recorder.fails.borrow(), [player]);

    run(&mut ruleset, &[&[]], 1210, 3000);

    assert_eq!(ruleset.hits(player).misses, 4);
    assert_eq!(recorder.fails.borrow().len(), 1);
}

#[test]
fn easy_recovers_twice() {
    let mut ruleset = lethal(EZ, 4);
    let recorder = Recorder::attach(&mut ruleset);
    let player = ruleset.players().next().unwrap();

    assert_eq!(ruleset.score_state(player).recoveries, 2);

    // EZ widens the 50 window to 175ms so misses land at 1180, 1680, ...
    run(&mut ruleset, &[&[]], 0, 1800);

    let state = ruleset.score_state(player);
    assert_eq!(state.hits.misses, 2);
    assert_eq!(state.recoveries, 0);
    assert!(!state.failed);
    assert_eq_float(ruleset.hp(player), 160.0 / 200.0);

    run(&mut ruleset, &[&[]], 1810, 2300);

    assert!(ruleset.is_failed(player));
    assert_eq!(*recorder.fails.borrow(), [player]);

    run(&mut ruleset, &[&[]], 2310, 3000);

    assert_eq!(ruleset.hits(player).misses, 4);
    assert_eq!(recorder.fails.borrow().len(), 1);
}

#[test]
fn immune_mods_never_fail() {
    for mods in [NF, RX, AP, NF | EZ] {
        let mut ruleset = lethal(mods, 3);
        let recorder = Recorder::attach(&mut ruleset);
        let player = ruleset.players().next().unwrap();

        run(&mut ruleset, &[&[]], 0, 2500);

        assert_eq!(ruleset.hits(player).misses, 3);
        assert!(!ruleset.is_failed(player), "mods {mods}");
        assert!(recorder.fails.borrow().is_empty());
    }
}

#[test]
fn hits_keep_player_alive() {
    let mut ruleset = builder(100.0)
        .player(PlayerSetup::new("player"))
        .build(circles(3))
        .unwrap();

    let player = ruleset.players().next().unwrap();

    // miss, hit, miss: 200 - 100 + 10 - 100 = 10
    run(&mut ruleset, &[&[1500]], 0, 2500);

    assert!(!ruleset.is_failed(player));
    assert_eq_float(ruleset.hp(player), 10.0 / 200.0);
}
