// Host-side tests for the candle ceremony state machine, using explicit timestamps.

use card_core::*;

fn reveals(effects: &[CeremonyEffect]) -> usize {
    effects.iter().filter(|e| **e == CeremonyEffect::RevealWish).count()
}

#[test]
fn starts_lit_in_countdown() {
    let c = CandleCeremony::new(0.0);
    assert_eq!(c.phase(), CeremonyPhase::Countdown);
    assert_eq!(c.candles().len(), 3);
    assert!(c.candles().iter().all(|c| !c.blown));
    assert_eq!(c.next_due(), Some(3000.0));
}

#[test]
fn hint_appears_after_three_seconds_if_candles_remain() {
    let mut c = CandleCeremony::new(100.0);
    assert!(c.advance(3099.0).unwrap().is_empty());
    let fx = c.advance(3100.0).unwrap();
    assert_eq!(fx.as_slice(), &[CeremonyEffect::ShowBlowHint]);
    assert_eq!(c.phase(), CeremonyPhase::HintShown);
    assert!(c.advance(10_000.0).unwrap().is_empty());
}

#[test]
fn hint_is_skipped_when_everything_is_already_out() {
    let mut c = CandleCeremony::new(0.0);
    for i in 0..3 {
        c.blow(i, 500.0).unwrap();
    }
    assert_eq!(c.phase(), CeremonyPhase::AllBlown);
    // reveal at 1500, hint timer at 3000 finds nothing to do
    let fx = c.advance(5000.0).unwrap();
    assert_eq!(fx.as_slice(), &[CeremonyEffect::RevealWish]);
    assert_eq!(c.phase(), CeremonyPhase::WishRevealed);
}

#[test]
fn blowing_emits_blown_and_vibration() {
    let mut c = CandleCeremony::new(0.0);
    let fx = c.blow(1, 10.0).unwrap();
    assert_eq!(
        fx.as_slice(),
        &[CeremonyEffect::CandleBlown(1), CeremonyEffect::Vibrate(30)]
    );
    assert!(c.candles()[1].blown);
}

#[test]
fn reblowing_is_a_no_op() {
    let mut c = CandleCeremony::new(0.0);
    c.blow(0, 10.0).unwrap();
    assert!(c.blow(0, 20.0).unwrap().is_empty());
    assert_eq!(c.phase(), CeremonyPhase::Countdown);
}

#[test]
fn out_of_range_candle_is_an_error() {
    let mut c = CandleCeremony::new(0.0);
    assert_eq!(
        c.blow(3, 0.0).unwrap_err(),
        CeremonyError::NoSuchCandle { index: 3, count: 3 }
    );
}

#[test]
fn reveal_fires_once_one_second_after_last_blow_in_any_order() {
    let orders = [[0, 1, 2], [2, 1, 0], [1, 2, 0], [2, 0, 1]];
    for order in orders {
        let mut c = CandleCeremony::new(0.0);
        let mut t = 200.0;
        let mut total = 0;
        for &i in &order {
            total += reveals(&c.blow(i, t).unwrap());
            total += reveals(&c.advance(t).unwrap());
            t += 700.0;
        }
        let last = t - 700.0;
        assert_eq!(c.phase(), CeremonyPhase::AllBlown);
        total += reveals(&c.advance(last + 999.0).unwrap());
        assert_eq!(total, 0, "order {order:?}");
        total += reveals(&c.advance(last + 1000.0).unwrap());
        assert_eq!(total, 1);
        assert_eq!(c.phase(), CeremonyPhase::WishRevealed);

        // nothing re-triggers it
        for i in 0..3 {
            assert!(c.blow(i, last + 2000.0).unwrap().is_empty());
        }
        c.blow_all(last + 2000.0);
        assert_eq!(reveals(&c.advance(last + 60_000.0).unwrap()), 0);
    }
}

#[test]
fn blow_all_staggers_by_index() {
    let mut c = CandleCeremony::new(0.0);
    c.blow_all(1000.0);
    let fx = c.advance(1000.0).unwrap();
    assert_eq!(fx[0], CeremonyEffect::CandleBlown(0));
    assert_eq!(c.advance(1149.0).unwrap().len(), 0);
    let fx = c.advance(1150.0).unwrap();
    assert_eq!(fx[0], CeremonyEffect::CandleBlown(1));
    let fx = c.advance(1300.0).unwrap();
    assert_eq!(
        fx.as_slice(),
        &[CeremonyEffect::CandleBlown(2), CeremonyEffect::Vibrate(30)]
    );
    assert_eq!(c.phase(), CeremonyPhase::AllBlown);
    assert_eq!(c.next_due(), Some(2300.0));
    assert_eq!(reveals(&c.advance(2300.0).unwrap()), 1);
}

#[test]
fn blow_all_skips_candles_already_out() {
    let mut c = CandleCeremony::new(0.0);
    c.blow(0, 0.0).unwrap();
    c.blow(2, 0.0).unwrap();
    c.blow_all(500.0);
    // only candle 1 is queued, at its own slot (+150ms)
    assert_eq!(c.next_due(), Some(650.0));
    let fx = c.advance(650.0).unwrap();
    assert_eq!(fx[0], CeremonyEffect::CandleBlown(1));
    assert_eq!(c.next_due(), Some(1650.0));
}

#[test]
fn late_pump_fires_chained_timers_at_their_own_times() {
    let mut c = CandleCeremony::new(0.0);
    c.blow_all(0.0);
    // one late pump covers the staggered blows, the hint slot and the reveal
    let fx = c.advance(60_000.0).unwrap();
    assert_eq!(reveals(&fx), 1);
    assert!(!fx.contains(&CeremonyEffect::ShowBlowHint));
    assert_eq!(c.phase(), CeremonyPhase::WishRevealed);
    assert!(c.next_due().is_none());
}
