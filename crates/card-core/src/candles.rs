//! Candle-blowing ceremony on the wish page.
//!
//! The page owns one [`CandleCeremony`]. Every operation takes the current
//! time and returns the effects the DOM side should apply; delayed work (the
//! hint, staggered "blow all", the reveal) sits in a [`Timeline`] that the
//! host pumps with [`CandleCeremony::advance`].

use smallvec::SmallVec;

use crate::constants::*;
use crate::error::CeremonyError;
use crate::timeline::Timeline;

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum CeremonyPhase {
    /// Candles lit, hint timer pending.
    Countdown,
    /// The "blow" hint is on screen; candles still lit.
    HintShown,
    /// Every candle is out; the reveal is scheduled.
    AllBlown,
    /// Terminal.
    WishRevealed,
}

impl CeremonyPhase {
    fn can_become(self, next: CeremonyPhase) -> bool {
        use CeremonyPhase::*;
        matches!(
            (self, next),
            (Countdown, HintShown) | (Countdown, AllBlown) | (HintShown, AllBlown) | (AllBlown, WishRevealed)
        )
    }
}

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum CeremonyEffect {
    CandleBlown(usize),
    Vibrate(u32),
    ShowBlowHint,
    RevealWish,
}

pub type Effects = SmallVec<[CeremonyEffect; 4]>;

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
enum CeremonyTimer {
    Hint,
    Blow(usize),
    Reveal,
}

#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub struct Candle {
    pub blown: bool,
}

#[derive(Debug)]
pub struct CandleCeremony {
    candles: [Candle; CANDLE_COUNT],
    phase: CeremonyPhase,
    timeline: Timeline<CeremonyTimer>,
}

impl CandleCeremony {
    /// Light all candles at `now_ms` and arm the hint timer.
    pub fn new(now_ms: f64) -> Self {
        let mut timeline = Timeline::new();
        timeline.schedule(now_ms + CANDLE_HINT_DELAY_MS, CeremonyTimer::Hint);
        Self {
            candles: [Candle::default(); CANDLE_COUNT],
            phase: CeremonyPhase::Countdown,
            timeline,
        }
    }

    pub fn phase(&self) -> CeremonyPhase {
        self.phase
    }

    pub fn candles(&self) -> &[Candle] {
        &self.candles
    }

    pub fn all_blown(&self) -> bool {
        self.candles.iter().all(|c| c.blown)
    }

    /// When the host should next call [`advance`](Self::advance).
    pub fn next_due(&self) -> Option<f64> {
        self.timeline.next_due()
    }

    /// Blow out one candle. Already-blown candles are left alone.
    pub fn blow(&mut self, index: usize, now_ms: f64) -> Result<Effects, CeremonyError> {
        let count = self.candles.len();
        let candle = self
            .candles
            .get_mut(index)
            .ok_or(CeremonyError::NoSuchCandle { index, count })?;
        let mut out = Effects::new();
        if candle.blown {
            return Ok(out);
        }
        candle.blown = true;
        out.push(CeremonyEffect::CandleBlown(index));
        out.push(CeremonyEffect::Vibrate(CANDLE_VIBRATE_MS));

        if self.all_blown() {
            self.transition(CeremonyPhase::AllBlown)?;
            self.timeline
                .schedule(now_ms + CANDLE_REVEAL_DELAY_MS, CeremonyTimer::Reveal);
        }
        Ok(out)
    }

    /// Queue every lit candle, staggered by its position in the row.
    pub fn blow_all(&mut self, now_ms: f64) {
        for (i, c) in self.candles.iter().enumerate() {
            if !c.blown {
                let due = now_ms + CANDLE_BLOW_STAGGER_MS * i as f64;
                self.timeline.schedule(due, CeremonyTimer::Blow(i));
            }
        }
    }

    /// Fire every timer due at or before `now_ms`, each at its own due time.
    pub fn advance(&mut self, now_ms: f64) -> Result<Effects, CeremonyError> {
        let mut out = Effects::new();
        // Firing a timer may arm another one that is already due.
        loop {
            let due_now = self.timeline.drain_due(now_ms);
            if due_now.is_empty() {
                return Ok(out);
            }
            for (due, timer) in due_now {
                match timer {
                    CeremonyTimer::Hint => {
                        if self.phase == CeremonyPhase::Countdown {
                            self.transition(CeremonyPhase::HintShown)?;
                            out.push(CeremonyEffect::ShowBlowHint);
                        }
                    }
                    CeremonyTimer::Blow(i) => out.extend(self.blow(i, due)?),
                    CeremonyTimer::Reveal => {
                        self.transition(CeremonyPhase::WishRevealed)?;
                        out.push(CeremonyEffect::RevealWish);
                    }
                }
            }
        }
    }

    fn transition(&mut self, next: CeremonyPhase) -> Result<(), CeremonyError> {
        if !self.phase.can_become(next) {
            return Err(CeremonyError::IllegalTransition {
                from: self.phase,
                to: next,
            });
        }
        log::debug!("[candles] {:?} -> {:?}", self.phase, next);
        self.phase = next;
        Ok(())
    }
}
