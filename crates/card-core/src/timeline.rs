use instant::Instant;
use smallvec::SmallVec;

/// Milliseconds since some fixed origin.
pub trait Clock {
    fn now_ms(&self) -> f64;
}

/// Monotonic clock anchored at page start.
#[derive(Clone, Copy, Debug)]
pub struct PageClock {
    origin: Instant,
}

impl PageClock {
    pub fn start() -> Self {
        Self {
            origin: Instant::now(),
        }
    }
}

impl Clock for PageClock {
    fn now_ms(&self) -> f64 {
        self.origin.elapsed().as_secs_f64() * 1000.0
    }
}

/// One-shot timers ordered by due time; ties fire in scheduling order.
#[derive(Clone, Debug)]
pub struct Timeline<E> {
    pending: SmallVec<[(f64, E); 8]>,
}

impl<E> Default for Timeline<E> {
    fn default() -> Self {
        Self {
            pending: SmallVec::new(),
        }
    }
}

impl<E> Timeline<E> {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn schedule(&mut self, due_ms: f64, event: E) {
        let at = self.pending.partition_point(|(d, _)| *d <= due_ms);
        self.pending.insert(at, (due_ms, event));
    }

    pub fn next_due(&self) -> Option<f64> {
        self.pending.first().map(|(d, _)| *d)
    }

    /// Remove and return every `(due_ms, event)` due at or before `now_ms`.
    pub fn drain_due(&mut self, now_ms: f64) -> SmallVec<[(f64, E); 8]> {
        let n = self.pending.partition_point(|(d, _)| *d <= now_ms);
        self.pending.drain(..n).collect()
    }

    pub fn len(&self) -> usize {
        self.pending.len()
    }

    pub fn is_empty(&self) -> bool {
        self.pending.is_empty()
    }
}
