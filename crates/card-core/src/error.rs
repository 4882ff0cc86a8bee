use thiserror::Error;

use crate::candles::CeremonyPhase;

#[derive(Debug, Error, Clone, PartialEq)]
pub enum SurfaceError {
    #[error("non-finite canvas size {width}x{height}")]
    NonFiniteSize { width: f64, height: f64 },
}

#[derive(Debug, Error, Clone, PartialEq)]
pub enum CeremonyError {
    #[error("no candle at index {index} (have {count})")]
    NoSuchCandle { index: usize, count: usize },
    #[error("illegal transition from {from:?} to {to:?}")]
    IllegalTransition { from: CeremonyPhase, to: CeremonyPhase },
}
