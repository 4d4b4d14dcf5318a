use std::fmt;

use thiserror::Error;

// Which octave law a fractal error refers to
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum LawKind {
    Weight,
    Frequency,
}

impl fmt::Display for LawKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            LawKind::Weight => f.write_str("weight"),
            LawKind::Frequency => f.write_str("frequency"),
        }
    }
}

// Configuration errors, all raised while constructing a generator.
// Evaluation itself never fails.
#[derive(Debug, Clone, PartialEq, Error)]
pub enum NoiseError {
    #[error("gradient table must hold at least one gradient")]
    NoGradients,

    #[error("smoothstep order {order} exceeds the supported maximum of {max}")]
    SmoothnessTooHigh { order: u32, max: u32 },

    #[error("fractal noise needs at least one octave")]
    NoOctaves,

    #[error("{kind} law produced a non-finite value at octave {octave}")]
    NonFiniteOctave { octave: usize, kind: LawKind },

    #[error("tile size must be positive and finite, got {width}x{height}")]
    InvalidTileSize { width: f64, height: f64 },
}
