//! RNG module - piece selection
//!
//! Pieces are drawn uniformly and independently from the seven kinds. There is
//! no bag: the same kind can come up several times in a row.
//!
//! A scripted source replays a fixed sequence, which keeps tests and demos
//! deterministic without depending on a particular RNG stream.

use rand::rngs::StdRng;
use rand::{Rng, SeedableRng};

use crate::types::PieceKind;

/// Source of piece kinds for the engine
#[derive(Debug, Clone)]
pub enum PieceSource {
    /// Uniform random draws
    Random { rng: StdRng, seed: Option<u64> },
    /// Cycles through `sequence` forever
    Scripted {
        sequence: Vec<PieceKind>,
        position: usize,
    },
}

impl PieceSource {
    /// Uniform source; seeded for reproducible sessions, OS entropy otherwise
    pub fn random(seed: Option<u64>) -> Self {
        let rng = match seed {
            Some(seed) => StdRng::seed_from_u64(seed),
            None => StdRng::from_entropy(),
        };
        Self::Random { rng, seed }
    }

    /// Source that repeats `sequence`
    ///
    /// An empty sequence falls back to a single I piece.
    pub fn scripted(sequence: impl Into<Vec<PieceKind>>) -> Self {
        let mut sequence = sequence.into();
        if sequence.is_empty() {
            sequence.push(PieceKind::I);
        }
        Self::Scripted {
            sequence,
            position: 0,
        }
    }

    /// Draw the next kind
    pub fn next_kind(&mut self) -> PieceKind {
        match self {
            Self::Random { rng, .. } => PieceKind::ALL[rng.gen_range(0..PieceKind::ALL.len())],
            Self::Scripted { sequence, position } => {
                let kind = sequence[*position % sequence.len()];
                *position = (*position + 1) % sequence.len();
                kind
            }
        }
    }

    /// Seed of a random source, if one was given
    pub fn seed(&self) -> Option<u64> {
        match self {
            Self::Random { seed, .. } => *seed,
            Self::Scripted { .. } => None,
        }
    }
}

impl Default for PieceSource {
    fn default() -> Self {
        Self::random(None)
    }
}
