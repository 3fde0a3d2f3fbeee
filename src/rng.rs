//! Seedable random number generators
//!
//! Physics and appearance draw from separate generators so that changing how
//! colors are picked can never perturb the generated initial conditions.

use rand_chacha::{ChaCha8Rng, rand_core::SeedableRng};
use std::ops::{Deref, DerefMut};

/// Offset mixed into the seed of the rendering generator
const RENDERING_SEED_OFFSET: u64 = 0x9E37_79B9_7F4A_7C15;

/// Generator for anything that affects physical state
#[derive(Debug, Clone, PartialEq)]
pub struct SharedRng(pub ChaCha8Rng);

impl SharedRng {
    pub fn from_seed(seed: u64) -> Self {
        Self(ChaCha8Rng::seed_from_u64(seed))
    }

    pub fn from_optional_seed(seed: Option<u64>) -> Self {
        match seed {
            Some(seed) => Self::from_seed(seed),
            None => Self::default(),
        }
    }
}

impl Default for SharedRng {
    fn default() -> Self {
        Self(ChaCha8Rng::from_rng(&mut rand::rng()))
    }
}

impl Deref for SharedRng {
    type Target = ChaCha8Rng;

    fn deref(&self) -> &Self::Target {
        &self.0
    }
}

impl DerefMut for SharedRng {
    fn deref_mut(&mut self) -> &mut Self::Target {
        &mut self.0
    }
}

/// Generator for colors and other purely visual choices
#[derive(Debug, Clone, PartialEq)]
pub struct RenderingRng(pub ChaCha8Rng);

impl RenderingRng {
    pub fn from_seed(seed: u64) -> Self {
        Self(ChaCha8Rng::seed_from_u64(seed.wrapping_add(RENDERING_SEED_OFFSET)))
    }

    pub fn from_optional_seed(seed: Option<u64>) -> Self {
        match seed {
            Some(seed) => Self::from_seed(seed),
            None => Self::default(),
        }
    }
}

impl Default for RenderingRng {
    fn default() -> Self {
        Self(ChaCha8Rng::from_rng(&mut rand::rng()))
    }
}

impl Deref for RenderingRng {
    type Target = ChaCha8Rng;

    fn deref(&self) -> &Self::Target {
        &self.0
    }
}

impl DerefMut for RenderingRng {
    fn deref_mut(&mut self) -> &mut Self::Target {
        &mut self.0
    }
}
