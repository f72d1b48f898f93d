use crate::components::Side;

/// In-memory score tally, never persisted
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct Score {
    pub left: u32,  // Left player score
    pub right: u32, // Right player score
}

impl Score {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn increment(&mut self, side: Side) {
        match side {
            Side::Left => self.left += 1,
            Side::Right => self.right += 1,
        }
    }
}

/// Source of serve directions
pub trait RandomSource {
    /// Fair coin flip
    fn coin_flip(&mut self) -> bool;
}

/// Random number generator
pub struct GameRng(pub rand::rngs::StdRng);

impl GameRng {
    pub fn new(seed: u64) -> Self {
        use rand::SeedableRng;
        Self(rand::rngs::StdRng::seed_from_u64(seed))
    }

    /// Seed from the OS / browser entropy source
    pub fn from_entropy() -> Self {
        use rand::SeedableRng;
        Self(rand::rngs::StdRng::from_entropy())
    }
}

impl Default for GameRng {
    fn default() -> Self {
        Self::new(12345)
    }
}

impl RandomSource for GameRng {
    fn coin_flip(&mut self) -> bool {
        use rand::Rng;
        self.0.gen_bool(0.5)
    }
}

/// Replays a fixed sequence of coin flips, cycling when exhausted.
/// An empty script always answers `false`.
#[derive(Debug, Clone, Default)]
pub struct ScriptedRandom {
    flips: Vec<bool>,
    next: usize,
}

impl ScriptedRandom {
    pub fn new(flips: &[bool]) -> Self {
        Self {
            flips: flips.to_vec(),
            next: 0,
        }
    }
}

impl RandomSource for ScriptedRandom {
    fn coin_flip(&mut self) -> bool {
        if self.flips.is_empty() {
            return false;
        }
        let flip = self.flips[self.next % self.flips.len()];
        self.next += 1;
        flip
    }
}

/// Events that occurred during this tick
#[derive(Debug, Clone, Default)]
pub struct Events {
    pub left_scored: bool,
    pub right_scored: bool,
    pub ball_hit_paddle: bool,
    pub ball_hit_wall: bool,
}

impl Events {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn clear(&mut self) {
        self.left_scored = false;
        self.right_scored = false;
        self.ball_hit_paddle = false;
        self.ball_hit_wall = false;
    }
}
