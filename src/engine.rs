use std::convert::TryFrom;

use crate::err::RuntimeErr;
use crate::msgs::Beat;
use crate::rhythm::{distribute, rotate};

pub const DEFAULT_STEPS: usize = 4;

#[derive(Clone, Debug, PartialEq)]
pub struct Engine {
    pattern: Vec<u8>,
    steps: usize,
}

impl Engine {
    /// Create an engine holding the default silent four step pattern
    pub fn new() -> Engine {
        Engine {
            pattern: vec![0; DEFAULT_STEPS],
            steps: DEFAULT_STEPS,
        }
    }

    /// Generate a new pattern, replacing the current one
    ///
    /// Rotation is normalized into `0..steps` with a one step offset, so a
    /// rotation of 0 still shifts the pattern right by one step. Rotations a
    /// whole cycle apart produce identical patterns. A step count less than
    /// one fails, leaving the current pattern in place.
    pub fn generate(
        &mut self,
        steps: i64,
        pulses: i64,
        rotation: i64,
    ) -> Result<&[u8], RuntimeErr> {
        let len = match usize::try_from(steps) {
            Ok(len) if len > 0 => len,
            _ => return Err(RuntimeErr::InvalidSteps(steps)),
        };

        let amount = (rotation % steps + 1).rem_euclid(steps) as usize;
        let mut pattern = distribute(len, pulses);
        if amount != 0 {
            pattern = rotate(&pattern, amount);
        }

        self.pattern = pattern;
        self.steps = len;
        Ok(&self.pattern)
    }

    /// Return the pulse state at a beat, wrapped to the pattern length
    pub fn query(&self, beat: i64) -> Beat {
        let step = beat.rem_euclid(self.steps as i64) as usize;
        Beat {
            step: step,
            pulse: self.pattern[step],
        }
    }

    pub fn pattern(&self) -> &[u8] {
        &self.pattern
    }

    pub fn steps(&self) -> usize {
        self.steps
    }
}
