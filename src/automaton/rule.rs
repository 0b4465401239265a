//! Transition rules for the circular strip.
//!
//! Both rules compute the whole next generation at once from word-parallel
//! rotations of the current strip. Neighbor words are produced before any
//! output word is written, so every cell reads the pre-step state.

use std::fmt;

use crate::error::Rule30Error;
use crate::utils::bits::{strip_left_rotation, strip_right_rotation, STRIP_WORDS};

/// Local transition rule applied to every cell of the strip.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
pub enum Rule {
    /// Rule 30: `left XOR (center OR right)`.
    #[default]
    Radius1,
    /// Radius-2 Rule 30:
    /// `(left2 XOR left1) XOR ((center OR right1) OR right2)`.
    Radius2,
}

impl Rule {
    /// Returns the number of neighbors read on each side of a cell.
    pub fn radius(self) -> u8 {
        match self {
            Rule::Radius1 => 1,
            Rule::Radius2 => 2,
        }
    }

    /// Selects the rule for a neighborhood radius.
    ///
    /// # Errors
    /// Returns [`Rule30Error::UnsupportedRadius`] for anything but 1 or 2.
    pub fn from_radius(radius: u8) -> Result<Self, Rule30Error> {
        match radius {
            1 => Ok(Rule::Radius1),
            2 => Ok(Rule::Radius2),
            other => Err(Rule30Error::UnsupportedRadius(other)),
        }
    }

    /// Computes the next generation of `words`.
    ///
    /// # Parameters
    /// - `words`: The current strip, least-significant word first.
    ///
    /// # Returns
    /// A fresh strip holding the successor state.
    pub fn successor(self, words: &[u64; STRIP_WORDS]) -> [u64; STRIP_WORDS] {
        match self {
            Rule::Radius1 => {
                let left = strip_left_rotation(words, 1);
                let right = strip_right_rotation(words, 1);
                std::array::from_fn(|i| left[i] ^ (words[i] | right[i]))
            }
            Rule::Radius2 => {
                let left1 = strip_left_rotation(words, 1);
                let left2 = strip_left_rotation(words, 2);
                let right1 = strip_right_rotation(words, 1);
                let right2 = strip_right_rotation(words, 2);
                std::array::from_fn(|i| {
                    (left2[i] ^ left1[i]) ^ ((words[i] | right1[i]) | right2[i])
                })
            }
        }
    }
}

impl TryFrom<u8> for Rule {
    type Error = Rule30Error;

    fn try_from(radius: u8) -> Result<Self, Self::Error> {
        Rule::from_radius(radius)
    }
}

impl fmt::Display for Rule {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Rule::Radius1 => write!(f, "radius-1 Rule 30"),
            Rule::Radius2 => write!(f, "radius-2 Rule 30"),
        }
    }
}
