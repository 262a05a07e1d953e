//! Neighborhood topologies used for training, prediction and traversal
//!
//! Every region is a Manhattan-distance diamond around a center point, minus
//! the center itself, optionally restricted to one quadrant.

use crate::io::configuration::MAX_REGION_SIZE;
use crate::io::error::{PaintError, Result, invalid_parameter};
use clap::ValueEnum;
use std::fmt;
use std::str::FromStr;

/// Shape of the neighborhood conditioned on around a pixel
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Hash, ValueEnum)]
pub enum Region {
    /// Every point at Manhattan distance `1..=n`
    #[default]
    Surrounding,
    /// Points of the diamond that are up and to the left (`dx <= 0`, `dy <= 0`)
    UpperLeft,
    /// Points of the diamond that are down and to the right (`dx >= 0`, `dy >= 0`)
    LowerRight,
}

impl Region {
    /// Relative offsets `[dx, dy]` of this region with radius `n`
    ///
    /// For `Surrounding` with `n = 1` the order is `+x, +y, -y, -x`, which is
    /// the slot order of shape field weights. Radii above `MAX_REGION_SIZE`
    /// are clamped to it.
    pub fn offsets(self, n: usize) -> Vec<[i32; 2]> {
        let max = i32::from(MAX_REGION_SIZE);
        let n = i32::try_from(n).map_or(max, |n| n.min(max));
        let mut result = Vec::new();

        match self {
            Self::Surrounding => {
                for i in -n..=n {
                    for j in -n..=n {
                        let distance = i.abs() + j.abs();
                        if (1..=n).contains(&distance) {
                            result.push([-i, -j]);
                        }
                    }
                }
            }
            Self::UpperLeft | Self::LowerRight => {
                let sign = if self == Self::UpperLeft { -1 } else { 1 };
                for i in 0..=n {
                    for j in 0..=n {
                        if (1..=n).contains(&(i + j)) {
                            result.push([sign * i, sign * j]);
                        }
                    }
                }
            }
        }

        result
    }

    /// Absolute points of this region around `(x, y)` with radius `n`
    ///
    /// Points may lie outside any canvas; callers filter by bounds.
    pub fn points(self, x: i32, y: i32, n: usize) -> Vec<[i32; 2]> {
        self.offsets(n)
            .into_iter()
            .map(|[dx, dy]| [x + dx, y + dy])
            .collect()
    }

    /// Name used on the command line
    pub const fn name(self) -> &'static str {
        match self {
            Self::Surrounding => "surrounding",
            Self::UpperLeft => "upper-left",
            Self::LowerRight => "lower-right",
        }
    }
}

impl fmt::Display for Region {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}

impl FromStr for Region {
    type Err = PaintError;

    fn from_str(s: &str) -> Result<Self> {
        <Self as ValueEnum>::from_str(s, true)
            .map_err(|reason| invalid_parameter("region", &s, &reason))
    }
}
