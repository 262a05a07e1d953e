//! Direction-weight vector fields that give the flood fill a visible shape
//!
//! A shape field maps a canvas coordinate to four weights ordered
//! `+x, +y, -y, -x`. Each weight is the relative likelihood that the traversal
//! moves in that direction next, so always weighting `+x` heavily produces
//! horizontal brushstrokes, and following a rotating field produces circles.
//!
//! Most fields are expressed as a vector in centered coordinates where positive
//! y points up the screen. [`decompose`] converts such a vector into weights,
//! which is why an upward vector feeds the `-y` slot.

use crate::io::error::{PaintError, Result, invalid_parameter};
use crate::math::polar::{centered, normalize, theta};
use clap::ValueEnum;
use std::f64::consts::{FRAC_PI_2, PI};
use std::fmt;
use std::str::FromStr;

/// Four direction weights ordered `+x, +y, -y, -x`
pub type DirectionWeights = [f64; 4];

/// Slot of the weight for moving right (`+x`)
pub const RIGHT: usize = 0;
/// Slot of the weight for moving down the screen (`+y`)
pub const DOWN: usize = 1;
/// Slot of the weight for moving up the screen (`-y`)
pub const UP: usize = 2;
/// Slot of the weight for moving left (`-x`)
pub const LEFT: usize = 3;

/// Weight used for directions a field expresses no preference for
const NEUTRAL_WEIGHT: f64 = 1.0;

/// Rightward component added to the rotation of `WeirdCircle`
const WEIRD_CIRCLE_DRIFT: f64 = 0.7;

/// Selectable vector fields biasing the flood fill direction
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Hash, ValueEnum)]
pub enum ShapeField {
    /// No preferred direction
    Uniform,
    /// Counterclockwise rotation around the canvas center
    #[default]
    Circle,
    /// Independent circles in the left and right halves
    DoubleCircle,
    /// Independent circles in each quadrant
    FourCircles,
    /// Sum of the `Circle` and `FourCircles` fields
    SuperimposedCircles,
    /// Tangents of a parabola opening upward from the center column
    Parabola,
    /// Slope of a cosine wave with two periods across the canvas
    Cosine,
    /// Tangents of a Fermat spiral around the center
    FermatSpiral,
    /// Flow along hyperbolas centered on the canvas
    Hyperbola,
    /// Loose figure eight around the center
    #[value(name = "figure-8")]
    Figure8,
    /// Heart outline; only approximate
    Heart,
    /// Constant pull to the right scaled by the x strength
    Horizontal,
    /// Counterclockwise rotation with a constant rightward drift
    WeirdCircle,
    /// Downward pull in the right half, rightward pull in the left half
    ///
    /// Weights grow with the distance from the center column and, in the left
    /// half, with y. The strengths are ignored.
    SplitOverWidth,
}

impl ShapeField {
    /// Raw direction weights at canvas point `(x, y)`
    ///
    /// Weights may be zero or negative for some fields; the traversal clamps
    /// them before use. `strength_x` and `strength_y` scale the x and y
    /// components of the field independently.
    pub fn weights(
        self,
        x: i32,
        y: i32,
        width: usize,
        height: usize,
        strength_x: f64,
        strength_y: f64,
    ) -> DirectionWeights {
        self.weights_at(
            f64::from(x),
            f64::from(y),
            width as f64,
            height as f64,
            strength_x,
            strength_y,
        )
    }

    /// Raw direction weights at a continuous position of a `w` by `h` area
    pub fn weights_at(self, x: f64, y: f64, w: f64, h: f64, sx: f64, sy: f64) -> DirectionWeights {
        match self {
            Self::Uniform => decompose(NEUTRAL_WEIGHT, NEUTRAL_WEIGHT),
            Self::Circle => circle(x, y, w, h, sx, sy),
            Self::DoubleCircle => {
                // Left and right halves are separate circles
                let x = if x > w / 2.0 { x - w / 2.0 } else { x };
                circle(x, y, w / 2.0, h, sx, sy)
            }
            Self::FourCircles => four_circles(x, y, w, h, sx, sy),
            Self::SuperimposedCircles => {
                let whole = circle(x, y, w, h, sx, sy);
                let quadrants = four_circles(x, y, w, h, sx, sy);
                let mut result = [0.0; 4];
                for ((slot, a), b) in result.iter_mut().zip(whole).zip(quadrants) {
                    *slot = a + b;
                }
                result
            }
            Self::Parabola => {
                let (adjusted_x, _) = centered(x, y, w, h);
                let (x_comp, y_comp) = normalize(sx, sy * 2.0 * adjusted_x, sx, sy);
                decompose(x_comp, y_comp)
            }
            Self::Cosine => {
                let period = w / 2.0;
                let phase = 2.0 * PI * x / period;
                let y_comp = -phase.sin() * sy;
                let x_comp = (1.0 - phase.sin().abs()) * sx;
                decompose(x_comp, y_comp)
            }
            Self::FermatSpiral => {
                let t = theta(x, y, w, h);
                let x_comp = t.cos() - 2.0 * t * t.sin();
                let y_comp = (2.0 * t).mul_add(t.cos(), t.sin());
                let (x_comp, y_comp) = normalize(x_comp, y_comp, sx, sy);
                decompose(x_comp, y_comp)
            }
            Self::Hyperbola => {
                let (adjusted_x, adjusted_y) = centered(x, y, w, h);
                if adjusted_x == 0.0 && adjusted_y == 0.0 {
                    return [NEUTRAL_WEIGHT; 4];
                }
                let (x_comp, y_comp) = normalize(adjusted_y, adjusted_x, sx, sy);
                decompose(x_comp, y_comp)
            }
            Self::Figure8 => {
                let (adjusted_x, adjusted_y) = centered(x, y, w, h);
                if adjusted_y == 0.0 {
                    return [NEUTRAL_WEIGHT; 4];
                }
                let slope = adjusted_x.mul_add(adjusted_x, -2.0 * adjusted_x.powi(3)) / adjusted_y;
                let (x_comp, y_comp) = normalize(1.0, slope, sx, sy);
                decompose(x_comp, y_comp)
            }
            Self::Heart => heart(x, y, w, h, sx, sy),
            Self::Horizontal => {
                let mut result = [NEUTRAL_WEIGHT; 4];
                result[RIGHT] = sx;
                result
            }
            Self::WeirdCircle => {
                let t = theta(x, y, w, h);
                let (x_comp, y_comp) = normalize(WEIRD_CIRCLE_DRIFT - t.sin(), t.cos(), sx, sy);
                decompose(x_comp, y_comp)
            }
            Self::SplitOverWidth => {
                let mut result = [NEUTRAL_WEIGHT; 4];
                let center = w / 2.0;
                if x > center {
                    result[DOWN] = (x - center) / 100.0 + 1.0;
                } else {
                    result[RIGHT] = (center - x) / 100.0 + 1.0 + y;
                }
                result
            }
        }
    }

    /// Name used on the command line and in output file names
    pub const fn name(self) -> &'static str {
        match self {
            Self::Uniform => "uniform",
            Self::Circle => "circle",
            Self::DoubleCircle => "double-circle",
            Self::FourCircles => "four-circles",
            Self::SuperimposedCircles => "superimposed-circles",
            Self::Parabola => "parabola",
            Self::Cosine => "cosine",
            Self::FermatSpiral => "fermat-spiral",
            Self::Hyperbola => "hyperbola",
            Self::Figure8 => "figure-8",
            Self::Heart => "heart",
            Self::Horizontal => "horizontal",
            Self::WeirdCircle => "weird-circle",
            Self::SplitOverWidth => "split-over-width",
        }
    }
}

impl fmt::Display for ShapeField {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}

impl FromStr for ShapeField {
    type Err = PaintError;

    fn from_str(s: &str) -> Result<Self> {
        <Self as ValueEnum>::from_str(s, true)
            .map_err(|reason| invalid_parameter("shape", &s, &reason))
    }
}

/// Split a centered-coordinate vector into the four direction slots
///
/// Positive x feeds `RIGHT` and negative x feeds `LEFT`. Positive y points up
/// the screen, which is decreasing canvas y, so it feeds `UP`; negative y feeds
/// `DOWN`. Slots that receive no component keep a neutral weight of 1.
pub fn decompose(x_comp: f64, y_comp: f64) -> DirectionWeights {
    let mut result = [NEUTRAL_WEIGHT; 4];

    if x_comp >= 0.0 {
        result[RIGHT] = x_comp;
    } else {
        result[LEFT] = x_comp.abs();
    }

    if y_comp >= 0.0 {
        result[UP] = y_comp;
    } else {
        result[DOWN] = y_comp.abs();
    }

    result
}

fn circle(x: f64, y: f64, w: f64, h: f64, sx: f64, sy: f64) -> DirectionWeights {
    let t = theta(x, y, w, h);
    decompose(sx * -t.sin(), sy * t.cos())
}

fn four_circles(x: f64, y: f64, w: f64, h: f64, sx: f64, sy: f64) -> DirectionWeights {
    let (half_w, half_h) = (w / 2.0, h / 2.0);

    // Shift each quadrant onto the upper left one
    let (x, y) = if x > half_w && y > half_h {
        (x - half_w, y - half_h)
    } else if x < half_w && y > half_h {
        (x, y - half_h)
    } else if x > half_w && y < half_h {
        (x - half_w, y)
    } else {
        (x, y)
    };

    circle(x, y, half_w, half_h, sx, sy)
}

fn heart(x: f64, y: f64, w: f64, h: f64, sx: f64, sy: f64) -> DirectionWeights {
    let t = FRAC_PI_2 - theta(x, y, w, h);

    let x_comp = 48.0 * t.cos() * t.sin().powi(2);
    let y_comp = (-13.0f64).mul_add(
        t.cos(),
        10.0f64.mul_add(
            (2.0 * t).cos(),
            6.0f64.mul_add((3.0 * t).cos(), 4.0 * (4.0 * t).cos()),
        ),
    );

    let (x_comp, mut y_comp) = normalize(x_comp, y_comp, sx, sy);
    if (x > w / 2.0 && y > h / 2.0) || (x < w / 2.0 && y < h / 2.0) {
        y_comp = -y_comp;
    }
    decompose(x_comp, y_comp)
}
