//! Polar-angle and vector normalization helpers for shape fields
//!
//! Canvas coordinates have their origin in the upper left corner with y growing
//! downward. These helpers move the origin to the canvas center and flip y so
//! that positive y points up the screen.

use std::f64::consts::{FRAC_PI_2, PI};

/// Offset of `(x, y)` from the canvas center with y pointing up
pub fn centered(x: f64, y: f64, width: f64, height: f64) -> (f64, f64) {
    (x - width / 2.0, height / 2.0 - y)
}

/// Polar angle of `(x, y)` around the canvas center
///
/// Points on the vertical center line have no defined arctangent and map to
/// `π/2` above the center and `-π/2` otherwise. Points left of the center land
/// in quadrants 2 and 3 (`π + atan`).
pub fn theta(x: f64, y: f64, width: f64, height: f64) -> f64 {
    let (adjusted_x, adjusted_y) = centered(x, y, width, height);

    if adjusted_x.abs() < f64::EPSILON {
        return if y < height / 2.0 { FRAC_PI_2 } else { -FRAC_PI_2 };
    }

    let arctan = (adjusted_y / adjusted_x).atan();
    if adjusted_x < 0.0 { PI + arctan } else { arctan }
}

/// Scale a direction to unit length, then stretch each axis by its strength
///
/// The zero vector has no direction and is treated as `(1, 1)`.
pub fn normalize(x_comp: f64, y_comp: f64, strength_x: f64, strength_y: f64) -> (f64, f64) {
    let (x_comp, y_comp) = if x_comp == 0.0 && y_comp == 0.0 {
        (1.0, 1.0)
    } else {
        (x_comp, y_comp)
    };

    let magnitude = x_comp.hypot(y_comp);
    (
        x_comp / magnitude * strength_x,
        y_comp / magnitude * strength_y,
    )
}
