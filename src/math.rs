//! Scalar helpers shared by the rasterizers

/// Interpolate between two components at `t`, rounding toward zero
///
/// Equal to `floor(p * (1 - t) + q * t)`, saturating to [0,255].
/// Evaluated as `p + (q - p) * t` so equal end points reproduce exactly.
///
pub fn lerp_floor(p: u8, q: u8, t: f64) -> u8 {
    let (p, q) = (f64::from(p), f64::from(q));
    (p + (q - p) * t).floor() as u8
}

/// Weighted sum of three components, rounding toward zero
///
/// Weights are barycentric and sum to 1.0, so the first weight is implied
///   by the other two; a solid triangle keeps its exact color
pub fn blend3_floor(a: u8, b: u8, c: u8, w: (f64, f64, f64)) -> u8 {
    let (a, b, c) = (f64::from(a), f64::from(b), f64::from(c));
    (a + w.1 * (b - a) + w.2 * (c - a)).floor() as u8
}

/// Rotate the vector (`x`,`y`) counter-clockwise by `theta` radians
///
/// Components are floored back to integer coordinates
///
///     use agl::math::rotate;
///     assert_eq!(rotate(10, 0, 0.0), (10, 0));
///     assert_eq!(rotate(10, 0, std::f64::consts::FRAC_PI_2), (0, 10));
///
pub fn rotate(x: i64, y: i64, theta: f64) -> (i64, i64) {
    let (s, c) = theta.sin_cos();
    let (x, y) = (x as f64, y as f64);
    let rx = c * x - s * y;
    let ry = s * x + c * y;
    (rx.floor() as i64, ry.floor() as i64)
}
