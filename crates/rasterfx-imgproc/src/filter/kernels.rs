/// Horizontal Sobel weights, indexed `[row][col]` of the 3x3 block.
///
/// The left column weighs `-1, -2, -1` from top to bottom, the right column `+1, +2, +1`.
pub const SOBEL_X: [[i32; 3]; 3] = [[-1, 0, 1], [-2, 0, 2], [-1, 0, 1]];

/// Vertical Sobel weights, indexed `[row][col]` of the 3x3 block.
///
/// The top row weighs `-1, -2, -1` from left to right, the bottom row `+1, +2, +1`.
pub const SOBEL_Y: [[i32; 3]; 3] = [[-1, -2, -1], [0, 0, 0], [1, 2, 1]];

/// Largest possible gradient length for RGB8 input.
///
/// A neighbor contributes at most `3 * 255 = 765`, one direction accumulates at most `4 * 765`,
/// and both directions combined give `sqrt(2 * 3060^2)`, rounded up.
pub const SOBEL_MAX_MAGNITUDE: f64 = 4328.0;

/// Apply both Sobel tables to a 3x3 block of scalar intensities.
///
/// # Arguments
///
/// * `block` - Intensities indexed `[row][col]`.
///
/// # Returns
///
/// The `(kx, ky)` gradient pair.
pub fn sobel_response(block: &[[i32; 3]; 3]) -> (i32, i32) {
    let mut kx = 0;
    let mut ky = 0;
    for (row, values) in block.iter().enumerate() {
        for (col, &v) in values.iter().enumerate() {
            kx += SOBEL_X[row][col] * v;
            ky += SOBEL_Y[row][col] * v;
        }
    }
    (kx, ky)
}

/// Map a gradient pair to an 8-bit magnitude, truncating toward zero.
pub fn normalized_magnitude(kx: i32, ky: i32) -> u8 {
    let length = ((kx as f64).powi(2) + (ky as f64).powi(2)).sqrt();
    (length / SOBEL_MAX_MAGNITUDE * 255.0) as u8
}
