/// Per-component tolerance used by vector equality.
pub const VECTOR_EPSILON: f32 = 1e-5;
/// Per-component tolerance used by matrix equality.
pub const MATRIX_EPSILON: f32 = 1e-6;
/// Fractional digits used by `Display` when no precision is given.
pub const DISPLAY_PRECISION: usize = 6;
