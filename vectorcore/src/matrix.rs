/// A 2x2 matrix laid out as `[[a, b], [c, d]]`.
#[derive(Clone, Copy, Debug, PartialEq)]
pub(crate) struct Matrix2x2 {
    a: f64,
    b: f64,
    c: f64,
    d: f64,
}

impl Matrix2x2 {
    pub(crate) const fn new(a: f64, b: f64, c: f64, d: f64) -> Self {
        Self { a, b, c, d }
    }

    pub(crate) fn determinant(&self) -> f64 {
        self.a * self.d - self.b * self.c
    }
}

/// Cross product of `(i1, j1, k1)` and `(i2, j2, k2)` by cofactor expansion.
///
/// Each component is the determinant of the 2x2 minor left after striking out
/// the corresponding column; the middle one is negated.
pub(crate) fn cross(lhs: [f64; 3], rhs: [f64; 3]) -> [f64; 3] {
    let [i1, j1, k1] = lhs;
    let [i2, j2, k2] = rhs;

    let minor_x = Matrix2x2::new(j1, k1, j2, k2);
    let minor_y = Matrix2x2::new(i1, k1, i2, k2);
    let minor_z = Matrix2x2::new(i1, j1, i2, j2);
    log::trace!("cross product minors: {:?} {:?} {:?}", minor_x, minor_y, minor_z);

    [
        minor_x.determinant(),
        -minor_y.determinant(),
        minor_z.determinant(),
    ]
}
