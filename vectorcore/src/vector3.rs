use core::{
    fmt,
    ops::{Add, AddAssign, Mul, MulAssign, Neg, Sub, SubAssign},
    str::FromStr,
};

#[allow(unused_imports)]
use num_traits::Float;
use serde::{Deserialize, Serialize};
use typed_builder::TypedBuilder;

use crate::{
    matrix,
    parse::{parse_components, ParseVectorError},
    utils::{default_precision, DEFAULT_PRECISION},
};

/// A vector in space. `precision` is carried for symmetry with
/// [`Vector2`](crate::Vector2); no operation here rounds.
#[derive(Clone, Copy, Debug, PartialEq, Serialize, Deserialize, TypedBuilder)]
pub struct Vector3 {
    #[builder(default)]
    pub x: f64,
    #[builder(default)]
    pub y: f64,
    #[builder(default)]
    pub z: f64,
    #[builder(default = DEFAULT_PRECISION)]
    #[serde(default = "default_precision")]
    pub precision: u8,
}

impl Default for Vector3 {
    fn default() -> Self {
        Self::new(0.0, 0.0, 0.0)
    }
}

impl Vector3 {
    pub const fn new(x: f64, y: f64, z: f64) -> Self {
        Self::with_precision(x, y, z, DEFAULT_PRECISION)
    }

    pub const fn with_precision(x: f64, y: f64, z: f64, precision: u8) -> Self {
        Self { x, y, z, precision }
    }

    pub fn by_pos(x1: f64, y1: f64, z1: f64, x2: f64, y2: f64, z2: f64) -> Self {
        Self::new(x2 - x1, y2 - y1, z2 - z1)
    }

    pub fn get_len(&self) -> f64 {
        self.get_len_sqr().sqrt()
    }

    pub fn get_len_sqr(&self) -> f64 {
        self.x * self.x + self.y * self.y + self.z * self.z
    }

    pub fn get_magnitude(&self) -> f64 {
        self.get_len()
    }

    pub fn get_dot_prod(&self, vec: &Vector3) -> f64 {
        self.x * vec.x + self.y * vec.y + self.z * vec.z
    }

    pub fn get_cross_prod(&self, vec: &Vector3) -> Vector3 {
        let [x, y, z] = matrix::cross([self.x, self.y, self.z], [vec.x, vec.y, vec.z]);
        Self::new(x, y, z)
    }

    /// Returns the vector scaled to length one, NaN components for the zero vector.
    pub fn get_unit(&self) -> Self {
        self.get_scalar(1.0 / self.get_len())
    }

    pub fn checked_unit(&self) -> Option<Self> {
        let len = self.get_len();
        if len > 0.0 && len.is_finite() {
            Some(self.get_scalar(1.0 / len))
        } else {
            None
        }
    }

    pub fn get_add(&self, vec: &Vector3) -> Self {
        Self::new(self.x + vec.x, self.y + vec.y, self.z + vec.z)
    }

    pub fn get_mod(&self, vec: &Vector3) -> Self {
        Self::new(self.x * vec.x, self.y * vec.y, self.z * vec.z)
    }

    pub fn get_scalar(&self, c: f64) -> Self {
        Self::new(self.x * c, self.y * c, self.z * c)
    }

    pub fn get_by_pos(&self, x1: f64, y1: f64, z1: f64, x2: f64, y2: f64, z2: f64) -> Self {
        Self::by_pos(x1, y1, z1, x2, y2, z2)
    }

    pub fn set(&mut self, vec: &Vector3) {
        self.x = vec.x;
        self.y = vec.y;
        self.z = vec.z;
    }

    pub fn set_add(&mut self, vec: &Vector3) {
        self.x += vec.x;
        self.y += vec.y;
        self.z += vec.z;
    }

    pub fn set_mod(&mut self, vec: &Vector3) {
        self.x *= vec.x;
        self.y *= vec.y;
        self.z *= vec.z;
    }

    pub fn set_scalar(&mut self, c: f64) {
        self.x *= c;
        self.y *= c;
        self.z *= c;
    }

    pub fn set_unit(&mut self) {
        let len = self.get_len();
        self.x /= len;
        self.y /= len;
        self.z /= len;
    }

    pub fn set_by_pos(&mut self, x1: f64, y1: f64, z1: f64, x2: f64, y2: f64, z2: f64) {
        self.x = x2 - x1;
        self.y = y2 - y1;
        self.z = z2 - z1;
    }

    /// Exact test, no tolerance is applied to the dot product.
    #[allow(clippy::float_cmp)]
    pub fn is_orth(&self, vec: &Vector3) -> bool {
        self.get_dot_prod(vec) == 0.0
    }
}

impl From<[f64; 3]> for Vector3 {
    fn from([x, y, z]: [f64; 3]) -> Self {
        Self::new(x, y, z)
    }
}

impl From<(f64, f64, f64)> for Vector3 {
    fn from((x, y, z): (f64, f64, f64)) -> Self {
        Self::new(x, y, z)
    }
}

impl Add for Vector3 {
    type Output = Self;

    fn add(self, rhs: Self) -> Self::Output {
        self.get_add(&rhs)
    }
}

impl AddAssign for Vector3 {
    fn add_assign(&mut self, rhs: Self) {
        self.set_add(&rhs);
    }
}

impl Sub for Vector3 {
    type Output = Self;

    fn sub(self, rhs: Self) -> Self::Output {
        Self::new(self.x - rhs.x, self.y - rhs.y, self.z - rhs.z)
    }
}

impl SubAssign for Vector3 {
    fn sub_assign(&mut self, rhs: Self) {
        self.x -= rhs.x;
        self.y -= rhs.y;
        self.z -= rhs.z;
    }
}

impl Neg for Vector3 {
    type Output = Self;

    fn neg(self) -> Self::Output {
        Self::new(-self.x, -self.y, -self.z)
    }
}

impl Mul<f64> for Vector3 {
    type Output = Self;

    fn mul(self, rhs: f64) -> Self::Output {
        self.get_scalar(rhs)
    }
}

impl Mul<Vector3> for f64 {
    type Output = Vector3;

    fn mul(self, rhs: Vector3) -> Self::Output {
        rhs.get_scalar(self)
    }
}

impl MulAssign<f64> for Vector3 {
    fn mul_assign(&mut self, rhs: f64) {
        self.set_scalar(rhs);
    }
}

impl fmt::Display for Vector3 {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "({}, {}, {})", self.x, self.y, self.z)
    }
}

impl FromStr for Vector3 {
    type Err = ParseVectorError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        parse_components(s).map(Self::from)
    }
}
