use core::{
    f64::consts::PI,
    fmt,
    ops::{Add, AddAssign, Mul, MulAssign, Neg, Sub, SubAssign},
    str::FromStr,
};

#[allow(unused_imports)]
use num_traits::Float;
use serde::{Deserialize, Serialize};
use typed_builder::TypedBuilder;
use uom::si::{angle::radian, f64::Angle};

use crate::{
    matrix,
    parse::{parse_components, ParseVectorError},
    utils::{default_precision, round, DEFAULT_PRECISION},
    vector3::Vector3,
};

/// A vector in the plane.
///
/// `precision` is the number of decimal digits kept by the operations that
/// round trigonometric results, namely the angle between two vectors and the
/// construction from an angle.
#[derive(Clone, Copy, Debug, PartialEq, Serialize, Deserialize, TypedBuilder)]
pub struct Vector2 {
    #[builder(default)]
    pub x: f64,
    #[builder(default)]
    pub y: f64,
    #[builder(default = DEFAULT_PRECISION)]
    #[serde(default = "default_precision")]
    pub precision: u8,
}

impl Default for Vector2 {
    fn default() -> Self {
        Self::new(0.0, 0.0)
    }
}

impl Vector2 {
    pub const fn new(x: f64, y: f64) -> Self {
        Self::with_precision(x, y, DEFAULT_PRECISION)
    }

    pub const fn with_precision(x: f64, y: f64, precision: u8) -> Self {
        Self { x, y, precision }
    }

    pub fn by_pos(x1: f64, y1: f64, x2: f64, y2: f64) -> Self {
        Self::new(x2 - x1, y2 - y1)
    }

    pub fn get_len(&self) -> f64 {
        self.get_len_sqr().sqrt()
    }

    pub fn get_len_sqr(&self) -> f64 {
        self.x * self.x + self.y * self.y
    }

    pub fn get_magnitude(&self) -> f64 {
        self.get_len()
    }

    pub fn get_angle_deg(&self) -> f64 {
        self.get_angle_rad() * 180.0 / PI
    }

    pub fn get_angle_rad(&self) -> f64 {
        self.y.atan2(self.x)
    }

    pub fn get_angle(&self) -> Angle {
        Angle::new::<radian>(self.get_angle_rad())
    }

    /// Unsigned angle to `vec`, rounded to `self.precision`.
    ///
    /// NaN if either vector has zero length or if float error pushes the cosine
    /// outside `[-1, 1]`, which happens even for the angle of a vector to itself.
    pub fn get_angle_to_vec_deg(&self, vec: &Vector2) -> f64 {
        round(self.angle_to(vec) * 180.0 / PI, self.precision)
    }

    pub fn get_angle_to_vec_rad(&self, vec: &Vector2) -> f64 {
        round(self.angle_to(vec), self.precision)
    }

    pub fn get_angle_to_vec(&self, vec: &Vector2) -> Angle {
        Angle::new::<radian>(self.get_angle_to_vec_rad(vec))
    }

    fn angle_to(&self, vec: &Vector2) -> f64 {
        (self.get_dot_prod(vec) / (self.get_len() * vec.get_len())).acos()
    }

    pub fn get_dot_prod(&self, vec: &Vector2) -> f64 {
        self.x * vec.x + self.y * vec.y
    }

    /// Both vectors are taken to lie in the `z = 0` plane.
    pub fn get_cross_prod(&self, vec: &Vector2) -> Vector3 {
        let [x, y, z] = matrix::cross([self.x, self.y, 0.0], [vec.x, vec.y, 0.0]);
        Vector3::new(x, y, z)
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

    pub fn get_add(&self, vec: &Vector2) -> Self {
        Self::new(self.x + vec.x, self.y + vec.y)
    }

    pub fn get_mod(&self, vec: &Vector2) -> Self {
        Self::new(self.x * vec.x, self.y * vec.y)
    }

    pub fn get_scalar(&self, c: f64) -> Self {
        Self::new(self.x * c, self.y * c)
    }

    pub fn get_by_pos(&self, x1: f64, y1: f64, x2: f64, y2: f64) -> Self {
        Self::by_pos(x1, y1, x2, y2)
    }

    /// The angle is measured clockwise from the positive y axis: x takes the
    /// sine and y the cosine. Both are rounded to `self.precision` digits
    /// before scaling by `len`.
    pub fn get_by_angle_deg(&self, angle: f64, len: f64) -> Self {
        self.get_by_angle_rad(angle / 180.0 * PI, len)
    }

    pub fn get_by_angle_rad(&self, angle: f64, len: f64) -> Self {
        let (x, y) = self.polar(angle, len);
        Self::new(x, y)
    }

    pub fn get_by_angle(&self, angle: Angle, len: f64) -> Self {
        self.get_by_angle_rad(angle.get::<radian>(), len)
    }

    pub fn get_unit_by_angle_deg(&self, angle: f64) -> Self {
        self.get_by_angle_deg(angle, crate::DEFAULT_LENGTH)
    }

    pub fn get_unit_by_angle_rad(&self, angle: f64) -> Self {
        self.get_by_angle_rad(angle, crate::DEFAULT_LENGTH)
    }

    fn polar(&self, angle: f64, len: f64) -> (f64, f64) {
        (
            round(angle.sin(), self.precision) * len,
            round(angle.cos(), self.precision) * len,
        )
    }

    pub fn set(&mut self, vec: &Vector2) {
        self.x = vec.x;
        self.y = vec.y;
    }

    pub fn set_add(&mut self, vec: &Vector2) {
        self.x += vec.x;
        self.y += vec.y;
    }

    pub fn set_mod(&mut self, vec: &Vector2) {
        self.x *= vec.x;
        self.y *= vec.y;
    }

    pub fn set_scalar(&mut self, c: f64) {
        self.x *= c;
        self.y *= c;
    }

    pub fn set_unit(&mut self) {
        let len = self.get_len();
        self.x /= len;
        self.y /= len;
    }

    pub fn set_by_pos(&mut self, x1: f64, y1: f64, x2: f64, y2: f64) {
        self.x = x2 - x1;
        self.y = y2 - y1;
    }

    pub fn set_by_angle_deg(&mut self, angle: f64, len: f64) {
        self.set_by_angle_rad(angle / 180.0 * PI, len);
    }

    pub fn set_by_angle_rad(&mut self, angle: f64, len: f64) {
        let (x, y) = self.polar(angle, len);
        self.x = x;
        self.y = y;
    }

    pub fn set_by_angle(&mut self, angle: Angle, len: f64) {
        self.set_by_angle_rad(angle.get::<radian>(), len);
    }

    /// Exact test, no tolerance is applied to the dot product.
    #[allow(clippy::float_cmp)]
    pub fn is_orth(&self, vec: &Vector2) -> bool {
        self.get_dot_prod(vec) == 0.0
    }

    pub fn extend(&self, z: f64) -> Vector3 {
        Vector3::new(self.x, self.y, z)
    }
}

impl From<Vector2> for Vector3 {
    fn from(value: Vector2) -> Self {
        value.extend(0.0)
    }
}

impl From<[f64; 2]> for Vector2 {
    fn from([x, y]: [f64; 2]) -> Self {
        Self::new(x, y)
    }
}

impl From<(f64, f64)> for Vector2 {
    fn from((x, y): (f64, f64)) -> Self {
        Self::new(x, y)
    }
}

impl Add for Vector2 {
    type Output = Self;

    fn add(self, rhs: Self) -> Self::Output {
        self.get_add(&rhs)
    }
}

impl AddAssign for Vector2 {
    fn add_assign(&mut self, rhs: Self) {
        self.set_add(&rhs);
    }
}

impl Sub for Vector2 {
    type Output = Self;

    fn sub(self, rhs: Self) -> Self::Output {
        Self::new(self.x - rhs.x, self.y - rhs.y)
    }
}

impl SubAssign for Vector2 {
    fn sub_assign(&mut self, rhs: Self) {
        self.x -= rhs.x;
        self.y -= rhs.y;
    }
}

impl Neg for Vector2 {
    type Output = Self;

    fn neg(self) -> Self::Output {
        Self::new(-self.x, -self.y)
    }
}

impl Mul<f64> for Vector2 {
    type Output = Self;

    fn mul(self, rhs: f64) -> Self::Output {
        self.get_scalar(rhs)
    }
}

impl Mul<Vector2> for f64 {
    type Output = Vector2;

    fn mul(self, rhs: Vector2) -> Self::Output {
        rhs.get_scalar(self)
    }
}

impl MulAssign<f64> for Vector2 {
    fn mul_assign(&mut self, rhs: f64) {
        self.set_scalar(rhs);
    }
}

impl fmt::Display for Vector2 {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "({}, {})", self.x, self.y)
    }
}

impl FromStr for Vector2 {
    type Err = ParseVectorError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        parse_components(s).map(Self::from)
    }
}
