use std::array;
use std::fmt;
use std::ops::{Index, Mul};

use approx::{AbsDiffEq, RelativeEq, UlpsEq};
use log::{debug, warn};

use crate::error::{QuatError, QuatResult};
use crate::vector::{Vec3, Vector};

/// How close a source vector may come to the X axis before the
/// anti-parallel fallback in `rotation_of` switches to the Y axis.
const PARALLEL_EPSILON: f64 = 1e-6;

/// Unit directions whose dot product lies within this of -1 are treated as
/// opposite. Their cross product is rounding noise and cannot serve as an axis.
const ANTIPARALLEL_EPSILON: f64 = 1e-12;

/// A quaternion `w + xi + yj + zk`.
///
/// Values are never mutated after construction; every operation returns a
/// new quaternion. Rotation and Euler angle extraction assume a unit
/// quaternion, so normalize first when the source is not already one.
#[repr(C)]
#[derive(Clone, Copy, Debug, PartialEq, bytemuck::Pod, bytemuck::Zeroable)]
pub struct Quaternion {
    x: f64,
    y: f64,
    z: f64,
    w: f64,
}
impl Quaternion {
    pub fn new(x: f64, y: f64, z: f64, w: f64) -> Self {
        Self { x, y, z, w }
    }

    /// The no-op rotation `(0, 0, 0, 1)`.
    pub fn identity() -> Self {
        Self::new(0.0, 0.0, 0.0, 1.0)
    }

    pub fn x(&self) -> f64 { self.x }
    pub fn y(&self) -> f64 { self.y }
    pub fn z(&self) -> f64 { self.z }
    pub fn w(&self) -> f64 { self.w }

    pub fn copy(&self) -> Self {
        Self::new(self.x, self.y, self.z, self.w)
    }

    /// Hamilton product `self * rhs`. The result rotates by `rhs` first,
    /// then by `self`.
    pub fn multiply(&self, rhs: &Quaternion) -> Self {
        Self::new(
            self.w*rhs.x + self.x*rhs.w + self.y*rhs.z - self.z*rhs.y,
            self.w*rhs.y - self.x*rhs.z + self.y*rhs.w + self.z*rhs.x,
            self.w*rhs.z + self.x*rhs.y - self.y*rhs.x + self.z*rhs.w,
            self.w*rhs.w - self.x*rhs.x - self.y*rhs.y - self.z*rhs.z,
        )
    }

    /// Negates the vector part. For a unit quaternion this is the inverse.
    pub fn conjugate(&self) -> Self {
        Self::new(-self.x, -self.y, -self.z, self.w)
    }

    pub fn magnitude(&self) -> f64 {
        (self.x*self.x + self.y*self.y + self.z*self.z + self.w*self.w).sqrt()
    }

    /// Divides every component by the magnitude. A zero quaternion yields
    /// NaN components; use `try_normalized` to get an error instead.
    pub fn normalized(&self) -> Self {
        let magnitude = self.magnitude();
        Self::new(
            self.x / magnitude,
            self.y / magnitude,
            self.z / magnitude,
            self.w / magnitude,
        )
    }

    pub fn try_normalized(&self) -> QuatResult<Self> {
        if self.magnitude() == 0.0 {
            warn!("refusing to normalize zero quaternion");
            return Err(QuatError::ZeroMagnitude);
        }
        Ok(self.normalized())
    }

    /// Reads component `index` of `(x, y, z, w)`.
    pub fn component_at(&self, index: usize) -> QuatResult<f64> {
        self.to_sequence()
            .get(index)
            .copied()
            .ok_or(QuatError::IndexOutOfRange { index })
    }

    pub fn to_sequence(&self) -> [f64; 4] {
        [self.x, self.y, self.z, self.w]
    }

    pub fn iter(&self) -> array::IntoIter<f64, 4> {
        self.to_sequence().into_iter()
    }

    /// Right-handed rotation of `angle` radians about the unit vector `axis`.
    pub fn from_axis_angle<V: Vector>(axis: &V, angle: f64) -> Self {
        let (sin, cos) = (angle / 2.0).sin_cos();
        Self::new(axis.x() * sin, axis.y() * sin, axis.z() * sin, cos)
    }

    /// Shortest-arc rotation taking the direction of `source` onto the
    /// direction of `dest`.
    ///
    /// Only directions matter: both inputs are scaled to unit length first,
    /// so the result is the same for any positive multiple of either. The
    /// result is not normalized. Identity is returned when the vectors
    /// already line up or either one has zero length. Anti-parallel inputs
    /// get a half turn about an axis perpendicular to `source`.
    pub fn rotation_of<S: Vector, D: Vector>(source: &S, dest: &D) -> Self {
        let source = Vec3::from_vector(source);
        let dest = Vec3::from_vector(dest);

        if source.len() <= 0.0 || dest.len() <= 0.0 {
            debug!("rotation_of: zero-length input, {source} -> {dest}");
            return Self::identity();
        }

        let source = source.normalized();
        let dest = dest.normalized();
        let mut cross = source.cross(dest);
        let cos_theta = source.dot(dest);

        if cos_theta >= 1.0 {
            debug!("rotation_of: {source} already points along {dest}");
            return Self::identity();
        }

        if cos_theta <= ANTIPARALLEL_EPSILON - 1.0 {
            cross = perpendicular_axis(source);
            debug!("rotation_of: anti-parallel input, turning about {cross}");
        }

        Self::new(cross.x, cross.y, cross.z, 1.0 + cos_theta)
    }

    /// Rotates `vec` by this quaternion, returning the same vector type.
    pub fn rotate<V: Vector>(&self, vec: &V) -> V {
        let pure = Quaternion::new(vec.x(), vec.y(), vec.z(), 0.0);
        let rotated = self.multiply(&pure).multiply(&self.conjugate());
        V::new(rotated.x, rotated.y, rotated.z)
    }

    pub fn roll(&self) -> f64 {
        f64::atan2(
            2.0 * (self.w*self.x + self.y*self.z),
            1.0 - 2.0 * (self.x*self.x + self.y*self.y),
        )
    }

    pub fn pitch(&self) -> f64 {
        // Rounding can push a unit quaternion's term just outside asin's domain.
        let sin = 2.0 * (self.w*self.y - self.z*self.x);
        sin.clamp(-1.0, 1.0).asin()
    }

    pub fn yaw(&self) -> f64 {
        f64::atan2(
            2.0 * (self.w*self.z + self.x*self.y),
            1.0 - 2.0 * (self.y*self.y + self.z*self.z),
        )
    }

    /// `(roll, pitch, yaw)` in radians.
    pub fn euler(&self) -> Vec3 {
        self.euler_as()
    }

    pub fn rpy(&self) -> Vec3 {
        self.euler()
    }

    pub fn euler_as<V: Vector>(&self) -> V {
        V::new(self.roll(), self.pitch(), self.yaw())
    }
}

/// `source` must have unit length.
fn perpendicular_axis(source: Vec3) -> Vec3 {
    let x_axis = Vec3::unit_x();
    if source.dot(x_axis).abs() < 1.0 - PARALLEL_EPSILON {
        source.cross(x_axis)
    }
    else {
        source.cross(Vec3::unit_y())
    }
}

impl Default for Quaternion {
    fn default() -> Self {
        Self::identity()
    }
}

impl Mul for Quaternion {
    type Output = Self;

    fn mul(self, other: Self) -> Self::Output {
        self.multiply(&other)
    }
}

impl Index<usize> for Quaternion {
    type Output = f64;

    fn index(&self, index: usize) -> &Self::Output {
        match index {
            0 => &self.x,
            1 => &self.y,
            2 => &self.z,
            3 => &self.w,
            _ => panic!("{}", QuatError::IndexOutOfRange { index }),
        }
    }
}

impl IntoIterator for Quaternion {
    type Item = f64;
    type IntoIter = array::IntoIter<f64, 4>;

    fn into_iter(self) -> Self::IntoIter {
        self.iter()
    }
}

impl IntoIterator for &Quaternion {
    type Item = f64;
    type IntoIter = array::IntoIter<f64, 4>;

    fn into_iter(self) -> Self::IntoIter {
        self.iter()
    }
}

impl From<[f64; 4]> for Quaternion {
    fn from(arr: [f64; 4]) -> Quaternion {
        Quaternion::new(arr[0], arr[1], arr[2], arr[3])
    }
}

impl From<Quaternion> for [f64; 4] {
    fn from(quat: Quaternion) -> [f64; 4] {
        quat.to_sequence()
    }
}

impl TryFrom<&[f64]> for Quaternion {
    type Error = QuatError;

    fn try_from(components: &[f64]) -> Result<Self, Self::Error> {
        match *components {
            [x, y, z, w] => Ok(Quaternion::new(x, y, z, w)),
            _ => Err(QuatError::InvalidLength { len: components.len() }),
        }
    }
}

impl AbsDiffEq for Quaternion {
    type Epsilon = f64;

    fn default_epsilon() -> Self::Epsilon {
        f64::default_epsilon()
    }

    fn abs_diff_eq(&self, other: &Self, epsilon: Self::Epsilon) -> bool {
        self.iter()
            .zip(other.iter())
            .all(|(a, b)| a.abs_diff_eq(&b, epsilon))
    }
}

impl RelativeEq for Quaternion {
    fn default_max_relative() -> Self::Epsilon {
        f64::default_max_relative()
    }

    fn relative_eq(&self, other: &Self, epsilon: Self::Epsilon, max_relative: Self::Epsilon) -> bool {
        self.iter()
            .zip(other.iter())
            .all(|(a, b)| a.relative_eq(&b, epsilon, max_relative))
    }
}

impl UlpsEq for Quaternion {
    fn default_max_ulps() -> u32 {
        f64::default_max_ulps()
    }

    fn ulps_eq(&self, other: &Self, epsilon: Self::Epsilon, max_ulps: u32) -> bool {
        self.iter()
            .zip(other.iter())
            .all(|(a, b)| a.ulps_eq(&b, epsilon, max_ulps))
    }
}

impl fmt::Display for Quaternion {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "Quaternion({:?}, {:?}, {:?}, {:?})", self.x, self.y, self.z, self.w)
    }
}
