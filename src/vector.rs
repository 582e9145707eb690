use std::ops::{Neg, Div};
use std::fmt;

use approx::{AbsDiffEq, RelativeEq, UlpsEq};

/// Anything with three components that can be built back from them.
///
/// Rotations read a vector through this trait and hand back a value of
/// the caller's own type, so any 3D vector type can be plugged in.
pub trait Vector: Sized {
    fn new(x: f64, y: f64, z: f64) -> Self;

    fn x(&self) -> f64;
    fn y(&self) -> f64;
    fn z(&self) -> f64;

    fn dot(&self, other: &Self) -> f64 {
        self.x()*other.x() + self.y()*other.y() + self.z()*other.z()
    }

    fn cross(&self, other: &Self) -> Self {
        Self::new(
            self.y()*other.z() - self.z()*other.y(),
            self.z()*other.x() - self.x()*other.z(),
            self.x()*other.y() - self.y()*other.x(),
        )
    }

    fn len_sq(&self) -> f64 {
        self.dot(self)
    }
}

#[derive(PartialEq, Clone, Copy, Default, Debug)]
pub struct Vec3 {
    pub x: f64,
    pub y: f64,
    pub z: f64,
}
impl Vec3 {
    pub fn new(x: f64, y: f64, z: f64) -> Self {
        Self { x, y, z }
    }

    pub fn zero() -> Self {
        Self::new(0.0, 0.0, 0.0)
    }

    pub fn unit_x() -> Self {
        Self::new(1.0, 0.0, 0.0)
    }

    pub fn unit_y() -> Self {
        Self::new(0.0, 1.0, 0.0)
    }

    pub fn unit_z() -> Self {
        Self::new(0.0, 0.0, 1.0)
    }

    /// Copies the components of any other vector type.
    pub fn from_vector<V: Vector>(vec: &V) -> Self {
        Self::new(vec.x(), vec.y(), vec.z())
    }

    /// Length without squaring the components, so very small or very large
    /// vectors neither underflow to zero nor overflow to infinity.
    pub fn len(&self) -> f64 {
        self.x.hypot(self.y).hypot(self.z)
    }

    pub fn len_sq(&self) -> f64 {
        self.x*self.x + self.y*self.y + self.z*self.z
    }

    pub fn dot(&self, vec: Vec3) -> f64 {
        self.x*vec.x + self.y*vec.y + self.z*vec.z
    }

    pub fn cross(&self, vec: Vec3) -> Self {
        Self::new(
            self.y*vec.z - self.z*vec.y,
            self.z*vec.x - self.x*vec.z,
            self.x*vec.y - self.y*vec.x,
        )
    }

    pub fn normalized(&self) -> Self {
        *self / self.len()
    }
}

impl Vector for Vec3 {
    fn new(x: f64, y: f64, z: f64) -> Self {
        Vec3::new(x, y, z)
    }

    fn x(&self) -> f64 { self.x }
    fn y(&self) -> f64 { self.y }
    fn z(&self) -> f64 { self.z }
}

impl Vector for cgmath::Vector3<f64> {
    fn new(x: f64, y: f64, z: f64) -> Self {
        cgmath::Vector3::new(x, y, z)
    }

    fn x(&self) -> f64 { self.x }
    fn y(&self) -> f64 { self.y }
    fn z(&self) -> f64 { self.z }
}

impl Neg for Vec3 {
    type Output = Self;

    fn neg(self) -> Self::Output {
        Self::new(-self.x, -self.y, -self.z)
    }
}

impl Div<f64> for Vec3 {
    type Output = Self;

    fn div(self, other: f64) -> Self::Output {
        Self::new(self.x / other, self.y / other, self.z / other)
    }
}

impl AbsDiffEq for Vec3 {
    type Epsilon = f64;

    fn default_epsilon() -> Self::Epsilon {
        f64::default_epsilon()
    }

    fn abs_diff_eq(&self, other: &Self, epsilon: Self::Epsilon) -> bool {
        self.x.abs_diff_eq(&other.x, epsilon)
            && self.y.abs_diff_eq(&other.y, epsilon)
            && self.z.abs_diff_eq(&other.z, epsilon)
    }
}

impl RelativeEq for Vec3 {
    fn default_max_relative() -> Self::Epsilon {
        f64::default_max_relative()
    }

    fn relative_eq(&self, other: &Self, epsilon: Self::Epsilon, max_relative: Self::Epsilon) -> bool {
        self.x.relative_eq(&other.x, epsilon, max_relative)
            && self.y.relative_eq(&other.y, epsilon, max_relative)
            && self.z.relative_eq(&other.z, epsilon, max_relative)
    }
}

impl UlpsEq for Vec3 {
    fn default_max_ulps() -> u32 {
        f64::default_max_ulps()
    }

    fn ulps_eq(&self, other: &Self, epsilon: Self::Epsilon, max_ulps: u32) -> bool {
        self.x.ulps_eq(&other.x, epsilon, max_ulps)
            && self.y.ulps_eq(&other.y, epsilon, max_ulps)
            && self.z.ulps_eq(&other.z, epsilon, max_ulps)
    }
}

impl fmt::Display for Vec3 {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "Vec3({}, {}, {})", self.x, self.y, self.z)
    }
}


#[test]
fn cross_test() {
    let v  = Vec3::new(4.0, 3.0, 6.0);
    let v2 = Vec3::new(2.0, 9.0, 3.0);

    let cross = v.cross(v2);
    assert!(cross == Vec3::new(-45.0, 0.0, 30.0));
}

#[test]
fn dot_test() {
    let v  = Vec3::new(4.0, 3.0, 6.0);
    let v2 = Vec3::new(2.0, 9.0, 3.0);

    let dot = v.dot(v2);
    assert!(dot == 53.0);
}

#[test]
fn trait_methods_match_inherent() {
    let v  = Vec3::new(4.0, 3.0, 6.0);
    let v2 = Vec3::new(2.0, 9.0, 3.0);

    assert!(Vector::dot(&v, &v2) == v.dot(v2));
    assert!(Vector::cross(&v, &v2) == v.cross(v2));
    assert!(Vector::len_sq(&v) == 61.0);
}

#[test]
fn cgmath_vector_cross() {
    let v: cgmath::Vector3<f64>  = cgmath::Vector3::new(4.0, 3.0, 6.0);
    let v2: cgmath::Vector3<f64> = cgmath::Vector3::new(2.0, 9.0, 3.0);

    let cross = Vector::cross(&v, &v2);
    assert!(cross == cgmath::Vector3::new(-45.0, 0.0, 30.0));
}

#[test]
fn normalized_has_unit_length() {
    let v = Vec3::new(3.0, 0.0, 4.0).normalized();
    approx::assert_relative_eq!(v.len(), 1.0);
    approx::assert_relative_eq!(v, Vec3::new(0.6, 0.0, 0.8));
}

#[test]
fn len_survives_extreme_magnitudes() {
    approx::assert_relative_eq!(Vec3::new(3e-200, 4e-200, 0.0).len(), 5e-200);
    approx::assert_relative_eq!(Vec3::new(0.0, 3e200, 4e200).len(), 5e200);
    approx::assert_relative_eq!(Vec3::new(1e-200, 0.0, 0.0).normalized(), Vec3::unit_x());
}
