use std::ops::{Add, AddAssign, Mul, Neg, Sub};

/// Two dimensional point, as found in a `points` attribute or produced when
/// resolving path commands.
#[derive(Copy, Clone, PartialEq, Default, Debug)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct Point {
    /// X coordinate.
    pub x: f32,
    /// Y coordinate.
    pub y: f32,
}

impl Point {
    /// The origin.
    pub const ZERO: Self = Self::new(0.0, 0.0);

    /// Creates a new point with the given x and y coordinates.
    #[inline(always)]
    pub const fn new(x: f32, y: f32) -> Self {
        Self { x, y }
    }

    /// Reflects `control` about this point.
    ///
    /// This is used to compute the implied first control point of smooth
    /// curve segments.
    #[inline]
    pub fn reflect(self, control: Self) -> Self {
        self * 2.0 - control
    }

    pub(crate) fn to_kurbo(self) -> kurbo::Point {
        kurbo::Point::new(self.x as f64, self.y as f64)
    }
}

impl Add for Point {
    type Output = Self;

    #[inline(always)]
    fn add(self, rhs: Self) -> Self::Output {
        Self {
            x: self.x + rhs.x,
            y: self.y + rhs.y,
        }
    }
}

impl AddAssign for Point {
    #[inline(always)]
    fn add_assign(&mut self, rhs: Self) {
        self.x += rhs.x;
        self.y += rhs.y;
    }
}

impl Sub for Point {
    type Output = Self;

    #[inline(always)]
    fn sub(self, rhs: Self) -> Self::Output {
        Self {
            x: self.x - rhs.x,
            y: self.y - rhs.y,
        }
    }
}

impl Mul<f32> for Point {
    type Output = Self;

    #[inline(always)]
    fn mul(self, rhs: f32) -> Self::Output {
        Self {
            x: self.x * rhs,
            y: self.y * rhs,
        }
    }
}

impl Neg for Point {
    type Output = Self;

    #[inline(always)]
    fn neg(self) -> Self::Output {
        Self {
            x: -self.x,
            y: -self.y,
        }
    }
}

impl From<(f32, f32)> for Point {
    fn from((x, y): (f32, f32)) -> Self {
        Self { x, y }
    }
}

#[cfg(test)]
mod tests {
    use super::Point;

    #[test]
    fn reflect() {
        let current = Point::new(10.0, 10.0);
        assert_eq!(current.reflect(Point::new(5.0, 0.0)), Point::new(15.0, 20.0));
        assert_eq!(current.reflect(current), current);
    }

    #[test]
    fn ops() {
        let mut p = Point::new(1.0, 2.0) + Point::new(3.0, 4.0);
        assert_eq!(p, Point::new(4.0, 6.0));
        p += Point::new(1.0, 1.0);
        assert_eq!(p - Point::new(5.0, 7.0), Point::ZERO);
        assert_eq!(-p * 0.5, Point::new(-2.5, -3.5));
    }

    #[cfg(feature = "serde")]
    #[test]
    fn serde_round_trip() {
        let point = Point::new(-1.5, 20.0);
        let json = serde_json::to_string(&point).unwrap();
        assert_eq!(json, r#"{"x":-1.5,"y":20.0}"#);
        assert_eq!(serde_json::from_str::<Point>(&json).unwrap(), point);
    }
}
