//! 2-D geometry on top of `nalgebra`.
//!
//! Positions are [`Point`]s; velocities, forces and offsets are [`Vector`]s.

use nalgebra as na;

pub type Point = na::Point2<f64>;
pub type Vector = na::Vector2<f64>;

pub fn point(x: f64, y: f64) -> Point {
    Point::new(x, y)
}

pub fn vector(x: f64, y: f64) -> Vector {
    Vector::new(x, y)
}

/// Unit vector at `angle` radians.
pub fn unit(angle: f64) -> Vector {
    let (sin, cos) = angle.sin_cos();
    Vector::new(cos, sin)
}

pub fn is_finite(v: &Vector) -> bool {
    v.iter().all(|c| c.is_finite())
}

/// Axis-aligned bounds of a point set.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Bounds {
    pub min: Point,
    pub max: Point,
}

impl Bounds {
    pub fn of<I: IntoIterator<Item = Point>>(points: I) -> Option<Self> {
        let mut it = points.into_iter();
        let first = it.next()?;
        let (min, max) = it.fold((first, first), |(lo, hi), p| (lo.inf(&p), hi.sup(&p)));
        Some(Self { min, max })
    }

    pub fn extent(&self) -> Vector {
        self.max - self.min
    }

    pub fn center(&self) -> Point {
        na::center(&self.min, &self.max)
    }
}

#[cfg(test)]
mod tests {
    use super::{Bounds, is_finite, point, unit, vector};

    #[test]
    fn unit_vectors_have_length_one() {
        let u = unit(std::f64::consts::FRAC_PI_2);
        assert!((u.norm() - 1.0).abs() < 1e-12);
        assert!(u.x.abs() < 1e-12);
        assert!(!is_finite(&vector(f64::INFINITY, 0.0)));
    }

    #[test]
    fn bounds_cover_all_points() {
        let b = Bounds::of([point(1.0, -2.0), point(-3.0, 4.0), point(0.0, 0.0)]).unwrap();
        assert_eq!(b.min, point(-3.0, -2.0));
        assert_eq!(b.max, point(1.0, 4.0));
        assert_eq!(b.extent(), vector(4.0, 6.0));
        assert_eq!(b.center(), point(-1.0, 1.0));
        assert!(Bounds::of(std::iter::empty()).is_none());
    }
}
