use super::{Point2, Vector2, DEGENERATE_LENGTH};

/// Computes twice the signed area of the triangle `(a, b, c)` (shoelace formula).
///
/// Positive for counter-clockwise, negative for clockwise.
#[must_use]
pub fn signed_area_x2(a: &Point2, b: &Point2, c: &Point2) -> f64 {
    a.x * b.y - b.x * a.y + b.x * c.y - c.x * b.y + c.x * a.y - a.x * c.y
}

/// Returns `true` when `(a, b, c)` winds strictly counter-clockwise.
///
/// Degenerate (zero-area) triangles are not counter-clockwise.
#[must_use]
pub fn is_counter_clockwise(a: &Point2, b: &Point2, c: &Point2) -> bool {
    signed_area_x2(a, b, c) > 0.0
}

/// Returns the left-pointing unit normal of the segment `a → b`.
///
/// A zero-length segment yields the zero vector instead of NaN, since the
/// length is replaced by [`DEGENERATE_LENGTH`] before dividing.
#[must_use]
pub fn unit_normal(a: &Point2, b: &Point2) -> Vector2 {
    let d = b - a;
    let mut len = d.norm();
    if len == 0.0 {
        len = DEGENERATE_LENGTH;
    }
    Vector2::new(-d.y / len, d.x / len)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::math::TOLERANCE;

    #[test]
    fn signed_area_ccw_triangle() {
        let a = Point2::new(0.0, 0.0);
        let b = Point2::new(1.0, 0.0);
        let c = Point2::new(0.0, 1.0);
        assert!((signed_area_x2(&a, &b, &c) - 1.0).abs() < TOLERANCE);
        assert!(is_counter_clockwise(&a, &b, &c));
    }

    #[test]
    fn signed_area_cw_triangle() {
        let a = Point2::new(0.0, 0.0);
        let b = Point2::new(0.0, 1.0);
        let c = Point2::new(1.0, 0.0);
        assert!((signed_area_x2(&a, &b, &c) + 1.0).abs() < TOLERANCE);
        assert!(!is_counter_clockwise(&a, &b, &c));
    }

    #[test]
    fn collinear_is_not_ccw() {
        let a = Point2::new(0.0, 0.0);
        let b = Point2::new(1.0, 1.0);
        let c = Point2::new(2.0, 2.0);
        assert!(!is_counter_clockwise(&a, &b, &c));
    }

    #[test]
    fn unit_normal_points_left() {
        let n = unit_normal(&Point2::new(0.0, 0.0), &Point2::new(3.0, 0.0));
        assert!(n.x.abs() < TOLERANCE);
        assert!((n.y - 1.0).abs() < TOLERANCE);
    }

    #[test]
    fn unit_normal_is_unit_length() {
        let n = unit_normal(&Point2::new(1.0, 2.0), &Point2::new(4.0, 6.0));
        assert!((n.norm() - 1.0).abs() < TOLERANCE);
        assert!((n.x + 0.8).abs() < TOLERANCE);
        assert!((n.y - 0.6).abs() < TOLERANCE);
    }

    #[test]
    fn unit_normal_zero_length_is_finite() {
        let p = Point2::new(2.0, -1.0);
        let n = unit_normal(&p, &p);
        assert!(n.x.is_finite() && n.y.is_finite());
        assert!(n.norm() < TOLERANCE);
    }
}
