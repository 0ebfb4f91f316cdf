//! Curve geometry of the paths followed by spikes.
//!
//! A spike travels along a quadratic Bezier curve from the source node to the target node.
//! The curve is bent away from the straight segment by a control point, offset from the
//! midpoint of the segment along the (unnormalized) perpendicular direction.
use nalgebra::{Point2, Vector2};

/// Returns the vector perpendicular to `dir`, i.e., `(dy, -dx)`.
pub fn perp(dir: &Vector2<f64>) -> Vector2<f64> {
    Vector2::new(dir.y, -dir.x)
}

/// Returns the control point of the curve joining `node_s` to `node_t`.
///
/// The offset from the midpoint is `radius` times the perpendicular of the raw direction
/// `node_t - node_s`, hence the curvature scales with the length of the edge.
pub fn control_point(node_s: &Point2<f64>, node_t: &Point2<f64>, radius: f64) -> Point2<f64> {
    let mid = nalgebra::center(node_s, node_t);
    mid + perp(&(node_t - node_s)) * radius
}

/// Evaluates the quadratic Bezier curve defined by `node_s`, `control` and `node_t` at `t`.
///
/// The curve passes through `node_s` at `t = 0` and through `node_t` at `t = 1`.
/// It does not go through the control point.
pub fn evaluate_position(
    node_s: &Point2<f64>,
    node_t: &Point2<f64>,
    control: &Point2<f64>,
    t: f64,
) -> Point2<f64> {
    let a = node_s.lerp(control, t);
    let b = control.lerp(node_t, t);
    a.lerp(&b, t)
}

#[cfg(test)]
mod tests {
    use super::*;
    use approx::assert_relative_eq;

    #[test]
    fn test_perp() {
        assert_eq!(perp(&Vector2::new(10.0, 0.0)), Vector2::new(0.0, -10.0));
        assert_eq!(perp(&Vector2::new(1.0, 2.0)), Vector2::new(2.0, -1.0));
    }

    #[test]
    fn test_control_point() {
        let s = Point2::new(0.0, 0.0);
        let t = Point2::new(10.0, 0.0);
        assert_eq!(control_point(&s, &t, 1.0), Point2::new(5.0, -10.0));
        assert_eq!(control_point(&s, &t, 0.0), Point2::new(5.0, 0.0));
        assert_eq!(control_point(&s, &t, -0.5), Point2::new(5.0, 5.0));

        // The offset scales with the length of the edge
        let t = Point2::new(20.0, 0.0);
        assert_eq!(control_point(&s, &t, 1.0), Point2::new(10.0, -20.0));

        // Reversing the edge bends the curve to the other side
        let s = Point2::new(1.0, 1.0);
        let t = Point2::new(1.0, 3.0);
        assert_eq!(control_point(&s, &t, 0.25), Point2::new(1.5, 2.0));
        assert_eq!(control_point(&t, &s, 0.25), Point2::new(0.5, 2.0));
    }

    #[test]
    fn test_evaluate_position_endpoints() {
        let s = Point2::new(-1.0, 2.0);
        let t = Point2::new(3.0, 7.0);
        let c = control_point(&s, &t, 0.3);
        assert_eq!(evaluate_position(&s, &t, &c, 0.0), s);
        let end = evaluate_position(&s, &t, &c, 1.0);
        assert_relative_eq!(end.x, t.x, epsilon = 1e-12);
        assert_relative_eq!(end.y, t.y, epsilon = 1e-12);
    }

    #[test]
    fn test_evaluate_position_misses_control_point() {
        let s = Point2::new(0.0, 0.0);
        let t = Point2::new(10.0, 0.0);
        let c = control_point(&s, &t, 1.0);

        // At t = 1/2, the curve is halfway between the midpoint and the control point
        let p = evaluate_position(&s, &t, &c, 0.5);
        assert_relative_eq!(p.x, 5.0);
        assert_relative_eq!(p.y, -5.0);

        for k in 1..20 {
            let p = evaluate_position(&s, &t, &c, k as f64 / 20.0);
            assert!((p - c).norm() > 1.0);
        }
    }

    #[test]
    fn test_evaluate_position_straight_line() {
        let s = Point2::new(0.0, 0.0);
        let t = Point2::new(4.0, 4.0);
        let c = control_point(&s, &t, 0.0);
        let p = evaluate_position(&s, &t, &c, 0.25);
        assert_relative_eq!(p.x, 1.0);
        assert_relative_eq!(p.y, 1.0);
    }
}
