//! Module implementing the concept of a spike travelling along an edge.
use nalgebra::Point2;

/// An action potential in transit along a directed edge.
///
/// The edge metrics and the control point of the curve are copied when the spike is created
/// and are never read from the graph again.
#[derive(Debug, PartialEq, Clone)]
pub struct Spike {
    /// The IDs of the source and target neurons.
    edge: (usize, usize),
    /// The normalized position along the path, from 0 (source) to 1 (target).
    progress: f64,
    /// The length of the edge (must be positive).
    length: f64,
    /// The propagation speed along the edge.
    speed: f64,
    /// The control point of the curve followed by the spike.
    control_point: Point2<f64>,
}

impl Spike {
    pub(crate) fn new(
        edge: (usize, usize),
        length: f64,
        speed: f64,
        control_point: Point2<f64>,
    ) -> Self {
        Spike {
            edge,
            progress: 0.0,
            length,
            speed,
            control_point,
        }
    }

    /// Returns the (source, target) pair of the edge.
    pub fn edge(&self) -> (usize, usize) {
        self.edge
    }

    /// Returns the ID of the source neuron.
    pub fn source_id(&self) -> usize {
        self.edge.0
    }

    /// Returns the ID of the target neuron.
    pub fn target_id(&self) -> usize {
        self.edge.1
    }

    /// Returns the normalized position of the spike along its path.
    pub fn progress(&self) -> f64 {
        self.progress
    }

    pub fn length(&self) -> f64 {
        self.length
    }

    pub fn speed(&self) -> f64 {
        self.speed
    }

    pub fn control_point(&self) -> &Point2<f64> {
        &self.control_point
    }

    /// Move the spike forward by the distance travelled in `dt`.
    pub(crate) fn advance(&mut self, dt: f64) {
        self.progress += dt * self.speed / self.length;
    }

    /// Returns true if the spike reached the target neuron.
    pub fn has_arrived(&self) -> bool {
        self.progress >= 1.0
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use approx::assert_relative_eq;

    #[test]
    fn test_spike_new() {
        let spike = Spike::new((0, 1), 10.0, 2.0, Point2::new(5.0, -10.0));
        assert_eq!(spike.edge(), (0, 1));
        assert_eq!(spike.source_id(), 0);
        assert_eq!(spike.target_id(), 1);
        assert_eq!(spike.progress(), 0.0);
        assert_eq!(spike.length(), 10.0);
        assert_eq!(spike.speed(), 2.0);
        assert_eq!(spike.control_point(), &Point2::new(5.0, -10.0));
        assert!(!spike.has_arrived());
    }

    #[test]
    fn test_spike_advance() {
        let mut spike = Spike::new((0, 1), 10.0, 2.0, Point2::new(5.0, -10.0));
        spike.advance(1.0);
        assert_relative_eq!(spike.progress(), 0.2);
        spike.advance(0.0);
        assert_relative_eq!(spike.progress(), 0.2);
        spike.advance(4.0);
        assert_relative_eq!(spike.progress(), 1.0);
        assert!(spike.has_arrived());
    }

    #[test]
    fn test_spike_advance_zero_speed() {
        let mut spike = Spike::new((2, 0), 3.0, 0.0, Point2::new(0.0, 0.0));
        spike.advance(100.0);
        assert_eq!(spike.progress(), 0.0);
        assert!(!spike.has_arrived());
    }
}
