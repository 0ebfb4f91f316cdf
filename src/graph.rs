//! Graph structures providing node positions and edge metrics to spikes.
use nalgebra::{DMatrix, Point2};
use rand::Rng;
use rand_distr::{Distribution, Uniform};
use serde::{Deserialize, Serialize};
use serde_json;
use std::fs::File;
use std::io::{BufReader, BufWriter, Write};
use std::path::Path;

use crate::error::SpikeError;

/// Read-only view of a graph along which spikes travel.
///
/// Nodes are identified by their index in `0..num_nodes()`. Node positions and edge metrics
/// are only queried for valid node indices; implementations may panic otherwise.
pub trait GraphContext {
    /// Returns the number of nodes in the graph.
    fn num_nodes(&self) -> usize;

    /// Returns the position of the node.
    fn node(&self, id: usize) -> &Point2<f64>;

    /// Returns the length of the directed edge from `source_id` to `target_id`.
    fn distance(&self, source_id: usize, target_id: usize) -> f64;

    /// Returns the propagation speed along the directed edge from `source_id` to `target_id`.
    fn speed(&self, source_id: usize, target_id: usize) -> f64;
}

/// A graph with dense distance and speed matrices, indexed by (source, target).
#[derive(Debug, PartialEq, Clone, Serialize, Deserialize)]
pub struct MatrixGraph {
    nodes: Vec<Point2<f64>>,
    distances: DMatrix<f64>,
    speeds: DMatrix<f64>,
}

impl MatrixGraph {
    /// Create a new graph with the specified node positions and edge metrics.
    /// Returns an error if the matrices are not square with one row per node, if a distance
    /// is not finite, or if a speed is negative or not finite.
    pub fn new(
        nodes: Vec<Point2<f64>>,
        distances: DMatrix<f64>,
        speeds: DMatrix<f64>,
    ) -> Result<Self, SpikeError> {
        let num_nodes = nodes.len();

        if nodes.iter().any(|node| !node.x.is_finite() || !node.y.is_finite()) {
            return Err(SpikeError::InvalidParameter(
                "Node positions must be finite".to_string(),
            ));
        }

        for (name, matrix) in [("distance", &distances), ("speed", &speeds)] {
            if matrix.nrows() != num_nodes || matrix.ncols() != num_nodes {
                return Err(SpikeError::InvalidParameter(format!(
                    "The {} matrix must be {}x{}, got {}x{}",
                    name,
                    num_nodes,
                    num_nodes,
                    matrix.nrows(),
                    matrix.ncols()
                )));
            }
        }

        if distances.iter().any(|d| !d.is_finite()) {
            return Err(SpikeError::InvalidParameter(
                "Edge distances must be finite".to_string(),
            ));
        }

        if speeds.iter().any(|s| !s.is_finite() || *s < 0.0) {
            return Err(SpikeError::InvalidParameter(
                "Edge speeds must be finite and non-negative".to_string(),
            ));
        }

        Ok(MatrixGraph {
            nodes,
            distances,
            speeds,
        })
    }

    /// Create a new graph whose edge lengths are the Euclidean distances between the nodes.
    pub fn from_positions(
        nodes: Vec<Point2<f64>>,
        speeds: DMatrix<f64>,
    ) -> Result<Self, SpikeError> {
        let distances = DMatrix::from_fn(nodes.len(), nodes.len(), |i, j| {
            nalgebra::distance(&nodes[i], &nodes[j])
        });
        Self::new(nodes, distances, speeds)
    }

    /// Create a random graph with nodes uniformly scattered in the square `[0, extent)^2`.
    /// Edge lengths are Euclidean distances and speeds are uniformly sampled in `speed_range`.
    pub fn rand<R: Rng>(
        num_nodes: usize,
        extent: f64,
        speed_range: (f64, f64),
        rng: &mut R,
    ) -> Result<Self, SpikeError> {
        let (min_speed, max_speed) = speed_range;
        if !(extent > 0.0) || !extent.is_finite() {
            return Err(SpikeError::InvalidParameter(
                "The extent must be positive and finite".to_string(),
            ));
        }
        if min_speed < 0.0 || !(min_speed <= max_speed) || !max_speed.is_finite() {
            return Err(SpikeError::InvalidParameter(
                "The speed range must be non-negative, finite and ordered".to_string(),
            ));
        }

        let position_dist = Uniform::new(0.0, extent);
        let speed_dist = Uniform::new_inclusive(min_speed, max_speed);

        let nodes: Vec<Point2<f64>> = (0..num_nodes)
            .map(|_| Point2::new(position_dist.sample(rng), position_dist.sample(rng)))
            .collect();
        let speeds = DMatrix::from_fn(num_nodes, num_nodes, |_, _| speed_dist.sample(rng));

        log::debug!("Random graph sampled with {} nodes", num_nodes);

        Self::from_positions(nodes, speeds)
    }

    /// Returns the node positions.
    pub fn nodes(&self) -> &[Point2<f64>] {
        &self.nodes
    }

    /// Save the graph to a JSON file.
    pub fn save_to<P: AsRef<Path>>(&self, path: P) -> Result<(), SpikeError> {
        let file = File::create(path)?;
        let mut writer = BufWriter::new(file);
        serde_json::to_writer_pretty(&mut writer, self)?;
        writer.flush()?;
        Ok(())
    }

    /// Load a graph from a JSON file. The loaded graph is validated as in [`MatrixGraph::new`].
    pub fn load_from<P: AsRef<Path>>(path: P) -> Result<Self, SpikeError> {
        let file = File::open(path)?;
        let reader = BufReader::new(file);
        let graph: MatrixGraph = serde_json::from_reader(reader)?;
        Self::new(graph.nodes, graph.distances, graph.speeds)
    }
}

impl GraphContext for MatrixGraph {
    fn num_nodes(&self) -> usize {
        self.nodes.len()
    }

    fn node(&self, id: usize) -> &Point2<f64> {
        &self.nodes[id]
    }

    fn distance(&self, source_id: usize, target_id: usize) -> f64 {
        self.distances[(source_id, target_id)]
    }

    fn speed(&self, source_id: usize, target_id: usize) -> f64 {
        self.speeds[(source_id, target_id)]
    }
}
