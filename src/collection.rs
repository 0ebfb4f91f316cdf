//! Collection of the spikes travelling across a graph.
//!
//! The collection is driven once per animation frame: new spikes are added with
//! [`SpikeCollection::add_spike`], all spikes are moved forward with [`SpikeCollection::tick`],
//! and the positions to render are read with [`SpikeCollection::all_coordinates`].
use itertools::Itertools;
use nalgebra::{DMatrix, Point2};

use crate::config::AnimationConfig;
use crate::error::SpikeError;
use crate::geometry;
use crate::graph::GraphContext;
use crate::spike::Spike;

/// The active spikes travelling along the edges of a graph.
///
/// Spikes are addressed by their position in `0..num_spikes()`. Positions are not stable:
/// they are reassigned whenever arrived spikes are removed, the relative order of the
/// remaining spikes being preserved.
#[derive(Debug)]
pub struct SpikeCollection<'a, G: GraphContext> {
    graph: &'a G,
    spikes: Vec<Spike>,
    radius: f64,
    capacity: usize,
    capacity_chunk: usize,
}

impl<'a, G: GraphContext> SpikeCollection<'a, G> {
    /// Create an empty collection on the graph, with the specified curvature radius and the
    /// default capacity settings.
    pub fn new(graph: &'a G, radius: f64) -> Result<Self, SpikeError> {
        let config = AnimationConfig {
            radius,
            ..AnimationConfig::default()
        };
        Self::with_config(graph, &config)
    }

    /// Create an empty collection on the graph from a configuration.
    pub fn with_config(graph: &'a G, config: &AnimationConfig) -> Result<Self, SpikeError> {
        let config = AnimationConfig::build(
            config.radius,
            config.initial_capacity,
            config.capacity_chunk,
        )?;
        Ok(SpikeCollection {
            graph,
            spikes: Vec::with_capacity(config.initial_capacity),
            radius: config.radius,
            capacity: config.initial_capacity,
            capacity_chunk: config.capacity_chunk,
        })
    }

    /// Returns the graph on which the spikes travel.
    pub fn graph(&self) -> &'a G {
        self.graph
    }

    /// Returns the curvature radius shared by all spikes.
    pub fn radius(&self) -> f64 {
        self.radius
    }

    /// Returns the number of active spikes.
    pub fn num_spikes(&self) -> usize {
        self.spikes.len()
    }

    pub fn is_empty(&self) -> bool {
        self.spikes.is_empty()
    }

    /// Returns the number of allocated slots, which is never less than the number of spikes.
    pub fn capacity(&self) -> usize {
        self.capacity
    }

    /// Returns the spike at the specified position, if any.
    pub fn spike(&self, index: usize) -> Option<&Spike> {
        self.spikes.get(index)
    }

    /// Returns an iterator over the active spikes, in storage order.
    pub fn iter(&self) -> impl Iterator<Item = &Spike> {
        self.spikes.iter()
    }

    /// Add a new spike at the source of the edge `(source_id, target_id)`.
    ///
    /// Returns an error if one of the neurons is not in the graph, or if the edge length is
    /// not positive. The collection is left unchanged on error.
    pub fn add_spike(&mut self, edge: (usize, usize)) -> Result<(), SpikeError> {
        let (source_id, target_id) = edge;
        let num_nodes = self.graph.num_nodes();
        if source_id >= num_nodes || target_id >= num_nodes {
            return Err(SpikeError::InvalidEdgeIndex {
                source: source_id,
                target: target_id,
            });
        }

        let length = self.graph.distance(source_id, target_id);
        if !(length > 0.0) {
            return Err(SpikeError::ZeroOrNegativeLength {
                source: source_id,
                target: target_id,
                length,
            });
        }
        let speed = self.graph.speed(source_id, target_id);

        if self.spikes.len() == self.capacity {
            self.grow();
        }

        let control_point = geometry::control_point(
            self.graph.node(source_id),
            self.graph.node(target_id),
            self.radius,
        );
        self.spikes.push(Spike::new(edge, length, speed, control_point));

        log::trace!(
            "Spike added on edge ({}, {}): {} active spikes",
            source_id,
            target_id,
            self.spikes.len()
        );
        Ok(())
    }

    /// Append a chunk of free slots. Existing spikes are left untouched.
    fn grow(&mut self) {
        self.spikes.reserve_exact(self.capacity_chunk);
        self.capacity += self.capacity_chunk;
        log::trace!("Spike collection capacity grown to {}", self.capacity);
    }

    /// Remove the spikes at the specified positions in a single pass.
    ///
    /// The remaining spikes keep their relative order. An index appearing several times is
    /// removed once. Returns an error, and leaves the collection unchanged, if any index is
    /// out of range.
    pub fn remove_spikes(&mut self, indices: &[usize]) -> Result<(), SpikeError> {
        let num_spikes = self.spikes.len();
        if let Some(&index) = indices.iter().find(|&&index| index >= num_spikes) {
            return Err(SpikeError::OutOfRangeSpikeIndex { index, num_spikes });
        }

        if indices.is_empty() {
            return Ok(());
        }

        let mut removed = vec![false; num_spikes];
        indices.iter().for_each(|&index| removed[index] = true);

        let mut flags = removed.into_iter();
        self.spikes.retain(|_| !flags.next().unwrap_or_default());

        log::trace!(
            "{} spikes removed: {} active spikes",
            num_spikes - self.spikes.len(),
            self.spikes.len()
        );
        Ok(())
    }

    /// Move every spike forward by the distance travelled during `dt`, then remove the spikes
    /// that reached their target.
    ///
    /// Progress is not clamped: an arrived spike is removed as soon as its progress reaches 1.
    /// Returns an error, and leaves the collection unchanged, if `dt` is negative or not finite.
    pub fn tick(&mut self, dt: f64) -> Result<(), SpikeError> {
        if !(dt >= 0.0) || !dt.is_finite() {
            return Err(SpikeError::InvalidTimeStep(dt));
        }

        self.spikes.iter_mut().for_each(|spike| spike.advance(dt));

        let arrived: Vec<usize> = self
            .spikes
            .iter()
            .positions(|spike| spike.has_arrived())
            .collect();
        self.remove_spikes(&arrived)?;

        log::debug!(
            "Tick of {}: {} spikes arrived, {} still travelling",
            dt,
            arrived.len(),
            self.spikes.len()
        );
        Ok(())
    }

    /// Returns the position of the spike along its curved path.
    fn position(&self, spike: &Spike) -> Point2<f64> {
        geometry::evaluate_position(
            self.graph.node(spike.source_id()),
            self.graph.node(spike.target_id()),
            spike.control_point(),
            spike.progress(),
        )
    }

    /// Returns the coordinates of the spike at the specified position.
    pub fn coordinate(&self, index: usize) -> Result<Point2<f64>, SpikeError> {
        self.spikes
            .get(index)
            .map(|spike| self.position(spike))
            .ok_or(SpikeError::OutOfRangeSpikeIndex {
                index,
                num_spikes: self.spikes.len(),
            })
    }

    /// Returns the coordinates of all active spikes, in storage order.
    pub fn all_coordinates(&self) -> Vec<Point2<f64>> {
        self.spikes.iter().map(|spike| self.position(spike)).collect()
    }

    /// Returns the coordinates of all active spikes as an `N x 2` matrix, one row per spike.
    pub fn coordinates_matrix(&self) -> DMatrix<f64> {
        let coordinates = self.all_coordinates();
        DMatrix::from_fn(coordinates.len(), 2, |i, j| coordinates[i][j])
    }
}
