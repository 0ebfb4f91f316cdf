//! This crate provides tools for animating action potentials ("spikes") travelling along the
//! edges of a spiking neural network drawn in the plane.
//!
//! # Building a Graph
//!
//! The positions of the neurons and the metrics of the edges are fixed once and for all.
//!
//! ```rust
//! use nalgebra::{DMatrix, Point2};
//! use rusty_axon::graph::{GraphContext, MatrixGraph};
//!
//! let nodes = vec![Point2::new(0.0, 0.0), Point2::new(10.0, 0.0), Point2::new(10.0, 10.0)];
//! let speeds = DMatrix::from_element(3, 3, 2.0);
//! let graph = MatrixGraph::from_positions(nodes, speeds).unwrap();
//!
//! assert_eq!(graph.num_nodes(), 3);
//! assert_eq!(graph.distance(0, 1), 10.0);
//! ```
//!
//! # Animating Spikes
//!
//! Each frame, new spikes are added, every spike is moved forward, and the coordinates to
//! render are collected. Spikes are removed as soon as they reach their target.
//!
//! ```rust
//! use nalgebra::{DMatrix, Point2};
//! use rusty_axon::collection::SpikeCollection;
//! use rusty_axon::graph::MatrixGraph;
//!
//! let nodes = vec![Point2::new(0.0, 0.0), Point2::new(10.0, 0.0)];
//! let graph = MatrixGraph::from_positions(nodes, DMatrix::from_element(2, 2, 2.0)).unwrap();
//! let mut spikes = SpikeCollection::new(&graph, 1.0).unwrap();
//!
//! spikes.add_spike((0, 1)).unwrap();
//! assert_eq!(spikes.coordinate(0).unwrap(), Point2::new(0.0, 0.0));
//!
//! for _ in 0..4 {
//!     spikes.tick(1.0).unwrap();
//! }
//! assert_eq!(spikes.num_spikes(), 1);
//! assert_eq!(spikes.all_coordinates().len(), 1);
//!
//! // The spike reaches its target during the fifth tick
//! spikes.tick(1.0).unwrap();
//! assert!(spikes.is_empty());
//! ```

pub mod collection;
pub mod config;
pub mod error;
pub mod geometry;
pub mod graph;
pub mod spike;

/// The number of slots allocated when a spike collection is created.
pub const INITIAL_CAPACITY: usize = 3;
/// The number of slots appended whenever a spike collection is full.
pub const CAPACITY_CHUNK: usize = 10;
