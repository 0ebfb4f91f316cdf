use clap::Parser;
use log;
use log::LevelFilter;
use log4rs::append::console::ConsoleAppender;
use log4rs::config::{Appender, Config, Root};
use log4rs::encode::pattern::PatternEncoder;
use rand::rngs::StdRng;
use rand::{Rng, SeedableRng};
use rand_distr::{Distribution, Poisson};

use rusty_axon::collection::SpikeCollection;
use rusty_axon::config::AnimationConfig;
use rusty_axon::error::SpikeError;
use rusty_axon::graph::{GraphContext, MatrixGraph};

#[derive(Parser, Debug)]
struct Args {
    /// The seed used for graph sampling and spike generation
    #[arg(long, default_value = "0")]
    seed: u64,
    /// The number of neurons (ignored when a graph file is given)
    #[arg(short = 'N', long, default_value = "12")]
    num_neurons: usize,
    /// A JSON graph file to animate instead of a random graph
    #[arg(long)]
    graph: Option<String>,
    /// A JSON configuration file for the spike collection
    #[arg(long)]
    config: Option<String>,
    /// The side of the square in which neurons are scattered
    #[arg(long, default_value = "100.0")]
    extent: f64,
    /// The minimum propagation speed
    #[arg(long, default_value = "5.0")]
    min_speed: f64,
    /// The maximum propagation speed
    #[arg(long, default_value = "20.0")]
    max_speed: f64,
    /// The mean number of new spikes per frame
    #[arg(long, default_value = "1.5")]
    spike_rate: f64,
    /// The duration of a frame
    #[arg(long, default_value = "0.1")]
    dt: f64,
    /// The number of frames
    #[arg(short = 'F', long, default_value = "100")]
    num_frames: usize,
    /// Print debug messages
    #[arg(short, long)]
    verbose: bool,
}

fn main() -> Result<(), SpikeError> {
    let args = Args::parse();

    let stdout = ConsoleAppender::builder()
        .encoder(Box::new(PatternEncoder::new("{l} - {m}\n")))
        .build();
    let level = if args.verbose {
        LevelFilter::Debug
    } else {
        LevelFilter::Info
    };
    let config = Config::builder()
        .appender(Appender::builder().build("stdout", Box::new(stdout)))
        .build(Root::builder().appender("stdout").build(level))
        .map_err(|e| SpikeError::IOError(e.to_string()))?;
    log4rs::init_config(config).map_err(|e| SpikeError::IOError(e.to_string()))?;

    log::info!("{:?}", args);

    let mut rng = StdRng::seed_from_u64(args.seed);

    let graph = match &args.graph {
        Some(path) => MatrixGraph::load_from(path)?,
        None => MatrixGraph::rand(
            args.num_neurons,
            args.extent,
            (args.min_speed, args.max_speed),
            &mut rng,
        )?,
    };
    let num_neurons = graph.num_nodes();
    if num_neurons < 2 {
        return Err(SpikeError::InvalidParameter(
            "At least two neurons are needed to animate spikes".to_string(),
        ));
    }
    log::info!("Graph: done! {} neurons", num_neurons);

    let animation_config = match &args.config {
        Some(path) => AnimationConfig::load_from(path)?,
        None => AnimationConfig {
            radius: 0.2,
            ..AnimationConfig::default()
        },
    };
    let mut spikes = SpikeCollection::with_config(&graph, &animation_config)?;

    let num_new_spikes = Poisson::new(args.spike_rate)
        .map_err(|e| SpikeError::InvalidParameter(e.to_string()))?;

    for frame in 0..args.num_frames {
        let num_new = num_new_spikes.sample(&mut rng) as usize;
        for _ in 0..num_new {
            let source_id = rng.gen_range(0..num_neurons);
            let target_id = (source_id + rng.gen_range(1..num_neurons)) % num_neurons;
            match spikes.add_spike((source_id, target_id)) {
                Ok(()) => {}
                Err(e @ SpikeError::ZeroOrNegativeLength { .. }) => log::warn!("{}", e),
                Err(e) => return Err(e),
            }
        }

        spikes.tick(args.dt)?;

        let coordinates = spikes.all_coordinates();
        log::info!(
            "Frame {}: {} spikes (capacity {})",
            frame,
            coordinates.len(),
            spikes.capacity()
        );
        for (spike, coordinate) in spikes.iter().zip(coordinates.iter()) {
            log::debug!(
                "  ({}, {}) at {:.3}: ({:.3}, {:.3})",
                spike.source_id(),
                spike.target_id(),
                spike.progress(),
                coordinate.x,
                coordinate.y
            );
        }
    }

    Ok(())
}
