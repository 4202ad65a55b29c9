//! SA execution loop.

use std::fmt;

use rand::Rng;

use super::config::AnnealingConfig;
use super::types::NeighborStrategy;
use crate::coloring::{ColorAssignment, Cost};
use crate::error::{ColoringError, Result};
use crate::graph::Graph;
use crate::moves::{pair_move, recolor_vertex, recompact_cluster};
use crate::random::rng_from;

/// Best cost is sampled into the history every this many iterations.
const HISTORY_INTERVAL: usize = 100;

/// Result of an annealing run.
#[derive(Debug, Clone, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct AnnealingResult {
    /// The best assignment found.
    pub best: ColorAssignment,

    /// Colors and collisions of `best`.
    pub best_cost: Cost,

    /// Colors and collisions of the starting assignment.
    pub initial_cost: Cost,

    /// Total number of iterations (trial evaluations).
    pub iterations: usize,

    /// Iteration after which `best` was last replaced (0 = the start).
    pub best_iteration: usize,

    /// Temperature after the final cooling step.
    pub final_temperature: f64,

    /// Number of accepted trials (including improvements).
    pub accepted_moves: usize,

    /// Number of strictly improving trials.
    pub improving_moves: usize,

    /// Primary cost of the best assignment, sampled every 100 iterations.
    pub cost_history: Vec<f64>,
}

impl fmt::Display for AnnealingResult {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "{} colors, {} collisions ({} iterations, {} accepted)",
            self.best_cost.colors, self.best_cost.collisions, self.iterations, self.accepted_moves
        )
    }
}

/// Simulated annealing over the colorings of one graph.
///
/// The engine is immutable; each run owns its own current and best
/// assignments, so one engine can be run repeatedly or from several
/// threads.
#[derive(Debug, Clone)]
pub struct AnnealingEngine<'g> {
    graph: &'g Graph,
    config: AnnealingConfig,
}

impl<'g> AnnealingEngine<'g> {
    /// Creates an engine after validating `config`.
    pub fn new(graph: &'g Graph, config: AnnealingConfig) -> Result<Self> {
        if graph.is_empty() {
            return Err(ColoringError::EmptyGraph);
        }
        config.validate()?;
        Ok(Self { graph, config })
    }

    pub fn config(&self) -> &AnnealingConfig {
        &self.config
    }

    /// Runs with a generator seeded from the configuration.
    pub fn run(&self) -> AnnealingResult {
        let mut rng = rng_from(self.config.seed);
        self.run_with_rng(&mut rng)
    }

    /// Runs with an injected generator.
    ///
    /// The starting assignment comes from the configured initializer.
    pub fn run_with_rng<R: Rng>(&self, rng: &mut R) -> AnnealingResult {
        let start = self.config.initializer.build(self.graph, rng);
        self.anneal(start, rng)
    }

    /// Runs from a caller-provided starting assignment.
    pub fn run_from<R: Rng>(
        &self,
        start: ColorAssignment,
        rng: &mut R,
    ) -> Result<AnnealingResult> {
        if start.len() != self.graph.n() {
            return Err(ColoringError::SizeMismatch {
                expected: self.graph.n(),
                got: start.len(),
            });
        }
        Ok(self.anneal(start, rng))
    }

    fn anneal<R: Rng>(&self, start: ColorAssignment, rng: &mut R) -> AnnealingResult {
        let signal = self.config.cost_signal;
        let initial_cost = Cost::measure(self.graph, &start);

        let mut current_cost = signal.evaluate(self.graph, &start);
        let mut current = start;
        let mut best = current.clone();
        let mut best_cost = current_cost;
        let mut best_iteration = 0;

        let mut temperature = self.config.initial_temperature;
        let mut accepted_moves = 0usize;
        let mut improving_moves = 0usize;

        let mut cost_history =
            Vec::with_capacity(self.config.max_iterations / HISTORY_INTERVAL + 2);
        cost_history.push(signal.primary(&best_cost));

        log::debug!(
            "annealing: strategy={} signal={} T0={} rate={} iterations={} start={initial_cost}",
            self.config.strategy,
            signal,
            self.config.initial_temperature,
            self.config.cooling_rate,
            self.config.max_iterations,
        );

        for iteration in 1..=self.config.max_iterations {
            let trial = self.neighbor(&current, &current_cost, rng);
            let trial_cost = signal.evaluate(self.graph, &trial);

            let accept = if signal.is_better(&trial_cost, &current_cost) {
                improving_moves += 1;
                true
            } else {
                metropolis(signal.delta(&current_cost, &trial_cost), temperature, rng)
            };

            if accept {
                current = trial;
                current_cost = trial_cost;
                accepted_moves += 1;

                if signal.is_better(&current_cost, &best_cost) {
                    log::trace!(
                        "iteration {iteration}: new best {current_cost} at T={temperature}"
                    );
                    best = current.clone();
                    best_cost = current_cost;
                    best_iteration = iteration;
                }
            }

            temperature *= self.config.cooling_rate;

            if iteration % HISTORY_INTERVAL == 0 {
                cost_history.push(signal.primary(&best_cost));
            }
        }

        let best_cost = Cost::measure(self.graph, &best);
        log::debug!(
            "annealing finished: {initial_cost} -> {best_cost} \
             ({accepted_moves} accepted, {improving_moves} improving)"
        );

        AnnealingResult {
            best,
            best_cost,
            initial_cost,
            iterations: self.config.max_iterations,
            best_iteration,
            final_temperature: temperature,
            accepted_moves,
            improving_moves,
            cost_history,
        }
    }

    /// Draws one trial from `current` with the configured strategy.
    ///
    /// `current_cost` must come from the engine's cost signal; the cluster
    /// strategy uses its collision count as a filter.
    pub fn neighbor<R: Rng>(
        &self,
        current: &ColorAssignment,
        current_cost: &Cost,
        rng: &mut R,
    ) -> ColorAssignment {
        match self.config.strategy {
            NeighborStrategy::Cluster => self.cluster_neighbor(current, current_cost, rng),
            NeighborStrategy::Pairwise => self.pairwise_neighbor(current, rng),
            NeighborStrategy::Mixed => {
                if rng.random_bool(0.5) {
                    let mut trial = current.clone();
                    let v = rng.random_range(0..self.graph.n());
                    recolor_vertex(self.graph, &mut trial, v);
                    trial
                } else {
                    self.pairwise_neighbor(current, rng)
                }
            }
        }
    }

    fn cluster_neighbor<R: Rng>(
        &self,
        current: &ColorAssignment,
        current_cost: &Cost,
        rng: &mut R,
    ) -> ColorAssignment {
        let root = rng.random_range(0..self.graph.n());
        let trial = recompact_cluster(self.graph, current, root);
        if self.config.cost_signal.tracks_collisions()
            && trial.collisions(self.graph) > current_cost.collisions
        {
            return current.clone();
        }
        trial
    }

    fn pairwise_neighbor<R: Rng>(&self, current: &ColorAssignment, rng: &mut R) -> ColorAssignment {
        let mut trial = current.clone();
        let n = self.graph.n();
        if n < 2 {
            return trial;
        }
        let v1 = rng.random_range(0..n);
        let mut v2 = rng.random_range(0..n - 1);
        if v2 >= v1 {
            v2 += 1;
        }
        pair_move(self.graph, &mut trial, v1, v2, self.config.pair_move);
        trial
    }
}

/// Metropolis criterion for a non-improving trial.
///
/// `delta` is `current - trial` (non-positive for a worse trial). A
/// non-positive temperature always rejects.
fn metropolis<R: Rng>(delta: f64, temperature: f64, rng: &mut R) -> bool {
    if temperature <= 0.0 {
        return false;
    }
    let probability = (delta / temperature).exp();
    rng.random_range(0.0..1.0) < probability
}
