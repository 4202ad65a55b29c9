//! Local search engine.

use rand::Rng;

use super::config::LocalSearchConfig;
use super::types::{Improvement, LocalSearchOutcome, LocalSearchReport, Neighborhood};
use crate::coloring::{ColorAssignment, Cost};
use crate::error::{ColoringError, Result};
use crate::graph::Graph;
use crate::moves::{pair_move, recompact_cluster};
use crate::random::rng_from;

/// Strict-improvement local search over one graph.
///
/// Every scan starts from the assignment it is given and returns a new
/// one; the engine itself holds no mutable state.
#[derive(Debug, Clone)]
pub struct LocalSearchEngine<'g> {
    graph: &'g Graph,
    config: LocalSearchConfig,
}

impl<'g> LocalSearchEngine<'g> {
    /// Creates an engine after validating `config`.
    pub fn new(graph: &'g Graph, config: LocalSearchConfig) -> Result<Self> {
        if graph.is_empty() {
            return Err(ColoringError::EmptyGraph);
        }
        config.validate()?;
        Ok(Self { graph, config })
    }

    pub fn config(&self) -> &LocalSearchConfig {
        &self.config
    }

    /// Builds the starting assignment with the configured initializer.
    pub fn initial_assignment<R: Rng>(&self, rng: &mut R) -> ColorAssignment {
        self.config.initializer.build(self.graph, rng)
    }

    /// Runs all four scans from one initial assignment.
    ///
    /// The generator is seeded from the configuration.
    pub fn run_all(&self) -> LocalSearchReport {
        let mut rng = rng_from(self.config.seed);
        self.run_all_with_rng(&mut rng)
    }

    /// Runs all four scans, drawing the initial assignment from `rng`.
    pub fn run_all_with_rng<R: Rng>(&self, rng: &mut R) -> LocalSearchReport {
        let start = self.initial_assignment(rng);
        self.report_from(&start)
    }

    /// Runs all four scans from a caller-provided assignment.
    pub fn run_all_from(&self, start: &ColorAssignment) -> Result<LocalSearchReport> {
        self.check_size(start)?;
        Ok(self.report_from(start))
    }

    fn report_from(&self, start: &ColorAssignment) -> LocalSearchReport {
        LocalSearchReport {
            initial: Cost::measure(self.graph, start),
            first_cluster: self.cluster_recompaction(start, Improvement::First),
            best_cluster: self.cluster_recompaction(start, Improvement::Best),
            first_pairwise: self.pairwise_recoloring(start, Improvement::First),
            best_pairwise: self.pairwise_recoloring(start, Improvement::Best),
            collision_aware: self.config.cost_signal.tracks_collisions(),
        }
    }

    /// Neighborhood 1: recompacts the component of each start vertex in turn.
    ///
    /// A trial is accepted only if it is strictly better than the best
    /// assignment kept so far. On a connected graph every start vertex sees
    /// the same component, so at most one distinct trial exists.
    pub fn cluster_recompaction(
        &self,
        start: &ColorAssignment,
        improvement: Improvement,
    ) -> LocalSearchOutcome {
        let signal = self.config.cost_signal;
        let mut best = start.clone();
        let mut best_cost = signal.evaluate(self.graph, start);
        let mut evaluated = 0;
        let mut improvements = 0;

        for root in 0..self.graph.n() {
            let trial = recompact_cluster(self.graph, start, root);
            let cost = signal.evaluate(self.graph, &trial);
            evaluated += 1;

            if signal.is_better(&cost, &best_cost) {
                log::trace!("cluster move from root {root} accepted: {cost}");
                best = trial;
                best_cost = cost;
                improvements += 1;
                if improvement == Improvement::First {
                    break;
                }
            }
        }

        self.outcome(
            Neighborhood::ClusterRecompaction,
            improvement,
            start,
            best,
            evaluated,
            improvements,
        )
    }

    /// Neighborhood 2: tries the configured pair move on every ordered pair
    /// of differently colored vertices.
    pub fn pairwise_recoloring(
        &self,
        start: &ColorAssignment,
        improvement: Improvement,
    ) -> LocalSearchOutcome {
        let signal = self.config.cost_signal;
        let mode = self.config.pair_move;
        let n = self.graph.n();

        let mut best = start.clone();
        let mut best_cost = signal.evaluate(self.graph, start);
        let mut work = start.clone();
        let mut evaluated = 0;
        let mut improvements = 0;

        'scan: for v1 in 0..n {
            for v2 in 0..n {
                let (c1, c2) = (work.raw(v1), work.raw(v2));
                if !pair_move(self.graph, &mut work, v1, v2, mode) {
                    continue;
                }
                let cost = signal.evaluate(self.graph, &work);
                evaluated += 1;

                if signal.is_better(&cost, &best_cost) {
                    log::trace!("pair move ({v1}, {v2}) accepted: {cost}");
                    best = work.clone();
                    best_cost = cost;
                    improvements += 1;
                    if improvement == Improvement::First {
                        break 'scan;
                    }
                }

                work.set(v1, c1);
                work.set(v2, c2);
            }
        }

        self.outcome(
            Neighborhood::PairwiseRecoloring,
            improvement,
            start,
            best,
            evaluated,
            improvements,
        )
    }

    fn outcome(
        &self,
        neighborhood: Neighborhood,
        improvement: Improvement,
        start: &ColorAssignment,
        assignment: ColorAssignment,
        evaluated: usize,
        improvements: usize,
    ) -> LocalSearchOutcome {
        let before = Cost::measure(self.graph, start);
        let after = Cost::measure(self.graph, &assignment);
        log::debug!(
            "{} ({}): {evaluated} trials, {improvements} improvements, {before} -> {after}",
            improvement.label(),
            neighborhood.label(),
        );
        LocalSearchOutcome {
            neighborhood,
            improvement,
            assignment,
            before,
            after,
            evaluated,
            improvements,
        }
    }

    fn check_size(&self, assignment: &ColorAssignment) -> Result<()> {
        if assignment.len() != self.graph.n() {
            return Err(ColoringError::SizeMismatch {
                expected: self.graph.n(),
                got: assignment.len(),
            });
        }
        Ok(())
    }
}
