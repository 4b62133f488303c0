/*
 * Herd Module
 *
 * This module owns the population of individuals and moves it forward in
 * time. Each tick every individual senses the herd as it currently is
 * (earlier individuals have already moved this tick, later ones have not),
 * then new individuals may be born inside the territory and old ones may be
 * removed at random.
 */

use nannou::prelude::*;
use rand::rngs::StdRng;
use rand::Rng;
use tracing::{debug, trace};

use crate::black_hole::BlackHole;
use crate::camera::Camera;
use crate::error::ParamsError;
use crate::individual::{Individual, Neighbors};
use crate::params::HerdParams;

// What happened to the population during one tick
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub struct TickSummary {
    pub births: usize,
    pub deaths: usize,
}

pub struct Herd<R: Rng = StdRng> {
    individuals: Vec<Individual>,
    black_hole: BlackHole,
    // Where individuals are born
    territory: Vec2,
    // Where individuals wrap around
    bounds: Vec2,
    params: HerdParams,
    rng: R,
}

impl<R: Rng> Herd<R> {
    pub fn new(territory: Vec2, bounds: Vec2, black_hole: BlackHole, rng: R) -> Self {
        Self {
            individuals: Vec::new(),
            black_hole,
            territory,
            bounds,
            params: HerdParams::default(),
            rng,
        }
    }

    pub fn with_params(
        params: HerdParams,
        territory: Vec2,
        bounds: Vec2,
        black_hole: BlackHole,
        rng: R,
    ) -> Result<Self, ParamsError> {
        params.validate()?;
        Ok(Self {
            params,
            ..Self::new(territory, bounds, black_hole, rng)
        })
    }

    pub fn individuals(&self) -> &[Individual] {
        &self.individuals
    }

    pub fn len(&self) -> usize {
        self.individuals.len()
    }

    pub fn is_empty(&self) -> bool {
        self.individuals.is_empty()
    }

    pub fn black_hole(&self) -> &BlackHole {
        &self.black_hole
    }

    pub fn params(&self) -> &HerdParams {
        &self.params
    }

    pub fn territory(&self) -> Vec2 {
        self.territory
    }

    pub fn bounds(&self) -> Vec2 {
        self.bounds
    }

    pub fn set_params(&mut self, params: HerdParams) -> Result<(), ParamsError> {
        params.validate()?;
        debug!(
            births_per_tick = params.births_per_tick,
            birth_survival_rate = params.birth_survival_rate,
            tick_survival_rate = params.tick_survival_rate,
            "herd parameters updated"
        );
        self.params = params;
        Ok(())
    }

    // The canvas changed size, the territory stays where it was
    pub fn set_bounds(&mut self, bounds: Vec2) {
        debug!(width = bounds.x, height = bounds.y, "herd bounds updated");
        self.bounds = bounds;
    }

    // Move the black hole, usually to the pointer
    pub fn attract_to(&mut self, position: Vec2) {
        self.black_hole.position = position;
    }

    // Add people to the herd
    pub fn add<I>(&mut self, individuals: I)
    where
        I: IntoIterator<Item = Individual>,
    {
        self.individuals.extend(individuals);
    }

    // Create someone at the given point
    pub fn spawn_at(&mut self, x: f32, y: f32) {
        let individual = Individual::new(x, y, &mut self.rng);
        self.individuals.push(individual);
    }

    // Seed individuals uniformly over the whole canvas
    pub fn populate(&mut self, count: usize) {
        let bounds = self.bounds;
        for _ in 0..count {
            let position = random_within(&mut self.rng, bounds);
            self.spawn_at(position.x, position.y);
        }
        debug!(count, population = self.individuals.len(), "herd populated");
    }

    // Move forward in time
    pub fn tick(&mut self) -> TickSummary {
        // Let time pass for all individuals, in order, against the live herd
        for index in 0..self.individuals.len() {
            if let Some((individual, neighbors)) = Neighbors::split(&mut self.individuals, index) {
                individual.tick(&neighbors, &self.black_hole, self.bounds);
            }
        }

        // Create new individuals according to birth rate
        let mut births = 0;
        for _ in 0..self.params.births_per_tick {
            if self.rng.gen_range(0.0..1.0) < self.params.birth_survival_rate {
                let position = random_within(&mut self.rng, self.territory);
                self.spawn_at(position.x, position.y);
                births += 1;
            }
        }

        // Kill some individuals randomly
        let before = self.individuals.len();
        let rng = &mut self.rng;
        let survival_rate = self.params.tick_survival_rate;
        self.individuals
            .retain(|_| rng.gen_range(0.0..1.0) < survival_rate);
        let deaths = before - self.individuals.len();

        let summary = TickSummary { births, deaths };
        trace!(births, deaths, population = self.individuals.len(), "herd ticked");
        summary
    }

    // Draw every individual
    pub fn draw(&self, draw: &Draw, camera: &Camera, window_rect: Rect) {
        for individual in &self.individuals {
            individual.draw(draw, camera, window_rect);
        }
    }
}

// Uniform point in [0, extent.x) x [0, extent.y), degenerate axes collapse to 0
fn random_within<R: Rng + ?Sized>(rng: &mut R, extent: Vec2) -> Vec2 {
    let x = if extent.x > 0.0 { rng.gen_range(0.0..extent.x) } else { 0.0 };
    let y = if extent.y > 0.0 { rng.gen_range(0.0..extent.y) } else { 0.0 };
    vec2(x, y)
}
