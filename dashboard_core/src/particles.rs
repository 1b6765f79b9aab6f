//! Interactive particle background.
//!
//! A fixed-size pool: particles are never added or removed, an expired one is
//! re-initialised in place at the emitter origin. Each particle has a render
//! vertex at the same index, rewritten in the same pass as the particle.
//!
//! # Per-frame update
//! 1. age by `elapsed`
//! 2. respawn if expired (and skip the remaining steps for this frame)
//! 3. repel from the pointer inside `repel_radius`
//! 4. drag
//! 5. integrate position
//! 6. refresh the vertex (alpha fades with remaining lifetime)

use crate::{
    canvas::Canvas,
    error::DashboardError,
    types::{finite_range, point, Point, Rgba},
};
use rand::{Rng, SeedableRng};
use rand_chacha::ChaCha8Rng;
use serde::{Deserialize, Serialize};
use std::f32::consts::TAU;

/// Tuning parameters for [`ParticleSystem`].
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct ParticleConfig {
    /// Pool size
    pub count: usize,
    /// Respawn point in screen space
    pub origin: [f32; 2],
    /// Respawn speed range (px/s)
    pub speed_min: f32,
    pub speed_max: f32,
    /// Respawn lifetime range (s)
    pub lifetime_min: f32,
    pub lifetime_max: f32,
    /// Pointer influence radius (px)
    pub repel_radius: f32,
    /// Repulsion gain; the impulse is `(pos - pointer) * strength * dt / (dist² + 1)`
    pub repel_strength: f32,
    /// Velocity multiplier applied once per frame
    pub drag: f32,
    /// Vertex RGB; alpha is derived from lifetime
    pub color: Rgba,
    /// Alpha of a particle at `lifetime_max`
    pub max_alpha: u8,
}

impl Default for ParticleConfig {
    fn default() -> Self {
        Self {
            count: 300,
            origin: [800.0, 450.0],
            speed_min: 20.0,
            speed_max: 50.0,
            lifetime_min: 3.0,
            lifetime_max: 7.0,
            repel_radius: 150.0,
            // 2500 per frame at 60 Hz
            repel_strength: 150_000.0,
            drag: 0.99,
            color: Rgba::rgb(100, 100, 200),
            max_alpha: 150,
        }
    }
}

impl ParticleConfig {
    pub fn validate(&self) -> Result<(), DashboardError> {
        if !finite_range(self.speed_min, self.speed_max) {
            return Err(DashboardError::InvalidConfig(format!(
                "particles: speed range [{}, {}] is not finite",
                self.speed_min, self.speed_max
            )));
        }
        if !finite_range(self.lifetime_min, self.lifetime_max) {
            return Err(DashboardError::InvalidConfig(format!(
                "particles: lifetime range [{}, {}] is not finite",
                self.lifetime_min, self.lifetime_max
            )));
        }
        if !(self.speed_min >= 0.0 && self.speed_min <= self.speed_max) {
            return Err(DashboardError::InvalidConfig(format!(
                "particles: speed range [{}, {}] is not ordered",
                self.speed_min, self.speed_max
            )));
        }
        if !(self.lifetime_min >= 0.0 && self.lifetime_min <= self.lifetime_max) {
            return Err(DashboardError::InvalidConfig(format!(
                "particles: lifetime range [{}, {}] is not ordered",
                self.lifetime_min, self.lifetime_max
            )));
        }
        if self.lifetime_max <= 0.0 {
            return Err(DashboardError::InvalidConfig(
                "particles: lifetime_max must be positive".into(),
            ));
        }
        if !(0.0..=1.0).contains(&self.drag) {
            return Err(DashboardError::InvalidConfig(format!(
                "particles: drag {} outside [0, 1]",
                self.drag
            )));
        }
        if !(self.repel_radius >= 0.0) {
            return Err(DashboardError::InvalidConfig(
                "particles: repel_radius must not be negative".into(),
            ));
        }
        Ok(())
    }
}

/// Simulation state of one particle.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct Particle {
    pub position: Point,
    pub velocity: Point,
    /// Remaining lifetime in seconds
    pub lifetime: f32,
}

/// Render mirror of a [`Particle`].
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct ParticleVertex {
    pub position: Point,
    pub color: Rgba,
}

/// Fixed-size particle pool. `R` is the random source used for respawns.
pub struct ParticleSystem<R = ChaCha8Rng> {
    config: ParticleConfig,
    particles: Vec<Particle>,
    vertices: Vec<ParticleVertex>,
    rng: R,
}

impl ParticleSystem<ChaCha8Rng> {
    /// Pool driven by a ChaCha8 stream seeded with `seed`.
    pub fn seeded(config: ParticleConfig, seed: u64) -> Self {
        Self::new(config, ChaCha8Rng::seed_from_u64(seed))
    }
}

impl<R: Rng> ParticleSystem<R> {
    /// Allocate the pool and spawn every particle once.
    pub fn new(config: ParticleConfig, rng: R) -> Self {
        let origin = point(config.origin);
        let idle = Particle {
            position: origin,
            velocity: Point::zeros(),
            lifetime: 0.0,
        };
        let mut system = Self {
            particles: vec![idle; config.count],
            vertices: vec![vertex_for(&idle, &config); config.count],
            config,
            rng,
        };
        for i in 0..system.particles.len() {
            system.reset(i);
        }
        system
    }

    /// Advance every particle by one frame of `elapsed` seconds.
    /// Returns how many particles were respawned.
    pub fn update(&mut self, elapsed: f32, pointer: Option<Point>) -> usize {
        let mut respawned = 0;
        let radius_sq = self.config.repel_radius * self.config.repel_radius;

        for i in 0..self.particles.len() {
            self.particles[i].lifetime -= elapsed;
            if self.particles[i].lifetime <= 0.0 {
                self.reset(i);
                respawned += 1;
                continue;
            }

            let cfg = &self.config;
            let p = &mut self.particles[i];

            if let Some(pointer) = pointer {
                let away = p.position - pointer;
                let dist_sq = away.norm_squared();
                if dist_sq < radius_sq {
                    p.velocity += away * (cfg.repel_strength * elapsed / (dist_sq + 1.0));
                }
            }

            p.velocity *= cfg.drag;
            p.position += p.velocity * elapsed;

            self.vertices[i] = vertex_for(p, cfg);
        }

        respawned
    }

    /// Emit the current vertex snapshot.
    pub fn draw(&self, canvas: &mut impl Canvas) {
        canvas.points(&self.vertices);
    }

    pub fn particles(&self) -> &[Particle] {
        &self.particles
    }

    pub fn vertices(&self) -> &[ParticleVertex] {
        &self.vertices
    }

    pub fn config(&self) -> &ParticleConfig {
        &self.config
    }

    pub fn len(&self) -> usize {
        self.particles.len()
    }

    pub fn is_empty(&self) -> bool {
        self.particles.is_empty()
    }

    /// Re-initialise particle `index` at the origin with a random outward
    /// velocity and lifetime.
    fn reset(&mut self, index: usize) {
        let angle = self.sample(0.0, TAU);
        let speed = self.sample(self.config.speed_min, self.config.speed_max);
        let lifetime = self.sample(self.config.lifetime_min, self.config.lifetime_max);

        let particle = Particle {
            position: point(self.config.origin),
            velocity: Point::new(angle.cos(), angle.sin()) * speed,
            lifetime,
        };
        self.vertices[index] = vertex_for(&particle, &self.config);
        self.particles[index] = particle;
    }

    /// Uniform sample in `[lo, hi)`; returns `lo` when the range is empty.
    fn sample(&mut self, lo: f32, hi: f32) -> f32 {
        if lo < hi {
            self.rng.gen_range(lo..hi)
        } else {
            lo
        }
    }
}

fn vertex_for(p: &Particle, cfg: &ParticleConfig) -> ParticleVertex {
    let ratio = (p.lifetime / cfg.lifetime_max).clamp(0.0, 1.0);
    let alpha = (ratio * cfg.max_alpha as f32).round() as u8;
    ParticleVertex {
        position: p.position,
        color: cfg.color.with_alpha(alpha),
    }
}
