// Decorative particle field: a fixed population of points drifting through a
// shallow depth range, drawn as stars with perspective scaling and linked to
// their close neighbours. Platform-free; drawing goes through `Painter`.

use super::constants::*;
use glam::{Vec2, Vec3};
use rand::prelude::*;

/// Drawing surface dimensions in viewport pixels.
#[derive(Clone, Copy, Debug, Default, PartialEq)]
pub struct Bounds {
    pub width: f32,
    pub height: f32,
}

impl Bounds {
    pub fn new(width: f32, height: f32) -> Self {
        Self {
            width: width.max(0.0),
            height: height.max(0.0),
        }
    }

    /// Nothing is drawn onto an empty surface.
    pub fn is_empty(&self) -> bool {
        self.width <= 0.0 || self.height <= 0.0
    }

    /// True when `p` lies inside `[0, w] x [0, h] x [0, DEPTH_MAX]`.
    pub fn contains(&self, p: Vec3) -> bool {
        p.x >= 0.0
            && p.x <= self.width
            && p.y >= 0.0
            && p.y <= self.height
            && p.z >= 0.0
            && p.z <= DEPTH_MAX
    }
}

#[derive(Clone, Copy, Debug)]
pub struct FieldConfig {
    pub count: usize,
    pub link_distance: f32,
    pub link_alpha_max: f32,
}

impl Default for FieldConfig {
    fn default() -> Self {
        Self {
            count: PARTICLE_COUNT,
            link_distance: LINK_DISTANCE,
            link_alpha_max: LINK_ALPHA_MAX,
        }
    }
}

#[derive(Clone, Copy, Debug, PartialEq)]
pub struct Particle {
    /// x/y in viewport pixels, z is depth.
    pub pos: Vec3,
    pub vel: Vec3,
    /// Outer star radius before perspective scaling.
    pub size: f32,
    pub opacity: f32,
}

/// Screen-space quantities derived from a particle for one frame.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct Projected {
    pub center: Vec2,
    pub radius: f32,
    pub alpha: f32,
}

impl Particle {
    /// Fresh random state inside `bounds`. Used both for the initial
    /// population and whenever a particle drifts out of range.
    pub fn spawn<R: Rng + ?Sized>(rng: &mut R, bounds: Bounds) -> Self {
        let pos = Vec3::new(
            rng.gen::<f32>() * bounds.width,
            rng.gen::<f32>() * bounds.height,
            rng.gen::<f32>() * DEPTH_MAX,
        );
        let vel = Vec3::new(
            (rng.gen::<f32>() - 0.5) * PLANAR_SPEED,
            (rng.gen::<f32>() - 0.5) * PLANAR_SPEED,
            (rng.gen::<f32>() - 0.5) * DEPTH_SPEED,
        );
        Self {
            pos,
            vel,
            size: (rng.gen::<f32>() * SIZE_SPAN + SIZE_MIN) * SIZE_MULTIPLIER,
            opacity: rng.gen::<f32>() * OPACITY_SPAN + OPACITY_MIN,
        }
    }

    /// Move by one frame of velocity. Leaving the bounds on any axis replaces
    /// the particle with a freshly spawned one; returns true in that case.
    pub fn advance<R: Rng + ?Sized>(&mut self, rng: &mut R, bounds: Bounds) -> bool {
        self.pos += self.vel;
        if bounds.contains(self.pos) {
            return false;
        }
        *self = Particle::spawn(rng, bounds);
        true
    }

    pub fn projected(&self) -> Projected {
        let scale = perspective_scale(self.pos.z);
        Projected {
            center: self.pos.truncate() * scale,
            radius: self.size * scale,
            alpha: self.opacity * scale,
        }
    }
}

/// Depth-based shrink factor, in (0, 1] for z >= 0 and strictly decreasing.
#[inline]
pub fn perspective_scale(z: f32) -> f32 {
    FOCAL_LENGTH / (FOCAL_LENGTH + z)
}

/// Alpha of the link between two particles `distance` apart, or `None` when
/// they are too far apart to be linked.
#[inline]
pub fn link_alpha(distance: f32, config: &FieldConfig) -> Option<f32> {
    if distance < config.link_distance {
        Some((config.link_distance - distance) / config.link_distance * config.link_alpha_max)
    } else {
        None
    }
}

pub const STAR_VERTICES: usize = STAR_SPIKES * 2;

/// Alternating outer/inner vertices of a star, first spike pointing up.
pub fn star_vertices(center: Vec2, outer: f32, inner: f32) -> [Vec2; STAR_VERTICES] {
    let step = std::f32::consts::PI / STAR_SPIKES as f32;
    let mut rot = std::f32::consts::FRAC_PI_2 * 3.0;
    let mut out = [Vec2::ZERO; STAR_VERTICES];
    for (i, v) in out.iter_mut().enumerate() {
        let r = if i % 2 == 0 { outer } else { inner };
        *v = center + Vec2::new(rot.cos(), rot.sin()) * r;
        rot += step;
    }
    out
}

/// Drawing primitives the field needs from a 2D surface.
pub trait Painter {
    fn clear(&mut self, width: f32, height: f32);
    fn fill_polygon(&mut self, points: &[Vec2], alpha: f32);
    fn stroke_line(&mut self, from: Vec2, to: Vec2, alpha: f32);
}

pub struct ParticleField {
    particles: Vec<Particle>,
    bounds: Bounds,
    config: FieldConfig,
    rng: StdRng,
}

impl ParticleField {
    pub fn new(bounds: Bounds, config: FieldConfig, seed: u64) -> Self {
        Self::with_rng(bounds, config, StdRng::seed_from_u64(seed))
    }

    pub fn with_rng(bounds: Bounds, config: FieldConfig, mut rng: StdRng) -> Self {
        let particles = (0..config.count)
            .map(|_| Particle::spawn(&mut rng, bounds))
            .collect();
        Self {
            particles,
            bounds,
            config,
            rng,
        }
    }

    pub fn particles(&self) -> &[Particle] {
        &self.particles
    }

    pub fn particles_mut(&mut self) -> &mut [Particle] {
        &mut self.particles
    }

    pub fn bounds(&self) -> Bounds {
        self.bounds
    }

    pub fn config(&self) -> &FieldConfig {
        &self.config
    }

    /// Particles keep their positions; any now outside the new bounds reset
    /// on their own next step.
    pub fn resize(&mut self, bounds: Bounds) {
        self.bounds = bounds;
    }

    /// Advance every particle one frame. Returns how many were respawned.
    pub fn step(&mut self) -> usize {
        let bounds = self.bounds;
        let mut resets = 0;
        for p in &mut self.particles {
            if p.advance(&mut self.rng, bounds) {
                resets += 1;
            }
        }
        resets
    }

    /// Every unordered pair closer than the link distance, with its alpha.
    pub fn links(&self) -> Vec<(usize, usize, f32)> {
        let mut out = Vec::new();
        for (i, a) in self.particles.iter().enumerate() {
            for (j, b) in self.particles.iter().enumerate().skip(i + 1) {
                let d = a.pos.truncate().distance(b.pos.truncate());
                if let Some(alpha) = link_alpha(d, &self.config) {
                    out.push((i, j, alpha));
                }
            }
        }
        out
    }

    pub fn draw<P: Painter + ?Sized>(&self, painter: &mut P) {
        painter.clear(self.bounds.width, self.bounds.height);
        if self.bounds.is_empty() {
            return;
        }
        for p in &self.particles {
            let proj = p.projected();
            let star = star_vertices(proj.center, proj.radius, proj.radius * STAR_INNER_RATIO);
            painter.fill_polygon(&star, proj.alpha);
        }
        // Links use unprojected positions.
        for (i, j, alpha) in self.links() {
            let a = self.particles[i].pos.truncate();
            let b = self.particles[j].pos.truncate();
            painter.stroke_line(a, b, alpha);
        }
    }

    /// One display frame: step then draw.
    pub fn frame<P: Painter + ?Sized>(&mut self, painter: &mut P) {
        self.step();
        self.draw(painter);
    }
}
