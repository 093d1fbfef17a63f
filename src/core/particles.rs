//! Particle field renderer
//!
//! A fixed set of drifting points that bounce off the surface edges, shy away
//! from the pointer, and link up with faint lines when close to each other.

use rand::Rng;
use tracing::{debug, trace};

use super::config::ParticleConfig;
use super::scene::{Painter, Scene};
use crate::theme::colors;

#[derive(Debug, Clone, PartialEq)]
pub struct Particle {
    pub x: f64,
    pub y: f64,
    pub radius: f64,
    pub dx: f64,
    pub dy: f64,
    pub opacity: f64,
}

/// Connector between two particles closer than the link distance
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Link {
    pub a: usize,
    pub b: usize,
    pub distance: f64,
    pub opacity: f64,
}

/// Opacity of a connector of length `distance`; linear falloff to zero at `max_distance`.
pub fn connector_opacity(distance: f64, max_distance: f64, peak: f64) -> f64 {
    if distance >= max_distance {
        return 0.0;
    }
    peak * (1.0 - distance / max_distance)
}

/// Uniform in `[lo, hi)`; a collapsed range yields `lo` instead of panicking.
fn uniform<R: Rng + ?Sized>(rng: &mut R, lo: f64, hi: f64) -> f64 {
    if hi > lo {
        rng.gen_range(lo..hi)
    } else {
        lo
    }
}

pub struct ParticleField {
    particles: Vec<Particle>,
    width: f64,
    height: f64,
    /// Canvas-relative pointer position, `None` while the pointer is outside
    pointer: Option<(f64, f64)>,
    config: ParticleConfig,
}

impl ParticleField {
    pub fn new<R: Rng + ?Sized>(config: ParticleConfig, width: f64, height: f64, rng: &mut R) -> Self {
        let particles = (0..config.count)
            .map(|_| Particle {
                x: uniform(rng, 0.0, width),
                y: uniform(rng, 0.0, height),
                radius: uniform(rng, config.radius_min, config.radius_max),
                dx: uniform(rng, -config.max_speed, config.max_speed),
                dy: uniform(rng, -config.max_speed, config.max_speed),
                opacity: uniform(rng, config.opacity_min, config.opacity_max),
            })
            .collect();

        debug!(count = config.count, width, height, "Particle field seeded");

        Self {
            particles,
            width,
            height,
            pointer: None,
            config,
        }
    }

    pub fn particles(&self) -> &[Particle] {
        &self.particles
    }

    pub fn size(&self) -> (f64, f64) {
        (self.width, self.height)
    }

    pub fn pointer(&self) -> Option<(f64, f64)> {
        self.pointer
    }

    pub fn set_pointer(&mut self, x: f64, y: f64) {
        self.pointer = Some((x, y));
    }

    pub fn clear_pointer(&mut self) {
        self.pointer = None;
    }

    /// Advance every particle by one frame.
    pub fn step(&mut self) {
        let (width, height) = (self.width, self.height);
        let pointer = self.pointer;
        let ParticleConfig {
            repulsion_radius,
            repulsion_step,
            ..
        } = self.config;

        for p in &mut self.particles {
            p.x += p.dx;
            p.y += p.dy;

            // Velocity always ends up pointing back inside, so a particle
            // pushed out by the pointer or a shrinking surface walks back in.
            if p.x < 0.0 {
                p.dx = p.dx.abs();
            } else if p.x > width {
                p.dx = -p.dx.abs();
            }
            if p.y < 0.0 {
                p.dy = p.dy.abs();
            } else if p.y > height {
                p.dy = -p.dy.abs();
            }

            if let Some((mx, my)) = pointer {
                let (vx, vy) = (p.x - mx, p.y - my);
                if vx.hypot(vy) < repulsion_radius {
                    let angle = vy.atan2(vx);
                    p.x += angle.cos() * repulsion_step;
                    p.y += angle.sin() * repulsion_step;
                }
            }
        }
    }

    /// All unordered pairs closer than the link distance.
    pub fn links(&self) -> Vec<Link> {
        let max = self.config.link_distance;
        let peak = self.config.link_opacity;
        let mut links = Vec::new();

        for (a, pa) in self.particles.iter().enumerate() {
            for (b, pb) in self.particles.iter().enumerate().skip(a + 1) {
                let distance = (pa.x - pb.x).hypot(pa.y - pb.y);
                if distance < max {
                    links.push(Link {
                        a,
                        b,
                        distance,
                        opacity: connector_opacity(distance, max, peak),
                    });
                }
            }
        }
        links
    }
}

impl Scene for ParticleField {
    fn name(&self) -> &'static str {
        "particles"
    }

    fn resize(&mut self, width: f64, height: f64) {
        // Positions are intentionally left alone; particles drift back in.
        trace!(width, height, "Particle surface resized");
        self.width = width;
        self.height = height;
    }

    fn frame<P: Painter>(&mut self, painter: &mut P) {
        painter.clear(self.width, self.height);
        self.step();

        for p in &self.particles {
            painter.fill_circle((p.x, p.y), p.radius, colors::TEAL.with_alpha(p.opacity));
        }

        for link in self.links() {
            let (a, b) = (&self.particles[link.a], &self.particles[link.b]);
            painter.line(
                (a.x, a.y),
                (b.x, b.y),
                colors::TEAL.with_alpha(link.opacity),
                self.config.link_width,
            );
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::core::scene::CountingPainter;
    use rand::rngs::SmallRng;
    use rand::SeedableRng;

    fn field(width: f64, height: f64, seed: u64) -> ParticleField {
        ParticleField::new(ParticleConfig::default(), width, height, &mut SmallRng::seed_from_u64(seed))
    }

    fn single(x: f64, y: f64, dx: f64, dy: f64) -> ParticleField {
        let mut f = field(100.0, 100.0, 1);
        f.particles = vec![Particle {
            x,
            y,
            radius: 1.0,
            dx,
            dy,
            opacity: 0.5,
        }];
        f
    }

    #[test]
    fn test_initial_attributes_in_range() {
        let f = field(800.0, 600.0, 99);
        assert_eq!(f.particles().len(), 70);
        for p in f.particles() {
            assert!((0.0..800.0).contains(&p.x));
            assert!((0.0..600.0).contains(&p.y));
            assert!((0.5..=3.0).contains(&p.radius));
            assert!((-0.25..=0.25).contains(&p.dx));
            assert!((-0.25..=0.25).contains(&p.dy));
            assert!((0.1..=0.6).contains(&p.opacity));
        }
    }

    #[test]
    fn test_same_seed_same_field() {
        assert_eq!(field(800.0, 600.0, 5).particles(), field(800.0, 600.0, 5).particles());
    }

    #[test]
    fn test_collapsed_ranges_from_config() {
        let config = ParticleConfig {
            radius_min: 2.0,
            radius_max: 2.0,
            max_speed: 0.0,
            ..ParticleConfig::default()
        };
        let f = ParticleField::new(config, 0.0, 0.0, &mut SmallRng::seed_from_u64(3));
        for p in f.particles() {
            assert_eq!(p.radius, 2.0);
            assert_eq!((p.dx, p.dy), (0.0, 0.0));
            assert_eq!((p.x, p.y), (0.0, 0.0));
        }
    }

    #[test]
    fn test_reflection_flips_velocity() {
        let mut f = single(99.9, 50.0, 0.2, 0.0);
        f.step();
        assert!(f.particles[0].x > 100.0);
        assert_eq!(f.particles[0].dx, -0.2);

        let mut f = single(50.0, 0.1, 0.0, -0.2);
        f.step();
        assert!(f.particles[0].y < 0.0);
        assert_eq!(f.particles[0].dy, 0.2);
    }

    #[test]
    fn test_positions_stay_within_one_step_of_bounds() {
        let mut f = field(300.0, 200.0, 5);
        for _ in 0..20_000 {
            f.step();
            for p in f.particles() {
                let (sx, sy) = (p.dx.abs(), p.dy.abs());
                assert!(p.x >= -sx - 1e-9 && p.x <= 300.0 + sx + 1e-9, "x={} dx={}", p.x, p.dx);
                assert!(p.y >= -sy - 1e-9 && p.y <= 200.0 + sy + 1e-9, "y={} dy={}", p.y, p.dy);
            }
        }
    }

    #[test]
    fn test_pointer_repels() {
        let mut f = single(50.0, 50.0, 0.0, 0.0);
        f.set_pointer(40.0, 50.0);
        f.step();
        assert!((f.particles[0].x - 51.5).abs() < 1e-9);
        assert!((f.particles[0].y - 50.0).abs() < 1e-9);

        // Outside the repulsion radius nothing moves
        let mut f = single(50.0, 50.0, 0.0, 0.0);
        f.set_pointer(50.0, 200.0);
        f.step();
        assert_eq!((f.particles[0].x, f.particles[0].y), (50.0, 50.0));

        f.set_pointer(50.0, 60.0);
        f.clear_pointer();
        f.step();
        assert_eq!((f.particles[0].x, f.particles[0].y), (50.0, 50.0));
    }

    #[test]
    fn test_connector_opacity_falloff() {
        assert!((connector_opacity(0.0, 110.0, 0.15) - 0.15).abs() < 1e-12);
        assert!((connector_opacity(55.0, 110.0, 0.15) - 0.075).abs() < 1e-12);
        assert_eq!(connector_opacity(110.0, 110.0, 0.15), 0.0);
        assert_eq!(connector_opacity(500.0, 110.0, 0.15), 0.0);

        let mut prev = f64::INFINITY;
        for d in 0..110 {
            let o = connector_opacity(d as f64, 110.0, 0.15);
            assert!(o < prev);
            prev = o;
        }
    }

    #[test]
    fn test_links_only_close_pairs() {
        let mut f = field(1000.0, 1000.0, 3);
        f.particles.truncate(3);
        f.particles[0].x = 0.0;
        f.particles[0].y = 0.0;
        f.particles[1].x = 60.0;
        f.particles[1].y = 80.0; // 100 from p0
        f.particles[2].x = 500.0;
        f.particles[2].y = 500.0;

        let links = f.links();
        assert_eq!(links.len(), 1);
        assert_eq!((links[0].a, links[0].b), (0, 1));
        assert!((links[0].distance - 100.0).abs() < 1e-9);
        assert!((links[0].opacity - 0.15 * (1.0 - 100.0 / 110.0)).abs() < 1e-12);
    }

    #[test]
    fn test_resize_does_not_rescale() {
        let mut f = field(800.0, 600.0, 11);
        let before: Vec<(f64, f64)> = f.particles().iter().map(|p| (p.x, p.y)).collect();
        f.resize(200.0, 100.0);
        let after: Vec<(f64, f64)> = f.particles().iter().map(|p| (p.x, p.y)).collect();
        assert_eq!(before, after);
        assert_eq!(f.size(), (200.0, 100.0));
    }

    #[test]
    fn test_frame_draws_every_particle() {
        let mut f = field(400.0, 400.0, 8);
        let mut painter = CountingPainter::default();
        f.frame(&mut painter);
        assert_eq!(painter.clears, 1);
        assert_eq!(painter.filled, 70);
        assert_eq!(painter.lines as usize, f.links().len());
    }
}
