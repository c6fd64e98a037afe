//! Cauldron liquid and particle effects
//!
//! Purely cosmetic: nothing here feeds back into creature generation, so it
//! uses its own seeded `Pcg32` instead of the brewing `Sequence`. Positions are
//! in pixels relative to the cauldron center, y pointing down. Advanced once
//! per rendered frame.

use glam::{Vec2, Vec3};
use rand::{Rng, SeedableRng};
use rand_pcg::Pcg32;

use crate::settings::ParticleBudget;

/// Liquid easing toward its target color, per frame
pub const COLOR_EASE: f32 = 0.03;

/// Per-frame spawn chances
pub const BUBBLE_CHANCE: f64 = 0.3;
pub const STEAM_CHANCE: f64 = 0.08;

/// While mixing, a volley of sparkles every few frames (~50 ms)
pub const MIX_VOLLEY_FRAMES: u32 = 3;
pub const MIX_VOLLEY_SIZE: usize = 5;

/// Downward pull on sparkles, per frame
const SPARKLE_GRAVITY: f32 = 0.04;

/// 8-bit RGB color
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Rgb {
    pub r: u8,
    pub g: u8,
    pub b: u8,
}

impl Rgb {
    /// Color of the liquid before anything is added
    pub const RESTING: Rgb = Rgb::new(10, 100, 110);

    pub const fn new(r: u8, g: u8, b: u8) -> Self {
        Self { r, g, b }
    }

    /// Parse `#rrggbb`
    pub fn from_hex(hex: &str) -> Option<Self> {
        let digits = hex.strip_prefix('#')?;
        if digits.len() != 6 {
            return None;
        }
        let channel = |i: usize| u8::from_str_radix(digits.get(i..i + 2)?, 16).ok();
        Some(Self::new(channel(0)?, channel(2)?, channel(4)?))
    }

    /// Channel-wise average, halves rounded up
    pub fn blend(self, other: Rgb) -> Rgb {
        let avg = |a: u8, b: u8| ((u16::from(a) + u16::from(b) + 1) / 2) as u8;
        Rgb::new(avg(self.r, other.r), avg(self.g, other.g), avg(self.b, other.b))
    }

    pub fn to_vec3(self) -> Vec3 {
        Vec3::new(f32::from(self.r), f32::from(self.g), f32::from(self.b))
    }

    pub fn to_css(self) -> String {
        format!("rgb({},{},{})", self.r, self.g, self.b)
    }
}

/// How a particle is colored
#[derive(Debug, Clone, Copy, PartialEq)]
pub enum Tint {
    /// Follows the liquid color
    Liquid,
    /// Fixed color
    Solid(Rgb),
    /// HSL hue in degrees, full saturation
    Hue(f32),
}

/// A bubble, steam puff or sparkle
#[derive(Debug, Clone, PartialEq)]
pub struct Particle {
    pub pos: Vec2,
    pub vel: Vec2,
    pub radius: f32,
    /// 1.0 at spawn, removed at 0
    pub life: f32,
    pub decay: f32,
    pub tint: Tint,
}

/// Cauldron size in pixels
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct CauldronSize {
    pub width: f32,
    pub height: f32,
}

impl CauldronSize {
    /// Sized from the play area width (45% of it, at most 340 px)
    pub fn for_viewport(viewport_width: f32) -> Self {
        let width = (viewport_width * 0.45).min(340.0);
        Self {
            width,
            height: width * 0.65,
        }
    }

    /// Where effects burst out of the liquid
    pub fn surface(&self) -> Vec2 {
        Vec2::new(0.0, -self.height * 0.4)
    }
}

/// Cosmetic cauldron state
#[derive(Debug, Clone)]
pub struct Cauldron {
    pub size: CauldronSize,
    /// Displayed liquid color (eased)
    pub color: Vec3,
    /// Color being eased toward
    pub target: Rgb,
    pub bubbles: Vec<Particle>,
    pub steam: Vec<Particle>,
    pub sparkles: Vec<Particle>,
    /// Frames since mixing started (paces the sparkle volleys)
    pub mix_frames: u32,
    pub frame: u64,
    budget: ParticleBudget,
    rng: Pcg32,
}

impl Cauldron {
    pub fn new(seed: u64, size: CauldronSize, budget: ParticleBudget) -> Self {
        Self {
            size,
            color: Rgb::RESTING.to_vec3(),
            target: Rgb::RESTING,
            bubbles: Vec::new(),
            steam: Vec::new(),
            sparkles: Vec::new(),
            mix_frames: 0,
            frame: 0,
            budget,
            rng: Pcg32::seed_from_u64(seed),
        }
    }

    pub fn set_budget(&mut self, budget: ParticleBudget) {
        self.budget = budget;
        self.bubbles.truncate(budget.bubbles);
        self.steam.truncate(budget.steam);
        self.sparkles.truncate(budget.sparkles);
    }

    /// Displayed liquid color, rounded
    pub fn liquid(&self) -> Rgb {
        let c = self.color.round().clamp(Vec3::ZERO, Vec3::splat(255.0));
        Rgb::new(c.x as u8, c.y as u8, c.z as u8)
    }

    /// Advance one frame. `mixing` adds the rainbow sparkle stream.
    pub fn step(&mut self, mixing: bool) {
        self.frame += 1;
        self.color += (self.target.to_vec3() - self.color) * COLOR_EASE;

        if self.rng.random_bool(BUBBLE_CHANCE) {
            self.spawn_bubble();
        }
        if self.rng.random_bool(STEAM_CHANCE) {
            self.spawn_steam();
        }

        if mixing {
            self.mix_frames += 1;
            if self.mix_frames % MIX_VOLLEY_FRAMES == 0 {
                self.mix_volley();
            }
        } else {
            self.mix_frames = 0;
        }

        self.update_particles();
    }

    /// Throw `count` sparkles outward from `pos`
    pub fn burst(&mut self, pos: Vec2, count: usize, tint: Tint) {
        let room = self.budget.sparkles.saturating_sub(self.sparkles.len());
        for _ in 0..count.min(room) {
            let angle = self.rng.random_range(0.0..std::f32::consts::TAU);
            let speed = self.rng.random_range(1.0..5.0);
            self.sparkles.push(Particle {
                pos,
                vel: Vec2::from_angle(angle) * speed - Vec2::Y,
                radius: self.rng.random_range(1.5..4.5),
                life: 1.0,
                decay: self.rng.random_range(0.015..0.035),
                tint,
            });
        }
    }

    /// Splash of an ingredient landing in the liquid
    pub fn splash(&mut self, color: Rgb) {
        self.burst(self.size.surface(), 15, Tint::Solid(color));
    }

    /// Reveal burst in the creature's primary color
    pub fn reveal_burst(&mut self, color: Rgb) {
        let pos = Vec2::new(0.0, -self.size.height * 0.5);
        self.burst(pos, 40, Tint::Solid(color));
    }

    /// Rainbow sparkles scattered over the middle of the cauldron
    fn mix_volley(&mut self) {
        let CauldronSize { width, height } = self.size;
        for _ in 0..MIX_VOLLEY_SIZE {
            let pos = Vec2::new(
                self.rng.random_range(-0.5..0.5) * width * 0.6,
                -height * 0.3 - self.rng.random_range(0.0..1.0) * height * 0.3,
            );
            let hue = self.rng.random_range(0.0..360.0);
            self.burst(pos, 1, Tint::Hue(hue));
        }
    }

    fn spawn_bubble(&mut self) {
        if self.bubbles.len() >= self.budget.bubbles {
            return;
        }
        let spread = self.size.width * 0.35;
        let bubble = Particle {
            pos: Vec2::new(
                self.rng.random_range(-0.5..0.5) * spread,
                -self.size.height * 0.05,
            ),
            vel: Vec2::new(
                self.rng.random_range(-0.15..0.15),
                -0.3 - self.rng.random_range(0.0..0.8),
            ),
            radius: self.rng.random_range(2.0..8.0),
            life: 1.0,
            decay: self.rng.random_range(0.003..0.008),
            tint: Tint::Liquid,
        };
        self.bubbles.push(bubble);
    }

    fn spawn_steam(&mut self) {
        if self.steam.len() >= self.budget.steam {
            return;
        }
        let spread = self.size.width * 0.3;
        let puff = Particle {
            pos: Vec2::new(
                self.rng.random_range(-0.5..0.5) * spread,
                -self.size.height * 0.35,
            ),
            vel: Vec2::new(
                self.rng.random_range(-0.2..0.2),
                -0.5 - self.rng.random_range(0.0..0.5),
            ),
            radius: self.rng.random_range(8.0..23.0),
            life: 1.0,
            decay: self.rng.random_range(0.008..0.014),
            tint: Tint::Solid(Rgb::new(255, 255, 255)),
        };
        self.steam.push(puff);
    }

    fn update_particles(&mut self) {
        let t = self.frame as f32;

        self.bubbles.retain_mut(|b| {
            b.pos.x += b.vel.x + (t * 0.02 + b.pos.x).sin() * 0.15;
            b.pos.y += b.vel.y;
            b.life -= b.decay;
            b.life > 0.0
        });

        self.steam.retain_mut(|s| {
            s.pos += s.vel;
            s.radius += 0.15;
            s.life -= s.decay;
            s.life > 0.0
        });

        self.sparkles.retain_mut(|p| {
            p.pos += p.vel;
            p.vel.y += SPARKLE_GRAVITY;
            p.life -= p.decay;
            p.life > 0.0
        });
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::settings::Settings;

    fn cauldron(seed: u64) -> Cauldron {
        Cauldron::new(
            seed,
            CauldronSize::for_viewport(800.0),
            Settings::default().particle_budget(),
        )
    }

    #[test]
    fn test_hex_parse() {
        assert_eq!(Rgb::from_hex("#ff4a4a"), Some(Rgb::new(255, 74, 74)));
        assert_eq!(Rgb::from_hex("ff4a4a"), None);
        assert_eq!(Rgb::from_hex("#ff4a"), None);
        assert_eq!(Rgb::from_hex("#gg0000"), None);
    }

    #[test]
    fn test_blend_rounds_up() {
        // (10 + 255) / 2 = 132.5 -> 133
        let tint = Rgb::RESTING.blend(Rgb::new(255, 74, 74));
        assert_eq!(tint, Rgb::new(133, 87, 92));
    }

    #[test]
    fn test_color_eases_toward_target() {
        let mut c = cauldron(1);
        c.target = Rgb::new(255, 0, 0);
        c.step(false);
        assert!((c.color.x - (10.0 + 245.0 * COLOR_EASE)).abs() < 1e-3);
        for _ in 0..500 {
            c.step(false);
        }
        assert_eq!(c.liquid(), Rgb::new(255, 0, 0));
    }

    #[test]
    fn test_same_seed_same_effects() {
        let mut a = cauldron(77);
        let mut b = cauldron(77);
        for i in 0..300 {
            a.step(i > 100);
            b.step(i > 100);
        }
        assert_eq!(a.bubbles, b.bubbles);
        assert_eq!(a.sparkles, b.sparkles);
    }

    #[test]
    fn test_caps_respected() {
        let mut c = cauldron(3);
        for _ in 0..2000 {
            c.step(true);
            c.splash(Rgb::new(255, 215, 0));
            assert!(c.bubbles.len() <= 35);
            assert!(c.steam.len() <= 20);
            assert!(c.sparkles.len() <= 250);
        }
        assert!(!c.bubbles.is_empty());
    }

    #[test]
    fn test_no_particles_when_disabled() {
        let mut c = cauldron(5);
        c.set_budget(ParticleBudget {
            bubbles: 0,
            steam: 0,
            sparkles: 0,
        });
        for _ in 0..200 {
            c.step(true);
        }
        c.reveal_burst(Rgb::RESTING);
        assert!(c.bubbles.is_empty() && c.steam.is_empty() && c.sparkles.is_empty());
    }

    #[test]
    fn test_sparkles_fall_and_fade() {
        let mut c = cauldron(9);
        c.burst(Vec2::ZERO, 1, Tint::Hue(90.0));
        let vy = c.sparkles[0].vel.y;
        c.update_particles();
        assert!((c.sparkles[0].vel.y - (vy + SPARKLE_GRAVITY)).abs() < 1e-6);
        for _ in 0..200 {
            c.update_particles();
        }
        assert!(c.sparkles.is_empty());
    }

    #[test]
    fn test_mix_volley_every_third_frame() {
        let mut c = cauldron(11);
        let CauldronSize { width, height } = c.size;
        c.step(true);
        c.step(true);
        assert!(c.sparkles.is_empty());
        c.step(true);
        assert_eq!(c.sparkles.len(), MIX_VOLLEY_SIZE);

        // One update has moved each sparkle by at most its launch speed
        let slack = 6.0;
        for p in &c.sparkles {
            assert!(p.pos.x.abs() <= width * 0.3 + slack);
            assert!(p.pos.y <= -height * 0.3 + slack);
            assert!(p.pos.y >= -height * 0.6 - slack);
            assert!(matches!(p.tint, Tint::Hue(h) if (0.0..360.0).contains(&h)));
        }

        for _ in 0..3 {
            c.step(true);
        }
        assert_eq!(c.sparkles.len(), 2 * MIX_VOLLEY_SIZE);
    }

    #[test]
    fn test_volleys_stop_when_mixing_ends() {
        let mut c = cauldron(12);
        for _ in 0..2 {
            c.step(true);
        }
        c.step(false);
        assert_eq!(c.mix_frames, 0);
        assert!(c.sparkles.is_empty());
    }

    #[test]
    fn test_reduced_motion_budget_clears_sparkles() {
        let mut c = cauldron(21);
        for _ in 0..60 {
            c.step(true);
        }
        assert!(!c.sparkles.is_empty());

        let mut settings = Settings::default();
        settings.toggle_reduced_motion();
        c.set_budget(settings.particle_budget());
        assert!(c.sparkles.is_empty());
        for _ in 0..30 {
            c.step(true);
        }
        assert!(c.sparkles.is_empty());
    }
}
