use super::constants::*;
use super::tuning::Tuning;
use glam::Vec2;
use rand::Rng;
use std::f32::consts::TAU;
use std::time::Duration;

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum MarkerKind {
    Trail,
    Particle,
    Glitch,
    Scanline,
    Ripple,
}

impl MarkerKind {
    /// Stylesheet class driving the marker's animation. Ripples are styled
    /// inline and carry no class.
    pub fn class_name(self) -> Option<&'static str> {
        match self {
            MarkerKind::Trail => Some(TRAIL_CLASS),
            MarkerKind::Particle => Some(PARTICLE_CLASS),
            MarkerKind::Glitch => Some(GLITCH_CLASS),
            MarkerKind::Scanline => Some(SCANLINE_CLASS),
            MarkerKind::Ripple => None,
        }
    }

    /// Default lifetime; `Tuning` may override it.
    pub fn lifetime(self) -> Duration {
        match self {
            MarkerKind::Trail => TRAIL_LIFETIME,
            MarkerKind::Particle => PARTICLE_LIFETIME,
            MarkerKind::Glitch => GLITCH_LIFETIME,
            MarkerKind::Scanline => SCANLINE_LIFETIME,
            MarkerKind::Ripple => RIPPLE_LIFETIME,
        }
    }

    /// Scanlines span the viewport width and only take a vertical position.
    #[inline]
    pub fn is_horizontal_band(self) -> bool {
        matches!(self, MarkerKind::Scanline)
    }
}

/// One transient marker to put on the page.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct MarkerSpec {
    pub kind: MarkerKind,
    pub at: Vec2,
    /// Particle travel, exported as `--tx` / `--ty`.
    pub drift: Option<Vec2>,
}

impl MarkerSpec {
    pub fn new(kind: MarkerKind, at: Vec2) -> Self {
        Self {
            kind,
            at,
            drift: None,
        }
    }

    pub fn particle<R: Rng + ?Sized>(at: Vec2, tuning: &Tuning, rng: &mut R) -> Self {
        let angle = rng.gen::<f32>() * TAU;
        let distance = tuning.drift_min_px + rng.gen::<f32>() * tuning.drift_span_px;
        Self {
            kind: MarkerKind::Particle,
            at,
            drift: Some(drift_offset(angle, distance)),
        }
    }
}

#[inline]
pub fn drift_offset(angle: f32, distance: f32) -> Vec2 {
    Vec2::new(angle.cos(), angle.sin()) * distance
}

/// Decide which markers one pointer-move sample produces.
///
/// A trail always comes first; a particle follows on a `particle_chance`
/// roll. Moves faster than `fast_move_px` add a scanline and, on a
/// `glitch_chance` roll, a glitch.
pub fn plan_pointer_move<R: Rng + ?Sized>(
    pos: Vec2,
    speed: f32,
    tuning: &Tuning,
    rng: &mut R,
) -> Vec<MarkerSpec> {
    let mut out = Vec::with_capacity(4);
    out.push(MarkerSpec::new(MarkerKind::Trail, pos));
    if rng.gen_bool(tuning.particle_chance.clamp(0.0, 1.0)) {
        out.push(MarkerSpec::particle(pos, tuning, rng));
    }
    if speed > tuning.fast_move_px {
        out.push(MarkerSpec::new(MarkerKind::Scanline, Vec2::new(0.0, pos.y)));
        if rng.gen_bool(tuning.glitch_chance.clamp(0.0, 1.0)) {
            out.push(MarkerSpec::new(MarkerKind::Glitch, pos));
        }
    }
    out
}
