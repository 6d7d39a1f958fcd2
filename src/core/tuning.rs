use super::constants::*;
use super::effects::MarkerKind;
use std::time::Duration;

/// Runtime knobs for the pointer effects.
///
/// `Default` mirrors the constants in `constants.rs`; overriding a field is
/// mostly useful to pin randomness (chance 0.0 or 1.0) or to slow effects down.
#[derive(Clone, Debug)]
pub struct Tuning {
    pub follower_ease: f32,
    pub particle_chance: f64,
    pub glitch_chance: f64,
    pub fast_move_px: f32,
    pub drift_min_px: f32,
    pub drift_span_px: f32,
    pub trail_lifetime: Duration,
    pub particle_lifetime: Duration,
    pub glitch_lifetime: Duration,
    pub scanline_lifetime: Duration,
    pub ripple_lifetime: Duration,
    pub burst_count: u32,
    pub burst_stagger: Duration,
    pub demo_revert_after: Duration,
}

impl Tuning {
    /// How long a marker of `kind` stays on the page.
    pub fn lifetime(&self, kind: MarkerKind) -> Duration {
        match kind {
            MarkerKind::Trail => self.trail_lifetime,
            MarkerKind::Particle => self.particle_lifetime,
            MarkerKind::Glitch => self.glitch_lifetime,
            MarkerKind::Scanline => self.scanline_lifetime,
            MarkerKind::Ripple => self.ripple_lifetime,
        }
    }
}

impl Default for Tuning {
    fn default() -> Self {
        Self {
            follower_ease: FOLLOWER_EASE,
            particle_chance: PARTICLE_CHANCE,
            glitch_chance: GLITCH_CHANCE,
            fast_move_px: FAST_MOVE_PX,
            drift_min_px: PARTICLE_DRIFT_MIN_PX,
            drift_span_px: PARTICLE_DRIFT_SPAN_PX,
            trail_lifetime: MarkerKind::Trail.lifetime(),
            particle_lifetime: MarkerKind::Particle.lifetime(),
            glitch_lifetime: MarkerKind::Glitch.lifetime(),
            scanline_lifetime: MarkerKind::Scanline.lifetime(),
            ripple_lifetime: MarkerKind::Ripple.lifetime(),
            burst_count: DEMO_BURST_COUNT,
            burst_stagger: DEMO_BURST_STAGGER,
            demo_revert_after: DEMO_REVERT_AFTER,
        }
    }
}
