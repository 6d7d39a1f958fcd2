use glam::Vec2;

/// Latest pointer sample plus the one before it.
#[derive(Default, Clone, Copy, Debug)]
pub struct PointerTracker {
    pub current: Vec2,
    pub last: Vec2,
}

impl PointerTracker {
    /// Store a new sample and return the distance travelled since the
    /// previous one. The tracker starts at the origin, so the very first
    /// sample measures from (0, 0).
    #[inline]
    pub fn record(&mut self, pos: Vec2) -> f32 {
        self.current = pos;
        let speed = pos.distance(self.last);
        self.last = pos;
        speed
    }
}

/// Secondary cursor that eases toward the pointer.
#[derive(Clone, Copy, Debug)]
pub struct Follower {
    pub pos: Vec2,
    pub ease: f32,
}

impl Follower {
    pub fn new(ease: f32) -> Self {
        Self {
            pos: Vec2::ZERO,
            ease,
        }
    }

    /// Exponential smoothing step: cover `ease` of the remaining distance.
    #[inline]
    pub fn step(&mut self, target: Vec2) -> Vec2 {
        self.pos += (target - self.pos) * self.ease;
        self.pos
    }
}
