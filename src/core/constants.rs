// Cursor effect tuning, selectors and style values shared by the web frontend.

use std::time::Duration;

// Follower smoothing: fraction of the remaining distance covered per frame
pub const FOLLOWER_EASE: f32 = 0.2;

// Spawn chances per pointer-move sample
pub const PARTICLE_CHANCE: f64 = 0.15;
pub const GLITCH_CHANCE: f64 = 0.3; // only rolled on fast moves

// Distance between consecutive samples (px) above which a move counts as fast
pub const FAST_MOVE_PX: f32 = 50.0;

// Particle drift: distance in [MIN, MIN + SPAN) px along a random angle
pub const PARTICLE_DRIFT_MIN_PX: f32 = 20.0;
pub const PARTICLE_DRIFT_SPAN_PX: f32 = 30.0;

// Marker lifetimes
pub const TRAIL_LIFETIME: Duration = Duration::from_millis(500);
pub const PARTICLE_LIFETIME: Duration = Duration::from_millis(1000);
pub const GLITCH_LIFETIME: Duration = Duration::from_millis(300);
pub const SCANLINE_LIFETIME: Duration = Duration::from_millis(500);
pub const RIPPLE_LIFETIME: Duration = Duration::from_millis(600);

// Demo video burst
pub const DEMO_BURST_COUNT: u32 = 20;
pub const DEMO_BURST_STAGGER: Duration = Duration::from_millis(50);
pub const DEMO_REVERT_AFTER: Duration = Duration::from_millis(2000);
pub const DEMO_ICON_PLAYING: &str = "\u{23F8}";
pub const DEMO_ICON_IDLE: &str = "\u{25B6}";
pub const DEMO_BG_PLAYING: &str =
    "linear-gradient(135deg, rgba(0, 245, 255, 0.3), rgba(168, 85, 247, 0.3))";
pub const DEMO_BG_IDLE: &str =
    "linear-gradient(135deg, rgba(0, 245, 255, 0.1), rgba(168, 85, 247, 0.1))";

// Click blink
pub const BLINK_CLASS: &str = "blink-click";
pub const BLINK_DURATION: Duration = Duration::from_millis(600);

// Fade-in observer
pub const FADE_IN_THRESHOLD: f64 = 0.1;
pub const FADE_IN_ROOT_MARGIN: &str = "0px 0px -100px 0px";
pub const VISIBLE_CLASS: &str = "visible";

// Selectors
pub const CURSOR_SELECTOR: &str = ".custom-cursor";
pub const FOLLOWER_SELECTOR: &str = ".cursor-follower";
pub const DEMO_VIDEO_SELECTOR: &str = ".demo-video";
pub const INTERACTIVE_SELECTOR: &str =
    "a, button, .btn, .feature-card, .stat-item, .tech-tag, .contact-card";
pub const ANCHOR_SELECTOR: &str = "a[href^=\"#\"]";
pub const FADE_IN_SELECTOR: &str = ".fade-in";
pub const CLICKABLE_SELECTOR: &str = "button, a, .clickable";

// Marker classes
pub const TRAIL_CLASS: &str = "cursor-trail";
pub const PARTICLE_CLASS: &str = "cursor-particle";
pub const GLITCH_CLASS: &str = "cursor-glitch";
pub const SCANLINE_CLASS: &str = "cursor-scanline";

// Inline style for click ripples (no stylesheet class exists for them)
pub const RIPPLE_STYLE: &[(&str, &str)] = &[
    ("position", "fixed"),
    ("width", "0"),
    ("height", "0"),
    ("border", "2px solid var(--accent-cyan)"),
    ("border-radius", "50%"),
    ("transform", "translate(-50%, -50%)"),
    ("pointer-events", "none"),
    ("animation", "clickRipple 0.6s ease-out"),
    ("z-index", "9994"),
];

// Branding lines printed once at startup
pub const BRAND_BANNER: &str =
    "%c\u{1F6E1}\u{FE0F} RansomGuard - AI-Powered Ransomware Detection System";
pub const BRAND_BANNER_STYLE: &str = "color: #00f5ff; font-size: 20px; font-weight: bold;";
pub const BRAND_STATUS: &str = "%cCustom Cursor Effects Active";
pub const BRAND_STATUS_STYLE: &str = "color: #a855f7; font-size: 14px;";
