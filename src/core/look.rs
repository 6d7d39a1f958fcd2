/// Inline styles applied to the cursor pair when hovering interactive
/// elements and when leaving them.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct CursorLook {
    pub cursor_size: &'static str,
    pub cursor_border: &'static str,
    pub cursor_background: &'static str,
    pub follower_size: &'static str,
    pub follower_background: &'static str,
}

impl CursorLook {
    pub const DEFAULT: CursorLook = CursorLook {
        cursor_size: "30px",
        cursor_border: "var(--accent-cyan)",
        cursor_background: "transparent",
        follower_size: "8px",
        follower_background: "var(--accent-cyan)",
    };

    pub const HOVER: CursorLook = CursorLook {
        cursor_size: "50px",
        cursor_border: "var(--accent-purple)",
        cursor_background: "rgba(168, 85, 247, 0.1)",
        follower_size: "15px",
        follower_background: "var(--accent-purple)",
    };

    /// (property, value) pairs for the primary cursor.
    pub fn cursor_styles(&self) -> [(&'static str, &'static str); 4] {
        [
            ("width", self.cursor_size),
            ("height", self.cursor_size),
            ("border-color", self.cursor_border),
            ("background", self.cursor_background),
        ]
    }

    /// (property, value) pairs for the follower.
    pub fn follower_styles(&self) -> [(&'static str, &'static str); 3] {
        [
            ("width", self.follower_size),
            ("height", self.follower_size),
            ("background", self.follower_background),
        ]
    }
}

impl Default for CursorLook {
    fn default() -> Self {
        Self::DEFAULT
    }
}

#[inline]
pub fn opacity_value(visible: bool) -> &'static str {
    if visible {
        "1"
    } else {
        "0"
    }
}
