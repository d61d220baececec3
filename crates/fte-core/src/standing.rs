use std::fmt;

use colored::{Color, ColoredString, Colorize};

/// How a character feels towards the player.
///
/// Stored as a plain integer so that small adjustments (`+1`, `-1`) keep
/// classifying correctly: anything at or above [`Standing::GOOD`] is good,
/// anything at or below [`Standing::BAD`] is bad, the rest is neutral.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub struct Standing(pub i32);

/// The three buckets a [`Standing`] value falls into.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Disposition {
    /// The character likes the player.
    Good,
    /// The character has no strong feelings either way.
    Neutral,
    /// The character dislikes the player.
    Bad,
}

impl Standing {
    /// Lowest value still considered bad.
    pub const BAD: Self = Self(-10);
    /// The default standing.
    pub const NEUTRAL: Self = Self(0);
    /// Lowest value considered good.
    pub const GOOD: Self = Self(10);

    /// The raw standing value.
    pub fn value(self) -> i32 {
        self.0
    }

    /// Return this standing shifted by `delta`, saturating at the `i32` bounds.
    pub fn adjusted(self, delta: i32) -> Self {
        Self(self.0.saturating_add(delta))
    }

    /// Classify the value into a [`Disposition`].
    pub fn disposition(self) -> Disposition {
        if self >= Self::GOOD {
            Disposition::Good
        } else if self <= Self::BAD {
            Disposition::Bad
        } else {
            Disposition::Neutral
        }
    }

    /// Display label: `"Good"`, `"Neutral"` or `"Bad"`.
    pub fn label(self) -> &'static str {
        match self.disposition() {
            Disposition::Good => "Good",
            Disposition::Neutral => "Neutral",
            Disposition::Bad => "Bad",
        }
    }

    /// Color used when rendering anything tied to this standing.
    pub fn color(self) -> Color {
        match self.disposition() {
            // green4
            Disposition::Good => Color::TrueColor { r: 0, g: 135, b: 0 },
            // red3
            Disposition::Bad => Color::TrueColor { r: 215, g: 0, b: 0 },
            // sky_blue3
            Disposition::Neutral => Color::TrueColor {
                r: 95,
                g: 175,
                b: 215,
            },
        }
    }

    /// The label rendered in this standing's color.
    pub fn color_text(self) -> ColoredString {
        self.label().color(self.color())
    }
}

impl fmt::Display for Standing {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.label())
    }
}
