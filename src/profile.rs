use crate::types::Length;

/// Fixed numeric and display constants for a script length.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct LengthProfile {
    pub word_count: u32,
    pub duration_label: &'static str,
    pub min_minutes: u32,
    pub max_minutes: u32,
    pub point_count: usize,
}

/// Timestamp anchor placed after the hook and intro.
pub const MAIN_CONTENT_OFFSET_SECS: u32 = 90;

/// Every template carries at least this many main points.
pub const MAX_POINT_COUNT: usize = 7;

impl Length {
    pub fn profile(&self) -> LengthProfile {
        match self {
            Length::Short => LengthProfile {
                word_count: 800,
                duration_label: "4-6 minutes",
                min_minutes: 4,
                max_minutes: 6,
                point_count: 3,
            },
            Length::Medium => LengthProfile {
                word_count: 1800,
                duration_label: "10-12 minutes",
                min_minutes: 10,
                max_minutes: 12,
                point_count: 5,
            },
            Length::Long => LengthProfile {
                word_count: 3500,
                duration_label: "20-25 minutes",
                min_minutes: 20,
                max_minutes: 25,
                point_count: 7,
            },
        }
    }
}

impl LengthProfile {
    /// Minute at which main point `index` (0-based) starts. The lower bound of
    /// the duration range is split into `point_count + 2` equal segments and the
    /// first point lands on the boundary after the second segment.
    pub fn point_minute(&self, index: usize) -> u32 {
        let segments = self.point_count as u32 + 2;
        (index as u32 + 2) * self.min_minutes / segments
    }

    pub fn takeaways_minute(&self) -> u32 {
        self.min_minutes.saturating_sub(2)
    }

    pub fn call_to_action_minute(&self) -> u32 {
        self.min_minutes.saturating_sub(1)
    }
}

/// Format seconds as an `M:SS` label.
pub fn format_timestamp(seconds: u32) -> String {
    format!("{}:{:02}", seconds / 60, seconds % 60)
}
