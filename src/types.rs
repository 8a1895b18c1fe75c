use clap::ValueEnum;
use serde::{Deserialize, Serialize};
use std::fmt;

use crate::logw;

/// Target length of a script. Selects a fixed [`crate::profile::LengthProfile`].
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize, Deserialize, ValueEnum)]
#[serde(rename_all = "lowercase")]
pub enum Length {
    Short,
    #[default]
    Medium,
    Long,
}

impl Length {
    pub const ALL: [Length; 3] = [Length::Short, Length::Medium, Length::Long];

    pub fn as_str(&self) -> &'static str {
        match self {
            Length::Short => "short",
            Length::Medium => "medium",
            Length::Long => "long",
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize, Deserialize, ValueEnum)]
#[serde(rename_all = "lowercase")]
pub enum Tone {
    #[default]
    Professional,
    Casual,
    Educational,
    Entertaining,
}

impl Tone {
    pub fn as_str(&self) -> &'static str {
        match self {
            Tone::Professional => "professional",
            Tone::Casual => "casual",
            Tone::Educational => "educational",
            Tone::Entertaining => "entertaining",
        }
    }
}

/// Script family. Deserialization is lenient: unknown labels become `Tutorial`.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize, Deserialize)]
#[serde(rename_all = "lowercase", from = "String")]
pub enum ContentType {
    #[default]
    Tutorial,
    Analysis,
    Story,
    Review,
    Interview,
}

impl ContentType {
    pub const ALL: [ContentType; 5] = [
        ContentType::Tutorial,
        ContentType::Analysis,
        ContentType::Story,
        ContentType::Review,
        ContentType::Interview,
    ];

    pub fn as_str(&self) -> &'static str {
        match self {
            ContentType::Tutorial => "tutorial",
            ContentType::Analysis => "analysis",
            ContentType::Story => "story",
            ContentType::Review => "review",
            ContentType::Interview => "interview",
        }
    }

    /// Strict lookup, case-insensitive.
    pub fn from_label(label: &str) -> Option<Self> {
        let label = label.trim();
        Self::ALL
            .into_iter()
            .find(|ct| ct.as_str().eq_ignore_ascii_case(label))
    }

    /// Lenient lookup used at the request boundary. Unsupported labels fall
    /// back to the tutorial templates.
    pub fn resolve(label: &str) -> Self {
        Self::from_label(label).unwrap_or_else(|| {
            logw(format!("Unsupported content type {label:?}, using tutorial templates"));
            ContentType::Tutorial
        })
    }
}

impl From<String> for ContentType {
    fn from(label: String) -> Self {
        ContentType::resolve(&label)
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize, Deserialize, ValueEnum)]
#[serde(rename_all = "lowercase")]
pub enum Audience {
    Beginner,
    Intermediate,
    Advanced,
    #[default]
    General,
}

impl Audience {
    pub fn as_str(&self) -> &'static str {
        match self {
            Audience::Beginner => "beginner",
            Audience::Intermediate => "intermediate",
            Audience::Advanced => "advanced",
            Audience::General => "general",
        }
    }
}

macro_rules! display_as_str {
    ($($ty:ty),*) => {
        $(impl fmt::Display for $ty {
            fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
                f.write_str(self.as_str())
            }
        })*
    };
}

display_as_str!(Length, Tone, ContentType, Audience, Mood, ColorScheme);

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ScriptRequest {
    pub topic: String,
    #[serde(default)]
    pub length: Length,
    #[serde(default)]
    pub tone: Tone,
    #[serde(default)]
    pub content_type: ContentType,
    #[serde(default)]
    pub target_audience: Audience,
}

impl ScriptRequest {
    pub fn new(topic: impl Into<String>) -> Self {
        Self {
            topic: topic.into(),
            length: Length::default(),
            tone: Tone::default(),
            content_type: ContentType::default(),
            target_audience: Audience::default(),
        }
    }

    pub fn with_length(mut self, length: Length) -> Self {
        self.length = length;
        self
    }

    pub fn with_tone(mut self, tone: Tone) -> Self {
        self.tone = tone;
        self
    }

    pub fn with_content_type(mut self, content_type: ContentType) -> Self {
        self.content_type = content_type;
        self
    }

    pub fn with_audience(mut self, audience: Audience) -> Self {
        self.target_audience = audience;
        self
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Timestamp {
    pub time: String,
    pub section: String,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct GeneratedScript {
    pub title: String,
    pub hook: String,
    pub intro: String,
    pub main_points: Vec<String>,
    pub key_takeaways: Vec<String>,
    pub outro: String,
    pub call_to_action: String,
    pub estimated_duration: String,
    pub word_count: u32,
    pub seo_keywords: Vec<String>,
    pub timestamps: Vec<Timestamp>,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize, Deserialize, ValueEnum)]
#[serde(rename_all = "lowercase")]
pub enum Mood {
    #[default]
    Energetic,
    Professional,
    Mysterious,
    Educational,
    Emotional,
    Trendy,
}

impl Mood {
    pub const ALL: [Mood; 6] = [
        Mood::Energetic,
        Mood::Professional,
        Mood::Mysterious,
        Mood::Educational,
        Mood::Emotional,
        Mood::Trendy,
    ];

    pub fn as_str(&self) -> &'static str {
        match self {
            Mood::Energetic => "energetic",
            Mood::Professional => "professional",
            Mood::Mysterious => "mysterious",
            Mood::Educational => "educational",
            Mood::Emotional => "emotional",
            Mood::Trendy => "trendy",
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize, Deserialize, ValueEnum)]
#[serde(rename_all = "lowercase")]
pub enum ColorScheme {
    #[default]
    Vibrant,
    Monochrome,
    Pastel,
    Neon,
    Earth,
    Gradient,
}

impl ColorScheme {
    pub const ALL: [ColorScheme; 6] = [
        ColorScheme::Vibrant,
        ColorScheme::Monochrome,
        ColorScheme::Pastel,
        ColorScheme::Neon,
        ColorScheme::Earth,
        ColorScheme::Gradient,
    ];

    pub fn as_str(&self) -> &'static str {
        match self {
            ColorScheme::Vibrant => "vibrant",
            ColorScheme::Monochrome => "monochrome",
            ColorScheme::Pastel => "pastel",
            ColorScheme::Neon => "neon",
            ColorScheme::Earth => "earth",
            ColorScheme::Gradient => "gradient",
        }
    }
}

fn default_include_emoji() -> bool {
    true
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ThumbnailRequest {
    pub topic: String,
    #[serde(default)]
    pub mood: Mood,
    #[serde(default)]
    pub color_scheme: ColorScheme,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub text_overlay: Option<String>,
    #[serde(default = "default_include_emoji")]
    pub include_emoji: bool,
}

impl ThumbnailRequest {
    pub fn new(topic: impl Into<String>, mood: Mood, color_scheme: ColorScheme) -> Self {
        Self {
            topic: topic.into(),
            mood,
            color_scheme,
            text_overlay: None,
            include_emoji: default_include_emoji(),
        }
    }

    pub fn with_text_overlay(mut self, text: impl Into<String>) -> Self {
        self.text_overlay = Some(text.into());
        self
    }

    pub fn with_emoji(mut self, include_emoji: bool) -> Self {
        self.include_emoji = include_emoji;
        self
    }
}

/// Composition of a single thumbnail variation.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Layout {
    Bold,
    Alternate,
    Minimal,
    Dynamic,
}

/// Everything an external renderer needs to draw one variation.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct RenderSpec {
    pub layout: Layout,
    pub palette: Vec<String>,
    pub font_styles: Vec<String>,
    pub motifs: Vec<String>,
    pub overlay_text: String,
    pub width: u32,
    pub height: u32,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ThumbnailVariation {
    pub url: String,
    pub style: String,
    pub description: String,
    pub render: RenderSpec,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct GeneratedThumbnail {
    pub variations: Vec<ThumbnailVariation>,
    pub alt: String,
    pub mood: Mood,
    pub color_scheme: ColorScheme,
}
