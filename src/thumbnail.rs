use crate::error::{Result, require_topic};
use crate::types::{
    ColorScheme, GeneratedThumbnail, Layout, Mood, RenderSpec, ThumbnailRequest,
    ThumbnailVariation,
};
use tracing::debug;

pub const VARIATION_COUNT: usize = 4;
pub const CANVAS_WIDTH: u32 = 1280;
pub const CANVAS_HEIGHT: u32 = 720;

/// Stock placeholder images, one per variation slot. Final pixels come from an
/// external renderer using each variation's [`RenderSpec`].
const PLACEHOLDER_URLS: [&str; VARIATION_COUNT] = [
    "https://images.pexels.com/photos/3184299/pexels-photo-3184299.jpeg?auto=compress&cs=tinysrgb&w=1260&h=750&dpr=1",
    "https://images.pexels.com/photos/3184306/pexels-photo-3184306.jpeg?auto=compress&cs=tinysrgb&w=1260&h=750&dpr=1",
    "https://images.pexels.com/photos/3184338/pexels-photo-3184338.jpeg?auto=compress&cs=tinysrgb&w=1260&h=750&dpr=1",
    "https://images.pexels.com/photos/3184465/pexels-photo-3184465.jpeg?auto=compress&cs=tinysrgb&w=1260&h=750&dpr=1",
];

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct MoodStyle {
    pub colors: [&'static str; 5],
    pub fonts: [&'static str; 2],
    pub motifs: [&'static str; 3],
    pub emoji: &'static str,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum SchemePalette {
    Solid([&'static str; 5]),
    Gradient([&'static str; 2]),
}

impl SchemePalette {
    pub fn colors(self) -> Vec<&'static str> {
        match self {
            SchemePalette::Solid(colors) => colors.to_vec(),
            SchemePalette::Gradient(stops) => stops.to_vec(),
        }
    }
}

impl Mood {
    pub fn style(&self) -> MoodStyle {
        match self {
            Mood::Energetic => MoodStyle {
                colors: ["#FF6B6B", "#4ECDC4", "#45B7D1", "#96CEB4", "#FFEAA7"],
                fonts: ["bold", "dynamic"],
                motifs: ["lightning", "arrows", "burst"],
                emoji: "⚡",
            },
            Mood::Professional => MoodStyle {
                colors: ["#2C3E50", "#34495E", "#3498DB", "#E74C3C", "#F39C12"],
                fonts: ["clean", "modern"],
                motifs: ["geometric", "minimal", "corporate"],
                emoji: "💼",
            },
            Mood::Mysterious => MoodStyle {
                colors: ["#2C2C54", "#40407A", "#706FD3", "#FF5252", "#33D9B2"],
                fonts: ["dramatic", "shadow"],
                motifs: ["shadows", "gradients", "dark"],
                emoji: "🔮",
            },
            Mood::Educational => MoodStyle {
                colors: ["#3742FA", "#2ED573", "#FF6348", "#FFA502", "#747D8C"],
                fonts: ["readable", "friendly"],
                motifs: ["icons", "diagrams", "clean"],
                emoji: "📚",
            },
            Mood::Emotional => MoodStyle {
                colors: ["#FF6B9D", "#C44569", "#F8B500", "#6C5CE7", "#A29BFE"],
                fonts: ["expressive", "warm"],
                motifs: ["hearts", "soft", "organic"],
                emoji: "❤️",
            },
            Mood::Trendy => MoodStyle {
                colors: ["#00D2FF", "#3A47D5", "#FF0080", "#7209B7", "#560BAD"],
                fonts: ["modern", "stylish"],
                motifs: ["gradients", "neon", "contemporary"],
                emoji: "🔥",
            },
        }
    }
}

impl ColorScheme {
    pub fn palette(&self) -> SchemePalette {
        match self {
            ColorScheme::Vibrant => {
                SchemePalette::Solid(["#FF6B6B", "#4ECDC4", "#45B7D1", "#FFA726", "#AB47BC"])
            }
            ColorScheme::Monochrome => {
                SchemePalette::Solid(["#212121", "#424242", "#616161", "#757575", "#9E9E9E"])
            }
            ColorScheme::Pastel => {
                SchemePalette::Solid(["#FFB3BA", "#FFDFBA", "#FFFFBA", "#BAFFC9", "#BAE1FF"])
            }
            ColorScheme::Neon => {
                SchemePalette::Solid(["#FF073A", "#39FF14", "#FF073A", "#FFFF33", "#BF00FF"])
            }
            ColorScheme::Earth => {
                SchemePalette::Solid(["#8D6E63", "#A1887F", "#BCAAA4", "#D7CCC8", "#EFEBE9"])
            }
            ColorScheme::Gradient => SchemePalette::Gradient([
                "linear-gradient(45deg, #667eea 0%, #764ba2 100%)",
                "linear-gradient(45deg, #f093fb 0%, #f5576c 100%)",
            ]),
        }
    }
}

pub fn generate_thumbnail(request: &ThumbnailRequest) -> Result<GeneratedThumbnail> {
    require_topic(&request.topic)?;

    let mood = request.mood;
    let scheme = request.color_scheme;
    let style = mood.style();
    let scheme_colors = scheme.palette().colors();
    let overlay = overlay_text(request, &style);

    debug!(mood = %mood, color_scheme = %scheme, "assembling thumbnail variations");

    // Minimal: first two scheme colors over a white field.
    let minimal_palette: Vec<&str> = scheme_colors
        .iter()
        .take(2)
        .copied()
        .chain(std::iter::once("#FFFFFF"))
        .collect();
    let dynamic_palette: Vec<&str> = style
        .colors
        .iter()
        .rev()
        .chain(scheme_colors.iter())
        .copied()
        .collect();

    let variations = vec![
        ThumbnailVariation {
            url: PLACEHOLDER_URLS[0].to_string(),
            style: format!("{mood} with {scheme} colors"),
            description: format!(
                "Main thumbnail with bold text overlay and {mood} mood styling"
            ),
            render: render_spec(
                Layout::Bold,
                scheme_colors.clone(),
                &style.fonts,
                &style.motifs,
                &overlay,
            ),
        },
        ThumbnailVariation {
            url: PLACEHOLDER_URLS[1].to_string(),
            style: format!("Alternative {mood} design"),
            description: format!(
                "Variation with different composition and {scheme} color scheme"
            ),
            render: render_spec(
                Layout::Alternate,
                style.colors.to_vec(),
                &style.fonts,
                &style.motifs[..2],
                &overlay,
            ),
        },
        ThumbnailVariation {
            url: PLACEHOLDER_URLS[2].to_string(),
            style: format!("Minimalist {mood}"),
            description: format!(
                "Clean, minimal {mood} version focusing on typography and negative space"
            ),
            render: render_spec(
                Layout::Minimal,
                minimal_palette,
                &style.fonts[..1],
                &[],
                &overlay,
            ),
        },
        ThumbnailVariation {
            url: PLACEHOLDER_URLS[3].to_string(),
            style: format!("Dynamic {mood}"),
            description: format!(
                "High-energy {mood} version with dynamic elements and strong visual hierarchy"
            ),
            render: render_spec(
                Layout::Dynamic,
                dynamic_palette,
                &style.fonts,
                &style.motifs,
                &overlay,
            ),
        },
    ];

    Ok(GeneratedThumbnail {
        variations,
        alt: format!("Thumbnail variations for {}", request.topic),
        mood,
        color_scheme: scheme,
    })
}

fn overlay_text(request: &ThumbnailRequest, style: &MoodStyle) -> String {
    let base = request
        .text_overlay
        .as_deref()
        .filter(|text| !text.trim().is_empty())
        .unwrap_or(&request.topic);
    if request.include_emoji {
        format!("{base} {}", style.emoji)
    } else {
        base.to_string()
    }
}

fn render_spec(
    layout: Layout,
    palette: Vec<&str>,
    fonts: &[&str],
    motifs: &[&str],
    overlay: &str,
) -> RenderSpec {
    RenderSpec {
        layout,
        palette: to_owned(&palette),
        font_styles: to_owned(fonts),
        motifs: to_owned(motifs),
        overlay_text: overlay.to_string(),
        width: CANVAS_WIDTH,
        height: CANVAS_HEIGHT,
    }
}

fn to_owned(items: &[&str]) -> Vec<String> {
    items.iter().map(|s| s.to_string()).collect()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_cooking_mysterious_earth() {
        let req = ThumbnailRequest::new("cooking", Mood::Mysterious, ColorScheme::Earth);
        let thumb = generate_thumbnail(&req).unwrap();
        assert_eq!(thumb.variations.len(), VARIATION_COUNT);
        for v in &thumb.variations {
            assert!(v.style.contains("mysterious"), "{}", v.style);
        }
        assert_eq!(thumb.variations[0].style, "mysterious with earth colors");
        assert_eq!(thumb.alt, "Thumbnail variations for cooking");
    }

    #[test]
    fn test_overlay_emoji_toggle() {
        let req = ThumbnailRequest::new("cooking", Mood::Trendy, ColorScheme::Neon);
        let thumb = generate_thumbnail(&req).unwrap();
        assert_eq!(thumb.variations[0].render.overlay_text, "cooking 🔥");

        let plain = generate_thumbnail(&req.clone().with_emoji(false)).unwrap();
        assert_eq!(plain.variations[0].render.overlay_text, "cooking");

        let custom = generate_thumbnail(&req.with_text_overlay("5 Pasta Hacks")).unwrap();
        assert_eq!(custom.variations[3].render.overlay_text, "5 Pasta Hacks 🔥");
    }

    #[test]
    fn test_gradient_scheme_has_two_stops() {
        let colors = ColorScheme::Gradient.palette().colors();
        assert_eq!(colors.len(), 2);
        assert!(colors.iter().all(|c| c.starts_with("linear-gradient")));
        for scheme in ColorScheme::ALL {
            if scheme != ColorScheme::Gradient {
                assert_eq!(scheme.palette().colors().len(), 5);
            }
        }
    }

    #[test]
    fn test_neon_palette_repeats_red() {
        assert_eq!(
            ColorScheme::Neon.palette().colors(),
            vec!["#FF073A", "#39FF14", "#FF073A", "#FFFF33", "#BF00FF"]
        );
    }

    #[test]
    fn test_render_spec_layouts_and_canvas() {
        let req = ThumbnailRequest::new("chess", Mood::Professional, ColorScheme::Monochrome);
        let thumb = generate_thumbnail(&req).unwrap();
        let layouts: Vec<Layout> = thumb.variations.iter().map(|v| v.render.layout).collect();
        assert_eq!(
            layouts,
            vec![Layout::Bold, Layout::Alternate, Layout::Minimal, Layout::Dynamic]
        );
        assert_eq!(thumb.variations[0].render.palette[0], "#212121");
        assert_eq!(thumb.variations[1].render.palette[0], "#2C3E50");
        assert_eq!(thumb.variations[2].render.palette.len(), 3);
        assert!(thumb.variations.iter().all(|v| v.render.width == 1280 && v.render.height == 720));
    }

    #[test]
    fn test_blank_topic_rejected() {
        let req = ThumbnailRequest::new(" ", Mood::Energetic, ColorScheme::Vibrant);
        assert!(generate_thumbnail(&req).unwrap_err().is_validation());
    }
}
