//! Flat text and JSON documents handed to download/export consumers.

use crate::error::{ContentError, Result};
use crate::types::{GeneratedScript, GeneratedThumbnail, ScriptRequest};
use once_cell::sync::OnceCell;
use regex::Regex;
use std::path::{Path, PathBuf};
use tokio::fs;

/// Format a script as a plain-text document.
pub fn render_script_text(script: &GeneratedScript, request: &ScriptRequest) -> String {
    let mut output = String::new();

    output.push_str(&format!("{}\n\n", script.title));

    output.push_str("HOOK:\n");
    output.push_str(&format!("{}\n\n", script.hook));

    output.push_str("INTRO:\n");
    output.push_str(&format!("{}\n\n", script.intro));

    output.push_str("MAIN POINTS:\n");
    let points = script
        .main_points
        .iter()
        .enumerate()
        .map(|(i, point)| format!("{}. {}", i + 1, point))
        .collect::<Vec<_>>()
        .join("\n\n");
    output.push_str(&points);
    output.push_str("\n\n");

    output.push_str("KEY TAKEAWAYS:\n");
    for takeaway in &script.key_takeaways {
        output.push_str(&format!("• {}\n", takeaway));
    }
    output.push('\n');

    output.push_str("OUTRO:\n");
    output.push_str(&format!("{}\n\n", script.outro));

    output.push_str("CALL TO ACTION:\n");
    output.push_str(&format!("{}\n\n", script.call_to_action));

    output.push_str("TIMESTAMPS:\n");
    for ts in &script.timestamps {
        output.push_str(&format!("{} - {}\n", ts.time, ts.section));
    }
    output.push('\n');

    output.push_str("SEO KEYWORDS:\n");
    output.push_str(&script.seo_keywords.join(", "));
    output.push_str("\n\n");

    output.push_str("---\n");
    output.push_str(&format!("Estimated Duration: {}\n", script.estimated_duration));
    output.push_str(&format!("Word Count: {} words\n", script.word_count));
    output.push_str(&format!("Content Type: {}\n", request.content_type));
    output.push_str(&format!("Tone: {}\n", request.tone));
    output.push_str(&format!("Target Audience: {}\n", request.target_audience));
    output.push_str(&format!("Generated for: {}\n", request.topic));

    output
}

/// Short listing of the thumbnail variations for terminal output.
pub fn render_thumbnail_text(thumbnail: &GeneratedThumbnail) -> String {
    let mut output = String::new();
    output.push_str(&format!("{}\n", thumbnail.alt));
    output.push_str(&format!(
        "Mood: {} | Color scheme: {}\n\n",
        thumbnail.mood, thumbnail.color_scheme
    ));

    for (i, variation) in thumbnail.variations.iter().enumerate() {
        output.push_str(&format!("{}. {}\n", i + 1, variation.style));
        output.push_str(&format!("   {}\n", variation.description));
        output.push_str(&format!("   Overlay: {}\n", variation.render.overlay_text));
        output.push_str(&format!("   Palette: {}\n", variation.render.palette.join(", ")));
        output.push_str(&format!("   Image: {}\n", variation.url));
    }

    output
}

fn slug_regex() -> Result<&'static Regex> {
    static SLUG_RE: OnceCell<Regex> = OnceCell::new();
    SLUG_RE
        .get_or_try_init(|| Regex::new(r"(?i)[^a-z0-9]"))
        .map_err(ContentError::from)
}

/// Longest slug used in an export file name, in chars.
pub const MAX_SLUG_CHARS: usize = 100;

/// Lowercased slug where every char outside `[a-z0-9]` becomes `_`, capped at
/// [`MAX_SLUG_CHARS`] with trailing `_` removed.
pub fn file_slug(text: &str) -> Result<String> {
    let slug: String = slug_regex()?
        .replace_all(text, "_")
        .to_lowercase()
        .chars()
        .take(MAX_SLUG_CHARS)
        .collect();
    let slug = slug.trim_end_matches('_');
    if slug.is_empty() {
        return Ok("untitled".to_string());
    }
    Ok(slug.to_string())
}

pub fn script_file_name(title: &str) -> Result<String> {
    Ok(format!("{}_script.txt", file_slug(title)?))
}

pub fn thumbnail_file_name(topic: &str) -> Result<String> {
    Ok(format!("{}_thumbnail.json", file_slug(topic)?))
}

async fn write_document(dir: &Path, file_name: &str, contents: &[u8]) -> Result<PathBuf> {
    fs::create_dir_all(dir).await.map_err(|source| ContentError::Io {
        path: dir.to_path_buf(),
        source,
    })?;

    let path = dir.join(file_name);
    fs::write(&path, contents)
        .await
        .map_err(|source| ContentError::Io {
            path: path.clone(),
            source,
        })?;
    Ok(path)
}

/// Write the text export of `script` into `dir`, creating it if needed.
pub async fn write_script(
    dir: &Path,
    script: &GeneratedScript,
    request: &ScriptRequest,
) -> Result<PathBuf> {
    let name = script_file_name(&script.title)?;
    let text = render_script_text(script, request);
    write_document(dir, &name, text.as_bytes()).await
}

/// Write the render metadata for `thumbnail` as pretty JSON into `dir`.
pub async fn write_thumbnail(
    dir: &Path,
    thumbnail: &GeneratedThumbnail,
    topic: &str,
) -> Result<PathBuf> {
    let name = thumbnail_file_name(topic)?;
    let json = serde_json::to_string_pretty(thumbnail)?;
    write_document(dir, &name, json.as_bytes()).await
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::script::generate_script_with;
    use crate::selector::FixedSelector;
    use crate::thumbnail::generate_thumbnail;
    use crate::types::{ColorScheme, Length, Mood, ThumbnailRequest};

    #[test]
    fn test_script_text_layout() {
        let request = ScriptRequest::new("chess").with_length(Length::Short);
        let script = generate_script_with(&request, &mut FixedSelector(0)).unwrap();
        let text = render_script_text(&script, &request);

        assert!(text.starts_with("The Complete chess Guide (Step-by-Step)\n\nHOOK:\n"));
        assert!(text.contains("MAIN POINTS:\n1. "));
        assert!(text.contains("\n\n3. "));
        assert!(!text.contains("\n\n4. "));
        assert!(text.contains("KEY TAKEAWAYS:\n• "));
        assert!(text.contains("TIMESTAMPS:\n0:00 - Hook & Introduction\n1:30 - Main Content Begins\n"));
        assert!(text.contains("3:00 - Call to Action\n"));
        assert!(text.contains(
            "SEO KEYWORDS:\nchess, chess tutorial, how to chess, chess guide, chess tips, chess 2024\n"
        ));
        assert!(text.ends_with(
            "---\nEstimated Duration: 4-6 minutes\nWord Count: 800 words\nContent Type: tutorial\nTone: professional\nTarget Audience: general\nGenerated for: chess\n"
        ));

        let hook_at = text.find("HOOK:").unwrap();
        let intro_at = text.find("INTRO:").unwrap();
        let outro_at = text.find("OUTRO:").unwrap();
        let cta_at = text.find("CALL TO ACTION:").unwrap();
        assert!(hook_at < intro_at && intro_at < outro_at && outro_at < cta_at);
    }

    #[test]
    fn test_thumbnail_text_lists_variations() {
        let req = ThumbnailRequest::new("cooking", Mood::Mysterious, ColorScheme::Earth);
        let text = render_thumbnail_text(&generate_thumbnail(&req).unwrap());
        assert!(text.starts_with("Thumbnail variations for cooking\n"));
        assert!(text.contains("1. mysterious with earth colors\n"));
        assert!(text.contains("4. Dynamic mysterious\n"));
        assert!(text.contains("Overlay: cooking 🔮"));
    }

    #[test]
    fn test_file_slug() {
        assert_eq!(
            file_slug("How to Rust: The Ultimate Guide").unwrap(),
            "how_to_rust__the_ultimate_guide"
        );
        assert_eq!(script_file_name("A/B Test").unwrap(), "a_b_test_script.txt");
        assert_eq!(thumbnail_file_name("Cooking 101").unwrap(), "cooking_101_thumbnail.json");
    }

    #[test]
    fn test_file_slug_is_capped_and_trimmed() {
        let slug = file_slug(&"b".repeat(300)).unwrap();
        assert_eq!(slug.chars().count(), MAX_SLUG_CHARS);

        let padded = format!("{}!!!!", "c".repeat(MAX_SLUG_CHARS - 2));
        assert_eq!(file_slug(&padded).unwrap(), "c".repeat(MAX_SLUG_CHARS - 2));
        assert_eq!(file_slug("???").unwrap(), "untitled");
    }
}
