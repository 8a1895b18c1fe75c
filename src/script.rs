use crate::error::{Result, require_topic};
use crate::profile::{LengthProfile, MAIN_CONTENT_OFFSET_SECS, format_timestamp};
use crate::selector::{RngSelector, TitleSelector};
use crate::templates::{ContentTemplate, Placeholders, fill};
use crate::types::{ContentType, GeneratedScript, ScriptRequest, Timestamp};
use tracing::debug;

/// Assemble a script with an entropy-seeded title pick.
pub fn generate_script(request: &ScriptRequest) -> Result<GeneratedScript> {
    generate_script_with(request, &mut RngSelector::from_entropy())
}

/// Assemble a script, drawing the title from `selector`. Everything except the
/// title is a pure function of `request`.
pub fn generate_script_with<S>(request: &ScriptRequest, selector: &mut S) -> Result<GeneratedScript>
where
    S: TitleSelector + ?Sized,
{
    require_topic(&request.topic)?;

    let profile = request.length.profile();
    let template = request.content_type.template();
    let vars = Placeholders {
        topic: &request.topic,
        audience: request.target_audience.as_str(),
        duration: profile.duration_label,
    };

    debug!(
        content_type = %request.content_type,
        length = %request.length,
        points = profile.point_count,
        "assembling script"
    );

    let main_points: Vec<String> = template
        .main_points
        .iter()
        .take(profile.point_count)
        .map(|point| fill(point, &vars))
        .collect();

    Ok(GeneratedScript {
        title: pick_title(template, &request.topic, selector),
        hook: fill(template.hook, &vars),
        intro: fill(template.intro, &vars),
        timestamps: build_timestamps(&profile),
        main_points,
        key_takeaways: template
            .key_takeaways
            .iter()
            .map(|item| fill(item, &vars))
            .collect(),
        outro: fill(template.outro, &vars),
        call_to_action: fill(template.call_to_action, &vars),
        estimated_duration: profile.duration_label.to_string(),
        word_count: profile.word_count,
        seo_keywords: seo_keywords(&request.topic),
    })
}

/// All title candidates for a content type, with the topic filled in.
pub fn title_candidates(content_type: ContentType, topic: &str) -> Vec<String> {
    let vars = topic_only(topic);
    content_type
        .template()
        .titles
        .iter()
        .map(|title| fill(title, &vars))
        .collect()
}

fn pick_title<S>(template: &ContentTemplate, topic: &str, selector: &mut S) -> String
where
    S: TitleSelector + ?Sized,
{
    let idx = selector.select(template.titles.len()) % template.titles.len();
    fill(template.titles[idx], &topic_only(topic))
}

fn topic_only(topic: &str) -> Placeholders<'_> {
    Placeholders {
        topic,
        audience: "",
        duration: "",
    }
}

pub fn seo_keywords(topic: &str) -> Vec<String> {
    vec![
        topic.to_string(),
        format!("{topic} tutorial"),
        format!("how to {topic}"),
        format!("{topic} guide"),
        format!("{topic} tips"),
        format!("{topic} 2024"),
    ]
}

/// Section markers: two opening anchors, one per main point, then takeaways and
/// call to action. Always `point_count + 4` entries.
pub fn build_timestamps(profile: &LengthProfile) -> Vec<Timestamp> {
    let mut out = Vec::with_capacity(profile.point_count + 4);
    out.push(marker(0, "Hook & Introduction"));
    out.push(marker(MAIN_CONTENT_OFFSET_SECS, "Main Content Begins"));

    for idx in 0..profile.point_count {
        out.push(marker(
            profile.point_minute(idx) * 60,
            format!("Point {}", idx + 1),
        ));
    }

    out.push(marker(profile.takeaways_minute() * 60, "Key Takeaways"));
    out.push(marker(profile.call_to_action_minute() * 60, "Call to Action"));
    out
}

fn marker(seconds: u32, section: impl Into<String>) -> Timestamp {
    Timestamp {
        time: format_timestamp(seconds),
        section: section.into(),
    }
}
