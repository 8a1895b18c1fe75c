use ai_content_studio::config::Config;
use ai_content_studio::export;
use ai_content_studio::init;
use ai_content_studio::{
    Audience, ColorScheme, ContentGenerator, ContentType, Length, Mood, ScriptRequest,
    TemplateGenerator, ThumbnailRequest, Tone,
};
use anyhow::{Context, Result};
use clap::{Args, Parser, Subcommand};
use std::path::PathBuf;

#[derive(Parser)]
#[command(name = "content-studio", about = "Assemble video scripts and thumbnail briefs")]
struct Cli {
    /// Path to config.json; defaults are used when the file is missing
    #[arg(long, global = true, default_value = "config.json")]
    config: PathBuf,

    #[command(subcommand)]
    command: Command,
}

#[derive(Subcommand)]
enum Command {
    /// Generate a script document
    Script(ScriptArgs),
    /// Generate thumbnail variations
    Thumbnail(ThumbnailArgs),
}

#[derive(Args)]
struct OutputArgs {
    /// Print the JSON document instead of text
    #[arg(long)]
    json: bool,

    /// Also write the export file into the output directory
    #[arg(long)]
    save: bool,
}

#[derive(Args)]
struct ScriptArgs {
    #[arg(long)]
    topic: String,

    #[arg(long, value_enum, default_value_t = Length::Medium)]
    length: Length,

    #[arg(long, value_enum, default_value_t = Tone::Professional)]
    tone: Tone,

    /// tutorial, analysis, story, review or interview; anything else uses tutorial
    #[arg(long, default_value = "tutorial")]
    content_type: String,

    #[arg(long, value_enum, default_value_t = Audience::General)]
    audience: Audience,

    #[command(flatten)]
    output: OutputArgs,
}

#[derive(Args)]
struct ThumbnailArgs {
    #[arg(long)]
    topic: String,

    #[arg(long, value_enum, default_value_t = Mood::Energetic)]
    mood: Mood,

    #[arg(long, value_enum, default_value_t = ColorScheme::Vibrant)]
    color_scheme: ColorScheme,

    /// Overlay text; the topic is used when omitted
    #[arg(long)]
    text_overlay: Option<String>,

    #[arg(long)]
    no_emoji: bool,

    #[command(flatten)]
    output: OutputArgs,
}

fn script_request(args: &ScriptArgs) -> ScriptRequest {
    ScriptRequest::new(args.topic.as_str())
        .with_length(args.length)
        .with_tone(args.tone)
        .with_content_type(ContentType::resolve(&args.content_type))
        .with_audience(args.audience)
}

async fn run_script(
    cfg: &Config,
    generator: &dyn ContentGenerator,
    args: ScriptArgs,
) -> Result<()> {
    let request = script_request(&args);

    let script = generator
        .generate_script(&request)
        .await
        .context("Script generation failed")?;

    if args.output.json {
        println!("{}", serde_json::to_string_pretty(&script)?);
    } else {
        print!("{}", export::render_script_text(&script, &request));
    }

    if args.output.save {
        init::ensure_directories(cfg).await?;
        let path = export::write_script(&cfg.scripts_dir(), &script, &request).await?;
        eprintln!("[OK] Saved script: {}", path.display());
    }
    Ok(())
}

async fn run_thumbnail(
    cfg: &Config,
    generator: &dyn ContentGenerator,
    args: ThumbnailArgs,
) -> Result<()> {
    let mut request = ThumbnailRequest::new(args.topic, args.mood, args.color_scheme)
        .with_emoji(!args.no_emoji);
    if let Some(text) = args.text_overlay {
        request = request.with_text_overlay(text);
    }

    let thumbnail = generator
        .generate_thumbnail(&request)
        .await
        .context("Thumbnail generation failed")?;

    if args.output.json {
        println!("{}", serde_json::to_string_pretty(&thumbnail)?);
    } else {
        print!("{}", export::render_thumbnail_text(&thumbnail));
    }

    if args.output.save {
        init::ensure_directories(cfg).await?;
        let path =
            export::write_thumbnail(&cfg.thumbnails_dir(), &thumbnail, &request.topic).await?;
        eprintln!("[OK] Saved thumbnail brief: {}", path.display());
    }
    Ok(())
}

#[tokio::main]
async fn main() -> Result<()> {
    tracing_subscriber::fmt().with_writer(std::io::stderr).init();

    let cli = Cli::parse();
    let cfg = Config::load_or_default(&cli.config).await?;
    let generator = TemplateGenerator::new(&cfg);

    match cli.command {
        Command::Script(args) => run_script(&cfg, &generator, args).await,
        Command::Thumbnail(args) => run_thumbnail(&cfg, &generator, args).await,
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn parse_script(extra: &[&str]) -> ScriptArgs {
        let mut argv = vec!["content-studio", "script", "--topic", "chess"];
        argv.extend_from_slice(extra);
        match Cli::try_parse_from(argv).unwrap().command {
            Command::Script(args) => args,
            Command::Thumbnail(_) => panic!("expected script subcommand"),
        }
    }

    #[test]
    fn test_unknown_content_type_flag_falls_back_to_tutorial() {
        let request = script_request(&parse_script(&["--content-type", "vlog"]));
        assert_eq!(request.content_type, ContentType::Tutorial);
        assert_eq!(request.topic, "chess");
    }

    #[test]
    fn test_script_flags_reach_request() {
        let request = script_request(&parse_script(&[
            "--length",
            "short",
            "--content-type",
            "Review",
            "--audience",
            "advanced",
        ]));
        assert_eq!(request.length, Length::Short);
        assert_eq!(request.content_type, ContentType::Review);
        assert_eq!(request.target_audience, Audience::Advanced);
        assert_eq!(request.tone, Tone::Professional);
    }
}
