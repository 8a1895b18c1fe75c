use ai_content_studio::config::Config;
use ai_content_studio::export;
use ai_content_studio::*;
use std::sync::{Arc, Mutex};
use std::time::{Duration, Instant};

fn generator() -> TemplateGenerator {
    TemplateGenerator::new(&Config::immediate())
}

#[tokio::test]
async fn test_generator_produces_script_and_thumbnail() {
    let generator = generator();
    let script = generator
        .generate_script(&ScriptRequest::new("bread baking").with_length(Length::Long))
        .await
        .unwrap();
    assert_eq!(script.main_points.len(), 7);

    let thumb = generator
        .generate_thumbnail(&ThumbnailRequest::new(
            "bread baking",
            Mood::Professional,
            ColorScheme::Monochrome,
        ))
        .await
        .unwrap();
    assert_eq!(thumb.variations.len(), 4);
}

#[tokio::test]
async fn test_concurrent_requests_are_independent() {
    let generator: Arc<dyn ContentGenerator> = Arc::new(generator());
    let short = ScriptRequest::new("first topic").with_length(Length::Short);
    let long = ScriptRequest::new("second topic")
        .with_length(Length::Long)
        .with_content_type(ContentType::Interview);

    let (a, b) = tokio::join!(
        generator.generate_script(&short),
        generator.generate_script(&long)
    );
    let (a, b) = (a.unwrap(), b.unwrap());

    assert_eq!(a.main_points.len(), 3);
    assert_eq!(b.main_points.len(), 7);
    assert!(a.hook.contains("first topic"));
    assert!(b.hook.contains("second topic"));
}

#[tokio::test]
async fn test_spawned_generation_is_send() {
    let generator = Arc::new(generator());
    let handle = tokio::spawn({
        let generator = Arc::clone(&generator);
        async move {
            generator
                .generate_script(&ScriptRequest::new("spawned"))
                .await
        }
    });
    let script = handle.await.unwrap().unwrap();
    assert_eq!(script.seo_keywords[0], "spawned");
}

#[tokio::test]
async fn test_configured_latency_is_applied() {
    let cfg = Config {
        script_latency_ms: 50,
        ..Config::immediate()
    };
    let generator = TemplateGenerator::new(&cfg);

    let started = Instant::now();
    generator
        .generate_script(&ScriptRequest::new("patience"))
        .await
        .unwrap();
    assert!(started.elapsed() >= Duration::from_millis(50));
}

#[tokio::test]
async fn test_validation_error_propagates() {
    let err = generator()
        .generate_thumbnail(&ThumbnailRequest::new(" ", Mood::Trendy, ColorScheme::Neon))
        .await
        .unwrap_err();
    assert!(err.is_validation());
}

#[tokio::test]
async fn test_log_hook_receives_progress_lines() {
    let lines = Arc::new(Mutex::new(Vec::<String>::new()));
    let sink = Arc::clone(&lines);
    set_log_hook(Some(Arc::new(Mutex::new(move |line: &str| {
        sink.lock().unwrap().push(line.to_string());
    }))));

    generator()
        .generate_script(&ScriptRequest::new("log hooks"))
        .await
        .unwrap();
    set_log_hook(None);

    let lines = lines.lock().unwrap();
    assert!(lines.iter().any(|l| l.starts_with("[INFO]") && l.contains("log hooks")));
    assert!(lines.iter().any(|l| l.starts_with("[OK] Script ready")));
}

#[tokio::test]
async fn test_saved_exports_land_in_output_dirs() {
    let root = tempfile::tempdir().unwrap();
    let cfg = Config {
        output_dir: root.path().join("output"),
        ..Config::immediate()
    };
    init::ensure_directories(&cfg).await.unwrap();

    let request = ScriptRequest::new("Time Management").with_length(Length::Short);
    let script = generate_script_with(&request, &mut selector::FixedSelector(2)).unwrap();
    let path = export::write_script(&cfg.scripts_dir(), &script, &request)
        .await
        .unwrap();
    assert_eq!(
        path.file_name().unwrap(),
        "time_management_tutorial__from_beginner_to_expert_script.txt"
    );
    let text = tokio::fs::read_to_string(&path).await.unwrap();
    assert!(text.starts_with("Time Management Tutorial: From Beginner to Expert\n"));

    let thumb_req = ThumbnailRequest::new("Time Management", Mood::Energetic, ColorScheme::Vibrant);
    let thumb = generate_thumbnail(&thumb_req).unwrap();
    let path = export::write_thumbnail(&cfg.thumbnails_dir(), &thumb, &thumb_req.topic)
        .await
        .unwrap();
    let json = tokio::fs::read_to_string(&path).await.unwrap();
    let parsed: GeneratedThumbnail = serde_json::from_str(&json).unwrap();
    assert_eq!(parsed, thumb);
}

#[tokio::test]
async fn test_long_topic_saves_with_capped_file_name() {
    let root = tempfile::tempdir().unwrap();
    let request = ScriptRequest::new("a".repeat(300));
    let script = generate_script_with(&request, &mut selector::FixedSelector(0)).unwrap();

    let path = export::write_script(root.path(), &script, &request)
        .await
        .unwrap();
    let name = path.file_name().unwrap().to_str().unwrap();
    assert!(name.len() <= export::MAX_SLUG_CHARS + "_script.txt".len());
    assert!(name.starts_with("the_complete_aaa"));
    assert!(name.ends_with("_script.txt"));
    assert!(tokio::fs::metadata(&path).await.unwrap().is_file());
}
