use once_cell::sync::Lazy;
use std::sync::{Arc, Mutex};

pub mod config;
pub mod error;
pub mod export;
pub mod generator;
pub mod init;
pub mod profile;
pub mod script;
pub mod selector;
pub mod templates;
pub mod thumbnail;
pub mod types;

pub use error::{ContentError, Result};
pub use generator::{ContentGenerator, TemplateGenerator};
pub use script::{generate_script, generate_script_with};
pub use thumbnail::generate_thumbnail;
pub use types::{
    Audience, ColorScheme, ContentType, GeneratedScript, GeneratedThumbnail, Length, Mood,
    ScriptRequest, ThumbnailRequest, Tone,
};

pub type GeneratorLogHook = Arc<Mutex<dyn Fn(&str) + Send + Sync + 'static>>;

static LOG_HOOK: Lazy<Mutex<Option<GeneratorLogHook>>> = Lazy::new(|| Mutex::new(None));

/// Mirror progress lines to an embedding caller (e.g. a display panel).
pub fn set_log_hook(hook: Option<GeneratorLogHook>) {
    if let Ok(mut guard) = LOG_HOOK.lock() {
        *guard = hook;
    }
}

pub(crate) fn logv(tag: &str, message: &str) {
    match tag {
        "WARN" => tracing::warn!("{}", message),
        _ => tracing::info!("[{}] {}", tag, message),
    }

    if let Ok(guard) = LOG_HOOK.lock() {
        if let Some(hook) = guard.as_ref() {
            if let Ok(callback) = hook.lock() {
                let line = format!("[{}] {}", tag, message);
                callback(&line);
            }
        }
    }
}

pub(crate) fn logi(message: impl AsRef<str>) {
    logv("INFO", message.as_ref());
}

pub(crate) fn logok(message: impl AsRef<str>) {
    logv("OK", message.as_ref());
}

pub(crate) fn logw(message: impl AsRef<str>) {
    logv("WARN", message.as_ref());
}
