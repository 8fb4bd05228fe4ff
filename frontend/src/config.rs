use web_sys::UrlSearchParams;

/// Page-level settings. Everything has a default; `?lang=xx` picks the tip
/// language.
#[derive(Debug, Clone, PartialEq)]
pub struct AppConfig {
    pub upload_url: String,
    pub feedback_url: String,
    pub language: String,
    pub scroll_delay_ms: u32,
    pub capture_mime: String,
    pub capture_quality: f64,
    pub camera_width: u32,
    pub camera_height: u32,
    pub facing_mode: String,
}

impl Default for AppConfig {
    fn default() -> Self {
        Self {
            upload_url: "/upload/".to_string(),
            feedback_url: "/submit-feedback/".to_string(),
            language: "en".to_string(),
            scroll_delay_ms: 100,
            capture_mime: "image/jpeg".to_string(),
            capture_quality: 0.8,
            camera_width: 640,
            camera_height: 480,
            facing_mode: "user".to_string(),
        }
    }
}

impl AppConfig {
    pub fn from_location() -> Self {
        let config = Self::default();
        match query_param("lang") {
            Some(lang) => config.with_language(&lang),
            None => config,
        }
    }

    pub fn with_language(mut self, lang: &str) -> Self {
        let lang = lang.trim().to_ascii_lowercase();
        if is_language_tag(&lang) {
            self.language = lang;
        } else {
            log::warn!("Ignoring invalid language {:?}, using {}", lang, self.language);
        }
        self
    }

    /// `video` constraints handed to `getUserMedia`.
    pub fn video_constraints(&self) -> serde_json::Value {
        serde_json::json!({
            "width": { "ideal": self.camera_width },
            "height": { "ideal": self.camera_height },
            "facingMode": self.facing_mode,
        })
    }
}

fn is_language_tag(lang: &str) -> bool {
    (2..=3).contains(&lang.len()) && lang.chars().all(|c| c.is_ascii_lowercase())
}

fn query_param(name: &str) -> Option<String> {
    let search = web_sys::window()?.location().search().ok()?;
    UrlSearchParams::new_with_str(&search).ok()?.get(name)
}
