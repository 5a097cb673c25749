#[derive(Clone, Debug, PartialEq)]
pub struct SiteConfig {
    pub owner: &'static str,
    pub headline: &'static str,
    pub email: &'static str,
    pub resume_path: &'static str,
    pub scene_url: &'static str,
    pub scene_loader_url: &'static str,
    pub roles: &'static [&'static str],
    pub typing: TypingConfig,
    pub scroll: ScrollConfig,
    pub theme_storage_key: &'static str,
}

#[derive(Clone, Copy, Debug, PartialEq)]
pub struct TypingConfig {
    pub speed_ms: u32,
    pub pause_ms: u32,
}

#[derive(Clone, Copy, Debug, PartialEq)]
pub struct ScrollConfig {
    /// Added to the scroll offset before comparing against section tops.
    pub lookahead: f64,
    /// Offset past which the back-to-top control shows up.
    pub back_to_top_after: f64,
}

impl Default for TypingConfig {
    fn default() -> Self {
        Self {
            speed_ms: 50,
            pause_ms: 1200,
        }
    }
}

impl Default for ScrollConfig {
    fn default() -> Self {
        Self {
            lookahead: 120.0,
            back_to_top_after: 600.0,
        }
    }
}

impl Default for SiteConfig {
    fn default() -> Self {
        Self {
            owner: "Atharva Shinde",
            headline: "AI & Full-Stack Developer",
            email: "sbjitatharvas@gmail.com",
            resume_path: "/resume.pdf",
            scene_url: "https://prod.spline.design/vc19ejtcC5VJjy5v/scene.splinecode",
            scene_loader_url: "https://unpkg.com/@splinetool/viewer@1.9.82/build/spline-viewer.js",
            roles: &[
                "AI & Full-Stack Developer",
                "Building Smart, Sustainable, and Scalable Tech",
            ],
            typing: TypingConfig::default(),
            scroll: ScrollConfig::default(),
            theme_storage_key: "theme",
        }
    }
}
