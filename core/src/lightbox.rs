use std::fmt::Write;

#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub struct LightboxSource {
    /// `data-full` on the portfolio box.
    pub full: Option<String>,
    /// The `src` currently shown by the box thumbnail.
    pub thumbnail: Option<String>,
    pub is_clicked: bool,
}

#[derive(Clone, Debug, PartialEq, Eq)]
pub struct Slide {
    pub src: String,
    pub active: bool,
}

impl LightboxSource {
    pub fn image_src(&self) -> Option<&str> {
        self.full
            .as_deref()
            .filter(|src| !src.is_empty())
            .or(self.thumbnail.as_deref())
    }
}

/// One slide per source matching the active category, in document order.
/// Sources without any usable image still get a slide with an empty `src`
/// so slide indices line up with items.
pub fn build_slides(sources: &[LightboxSource]) -> Vec<Slide> {
    sources
        .iter()
        .map(|source| Slide {
            src: source.image_src().unwrap_or_default().to_string(),
            active: source.is_clicked,
        })
        .collect()
}

pub fn render_slides(slides: &[Slide]) -> String {
    let mut html = String::new();
    for slide in slides {
        let class = if slide.active {
            "carousel-item active"
        } else {
            "carousel-item"
        };
        let _ = write!(
            html,
            "<div class=\"{class}\"><img src=\"{}\" class=\"d-block\" alt=\"Portfolio Image\"></div>",
            escape_attr(&slide.src)
        );
    }
    html
}

pub fn escape_attr(value: &str) -> String {
    let mut escaped = String::with_capacity(value.len());
    for ch in value.chars() {
        match ch {
            '&' => escaped.push_str("&amp;"),
            '"' => escaped.push_str("&quot;"),
            '\'' => escaped.push_str("&#39;"),
            '<' => escaped.push_str("&lt;"),
            '>' => escaped.push_str("&gt;"),
            _ => escaped.push(ch),
        }
    }
    escaped
}
