use std::fmt;

pub const VIMEO_HOST: &str = "vimeo.com";

#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub struct VimeoId(String);

impl VimeoId {
    /// Parses a link handed to the video modal. The URL must mention
    /// `vimeo.com`; the id is the last `/<digits>` run after the first
    /// (case-insensitive) `vimeo`.
    pub fn from_player_link(url: &str) -> Result<Self, VimeoIdError> {
        if !url.contains(VIMEO_HOST) {
            return Err(VimeoIdError::NotVimeo);
        }
        let start = url
            .to_ascii_lowercase()
            .find("vimeo")
            .ok_or(VimeoIdError::NotVimeo)?;
        let tail = &url[start..];
        let bytes = tail.as_bytes();
        for (index, byte) in bytes.iter().enumerate().rev() {
            if *byte != b'/' {
                continue;
            }
            let digits = leading_digits(&tail[index + 1..]);
            if !digits.is_empty() {
                return Ok(Self(digits.to_string()));
            }
        }
        Err(VimeoIdError::MissingId)
    }

    /// Parses the first `vimeo.com/<digits>` occurrence, as found in a
    /// portfolio box's click handler.
    pub fn from_reference(raw: &str) -> Result<Self, VimeoIdError> {
        let needle = "vimeo.com/";
        let mut seen = false;
        let mut rest = raw;
        while let Some(pos) = rest.find(needle) {
            seen = true;
            rest = &rest[pos + needle.len()..];
            let digits = leading_digits(rest);
            if !digits.is_empty() {
                return Ok(Self(digits.to_string()));
            }
        }
        if seen {
            Err(VimeoIdError::MissingId)
        } else {
            Err(VimeoIdError::NotVimeo)
        }
    }

    pub fn as_str(&self) -> &str {
        &self.0
    }

    pub fn embed_url(&self) -> String {
        format!("https://player.vimeo.com/video/{}?autoplay=1", self.0)
    }

    pub fn thumbnail_url(&self) -> String {
        format!("https://vumbnail.com/{}_large.jpg", self.0)
    }
}

impl fmt::Display for VimeoId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        self.0.fmt(f)
    }
}

fn leading_digits(value: &str) -> &str {
    let end = value
        .find(|ch: char| !ch.is_ascii_digit())
        .unwrap_or(value.len());
    &value[..end]
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum VimeoIdError {
    NotVimeo,
    MissingId,
}

impl fmt::Display for VimeoIdError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            VimeoIdError::NotVimeo => write!(f, "not a {VIMEO_HOST} link"),
            VimeoIdError::MissingId => write!(f, "no numeric video id in link"),
        }
    }
}

impl std::error::Error for VimeoIdError {}

/// The embed URL for a modal launch, or `None` when the link has no id.
pub fn embed_url_for(url: &str) -> Option<String> {
    VimeoId::from_player_link(url).ok().map(|id| id.embed_url())
}
