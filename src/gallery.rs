//! The ordered list of remote images shown by the slider.

use crate::config::AppConfig;
use std::fmt;

/// Images shown when the config does not list any. These are high-resolution
/// and may take a moment to load.
pub const BUILTIN_IMAGE_URLS: [&str; 9] = [
    "https://images.pexels.com/photos/14023050/pexels-photo-14023050.jpeg",
    "https://images.pexels.com/photos/18386191/pexels-photo-18386191/free-photo-of-massive.jpeg",
    "https://images.pexels.com/photos/6552211/pexels-photo-6552211.jpeg",
    "https://images.pexels.com/photos/4858545/pexels-photo-4858545.jpeg",
    "https://images.pexels.com/photos/13572587/pexels-photo-13572587.jpeg",
    "https://images.pexels.com/photos/1659438/pexels-photo-1659438.jpeg",
    "https://images.pexels.com/photos/16918440/pexels-photo-16918440/free-photo-of-vertigo.jpeg",
    "https://images.pexels.com/photos/25398551/pexels-photo-25398551/free-photo-of-rocks-on-cliff-on-seashore.jpeg",
    "https://images.pexels.com/photos/4959951/pexels-photo-4959951.jpeg",
];

/// Opaque URL of one remotely hosted image.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ImageRef(String);

impl ImageRef {
    pub fn as_str(&self) -> &str {
        &self.0
    }
}

impl fmt::Display for ImageRef {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.0)
    }
}

/// Display-ordered image references. Duplicates are allowed.
#[derive(Debug, Clone, Default)]
pub struct Gallery {
    images: Vec<ImageRef>,
}

impl Gallery {
    pub fn from_urls<I, S>(urls: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        Gallery {
            images: urls.into_iter().map(|url| ImageRef(url.into())).collect(),
        }
    }

    pub fn builtin() -> Self {
        Self::from_urls(BUILTIN_IMAGE_URLS)
    }

    /// Configured images win over the built-in list.
    pub fn from_config(config: &AppConfig) -> Self {
        if config.images.is_empty() {
            Self::builtin()
        } else {
            Self::from_urls(config.images.iter().cloned())
        }
    }

    pub fn len(&self) -> usize {
        self.images.len()
    }

    pub fn is_empty(&self) -> bool {
        self.images.is_empty()
    }

    pub fn get(&self, slot: usize) -> Option<&ImageRef> {
        self.images.get(slot)
    }
}
