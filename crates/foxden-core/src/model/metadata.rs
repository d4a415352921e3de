use serde::{Deserialize, Serialize};

/// Per-view document metadata
///
/// Produced by the active view and applied to the document head when the
/// view enters. No persistence: the pair is overwritten on every
/// completed navigation.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct PageMetadata {
    /// Document title for this view
    pub title: String,
    /// Description meta tag content for this view
    pub description: String,
}

impl PageMetadata {
    /// Create a metadata descriptor
    pub fn new(title: impl Into<String>, description: impl Into<String>) -> Self {
        Self {
            title: title.into(),
            description: description.into(),
        }
    }
}

/// Process-wide document head model
///
/// Holds the mutable title/description slots that track the active view,
/// plus the theme-color / site-name pair which is set once at shell
/// initialization and never changes across navigations. Views never
/// touch this directly; the engine applies a `PageMetadata` value at the
/// shell boundary when a view enters.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct DocumentHead {
    title: String,
    description: String,
    theme_color: String,
    site_name: String,
}

impl DocumentHead {
    /// Create a head with the once-only shell pairs and empty view slots
    pub fn new(theme_color: impl Into<String>, site_name: impl Into<String>) -> Self {
        Self {
            title: String::new(),
            description: String::new(),
            theme_color: theme_color.into(),
            site_name: site_name.into(),
        }
    }

    /// Overwrite the view-owned slots with a view's metadata
    pub fn publish(&mut self, metadata: &PageMetadata) {
        self.title = metadata.title.clone();
        self.description = metadata.description.clone();
    }

    /// Current document title
    pub fn title(&self) -> &str {
        &self.title
    }

    /// Current description meta content
    pub fn description(&self) -> &str {
        &self.description
    }

    /// Theme color set at shell initialization
    pub fn theme_color(&self) -> &str {
        &self.theme_color
    }

    /// Site name set at shell initialization
    pub fn site_name(&self) -> &str {
        &self.site_name
    }
}
