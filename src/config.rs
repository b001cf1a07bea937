/// Largest accepted avatar upload: 5 MiB.
pub const MAX_IMAGE_BYTES: u64 = 5 * 1024 * 1024;

/// How long a transient notice stays on screen.
pub const NOTICE_DISMISS_MS: u64 = 3000;

const COMMENTS_KEY: &str = "portfolio_comments";
const PINNED_KEY: &str = "portfolio_pinned_comment";

/// Tunables for the comment widget.
#[derive(Debug, Clone, PartialEq)]
pub struct WidgetConfig {
    /// Storage key holding the serialized regular comments.
    pub comments_key: String,
    /// Storage key holding the serialized pinned comment, absent when nothing is pinned.
    pub pinned_key: String,
    pub max_image_bytes: u64,
    pub notice_dismiss_ms: u64,
}

impl Default for WidgetConfig {
    fn default() -> Self {
        Self {
            comments_key: COMMENTS_KEY.to_string(),
            pinned_key: PINNED_KEY.to_string(),
            max_image_bytes: MAX_IMAGE_BYTES,
            notice_dismiss_ms: NOTICE_DISMISS_MS,
        }
    }
}
