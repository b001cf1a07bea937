use thiserror::Error;

/// What the file picker tells us about a selected file.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ImageMeta {
    pub size: u64,
    pub content_type: String,
}

impl ImageMeta {
    pub fn new(size: u64, content_type: impl Into<String>) -> Self {
        Self {
            size,
            content_type: content_type.into(),
        }
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum AttachmentError {
    #[error("Image is too large ({}). Maximum size is {}.", human_size(.size), human_size(.limit))]
    TooLarge { size: u64, limit: u64 },
    #[error("Please select an image file.")]
    NotAnImage { content_type: String },
}

fn human_size(bytes: &u64) -> String {
    const MIB: f64 = 1024.0 * 1024.0;
    format!("{:.1} MB", *bytes as f64 / MIB)
}

/// Check an avatar upload before reading it. `max_bytes` itself is allowed.
pub fn validate_image(meta: &ImageMeta, max_bytes: u64) -> Result<(), AttachmentError> {
    if !meta.content_type.starts_with("image/") {
        return Err(AttachmentError::NotAnImage {
            content_type: meta.content_type.clone(),
        });
    }
    if meta.size > max_bytes {
        return Err(AttachmentError::TooLarge {
            size: meta.size,
            limit: max_bytes,
        });
    }
    Ok(())
}

/// Tracks the image read in flight. Only the most recent read may deliver its
/// result; one that was replaced or abandoned is dropped when it completes.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct ImageReads {
    generation: u32,
    pending: bool,
}

impl ImageReads {
    /// Start a read and return its ticket. Earlier tickets become stale.
    pub fn begin(&mut self) -> u32 {
        self.generation = self.generation.wrapping_add(1);
        self.pending = true;
        self.generation
    }

    /// A read finished. Returns whether its result should be used.
    pub fn finish(&mut self, ticket: u32) -> bool {
        if ticket != self.generation {
            return false;
        }
        self.pending = false;
        true
    }

    /// Abandon whatever read is in flight.
    pub fn invalidate(&mut self) {
        self.generation = self.generation.wrapping_add(1);
        self.pending = false;
    }

    pub fn is_pending(&self) -> bool {
        self.pending
    }
}
