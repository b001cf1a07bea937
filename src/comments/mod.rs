//! Comment widget core: records, pin/unpin state machine, persistence and
//! display helpers. Nothing here touches the DOM, so it runs under `cargo test`.

mod attachment;
mod board;
mod model;
mod time;

pub use attachment::{validate_image, AttachmentError, ImageMeta, ImageReads};
pub use board::{CommentBoard, CommentError, Phase, PinOutcome};
pub use model::{CommentDraft, CommentRecord};
pub use time::{format_relative, from_epoch_millis};
