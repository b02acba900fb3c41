mod classify;
mod tag;

pub use classify::classify;
pub use tag::{FormatFamily, MessageTypeTag, TagInfo, UnknownTagError};
