mod models;

pub use models::{Album, Change, ChangeKind, Tag, TagKind};
