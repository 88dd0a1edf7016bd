mod editor_utils;

pub use editor_utils::{compose_in_editor, resolve_editor};
