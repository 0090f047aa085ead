//! Component definitions and their expansion into table markup.

mod attrs;
mod center;
mod column;
mod expander;
mod registry;

pub use attrs::{class_list, parse_size, project_attributes, IGNORED_ATTRIBUTES};
pub use center::{is_block_level, is_marked, mark_centered, strip_markers, CENTER_CLASS, PARSED_MARKER};
pub use column::{render_column, resolve_column, ColumnLayout};
pub use expander::{Expander, DEFAULT_SPACER_SIZE};
pub use registry::{ComponentKind, ComponentRegistry};
