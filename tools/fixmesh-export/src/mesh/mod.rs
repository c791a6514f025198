//! Mesh converter (OBJ -> obj_data)

mod obj;
mod types;

// Re-export public API
pub use obj::{Record, classify_line, convert_obj, parse_obj_file, parse_obj_str};
pub use types::{Face, Mesh};
