//! Entity structs for Syllabus domain objects.
//!
//! Entities derive `Serialize`, `Deserialize`, and `JsonSchema`; the catalog
//! file stores one serialized entity per line.

mod lesson;

pub use lesson::LessonScript;
