//! # syl-core
//!
//! Core types, ID generation, and error types for Syllabus.
//!
//! This crate provides the foundational types shared across all Syllabus crates:
//! - The `LessonScript` entity stored in the catalog
//! - The `CompletionState` enum
//! - ID prefix constants and generation helpers
//! - Cross-cutting error types
//! - CLI response types

pub mod entities;
pub mod enums;
pub mod errors;
pub mod ids;
pub mod responses;
