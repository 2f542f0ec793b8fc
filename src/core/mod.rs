//! Core engine
//!
//! The five transformations, leaf-first: sanitization, escape repair,
//! formula segmentation, and the two conversion directions between the
//! LaTeX and natural dialects.

pub mod engine;
pub mod latex2natural;
pub mod natural2latex;
pub mod repair;
pub mod sanitize;
pub mod segment;
