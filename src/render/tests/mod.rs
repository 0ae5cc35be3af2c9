//! Renderer tests, organized by statement family. Every test asserts the
//! exact SQL text.

mod ddl;
mod dml;
mod expr;
mod maintenance;
