//! Type-safe SQL statement builder with AST-native design.
//!
//! Statements are built as typed trees and rendered to SQLite SQL text.
//! Rendering is deterministic and validating: an incomplete or malformed
//! tree yields an error, never broken SQL.
//!
//! ```ignore
//! use winq::prelude::*;
//! let stmt = StatementSelect::new()
//!     .select(["name"])
//!     .from("users")
//!     .filter(Column::new("active").eq(1));
//! assert_eq!(stmt.to_sql().unwrap(), "SELECT name FROM users WHERE active = 1");
//! ```

pub mod ast;
pub mod error;
pub mod render;

pub use render::ToSql;

pub mod prelude {
    pub use crate::ast::*;
    pub use crate::error::*;
    pub use crate::render::ToSql;
}
