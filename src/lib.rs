//! A static validator for GraphQL query documents.
//!
//! Given a parsed query [`ast::Document`] and a [`schema::Schema`], decides
//! whether the document is executable. The validator fails fast: the first
//! rule violation aborts the walk and is returned as the result (§7).
//!
//! ```
//! use litho_validation::{ast, engine, schema};
//!
//! # fn run(document: &ast::Document, schema: &schema::Schema) {
//! match engine::validate(schema, document) {
//!     Ok(()) => println!("valid"),
//!     Err(error) => eprintln!("{error}"),
//! }
//! # }
//! ```

pub mod ast;
pub mod context;
pub mod diagnostics;
pub mod engine;
pub mod error;
mod rules;
pub mod schema;

pub use engine::validate;
pub use error::Error;

#[cfg(test)]
pub mod testing;

#[cfg(test)]
mod tests {
    use super::testing::query_only_schema;
    use super::*;

    #[test]
    fn empty_document_is_valid() {
        let schema = query_only_schema();
        let document = ast::Document::default();
        assert!(validate(&schema, &document).is_ok());
    }
}
