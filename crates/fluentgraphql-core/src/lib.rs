//! Fluent construction of GraphQL query and mutation documents.
//!
//! A [`Document`](operation::Document) owns an operation and the selection
//! tree beneath it. Selections are appended through chained builder calls
//! that can descend into a nested field and climb back out again with
//! `parent()` or `root()`. The finished tree renders to GraphQL text via
//! `apollo-compiler`'s printer.

pub mod operation;
mod render;
mod request;
mod value;

pub use render::RenderError;
pub use render::RenderOptions;
pub use request::Request;
pub use request::RequestError;
pub use value::ObjectField;
pub use value::Value;

#[cfg(test)]
mod tests;
