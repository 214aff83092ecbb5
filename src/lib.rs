//! Runtime value validation for data crossing a trust boundary.
//!
//! Given an arbitrary dynamically-typed [`Value`] (e.g. parsed JSON), decide
//! whether it conforms to a requested [`TypeTag`] — optionally under
//! size/length/pattern [`Options`] — and whether an object's shape matches a
//! declarative [`SchemaNode`] template, recursively.
//!
//! Everything hangs off [`Validator`]:
//! - [`Validator::check`] — the tag-dispatch predicate;
//! - [`Validator::same_objects`] — the recursive structural matcher;
//! - [`Validator::is_email`] / [`Validator::is_ip`] — bounded leaf checks.
//!
//! Expected validation failures are plain `false`, never errors, and
//! malformed constraint options degrade to defaults instead of rejecting
//! the call.

pub mod options;
pub mod schema;
pub mod tag;
pub mod validate;
pub mod value;

pub use options::{NormalizedOptions, Options};
pub use schema::{SchemaError, SchemaNode};
pub use tag::{Kind, TypeTag, UnknownTag};
pub use validate::Validator;
pub use value::{FunctionKind, Instance, TypedArrayKind, Value};
