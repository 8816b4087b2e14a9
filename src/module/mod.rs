/// Module domain layer: value model, built-in registry, identifier resolution.
pub mod builtin;
pub mod errors;
pub mod flatten;
pub mod resolve;
pub mod value;

pub use errors::InspectError;
pub use flatten::{FlatEntry, flatten};
pub use resolve::{FsResolver, Resolver};
pub use value::Value;
