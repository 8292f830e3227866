//! seqview common types
//!
//! Types shared by the view framework and its consumers: the capability
//! classifier, the error type and byte-stream positions.

pub mod capability;
pub mod error;
pub mod position;

pub use capability::{Capabilities, Representation, Traversal};
pub use error::{EndOfInput, Result, ViewError};
pub use position::Position;
