//! Typed binding and extraction layer over the bundled SQLite engine

pub mod bind;
pub mod collect;
pub mod connection;
pub mod decode;
pub mod error;
pub mod statement;
pub mod visit;

// Re-export commonly used items
pub use bind::{Bind, BindValue, Null, Params, Static, ZeroBlob};
pub use collect::Sink;
pub use connection::{Connection, OpenMode};
pub use decode::Decode;
pub use error::Error;
pub use statement::{ColumnType, Row, Statement, Step};
pub use visit::{Visit, VisitCounted};
