pub mod error;
pub mod schema;
pub mod types;

pub use error::ShardgateError;
pub use schema::SchemaReader;
pub use types::{Keyspace, Plan, ShowResponse, TargetDestination};
