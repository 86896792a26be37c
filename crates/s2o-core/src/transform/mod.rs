pub mod compact;
pub mod definitions;
pub mod document;
pub mod parameters;
pub mod paths;
pub mod responses;
pub mod schema_name;

pub use document::assemble;
