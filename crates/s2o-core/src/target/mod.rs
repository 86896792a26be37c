//! OpenAPI 3.0.3 document types produced by the transform.
//!
//! Every optional field is skipped when absent, so an emitted document never
//! carries `null` placeholders.

pub mod document;
pub mod operation;
pub mod parameter;
pub mod response;

pub use document::{Components, OPENAPI_VERSION, OpenApiDocument};
pub use operation::{Operation, PathItem};
pub use parameter::{Parameter, ParameterLocation, ParameterSchema, RequestBody};
pub use response::{MediaType, Response, SchemaRef};
