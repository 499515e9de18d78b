//! valschema core - JSON Schema inference for Helm-style values files
//!
//! This crate turns a `values.yaml` (optionally deep-merged with overrides)
//! into a JSON Schema describing its shape, types and defaults:
//! - `Value`: Decoded YAML values with a fixed integer/float split
//! - `merge`: Pure deep merge of values documents
//! - `Inferencer`: Value to schema node inference
//! - `RequiredPolicy`: Which object properties are required
//! - `SchemaDocument`: The final document with its `$schema` header
//! - `Generator`: Loader, merge, inference and assembly wired together
//!
//! # Example
//!
//! ```
//! use valschema_core::{assemble, parse_values, Value};
//!
//! let values = parse_values("replicas: 3\nsvc:\n  enabled: false\n  port: 80\n", "values.yaml")?;
//! let doc = assemble(&Value::Mapping(values))?;
//!
//! assert_eq!(doc.required(), ["replicas", "svc"]);
//! assert_eq!(doc.root.property("svc").unwrap().required_names(), ["enabled"]);
//! # Ok::<(), valschema_core::CoreError>(())
//! ```

pub mod document;
pub mod error;
pub mod inference;
pub mod loader;
pub mod merge;
pub mod pipeline;
pub mod policy;
pub mod schema;
pub mod value;
pub mod writer;

pub use document::{DEFAULT_SCHEMA_URI, SchemaDocument, assemble, assemble_with};
pub use error::{CoreError, Result};
pub use inference::{Inferencer, infer};
pub use loader::{FsLoader, ValuesLoader, parse_values};
pub use merge::{merge, merge_all};
pub use pipeline::{Generator, generate_from_values, load_merged};
pub use policy::{AllNonEmptyPolicy, ComponentPolicy, NoRequiredPolicy, RequiredPolicy};
pub use schema::{SchemaNode, SchemaType};
pub use value::{Mapping, Value};
pub use writer::{FileWriter, SchemaWriter, StdoutWriter, write_schema};
