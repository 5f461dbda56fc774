//! Postbridge Core - conversion engine from Talend API Tester exports to Postman
//!
//! A Talend export is one JSON document holding request collections and
//! environments. This crate turns it into one Postman collection per
//! collection entity and one Postman environment per environment entity.
//!
//! # Main Components
//!
//! - **Path Accessor**: dotted-path lookups over untyped JSON with logged,
//!   non-failing typed projections
//! - **Document Mapper**: projects source entities onto the Postman document
//!   types and rewrites `${NAME}` references to `{{NAME}}`
//! - **Converter**: runs the mapper over a whole export in input order
//!
//! # Example
//!
//! ```
//! use postbridge_core::{Converter, DocumentMapper, MapperConfig};
//!
//! fn example() -> postbridge_core::Result<()> {
//!     let converter = Converter::new(DocumentMapper::new(MapperConfig::default())?);
//!     let outputs = converter.convert_str(r#"{"entities": [{"entity": {"name": "Demo"}}]}"#)?;
//!     assert_eq!(outputs[0].file_name("/tmp/postman"), "/tmp/postman_collection_Demo.json");
//!     Ok(())
//! }
//! # example().unwrap();
//! ```

pub mod accessor;
pub mod convert;
pub mod error;
pub mod mapper;
pub mod types;

// Re-export main types for convenience
pub use accessor::{resolve, resolve_as_sequence, resolve_as_text, Path, ValueExt};
pub use convert::{Converter, DocumentKind, OutputDocument};
pub use error::{Error, Result};
pub use mapper::{DocumentMapper, MapperConfig};
pub use types::{
    Body, CollectionDocument, CollectionInfo, EnvironmentDocument, EnvironmentValue, FolderItem,
    Header, Item, QueryParam, Request, RequestItem, Url,
};

/// Library version
pub const VERSION: &str = env!("CARGO_PKG_VERSION");
