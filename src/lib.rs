//! Generates Go struct declarations from an example JSON document.
//!
//! Given a JSON payload, such as an API response or a config file, this crate
//! infers one consistent shape for it and writes Go types that decode it:
//! exported field names, `json:"..."` tags carrying the original keys, and a
//! separate named struct for every nested object.
//!
//! If you are looking to use this package as a CLI tool, run the
//! `gostruct-infer` binary; the remainder of these docs focus on the Rust API.
//!
//! # Quick start
//!
//! ```
//! use gostruct_infer::{Generator, Options};
//!
//! let generator = Generator::new(Options::new());
//! let source = generator
//!     .generate(
//!         r#"{"user_id": 7, "profile": {"name": "Ann"}, "tags": [{"id": 1, "label": "x"}, {"id": 2}]}"#,
//!         "Account",
//!     )
//!     .unwrap();
//!
//! assert_eq!(
//!     "type Account struct {\n\
//!      \tUserID int `json:\"user_id\"`\n\
//!      \tProfile Profile `json:\"profile\"`\n\
//!      \tTags []Tags `json:\"tags\"`\n\
//!      }\n\
//!      \n\
//!      type Profile struct {\n\
//!      \tName string `json:\"name\"`\n\
//!      }\n\
//!      \n\
//!      type Tags struct {\n\
//!      \tID int `json:\"id\"`\n\
//!      \tLabel string `json:\"label,omitempty\"`\n\
//!      }\n",
//!     source,
//! );
//! ```
//!
//! Elements of an array are merged into a single type. A key that is missing
//! from some of the merged objects is tagged `omitempty`, and values that
//! cannot be reconciled become `any`.

mod emitter;
mod error;
mod inferred_number;
mod inferred_type;
mod naming;
mod options;

pub use crate::emitter::DEFAULT_ROOT_NAME;
pub use crate::error::Error;
pub use crate::inferred_number::NumType;
pub use crate::inferred_type::{Field, InferredType, Scalar, Struct};
pub use crate::naming::{
    format_leading_digits, identifier_for, is_exported, proper_case, sanitize, NameRegistry,
};
pub use crate::options::Options;
use serde_json::Value;
use tracing::debug;

/// Turns JSON documents into Go source using a fixed set of [`Options`].
///
/// A generator holds no state between calls: every call to
/// [`Generator::generate`] starts from a fresh [`NameRegistry`].
#[derive(Debug, Clone, Default)]
pub struct Generator {
    options: Options,
}

impl Generator {
    /// Constructs a new generator with the given options.
    pub fn new(options: Options) -> Self {
        Self { options }
    }

    /// Generates declarations for `json`, naming the top-level type
    /// `root_name`.
    ///
    /// The result holds one declaration per distinct struct, root first. If
    /// `json` does not decode, nothing is generated and the decoder's error is
    /// returned.
    pub fn generate(&self, json: &str, root_name: &str) -> Result<String, Error> {
        let value: Value = serde_json::from_str(json)?;
        Ok(self.generate_value(&value, root_name))
    }

    /// Like [`Generator::generate`], for an already decoded value.
    ///
    /// The value should come from a `serde_json` built with number literals
    /// preserved, which this crate enables; otherwise `42.0` reads as an
    /// integer.
    pub fn generate_value(&self, value: &Value, root_name: &str) -> String {
        let root_name = emitter::root_name(root_name);
        let mut inferred = InferredType::infer(value);

        let mut registry = NameRegistry::new();
        emitter::assign_names(&mut inferred, &root_name, &mut registry);

        let source = emitter::render(&inferred, &root_name, &self.options);
        debug!(
            "generated declarations for {} (flatten requested: {}, {} bytes)",
            root_name,
            self.options.flatten(),
            source.len()
        );
        source
    }
}

/// Shorthand for `Generator::new(options.clone()).generate(json, root_name)`.
pub fn generate(json: &str, root_name: &str, options: &Options) -> Result<String, Error> {
    Generator::new(options.clone()).generate(json, root_name)
}
