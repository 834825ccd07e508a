/// Options for [`Generator`][`crate::Generator`].
///
/// By default, [`Generator`][`crate::Generator`] only marks a field
/// `omitempty` when its key was missing from at least one object merged into
/// the same struct, and it never emits `example` tags.
///
/// `all_omitempty` adds `omitempty` to every field. `examples` adds an
/// `example` tag carrying the first concrete value seen for each scalar field.
/// `flatten` is accepted for compatibility but has no effect: nested structs
/// are always emitted as separate declarations.
///
/// ```
/// use gostruct_infer::{Generator, Options};
///
/// let options = Options::new().with_all_omitempty(true).with_examples(true);
/// let source = Generator::new(options)
///     .generate(r#"{"name": "John"}"#, "User")
///     .unwrap();
///
/// assert_eq!(
///     "type User struct {\n\tName string `json:\"name,omitempty\" example:\"John\"`\n}\n",
///     source,
/// );
/// ```
#[derive(Debug, Clone, Default)]
pub struct Options {
    all_omitempty: bool,
    examples: bool,
    flatten: bool,
}

impl Options {
    /// Constructs the default set of [`Options`].
    pub fn new() -> Self {
        Self::default()
    }

    #[must_use]
    pub fn with_all_omitempty(mut self, enabled: bool) -> Self {
        self.all_omitempty = enabled;
        self
    }

    #[must_use]
    pub fn with_examples(mut self, enabled: bool) -> Self {
        self.examples = enabled;
        self
    }

    #[must_use]
    pub fn with_flatten(mut self, enabled: bool) -> Self {
        self.flatten = enabled;
        self
    }

    pub(crate) fn all_omitempty(&self) -> bool {
        self.all_omitempty
    }

    pub(crate) fn examples(&self) -> bool {
        self.examples
    }

    /// Whether flattening was requested. Output is flat either way.
    pub fn flatten(&self) -> bool {
        self.flatten
    }
}
