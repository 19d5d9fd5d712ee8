use serde::Deserialize;

/// Default limit on element nesting.
///
/// Every level costs several parser frames, so the limit has to fit a 2 MB
/// thread stack in an unoptimized build.
pub const DEFAULT_MAX_DEPTH: usize = 256;

/// Settings threaded unchanged through every level of a parse.
///
/// Deserializes from JSON with every field optional, so a config file only
/// needs the keys it overrides:
///
/// ```
/// use xmljson_xml::ParseOptions;
///
/// let options: ParseOptions = serde_json::from_str(r#"{"keep_strings": true}"#).unwrap();
/// assert!(options.keep_strings);
/// assert_eq!(options.max_depth, 256);
/// ```
#[derive(Debug, Clone, Copy, PartialEq, Eq, Deserialize)]
#[serde(default, deny_unknown_fields)]
pub struct ParseOptions {
    /// Keep attribute values and text as strings instead of coercing them to
    /// numbers, booleans and null.
    pub keep_strings: bool,
    /// Maximum element nesting depth. The outermost element is depth 1.
    pub max_depth: usize,
}

impl Default for ParseOptions {
    fn default() -> Self {
        Self {
            keep_strings: false,
            max_depth: DEFAULT_MAX_DEPTH,
        }
    }
}

impl ParseOptions {
    /// Set whether scalars stay strings.
    #[must_use]
    pub const fn with_keep_strings(mut self, keep_strings: bool) -> Self {
        self.keep_strings = keep_strings;
        self
    }

    /// Set the maximum nesting depth.
    #[must_use]
    pub const fn with_max_depth(mut self, max_depth: usize) -> Self {
        self.max_depth = max_depth;
        self
    }
}
