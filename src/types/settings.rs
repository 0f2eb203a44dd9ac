//! Parse and serialization options.

use bon::bon;

/// Configuration for a single translation.
///
/// The five flags: display/inline rendering, text direction, the error
/// policy, the identifier-grouping mode and the attribute-sanitizing
/// safe mode. All fields are public; [`Settings::builder`] provides
/// ergonomic construction.
///
/// A process-wide default instance lives in [`crate::core`] and is what
/// the convenience setters (`set_safe_mode`, `set_itex_identifier_mode`)
/// mutate. Mutating the default instance while another thread is parsing
/// with it is a caller error; thread the settings explicitly when you need
/// per-call isolation.
///
/// # Examples
///
/// ```rust
/// use itex_mathml::Settings;
///
/// let settings = Settings::builder().display(true).build();
/// assert!(settings.display);
/// assert!(!settings.throw_on_error);
/// ```
#[derive(Debug, Clone, Default)]
pub struct Settings {
    /// Render in display (block) mode: emits `display="block"` on the
    /// `math` root. When `false` the attribute is omitted entirely.
    pub display: bool,
    /// Right-to-left direction: emits `dir="rtl"` on the `math` root.
    pub right_to_left: bool,
    /// Abort the whole parse on the first grammar violation instead of
    /// rendering an inline `merror` marker.
    pub throw_on_error: bool,
    /// Merge runs of adjacent letters into one multi-character identifier
    /// (itex reading of `xyz`) instead of one identifier per letter.
    pub itex_identifier_mode: bool,
    /// Drop attributes that can carry executable URIs (`\href`), keeping
    /// only the wrapped content.
    pub safe_mode: bool,
}

#[bon]
impl Settings {
    /// Builds a `Settings` value; every unset flag defaults to `false`.
    #[must_use]
    #[builder]
    pub fn new(
        /// Display (block) mode.
        display: Option<bool>,
        /// Right-to-left direction.
        right_to_left: Option<bool>,
        /// Abort on the first parse error.
        throw_on_error: Option<bool>,
        /// Merge adjacent letters into one identifier.
        itex_identifier_mode: Option<bool>,
        /// Strip URI-carrying attributes.
        safe_mode: Option<bool>,
    ) -> Self {
        Self {
            display: display.unwrap_or(false),
            right_to_left: right_to_left.unwrap_or(false),
            throw_on_error: throw_on_error.unwrap_or(false),
            itex_identifier_mode: itex_identifier_mode.unwrap_or(false),
            safe_mode: safe_mode.unwrap_or(false),
        }
    }
}
