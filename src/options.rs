//! Configuration options for CTON encoding.
//!
//! This module provides [`CtonOptions`], the configuration struct accepted by
//! [`crate::encode_with_options`] and [`crate::to_string_with_options`].
//!
//! ## Examples
//!
//! ```rust
//! use serde_cton::{cton, encode_with_options, CtonOptions};
//!
//! let value = cton!({"a": [1, 2]});
//!
//! // Tighten the recursion limit for untrusted input
//! let options = CtonOptions::new().with_max_depth(8);
//! let text = encode_with_options(&value, &options).unwrap();
//! assert_eq!(text, "{a[1 2]}");
//! ```

/// Configuration options for CTON encoding.
///
/// The single recognized option is `max_depth`, which bounds encoder recursion
/// so pathological nesting cannot overflow the stack. Depth counts descents
/// into child values (array elements and object values); nesting exactly at
/// the limit succeeds, one level beyond it fails with
/// [`crate::Error::MaxDepthExceeded`].
///
/// # Examples
///
/// ```rust
/// use serde_cton::CtonOptions;
///
/// let options = CtonOptions::new();
/// assert_eq!(options.max_depth, 100);
///
/// let options = CtonOptions::new().with_max_depth(16);
/// assert_eq!(options.max_depth, 16);
/// ```
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct CtonOptions {
    pub max_depth: usize,
}

impl Default for CtonOptions {
    fn default() -> Self {
        CtonOptions { max_depth: 100 }
    }
}

impl CtonOptions {
    /// Creates default options (maximum depth 100).
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Sets the maximum encoder recursion depth.
    ///
    /// # Examples
    ///
    /// ```rust
    /// use serde_cton::CtonOptions;
    ///
    /// let options = CtonOptions::new().with_max_depth(32);
    /// assert_eq!(options.max_depth, 32);
    /// ```
    #[must_use]
    pub fn with_max_depth(mut self, max_depth: usize) -> Self {
        self.max_depth = max_depth;
        self
    }
}
