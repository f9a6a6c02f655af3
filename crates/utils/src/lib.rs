//! Common utility for extended `std` types
//!
//! These are left public for convenience.
//!
//! For example, normalising element symbols to their display form or showing
//! optional values explicitly are useful everywhere in the toolkit.

// standard library
use std::fmt::Display;

// Alias for the format! macro
pub use std::format as f;

/// Extends string types with useful functions
pub trait StringExt {
    /// Capitalises the first letter and lowercases the remainder
    ///
    /// Element symbols appear in ENSDF records as uppercase column data, but
    /// are displayed in the conventional `Ni`, `He` form.
    ///
    /// ```rust
    /// # use enstools_utils::StringExt;
    /// assert_eq!("NI".capitalise(), "Ni".to_string());
    /// assert_eq!("h".capitalise(), "H".to_string());
    /// ```
    fn capitalise(&self) -> String;
}

impl<T: AsRef<str>> StringExt for T {
    fn capitalise(&self) -> String {
        let mut c = self.as_ref().chars();
        match c.next() {
            Some(f) => f.to_uppercase().collect::<String>() + &c.as_str().to_lowercase(),
            None => String::new(),
        }
    }
}

/// Extends Option for easy display formatting
pub trait OptionExt {
    /// Better option outputs
    ///
    /// Generic over anything that implements `Display`, this will either be the
    /// value contained within `Some()` or "none" for the `None` variant.
    ///
    /// Unresolved atomic numbers are the common case:
    ///
    /// ```rust
    /// # use enstools_utils::OptionExt;
    /// let z: Option<u32> = Some(28);
    /// assert_eq!(z.display(), "28");
    ///
    /// let z: Option<u32> = None;
    /// assert_eq!(z.display(), "none");
    /// ```
    fn display(&self) -> String;
}

impl<T: Display> OptionExt for Option<T> {
    fn display(&self) -> String {
        match self {
            Some(value) => f!("{value}"),
            None => "none".to_string(),
        }
    }
}
