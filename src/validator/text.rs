//! String checks
//!
//! A null string fails every check here with [`GuardError::Null`]; an
//! existing string that fails the condition gets [`GuardError::Argument`].

use super::{Linkage, Validator};
use crate::error::GuardError;
use crate::strategy::TextOperable;

fn null_or<T: TextOperable>(name: &str, value: &T, message: String) -> GuardError {
    match value.text() {
        None => GuardError::null(name, "must not be null"),
        Some(_) => GuardError::argument(name, message),
    }
}

impl<T: TextOperable> Validator<T> {
    /// Value must be present and non-empty.
    pub fn is_not_null_or_empty(&mut self) -> Linkage<'_, T> {
        self.check(
            |value| value.text().is_some_and(|s| !s.is_empty()),
            |name, value| null_or(name, value, "must not be empty".to_owned()),
        )
    }

    /// Value must be present and contain a non-whitespace character.
    pub fn is_not_null_or_whitespace(&mut self) -> Linkage<'_, T> {
        self.check(
            |value| value.text().is_some_and(|s| !s.trim().is_empty()),
            |name, value| null_or(name, value, "must not be empty or whitespace".to_owned()),
        )
    }

    /// Value must start with `prefix`.
    pub fn starts_with(&mut self, prefix: impl AsRef<str>) -> Linkage<'_, T> {
        let prefix = prefix.as_ref();
        self.check(
            |value| value.text().is_some_and(|s| s.starts_with(prefix)),
            |name, value| null_or(name, value, format!("must start with {prefix:?}")),
        )
    }

    /// Value must end with `suffix`.
    pub fn ends_with(&mut self, suffix: impl AsRef<str>) -> Linkage<'_, T> {
        let suffix = suffix.as_ref();
        self.check(
            |value| value.text().is_some_and(|s| s.ends_with(suffix)),
            |name, value| null_or(name, value, format!("must end with {suffix:?}")),
        )
    }

    /// Value must contain `needle`.
    pub fn contains(&mut self, needle: impl AsRef<str>) -> Linkage<'_, T> {
        let needle = needle.as_ref();
        self.check(
            |value| value.text().is_some_and(|s| s.contains(needle)),
            |name, value| null_or(name, value, format!("must contain {needle:?}")),
        )
    }
}

#[cfg(test)]
mod tests {
    use crate::error::ErrorKind;
    use crate::validator::Validator;

    fn failure<T>(v: &mut Validator<T>) -> Option<ErrorKind> {
        v.take_pending().map(|e| e.kind())
    }

    #[test]
    fn test_not_null_or_empty() {
        let mut v = Validator::new("s", String::from("x"));
        let _ = v.is_not_null_or_empty();
        assert_eq!(failure(&mut v), None);

        let mut v = Validator::new("s", "");
        let _ = v.is_not_null_or_empty();
        assert_eq!(failure(&mut v), Some(ErrorKind::Argument));

        let mut v = Validator::new("s", None::<String>);
        let _ = v.is_not_null_or_empty();
        assert_eq!(failure(&mut v), Some(ErrorKind::Null));
    }

    #[test]
    fn test_not_null_or_whitespace() {
        let mut v = Validator::new("s", " \t\n");
        let _ = v.is_not_null_or_whitespace();
        assert_eq!(failure(&mut v), Some(ErrorKind::Argument));

        let mut v = Validator::new("s", " a ");
        let _ = v.is_not_null_or_whitespace();
        assert_eq!(failure(&mut v), None);
    }

    #[test]
    fn test_prefix_and_suffix() {
        let mut v = Validator::new("path", "/usr/local/bin");
        assert!(v
            .starts_with("/usr")
            .and()
            .ends_with("bin")
            .and()
            .contains("local")
            .otherwise_throw_exception()
            .is_ok());

        let err = v.starts_with(String::from("/opt")).otherwise_throw_exception().unwrap_err();
        assert_eq!(err.message(), "must start with \"/opt\"");
    }

    #[test]
    fn test_null_string_fails_prefix_as_null() {
        let mut v = Validator::new("s", None::<&str>);
        let _ = v.ends_with("x");
        assert_eq!(failure(&mut v), Some(ErrorKind::Null));
    }
}
