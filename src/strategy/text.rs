//! Text strategies

use std::borrow::Cow;
use std::rc::Rc;
use std::sync::Arc;

use super::TextOperable;

impl TextOperable for String {
    #[inline]
    fn text(&self) -> Option<&str> {
        Some(self.as_str())
    }
}

impl TextOperable for &str {
    #[inline]
    fn text(&self) -> Option<&str> {
        Some(*self)
    }
}

impl TextOperable for Box<str> {
    #[inline]
    fn text(&self) -> Option<&str> {
        Some(&**self)
    }
}

impl TextOperable for Rc<str> {
    #[inline]
    fn text(&self) -> Option<&str> {
        Some(&**self)
    }
}

impl TextOperable for Arc<str> {
    #[inline]
    fn text(&self) -> Option<&str> {
        Some(&**self)
    }
}

impl TextOperable for Cow<'_, str> {
    #[inline]
    fn text(&self) -> Option<&str> {
        Some(&**self)
    }
}
