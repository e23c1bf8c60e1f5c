//! Null/empty key sentinels
//!
//! Rust keys are never null, but several key types have a value that plays the
//! same role (the empty string, `None`). The checked accessors
//! [`OrderedMap::fetch`](crate::OrderedMap::fetch) and
//! [`OrderedMap::assign`](crate::OrderedMap::assign) reject those.

use std::rc::Rc;
use std::sync::Arc;

/// Key types that have a null/empty sentinel value
pub trait NullKey {
    /// Returns true if this key is the sentinel
    fn is_null_key(&self) -> bool;
}

impl NullKey for str {
    fn is_null_key(&self) -> bool {
        self.is_empty()
    }
}

impl NullKey for String {
    fn is_null_key(&self) -> bool {
        self.is_empty()
    }
}

impl<T> NullKey for [T] {
    fn is_null_key(&self) -> bool {
        self.is_empty()
    }
}

impl<T> NullKey for Vec<T> {
    fn is_null_key(&self) -> bool {
        self.is_empty()
    }
}

impl<T> NullKey for Option<T> {
    fn is_null_key(&self) -> bool {
        self.is_none()
    }
}

impl<T: NullKey + ?Sized> NullKey for &T {
    fn is_null_key(&self) -> bool {
        (**self).is_null_key()
    }
}

impl<T: NullKey + ?Sized> NullKey for Box<T> {
    fn is_null_key(&self) -> bool {
        (**self).is_null_key()
    }
}

impl<T: NullKey + ?Sized> NullKey for Rc<T> {
    fn is_null_key(&self) -> bool {
        (**self).is_null_key()
    }
}

impl<T: NullKey + ?Sized> NullKey for Arc<T> {
    fn is_null_key(&self) -> bool {
        (**self).is_null_key()
    }
}

macro_rules! never_null {
    ($($t:ty),* $(,)?) => {
        $(
            impl NullKey for $t {
                #[inline]
                fn is_null_key(&self) -> bool {
                    false
                }
            }
        )*
    };
}

never_null!(u8, u16, u32, u64, u128, usize, i8, i16, i32, i64, i128, isize, char, bool);
