//! Equality model for sequence diffing.
//!
//! Two predicates drive the engine:
//!
//! - **Identity equality** decides whether two elements are the same logical
//!   entity (possibly ignoring case or comparing by key). It governs which
//!   positions get aligned.
//! - **Content equality** decides whether an aligned pair carries exactly the
//!   same value. It governs the common-vs-updated split.
//!
//! Plain value types collapse both predicates into one test, in which case a
//! match is always `common` and `updated` never fires.
//!
//! # Strategy selection
//!
//! The behavior is selected at the call site through [`Equality`], a tagged
//! strategy over plain function pointers. Type-driven defaults come from the
//! [`Diffable`] trait via [`Equality::diffable`].

use std::fmt;

// =============================================================================
// Equality strategy
// =============================================================================

/// Equality strategy for a diff call.
///
/// # Precondition
///
/// The content predicate is only meaningful for pairs the identity predicate
/// already accepts. The engine only ever evaluates content on
/// identity-matched pairs; callers constructing a [`Equality::Keyed`] value
/// must not rely on its content predicate outside that situation.
///
/// # Example
///
/// ```
/// use seqlcs::{diff_with, Equality};
///
/// fn same_key(a: &(u32, char), b: &(u32, char)) -> bool {
///     a.0 == b.0
/// }
/// fn same_value(a: &(u32, char), b: &(u32, char)) -> bool {
///     a == b
/// }
///
/// let old = [(1, 'a'), (2, 'b')];
/// let new = [(1, 'a'), (2, 'z')];
/// let d = diff_with(&old, &new, Equality::keyed(same_key, same_value));
/// assert_eq!(d.common, vec![0]);
/// assert_eq!(d.updated, vec![1]);
/// ```
pub enum Equality<T> {
    /// Single-predicate mode: identity and content are the same test.
    ///
    /// Every aligned pair is classified as common; `updated` never fires.
    Value(fn(&T, &T) -> bool),

    /// Dual-predicate mode: separate identity and content tests, enabling
    /// update detection on identity-matched pairs.
    Keyed {
        /// Same logical entity? Governs alignment.
        identity: fn(&T, &T) -> bool,
        /// Exactly the same value? Only evaluated on identity matches.
        content: fn(&T, &T) -> bool,
    },
}

impl<T: PartialEq> Equality<T> {
    /// Single-predicate strategy derived from ordinary value equality.
    pub fn value() -> Self {
        Self::Value(T::eq)
    }
}

impl<T: Diffable> Equality<T> {
    /// Dual-predicate strategy derived from the type's [`Diffable`] impl.
    pub fn diffable() -> Self {
        Self::Keyed {
            identity: T::identity_eq,
            content: T::content_eq,
        }
    }
}

impl<T> Equality<T> {
    /// Dual-predicate strategy from explicit function pointers.
    pub fn keyed(identity: fn(&T, &T) -> bool, content: fn(&T, &T) -> bool) -> Self {
        Self::Keyed { identity, content }
    }

    /// Apply the identity predicate.
    #[inline]
    pub fn identity_eq(&self, a: &T, b: &T) -> bool {
        match self {
            Self::Value(eq) => eq(a, b),
            Self::Keyed { identity, .. } => identity(a, b),
        }
    }

    /// Apply the content predicate.
    ///
    /// Only meaningful when `identity_eq(a, b)` holds.
    #[inline]
    pub fn content_eq(&self, a: &T, b: &T) -> bool {
        match self {
            Self::Value(eq) => eq(a, b),
            Self::Keyed { content, .. } => content(a, b),
        }
    }

    /// Whether this strategy can classify positions as updated at all.
    pub fn detects_updates(&self) -> bool {
        matches!(self, Self::Keyed { .. })
    }
}

// Manual impls: the derives would add a `T: Clone`/`T: Copy` bound, but the
// variants hold only function pointers.
impl<T> Clone for Equality<T> {
    fn clone(&self) -> Self {
        *self
    }
}

impl<T> Copy for Equality<T> {}

impl<T> fmt::Debug for Equality<T> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Value(_) => f.write_str("Equality::Value"),
            Self::Keyed { .. } => f.write_str("Equality::Keyed"),
        }
    }
}

// =============================================================================
// Diffable trait
// =============================================================================

/// Element capability for dual-predicate diffing.
///
/// Types whose notion of "the same thing" is looser than exact equality
/// implement this to get `updated` classifications out of [`crate::diff`].
/// Types with no distinct identity implement both methods as the same test,
/// which collapses the model to single-predicate behavior.
pub trait Diffable {
    /// Returns `true` if `other` is the same logical entity as `self`.
    ///
    /// A `true` result does not imply the two are equal in content.
    fn identity_eq(&self, other: &Self) -> bool;

    /// Returns `true` if `other` has exactly the same content as `self`.
    ///
    /// Only meaningful when `self.identity_eq(other)` holds; the result is
    /// unspecified otherwise.
    fn content_eq(&self, other: &Self) -> bool;
}

macro_rules! impl_diffable_by_value {
    ($($ty:ty),* $(,)?) => {$(
        impl Diffable for $ty {
            #[inline]
            fn identity_eq(&self, other: &Self) -> bool {
                self == other
            }

            #[inline]
            fn content_eq(&self, other: &Self) -> bool {
                self == other
            }
        }
    )*};
}

impl_diffable_by_value!(u8, u16, u32, u64, u128, usize, i8, i16, i32, i64, i128, isize, bool);

/// Case-insensitive identity, exact content.
impl Diffable for char {
    fn identity_eq(&self, other: &Self) -> bool {
        self.to_lowercase().eq(other.to_lowercase())
    }

    #[inline]
    fn content_eq(&self, other: &Self) -> bool {
        self == other
    }
}

/// Case-insensitive identity, exact content.
impl Diffable for str {
    fn identity_eq(&self, other: &Self) -> bool {
        self.to_lowercase() == other.to_lowercase()
    }

    #[inline]
    fn content_eq(&self, other: &Self) -> bool {
        self == other
    }
}

impl Diffable for String {
    fn identity_eq(&self, other: &Self) -> bool {
        self.as_str().identity_eq(other.as_str())
    }

    fn content_eq(&self, other: &Self) -> bool {
        self.as_str().content_eq(other.as_str())
    }
}

impl<T: Diffable + ?Sized> Diffable for &T {
    fn identity_eq(&self, other: &Self) -> bool {
        (**self).identity_eq(&**other)
    }

    fn content_eq(&self, other: &Self) -> bool {
        (**self).content_eq(&**other)
    }
}

// =============================================================================
// Tests
// =============================================================================
