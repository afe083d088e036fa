//! Discoverable categories.
//!
//! A [`Category`] is an interned string: copying and comparing one is an
//! integer operation, and the name can always be recovered for logs and
//! presentation. The interner is process-wide and append-only, so the same
//! name always maps to the same `Category`.

use std::fmt;
use std::sync::LazyLock;

use lasso::{Spur, ThreadedRodeo};
use serde::{Deserialize, Deserializer, Serialize, Serializer};

static INTERNER: LazyLock<ThreadedRodeo> = LazyLock::new(ThreadedRodeo::new);

/// Opaque identifier of a discoverable kind (one species among the configured set).
#[derive(Clone, Copy, PartialEq, Eq, Hash)]
pub struct Category(Spur);

impl Category {
    /// Interns `name`, returning the existing category if it was seen before.
    #[inline]
    #[must_use]
    pub fn new(name: &str) -> Self {
        Self(INTERNER.get_or_intern(name))
    }

    /// Looks up a category without interning a new one.
    #[inline]
    #[must_use]
    pub fn lookup(name: &str) -> Option<Self> {
        INTERNER.get(name).map(Self)
    }

    #[inline]
    #[must_use]
    pub fn name(self) -> &'static str {
        INTERNER.resolve(&self.0)
    }
}

impl fmt::Debug for Category {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_tuple("Category").field(&self.name()).finish()
    }
}

impl fmt::Display for Category {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}

impl From<&str> for Category {
    fn from(name: &str) -> Self {
        Self::new(name)
    }
}

impl Serialize for Category {
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        serializer.serialize_str(self.name())
    }
}

impl<'de> Deserialize<'de> for Category {
    fn deserialize<D: Deserializer<'de>>(deserializer: D) -> Result<Self, D::Error> {
        let name = String::deserialize(deserializer)?;
        Ok(Self::new(&name))
    }
}
