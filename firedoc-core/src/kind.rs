//! Collection naming for stored object kinds.
//!
//! Each kind of application object maps to one collection. The mapping is
//! declared explicitly with a type tag rather than inferred from runtime
//! type names, so the collection an object lands in is visible at the
//! definition site and stable across refactors.

use crate::error::Result;
use crate::types::{CollectionPath, DocumentPath};

/// A kind of application object stored in its own collection.
///
/// Implement this once per stored object kind; the associated constant is
/// the collection-path segment all documents of that kind share.
///
/// # Examples
///
/// ```rust
/// use firedoc_core::kind::DocumentKind;
///
/// struct Task;
///
/// impl DocumentKind for Task {
///     const COLLECTION: &'static str = "Task";
/// }
///
/// assert_eq!(Task::COLLECTION, "Task");
/// ```
pub trait DocumentKind {
    /// Collection name shared by all documents of this kind.
    const COLLECTION: &'static str;
}

/// A collection-resolution request: which collection, under which parent.
///
/// Resolution follows two precedence rules: an explicit collection name
/// wins over a kind tag (both are just the name by the time a target is
/// built), and an explicit parent document path wins over the facade's
/// path prefix.
///
/// # Examples
///
/// ```rust
/// use firedoc_core::kind::{CollectionTarget, DocumentKind};
/// use firedoc_core::types::DocumentPath;
///
/// struct Task;
/// impl DocumentKind for Task {
///     const COLLECTION: &'static str = "Task";
/// }
///
/// let prefix = DocumentPath::parse("apps/myapp").unwrap();
///
/// // Under the facade's prefix by kind tag.
/// let target = CollectionTarget::of::<Task>();
/// assert_eq!(target.resolve(&prefix).unwrap().as_str(), "apps/myapp/Task");
///
/// // Under an explicit parent document.
/// let parent = DocumentPath::parse("apps/myapp/Project/p1").unwrap();
/// let target = CollectionTarget::named("Task").under(parent);
/// assert_eq!(
///     target.resolve(&prefix).unwrap().as_str(),
///     "apps/myapp/Project/p1/Task"
/// );
/// ```
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct CollectionTarget {
    collection: String,
    parent: Option<DocumentPath>,
}

impl CollectionTarget {
    /// Target a collection by explicit name.
    pub fn named(name: impl Into<String>) -> Self {
        Self {
            collection: name.into(),
            parent: None,
        }
    }

    /// Target the collection registered for an object kind.
    pub fn of<K: DocumentKind>() -> Self {
        Self::named(K::COLLECTION)
    }

    /// Scope the target under an explicit parent document instead of the
    /// facade's path prefix.
    #[must_use]
    pub fn under(mut self, parent: DocumentPath) -> Self {
        self.parent = Some(parent);
        self
    }

    /// The targeted collection name.
    pub fn collection_name(&self) -> &str {
        &self.collection
    }

    /// The explicit parent document path, if any.
    pub fn parent(&self) -> Option<&DocumentPath> {
        self.parent.as_ref()
    }

    /// Resolve to a full collection path under the given prefix.
    ///
    /// # Errors
    ///
    /// Returns a validation error if the collection name is not a usable
    /// path segment.
    pub fn resolve(&self, prefix: &DocumentPath) -> Result<CollectionPath> {
        let base = self.parent.as_ref().unwrap_or(prefix);
        base.collection(&self.collection)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    struct Task;
    impl DocumentKind for Task {
        const COLLECTION: &'static str = "Task";
    }

    fn prefix() -> DocumentPath {
        DocumentPath::parse("apps/myapp").unwrap()
    }

    #[test]
    fn test_named_and_kind_targets_agree() {
        let by_name = CollectionTarget::named("Task").resolve(&prefix()).unwrap();
        let by_kind = CollectionTarget::of::<Task>().resolve(&prefix()).unwrap();
        assert_eq!(by_name, by_kind);
        assert_eq!(by_name.as_str(), "apps/myapp/Task");
    }

    #[test]
    fn test_explicit_parent_wins_over_prefix() {
        let parent = DocumentPath::parse("apps/myapp/Project/p1").unwrap();
        let resolved = CollectionTarget::of::<Task>()
            .under(parent)
            .resolve(&prefix())
            .unwrap();
        assert_eq!(resolved.as_str(), "apps/myapp/Project/p1/Task");
    }

    #[test]
    fn test_bad_collection_name_rejected() {
        assert!(CollectionTarget::named("a/b").resolve(&prefix()).is_err());
        assert!(CollectionTarget::named("").resolve(&prefix()).is_err());
    }
}
