use alloc::sync::Arc;
use core::any::Any;
use core::fmt;

// -----------------------------------------------------------------------------
// ClassObject

/// A resolved, loaded class, as produced by a [`ModuleLoader`](crate::ModuleLoader).
///
/// The registry does not interpret class objects; it only hands them out.
/// The handle is type-erased and cheap to clone, callers recover the
/// concrete class value through [`downcast_ref`](ClassObject::downcast_ref).
#[derive(Clone)]
pub struct ClassObject(Arc<dyn Any + Send + Sync>);

impl ClassObject {
    /// Wrap a concrete class value.
    pub fn new<T: Any + Send + Sync>(class: T) -> Self {
        Self(Arc::new(class))
    }

    /// Returns a reference to the concrete class value, if it is a `T`.
    #[inline]
    pub fn downcast_ref<T: Any>(&self) -> Option<&T> {
        self.0.downcast_ref()
    }

    /// Returns `true` if the concrete class value is a `T`.
    #[inline]
    pub fn is<T: Any>(&self) -> bool {
        self.0.is::<T>()
    }
}

impl fmt::Debug for ClassObject {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("ClassObject").finish_non_exhaustive()
    }
}
