//! Change notification handle.
use std::{fmt, sync::Arc};

/// Stable, comparable handle for the `onChange(text)` notification.
///
/// `OnChange` compares by identity (`Arc::ptr_eq`) so it can live in
/// comparable args without forcing deep closure comparisons.
#[derive(Clone)]
pub struct OnChange {
    handler: Arc<dyn Fn(String) + Send + Sync>,
}

impl OnChange {
    /// Create a handle from a closure.
    pub fn new<F>(handler: F) -> Self
    where
        F: Fn(String) + Send + Sync + 'static,
    {
        Self {
            handler: Arc::new(handler),
        }
    }

    /// Invoke the handler with freshly formatted time text.
    pub fn call(&self, text: String) {
        (self.handler)(text);
    }
}

impl<F> From<F> for OnChange
where
    F: Fn(String) + Send + Sync + 'static,
{
    fn from(handler: F) -> Self {
        Self::new(handler)
    }
}

impl Default for OnChange {
    fn default() -> Self {
        Self::new(|_| {})
    }
}

impl PartialEq for OnChange {
    fn eq(&self, other: &Self) -> bool {
        Arc::ptr_eq(&self.handler, &other.handler)
    }
}

impl Eq for OnChange {}

impl fmt::Debug for OnChange {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("OnChange").finish_non_exhaustive()
    }
}
