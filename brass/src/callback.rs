use std::rc::Rc;

/// A cheaply clonable, shared callback.
pub struct Callback<T>(Rc<dyn Fn(T)>);

impl<T> Callback<T> {
    pub fn new<F: Fn(T) + 'static>(f: F) -> Self {
        Self(Rc::new(f))
    }

    #[inline]
    pub fn send(&self, value: T) {
        (self.0)(value)
    }
}

impl<T> Clone for Callback<T> {
    fn clone(&self) -> Self {
        Self(self.0.clone())
    }
}

impl<T> std::fmt::Debug for Callback<T> {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "Callback<{}>", std::any::type_name::<T>())
    }
}

impl<T, F: Fn(T) + 'static> From<F> for Callback<T> {
    fn from(f: F) -> Self {
        Self::new(f)
    }
}
