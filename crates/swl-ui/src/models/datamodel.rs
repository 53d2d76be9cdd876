use std::cell::RefCell;
use std::rc::{Rc, Weak};

/// Indexed read access to a sequence of rows.
///
/// Valid indices are `0..rows()`; `at` returns `None` outside that range.
pub trait DataModel<T> {
    fn rows(&self) -> usize;

    fn at(&self, index: usize) -> Option<&T>;
}

/// A model shared between the code that edits it and the views showing it.
pub type SharedModel<M> = Rc<RefCell<M>>;

/// What a view holds: it never keeps a model alive.
pub type WeakModel<T> = Weak<RefCell<dyn DataModel<T>>>;

impl<T> DataModel<T> for Vec<T> {
    fn rows(&self) -> usize {
        self.len()
    }

    fn at(&self, index: usize) -> Option<&T> {
        self.get(index)
    }
}
