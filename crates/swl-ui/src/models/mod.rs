//! Render-agnostic row containers read by the views.

pub mod datamodel;
pub mod listmodel;
pub mod menumodel;

pub use datamodel::{DataModel, SharedModel, WeakModel};
pub use listmodel::{Comparator, ListItem, ListModel};
pub use menumodel::{MenuModel, MenuNode};
