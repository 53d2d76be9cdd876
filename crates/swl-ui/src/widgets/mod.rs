pub mod button;
pub mod canvas;
pub mod image_item;
pub mod rect_item;
pub mod text_button;
pub mod text_item;

pub use button::Button;
pub use canvas::{Canvas, CanvasHandle, ChildFilter, RedrawFn};
pub use image_item::ImageItem;
pub use rect_item::RectItem;
pub use text_button::TextButton;
pub use text_item::TextItem;
