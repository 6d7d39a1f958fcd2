pub mod page;
pub mod pointer;

pub use page::wire_page_behaviors;
pub use pointer::wire_pointer_handlers;
