pub mod assembler;
pub mod render;

pub use assembler::assemble;
pub use render::{render, render_export, RenderedExport, CONTENT_TYPE};
