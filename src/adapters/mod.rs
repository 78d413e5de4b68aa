// Adapters layer: concrete implementations behind the domain ports
// (console input, renderers) plus static display content.

pub mod console;
pub mod guide;
pub mod render;
