// quadrat/src/processors/mod.rs
mod batch;
mod encoder;
mod loader;
mod thumbnail;

pub use batch::{BatchProcessor, BatchReport};
pub use encoder::PngSink;
pub use loader::{read_orientation, Loader, Orientation};
pub use thumbnail::Thumbnailer;

pub mod prelude {
    pub use super::{BatchProcessor, Loader, PngSink, Thumbnailer};
}
