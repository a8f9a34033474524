mod options;
pub use options::*;
mod reducer;
pub use reducer::*;
mod synthesizer;
pub use synthesizer::*;
mod placement;
pub use placement::*;
mod entry_point_preloader;
pub use entry_point_preloader::*;
