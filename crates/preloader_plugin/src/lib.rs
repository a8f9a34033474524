mod args;
pub use args::*;
mod context;
pub use context::*;
mod plugin;
pub use plugin::*;
