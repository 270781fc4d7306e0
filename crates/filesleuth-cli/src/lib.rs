/// FileSleuth CLI — terminal frontend.
///
/// This crate contains all presentation code. Business logic lives in
/// `filesleuth-core`.
pub mod app;
pub mod args;
pub mod detail;
pub mod render;
pub mod state;

pub use app::run;
pub use args::Args;
