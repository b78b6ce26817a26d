// Modules under core, split into files for convenience
mod cell;
mod registry;
mod run;

// Re-exports of the key public data structures
pub use cell::{Cell, Flux};
pub use registry::CellRegistry;
pub use run::{KeffCycle, RunSummary};
