pub mod entry;
pub mod set;

pub use entry::{HookCommand, HookEntry, HookKind};
pub use set::{HookSet, RUNNER};
