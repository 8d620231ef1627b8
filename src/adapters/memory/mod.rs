//! Answer store adapters

mod file;
mod in_memory;

pub use file::FileAnswerStore;
pub use in_memory::InMemoryAnswerStore;
