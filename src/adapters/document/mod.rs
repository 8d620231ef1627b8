//! Document store adapters

mod local_file;

pub use local_file::LocalDocumentStore;
