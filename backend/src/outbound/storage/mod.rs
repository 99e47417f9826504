//! File storage adapters.

mod disk_poster_store;

pub use disk_poster_store::DiskPosterStore;
