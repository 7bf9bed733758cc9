pub mod drill;
pub mod fetcher;
