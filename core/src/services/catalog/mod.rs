//! Song catalog reads

mod service;

#[cfg(test)]
mod tests;

pub use service::CatalogService;
