//! Per-account play history

mod service;

#[cfg(test)]
mod tests;

pub use service::HistoryService;
