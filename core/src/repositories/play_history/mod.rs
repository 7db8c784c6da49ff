pub mod r#trait {
    pub use super::trait_::*;
}
#[path = "trait.rs"]
mod trait_;
pub mod memory;

pub use memory::InMemoryPlayHistoryRepository;
pub use r#trait::PlayHistoryRepository;

#[cfg(test)]
#[path = "tests/memory_tests.rs"]
mod tests;
