pub mod r#trait {
    pub use super::trait_::*;
}
#[path = "trait.rs"]
mod trait_;
pub mod memory;

pub use memory::InMemorySongRepository;
pub use r#trait::SongRepository;

#[cfg(test)]
#[path = "tests/memory_tests.rs"]
mod tests;
