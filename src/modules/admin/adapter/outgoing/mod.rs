mod media_store_memory;

pub use media_store_memory::InMemoryMediaStore;
