//! # Appliance Id Generation
//!
//! Ids are minted when a catalog entry is added, never by the reducer. The
//! generator is passed in by the caller so the store stays deterministic:
//! production uses [`UuidIdGenerator`], tests use [`SequentialIdGenerator`].
//!
//! Both keep the catalog id as a prefix (`fridge-…`), so an added appliance
//! still reads as its catalog entry in logs.

use uuid::Uuid;

/// Source of unique appliance ids.
pub trait IdGenerator {
    /// Returns an id not handed out before by this generator.
    fn next_id(&mut self, catalog_id: &str) -> String;
}

/// `{catalog_id}-{uuid v4}`.
#[derive(Debug, Clone, Copy, Default)]
pub struct UuidIdGenerator;

impl IdGenerator for UuidIdGenerator {
    fn next_id(&mut self, catalog_id: &str) -> String {
        format!("{}-{}", catalog_id, Uuid::new_v4())
    }
}

/// `{catalog_id}-{n}` with `n` counting from 1 across all catalog ids.
#[derive(Debug, Clone, Default)]
pub struct SequentialIdGenerator {
    issued: u64,
}

impl SequentialIdGenerator {
    pub fn new() -> Self {
        Self::default()
    }
}

impl IdGenerator for SequentialIdGenerator {
    fn next_id(&mut self, catalog_id: &str) -> String {
        self.issued += 1;
        format!("{}-{}", catalog_id, self.issued)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::collections::HashSet;

    #[test]
    fn test_sequential_ids_are_deterministic() {
        let mut ids = SequentialIdGenerator::new();
        assert_eq!(ids.next_id("fridge"), "fridge-1");
        assert_eq!(ids.next_id("fridge"), "fridge-2");
        assert_eq!(ids.next_id("tv"), "tv-3");
    }

    #[test]
    fn test_uuid_ids_keep_prefix_and_are_unique() {
        let mut ids = UuidIdGenerator;
        let minted: HashSet<String> = (0..50).map(|_| ids.next_id("kettle")).collect();

        assert_eq!(minted.len(), 50);
        for id in &minted {
            let suffix = id.strip_prefix("kettle-").unwrap();
            assert!(Uuid::parse_str(suffix).is_ok());
        }
    }

    #[test]
    fn test_generator_usable_as_trait_object() {
        let mut boxed: Box<dyn IdGenerator> = Box::new(SequentialIdGenerator::new());
        assert_eq!(boxed.next_id("tv"), "tv-1");
    }
}
