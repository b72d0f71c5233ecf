//! In-memory student registry.
//!
//! Holds student records in insertion order and hands out strictly
//! increasing integer ids. The registry is a plain owned value; callers that
//! share it across requests wrap it in a lock (see [`SharedRegistry`]).

mod error;
mod student;

use std::sync::{Arc, Mutex};

use tracing::debug;

pub use error::{RegistryError, RegistryResult};
pub use student::{Student, StudentPayload};

/// A registry shared between request handlers.
pub type SharedRegistry = Arc<Mutex<StudentRegistry>>;

/// Ordered, in-memory collection of students.
///
/// `next_id` is always strictly greater than every id issued since
/// construction or the last [`reset`](Self::reset).
#[derive(Debug)]
pub struct StudentRegistry {
    records: Vec<Student>,
    next_id: u64,
}

impl StudentRegistry {
    /// Creates an empty registry whose first id will be 1.
    #[must_use]
    pub fn new() -> Self {
        Self { records: Vec::new(), next_id: 1 }
    }

    /// Wraps a fresh registry for sharing between handlers.
    #[must_use]
    pub fn shared() -> SharedRegistry {
        Arc::new(Mutex::new(Self::new()))
    }

    /// All students in insertion order.
    #[must_use]
    pub fn list(&self) -> &[Student] {
        &self.records
    }

    /// Number of students currently held.
    #[must_use]
    pub fn len(&self) -> usize {
        self.records.len()
    }

    /// Whether the registry holds no students.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.records.is_empty()
    }

    /// The id the next successful [`create`](Self::create) will assign.
    #[must_use]
    pub fn next_id(&self) -> u64 {
        self.next_id
    }

    /// Appends a student built from `payload` and returns it.
    pub fn create(&mut self, payload: StudentPayload) -> Student {
        let student = payload.into_student(self.next_id);
        self.next_id += 1;
        self.records.push(student.clone());
        debug!(id = student.id, "student created");
        student
    }

    /// Looks up a student by id.
    ///
    /// # Errors
    ///
    /// Returns [`RegistryError::NotFound`] if no student has this id.
    pub fn get(&self, id: u64) -> RegistryResult<&Student> {
        self.records.iter().find(|s| s.id == id).ok_or_else(|| RegistryError::not_found(id))
    }

    /// Replaces the name and group of an existing student, keeping its id
    /// and position.
    ///
    /// # Errors
    ///
    /// Returns [`RegistryError::NotFound`] if no student has this id.
    pub fn update(&mut self, id: u64, payload: StudentPayload) -> RegistryResult<Student> {
        let slot = self
            .records
            .iter_mut()
            .find(|s| s.id == id)
            .ok_or_else(|| RegistryError::not_found(id))?;
        *slot = payload.into_student(id);
        debug!(id, "student updated");
        Ok(slot.clone())
    }

    /// Removes a student by id.
    ///
    /// # Errors
    ///
    /// Returns [`RegistryError::NotFound`] if no student has this id.
    pub fn delete(&mut self, id: u64) -> RegistryResult<Student> {
        let index = self
            .records
            .iter()
            .position(|s| s.id == id)
            .ok_or_else(|| RegistryError::not_found(id))?;
        let removed = self.records.remove(index);
        debug!(id, "student deleted");
        Ok(removed)
    }

    /// Clears all students and restarts ids at 1. Test support only.
    pub fn reset(&mut self) {
        self.records.clear();
        self.next_id = 1;
        debug!("registry reset");
    }
}

impl Default for StudentRegistry {
    fn default() -> Self {
        Self::new()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn payload(name: &str, group: &str) -> StudentPayload {
        StudentPayload::new(name, group).unwrap()
    }

    #[test]
    fn create_assigns_sequential_ids() {
        let mut registry = StudentRegistry::new();
        let a = registry.create(payload("Ana", "G1"));
        let b = registry.create(payload("Luis", "G1"));
        let c = registry.create(payload("Eva", "G2"));

        assert_eq!((a.id, b.id, c.id), (1, 2, 3));
        assert_eq!(registry.next_id(), 4);
        assert_eq!(registry.len(), 3);
    }

    #[test]
    fn list_preserves_insertion_order() {
        let mut registry = StudentRegistry::new();
        for name in ["Zoe", "Ana", "Mia"] {
            registry.create(payload(name, "G1"));
        }
        let names: Vec<&str> = registry.list().iter().map(|s| s.name.as_str()).collect();
        assert_eq!(names, vec!["Zoe", "Ana", "Mia"]);
    }

    #[test]
    fn get_returns_created_record() {
        let mut registry = StudentRegistry::new();
        let created = registry.create(payload("Ana", "G1"));
        assert_eq!(registry.get(created.id).unwrap(), &created);
    }

    #[test]
    fn get_unknown_id_is_not_found() {
        let registry = StudentRegistry::new();
        assert_eq!(registry.get(1).unwrap_err(), RegistryError::not_found(1));
    }

    #[test]
    fn update_replaces_fields_in_place() {
        let mut registry = StudentRegistry::new();
        registry.create(payload("Ana", "G1"));
        registry.create(payload("Luis", "G1"));

        let updated = registry.update(1, payload("Ana María", "G2")).unwrap();

        assert_eq!(updated, Student { id: 1, name: "Ana María".into(), group: "G2".into() });
        assert_eq!(registry.list()[0], updated);
        assert_eq!(registry.list()[1].name, "Luis");
        assert_eq!(registry.next_id(), 3);
    }

    #[test]
    fn update_unknown_id_does_not_mutate() {
        let mut registry = StudentRegistry::new();
        let existing = registry.create(payload("Ana", "G1"));

        let err = registry.update(42, payload("Ghost", "G9")).unwrap_err();

        assert_eq!(err, RegistryError::not_found(42));
        assert_eq!(registry.list(), &[existing]);
        assert_eq!(registry.next_id(), 2);
    }

    #[test]
    fn delete_removes_exactly_one() {
        let mut registry = StudentRegistry::new();
        registry.create(payload("Ana", "G1"));
        registry.create(payload("Luis", "G1"));

        let removed = registry.delete(1).unwrap();

        assert_eq!(removed.name, "Ana");
        assert_eq!(registry.len(), 1);
        assert!(matches!(registry.get(1), Err(RegistryError::NotFound { .. })));
        assert!(registry.get(2).is_ok());
    }

    #[test]
    fn delete_unknown_id_is_not_found() {
        let mut registry = StudentRegistry::new();
        registry.create(payload("Ana", "G1"));
        assert!(registry.delete(7).is_err());
        assert_eq!(registry.len(), 1);
    }

    #[test]
    fn ids_are_not_reused_after_delete() {
        let mut registry = StudentRegistry::new();
        let first = registry.create(payload("Ana", "G1"));
        registry.delete(first.id).unwrap();

        let second = registry.create(payload("Luis", "G1"));

        assert_eq!(second.id, 2);
    }

    #[test]
    fn reset_clears_records_and_restarts_ids() {
        let mut registry = StudentRegistry::new();
        registry.create(payload("Ana", "G1"));
        registry.create(payload("Luis", "G1"));

        registry.reset();

        assert!(registry.is_empty());
        assert_eq!(registry.create(payload("Eva", "G3")).id, 1);
    }
}
