/// User repository trait and in-memory implementation
use crate::error::{Result, RosterError};
use crate::types::{CreateUser, Role, UpdateUser, UserRecord};
use async_trait::async_trait;
use chrono::{DateTime, Utc};
use tokio::sync::RwLock;

/// CRUD surface over the user directory
///
/// The in-memory `MemoryStore` is the default implementation; a real storage
/// backend can be swapped in behind the same trait.
#[async_trait]
pub trait UserRepository: Send + Sync {
    /// Return every record in insertion order
    async fn list(&self) -> Result<Vec<UserRecord>>;

    /// Look up a record by exact id match
    async fn get(&self, id: &str) -> Result<UserRecord>;

    /// Create a record, assigning the next sequence id
    async fn create(&self, input: CreateUser) -> Result<UserRecord>;

    /// Merge a patch over an existing record; `id` and `uid` are never touched
    async fn update(&self, id: &str, patch: UpdateUser) -> Result<UserRecord>;

    /// Remove a record, returning it as confirmation
    async fn delete(&self, id: &str) -> Result<UserRecord>;
}

struct Inner {
    users: Vec<UserRecord>,
    // Monotonic id sequence. Starts at len + 1 and only increases, so ids
    // are never reused after a delete.
    next_id: u64,
}

/// In-memory `UserRepository` backed by a single lock-guarded sequence
///
/// The lock serializes concurrent mutations so the id sequence never issues
/// duplicates. Mutations persist for the lifetime of the store.
pub struct MemoryStore {
    inner: RwLock<Inner>,
}

impl MemoryStore {
    /// Create an empty store
    pub fn new() -> Self {
        Self::with_records(Vec::new())
    }

    /// Create a store pre-loaded with the given records
    pub fn with_records(users: Vec<UserRecord>) -> Self {
        let next_id = users.len() as u64 + 1;
        Self {
            inner: RwLock::new(Inner { users, next_id }),
        }
    }

    /// Create a store pre-loaded with the demo directory
    pub fn seeded() -> Self {
        Self::with_records(demo_users())
    }
}

impl Default for MemoryStore {
    fn default() -> Self {
        Self::new()
    }
}

#[async_trait]
impl UserRepository for MemoryStore {
    async fn list(&self) -> Result<Vec<UserRecord>> {
        let inner = self.inner.read().await;
        Ok(inner.users.clone())
    }

    async fn get(&self, id: &str) -> Result<UserRecord> {
        let inner = self.inner.read().await;
        inner
            .users
            .iter()
            .find(|u| u.id == id)
            .cloned()
            .ok_or_else(|| RosterError::UserNotFound(id.to_string()))
    }

    async fn create(&self, input: CreateUser) -> Result<UserRecord> {
        if input.uid.is_empty() || input.name.is_empty() || input.email.is_empty() {
            return Err(RosterError::validation("uid, name, and email are required"));
        }

        let mut inner = self.inner.write().await;
        let now = Utc::now();
        let record = UserRecord {
            id: inner.next_id.to_string(),
            uid: input.uid,
            name: input.name,
            email: input.email,
            role: input.role.unwrap_or_default(),
            created_at: now,
            last_login: now,
        };
        inner.next_id += 1;
        inner.users.push(record.clone());
        Ok(record)
    }

    async fn update(&self, id: &str, patch: UpdateUser) -> Result<UserRecord> {
        let mut inner = self.inner.write().await;
        let record = inner
            .users
            .iter_mut()
            .find(|u| u.id == id)
            .ok_or_else(|| RosterError::UserNotFound(id.to_string()))?;

        if let Some(name) = patch.name {
            record.name = name;
        }
        if let Some(email) = patch.email {
            record.email = email;
        }
        if let Some(role) = patch.role {
            record.role = role;
        }
        Ok(record.clone())
    }

    async fn delete(&self, id: &str) -> Result<UserRecord> {
        let mut inner = self.inner.write().await;
        let position = inner
            .users
            .iter()
            .position(|u| u.id == id)
            .ok_or_else(|| RosterError::UserNotFound(id.to_string()))?;
        Ok(inner.users.remove(position))
    }
}

fn timestamp(s: &str) -> DateTime<Utc> {
    s.parse().expect("static demo timestamp")
}

/// The three demo records served before any writes happen
pub fn demo_users() -> Vec<UserRecord> {
    vec![
        UserRecord {
            id: "1".to_string(),
            uid: "idp-uid-001".to_string(),
            name: "Alice Johnson".to_string(),
            email: "alice@example.com".to_string(),
            role: Role::Admin,
            created_at: timestamp("2024-01-15T08:00:00Z"),
            last_login: timestamp("2024-06-01T10:30:00Z"),
        },
        UserRecord {
            id: "2".to_string(),
            uid: "idp-uid-002".to_string(),
            name: "Bob Smith".to_string(),
            email: "bob@example.com".to_string(),
            role: Role::User,
            created_at: timestamp("2024-02-20T09:00:00Z"),
            last_login: timestamp("2024-06-02T14:20:00Z"),
        },
        UserRecord {
            id: "3".to_string(),
            uid: "idp-uid-003".to_string(),
            name: "Carol White".to_string(),
            email: "carol@example.com".to_string(),
            role: Role::User,
            created_at: timestamp("2024-03-10T11:00:00Z"),
            last_login: timestamp("2024-05-30T09:45:00Z"),
        },
    ]
}

#[cfg(test)]
mod tests {
    use super::*;

    fn valid_input(uid: &str) -> CreateUser {
        CreateUser {
            uid: uid.to_string(),
            name: "Dee".to_string(),
            email: "d@e.com".to_string(),
            role: None,
        }
    }

    #[tokio::test]
    async fn create_assigns_monotonic_string_ids() {
        let store = MemoryStore::new();

        let first = store.create(valid_input("u1")).await.unwrap();
        let second = store.create(valid_input("u2")).await.unwrap();
        assert_eq!(first.id, "1");
        assert_eq!(second.id, "2");

        // Deleting must not make the id available again
        store.delete("2").await.unwrap();
        let third = store.create(valid_input("u3")).await.unwrap();
        assert_eq!(third.id, "3");
    }

    #[tokio::test]
    async fn create_defaults_role_and_stamps_timestamps() {
        let store = MemoryStore::new();
        let record = store.create(valid_input("u1")).await.unwrap();
        assert_eq!(record.role, Role::User);
        assert_eq!(record.created_at, record.last_login);
    }

    #[tokio::test]
    async fn create_rejects_missing_fields() {
        let store = MemoryStore::new();
        let empty = CreateUser {
            uid: String::new(),
            name: String::new(),
            email: String::new(),
            role: None,
        };
        let err = store.create(empty).await.unwrap_err();
        assert!(matches!(err, RosterError::Validation(_)));
        assert_eq!(err.to_string(), "uid, name, and email are required");

        let partial = CreateUser {
            uid: "x".to_string(),
            name: "y".to_string(),
            email: String::new(),
            role: None,
        };
        assert!(store.create(partial).await.is_err());
    }

    #[tokio::test]
    async fn update_never_touches_id_or_uid() {
        let store = MemoryStore::seeded();

        let patch = UpdateUser {
            name: Some("Alice Updated".to_string()),
            email: None,
            role: Some(Role::User),
        };
        let updated = store.update("1", patch).await.unwrap();
        assert_eq!(updated.id, "1");
        assert_eq!(updated.uid, "idp-uid-001");
        assert_eq!(updated.name, "Alice Updated");
        assert_eq!(updated.role, Role::User);

        // The merge is written back, not returned as a detached copy
        let reread = store.get("1").await.unwrap();
        assert_eq!(reread, updated);
    }

    #[tokio::test]
    async fn get_and_delete_miss_with_not_found() {
        let store = MemoryStore::seeded();
        assert!(matches!(
            store.get("99").await.unwrap_err(),
            RosterError::UserNotFound(_)
        ));
        assert!(matches!(
            store.delete("99").await.unwrap_err(),
            RosterError::UserNotFound(_)
        ));
    }

    #[tokio::test]
    async fn delete_removes_the_record() {
        let store = MemoryStore::seeded();
        let removed = store.delete("2").await.unwrap();
        assert_eq!(removed.name, "Bob Smith");

        assert!(store.get("2").await.is_err());
        let remaining = store.list().await.unwrap();
        assert_eq!(remaining.len(), 2);
        // Insertion order survives the removal
        assert_eq!(remaining[0].id, "1");
        assert_eq!(remaining[1].id, "3");
    }

    #[tokio::test]
    async fn list_preserves_insertion_order() {
        let store = MemoryStore::new();
        for uid in ["a", "b", "c"] {
            store.create(valid_input(uid)).await.unwrap();
        }
        let ids: Vec<_> = store
            .list()
            .await
            .unwrap()
            .into_iter()
            .map(|u| u.id)
            .collect();
        assert_eq!(ids, vec!["1", "2", "3"]);
    }

    #[tokio::test]
    async fn ids_compare_as_opaque_strings() {
        let store = MemoryStore::new();
        store.create(valid_input("u1")).await.unwrap();
        // "01" is not the same string as "1"
        assert!(store.get("01").await.is_err());
        assert!(store.get("1").await.is_ok());
    }
}
