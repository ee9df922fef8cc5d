// In-memory store backend
//
// Each store owns its collection behind a tokio RwLock; a Vec keeps
// insertion order for listing. One instance per process, shared through
// the router state, so tests get isolation with a fresh instance.

use async_trait::async_trait;
use tokio::sync::RwLock;
use uuid::Uuid;

use crate::models::{Category, Group, Place, User};

use super::{CategoryStore, PlaceStore, StoreError, UserStore};

#[derive(Default)]
pub struct MemoryPlaceStore {
    places: RwLock<Vec<Place>>,
}

impl MemoryPlaceStore {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn seeded(places: Vec<Place>) -> Self {
        Self { places: RwLock::new(places) }
    }
}

#[async_trait]
impl PlaceStore for MemoryPlaceStore {
    async fn list(&self, offset: usize, limit: usize) -> Result<Vec<Place>, StoreError> {
        let places = self.places.read().await;
        Ok(places.iter().skip(offset).take(limit).cloned().collect())
    }

    async fn get_by_id(&self, id: &str) -> Result<Option<Place>, StoreError> {
        let places = self.places.read().await;
        Ok(places
            .iter()
            .find(|p| p.place_id.as_deref() == Some(id))
            .cloned())
    }

    async fn insert(&self, mut place: Place) -> Result<Place, StoreError> {
        place.place_id = Some(Uuid::new_v4().to_string());
        self.places.write().await.push(place.clone());
        Ok(place)
    }

    async fn update(&self, place: Place) -> Result<(), StoreError> {
        let mut places = self.places.write().await;
        match places.iter().position(|p| p.place_id == place.place_id) {
            Some(index) => {
                places[index] = place;
                Ok(())
            }
            None => Err(StoreError::NotFound("place".to_string())),
        }
    }

    async fn delete(&self, id: &str) -> Result<(), StoreError> {
        let mut places = self.places.write().await;
        match places.iter().position(|p| p.place_id.as_deref() == Some(id)) {
            Some(index) => {
                places.remove(index);
                Ok(())
            }
            None => Err(StoreError::NotFound("place".to_string())),
        }
    }

    async fn clear(&self) {
        self.places.write().await.clear();
    }
}

#[derive(Default)]
pub struct MemoryCategoryStore {
    categories: RwLock<Vec<Category>>,
}

impl MemoryCategoryStore {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn seeded(categories: Vec<Category>) -> Self {
        Self { categories: RwLock::new(categories) }
    }
}

#[async_trait]
impl CategoryStore for MemoryCategoryStore {
    async fn list(&self, offset: usize, limit: usize) -> Result<Vec<Category>, StoreError> {
        let categories = self.categories.read().await;
        Ok(categories.iter().skip(offset).take(limit).cloned().collect())
    }

    async fn get_by_id(&self, id: &str) -> Result<Option<Category>, StoreError> {
        let categories = self.categories.read().await;
        Ok(categories
            .iter()
            .find(|c| c.type_id.as_deref() == Some(id))
            .cloned())
    }

    async fn insert(&self, mut category: Category) -> Result<Category, StoreError> {
        let mut categories = self.categories.write().await;
        if categories.iter().any(|c| c.type_name == category.type_name) {
            return Err(StoreError::Conflict(format!(
                "type_name '{}' is already taken",
                category.type_name
            )));
        }
        category.type_id = Some(Uuid::new_v4().to_string());
        categories.push(category.clone());
        Ok(category)
    }

    async fn update(&self, category: Category) -> Result<(), StoreError> {
        let mut categories = self.categories.write().await;
        // type_name stays unique across renames too, not just inserts
        if categories
            .iter()
            .any(|c| c.type_name == category.type_name && c.type_id != category.type_id)
        {
            return Err(StoreError::Conflict(format!(
                "type_name '{}' is already taken",
                category.type_name
            )));
        }
        match categories.iter().position(|c| c.type_id == category.type_id) {
            Some(index) => {
                categories[index] = category;
                Ok(())
            }
            None => Err(StoreError::NotFound("category".to_string())),
        }
    }

    async fn delete(&self, id: &str) -> Result<(), StoreError> {
        let mut categories = self.categories.write().await;
        match categories.iter().position(|c| c.type_id.as_deref() == Some(id)) {
            Some(index) => {
                categories.remove(index);
                Ok(())
            }
            None => Err(StoreError::NotFound("category".to_string())),
        }
    }

    async fn clear(&self) {
        self.categories.write().await.clear();
    }
}

/// Stored user row. The group is kept as a reference and joined on lookup.
#[derive(Debug, Clone)]
struct UserRecord {
    id: String,
    username: String,
    password: String,
    email: String,
    group_id: String,
}

/// Read-mostly user/group reference data. Users are provisioned out of
/// band, so this store takes its contents at construction time.
pub struct MemoryUserStore {
    users: Vec<UserRecord>,
    groups: Vec<Group>,
}

impl MemoryUserStore {
    /// One admin user (all capabilities) and one member user (none),
    /// matching the provisioning a fresh deployment ships with.
    pub fn with_samples() -> Self {
        Self {
            users: vec![
                UserRecord {
                    id: "ABC00001".to_string(),
                    username: "admin01".to_string(),
                    password: "adminpwd01".to_string(),
                    email: "admin@mylocation.com".to_string(),
                    group_id: "G0001".to_string(),
                },
                UserRecord {
                    id: "XYZ00003".to_string(),
                    username: "member03".to_string(),
                    password: "mempwd03".to_string(),
                    email: "member@mylocation.com".to_string(),
                    group_id: "M0001".to_string(),
                },
            ],
            groups: vec![
                Group {
                    group_id: "G0001".to_string(),
                    group_name: "Admin".to_string(),
                    can_insert: true,
                    can_update: true,
                    can_delete: true,
                },
                Group {
                    group_id: "M0001".to_string(),
                    group_name: "Member".to_string(),
                    can_insert: false,
                    can_update: false,
                    can_delete: false,
                },
            ],
        }
    }
}

#[async_trait]
impl UserStore for MemoryUserStore {
    async fn check_user(
        &self,
        username: &str,
        password: &str,
    ) -> Result<Option<User>, StoreError> {
        let Some(record) = self
            .users
            .iter()
            .find(|u| u.username == username && u.password == password)
        else {
            return Ok(None);
        };

        // A dangling group reference is a data integrity fault, not a
        // failed login.
        let group = self
            .groups
            .iter()
            .find(|g| g.group_id == record.group_id)
            .cloned()
            .ok_or_else(|| {
                StoreError::Unavailable(format!("group {} missing", record.group_id))
            })?;

        Ok(Some(User {
            id: record.id.clone(),
            username: record.username.clone(),
            password: record.password.clone(),
            email: record.email.clone(),
            group,
        }))
    }
}
