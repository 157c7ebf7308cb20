use std::sync::Arc;

use crate::errors::StoreResult;
use crate::store::{SkillFields, Wilder, WilderFields, WilderId, WilderStore};

/// Arguments of `createOneWilder`
#[derive(Clone, Debug, Default)]
pub struct CreateWilderRequest {
    pub name: Option<String>,
    pub city: Option<String>,
    pub skills: Option<Vec<SkillFields>>,
}

impl CreateWilderRequest {
    fn into_fields(self) -> WilderFields {
        WilderFields {
            name: self.name,
            city: self.city,
            skills: self.skills.unwrap_or_default(),
        }
    }
}

/// Arguments of `updateOneWilder`.
///
/// Omitted fields are written as absent, they do not keep their stored value.
#[derive(Clone, Debug)]
pub struct UpdateWilderRequest {
    pub id: WilderId,
    pub name: Option<String>,
    pub city: Option<String>,
    pub skills: Option<Vec<SkillFields>>,
}

impl UpdateWilderRequest {
    fn into_parts(self) -> (WilderId, WilderFields) {
        let fields = WilderFields {
            name: self.name,
            city: self.city,
            skills: self.skills.unwrap_or_default(),
        };
        (self.id, fields)
    }
}

/// Wilder operations, one store call each
#[derive(Clone)]
pub struct WilderService {
    store: Arc<dyn WilderStore>,
}

impl WilderService {
    pub fn new(store: Arc<dyn WilderStore>) -> Self {
        Self { store }
    }

    /// Name of the backing document store
    pub fn backend(&self) -> &'static str {
        self.store.backend()
    }

    pub async fn get_all_wilders(&self) -> StoreResult<Vec<Wilder>> {
        let wilders = self.store.find_all().await?;
        tracing::debug!("Fetched {} wilders", wilders.len());
        Ok(wilders)
    }

    pub async fn get_one_wilder(&self, id: &WilderId) -> StoreResult<Option<Wilder>> {
        let wilder = self.store.find_by_id(id).await?;
        if wilder.is_none() {
            tracing::debug!("Wilder {} not found", id);
        }
        Ok(wilder)
    }

    pub async fn create_one_wilder(&self, request: CreateWilderRequest) -> StoreResult<Wilder> {
        let wilder = self.store.insert(request.into_fields()).await?;
        tracing::info!("Created wilder {}", wilder.id);
        Ok(wilder)
    }

    pub async fn update_one_wilder(&self, request: UpdateWilderRequest) -> StoreResult<bool> {
        let (id, fields) = request.into_parts();
        let modified = self.store.update_by_id(&id, fields).await?;
        tracing::info!("Updated wilder {} (modified: {})", id, modified);
        Ok(modified)
    }

    pub async fn delete_one_wilder(&self, id: &WilderId) -> StoreResult<bool> {
        let deleted = self.store.delete_by_id(id).await?;
        tracing::info!("Deleted wilder {} (removed: {})", id, deleted);
        Ok(deleted)
    }

    pub async fn close(&self) -> StoreResult<()> {
        tracing::info!("Closing {} document store", self.backend());
        self.store.close().await
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::store::SqlWilderStore;

    async fn setup_service() -> WilderService {
        let store = SqlWilderStore::connect("sqlite::memory:")
            .await
            .expect("Failed to open in-memory store");
        WilderService::new(Arc::new(store))
    }

    fn alice() -> CreateWilderRequest {
        CreateWilderRequest {
            name: Some("Alice".to_string()),
            city: Some("Paris".to_string()),
            skills: Some(vec![SkillFields {
                title: Some("Go".to_string()),
                votes: Some(3),
            }]),
        }
    }

    #[tokio::test]
    async fn test_create_then_get() {
        let service = setup_service().await;
        let created = service.create_one_wilder(alice()).await.unwrap();

        assert_eq!(created.name.as_deref(), Some("Alice"));
        assert_eq!(created.city.as_deref(), Some("Paris"));
        assert_eq!(created.skills[0].votes, Some(3));

        let id = WilderId::parse(created.id.clone()).unwrap();
        let fetched = service.get_one_wilder(&id).await.unwrap();
        assert_eq!(fetched, Some(created));
    }

    #[tokio::test]
    async fn test_create_empty_wilder() {
        let service = setup_service().await;
        let created = service
            .create_one_wilder(CreateWilderRequest::default())
            .await
            .unwrap();

        assert!(!created.id.is_empty());
        assert_eq!(created.name, None);
        assert_eq!(created.city, None);
        assert!(created.skills.is_empty());
    }

    #[tokio::test]
    async fn test_get_all_tracks_creates_and_deletes() {
        let service = setup_service().await;
        assert_eq!(service.get_all_wilders().await.unwrap().len(), 0);

        let first = service.create_one_wilder(alice()).await.unwrap();
        service.create_one_wilder(alice()).await.unwrap();
        assert_eq!(service.get_all_wilders().await.unwrap().len(), 2);

        let id = WilderId::parse(first.id).unwrap();
        assert!(service.delete_one_wilder(&id).await.unwrap());
        assert_eq!(service.get_all_wilders().await.unwrap().len(), 1);
    }

    #[tokio::test]
    async fn test_update_resets_omitted_fields() {
        let service = setup_service().await;
        let created = service.create_one_wilder(alice()).await.unwrap();
        let id = WilderId::parse(created.id).unwrap();

        let modified = service
            .update_one_wilder(UpdateWilderRequest {
                id: id.clone(),
                name: Some("X".to_string()),
                city: None,
                skills: None,
            })
            .await
            .unwrap();
        assert!(modified);

        let wilder = service.get_one_wilder(&id).await.unwrap().unwrap();
        assert_eq!(wilder.name.as_deref(), Some("X"));
        assert_eq!(wilder.city, None);
        assert!(wilder.skills.is_empty());
    }

    #[tokio::test]
    async fn test_backend_name() {
        let service = setup_service().await;
        assert_eq!(service.backend(), "sqlite");
    }

    #[tokio::test]
    async fn test_close_store() {
        let service = setup_service().await;
        assert!(service.close().await.is_ok());
    }
}
