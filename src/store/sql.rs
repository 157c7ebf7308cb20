use async_trait::async_trait;
use sea_orm::sea_query::{Condition, Expr};
use sea_orm::{
    ActiveModelTrait, ColumnTrait, DatabaseConnection, EntityTrait, QueryFilter, Set,
};
use uuid::Uuid;

use super::{Skill, SkillFields, Wilder, WilderFields, WilderId, WilderStore};
use crate::database::entities::wilders;
use crate::database::{establish_connection, setup_database};
use crate::errors::{StoreError, StoreResult};

/// SeaORM-backed store keeping one row per wilder document.
///
/// Identifiers are UUID v4 strings; skills are embedded as a JSON array.
#[derive(Clone)]
pub struct SqlWilderStore {
    db: DatabaseConnection,
}

impl SqlWilderStore {
    pub fn new(db: DatabaseConnection) -> Self {
        Self { db }
    }

    /// Connect and make sure the wilders table exists
    pub async fn connect(database_url: &str) -> StoreResult<Self> {
        let db = establish_connection(database_url).await?;
        setup_database(&db).await?;
        Ok(Self::new(db))
    }

    pub fn db(&self) -> &DatabaseConnection {
        &self.db
    }

    fn parse_id(id: &WilderId) -> StoreResult<String> {
        Uuid::parse_str(id.as_str())
            .map(|uuid| uuid.to_string())
            .map_err(|_| StoreError::InvalidId(id.to_string()))
    }

    fn assign_skill_ids(skills: Vec<SkillFields>) -> Vec<Skill> {
        skills
            .into_iter()
            .map(|skill| skill.into_skill(Uuid::new_v4().to_string()))
            .collect()
    }
}

impl TryFrom<wilders::Model> for Wilder {
    type Error = StoreError;

    fn try_from(model: wilders::Model) -> Result<Self, Self::Error> {
        Ok(Self {
            id: model.id,
            name: model.name,
            city: model.city,
            skills: serde_json::from_str(&model.skills)?,
        })
    }
}

#[async_trait]
impl WilderStore for SqlWilderStore {
    fn backend(&self) -> &'static str {
        "sqlite"
    }

    async fn find_all(&self) -> StoreResult<Vec<Wilder>> {
        wilders::Entity::find()
            .all(&self.db)
            .await?
            .into_iter()
            .map(Wilder::try_from)
            .collect()
    }

    async fn find_by_id(&self, id: &WilderId) -> StoreResult<Option<Wilder>> {
        let id = Self::parse_id(id)?;
        wilders::Entity::find_by_id(id)
            .one(&self.db)
            .await?
            .map(Wilder::try_from)
            .transpose()
    }

    async fn insert(&self, fields: WilderFields) -> StoreResult<Wilder> {
        let skills = Self::assign_skill_ids(fields.skills);

        let wilder = wilders::ActiveModel {
            id: Set(Uuid::new_v4().to_string()),
            name: Set(fields.name),
            city: Set(fields.city),
            skills: Set(serde_json::to_string(&skills)?),
        };

        let model = wilder.insert(&self.db).await?;
        Wilder::try_from(model)
    }

    async fn update_by_id(&self, id: &WilderId, fields: WilderFields) -> StoreResult<bool> {
        let id = Self::parse_id(id)?;
        let skills = serde_json::to_string(&Self::assign_skill_ids(fields.skills))?;

        // Rows whose values already match are left untouched so they do not count
        // as modified.
        let changed = Condition::any()
            .add(Expr::col(wilders::Column::Name).is_not(fields.name.clone()))
            .add(Expr::col(wilders::Column::City).is_not(fields.city.clone()))
            .add(Expr::col(wilders::Column::Skills).is_not(skills.clone()));

        let result = wilders::Entity::update_many()
            .set(wilders::ActiveModel {
                name: Set(fields.name),
                city: Set(fields.city),
                skills: Set(skills),
                ..Default::default()
            })
            .filter(wilders::Column::Id.eq(id))
            .filter(changed)
            .exec(&self.db)
            .await?;

        Ok(result.rows_affected > 0)
    }

    async fn delete_by_id(&self, id: &WilderId) -> StoreResult<bool> {
        let id = Self::parse_id(id)?;
        let result = wilders::Entity::delete_by_id(id).exec(&self.db).await?;
        Ok(result.rows_affected > 0)
    }

    async fn close(&self) -> StoreResult<()> {
        self.db.clone().close().await?;
        Ok(())
    }
}
