use async_trait::async_trait;
use futures_util::TryStreamExt;
use mongodb::bson::{doc, oid::ObjectId};
use mongodb::{Client, Collection};
use serde::{Deserialize, Serialize};

use super::{Skill, SkillFields, Wilder, WilderFields, WilderId, WilderStore};
use crate::errors::{StoreError, StoreResult};

const DEFAULT_DATABASE: &str = "wilderdb";
const COLLECTION: &str = "wilders";

#[derive(Debug, Serialize, Deserialize, Clone)]
struct SkillDocument {
    #[serde(rename = "_id", skip_serializing_if = "Option::is_none")]
    id: Option<ObjectId>,
    title: Option<String>,
    votes: Option<i32>,
}

#[derive(Debug, Serialize, Deserialize, Clone)]
struct WilderDocument {
    #[serde(rename = "_id")]
    id: ObjectId,
    name: Option<String>,
    city: Option<String>,
    #[serde(default)]
    skills: Vec<SkillDocument>,
}

impl From<SkillFields> for SkillDocument {
    fn from(fields: SkillFields) -> Self {
        Self {
            id: Some(ObjectId::new()),
            title: fields.title,
            votes: fields.votes,
        }
    }
}

impl From<WilderDocument> for Wilder {
    fn from(document: WilderDocument) -> Self {
        Self {
            id: document.id.to_hex(),
            name: document.name,
            city: document.city,
            skills: document
                .skills
                .into_iter()
                .map(|skill| Skill {
                    id: skill.id.map(|id| id.to_hex()),
                    title: skill.title,
                    votes: skill.votes,
                })
                .collect(),
        }
    }
}

/// MongoDB-backed store using ObjectId identifiers
#[derive(Clone)]
pub struct MongoWilderStore {
    client: Client,
    collection: Collection<WilderDocument>,
}

impl MongoWilderStore {
    /// Connect using a `mongodb://host:port/database` connection string.
    /// Falls back to the `wilderdb` database when the string names none.
    pub async fn connect(database_url: &str) -> StoreResult<Self> {
        let client = Client::with_uri_str(database_url).await?;
        let database = client
            .default_database()
            .unwrap_or_else(|| client.database(DEFAULT_DATABASE));

        // The driver connects lazily, ping so a bad address fails at startup
        database.run_command(doc! { "ping": 1 }, None).await?;

        let collection = database.collection::<WilderDocument>(COLLECTION);
        Ok(Self { client, collection })
    }

    fn parse_id(id: &WilderId) -> StoreResult<ObjectId> {
        ObjectId::parse_str(id.as_str()).map_err(|_| StoreError::InvalidId(id.to_string()))
    }

    fn skill_documents(skills: Vec<SkillFields>) -> Vec<SkillDocument> {
        skills.into_iter().map(SkillDocument::from).collect()
    }
}

#[async_trait]
impl WilderStore for MongoWilderStore {
    fn backend(&self) -> &'static str {
        "mongodb"
    }

    async fn find_all(&self) -> StoreResult<Vec<Wilder>> {
        let cursor = self.collection.find(None, None).await?;
        let documents: Vec<WilderDocument> = cursor.try_collect().await?;
        Ok(documents.into_iter().map(Wilder::from).collect())
    }

    async fn find_by_id(&self, id: &WilderId) -> StoreResult<Option<Wilder>> {
        let id = Self::parse_id(id)?;
        let document = self.collection.find_one(doc! { "_id": id }, None).await?;
        Ok(document.map(Wilder::from))
    }

    async fn insert(&self, fields: WilderFields) -> StoreResult<Wilder> {
        let document = WilderDocument {
            id: ObjectId::new(),
            name: fields.name,
            city: fields.city,
            skills: Self::skill_documents(fields.skills),
        };

        self.collection.insert_one(&document, None).await?;
        Ok(Wilder::from(document))
    }

    async fn update_by_id(&self, id: &WilderId, fields: WilderFields) -> StoreResult<bool> {
        let id = Self::parse_id(id)?;
        let skills = mongodb::bson::to_bson(&Self::skill_documents(fields.skills))
            .map_err(mongodb::error::Error::from)?;

        let result = self
            .collection
            .update_one(
                doc! { "_id": id },
                doc! { "$set": { "name": fields.name, "city": fields.city, "skills": skills } },
                None,
            )
            .await?;

        Ok(result.modified_count > 0)
    }

    async fn delete_by_id(&self, id: &WilderId) -> StoreResult<bool> {
        let id = Self::parse_id(id)?;
        let result = self.collection.delete_one(doc! { "_id": id }, None).await?;
        Ok(result.deleted_count > 0)
    }

    async fn close(&self) -> StoreResult<()> {
        self.client.clone().shutdown().await;
        Ok(())
    }
}
