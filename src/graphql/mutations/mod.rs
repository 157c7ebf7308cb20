use async_graphql::*;

use crate::errors::ResultExt;
use crate::graphql::context::GraphQLContext;
use crate::graphql::types::{SkillInput, Wilder};
use crate::services::{CreateWilderRequest, UpdateWilderRequest};
use crate::store::{SkillFields, WilderId};

/// Null list entries are dropped, they carry no skill values
fn skill_fields(skills: Option<Vec<Option<SkillInput>>>) -> Option<Vec<SkillFields>> {
    skills.map(|skills| skills.into_iter().flatten().map(SkillFields::from).collect())
}

pub struct Mutation;

#[Object]
impl Mutation {
    /// Create a new wilder
    async fn create_one_wilder(
        &self,
        ctx: &Context<'_>,
        name: Option<String>,
        city: Option<String>,
        skills: Option<Vec<Option<SkillInput>>>,
    ) -> Result<Option<Wilder>> {
        let context = ctx.data::<GraphQLContext>()?;
        let request = CreateWilderRequest {
            name,
            city,
            skills: skill_fields(skills),
        };

        let wilder = context
            .wilder_service
            .create_one_wilder(request)
            .await
            .into_graphql()?;
        Ok(Some(Wilder::from(wilder)))
    }

    /// Replace name, city and skills of a wilder.
    ///
    /// Arguments left out are cleared rather than kept. Returns whether a
    /// document was modified.
    async fn update_one_wilder(
        &self,
        ctx: &Context<'_>,
        id: ID,
        name: Option<String>,
        city: Option<String>,
        skills: Option<Vec<Option<SkillInput>>>,
    ) -> Result<Option<bool>> {
        let context = ctx.data::<GraphQLContext>()?;
        let request = UpdateWilderRequest {
            id: WilderId::parse(id.0).into_graphql()?,
            name,
            city,
            skills: skill_fields(skills),
        };

        let modified = context
            .wilder_service
            .update_one_wilder(request)
            .await
            .into_graphql()?;
        Ok(Some(modified))
    }

    /// Delete a wilder, returns whether one was removed
    async fn delete_one_wilder(&self, ctx: &Context<'_>, id: ID) -> Result<Option<bool>> {
        let context = ctx.data::<GraphQLContext>()?;
        let id = WilderId::parse(id.0).into_graphql()?;

        let deleted = context
            .wilder_service
            .delete_one_wilder(&id)
            .await
            .into_graphql()?;
        Ok(Some(deleted))
    }
}
