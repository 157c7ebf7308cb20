use async_graphql::*;

use crate::errors::ResultExt;
use crate::graphql::context::GraphQLContext;
use crate::graphql::types::Wilder;
use crate::store::WilderId;

pub struct Query;

#[Object]
impl Query {
    /// Get all wilders
    async fn get_all_wilders(&self, ctx: &Context<'_>) -> Result<Option<Vec<Option<Wilder>>>> {
        let context = ctx.data::<GraphQLContext>()?;
        let wilders = context.wilder_service.get_all_wilders().await.into_graphql()?;

        Ok(Some(
            wilders
                .into_iter()
                .map(|wilder| Some(Wilder::from(wilder)))
                .collect(),
        ))
    }

    /// Get a specific wilder by ID, null when it does not exist
    async fn get_one_wilder(&self, ctx: &Context<'_>, id: ID) -> Result<Option<Wilder>> {
        let context = ctx.data::<GraphQLContext>()?;
        let id = WilderId::parse(id.0).into_graphql()?;
        let wilder = context.wilder_service.get_one_wilder(&id).await.into_graphql()?;

        Ok(wilder.map(Wilder::from))
    }
}
