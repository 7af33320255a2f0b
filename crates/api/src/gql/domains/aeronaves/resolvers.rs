use async_graphql::{Context, Object, Result, ID};

use infra::repos::aeronaves;

use super::service;
use super::types::{Aeronave, AeronaveInput};
use crate::gql::error::report;
use crate::state::AppState;

#[derive(Default)]
pub struct AeronaveQuery;

#[Object]
impl AeronaveQuery {
    /// All aircraft in insertion order.
    async fn aeronaves(&self, ctx: &Context<'_>) -> Result<Vec<Aeronave>> {
        let state = ctx.data::<AppState>()?;
        let rows = aeronaves::list(&state.db).await?;
        Ok(rows.into_iter().map(Aeronave::from).collect())
    }

    /// A single aircraft, or `null` when the id matches nothing.
    async fn aeronave(&self, ctx: &Context<'_>, id: ID) -> Result<Option<Aeronave>> {
        let state = ctx.data::<AppState>()?;
        let Some(id) = service::parse_id(&id) else {
            return Ok(None);
        };
        let row = aeronaves::get_by_id(&state.db, id).await?;
        Ok(row.map(Aeronave::from))
    }
}

#[derive(Default)]
pub struct AeronaveMutation;

#[Object]
impl AeronaveMutation {
    async fn create_aeronave(
        &self,
        ctx: &Context<'_>,
        aeronave: AeronaveInput,
    ) -> Result<Option<Aeronave>> {
        let state = ctx.data::<AppState>()?;
        let row = service::create(&state.db, aeronave).await.map_err(report)?;
        Ok(Some(row.into()))
    }

    /// Replace the given fields; absent fields keep their value, explicit `null` clears one.
    async fn update_aeronave(
        &self,
        ctx: &Context<'_>,
        id: ID,
        aeronave: AeronaveInput,
    ) -> Result<Option<Aeronave>> {
        let state = ctx.data::<AppState>()?;
        let row = service::update(&state.db, &id, aeronave)
            .await
            .map_err(report)?;
        Ok(Some(row.into()))
    }

    /// Returns the deleted record.
    async fn delete_aeronave(&self, ctx: &Context<'_>, id: ID) -> Result<Option<Aeronave>> {
        let state = ctx.data::<AppState>()?;
        let row = service::delete(&state.db, &id).await.map_err(report)?;
        Ok(Some(row.into()))
    }
}
