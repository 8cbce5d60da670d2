//! SQLite-backed `HoldingsStore` using Diesel.

use async_trait::async_trait;
use diesel::prelude::*;
use diesel_async::RunQueryDsl;
use tracing::warn;

use crate::domain::ports::{HoldingsStore, HoldingsStoreError};
use crate::domain::{AssetClass, Holding, HoldingId, NewHolding, Username};

use super::diesel_basic_error_mapping::{map_basic_diesel_error, map_basic_pool_error};
use super::models::{HoldingRow, NewHoldingRow};
use super::pool::{DbPool, PoolError};
use super::schema::portfolio;

/// Diesel-backed implementation of the holdings store port.
#[derive(Clone)]
pub struct DieselHoldingsStore {
    pool: DbPool,
}

impl DieselHoldingsStore {
    pub fn new(pool: DbPool) -> Self {
        Self { pool }
    }
}

fn map_pool_error(error: PoolError) -> HoldingsStoreError {
    map_basic_pool_error(error, |message| HoldingsStoreError::connection(message))
}

fn map_diesel_error(error: diesel::result::Error) -> HoldingsStoreError {
    map_basic_diesel_error(
        error,
        HoldingsStoreError::query,
        HoldingsStoreError::connection,
    )
}

/// Convert a row into a domain holding.
///
/// Labels outside the fixed set were never written by this service; they
/// load as `Others` so one stray row cannot hide a whole portfolio.
fn row_to_holding(row: HoldingRow) -> Result<Holding, HoldingsStoreError> {
    let HoldingRow {
        id,
        username,
        asset_name,
        asset_type,
        current_value,
        added_date,
    } = row;

    let owner = Username::new(&username)
        .map_err(|err| HoldingsStoreError::query(format!("holding {id}: {err}")))?;
    let asset_class = asset_type.parse::<AssetClass>().unwrap_or_else(|_| {
        warn!(holding_id = id, asset_type = %asset_type, "unknown asset type loaded as Others");
        AssetClass::Others
    });

    Ok(Holding::from_parts(
        HoldingId::new(id),
        owner,
        asset_name,
        asset_class,
        current_value,
        added_date,
    ))
}

#[async_trait]
impl HoldingsStore for DieselHoldingsStore {
    async fn add(&self, owner: &Username, holding: &NewHolding) -> Result<(), HoldingsStoreError> {
        let mut conn = self.pool.get().await.map_err(map_pool_error)?;
        let row = NewHoldingRow {
            username: owner.as_ref(),
            asset_name: holding.asset_name(),
            asset_type: holding.asset_class().label(),
            current_value: holding.value(),
        };
        diesel::insert_into(portfolio::table)
            .values(&row)
            .execute(&mut conn)
            .await
            .map_err(map_diesel_error)?;
        Ok(())
    }

    async fn list(&self, owner: &Username) -> Result<Vec<Holding>, HoldingsStoreError> {
        let mut conn = self.pool.get().await.map_err(map_pool_error)?;
        let rows: Vec<HoldingRow> = portfolio::table
            .filter(portfolio::username.eq(owner.as_ref()))
            .order(portfolio::id.asc())
            .select(HoldingRow::as_select())
            .load(&mut conn)
            .await
            .map_err(map_diesel_error)?;
        rows.into_iter().map(row_to_holding).collect()
    }

    async fn delete(&self, id: HoldingId) -> Result<(), HoldingsStoreError> {
        let mut conn = self.pool.get().await.map_err(map_pool_error)?;
        diesel::delete(portfolio::table.filter(portfolio::id.eq(id.get())))
            .execute(&mut conn)
            .await
            .map_err(map_diesel_error)?;
        Ok(())
    }
}
