//! Postgres-backed floor-plan storage.
//!
//! Layouts, capacity ranges, and seating properties are stored as JSONB and
//! decoded on read; a layout that no longer validates surfaces as
//! [`BackendError::Layout`]. Seating areas are removed by the
//! `ON DELETE CASCADE` foreign key when their floor plan is deleted.

#[cfg(test)]
#[path = "postgres_test.rs"]
mod tests;

use canvas::element::CapacityRange;
use canvas::layout::LayoutDocument;
use serde_json::Value;
use sqlx::PgPool;
use tracing::info;
use uuid::Uuid;

use super::{
    BackendError, FloorPlanBackend, FloorPlanRecord, FloorPlanSummary, NewFloorPlan, SeatingArea, SeatingAreaRecord,
    SeatingProperties,
};

type FloorPlanRow = (Uuid, Uuid, String, bool, Value, Option<Uuid>);
type SeatingAreaRow = (Uuid, Uuid, String, Value, String, f64, f64, Value);

#[derive(Debug, Clone)]
pub struct PgBackend {
    pool: PgPool,
}

impl PgBackend {
    #[must_use]
    pub fn new(pool: PgPool) -> Self {
        Self { pool }
    }
}

fn floor_plan_from_row(row: FloorPlanRow) -> Result<FloorPlanRecord, BackendError> {
    let (id, restaurant_id, name, is_default, layout, created_by) = row;
    Ok(FloorPlanRecord { id, restaurant_id, name, is_default, layout: LayoutDocument::from_value(layout)?, created_by })
}

fn seating_area_from_row(row: SeatingAreaRow) -> Result<SeatingAreaRecord, BackendError> {
    let (id, floor_plan_id, name, capacity_range, description, x, y, properties) = row;
    let capacity_range: CapacityRange = serde_json::from_value(capacity_range)?;
    let properties: SeatingProperties = serde_json::from_value(properties)?;
    Ok(SeatingAreaRecord {
        id,
        floor_plan_id,
        area: SeatingArea { name, capacity_range, description, x, y, properties },
    })
}

#[async_trait::async_trait]
impl FloorPlanBackend for PgBackend {
    async fn create_floor_plan(&self, new: NewFloorPlan) -> Result<FloorPlanRecord, BackendError> {
        let id = Uuid::new_v4();
        let layout = serde_json::to_value(&new.layout)?;
        let mut tx = self.pool.begin().await?;
        if new.is_default {
            sqlx::query("UPDATE floor_plans SET is_default = FALSE WHERE restaurant_id = $1 AND is_default")
                .bind(new.restaurant_id)
                .execute(&mut *tx)
                .await?;
        }
        sqlx::query(
            "INSERT INTO floor_plans (id, restaurant_id, name, is_default, layout, created_by)
             VALUES ($1, $2, $3, $4, $5, $6)",
        )
        .bind(id)
        .bind(new.restaurant_id)
        .bind(&new.name)
        .bind(new.is_default)
        .bind(&layout)
        .bind(new.created_by)
        .execute(&mut *tx)
        .await?;
        tx.commit().await?;

        info!(%id, restaurant_id = %new.restaurant_id, name = %new.name, "floor plan created");
        Ok(FloorPlanRecord {
            id,
            restaurant_id: new.restaurant_id,
            name: new.name,
            is_default: new.is_default,
            layout: new.layout,
            created_by: new.created_by,
        })
    }

    async fn get_floor_plan(&self, id: Uuid) -> Result<FloorPlanRecord, BackendError> {
        let row = sqlx::query_as::<_, FloorPlanRow>(
            "SELECT id, restaurant_id, name, is_default, layout, created_by
             FROM floor_plans
             WHERE id = $1",
        )
        .bind(id)
        .fetch_optional(&self.pool)
        .await?
        .ok_or(BackendError::FloorPlanNotFound(id))?;
        floor_plan_from_row(row)
    }

    async fn update_floor_plan(&self, id: Uuid, name: &str, layout: &LayoutDocument) -> Result<(), BackendError> {
        let layout = serde_json::to_value(layout)?;
        let result = sqlx::query("UPDATE floor_plans SET name = $2, layout = $3, updated_at = now() WHERE id = $1")
            .bind(id)
            .bind(name)
            .bind(&layout)
            .execute(&self.pool)
            .await?;
        if result.rows_affected() == 0 {
            return Err(BackendError::FloorPlanNotFound(id));
        }
        Ok(())
    }

    async fn delete_floor_plan(&self, id: Uuid) -> Result<(), BackendError> {
        let result = sqlx::query("DELETE FROM floor_plans WHERE id = $1")
            .bind(id)
            .execute(&self.pool)
            .await?;
        if result.rows_affected() == 0 {
            return Err(BackendError::FloorPlanNotFound(id));
        }
        Ok(())
    }

    async fn list_floor_plans(&self, restaurant_id: Uuid) -> Result<Vec<FloorPlanSummary>, BackendError> {
        let rows = sqlx::query_as::<_, (Uuid, String, bool)>(
            "SELECT id, name, is_default
             FROM floor_plans
             WHERE restaurant_id = $1
             ORDER BY is_default DESC, name ASC",
        )
        .bind(restaurant_id)
        .fetch_all(&self.pool)
        .await?;

        Ok(rows
            .into_iter()
            .map(|(id, name, is_default)| FloorPlanSummary { id, name, is_default })
            .collect())
    }

    async fn set_default_floor_plan(&self, restaurant_id: Uuid, id: Uuid) -> Result<(), BackendError> {
        let mut tx = self.pool.begin().await?;
        let exists: bool =
            sqlx::query_scalar("SELECT EXISTS(SELECT 1 FROM floor_plans WHERE id = $1 AND restaurant_id = $2)")
                .bind(id)
                .bind(restaurant_id)
                .fetch_one(&mut *tx)
                .await?;
        if !exists {
            return Err(BackendError::FloorPlanNotFound(id));
        }
        // Clear first so the partial unique index never sees two defaults.
        sqlx::query("UPDATE floor_plans SET is_default = FALSE WHERE restaurant_id = $1 AND is_default AND id <> $2")
            .bind(restaurant_id)
            .bind(id)
            .execute(&mut *tx)
            .await?;
        sqlx::query("UPDATE floor_plans SET is_default = TRUE WHERE id = $1")
            .bind(id)
            .execute(&mut *tx)
            .await?;
        tx.commit().await?;
        Ok(())
    }

    async fn list_seating_areas(&self, floor_plan_id: Uuid) -> Result<Vec<SeatingAreaRecord>, BackendError> {
        let rows = sqlx::query_as::<_, SeatingAreaRow>(
            "SELECT id, floor_plan_id, name, capacity_range, description, x, y, properties
             FROM seating_areas
             WHERE floor_plan_id = $1
             ORDER BY name ASC, id ASC",
        )
        .bind(floor_plan_id)
        .fetch_all(&self.pool)
        .await?;

        rows.into_iter().map(seating_area_from_row).collect()
    }

    async fn create_seating_area(
        &self,
        floor_plan_id: Uuid,
        area: &SeatingArea,
    ) -> Result<SeatingAreaRecord, BackendError> {
        let id = Uuid::new_v4();
        sqlx::query(
            "INSERT INTO seating_areas (id, floor_plan_id, name, capacity_range, description, x, y, properties)
             VALUES ($1, $2, $3, $4, $5, $6, $7, $8)",
        )
        .bind(id)
        .bind(floor_plan_id)
        .bind(&area.name)
        .bind(serde_json::to_value(area.capacity_range)?)
        .bind(&area.description)
        .bind(area.x)
        .bind(area.y)
        .bind(serde_json::to_value(&area.properties)?)
        .execute(&self.pool)
        .await?;
        Ok(SeatingAreaRecord { id, floor_plan_id, area: area.clone() })
    }

    async fn update_seating_area(&self, id: Uuid, area: &SeatingArea) -> Result<(), BackendError> {
        let result = sqlx::query(
            "UPDATE seating_areas
             SET name = $2, capacity_range = $3, description = $4, x = $5, y = $6, properties = $7,
                 updated_at = now()
             WHERE id = $1",
        )
        .bind(id)
        .bind(&area.name)
        .bind(serde_json::to_value(area.capacity_range)?)
        .bind(&area.description)
        .bind(area.x)
        .bind(area.y)
        .bind(serde_json::to_value(&area.properties)?)
        .execute(&self.pool)
        .await?;
        if result.rows_affected() == 0 {
            return Err(BackendError::SeatingAreaNotFound(id));
        }
        Ok(())
    }

    async fn delete_seating_area(&self, id: Uuid) -> Result<(), BackendError> {
        let result = sqlx::query("DELETE FROM seating_areas WHERE id = $1")
            .bind(id)
            .execute(&self.pool)
            .await?;
        if result.rows_affected() == 0 {
            return Err(BackendError::SeatingAreaNotFound(id));
        }
        Ok(())
    }
}
