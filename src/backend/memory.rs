//! In-process floor-plan storage.
//!
//! Mirrors the Postgres schema's behavior (cascade on delete, a single
//! default per restaurant, foreign-key checks on seating areas) closely
//! enough to run the floor-plan services without a database.

#[cfg(test)]
#[path = "memory_test.rs"]
mod tests;

use std::collections::HashMap;
use std::sync::Arc;

use canvas::layout::LayoutDocument;
use tokio::sync::RwLock;
use uuid::Uuid;

use super::{
    BackendError, FloorPlanBackend, FloorPlanRecord, FloorPlanSummary, NewFloorPlan, SeatingArea, SeatingAreaRecord,
};

#[derive(Debug, Default)]
struct Tables {
    plans: HashMap<Uuid, FloorPlanRecord>,
    seating: HashMap<Uuid, SeatingAreaRecord>,
}

#[derive(Debug, Clone, Default)]
pub struct MemoryBackend {
    tables: Arc<RwLock<Tables>>,
}

impl MemoryBackend {
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Number of stored seating areas across all floor plans.
    pub async fn seating_area_count(&self) -> usize {
        self.tables.read().await.seating.len()
    }
}

#[async_trait::async_trait]
impl FloorPlanBackend for MemoryBackend {
    async fn create_floor_plan(&self, new: NewFloorPlan) -> Result<FloorPlanRecord, BackendError> {
        let record = FloorPlanRecord {
            id: Uuid::new_v4(),
            restaurant_id: new.restaurant_id,
            name: new.name,
            is_default: new.is_default,
            layout: new.layout,
            created_by: new.created_by,
        };
        let mut tables = self.tables.write().await;
        if record.is_default {
            for plan in tables.plans.values_mut().filter(|p| p.restaurant_id == record.restaurant_id) {
                plan.is_default = false;
            }
        }
        tables.plans.insert(record.id, record.clone());
        Ok(record)
    }

    async fn get_floor_plan(&self, id: Uuid) -> Result<FloorPlanRecord, BackendError> {
        self.tables
            .read()
            .await
            .plans
            .get(&id)
            .cloned()
            .ok_or(BackendError::FloorPlanNotFound(id))
    }

    async fn update_floor_plan(&self, id: Uuid, name: &str, layout: &LayoutDocument) -> Result<(), BackendError> {
        let mut tables = self.tables.write().await;
        let plan = tables.plans.get_mut(&id).ok_or(BackendError::FloorPlanNotFound(id))?;
        plan.name = name.to_owned();
        plan.layout = layout.clone();
        Ok(())
    }

    async fn delete_floor_plan(&self, id: Uuid) -> Result<(), BackendError> {
        let mut tables = self.tables.write().await;
        if tables.plans.remove(&id).is_none() {
            return Err(BackendError::FloorPlanNotFound(id));
        }
        tables.seating.retain(|_, area| area.floor_plan_id != id);
        Ok(())
    }

    async fn list_floor_plans(&self, restaurant_id: Uuid) -> Result<Vec<FloorPlanSummary>, BackendError> {
        let tables = self.tables.read().await;
        let mut plans: Vec<FloorPlanSummary> = tables
            .plans
            .values()
            .filter(|p| p.restaurant_id == restaurant_id)
            .map(|p| FloorPlanSummary { id: p.id, name: p.name.clone(), is_default: p.is_default })
            .collect();
        plans.sort_by(|a, b| b.is_default.cmp(&a.is_default).then_with(|| a.name.cmp(&b.name)));
        Ok(plans)
    }

    async fn set_default_floor_plan(&self, restaurant_id: Uuid, id: Uuid) -> Result<(), BackendError> {
        let mut tables = self.tables.write().await;
        if !tables.plans.get(&id).is_some_and(|p| p.restaurant_id == restaurant_id) {
            return Err(BackendError::FloorPlanNotFound(id));
        }
        for plan in tables.plans.values_mut().filter(|p| p.restaurant_id == restaurant_id) {
            plan.is_default = plan.id == id;
        }
        Ok(())
    }

    async fn list_seating_areas(&self, floor_plan_id: Uuid) -> Result<Vec<SeatingAreaRecord>, BackendError> {
        let tables = self.tables.read().await;
        let mut areas: Vec<SeatingAreaRecord> = tables
            .seating
            .values()
            .filter(|a| a.floor_plan_id == floor_plan_id)
            .cloned()
            .collect();
        areas.sort_by(|a, b| a.area.name.cmp(&b.area.name).then_with(|| a.id.cmp(&b.id)));
        Ok(areas)
    }

    async fn create_seating_area(
        &self,
        floor_plan_id: Uuid,
        area: &SeatingArea,
    ) -> Result<SeatingAreaRecord, BackendError> {
        let mut tables = self.tables.write().await;
        if !tables.plans.contains_key(&floor_plan_id) {
            return Err(BackendError::FloorPlanNotFound(floor_plan_id));
        }
        let record = SeatingAreaRecord { id: Uuid::new_v4(), floor_plan_id, area: area.clone() };
        tables.seating.insert(record.id, record.clone());
        Ok(record)
    }

    async fn update_seating_area(&self, id: Uuid, area: &SeatingArea) -> Result<(), BackendError> {
        let mut tables = self.tables.write().await;
        let record = tables.seating.get_mut(&id).ok_or(BackendError::SeatingAreaNotFound(id))?;
        record.area = area.clone();
        Ok(())
    }

    async fn delete_seating_area(&self, id: Uuid) -> Result<(), BackendError> {
        let mut tables = self.tables.write().await;
        tables
            .seating
            .remove(&id)
            .map(|_| ())
            .ok_or(BackendError::SeatingAreaNotFound(id))
    }
}
