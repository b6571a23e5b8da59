//! Backend wrappers for exercising failure paths in service tests.

use std::sync::Arc;
use std::sync::atomic::{AtomicBool, Ordering};

use canvas::layout::LayoutDocument;
use uuid::Uuid;

use super::memory::MemoryBackend;
use super::{
    BackendError, FloorPlanBackend, FloorPlanRecord, FloorPlanSummary, NewFloorPlan, SeatingArea, SeatingAreaRecord,
};

/// A [`MemoryBackend`] whose seating-area operations can be switched to fail
/// with `Unavailable`. Floor-plan operations are never affected.
#[derive(Debug, Clone, Default)]
pub struct FlakySeatingBackend {
    pub inner: MemoryBackend,
    fail_seating: Arc<AtomicBool>,
}

impl FlakySeatingBackend {
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    pub fn set_seating_failure(&self, fail: bool) {
        self.fail_seating.store(fail, Ordering::SeqCst);
    }

    fn check_seating(&self) -> Result<(), BackendError> {
        if self.fail_seating.load(Ordering::SeqCst) {
            return Err(BackendError::Unavailable("seating areas".into()));
        }
        Ok(())
    }
}

#[async_trait::async_trait]
impl FloorPlanBackend for FlakySeatingBackend {
    async fn create_floor_plan(&self, new: NewFloorPlan) -> Result<FloorPlanRecord, BackendError> {
        self.inner.create_floor_plan(new).await
    }

    async fn get_floor_plan(&self, id: Uuid) -> Result<FloorPlanRecord, BackendError> {
        self.inner.get_floor_plan(id).await
    }

    async fn update_floor_plan(&self, id: Uuid, name: &str, layout: &LayoutDocument) -> Result<(), BackendError> {
        self.inner.update_floor_plan(id, name, layout).await
    }

    async fn delete_floor_plan(&self, id: Uuid) -> Result<(), BackendError> {
        self.inner.delete_floor_plan(id).await
    }

    async fn list_floor_plans(&self, restaurant_id: Uuid) -> Result<Vec<FloorPlanSummary>, BackendError> {
        self.inner.list_floor_plans(restaurant_id).await
    }

    async fn set_default_floor_plan(&self, restaurant_id: Uuid, id: Uuid) -> Result<(), BackendError> {
        self.inner.set_default_floor_plan(restaurant_id, id).await
    }

    async fn list_seating_areas(&self, floor_plan_id: Uuid) -> Result<Vec<SeatingAreaRecord>, BackendError> {
        self.check_seating()?;
        self.inner.list_seating_areas(floor_plan_id).await
    }

    async fn create_seating_area(
        &self,
        floor_plan_id: Uuid,
        area: &SeatingArea,
    ) -> Result<SeatingAreaRecord, BackendError> {
        self.check_seating()?;
        self.inner.create_seating_area(floor_plan_id, area).await
    }

    async fn update_seating_area(&self, id: Uuid, area: &SeatingArea) -> Result<(), BackendError> {
        self.check_seating()?;
        self.inner.update_seating_area(id, area).await
    }

    async fn delete_seating_area(&self, id: Uuid) -> Result<(), BackendError> {
        self.check_seating()?;
        self.inner.delete_seating_area(id).await
    }
}
