//! Service layer: orchestration between the API surface, the domain
//! registry, and the planning engines.

pub mod planning_service;

pub use planning_service::PlanningService;
