//! Data transfer objects for the REST API.

pub mod common_dto;
pub mod event_dto;
pub mod guest_dto;
pub mod seating_dto;
pub mod wedding_dto;

pub use common_dto::PaginationMeta;
pub use event_dto::{SubEventRequest, SubEventResponse, TimelineEntry, VendorAssignmentDto};
pub use guest_dto::{CreateGuestRequest, GuestResponse, RsvpRequest};
pub use seating_dto::{CreateTableRequest, SeatingPlanResponse, TableResponse};
pub use wedding_dto::{
    CreateWeddingRequest, CreateWeddingResponse, WeddingListParams, WeddingListResponse,
    WeddingSummaryDto,
};
