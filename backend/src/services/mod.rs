pub mod profile_service;
pub mod query_service;
pub mod recommendation_service;
