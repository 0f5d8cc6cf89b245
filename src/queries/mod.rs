pub mod contact_queries;
pub mod favorites_queries;
