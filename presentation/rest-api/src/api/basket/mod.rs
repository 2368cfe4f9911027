pub mod dto;
pub mod error_mapper;
pub mod mapper;
pub mod routes;
