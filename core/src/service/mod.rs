pub mod dto;
pub mod graph_service;
