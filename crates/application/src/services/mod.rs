//! Application services

mod ask_service;

pub use ask_service::AskService;
