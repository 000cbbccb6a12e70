pub mod api_response;
pub mod battle;
pub mod settings;
