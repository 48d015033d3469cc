pub mod api_utils;
pub mod browser;
pub mod components;
pub mod http;
pub mod icons;
pub mod list_controller;
pub mod list_utils;
pub mod notifications;
