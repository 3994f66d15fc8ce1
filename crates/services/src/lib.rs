#![forbid(unsafe_code)]

pub mod error;
pub mod theme_service;

pub use course_core::Clock;

pub use error::ThemeServiceError;
pub use theme_service::ThemeService;
