//! UI components rendering from `AppState`

pub mod home;
pub mod status_bar;
