//! UI Components
//!
//! One component per mini app view, plus the message banner.

mod loading_view;
mod registration_form;
mod dashboard_view;
mod message_banner;

pub use loading_view::LoadingView;
pub use registration_form::RegistrationForm;
pub use dashboard_view::DashboardView;
pub use message_banner::MessageBanner;
