//! Presentation layer: screen-facing adapters over the session manager.

/// Sign-in and sign-up forms.
pub mod forms;
/// Tab screen view model.
pub mod member_view;
/// Session-driven routing.
pub mod navigation;

pub use forms::{FormError, LoginForm, RegisterForm};
pub use member_view::{MemberSummary, MemberView, MonthHistory};
pub use navigation::{Navigator, Route};
