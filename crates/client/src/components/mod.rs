pub mod notifications;
pub mod toast;
pub mod ui;

pub use toast::ToastHost;
