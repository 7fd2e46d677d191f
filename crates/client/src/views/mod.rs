mod accept_invitation;
mod activities;
mod auth_callback;
mod email_confirmed;
mod home;
mod landing;
mod layouts;
mod notifications;
mod profile_view;
mod requests;
mod reset_password;
mod sign_in;
mod update_password;

pub use accept_invitation::AcceptInvitation;
pub use activities::Activities;
pub use auth_callback::AuthCallback;
pub use email_confirmed::EmailConfirmed;
pub use home::Home;
pub use landing::Landing;
pub use layouts::AppLayout;
pub use notifications::Notifications;
pub use profile_view::ProfileView;
pub use requests::Requests;
pub use reset_password::ResetPassword;
pub use sign_in::SignIn;
pub use update_password::UpdatePassword;
