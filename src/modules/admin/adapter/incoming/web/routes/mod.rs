mod admin_forms;
mod admin_login;
mod get_dashboard;
mod get_navigation;
mod media;

pub use admin_forms::*;
pub use admin_login::*;
pub use get_dashboard::*;
pub use get_navigation::*;
pub use media::*;
