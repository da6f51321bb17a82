pub mod credentials;
pub mod dashboard;
pub mod forms;
pub mod media;
pub mod navigation;

pub use credentials::AdminCredentials;
pub use dashboard::DashboardStats;
pub use media::MediaItem;
pub use navigation::SidebarLink;
