pub mod ad_detail;
pub mod create_ad;
pub mod home;
pub mod login;
pub mod not_found;
pub mod settings;

pub use ad_detail::AdDetailPage;
pub use create_ad::CreateAdPage;
pub use home::HomePage;
pub use login::LoginPage;
pub use not_found::NotFoundPage;
pub use settings::SettingsPage;
