pub mod about;
pub mod apart;
pub mod home;
pub mod not_found;

pub use about::AboutPage;
pub use apart::ApartPage;
pub use home::HomePage;
pub use not_found::NotFoundPage;
