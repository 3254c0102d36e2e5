pub mod banner;
pub mod card;
pub mod collapse;
pub mod slideshow;
pub mod star_rating;

pub use banner::Banner;
pub use card::Card;
pub use collapse::Collapse;
pub use slideshow::Slideshow;
pub use star_rating::StarRating;
