pub mod badge;
pub mod button;
pub mod card;
pub mod error;
pub mod input;
pub mod loading;

pub use badge::Badge;
pub use button::Button;
pub use card::{Card, CardContent, CardImage};
pub use error::{ErrorFullPage, ErrorMessage};
pub use input::Input;
pub use loading::{Loading, LoadingSection};
