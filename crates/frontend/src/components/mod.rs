pub mod breed_modal;
pub mod cat_image;
pub mod cat_image_modal;
pub mod error_boundary;

pub use breed_modal::BreedModal;
pub use cat_image::CatImageCard;
pub use cat_image_modal::CatImageModal;
pub use error_boundary::AppErrorBoundary;
