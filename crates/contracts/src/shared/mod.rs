pub mod api_status;
pub mod error;
pub mod pagination;

pub use api_status::ApiStatus;
pub use error::ApiError;
pub use pagination::{has_more_images, update_image_collection, FeedView, ImageFeed};
