pub mod client;
pub mod error;
pub mod normalize;
pub mod page;
pub mod pagination;
pub mod photo;
pub mod readiness;
pub mod types;

pub use client::PlacesClient;
pub use error::PlacesError;
pub use page::{PageSource, PageStatus, SearchPage};
pub use pagination::{ExploreView, Explorer, Navigation, PaginationState};
pub use photo::build_photo_url;
pub use readiness::ReadinessPolicy;
pub use types::{PlacePrediction, SearchStatus};
