pub mod endpoints;
pub mod presenter;
pub mod source;
pub mod surface;

#[cfg(feature = "http")]
pub mod api;

#[cfg(feature = "http")]
pub use api::ApiClient;
pub use presenter::{Outcome, Presenter};
pub use source::DetailsSource;
pub use surface::DetailsSurface;
