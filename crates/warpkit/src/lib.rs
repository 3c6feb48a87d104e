#![deny(missing_docs)]
#![doc = include_str!("../README.md")]

/// Caller-held configuration of the transformations.
pub mod config;

/// The transform requests and their matrix construction.
pub mod request;

/// The stateless facade running the transformations.
pub mod transformer;

pub use config::TransformConfig;
pub use request::TransformRequest;
pub use transformer::Transformer;

#[doc(inline)]
pub use warpkit_image as image;

#[doc(inline)]
pub use warpkit_imgproc as imgproc;

#[doc(inline)]
pub use warpkit_imgproc::warp::WarpError;
