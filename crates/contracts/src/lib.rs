pub mod landing;
pub mod metrics;
pub mod system;
