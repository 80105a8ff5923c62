pub mod renderer;
pub mod upload_relay;

pub use renderer::PageRenderer;
pub use upload_relay::{UploadReceipt, UploadRelay, UploadRequest};
