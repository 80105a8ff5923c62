//! # Steiny Core
//!
//! Static content catalog, page view-state, subscription gate and upload
//! targets for the Steiny B's site. Nothing in this crate performs I/O.

pub mod catalog;
pub mod error;
pub mod gate;
pub mod media;
pub mod page;
pub mod site;
pub mod upload;

pub use catalog::{Catalog, ImageRef, MenuCategory, MenuItem};
pub use error::{GateError, UploadError};
pub use gate::{AuthFlag, GateDecision, SubscriptionGate};
pub use page::{HomePage, MobileMenu, SectionBounds, SectionId, ViewState};
pub use site::SiteInfo;
pub use upload::UploadTarget;
