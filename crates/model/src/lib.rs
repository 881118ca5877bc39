//! # Vendor Model
//!
//! The vendor listing schema shared by the directory search core and its
//! callers.
//!
//! Records originate in an external document store and arrive as loosely
//! shaped JSON: every descriptive field is optional, and numeric or
//! timestamp fields may hold values written by older application versions.
//! The types here keep that shape explicit (`Option<T>` everywhere) and
//! push the defensive parsing into accessor methods, so downstream scoring
//! can treat "absent" and "malformed" uniformly.

mod category;
mod record;

pub use category::{is_known_category, CATEGORIES};
pub use record::VendorRecord;
