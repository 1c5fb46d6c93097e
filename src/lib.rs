//! normalise-email — canonicalise email addresses for deduplication.
//!
//! Splits an address on its last `@`, lowercases the domain, and applies
//! provider-specific local-part rules (Gmail, iCloud, Outlook.com, Yahoo,
//! Yandex) so that spellings of the same mailbox compare equal:
//!
//! ```
//! use normalise_email::{normalise_email, Config};
//!
//! let cfg = Config::default();
//! assert_eq!(
//!     normalise_email("Some.Name+tag@GoogleMail.com", &cfg).as_deref(),
//!     Some("somename@gmail.com"),
//! );
//! assert_eq!(normalise_email("not-an-address", &cfg), None);
//! ```
//!
//! Provider identity comes purely from static hostname tables; there is no
//! RFC 5321/5322 validation, no punycode handling, and no network lookup.

mod address;
mod config;
mod normalizer;
mod providers;

pub use config::Config;
pub use normalizer::normalise_email;
