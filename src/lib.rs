// Enforce at crate level
#![deny(clippy::all)]
#![warn(clippy::pedantic)]
#![warn(clippy::nursery)]
#![allow(clippy::missing_errors_doc, clippy::missing_panics_doc)]

//! Unique Email Counter
//!
//! Normalizes email addresses the way common webmail providers route them
//! and counts how many distinct mailboxes a list of addresses reaches.
//!
//! # Rules
//!
//! - Everything from the first `+` in the local part is ignored
//! - Dots in the local part are ignored
//! - The domain is kept verbatim
//! - Matching is exact; there is no case folding
//!
//! # Example
//!
//! ```rust
//! use unique_email::{count_unique_normalized_emails, normalize_email};
//!
//! let emails = [
//!     "test.email+alex@leetcode.com",
//!     "test.e.mail+bob.cathy@leetcode.com",
//!     "testemail+david@lee.tcode.com",
//! ];
//! assert_eq!(count_unique_normalized_emails(emails)?, 2);
//!
//! let mailbox = normalize_email("first.last+news@example.com")?;
//! assert_eq!(mailbox.as_str(), "firstlast@example.com");
//! # Ok::<(), unique_email::NormalizeError>(())
//! ```

mod address;
mod counter;
mod error;

pub use address::{NormalizedEmail, RawEmail, normalize_email};
pub use counter::{MailboxSet, count_unique_normalized_emails};
pub use error::{NormalizeError, Result};
