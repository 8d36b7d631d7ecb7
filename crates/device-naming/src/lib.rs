//! Device naming convention
//!
//! Pure transformations over device hostnames:
//!
//! - **Hostname parsing**: decode role, site, floor, subrole, index and status
//!   from a fixed positional naming convention
//! - **Tag derivation**: map parsed properties and the device model to NetBox tags
//! - **STP root selection**: pick primary/secondary root bridge candidates
//!
//! Nothing in this crate performs I/O.
//!
//! # Example
//!
//! ```
//! use device_naming::{derive_tags, parse_hostname, ParsedHostname};
//!
//! let parsed = parse_hostname("RFUL01CR01-ACT").unwrap();
//! assert!(parsed.is_matched());
//!
//! let tags = derive_tags("WS-C3850-24T", &parsed);
//! assert!(tags.contains("core-router"));
//! assert!(tags.contains("primary"));
//! assert!(tags.contains("access-switch"));
//!
//! assert_eq!(parse_hostname("shortname").unwrap(), ParsedHostname::Unmatched);
//! ```

pub mod codes;
pub mod error;
pub mod hostname;
pub mod stp;
pub mod tags;

pub use codes::{CodeLabel, CodeTable, NETBOX_TAGS, PLATFORM_TAGS};
pub use error::NamingError;
pub use hostname::{parse_hostname, HostnameProps, ParsedHostname};
pub use stp::{select_stp_roots, StpRoots};
pub use tags::{derive_tags, tags_to_add};
