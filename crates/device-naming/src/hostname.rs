//! Hostname parser
//!
//! Device names follow a fixed positional convention:
//!
//! ```text
//! R FUL 01 AC 02 -ACT ...
//! | |   |  |  |   |    free text, ignored
//! | |   |  |  |   status code (ACT|STB|OLD), optional, optional leading '-'
//! | |   |  |  index, 2 digits
//! | |   |  subrole code, 2 chars
//! | |   floor, 2 digits
//! | site code, 3 chars
//! role code, 1 char
//! ```
//!
//! A name that does not fit this shape is not an error: it parses to
//! [`ParsedHostname::Unmatched`] and simply yields no tags downstream.

use crate::codes::{CodeLabel, ROLES, STATUSES, SUBROLES};
use crate::error::NamingError;
use regex::{Captures, Regex};
use std::sync::LazyLock;

/// Anything after the status code is free text, but it must stay on one line.
static HOSTNAME_PATTERN: LazyLock<Regex> = LazyLock::new(|| {
    Regex::new(
        r"^(?P<role>\w)(?P<site>\w{3})(?P<floor>[0-9]{2})(?P<subrole>\w{2})(?P<index>[0-9]{2})-?(?P<status>ACT|STB|OLD)?(?-s).*$",
    )
    .expect("Invalid hostname pattern")
});

/// Properties decoded from a hostname that follows the naming convention
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct HostnameProps {
    pub role: CodeLabel,
    pub site: String,
    pub floor: u8,
    pub subrole: CodeLabel,
    pub index: u8,
    pub status: Option<CodeLabel>,
}

impl HostnameProps {
    /// Re-encode the short-code prefix (free text after the status is not recoverable)
    pub fn encode(&self) -> String {
        let mut encoded = format!(
            "{}{}{:02}{}{:02}",
            self.role.code(),
            self.site,
            self.floor,
            self.subrole.code(),
            self.index
        );
        if let Some(status) = &self.status {
            encoded.push('-');
            encoded.push_str(status.code());
        }
        encoded
    }
}

/// Outcome of parsing a hostname
///
/// Either every positional field was captured or none was.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum ParsedHostname {
    Matched(HostnameProps),
    Unmatched,
}

impl ParsedHostname {
    /// Decoded properties, if the hostname matched
    pub fn props(&self) -> Option<&HostnameProps> {
        match self {
            ParsedHostname::Matched(props) => Some(props),
            ParsedHostname::Unmatched => None,
        }
    }

    pub fn is_matched(&self) -> bool {
        matches!(self, ParsedHostname::Matched(_))
    }

    /// Subrole label (long form, or raw code when unknown)
    pub fn subrole(&self) -> Option<&str> {
        self.props().map(|props| props.subrole.name())
    }

    pub fn index(&self) -> Option<u8> {
        self.props().map(|props| props.index)
    }
}

impl AsRef<ParsedHostname> for ParsedHostname {
    fn as_ref(&self) -> &ParsedHostname {
        self
    }
}

/// Parse a device name into its naming-convention properties
///
/// # Returns
/// * `Ok(ParsedHostname::Matched(..))` - The name follows the convention
/// * `Ok(ParsedHostname::Unmatched)` - The name does not follow the convention
/// * `Err(NamingError)` - A numeric field could not be converted
pub fn parse_hostname(hostname: &str) -> Result<ParsedHostname, NamingError> {
    let Some(caps) = HOSTNAME_PATTERN.captures(hostname) else {
        return Ok(ParsedHostname::Unmatched);
    };

    let floor = parse_number(hostname, "floor", group(&caps, "floor"))?;
    let index = parse_number(hostname, "index", group(&caps, "index"))?;

    Ok(ParsedHostname::Matched(HostnameProps {
        role: CodeLabel::resolve(&ROLES, group(&caps, "role")),
        site: group(&caps, "site").to_string(),
        floor,
        subrole: CodeLabel::resolve(&SUBROLES, group(&caps, "subrole")),
        index,
        status: caps
            .name("status")
            .map(|status| CodeLabel::resolve(&STATUSES, status.as_str())),
    }))
}

fn group<'h>(caps: &Captures<'h>, name: &str) -> &'h str {
    caps.name(name).map_or("", |m| m.as_str())
}

fn parse_number(hostname: &str, field: &'static str, value: &str) -> Result<u8, NamingError> {
    value.parse().map_err(|source| NamingError::InvalidNumber {
        hostname: hostname.to_string(),
        field,
        value: value.to_string(),
        source,
    })
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::codes::*;

    fn props(hostname: &str) -> HostnameProps {
        match parse_hostname(hostname).expect("hostname should parse") {
            ParsedHostname::Matched(props) => props,
            ParsedHostname::Unmatched => panic!("{hostname} should match the naming pattern"),
        }
    }

    #[test]
    fn test_parse_full_hostname() {
        let props = props("RFUL01AC02-ACT-extra");
        assert_eq!(props.role.name(), "router");
        assert_eq!(props.site, "FUL");
        assert_eq!(props.floor, 1);
        assert_eq!(props.subrole.name(), ACCESS_SWITCH);
        assert_eq!(props.index, 2);
        assert_eq!(props.status.as_ref().map(CodeLabel::name), Some(ACTIVE));
    }

    #[test]
    fn test_parse_without_status() {
        let props = props("SNYC12DS01");
        assert_eq!(props.role.name(), "switch");
        assert_eq!(props.site, "NYC");
        assert_eq!(props.floor, 12);
        assert_eq!(props.subrole.name(), DISTRIBUTION_SWITCH);
        assert_eq!(props.index, 1);
        assert!(props.status.is_none());
    }

    #[test]
    fn test_parse_status_without_separator() {
        let props = props("SNYC12DS01STB");
        assert_eq!(props.status.as_ref().map(CodeLabel::name), Some(STANDBY));
    }

    #[test]
    fn test_unknown_status_text_is_free_text() {
        let props = props("SNYC12DS01-XYZ.example.net");
        assert!(props.status.is_none());
    }

    #[test]
    fn test_unknown_codes_are_kept_verbatim() {
        let props = props("XLON03QQ07-OLD");
        assert_eq!(props.role, CodeLabel::Raw("X".to_string()));
        assert_eq!(props.subrole, CodeLabel::Raw("QQ".to_string()));
        assert_eq!(props.status.as_ref().map(CodeLabel::name), Some("legacy"));
    }

    #[test]
    fn test_short_name_does_not_match() {
        assert_eq!(parse_hostname("shortname").expect("no error"), ParsedHostname::Unmatched);
        assert_eq!(parse_hostname("").expect("no error"), ParsedHostname::Unmatched);
        assert_eq!(parse_hostname("RFUL01AC0").expect("no error"), ParsedHostname::Unmatched);
    }

    #[test]
    fn test_non_digit_floor_does_not_match() {
        assert_eq!(parse_hostname("RFULxxAC02").expect("no error"), ParsedHostname::Unmatched);
    }

    #[test]
    fn test_match_is_start_anchored() {
        assert_eq!(parse_hostname("-RFUL01AC02").expect("no error"), ParsedHostname::Unmatched);
    }

    #[test]
    fn test_trailing_text_must_stay_on_one_line() {
        assert_eq!(parse_hostname("RFUL01AC02\nx").expect("no error"), ParsedHostname::Unmatched);
        assert!(parse_hostname("RFUL01AC02 spare").expect("no error").is_matched());
    }

    #[test]
    fn test_codes_round_trip() {
        for hostname in [
            "RFUL01AC02-ACT",
            "SNYC12DS01",
            "WLON03WC09-STB",
            "OBER99WO01-OLD",
            "VPAR00VG10",
        ] {
            let props = props(hostname);
            assert_eq!(props.encode(), hostname);
            assert_eq!(ROLES.code_for(props.role.name()), Some(props.role.code()));
            assert_eq!(SUBROLES.code_for(props.subrole.name()), Some(props.subrole.code()));
            if let Some(status) = &props.status {
                assert_eq!(STATUSES.code_for(status.name()), Some(status.code()));
            }
        }
    }

    #[test]
    fn test_accessors() {
        let parsed = parse_hostname("SNYC12CR02").expect("should parse");
        assert!(parsed.is_matched());
        assert_eq!(parsed.subrole(), Some(CORE_ROUTER));
        assert_eq!(parsed.index(), Some(2));

        let unmatched = ParsedHostname::Unmatched;
        assert!(!unmatched.is_matched());
        assert_eq!(unmatched.subrole(), None);
        assert_eq!(unmatched.index(), None);
    }
}
