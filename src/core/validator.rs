use crate::domain::model::{MacAddress, MacNotation};
use crate::utils::error::{ResolverError, Result};
use regex::Regex;
use std::sync::LazyLock;

pub const WRONG_FORMAT_MESSAGE: &str = "Wrong format of MAC address! Provide correct MAC address in \
the following format: XX:XX:XX:XX:XX:XX where X represents the hexadecimal digit";

// regex 不支援反向引用，所以五個分隔符各自擷取，之後再比對是否一致
static MAC_PATTERN: LazyLock<Regex> = LazyLock::new(|| {
    Regex::new(
        r"^[0-9a-f]{2}([-:.]?)[0-9a-f]{2}([-:.]?)[0-9a-f]{2}([-:.]?)[0-9a-f]{2}([-:.]?)[0-9a-f]{2}([-:.]?)[0-9a-f]{2}$",
    )
    .unwrap()
});

fn wrong_format() -> ResolverError {
    ResolverError::WrongFormat {
        message: WRONG_FORMAT_MESSAGE.to_string(),
    }
}

/// Checks `candidate` against the accepted MAC address spellings.
///
/// Six pairs of hex digits, any case, joined by `:`, `-`, `.` or nothing. Whatever
/// separator appears first must be used at every position.
pub fn validate_mac(candidate: &str) -> Result<MacAddress> {
    let lowered = candidate.to_ascii_lowercase();
    let caps = MAC_PATTERN.captures(&lowered).ok_or_else(wrong_format)?;

    let first = caps.get(1).map_or("", |m| m.as_str());
    let consistent = (2..=5).all(|i| caps.get(i).map_or("", |m| m.as_str()) == first);
    if !consistent {
        return Err(wrong_format());
    }

    let notation = MacNotation::from_separator(first).ok_or_else(wrong_format)?;
    Ok(MacAddress::from_validated(candidate, notation))
}
