use strum::VariantNames;

use super::error::AuthError;

/// Permission buckets a Studio token can be granted.
#[derive(
    Debug,
    Clone,
    Copy,
    PartialEq,
    Eq,
    strum::Display,
    strum::EnumString,
    strum::VariantNames,
)]
#[strum(serialize_all = "snake_case")]
pub enum TokenScope {
    Live,
    DvcExperiment,
    ViewUrl,
    Dql,
    DownloadModel,
}

/// Every scope, in the order a default login requests them.
pub const DEFAULT_SCOPES: [TokenScope; 5] = [
    TokenScope::Live,
    TokenScope::DvcExperiment,
    TokenScope::ViewUrl,
    TokenScope::Dql,
    TokenScope::DownloadModel,
];

/// Parse a comma-separated scope list, preserving order.
///
/// Unknown scope names fail before any network call so a typo surfaces here
/// rather than as an opaque server rejection.
pub fn parse_scopes(csv: &str) -> Result<Vec<TokenScope>, AuthError> {
    csv.split(',')
        .map(str::trim)
        .filter(|part| !part.is_empty())
        .map(|part| {
            part.parse::<TokenScope>().map_err(|_| {
                AuthError::InvalidScope(format!(
                    "{part} (available: {})",
                    TokenScope::VARIANTS.join(", ")
                ))
            })
        })
        .collect()
}
