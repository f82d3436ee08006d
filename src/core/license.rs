//! core::license
//!
//! Mapping from questionnaire answers to a Creative Commons license.
//!
//! # Rules
//!
//! Every code starts with `CC BY`. NonCommercial (`-NC`) is appended before
//! ShareAlike (`-SA`) or NoDerivs (`-ND`), so the token order is always
//! BY → NC → {SA|ND}. SA and ND come from the same answer and never appear
//! together.
//!
//! # Example
//!
//! ```
//! use cc_advisor::core::license::derive_license;
//! use cc_advisor::core::types::{AdaptationChoice, CommercialChoice};
//!
//! let license = derive_license(AdaptationChoice::AllowShareAlike, CommercialChoice::Disallow);
//! assert_eq!(license.code, "CC BY-NC-SA");
//! assert_eq!(license.display_name, "CC BY-NC-SA 4.0");
//! assert_eq!(license.url, "https://creativecommons.org/licenses/by-nc-sa/4.0/");
//! ```

use super::types::{AdaptationChoice, AttributionRequest, CommercialChoice};

/// Code prefix shared by every license (attribution is always required).
pub const ATTRIBUTION_PREFIX: &str = "CC BY";

/// License suite version.
pub const LICENSE_VERSION: &str = "4.0";

/// Base of the canonical license deed URLs.
pub const LICENSE_BASE_URL: &str = "https://creativecommons.org/licenses/";

/// A derived license.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct LicenseResult {
    /// Short code, e.g. `CC BY-NC-SA`.
    pub code: String,
    /// Code with version, e.g. `CC BY-NC-SA 4.0`.
    pub display_name: String,
    /// Canonical deed URL.
    pub url: String,
}

impl LicenseResult {
    /// Build a result from a license code, filling in name and URL.
    fn from_code(code: String) -> Self {
        let display_name = format!("{} {}", code, LICENSE_VERSION);
        let url = format!("{}{}/{}/", LICENSE_BASE_URL, slug(&code), LICENSE_VERSION);
        Self {
            code,
            display_name,
            url,
        }
    }

    /// Render the attribution line for a work under this license.
    pub fn attribution(&self, request: &AttributionRequest) -> String {
        format!(
            "\"{}\" © {}, {} lisansı altında lisanslanmıştır. \
             Bu lisansın bir kopyasını görüntülemek için {} adresini ziyaret edin.",
            request.work_title, request.author_name, self.display_name, self.url
        )
    }
}

/// Derive the license matching the two answers.
pub fn derive_license(adaptation: AdaptationChoice, commercial: CommercialChoice) -> LicenseResult {
    let mut code = String::from(ATTRIBUTION_PREFIX);

    if commercial == CommercialChoice::Disallow {
        code.push_str("-NC");
    }

    match adaptation {
        AdaptationChoice::AllowShareAlike => code.push_str("-SA"),
        AdaptationChoice::Disallow => code.push_str("-ND"),
        AdaptationChoice::Allow => {}
    }

    LicenseResult::from_code(code)
}

/// URL path segment for a license code.
///
/// Takes the part after the literal `CC ` prefix, lowercases it and drops
/// whitespace: `CC BY-NC-SA` becomes `by-nc-sa`.
pub fn slug(code: &str) -> String {
    let suffix = code.strip_prefix("CC ").unwrap_or(code);
    suffix
        .chars()
        .filter(|c| !c.is_whitespace())
        .flat_map(char::to_lowercase)
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;

    fn code(adaptation: AdaptationChoice, commercial: CommercialChoice) -> String {
        derive_license(adaptation, commercial).code
    }

    #[test]
    fn all_six_codes() {
        use AdaptationChoice as A;
        use CommercialChoice as C;

        assert_eq!(code(A::Allow, C::Allow), "CC BY");
        assert_eq!(code(A::Allow, C::Disallow), "CC BY-NC");
        assert_eq!(code(A::AllowShareAlike, C::Allow), "CC BY-SA");
        assert_eq!(code(A::AllowShareAlike, C::Disallow), "CC BY-NC-SA");
        assert_eq!(code(A::Disallow, C::Allow), "CC BY-ND");
        assert_eq!(code(A::Disallow, C::Disallow), "CC BY-NC-ND");
    }

    #[test]
    fn display_name_and_url() {
        let license = derive_license(AdaptationChoice::Disallow, CommercialChoice::Disallow);
        assert_eq!(license.display_name, "CC BY-NC-ND 4.0");
        assert_eq!(
            license.url,
            "https://creativecommons.org/licenses/by-nc-nd/4.0/"
        );
    }

    #[test]
    fn plain_by_url() {
        let license = derive_license(AdaptationChoice::Allow, CommercialChoice::Allow);
        assert_eq!(license.url, "https://creativecommons.org/licenses/by/4.0/");
    }

    #[test]
    fn derivation_is_deterministic() {
        let first = derive_license(AdaptationChoice::AllowShareAlike, CommercialChoice::Allow);
        let second = derive_license(AdaptationChoice::AllowShareAlike, CommercialChoice::Allow);
        assert_eq!(first, second);
    }

    #[test]
    fn slug_strips_prefix_and_whitespace() {
        assert_eq!(slug("CC BY"), "by");
        assert_eq!(slug("CC BY-NC-SA"), "by-nc-sa");
        assert_eq!(slug("CC BY - ND"), "by-nd");
    }

    #[test]
    fn slug_without_prefix_is_lowercased() {
        assert_eq!(slug("BY-SA"), "by-sa");
    }

    #[test]
    fn attribution_text() {
        let license = derive_license(AdaptationChoice::Allow, CommercialChoice::Allow);
        let text = license.attribution(&AttributionRequest::new("My Work", "Jane Doe"));
        assert_eq!(
            text,
            "\"My Work\" © Jane Doe, CC BY 4.0 lisansı altında lisanslanmıştır. \
             Bu lisansın bir kopyasını görüntülemek için \
             https://creativecommons.org/licenses/by/4.0/ adresini ziyaret edin."
        );
    }

    #[test]
    fn attribution_accepts_empty_fields() {
        let license = derive_license(AdaptationChoice::Allow, CommercialChoice::Disallow);
        let text = license.attribution(&AttributionRequest::default());
        assert!(text.starts_with("\"\" © , CC BY-NC 4.0"));
    }
}
