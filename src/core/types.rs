//! core::types
//!
//! Strong types for the questionnaire answers.
//!
//! # Types
//!
//! - [`AdaptationChoice`] - Whether adaptations of the work are allowed
//! - [`CommercialChoice`] - Whether commercial use is allowed
//! - [`Confirmation`] - Plain yes/no answer
//! - [`AttributionRequest`] - Work title and author for the attribution text
//!
//! # Menus
//!
//! Every answer type implements [`MenuChoice`], which lists its options in
//! display order. A menu is therefore built from the type itself and the
//! prompt hands back a typed value, never a bare key.
//!
//! # Examples
//!
//! ```
//! use cc_advisor::core::types::{AdaptationChoice, MenuChoice};
//!
//! assert_eq!(AdaptationChoice::from_key('s'), Some(AdaptationChoice::AllowShareAlike));
//! assert_eq!(AdaptationChoice::Disallow.key(), 'h');
//! assert_eq!(AdaptationChoice::from_key('x'), None);
//! ```

/// An answer that can be offered as a single-key menu option.
pub trait MenuChoice: Copy + Sized + 'static {
    /// All options, in the order they are shown.
    const ALL: &'static [Self];

    /// The single-character key the user types.
    fn key(self) -> char;

    /// Human-readable description shown next to the key.
    fn label(self) -> &'static str;

    /// Look up the option for a key. Keys compare case-insensitively.
    fn from_key(key: char) -> Option<Self> {
        let key = key.to_lowercase().next()?;
        Self::ALL
            .iter()
            .copied()
            .find(|choice| choice.key().to_lowercase().next() == Some(key))
    }
}

/// Permission to adapt (remix, transform, build upon) the work.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum AdaptationChoice {
    /// Adaptations are allowed without conditions.
    Allow,
    /// Adaptations are allowed if shared under the same license (ShareAlike).
    AllowShareAlike,
    /// No adaptations (NoDerivs).
    Disallow,
}

impl MenuChoice for AdaptationChoice {
    const ALL: &'static [Self] = &[Self::Allow, Self::AllowShareAlike, Self::Disallow];

    fn key(self) -> char {
        match self {
            Self::Allow => 'e',
            Self::AllowShareAlike => 's',
            Self::Disallow => 'h',
        }
    }

    fn label(self) -> &'static str {
        match self {
            Self::Allow => "Evet",
            Self::AllowShareAlike => {
                "Evet, başkaları da aynı şekilde paylaştığı sürece (ShareAlike)"
            }
            Self::Disallow => "Hayır (Türetilemez - NoDerivs)",
        }
    }
}

/// Permission for commercial use of the work.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum CommercialChoice {
    /// Commercial use is allowed.
    Allow,
    /// Commercial use is not allowed (NonCommercial).
    Disallow,
}

impl MenuChoice for CommercialChoice {
    const ALL: &'static [Self] = &[Self::Allow, Self::Disallow];

    fn key(self) -> char {
        match self {
            Self::Allow => 'e',
            Self::Disallow => 'h',
        }
    }

    fn label(self) -> &'static str {
        match self {
            Self::Allow => "Evet",
            Self::Disallow => "Hayır (Ticari Olmayan - NonCommercial)",
        }
    }
}

/// A yes/no answer.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Confirmation {
    Yes,
    No,
}

impl Confirmation {
    /// True for [`Confirmation::Yes`].
    pub fn is_yes(self) -> bool {
        self == Self::Yes
    }
}

impl MenuChoice for Confirmation {
    const ALL: &'static [Self] = &[Self::Yes, Self::No];

    fn key(self) -> char {
        match self {
            Self::Yes => 'e',
            Self::No => 'h',
        }
    }

    fn label(self) -> &'static str {
        match self {
            Self::Yes => "Evet",
            Self::No => "Hayır",
        }
    }
}

/// Details needed to render an attribution line.
///
/// Both fields are free-form and may be empty.
#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub struct AttributionRequest {
    pub work_title: String,
    pub author_name: String,
}

impl AttributionRequest {
    /// Create a new attribution request.
    pub fn new(work_title: impl Into<String>, author_name: impl Into<String>) -> Self {
        Self {
            work_title: work_title.into(),
            author_name: author_name.into(),
        }
    }
}
