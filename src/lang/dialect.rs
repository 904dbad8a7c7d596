/// The SmileBASIC variant a listing is written for.
///
/// `Unspecified` is a real third state, not a fallback to either variant.
/// Word tables gate on it individually; see [`Gate`](super::keyword::Gate).
#[derive(Debug, PartialEq, Eq, Hash, Clone, Copy)]
pub enum Dialect {
    /// SmileBASIC 3, also used for SmileBASIC 2 and Petit Computer listings.
    Older,
    /// SmileBASIC 4.
    Newer,
    Unspecified,
}

impl Dialect {
    /// Maps a document's code tag to a dialect.
    ///
    /// ```
    /// use sbhl::lang::Dialect;
    /// assert_eq!(Dialect::from_tag(Some("SB4")), Dialect::Newer);
    /// assert_eq!(Dialect::from_tag(Some("ptc")), Dialect::Older);
    /// assert_eq!(Dialect::from_tag(None), Dialect::Unspecified);
    /// ```
    pub fn from_tag(tag: Option<&str>) -> Dialect {
        let tag = match tag {
            Some(tag) => tag.to_ascii_lowercase(),
            None => return Dialect::Unspecified,
        };
        match tag.as_str() {
            "sb4" => Dialect::Newer,
            "sb3" | "sb2" | "ptc" => Dialect::Older,
            _ => Dialect::Unspecified,
        }
    }

    /// True for tags the highlighter handles at all.
    /// Listings tagged with anything else are passed through unhighlighted.
    pub fn is_basic_tag(tag: Option<&str>) -> bool {
        match tag {
            None => true,
            Some(tag) => matches!(
                tag.to_ascii_lowercase().as_str(),
                "" | "sb2" | "sb3" | "sb4" | "ptc"
            ),
        }
    }
}

impl Default for Dialect {
    fn default() -> Self {
        Dialect::Unspecified
    }
}

impl std::fmt::Display for Dialect {
    fn fmt(&self, f: &mut std::fmt::Formatter) -> std::fmt::Result {
        use Dialect::*;
        match self {
            Older => write!(f, "SB3"),
            Newer => write!(f, "SB4"),
            Unspecified => write!(f, "SB"),
        }
    }
}
