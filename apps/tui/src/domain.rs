/// Which sessions the schedule shows.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum Segment {
    #[default]
    All,
    Favorites,
}

impl Segment {
    pub const fn as_str(self) -> &'static str {
        match self {
            Self::All => "all",
            Self::Favorites => "favorites",
        }
    }

    /// Only the exact value `favorites` narrows the schedule; anything else selects every session.
    pub fn parse(value: &str) -> Self {
        match value {
            "favorites" => Self::Favorites,
            _ => Self::All,
        }
    }

    pub const fn label(self) -> &'static str {
        match self {
            Self::All => "All",
            Self::Favorites => "Favorites",
        }
    }

    pub const fn toggled(self) -> Self {
        match self {
            Self::All => Self::Favorites,
            Self::Favorites => Self::All,
        }
    }
}

/// What the map page does when no location is flagged as the center.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum CenterFallback {
    /// Center on the first location in the document.
    #[default]
    FirstPoint,
    /// Refuse to render the map.
    Strict,
}

impl CenterFallback {
    pub const fn as_str(self) -> &'static str {
        match self {
            Self::FirstPoint => "first",
            Self::Strict => "strict",
        }
    }

    pub fn parse(value: &str) -> Option<Self> {
        match value.trim().to_lowercase().as_str() {
            "first" | "first-point" => Some(Self::FirstPoint),
            "strict" => Some(Self::Strict),
            _ => None,
        }
    }
}
