use std::collections::BTreeSet;
use std::sync::RwLock;

/// Answers whether the user has starred a session.
pub trait Favorites: Send + Sync {
    fn has_favorite(&self, session_name: &str) -> bool;
}

/// Favorites kept in memory for the lifetime of the process
#[derive(Debug, Default)]
pub struct UserFavorites {
    names: RwLock<BTreeSet<String>>,
}

impl UserFavorites {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn with_names<I, S>(names: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        Self {
            names: RwLock::new(names.into_iter().map(Into::into).collect()),
        }
    }

    pub fn add_favorite(&self, session_name: &str) {
        if let Ok(mut names) = self.names.write() {
            names.insert(session_name.to_string());
        }
    }

    pub fn remove_favorite(&self, session_name: &str) {
        if let Ok(mut names) = self.names.write() {
            names.remove(session_name);
        }
    }

    /// Returns whether the session is a favorite afterwards.
    pub fn toggle_favorite(&self, session_name: &str) -> bool {
        let Ok(mut names) = self.names.write() else {
            return false;
        };

        if names.remove(session_name) {
            false
        } else {
            names.insert(session_name.to_string());
            true
        }
    }

    pub fn names(&self) -> Vec<String> {
        self.names
            .read()
            .map(|names| names.iter().cloned().collect())
            .unwrap_or_default()
    }
}

impl Favorites for UserFavorites {
    fn has_favorite(&self, session_name: &str) -> bool {
        self.names
            .read()
            .is_ok_and(|names| names.contains(session_name))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn toggling_adds_then_removes() {
        let favorites = UserFavorites::new();
        assert!(!favorites.has_favorite("Keynote"));

        assert!(favorites.toggle_favorite("Keynote"));
        assert!(favorites.has_favorite("Keynote"));

        assert!(!favorites.toggle_favorite("Keynote"));
        assert!(!favorites.has_favorite("Keynote"));
    }

    #[test]
    fn names_are_matched_exactly() {
        let favorites = UserFavorites::with_names(["Keynote"]);
        favorites.add_favorite("Lunch");
        favorites.remove_favorite("Breakfast");

        assert!(favorites.has_favorite("Lunch"));
        assert!(!favorites.has_favorite("keynote"));
        assert_eq!(favorites.names(), ["Keynote", "Lunch"]);
    }
}
