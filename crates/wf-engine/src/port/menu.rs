//! Choice menus.

/// One option in a [`Menu`].
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct MenuOption<T> {
    /// Text shown to the player.
    pub label: String,
    /// Literal answer that also selects this option.
    pub key: Option<String>,
    /// Value handed back to the scene. Opaque to the presentation layer.
    pub value: T,
}

/// An ordered list of options with a prompt message.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Menu<T> {
    message: String,
    options: Vec<MenuOption<T>>,
}

impl<T> Menu<T> {
    /// Create a menu with no options.
    pub fn new(message: impl Into<String>) -> Self {
        Self {
            message: message.into(),
            options: Vec::new(),
        }
    }

    /// Add an option selected by its number.
    pub fn option(mut self, label: impl Into<String>, value: T) -> Self {
        self.options.push(MenuOption {
            label: label.into(),
            key: None,
            value,
        });
        self
    }

    /// Add an option selected by its number or by typing `key`.
    pub fn keyed(mut self, key: impl Into<String>, label: impl Into<String>, value: T) -> Self {
        self.options.push(MenuOption {
            label: label.into(),
            key: Some(key.into()),
            value,
        });
        self
    }

    /// The prompt message.
    pub fn message(&self) -> &str {
        &self.message
    }

    /// Options in display order.
    pub fn options(&self) -> &[MenuOption<T>] {
        &self.options
    }

    /// Option labels in display order.
    pub fn labels(&self) -> Vec<&str> {
        self.options.iter().map(|o| o.label.as_str()).collect()
    }

    /// Number of options.
    pub fn len(&self) -> usize {
        self.options.len()
    }

    /// Returns true if the menu has no options.
    pub fn is_empty(&self) -> bool {
        self.options.is_empty()
    }

    /// Resolve a raw answer to an option value.
    ///
    /// Accepts a 1-based index or the exact key of a keyed option.
    pub fn select(&self, answer: &str) -> Option<&T> {
        let answer = answer.trim();
        let by_number = answer
            .parse::<usize>()
            .ok()
            .and_then(|number| number.checked_sub(1))
            .and_then(|index| self.options.get(index));
        if let Some(option) = by_number {
            return Some(&option.value);
        }
        self.options
            .iter()
            .find(|o| o.key.as_deref() == Some(answer))
            .map(|o| &o.value)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn sortie() -> Menu<&'static str> {
        Menu::new("How do you spend the time?")
            .keyed("inspect", "Inspect the airframe", "inspect")
            .keyed("brief", "Attend the briefing", "brief")
            .keyed("arm", "Check the munitions", "arm")
    }

    #[test]
    fn select_by_number() {
        let menu = sortie();
        assert_eq!(menu.select("1"), Some(&"inspect"));
        assert_eq!(menu.select("3"), Some(&"arm"));
    }

    #[test]
    fn select_rejects_out_of_range() {
        let menu = sortie();
        assert_eq!(menu.select("0"), None);
        assert_eq!(menu.select("4"), None);
        assert_eq!(menu.select("-1"), None);
        assert_eq!(menu.select(""), None);
    }

    #[test]
    fn select_by_key() {
        let menu = sortie();
        assert_eq!(menu.select("brief"), Some(&"brief"));
        assert_eq!(menu.select("Brief"), None);
    }

    #[test]
    fn unkeyed_options_ignore_labels() {
        let menu = Menu::new("Where to?").option("council", 1);
        assert_eq!(menu.select("council"), None);
        assert_eq!(menu.select("1"), Some(&1));
    }

    #[test]
    fn labels_in_order() {
        let menu = sortie();
        assert_eq!(
            menu.labels(),
            vec![
                "Inspect the airframe",
                "Attend the briefing",
                "Check the munitions"
            ]
        );
        assert_eq!(menu.len(), 3);
        assert!(!menu.is_empty());
    }
}
