//! Named pane groups (`grp1`)

/// A named collection of panes, referenced by pane name
#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub struct Group {
    /// Up to 16 bytes
    pub name: String,
    /// Names of member panes, each up to 16 bytes
    pub panes: Vec<String>,
}

impl Group {
    pub const NAME_LEN: usize = 16;

    pub fn new(name: impl Into<String>) -> Self {
        Group {
            name: name.into(),
            panes: Vec::new(),
        }
    }

    pub fn with_panes<I, S>(mut self, panes: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        self.panes.extend(panes.into_iter().map(Into::into));
        self
    }

    pub fn contains(&self, pane: &str) -> bool {
        self.panes.iter().any(|p| p == pane)
    }
}
