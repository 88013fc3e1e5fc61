//! Alias entry types

/// A short name bound to one shell command line
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct AliasEntry {
    /// Unique alias name
    pub name: String,
    /// Help text
    pub description: Option<String>,
    /// Passed verbatim to the host shell
    pub command_line: String,
}

impl AliasEntry {
    pub fn new(name: impl Into<String>, command_line: impl Into<String>) -> Self {
        Self {
            name: name.into(),
            description: None,
            command_line: command_line.into(),
        }
    }

    pub fn with_description(mut self, description: impl Into<String>) -> Self {
        self.description = Some(description.into());
        self
    }
}

/// An alias expanding to other aliases, run in order
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct CompositeAlias {
    pub name: String,
    pub description: Option<String>,
    /// Names of plain or composite aliases
    pub steps: Vec<String>,
}

impl CompositeAlias {
    pub fn new<I, S>(name: impl Into<String>, steps: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        Self {
            name: name.into(),
            description: None,
            steps: steps.into_iter().map(Into::into).collect(),
        }
    }

    pub fn with_description(mut self, description: impl Into<String>) -> Self {
        self.description = Some(description.into());
        self
    }
}

/// Borrowed view over either kind of alias, used for help and listing
#[derive(Debug, Clone, Copy)]
pub enum AliasRef<'a> {
    Command(&'a AliasEntry),
    Composite(&'a CompositeAlias),
}

impl<'a> AliasRef<'a> {
    pub fn name(&self) -> &'a str {
        match *self {
            AliasRef::Command(entry) => &entry.name,
            AliasRef::Composite(composite) => &composite.name,
        }
    }

    pub fn description(&self) -> Option<&'a str> {
        match *self {
            AliasRef::Command(entry) => entry.description.as_deref(),
            AliasRef::Composite(composite) => composite.description.as_deref(),
        }
    }
}
