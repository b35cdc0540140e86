use serde::{Deserialize, Serialize};
use std::fmt;

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ColorVariant {
    /// Identifier, unique within the owning phone.
    pub name: String,
}

impl ColorVariant {
    pub fn new(name: impl Into<String>) -> Self {
        Self { name: name.into() }
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Phone {
    /// Identifier, unique within the catalog.
    pub name: String,
    #[serde(default)]
    pub summary: String,
    #[serde(default)]
    pub storage: String,
    #[serde(default)]
    pub chip: String,
    /// Display order; the first entry is the default color.
    #[serde(default)]
    pub colors: Vec<ColorVariant>,
}

impl Phone {
    pub fn new(name: impl Into<String>) -> Self {
        Self {
            name: name.into(),
            summary: String::new(),
            storage: String::new(),
            chip: String::new(),
            colors: Vec::new(),
        }
    }

    pub fn with_colors<I, S>(mut self, colors: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        self.colors = colors.into_iter().map(ColorVariant::new).collect();
        self
    }

    pub fn with_specs(
        mut self,
        summary: impl Into<String>,
        storage: impl Into<String>,
        chip: impl Into<String>,
    ) -> Self {
        self.summary = summary.into();
        self.storage = storage.into();
        self.chip = chip.into();
        self
    }

    pub fn color(&self, name: &str) -> Option<&ColorVariant> {
        self.colors.iter().find(|color| color.name == name)
    }

    pub fn default_color(&self) -> Option<&ColorVariant> {
        self.colors.first()
    }
}

/// Ordered phones available for comparison. Catalog order decides defaults.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(transparent)]
pub struct Catalog {
    phones: Vec<Phone>,
}

impl Catalog {
    pub fn new(phones: Vec<Phone>) -> Self {
        Self { phones }
    }

    pub fn phones(&self) -> &[Phone] {
        &self.phones
    }

    pub fn first(&self) -> Option<&Phone> {
        self.phones.first()
    }

    pub fn find(&self, name: &str) -> Option<&Phone> {
        self.phones.iter().find(|phone| phone.name == name)
    }

    pub fn len(&self) -> usize {
        self.phones.len()
    }

    pub fn is_empty(&self) -> bool {
        self.phones.is_empty()
    }
}

impl From<Vec<Phone>> for Catalog {
    fn from(phones: Vec<Phone>) -> Self {
        Self::new(phones)
    }
}

/// User supplied, unvalidated choice of phones and colors.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct SelectionInput {
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub primary: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub secondary: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub primary_color: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub secondary_color: Option<String>,
}

impl SelectionInput {
    pub fn phone(&self, role: Role) -> Option<&str> {
        match role {
            Role::Primary => self.primary.as_deref(),
            Role::Secondary => self.secondary.as_deref(),
        }
    }

    pub fn color(&self, role: Role) -> Option<&str> {
        match role {
            Role::Primary => self.primary_color.as_deref(),
            Role::Secondary => self.secondary_color.as_deref(),
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Role {
    Primary,
    Secondary,
}

impl Role {
    pub const ALL: [Role; 2] = [Role::Primary, Role::Secondary];

    pub fn as_str(&self) -> &'static str {
        match self {
            Role::Primary => "primary",
            Role::Secondary => "secondary",
        }
    }

    /// Query parameter names carrying this role's phone and color.
    pub fn query_keys(&self) -> (&'static str, &'static str) {
        match self {
            Role::Primary => ("primary", "primaryColor"),
            Role::Secondary => ("secondary", "secondaryColor"),
        }
    }
}

impl fmt::Display for Role {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.pad(self.as_str())
    }
}

/// A phone from the catalog together with one of its own colors.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub struct RoleSelection<'a> {
    pub phone: &'a Phone,
    pub color: &'a ColorVariant,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub struct ResolvedComparison<'a> {
    pub primary: RoleSelection<'a>,
    pub secondary: RoleSelection<'a>,
}

impl<'a> ResolvedComparison<'a> {
    pub fn get(&self, role: Role) -> RoleSelection<'a> {
        match role {
            Role::Primary => self.primary,
            Role::Secondary => self.secondary,
        }
    }
}
