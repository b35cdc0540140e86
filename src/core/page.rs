use crate::core::metadata::PageMetadata;
use crate::domain::model::{Catalog, ResolvedComparison, Role, RoleSelection};
use serde::Serialize;
use std::fmt;

#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct PhoneOption {
    pub value: String,
    pub label: String,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct ColorSwatch {
    pub name: String,
    pub selected: bool,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct PhoneCard {
    pub order: Role,
    pub options: Vec<PhoneOption>,
    pub selected_phone: String,
    pub selected_color: String,
    pub image_path: String,
    pub colors: Vec<ColorSwatch>,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct SpecRow {
    pub label: String,
    pub primary: String,
    pub secondary: String,
}

/// Everything needed to display a side by side comparison.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct ComparisonPage {
    pub metadata: PageMetadata,
    pub primary: PhoneCard,
    pub secondary: PhoneCard,
    pub specs: Vec<SpecRow>,
    pub share_link: Option<String>,
}

pub fn image_path(phone: &str, color: &str) -> String {
    format!("/phones/{}-{}.png", phone, color)
}

fn phone_card(catalog: &Catalog, order: Role, selection: RoleSelection<'_>) -> PhoneCard {
    PhoneCard {
        order,
        options: catalog
            .phones()
            .iter()
            .map(|phone| PhoneOption {
                value: phone.name.clone(),
                label: format!("{} Phone", phone.name),
            })
            .collect(),
        selected_phone: selection.phone.name.clone(),
        selected_color: selection.color.name.clone(),
        image_path: image_path(&selection.phone.name, &selection.color.name),
        colors: selection
            .phone
            .colors
            .iter()
            .map(|color| ColorSwatch {
                name: color.name.clone(),
                selected: color.name == selection.color.name,
            })
            .collect(),
    }
}

impl ComparisonPage {
    pub fn build(
        catalog: &Catalog,
        resolved: &ResolvedComparison<'_>,
        share_link: Option<String>,
    ) -> Self {
        let primary = resolved.primary.phone;
        let secondary = resolved.secondary.phone;
        let row = |label: &str, a: &str, b: &str| SpecRow {
            label: label.to_string(),
            primary: a.to_string(),
            secondary: b.to_string(),
        };

        Self {
            metadata: PageMetadata::for_comparison(resolved),
            primary: phone_card(catalog, Role::Primary, resolved.primary),
            secondary: phone_card(catalog, Role::Secondary, resolved.secondary),
            specs: vec![
                row("요약", &primary.summary, &secondary.summary),
                row("저장 용량", &primary.storage, &secondary.storage),
                row("칩", &primary.chip, &secondary.chip),
            ],
            share_link,
        }
    }
}

impl fmt::Display for ComparisonPage {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        writeln!(f, "{}", self.metadata.title)?;
        writeln!(f)?;
        for card in [&self.primary, &self.secondary] {
            let colors: Vec<String> = card
                .colors
                .iter()
                .map(|c| {
                    if c.selected {
                        format!("[{}]", c.name)
                    } else {
                        c.name.clone()
                    }
                })
                .collect();
            writeln!(f, "{:<10} {} ({})", card.order, card.selected_phone, card.selected_color)?;
            writeln!(f, "{:<10} {}", "", card.image_path)?;
            writeln!(f, "{:<10} {}", "", colors.join(" "))?;
        }
        writeln!(f)?;
        for spec in &self.specs {
            writeln!(f, "{}", spec.label)?;
            writeln!(f, "  {} | {}", spec.primary, spec.secondary)?;
        }
        if let Some(link) = &self.share_link {
            writeln!(f)?;
            writeln!(f, "공유하기: {}", link)?;
        }
        Ok(())
    }
}
