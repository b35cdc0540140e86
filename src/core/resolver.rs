use crate::domain::model::{Catalog, ResolvedComparison, Role, RoleSelection, SelectionInput};
use crate::utils::error::{CompareError, Result};

/// Checks the upstream data guarantees the resolver relies on.
pub fn validate_catalog(catalog: &Catalog) -> Result<()> {
    if catalog.is_empty() {
        return Err(CompareError::EmptyCatalog);
    }

    if let Some(phone) = catalog.phones().iter().find(|phone| phone.colors.is_empty()) {
        return Err(CompareError::PhoneWithoutColors {
            phone: phone.name.clone(),
        });
    }

    Ok(())
}

/// Resolves one role: exact match by name, else the first phone; then exact
/// color match on that phone, else its first color.
pub fn resolve_role<'a>(
    catalog: &'a Catalog,
    phone_name: Option<&str>,
    color_name: Option<&str>,
) -> Result<RoleSelection<'a>> {
    let phone = match phone_name.and_then(|name| catalog.find(name)) {
        Some(phone) => phone,
        None => {
            let fallback = catalog.first().ok_or(CompareError::EmptyCatalog)?;
            if let Some(name) = phone_name {
                tracing::debug!("Unknown phone '{}', falling back to '{}'", name, fallback.name);
            }
            fallback
        }
    };

    let color = match color_name.and_then(|name| phone.color(name)) {
        Some(color) => color,
        None => {
            let fallback = phone
                .default_color()
                .ok_or_else(|| CompareError::PhoneWithoutColors {
                    phone: phone.name.clone(),
                })?;
            if let Some(name) = color_name {
                tracing::debug!(
                    "Phone '{}' has no color '{}', falling back to '{}'",
                    phone.name,
                    name,
                    fallback.name
                );
            }
            fallback
        }
    };

    Ok(RoleSelection { phone, color })
}

/// Resolves both roles independently. With no usable selectors both sides
/// land on the first catalog entry.
pub fn resolve_comparison<'a>(
    catalog: &'a Catalog,
    input: &SelectionInput,
) -> Result<ResolvedComparison<'a>> {
    validate_catalog(catalog)?;

    let primary = resolve_role(catalog, input.phone(Role::Primary), input.color(Role::Primary))?;
    let secondary = resolve_role(
        catalog,
        input.phone(Role::Secondary),
        input.color(Role::Secondary),
    )?;

    tracing::debug!(
        "Resolved comparison: {} ({}) vs {} ({})",
        primary.phone.name,
        primary.color.name,
        secondary.phone.name,
        secondary.color.name
    );

    Ok(ResolvedComparison { primary, secondary })
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::domain::model::Phone;

    fn sample_catalog() -> Catalog {
        Catalog::new(vec![
            Phone::new("iphone14").with_colors(["black", "blue"]),
            Phone::new("iphone15").with_colors(["pink", "green"]),
        ])
    }

    fn names(resolved: &ResolvedComparison<'_>) -> [(String, String); 2] {
        [
            (
                resolved.primary.phone.name.clone(),
                resolved.primary.color.name.clone(),
            ),
            (
                resolved.secondary.phone.name.clone(),
                resolved.secondary.color.name.clone(),
            ),
        ]
    }

    #[test]
    fn test_empty_selection_defaults_both_roles_to_first_phone() {
        let catalog = sample_catalog();

        let resolved = resolve_comparison(&catalog, &SelectionInput::default()).unwrap();

        assert_eq!(
            names(&resolved),
            [
                ("iphone14".to_string(), "black".to_string()),
                ("iphone14".to_string(), "black".to_string()),
            ]
        );
    }

    #[test]
    fn test_explicit_selection_with_color_fallback() {
        let catalog = sample_catalog();
        let input = SelectionInput {
            primary: Some("iphone15".to_string()),
            secondary: Some("iphone14".to_string()),
            secondary_color: Some("blue".to_string()),
            ..Default::default()
        };

        let resolved = resolve_comparison(&catalog, &input).unwrap();

        assert_eq!(
            names(&resolved),
            [
                ("iphone15".to_string(), "pink".to_string()),
                ("iphone14".to_string(), "blue".to_string()),
            ]
        );
    }

    #[test]
    fn test_unknown_phone_falls_back_to_first() {
        let catalog = sample_catalog();
        let input = SelectionInput {
            primary: Some("doesnotexist".to_string()),
            ..Default::default()
        };

        let resolved = resolve_comparison(&catalog, &input).unwrap();

        assert_eq!(resolved.primary.phone.name, "iphone14");
        assert_eq!(resolved.primary.color.name, "black");
    }

    #[test]
    fn test_color_of_another_phone_is_not_accepted() {
        let catalog = sample_catalog();
        let input = SelectionInput {
            primary: Some("iphone14".to_string()),
            primary_color: Some("pink".to_string()),
            ..Default::default()
        };

        let resolved = resolve_comparison(&catalog, &input).unwrap();

        assert_eq!(resolved.primary.color.name, "black");
    }

    #[test]
    fn test_color_kept_when_phone_falls_back_and_owns_it() {
        let catalog = sample_catalog();
        let input = SelectionInput {
            secondary: Some("pixel".to_string()),
            secondary_color: Some("blue".to_string()),
            ..Default::default()
        };

        let resolved = resolve_comparison(&catalog, &input).unwrap();

        assert_eq!(resolved.secondary.phone.name, "iphone14");
        assert_eq!(resolved.secondary.color.name, "blue");
    }

    #[test]
    fn test_matching_is_exact() {
        let catalog = sample_catalog();
        let input = SelectionInput {
            primary: Some("IPHONE15".to_string()),
            secondary: Some(" iphone15".to_string()),
            ..Default::default()
        };

        let resolved = resolve_comparison(&catalog, &input).unwrap();

        assert_eq!(resolved.primary.phone.name, "iphone14");
        assert_eq!(resolved.secondary.phone.name, "iphone14");
    }

    #[test]
    fn test_resolved_color_always_belongs_to_phone() {
        let catalog = sample_catalog();
        let phones = [None, Some("iphone14"), Some("iphone15"), Some("nope")];
        let colors = [None, Some("black"), Some("blue"), Some("pink"), Some("green"), Some("red")];

        for phone in phones {
            for color in colors {
                let selection = resolve_role(&catalog, phone, color).unwrap();
                assert!(selection.phone.colors.contains(selection.color));
                assert!(catalog.phones().contains(selection.phone));
            }
        }
    }

    #[test]
    fn test_resolution_is_idempotent() {
        let catalog = sample_catalog();
        let input = SelectionInput {
            primary: Some("iphone15".to_string()),
            primary_color: Some("green".to_string()),
            secondary_color: Some("nope".to_string()),
            ..Default::default()
        };

        let first = resolve_comparison(&catalog, &input).unwrap();
        let second = resolve_comparison(&catalog, &input).unwrap();

        assert_eq!(first, second);
    }

    #[test]
    fn test_empty_catalog_is_fatal() {
        let catalog = Catalog::default();

        let result = resolve_comparison(&catalog, &SelectionInput::default());

        assert!(matches!(result, Err(CompareError::EmptyCatalog)));
    }

    #[test]
    fn test_phone_without_colors_is_fatal() {
        let catalog = Catalog::new(vec![
            Phone::new("iphone14").with_colors(["black"]),
            Phone::new("iphone15"),
        ]);

        let result = resolve_comparison(&catalog, &SelectionInput::default());

        match result {
            Err(CompareError::PhoneWithoutColors { phone }) => assert_eq!(phone, "iphone15"),
            other => panic!("expected PhoneWithoutColors, got {:?}", other),
        }
    }
}
