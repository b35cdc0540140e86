use crate::domain::model::{ResolvedComparison, Role, SelectionInput};
use crate::utils::error::{CompareError, Result};
use url::{form_urlencoded, Url};

impl SelectionInput {
    /// Parses `primary=..&secondary=..&primaryColor=..&secondaryColor=..`.
    /// A leading `?` is accepted. Unknown keys and empty values are ignored.
    pub fn from_query(query: &str) -> Self {
        let query = query.strip_prefix('?').unwrap_or(query);
        let mut input = SelectionInput::default();

        for (key, value) in form_urlencoded::parse(query.as_bytes()) {
            if value.is_empty() {
                continue;
            }
            let slot = match &*key {
                "primary" => &mut input.primary,
                "secondary" => &mut input.secondary,
                "primaryColor" => &mut input.primary_color,
                "secondaryColor" => &mut input.secondary_color,
                _ => continue,
            };
            *slot = Some(value.into_owned());
        }

        input
    }
}

/// Query string that reproduces `resolved` when fed back through the resolver.
pub fn share_query(resolved: &ResolvedComparison<'_>) -> String {
    let mut serializer = form_urlencoded::Serializer::new(String::new());
    for role in Role::ALL {
        let selection = resolved.get(role);
        let (phone_key, color_key) = role.query_keys();
        serializer.append_pair(phone_key, &selection.phone.name);
        serializer.append_pair(color_key, &selection.color.name);
    }
    serializer.finish()
}

pub fn share_link(base_url: &str, resolved: &ResolvedComparison<'_>) -> Result<String> {
    let mut url = Url::parse(base_url).map_err(|e| CompareError::InvalidConfigValueError {
        field: "site.base_url".to_string(),
        value: base_url.to_string(),
        reason: format!("Invalid URL format: {}", e),
    })?;
    url.set_query(Some(&share_query(resolved)));
    Ok(url.to_string())
}
