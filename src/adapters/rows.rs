//! Row shape of the `phones` table with its embedded `phone_colors`, as
//! returned by PostgREST and as found in table exports.

use crate::domain::model::{Catalog, ColorVariant, Phone};
use crate::utils::error::Result;
use serde::Deserialize;

#[derive(Debug, Deserialize)]
pub(crate) struct PhoneRow {
    name: String,
    #[serde(default)]
    summary: Option<String>,
    #[serde(default)]
    storage: Option<String>,
    #[serde(default)]
    chip: Option<String>,
    #[serde(default, alias = "colors")]
    phone_colors: Vec<ColorRow>,
}

#[derive(Debug, Deserialize)]
pub(crate) struct ColorRow {
    name: String,
}

impl From<PhoneRow> for Phone {
    fn from(row: PhoneRow) -> Self {
        Phone {
            name: row.name,
            summary: row.summary.unwrap_or_default(),
            storage: row.storage.unwrap_or_default(),
            chip: row.chip.unwrap_or_default(),
            colors: row
                .phone_colors
                .into_iter()
                .map(|color| ColorVariant { name: color.name })
                .collect(),
        }
    }
}

/// Decodes a JSON array of phone rows, keeping row order.
pub(crate) fn decode_catalog(data: &[u8]) -> Result<Catalog> {
    let rows: Vec<PhoneRow> = serde_json::from_slice(data)?;
    Ok(Catalog::new(rows.into_iter().map(Phone::from).collect()))
}
