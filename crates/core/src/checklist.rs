//! Typed checklist items embedded in a card row.
//!
//! Checklist items live as an ordered JSON array inside the `cards` table,
//! not as a separate table. In memory they are a `Vec<ChecklistItem>`;
//! serialization happens only at the storage boundary. Each operation here
//! is a pure transformation of the whole list -- the repository
//! read-modify-writes the card row around it.

use serde::{Deserialize, Serialize};

use crate::error::CoreError;
use crate::types::{new_id, DbId};

/// One entry in a card's embedded checklist.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ChecklistItem {
    pub id: DbId,
    pub text: String,
    pub checked: bool,
}

/// Fields that may be patched on an existing checklist item.
#[derive(Debug, Clone, Default, Deserialize)]
pub struct ChecklistItemPatch {
    pub text: Option<String>,
    pub checked: Option<bool>,
}

/// Append a new unchecked item and return it.
pub fn add_item(items: &mut Vec<ChecklistItem>, text: String) -> ChecklistItem {
    let item = ChecklistItem {
        id: new_id(),
        text,
        checked: false,
    };
    items.push(item.clone());
    item
}

/// Patch the first item with `item_id`, applying only the supplied fields.
pub fn patch_item(
    items: &mut [ChecklistItem],
    item_id: &str,
    patch: &ChecklistItemPatch,
) -> Result<(), CoreError> {
    let item = items
        .iter_mut()
        .find(|i| i.id == item_id)
        .ok_or(CoreError::NotFound {
            entity: "Checklist item",
            id: item_id.to_string(),
        })?;
    if let Some(text) = &patch.text {
        item.text = text.clone();
    }
    if let Some(checked) = patch.checked {
        item.checked = checked;
    }
    Ok(())
}

/// Remove the item with `item_id`, keeping the relative order of the rest.
pub fn remove_item(items: &mut Vec<ChecklistItem>, item_id: &str) -> Result<(), CoreError> {
    let before = items.len();
    items.retain(|i| i.id != item_id);
    if items.len() == before {
        return Err(CoreError::NotFound {
            entity: "Checklist item",
            id: item_id.to_string(),
        });
    }
    Ok(())
}
