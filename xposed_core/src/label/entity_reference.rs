//! Referenced entity titles

use super::{Label, LabelError, join_resolved};
use crate::lookup::EntityLookup;
use crate::query_string::ParamValue;

/// Look up the title of every selected entity
pub fn entity_label(
    parameter: &str,
    raw: &ParamValue,
    entities: &dyn EntityLookup,
) -> Result<Label, LabelError> {
    join_resolved(raw, |id| {
        entities
            .entity_title(id)
            .ok_or_else(|| LabelError::EntityNotFound {
                parameter: parameter.to_string(),
                id: id.to_string(),
            })
    })
}
