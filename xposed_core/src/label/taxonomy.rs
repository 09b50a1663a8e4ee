//! Taxonomy term labels

use super::{Label, LabelError, join_resolved};
use crate::lookup::TermLookup;
use crate::query_string::ParamValue;

/// Look up the name of every selected term
pub fn term_label(
    parameter: &str,
    raw: &ParamValue,
    terms: &dyn TermLookup,
) -> Result<Label, LabelError> {
    join_resolved(raw, |id| {
        terms.term_name(id).ok_or_else(|| LabelError::TermNotFound {
            parameter: parameter.to_string(),
            id: id.to_string(),
        })
    })
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::lookup::MemoryStore;

    fn store() -> MemoryStore {
        MemoryStore::new().with_term("4", "News").with_term("9", "Sports")
    }

    #[test]
    fn test_single_term() {
        let label = term_label("tid", &ParamValue::from("4"), &store());
        assert_eq!(label, Ok(Label::Text("News".to_string())));
    }

    #[test]
    fn test_multiple_terms_keep_selection_order() {
        let label = term_label("tid", &ParamValue::from(vec!["9", "4"]), &store());
        assert_eq!(label, Ok(Label::Text("Sports, News".to_string())));
    }

    #[test]
    fn test_unknown_term() {
        let label = term_label("tid", &ParamValue::from("12"), &store());
        assert_eq!(
            label,
            Err(LabelError::TermNotFound {
                parameter: "tid".to_string(),
                id: "12".to_string(),
            })
        );
    }

    #[test]
    fn test_one_unknown_term_fails_the_whole_label() {
        let label = term_label("tid", &ParamValue::from(vec!["4", "12"]), &store());
        assert!(label.is_err());
    }
}
