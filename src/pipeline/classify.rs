use crate::constants::CLASSIFICATION_THRESHOLD;
use crate::types::{SimplifiedClass, VoteFractions};

/// Assign a simplified class from the debiased vote fractions.
///
/// Priority: Smooth > Featured > Artifact. The first fraction at or above
/// `CLASSIFICATION_THRESHOLD` wins; when none reaches it, or any fraction
/// is missing, the object stays `Uncertain`.
pub fn simplify(fractions: &VoteFractions) -> SimplifiedClass {
    let (smooth, featured, artifact) = match (
        known(fractions.smooth),
        known(fractions.featured),
        known(fractions.artifact),
    ) {
        (Some(s), Some(f), Some(a)) => (s, f, a),
        _ => return SimplifiedClass::Uncertain,
    };

    if smooth >= CLASSIFICATION_THRESHOLD {
        SimplifiedClass::Smooth
    } else if featured >= CLASSIFICATION_THRESHOLD {
        SimplifiedClass::Featured
    } else if artifact >= CLASSIFICATION_THRESHOLD {
        SimplifiedClass::Artifact
    } else {
        SimplifiedClass::Uncertain
    }
}

// A NaN in the catalog means the debiased value is absent, same as an
// empty field.
fn known(value: Option<f64>) -> Option<f64> {
    value.filter(|v| !v.is_nan())
}
