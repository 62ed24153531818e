use crate::error::{AgreementError, Result};

/// Fraction of positions at which two raters assigned the same rating.
///
/// Position `i` in each sequence refers to the same rated item, so the
/// sequences must have equal, non-zero length. The result is in `[0, 1]`.
pub fn percentage_agreement<T: PartialEq>(rating1: &[T], rating2: &[T]) -> Result<f64> {
    if rating1.len() != rating2.len() {
        return Err(AgreementError::LengthMismatch {
            left: rating1.len(),
            right: rating2.len(),
        });
    }
    if rating1.is_empty() {
        return Err(AgreementError::EmptyRatings);
    }
    let matches = rating1
        .iter()
        .zip(rating2.iter())
        .filter(|(r1, r2)| r1 == r2)
        .count();
    Ok(matches as f64 / rating1.len() as f64)
}

/// Bennett's S score between two raters.
///
/// Corrects [`percentage_agreement`] for the agreement expected by chance
/// among `k` equiprobable labels: `S = (k / (k - 1)) * (p - 1/k)` with
/// `k = labels.len()`.
///
/// The label set is supplied by the caller and is not derived from the
/// observed ratings; the score is not clamped, so a label set inconsistent
/// with the ratings can fall outside the usual `[-1/(k-1), 1]` bounds.
pub fn bennetts_s_score<T, L>(rating1: &[T], rating2: &[T], labels: &[L]) -> Result<f64>
where
    T: PartialEq,
{
    // Length mismatch takes precedence over a degenerate label set.
    let p = percentage_agreement(rating1, rating2)?;
    let count = labels.len();
    if count < 2 {
        return Err(AgreementError::DegenerateLabelSet { count });
    }
    let k = count as f64;
    Ok((k / (k - 1.0)) * (p - 1.0 / k))
}
