//! Feature builder — turns raw client input into the numeric vector the
//! classifier was trained on: `[age, gender_code, flag_1..flag_N]`.
//!
//! Pure function of its inputs and the static vocabulary/encoder state.
//! Unknown symptom strings are ignored by design (they simply contribute no
//! flag); an unknown gender is a hard error at this layer because there is
//! no column to fall back to.

use std::collections::HashSet;

use super::encoder::LabelEncoder;
use super::vocabulary::SymptomVocabulary;

#[derive(Debug, Clone, PartialEq, thiserror::Error)]
pub enum EncodingError {
    #[error("age must be a finite number, got {0}")]
    InvalidAge(f64),
    #[error("unknown gender label '{0}'")]
    UnknownGender(String),
}

/// Canonical gender form the encoder was trained on.
///
/// Trim, then capitalize (first letter upper, rest lower). Anything starting
/// with `M` collapses to `Male`, with `F` to `Female`; other values pass
/// through in capitalized form and are left to the encoder lookup.
pub fn canonicalize_gender(raw: &str) -> String {
    let trimmed = raw.trim();
    let mut chars = trimmed.chars();
    let capitalized = match chars.next() {
        Some(first) => first.to_uppercase().collect::<String>() + &chars.as_str().to_lowercase(),
        None => String::new(),
    };
    if capitalized.starts_with('M') {
        "Male".to_string()
    } else if capitalized.starts_with('F') {
        "Female".to_string()
    } else {
        capitalized
    }
}

/// Build the feature vector for one request.
///
/// Output length is always `vocabulary.len() + 2`; symptom flags are emitted
/// in vocabulary order and are 0 or 1.
pub fn build_feature_vector(
    age: f64,
    gender: &str,
    symptoms: &[String],
    vocabulary: &SymptomVocabulary,
    genders: &LabelEncoder,
) -> Result<Vec<f64>, EncodingError> {
    if !age.is_finite() {
        return Err(EncodingError::InvalidAge(age));
    }

    let canonical = canonicalize_gender(gender);
    let gender_code = genders
        .encode(&canonical)
        .ok_or(EncodingError::UnknownGender(canonical))?;

    let normalized: HashSet<String> = symptoms
        .iter()
        .map(|s| s.trim().to_lowercase())
        .collect();

    let mut vector = Vec::with_capacity(vocabulary.len() + 2);
    vector.push(age);
    vector.push(gender_code as f64);
    for entry in vocabulary.entries() {
        vector.push(if normalized.contains(entry) { 1.0 } else { 0.0 });
    }
    Ok(vector)
}

#[cfg(test)]
mod tests {
    use super::*;

    fn vocab() -> SymptomVocabulary {
        SymptomVocabulary::new(["fever", "cough", "headache"])
    }

    fn genders() -> LabelEncoder {
        LabelEncoder::new(["Female", "Male"])
    }

    fn owned(items: &[&str]) -> Vec<String> {
        items.iter().map(|s| s.to_string()).collect()
    }

    #[test]
    fn flags_are_indicator_of_presence() {
        let v = build_feature_vector(30.0, "Male", &owned(&["fever", "headache"]), &vocab(), &genders())
            .unwrap();
        assert_eq!(v, vec![30.0, 1.0, 1.0, 0.0, 1.0]);
    }

    #[test]
    fn symptom_matching_ignores_case_and_whitespace() {
        let v = build_feature_vector(30.0, "Male", &owned(&["Fever", " COUGH "]), &vocab(), &genders())
            .unwrap();
        assert_eq!(&v[2..], &[1.0, 1.0, 0.0]);
    }

    #[test]
    fn unknown_symptoms_have_no_effect() {
        let with_unknown =
            build_feature_vector(30.0, "Male", &owned(&["fever", "unknown_symptom"]), &vocab(), &genders())
                .unwrap();
        let without =
            build_feature_vector(30.0, "Male", &owned(&["fever"]), &vocab(), &genders()).unwrap();
        assert_eq!(with_unknown, without);
    }

    #[test]
    fn empty_symptoms_give_all_zero_flags() {
        let v = build_feature_vector(30.0, "Female", &[], &vocab(), &genders()).unwrap();
        assert_eq!(&v[2..], &[0.0, 0.0, 0.0]);
    }

    #[test]
    fn vector_length_is_vocab_plus_two() {
        let v = build_feature_vector(30.0, "Male", &[], &vocab(), &genders()).unwrap();
        assert_eq!(v.len(), vocab().len() + 2);
    }

    #[test]
    fn gender_normalization_is_case_insensitive() {
        let expected =
            build_feature_vector(30.0, "Male", &[], &vocab(), &genders()).unwrap();
        for raw in ["male", "MALE", "  Male ", "m"] {
            let v = build_feature_vector(30.0, raw, &[], &vocab(), &genders()).unwrap();
            assert_eq!(v, expected, "gender {raw:?} should encode like Male");
        }
    }

    #[test]
    fn f_prefix_collapses_to_female() {
        let v = build_feature_vector(30.0, "f", &[], &vocab(), &genders()).unwrap();
        assert_eq!(v[1], 0.0);
    }

    #[test]
    fn unrecognized_gender_is_an_error() {
        let err = build_feature_vector(30.0, "Other", &[], &vocab(), &genders()).unwrap_err();
        assert_eq!(err, EncodingError::UnknownGender("Other".to_string()));
    }

    #[test]
    fn non_finite_age_is_an_error() {
        let err = build_feature_vector(f64::NAN, "Male", &[], &vocab(), &genders()).unwrap_err();
        assert!(matches!(err, EncodingError::InvalidAge(_)));
    }

    #[test]
    fn canonicalize_lowercases_tail() {
        assert_eq!(canonicalize_gender("  oTHer "), "Other");
        assert_eq!(canonicalize_gender(""), "");
        assert_eq!(canonicalize_gender("fEMALE"), "Female");
    }
}
