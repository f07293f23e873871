use cnpj_alfa::{compute_dv, format, normalize, validate, Cnpj, BODY_LEN, CNPJ_LEN};
use proptest::prelude::*;

fn body_strategy() -> impl Strategy<Value = String> {
    "[0-9A-Z]{12}"
}

// Property: normalizing twice is the same as normalizing once
proptest! {
    #[test]
    fn prop_normalize_idempotent(s in "\\PC*") {
        let once = normalize(&s);
        prop_assert_eq!(normalize(&once), once);
    }
}

// Property: normalized output only holds 0-9 and A-Z
proptest! {
    #[test]
    fn prop_normalize_alphabet(s in "\\PC*") {
        prop_assert!(normalize(&s)
            .chars()
            .all(|c| c.is_ascii_digit() || c.is_ascii_uppercase()));
    }
}

// Property: a body followed by its computed digits always validates
proptest! {
    #[test]
    fn prop_computed_digits_validate(body in body_strategy()) {
        let digits = compute_dv(&body).unwrap();
        prop_assert!(digits.first <= 9 && digits.second <= 9);

        let document = format!("{}{}{}", body, digits.first, digits.second);
        prop_assert!(validate(&document));
        prop_assert!(validate(&document.to_lowercase()));
        prop_assert!(validate(&format(&document)));
    }
}

// Property: any other numeric suffix is rejected
proptest! {
    #[test]
    fn prop_wrong_suffix_rejected(body in body_strategy(), suffix in 0u8..100) {
        let digits = compute_dv(&body).unwrap();
        let suffix = format!("{suffix:02}");
        prop_assume!(suffix != digits.to_string());

        let document = format!("{}{}", body, suffix);
        prop_assert!(!validate(&document));
    }
}

// Property: stripping punctuation from the formatted form gives back the normalized input
proptest! {
    #[test]
    fn prop_format_preserves_characters(s in "[0-9a-zA-Z./ -]{0,24}") {
        let normalized = normalize(&s);
        let formatted = format(&s);
        if normalized.len() == CNPJ_LEN {
            prop_assert_eq!(normalize(&formatted), normalized);
            prop_assert_eq!(formatted.len(), 18);
        } else {
            prop_assert_eq!(formatted, normalized);
        }
    }
}

// Property: typed parsing agrees with the boolean validator
proptest! {
    #[test]
    fn prop_parse_agrees_with_validate(s in "[0-9A-Za-z./-]{10,20}") {
        prop_assert_eq!(Cnpj::parse(&s).is_ok(), validate(&s));
    }
}

// Property: completing a body and parsing the result gives the same document
proptest! {
    #[test]
    fn prop_from_body_parses(body in body_strategy()) {
        let cnpj = Cnpj::from_body(&body).unwrap();
        prop_assert_eq!(cnpj.body(), body.as_str());
        prop_assert_eq!(Cnpj::parse(&cnpj.to_string()).unwrap(), cnpj);
    }
}

// Property: bodies of any other length are rejected
proptest! {
    #[test]
    fn prop_compute_dv_rejects_length(body in "[0-9A-Z]{0,20}") {
        prop_assume!(body.len() != BODY_LEN);
        prop_assert!(compute_dv(&body).unwrap_err().is_length_error());
    }
}
