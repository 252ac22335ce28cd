//! Property-based tests for the rule engine.

use fieldrules::prelude::*;
use fieldrules::validate;
use proptest::prelude::*;

#[derive(Record)]
struct Bounded {
    #[validate("min:2 max:6")]
    pub name: String,
    #[validate("len:3")]
    pub code: String,
}

#[derive(Record)]
struct Unruled {
    pub name: String,
    pub other: String,
}

// ============================================================================
// IDEMPOTENCY: validate(x) == validate(x)
// ============================================================================

proptest! {
    #[test]
    fn validate_is_idempotent(name in ".{0,10}", code in ".{0,5}") {
        let record = Bounded { name, code };
        prop_assert_eq!(validate(&record), validate(&record));
    }

    #[test]
    fn records_without_rules_always_pass(name in ".*", other in ".*") {
        let record = Unruled { name, other };
        prop_assert!(validate(&record).is_ok());
    }
}

// ============================================================================
// PREDICATES AGREE WITH CHAR COUNTS
// ============================================================================

proptest! {
    #[test]
    fn violation_count_matches_length_predicates(name in ".{0,10}", code in ".{0,5}") {
        let name_len = name.chars().count();
        let code_len = code.chars().count();
        let expected = usize::from(name_len < 2)
            + usize::from(name_len > 6)
            + usize::from(code_len != 3);

        let record = Bounded { name, code };
        let actual = match validate(&record) {
            Ok(()) => 0,
            Err(err) => err.violations().map_or(0, ValidationErrors::len),
        };
        prop_assert_eq!(actual, expected);
    }

    #[test]
    fn report_lines_match_violation_count(name in ".{0,10}", code in ".{0,5}") {
        if let Err(err) = validate(&Bounded { name, code }) {
            let errors = err.violations().unwrap();
            let report = errors.to_string();
            prop_assert_eq!(report.split('\n').count(), errors.len());
            prop_assert!(report.split('\n').all(|line| !line.is_empty()));
        }
    }
}
