//! Property tests for the composition operators.

use linkage_compose::{ComposeOptions, LevelSettings, NegateOptions, and_, not_, or_};
use proptest::prelude::*;

fn condition() -> impl Strategy<Value = String> {
    "[a-z]{1,6}_l (=|<>|<=) [a-z]{1,6}_r"
}

fn settings() -> impl Strategy<Value = LevelSettings> {
    (condition(), proptest::option::of(any::<bool>())).prop_map(|(condition, null_flag)| {
        LevelSettings {
            is_null_level: null_flag,
            ..LevelSettings::new(condition)
        }
    })
}

fn expected_join(inputs: &[LevelSettings], separator: &str) -> String {
    inputs
        .iter()
        .map(|settings| format!("({})", settings.sql_condition))
        .collect::<Vec<_>>()
        .join(separator)
}

proptest! {
    #[test]
    fn and_joins_in_input_order(inputs in prop::collection::vec(settings(), 1..6)) {
        let merged = and_(inputs.clone(), ComposeOptions::default()).unwrap();
        prop_assert_eq!(merged.sql_condition(), expected_join(&inputs, " AND "));
    }

    #[test]
    fn or_joins_in_input_order(inputs in prop::collection::vec(settings(), 1..6)) {
        let merged = or_(inputs.clone(), ComposeOptions::default()).unwrap();
        prop_assert_eq!(merged.sql_condition(), expected_join(&inputs, " OR "));
    }

    #[test]
    fn null_level_only_when_all_inputs_are(inputs in prop::collection::vec(settings(), 1..6)) {
        let all_null = inputs.iter().all(|s| s.is_null_level == Some(true));
        let merged = and_(inputs, ComposeOptions::default()).unwrap();
        prop_assert_eq!(merged.null_level_flag(), all_null.then_some(true));
    }

    #[test]
    fn null_level_override_always_wins(
        inputs in prop::collection::vec(settings(), 1..6),
        flag in any::<bool>(),
    ) {
        let merged = or_(inputs, ComposeOptions::default().with_null_level(flag)).unwrap();
        prop_assert_eq!(merged.null_level_flag(), Some(flag));
    }

    #[test]
    fn explicit_label_is_verbatim(
        inputs in prop::collection::vec(settings(), 1..6),
        label in "[A-Za-z ]{1,20}",
    ) {
        let merged = and_(inputs, ComposeOptions::default().with_label(label.clone())).unwrap();
        prop_assert_eq!(merged.label_for_charts(), label.as_str());
    }

    #[test]
    fn not_wraps_and_never_flags(input in settings()) {
        let negated = not_(input.clone(), NegateOptions::default()).unwrap();
        prop_assert_eq!(negated.sql_condition(), format!("NOT ({})", input.sql_condition));
        prop_assert_eq!(negated.null_level_flag(), None);
    }
}
