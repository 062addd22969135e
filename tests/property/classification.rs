// Copyright (c) 2025 - Cowboy AI, Inc.
//! Property-Based Tests for Result Classification

use aci_l3out::outcome::classify;
use aci_l3out::session::RawResponse;
use aci_l3out::{Action, L3OutError};
use proptest::prelude::*;

fn any_action() -> impl Strategy<Value = Action> {
    prop_oneof![Just(Action::Post), Just(Action::Get), Just(Action::Delete)]
}

proptest! {
    /// `changed` holds exactly for a successful create
    #[test]
    fn prop_changed_only_for_create(action in any_action(), body in ".{0,64}") {
        let result = classify(action, RawResponse { status: 200, body: body.clone() }).unwrap();

        prop_assert_eq!(result.changed, action == Action::Post);
        prop_assert_eq!(result.status, 200);
        prop_assert_eq!(result.response, body);
    }

    /// Any other status fails and surfaces status and body verbatim
    #[test]
    fn prop_non_200_surfaces_controller_answer(
        action in any_action(),
        status in (100u16..600).prop_filter("not 200", |s| *s != 200),
        body in ".{0,64}",
    ) {
        let err = classify(action, RawResponse { status, body: body.clone() }).unwrap_err();

        let is_operation_failure = matches!(err, L3OutError::OperationFailed { .. });
        prop_assert!(is_operation_failure);
        prop_assert_eq!(err.status(), Some(status));
        prop_assert_eq!(err.response(), Some(body.as_str()));
    }
}
