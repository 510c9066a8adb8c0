//! Transition tables for job posts and applications.

use talentfit::lifecycle::{
    ApplicationStatus, EntityType, JobPostStatus, LifecycleGuard, LifecycleState,
    LifecycleStatus, TransitionError, TransitionRequest,
};

const APPLICATION_STATES: [ApplicationStatus; 5] = [
    ApplicationStatus::Applied,
    ApplicationStatus::InReview,
    ApplicationStatus::Hired,
    ApplicationStatus::Rejected,
    ApplicationStatus::Withdrawn,
];

const JOB_POST_STATES: [JobPostStatus; 3] = [
    JobPostStatus::Draft,
    JobPostStatus::Published,
    JobPostStatus::Closed,
];

fn request(entity_type: EntityType, current: &str, requested: &str) -> TransitionRequest {
    TransitionRequest {
        entity_type,
        current_state: current.to_string(),
        requested_state: requested.to_string(),
    }
}

#[test]
fn applied_cannot_jump_straight_to_hired() {
    let guard = LifecycleGuard::default();
    match guard.application(ApplicationStatus::Applied, ApplicationStatus::Hired) {
        Err(TransitionError::InvalidTransition { entity, from, to }) => {
            assert_eq!(entity, EntityType::Application);
            assert_eq!(from, "APPLIED");
            assert_eq!(to, "HIRED");
        }
        other => panic!("expected invalid transition, got {other:?}"),
    }
}

#[test]
fn in_review_can_be_hired() {
    let guard = LifecycleGuard::default();
    assert_eq!(
        guard.application(ApplicationStatus::InReview, ApplicationStatus::Hired),
        Ok(ApplicationStatus::Hired)
    );
}

#[test]
fn closed_job_posts_cannot_be_republished() {
    let guard = LifecycleGuard::default();
    assert!(matches!(
        guard.job_post(JobPostStatus::Closed, JobPostStatus::Published),
        Err(TransitionError::InvalidTransition { .. })
    ));
}

#[test]
fn application_table_matches_the_documented_edges() {
    use ApplicationStatus::*;
    let allowed = [
        (Applied, InReview),
        (Applied, Withdrawn),
        (InReview, Hired),
        (InReview, Rejected),
        (InReview, Withdrawn),
    ];
    let guard = LifecycleGuard::default();

    for from in APPLICATION_STATES {
        for to in APPLICATION_STATES {
            let expected = allowed.contains(&(from, to));
            assert_eq!(
                guard.application(from, to).is_ok(),
                expected,
                "{from:?} -> {to:?}"
            );
        }
    }
}

#[test]
fn job_post_table_matches_the_documented_edges() {
    use JobPostStatus::*;
    let allowed = [(Draft, Published), (Published, Closed), (Published, Draft)];
    let guard = LifecycleGuard::default();

    for from in JOB_POST_STATES {
        for to in JOB_POST_STATES {
            let expected = allowed.contains(&(from, to));
            assert_eq!(guard.job_post(from, to).is_ok(), expected, "{from:?} -> {to:?}");
        }
    }
    assert!(Closed.is_terminal());
}

#[test]
fn string_requests_are_parsed_and_checked() {
    let guard = LifecycleGuard::default();

    assert_eq!(
        guard
            .check(&request(EntityType::Application, "IN_REVIEW", "REJECTED"))
            .map(|accepted| accepted.to),
        Ok(LifecycleStatus::Application(ApplicationStatus::Rejected))
    );
    assert_eq!(
        guard
            .check(&request(EntityType::JobPost, "draft", "published"))
            .map(|accepted| (accepted.from.label(), accepted.to.label())),
        Ok(("DRAFT", "PUBLISHED"))
    );
    assert!(matches!(
        guard.check(&request(EntityType::Application, "APPLIED", "HIRED")),
        Err(TransitionError::InvalidTransition { .. })
    ));
    match guard.check(&request(EntityType::JobPost, "ARCHIVED", "DRAFT")) {
        Err(TransitionError::UnknownState { entity, state }) => {
            assert_eq!(entity, EntityType::JobPost);
            assert_eq!(state, "ARCHIVED");
        }
        other => panic!("expected unknown state, got {other:?}"),
    }
}

#[test]
fn requests_deserialize_from_the_wire_shape() {
    let payload = r#"{"entity_type":"application","current_state":"APPLIED","requested_state":"WITHDRAWN"}"#;
    let request: TransitionRequest = serde_json::from_str(payload).expect("valid json");

    let accepted = LifecycleGuard::default()
        .check(&request)
        .expect("legal transition");
    assert_eq!(
        serde_json::to_value(accepted).expect("serialize"),
        serde_json::json!({"from": "APPLIED", "to": "WITHDRAWN"})
    );
}
