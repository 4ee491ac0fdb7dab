//! Unit tests for mutation authorization.

use crate::access::{
    AccessDenied, AccessPolicy, MutationKind, Principal, StatusChangeRule, TaskAudience,
    can_manage_users,
};
use crate::identity::domain::{Role, UserId};
use rstest::rstest;

fn principal(id: i64, role: Role) -> Principal {
    Principal::new(UserId::from_persisted(id), role)
}

fn employee_task() -> TaskAudience {
    TaskAudience::new(
        UserId::from_persisted(10),
        Some(principal(11, Role::Employee)),
    )
}

fn manager_task() -> TaskAudience {
    TaskAudience::new(
        UserId::from_persisted(10),
        Some(principal(12, Role::Manager)),
    )
}

#[rstest]
#[case(Role::Employee, false)]
#[case(Role::Manager, true)]
#[case(Role::Ceo, true)]
#[case(Role::Admin, true)]
fn create_requires_manager_rank(#[case] role: Role, #[case] expected: bool) {
    let policy = AccessPolicy::default();
    assert_eq!(
        policy.can_mutate(principal(1, role), MutationKind::Create, None),
        expected
    );
}

#[rstest]
#[case(MutationKind::UpdateFields)]
#[case(MutationKind::Reassign)]
fn field_edits_require_manager_rank_and_visibility(#[case] kind: MutationKind) {
    let policy = AccessPolicy::default();

    assert!(!policy.can_mutate(principal(11, Role::Employee), kind, Some(&employee_task())));
    assert!(policy.can_mutate(principal(20, Role::Manager), kind, Some(&employee_task())));
    assert!(!policy.can_mutate(principal(20, Role::Manager), kind, Some(&ceo_task())));
    assert!(policy.can_mutate(principal(21, Role::Ceo), kind, Some(&manager_task())));
}

fn ceo_task() -> TaskAudience {
    TaskAudience::new(UserId::from_persisted(10), Some(principal(13, Role::Ceo)))
}

#[rstest]
fn any_viewer_may_change_status_by_default() {
    let policy = AccessPolicy::default();
    let assignee = principal(11, Role::Employee);
    let peer = principal(30, Role::Employee);

    assert!(policy.can_mutate(assignee, MutationKind::ChangeStatus, Some(&employee_task())));
    assert!(policy.can_mutate(peer, MutationKind::ChangeStatus, Some(&employee_task())));
    assert!(!policy.can_mutate(peer, MutationKind::ChangeStatus, Some(&manager_task())));
}

#[rstest]
#[case(AccessPolicy::default(), StatusChangeRule::AnyViewer)]
#[case(AccessPolicy::new(StatusChangeRule::ManagersOnly), StatusChangeRule::ManagersOnly)]
fn policy_reports_its_status_change_rule(
    #[case] policy: AccessPolicy,
    #[case] expected: StatusChangeRule,
) {
    assert_eq!(policy.status_change(), expected);
}

#[rstest]
fn managers_only_rule_also_requires_rank() {
    let policy = AccessPolicy::new(StatusChangeRule::ManagersOnly);

    assert!(!policy.can_mutate(
        principal(11, Role::Employee),
        MutationKind::ChangeStatus,
        Some(&employee_task())
    ));
    assert!(policy.can_mutate(
        principal(20, Role::Manager),
        MutationKind::ChangeStatus,
        Some(&employee_task())
    ));
}

#[rstest]
#[case(MutationKind::UpdateFields)]
#[case(MutationKind::ChangeStatus)]
#[case(MutationKind::Reassign)]
fn task_mutations_without_a_task_are_denied(#[case] kind: MutationKind) {
    let policy = AccessPolicy::default();
    assert_eq!(
        policy.authorize(principal(1, Role::Admin), kind, None),
        Err(AccessDenied)
    );
}

#[rstest]
#[case(Role::Employee, false)]
#[case(Role::Manager, false)]
#[case(Role::Ceo, true)]
#[case(Role::Admin, true)]
fn user_administration_is_reserved(#[case] role: Role, #[case] expected: bool) {
    assert_eq!(can_manage_users(principal(1, role)), expected);
}
