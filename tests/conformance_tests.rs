//! Behavioural scenarios a dashboard relies on, exercised through the public API only.

use compliance_access::test_utils::init_tracing;
use compliance_access::{create_access_control, AccessError, Principal, Role};

fn principal(id: &str, role: &str) -> Principal {
    Principal::new(id, role)
}

#[test]
fn fail_closed_for_unknown_role() {
    init_tracing();
    let ghost = principal("x", "nonexistent");
    let access = create_access_control(Some(&ghost));
    for module in compliance_access::permission::modules::ALL {
        assert!(!access.can_access_module(module));
    }
    assert!(!access.has_permission("permits:read"));
    assert!(!access.can_view_reports());
}

#[test]
fn fail_closed_for_null_user() {
    let access = create_access_control(None::<&Principal>);
    assert!(!access.has_permission("permits:read"));
    assert!(!access.can_access_module("permits"));
    assert!(!access.can_edit_user(Some(&principal("A", "worker"))));
    assert!(access.accessible_modules().is_empty());
}

#[test]
fn super_admin_self_edit_exception() {
    let a = principal("A", "super_admin");
    let access = create_access_control(Some(&a));
    assert!(access.can_edit_user(Some(&principal("A", "super_admin"))));
    assert!(!access.can_edit_user(Some(&principal("B", "super_admin"))));
}

#[test]
fn admin_hierarchy_edit() {
    let a = principal("A", "admin");
    let access = create_access_control(Some(&a));
    assert!(access.can_edit_user(Some(&principal("B", "manager"))));
    assert!(!access.can_edit_user(Some(&principal("C", "admin"))));
}

#[test]
fn self_only_edit_for_non_privileged_roles() {
    let a = principal("A", "worker");
    let access = create_access_control(Some(&a));
    assert!(access.can_edit_user(Some(&principal("A", "worker"))));
    assert!(!access.can_edit_user(Some(&principal("B", "worker"))));
}

#[test]
fn manager_dashboard() {
    let m = principal("m-1", "manager");
    let access = create_access_control(Some(&m));
    assert!(!access.can_access_module("settings"));
    assert!(access.can_access_module("permits"));
    assert!(access.can_create_caps());
    assert!(!access.can_manage_settings());
    assert!(!access.is_admin());
}

#[test]
fn auditor_reporting() {
    let a = principal("a-1", "auditor");
    let access = create_access_control(Some(&a));
    assert!(access.can_view_reports());
    assert!(access.can_create_reports());
    assert!(!access.can_manage_users());
}

#[test]
fn supervisor_and_auditor_share_a_level() {
    let s = principal("s", "supervisor");
    let a = principal("a", "auditor");
    let s_info = create_access_control(Some(&s)).role_info();
    let a_info = create_access_control(Some(&a)).role_info();
    assert_eq!(s_info.level, a_info.level);
    assert_ne!(s_info.label, a_info.label);
}

#[test]
fn committee_member_handles_grievances_but_not_training() {
    let c = principal("c", "committee_member");
    let access = create_access_control(Some(&c));
    assert!(access.can_handle_grievances());
    assert!(access.can_manage_committees() == access.has_permission("committees:update"));
    assert!(!access.can_manage_training());
    assert_eq!(access.role_info().label, "Committee Member");
}

#[test]
fn api_guard_propagates_denial() {
    fn delete_permit(user: &Principal, permit_id: &str) -> Result<String, AccessError> {
        create_access_control(Some(user)).require_permission("permits:delete")?;
        Ok(format!("deleted {permit_id}"))
    }

    let admin = Principal::with_role("adm", Role::Admin);
    let supervisor = Principal::with_role("sup", Role::Supervisor);
    assert_eq!(delete_permit(&admin, "P-9").unwrap(), "deleted P-9");
    assert_eq!(
        delete_permit(&supervisor, "P-9").unwrap_err(),
        AccessError::PermissionDenied { role: "supervisor".into(), permission: "permits:delete".into() }
    );
}

#[test]
fn shared_engine_across_threads() {
    let handles: Vec<_> = Role::ALL
        .into_iter()
        .map(|role| {
            std::thread::spawn(move || {
                let user = Principal::with_role("t", role);
                create_access_control(Some(&user)).can_access_module("dashboard")
            })
        })
        .collect();
    for handle in handles {
        assert!(handle.join().unwrap());
    }
}
