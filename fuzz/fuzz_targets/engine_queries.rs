#![no_main]

// Harness: engine_queries
// Focus: arbitrary role tags, permission strings and module names never panic,
// and unknown role tags never grant anything.

use arbitrary::Arbitrary;
use compliance_access::{create_access_control, Principal, Role};
use libfuzzer_sys::fuzz_target;

#[derive(Arbitrary, Debug)]
struct QueryFrame {
    id: String,
    role: String,
    permission: String,
    module: String,
    action: String,
    resource: String,
}

fuzz_target!(|frame: QueryFrame| {
    let user = Principal::new(frame.id, frame.role);
    let access = create_access_control(Some(&user));

    let has = access.has_permission(&frame.permission);
    let module = access.can_access_module(&frame.module);
    let composed = format!("{}:{}", frame.resource, frame.action);
    assert_eq!(
        access.can_perform_action(&frame.action, &frame.resource),
        access.has_permission(&composed)
    );
    let _ = access.role_info();

    if Role::from_tag(&user.role).is_none() {
        assert!(!has);
        assert!(!module);
        assert!(access.accessible_modules().is_empty());
    }
});
