#![no_main]

// Harness: edit_decision
// Focus: the user-edit decision table. Only super admins and admins may edit
// someone other than themselves, and nobody may edit a different super admin.

use arbitrary::Arbitrary;
use compliance_access::{create_access_control, Principal, Role};
use libfuzzer_sys::fuzz_target;

#[derive(Arbitrary, Debug)]
struct EditFrame {
    actor_id: String,
    actor_role: u8,
    target_id: String,
    target_role: u8,
}

fn tag(byte: u8) -> String {
    match Role::ALL.get(byte as usize % 8) {
        Some(role) => role.as_str().to_string(),
        None => "unknown".to_string(),
    }
}

fuzz_target!(|frame: EditFrame| {
    let actor = Principal::new(frame.actor_id, tag(frame.actor_role));
    let target = Principal::new(frame.target_id, tag(frame.target_role));
    let allowed = create_access_control(Some(&actor)).can_edit_user(Some(&target));

    let same = !actor.id.is_empty() && actor.id == target.id;
    if target.role == "super_admin" && !same {
        assert!(!allowed);
    }
    if !matches!(actor.role.as_str(), "super_admin" | "admin") && !same {
        assert!(!allowed);
    }
});
