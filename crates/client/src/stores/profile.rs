//! Global cache of the signed-in user's employee profile.

use dioxus::prelude::*;
use monolite_shared::EmployeeProfile;

pub static CURRENT_PROFILE: GlobalSignal<Option<EmployeeProfile>> = Signal::global(|| None);

pub fn set_profile(profile: EmployeeProfile) {
    *CURRENT_PROFILE.write() = Some(profile);
}

pub fn clear() {
    *CURRENT_PROFILE.write() = None;
}
