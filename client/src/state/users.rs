//! User-management list helpers for the superuser profile tab.

#[cfg(test)]
#[path = "users_test.rs"]
mod users_test;

use crate::net::types::UserProfile;

pub const ROLE_OPTIONS: [&str; 3] = ["User", "Admin", "Superuser"];
pub const STATUS_OPTIONS: [&str; 3] = ["Active", "Inactive", "Suspended"];

/// Users whose name, surname, email or contact number contains `query`
/// (case-insensitive). A blank query keeps everyone.
#[must_use]
pub fn filter_users(users: &[UserProfile], query: &str) -> Vec<UserProfile> {
    let query = query.trim().to_lowercase();
    if query.is_empty() {
        return users.to_vec();
    }
    users
        .iter()
        .filter(|u| {
            [&u.name, &u.surname, &u.email, &u.contact_number]
                .iter()
                .any(|field| field.to_lowercase().contains(&query))
        })
        .cloned()
        .collect()
}

/// "Name Surname", trimmed.
#[must_use]
pub fn full_name(user: &UserProfile) -> String {
    format!("{} {}", user.name.trim(), user.surname.trim()).trim().to_owned()
}
