//! Utility functions

use uuid::Uuid;

pub fn is_valid_uuid(s: &str) -> bool {
    Uuid::parse_str(s).is_ok()
}

/// Masks the local part of an address for log output.
pub fn mask_email(email: &str) -> String {
    match email.find('@') {
        Some(0) | None => "***".to_string(),
        Some(at_pos) => {
            let (local, domain) = email.split_at(at_pos);
            let keep = local.chars().take(if local.chars().count() <= 2 { 1 } else { 2 });
            format!("{}***{}", keep.collect::<String>(), domain)
        }
    }
}
