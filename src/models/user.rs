// SPDX-License-Identifier: MIT
// Copyright 2026 Roland Dreier <roland@rolandd.dev>

//! User account model.

use serde::{Deserialize, Serialize};
#[cfg(feature = "binding-generation")]
use ts_rs::TS;

/// Text the user must type to confirm account deletion.
pub const DELETE_CONFIRMATION: &str = "DELETE";

/// Lifecycle status stored on the user document.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[cfg_attr(feature = "binding-generation", derive(TS))]
#[cfg_attr(
    feature = "binding-generation",
    ts(export, export_to = "web/src/lib/generated/")
)]
#[serde(rename_all = "lowercase")]
pub enum AccountStatus {
    Active,
    Deleted,
}

/// Partial update for `users/{uid}` marking the account deleted.
///
/// The account is only flagged; removing data is left to the backend.
#[derive(Debug, Clone, PartialEq, Serialize)]
#[cfg_attr(feature = "binding-generation", derive(TS))]
#[cfg_attr(
    feature = "binding-generation",
    ts(export, export_to = "web/src/lib/generated/")
)]
#[serde(rename_all = "camelCase")]
pub struct AccountDeletion {
    pub account_status: AccountStatus,
}

impl AccountDeletion {
    /// Build the patch if the confirmation text matches exactly.
    pub fn confirm(confirmation: &str) -> Option<Self> {
        (confirmation == DELETE_CONFIRMATION).then_some(Self {
            account_status: AccountStatus::Deleted,
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_confirm_requires_exact_text() {
        assert!(AccountDeletion::confirm("DELETE").is_some());
        assert!(AccountDeletion::confirm("delete").is_none());
        assert!(AccountDeletion::confirm(" DELETE").is_none());
        assert!(AccountDeletion::confirm("").is_none());
    }

    #[test]
    fn test_patch_shape() {
        let patch = AccountDeletion::confirm("DELETE").unwrap();
        assert_eq!(
            serde_json::to_value(patch).unwrap(),
            serde_json::json!({ "accountStatus": "deleted" })
        );
    }
}
