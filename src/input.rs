// Input: validation and loading of account records.
//
// The engine evaluates anything it is given. This module is where the
// form-level constraints live: a username is required and the numeric
// fields must be non-negative.

use std::path::Path;

use anyhow::{Context, Result};
use serde::Deserialize;
use tracing::{info, warn};

use crate::models::AccountData;

/// Check that a record satisfies the input constraints.
pub fn validate(data: &AccountData) -> Result<()> {
    if data.username.trim().is_empty() {
        anyhow::bail!("Username is required");
    }

    let numeric = [
        ("accountAge", data.account_age),
        ("followers", data.followers),
        ("following", data.following),
        ("bioLength", data.bio_length),
    ];
    for (field, value) in numeric {
        if value < 0 {
            anyhow::bail!("{field} must be non-negative (got {value}) for @{}", data.username);
        }
    }
    Ok(())
}

/// A batch file holds either one record or a list of them.
#[derive(Deserialize)]
#[serde(untagged)]
enum BatchFile {
    Many(Vec<AccountData>),
    One(AccountData),
}

/// Parse account records from JSON text (a single object or an array).
pub fn parse_accounts(json: &str) -> Result<Vec<AccountData>> {
    let parsed: BatchFile =
        serde_json::from_str(json).context("Expected an account object or an array of them")?;
    Ok(match parsed {
        BatchFile::Many(accounts) => accounts,
        BatchFile::One(account) => vec![account],
    })
}

/// Read and parse account records from a JSON file.
pub fn load_accounts(path: &Path) -> Result<Vec<AccountData>> {
    let text = std::fs::read_to_string(path)
        .with_context(|| format!("Failed to read {}", path.display()))?;
    let accounts =
        parse_accounts(&text).with_context(|| format!("Failed to parse {}", path.display()))?;
    info!(path = %path.display(), count = accounts.len(), "Loaded account records");
    Ok(accounts)
}

/// Keep only records that pass validation, logging the ones that don't.
pub fn retain_valid(accounts: Vec<AccountData>) -> Vec<AccountData> {
    accounts
        .into_iter()
        .enumerate()
        .filter_map(|(i, account)| match validate(&account) {
            Ok(()) => Some(account),
            Err(e) => {
                warn!(index = i, error = %e, "Skipping invalid account record");
                None
            }
        })
        .collect()
}
