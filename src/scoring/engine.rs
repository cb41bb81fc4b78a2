// Risk scoring engine: the rule table and the single-pass evaluator.
//
// Each rule is independent: every rule is checked, the points of the ones that
// fire are added up, and each fired rule leaves a TriggeredRule behind as
// evidence. The total is capped at 100 and banded into a RiskLevel.
//
// The engine never fails. Whatever values the caller passes in are evaluated
// as-is (a negative account age is still "< 30 days").

use chrono::{DateTime, SecondsFormat, Utc};
use tracing::debug;

use crate::models::{AccountData, AnalysisResult, RiskLevel, TriggeredRule};
use crate::scoring::username;

/// Accounts younger than this many days are considered new.
pub const NEW_ACCOUNT_DAYS: i64 = 30;
/// Accounts with fewer followers than this are considered low-reach.
pub const LOW_FOLLOWERS: i64 = 50;
/// Follower/following ratios below this are suspicious.
pub const SUSPICIOUS_RATIO: f64 = 0.2;
/// Bios shorter than this many characters count as empty.
pub const SHORT_BIO_CHARS: i64 = 10;
/// The score never exceeds this value.
pub const MAX_SCORE: u32 = 100;

/// A single heuristic: a label, its weight, a predicate, and an explanation.
pub struct Rule {
    pub name: &'static str,
    pub points: u32,
    /// Human-readable condition, for the rule listing
    pub condition: &'static str,
    fires: fn(&AccountData) -> bool,
    describe: fn(&AccountData) -> String,
}

impl Rule {
    /// Whether this rule fires for the given account.
    pub fn fires(&self, data: &AccountData) -> bool {
        (self.fires)(data)
    }

    /// The evidence record for this rule, with the account's values filled in.
    pub fn trigger(&self, data: &AccountData) -> TriggeredRule {
        TriggeredRule {
            rule: self.name.to_string(),
            points: self.points,
            description: (self.describe)(data),
        }
    }
}

/// The rules, in evaluation order. Results list triggered rules in this order.
pub static RULES: [Rule; 6] = [
    Rule {
        name: "New Account",
        points: 30,
        condition: "account age < 30 days",
        fires: is_new_account,
        describe: describe_new_account,
    },
    Rule {
        name: "Low Followers",
        points: 20,
        condition: "followers < 50",
        fires: has_low_followers,
        describe: describe_low_followers,
    },
    Rule {
        name: "Suspicious Ratio",
        points: 15,
        condition: "follower/following ratio < 0.2 (following > 0)",
        fires: has_suspicious_ratio,
        describe: describe_suspicious_ratio,
    },
    Rule {
        name: "Suspicious Username",
        points: 15,
        condition: "username matches a fake account pattern",
        fires: has_suspicious_username,
        describe: describe_suspicious_username,
    },
    Rule {
        name: "No Profile Photo",
        points: 10,
        condition: "no profile photo",
        fires: lacks_profile_photo,
        describe: describe_no_profile_photo,
    },
    Rule {
        name: "Short/Empty Bio",
        points: 10,
        condition: "bio < 10 characters",
        fires: has_short_bio,
        describe: describe_short_bio,
    },
];

/// Analyze an account, stamping the result with the current time.
pub fn analyze(data: &AccountData) -> AnalysisResult {
    analyze_at(data, Utc::now())
}

/// Analyze an account with an explicit timestamp.
///
/// Apart from the timestamp this is a pure function of `data`.
pub fn analyze_at(data: &AccountData, at: DateTime<Utc>) -> AnalysisResult {
    let triggered_rules: Vec<TriggeredRule> = RULES
        .iter()
        .filter(|rule| rule.fires(data))
        .map(|rule| rule.trigger(data))
        .collect();

    let total: u32 = triggered_rules.iter().map(|r| r.points).sum();
    let risk_score = total.min(MAX_SCORE);
    let risk_level = RiskLevel::from_score(risk_score);

    debug!(
        username = data.username.as_str(),
        total,
        score = risk_score,
        level = risk_level.as_str(),
        rules = triggered_rules.len(),
        "Analyzed account"
    );

    AnalysisResult {
        id: None,
        username: data.username.clone(),
        account_data: data.clone(),
        risk_score,
        risk_level,
        triggered_rules,
        timestamp: at.to_rfc3339_opts(SecondsFormat::Millis, true),
    }
}

/// Followers divided by following.
///
/// Total over all inputs: with nobody followed the ratio is infinite when the
/// account has followers and zero otherwise.
pub fn follower_ratio(followers: i64, following: i64) -> f64 {
    if following == 0 {
        return if followers > 0 { f64::INFINITY } else { 0.0 };
    }
    followers as f64 / following as f64
}

fn is_new_account(data: &AccountData) -> bool {
    data.account_age < NEW_ACCOUNT_DAYS
}

fn describe_new_account(data: &AccountData) -> String {
    format!(
        "Account is only {} days old (< {NEW_ACCOUNT_DAYS} days threshold)",
        data.account_age
    )
}

fn has_low_followers(data: &AccountData) -> bool {
    data.followers < LOW_FOLLOWERS
}

fn describe_low_followers(data: &AccountData) -> String {
    format!(
        "Only {} followers (< {LOW_FOLLOWERS} threshold)",
        data.followers
    )
}

// The following > 0 guard stays even though the ratio alone would usually
// exclude it: with 0 followers and 0 following the ratio is 0.0.
fn has_suspicious_ratio(data: &AccountData) -> bool {
    follower_ratio(data.followers, data.following) < SUSPICIOUS_RATIO && data.following > 0
}

fn describe_suspicious_ratio(data: &AccountData) -> String {
    format!(
        "Follower/Following ratio is {} (< {SUSPICIOUS_RATIO} threshold)",
        format_ratio(follower_ratio(data.followers, data.following))
    )
}

/// Format a ratio to two decimals, rounding exact ties away from zero.
///
/// `{:.2}` rounds exact ties to even (0.125 becomes "0.12"). The only values
/// that sit exactly halfway at the third decimal are odd multiples of 1/8, and
/// multiplying by 8 is exact, so those are detected and rounded up by hand.
/// Everything else is not a true tie and `{:.2}` already rounds it correctly
/// from the exact binary value (0.145 is stored as 0.14499... and stays "0.14").
pub fn format_ratio(ratio: f64) -> String {
    let eighths = ratio * 8.0;
    if eighths.is_finite() && eighths.fract() == 0.0 && eighths % 2.0 != 0.0 {
        return format!("{:.2}", (ratio * 100.0).round() / 100.0);
    }
    format!("{ratio:.2}")
}

fn has_suspicious_username(data: &AccountData) -> bool {
    username::is_suspicious_username(&data.username)
}

fn describe_suspicious_username(_data: &AccountData) -> String {
    "Username matches known fake account patterns".to_string()
}

fn lacks_profile_photo(data: &AccountData) -> bool {
    !data.has_profile_photo
}

fn describe_no_profile_photo(_data: &AccountData) -> String {
    "Account has no profile photo set".to_string()
}

fn has_short_bio(data: &AccountData) -> bool {
    data.bio_length < SHORT_BIO_CHARS
}

fn describe_short_bio(data: &AccountData) -> String {
    format!(
        "Bio is only {} characters (< {SHORT_BIO_CHARS} threshold)",
        data.bio_length
    )
}

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::TimeZone;

    fn account() -> AccountData {
        AccountData {
            username: "jane_smith".to_string(),
            account_age: 400,
            followers: 500,
            following: 200,
            bio_length: 80,
            has_profile_photo: true,
        }
    }

    #[test]
    fn ratio_with_zero_following() {
        assert_eq!(follower_ratio(5, 0), f64::INFINITY);
        assert_eq!(follower_ratio(0, 0), 0.0);
    }

    #[test]
    fn ratio_plain_division() {
        assert!((follower_ratio(80, 40) - 2.0).abs() < f64::EPSILON);
        assert!((follower_ratio(3, 500) - 0.006).abs() < 1e-12);
    }

    #[test]
    fn threshold_description_formats_ratio() {
        let data = AccountData {
            followers: 3,
            following: 500,
            ..account()
        };
        assert_eq!(
            describe_suspicious_ratio(&data),
            "Follower/Following ratio is 0.01 (< 0.2 threshold)"
        );
    }

    #[test]
    fn ratio_ties_round_away_from_zero() {
        assert_eq!(format_ratio(0.125), "0.13");
        assert_eq!(format_ratio(0.375), "0.38");
        assert_eq!(format_ratio(1.625), "1.63");
        assert_eq!(format_ratio(-0.125), "-0.13");
    }

    #[test]
    fn ratio_near_ties_follow_the_stored_value() {
        assert_eq!(format_ratio(0.145), "0.14");
        assert_eq!(format_ratio(0.006), "0.01");
        assert_eq!(format_ratio(0.1), "0.10");
        assert_eq!(format_ratio(0.0), "0.00");
    }

    #[test]
    fn all_rules_together_reach_the_cap() {
        let total: u32 = RULES.iter().map(|r| r.points).sum();
        assert_eq!(total, 100);
    }

    #[test]
    fn timestamp_is_iso8601_utc_millis() {
        let at = Utc.with_ymd_and_hms(2026, 3, 4, 5, 6, 7).unwrap();
        let result = analyze_at(&account(), at);
        assert_eq!(result.timestamp, "2026-03-04T05:06:07.000Z");
    }

    #[test]
    fn engine_never_assigns_an_id() {
        assert!(analyze(&account()).id.is_none());
    }
}
