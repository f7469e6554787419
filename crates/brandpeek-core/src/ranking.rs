//! Popularity ranking for fetched brands.
//!
//! Each brand earns a heuristic score from how established it is and how
//! complete its profile looks. The ranked list is the stable, descending
//! order of that score, capped at a limit and numbered from 1.

use chrono::Datelike;
use serde::Serialize;

use crate::brands::{BrandCatalog, BrandRecord};

/// Number of brands kept when no explicit limit is given.
pub const DEFAULT_LIMIT: usize = 10;

/// Points per year since founding. Negative for future founding years.
pub const W_AGE_PER_YEAR: i64 = 2;
/// Description longer than [`DESCRIPTION_MIN_LEN`].
pub const W_DESCRIPTION: i64 = 10;
pub const W_LOGO: i64 = 5;
pub const W_WEBSITE: i64 = 5;
pub const W_HEADQUARTERS: i64 = 3;
pub const W_FOUNDER: i64 = 3;
pub const W_FACEBOOK: i64 = 2;
pub const W_INSTAGRAM: i64 = 3;
pub const W_TWITTER: i64 = 2;
pub const W_LINKEDIN: i64 = 1;

/// A description must be strictly longer than this to earn [`W_DESCRIPTION`].
/// Measured in UTF-16 code units.
pub const DESCRIPTION_MIN_LEN: usize = 50;

/// A brand placed in the ranked list.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct RankedBrand {
    pub id: String,
    #[serde(flatten)]
    pub record: BrandRecord,
    pub calculated_rank: u64,
    /// 1-based position in the ranked list.
    pub position_rank: usize,
}

impl RankedBrand {
    /// Display name, falling back to the identifier.
    #[must_use]
    pub fn display_name(&self) -> &str {
        self.record.name.as_deref().unwrap_or(&self.id)
    }
}

/// Local calendar year used for the age bonus.
#[must_use]
pub fn current_year() -> i32 {
    chrono::Local::now().year()
}

/// Score a single brand.
///
/// Contributions are summed first and only the total is clamped at zero, so
/// a future founding year can cancel out other bonuses.
#[must_use]
pub fn calculate_rank(record: &BrandRecord, current_year: i32) -> u64 {
    let bonus = |present: bool, weight: i64| if present { weight } else { 0 };

    let age = record.founded_year.map_or(0, |founded| {
        i64::from(current_year)
            .saturating_sub(founded)
            .saturating_mul(W_AGE_PER_YEAR)
    });

    let long_description = record
        .description
        .as_deref()
        .is_some_and(|d| d.encode_utf16().count() > DESCRIPTION_MIN_LEN);

    let social = record.social_media.as_ref();
    let contributions = [
        age,
        bonus(long_description, W_DESCRIPTION),
        bonus(record.logo_url.is_some(), W_LOGO),
        bonus(record.website.is_some(), W_WEBSITE),
        bonus(record.headquarters.is_some(), W_HEADQUARTERS),
        bonus(record.founder_name.is_some(), W_FOUNDER),
        bonus(social.is_some_and(|s| s.has_facebook()), W_FACEBOOK),
        bonus(social.is_some_and(|s| s.has_instagram()), W_INSTAGRAM),
        bonus(social.is_some_and(|s| s.has_twitter()), W_TWITTER),
        bonus(social.is_some_and(|s| s.has_linkedin()), W_LINKEDIN),
    ];

    contributions
        .into_iter()
        .fold(0_i64, i64::saturating_add)
        .max(0)
        .unsigned_abs()
}

/// Rank brands using the current local year.
///
/// See [`rank_top_brands_at`].
#[must_use]
pub fn rank_top_brands(raw: &BrandCatalog, limit: usize) -> Vec<RankedBrand> {
    rank_top_brands_at(raw, limit, current_year())
}

/// Score every brand, sort by score descending, keep the first `limit`, and
/// number them from 1.
///
/// The sort is stable: equal scores keep the catalog's order. An empty
/// catalog yields an empty list.
#[must_use]
pub fn rank_top_brands_at(raw: &BrandCatalog, limit: usize, current_year: i32) -> Vec<RankedBrand> {
    let mut scored: Vec<(&str, &BrandRecord, u64)> = raw
        .iter()
        .map(|(id, record)| (id, record, calculate_rank(record, current_year)))
        .collect();

    scored.sort_by(|a, b| b.2.cmp(&a.2));

    scored
        .into_iter()
        .take(limit)
        .enumerate()
        .map(|(index, (id, record, score))| RankedBrand {
            id: id.to_owned(),
            record: record.clone(),
            calculated_rank: score,
            position_rank: index + 1,
        })
        .collect()
}

#[cfg(test)]
#[path = "ranking_test.rs"]
mod tests;
