//! Detail view model for a single ranked brand.

use serde::Serialize;

use crate::ranking::RankedBrand;

/// Logo shown when a brand has no `logoUrl`.
pub const PLACEHOLDER_LOGO_URL: &str =
    "https://cdn.iconscout.com/icon/free/png-512/free-company-1779860-1513787.png";

pub const NO_DESCRIPTION: &str = "No description available";

/// Everything the detail screen shows for one brand, already formatted.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct BrandDetail {
    pub id: String,
    pub title: String,
    pub rank_label: String,
    pub score_label: String,
    pub logo_url: String,
    pub tagline: Option<String>,
    pub description: String,
    pub founded: Option<String>,
    pub headquarters: Option<String>,
    pub founder: Option<String>,
    /// Website with a scheme, ready to open.
    pub website_url: Option<String>,
    pub social: Vec<&'static str>,
}

impl BrandDetail {
    #[must_use]
    pub fn from_ranked(brand: &RankedBrand) -> Self {
        let record = &brand.record;
        Self {
            id: brand.id.clone(),
            title: brand.display_name().to_owned(),
            rank_label: format!("Rank: #{}", brand.position_rank),
            score_label: format!("Score: {}", brand.calculated_rank),
            logo_url: record
                .logo_url
                .clone()
                .unwrap_or_else(|| PLACEHOLDER_LOGO_URL.to_owned()),
            tagline: record.tagline.clone(),
            description: record
                .description
                .clone()
                .unwrap_or_else(|| NO_DESCRIPTION.to_owned()),
            founded: record.founded_year.map(|year| format!("Founded in {year}")),
            headquarters: record.headquarters.clone(),
            founder: record
                .founder_name
                .as_ref()
                .map(|name| format!("Founded by {name}")),
            website_url: record.website.as_deref().map(website_url),
            social: record
                .social_media
                .as_ref()
                .map(crate::SocialMedia::present_networks)
                .unwrap_or_default(),
        }
    }
}

/// Prefix `https://` unless the address already starts with `http`.
#[must_use]
pub fn website_url(website: &str) -> String {
    if website.starts_with("http") {
        website.to_owned()
    } else {
        format!("https://{website}")
    }
}

/// Look up a brand in a ranked list by identifier.
#[must_use]
pub fn find_ranked<'a>(ranked: &'a [RankedBrand], id: &str) -> Option<&'a RankedBrand> {
    ranked.iter().find(|brand| brand.id == id)
}
