//! Output renderers for ranked brands.
//!
//! The data pipeline hands plain values to a [`BrandRenderer`]; nothing
//! about presentation flows back into fetching or ranking.

use std::io::{self, Write};

use brandpeek_core::{BrandDetail, FeedState, RankedBrand};
use clap::ValueEnum;
use serde_json::json;

#[derive(Debug, Clone, Copy, PartialEq, Eq, ValueEnum)]
pub enum OutputFormat {
    Text,
    Json,
}

pub trait BrandRenderer {
    fn render_list(&self, out: &mut dyn Write, brands: &[RankedBrand]) -> io::Result<()>;
    fn render_detail(&self, out: &mut dyn Write, detail: &BrandDetail) -> io::Result<()>;
    fn render_error(&self, out: &mut dyn Write, message: &str) -> io::Result<()>;
}

pub fn renderer_for(format: OutputFormat) -> Box<dyn BrandRenderer> {
    match format {
        OutputFormat::Text => Box::new(TextRenderer),
        OutputFormat::Json => Box::new(JsonRenderer),
    }
}

/// Render whatever the feed currently shows. Idle and loading feeds print nothing.
pub fn render_feed(
    renderer: &dyn BrandRenderer,
    out: &mut dyn Write,
    state: &FeedState,
) -> io::Result<()> {
    match state {
        FeedState::Loaded(brands) => renderer.render_list(out, brands),
        FeedState::Failed(message) => renderer.render_error(out, message),
        FeedState::Idle | FeedState::Loading => Ok(()),
    }
}

pub struct TextRenderer;

impl BrandRenderer for TextRenderer {
    fn render_list(&self, out: &mut dyn Write, brands: &[RankedBrand]) -> io::Result<()> {
        writeln!(out, "Top Brands")?;
        if brands.is_empty() {
            writeln!(out, "  (no brands)")?;
            return Ok(());
        }
        for brand in brands {
            writeln!(
                out,
                "{:>3}. {}  (Score: {})",
                brand.position_rank,
                brand.display_name(),
                brand.calculated_rank
            )?;
            if let Some(tagline) = &brand.record.tagline {
                writeln!(out, "     \"{tagline}\"")?;
            }
        }
        Ok(())
    }

    fn render_detail(&self, out: &mut dyn Write, detail: &BrandDetail) -> io::Result<()> {
        writeln!(out, "{}", detail.title)?;
        writeln!(out, "{}  {}", detail.rank_label, detail.score_label)?;
        if let Some(tagline) = &detail.tagline {
            writeln!(out, "\"{tagline}\"")?;
        }
        writeln!(out)?;
        writeln!(out, "{}", detail.description)?;
        writeln!(out)?;
        for line in [&detail.founded, &detail.headquarters, &detail.founder]
            .into_iter()
            .flatten()
        {
            writeln!(out, "  {line}")?;
        }
        if let Some(url) = &detail.website_url {
            writeln!(out, "  {url}")?;
        }
        if !detail.social.is_empty() {
            writeln!(out, "  Social: {}", detail.social.join(", "))?;
        }
        writeln!(out, "  Logo: {}", detail.logo_url)
    }

    fn render_error(&self, out: &mut dyn Write, message: &str) -> io::Result<()> {
        writeln!(out, "{message}")
    }
}

pub struct JsonRenderer;

impl BrandRenderer for JsonRenderer {
    fn render_list(&self, out: &mut dyn Write, brands: &[RankedBrand]) -> io::Result<()> {
        serde_json::to_writer_pretty(&mut *out, brands)?;
        writeln!(out)
    }

    fn render_detail(&self, out: &mut dyn Write, detail: &BrandDetail) -> io::Result<()> {
        serde_json::to_writer_pretty(&mut *out, detail)?;
        writeln!(out)
    }

    fn render_error(&self, out: &mut dyn Write, message: &str) -> io::Result<()> {
        serde_json::to_writer_pretty(&mut *out, &json!({ "error": message }))?;
        writeln!(out)
    }
}
