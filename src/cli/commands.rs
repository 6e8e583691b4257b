use std::path::Path;
use std::time::SystemTime;

use chrono::{DateTime, Local};

use crate::app::{AppContext, Result};
use crate::config::Credentials;
use crate::domain::{normalize_domain, Blacklist, TrustedDomains};
use crate::pipeline::RunReport;
use crate::store::{Store, BLACKLIST_FILE, HISTORY_FILE, TRUSTED_FILE};

/// Execute one bot run and print its summary.
pub async fn run(ctx: &AppContext, credentials: &Credentials) -> Result<RunReport> {
    let runner = ctx.runner(credentials)?;
    let report = runner.run().await?;

    if report.off_day {
        println!("Off day, nothing posted");
        return Ok(report);
    }

    let verb = if runner.is_live() { "posted" } else { "would post" };
    println!(
        "Run complete: {} {}, {} candidates, {} duplicates, {} rejected, {} fetch failures",
        report.posted, verb, report.pooled, report.duplicates, report.rejected, report.fetch_failed
    );
    if report.skipped_by_cap > 0 {
        println!("  {} candidates left for a later run (cap reached)", report.skipped_by_cap);
    }
    if !report.learned.is_empty() {
        println!("  Learned: {}", report.learned.join(", "));
    }
    if !report.blacklisted.is_empty() {
        println!("  Blacklisted: {}", report.blacklisted.join(", "));
    }

    Ok(report)
}

pub fn status(ctx: &AppContext) -> Result<()> {
    let history = ctx.store.load_history()?;
    let trusted = trusted_domains(ctx)?;
    let blacklist = ctx.store.load_blacklist()?;
    let bot = &ctx.config.bot;

    println!("Data directory: {}", ctx.store.dir().display());
    println!(
        "Mode: {} (cap {} posts, {} new domains per run)",
        if bot.safe_mode { "safe" } else { "live" },
        bot.daily_post_cap,
        bot.daily_new_domain_cap
    );
    println!();

    let rows = [
        (HISTORY_FILE, history.len()),
        (TRUSTED_FILE, trusted.learned().len()),
        (BLACKLIST_FILE, blacklist.len()),
    ];
    for (file, count) in rows {
        let path = ctx.store.path_of(file);
        println!(
            "{:<22} {:>5} entries  {}",
            file,
            count,
            modified_at(&path).unwrap_or_else(|| "never written".to_string())
        );
    }
    println!(
        "Trusted domains: {} built-in, {} learned",
        trusted.builtin().count(),
        trusted.learned().len()
    );

    Ok(())
}

/// Print history entries, oldest first; `limit` keeps the most recent ones.
pub fn history(ctx: &AppContext, limit: Option<usize>) -> Result<()> {
    let history = ctx.store.load_history()?;

    if history.is_empty() {
        println!("History is empty");
        return Ok(());
    }

    let urls = history.as_slice();
    let skip = limit.map_or(0, |n| urls.len().saturating_sub(n));
    for url in &urls[skip..] {
        println!("{}", url);
    }

    Ok(())
}

pub fn trusted(ctx: &AppContext) -> Result<()> {
    let trusted = trusted_domains(ctx)?;

    for domain in trusted.builtin() {
        println!("  {}", domain);
    }
    for domain in trusted.learned() {
        println!("+ {}", domain);
    }
    println!(
        "\n{} trusted domains, {} learned (+)",
        trusted.len(),
        trusted.learned().len()
    );

    Ok(())
}

pub fn blacklist_list(ctx: &AppContext) -> Result<()> {
    let blacklist = ctx.store.load_blacklist()?;

    if blacklist.is_empty() {
        println!("Blacklist is empty");
        return Ok(());
    }

    for domain in blacklist {
        println!("{}", domain);
    }

    Ok(())
}

pub fn blacklist_add(ctx: &AppContext, domain: &str) -> Result<()> {
    let mut blacklist = Blacklist::new(ctx.store.load_blacklist()?);
    let domain = normalize_domain(domain);

    if !blacklist.insert(&domain) {
        println!("Already blacklisted or invalid: {}", domain);
        return Ok(());
    }

    ctx.store.save_blacklist(blacklist.as_slice())?;
    println!("Blacklisted: {}", domain);
    Ok(())
}

pub fn blacklist_remove(ctx: &AppContext, domain: &str) -> Result<()> {
    let mut blacklist = Blacklist::new(ctx.store.load_blacklist()?);
    let domain = normalize_domain(domain);

    if !blacklist.remove(&domain) {
        println!("Not blacklisted: {}", domain);
        return Ok(());
    }

    ctx.store.save_blacklist(blacklist.as_slice())?;
    println!("Removed from blacklist: {}", domain);
    Ok(())
}

fn trusted_domains(ctx: &AppContext) -> Result<TrustedDomains> {
    Ok(TrustedDomains::new(
        &ctx.config.bot.trusted_domains,
        ctx.store.load_learned_domains()?,
    ))
}

fn modified_at(path: &Path) -> Option<String> {
    let modified: SystemTime = path.metadata().ok()?.modified().ok()?;
    let local: DateTime<Local> = modified.into();
    Some(local.format("%Y-%m-%d %H:%M").to_string())
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::config::Config;

    fn context() -> (tempfile::TempDir, AppContext) {
        let dir = tempfile::tempdir().unwrap();
        let ctx = AppContext::new(Config::default(), Some(dir.path().to_path_buf())).unwrap();
        (dir, ctx)
    }

    #[test]
    fn test_blacklist_add_normalizes_and_persists() {
        let (_dir, ctx) = context();

        blacklist_add(&ctx, "WWW.Spam.com").unwrap();
        blacklist_add(&ctx, "spam.com").unwrap();

        assert_eq!(ctx.store.load_blacklist().unwrap(), vec!["spam.com"]);
    }

    #[test]
    fn test_blacklist_remove() {
        let (_dir, ctx) = context();
        ctx.store
            .save_blacklist(&["a.com".into(), "b.com".into()])
            .unwrap();

        blacklist_remove(&ctx, "a.com").unwrap();
        blacklist_remove(&ctx, "missing.com").unwrap();

        assert_eq!(ctx.store.load_blacklist().unwrap(), vec!["b.com"]);
    }

    #[test]
    fn test_listing_empty_store() {
        let (_dir, ctx) = context();
        status(&ctx).unwrap();
        history(&ctx, Some(5)).unwrap();
        trusted(&ctx).unwrap();
        blacklist_list(&ctx).unwrap();
    }

    #[test]
    fn test_modified_at_missing_file() {
        assert_eq!(modified_at(Path::new("/nonexistent/linkcaster.json")), None);
    }
}
