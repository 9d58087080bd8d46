//! Cache maintenance commands. These read the stores directly and need no
//! API token.

use super::commands::OutputFormat;
use super::output::print_json;
use blue1::{
    parse_ttl, Blue1Config, Blue1Result, CacheTtl, JsonFileStore, KeyValueStore, TtlUnit,
};
use serde_json::json;
use std::sync::Arc;
use std::time::Duration;

async fn load_ttl(config: &Blue1Config) -> Blue1Result<CacheTtl> {
    let state: Arc<dyn KeyValueStore> = Arc::new(JsonFileStore::open(config.state_path()).await?);
    Ok(CacheTtl::load(state, config.default_ttl()).await)
}

/// Largest whole unit, e.g. "2 hours" rather than "7200 seconds".
fn describe(ttl: Option<Duration>) -> String {
    let Some(ttl) = ttl else {
        return "disabled".to_string();
    };
    let seconds = ttl.as_secs();
    [TtlUnit::Days, TtlUnit::Hours, TtlUnit::Minutes]
        .into_iter()
        .find(|unit| seconds > 0 && seconds % unit.seconds() == 0)
        .map(|unit| format!("{} {}", seconds / unit.seconds(), unit))
        .unwrap_or_else(|| format!("{} {}", seconds, TtlUnit::Seconds))
}

/// Show how many responses are cached and the expiration time.
pub async fn cache_stats(config: &Blue1Config, format: OutputFormat) -> Blue1Result<()> {
    let cache_path = config.cache_path();
    let entries = JsonFileStore::open(&cache_path).await?.len().await;
    let ttl = load_ttl(config).await?.get().await;

    match format {
        OutputFormat::Json => print_json(&json!({
            "cache_path": cache_path,
            "entries": entries,
            "ttl_seconds": ttl.map(|t| t.as_secs()),
        }))?,
        OutputFormat::Text => {
            println!("Cache file:       {}", cache_path.display());
            println!("Cached responses: {}", entries);
            println!("Expiration time:  {}", describe(ttl));
        }
    }
    Ok(())
}

/// Parse and persist a new expiration time.
pub async fn set_ttl(
    config: &Blue1Config,
    amount: &str,
    unit: &str,
    format: OutputFormat,
) -> Blue1Result<()> {
    let ttl = parse_ttl(amount, unit)?;
    load_ttl(config).await?.set(ttl).await?;

    match format {
        OutputFormat::Json => print_json(&json!({ "ttl_seconds": ttl.as_secs() }))?,
        OutputFormat::Text => println!("Setting expiration time to {}", describe(Some(ttl))),
    }
    Ok(())
}

/// Disable caching.
pub async fn clear_ttl(config: &Blue1Config, format: OutputFormat) -> Blue1Result<()> {
    load_ttl(config).await?.clear().await?;

    match format {
        OutputFormat::Json => print_json(&json!({ "ttl_seconds": null }))?,
        OutputFormat::Text => println!("Caching disabled"),
    }
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_describe_uses_largest_unit() {
        assert_eq!(describe(None), "disabled");
        assert_eq!(describe(Some(Duration::from_secs(172_800))), "2 days");
        assert_eq!(describe(Some(Duration::from_secs(7_200))), "2 hours");
        assert_eq!(describe(Some(Duration::from_secs(90))), "90 seconds");
        assert_eq!(describe(Some(Duration::from_secs(0))), "0 seconds");
    }
}
