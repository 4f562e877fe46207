use anyhow::{Context, Result};
use chrono::Utc;

pub fn split_csv(s: &str) -> Vec<String> {
    s.split(',')
        .map(|x| x.trim().to_string())
        .filter(|x| !x.is_empty())
        .collect()
}

/// Parse decimal or `0x`-prefixed hexadecimal seeds.
pub fn parse_seeds(tokens: &[String]) -> Result<Vec<u64>> {
    tokens
        .iter()
        .map(|token| {
            let parsed = match token.strip_prefix("0x") {
                Some(hex) => u64::from_str_radix(hex, 16),
                None => token.parse(),
            };
            parsed.with_context(|| format!("invalid seed '{token}'"))
        })
        .collect()
}

/// UTC timestamp stamped on finished reports.
pub fn run_stamp() -> String {
    Utc::now().format("%Y-%m-%dT%H:%M:%SZ").to_string()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn split_csv_trims_and_filters() {
        let parts = split_csv(" walk, ,hover,  clamp ");
        assert_eq!(parts, vec!["walk", "hover", "clamp"]);
    }

    #[test]
    fn seeds_accept_decimal_and_hex() {
        let seeds = parse_seeds(&["1337".to_string(), "0xff".to_string()]).unwrap();
        assert_eq!(seeds, vec![1337, 255]);
    }

    #[test]
    fn bad_seed_names_the_token() {
        let err = parse_seeds(&["seven".to_string()]).unwrap_err();
        assert!(err.to_string().contains("seven"));
    }

    #[test]
    fn stamp_is_utc() {
        assert!(run_stamp().ends_with('Z'));
    }
}
