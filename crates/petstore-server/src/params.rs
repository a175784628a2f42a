use std::collections::BTreeSet;

use petstore_types::PetStatus;

use crate::error::{ServerError, ServerResult};

/// Parse the comma-separated `status` query parameter.
///
/// Whitespace around entries is trimmed, empty entries are skipped, and
/// repeated values collapse, so `"available, sold,available"` parses
/// cleanly. Unknown values are rejected, as is a list with no entries at
/// all.
pub fn parse_status_list(raw: &str) -> ServerResult<Vec<PetStatus>> {
    let mut statuses = Vec::new();
    for part in raw.split(',') {
        let part = part.trim();
        if part.is_empty() {
            continue;
        }
        let status =
            PetStatus::parse(part).map_err(|e| ServerError::InvalidInput(e.to_string()))?;
        if !statuses.contains(&status) {
            statuses.push(status);
        }
    }
    if statuses.is_empty() {
        return Err(ServerError::InvalidInput("status list is empty".into()));
    }
    Ok(statuses)
}

/// Parse the comma-separated `tags` query parameter into a set.
pub fn parse_tag_list(raw: &str) -> ServerResult<BTreeSet<String>> {
    let tags: BTreeSet<String> = raw
        .split(',')
        .map(str::trim)
        .filter(|t| !t.is_empty())
        .map(str::to_string)
        .collect();
    if tags.is_empty() {
        return Err(ServerError::InvalidInput("tag list is empty".into()));
    }
    Ok(tags)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn status_list_parses() {
        let statuses = parse_status_list("available,sold").unwrap();
        assert_eq!(statuses, vec![PetStatus::Available, PetStatus::Sold]);
    }

    #[test]
    fn status_list_trims_and_skips_empty() {
        let statuses = parse_status_list(" available , pending ,").unwrap();
        assert_eq!(statuses, vec![PetStatus::Available, PetStatus::Pending]);
    }

    #[test]
    fn status_list_collapses_repeats() {
        let statuses = parse_status_list("sold,available,sold").unwrap();
        assert_eq!(statuses, vec![PetStatus::Sold, PetStatus::Available]);
    }

    #[test]
    fn status_list_rejects_unknown_value() {
        let err = parse_status_list("available,adopted").unwrap_err();
        assert!(matches!(err, ServerError::InvalidInput(_)));
        assert!(err.to_string().contains("adopted"));
    }

    #[test]
    fn status_list_rejects_empty_input() {
        assert!(parse_status_list("").is_err());
        assert!(parse_status_list(" , ,").is_err());
    }

    #[test]
    fn tag_list_parses_into_set() {
        let tags = parse_tag_list("trained,quiet,trained").unwrap();
        assert_eq!(tags.len(), 2);
        assert!(tags.contains("trained"));
        assert!(tags.contains("quiet"));
    }

    #[test]
    fn tag_list_rejects_empty_input() {
        assert!(parse_tag_list("").is_err());
        assert!(parse_tag_list(",, ,").is_err());
    }
}
