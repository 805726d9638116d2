//! Tag-filtered Auto Scaling group discovery

use crate::error::Result;
use crate::provider::{AutoScalingOps, GroupCandidate, GroupMatch};
use tracing::debug;

/// Find the groups in one region that the workflow should act on.
pub async fn discover(
    scaling: &dyn AutoScalingOps,
    tag_key: &str,
    tag_value: &str,
) -> Result<Vec<GroupMatch>> {
    let candidates = scaling.list_groups().await?;
    let total = candidates.len();
    let matches = filter_matches(candidates, tag_key, tag_value);
    debug!(
        "{} of {} Auto Scaling groups match tag {}={}",
        matches.len(),
        total,
        tag_key,
        tag_value
    );
    Ok(matches)
}

/// Keep the groups carrying the tag and at least one member instance.
///
/// Order follows the listing order; no sorting is applied.
pub fn filter_matches(
    candidates: Vec<GroupCandidate>,
    tag_key: &str,
    tag_value: &str,
) -> Vec<GroupMatch> {
    candidates
        .into_iter()
        .filter(|candidate| {
            !candidate.instance_ids.is_empty()
                && candidate
                    .tags
                    .iter()
                    .any(|(key, value)| key == tag_key && value == tag_value)
        })
        .map(|candidate| GroupMatch {
            name: candidate.name,
            instance_ids: candidate.instance_ids,
        })
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;

    fn candidate(name: &str, tags: &[(&str, &str)], instance_ids: &[&str]) -> GroupCandidate {
        GroupCandidate {
            name: name.to_string(),
            tags: tags
                .iter()
                .map(|(k, v)| (k.to_string(), v.to_string()))
                .collect(),
            instance_ids: instance_ids.iter().map(|id| id.to_string()).collect(),
        }
    }

    #[test]
    fn test_untagged_groups_never_match() {
        let matches = filter_matches(
            vec![
                candidate("g1", &[("env", "prod")], &["i-1"]),
                candidate("g2", &[], &["i-2"]),
                candidate("g3", &[("env", "dev")], &["i-3"]),
            ],
            "env",
            "prod",
        );
        assert_eq!(matches.len(), 1);
        assert_eq!(matches[0].name, "g1");
    }

    #[test]
    fn test_tag_match_is_exact() {
        let matches = filter_matches(
            vec![
                candidate("g1", &[("env", "production")], &["i-1"]),
                candidate("g2", &[("environment", "prod")], &["i-2"]),
            ],
            "env",
            "prod",
        );
        assert!(matches.is_empty());
    }

    #[test]
    fn test_empty_groups_never_match() {
        let matches = filter_matches(
            vec![candidate("g1", &[("env", "prod")], &[])],
            "env",
            "prod",
        );
        assert!(matches.is_empty());
    }

    #[test]
    fn test_listing_order_is_preserved() {
        let matches = filter_matches(
            vec![
                candidate("zebra", &[("env", "prod")], &["i-1"]),
                candidate("alpha", &[("env", "prod")], &["i-2", "i-3"]),
            ],
            "env",
            "prod",
        );
        assert_eq!(matches[0].name, "zebra");
        assert_eq!(matches[1].name, "alpha");
        assert_eq!(matches[1].instance_ids, vec!["i-2", "i-3"]);
    }
}
