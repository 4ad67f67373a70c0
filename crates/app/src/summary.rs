use sparc_api::{SparcDataset, SparcSearchResponse};

const DESCRIPTION_PREVIEW_CHARS: usize = 140;

/// Renders search hits as the text of an assistant turn.
pub fn render_search_reply(query: &str, response: &SparcSearchResponse) -> String {
    if response.is_empty() {
        return format!("No datasets matched \"{query}\".");
    }

    let shown = response.hits.hits.len();
    let total = response.total_hits();
    let qualifier = if response.hits.total.is_exact() {
        ""
    } else {
        "at least "
    };

    let mut lines = vec![format!(
        "Found {qualifier}{total} datasets for \"{query}\" (showing {shown}):"
    )];
    for (rank, hit) in response.hits.hits.iter().enumerate() {
        lines.push(format!(
            "{}. {} [{}]",
            rank + 1,
            dataset_title(&hit.source),
            hit.id
        ));
        let details = dataset_details(&hit.source);
        if !details.is_empty() {
            lines.push(format!("   {details}"));
        }
    }
    lines.join("\n")
}

fn dataset_title(dataset: &SparcDataset) -> &str {
    let name = dataset.name().trim();
    if name.is_empty() { "(untitled dataset)" } else { name }
}

fn dataset_details(dataset: &SparcDataset) -> String {
    let mut parts = Vec::new();

    let organs = dataset
        .anatomy
        .iter()
        .map(|anatomy| anatomy.organ.name.aggregate.trim())
        .filter(|organ| !organ.is_empty())
        .collect::<Vec<_>>();
    if !organs.is_empty() {
        parts.push(organs.join(", "));
    }

    let subjects = dataset.item.statistics.number_of_subjects;
    if subjects > 0 {
        parts.push(format!("{subjects} subjects"));
    }

    let description = preview(dataset.description(), DESCRIPTION_PREVIEW_CHARS);
    if !description.is_empty() {
        parts.push(description);
    }

    parts.join(" | ")
}

fn preview(text: &str, max_chars: usize) -> String {
    let text = text.split_whitespace().collect::<Vec<_>>().join(" ");
    if text.chars().count() <= max_chars {
        return text;
    }
    let mut cut = text.chars().take(max_chars).collect::<String>();
    cut.push_str("...");
    cut
}

#[cfg(test)]
mod tests {
    use pretty_assertions::assert_eq;

    use super::*;

    fn response(payload: &str) -> SparcSearchResponse {
        serde_json::from_str(payload).expect("valid payload")
    }

    #[test]
    fn lists_hits_in_rank_order() {
        let reply = render_search_reply(
            "nerve",
            &response(
                r#"{"took": 3, "timed_out": false,
                    "_shards": {"total": 1, "successful": 1, "skipped": 0, "failed": 0},
                    "hits": {"total": {"value": 40, "relation": "gte"}, "max_score": 2.0, "hits": [
                        {"_index": "i", "_id": "a", "_score": 2.0, "_source": {
                            "item": {"name": "Vagus", "description": "Stimulation\n study.",
                                     "statistics": {"numberOfSubjects": 3}},
                            "anatomy": [{"organ": {"name": {"aggregate": "vagus nerve"}}}]}},
                        {"_index": "i", "_id": "b", "_score": 1.0, "_source": {}}
                    ]}}"#,
            ),
        );

        assert_eq!(
            reply,
            "Found at least 40 datasets for \"nerve\" (showing 2):\n\
             1. Vagus [a]\n   vagus nerve | 3 subjects | Stimulation study.\n\
             2. (untitled dataset) [b]"
        );
    }

    #[test]
    fn empty_result_says_so() {
        let reply = render_search_reply(
            "unicorn",
            &response(
                r#"{"took": 1, "timed_out": false,
                    "_shards": {"total": 1, "successful": 1, "skipped": 0, "failed": 0},
                    "hits": {"total": {"value": 0, "relation": "eq"}, "max_score": null, "hits": []}}"#,
            ),
        );
        assert_eq!(reply, "No datasets matched \"unicorn\".");
    }

    #[test]
    fn long_descriptions_are_cut_on_char_boundaries() {
        let text = "é".repeat(DESCRIPTION_PREVIEW_CHARS + 10);
        let cut = preview(&text, DESCRIPTION_PREVIEW_CHARS);
        assert_eq!(cut.chars().count(), DESCRIPTION_PREVIEW_CHARS + 3);
        assert!(cut.ends_with("..."));
    }
}
