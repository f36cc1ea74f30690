// Query enrichment
// Expands a raw user message into an instruction-annotated search string
// so vector retrieval surfaces the right memories

use tracing::debug;

/// Keyword vocabularies used for semantic enrichment.
///
/// Injected at construction so deployments can swap the lists without
/// touching the matching logic; `Default` carries the standard bar terms.
#[derive(Debug, Clone)]
pub struct Vocabulary {
    pub flavors: Vec<String>,
    pub spirits: Vec<String>,
    pub actions: Vec<String>,
}

impl Default for Vocabulary {
    fn default() -> Self {
        let owned = |terms: &[&str]| terms.iter().map(|t| t.to_string()).collect();

        Self {
            flavors: owned(&[
                "sweet",
                "sour",
                "bitter",
                "smoky",
                "dry",
                "fruity",
                "spicy",
                "herbal",
                "creamy",
                "tart",
                "refreshing",
                "citrus",
                "tropical",
                "floral",
                "earthy",
            ]),
            spirits: owned(&[
                "gin",
                "vodka",
                "rum",
                "whiskey",
                "bourbon",
                "scotch",
                "tequila",
                "mezcal",
                "brandy",
                "cognac",
                "liqueur",
                "vermouth",
            ]),
            actions: owned(&["make", "suggest", "recommend", "create", "find", "want", "need"]),
        }
    }
}

/// Builds enriched search strings from raw user queries.
pub struct QueryEnricher {
    vocabulary: Vocabulary,
}

impl QueryEnricher {
    pub fn new(vocabulary: Vocabulary) -> Self {
        Self { vocabulary }
    }

    /// Transform a raw chat message into a rich, semantic search query.
    ///
    /// Matching is lower-cased substring containment; matched terms are
    /// reported in vocabulary-declaration order, not input order. Partial-word
    /// matches (e.g. "gin" inside a longer word) are a known limitation of
    /// the heuristic and are intentionally kept.
    pub fn enrich(&self, query: &str) -> String {
        let lower_query = query.to_lowercase();

        let found_flavors = matched_terms(&self.vocabulary.flavors, &lower_query);
        let found_spirits = matched_terms(&self.vocabulary.spirits, &lower_query);
        let is_suggestion_request = self
            .vocabulary
            .actions
            .iter()
            .any(|action| lower_query.contains(action.as_str()));

        // The original casing is echoed back; lower-casing is for matching only.
        let mut search_context = format!("User Query: \"{query}\"\n");

        if is_suggestion_request {
            search_context.push_str("Intent: The user is asking for a recipe suggestion.\n");
        }

        if !found_spirits.is_empty() {
            search_context.push_str(&format!(
                "Primary Subject: The user is asking about {}. Search for recipes containing these spirits and any past user feedback related to them.\n",
                found_spirits.join(", ")
            ));
        }

        if !found_flavors.is_empty() {
            search_context.push_str(&format!(
                "Flavor Profile: The user mentioned a preference for {} flavors. Prioritize memories matching this taste profile.\n",
                found_flavors.join(", ")
            ));
        }

        // Safety and strong preferences are always checked
        search_context.push_str(
            "CRITICAL CHECK: Always retrieve memories related to user's stated 'dislikes', 'hates', 'allergies', or 'never wants' to ensure suggestions are safe and enjoyable.\n",
        );

        search_context.push_str(
            "CONVERSATION HISTORY: Retrieve any past conversations or interactions with the user that might provide context for this query.\n",
        );

        debug!("Constructed query for embedding:\n{}", search_context);

        search_context
    }
}

fn matched_terms<'a>(vocabulary: &'a [String], lower_query: &str) -> Vec<&'a str> {
    vocabulary
        .iter()
        .filter(|term| lower_query.contains(term.as_str()))
        .map(|term| term.as_str())
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;

    fn enricher() -> QueryEnricher {
        QueryEnricher::new(Vocabulary::default())
    }

    #[test]
    fn test_enrich_flavor_spirit_and_intent() {
        let result = enricher().enrich("Can you recommend a sweet whiskey drink?");

        assert!(result.contains("User Query: \"Can you recommend a sweet whiskey drink?\""));
        assert!(result.contains("Intent: The user is asking for a recipe suggestion."));
        assert!(result.contains("Primary Subject: The user is asking about whiskey."));
        assert!(result.contains("Flavor Profile: The user mentioned a preference for sweet flavors."));
        assert!(result.contains("CRITICAL CHECK"));
        assert!(result.contains("CONVERSATION HISTORY"));
    }

    #[test]
    fn test_enrich_sections_appear_in_fixed_order() {
        let result = enricher().enrich("Can you recommend a sweet whiskey drink?");

        let query_pos = result.find("User Query:").unwrap();
        let intent_pos = result.find("Intent:").unwrap();
        let spirits_pos = result.find("Primary Subject:").unwrap();
        let flavors_pos = result.find("Flavor Profile:").unwrap();
        let check_pos = result.find("CRITICAL CHECK").unwrap();
        let history_pos = result.find("CONVERSATION HISTORY").unwrap();

        assert!(query_pos < intent_pos);
        assert!(intent_pos < spirits_pos);
        assert!(spirits_pos < flavors_pos);
        assert!(flavors_pos < check_pos);
        assert!(check_pos < history_pos);
    }

    #[test]
    fn test_enrich_allergy_statement_without_intent() {
        let result = enricher().enrich("I'm allergic to peanuts.");

        assert!(result.contains("User Query: \"I'm allergic to peanuts.\""));
        assert!(!result.contains("Intent: The user is asking for a recipe suggestion."));
        assert!(!result.contains("Primary Subject:"));
        assert!(!result.contains("Flavor Profile:"));
        assert!(result.contains("CRITICAL CHECK"));
    }

    #[test]
    fn test_enrich_reports_terms_in_declaration_order() {
        // "tart" is declared after "sour" in the flavor list, regardless of
        // the order they appear in the query
        let result = enricher().enrich("Something tart and sour, maybe vermouth or gin");

        assert!(result.contains("a preference for sour, tart flavors"));
        assert!(result.contains("asking about gin, vermouth."));
    }

    #[test]
    fn test_enrich_preserves_original_casing() {
        let result = enricher().enrich("FIND me a GIN drink");

        assert!(result.contains("User Query: \"FIND me a GIN drink\""));
        assert!(result.contains("asking about gin."));
        assert!(result.contains("Intent:"));
    }

    #[test]
    fn test_enrich_substring_matching_is_intentional() {
        // "gin" matches inside "original" - a known heuristic limitation
        let result = enricher().enrich("what was the original?");
        assert!(result.contains("asking about gin."));
    }

    #[test]
    fn test_enrich_with_custom_vocabulary() {
        let vocabulary = Vocabulary {
            flavors: vec!["umami".to_string()],
            spirits: vec!["sake".to_string()],
            actions: vec!["pour".to_string()],
        };
        let result = QueryEnricher::new(vocabulary).enrich("Pour me an umami sake");

        assert!(result.contains("asking about sake."));
        assert!(result.contains("a preference for umami flavors"));
        assert!(result.contains("Intent:"));
    }
}
