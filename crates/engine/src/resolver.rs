use crate::keywords::{GREETING, RELEVANCE};
use crate::page::PageContext;
use crate::responses;
use crate::rules::{page_rules, GLOBAL_TIERS};

/// Resolve one utterance against the rule waterfall.
///
/// Pure and total: no I/O, no shared mutable state, and every input maps to
/// a non-empty response. Tiers are checked in a fixed order and the first
/// match wins:
///
/// 1. empty (trimmed) input returns the page welcome
/// 2. greeting tokens return the greeting reply, on any page
/// 3. the relevance gate rejects off-domain text
/// 4. global topic tiers, in table order
/// 5. page topic tiers, in table order
/// 6. the page fallback hint
#[must_use]
pub fn resolve(page: PageContext, utterance: &str) -> &'static str {
    let rules = page_rules(page);

    if utterance.trim().is_empty() {
        log::debug!("resolve: page={page} tier=welcome");
        return rules.welcome;
    }

    // Lowercase once; every keyword set matches against this.
    let lower = utterance.to_lowercase();

    // Greetings outrank the relevance gate: a greeting buried in an
    // otherwise off-topic message still gets the greeting reply.
    if GREETING.matches(&lower) {
        log::debug!("resolve: page={page} tier=greeting");
        return responses::GREETING_REPLY;
    }

    if !RELEVANCE.matches(&lower) {
        log::debug!("resolve: page={page} tier=out-of-scope");
        return responses::OUT_OF_SCOPE;
    }

    for tier in GLOBAL_TIERS {
        if tier.predicate.matches(&lower) {
            log::debug!("resolve: page={page} tier=global/{}", tier.name);
            return tier.response;
        }
    }

    for tier in rules.tiers {
        if tier.predicate.matches(&lower) {
            log::debug!("resolve: page={page} tier=page/{}", tier.name);
            return tier.response;
        }
    }

    log::debug!("resolve: page={page} tier=page-fallback");
    rules.fallback
}

#[cfg(test)]
mod tests {
    use std::collections::HashSet;

    use pretty_assertions::assert_eq;

    use super::resolve;
    use crate::page::PageContext;
    use crate::responses;

    #[test]
    fn empty_input_returns_distinct_welcome_per_page() {
        let welcomes: Vec<&str> = PageContext::ALL
            .iter()
            .map(|page| resolve(*page, ""))
            .collect();

        assert_eq!(welcomes[0], responses::WELCOME_HOME);
        assert_eq!(welcomes[3], responses::WELCOME_BOOKING);

        let distinct: HashSet<&str> = welcomes.iter().copied().collect();
        assert_eq!(distinct.len(), PageContext::ALL.len());
    }

    #[test]
    fn whitespace_only_input_counts_as_empty() {
        assert_eq!(resolve(PageContext::Home, "   \t"), responses::WELCOME_HOME);
    }

    #[test]
    fn greetings_win_on_every_page() {
        for page in PageContext::ALL {
            assert_eq!(resolve(page, "hai"), responses::GREETING_REPLY);
            assert_eq!(resolve(page, "Hello!"), responses::GREETING_REPLY);
        }
    }

    #[test]
    fn greeting_wins_even_inside_an_off_topic_message() {
        // "cuaca" is off-domain; without the greeting this would hit the
        // out-of-scope fallback.
        assert_eq!(
            resolve(PageContext::Home, "halo, cuaca hari ini cerah sekali"),
            responses::GREETING_REPLY
        );
    }

    #[test]
    fn irrelevant_text_hits_the_out_of_scope_fallback_on_every_page() {
        for page in PageContext::ALL {
            assert_eq!(resolve(page, "xyz123"), responses::OUT_OF_SCOPE);
        }
    }

    #[test]
    fn home_pricing_question_mentions_the_base_price() {
        let answer = resolve(PageContext::Home, "Berapa harga potong rambut?");
        assert_eq!(answer, responses::HOME_PRICING);
        assert!(answer.contains("Rp 150.000"));
    }

    #[test]
    fn booking_reschedule_question_mentions_the_whatsapp_number() {
        let answer = resolve(PageContext::Booking, "Bagaimana cara reschedule?");
        assert_eq!(answer, responses::BOOKING_RESCHEDULE);
        assert!(answer.contains("+62 857-7198-3031"));
    }

    #[test]
    fn ai_accuracy_question_references_face_shape_analysis() {
        let answer = resolve(PageContext::AiAssistant, "Apakah hasilnya akurat?");
        assert_eq!(answer, responses::AI_ACCURACY);
        assert!(answer.contains("bentuk wajah"));
    }

    #[test]
    fn resolution_is_idempotent() {
        let first = resolve(PageContext::Barbers, "Bagaimana memilih barber?");
        for _ in 0..10 {
            assert_eq!(resolve(PageContext::Barbers, "Bagaimana memilih barber?"), first);
        }
    }

    #[test]
    fn global_tiers_outrank_page_tiers() {
        // "harga" matches the home pricing tier, "lokasi" the global
        // location tier. The global tier must win.
        assert_eq!(
            resolve(PageContext::Home, "berapa harga, dan di mana lokasi kalian?"),
            responses::LOCATION
        );
    }

    #[test]
    fn global_tier_order_breaks_multi_topic_ties() {
        // Contact is listed before payment; an utterance hitting both
        // resolves by table order, not specificity.
        assert_eq!(
            resolve(PageContext::Home, "hubungi siapa soal pembayaran?"),
            responses::CONTACT
        );
    }

    #[test]
    fn hours_tier_needs_both_conjuncts() {
        assert_eq!(
            resolve(PageContext::Home, "jam berapa kalian buka?"),
            responses::HOURS
        );
        // A lone "jam" without open/close vocabulary falls through; on home
        // no page tier matches either, so the page fallback answers.
        assert_eq!(resolve(PageContext::Home, "jam berapa?"), responses::HOME_FALLBACK);
    }

    #[test]
    fn substring_matching_false_positive_is_pinned() {
        // "jamuan" is unrelated but contains "jam"; together with "buka" it
        // satisfies the hours conjunction. Accepted limitation of
        // boundary-free substring matching.
        assert_eq!(
            resolve(PageContext::Home, "jamuan makan malam buka untuk umum?"),
            responses::GREETING_REPLY, // "malam" is also a greeting token
        );
        assert_eq!(
            resolve(PageContext::Home, "jamuan itu buka untuk umum?"),
            responses::HOURS
        );
    }

    #[test]
    fn booking_page_tiers_answer_in_table_order() {
        assert_eq!(
            resolve(PageContext::Booking, "Langkah-langkah booking?"),
            responses::BOOKING_STEPS
        );
        assert_eq!(
            resolve(PageContext::Booking, "jam 9 masih ada slot waktu?"),
            responses::BOOKING_TIME
        );
    }

    #[test]
    fn relevant_but_unmatched_question_gets_the_page_hint() {
        // "fade" passes the relevance gate but no topic tier mentions it.
        assert_eq!(
            resolve(PageContext::Barbers, "bisa potongan fade?"),
            responses::BARBERS_FALLBACK
        );
    }
}
