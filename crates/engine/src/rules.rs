//! Static rule tables: the global tier order and the per-page rule sets.
//!
//! Tier order is load-bearing. Evaluation short-circuits at the first
//! satisfied predicate, so an utterance hitting two keyword sets resolves to
//! whichever tier is listed first here, never to a "best" match.

use crate::keywords::{self, KeywordSet};
use crate::page::PageContext;
use crate::responses;

/// Predicate of one rule tier over the lowercased utterance.
#[derive(Debug, Clone, Copy)]
pub enum Predicate {
    /// Any token of the set appears in the utterance.
    AnyOf(&'static KeywordSet),
    /// Both sets must hit in the same utterance. Only the operating-hours
    /// tier uses this; every other tier is a plain disjunction.
    Conjunction(&'static KeywordSet, &'static KeywordSet),
}

impl Predicate {
    #[must_use]
    pub fn matches(&self, lower: &str) -> bool {
        match self {
            Predicate::AnyOf(set) => set.matches(lower),
            Predicate::Conjunction(a, b) => a.matches(lower) && b.matches(lower),
        }
    }
}

/// One level of the evaluation waterfall: a predicate and its fixed reply.
#[derive(Debug, Clone, Copy)]
pub struct RuleTier {
    pub name: &'static str,
    pub predicate: Predicate,
    pub response: &'static str,
}

impl RuleTier {
    const fn any(name: &'static str, set: &'static KeywordSet, response: &'static str) -> Self {
        Self {
            name,
            predicate: Predicate::AnyOf(set),
            response,
        }
    }
}

/// Page-independent topic tiers, checked before any page-specific rule.
pub static GLOBAL_TIERS: &[RuleTier] = &[
    RuleTier::any("location", &keywords::LOCATION, responses::LOCATION),
    RuleTier {
        name: "hours",
        predicate: Predicate::Conjunction(&keywords::HOURS, &keywords::OPEN_CLOSE),
        response: responses::HOURS,
    },
    RuleTier::any("contact", &keywords::CONTACT, responses::CONTACT),
    RuleTier::any("payment", &keywords::PAYMENT, responses::PAYMENT),
    RuleTier::any("children", &keywords::CHILDREN, responses::CHILDREN),
    RuleTier::any("walk-in", &keywords::WALK_IN, responses::WALK_IN),
    RuleTier::any("package", &keywords::PACKAGE, responses::PACKAGE),
    RuleTier::any("social", &keywords::SOCIAL, responses::SOCIAL),
];

/// Everything the resolver needs for one page: the welcome shown on first
/// contact, the ordered topic tiers, the page-level fallback, and the
/// quick-question shortcuts the host renders as buttons.
#[derive(Debug, Clone, Copy)]
pub struct PageRules {
    pub welcome: &'static str,
    pub tiers: &'static [RuleTier],
    pub fallback: &'static str,
    pub quick_questions: &'static [&'static str],
}

static HOME_RULES: PageRules = PageRules {
    welcome: responses::WELCOME_HOME,
    tiers: &[
        RuleTier::any("home-services", &keywords::HOME_SERVICES, responses::HOME_SERVICES),
        RuleTier::any("home-pricing", &keywords::HOME_PRICING, responses::HOME_PRICING),
        RuleTier::any("home-booking", &keywords::HOME_BOOKING, responses::HOME_BOOKING),
    ],
    fallback: responses::HOME_FALLBACK,
    quick_questions: &[
        "Apa saja layanan yang tersedia?",
        "Berapa harga potong rambut?",
        "Jam buka hari apa?",
    ],
};

static BARBERS_RULES: PageRules = PageRules {
    welcome: responses::WELCOME_BARBERS,
    tiers: &[
        RuleTier::any("barbers-choose", &keywords::BARBERS_CHOOSE, responses::BARBERS_CHOOSE),
        RuleTier::any("barbers-rating", &keywords::BARBERS_RATING, responses::BARBERS_RATING),
    ],
    fallback: responses::BARBERS_FALLBACK,
    quick_questions: &[
        "Siapa saja kapster di Elite Cuts?",
        "Bagaimana memilih barber?",
    ],
};

static AI_ASSISTANT_RULES: PageRules = PageRules {
    welcome: responses::WELCOME_AI_ASSISTANT,
    tiers: &[
        RuleTier::any("ai-usage", &keywords::AI_USAGE, responses::AI_USAGE),
        RuleTier::any("ai-photo", &keywords::AI_PHOTO, responses::AI_PHOTO),
        RuleTier::any("ai-accuracy", &keywords::AI_ACCURACY, responses::AI_ACCURACY),
    ],
    fallback: responses::AI_FALLBACK,
    quick_questions: &[
        "Bagaimana cara menggunakan AI?",
        "Apakah hasilnya akurat?",
    ],
};

static BOOKING_RULES: PageRules = PageRules {
    welcome: responses::WELCOME_BOOKING,
    tiers: &[
        // The steps set deliberately omits the generic token "cara": it is so
        // common in questions ("Bagaimana cara reschedule?") that it would
        // shadow the reschedule tier below.
        RuleTier::any("booking-steps", &keywords::BOOKING_STEPS, responses::BOOKING_STEPS),
        RuleTier::any("booking-time", &keywords::BOOKING_TIME, responses::BOOKING_TIME),
        RuleTier::any(
            "booking-reschedule",
            &keywords::BOOKING_RESCHEDULE,
            responses::BOOKING_RESCHEDULE,
        ),
    ],
    fallback: responses::BOOKING_FALLBACK,
    quick_questions: &[
        "Langkah-langkah booking?",
        "Metode pembayaran apa saja?",
    ],
};

/// Rule set for a page. Exhaustive over the closed [`PageContext`] enum, so
/// there is no catch-all branch for an unknown page.
#[must_use]
pub fn page_rules(page: PageContext) -> &'static PageRules {
    match page {
        PageContext::Home => &HOME_RULES,
        PageContext::Barbers => &BARBERS_RULES,
        PageContext::AiAssistant => &AI_ASSISTANT_RULES,
        PageContext::Booking => &BOOKING_RULES,
    }
}
