/// Named static set of lowercase substrings defining one intent category.
///
/// Membership is plain substring containment against the already-lowercased
/// utterance, with no word-boundary checks. That makes matching cheap and
/// predictable but admits false positives when a token is embedded inside an
/// unrelated longer word (`bayar` inside `pembayaran`, `jam` inside a word
/// that merely contains it). This is the behavior the assistant shipped with
/// and downstream responses are tuned for it; do not switch to token-level
/// matching without re-auditing the rule tables.
#[derive(Debug, Clone, Copy)]
pub struct KeywordSet {
    pub name: &'static str,
    pub tokens: &'static [&'static str],
}

impl KeywordSet {
    #[must_use]
    pub const fn new(name: &'static str, tokens: &'static [&'static str]) -> Self {
        Self { name, tokens }
    }

    /// Any-token substring match. `lower` must already be lowercased.
    #[must_use]
    pub fn matches(&self, lower: &str) -> bool {
        self.tokens.iter().any(|token| lower.contains(token))
    }
}

pub static GREETING: KeywordSet = KeywordSet::new(
    "greeting",
    &[
        "halo", "hai", "hello", "hi", "selamat", "pagi", "siang", "sore", "malam", "hei", "hey",
    ],
);

/// Broad domain vocabulary gating everything after the greeting tier. An
/// utterance with no hit here is considered out of scope for the assistant.
pub static RELEVANCE: KeywordSet = KeywordSet::new(
    "relevance",
    &[
        "barber",
        "potong",
        "rambut",
        "haircut",
        "cukur",
        "shave",
        "beard",
        "jenggot",
        "booking",
        "pesan",
        "janji",
        "appointment",
        "reservasi",
        "layanan",
        "service",
        "harga",
        "price",
        "biaya",
        "cost",
        "jam",
        "waktu",
        "time",
        "buka",
        "tutup",
        "lokasi",
        "alamat",
        "location",
        "address",
        "cara",
        "how",
        "bagaimana",
        "ai",
        "rekomendasi",
        "recommendation",
        "style",
        "gaya",
        "foto",
        "photo",
        "upload",
        "barbers",
        "pilih",
        "choose",
        "rating",
        "review",
        "ulasan",
        "langkah",
        "step",
        "ubah",
        "cancel",
        "reschedule",
        "elite",
        "cuts",
        "premium",
        "expert",
        "fade",
        "classic",
        "modern",
        "trending",
        "akurat",
        "anak",
        "children",
        "kapster",
        "pembayaran",
        "payment",
        "qris",
        "cash",
        "tunai",
        "kredit",
        "debit",
        "hubungi",
        "contact",
        "whatsapp",
        "telepon",
        "paket",
        "package",
        "creambath",
        "coloring",
        "warna",
        "walk-in",
        "datang",
        "sosial",
        "social",
        "media",
        "instagram",
        "tiktok",
        "youtube",
        "follow",
        "subscribe",
        "promo",
    ],
);

// Global topic sets, page independent.

pub static LOCATION: KeywordSet =
    KeywordSet::new("location", &["lokasi", "alamat", "location", "address"]);

/// First conjunct of the operating-hours tier; must co-occur with a token
/// from [`OPEN_CLOSE`].
pub static HOURS: KeywordSet = KeywordSet::new("hours", &["jam"]);

pub static OPEN_CLOSE: KeywordSet =
    KeywordSet::new("open-close", &["buka", "operasional", "tutup"]);

pub static CONTACT: KeywordSet =
    KeywordSet::new("contact", &["hubungi", "contact", "whatsapp", "telepon"]);

pub static PAYMENT: KeywordSet = KeywordSet::new("payment", &["pembayaran", "payment", "bayar"]);

pub static CHILDREN: KeywordSet = KeywordSet::new("children", &["anak", "children", "kid"]);

pub static WALK_IN: KeywordSet = KeywordSet::new("walk-in", &["walk-in", "langsung datang"]);

pub static PACKAGE: KeywordSet = KeywordSet::new("package", &["paket", "package"]);

pub static SOCIAL: KeywordSet = KeywordSet::new(
    "social",
    &[
        "sosial",
        "social",
        "media",
        "instagram",
        "tiktok",
        "youtube",
        "follow",
        "promo",
    ],
);

// Page topic sets.

pub static HOME_SERVICES: KeywordSet =
    KeywordSet::new("home-services", &["layanan", "service", "tersedia"]);

pub static HOME_PRICING: KeywordSet =
    KeywordSet::new("home-pricing", &["harga", "price", "biaya", "cost"]);

pub static HOME_BOOKING: KeywordSet = KeywordSet::new("home-booking", &["booking", "pesan"]);

pub static BARBERS_CHOOSE: KeywordSet =
    KeywordSet::new("barbers-choose", &["pilih", "choose", "siapa", "kapster"]);

pub static BARBERS_RATING: KeywordSet =
    KeywordSet::new("barbers-rating", &["rating", "review"]);

pub static AI_USAGE: KeywordSet = KeywordSet::new("ai-usage", &["cara", "how", "gunakan"]);

pub static AI_PHOTO: KeywordSet = KeywordSet::new("ai-photo", &["foto", "upload"]);

pub static AI_ACCURACY: KeywordSet = KeywordSet::new("ai-accuracy", &["akurat", "accurate"]);

pub static BOOKING_STEPS: KeywordSet = KeywordSet::new("booking-steps", &["langkah", "step"]);

pub static BOOKING_TIME: KeywordSet = KeywordSet::new("booking-time", &["waktu", "jam", "time"]);

pub static BOOKING_RESCHEDULE: KeywordSet = KeywordSet::new(
    "booking-reschedule",
    &["ubah", "cancel", "reschedule", "batal"],
);
