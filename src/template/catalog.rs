//! Static tone → content table.
//!
//! Subject templates may reference:
//! - `{reason}` - the reason, lowercased (`"time off"` when empty)
//! - `{reason_label}` - the reason as typed (`"Away"` when empty)
//!
//! Body templates may reference `{name}`, `{dates}`, `{return_date}`,
//! `{reason}`, `{reason_lower}` and `{backup}`. None of them reference notes.

use crate::tone::Tone;

/// Content owned by a single tone.
#[derive(Debug, Clone, Copy)]
pub struct CatalogEntry {
    /// Subject-line variants; one is picked at random. Never empty.
    pub subjects: &'static [&'static str],
    /// The tone's single body template.
    pub body: &'static str,
}

/// Look up a tone's content.
pub fn entry(tone: Tone) -> &'static CatalogEntry {
    match tone {
        Tone::Professional => &PROFESSIONAL,
        Tone::Friendly => &FRIENDLY,
        Tone::Hilarious => &HILARIOUS,
        Tone::PassiveAggressive => &PASSIVE_AGGRESSIVE,
        Tone::Mysterious => &MYSTERIOUS,
        Tone::Pirate => &PIRATE,
        Tone::Haiku => &HAIKU,
        Tone::GenZ => &GEN_Z,
    }
}

/// Look up content by identifier; unknown identifiers get the professional entry.
pub fn lookup(tone_id: &str) -> &'static CatalogEntry {
    entry(Tone::resolve(tone_id))
}

static PROFESSIONAL: CatalogEntry = CatalogEntry {
    subjects: &[
        "Out of Office: {reason_label}",
        "Away from office — returning soon",
        "Automatic Reply: Currently out for {reason}",
    ],
    body: "Thank you for your email. I am currently out of the office from {dates} for {reason_lower}.\n\n\
During my absence, please reach out to {backup} for any urgent matters. I will have limited access to email and will respond to your message upon my return.\n\n\
Thank you for your patience and understanding.\n\n\
Best regards,\n\
{name}",
};

static FRIENDLY: CatalogEntry = CatalogEntry {
    subjects: &[
        "I'm on {reason}! 🌴 Back soon!",
        "Hey! I'm away for a bit ✌️",
        "Taking some {reason} — be back soon!",
    ],
    body: "Hey there! 👋\n\n\
Thanks for reaching out! I'm currently away from {dates} — {reason_lower}.\n\n\
If you need something before I'm back, {backup} is your go-to and they're awesome. Otherwise, I'll get back to you when I return on {return_date}!\n\n\
Hope you're having a great day!\n\
{name}",
};

static HILARIOUS: CatalogEntry = CatalogEntry {
    subjects: &[
        "Gone fishin' 🎣 (not really, it's {reason})",
        "Plot twist: I'm not here",
        "This inbox has trust issues — I left it for {reason}",
    ],
    body: "I'm currently out of the office from {dates} for {reason_lower}. I know, I know — how will the company survive without me? Somehow, it will.\n\n\
If your email is urgent, please contact {backup}, who heroically volunteered (they didn't) to handle things in my absence. If it's not urgent, I'll pretend I didn't see this and respond when I'm back on {return_date}.\n\n\
In the meantime, please enjoy this fun fact: a group of flamingos is called a \"flamboyance.\"\n\n\
You're welcome,\n\
{name}",
};

static PASSIVE_AGGRESSIVE: CatalogEntry = CatalogEntry {
    subjects: &[
        "Out of office. Yes, again.",
        "Away. Please plan accordingly.",
        "Auto-reply: Not available (as my calendar clearly shows)",
    ],
    body: "Thank you for your email, which I'm sure couldn't possibly wait.\n\n\
Unfortunately, I'm out of the office from {dates} for {reason_lower}. I would say I'll miss the constant flow of emails, but my therapist says I need to be more honest.\n\n\
For truly urgent matters (and please, really ask yourself if it's urgent), you can reach {backup}. For everything else, I'll circle back on {return_date}. Or maybe the day after. We'll see how I feel.\n\n\
Warmly (ish),\n\
{name}",
};

static MYSTERIOUS: CatalogEntry = CatalogEntry {
    subjects: &[
        "[REDACTED]",
        "Do not reply.",
        "This inbox is... temporarily elsewhere.",
    ],
    body: "This inbox is currently... unattended.\n\n\
Where am I? That's not important. When will I return? {return_date}. Why am I gone? {reason}. Or so they say.\n\n\
Until then, {backup} holds the keys. They can help you. Probably.\n\n\
Do not reply to this message. It won't help.\n\n\
— {name}",
};

static PIRATE: CatalogEntry = CatalogEntry {
    subjects: &[
        "⚓ Gone to Sea — Return Date TBD",
        "Ahoy! Captain is off ship",
        "Sailed away for {reason} 🏴‍☠️",
    ],
    body: "Ahoy, ye scallywag! 🏴‍☠️\n\n\
Ye've reached the desk of {name}, but I've set sail from {dates}! I be away for {reason_lower} and won't be checkin' me messages in a bottle.\n\n\
If yer matter be urgent, send word to {backup} — they be holdin' down the ship while I'm gone. Otherwise, I'll respond when I return to port on {return_date}.\n\n\
May the wind be at yer back! ⚓\n\
Captain {name}",
};

static HAIKU: CatalogEntry = CatalogEntry {
    subjects: &["Away. Returning.", "Out of office now.", "Gone, then back again."],
    body: "Out of office now.\n\
{reason} calls me away.\n\
Back {return_date}.\n\n\
For urgent matters:\n\
{backup} stands ready to help.\n\
Patience is a gift.\n\n\
— {name}",
};

static GEN_Z: CatalogEntry = CatalogEntry {
    subjects: &[
        "im literally not here rn 💀",
        "out of office era ✨",
        "on {reason} and it's giving GONE 💅",
    ],
    body: "bestie i am NOT here rn 😭\n\n\
i'm out {dates} for {reason_lower} and it's giving ✨unavailable✨\n\n\
for anything urgent slide into {backup}'s DMs — they're lowkey the GOAT 🐐 otherwise i'll get back to u when i'm back no cap\n\n\
slay 💅\n\
{name}",
};
