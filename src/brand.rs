// Brand identity, links and the fixed content lists the page renders.

#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Socials {
    pub youtube: &'static str,
    pub twitch: &'static str,
    pub twitter: &'static str,
}

#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Brand {
    pub name: &'static str,
    pub tagline: &'static str,
    pub primary_gradient: &'static str,
    pub accent_gradient: &'static str,
    pub logo_url: &'static str,
    pub email: &'static str,
    pub socials: Socials,
}

pub const BRAND: Brand = Brand {
    name: "assyrianMOTM",
    tagline: "Precision • Speed • Headshots",
    primary_gradient: "from-blue-600 to-blue-400",
    accent_gradient: "from-red-600 to-red-400",
    logo_url: "/logo.jpg",
    email: "business@assyrianmotm.gg",
    socials: Socials {
        youtube: "https://youtube.com/@assyrianmotm",
        twitch: "https://twitch.tv/assyrianmotm",
        twitter: "https://x.com/assyrianmotm",
    },
};

#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Clip {
    pub title: &'static str,
    pub id: &'static str,
}

impl Clip {
    pub fn watch_url(&self) -> String {
        format!("https://www.youtube.com/watch?v={}", self.id)
    }

    pub fn shorts_url(&self) -> String {
        format!("https://youtube.com/shorts/{}", self.id)
    }
}

/// Display order matters: the first clip doubles as the hero's "Latest Short".
pub const CLIPS: [Clip; 3] = [
    Clip { title: "Crisp Headshot — CS2", id: "v2pi1Jn7UAQ" },
    Clip { title: "Clean 4K — Highlights", id: "AgSJ1FFOlcA" },
    Clip { title: "Silky Flick — One Tap", id: "HDwl_6mqhaA" },
];

#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Slot {
    pub day: &'static str,
    pub time: &'static str,
    pub activity: &'static str,
}

pub const SCHEDULE: [Slot; 3] = [
    Slot { day: "Mon", time: "6–8 PM CT", activity: "Stream / Ranked Grind" },
    Slot { day: "Wed", time: "6–8 PM CT", activity: "AIM Routine + VOD Review" },
    Slot { day: "Fri", time: "7–10 PM CT", activity: "Highlights & Community Games" },
];

pub const SCHEDULE_TIMEZONE_NOTE: &str = "Timezone: America/Chicago (CT) — adjust as needed.";

#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Feature {
    pub glyph: &'static str,
    pub title: &'static str,
    pub desc: &'static str,
}

pub const FEATURES: [Feature; 3] = [
    Feature { glyph: "◎", title: "Aim Discipline", desc: "Daily routines • VOD review • One-tap focus" },
    Feature { glyph: "♛", title: "Creator Identity", desc: "Assyrian roots • Clean design • Consistent brand" },
    Feature { glyph: "⛨", title: "Sponsor Ready", desc: "Media kit • Posting cadence • Clear value" },
];

/// In-page anchors shared by the nav bar and the footer.
pub const SECTION_LINKS: [(&str, &str); 5] = [
    ("#clips", "Clips"),
    ("#schedule", "Schedule"),
    ("#sponsors", "Sponsors"),
    ("#about", "About"),
    ("#contact", "Contact"),
];
