// Page sections. Each one is a stateless view over the constants in `brand`;
// the contact form is the only piece that owns state.

use yew::prelude::*;

use crate::brand::{BRAND, CLIPS, FEATURES, SCHEDULE, SCHEDULE_TIMEZONE_NOTE, SECTION_LINKS};
use crate::contact::{partnership_href, ContactForm};
use crate::embed::YouTubeEmbed;
use crate::ui::{
    Badge, Button, ButtonVariant, Card, CardContent, CardHeader, CardTitle, ExternalLink,
    GradientText,
};

const PANEL: &str = "border-zinc-800 bg-zinc-900/60";

fn logo_alt() -> String {
    format!("{} logo", BRAND.name)
}

/// YouTube / Twitch / X buttons, shared by the hero and the quick links card.
#[function_component(SocialButtons)]
fn social_buttons() -> Html {
    html! {
        <>
            <ExternalLink href={BRAND.socials.youtube}>
                <Button class="rounded-2xl px-5">{ "▶ YouTube" }</Button>
            </ExternalLink>
            <ExternalLink href={BRAND.socials.twitch}>
                <Button variant={ButtonVariant::Secondary} class="rounded-2xl">{ "Twitch" }</Button>
            </ExternalLink>
            <ExternalLink href={BRAND.socials.twitter}>
                <Button variant={ButtonVariant::Outline} class="rounded-2xl">{ "X / Twitter" }</Button>
            </ExternalLink>
        </>
    }
}

#[function_component(NavBar)]
pub fn nav_bar() -> Html {
    html! {
        <div class="fixed inset-x-0 top-0 z-50">
            <div class="mx-auto max-w-7xl px-4">
                <div class="mt-3 rounded-2xl border border-zinc-800/80 bg-zinc-950/70 backdrop-blur supports-[backdrop-filter]:bg-zinc-950/50">
                    <div class="flex items-center justify-between px-4 py-2">
                        <a href="#top" class="flex items-center gap-2">
                            <div class="h-7 w-7 overflow-hidden rounded-lg ring-1 ring-zinc-800">
                                <img src={BRAND.logo_url} alt={logo_alt()} class="h-full w-full object-cover" />
                            </div>
                            <span class="text-sm font-semibold tracking-wide">
                                <GradientText>{ BRAND.name }</GradientText>
                            </span>
                        </a>
                        // Hidden below the md breakpoint; there is no mobile menu.
                        <nav class="hidden items-center gap-5 text-sm text-zinc-300 md:flex">
                            { for SECTION_LINKS.iter().map(|(href, label)| html! {
                                <a href={*href} class="hover:text-white">{ *label }</a>
                            }) }
                            <ExternalLink
                                href={BRAND.socials.youtube}
                                class="rounded-xl border border-zinc-700 px-3 py-1 hover:bg-zinc-900"
                            >
                                { "Subscribe" }
                            </ExternalLink>
                        </nav>
                    </div>
                </div>
            </div>
        </div>
    }
}

#[function_component(LogoReveal)]
fn logo_reveal() -> Html {
    html! {
        <div class="relative h-12 w-12 motion-pop-in">
            <div class="pointer-events-none absolute -inset-1 rounded-2xl opacity-70 motion-halo" />
            <div class="pointer-events-none absolute inset-0 rounded-xl motion-pulse" />
            <img
                src={BRAND.logo_url}
                alt={logo_alt()}
                class="relative z-10 h-12 w-12 rounded-xl object-cover ring-1 ring-zinc-800"
            />
        </div>
    }
}

#[function_component(Hero)]
pub fn hero() -> Html {
    let latest = CLIPS[0];

    html! {
        <section class="relative overflow-hidden">
            <div class="pointer-events-none absolute inset-0 opacity-20 bg-[radial-gradient(ellipse_at_top_right,_var(--tw-gradient-stops))] from-blue-600 via-blue-400/20 to-transparent" />
            <img
                src={BRAND.logo_url}
                alt="logo watermark"
                class="pointer-events-none absolute right-[-8%] top-[-12%] w-[560px] opacity-[0.08] blur-xl motion-drift"
            />
            <div class="mx-auto max-w-7xl px-6 pt-16 pb-10 md:pt-24 motion-fade-up">
                <div class="flex flex-col items-start gap-6 md:flex-row md:items-end md:justify-between">
                    <div>
                        <h1 class="text-4xl font-black tracking-tight sm:text-6xl flex items-center gap-3">
                            <LogoReveal />
                            <GradientText>{ BRAND.name }</GradientText>
                        </h1>
                        <p class="mt-3 max-w-2xl text-lg text-zinc-300">
                            { "High-impact Counter-Strike highlights with " }
                            <span class="font-semibold">{ "precision headshots" }</span>
                            { ", clean edits, and an Assyrian identity. Daily clips. Real skill. " }
                            <span class="text-zinc-100">{ "MOTM mentality." }</span>
                        </p>
                        <div class="mt-4 flex flex-wrap gap-3">
                            { for BRAND.tagline.split(" • ").map(|word| html! {
                                <Badge class="rounded-full bg-zinc-900/70 px-3 py-1 text-sm backdrop-blur">{ word }</Badge>
                            }) }
                        </div>
                        <div class="mt-6 flex flex-wrap gap-3">
                            <SocialButtons />
                        </div>
                    </div>
                    <div class="mt-8 w-full md:mt-0 md:max-w-md motion-pop-in">
                        <div class="relative rounded-3xl border border-zinc-800 bg-gradient-to-br from-zinc-950 to-zinc-900 p-4 shadow-2xl">
                            <div class="absolute -inset-0.5 rounded-3xl bg-gradient-to-r from-blue-600/30 via-blue-400/10 to-transparent blur-lg" />
                            <div class="relative">
                                <YouTubeEmbed id={latest.id} />
                                <div class="mt-3 flex items-center justify-between text-sm text-zinc-400">
                                    <span class="inline-flex items-center gap-2">{ "▶ Latest Short" }</span>
                                    <ExternalLink
                                        href={latest.shorts_url()}
                                        class="inline-flex items-center gap-1 hover:text-white"
                                    >
                                        { "Watch on YouTube ↗" }
                                    </ExternalLink>
                                </div>
                            </div>
                        </div>
                    </div>
                </div>
            </div>
        </section>
    }
}

#[function_component(FeatureGrid)]
pub fn feature_grid() -> Html {
    html! {
        <section class="border-y border-zinc-800 bg-zinc-950/40">
            <div class="mx-auto grid max-w-7xl grid-cols-1 gap-4 px-6 py-10 md:grid-cols-3">
                { for FEATURES.iter().map(|f| html! {
                    <Card class="border-zinc-800 bg-zinc-900/50">
                        <CardHeader>
                            <CardTitle class="flex items-center gap-3 text-xl">
                                <span aria-hidden="true">{ f.glyph }</span>
                                { f.title }
                            </CardTitle>
                        </CardHeader>
                        <CardContent><p class="text-zinc-300">{ f.desc }</p></CardContent>
                    </Card>
                }) }
            </div>
        </section>
    }
}

#[function_component(ClipGallery)]
pub fn clip_gallery() -> Html {
    html! {
        <section id="clips" class="mx-auto max-w-7xl px-6 py-14">
            <div class="mb-8 flex items-end justify-between">
                <div>
                    <h2 class="text-3xl font-bold"><GradientText>{ "Highlights" }</GradientText></h2>
                    <p class="mt-2 text-zinc-400">
                        { "Quick, clean, sponsor-friendly edits — optimized for Shorts and Reels." }
                    </p>
                </div>
                <ExternalLink href={BRAND.socials.youtube} class="hidden md:block">
                    <Button class="rounded-2xl">{ "▶ See More" }</Button>
                </ExternalLink>
            </div>
            <div class="grid grid-cols-1 gap-6 md:grid-cols-2 lg:grid-cols-3">
                { for CLIPS.iter().map(|clip| html! {
                    <div key={clip.id} class="motion-fade-up">
                        <Card class={PANEL}>
                            <CardContent class="p-3">
                                <YouTubeEmbed id={clip.id} />
                                <div class="mt-3 flex items-center justify-between">
                                    <span class="text-sm text-zinc-300">{ clip.title }</span>
                                    <ExternalLink
                                        href={clip.watch_url()}
                                        class="text-sm text-zinc-400 hover:text-white inline-flex items-center gap-1"
                                    >
                                        { "Open ↗" }
                                    </ExternalLink>
                                </div>
                            </CardContent>
                        </Card>
                    </div>
                }) }
            </div>
        </section>
    }
}

#[function_component(ScheduleSection)]
pub fn schedule_section() -> Html {
    html! {
        <section id="schedule" class="border-y border-zinc-800 bg-gradient-to-br from-zinc-950 via-zinc-950 to-black">
            <div class="mx-auto max-w-7xl px-6 py-14">
                <div class="mb-8 flex items-center gap-3">
                    <h2 class="text-2xl font-bold tracking-tight">{ "Stream Schedule" }</h2>
                </div>
                <div class="grid grid-cols-1 gap-4 md:grid-cols-3">
                    { for SCHEDULE.iter().map(|slot| html! {
                        <Card key={slot.day} class={PANEL}>
                            <CardHeader>
                                <CardTitle class="flex items-center gap-2">
                                    <span class="rounded-xl bg-gradient-to-r from-blue-600 to-blue-400 px-2 py-0.5 text-sm font-semibold text-black">
                                        { slot.day }
                                    </span>
                                    <span class="text-sm text-zinc-300">{ slot.time }</span>
                                </CardTitle>
                            </CardHeader>
                            <CardContent><p class="text-zinc-300">{ slot.activity }</p></CardContent>
                        </Card>
                    }) }
                </div>
                <p class="mt-4 text-sm text-zinc-400">{ SCHEDULE_TIMEZONE_NOTE }</p>
            </div>
        </section>
    }
}

#[function_component(SponsorPitch)]
pub fn sponsor_pitch() -> Html {
    let name = BRAND.name;

    html! {
        <section id="sponsors" class="mx-auto max-w-7xl px-6 py-14">
            <div class="mb-8 flex items-center gap-3">
                <h2 class="text-2xl font-bold tracking-tight">{ "Sponsor-Ready Pitch" }</h2>
            </div>
            <div class="grid grid-cols-1 gap-6 lg:grid-cols-2">
                <Card class={PANEL}>
                    <CardHeader><CardTitle>{ format!("Why {name}?") }</CardTitle></CardHeader>
                    <CardContent class="space-y-3 text-zinc-300">
                        <p>
                            { "High-impact CS2 highlights with clean, modern edits and a unique cultural identity. \
                               The content is family-friendly, brand-safe, and built for Shorts/Vertical distribution." }
                        </p>
                        <ul class="list-inside list-disc space-y-1">
                            <li>{ "Daily posting cadence across YouTube, TikTok, and Reels" }</li>
                            <li>{ "Signature look: high contrast, slow-mo impact frame, logo watermark" }</li>
                            <li>{ "Clear value: precision headshots, fast time-to-action, strong retention" }</li>
                        </ul>
                        <div class="pt-2 text-sm text-zinc-400">{ "Media Kit available on request." }</div>
                    </CardContent>
                </Card>
                <Card class={PANEL}>
                    <CardHeader><CardTitle>{ "Sample Outreach (Copy & Send)" }</CardTitle></CardHeader>
                    <CardContent>
                        <div class="rounded-xl bg-black/50 p-4 text-sm leading-relaxed text-zinc-300">
                            <p class="font-semibold">{ format!("Subject: Creator Partnership — {name}") }</p>
                            <p class="mt-2">
                                { format!("Hi Team, I’m {name}. I create high-impact Counter-Strike highlights with precise \
                                           headshots and clean edits. I’d love to collaborate via affiliate codes, product \
                                           testing, or creator partnerships.") }
                            </p>
                            <p class="mt-2">{ "Recent clips: YouTube Shorts + Reels (links on site). Happy to share analytics." }</p>
                            <p class="mt-2">{ "Thanks for your time — looking forward to connecting." }</p>
                            <p class="mt-2">{ format!("— {name}") }</p>
                        </div>
                        <div class="mt-4 flex flex-wrap gap-3">
                            <a href={partnership_href()}>
                                <Button class="rounded-2xl">{ "✉ Email Me" }</Button>
                            </a>
                            <ExternalLink href={BRAND.socials.twitter}>
                                <Button variant={ButtonVariant::Outline} class="rounded-2xl">{ "DM on X" }</Button>
                            </ExternalLink>
                        </div>
                    </CardContent>
                </Card>
            </div>
        </section>
    }
}

#[function_component(AboutSection)]
pub fn about_section() -> Html {
    let name = BRAND.name;
    let pillars = ["CS2 Highlights", "Gameplay Breakdowns & Tips", "Cinematic Showcase Edits"];
    let style = ["Instant first frame: show the kill", "Slow-mo impact on headshot", "High contrast + glow on crosshair"];
    let bullets = |items: &[&'static str]| -> Html {
        html! {
            <ul class="list-inside list-disc text-zinc-300">
                { for items.iter().map(|i| html! { <li>{ *i }</li> }) }
            </ul>
        }
    };

    html! {
        <section id="about" class="border-y border-zinc-800 bg-zinc-950/40">
            <div class="mx-auto max-w-7xl px-6 py-14">
                <div class="mb-8">
                    <h2 class="text-2xl font-bold"><GradientText>{ "About" }</GradientText></h2>
                    <p class="mt-2 max-w-3xl text-zinc-300">
                        { format!("CS2 Headshot Machine ⚡ Precision • Speed • {name}. High-impact Counter-Strike highlights \
                                   with clean edits, cinematic kills, and Assyrian identity. Daily uploads — welcome to the \
                                   MOTM mentality.") }
                    </p>
                </div>
                <div class="grid grid-cols-1 gap-6 md:grid-cols-3">
                    <Card class={PANEL}>
                        <CardHeader><CardTitle>{ "Content Pillars" }</CardTitle></CardHeader>
                        <CardContent>{ bullets(&pillars) }</CardContent>
                    </Card>
                    <Card class={PANEL}>
                        <CardHeader><CardTitle>{ "Signature Style" }</CardTitle></CardHeader>
                        <CardContent>{ bullets(&style) }</CardContent>
                    </Card>
                    <Card class={PANEL}>
                        <CardHeader><CardTitle>{ "Hashtags" }</CardTitle></CardHeader>
                        <CardContent>
                            <div class="rounded-xl bg-black/50 p-3 text-sm text-zinc-300">
                                { format!("#CS2 #CounterStrike #CSGO #Gaming #Headshot #Flick #FPS #{name}") }
                            </div>
                        </CardContent>
                    </Card>
                </div>
            </div>
        </section>
    }
}

#[function_component(ContactSection)]
pub fn contact_section() -> Html {
    html! {
        <section id="contact" class="mx-auto max-w-7xl px-6 py-14">
            <div class="mb-8">
                <h2 class="text-2xl font-bold"><GradientText accent=true>{ "Contact" }</GradientText></h2>
                <p class="mt-2 max-w-2xl text-zinc-300">
                    { "Brands, managers, and collab requests — reach out below. I typically respond within 24 hours." }
                </p>
            </div>
            <div class="grid grid-cols-1 gap-6 lg:grid-cols-2">
                <Card class={PANEL}>
                    <CardHeader><CardTitle class="flex items-center gap-2">{ "✉ Email" }</CardTitle></CardHeader>
                    <CardContent><ContactForm /></CardContent>
                </Card>
                <Card class={PANEL}>
                    <CardHeader><CardTitle>{ "Quick Links" }</CardTitle></CardHeader>
                    <CardContent class="flex flex-wrap gap-3"><SocialButtons /></CardContent>
                </Card>
            </div>
        </section>
    }
}

#[derive(Properties, PartialEq)]
pub struct FooterProps {
    pub year: u32,
}

#[function_component(Footer)]
pub fn footer(props: &FooterProps) -> Html {
    html! {
        <footer class="border-t border-zinc-800 bg-black/60">
            <div class="mx-auto flex max-w-7xl flex-col items-center justify-between gap-4 px-6 py-8 text-sm text-zinc-400 md:flex-row">
                <div>
                    { format!("© {} ", props.year) }
                    <span class="font-semibold text-white">{ BRAND.name }</span>
                    { ". Built for highlights, clips, and partnerships." }
                </div>
                <div class="flex items-center gap-3">
                    { for SECTION_LINKS.iter().map(|(href, label)| html! {
                        <a class="hover:text-white" href={*href}>{ *label }</a>
                    }) }
                </div>
            </div>
        </footer>
    }
}
