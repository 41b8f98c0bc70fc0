use gloo::console::{error, log};
use yew::prelude::*;

mod brand;
mod contact;
mod embed;
mod meta;
mod sections;
mod ui;

use sections::{
    AboutSection, ClipGallery, ContactSection, FeatureGrid, Footer, Hero, NavBar, ScheduleSection,
    SponsorPitch,
};

#[derive(Properties, PartialEq)]
pub struct AppProps {
    /// Footer copyright year, read from the browser clock at startup.
    pub year: u32,
}

#[function_component(App)]
fn app(props: &AppProps) -> Html {
    html! {
        <div id="top" class="min-h-screen bg-[#0a0b0e] text-white scroll-smooth pt-20">
            <NavBar />
            <Hero />
            <FeatureGrid />
            <ClipGallery />
            <ScheduleSection />
            <SponsorPitch />
            <AboutSection />
            <ContactSection />
            <Footer year={props.year} />
        </div>
    }
}

fn main() {
    if let Err(e) = meta::apply(&meta::PAGE_META) {
        error!(format!("Could not update page metadata: {e}"));
    }

    let year = js_sys::Date::new_0().get_full_year();
    log!(format!("{} site starting", brand::BRAND.name));
    yew::Renderer::<App>::with_props(AppProps { year }).render();
}

#[cfg(test)]
mod tests {
    use super::*;
    use yew::LocalServerRenderer;

    async fn render_page() -> String {
        LocalServerRenderer::<App>::with_props(AppProps { year: 2025 })
            .hydratable(false)
            .render()
            .await
    }

    #[tokio::test]
    async fn page_stacks_sections_in_navigation_order() {
        let html = render_page().await;
        let mut last = 0;
        for id in ["id=\"top\"", "id=\"clips\"", "id=\"schedule\"", "id=\"sponsors\"", "id=\"about\"", "id=\"contact\""] {
            let at = html.find(id).unwrap_or_else(|| panic!("{id} missing"));
            assert!(at >= last, "{id} out of order");
            last = at;
        }
        assert!(html.contains("© 2025"));
    }

    #[tokio::test]
    async fn every_clip_is_embedded() {
        let html = render_page().await;
        for clip in brand::CLIPS {
            let raw = embed::embed_url(clip.id);
            let escaped = raw.replace('&', "&amp;");
            assert!(html.contains(&raw) || html.contains(&escaped), "{} not embedded", clip.id);
        }
    }

    #[tokio::test]
    async fn fresh_page_has_no_acknowledgment() {
        let html = render_page().await;
        assert!(!html.contains(contact::ACK_TEXT));
    }

    #[tokio::test]
    async fn outbound_social_links_open_in_new_tabs() {
        let html = render_page().await;
        for url in [brand::BRAND.socials.youtube, brand::BRAND.socials.twitch, brand::BRAND.socials.twitter] {
            let tag_start = html.find(&format!("href=\"{url}\"")).expect("social link");
            let tag_end = tag_start + html[tag_start..].find('>').unwrap();
            assert!(html[tag_start..tag_end].contains("target=\"_blank\""), "{url}");
        }
    }
}
