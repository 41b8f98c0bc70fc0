use yew::prelude::*;

const EMBED_BASE: &str = "https://www.youtube.com/embed/";
// Display preferences only: no related videos, minimal branding.
const EMBED_FLAGS: &str = "rel=0&modestbranding=1&autohide=1&showinfo=0";
const EMBED_ALLOW: &str =
    "accelerometer; autoplay; clipboard-write; encrypted-media; gyroscope; picture-in-picture; web-share";

pub fn embed_url(id: &str) -> String {
    format!("{EMBED_BASE}{id}?{EMBED_FLAGS}")
}

#[derive(Properties, PartialEq)]
pub struct YouTubeEmbedProps {
    pub id: AttrValue,
}

/// Fixed 16:9 frame. A bad id shows up as a broken player, not an error.
#[function_component(YouTubeEmbed)]
pub fn youtube_embed(props: &YouTubeEmbedProps) -> Html {
    let src = use_memo(props.id.clone(), |id| embed_url(id));

    html! {
        <div class="relative w-full overflow-hidden rounded-2xl shadow-xl bg-black">
            <div class="aspect-video">
                <iframe
                    class="h-full w-full"
                    src={(*src).clone()}
                    title="YouTube video player"
                    frameborder="0"
                    allow={EMBED_ALLOW}
                    allowfullscreen=true
                />
            </div>
        </div>
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::brand::CLIPS;
    use yew::LocalServerRenderer;

    #[test]
    fn every_clip_gets_the_fixed_embed_template() {
        for clip in CLIPS {
            assert_eq!(
                embed_url(clip.id),
                format!(
                    "https://www.youtube.com/embed/{}?rel=0&modestbranding=1&autohide=1&showinfo=0",
                    clip.id
                )
            );
        }
    }

    #[tokio::test]
    async fn iframe_points_at_the_embed_url() {
        let html = LocalServerRenderer::<YouTubeEmbed>::with_props(YouTubeEmbedProps {
            id: AttrValue::Static("HDwl_6mqhaA"),
        })
        .hydratable(false)
        .render()
        .await;

        let raw = embed_url("HDwl_6mqhaA");
        let escaped = raw.replace('&', "&amp;");
        assert!(html.contains(&raw) || html.contains(&escaped), "{html}");
        assert!(html.contains("aspect-video"));
    }
}
