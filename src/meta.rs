// Document <head> metadata. index.html carries the same values for scrapers
// that never run WASM; `apply` keeps the live document in sync at startup.

use web_sys::Document;

#[derive(Debug, Clone, Copy, PartialEq)]
pub struct PageMeta {
    pub title: &'static str,
    pub description: &'static str,
    pub og_title: &'static str,
    pub og_description: &'static str,
    pub image: &'static str,
    pub twitter_card: &'static str,
    pub twitter_title: &'static str,
    pub twitter_description: &'static str,
}

pub const PAGE_META: PageMeta = PageMeta {
    title: "assyrianMOTM — CS2 Highlights",
    description: "High‑impact Counter‑Strike highlights with precision headshots and clean edits. MOTM mentality.",
    og_title: "assyrianMOTM — CS2 Highlights",
    og_description: "High‑impact Counter‑Strike highlights with precision headshots and clean edits.",
    image: "/logo.jpg",
    twitter_card: "summary_large_image",
    twitter_title: "assyrianMOTM",
    twitter_description: "CS2 Headshot Machine — precision • speed • highlights",
};

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct MetaTag {
    /// `name` or `property`
    pub attr: &'static str,
    pub key: &'static str,
    pub content: &'static str,
}

impl PageMeta {
    pub fn tags(&self) -> Vec<MetaTag> {
        let tag = |attr, key, content| MetaTag { attr, key, content };
        vec![
            tag("name", "description", self.description),
            tag("property", "og:title", self.og_title),
            tag("property", "og:description", self.og_description),
            tag("property", "og:image", self.image),
            tag("name", "twitter:card", self.twitter_card),
            tag("name", "twitter:title", self.twitter_title),
            tag("name", "twitter:description", self.twitter_description),
            tag("name", "twitter:image", self.image),
        ]
    }
}

fn js_err(e: wasm_bindgen::JsValue) -> String {
    format!("{e:?}")
}

fn upsert_tag(doc: &Document, tag: &MetaTag) -> Result<(), String> {
    let selector = format!("meta[{}=\"{}\"]", tag.attr, tag.key);
    let el = match doc.query_selector(&selector).map_err(js_err)? {
        Some(el) => el,
        None => {
            let head = doc.head().ok_or("Document has no <head>")?;
            let el = doc.create_element("meta").map_err(js_err)?;
            el.set_attribute(tag.attr, tag.key).map_err(js_err)?;
            head.append_child(&el).map_err(js_err)?;
            el
        }
    };
    el.set_attribute("content", tag.content).map_err(js_err)
}

pub fn apply(meta: &PageMeta) -> Result<(), String> {
    let doc = web_sys::window()
        .and_then(|w| w.document())
        .ok_or("No document available")?;
    doc.set_title(meta.title);
    for tag in meta.tags() {
        upsert_tag(&doc, &tag)?;
    }
    Ok(())
}
