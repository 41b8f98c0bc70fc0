// Style-only building blocks. Every component merges the caller's `class`
// into a fixed base set and renders its children untouched.

use yew::prelude::*;

use crate::brand::BRAND;

pub const BUTTON_BASE: &str =
    "inline-flex items-center justify-center rounded-md px-4 py-2 text-sm font-medium transition";
pub const CARD_BASE: &str = "rounded-2xl border bg-zinc-900/60";
pub const CARD_HEADER_BASE: &str = "p-4";
pub const CARD_TITLE_BASE: &str = "text-lg font-semibold";
pub const CARD_CONTENT_BASE: &str = "p-4 pt-0";
pub const BADGE_BASE: &str =
    "inline-flex items-center rounded-full bg-zinc-800 px-2.5 py-1 text-xs text-zinc-200";
pub const FIELD_BASE: &str =
    "w-full rounded-xl border border-zinc-700 bg-zinc-950 px-3 py-2 text-sm text-white placeholder-zinc-400";

#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub enum ButtonVariant {
    #[default]
    Default,
    Secondary,
    Outline,
}

impl ButtonVariant {
    pub fn classes(self) -> &'static str {
        match self {
            ButtonVariant::Default => "bg-blue-600 text-white hover:bg-blue-500",
            ButtonVariant::Secondary => "bg-zinc-100 text-zinc-900 hover:bg-white",
            ButtonVariant::Outline => "border border-zinc-700 text-white hover:bg-zinc-900",
        }
    }
}

#[derive(Properties, PartialEq)]
pub struct ButtonProps {
    #[prop_or_default]
    pub variant: ButtonVariant,
    #[prop_or_default]
    pub class: Classes,
    /// Renders `type="submit"` instead of `type="button"`.
    #[prop_or_default]
    pub submit: bool,
    #[prop_or_default]
    pub disabled: bool,
    #[prop_or_default]
    pub onclick: Option<Callback<MouseEvent>>,
    #[prop_or_default]
    pub children: Html,
}

#[function_component(Button)]
pub fn button(props: &ButtonProps) -> Html {
    let kind = if props.submit { "submit" } else { "button" };
    html! {
        <button
            class={classes!(BUTTON_BASE, props.variant.classes(), props.class.clone())}
            type={kind}
            disabled={props.disabled}
            onclick={props.onclick.clone()}
        >
            { props.children.clone() }
        </button>
    }
}

#[derive(Properties, PartialEq)]
pub struct BoxProps {
    #[prop_or_default]
    pub class: Classes,
    #[prop_or_default]
    pub id: Option<AttrValue>,
    #[prop_or_default]
    pub children: Html,
}

#[function_component(Card)]
pub fn card(props: &BoxProps) -> Html {
    html! {
        <div id={props.id.clone()} class={classes!(CARD_BASE, props.class.clone())}>
            { props.children.clone() }
        </div>
    }
}

#[function_component(CardHeader)]
pub fn card_header(props: &BoxProps) -> Html {
    html! {
        <div id={props.id.clone()} class={classes!(CARD_HEADER_BASE, props.class.clone())}>
            { props.children.clone() }
        </div>
    }
}

#[function_component(CardTitle)]
pub fn card_title(props: &BoxProps) -> Html {
    html! {
        <h3 id={props.id.clone()} class={classes!(CARD_TITLE_BASE, props.class.clone())}>
            { props.children.clone() }
        </h3>
    }
}

#[function_component(CardContent)]
pub fn card_content(props: &BoxProps) -> Html {
    html! {
        <div id={props.id.clone()} class={classes!(CARD_CONTENT_BASE, props.class.clone())}>
            { props.children.clone() }
        </div>
    }
}

#[function_component(Badge)]
pub fn badge(props: &BoxProps) -> Html {
    html! {
        <span id={props.id.clone()} class={classes!(BADGE_BASE, props.class.clone())}>
            { props.children.clone() }
        </span>
    }
}

#[derive(Properties, PartialEq)]
pub struct InputProps {
    #[prop_or_default]
    pub class: Classes,
    #[prop_or(AttrValue::Static("text"))]
    pub input_type: AttrValue,
    #[prop_or_default]
    pub name: Option<AttrValue>,
    #[prop_or_default]
    pub placeholder: Option<AttrValue>,
    #[prop_or_default]
    pub value: AttrValue,
    #[prop_or_default]
    pub required: bool,
    #[prop_or_default]
    pub oninput: Option<Callback<InputEvent>>,
}

#[function_component(Input)]
pub fn input(props: &InputProps) -> Html {
    html! {
        <input
            class={classes!(FIELD_BASE, props.class.clone())}
            type={props.input_type.clone()}
            name={props.name.clone()}
            placeholder={props.placeholder.clone()}
            value={props.value.clone()}
            required={props.required}
            oninput={props.oninput.clone()}
        />
    }
}

#[derive(Properties, PartialEq)]
pub struct TextareaProps {
    #[prop_or_default]
    pub class: Classes,
    #[prop_or_default]
    pub name: Option<AttrValue>,
    #[prop_or_default]
    pub placeholder: Option<AttrValue>,
    #[prop_or_default]
    pub value: AttrValue,
    #[prop_or(3)]
    pub rows: u32,
    #[prop_or_default]
    pub required: bool,
    #[prop_or_default]
    pub oninput: Option<Callback<InputEvent>>,
}

#[function_component(Textarea)]
pub fn textarea(props: &TextareaProps) -> Html {
    html! {
        <textarea
            class={classes!(FIELD_BASE, props.class.clone())}
            name={props.name.clone()}
            placeholder={props.placeholder.clone()}
            value={props.value.clone()}
            rows={props.rows.to_string()}
            required={props.required}
            oninput={props.oninput.clone()}
        />
    }
}

#[derive(Properties, PartialEq)]
pub struct GradientTextProps {
    #[prop_or_default]
    pub accent: bool,
    #[prop_or_default]
    pub children: Html,
}

#[function_component(GradientText)]
pub fn gradient_text(props: &GradientTextProps) -> Html {
    let gradient = if props.accent { BRAND.accent_gradient } else { BRAND.primary_gradient };
    html! {
        <span class={classes!("bg-gradient-to-r", gradient, "bg-clip-text", "text-transparent")}>
            { props.children.clone() }
        </span>
    }
}

#[derive(Properties, PartialEq)]
pub struct ExternalLinkProps {
    pub href: AttrValue,
    #[prop_or_default]
    pub class: Classes,
    #[prop_or_default]
    pub children: Html,
}

/// Outbound links always open in a new browsing context.
#[function_component(ExternalLink)]
pub fn external_link(props: &ExternalLinkProps) -> Html {
    html! {
        <a href={props.href.clone()} class={props.class.clone()} target="_blank" rel="noreferrer">
            { props.children.clone() }
        </a>
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use yew::LocalServerRenderer;

    fn first_class_attr(html: &str) -> Vec<String> {
        let start = html.find("class=\"").expect("class attribute") + "class=\"".len();
        let end = start + html[start..].find('"').expect("closing quote");
        html[start..end].split_whitespace().map(str::to_string).collect()
    }

    #[derive(Properties, PartialEq)]
    struct VariantHost {
        variant: ButtonVariant,
    }

    #[function_component(VariantButton)]
    fn variant_button(props: &VariantHost) -> Html {
        html! { <Button variant={props.variant}>{ "Go" }</Button> }
    }

    async fn render_variant(variant: ButtonVariant) -> Vec<String> {
        let html = LocalServerRenderer::<VariantButton>::with_props(VariantHost { variant })
            .hydratable(false)
            .render()
            .await;
        first_class_attr(&html)
    }

    #[tokio::test]
    async fn each_button_variant_renders_only_its_own_classes() {
        let all = [ButtonVariant::Default, ButtonVariant::Secondary, ButtonVariant::Outline];
        for variant in all {
            let got = render_variant(variant).await;
            let mut expected: Vec<String> = BUTTON_BASE
                .split_whitespace()
                .chain(variant.classes().split_whitespace())
                .map(str::to_string)
                .collect();
            expected.dedup();
            assert_eq!(got, expected, "{variant:?}");

            for other in all.iter().filter(|o| **o != variant) {
                for class in other.classes().split_whitespace() {
                    if !variant.classes().split_whitespace().any(|c| c == class) {
                        assert!(!got.iter().any(|g| g == class), "{variant:?} leaked {class}");
                    }
                }
            }
        }
    }

    #[function_component(ButtonWithExtra)]
    fn button_with_extra() -> Html {
        html! { <Button submit=true class="rounded-2xl px-5">{ "Send" }</Button> }
    }

    #[tokio::test]
    async fn extra_classes_merge_after_the_base() {
        let html = LocalServerRenderer::<ButtonWithExtra>::new()
            .hydratable(false)
            .render()
            .await;
        let classes = first_class_attr(&html);
        assert_eq!(classes.first().map(String::as_str), Some("inline-flex"));
        assert!(classes.iter().any(|c| c == "rounded-2xl"));
        assert_eq!(classes.iter().filter(|c| *c == "px-4").count(), 1);
        assert!(html.contains("type=\"submit\""));
        assert!(html.contains("Send"));
    }

    #[function_component(Links)]
    fn links() -> Html {
        html! { <ExternalLink href="https://x.com/assyrianmotm">{ "X" }</ExternalLink> }
    }

    #[tokio::test]
    async fn external_links_open_a_new_context() {
        let html = LocalServerRenderer::<Links>::new().hydratable(false).render().await;
        assert!(html.contains("target=\"_blank\""));
        assert!(html.contains("rel=\"noreferrer\""));
    }
}
