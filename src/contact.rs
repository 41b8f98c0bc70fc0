use gloo::console::{error, log};
use web_sys::{HtmlInputElement, HtmlTextAreaElement};
use yew::prelude::*;

use crate::brand::BRAND;
use crate::ui::{Button, Input, Textarea};

pub const ACK_TEXT: &str = "Thanks! Your email app should be opening now.";

/// Form fields plus the one-way `submitted` flag. Nothing resets it short of a reload.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct ContactDraft {
    pub name: String,
    pub email: String,
    pub message: String,
    pub submitted: bool,
}

impl ContactDraft {
    pub fn mail_body(&self) -> String {
        format!("{}\n\n— {} ({})", self.message, self.name, self.email)
    }

    /// Builds the inquiry link for the brand inbox and flips to submitted.
    /// Success is assumed as soon as the link exists.
    pub fn submit(&mut self) -> String {
        let href = mailto_href(BRAND.email, &inquiry_subject(), Some(&self.mail_body()));
        self.submitted = true;
        href
    }
}

pub fn inquiry_subject() -> String {
    format!("Creator Inquiry — {}", BRAND.name)
}

pub fn partnership_subject() -> String {
    format!("Creator Partnership Inquiry — {}", BRAND.name)
}

pub fn mailto_href(recipient: &str, subject: &str, body: Option<&str>) -> String {
    let mut href = format!("mailto:{recipient}?subject={}", urlencoding::encode(subject));
    if let Some(body) = body {
        href.push_str("&body=");
        href.push_str(&urlencoding::encode(body));
    }
    href
}

/// "Email Me" link in the sponsor pitch: subject only, the visitor writes the rest.
pub fn partnership_href() -> String {
    mailto_href(BRAND.email, &partnership_subject(), None)
}

fn open_mail_client(href: &str) -> Result<(), String> {
    let win = web_sys::window().ok_or("No window available")?;
    win.location()
        .set_href(href)
        .map_err(|e| format!("Could not open mail client: {e:?}"))
}

#[derive(Properties, PartialEq)]
pub struct ContactFormProps {
    #[prop_or_default]
    pub initial: ContactDraft,
}

#[function_component(ContactForm)]
pub fn contact_form(props: &ContactFormProps) -> Html {
    let draft = {
        let initial = props.initial.clone();
        use_state(move || initial)
    };

    let on_name = {
        let draft = draft.clone();
        Callback::from(move |e: InputEvent| {
            let name = e.target_unchecked_into::<HtmlInputElement>().value();
            draft.set(ContactDraft { name, ..(*draft).clone() });
        })
    };

    let on_email = {
        let draft = draft.clone();
        Callback::from(move |e: InputEvent| {
            let email = e.target_unchecked_into::<HtmlInputElement>().value();
            draft.set(ContactDraft { email, ..(*draft).clone() });
        })
    };

    let on_message = {
        let draft = draft.clone();
        Callback::from(move |e: InputEvent| {
            let message = e.target_unchecked_into::<HtmlTextAreaElement>().value();
            draft.set(ContactDraft { message, ..(*draft).clone() });
        })
    };

    // Only reached once the browser's own required/email checks pass.
    let on_submit = {
        let draft = draft.clone();
        Callback::from(move |e: SubmitEvent| {
            e.prevent_default();
            let mut next = (*draft).clone();
            let href = next.submit();
            log!("contact form submitted, handing off to mail client");
            if let Err(err) = open_mail_client(&href) {
                error!(err);
            }
            draft.set(next);
        })
    };

    html! {
        <form onsubmit={on_submit} class="space-y-4">
            <div class="grid grid-cols-1 gap-4 md:grid-cols-2">
                <Input
                    name="name"
                    placeholder="Your name"
                    value={draft.name.clone()}
                    oninput={on_name}
                    required=true
                />
                <Input
                    input_type="email"
                    name="email"
                    placeholder="Your email"
                    value={draft.email.clone()}
                    oninput={on_email}
                    required=true
                />
            </div>
            <Textarea
                name="message"
                placeholder="Tell me about the collab"
                value={draft.message.clone()}
                oninput={on_message}
                rows={5}
                required=true
            />
            <div class="flex items-center gap-3">
                <Button submit=true class="rounded-2xl">{ "➤ Send" }</Button>
                if draft.submitted {
                    <span class="text-sm text-green-400">{ ACK_TEXT }</span>
                }
            </div>
        </form>
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use yew::LocalServerRenderer;

    fn jane() -> ContactDraft {
        ContactDraft {
            name: "Jane".into(),
            email: "jane@example.com".into(),
            message: "Hello there".into(),
            submitted: false,
        }
    }

    fn split_mailto(href: &str) -> (&str, &str, &str) {
        let rest = href.strip_prefix("mailto:").expect("mailto scheme");
        let (recipient, query) = rest.split_once("?subject=").expect("subject");
        let (subject, body) = query.split_once("&body=").expect("body");
        (recipient, subject, body)
    }

    #[test]
    fn submit_builds_a_decodable_mailto_link() {
        let mut draft = jane();
        let href = draft.submit();

        let (recipient, subject, body) = split_mailto(&href);
        assert_eq!(recipient, "business@assyrianmotm.gg");
        assert_eq!(urlencoding::decode(subject).unwrap(), "Creator Inquiry — assyrianMOTM");
        assert_eq!(
            urlencoding::decode(body).unwrap(),
            "Hello there\n\n— Jane (jane@example.com)"
        );
        assert!(draft.submitted);
    }

    #[test]
    fn encoded_body_has_no_raw_newlines_or_spaces() {
        let mut draft = jane();
        draft.message = "Line one\nLine two & more?".into();
        let href = draft.submit();
        let (_, _, body) = split_mailto(&href);

        assert!(!body.contains('\n'));
        assert!(!body.contains(' '));
        assert!(!body.contains('&'));
        assert!(body.contains("%0A"));
        assert_eq!(
            urlencoding::decode(body).unwrap(),
            "Line one\nLine two & more?\n\n— Jane (jane@example.com)"
        );
    }

    #[test]
    fn submitted_never_returns_to_unsubmitted() {
        let mut draft = jane();
        draft.submit();
        draft.message = "second thought".into();
        draft.submit();
        assert!(draft.submitted);
    }

    #[test]
    fn partnership_link_has_subject_and_no_body() {
        let href = partnership_href();
        assert!(href.starts_with("mailto:business@assyrianmotm.gg?subject="));
        assert!(!href.contains("&body="));
        let subject = href.split_once("?subject=").unwrap().1;
        assert_eq!(
            urlencoding::decode(subject).unwrap(),
            "Creator Partnership Inquiry — assyrianMOTM"
        );
    }

    async fn render(initial: ContactDraft) -> String {
        LocalServerRenderer::<ContactForm>::with_props(ContactFormProps { initial })
            .hydratable(false)
            .render()
            .await
    }

    #[tokio::test]
    async fn acknowledgment_hidden_before_submit() {
        let html = render(ContactDraft::default()).await;
        assert!(!html.contains(ACK_TEXT));
    }

    #[tokio::test]
    async fn acknowledgment_shown_after_submit() {
        let mut draft = jane();
        draft.submit();
        let html = render(draft).await;
        assert!(html.contains(ACK_TEXT));
    }

    #[tokio::test]
    async fn every_field_is_required_and_email_is_typed() {
        let html = render(ContactDraft::default()).await;
        assert_eq!(html.matches(" required").count(), 3, "{html}");
        assert!(html.contains("type=\"email\""));
        assert!(html.contains("type=\"submit\""));
        assert!(html.contains("<textarea"));
    }
}
