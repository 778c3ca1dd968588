use gloo_timers::callback::Timeout;
use thiserror::Error;
use web_sys::{HtmlInputElement, HtmlSelectElement, HtmlTextAreaElement};
use yew::prelude::*;

use crate::components::language::use_language;
use crate::i18n::Contact;

const ACK_VISIBLE_MS: u32 = 6_000;

#[derive(Clone, Debug, Default, PartialEq)]
pub struct ContactSubmission {
    pub name: String,
    pub email: String,
    pub module: String,
    pub message: String,
}

#[derive(Error, Clone, Copy, Debug, PartialEq, Eq)]
pub enum ContactError {
    #[error("name is required")]
    MissingName,
    #[error("email is required")]
    MissingEmail,
    #[error("email address is malformed")]
    InvalidEmail,
}

impl ContactError {
    pub fn message(self, copy: &Contact) -> &'static str {
        match self {
            ContactError::MissingName => copy.missing_name,
            ContactError::MissingEmail => copy.missing_email,
            ContactError::InvalidEmail => copy.invalid_email,
        }
    }
}

fn looks_like_email(email: &str) -> bool {
    match email.split_once('@') {
        Some((local, domain)) => {
            !local.is_empty()
                && !domain.contains('@')
                && !email.chars().any(char::is_whitespace)
                && domain
                    .split_once('.')
                    .map_or(false, |(host, tld)| !host.is_empty() && !tld.is_empty())
        }
        None => false,
    }
}

impl ContactSubmission {
    /// Trimmed copy of the submission, or the first problem found.
    pub fn validate(&self) -> Result<ContactSubmission, ContactError> {
        let name = self.name.trim();
        let email = self.email.trim();
        if name.is_empty() {
            return Err(ContactError::MissingName);
        }
        if email.is_empty() {
            return Err(ContactError::MissingEmail);
        }
        if !looks_like_email(email) {
            return Err(ContactError::InvalidEmail);
        }
        Ok(ContactSubmission {
            name: name.to_string(),
            email: email.to_string(),
            module: self.module.trim().to_string(),
            message: self.message.trim().to_string(),
        })
    }
}

#[derive(Clone, PartialEq)]
enum Notice {
    Thanks,
    Invalid(ContactError),
}

#[function_component(ContactForm)]
pub fn contact_form() -> Html {
    let language = use_language();
    let copy = &language.content().contact;
    let form = use_state(ContactSubmission::default);
    let notice = use_state(|| None::<Notice>);
    let dismiss = use_mut_ref(|| None::<Timeout>);

    let onsubmit = {
        let form = form.clone();
        let notice = notice.clone();
        let dismiss = dismiss.clone();
        Callback::from(move |e: SubmitEvent| {
            e.prevent_default();
            match form.validate() {
                Ok(submission) => {
                    // Nothing leaves the browser; the form only acknowledges locally.
                    log::info!("Demo requested for module {:?}", submission.module);
                    form.set(ContactSubmission::default());
                    notice.set(Some(Notice::Thanks));
                    let notice = notice.clone();
                    *dismiss.borrow_mut() = Some(Timeout::new(ACK_VISIBLE_MS, move || notice.set(None)));
                }
                Err(error) => {
                    log::debug!("Contact form rejected: {}", error);
                    dismiss.borrow_mut().take();
                    notice.set(Some(Notice::Invalid(error)));
                }
            }
        })
    };

    let update = |apply: fn(&mut ContactSubmission, String)| {
        let form = form.clone();
        move |value: String| {
            let mut next = (*form).clone();
            apply(&mut next, value);
            form.set(next);
        }
    };
    let on_name = {
        let update = update(|f, v| f.name = v);
        Callback::from(move |e: InputEvent| update(e.target_unchecked_into::<HtmlInputElement>().value()))
    };
    let on_email = {
        let update = update(|f, v| f.email = v);
        Callback::from(move |e: InputEvent| update(e.target_unchecked_into::<HtmlInputElement>().value()))
    };
    let on_module = {
        let update = update(|f, v| f.module = v);
        Callback::from(move |e: Event| update(e.target_unchecked_into::<HtmlSelectElement>().value()))
    };
    let on_message = {
        let update = update(|f, v| f.message = v);
        Callback::from(move |e: InputEvent| update(e.target_unchecked_into::<HtmlTextAreaElement>().value()))
    };

    html! {
        <form class="contact-form" {onsubmit} novalidate=true>
            <div class="contact-row">
                <input type="text" placeholder={copy.name} value={form.name.clone()} oninput={on_name} required=true />
                <input type="email" placeholder={copy.email} value={form.email.clone()} oninput={on_email} required=true />
            </div>
            <select onchange={on_module}>
                <option value="" selected={form.module.is_empty()}>{copy.module}</option>
                { for copy.options.iter().map(|option| {
                    let value = option.to_lowercase();
                    html! {
                        <option value={value.clone()} selected={form.module == value}>{*option}</option>
                    }
                }) }
            </select>
            <textarea rows="4" placeholder={copy.message} value={form.message.clone()} oninput={on_message}></textarea>
            <button type="submit" class="contact-submit">{copy.submit}</button>
            {
                match &*notice {
                    Some(Notice::Thanks) => html! { <p class="contact-notice ok" role="status">{copy.thanks}</p> },
                    Some(Notice::Invalid(error)) => html! { <p class="contact-notice error" role="alert">{error.message(copy)}</p> },
                    None => html! {},
                }
            }
            <style>{r#"
                .contact-form {
                    display: flex;
                    flex-direction: column;
                    gap: 1.5rem;
                    background: rgba(255, 255, 255, 0.1);
                    backdrop-filter: blur(4px);
                    border-radius: 1rem;
                    padding: 2rem;
                    margin-bottom: 2rem;
                }
                .contact-row {
                    display: grid;
                    grid-template-columns: 1fr 1fr;
                    gap: 1.5rem;
                }
                .contact-form input,
                .contact-form select,
                .contact-form textarea {
                    width: 100%;
                    box-sizing: border-box;
                    padding: 0.75rem 1rem;
                    border-radius: 0.5rem;
                    background: rgba(255, 255, 255, 0.2);
                    border: 1px solid rgba(255, 255, 255, 0.3);
                    color: #fff;
                    font: inherit;
                }
                .contact-form select option {
                    color: #111827;
                }
                .contact-form textarea {
                    resize: none;
                }
                .contact-form ::placeholder {
                    color: rgba(255, 255, 255, 0.7);
                }
                .contact-submit {
                    border: none;
                    border-radius: 0.5rem;
                    padding: 1rem;
                    font-size: 1.125rem;
                    font-weight: 600;
                    color: #fff;
                    background: linear-gradient(90deg, #2563eb, #9333ea);
                    cursor: pointer;
                }
                .contact-notice {
                    margin: 0;
                    padding: 0.75rem 1rem;
                    border-radius: 0.5rem;
                }
                .contact-notice.ok {
                    background: rgba(16, 185, 129, 0.2);
                    color: #a7f3d0;
                }
                .contact-notice.error {
                    background: rgba(239, 68, 68, 0.2);
                    color: #fecaca;
                }
                @media (max-width: 768px) {
                    .contact-row {
                        grid-template-columns: 1fr;
                    }
                }
            "#}</style>
        </form>
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::i18n::Language;

    fn submission(name: &str, email: &str) -> ContactSubmission {
        ContactSubmission {
            name: name.into(),
            email: email.into(),
            ..Default::default()
        }
    }

    #[test]
    fn valid_submission_is_trimmed() {
        let ok = submission("  Ana  ", " ana@example.com ").validate().unwrap();
        assert_eq!(ok.name, "Ana");
        assert_eq!(ok.email, "ana@example.com");
    }

    #[test]
    fn required_fields_are_checked_in_order() {
        assert_eq!(submission("   ", "").validate(), Err(ContactError::MissingName));
        assert_eq!(submission("Ana", "  ").validate(), Err(ContactError::MissingEmail));
    }

    #[test]
    fn malformed_emails_are_rejected() {
        for email in ["ana", "ana@", "@example.com", "ana@example", "ana@.com", "a b@example.com", "a@b@c.com"] {
            assert_eq!(submission("Ana", email).validate(), Err(ContactError::InvalidEmail), "{}", email);
        }
    }

    #[test]
    fn errors_are_localized() {
        let es = &Language::Es.content().contact;
        let en = &Language::En.content().contact;
        assert_ne!(ContactError::InvalidEmail.message(es), ContactError::InvalidEmail.message(en));
        assert_eq!(ContactError::MissingName.to_string(), "name is required");
    }
}
