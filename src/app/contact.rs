use leptos::prelude::*;

use crate::contact::{ContactBanner, ContactStatus};
use crate::content::{EMAIL, GITHUB_HANDLE, GITHUB_URL, LINKEDIN_URL};
use crate::timers::TimerDriver;

/// Validates a contact message and writes it to the server log.
///
/// The message is not emailed, stored, or forwarded anywhere; the log line is the
/// only record of it.
#[server]
pub async fn submit_contact(
    name: String,
    email: String,
    subject: String,
    message: String,
    bot_field: String,
) -> Result<(), ServerFnError> {
    use crate::contact::ContactMessage;

    // bots fill every field; pretend it worked
    if !bot_field.is_empty() {
        tracing::warn!("dropping contact message that filled the honeypot");
        return Ok(());
    }
    let msg = ContactMessage {
        name,
        email,
        subject,
        message,
    };
    msg.validate().map_err(|e| ServerFnError::new(e.to_string()))?;
    tracing::info!(from = %msg.email, subject = %msg.subject, "contact message received");
    Ok(())
}

#[component]
fn Banner(status: ReadSignal<ContactStatus>) -> impl IntoView {
    move || match status.get() {
        ContactStatus::Sent { .. } => Some(view! {
            <div class="mb-6 p-4 rounded-lg border border-green-500/40 bg-green-500/10 text-green-400">
                "Thanks! Your message has been sent."
            </div>
        }.into_any()),
        ContactStatus::Failed { reason, .. } => Some(view! {
            <div class="mb-6 p-4 rounded-lg border border-red-500/40 bg-red-500/10 text-red-400">
                {format!("Something went wrong: {reason}")}
            </div>
        }.into_any()),
        _ => None,
    }
}

#[component]
pub fn Contact() -> impl IntoView {
    let name = RwSignal::new(String::new());
    let email = RwSignal::new(String::new());
    let subject = RwSignal::new(String::new());
    let message = RwSignal::new(String::new());
    let bot_field = RwSignal::new(String::new());

    let (status, set_status) = signal(ContactStatus::Idle);
    let driver = TimerDriver::new(ContactBanner::default(), move |b: &ContactBanner, _| {
        set_status.set(b.status().clone());
    });
    let sync = move || {
        if let Some(s) = driver.with(|b| b.status().clone()) {
            set_status.set(s);
        }
    };

    let submit = ServerAction::<SubmitContact>::new();

    Effect::new(move |_| {
        let Some(result) = submit.value().get() else {
            return;
        };
        let ok = result.is_ok();
        driver.update(|b, now| b.finish(now, result));
        sync();
        if ok {
            for field in [name, email, subject, message] {
                field.set(String::new());
            }
        }
    });

    let on_submit = move |ev: leptos::ev::SubmitEvent| {
        ev.prevent_default();
        if !driver.update(|b, _| b.begin()).unwrap_or(false) {
            return;
        }
        sync();
        submit.dispatch(SubmitContact {
            name: name.get_untracked(),
            email: email.get_untracked(),
            subject: subject.get_untracked(),
            message: message.get_untracked(),
            bot_field: bot_field.get_untracked(),
        });
    };
    let submitting = move || status.get() == ContactStatus::Submitting;

    let input_class = "w-full px-4 py-3 rounded-lg border border-border/50 bg-background/50 focus:outline-none focus:ring-2 focus:ring-primary/50";

    view! {
        <section id="contact" class="min-h-screen py-24 px-4 sm:px-8 bg-background">
            <div class="max-w-5xl mx-auto">
                <h3 class="mb-16 text-center text-xl sm:text-2xl font-medium tracking-[10px] sm:tracking-[20px] uppercase text-muted-foreground">
                    "Contact"
                </h3>
                <div class="grid grid-cols-1 lg:grid-cols-2 gap-12">
                    <div class="space-y-6">
                        <h4 class="text-2xl font-semibold">"Let's build something together"</h4>
                        <p class="text-muted-foreground">
                            "Have a project in mind or just want to say hi? My inbox is always open."
                        </p>
                        <ul class="space-y-4">
                            <li>
                                <a href=format!("mailto:{EMAIL}") class="hover:text-primary">
                                    {EMAIL}
                                </a>
                            </li>
                            <li>
                                <a
                                    href=GITHUB_URL
                                    target="_blank"
                                    rel="noopener noreferrer"
                                    class="hover:text-primary"
                                >
                                    {GITHUB_HANDLE}
                                </a>
                            </li>
                            <li>
                                <a
                                    href=LINKEDIN_URL
                                    target="_blank"
                                    rel="noopener noreferrer"
                                    class="hover:text-primary"
                                >
                                    "LinkedIn"
                                </a>
                            </li>
                        </ul>
                    </div>
                    <form
                        on:submit=on_submit
                        class="p-8 rounded-xl border border-border/50 bg-card/80 backdrop-blur-sm space-y-4"
                    >
                        <Banner status=status />
                        <div class="grid grid-cols-1 sm:grid-cols-2 gap-4">
                            <input
                                type="text"
                                placeholder="Your name"
                                required
                                class=input_class
                                bind:value=name
                            />
                            <input
                                type="email"
                                placeholder="Your email"
                                required
                                class=input_class
                                bind:value=email
                            />
                        </div>
                        <input
                            type="text"
                            placeholder="Subject"
                            required
                            class=input_class
                            bind:value=subject
                        />
                        <textarea
                            rows="6"
                            placeholder="Your message"
                            required
                            class=input_class
                            prop:value=move || message.get()
                            on:input=move |ev| message.set(event_target_value(&ev))
                        ></textarea>
                        <input
                            type="text"
                            name="bot_field"
                            tabindex="-1"
                            autocomplete="off"
                            aria-hidden="true"
                            class="hidden"
                            bind:value=bot_field
                        />
                        <button
                            type="submit"
                            disabled=submitting
                            class="w-full py-3 rounded-lg font-semibold text-white bg-gradient-to-r from-purple-600 to-pink-600 disabled:opacity-50 transition-opacity"
                        >
                            {move || if submitting() { "Sending..." } else { "Send Message" }}
                        </button>
                    </form>
                </div>
            </div>
        </section>
    }
}

#[cfg(all(test, feature = "ssr"))]
mod tests {
    use super::*;

    async fn submit(email: &str, bot_field: &str) -> Result<(), ServerFnError> {
        submit_contact(
            "Ada".to_string(),
            email.to_string(),
            "Hello".to_string(),
            "Nice site".to_string(),
            bot_field.to_string(),
        )
        .await
    }

    #[tokio::test]
    async fn test_submit_accepts_valid_message() {
        assert!(submit("ada@example.com", "").await.is_ok());
    }

    #[tokio::test]
    async fn test_submit_rejects_invalid_email() {
        let err = submit("not-an-email", "").await.unwrap_err();
        assert!(err.to_string().contains("email address is not valid"));
    }

    #[tokio::test]
    async fn test_honeypot_is_accepted_without_validation() {
        // a bot gets the same answer as a person
        assert!(submit("not-an-email", "http://spam.example").await.is_ok());
    }
}
