use yew::prelude::*;

use crate::config::ContactConfig;

#[derive(Properties, PartialEq)]
pub struct ContactFormProps {
    pub config: ContactConfig,
}

/// Plain form post to the hosted handler. The browser owns validation and
/// whatever page the handler answers with.
#[function_component(ContactForm)]
pub fn contact_form(props: &ContactFormProps) -> Html {
    html! {
        <section id="contact" class="section">
            <h2 class="section-title">{"Contact"}</h2>
            <form class="contact-form" action={props.config.endpoint} method="POST">
                <input type="text" name="name" placeholder="Your Name" required=true />
                <input type="email" name="email" placeholder="Your Email" required=true />
                <textarea name="message" rows="5" placeholder="Your Message" required=true></textarea>
                <button type="submit" class="primary-button">{"Send Message"}</button>
            </form>

            <style>
                {r#"
                .contact-form {
                    max-width: 36rem;
                    margin: 0 auto;
                    display: flex;
                    flex-direction: column;
                    gap: 1rem;
                }

                .contact-form input,
                .contact-form textarea {
                    padding: 0.75rem;
                    border-radius: 0.5rem;
                    border: 1px solid rgba(255, 255, 255, 0.1);
                    background: rgba(255, 255, 255, 0.05);
                    color: #ffffff;
                    font: inherit;
                }

                .contact-form input:focus,
                .contact-form textarea:focus {
                    outline: none;
                    border-color: #6366f1;
                }
                "#}
            </style>
        </section>
    }
}
