use yew::prelude::*;
use web_sys::MouseEvent;
use log::info;

use crate::components::{contact_form::ContactForm, nav::Nav, profile_card::ProfileCard};
use crate::config::SiteConfig;
use crate::content::{DetailId, ProjectId};
use crate::dom;
use crate::pages::detail::DetailView;
use crate::state::{PageAction, PageState};

#[derive(Properties, PartialEq)]
pub struct PortfolioProps {
    pub config: SiteConfig,
}

#[function_component(Portfolio)]
pub fn portfolio(props: &PortfolioProps) -> Html {
    let config = &props.config;
    let state = use_reducer(PageState::default);

    let on_back = {
        let state = state.clone();
        Callback::from(move |_: ()| state.dispatch(PageAction::Back))
    };

    if state.in_detail_view() {
        return html! {
            <>
                <DetailView selection={state.selection} on_back={on_back} />
                <PageStyle />
            </>
        };
    }

    let on_navigate = {
        let state = state.clone();
        let config = config.clone();
        Callback::from(move |id: &'static str| {
            let (_, target) = state.navigate(&config, id);
            state.dispatch(PageAction::CloseMenu);
            match target {
                Some(anchor) => {
                    dom::scroll_to_anchor(anchor);
                }
                None => info!("Ignoring navigation to unknown section {}", id),
            }
        })
    };

    let on_toggle_menu = {
        let state = state.clone();
        Callback::from(move |_: ()| state.dispatch(PageAction::ToggleMenu))
    };

    let select_project = |id: ProjectId| {
        let state = state.clone();
        Callback::from(move |_: MouseEvent| state.dispatch(PageAction::SelectProject(id)))
    };

    let select_detail = |id: DetailId| {
        let state = state.clone();
        Callback::from(move |e: MouseEvent| {
            e.prevent_default();
            state.dispatch(PageAction::SelectDetail(id));
        })
    };

    // Opens the item's detail record, or is a bare link in the classic page.
    let item_link = |id: DetailId, class: &'static str, inner: Html| -> Html {
        if config.item_details {
            html! {
                <a href="#" class={class} onclick={select_detail(id)}>{inner}</a>
            }
        } else {
            html! {
                <a href="#" class={class}>{inner}</a>
            }
        }
    };

    html! {
        <div class="page">
            <Nav
                brand={config.brand}
                sections={config.sections}
                menu_open={state.menu_open}
                on_navigate={on_navigate}
                on_toggle_menu={on_toggle_menu}
            />

            <section id="about" class="hero">
                <ProfileCard image={config.profile_image} />
                <h2 class="hero-name">{config.owner_name}</h2>
                <p class="hero-tagline">{config.tagline}</p>
                <div class="hero-links">
                    <a href={config.links.linkedin} target="_blank" rel="noopener noreferrer" class="link-button linkedin">{"LinkedIn"}</a>
                    <a href={config.links.github} target="_blank" rel="noopener noreferrer" class="link-button github">{"GitHub"}</a>
                    <a href={config.mailto_href()} class="link-button email">{"Email"}</a>
                </div>
            </section>

            <section id="projects" class="section">
                <h2 class="section-title">{"Projects"}</h2>
                <div class="card-grid">
                    { for ProjectId::ALL.iter().map(|id| html! {
                        <div key={id.slug()} class="card project-card" onclick={select_project(*id)}>
                            <h3>{id.project().title}</h3>
                            <p class="card-hint">{"Click to view full details"}</p>
                        </div>
                    }) }
                </div>
            </section>

            <section id="achievements" class="section section--tinted">
                <h2 class="section-title">{"Achievements"}</h2>
                <ul class="achievement-list">
                    { for DetailId::ACHIEVEMENTS.iter().map(|id| html! {
                        <li>{ item_link(*id, "achievement-link", html! { <>{id.record().title}</> }) }</li>
                    }) }
                </ul>
            </section>

            <section id="certifications" class="section">
                <h2 class="section-title">{"Certifications"}</h2>
                <div class="card-grid">
                    { for DetailId::CERTIFICATIONS.iter().map(|id| item_link(*id, "card cert-card", html! {
                        <>
                            <h3>{id.record().title}</h3>
                            <p class="card-hint">{"Click to view certificate"}</p>
                        </>
                    })) }
                </div>
            </section>

            <section id="qualification" class="section section--tinted">
                <h2 class="section-title">{"Qualification"}</h2>
                <div class="qualification-list">
                    { for DetailId::QUALIFICATIONS.iter().map(|id| item_link(*id, "qualification-row", html! {
                        <>
                            <span>{id.record().title}</span>
                            <span>{id.score().unwrap_or_default()}</span>
                        </>
                    })) }
                </div>
            </section>

            <section id="resume" class="section">
                <h2 class="section-title">{"Resume"}</h2>
                <div class="resume-box">
                    <p>{"Click below to view my resume:"}</p>
                    <a href={config.resume_href} target="_blank" rel="noopener noreferrer" class="primary-button">
                        {"View Resume"}
                    </a>
                </div>
            </section>

            {
                if let Some(contact) = &config.contact {
                    html! { <ContactForm config={contact.clone()} /> }
                } else {
                    html! {}
                }
            }

            <PageStyle />

            <footer class="footer">
                {format!("© {} {} | Built with Rust, Yew & WebAssembly ✨", dom::current_year(), config.brand)}
            </footer>

            <style>
                {r#"
                .hero {
                    padding-top: 8rem;
                    display: flex;
                    flex-direction: column;
                    align-items: center;
                    text-align: center;
                    padding-left: 1rem;
                    padding-right: 1rem;
                }

                .hero-name {
                    font-size: 1.5rem;
                    font-weight: 700;
                    background: linear-gradient(to right, #818cf8, #ec4899);
                    -webkit-background-clip: text;
                    -webkit-text-fill-color: transparent;
                }

                .hero-tagline {
                    max-width: 36rem;
                    margin-top: 0.75rem;
                    color: #cbd5e1;
                }

                .hero-links {
                    display: flex;
                    gap: 1rem;
                    margin-top: 1.25rem;
                }

                .link-button {
                    padding: 0.5rem 1rem;
                    border-radius: 0.5rem;
                    color: #ffffff;
                    text-decoration: none;
                }

                .link-button.linkedin { background: #4f46e5; }
                .link-button.github { background: #374151; }
                .link-button.email { background: #16a34a; }
                .link-button:hover { filter: brightness(1.15); }

                .section {
                    padding: 5rem 1.5rem;
                }

                .section--tinted {
                    background: rgba(255, 255, 255, 0.05);
                }

                .section-title {
                    font-size: 1.875rem;
                    font-weight: 700;
                    text-align: center;
                    margin-bottom: 2.5rem;
                }

                .card-grid {
                    max-width: 56rem;
                    margin: 0 auto;
                    display: grid;
                    grid-template-columns: repeat(auto-fit, minmax(18rem, 1fr));
                    gap: 1.5rem;
                }

                .card {
                    display: block;
                    cursor: pointer;
                    padding: 1.25rem;
                    border-radius: 0.5rem;
                    background: rgba(255, 255, 255, 0.05);
                    border: 1px solid rgba(255, 255, 255, 0.1);
                    color: inherit;
                    text-decoration: none;
                    text-align: center;
                    transition: transform 0.2s ease, box-shadow 0.2s ease;
                }

                .card:hover {
                    transform: scale(1.05);
                    box-shadow: 0 10px 25px rgba(99, 102, 241, 0.4);
                }

                .card-hint {
                    font-size: 0.875rem;
                    color: #cbd5e1;
                }

                .achievement-list {
                    max-width: 48rem;
                    margin: 0 auto;
                    list-style: none;
                    padding: 0;
                    display: flex;
                    flex-direction: column;
                    gap: 1rem;
                    text-align: center;
                }

                .achievement-link {
                    color: inherit;
                    text-decoration: underline;
                }

                .achievement-link:hover {
                    color: #818cf8;
                }

                .qualification-list {
                    max-width: 56rem;
                    margin: 0 auto;
                    display: flex;
                    flex-direction: column;
                    gap: 1rem;
                }

                .qualification-row {
                    display: flex;
                    justify-content: space-between;
                    padding: 1rem;
                    border-radius: 0.5rem;
                    background: rgba(255, 255, 255, 0.05);
                    border: 1px solid rgba(255, 255, 255, 0.1);
                    color: inherit;
                    text-decoration: none;
                }

                .resume-box {
                    max-width: 32rem;
                    margin: 0 auto;
                    text-align: center;
                    color: #cbd5e1;
                }

                .footer {
                    padding: 1.5rem 0;
                    text-align: center;
                    color: #94a3b8;
                    background: rgba(0, 0, 0, 0.2);
                }
                "#}
            </style>
        </div>
    }
}

/// Rules shared by the full page and the detail view.
#[function_component(PageStyle)]
fn page_style() -> Html {
    html! {
        <style>
            {r#"
            body {
                margin: 0;
                font-family: system-ui, -apple-system, sans-serif;
            }

            .page {
                min-height: 100vh;
                color: #ffffff;
                overflow-x: hidden;
                background: linear-gradient(to bottom right, #111827, #0f172a, #312e81);
            }

            .primary-button {
                display: inline-block;
                padding: 0.75rem 1.5rem;
                background: #4f46e5;
                color: #ffffff;
                border: none;
                border-radius: 0.5rem;
                text-decoration: none;
                cursor: pointer;
                transition: all 0.3s ease;
            }

            .primary-button:hover {
                background: #6366f1;
            }
            "#}
        </style>
    }
}

#[cfg(test)]
mod tests {
    use tokio::test;
    use yew::ServerRenderer;

    use super::*;

    async fn render(config: SiteConfig) -> String {
        ServerRenderer::<Portfolio>::with_props(move || PortfolioProps { config })
            .hydratable(false)
            .render()
            .await
    }

    #[test]
    async fn classic_page_renders_every_section_without_contact() {
        let config = SiteConfig::classic();
        let html = render(config.clone()).await;

        for section in config.sections {
            assert!(html.contains(&format!(r#"id="{}""#, section.id)), "{}", section.id);
        }
        assert!(!html.contains("contact-form"));
        assert!(html.contains(r#"href="/mnt/data/Resume PRC.pdf""#));
        assert!(html.contains(r#"href="mailto:prchaudhari3172@gmail.com""#));
    }

    #[test]
    async fn classic_items_are_bare_links() {
        let html = render(SiteConfig::classic()).await;
        assert!(html.contains("Full Stack Web Development - Apna College"));
        assert!(!html.contains("drive.google.com"));
        assert!(!html.contains("← Back"));
    }

    #[test]
    async fn extended_page_adds_contact_form() {
        let config = SiteConfig::extended();
        let html = render(config.clone()).await;
        let endpoint = config.contact.map(|c| c.endpoint).unwrap_or_default();

        assert!(html.contains(r#"id="contact""#));
        assert!(html.contains(&format!(r#"action="{}""#, endpoint)));
        assert!(html.contains(r#"name="message""#));
        assert!(html.contains(">Contact</li>"));
    }
}
