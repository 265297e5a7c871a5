use yew::prelude::*;
use web_sys::MouseEvent;

use crate::content::{DetailId, ProjectId};
use crate::state::Selection;

#[derive(Properties, PartialEq)]
pub struct DetailViewProps {
    pub selection: Selection,
    pub on_back: Callback<()>,
}

/// Exclusive view for one selected project or record.
#[function_component(DetailView)]
pub fn detail_view(props: &DetailViewProps) -> Html {
    let on_back = {
        let on_back = props.on_back.clone();
        Callback::from(move |e: MouseEvent| {
            e.prevent_default();
            on_back.emit(());
        })
    };

    let body = match props.selection {
        Selection::Project(id) => project_body(id),
        Selection::Detail(id) => record_body(id),
        Selection::None => html! {},
    };

    html! {
        <div class="page detail-page">
            <div class="detail-panel">
                <button class="back-button" onclick={on_back}>{"← Back"}</button>
                {body}
            </div>

            <style>
                {r#"
                .detail-page {
                    padding: 1.5rem;
                }

                .detail-panel {
                    max-width: 56rem;
                    margin: 5rem auto 0;
                    animation: detailFade 0.5s ease forwards;
                }

                @keyframes detailFade {
                    from { opacity: 0; }
                    to { opacity: 1; }
                }

                .back-button {
                    margin-bottom: 1.5rem;
                    padding: 0.5rem 1rem;
                    background: #374151;
                    color: #ffffff;
                    border: none;
                    border-radius: 0.25rem;
                    cursor: pointer;
                }

                .back-button:hover {
                    background: #4b5563;
                }

                .detail-panel h2 {
                    font-size: 1.875rem;
                    font-weight: 700;
                    margin-bottom: 1rem;
                }

                .detail-panel p,
                .detail-panel ul {
                    color: #cbd5e1;
                    margin-bottom: 0.75rem;
                }

                .detail-panel ul {
                    list-style: disc;
                    margin-left: 1.25rem;
                }
                "#}
            </style>
        </div>
    }
}

fn project_body(id: ProjectId) -> Html {
    let project = id.project();
    html! {
        <div class={classes!("project-detail", id.slug())}>
            <h2>{project.title}</h2>
            <p>{project.summary}</p>
            <ul>
                { for project.highlights.iter().map(|h| html! { <li>{*h}</li> }) }
            </ul>
            <a href={project.demo_href} target="_blank" rel="noopener noreferrer" class="primary-button">
                {"View Demo"}
            </a>
        </div>
    }
}

fn record_body(id: DetailId) -> Html {
    let record = id.record();
    html! {
        <div class="record-detail">
            <h2>{record.title}</h2>
            <p>{record.description}</p>
            {
                if let Some(score) = id.score() {
                    html! { <p class="record-score">{score}</p> }
                } else {
                    html! {}
                }
            }
            {
                if let Some(link) = record.cert_link {
                    html! {
                        <a href={link} target="_blank" rel="noopener noreferrer" class="primary-button">
                            {"View Certificate"}
                        </a>
                    }
                } else {
                    html! {}
                }
            }
        </div>
    }
}
