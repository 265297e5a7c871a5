use yew::prelude::*;
use web_sys::MouseEvent;

use crate::content::Section;

#[derive(Properties, PartialEq)]
pub struct NavProps {
    pub brand: &'static str,
    pub sections: &'static [Section],
    pub menu_open: bool,
    pub on_navigate: Callback<&'static str>,
    pub on_toggle_menu: Callback<()>,
}

#[function_component(Nav)]
pub fn nav(props: &NavProps) -> Html {
    let toggle_menu = {
        let on_toggle_menu = props.on_toggle_menu.clone();
        Callback::from(move |e: MouseEvent| {
            e.prevent_default();
            on_toggle_menu.emit(());
        })
    };

    let menu_class = if props.menu_open {
        "nav-links mobile-menu-open"
    } else {
        "nav-links"
    };

    html! {
        <nav class="top-nav">
            <div class="nav-content">
                <h1 class="nav-logo">{props.brand}</h1>

                <button class="burger-menu" onclick={toggle_menu} aria-label="Toggle navigation">
                    <span></span>
                    <span></span>
                    <span></span>
                </button>
                <ul class={menu_class}>
                    { for props.sections.iter().map(|section| {
                        let id = section.id;
                        let on_navigate = props.on_navigate.clone();
                        let onclick = Callback::from(move |e: MouseEvent| {
                            e.prevent_default();
                            on_navigate.emit(id);
                        });
                        html! {
                            <li key={id} class="nav-link" {onclick}>
                                {section.label}
                            </li>
                        }
                    }) }
                </ul>
            </div>

            <style>
                {r#"
                .top-nav {
                    position: fixed;
                    top: 0;
                    left: 0;
                    width: 100%;
                    z-index: 50;
                    background: rgba(0, 0, 0, 0.2);
                    backdrop-filter: blur(16px);
                    box-shadow: 0 10px 25px rgba(0, 0, 0, 0.3);
                    animation: navDrop 0.8s ease forwards;
                }

                @keyframes navDrop {
                    from { transform: translateY(-60px); opacity: 0; }
                    to { transform: translateY(0); opacity: 1; }
                }

                .nav-content {
                    display: flex;
                    justify-content: space-between;
                    align-items: center;
                    padding: 1rem;
                }

                .nav-logo {
                    font-size: 1.25rem;
                    font-weight: 700;
                    letter-spacing: 0.025em;
                    transition: transform 0.2s ease;
                }

                .nav-logo:hover {
                    transform: scale(1.05);
                }

                .nav-links {
                    display: flex;
                    gap: 1.5rem;
                    font-size: 0.875rem;
                    list-style: none;
                    margin: 0;
                    padding: 0;
                }

                .nav-link {
                    cursor: pointer;
                    transition: transform 0.2s ease, color 0.2s ease;
                }

                .nav-link:hover {
                    color: #818cf8;
                    transform: scale(1.1);
                }

                .burger-menu {
                    display: none;
                    flex-direction: column;
                    gap: 4px;
                    background: none;
                    border: none;
                    cursor: pointer;
                    padding: 0.25rem;
                }

                .burger-menu span {
                    width: 22px;
                    height: 2px;
                    background: #ffffff;
                }

                @media (max-width: 768px) {
                    .burger-menu {
                        display: flex;
                    }

                    .nav-links {
                        display: none;
                        position: absolute;
                        top: 100%;
                        left: 0;
                        width: 100%;
                        flex-direction: column;
                        align-items: center;
                        padding: 1rem 0;
                        background: rgba(15, 23, 42, 0.95);
                    }

                    .nav-links.mobile-menu-open {
                        display: flex;
                    }
                }
                "#}
            </style>
        </nav>
    }
}
