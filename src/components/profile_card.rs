use yew::prelude::*;
use web_sys::{Element, MouseEvent};

use crate::tilt::Tilt;

#[derive(Properties, PartialEq)]
pub struct ProfileCardProps {
    pub image: &'static str,
}

/// Profile picture that tilts towards the pointer.
#[function_component(ProfileCard)]
pub fn profile_card(props: &ProfileCardProps) -> Html {
    let tilt = use_state(Tilt::default);
    let container = use_node_ref();

    let on_mouse_move = {
        let tilt = tilt.clone();
        let container = container.clone();
        Callback::from(move |e: MouseEvent| {
            // Measured through the node ref, yew delegates events to the body
            // so current_target is not the container.
            if let Some(el) = container.cast::<Element>() {
                let rect = el.get_bounding_client_rect();
                tilt.set(Tilt::from_pointer(
                    e.client_x() as f64,
                    e.client_y() as f64,
                    rect.left(),
                    rect.top(),
                    rect.width(),
                    rect.height(),
                ));
            }
        })
    };

    let on_mouse_leave = {
        let tilt = tilt.clone();
        Callback::from(move |_: MouseEvent| tilt.set(Tilt::NEUTRAL))
    };

    html! {
        <div
            ref={container}
            class="profile-card"
            style={tilt.style()}
            onmousemove={on_mouse_move}
            onmouseleave={on_mouse_leave}
        >
            <img src={props.image} alt="Profile" class="profile-image" />

            <style>
                {r#"
                .profile-card {
                    width: 11rem;
                    height: 11rem;
                    border-radius: 9999px;
                    margin-bottom: 1rem;
                    border: 4px solid #6366f1;
                    box-shadow: 0 25px 50px -12px rgba(0, 0, 0, 0.5);
                    cursor: pointer;
                    transition: transform 0.15s ease-out;
                    will-change: transform;
                }

                .profile-image {
                    width: 100%;
                    height: 100%;
                    border-radius: 9999px;
                    object-fit: cover;
                    animation: profileIn 1s ease forwards;
                }

                @keyframes profileIn {
                    from { transform: scale(0.8); opacity: 0; }
                    to { transform: scale(1); opacity: 1; }
                }
                "#}
            </style>
        </div>
    }
}
