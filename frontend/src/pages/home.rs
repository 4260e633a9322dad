use yew::prelude::*;
use crate::components::carousel::Carousel;
use crate::slides::load_slides;

#[function_component]
pub fn Home() -> Html {
    let slides = use_state(load_slides);

    // Scroll to top only on initial mount
    {
        use_effect_with_deps(
            move |_| {
                if let Some(window) = web_sys::window() {
                    window.scroll_to_with_x_and_y(0.0, 0.0);
                }
                || ()
            },
            (),
        );
    }

    html! {
        <div class="home-page">
            <Carousel slides={(*slides).clone()} />
            <style>
                {r#"
                .home-page {
                    display: flex;
                    flex-direction: column;
                    gap: 30px;
                    padding: 120px 0;
                }
                "#}
            </style>
        </div>
    }
}
