use yew::prelude::*;
use web_sys::MouseEvent;
use crate::config;
use crate::slides::Slide;

#[derive(Properties, PartialEq)]
pub struct SlidePopupProps {
    pub slide: Slide,
    pub on_close: Callback<()>,
}

#[function_component(SlidePopup)]
pub fn slide_popup(props: &SlidePopupProps) -> Html {
    let SlidePopupProps { slide, on_close } = props;

    // any click that reaches the backdrop came from outside the content box
    let close = {
        let on_close = on_close.clone();
        Callback::from(move |_: MouseEvent| on_close.emit(()))
    };

    let swallow = Callback::from(|e: MouseEvent| e.stop_propagation());

    html! {
        <div class="slide-popup-backdrop" onclick={close.clone()}>
            <div class="slide-popup" onclick={swallow}>
                <img
                    src={config::asset_url(&slide.src)}
                    alt={slide.bottom_left.title.clone()}
                    class="slide-popup-image"
                />
                <div class="slide-popup-text">
                    <span class="slide-popup-title">{&slide.bottom_left.title}</span>
                    <span class="slide-popup-subtitle">{&slide.bottom_left.subtitle}</span>
                </div>
                <div class="slide-popup-actions">
                    <button class="slide-popup-button cancel" onclick={close}>
                        {"Cancel"}
                    </button>
                    <button class="slide-popup-button cta">
                        {&slide.bottom_right}
                    </button>
                </div>
            </div>
            <style>
                {r#"
                .slide-popup-backdrop {
                    position: fixed;
                    inset: 0;
                    background: rgba(0, 0, 0, 0.6);
                    display: flex;
                    justify-content: center;
                    align-items: center;
                    z-index: 999;
                }
                .slide-popup {
                    background: var(--white-200);
                    border-radius: 12px;
                    padding: 12px;
                    max-width: 600px;
                    width: 90%;
                    display: flex;
                    flex-direction: column;
                    gap: 12px;
                    position: relative;
                }
                .slide-popup-image {
                    width: 100%;
                    border-radius: 8px;
                    object-fit: cover;
                    display: block;
                }
                .slide-popup-text {
                    display: flex;
                    flex-direction: column;
                    gap: 4px;
                }
                .slide-popup-title {
                    color: var(--black-100);
                    font-size: 22px;
                    font-weight: 600;
                }
                .slide-popup-subtitle {
                    color: var(--black-300);
                    font-size: 12px;
                    font-weight: 500;
                }
                .slide-popup-actions {
                    display: flex;
                    justify-content: flex-end;
                    gap: 8px;
                }
                .slide-popup-button {
                    border: none;
                    padding: 3px 6px;
                    border-radius: 6px;
                    font-size: 9.5px;
                    font-weight: 500;
                    cursor: pointer;
                }
                .slide-popup-button.cancel {
                    background: var(--popup-100);
                    color: var(--black-100);
                }
                .slide-popup-button.cta {
                    background: var(--black-100);
                    color: var(--popup-100);
                }
                "#}
            </style>
        </div>
    }
}
