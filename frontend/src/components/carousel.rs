use yew::prelude::*;
use log::info;
use web_sys::{window, MouseEvent};
use wasm_bindgen::closure::Closure;
use wasm_bindgen::JsCast;
use gloo_timers::callback::Interval;
use crate::config;
use crate::slides::Slide;
use crate::components::carousel_state::{CarouselAction, CarouselState};
use crate::components::slide_popup::SlidePopup;

/// Horizontal offset of the track, in percent of its width, per slide step.
const STEP_PERCENT: f64 = 100.0 / 1.5;

/// Flex basis of a slide for the given viewport width.
pub fn slide_basis(viewport_width: f64) -> &'static str {
    if viewport_width < config::MOBILE_BREAKPOINT {
        "calc(100% / 0.8)"
    } else if viewport_width < config::TABLET_BREAKPOINT {
        "calc(100% / 1.2)"
    } else {
        "calc(100% / 1.5)"
    }
}

fn current_slide_basis() -> &'static str {
    let width = window()
        .and_then(|w| w.inner_width().ok())
        .and_then(|w| w.as_f64())
        .unwrap_or(f64::INFINITY);
    slide_basis(width)
}

pub fn track_style(state: &CarouselState) -> String {
    format!(
        "transition: {}; transform: translateX(-{}%);",
        if state.transitioning() { "transform 0.5s ease" } else { "none" },
        state.index() as f64 * STEP_PERCENT,
    )
}

/// Slides on the track: the deck, plus a copy of the first slide while
/// autoplay is running.
pub fn displayed_slides<'a>(slides: &'a [Slide], state: &CarouselState) -> Vec<&'a Slide> {
    let mut shown: Vec<&Slide> = slides.iter().collect();
    if state.displayed_len() > slides.len() {
        shown.extend(slides.first());
    }
    shown
}

fn play_icon() -> Html {
    html! {
        <svg width="11" height="11" viewBox="0 0 24 24" fill="var(--black-100)">
            <path d="M7 4v16l13-8z" />
        </svg>
    }
}

fn pause_icon() -> Html {
    html! {
        <svg width="11" height="11" viewBox="0 0 24 24" fill="var(--black-100)">
            <path d="M6 4h4v16H6zM14 4h4v16h-4z" />
        </svg>
    }
}

#[derive(Properties, PartialEq)]
pub struct CarouselProps {
    pub slides: Vec<Slide>,
}

#[function_component(Carousel)]
pub fn carousel(props: &CarouselProps) -> Html {
    let slides = &props.slides;
    let len = slides.len();
    let carousel = use_reducer(move || CarouselState::new(len));
    let selected = use_state(|| None::<Slide>);
    let basis = use_state(current_slide_basis);

    // Autoplay timer. Dropping the interval cancels it, so pausing and
    // resuming starts a fresh full interval.
    {
        let dispatcher = carousel.dispatcher();
        use_effect_with_deps(
            move |&(autoplay, paused): &(bool, bool)| {
                let interval = (autoplay && !paused).then(|| {
                    Interval::new(config::SLIDE_INTERVAL_MS, move || {
                        dispatcher.dispatch(CarouselAction::Advance);
                    })
                });
                move || drop(interval)
            },
            (carousel.autoplay(), carousel.paused()),
        );
    }

    {
        let basis = basis.clone();
        use_effect_with_deps(
            move |_| {
                let resize_callback = Closure::wrap(Box::new(move || {
                    basis.set(current_slide_basis());
                }) as Box<dyn FnMut()>);

                let window = window();
                if let Some(window) = &window {
                    let _ = window.add_event_listener_with_callback(
                        "resize",
                        resize_callback.as_ref().unchecked_ref(),
                    );
                }

                move || {
                    if let Some(window) = window {
                        let _ = window.remove_event_listener_with_callback(
                            "resize",
                            resize_callback.as_ref().unchecked_ref(),
                        );
                    }
                }
            },
            (),
        );
    }

    let dispatch = |action: fn() -> CarouselAction| {
        let carousel = carousel.clone();
        Callback::from(move |_: MouseEvent| carousel.dispatch(action()))
    };

    let on_prev = dispatch(|| CarouselAction::Prev);
    let on_next = dispatch(|| CarouselAction::Next);
    let on_mouse_enter = dispatch(|| CarouselAction::PointerEnter);
    let on_mouse_leave = dispatch(|| CarouselAction::PointerLeave);

    let on_toggle = {
        let carousel = carousel.clone();
        Callback::from(move |_: MouseEvent| {
            info!("Carousel autoplay {}", if carousel.autoplay() { "stopped" } else { "started" });
            carousel.dispatch(CarouselAction::ToggleAutoplay);
        })
    };

    let on_transition_end = {
        let carousel = carousel.clone();
        Callback::from(move |_: TransitionEvent| {
            carousel.dispatch(CarouselAction::TransitionFinished);
        })
    };

    let on_close_popup = {
        let selected = selected.clone();
        Callback::from(move |_: ()| selected.set(None))
    };

    let slide_style = format!("flex: 0 0 {};", *basis);

    html! {
        <div
            class="feature-carousel"
            onmouseenter={on_mouse_enter}
            onmouseleave={on_mouse_leave}
        >
            <div
                class="carousel-track"
                style={track_style(&carousel)}
                ontransitionend={on_transition_end}
            >
                {
                    displayed_slides(slides, &carousel).into_iter().enumerate().map(|(i, slide)| {
                        let onclick = {
                            let selected = selected.clone();
                            let slide = slide.clone();
                            Callback::from(move |_: MouseEvent| {
                                info!("Opening slide detail: {}", slide.bottom_left.title);
                                selected.set(Some(slide.clone()));
                            })
                        };
                        html! {
                            <div key={i} class="carousel-slide" style={slide_style.clone()} {onclick}>
                                <img
                                    src={config::asset_url(&slide.src)}
                                    alt={format!("Slide {}", i + 1)}
                                    class="carousel-image"
                                />
                                <div class="carousel-slide-top">
                                    <span>{&slide.top}</span>
                                </div>
                                <div class="carousel-slide-bottom">
                                    <div class="carousel-caption">
                                        <span class="carousel-title">{&slide.bottom_left.title}</span>
                                        <span class="carousel-subtitle">{&slide.bottom_left.subtitle}</span>
                                    </div>
                                    <span class="carousel-cta">{&slide.bottom_right}</span>
                                </div>
                            </div>
                        }
                    }).collect::<Html>()
                }
            </div>

            {
                if let Some(slide) = (*selected).clone() {
                    html! { <SlidePopup slide={slide} on_close={on_close_popup} /> }
                } else {
                    html! {}
                }
            }

            <div class="carousel-controls">
                <div class="carousel-spacer"></div>
                <div class="carousel-dots">
                    {
                        (0..slides.len()).map(|i| {
                            let onclick = {
                                let carousel = carousel.clone();
                                Callback::from(move |_: MouseEvent| carousel.dispatch(CarouselAction::GoTo(i)))
                            };
                            html! {
                                <div
                                    key={i}
                                    role="button"
                                    tabindex="0"
                                    class={classes!("carousel-dot", carousel.is_active_dot(i).then(|| "active"))}
                                    {onclick}
                                />
                            }
                        }).collect::<Html>()
                    }
                </div>
                <div class="carousel-buttons">
                    <button
                        class={classes!("carousel-button", carousel.is_first().then(|| "disabled"))}
                        onclick={on_prev}
                    >
                        {"‹"}
                    </button>
                    <button
                        class={classes!("carousel-button", carousel.is_last().then(|| "disabled"))}
                        onclick={on_next}
                    >
                        {"›"}
                    </button>
                    <button class="carousel-button" onclick={on_toggle}>
                        { if carousel.autoplay() { pause_icon() } else { play_icon() } }
                    </button>
                </div>
            </div>
            <style>
                {r#"
                .feature-carousel {
                    max-width: 100%;
                    margin: 0 auto;
                    margin-left: 30px;
                    overflow: hidden;
                }
                .carousel-track {
                    display: flex;
                    gap: 30px;
                }
                .carousel-slide {
                    border-radius: 12px;
                    background: var(--white-200);
                    padding: 9px;
                    position: relative;
                    overflow: hidden;
                    cursor: pointer;
                }
                .carousel-image {
                    width: 100%;
                    height: clamp(280px, 100vh, 450px);
                    object-fit: cover;
                    border-radius: 8px;
                    display: block;
                }
                .carousel-slide-top {
                    position: absolute;
                    top: 10px;
                    left: 10px;
                    right: 0;
                    padding: 10px;
                    color: var(--white-100);
                    font-size: 12px;
                    font-weight: 600;
                }
                .carousel-slide-bottom {
                    position: absolute;
                    bottom: 20px;
                    left: 10px;
                    right: 10px;
                    padding: 0 16px;
                    display: flex;
                    justify-content: space-between;
                    align-items: flex-end;
                }
                .carousel-caption {
                    display: flex;
                    flex-direction: column;
                    gap: 4px;
                    max-width: 60%;
                    color: var(--white-100);
                }
                .carousel-title {
                    font-size: 30px;
                    font-weight: 600;
                }
                .carousel-subtitle {
                    font-size: 12px;
                    font-weight: 550;
                }
                .carousel-cta {
                    background: var(--white-100);
                    padding: 2px 6px;
                    border-radius: 8px;
                    font-size: 9.5px;
                    font-weight: 500;
                }
                .carousel-controls {
                    display: flex;
                    justify-content: space-between;
                    align-items: center;
                    margin-top: 10px;
                    width: 100%;
                }
                .carousel-spacer {
                    width: 24px;
                }
                .carousel-dots {
                    display: flex;
                    gap: 6px;
                }
                .carousel-dot {
                    width: 6px;
                    height: 6px;
                    border-radius: 50%;
                    background: var(--white-300);
                    transition: all 220ms ease;
                    cursor: pointer;
                }
                .carousel-dot.active {
                    background: var(--black-100);
                }
                .carousel-buttons {
                    display: flex;
                    gap: 6px;
                    margin-right: 10px;
                }
                .carousel-button {
                    width: 20px;
                    height: 20px;
                    border: none;
                    border-radius: 6px;
                    background: var(--white-200);
                    color: var(--black-100);
                    display: flex;
                    align-items: center;
                    justify-content: center;
                    cursor: pointer;
                }
                .carousel-button.disabled {
                    opacity: 0.5;
                    pointer-events: none;
                }
                "#}
            </style>
        </div>
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::slides::SlideCaption;

    fn deck(len: usize) -> Vec<Slide> {
        (0..len)
            .map(|i| Slide {
                src: format!("image{}.png", i + 1),
                top: "NEW IMAGE MODEL".to_string(),
                bottom_left: SlideCaption {
                    title: format!("Slide {}", i + 1),
                    subtitle: String::new(),
                },
                bottom_right: "Try Now".to_string(),
            })
            .collect()
    }

    #[test]
    fn basis_follows_breakpoints() {
        assert_eq!(slide_basis(375.0), "calc(100% / 0.8)");
        assert_eq!(slide_basis(767.9), "calc(100% / 0.8)");
        assert_eq!(slide_basis(768.0), "calc(100% / 1.2)");
        assert_eq!(slide_basis(1199.0), "calc(100% / 1.2)");
        assert_eq!(slide_basis(1200.0), "calc(100% / 1.5)");
        assert_eq!(slide_basis(f64::INFINITY), "calc(100% / 1.5)");
    }

    #[test]
    fn track_animates_unless_snapping() {
        let mut state = CarouselState::new(3);
        assert!(track_style(&state).contains("transform 0.5s ease"));
        assert!(track_style(&state).contains("translateX(-0%)"));

        state.go_to(2);
        let style = track_style(&state);
        assert!(style.starts_with("transition: none;"));
        assert!(style.contains(&format!("translateX(-{}%)", 2.0 * STEP_PERCENT)));
    }

    #[test]
    fn clone_is_appended_only_during_autoplay() {
        let slides = deck(3);
        let mut state = CarouselState::new(slides.len());
        assert_eq!(displayed_slides(&slides, &state).len(), 3);

        state.toggle_autoplay();
        let shown = displayed_slides(&slides, &state);
        assert_eq!(shown.len(), 4);
        assert_eq!(shown[3], &slides[0]);
    }

    #[test]
    fn empty_deck_displays_nothing() {
        let slides = deck(0);
        let state = CarouselState::new(0);
        assert!(displayed_slides(&slides, &state).is_empty());
    }
}
