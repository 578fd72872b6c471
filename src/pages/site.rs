use std::rc::Rc;

use gloo_timers::callback::Timeout;
use log::info;
use yew::prelude::*;

use crate::config;

pub enum FrameAction {
    Loaded,
    TimedOut,
}

/// Load tracking for the embedded site. Once the frame has loaded the
/// fallback link can never come back.
#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub struct FrameState {
    pub loaded: bool,
    pub fallback_visible: bool,
}

impl Reducible for FrameState {
    type Action = FrameAction;

    fn reduce(self: Rc<Self>, action: Self::Action) -> Rc<Self> {
        match action {
            FrameAction::Loaded => Rc::new(FrameState {
                loaded: true,
                fallback_visible: false,
            }),
            FrameAction::TimedOut if !self.loaded => {
                info!("Embedded site did not load in time, showing direct link");
                Rc::new(FrameState {
                    loaded: false,
                    fallback_visible: true,
                })
            }
            FrameAction::TimedOut => self,
        }
    }
}

#[function_component(Site)]
pub fn site() -> Html {
    let frame = use_reducer(FrameState::default);
    let url = config::site_url();

    {
        let dispatcher = frame.dispatcher();
        use_effect_with_deps(
            move |_| {
                let timeout = Timeout::new(config::FRAME_FALLBACK_DELAY_MS, move || {
                    dispatcher.dispatch(FrameAction::TimedOut);
                });
                // Dropping the handle cancels the timer if the page goes away first.
                move || drop(timeout)
            },
            (),
        );
    }

    let onload = {
        let dispatcher = frame.dispatcher();
        Callback::from(move |_: Event| dispatcher.dispatch(FrameAction::Loaded))
    };

    html! {
        <div class="site-page">
            if frame.fallback_visible {
                <div class="site-fallback">
                    <p>{"O conteúdo está demorando para carregar."}</p>
                    <a href={url} target="_blank" rel="noopener noreferrer">
                        {"Abrir o site em uma nova aba"}
                    </a>
                </div>
            }
            <iframe
                class={classes!("site-frame", (!frame.loaded).then(|| "loading"))}
                src={url}
                title="Sobre nós"
                {onload}
            />
            <style>
                {r#"
                .site-page {
                    padding-top: 74px;
                    height: 100vh;
                    display: flex;
                    flex-direction: column;
                    background: #1a1a1a;
                }

                .site-frame {
                    flex: 1;
                    width: 100%;
                    border: none;
                }

                .site-frame.loading {
                    background: #2d2d2d;
                }

                .site-fallback {
                    padding: 1rem 2rem;
                    text-align: center;
                    color: #ccc;
                    border-bottom: 1px solid rgba(30, 144, 255, 0.2);
                }

                .site-fallback a {
                    color: #7EB2FF;
                }
                "#}
            </style>
        </div>
    }
}
