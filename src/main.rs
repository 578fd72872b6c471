use yew::prelude::*;
use yew_router::prelude::*;
use log::{info, Level};
use web_sys::MouseEvent;

mod api;
mod ask;
mod config;
mod components {
    pub mod ask_box;
}
mod pages {
    pub mod faq;
    pub mod home;
    pub mod site;
}

use pages::{
    faq::Faq,
    home::Home,
    site::Site,
};

#[derive(Clone, Routable, PartialEq)]
pub enum Route {
    #[at("/")]
    Home,
    #[at("/faq")]
    Faq,
    #[at("/sobre")]
    Site,
    #[not_found]
    #[at("/404")]
    NotFound,
}

fn switch(routes: Route) -> Html {
    match routes {
        Route::Home => {
            info!("Rendering Home page");
            html! { <Home /> }
        },
        Route::Faq => {
            info!("Rendering FAQ page");
            html! { <Faq /> }
        },
        Route::Site => {
            info!("Rendering embedded site page");
            html! { <Site /> }
        },
        Route::NotFound => html! { <Redirect<Route> to={Route::Home} /> },
    }
}

#[function_component(Nav)]
pub fn nav() -> Html {
    let menu_open = use_state(|| false);

    let toggle_menu = {
        let menu_open = menu_open.clone();
        Callback::from(move |e: MouseEvent| {
            e.prevent_default();
            menu_open.set(!*menu_open);
        })
    };

    let close_menu = {
        let menu_open = menu_open.clone();
        Callback::from(move |_: MouseEvent| {
            menu_open.set(false);
        })
    };

    // Accounts are not available yet; the buttons are placeholders.
    let account_stub = |action: &'static str| {
        Callback::from(move |e: MouseEvent| {
            e.prevent_default();
            info!("{} clicked, accounts are not available yet", action);
        })
    };

    let menu_class = if *menu_open {
        "nav-right mobile-menu-open"
    } else {
        "nav-right"
    };

    html! {
        <nav class="top-nav">
            <div class="nav-content">
                <Link<Route> to={Route::Home} classes="nav-logo">
                    {"Assistente Jurídico"}
                </Link<Route>>

                <button class="burger-menu" onclick={toggle_menu}>
                    <span></span>
                    <span></span>
                    <span></span>
                </button>
                <div class={menu_class}>
                    <div onclick={close_menu.clone()}>
                        <Link<Route> to={Route::Faq} classes="nav-link">
                            {"FAQ"}
                        </Link<Route>>
                    </div>
                    <div onclick={close_menu.clone()}>
                        <Link<Route> to={Route::Site} classes="nav-link">
                            {"Sobre"}
                        </Link<Route>>
                    </div>
                    <button class="nav-login-button" onclick={account_stub("Login")}>
                        {"Entrar"}
                    </button>
                    <button class="nav-signup-button" onclick={account_stub("Sign up")}>
                        {"Cadastrar"}
                    </button>
                </div>
            </div>
            <style>
                {r#"
                .top-nav {
                    position: fixed;
                    top: 0;
                    width: 100%;
                    height: 74px;
                    z-index: 10;
                    background: rgba(26, 26, 26, 0.95);
                    border-bottom: 1px solid rgba(30, 144, 255, 0.1);
                }

                .nav-content {
                    max-width: 1200px;
                    height: 100%;
                    margin: 0 auto;
                    padding: 0 2rem;
                    display: flex;
                    align-items: center;
                    justify-content: space-between;
                }

                .nav-logo, .nav-link {
                    color: #fff;
                    text-decoration: none;
                }

                .nav-right {
                    display: flex;
                    align-items: center;
                    gap: 1.5rem;
                }

                .nav-login-button, .nav-signup-button {
                    padding: 0.5rem 1rem;
                    border-radius: 6px;
                    border: 1px solid #1E90FF;
                    background: none;
                    color: #fff;
                    cursor: pointer;
                }

                .nav-signup-button {
                    background: #1E90FF;
                }

                .burger-menu {
                    display: none;
                    background: none;
                    border: none;
                }

                .burger-menu span {
                    display: block;
                    width: 22px;
                    height: 2px;
                    margin: 4px 0;
                    background: #fff;
                }

                @media (max-width: 700px) {
                    .burger-menu {
                        display: block;
                    }

                    .nav-right {
                        display: none;
                    }

                    .nav-right.mobile-menu-open {
                        display: flex;
                        flex-direction: column;
                        position: absolute;
                        top: 74px;
                        left: 0;
                        right: 0;
                        padding: 1.5rem;
                        background: #1a1a1a;
                    }
                }
                "#}
            </style>
        </nav>
    }
}

#[function_component]
fn App() -> Html {
    html! {
        <BrowserRouter>
            <Nav />
            <Switch<Route> render={switch} />
        </BrowserRouter>
    }
}

fn main() {
    // Initialize console error panic hook for better error messages
    console_error_panic_hook::set_once();

    // Initialize logging
    console_log::init_with_level(Level::Info).expect("error initializing log");

    info!("Starting application, backend at {}", config::get_backend_url());
    yew::Renderer::<App>::new().render();
}
