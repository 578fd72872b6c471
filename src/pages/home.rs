use yew::prelude::*;
use yew_router::prelude::*;

use crate::components::ask_box::AskBox;
use crate::Route;

#[function_component(Home)]
pub fn home() -> Html {
    // Scroll to top only on initial mount
    use_effect_with_deps(
        move |_| {
            if let Some(window) = web_sys::window() {
                window.scroll_to_with_x_and_y(0.0, 0.0);
            }
            || ()
        },
        (),
    );

    html! {
        <div class="landing-page">
            // Hero Section
            <section class="hero">
                <h1>{"Tire suas dúvidas jurídicas"}</h1>
                <p class="hero-subtitle">
                    {"Explique sua situação com suas palavras e receba uma orientação clara em segundos."}
                </p>
                <AskBox />
                <p class="disclaimer">
                    {"As respostas são informativas e não substituem a consulta com um advogado."}
                </p>
            </section>

            // Features Section
            <section class="features">
                <h2>{"Direito sem complicação"}</h2>

                <div class="features-grid">
                    <div class="feature-item">
                        <h3>{"Linguagem simples"}</h3>
                        <p>{"Nada de juridiquês: a resposta explica o que a lei diz sobre o seu caso."}</p>
                    </div>

                    <div class="feature-item">
                        <h3>{"Várias áreas"}</h3>
                        <p>{"Trabalho, consumo, família, moradia e outras questões do dia a dia."}</p>
                    </div>

                    <div class="feature-item">
                        <h3>{"Próximos passos"}</h3>
                        <p>{"Saiba quando procurar um advogado, o Procon ou a Defensoria Pública."}</p>
                    </div>
                </div>
            </section>

            <section class="footer-cta">
                <p>
                    {"Ficou com alguma dúvida sobre o serviço? "}
                    <Link<Route> to={Route::Faq} classes="forward-link">
                        {"Veja as perguntas frequentes"}
                    </Link<Route>>
                </p>
            </section>

            <style>
                {r#"
                .landing-page {
                    padding-top: 74px;
                    min-height: 100vh;
                    color: #fff;
                    background: #1a1a1a;
                }

                .hero {
                    text-align: center;
                    padding: 5rem 2rem 3rem;
                }

                .hero h1 {
                    font-size: 3rem;
                    margin-bottom: 1rem;
                    background: linear-gradient(45deg, #fff, #7EB2FF);
                    -webkit-background-clip: text;
                    -webkit-text-fill-color: transparent;
                }

                .hero-subtitle {
                    color: #999;
                    font-size: 1.2rem;
                    margin-bottom: 2.5rem;
                }

                .disclaimer {
                    margin-top: 1.5rem;
                    font-size: 0.85rem;
                    color: #777;
                }

                .features {
                    padding: 4rem 2rem;
                    text-align: center;
                    background: linear-gradient(to bottom, #2d2d2d, #1a1a1a);
                }

                .features-grid {
                    display: grid;
                    grid-template-columns: repeat(auto-fit, minmax(220px, 1fr));
                    gap: 2rem;
                    max-width: 1000px;
                    margin: 2rem auto 0;
                }

                .feature-item {
                    padding: 1.5rem;
                    border-radius: 8px;
                    border: 1px solid rgba(30, 144, 255, 0.15);
                }

                .footer-cta {
                    text-align: center;
                    padding: 3rem 2rem;
                    color: #999;
                }

                .forward-link {
                    color: #7EB2FF;
                }
                "#}
            </style>
        </div>
    }
}
