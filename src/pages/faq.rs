use yew::prelude::*;
use web_sys::MouseEvent;
use yew::{Children, Properties};

#[derive(Properties, PartialEq)]
struct FaqItemProps {
    question: String,
    children: Children,
}

#[function_component(FaqItem)]
fn faq_item(props: &FaqItemProps) -> Html {
    let is_open = use_state(|| false);

    let toggle = {
        let is_open = is_open.clone();
        Callback::from(move |e: MouseEvent| {
            e.prevent_default();
            is_open.set(!*is_open);
        })
    };

    html! {
        <div class={classes!("faq-item", if *is_open { "open" } else { "" })}>
            <button class="faq-question" onclick={toggle}>
                <span class="question-text">{&props.question}</span>
                <span class="toggle-icon">{if *is_open { "−" } else { "+" }}</span>
            </button>
            <div class="faq-answer">
                { for props.children.iter() }
            </div>
        </div>
    }
}

#[function_component(Faq)]
pub fn faq() -> Html {
    html! {
        <div class="faq-page">
            <section class="faq-hero">
                <h1>{"Perguntas Frequentes"}</h1>
                <p>{"Tudo o que você precisa saber antes de enviar sua primeira dúvida"}</p>
            </section>

            <section class="faq-section">
                <h2>{"Sobre o serviço"}</h2>

                <FaqItem question="O que o assistente jurídico faz?">
                    <p>
                        {"Você descreve sua situação em linguagem simples e o assistente responde com uma orientação inicial baseada na legislação brasileira, explicando seus direitos e os próximos passos possíveis."}
                    </p>
                </FaqItem>

                <FaqItem question="A resposta substitui um advogado?">
                    <p>
                        {"Não. As respostas têm caráter informativo. Para ajuizar uma ação, assinar um acordo ou acompanhar um processo, procure um advogado ou a Defensoria Pública da sua cidade."}
                    </p>
                </FaqItem>

                <FaqItem question="Que tipo de pergunta posso fazer?">
                    <ul>
                        <li><strong>{"Trabalhista:"}</strong>{" férias, rescisão, horas extras, FGTS."}</li>
                        <li><strong>{"Consumidor:"}</strong>{" cobranças indevidas, trocas, cancelamentos."}</li>
                        <li><strong>{"Família:"}</strong>{" pensão alimentícia, guarda, divórcio."}</li>
                        <li><strong>{"Imobiliário:"}</strong>{" aluguel, despejo, usucapião."}</li>
                    </ul>
                </FaqItem>

                <h2>{"Conta e documentos"}</h2>

                <FaqItem question="Preciso criar uma conta?">
                    <p>
                        {"Não para fazer perguntas. Em breve será possível criar uma conta para guardar o histórico das suas consultas."}
                    </p>
                </FaqItem>

                <FaqItem question="Posso enviar documentos?">
                    <p>
                        {"O envio e o armazenamento de documentos, como contratos e notificações, estão em desenvolvimento. Por enquanto, descreva o conteúdo do documento na sua pergunta."}
                    </p>
                </FaqItem>

                <h2>{"Privacidade"}</h2>

                <FaqItem question="Minhas perguntas ficam salvas?">
                    <p>
                        {"A pergunta é enviada apenas para gerar a resposta. Nada fica guardado no seu navegador: ao recarregar a página, a conversa é descartada."}
                    </p>
                    <p class="faq-note">
                        {"Evite incluir dados pessoais sensíveis, como CPF ou números de processo, no texto da pergunta."}
                    </p>
                </FaqItem>
            </section>

            <style>
                {r#"
                .faq-page {
                    padding-top: 74px;
                    min-height: 100vh;
                    color: #ffffff;
                    background: #1a1a1a;
                }

                .faq-hero {
                    text-align: center;
                    padding: 5rem 2rem;
                    border-bottom: 1px solid rgba(30, 144, 255, 0.1);
                    margin-bottom: 2rem;
                }

                .faq-hero h1 {
                    font-size: 3rem;
                    margin-bottom: 1.5rem;
                    background: linear-gradient(45deg, #fff, #7EB2FF);
                    -webkit-background-clip: text;
                    -webkit-text-fill-color: transparent;
                }

                .faq-hero p {
                    font-size: 1.2rem;
                    color: #999;
                    max-width: 600px;
                    margin: 0 auto;
                }

                .faq-section {
                    max-width: 800px;
                    margin: 0 auto;
                    padding: 2rem;
                }

                .faq-section h2 {
                    color: #7EB2FF;
                    margin: 2.5rem 0 1rem;
                }

                .faq-item {
                    border: 1px solid rgba(30, 144, 255, 0.15);
                    border-radius: 8px;
                    margin-bottom: 1rem;
                    background: rgba(30, 30, 30, 0.7);
                }

                .faq-question {
                    width: 100%;
                    display: flex;
                    justify-content: space-between;
                    align-items: center;
                    padding: 1.25rem 1.5rem;
                    background: none;
                    border: none;
                    color: #fff;
                    font-size: 1.1rem;
                    text-align: left;
                    cursor: pointer;
                }

                .toggle-icon {
                    color: #7EB2FF;
                    font-size: 1.5rem;
                }

                .faq-answer {
                    display: none;
                    padding: 0 1.5rem 1.25rem;
                    color: #bbb;
                    line-height: 1.6;
                }

                .faq-item.open .faq-answer {
                    display: block;
                }

                .faq-note {
                    font-style: italic;
                    color: #999;
                }
                "#}
            </style>
        </div>
    }
}
