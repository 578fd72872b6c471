use web_sys::HtmlTextAreaElement;
use yew::prelude::*;

use crate::api::{self, AskError};
use crate::ask::{is_submit_key, AskFlow};

pub enum AskBoxMsg {
    SetQuestion(String),
    Submit,
    Answered(Result<String, AskError>),
}

pub struct AskBox {
    flow: AskFlow,
}

impl Component for AskBox {
    type Message = AskBoxMsg;
    type Properties = ();

    fn create(_ctx: &Context<Self>) -> Self {
        Self {
            flow: AskFlow::default(),
        }
    }

    fn update(&mut self, ctx: &Context<Self>, msg: Self::Message) -> bool {
        match msg {
            AskBoxMsg::SetQuestion(text) => {
                self.flow.set_question(text);
                true
            }
            AskBoxMsg::Submit => {
                let Some(question) = self.flow.begin() else {
                    return false;
                };
                // A response for a component that is gone is dropped by yew.
                ctx.link().send_future(async move {
                    AskBoxMsg::Answered(api::ask(question).await)
                });
                true
            }
            AskBoxMsg::Answered(outcome) => {
                self.flow.settle(outcome);
                true
            }
        }
    }

    fn view(&self, ctx: &Context<Self>) -> Html {
        let pending = self.flow.is_pending();

        let oninput = ctx.link().callback(|e: InputEvent| {
            let input: HtmlTextAreaElement = e.target_unchecked_into();
            AskBoxMsg::SetQuestion(input.value())
        });

        let onkeydown = ctx.link().batch_callback(|e: KeyboardEvent| {
            if is_submit_key(&e.key(), e.shift_key()) {
                e.prevent_default();
                Some(AskBoxMsg::Submit)
            } else {
                None
            }
        });

        let onclick = ctx.link().callback(|e: MouseEvent| {
            e.prevent_default();
            AskBoxMsg::Submit
        });

        html! {
            <div class="ask-box">
                <div class="ask-input-row">
                    <textarea
                        class="ask-input"
                        rows="3"
                        placeholder="Digite sua dúvida jurídica..."
                        value={self.flow.question().to_string()}
                        {oninput}
                        {onkeydown}
                    />
                    <button
                        class="ask-submit"
                        disabled={!self.flow.can_submit()}
                        {onclick}
                    >
                        if pending {
                            {"Enviando..."}
                        } else {
                            {"Perguntar"}
                        }
                    </button>
                </div>

                if pending {
                    <div class="ask-loading">
                        <span class="spinner"></span>
                        {"Analisando sua pergunta..."}
                    </div>
                }

                if let Some(answer) = self.flow.answer() {
                    <div class="ask-answer">
                        if let Some(question) = self.flow.last_question() {
                            <p class="ask-answer-question">{question}</p>
                        }
                        <p class="ask-answer-text">{answer}</p>
                    </div>
                }

                <style>
                    {r#"
                    .ask-box {
                        max-width: 720px;
                        margin: 0 auto;
                        text-align: left;
                    }

                    .ask-input-row {
                        display: flex;
                        gap: 0.75rem;
                        align-items: flex-end;
                    }

                    .ask-input {
                        flex: 1;
                        resize: vertical;
                        padding: 1rem;
                        font-size: 1rem;
                        border-radius: 8px;
                        border: 1px solid rgba(126, 178, 255, 0.3);
                        background: rgba(26, 26, 26, 0.85);
                        color: #fff;
                    }

                    .ask-submit {
                        padding: 0.9rem 1.5rem;
                        border: none;
                        border-radius: 8px;
                        background: #1E90FF;
                        color: #fff;
                        cursor: pointer;
                    }

                    .ask-submit:disabled {
                        opacity: 0.5;
                        cursor: not-allowed;
                    }

                    .ask-loading {
                        margin-top: 1rem;
                        color: #999;
                    }

                    .spinner {
                        display: inline-block;
                        width: 14px;
                        height: 14px;
                        margin-right: 0.5rem;
                        border: 2px solid #7EB2FF;
                        border-top-color: transparent;
                        border-radius: 50%;
                        animation: spin 0.8s linear infinite;
                    }

                    @keyframes spin {
                        to { transform: rotate(360deg); }
                    }

                    .ask-answer {
                        margin-top: 1.5rem;
                        padding: 1.25rem;
                        border-radius: 8px;
                        background: rgba(30, 144, 255, 0.08);
                        border: 1px solid rgba(30, 144, 255, 0.2);
                        white-space: pre-wrap;
                    }

                    .ask-answer-question {
                        color: #7EB2FF;
                        font-weight: 600;
                    }
                    "#}
                </style>
            </div>
        }
    }
}
