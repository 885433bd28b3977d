use chrono::Local;
use gloo_timers::callback::Interval;
use gloo_timers::future::TimeoutFuture;
use web_sys::HtmlInputElement;
use yew::prelude::*;

use super::engine::{ConversationEngine, Message, Sender};
use super::hours::BusinessHours;
use super::lead::{BrowserNavigator, LeadAction, LocalStorageLeadStore};
use super::steps::StepKind;
use crate::config;

pub enum ChatWidgetMsg {
    Toggle,
    SelectOption(String),
    SetInput(String),
    SubmitInput,
    DeliverPrompt(u64),
    Finish(LeadAction),
    HandOff(u64),
    RefreshHours,
}

pub struct ChatWidget {
    engine: ConversationEngine,
    input: String,
    error: Option<String>,
    hours: BusinessHours,
    is_business_hours: bool,
    _hours_timer: Interval,
}

impl ChatWidget {
    fn pause_then_deliver(&self, ctx: &Context<Self>) {
        let session = self.engine.session();
        ctx.link().send_future(async move {
            TimeoutFuture::new(config::TYPING_DELAY_MS).await;
            ChatWidgetMsg::DeliverPrompt(session)
        });
    }

    fn render_message(&self, ctx: &Context<Self>, index: usize, message: &Message) -> Html {
        let time = message.timestamp.with_timezone(&Local).format("%H:%M").to_string();

        if message.is_options {
            let waiting = self.engine.active_options() != Some(index);
            return html! {
                <div class="chat-options">
                    if !message.text.is_empty() {
                        <div class="chat-bubble bot">{ &message.text }</div>
                    }
                    <div class="chat-option-buttons">
                        { for message.options.iter().map(|option| {
                            let option = option.to_string();
                            let label = option.clone();
                            html! {
                                <button
                                    class="chat-option"
                                    disabled={waiting}
                                    onclick={ctx.link().callback(move |_| ChatWidgetMsg::SelectOption(option.clone()))}
                                >
                                    { label }
                                </button>
                            }
                        }) }
                    </div>
                </div>
            };
        }

        if message.is_action {
            let done = !self.engine.awaiting_action();
            return html! {
                <div class="chat-actions">
                    <div class="chat-bubble bot">{ &message.text }</div>
                    { for [LeadAction::ApplyNow, LeadAction::TalkToExpert].into_iter().map(|action| html! {
                        <button
                            class="chat-action"
                            disabled={done}
                            onclick={ctx.link().callback(move |_| ChatWidgetMsg::Finish(action))}
                        >
                            { action.button_label() }
                        </button>
                    }) }
                </div>
            };
        }

        let class = match message.sender {
            Sender::Bot => "chat-bubble bot",
            Sender::User => "chat-bubble user",
        };
        html! {
            <div class={class}>
                { for message.text.lines().map(|line| html! { <p>{ line }</p> }) }
                <span class="chat-time">{ time }</span>
            </div>
        }
    }

    fn render_input(&self, ctx: &Context<Self>) -> Html {
        let Some(step) = self.engine.current_step() else {
            return html! {};
        };
        if step.kind != StepKind::Input {
            return html! {};
        }

        let onkeypress = ctx.link().batch_callback(|e: KeyboardEvent| {
            (e.key() == "Enter").then_some(ChatWidgetMsg::SubmitInput)
        });
        html! {
            <div class="chat-input">
                <input
                    type={if step.id == "phone" { "tel" } else { "text" }}
                    placeholder={step.placeholder}
                    value={self.input.clone()}
                    disabled={self.engine.is_typing()}
                    oninput={ctx.link().callback(|e: InputEvent| {
                        let input: HtmlInputElement = e.target_unchecked_into();
                        ChatWidgetMsg::SetInput(input.value())
                    })}
                    {onkeypress}
                />
                <button onclick={ctx.link().callback(|_| ChatWidgetMsg::SubmitInput)}>
                    { "Send" }
                </button>
            </div>
        }
    }
}

impl Component for ChatWidget {
    type Message = ChatWidgetMsg;
    type Properties = ();

    fn create(ctx: &Context<Self>) -> Self {
        let link = ctx.link().clone();
        let hours_timer = Interval::new(config::HOURS_REFRESH_MS, move || {
            link.send_message(ChatWidgetMsg::RefreshHours)
        });
        let hours = BusinessHours::default();
        let is_business_hours = hours.is_open_now();

        Self {
            engine: ConversationEngine::default(),
            input: String::new(),
            error: None,
            hours,
            is_business_hours,
            _hours_timer: hours_timer,
        }
    }

    fn update(&mut self, ctx: &Context<Self>, msg: Self::Message) -> bool {
        match msg {
            ChatWidgetMsg::Toggle => {
                if self.engine.is_open() {
                    self.engine.close();
                    self.input.clear();
                    self.error = None;
                } else {
                    self.engine.open();
                }
                true
            }
            ChatWidgetMsg::SelectOption(option) => {
                match self.engine.select_option(&option) {
                    Ok(()) => {
                        self.error = None;
                        self.pause_then_deliver(ctx);
                    }
                    Err(e) => self.error = Some(e.to_string()),
                }
                true
            }
            ChatWidgetMsg::SetInput(value) => {
                self.input = value;
                true
            }
            ChatWidgetMsg::SubmitInput => {
                match self.engine.submit_input(&self.input) {
                    Ok(()) => {
                        self.input.clear();
                        self.error = None;
                        self.pause_then_deliver(ctx);
                    }
                    Err(e) => self.error = Some(e.to_string()),
                }
                true
            }
            ChatWidgetMsg::DeliverPrompt(session) => self.engine.deliver_pending(session),
            ChatWidgetMsg::Finish(action) => {
                match self.engine.finish(action, &LocalStorageLeadStore) {
                    Ok(_) => {
                        let session = self.engine.session();
                        ctx.link().send_future(async move {
                            TimeoutFuture::new(config::POST_ACTION_DELAY_MS).await;
                            ChatWidgetMsg::HandOff(session)
                        });
                    }
                    Err(e) => self.error = Some(e.to_string()),
                }
                true
            }
            ChatWidgetMsg::HandOff(session) => {
                // visitor may have closed the chat during the delay
                self.engine.hand_off(session, &BrowserNavigator).is_ok()
            }
            ChatWidgetMsg::RefreshHours => {
                let open = self.hours.is_open_now();
                let changed = open != self.is_business_hours;
                self.is_business_hours = open;
                changed
            }
        }
    }

    fn view(&self, ctx: &Context<Self>) -> Html {
        let toggle = ctx.link().callback(|_| ChatWidgetMsg::Toggle);
        let open = self.engine.is_open();

        html! {
            <div class={classes!("chat-widget", open.then_some("expanded"))}>
                if open {
                    <div class="chat-panel">
                        <div class="chat-header">
                            <span class="chat-title">{ "Geemadhura Assistant" }</span>
                            <button class="chat-close" onclick={toggle.clone()}>{ "✕" }</button>
                        </div>
                        <div class={classes!("chat-hours", (!self.is_business_hours).then_some("offline"))}>
                            { self.hours.status_text(self.is_business_hours) }
                        </div>
                        <div class="chat-transcript">
                            { for self.engine.transcript().iter().enumerate().map(|(i, m)| self.render_message(ctx, i, m)) }
                            if self.engine.is_typing() {
                                <div class="chat-typing"><span></span><span></span><span></span></div>
                            }
                        </div>
                        if let Some(error) = &self.error {
                            <div class="chat-error">{ error }</div>
                        }
                        { self.render_input(ctx) }
                    </div>
                }
                <button class="chat-toggle" onclick={toggle}>
                    if open { { "✕" } } else { { "💬" } }
                </button>
            </div>
        }
    }
}
