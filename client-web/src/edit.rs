use common::charset::CharClass;
use common::clipboard::CopyOutcome;
use common::generator::{parse_length, GeneratorOptions};
use common::page::EditPage;
use strum::IntoEnumIterator;
use tracing::trace;
use yew::prelude::*;
use yewtil::future::LinkFuture;

use crate::clipboard::{Alert, NavigatorClipboard};
use crate::widgets::{copy_button, password_input};

pub struct Model {
    link: ComponentLink<Self>,
    page: EditPage,
    length: String,
}

pub enum Msg {
    UpdateLength(String),
    ToggleClass(CharClass),
    Generate,
    UpdatePassword(String),
    ToggleVisibility,
    Copy,
    Copied(CopyOutcome),
}

impl Component for Model {
    type Message = Msg;
    type Properties = ();

    fn create(_: Self::Properties, link: ComponentLink<Self>) -> Self {
        let options = GeneratorOptions::default();
        Self {
            link,
            length: options.length.to_string(),
            page: EditPage::new("", options),
        }
    }

    fn update(&mut self, msg: Self::Message) -> ShouldRender {
        match msg {
            Msg::UpdateLength(t) => {
                self.page.options.length = parse_length(&t);
                self.length = t;
            }
            Msg::ToggleClass(class) => self.page.options.toggle(class),
            Msg::Generate => {
                self.page.generate(&mut Alert);
            }
            Msg::UpdatePassword(t) => self.page.input(t),
            Msg::ToggleVisibility => {
                self.page.toggle();
            }
            Msg::Copy => {
                let page = self.page.clone();
                self.link.send_future(async move {
                    Msg::Copied(page.copy(&NavigatorClipboard, &mut Alert).await)
                });
                return false;
            }
            Msg::Copied(outcome) => {
                trace!(?outcome, "copy finished");
                return false;
            }
        }
        true
    }

    fn change(&mut self, _props: Self::Properties) -> ShouldRender {
        false
    }

    fn view(&self) -> Html {
        html!{
            <fieldset>
                <label for="password_length">{"length:"}</label>
                <input type="number" id="password_length" min="0" value=self.length.clone()
                    oninput=self.link.callback(|e: InputData| Msg::UpdateLength(e.value))/>
                <br/>
                { for CharClass::iter().map(|class| html!{
                    <label>
                        <input type="checkbox" checked=self.page.options.is_enabled(class)
                            onclick=self.link.callback(move |_| Msg::ToggleClass(class))/>
                        { class.label() }
                    </label>
                }) }
                <br/>
                <button type="button" id="generatePasswordBtn" onclick=self.link.callback(|_| Msg::Generate)>{"Generate"}</button>
                <br/>
                <label for="passwordInput">{"password:"}</label>
                {
                    password_input(
                        "passwordInput",
                        self.page.field(),
                        self.link.callback(|_| Msg::ToggleVisibility),
                        self.link.callback(|e: InputData| Msg::UpdatePassword(e.value)),
                    )
                }
                { copy_button("passwordInput", self.link.callback(|_| Msg::Copy)) }
            </fieldset>
        }
    }
}
