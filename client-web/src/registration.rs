
use client_common::{check_email, check_password_strength, check_registration, RegistrationForm};
use common::clipboard::CopyOutcome;
use common::page::{RegisterPage, Slot};
use tracing::{error, trace};
use yew::prelude::*;
use yewtil::future::LinkFuture;

use crate::clipboard::{Alert, NavigatorClipboard};
use crate::widgets::password_input;


pub struct Model {
    link: ComponentLink<Self>,
    email: String,
    name: String,
    page: RegisterPage,
    checking: bool,
    breach: Option<String>,
}

pub enum Msg {
    UpdateEmail(String),
    UpdateName(String),
    UpdatePassword(Slot, String),
    ToggleVisibility(Slot),
    Generate,
    Copy,
    Copied(CopyOutcome),
    CheckBreach,
    BreachChecked(String),
}


impl Model {
    fn form(&self) -> RegistrationForm {
        RegistrationForm {
            email: self.email.clone(),
            name: self.name.clone(),
            password: self.page.field(Slot::First).secret().to_owned(),
            password2: self.page.field(Slot::Second).secret().to_owned(),
        }
    }
}

impl Component for Model {
    type Message = Msg;
    type Properties = ();

    fn create(_: Self::Properties, link: ComponentLink<Self>) -> Self {
        Self {
            link,
            email: String::default(),
            name: String::default(),
            page: RegisterPage::default(),
            checking: false,
            breach: None,
        }
    }

    fn update(&mut self, msg: Self::Message) -> ShouldRender {
        match msg {
            Msg::UpdateEmail(t) => self.email = t,
            Msg::UpdateName(t) => self.name = t,
            Msg::UpdatePassword(slot, t) => {
                self.page.input(slot, t);
                self.breach = None;
            }
            Msg::ToggleVisibility(slot) => {
                self.page.toggle(slot);
            }
            Msg::Generate => {
                self.page.generate();
                self.breach = None;
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
            Msg::CheckBreach => {
                self.checking = true;

                let password = self.page.field(Slot::First).secret().to_owned();

                self.link.send_future(async move {
                    match client_common::hibp::check_password(&password).await {
                        Ok(0) => Msg::BreachChecked("The password has not been pwned.".to_owned()),
                        Ok(count) => Msg::BreachChecked(format!("The password has been pwned {} times!", count)),
                        Err(e) => {
                            error!("Error while checking password breach: {:?}", e);
                            Msg::BreachChecked("Could not check the password".to_owned())
                        }
                    }
                });
            },
            Msg::BreachChecked(text) => {
                self.checking = false;
                self.breach = Some(text);
            }
        }
        true
    }

    fn change(&mut self, _props: Self::Properties) -> ShouldRender {
        false
    }

    fn view(&self) -> Html {
        let issues = check_registration(&self.form());
        html!{
            <form method="post" action="/register">
            <fieldset disabled=self.checking >
                <label for="email">{"email:"}</label>
                <input type="email" id="email" name="email" oninput=self.link.callback(|e: InputData| Msg::UpdateEmail(e.value))/>
                {
                    if check_email(&self.email) {
                        "good"
                    } else {
                        "bad"
                    }
                }
                <br/>
                <label for="name">{"name:"}</label>
                <input type="text" id="name" name="name" oninput=self.link.callback(|e: InputData| Msg::UpdateName(e.value))/>
                <br/>
                <label for="password1Input">{"password:"}</label>
                {
                    password_input(
                        "password1Input",
                        self.page.field(Slot::First),
                        self.link.callback(|_| Msg::ToggleVisibility(Slot::First)),
                        self.link.callback(|e: InputData| Msg::UpdatePassword(Slot::First, e.value)),
                    )
                }
                <br/>
                <label for="password2Input">{"password again:"}</label>
                {
                    password_input(
                        "password2Input",
                        self.page.field(Slot::Second),
                        self.link.callback(|_| Msg::ToggleVisibility(Slot::Second)),
                        self.link.callback(|e: InputData| Msg::UpdatePassword(Slot::Second, e.value)),
                    )
                }
                <br/>
                <button type="button" id="generatePasswordBtn" onclick=self.link.callback(|_| Msg::Generate)>{"Generate"}</button>
                <button type="button" id="copyPasswordBtn" onclick=self.link.callback(|_| Msg::Copy)>{"Copy"}</button>
                <button type="button" onclick=self.link.callback(|_| Msg::CheckBreach)>{"Check breaches"}</button>
                <br/>
                {
                    format!("strength: {}/4", check_password_strength(self.page.field(Slot::First).secret(), &self.email))
                }
                <br/>
                { self.breach.clone().unwrap_or_default() }
                <ul>
                    { for issues.iter().map(|issue| html!{ <li>{ issue.to_string() }</li> }) }
                </ul>
                <button type="submit" disabled={!issues.is_empty()}>{"Sign Me Up!"}</button>
            </fieldset>
            </form>
        }
    }
}
