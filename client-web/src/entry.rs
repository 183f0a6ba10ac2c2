use common::clipboard::CopyOutcome;
use common::page::{CopyTarget, Entry, EntryPage};
use tracing::{error, trace};
use yew::prelude::*;
use yewtil::future::LinkFuture;

use crate::clipboard::{Alert, NavigatorClipboard};
use crate::widgets::{copy_button, password_input};

/// id of the `<script type="application/json">` the backend renders the entry into
pub const ENTRY_ELEMENT_ID: &str = "entry";

/// Reads the entry embedded in the page.
pub fn embedded_entry() -> eyre::Result<Entry> {
    let json = web_sys::window()
        .and_then(|w| w.document())
        .and_then(|d| d.get_element_by_id(ENTRY_ELEMENT_ID))
        .and_then(|e| e.text_content())
        .ok_or_else(|| eyre::eyre!("no #{} element in page", ENTRY_ELEMENT_ID))?;
    Entry::from_json(&json)
}

pub struct Model {
    link: ComponentLink<Self>,
    page: EntryPage,
}

pub enum Msg {
    ToggleVisibility,
    Copy(CopyTarget),
    Copied(CopyOutcome),
}

impl Component for Model {
    type Message = Msg;
    type Properties = ();

    fn create(_: Self::Properties, link: ComponentLink<Self>) -> Self {
        let entry = embedded_entry().unwrap_or_else(|e| {
            error!("{:?}", e);
            Entry::default()
        });
        Self {
            link,
            page: EntryPage::new(entry),
        }
    }

    fn update(&mut self, msg: Self::Message) -> ShouldRender {
        match msg {
            Msg::ToggleVisibility => {
                self.page.toggle();
                true
            }
            Msg::Copy(target) => {
                let page = self.page.clone();
                self.link.send_future(async move {
                    Msg::Copied(page.copy(target, &NavigatorClipboard, &mut Alert).await)
                });
                false
            }
            Msg::Copied(outcome) => {
                trace!(?outcome, "copy finished");
                false
            }
        }
    }

    fn change(&mut self, _props: Self::Properties) -> ShouldRender {
        false
    }

    fn view(&self) -> Html {
        html!{
            <fieldset>
                <label for="urlInput">{"url:"}</label>
                <input id="urlInput" type="text" readonly=true value=self.page.url().to_owned()/>
                { copy_button("urlInput", self.link.callback(|_| Msg::Copy(CopyTarget::Url))) }
                <br/>
                <label for="usernameInput">{"username:"}</label>
                <input id="usernameInput" type="text" readonly=true value=self.page.username().to_owned()/>
                { copy_button("usernameInput", self.link.callback(|_| Msg::Copy(CopyTarget::Username))) }
                <br/>
                <label for="passwordInput">{"password:"}</label>
                {
                    password_input(
                        "passwordInput",
                        self.page.field(),
                        self.link.callback(|_| Msg::ToggleVisibility),
                        Callback::noop(),
                    )
                }
                { copy_button("passwordInput", self.link.callback(|_| Msg::Copy(CopyTarget::Password))) }
            </fieldset>
        }
    }
}
