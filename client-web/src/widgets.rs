use common::field::{MaskStyle, PasswordField};
use yew::prelude::*;

/// A password input with its visibility toggle.
pub fn password_input(id: &str, field: &PasswordField, ontoggle: Callback<MouseEvent>, oninput: Callback<InputData>) -> Html {
    let rendering = field.rendering();
    let readonly = field.style() == MaskStyle::Placeholder;
    html!{
        <span class="password-field">
            <input
                id=id.to_owned()
                name=id.to_owned()
                type=rendering.input_kind.as_str()
                value=rendering.value
                readonly=readonly
                oninput=oninput
            />
            <button type="button" class="toggle-btn" onclick=ontoggle>
                <img src=rendering.icon.src() alt="toggle password visibility"/>
            </button>
        </span>
    }
}

pub fn copy_button(target: &str, onclick: Callback<MouseEvent>) -> Html {
    html!{
        <button type="button" class="copy-btn" data-copy-target=target.to_owned() onclick=onclick>
            {"Copy"}
        </button>
    }
}
