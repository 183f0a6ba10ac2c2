use std::cell::RefCell;

use async_trait::async_trait;
use common::clipboard::{Clipboard, CopyOutcome};
use common::consts::{MASK_PLACEHOLDER, MSG_ENTRY_COPIED, MSG_GENERATE_FIRST, MSG_PASSWORD_COPIED};
use common::field::Visibility;
use common::page::{CopyTarget, EditPage, Entry, EntryPage, RegisterPage, Slot};
use common::generator::GeneratorOptions;
use common::view::MemoryView;
use common::Error;

#[derive(Default)]
struct FakeClipboard {
    contents: RefCell<Option<String>>,
    deny: bool,
}

impl FakeClipboard {
    fn denying() -> Self {
        Self { deny: true, ..Default::default() }
    }

    fn contents(&self) -> Option<String> {
        self.contents.borrow().clone()
    }
}

#[async_trait(?Send)]
impl Clipboard for FakeClipboard {
    async fn write_text(&self, text: &str) -> common::Result<()> {
        if self.deny {
            return Err(Error::ClipboardRejected("permission denied".into()));
        }
        *self.contents.borrow_mut() = Some(text.to_owned());
        Ok(())
    }
}

fn entry_page() -> EntryPage {
    EntryPage::new(Entry {
        url: "https://example.org/login".into(),
        username: "bob".into(),
        password: "Tr0ub4dor&3".into(),
    })
}

#[tokio::test]
async fn copy_while_masked_yields_true_secret() {
    let page = entry_page();
    let clipboard = FakeClipboard::default();
    let mut view = MemoryView::default();

    page.field().bind(&mut view);
    assert_eq!(view.value, MASK_PLACEHOLDER);

    let outcome = page.copy(CopyTarget::Password, &clipboard, &mut view).await;
    assert_eq!(outcome, CopyOutcome::Copied);
    assert_eq!(clipboard.contents().as_deref(), Some("Tr0ub4dor&3"));
    assert_eq!(view.messages, vec![MSG_ENTRY_COPIED.to_owned()]);
    assert_eq!(page.field().secret(), "Tr0ub4dor&3");
    assert_eq!(page.field().visibility(), Visibility::Masked);
}

#[tokio::test]
async fn copy_while_revealed_yields_same_secret() {
    let mut page = entry_page();
    page.toggle();
    let clipboard = FakeClipboard::default();
    let mut messages: Vec<String> = Vec::new();

    page.copy(CopyTarget::Password, &clipboard, &mut messages).await;
    assert_eq!(clipboard.contents().as_deref(), Some("Tr0ub4dor&3"));
}

#[tokio::test]
async fn copy_other_targets() {
    let page = entry_page();
    let clipboard = FakeClipboard::default();
    let mut messages: Vec<String> = Vec::new();

    page.copy(CopyTarget::Url, &clipboard, &mut messages).await;
    assert_eq!(clipboard.contents().as_deref(), Some("https://example.org/login"));
    page.copy(CopyTarget::Username, &clipboard, &mut messages).await;
    assert_eq!(clipboard.contents().as_deref(), Some("bob"));
}

#[tokio::test]
async fn denied_clipboard_shows_no_acknowledgment() {
    let page = entry_page();
    let clipboard = FakeClipboard::denying();
    let mut view = MemoryView::default();

    let outcome = page.copy(CopyTarget::Password, &clipboard, &mut view).await;
    assert_eq!(outcome, CopyOutcome::Failed);
    assert!(view.messages.is_empty());
    assert_eq!(clipboard.contents(), None);
}

#[tokio::test]
async fn register_copy_requires_a_password() {
    let mut page = RegisterPage::default();
    let clipboard = FakeClipboard::default();
    let mut messages: Vec<String> = Vec::new();

    assert_eq!(page.copy(&clipboard, &mut messages).await, CopyOutcome::Skipped);
    assert_eq!(messages, vec![MSG_GENERATE_FIRST.to_owned()]);
    assert_eq!(clipboard.contents(), None);

    let generated = page.generate().to_owned();
    assert_eq!(page.copy(&clipboard, &mut messages).await, CopyOutcome::Copied);
    assert_eq!(clipboard.contents(), Some(generated));
    assert_eq!(messages.last().map(String::as_str), Some(MSG_PASSWORD_COPIED));
}

#[tokio::test]
async fn register_copy_uses_typed_value() {
    let mut page = RegisterPage::default();
    page.input(Slot::First, "typed-by-hand");
    let clipboard = FakeClipboard::default();
    let mut messages: Vec<String> = Vec::new();

    page.copy(&clipboard, &mut messages).await;
    assert_eq!(clipboard.contents().as_deref(), Some("typed-by-hand"));
}

#[tokio::test]
async fn edit_page_generate_then_copy() {
    let mut page = EditPage::new("old", GeneratorOptions::new(5));
    let clipboard = FakeClipboard::default();
    let mut messages: Vec<String> = Vec::new();

    let rendering = page.generate(&mut messages);
    assert_eq!(rendering.value.chars().count(), 5);
    assert!(rendering.value.chars().all(|c| c.is_ascii_lowercase()));

    page.copy(&clipboard, &mut messages).await;
    assert_eq!(clipboard.contents(), Some(rendering.value));
}

#[test]
fn toggle_twice_restores_view() {
    let mut page = entry_page();
    let mut view = MemoryView::default();
    page.field().bind(&mut view);
    let before = view.clone();

    page.toggle();
    page.field().bind(&mut view);
    assert_eq!(view.value, "Tr0ub4dor&3");

    page.toggle();
    page.field().bind(&mut view);
    assert_eq!(view, before);
}
