use crate::comments::{
    format_relative, from_epoch_millis, validate_image, CommentBoard, CommentDraft,
    CommentRecord, ImageMeta, ImageReads, Phase,
};
use crate::config::WidgetConfig;
use crate::diagnostics::{ConsoleSink, DiagnosticSink};
use crate::notify::{alert, TransientNotice};
use crate::storage::BrowserStorage;
use chrono::{DateTime, Utc};
use leptos::*;
use wasm_bindgen::prelude::*;
use wasm_bindgen::JsCast;
use web_sys::{File, FileReader, HtmlInputElement};

type Board = CommentBoard<BrowserStorage, ConsoleSink>;

fn now_utc() -> DateTime<Utc> {
    from_epoch_millis(js_sys::Date::now()).unwrap_or_default()
}

/// Read a file into a `data:` URI and hand the outcome to `on_done`.
///
/// `loadend` fires once whether the read succeeds, fails or is aborted, and a
/// `once_into_js` closure frees itself when it runs.
fn read_as_data_url(
    file: &File,
    on_done: impl FnOnce(Result<String, String>) + 'static,
) -> Result<(), JsValue> {
    let reader = FileReader::new()?;
    let handle = reader.clone();
    let onloadend = Closure::once_into_js(move || {
        if let Some(e) = handle.error() {
            on_done(Err(e.message()));
            return;
        }
        let url = handle.result().ok().and_then(|value| value.as_string());
        on_done(url.ok_or_else(|| "reader returned no data".to_string()));
    });

    reader.set_onloadend(Some(onloadend.unchecked_ref()));
    reader.read_as_data_url(file)
}

#[component]
fn CommentItem(comment: CommentRecord, on_pin: Callback<String>) -> impl IntoView {
    let id = comment.id.clone();
    let initial = comment.initial();
    let when = format_relative(comment.created_at, now_utc());
    let pin_label = if comment.is_pinned { "Unpin" } else { "Pin" };

    view! {
        <li class="comment" class:pinned=comment.is_pinned>
            <div class="comment-avatar">
                {match comment.profile_image {
                    Some(src) => view! { <img src=src alt=comment.user_name.clone()/> }.into_view(),
                    None => view! { <span class="avatar-initial">{initial}</span> }.into_view(),
                }}
            </div>
            <div class="comment-body">
                <div class="comment-meta">
                    <span class="comment-author">{comment.user_name.clone()}</span>
                    <span class="comment-time">{when}</span>
                    <button class="pin-button" on:click=move |_| on_pin.call(id.clone())>
                        {pin_label}
                    </button>
                </div>
                <p class="comment-content">{comment.content}</p>
            </div>
        </li>
    }
}

#[component]
pub fn CommentSection() -> impl IntoView {
    let config = WidgetConfig::default();
    let max_image_bytes = config.max_image_bytes;
    let notice = TransientNotice::new(config.notice_dismiss_ms);

    let board = create_rw_signal(Board::new(BrowserStorage::new(), ConsoleSink, config));
    // Load once the widget is mounted
    create_effect(move |_| board.update(|b| b.load()));

    let draft = create_rw_signal(CommentDraft::default());
    let preview = create_memo(move |_| draft.with(|d| d.profile_image.clone()));
    let reads = create_rw_signal(ImageReads::default());
    let file_input = create_node_ref::<html::Input>();

    let reset_file_input = move || {
        if let Some(input) = file_input.get_untracked() {
            input.set_value("");
        }
    };
    let remove_image = move || {
        reads.update(|r| r.invalidate());
        draft.update(|d| d.profile_image = None);
        reset_file_input();
    };

    let on_image_change = move |ev: ev::Event| {
        let input = event_target::<HtmlInputElement>(&ev);
        let Some(file) = input.files().and_then(|files| files.get(0)) else {
            return;
        };
        let meta = ImageMeta::new(file.size() as u64, file.type_());
        if let Err(e) = validate_image(&meta, max_image_bytes) {
            alert(&e.to_string());
            input.set_value("");
            return;
        }
        let Some(ticket) = reads.try_update(|r| r.begin()) else {
            return;
        };
        let started = read_as_data_url(&file, move |result| {
            // A newer pick, Remove or a post superseded this read
            if reads.try_update(|r| r.finish(ticket)) != Some(true) {
                return;
            }
            match result {
                Ok(url) => draft.update(|d| d.profile_image = Some(url)),
                Err(reason) => {
                    ConsoleSink.warn(&format!("Failed to read image: {}", reason));
                    reset_file_input();
                }
            }
        });
        if let Err(e) = started {
            ConsoleSink.warn(&format!("Failed to read image: {:?}", e));
            reads.update(|r| r.invalidate());
            input.set_value("");
        }
    };

    let on_submit = move |ev: ev::SubmitEvent| {
        ev.prevent_default();
        if board.with_untracked(|b| b.phase()) != Phase::Ready
            || reads.with_untracked(|r| r.is_pending())
        {
            return;
        }
        let submitted = draft.get_untracked();
        match board.try_update(|b| b.submit(submitted, now_utc())) {
            Some(Ok(_)) => {
                notice.success("Comment posted successfully!");
                draft.update(|d| d.clear());
                reads.update(|r| r.invalidate());
                reset_file_input();
            }
            Some(Err(e)) => notice.error(e.to_string()),
            None => {}
        }
    };

    let on_pin = Callback::new(move |id: String| {
        if let Some(Err(e)) = board.try_update(|b| b.toggle_pin(&id)) {
            ConsoleSink.warn(&e.to_string());
        }
    });

    let phase = move || board.with(|b| b.phase());
    let reading_image = move || reads.with(|r| r.is_pending());

    view! {
        <section id="comments" class="comments">
            <h2>"Comments " <span class="comment-count">{move || format!("({})", board.with(|b| b.len()))}</span></h2>

            {move || notice.get().map(|n| view! { <div class=n.kind.class()>{n.text}</div> })}

            <form class="comment-form" on:submit=on_submit>
                <div class="control-group">
                    <label for="comment-name">"Name"</label>
                    <input
                        type="text"
                        id="comment-name"
                        placeholder="Your name"
                        prop:value=move || draft.with(|d| d.user_name.clone())
                        on:input=move |ev| draft.update(|d| d.user_name = event_target_value(&ev))
                    />
                </div>
                <div class="control-group">
                    <label for="comment-content">"Message"</label>
                    <textarea
                        id="comment-content"
                        placeholder="Write something nice..."
                        prop:value=move || draft.with(|d| d.content.clone())
                        on:input=move |ev| draft.update(|d| d.content = event_target_value(&ev))
                    ></textarea>
                </div>
                <div class="control-group">
                    <label for="comment-image">"Profile photo (optional, max 5 MB)"</label>
                    <input
                        type="file"
                        id="comment-image"
                        accept="image/*"
                        node_ref=file_input
                        on:change=on_image_change
                    />
                    {move || preview.get().map(|src| view! {
                        <div class="avatar-preview">
                            <img src=src alt="Profile preview"/>
                            <button type="button" on:click=move |_| remove_image()>
                                "Remove"
                            </button>
                        </div>
                    })}
                </div>
                <button
                    type="submit"
                    class="submit-button"
                    disabled=move || phase() != Phase::Ready || reading_image()
                >
                    {move || match (phase(), reading_image()) {
                        (Phase::Submitting, _) => "Posting...",
                        (_, true) => "Reading image...",
                        _ => "Post Comment",
                    }}
                </button>
            </form>

            {move || (phase() == Phase::Loading).then(|| view! {
                <p class="comments-status">"Loading comments..."</p>
            })}
            {move || board.with(|b| b.load_failed()).then(|| view! {
                <p class="comments-status error">"Saved comments could not be loaded."</p>
            })}
            {move || (phase() == Phase::Ready && board.with(|b| b.is_empty())).then(|| view! {
                <p class="comments-status">"No comments yet. Be the first!"</p>
            })}

            <ul class="comment-list">
                {move || board.with(|b| b.pinned().cloned()).map(|comment| view! {
                    <li class="pinned-label">"Pinned"</li>
                    <CommentItem comment=comment on_pin=on_pin/>
                })}
                <For
                    each=move || board.with(|b| b.comments().to_vec())
                    key=|comment| comment.id.clone()
                    children=move |comment| view! { <CommentItem comment=comment on_pin=on_pin/> }
                />
            </ul>
        </section>
    }
}
