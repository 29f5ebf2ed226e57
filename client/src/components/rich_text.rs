//! WYSIWYG editor bound to an [`EditorDocument`].
//!
//! DESIGN
//! ======
//! The `contenteditable` surface is seeded once on mount and never re-rendered
//! from the signal, so the caret survives typing. Toolbar buttons run an
//! [`EditorCommand`] through the document model, apply the resulting DOM
//! action, and sync the surface markup back. Typing syncs on every input
//! event.
//!
//! Toolbar buttons cancel `mousedown` so the surface keeps its selection.

use desk::editor::{Align, DEFAULT_FONT_SIZE, EditorCommand, EditorDocument, FONT_SIZES, MAX_TABLE_DIM, PALETTE};
use desk::notify::{ErrorCode, Notice};
use leptos::prelude::*;
use schema::Template;

use crate::components::notice_toast::notify;
use crate::state::notice::NoticeState;
use crate::util::dom;

#[component]
pub fn RichTextEditor(
    document: RwSignal<EditorDocument>,
    /// Templates offered for insertion; the picker is hidden when absent.
    #[prop(optional, into)]
    templates: Option<Signal<Vec<Template>>>,
    #[prop(optional, into)] placeholder: String,
) -> impl IntoView {
    let notices = expect_context::<RwSignal<NoticeState>>();
    let surface = NodeRef::<leptos::html::Div>::new();
    let font_size = RwSignal::new(DEFAULT_FONT_SIZE);
    let show_table = RwSignal::new(false);
    let table_rows = RwSignal::new(3_u32);
    let table_cols = RwSignal::new(3_u32);
    let table_header = RwSignal::new(true);

    Effect::new(move |_| {
        if surface.get().is_some() {
            dom::load(surface, document.get_untracked().markup());
        }
    });

    let run = move |command: EditorCommand| {
        let mut outcome = None;
        document.update(|d| outcome = Some(d.execute(command)));
        match outcome {
            Some(Ok(action)) => {
                if let Some(markup) = dom::apply(surface, &action) {
                    document.update(|d| d.sync(markup));
                }
            }
            Some(Err(err)) => {
                leptos::logging::warn!("editor command rejected [{}]: {err}", err.error_code());
                notify(notices, Notice::warning(err.to_string()));
            }
            None => {}
        }
    };

    let on_input = move |_| {
        if let Some(markup) = dom::read(surface) {
            document.update(|d| d.sync(markup));
        }
    };

    let on_image = move |ev: leptos::ev::Event| {
        leptos::task::spawn_local(async move {
            match dom::image_from_change(ev).await {
                Ok(url) => run(EditorCommand::InsertImage(url)),
                Err(failure) => notify(notices, Notice::from_failure(&failure, "이미지를 불러오지 못했습니다.")),
            }
        });
    };

    let insert_table = move |_| {
        run(EditorCommand::InsertTable {
            rows: table_rows.get_untracked(),
            cols: table_cols.get_untracked(),
            header_row: table_header.get_untracked(),
        });
        show_table.set(false);
    };

    let keep_selection = |ev: leptos::ev::MouseEvent| ev.prevent_default();
    let dim_options = move || {
        (1..=MAX_TABLE_DIM)
            .map(|n| view! { <option value=n.to_string()>{n}</option> })
            .collect::<Vec<_>>()
    };

    view! {
        <div class="rich-text">
            <div class="rich-text__toolbar" role="toolbar">
                <button class="btn rich-text__tool" title="굵게" on:mousedown=keep_selection on:click=move |_| run(EditorCommand::Bold)>
                    <b>"B"</b>
                </button>
                <button class="btn rich-text__tool" title="기울임" on:mousedown=keep_selection on:click=move |_| run(EditorCommand::Italic)>
                    <i>"I"</i>
                </button>
                <button class="btn rich-text__tool" title="밑줄" on:mousedown=keep_selection on:click=move |_| run(EditorCommand::Underline)>
                    <u>"U"</u>
                </button>
                <span class="rich-text__divider" aria-hidden="true"></span>
                {Align::ALL
                    .into_iter()
                    .map(|align| {
                        view! {
                            <button
                                class="btn rich-text__tool"
                                title=align.label()
                                on:mousedown=keep_selection
                                on:click=move |_| run(EditorCommand::Align(align))
                            >
                                {align_glyph(align)}
                            </button>
                        }
                    })
                    .collect::<Vec<_>>()}
                <span class="rich-text__divider" aria-hidden="true"></span>
                <select
                    class="rich-text__select"
                    title="글자 색"
                    on:change=move |ev| run(EditorCommand::Color(event_target_value(&ev)))
                >
                    {PALETTE
                        .iter()
                        .map(|(label, hex)| view! { <option value=*hex>{*label}</option> })
                        .collect::<Vec<_>>()}
                </select>
                <select
                    class="rich-text__select"
                    title="글자 크기"
                    prop:value=move || font_size.get().to_string()
                    on:change=move |ev| {
                        if let Ok(px) = event_target_value(&ev).parse::<u32>() {
                            font_size.set(px);
                            run(EditorCommand::FontSize(px));
                        }
                    }
                >
                    {FONT_SIZES
                        .iter()
                        .map(|px| view! { <option value=px.to_string()>{format!("{px}px")}</option> })
                        .collect::<Vec<_>>()}
                </select>
                <span class="rich-text__divider" aria-hidden="true"></span>
                <button class="btn rich-text__tool" title="표 삽입" on:mousedown=keep_selection on:click=move |_| show_table.update(|v| *v = !*v)>
                    "표"
                </button>
                <label class="btn rich-text__tool" title="이미지 삽입">
                    "이미지"
                    <input type="file" accept="image/*" class="rich-text__file" on:change=on_image/>
                </label>
                {templates
                    .map(|templates| {
                        view! {
                            <select
                                class="rich-text__select"
                                title="템플릿 적용"
                                on:change=move |ev| {
                                    let picked = event_target_value(&ev);
                                    let content = templates
                                        .get_untracked()
                                        .into_iter()
                                        .find(|t| t.id.to_string() == picked)
                                        .map(|t| t.content);
                                    if let Some(content) = content {
                                        run(EditorCommand::ApplyTemplate(content));
                                    }
                                }
                            >
                                <option value="">"템플릿 선택"</option>
                                {move || {
                                    templates
                                        .get()
                                        .into_iter()
                                        .map(|t| view! { <option value=t.id.to_string()>{t.name}</option> })
                                        .collect::<Vec<_>>()
                                }}
                            </select>
                        }
                    })}
                <button class="btn rich-text__tool" title="모두 지우기" on:mousedown=keep_selection on:click=move |_| run(EditorCommand::Clear)>
                    "지우기"
                </button>
            </div>
            <Show when=move || show_table.get()>
                <div class="rich-text__table-form">
                    <label>
                        "행"
                        <select
                            prop:value=move || table_rows.get().to_string()
                            on:change=move |ev| table_rows.set(event_target_value(&ev).parse().unwrap_or(1))
                        >
                            {dim_options}
                        </select>
                    </label>
                    <label>
                        "열"
                        <select
                            prop:value=move || table_cols.get().to_string()
                            on:change=move |ev| table_cols.set(event_target_value(&ev).parse().unwrap_or(1))
                        >
                            {dim_options}
                        </select>
                    </label>
                    <label>
                        <input
                            type="checkbox"
                            prop:checked=move || table_header.get()
                            on:change=move |ev| table_header.set(event_target_checked(&ev))
                        />
                        "머리글 행"
                    </label>
                    <button class="btn btn--primary" on:mousedown=keep_selection on:click=insert_table>
                        "삽입"
                    </button>
                </div>
            </Show>
            <div
                class="rich-text__surface"
                contenteditable="true"
                data-placeholder=placeholder
                style=format!("font-size: {DEFAULT_FONT_SIZE}px")
                node_ref=surface
                on:input=on_input
            ></div>
        </div>
    }
}

fn align_glyph(align: Align) -> &'static str {
    match align {
        Align::Left => "⯇",
        Align::Center => "≡",
        Align::Right => "⯈",
        Align::Justify => "☰",
    }
}
