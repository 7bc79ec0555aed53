use yew::prelude::*;
use web_sys::{HtmlInputElement, HtmlTextAreaElement};
use time::macros::format_description;
use uuid::Uuid;
use shared::models::{Comment, CreateCommentRequest};
use shared::validation::{validate_comment_request, MAX_AUTHOR_LENGTH, MAX_COMMENT_LENGTH};
use crate::api;
use crate::styles::*;

#[derive(Properties, PartialEq)]
pub struct Props {
    pub playlist_id: Uuid,
    pub comments: Vec<Comment>,
}

pub enum Msg {
    UpdateAuthor(String),
    UpdateBody(String),
    Submit,
    Posted(Result<Comment, String>),
}

pub struct Comments {
    comments: Vec<Comment>,
    author: String,
    body: String,
    submitting: bool,
    error: Option<String>,
}

impl Component for Comments {
    type Message = Msg;
    type Properties = Props;

    fn create(ctx: &Context<Self>) -> Self {
        Self {
            comments: ctx.props().comments.clone(),
            author: String::new(),
            body: String::new(),
            submitting: false,
            error: None,
        }
    }

    fn update(&mut self, ctx: &Context<Self>, msg: Self::Message) -> bool {
        match msg {
            Msg::UpdateAuthor(author) => {
                self.author = author;
                false
            }
            Msg::UpdateBody(body) => {
                self.body = body;
                self.error = None;
                true
            }
            Msg::Submit => {
                if self.submitting {
                    return false;
                }
                let request = CreateCommentRequest {
                    author: Some(self.author.clone()).filter(|a| !a.trim().is_empty()),
                    body: self.body.clone(),
                };
                if let Err(e) = validate_comment_request(&request) {
                    self.error = Some(e.to_string());
                    return true;
                }

                self.submitting = true;
                let playlist_id = ctx.props().playlist_id;
                ctx.link().send_future(async move {
                    Msg::Posted(api::post_comment(playlist_id, &request).await.map_err(|e| e.message))
                });
                true
            }
            Msg::Posted(result) => {
                self.submitting = false;
                match result {
                    Ok(comment) => {
                        self.comments.insert(0, comment);
                        self.body.clear();
                        self.error = None;
                    }
                    Err(error) => self.error = Some(error),
                }
                true
            }
        }
    }

    fn view(&self, ctx: &Context<Self>) -> Html {
        let onsubmit = ctx.link().callback(|e: SubmitEvent| {
            e.prevent_default();
            Msg::Submit
        });
        let on_author = ctx.link().callback(|e: InputEvent| {
            let input: HtmlInputElement = e.target_unchecked_into();
            Msg::UpdateAuthor(input.value())
        });
        let on_body = ctx.link().callback(|e: InputEvent| {
            let input: HtmlTextAreaElement = e.target_unchecked_into();
            Msg::UpdateBody(input.value())
        });

        html! {
            <section class={SPACE_Y_LG}>
                <h2 class={HEADING_MD}>{format!("Comments ({})", self.comments.len())}</h2>

                <form {onsubmit} class={combine_classes(CARD_SECTION, SPACE_Y_BASE)}>
                    <label class={TEXT_LABEL}>{"Name (optional)"}</label>
                    <input type="text" class={INPUT_BASE} placeholder="Anonymous"
                        maxlength={MAX_AUTHOR_LENGTH.to_string()}
                        value={self.author.clone()} oninput={on_author} />
                    <label class={TEXT_LABEL}>{"Comment"}</label>
                    <textarea class={INPUT_BASE} rows="3"
                        maxlength={MAX_COMMENT_LENGTH.to_string()}
                        value={self.body.clone()} oninput={on_body} />
                    <div class={FLEX_BETWEEN}>
                        <span class={TEXT_MUTED}>
                            {format!("{}/{}", self.body.chars().count(), MAX_COMMENT_LENGTH)}
                        </span>
                        <button type="submit" class={button_primary()} disabled={self.submitting}>
                            {if self.submitting { "Posting..." } else { "Post comment" }}
                        </button>
                    </div>
                    {if let Some(error) = &self.error {
                        html! { <p class={TEXT_ERROR}>{error}</p> }
                    } else { html! {} }}
                </form>

                <div class={SPACE_Y_BASE}>
                    {for self.comments.iter().map(render_comment)}
                </div>
            </section>
        }
    }
}

fn render_comment(comment: &Comment) -> Html {
    let posted = comment.posted_at
        .format(format_description!("[year]-[month]-[day] [hour]:[minute] UTC"))
        .unwrap_or_default();

    html! {
        <div class={CARD_SECTION}>
            <div class={FLEX_BETWEEN}>
                <span class="font-semibold text-gray-100">{&comment.author}</span>
                <span class={TEXT_MUTED}>{posted}</span>
            </div>
            <p class="mt-2 text-gray-300 break-words whitespace-pre-wrap">{&comment.body}</p>
        </div>
    }
}
