//! The interactive prompt: reads commands, drives the session, prints the feed.

use tokio::io::{AsyncBufRead, AsyncBufReadExt, AsyncWrite, AsyncWriteExt, Lines};

use lostfound_core::domain::{PostSubmission, PostType};
use lostfound_shared::CreatePostRequest;

use crate::commands::{Command, HELP};
use crate::convert::{feed_response, submission_from_request};
use crate::error::{AppError, AppResult};
use crate::render;
use crate::session::{BoardSession, ModalState};

const BACK: &str = "back";

enum Flow {
    Continue,
    Quit,
}

/// Line-oriented front end over a [`BoardSession`].
pub struct Shell<R, W> {
    lines: Lines<R>,
    out: W,
    session: BoardSession,
    title: String,
}

impl<R, W> Shell<R, W>
where
    R: AsyncBufRead + Unpin,
    W: AsyncWrite + Unpin,
{
    pub fn new(input: R, out: W, session: BoardSession, title: impl Into<String>) -> Self {
        Self {
            lines: input.lines(),
            out,
            session,
            title: title.into(),
        }
    }

    /// Show the feed, then handle commands until `quit` or end of input.
    pub async fn run(&mut self) -> AppResult<()> {
        self.show_feed().await?;

        loop {
            self.print("> ").await?;
            let Some(line) = self.lines.next_line().await? else {
                break;
            };

            let outcome = match line.parse::<Command>() {
                Ok(command) => self.execute(command).await,
                Err(e) => Err(e),
            };

            match outcome {
                Ok(Flow::Continue) => {}
                Ok(Flow::Quit) => break,
                Err(e) if e.is_fatal() => return Err(e),
                Err(e) => {
                    tracing::debug!(error = %e, "Command failed");
                    self.print(&format!("{e}\n")).await?;
                }
            }
        }

        tracing::info!("Board session ended");
        Ok(())
    }

    async fn execute(&mut self, command: Command) -> AppResult<Flow> {
        match command {
            Command::Empty => {}
            Command::List => self.show_feed().await?,
            Command::Filter(filter) => {
                self.session.set_filter(filter);
                self.show_feed().await?;
            }
            Command::New(post_type) => {
                match post_type {
                    Some(post_type) => self.session.choose_type(post_type),
                    None => self.session.open_modal(),
                }
                if self.create_post().await? {
                    self.show_feed().await?;
                }
            }
            Command::Export => {
                let posts = self.session.visible_posts().await;
                let feed = feed_response(self.session.active_filter(), &posts);
                let json = serde_json::to_string_pretty(&feed)?;
                self.print(&format!("{json}\n")).await?;
            }
            Command::Import(json) => self.import(&json).await?,
            Command::Help => self.print(HELP).await?,
            Command::Quit => return Ok(Flow::Quit),
        }

        Ok(Flow::Continue)
    }

    /// Walk the modal until a post is stored or the user backs out.
    /// Returns whether a post was created.
    async fn create_post(&mut self) -> AppResult<bool> {
        loop {
            match self.session.modal() {
                ModalState::Closed => return Ok(false),
                ModalState::ChoosingType => {
                    let Some(answer) = self.ask("Lost or found?").await? else {
                        self.session.close_modal();
                        return Ok(false);
                    };
                    if answer.eq_ignore_ascii_case(BACK) {
                        self.session.cancel();
                        continue;
                    }
                    match answer.parse::<PostType>() {
                        Ok(post_type) => self.session.choose_type(post_type),
                        Err(e) => self.print(&format!("{e}\n")).await?,
                    }
                }
                ModalState::Editing(post_type) => {
                    let Some(submission) = self.fill_form(post_type).await? else {
                        continue;
                    };
                    match self.session.submit(submission).await {
                        Ok(post) => {
                            self.print(&format!("Posted \"{}\".\n", post.title)).await?;
                            return Ok(true);
                        }
                        Err(e) => self.print(&format!("{e}\n")).await?,
                    }
                }
            }
        }
    }

    /// Prompt for every field of the form. `None` means the user went back
    /// (or input ended) and the modal state has been updated accordingly.
    async fn fill_form(&mut self, post_type: PostType) -> AppResult<Option<PostSubmission>> {
        let mut form = PostSubmission::new(post_type);

        let mut prompts = vec![
            "Title *".to_string(),
            "Description *".to_string(),
            format!("{} *", PostSubmission::location_prompt(post_type)),
        ];
        if post_type == PostType::Found {
            prompts.push("Where is it currently? *".to_string());
        }
        prompts.push("Contact Info *".to_string());
        prompts.push("Image (optional)".to_string());

        let mut answers = Vec::with_capacity(prompts.len());
        for prompt in &prompts {
            match self.ask(prompt).await? {
                None => {
                    self.session.close_modal();
                    return Ok(None);
                }
                Some(answer) if answer.eq_ignore_ascii_case(BACK) => {
                    self.session.cancel();
                    return Ok(None);
                }
                Some(answer) => answers.push(answer),
            }
        }

        let mut answers = answers.into_iter();
        let mut next = || answers.next().unwrap_or_default();
        form.title = next();
        form.description = next();
        form.location = next();
        if post_type == PostType::Found {
            form.current_location = next();
        }
        form.contact_info = next();
        form.image = Some(next()).filter(|image| !image.trim().is_empty());

        Ok(Some(form))
    }

    async fn import(&mut self, json: &str) -> AppResult<()> {
        let request: CreatePostRequest = serde_json::from_str(json)?;
        let submission = submission_from_request(request)?;

        self.session.choose_type(submission.post_type);
        let result = self.session.submit(submission).await;
        self.session.close_modal();

        let post = result?;
        self.print(&format!("Imported \"{}\".\n", post.title)).await?;
        self.show_feed().await
    }

    async fn show_feed(&mut self) -> AppResult<()> {
        let posts = self.session.visible_posts().await;
        let text = format!(
            "{}\n{}",
            render::header(&self.title, self.session.active_filter()),
            render::feed(&posts)
        );
        self.print(&text).await
    }

    async fn ask(&mut self, prompt: &str) -> AppResult<Option<String>> {
        self.print(&format!("{prompt}: ")).await?;
        let line = self.lines.next_line().await?;
        Ok(line.map(|l| l.trim().to_string()))
    }

    async fn print(&mut self, text: &str) -> AppResult<()> {
        self.out.write_all(text.as_bytes()).await?;
        self.out.flush().await?;
        Ok(())
    }
}
