
use std::path::PathBuf;
use std::time::Duration;

use clap::{Args, Parser, Subcommand};
use cli::api::{ApiClient, ApiError};
use desk::dashboard::DashboardStats;
use desk::editor::EditorDocument;
use desk::exams::{ExamDraft, SESSION1_SLOTS, SESSION2_SLOTS};
use desk::notify::{DraftError, ErrorCode, text};
use desk::session::{FormError, TopicForm};
use desk::tree::CategoryArena;
use schema::{
    CategoryCreate, CategoryUpdate, Id, MnemonicInput, TemplateCreate, TemplateUpdate, TopicCreate,
    TopicSearchType, TopicUpdate,
};
use serde::Serialize;

#[derive(Debug, thiserror::Error)]
enum CliError {
    #[error(transparent)]
    Api(#[from] ApiError),
    #[error("{0}")]
    Draft(#[from] DraftError),
    #[error("{0}")]
    Form(#[from] FormError),
    #[error("invalid input: {0}")]
    Invalid(String),
    #[error("restore overwrites topic {0}; pass --yes to confirm")]
    ConfirmationRequired(Id),
    #[error("failed to read {path}: {source}")]
    Read { path: PathBuf, source: std::io::Error },
    #[error("invalid JSON output: {0}")]
    Json(#[from] serde_json::Error),
}

impl ErrorCode for CliError {
    fn error_code(&self) -> &'static str {
        match self {
            Self::Api(err) => err.error_code(),
            Self::Draft(err) => err.error_code(),
            Self::Form(err) => err.error_code(),
            Self::Invalid(_) => "E_INVALID",
            Self::ConfirmationRequired(_) => "E_CONFIRMATION_REQUIRED",
            Self::Read { .. } => "E_READ",
            Self::Json(_) => "E_JSON",
        }
    }
}

#[derive(Parser, Debug)]
#[command(name = "studydesk-cli", about = "Study material admin CLI")]
struct Cli {
    #[arg(long, env = "STUDYDESK_BASE_URL", default_value = "http://127.0.0.1:8000")]
    base_url: String,

    #[arg(long, env = "STUDYDESK_TIMEOUT_SECS", default_value_t = 30)]
    timeout_secs: u64,

    /// Log each request to stderr.
    #[arg(long, short, default_value_t = false)]
    verbose: bool,

    #[command(subcommand)]
    command: Command,
}

#[derive(Subcommand, Debug)]
enum Command {
    Topic(TopicCommand),
    Category(CategoryCommand),
    Template(TemplateCommand),
    Exam(ExamCommand),
    /// Topic totals and per-category shares.
    Dashboard,
}

#[derive(Args, Debug)]
struct TopicCommand {
    #[command(subcommand)]
    command: TopicSubcommand,
}

#[derive(Args, Debug)]
struct TopicFields {
    #[arg(long)]
    category: Option<String>,
    #[arg(long, conflicts_with = "content_file")]
    content: Option<String>,
    #[arg(long)]
    content_file: Option<PathBuf>,
    #[arg(long = "keyword")]
    keywords: Vec<String>,
    /// `MNEMONIC=full text`, repeatable.
    #[arg(long = "mnemonic", value_parser = parse_mnemonic)]
    mnemonics: Vec<MnemonicInput>,
}

#[derive(Subcommand, Debug)]
enum TopicSubcommand {
    List {
        #[arg(long)]
        category: Option<String>,
    },
    Get {
        id: Id,
    },
    Search {
        query: String,
        #[arg(long = "type", default_value = "all", value_parser = parse_search_type)]
        search_type: TopicSearchType,
    },
    Create {
        #[arg(long)]
        title: String,
        #[command(flatten)]
        fields: TopicFields,
    },
    Update {
        id: Id,
        #[arg(long)]
        title: Option<String>,
        #[arg(long)]
        reason: Option<String>,
        #[command(flatten)]
        fields: TopicFields,
    },
    Delete {
        id: Id,
    },
    Versions {
        id: Id,
    },
    /// Overwrite a topic with one of its version snapshots.
    Restore {
        id: Id,
        version: i64,
        #[arg(long, default_value_t = false)]
        yes: bool,
    },
}

#[derive(Args, Debug)]
struct CategoryCommand {
    #[command(subcommand)]
    command: CategorySubcommand,
}

#[derive(Subcommand, Debug)]
enum CategorySubcommand {
    List {
        /// Print the nested tree instead of the flat list.
        #[arg(long, default_value_t = false)]
        tree: bool,
    },
    Create {
        #[arg(long)]
        name: String,
        #[arg(long)]
        description: Option<String>,
        #[arg(long)]
        parent: Option<Id>,
    },
    Update {
        id: Id,
        #[arg(long)]
        name: Option<String>,
        #[arg(long)]
        description: Option<String>,
        #[arg(long)]
        parent: Option<Id>,
    },
    Delete {
        id: Id,
    },
}

#[derive(Args, Debug)]
struct TemplateCommand {
    #[command(subcommand)]
    command: TemplateSubcommand,
}

#[derive(Subcommand, Debug)]
enum TemplateSubcommand {
    List {
        #[arg(long)]
        category: Option<String>,
    },
    Get {
        id: Id,
    },
    Create {
        #[arg(long)]
        name: String,
        #[arg(long)]
        description: Option<String>,
        #[arg(long)]
        category: Option<String>,
        #[arg(long, conflicts_with = "content_file")]
        content: Option<String>,
        #[arg(long)]
        content_file: Option<PathBuf>,
    },
    Update {
        id: Id,
        #[arg(long)]
        name: Option<String>,
        #[arg(long)]
        description: Option<String>,
        #[arg(long)]
        category: Option<String>,
        #[arg(long, conflicts_with = "content_file")]
        content: Option<String>,
        #[arg(long)]
        content_file: Option<PathBuf>,
    },
    Delete {
        id: Id,
    },
}

#[derive(Args, Debug)]
struct ExamCommand {
    #[command(subcommand)]
    command: ExamSubcommand,
}

#[derive(Subcommand, Debug)]
enum ExamSubcommand {
    List,
    Create {
        #[arg(long)]
        week: u32,
        #[arg(long)]
        category: Id,
        /// Session 1 short-answer question, repeatable.
        #[arg(long = "q1")]
        session1: Vec<String>,
        /// Session 2 essay question, repeatable.
        #[arg(long = "q2")]
        session2: Vec<String>,
    },
}

fn parse_search_type(raw: &str) -> Result<TopicSearchType, String> {
    TopicSearchType::parse(raw).ok_or_else(|| format!("unknown search type `{raw}` (all, title, keyword, mnemonic)"))
}

fn parse_mnemonic(raw: &str) -> Result<MnemonicInput, String> {
    let (mnemonic, full_text) = raw.split_once('=').ok_or_else(|| "expected MNEMONIC=full text".to_owned())?;
    Ok(MnemonicInput { mnemonic: mnemonic.trim().to_owned(), full_text: full_text.trim().to_owned() })
}

#[tokio::main]
async fn main() -> Result<(), CliError> {
    let cli = Cli::parse();
    if cli.verbose {
        tracing_subscriber::fmt().with_max_level(tracing::Level::DEBUG).with_writer(std::io::stderr).init();
    }
    let client = ApiClient::new(cli.base_url, Duration::from_secs(cli.timeout_secs))?;

    let result = match cli.command {
        Command::Topic(topic) => run_topic(&client, topic).await,
        Command::Category(category) => run_category(&client, category).await,
        Command::Template(template) => run_template(&client, template).await,
        Command::Exam(exam) => run_exam(&client, exam).await,
        Command::Dashboard => run_dashboard(&client).await,
    };
    result.inspect_err(|err| tracing::warn!(code = err.error_code(), %err, "command failed"))
}

fn read_content(inline: Option<String>, file: Option<PathBuf>) -> Result<Option<String>, CliError> {
    match (inline, file) {
        (Some(content), _) => Ok(Some(content)),
        (None, Some(path)) => std::fs::read_to_string(&path).map(Some).map_err(|source| CliError::Read { path, source }),
        (None, None) => Ok(None),
    }
}

async fn run_topic(client: &ApiClient, topic: TopicCommand) -> Result<(), CliError> {
    match topic.command {
        TopicSubcommand::List { category } => print_json(&client.list_topics(category.as_deref()).await?),
        TopicSubcommand::Get { id } => print_json(&client.get_topic(id).await?),
        TopicSubcommand::Search { query, search_type } => {
            let topics = if query.trim().is_empty() {
                client.list_topics(None).await?
            } else {
                client.search_topics(query.trim(), search_type).await?
            };
            print_json(&topics)
        }
        TopicSubcommand::Create { title, fields } => {
            let title = title.trim().to_owned();
            if title.is_empty() {
                return Err(CliError::Invalid("title must not be blank".to_owned()));
            }
            let keywords = TopicForm::collect_keywords(fields.keywords.iter().map(String::as_str))?;
            let payload = TopicCreate {
                title,
                category: fields.category,
                content: read_content(fields.content, fields.content_file)?,
                keywords,
                mnemonics: fields.mnemonics,
            };
            print_json(&client.create_topic(&payload).await?)
        }
        TopicSubcommand::Update { id, title, reason, fields } => {
            let keywords = TopicForm::collect_keywords(fields.keywords.iter().map(String::as_str))?;
            let payload = TopicUpdate {
                title,
                category: fields.category,
                content: read_content(fields.content, fields.content_file)?,
                keywords,
                mnemonics: fields.mnemonics,
                change_reason: reason,
            };
            print_json(&client.update_topic(id, &payload).await?)
        }
        TopicSubcommand::Delete { id } => {
            client.delete_topic(id).await?;
            eprintln!("{}", text::TOPIC_DELETED);
            Ok(())
        }
        TopicSubcommand::Versions { id } => print_json(&client.topic_versions(id).await?),
        TopicSubcommand::Restore { id, version, yes } => {
            if !yes {
                return Err(CliError::ConfirmationRequired(id));
            }
            let restored = client.restore_topic_version(id, version).await?;
            eprintln!("버전 {version}으로 복원되었습니다.");
            print_json(&restored)
        }
    }
}

async fn run_category(client: &ApiClient, category: CategoryCommand) -> Result<(), CliError> {
    match category.command {
        CategorySubcommand::List { tree: true } => print_json(&client.category_tree().await?),
        CategorySubcommand::List { tree: false } => print_json(&client.list_categories().await?),
        CategorySubcommand::Create { name, description, parent } => {
            let name = name.trim().to_owned();
            if name.is_empty() {
                return Err(CliError::Invalid("name must not be blank".to_owned()));
            }
            let payload = CategoryCreate { name, description, parent_id: parent };
            print_json(&client.create_category(&payload).await?)
        }
        CategorySubcommand::Update { id, name, description, parent } => {
            if parent == Some(id) {
                return Err(CliError::Invalid("a category cannot be its own parent".to_owned()));
            }
            let payload = CategoryUpdate { name, description, parent_id: parent };
            print_json(&client.update_category(id, &payload).await?)
        }
        CategorySubcommand::Delete { id } => {
            client.delete_category(id).await?;
            eprintln!("{}", text::CATEGORY_DELETED);
            Ok(())
        }
    }
}

async fn run_template(client: &ApiClient, template: TemplateCommand) -> Result<(), CliError> {
    match template.command {
        TemplateSubcommand::List { category } => print_json(&client.list_templates(category.as_deref()).await?),
        TemplateSubcommand::Get { id } => print_json(&client.get_template(id).await?),
        TemplateSubcommand::Create { name, description, category, content, content_file } => {
            let content = read_content(content, content_file)?.unwrap_or_default();
            if EditorDocument::load(content.as_str()).is_blank() {
                return Err(CliError::Invalid(text::TEMPLATE_CONTENT_REQUIRED.to_owned()));
            }
            let payload = TemplateCreate { name, description, content, category };
            print_json(&client.create_template(&payload).await?)
        }
        TemplateSubcommand::Update { id, name, description, category, content, content_file } => {
            let payload = TemplateUpdate { name, description, content: read_content(content, content_file)?, category };
            print_json(&client.update_template(id, &payload).await?)
        }
        TemplateSubcommand::Delete { id } => {
            client.delete_template(id).await?;
            eprintln!("{}", text::TEMPLATE_DELETED);
            Ok(())
        }
    }
}

/// Fill the fixed exam slots in order; extra questions are an error.
fn exam_draft(week: u32, category: Id, session1: Vec<String>, session2: Vec<String>) -> Result<ExamDraft, CliError> {
    if session1.len() > SESSION1_SLOTS || session2.len() > SESSION2_SLOTS {
        return Err(CliError::Invalid(format!(
            "at most {SESSION1_SLOTS} session 1 and {SESSION2_SLOTS} session 2 questions"
        )));
    }
    let mut draft = ExamDraft { week_number: week, category_id: Some(category), ..ExamDraft::default() };
    for (session, questions) in [(1, session1), (2, session2)] {
        for (index, question) in questions.into_iter().enumerate() {
            if let Some(slot) = draft.slot_mut(session, index) {
                *slot = question;
            }
        }
    }
    Ok(draft)
}

async fn run_exam(client: &ApiClient, exam: ExamCommand) -> Result<(), CliError> {
    match exam.command {
        ExamSubcommand::List => print_json(&client.list_weekly_exams().await?),
        ExamSubcommand::Create { week, category, session1, session2 } => {
            let payload = exam_draft(week, category, session1, session2)?.to_create()?;
            print_json(&client.create_weekly_exam(&payload).await?)
        }
    }
}

async fn run_dashboard(client: &ApiClient) -> Result<(), CliError> {
    let (topics, tree) = tokio::try_join!(client.list_topics(None), client.category_tree())?;
    let stats = DashboardStats::compute(&topics, &CategoryArena::from_nested(tree));
    print_json(&stats)
}

fn print_json(value: &impl Serialize) -> Result<(), CliError> {
    let rendered = serde_json::to_string_pretty(value)?;
    println!("{rendered}");
    Ok(())
}
