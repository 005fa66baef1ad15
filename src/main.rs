use anyhow::{Context, Result};
use azgroups::azure::{self, parse_resources, GenericResource, ResourceFormat};
use azgroups::commands::{clear_focus, focus_group};
use azgroups::config::Config;
use azgroups::resource::GroupBy;
use azgroups::tree::{focus_target, FocusState, GroupTree};
use azgroups::ui::TerminalPicker;
use clap::{Parser, Subcommand, ValueEnum};
use std::path::PathBuf;
use tokio::io::AsyncReadExt;
use tracing::Level;
use tracing_subscriber::fmt::writer::MakeWriterExt;

/// Explore Azure resources grouped by resource group, type, or location
#[derive(Parser, Debug)]
#[command(name = "azgroups", version, about, long_about = None)]
struct Args {
    /// Resource listing (`az resource list` JSON or YAML); stdin when omitted
    #[arg(short, long, global = true)]
    resources: Option<PathBuf>,

    /// Subscription id used to scope group ids; each resource's own by default
    #[arg(short, long, global = true)]
    subscription: Option<String>,

    /// Axis to group by
    #[arg(short, long, value_enum, global = true)]
    group_by: Option<GroupBy>,

    /// Settings file to use instead of the default one
    #[arg(long, global = true)]
    config: Option<PathBuf>,

    /// Log level for debugging
    #[arg(long, value_enum, default_value = "off", global = true)]
    log_level: LogLevel,

    #[command(subcommand)]
    command: Option<Command>,
}

#[derive(Subcommand, Debug)]
enum Command {
    /// Print the grouped tree, narrowed to the focused group if any
    Tree,
    /// Focus a group; opens a picker when no id is given
    Focus {
        group_id: Option<String>,
    },
    /// Show every group again
    ClearFocus,
    /// Remember the axis to group by
    #[command(name = "group-by")]
    SetGroupBy {
        #[arg(value_enum)]
        axis: GroupBy,
    },
    /// Print the group holding a resource
    Reveal {
        resource_id: String,
    },
}

#[derive(Debug, Clone, Copy, ValueEnum)]
enum LogLevel {
    Off,
    Error,
    Warn,
    Info,
    Debug,
    Trace,
}

impl LogLevel {
    fn to_tracing_level(self) -> Option<Level> {
        match self {
            LogLevel::Off => None,
            LogLevel::Error => Some(Level::ERROR),
            LogLevel::Warn => Some(Level::WARN),
            LogLevel::Info => Some(Level::INFO),
            LogLevel::Debug => Some(Level::DEBUG),
            LogLevel::Trace => Some(Level::TRACE),
        }
    }
}

fn setup_logging(level: LogLevel) -> Option<tracing_appender::non_blocking::WorkerGuard> {
    let tracing_level = level.to_tracing_level()?;

    let log_path = get_log_path();

    if let Some(parent) = log_path.parent() {
        let _ = std::fs::create_dir_all(parent);
    }

    let file = match std::fs::OpenOptions::new()
        .create(true)
        .append(true)
        .open(&log_path)
    {
        Ok(file) => file,
        Err(e) => {
            eprintln!("Failed to open log file {:?}: {}", log_path, e);
            return None;
        }
    };

    let (non_blocking, guard) = tracing_appender::non_blocking(file);

    tracing_subscriber::fmt()
        .with_max_level(tracing_level)
        .with_writer(non_blocking.with_max_level(tracing_level))
        .with_ansi(false)
        .with_target(true)
        .with_thread_ids(false)
        .with_file(true)
        .with_line_number(true)
        .init();

    tracing::info!("azgroups started with log level: {:?}", level);
    tracing::info!("Log file: {:?}", log_path);

    Some(guard)
}

fn get_log_path() -> PathBuf {
    if let Some(config_dir) = dirs::config_dir() {
        return config_dir.join("azgroups").join("azgroups.log");
    }
    if let Some(home) = dirs::home_dir() {
        return home.join(".azgroups").join("azgroups.log");
    }
    PathBuf::from("azgroups.log")
}

#[tokio::main]
async fn main() -> Result<()> {
    let args = Args::parse();

    let _log_guard = setup_logging(args.log_level);

    let mut config = match &args.config {
        Some(path) => Config::at(path),
        None => Config::load(),
    };
    let mut focus = FocusState::new(config.focused_group.clone());
    let axis = config.effective_group_by(args.group_by);

    match args.command.as_ref().unwrap_or(&Command::Tree) {
        Command::Tree => {
            let tree = build_tree(&args, axis).await?;
            print_tree(&tree, &focus);
        }
        Command::Focus { group_id } => {
            // An explicit id only needs the tree to pick up its label
            let tree = if group_id.is_none() || args.resources.is_some() {
                Some(build_tree(&args, axis).await?)
            } else {
                None
            };
            let group = group_id
                .as_deref()
                .map(|id| focus_target(tree.as_ref(), id, axis));
            let candidates = tree.map(|t| t.groups).unwrap_or_default();
            let mut picker = TerminalPicker::new(focus.focused_group_id().map(String::from));
            focus_group(&mut config, &mut focus, &mut picker, &candidates, group).await?;
            match focus.focused_group_id() {
                Some(id) => println!("Focused on {}", id),
                None => println!("No group focused"),
            }
        }
        Command::ClearFocus => {
            clear_focus(&mut config, &mut focus).await?;
            println!("Focus cleared");
        }
        Command::SetGroupBy { axis } => {
            config.set_group_by(*axis)?;
            println!("Grouping by {}", axis);
        }
        Command::Reveal { resource_id } => {
            let tree = build_tree(&args, axis).await?;
            match tree.find_group_for_resource(resource_id) {
                Some(group) => println!("{} > {}", group.key_label, group.label),
                None => anyhow::bail!("Resource not found: {}", resource_id),
            }
        }
    }

    Ok(())
}

async fn read_resources(args: &Args) -> Result<Vec<GenericResource>> {
    match &args.resources {
        Some(path) => azure::load_resources(path).await,
        None => {
            let mut content = String::new();
            tokio::io::stdin()
                .read_to_string(&mut content)
                .await
                .context("Failed to read resources from stdin")?;
            parse_resources(&content, ResourceFormat::Json)
        }
    }
}

async fn build_tree(args: &Args, axis: GroupBy) -> Result<GroupTree> {
    let resources = read_resources(args).await?;
    tracing::info!(
        "Using subscription: {:?}, grouping by {:?}",
        args.subscription,
        axis
    );

    let tree = GroupTree::build(&resources, args.subscription.as_deref(), axis);
    for err in &tree.errors {
        eprintln!("Error: {}", err);
    }
    Ok(tree)
}

fn print_tree(tree: &GroupTree, focus: &FocusState) {
    match focus.focused_group_id() {
        Some(id) => println!("{} (focused: {})", tree.axis, id),
        None => println!("{}", tree.axis),
    }

    for group in tree.visible_groups(focus) {
        let icon = group
            .icon
            .as_ref()
            .map(|i| format!(" [{}]", i.describe()))
            .unwrap_or_default();
        println!("  {}{} ({})", group.label, icon, group.resources.len());
        for resource in &group.resources {
            println!(
                "      {}  {}",
                resource.display_name(),
                resource.resource_type.as_deref().unwrap_or("unknown")
            );
        }
    }
}
