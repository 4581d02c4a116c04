use std::path::PathBuf;
use std::process::ExitCode;

use anyhow::Result;
use clap::{Args, ValueEnum};
use folio_guard::protection::action;
use folio_guard::{
    Actor, Block, BlockProtection, Document, PermissionManager, PermissionResult, StaticActor,
};
use serde_json::json;

use super::read_json;

/// Exit code for a denied action
const DENIED: u8 = 2;

#[derive(Args)]
pub struct ActorArgs {
    /// Acting user id
    #[arg(long)]
    pub user: String,

    /// Act with admin privileges
    #[arg(long)]
    pub admin: bool,
}

impl ActorArgs {
    fn context(&self) -> StaticActor {
        StaticActor::from_actor(Actor::new(self.user.clone()), self.admin)
    }
}

#[derive(Args)]
pub struct AccessArgs {
    /// Document JSON file
    pub document: PathBuf,

    #[command(flatten)]
    pub actor: ActorArgs,

    /// Evaluate this user instead of the acting user
    #[arg(long)]
    pub subject: Option<String>,
}

#[derive(Args)]
pub struct BlockArgs {
    /// Document JSON file
    pub document: PathBuf,

    /// Block JSON file
    pub block: PathBuf,

    #[command(flatten)]
    pub actor: ActorArgs,

    /// Action to check
    #[arg(long, value_enum, default_value = "edit")]
    pub action: BlockAction,
}

#[derive(Clone, Copy, ValueEnum)]
pub enum BlockAction {
    Edit,
    Delete,
    Move,
    Duplicate,
}

pub fn run_access(args: AccessArgs) -> Result<ExitCode> {
    let document: Document = read_json(&args.document)?;
    let manager = PermissionManager::new(args.actor.context());

    let level = manager.access_level(&document, args.subject.as_deref());
    let report = match args.subject {
        Some(subject) => json!({ "user": subject, "level": level }),
        None => json!({
            "user": args.actor.user,
            "level": level,
            "capabilities": manager.capabilities(&document),
        }),
    };
    println!("{}", serde_json::to_string_pretty(&report)?);
    Ok(ExitCode::SUCCESS)
}

pub fn run_block(args: BlockArgs) -> Result<ExitCode> {
    let document: Document = read_json(&args.document)?;
    let block: Block = read_json(&args.block)?;
    let guard = BlockProtection::with_context(args.actor.context());

    let result: PermissionResult<()> = match args.action {
        BlockAction::Edit => guard.can_edit_block(&block, &document, action::EDIT),
        BlockAction::Delete => guard.can_delete_block(&block, &document),
        BlockAction::Move => guard.can_move_block(&block, &document),
        BlockAction::Duplicate => guard.can_duplicate_block(&block, &document),
    };

    match result {
        Ok(()) => {
            println!("allowed");
            Ok(ExitCode::SUCCESS)
        }
        Err(err) => {
            println!("{}", serde_json::to_string_pretty(&err)?);
            Ok(ExitCode::from(DENIED))
        }
    }
}
