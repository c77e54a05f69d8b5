//! `lightbnb user` - look up and create users

use std::io::Write;

use anyhow::{Context, Result};
use clap::{ArgGroup, Args, Parser, Subcommand};
use lightbnb_db::{DbError, NewUser, Store, User};
use tracing::info;

use super::emit;

#[derive(Parser, Debug)]
pub struct UserArgs {
    #[command(subcommand)]
    pub command: UserCommands,
}

#[derive(Subcommand, Debug)]
pub enum UserCommands {
    /// Show one user, by email (any case) or id
    Show(ShowArgs),
    /// Create a user; the password must already be hashed
    Add(AddArgs),
}

#[derive(Args, Debug)]
#[command(group(ArgGroup::new("key").required(true).args(["email", "id"])))]
pub struct ShowArgs {
    /// Email address to look up (case-insensitive)
    #[arg(long)]
    pub email: Option<String>,

    /// User id to look up
    #[arg(long)]
    pub id: Option<i32>,
}

#[derive(Args, Debug)]
pub struct AddArgs {
    /// Display name
    #[arg(long)]
    pub name: String,

    /// Email address (must be unique, ignoring case)
    #[arg(long)]
    pub email: String,

    /// Pre-hashed password, stored verbatim
    #[arg(long)]
    pub password_hash: String,
}

pub async fn run(args: UserArgs, store: &dyn Store, out: &mut dyn Write) -> Result<()> {
    match args.command {
        UserCommands::Show(show) => {
            let user = show_user(&show, store).await?;
            emit(out, &user)
        }
        UserCommands::Add(add) => {
            let new_user = NewUser::new(&add.name, &add.email, &add.password_hash)?;
            let user = store
                .add_user(&new_user)
                .await
                .context("Failed to add user")?;
            info!(id = user.id, "user created");
            emit(out, &user)
        }
    }
}

async fn show_user(show: &ShowArgs, store: &dyn Store) -> Result<User> {
    let user = match (&show.email, show.id) {
        (Some(email), _) => store
            .user_with_email(email)
            .await?
            .ok_or_else(|| DbError::not_found("user", email))?,
        (None, Some(id)) => store.require_user(id).await?,
        (None, None) => anyhow::bail!("pass --email or --id"),
    };
    Ok(user)
}
