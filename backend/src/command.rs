use std::fs;
use std::io::Write;
use std::path::{Path, PathBuf};

use foodify_core::api::RecipeApi;
use foodify_core::config::ClientConfig;
use foodify_core::form::{FormMode, LoginForm, RecipeForm};
use foodify_core::pagination::{Page, PageParams};
use foodify_core::session::{Session, SessionStore, TokenVerifier};
use foodify_core::ClientError;

use crate::error::CliError;
use crate::render;

#[derive(Debug, clap::Subcommand)]
pub enum Command {
    /// List recipes, one page at a time
    Recipes {
        #[arg(short, long, default_value_t = 1)]
        page: u64,
    },
    /// Show one recipe
    Recipe { id: i64 },
    /// List users, one page at a time
    Users {
        #[arg(short, long, default_value_t = 1)]
        page: u64,
    },
    /// Log in with a username or email address
    Login {
        identifier: String,
        #[arg(short, long, env = "FOODIFY_PASSWORD", hide_env_values = true)]
        password: String,
    },
    /// Forget the stored session
    Logout,
    /// Show the logged in user
    Whoami,
    /// Create a recipe from a JSON file
    Create {
        #[arg(short, long)]
        file: PathBuf,
    },
    /// Change a recipe, fields missing from the JSON file keep their value
    Update {
        id: i64,
        #[arg(short, long)]
        file: PathBuf,
    },
    /// Delete a recipe
    Delete { id: i64 },
}

pub struct Context<'a> {
    pub api: &'a dyn RecipeApi,
    pub store: SessionStore,
    pub config: ClientConfig,
}

impl Context<'_> {
    fn verifier(&self) -> Option<TokenVerifier> {
        self.config
            .token_secret
            .as_ref()
            .map(|s| TokenVerifier::new(s.as_bytes()))
    }

    /// Loads the stored session, dropping it when its token no longer verifies.
    fn session(&self) -> Result<Session, CliError> {
        let session = self.store.load()?.ok_or(CliError::NotLoggedIn)?;
        if let Some(verifier) = self.verifier() {
            if let Err(e) = session.verify(&verifier) {
                log::warn!("dropping session: {}", e);
                self.store.clear()?;
                return Err(CliError::SessionExpired);
            }
        }
        Ok(session)
    }

    fn expire_on_not_auth<T>(&self, r: Result<T, ClientError>) -> Result<T, CliError> {
        match r {
            Err(ClientError::NotAuth) => {
                self.store.clear()?;
                Err(CliError::SessionExpired)
            }
            r => Ok(r?),
        }
    }
}

fn read_form(path: &Path, base: RecipeForm) -> Result<RecipeForm, CliError> {
    let bad_file = |err| CliError::RecipeFile {
        path: path.to_path_buf(),
        err,
    };
    let data = fs::read_to_string(path)?;
    let patch = serde_json::from_str(&data).map_err(bad_file)?;
    base.overlay(patch).map_err(bad_file)
}

pub async fn run(cmd: Command, ctx: &Context<'_>, out: &mut dyn Write) -> Result<(), CliError> {
    match cmd {
        Command::Recipes { page } => {
            let recipes = ctx.api.all_recipes().await?;
            let page = Page::from_items(&recipes, PageParams::new(page, ctx.config.recipes_per_page));
            for r in &page.items {
                writeln!(out, "{}", render::recipe_card(r))?;
            }
            writeln!(out, "{}", render::pager_line(&page.pager))?;
        }
        Command::Recipe { id } => {
            let recipe = ctx.api.recipe(id).await?;
            writeln!(out, "{}", render::recipe_details(&recipe))?;
        }
        Command::Users { page } => {
            let users = ctx.api.all_users().await?;
            let page = Page::from_items(&users, PageParams::new(page, ctx.config.users_per_page));
            for u in &page.items {
                writeln!(out, "{}", render::user_card(u))?;
            }
            writeln!(out, "{}", render::pager_line(&page.pager))?;
        }
        Command::Login {
            identifier,
            password,
        } => {
            let session = ctx.api.login(&LoginForm::new(identifier, password)).await?;
            ctx.store.save(&session)?;
            writeln!(
                out,
                "Welcome, {} {}",
                session.user.first_name,
                session.user.last_name.as_deref().unwrap_or("")
            )?;
        }
        Command::Logout => {
            if ctx.store.clear()? {
                writeln!(out, "Logged out")?;
            } else {
                writeln!(out, "Not logged in")?;
            }
        }
        Command::Whoami => {
            let session = ctx.session()?;
            // the service has the last word on the token
            let user = ctx.expire_on_not_auth(ctx.api.me(&session).await)?;
            writeln!(
                out,
                "{} <{}> [{}]",
                user.full_name(),
                user.email.as_deref().unwrap_or(""),
                user.role
            )?;
        }
        Command::Create { file } => {
            let session = ctx.session()?;
            let payload = read_form(&file, RecipeForm::default())?.validate(FormMode::Create)?;
            let recipe = ctx.expire_on_not_auth(ctx.api.create_recipe(&session, &payload).await)?;
            writeln!(out, "Created recipe #{} {}", recipe.id, recipe.name)?;
        }
        Command::Update { id, file } => {
            let session = ctx.session()?;
            let current = ctx.api.recipe(id).await?;
            let payload = read_form(&file, RecipeForm::from(&current))?.validate(FormMode::Edit)?;
            let recipe =
                ctx.expire_on_not_auth(ctx.api.update_recipe(&session, id, &payload).await)?;
            writeln!(out, "Updated recipe #{} {}", recipe.id, recipe.name)?;
        }
        Command::Delete { id } => {
            let session = ctx.session()?;
            let deleted = ctx.expire_on_not_auth(ctx.api.delete_recipe(&session, id).await)?;
            writeln!(out, "Deleted recipe #{} {}", deleted.recipe.id, deleted.recipe.name)?;
        }
    }
    Ok(())
}
